//! PandaNet `.ugf` / `.ugi` reader.
//!
//! The file is split into `[SECTION]` blocks. `[Header]` carries
//! `KEY=value` lines; `[Data]` carries one move per line:
//!
//! ```text
//! QD,B1,1,0
//! ```
//!
//! Coordinates use `'A'` for 1. With `CoordinateType=IGS` the y axis counts
//! from the bottom. Any off-board coordinate (often `YA`) is a pass. Black
//! stones numbered 0 before the first real move are handicap stones.
//!
//! See <http://homepages.cwi.nl/~aeb/go/misc/ugf.html>.

use super::{Format, require_moves};
use crate::apply::point_to_sgf;
use crate::constants::MAX_BOARD_SIZE;
use crate::error::{Error, Result};
use crate::tree::{GameTree, ROOT};

fn fail(reason: impl Into<String>) -> Error {
    Error::parse("UGF", reason)
}

/// The text after `key` if `line` starts with it, ignoring ASCII case.
fn header_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let head = line.get(..key.len())?;
    head.eq_ignore_ascii_case(key).then(|| &line[key.len()..])
}

/// Komi as written by a float formatter that always keeps a decimal.
fn format_komi(komi: f64) -> String {
    if komi.fract() == 0.0 {
        format!("{komi:.1}")
    } else {
        komi.to_string()
    }
}

#[derive(Default)]
struct Header {
    boardsize: Option<i64>,
    handicap: Option<i64>,
    igs_coordinates: bool,
}

fn read_header_line(tree: &mut GameTree, header: &mut Header, line: &str) {
    let root = tree.root_mut();

    if let Some(value) = header_value(line, "HDCP=") {
        let mut parts = value.split(',');
        let Some(Ok(handicap)) = parts.next().map(|h| h.trim().parse::<i64>()) else {
            return;
        };
        header.handicap = Some(handicap);
        if handicap >= 2 {
            root.set_value("HA", handicap);
        }
        if let Some(Ok(komi)) = parts.next().map(|k| k.trim().parse::<f64>()) {
            root.set_value("KM", format_komi(komi));
        }
    } else if let Some(value) = header_value(line, "SIZE=") {
        if let Ok(size) = value.trim().parse::<i64>() {
            header.boardsize = Some(size);
            root.set_value("SZ", size);
        }
    } else if let Some(value) = header_value(line, "COORDINATETYPE=") {
        header.igs_coordinates = value.eq_ignore_ascii_case("IGS");
    } else if let Some(value) = header_value(line, "PLAYERB=") {
        root.commit_text("PB", value);
    } else if let Some(value) = header_value(line, "PLAYERW=") {
        root.commit_text("PW", value);
    } else if let Some(value) = header_value(line, "PLACE=") {
        root.commit_text("PC", value);
    } else if let Some(value) = header_value(line, "TITLE=") {
        root.commit_text("GN", value);
    } else if header_value(line, "WINNER=B").is_some() {
        root.set_value("RE", "B+");
    } else if header_value(line, "WINNER=W").is_some() {
        root.set_value("RE", "W+");
    }
}

pub fn parse(ugf: &str) -> Result<GameTree> {
    let mut tree = GameTree::new();
    let mut node = ROOT;
    let mut header = Header::default();
    let mut handicap_stones_set = 0;
    let mut section = String::new();

    for line in ugf.split('\n').map(str::trim) {
        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            section = line.to_uppercase();
            if section == "[DATA]" {
                let (Some(size), Some(handicap)) = (header.boardsize, header.handicap) else {
                    return Err(fail("data section before size and handicap"));
                };
                if !(1..=MAX_BOARD_SIZE as i64).contains(&size) || handicap < 0 {
                    return Err(fail(format!("bad size {size} or handicap {handicap}")));
                }
            }
            continue;
        }

        match section.as_str() {
            "[HEADER]" => read_header_line(&mut tree, &mut header, line),
            "[DATA]" => {
                // Checked when the section was entered.
                let (Some(size), Some(handicap)) = (header.boardsize, header.handicap) else {
                    continue;
                };
                let line = line.to_uppercase();
                let fields: Vec<Vec<char>> = line.split(',').map(|f| f.chars().collect()).collect();

                let (Some(&x_chr), Some(&y_chr), Some(&colour)) = (
                    fields[0].first(),
                    fields[0].get(1),
                    fields.get(1).and_then(|f| f.first()),
                ) else {
                    continue;
                };
                let node_zero = fields.get(2).and_then(|f| f.first()) == Some(&'0');

                let key = match colour {
                    'B' => "B",
                    'W' => "W",
                    _ => continue,
                };

                let size = size as i32;
                let x = x_chr as i32 - 'A' as i32 + 1;
                let mut y = y_chr as i32 - 'A' as i32 + 1;
                if header.igs_coordinates {
                    y = size - y + 1;
                }

                let value = if !(1..=size).contains(&x) || !(1..=size).contains(&y) {
                    String::new()
                } else {
                    match point_to_sgf(x, y) {
                        Some(v) => v,
                        None => continue,
                    }
                };

                if handicap >= 2
                    && handicap_stones_set != handicap
                    && node_zero
                    && key == "B"
                    && node == ROOT
                {
                    handicap_stones_set += 1;
                    tree.root_mut().add_value("AB", value);
                } else {
                    node = tree.add_child(node);
                    tree.node_mut(node).set_value(key, value);
                }
            }
            _ => {}
        }
    }

    require_moves(tree, Format::Ugf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sgf::to_sgf;

    const SIMPLE: &str = "\
[Header]
Lang=JP
Title=Friendly game
Place=PandaNet
PlayerB=Kato,5d,,
PlayerW=Sato,4d,,
Winner=W,5.5
Hdcp=0,6.5
Size=19
CoordinateType=TRUE
[Data]
PD,B1,1,0
DP,W2,2,0
";

    #[test]
    fn test_simple() {
        let tree = parse(SIMPLE).unwrap();
        assert_eq!(
            to_sgf(&tree),
            "(;GN[Friendly game]PC[PandaNet]PB[Kato,5d,,]PW[Sato,4d,,]RE[W+]KM[6.5]SZ[19];B[pd];W[dp])\n"
        );
    }

    #[test]
    fn test_crlf_and_escaping() {
        let text = "[Header]\r\nTitle=a]b\r\nPlayerB=\r\nSize=9\r\nHdcp=0,6\r\n[Data]\r\nCC,B1,1,0\r\n";
        let tree = parse(text).unwrap();
        let root = &tree.root().properties;
        assert_eq!(root.first("GN"), Some("a\\]b"));
        assert!(!root.contains_key("PB"));
        assert_eq!(root.first("KM"), Some("6.0"));
        assert_eq!(tree.node(1).properties.first("B"), Some("cc"));
    }

    #[test]
    fn test_igs_coordinates() {
        let text = "[Header]\nSize=19\nHdcp=0,0.5\nCoordinateType=IGS\n[Data]\nAA,B1,1,0\nDP,W2,2,0\n";
        let tree = parse(text).unwrap();
        assert_eq!(tree.node(1).properties.first("B"), Some("as"));
        assert_eq!(tree.node(2).properties.first("W"), Some("dd"));
    }

    #[test]
    fn test_pass() {
        let text = "[Header]\nSize=19\nHdcp=0,0\n[Data]\nYA,B1,1,0\nAA,W2,2,0\n";
        let tree = parse(text).unwrap();
        assert_eq!(tree.node(1).properties.first("B"), Some(""));
        assert_eq!(tree.node(2).properties.first("W"), Some("aa"));
    }

    #[test]
    fn test_handicap_stones() {
        let text = "[Header]\nSize=19\nHdcp=2,0.5\n[Data]\nPD,B1,0,0\nDP,B1,0,0\nQQ,W1,1,0\nDD,B2,2,0\n";
        let tree = parse(text).unwrap();
        let root = &tree.root().properties;
        assert_eq!(root.first("HA"), Some("2"));
        assert_eq!(root.get("AB").unwrap(), ["pd", "dp"]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.node(1).properties.first("W"), Some("qq"));
    }

    #[test]
    fn test_extra_node_zero_black_becomes_move() {
        let text = "[Header]\nSize=19\nHdcp=2,0.5\n[Data]\nPD,B1,0,0\nDP,B1,0,0\nDD,B1,0,0\n";
        let tree = parse(text).unwrap();
        assert_eq!(tree.root().properties.get("AB").unwrap().len(), 2);
        assert_eq!(tree.node(1).properties.first("B"), Some("dd"));
    }

    #[test]
    fn test_junk_data_lines_skipped() {
        let text = "[Header]\nSize=9\nHdcp=0,0\n[Data]\n\nX\nCC\nCC,X1,1\nCC,W1,1\n";
        let tree = parse(text).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.node(1).properties.first("W"), Some("cc"));
    }

    #[test]
    fn test_bad_header_values_ignored() {
        let text = "[Header]\nSize=big\nSize=13\nHdcp=x,0\nHdcp=0,y\n[Data]\nAA,B1,1,0\n";
        let tree = parse(text).unwrap();
        let root = &tree.root().properties;
        assert_eq!(root.first("SZ"), Some("13"));
        assert!(!root.contains_key("KM"));
    }

    #[test]
    fn test_failures() {
        assert!(parse("").is_err());
        // No handicap before the data section.
        assert!(parse("[Header]\nSize=19\n[Data]\nAA,B1,1,0\n").is_err());
        assert!(parse("[Header]\nSize=25\nHdcp=0,0\n[Data]\nAA,B1,1,0\n").is_err());
        assert!(parse("[Header]\nSize=19\nHdcp=-1,0\n[Data]\nAA,B1,1,0\n").is_err());
        assert!(matches!(
            parse("[Header]\nSize=19\nHdcp=0,0\n[Data]\n"),
            Err(Error::ParseFailure { .. })
        ));
    }
}
