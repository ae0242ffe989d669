//! WBaduk / Cyberoro `.ngf` reader.
//!
//! A fixed header gives the board size on line 2 and the handicap on
//! line 6. Moves look like `PMAIBPD..` where the fifth character is the
//! colour and the next two are x and y counted from the top left, with
//! `'B'` meaning 1.
//!
//! The header board size is written to the root as `SZ`, so small-board
//! games are not mistaken for 19x19 ones.

use super::{Format, add_handicap_19, require_moves};
use crate::apply::point_to_sgf;
use crate::constants::{MAX_BOARD_SIZE, MAX_HANDICAP};
use crate::error::{Error, Result};
use crate::tree::{GameTree, ROOT};

fn fail(reason: impl Into<String>) -> Error {
    Error::parse("NGF", reason)
}

fn header_int(lines: &[&str], i: usize, what: &str) -> Result<i64> {
    let line = lines
        .get(i)
        .ok_or_else(|| fail(format!("missing {what}")))?;
    line.trim()
        .parse()
        .map_err(|_| fail(format!("bad {what} '{}'", line.trim())))
}

fn decode_axis(ch: char) -> i32 {
    ch as i32 - 'A' as i32
}

pub fn parse(ngf: &str) -> Result<GameTree> {
    let lines: Vec<&str> = ngf.trim().split('\n').collect();

    let boardsize = header_int(&lines, 1, "board size")?;
    let handicap = header_int(&lines, 5, "handicap")?;

    if !(1..=MAX_BOARD_SIZE as i64).contains(&boardsize) {
        return Err(fail(format!("bad board size {boardsize}")));
    }
    if !(0..=MAX_HANDICAP).contains(&handicap) {
        return Err(fail(format!("bad handicap {handicap}")));
    }
    if boardsize != 19 && handicap >= 2 {
        return Err(fail("handicap stones are only known for 19x19"));
    }

    let mut tree = GameTree::new();
    tree.root_mut().set_value("SZ", boardsize);
    if handicap >= 2 {
        add_handicap_19(tree.root_mut(), handicap);
    }

    let mut node = ROOT;
    for line in &lines {
        let chars: Vec<char> = line.trim().to_uppercase().chars().collect();
        if chars.len() < 7 || chars[0] != 'P' || chars[1] != 'M' {
            continue;
        }
        let key = match chars[4] {
            'B' => "B",
            'W' => "W",
            _ => continue,
        };
        let Some(value) = point_to_sgf(decode_axis(chars[5]), decode_axis(chars[6])) else {
            continue;
        };
        node = tree.add_child(node);
        tree.node_mut(node).set_value(key, value);
    }

    require_moves(tree, Format::Ngf)
}
