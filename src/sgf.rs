//! SGF text output, plus a small reader for the same subset.
//!
//! ## Output layout
//!
//! ```text
//! (;FF[4]GM[1]SZ[19];B[pd];W[dp](;B[pp])
//! (;B[dd])
//! )
//! ```
//!
//! A run of single children is written as one `;`-chain. A node with two
//! or more children ends its chain and every child becomes its own
//! parenthesised variation. Every closing `)` is followed by a newline.
//!
//! Property values are written verbatim: they must already be escaped
//! (see [`crate::node::escape_text`]).

use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::node::NodeId;
use crate::tree::{GameTree, ROOT};

/// Render the whole tree as SGF text.
pub fn to_sgf(tree: &GameTree) -> String {
    let mut out = String::new();
    render(&mut out, tree, ROOT);
    out
}

/// Write the whole tree as SGF text to `out`.
pub fn write_tree<W: Write>(out: &mut W, tree: &GameTree) -> io::Result<()> {
    out.write_all(to_sgf(tree).as_bytes())
}

fn render(out: &mut String, tree: &GameTree, start: NodeId) {
    out.push('(');
    let mut id = start;
    loop {
        let node = tree.node(id);
        out.push(';');
        for (key, values) in node.properties.iter() {
            out.push_str(key);
            for value in values {
                out.push('[');
                out.push_str(value);
                out.push(']');
            }
        }
        match node.children.as_slice() {
            [] => break,
            [only] => id = *only,
            children => {
                for &child in children {
                    render(out, tree, child);
                }
                break;
            }
        }
    }
    out.push_str(")\n");
}

/// Parse the first game tree of an SGF document.
///
/// Values are stored exactly as they appear between the brackets, escapes
/// included, so writing the tree back reproduces them. Property keys keep
/// only their uppercase letters (old files spell `AddBlack` for `AB`).
/// Board state is not computed; call [`GameTree::simulate`] for that.
pub fn parse(text: &str) -> Result<GameTree> {
    let mut tree = GameTree::new();
    let mut chars = text.chars().peekable();

    let mut root_used = false;
    // Node new nodes attach to; `None` until the root exists.
    let mut current: Option<NodeId> = None;
    // Whether a property may follow (we are inside a node).
    let mut in_node = false;
    let mut open: Vec<Option<NodeId>> = Vec::new();
    let mut started = false;

    while let Some(&ch) = chars.peek() {
        if !started && ch != '(' {
            // Skip any junk before the first game tree.
            chars.next();
            continue;
        }
        match ch {
            '(' => {
                chars.next();
                open.push(current);
                started = true;
                in_node = false;
            }
            ')' => {
                chars.next();
                current = open.pop().ok_or_else(|| sgf_error("unbalanced ')'"))?;
                in_node = false;
                if open.is_empty() {
                    break;
                }
            }
            ';' => {
                chars.next();
                if open.is_empty() {
                    return Err(sgf_error("node outside of a game tree"));
                }
                let id = match current {
                    Some(parent) => tree.add_child(parent),
                    None if !root_used => {
                        root_used = true;
                        ROOT
                    }
                    None => return Err(sgf_error("second root node")),
                };
                current = Some(id);
                in_node = true;
            }
            c if c.is_ascii_alphabetic() => {
                let id = match (in_node, current) {
                    (true, Some(id)) => id,
                    _ => return Err(sgf_error("property outside of a node")),
                };
                let mut key = String::new();
                while let Some(&c) = chars.peek() {
                    if !c.is_ascii_alphabetic() {
                        break;
                    }
                    if c.is_ascii_uppercase() {
                        key.push(c);
                    }
                    chars.next();
                }
                if key.is_empty() {
                    return Err(sgf_error("property name has no uppercase letters"));
                }
                let mut found_value = false;
                loop {
                    while chars.peek().is_some_and(|c| c.is_whitespace()) {
                        chars.next();
                    }
                    if chars.peek() != Some(&'[') {
                        break;
                    }
                    chars.next();
                    let value = read_value(&mut chars)?;
                    tree.node_mut(id).add_value(&key, value);
                    found_value = true;
                }
                if !found_value {
                    return Err(sgf_error(format!("property '{key}' has no value")));
                }
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            c => return Err(sgf_error(format!("unexpected character '{c}'"))),
        }
    }

    if !open.is_empty() {
        return Err(sgf_error("unterminated game tree"));
    }
    if !root_used {
        return Err(sgf_error("no game tree found"));
    }
    Ok(tree)
}

/// Read a bracketed value up to its unescaped `]`, keeping escapes.
fn read_value(chars: &mut impl Iterator<Item = char>) -> Result<String> {
    let mut value = String::new();
    while let Some(c) = chars.next() {
        match c {
            ']' => return Ok(value),
            '\\' => {
                value.push('\\');
                let escaped = chars.next().ok_or_else(|| sgf_error("unterminated value"))?;
                value.push(escaped);
            }
            _ => value.push(c),
        }
    }
    Err(sgf_error("unterminated value"))
}

fn sgf_error(reason: impl Into<String>) -> Error {
    Error::parse("SGF", reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(moves: &[(&str, &str)]) -> GameTree {
        let mut tree = GameTree::new();
        tree.root_mut().set_value("SZ", 19);
        let mut id = ROOT;
        for (key, value) in moves {
            id = tree.add_child(id);
            tree.node_mut(id).set_value(key, value);
        }
        tree
    }

    #[test]
    fn test_single_node() {
        let tree = linear(&[]);
        assert_eq!(to_sgf(&tree), "(;SZ[19])\n");
    }

    #[test]
    fn test_linear_chain() {
        let tree = linear(&[("B", "pd"), ("W", "dp")]);
        assert_eq!(to_sgf(&tree), "(;SZ[19];B[pd];W[dp])\n");
    }

    #[test]
    fn test_multiple_values() {
        let mut tree = GameTree::new();
        tree.root_mut().add_value("AB", "pd");
        tree.root_mut().add_value("AB", "dp");
        tree.root_mut().set_value("HA", 2);
        assert_eq!(to_sgf(&tree), "(;AB[pd][dp]HA[2])\n");
    }

    #[test]
    fn test_variations() {
        let mut tree = linear(&[("B", "pd")]);
        let a = tree.add_child(1);
        tree.node_mut(a).set_value("W", "dd");
        let a2 = tree.add_child(a);
        tree.node_mut(a2).set_value("B", "pp");
        let b = tree.add_child(1);
        tree.node_mut(b).set_value("W", "dp");
        assert_eq!(
            to_sgf(&tree),
            "(;SZ[19];B[pd](;W[dd];B[pp])\n(;W[dp])\n)\n"
        );
    }

    #[test]
    fn test_variations_at_root() {
        let mut tree = GameTree::new();
        let a = tree.add_child(ROOT);
        tree.node_mut(a).set_value("B", "aa");
        let b = tree.add_child(ROOT);
        tree.node_mut(b).set_value("B", "bb");
        assert_eq!(to_sgf(&tree), "(;(;B[aa])\n(;B[bb])\n)\n");
    }

    #[test]
    fn test_escaped_values_written_verbatim() {
        let mut tree = GameTree::new();
        tree.root_mut().commit_text("C", "a]b\\c");
        assert_eq!(to_sgf(&tree), "(;C[a\\]b\\\\c])\n");
    }

    #[test]
    fn test_write_tree() {
        let tree = linear(&[("B", "aa")]);
        let mut buf = Vec::new();
        write_tree(&mut buf, &tree).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_sgf(&tree));
    }

    #[test]
    fn test_roundtrip_linear() {
        let mut tree = linear(&[("B", "pd"), ("W", ""), ("B", "dd")]);
        tree.root_mut().commit_text("GN", "Title [with] brackets\\");
        tree.root_mut().add_value("AB", "aa");
        tree.root_mut().add_value("AB", "bb");
        let text = to_sgf(&tree);

        let parsed = parse(&text).unwrap();
        assert_eq!(parsed.len(), tree.len());
        let original_line = tree.main_line();
        let parsed_line = parsed.main_line();
        assert_eq!(parsed_line.len(), original_line.len());
        for (a, b) in original_line.iter().zip(&parsed_line) {
            assert_eq!(tree.node(*a).properties, parsed.node(*b).properties);
        }
        assert_eq!(to_sgf(&parsed), text);
    }

    #[test]
    fn test_parse_variations() {
        let text = "(;SZ[9];B[aa](;W[bb];B[cc])(;W[dd]))";
        let tree = parse(text).unwrap();
        assert_eq!(tree.len(), 5);
        let first = tree.root().children[0];
        assert_eq!(tree.node(first).children.len(), 2);
        assert_eq!(tree.main_line().len(), 4);
        assert_eq!(
            to_sgf(&tree),
            "(;SZ[9];B[aa](;W[bb];B[cc])\n(;W[dd])\n)\n"
        );
    }

    #[test]
    fn test_parse_whitespace_and_lowercase_keys() {
        let text = "  (\n;\n AddBlack [aa]\n [bb] ; W[cc]\n)\n";
        let tree = parse(text).unwrap();
        assert_eq!(tree.root().properties.get("AB").unwrap(), ["aa", "bb"]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_parse_stops_after_first_tree() {
        let tree = parse("(;B[aa])(;B[bb])").unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root().properties.first("B"), Some("aa"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(""), Err(Error::ParseFailure { .. })));
        assert!(parse("(;B[aa]").is_err());
        assert!(parse("(;B[aa").is_err());
        assert!(parse("(;B)").is_err());
        assert!(parse("(B[aa])").is_err());
        assert!(parse("(;B[aa]!)").is_err());
        assert!(matches!(parse("(;b[aa])"), Err(Error::ParseFailure { .. })));
        assert!(parse("(;B[aa];add[bb])").is_err());
    }
}
