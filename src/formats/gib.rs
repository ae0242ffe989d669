//! Tygem `.gib` reader.
//!
//! The format is undocumented. Only two line types matter:
//!
//! ```text
//! INI 0 1 3 ...      handicap in the 4th field
//! STO 0 2 1 15 3     colour (1 = black) in the 4th, 0-based x and y after
//! ```
//!
//! Coordinates count from the top-left corner, like SGF.

use super::{Format, add_handicap_19, require_moves};
use crate::apply::point_to_sgf;
use crate::constants::MAX_HANDICAP;
use crate::error::{Error, Result};
use crate::tree::{GameTree, ROOT};

fn fail(reason: impl Into<String>) -> Error {
    Error::parse("GIB", reason)
}

fn int_field(fields: &[&str], i: usize) -> Result<Option<i64>> {
    match fields.get(i) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| fail(format!("bad number '{s}'"))),
    }
}

fn zero_based_point(x: i64, y: i64) -> Option<String> {
    let x = i32::try_from(x).ok()?.checked_add(1)?;
    let y = i32::try_from(y).ok()?.checked_add(1)?;
    point_to_sgf(x, y)
}

pub fn parse(gib: &str) -> Result<GameTree> {
    let mut tree = GameTree::new();
    let mut node = ROOT;

    for line in gib.lines().map(str::trim) {
        if line.starts_with("INI") {
            if node != ROOT {
                return Err(fail("INI line after the first move"));
            }
            let setup: Vec<&str> = line.split_whitespace().collect();
            let Some(handicap) = int_field(&setup, 3)? else {
                continue;
            };
            if !(0..=MAX_HANDICAP).contains(&handicap) {
                return Err(fail(format!("bad handicap {handicap}")));
            }
            if handicap >= 2 {
                add_handicap_19(tree.root_mut(), handicap);
            }
        }

        if line.starts_with("STO") {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let color = fields
                .get(3)
                .ok_or_else(|| fail("STO line without a colour"))?;
            let key = if *color == "1" { "B" } else { "W" };

            let (Some(x), Some(y)) = (int_field(&fields, 4)?, int_field(&fields, 5)?) else {
                continue;
            };
            let Some(value) = zero_based_point(x, y) else {
                continue;
            };

            node = tree.add_child(node);
            tree.node_mut(node).set_value(key, value);
        }
    }

    require_moves(tree, Format::Gib)
}
