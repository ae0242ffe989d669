//! Interpretation of move and setup properties against a board.
//!
//! The tree itself is format-agnostic; this module is the only place that
//! knows what `B`, `W`, `AB`, `AW` and `AE` mean.

use crate::board::{Board, Color, Point};
use crate::node::Properties;

/// Move properties, in the order they are applied.
const MOVERS: [(&str, Color); 2] = [("B", Color::Black), ("W", Color::White)];

/// Setup properties, in the order they are applied.
const ADDERS: [(&str, Option<Color>); 3] = [
    ("AB", Some(Color::Black)),
    ("AW", Some(Color::White)),
    ("AE", None),
];

/// Decode one SGF coordinate letter (`'a'` = 1).
fn decode_axis(ch: char) -> i32 {
    ch as i32 - 'a' as i32 + 1
}

/// Decode the first two characters of a move value, if there are two.
pub fn decode_point(s: &str) -> Option<(i32, i32)> {
    let mut chars = s.chars();
    let x = chars.next()?;
    let y = chars.next()?;
    Some((decode_axis(x), decode_axis(y)))
}

/// Encode a 1-based point as two SGF letters, e.g. `(16, 4)` -> `"pd"`.
///
/// Returns `None` outside `1..=26`.
pub fn point_to_sgf(x: i32, y: i32) -> Option<String> {
    let range = 1..=crate::constants::MAX_SGF_COORD;
    if !range.contains(&x) || !range.contains(&y) {
        return None;
    }
    let letter = |v: i32| char::from(b'a' + (v - 1) as u8);
    Some([letter(x), letter(y)].iter().collect())
}

/// Expand a point (`"dd"`) or rectangle (`"dd:pp"`) into on-board points.
///
/// The corners are the first and last two characters, which also covers
/// the single-point form. Corners may come in any order.
pub fn expand_range(s: &str, size: usize) -> Vec<Point> {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    if n < 2 {
        return Vec::new();
    }

    let (mut left, mut top) = (decode_axis(chars[0]), decode_axis(chars[1]));
    let (mut right, mut bottom) = (decode_axis(chars[n - 2]), decode_axis(chars[n - 1]));
    if left > right {
        std::mem::swap(&mut left, &mut right);
    }
    if top > bottom {
        std::mem::swap(&mut top, &mut bottom);
    }

    let lo = left.max(1);
    let hi = right.min(size as i32);
    let (y_lo, y_hi) = (top.max(1), bottom.min(size as i32));

    let mut points = Vec::new();
    for x in lo..=hi {
        for y in y_lo..=y_hi {
            points.push((x as usize, y as usize));
        }
    }
    points
}

/// Apply a node's properties to `board` and return how many moves it made.
///
/// Every `B`/`W` present counts as a move, even when its value is too short
/// or lands off the board (old records use that for a pass); such moves do
/// not touch the board. Setup stones are written directly, with no capture
/// checks, and points outside the board are dropped.
pub fn apply_properties(properties: &Properties, board: &mut Board) -> usize {
    let mut moves = 0;

    for (key, color) in MOVERS {
        if let Some(value) = properties.first(key) {
            if let Some((x, y)) = decode_point(value) {
                // Off-board means pass.
                let _ = board.place(color, x, y);
            }
            moves += 1;
        }
    }

    for (key, value) in ADDERS {
        if let Some(ranges) = properties.get(key) {
            for range in ranges {
                for (x, y) in expand_range(range, board.size) {
                    board.set(x, y, value);
                }
            }
        }
    }

    moves
}
