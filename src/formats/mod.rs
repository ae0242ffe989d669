//! Readers for the legacy record formats.
//!
//! Each reader turns a whole file into a [`GameTree`] holding SGF
//! properties only; no board is attached. Readers fail with
//! [`Error::ParseFailure`] when the record yields no moves at all.
//!
//! - [`gib`] - Tygem `.gib`
//! - [`ngf`] - WBaduk / Cyberoro `.ngf`
//! - [`ugf`] - PandaNet `.ugf` / `.ugi`

pub mod gib;
pub mod ngf;
pub mod ugf;

use std::fmt;
use std::path::Path;

use crate::apply::point_to_sgf;
use crate::constants::handicap_points_19;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::tree::GameTree;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    Gib,
    Ngf,
    Ugf,
}

impl Format {
    /// Detect the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Format> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("gib") => Ok(Format::Gib),
            Some("ngf") => Ok(Format::Ngf),
            Some("ugf") | Some("ugi") => Ok(Format::Ugf),
            _ => Err(Error::UnknownFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Run this format's reader over `text`.
    pub fn parse(self, text: &str) -> Result<GameTree> {
        match self {
            Format::Gib => gib::parse(text),
            Format::Ngf => ngf::parse(text),
            Format::Ugf => ugf::parse(text),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Gib => "GIB",
            Format::Ngf => "NGF",
            Format::Ugf => "UGF",
        };
        f.write_str(name)
    }
}

/// Record `HA` and the standard 19x19 handicap stones on `root`.
fn add_handicap_19(root: &mut Node, handicap: i64) {
    root.set_value("HA", handicap);
    for &(x, y) in handicap_points_19(handicap) {
        if let Some(point) = point_to_sgf(x as i32, y as i32) {
            root.add_value("AB", point);
        }
    }
}

/// Reject a tree that never got past its root.
fn require_moves(tree: GameTree, format: Format) -> Result<GameTree> {
    if tree.root().children.is_empty() {
        return Err(Error::parse(&format.to_string(), "no moves found"));
    }
    Ok(tree)
}
