//! Loading legacy records and saving them as SGF.
//!
//! [`load`] picks a reader from the file extension, normalizes the root
//! (`FF`, `GM`, `CA`, `SZ`) and simulates the board through every branch.
//! [`save`] renders the complete text before touching the output file, so a
//! failed conversion never leaves a partial file behind.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::SHIFT_JIS;

use crate::constants::{CHARSET, DEFAULT_BOARD_SIZE, FILE_FORMAT, GAME_TYPE_GO, MAX_BOARD_SIZE};
use crate::error::{Error, Result};
use crate::formats::Format;
use crate::sgf::to_sgf;
use crate::tree::GameTree;

/// Read and convert the record at `path`.
///
/// # Errors
/// - `Error::UnknownFormat` if the extension is not a known record format
/// - `Error::Io` if the file cannot be read
/// - `Error::ParseFailure` if the reader rejects the contents
/// - `Error::BadBoardSize` if the board size is not an integer in 1..=19
pub fn load(path: &Path) -> Result<GameTree> {
    let format = Format::from_path(path)?;
    let bytes = fs::read(path).map_err(|source| Error::Io {
        operation: format!("read {}", path.display()),
        source,
    })?;
    let contents = decode(&bytes, format);
    load_str(&contents, format)
}

/// Decode raw record bytes. UGF files come from a Japanese server and are
/// Shift-JIS; everything else is read as UTF-8. Undecodable bytes are
/// replaced rather than rejected.
pub fn decode(bytes: &[u8], format: Format) -> Cow<'_, str> {
    match format {
        Format::Ugf => SHIFT_JIS.decode(bytes).0,
        Format::Gib | Format::Ngf => String::from_utf8_lossy(bytes),
    }
}

/// Convert in-memory record text of a known format.
pub fn load_str(contents: &str, format: Format) -> Result<GameTree> {
    let mut tree = format.parse(contents)?;
    let size = normalize_root(&mut tree)?;
    tree.simulate(size);
    Ok(tree)
}

/// Force the SGF header properties and return the board size.
///
/// A missing `SZ` defaults to 19 and is added to the root.
pub fn normalize_root(tree: &mut GameTree) -> Result<usize> {
    let root = tree.root_mut();
    root.set_value("FF", FILE_FORMAT);
    root.set_value("GM", GAME_TYPE_GO);
    root.set_value("CA", CHARSET);

    let Some(declared) = root.properties.first("SZ").map(str::to_string) else {
        root.set_value("SZ", DEFAULT_BOARD_SIZE);
        return Ok(DEFAULT_BOARD_SIZE);
    };
    match declared.trim().parse::<usize>() {
        Ok(size) if (1..=MAX_BOARD_SIZE).contains(&size) => Ok(size),
        _ => Err(Error::BadBoardSize { value: declared }),
    }
}

/// Where the converted record for `input` is written: `<input>.sgf`.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".sgf");
    PathBuf::from(name)
}

/// Write `tree` as SGF to `path`.
pub fn save(path: &Path, tree: &GameTree) -> Result<()> {
    let text = to_sgf(tree);
    fs::write(path, text).map_err(|source| Error::Io {
        operation: format!("write {}", path.display()),
        source,
    })
}

/// Load `input` and save it next to itself. Returns the output path.
pub fn convert_file(input: &Path) -> Result<PathBuf> {
    let tree = load(input)?;
    let output = output_path(input);
    save(&output, &tree)?;
    Ok(output)
}
