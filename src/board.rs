//! Square Go board with capture and suicide resolution.
//!
//! Coordinates are 1-based in both dimensions, matching SGF where `"aa"`
//! is `(1, 1)` in the top-left corner. The board is a plain value: cloning
//! it produces a fully independent copy, which is how game-tree branches
//! keep their own positions.

use std::fmt;

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// A 1-based `(x, y)` board coordinate.
pub type Point = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        (y - 1) * self.size + (x - 1)
    }

    pub fn on_board(&self, x: usize, y: usize) -> bool {
        (1..=self.size).contains(&x) && (1..=self.size).contains(&y)
    }

    /// Contents of a point; off-board points read as empty.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if !self.on_board(x, y) {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Force a point to a value without any capture logic.
    ///
    /// Used for setup stones (`AB`/`AW`/`AE`). Off-board points are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: Option<Color>) {
        if self.on_board(x, y) {
            let i = self.idx(x, y);
            self.cells[i] = value;
        }
    }

    fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if x > 1 {
            v.push((x - 1, y));
        }
        if x < s {
            v.push((x + 1, y));
        }
        if y > 1 {
            v.push((x, y - 1));
        }
        if y < s {
            v.push((x, y + 1));
        }
        v.into_iter()
    }

    /// Play a stone of `color` at `(x, y)`.
    ///
    /// Opposing neighbour groups left without a liberty are removed first;
    /// only then is the placed stone's own group checked, and removed if it
    /// has no liberty (suicide). The point does not have to be empty.
    ///
    /// # Errors
    /// - `Error::OffBoard` if either coordinate is outside `1..=size`
    pub fn place(&mut self, color: Color, x: i32, y: i32) -> Result<()> {
        let (px, py) = match (usize::try_from(x), usize::try_from(y)) {
            (Ok(px), Ok(py)) if self.on_board(px, py) => (px, py),
            _ => return Err(Error::OffBoard { x, y }),
        };

        let idx = self.idx(px, py);
        self.cells[idx] = Some(color);

        let opp = color.opponent();
        let adjacent: Vec<Point> = self.neighbors(px, py).collect();
        for (nx, ny) in adjacent {
            if self.get(nx, ny) == Some(opp) && !self.group_has_liberty(nx, ny) {
                self.remove_group(nx, ny);
            }
        }

        if !self.group_has_liberty(px, py) {
            self.remove_group(px, py);
        }
        Ok(())
    }

    /// Whether the group containing `(x, y)` touches at least one empty point.
    ///
    /// Returns false for an empty or off-board starting point.
    pub fn group_has_liberty(&self, x: usize, y: usize) -> bool {
        let Some(color) = self.get(x, y) else {
            return false;
        };
        let mut stack = vec![(x, y)];
        let mut visited = vec![false; self.size * self.size];
        visited[self.idx(x, y)] = true;

        while let Some((cx, cy)) = stack.pop() {
            for (nx, ny) in self.neighbors(cx, cy) {
                match self.get(nx, ny) {
                    None => return true,
                    Some(c) if c == color => {
                        let ni = self.idx(nx, ny);
                        if !visited[ni] {
                            visited[ni] = true;
                            stack.push((nx, ny));
                        }
                    }
                    _ => {}
                }
            }
        }
        false
    }

    /// Remove the whole group containing `(x, y)`. Returns the number of
    /// stones removed.
    pub fn remove_group(&mut self, x: usize, y: usize) -> usize {
        let Some(color) = self.get(x, y) else {
            return 0;
        };
        let mut stack = vec![(x, y)];
        let mut removed = 0;

        while let Some((cx, cy)) = stack.pop() {
            if self.get(cx, cy) != Some(color) {
                continue;
            }
            let i = self.idx(cx, cy);
            self.cells[i] = None;
            removed += 1;
            for (nx, ny) in self.neighbors(cx, cy) {
                if self.get(nx, ny) == Some(color) {
                    stack.push((nx, ny));
                }
            }
        }
        removed
    }

    /// Number of stones of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 1..=self.size {
            for x in 1..=self.size {
                let ch = match self.get(x, y) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
