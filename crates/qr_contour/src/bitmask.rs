//! Boolean cell grids consumed by the contour engine.
//!
//! [`CellGrid`] is the read-only accessor the engine traces. Reads outside the grid
//! return `false`, which lets the perimeter trace like any other boundary.
//! [`Bitmask`] is the owned row-major implementation used by tests and examples.
use crate::error::{Error, Result};

/// Read access to a rectangular grid of filled/unfilled cells.
pub trait CellGrid {
    /// Number of cells along X.
    fn width(&self) -> usize;

    /// Number of cells along Y.
    fn height(&self) -> usize;

    /// Returns whether the cell at `(x, y)` is filled, `false` when out of range.
    fn get(&self, x: i64, y: i64) -> bool;
}

/// Owned row-major bitmask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Bitmask {
    /// Create a new bitmask with every cell unfilled.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Wrap an existing row-major cell buffer.
    pub fn from_vec(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
        check_dims(width, height)?;
        let expected = width * height;
        if cells.len() != expected {
            return Err(Error::InvalidGrid(format!(
                "expected {expected} cells for {width}x{height}, got {}",
                cells.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a bitmask by evaluating `f(x, y)` for every cell.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self> {
        check_dims(width, height)?;
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse text rows. `#`, `1`, `X` and `x` are filled; `.`, `0` and space are unfilled.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        check_dims(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(Error::InvalidGrid(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let filled = match c {
                    '#' | '1' | 'X' | 'x' => true,
                    '.' | '0' | ' ' => false,
                    other => {
                        return Err(Error::InvalidGrid(format!(
                            "unexpected character '{other}' at ({x}, {y})"
                        )))
                    }
                };
                cells.push(filled);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Set the cell at `(x, y)`. Coordinates outside the grid are rejected, never clamped.
    pub fn set(&mut self, x: i64, y: i64, value: bool) -> Result<()> {
        let Some(i) = self.index(x, y) else {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        };
        self.cells[i] = value;
        Ok(())
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl CellGrid for Bitmask {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }
}

fn check_dims(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidGrid(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    if width.checked_mul(height).is_none() {
        return Err(Error::InvalidGrid(format!(
            "{width}x{height} overflows the cell count"
        )));
    }
    Ok(())
}
