//! Character grids and the column-major "matrix script" decoder.

use std::fmt::Display;
use std::ops::{Index, IndexMut};

use tracing::debug;

use crate::error::{Error, Result};
use crate::io::InputStream;
use crate::slice_utils::SliceExt;

/// Row-major grid with `w` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    pub w: usize,
    pub data: Vec<T>,
}

impl<T> Grid<T> {
    pub fn with_shape(self, w: usize) -> Self {
        debug_assert!(w == 0 && self.data.is_empty() || w > 0 && self.data.len() % w == 0);
        Grid { w, data: self.data }
    }

    pub fn h(&self) -> usize {
        if self.w == 0 {
            0
        } else {
            self.data.len() / self.w
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.w.max(1))
    }

    /// Cells top to bottom, starting from the leftmost column.
    pub fn column_major(&self) -> impl Iterator<Item = &T> + '_ {
        let h = self.h();
        (0..self.w).flat_map(move |j| (0..h).map(move |i| &self[(i, j)]))
    }
}

impl<T> FromIterator<T> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            w: 1,
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                cell.fmt(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.h() && j < self.w);
        &self.data[i * self.w + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.h() && j < self.w);
        &mut self.data[i * self.w + j]
    }
}

/// Reads `N M` followed by `N` rows of `M` characters.
///
/// Short rows are padded with spaces (trailing blanks tend to get stripped
/// on the way in), long rows are cut at `M`. All rows are read before the
/// grid is allocated, so a header larger than the input fails with
/// `MissingRows` instead of sizing the grid from it.
pub fn parse_script(input: &mut impl InputStream) -> Result<Grid<char>> {
    let (h, w): (usize, usize) = {
        let mut header = input.line().ok_or(Error::UnexpectedEof)?;
        (header.value()?, header.value()?)
    };
    debug!(h, w, "reading matrix script");

    let mut rows: Vec<Vec<char>> = Vec::new();
    for i in 0..h {
        let row = input.text_line().map_err(|err| match err {
            Error::UnexpectedEof => Error::MissingRows {
                expected: h,
                found: i,
            },
            err => err,
        })?;
        rows.push(row.chars().take(w).collect());
    }

    let too_large = || Error::GridTooLarge { h, w };
    let cells = h.checked_mul(w).ok_or_else(too_large)?;
    let mut data: Vec<char> = Vec::new();
    data.try_reserve_exact(cells).map_err(|_| too_large())?;
    for row in rows {
        let pad = w - row.len();
        data.extend(row);
        data.extend(std::iter::repeat(' ').take(pad));
    }
    Ok(Grid { w, data })
}

/// Replaces every run of non-alphanumeric characters that sits between two
/// alphanumeric characters with a single space. Leading and trailing runs
/// are kept as they are.
pub fn collapse_separators(encoded: &[char]) -> String {
    let mut decoded = String::with_capacity(encoded.len());
    for [start, end] in encoded.group_indices_by_key(|c| c.is_ascii_alphanumeric()) {
        let inner = start > 0 && end < encoded.len();
        if inner && !encoded[start].is_ascii_alphanumeric() {
            decoded.push(' ');
        } else {
            decoded.extend(&encoded[start..end]);
        }
    }
    decoded
}

pub fn decode(grid: &Grid<char>) -> String {
    let encoded: Vec<char> = grid.column_major().copied().collect();
    collapse_separators(&encoded)
}
