//! The letter grid: a small matrix of optional letters, mutated by drops,
//! row deletions, and row rotations.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;

use rand::prelude::*;

use super::random_letter_with_rng;

/// Row-major grid of cells; row 0 is the top, letters leave from the
/// bottom row only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Option<char>>>,
}

impl Grid {
    /// Generate a full grid of weighted random letters.
    pub fn generate<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let cells = (0..rows)
            .map(|_| (0..cols).map(|_| Some(random_letter_with_rng(rng))).collect())
            .collect();
        Self { rows, cols, cells }
    }

    /// Build a grid from explicit rows. Returns `None` if the rows are
    /// ragged or there are none.
    pub fn from_rows(cells: Vec<Vec<Option<char>>>) -> Option<Self> {
        let rows = cells.len();
        let cols = cells.first()?.len();
        if cells.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    /// Parse a grid from newline-separated rows, `.` marking an empty
    /// cell.
    pub fn parse(s: &str) -> Option<Self> {
        let cells = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '.' => None,
                        other => Some(other.to_ascii_uppercase()),
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The letter at (row, col), if the cell is filled and in range.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// The bottom row, where drops come from.
    pub fn bottom_row(&self) -> &[Option<char>] {
        self.cells.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove the bottom letter of `col` and shift that column down one
    /// cell, leaving the top cell empty. Returns the removed letter, or
    /// `None` if the bottom cell is empty or `col` is out of range.
    pub fn drop_from_bottom(&mut self, col: usize) -> Option<char> {
        if self.rows == 0 || col >= self.cols {
            return None;
        }
        let bottom = self.rows - 1;
        let letter = self.cells[bottom][col]?;
        for row in (1..=bottom).rev() {
            self.cells[row][col] = self.cells[row - 1][col];
        }
        self.cells[0][col] = None;
        Some(letter)
    }

    /// Remove the bottom letter of `col` and refill the vacated cell with
    /// a fresh random letter, keeping the grid full.
    pub fn drop_and_refill<R: Rng>(&mut self, col: usize, rng: &mut R) -> Option<char> {
        if self.rows == 0 || col >= self.cols {
            return None;
        }
        let bottom = self.rows - 1;
        let letter = self.cells[bottom][col]?;
        self.cells[bottom][col] = Some(random_letter_with_rng(rng));
        Some(letter)
    }

    /// Remove `row` entirely; rows above it move down and a fresh empty
    /// row appears at the top. Returns false if `row` is out of range.
    pub fn delete_row(&mut self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        self.cells.remove(row);
        self.cells.insert(0, vec![None; self.cols]);
        true
    }

    /// Rotate the letters of `row` one step right, skipping empty cells:
    /// the letters cycle through their own positions and the gaps stay
    /// where they are. Returns false (no change) if the row holds fewer
    /// than two letters or is out of range.
    pub fn rotate_row_right(&mut self, row: usize) -> bool {
        let Some(cells) = self.cells.get_mut(row) else {
            return false;
        };
        let filled: Vec<(usize, char)> = cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|l| (i, l)))
            .collect();
        if filled.len() < 2 {
            return false;
        }
        let positions: Vec<usize> = filled.iter().map(|&(i, _)| i).collect();
        let mut letters: Vec<char> = filled.iter().map(|&(_, l)| l).collect();
        letters.rotate_right(1);
        for (i, letter) in positions.into_iter().zip(letters) {
            cells[i] = Some(letter);
        }
        true
    }

    /// Number of filled cells in `row` (0 if out of range).
    pub fn row_letter_count(&self, row: usize) -> usize {
        self.cells
            .get(row)
            .map(|r| r.iter().filter(|c| c.is_some()).count())
            .unwrap_or(0)
    }

    /// Total filled cells across the grid.
    pub fn letter_count(&self) -> usize {
        (0..self.rows).map(|r| self.row_letter_count(r)).sum()
    }

    /// Multiset of the grid's letters, keyed by lowercase char.
    pub fn letter_counts(&self) -> HashMap<char, u32> {
        let mut counts = HashMap::new();
        for row in &self.cells {
            for cell in row.iter().flatten() {
                *counts.entry(cell.to_ascii_lowercase()).or_insert(0) += 1;
            }
        }
        counts
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(Option::is_some))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}
