// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a solver for generalized Sudoku puzzles, that is,
//! grids with square blocks of any size n and side length n². It supports the
//! following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of grids according to the row/column/block
//! distinctness rules
//! * Solving grids with a constraint-propagation engine that tracks candidate
//! digits per cell as well as possible positions per row, column, and block
//! * Backtracking search on top of propagation for grids that propagation
//! alone cannot finish
//!
//! Note in this introduction we will mostly be using 4x4 Sudoku (block size
//! 2) due to their simpler nature. These are divided in 4 2x2 blocks, each
//! with the digits 1 to 4, just like each row and column.
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_propagation::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("2;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! A grid editor that collects plain integers can instead use
//! [SudokuGrid::from_matrix], which takes a square matrix with `-1` as the
//! blank sentinel, and [SudokuGrid::to_matrix] for the reverse direction.
//!
//! # Checking validity
//!
//! A grid is valid if no digit appears twice in any row, column, or block.
//! Note that grids with empty cells can be valid, as long as the digits which
//! are present satisfy the condition.
//!
//! ```
//! use sudoku_propagation::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("2;1,1, , , , , , , , , , , , , , ").unwrap();
//! assert!(!grid.is_valid());
//! ```
//!
//! # Solving grids
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! solve Sudoku grids. The provided implementation is
//! [PropagatingSolver](solver::PropagatingSolver), which first derives as
//! many digits as possible by constraint propagation and falls back to
//! backtracking search over cloned grids when propagation stalls.
//!
//! ```
//! use sudoku_propagation::SudokuGrid;
//! use sudoku_propagation::solver::{PropagatingSolver, Solution, Solver};
//!
//! // A riddle posed by our grid editor:
//! // ╔═══╤═══╦═══╤═══╗
//! // ║   │   ║   │ 4 ║
//! // ╟───┼───╫───┼───╢
//! // ║   │ 4 ║ 3 │   ║
//! // ╠═══╪═══╬═══╪═══╣
//! // ║   │ 3 ║   │   ║
//! // ╟───┼───╫───┼───╢
//! // ║   │   ║ 1 │   ║
//! // ╚═══╧═══╩═══╧═══╝
//! let grid = SudokuGrid::parse("2; , , ,4, ,4,3, , ,3, , , , ,1, ").unwrap();
//! let solution = PropagatingSolver.solve(&grid);
//!
//! let expected_grid =
//!     SudokuGrid::parse("2;3,1,2,4,2,4,3,1,1,3,4,2,4,2,1,3").unwrap();
//! assert_eq!(Solution::Solved(expected_grid), solution);
//! ```
//!
//! If there is no completion of the input grid, the solver returns
//! [Solution::Unsolvable](solver::Solution::Unsolvable). The solver never
//! returns a partially filled grid.

pub mod error;
pub mod solver;
pub mod util;


use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};
use util::USizeSet;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Error, Formatter};

/// The value used for empty cells when a grid is exchanged as a plain integer
/// matrix, as done by [SudokuGrid::from_matrix] and [SudokuGrid::to_matrix].
pub const BLANK: i32 = -1;

/// A Sudoku grid is composed of cells that are organized into square blocks
/// of a given size in a way that makes the entire grid a square. A grid with
/// block size n consequently has n² rows, n² columns, and n² blocks, and each
/// cell may or may not be occupied by a digit in `[1, n²]`.
///
/// In ordinary Sudoku, the block size is 3. Here, any positive block size is
/// permitted, so a grid with 2x2 blocks would look like this:
///
/// ```text
/// ╔═══╤═══╦═══╤═══╗
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║   │   ║   │   ║
/// ╠═══╪═══╬═══╪═══╣
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║   │   ║   │   ║
/// ╚═══╧═══╩═══╧═══╝
/// ```
///
/// `SudokuGrid` implements `Display`, but only grids with a size (that is,
/// side length) of less than or equal to 9 can be displayed with digits 1 to
/// 9. Grids of all other sizes will raise an error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SudokuGrid {
    block_size: usize,
    size: usize,
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(grid: &SudokuGrid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let size = grid.size();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % grid.block_size == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(grid: &SudokuGrid) -> String {
    line(grid, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(grid: &SudokuGrid) -> String {
    line(grid, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line(grid, '║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();

        if size > 9 {
            return Err(Error::default());
        }

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % self.block_size == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid where the blocks have the given size.
    /// The total width and height of the grid will be equal to the square of
    /// `block_size`.
    ///
    /// # Arguments
    ///
    /// * `block_size`: The dimension of one sub-block of the grid. This is
    /// also the number of blocks that compose the grid horizontally and
    /// vertically. For an ordinary Sudoku grid, this is 3. Must be greater
    /// than 0.
    ///
    /// # Errors
    ///
    /// If `block_size` is invalid (zero).
    pub fn new(block_size: usize) -> SudokuResult<SudokuGrid> {
        if block_size == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let size = block_size * block_size;
        let cells = vec![None; size * size];

        Ok(SudokuGrid {
            block_size,
            size,
            cells
        })
    }

    /// Parses a code encoding a Sudoku grid. The code has to be of the format
    /// `<block_size>;<cells>` where `<cells>` is a comma-separated list of
    /// entries, which are either empty or a number. The entries are assigned
    /// left-to-right, top-to-bottom, where each row is completed before the
    /// next one is started. Whitespace in the entries is ignored to allow for
    /// more intuitive formatting. The number of entries must match the amount
    /// of cells in a grid with the given block size, i.e. it must be
    /// `block_size⁴`.
    ///
    /// As an example, the code `2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` will parse
    /// to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║ 3 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(SudokuParseError::WrongNumberOfParts);
        }

        let block_size: usize = parts[0].trim().parse()?;

        if let Ok(mut grid) = SudokuGrid::new(block_size) {
            let size = grid.size();
            let numbers: Vec<&str> = parts[1].split(',').collect();

            if numbers.len() != size * size {
                return Err(SudokuParseError::WrongNumberOfCells);
            }

            for (i, number_str) in numbers.iter().enumerate() {
                let number_str = number_str.trim();

                if number_str.is_empty() {
                    continue;
                }

                let number = number_str.parse::<usize>()?;

                if number == 0 || number > size {
                    return Err(SudokuParseError::InvalidNumber);
                }

                grid.cells[i] = Some(number);
            }

            Ok(grid)
        }
        else {
            Err(SudokuParseError::InvalidDimensions)
        }
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_propagation::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new(2).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 3).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{};", self.block_size);
        let cells = self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Creates a grid from a square matrix of integers, which is the format
    /// in which a grid editor delivers its content. Each entry must either be
    /// the blank sentinel [BLANK] (that is, `-1`) or a digit in `[1, n²]`,
    /// where `n²` is the side length of the matrix. The side length must be
    /// the square of a positive block size.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDimensions` If the matrix is empty, not square,
    /// or its side length is not a perfect square.
    /// * `SudokuError::InvalidNumber` If an entry is neither [BLANK] nor in
    /// the range `[1, n²]`.
    pub fn from_matrix(matrix: &[Vec<i32>]) -> SudokuResult<SudokuGrid> {
        let size = matrix.len();
        let block_size = (size as f64).sqrt() as usize;

        if block_size * block_size != size {
            return Err(SudokuError::InvalidDimensions);
        }

        let mut grid = SudokuGrid::new(block_size)?;

        for (row, row_entries) in matrix.iter().enumerate() {
            if row_entries.len() != size {
                return Err(SudokuError::InvalidDimensions);
            }

            for (column, &entry) in row_entries.iter().enumerate() {
                if entry == BLANK {
                    continue;
                }

                if entry < 1 || entry as usize > size {
                    return Err(SudokuError::InvalidNumber);
                }

                grid.cells[index(column, row, size)] = Some(entry as usize);
            }
        }

        Ok(grid)
    }

    /// Converts this grid into a square matrix of integers, where empty cells
    /// are represented by the blank sentinel [BLANK]. This is the inverse of
    /// [SudokuGrid::from_matrix].
    pub fn to_matrix(&self) -> Vec<Vec<i32>> {
        let size = self.size;
        (0..size)
            .map(|row| (0..size)
                .map(|column| match self.cells[index(column, row, size)] {
                    Some(number) => number as i32,
                    None => BLANK
                })
                .collect())
            .collect()
    }

    /// Gets the size (number of rows and columns) of one sub-block of the
    /// grid. This is also the number of blocks that compose the grid
    /// horizontally and vertically.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        let size = self.size();

        if column >= size || row >= size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row, size)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, size]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > size {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row, size)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row, size)] = None;
        Ok(())
    }

    fn verify_dimensions(&self, other: &SudokuGrid) -> SudokuResult<()> {
        if self.block_size != other.block_size {
            Err(SudokuError::InvalidDimensions)
        }
        else {
            Ok(())
        }
    }

    /// Assigns the content of another grid to this one, i.e., changes the
    /// cells in this grid to the state in `other`. The other grid must have
    /// the same dimensions as this one.
    ///
    /// # Errors
    ///
    /// If the dimensions are not the same. In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn assign(&mut self, other: &SudokuGrid) -> SudokuResult<()> {
        self.verify_dimensions(other)?;
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns the square of
    /// [SudokuGrid::size].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be filled
    /// in `other` with the same number. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the dimensions of this and the `other` grid are not the same. In
    /// that case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_subset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        self.verify_dimensions(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            }))
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the dimensions of this and the `other` grid are not the same. In
    /// that case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_superset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        other.is_subset(self)
    }

    fn group_valid(&self, group: impl Iterator<Item = usize>) -> bool {
        let mut seen = USizeSet::new(1, self.size).unwrap();

        for cell_index in group {
            if let Some(number) = self.cells[cell_index] {
                if !seen.insert(number).unwrap() {
                    return false;
                }
            }
        }

        true
    }

    /// Indicates whether this grid satisfies the distinctness rules, that is,
    /// no digit appears twice in any row, column, or block. Empty cells are
    /// permitted; they are simply skipped.
    pub fn is_valid(&self) -> bool {
        let size = self.size;
        let block_size = self.block_size;

        for row in 0..size {
            if !self.group_valid((0..size).map(|column|
                    index(column, row, size))) {
                return false;
            }
        }

        for column in 0..size {
            if !self.group_valid((0..size).map(|row|
                    index(column, row, size))) {
                return false;
            }
        }

        for block in 0..size {
            let start_row = (block / block_size) * block_size;
            let start_column = (block % block_size) * block_size;

            if !self.group_valid((0..size).map(|i| {
                    let row = start_row + i / block_size;
                    let column = start_column + i % block_size;
                    index(column, row, size)
                })) {
                return false;
            }
        }

        true
    }

    /// Indicates whether the given grid is a valid solution to this puzzle.
    /// That is the case if all digits from this grid can be found in the
    /// `solution`, the solution satisfies the distinctness rules, and it is
    /// full.
    ///
    /// # Errors
    ///
    /// If the dimensions of this grid and the `solution` grid are not the
    /// same. In that case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_valid_solution(&self, solution: &SudokuGrid)
            -> SudokuResult<bool> {
        Ok(self.is_subset(solution)? &&
            solution.is_valid() &&
            solution.is_full())
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}
