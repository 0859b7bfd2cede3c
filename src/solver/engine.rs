//! This module contains the constraint-propagation engine on which the
//! [PropagatingSolver](crate::solver::PropagatingSolver) is built.
//!
//! The central type is the [Propagator], which augments a [SudokuGrid] with a
//! store of derived information: the set of candidate digits for every cell,
//! the set of known digits in every row, column, and block, and possibility
//! indexes that record, for every row, column, and block and every digit, the
//! positions at which that digit could still be placed. Repeatedly tightening
//! this store against the grid and the grid against the store resolves cells
//! without any guessing. The [Propagator::propagate] method drives this to a
//! fixpoint and reports whether the grid was solved, propagation stalled, or
//! a contradiction was found.

use crate::SudokuGrid;
use crate::util::USizeSet;

use log::{debug, trace};

use std::collections::HashMap;

/// The three ways a propagation run can end. All of these are ordinary
/// values: a contradiction in a search branch is an expected outcome, not an
/// error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Propagation {

    /// Every cell has been resolved to a digit. The grid held by the
    /// [Propagator] is a complete, valid solution.
    Solved,

    /// Unresolved cells remain, but a full pass produced no further
    /// tightening. Propagation alone cannot make progress; a search over the
    /// remaining candidates is required.
    Stalled,

    /// The grid state is inconsistent, that is, some digit would have to
    /// appear twice in a row, column, or block.
    Contradiction
}

/// Applies the subset-exclusion rule to the possibility sets selected from
/// `sets` by `positions`, which all belong to the same index family (one
/// digit in one group of lines). For every distinct possibility set S among
/// them, if the number of lines whose possibility set is a subset of S equals
/// the number of positions in S, those lines use up the positions in S, so S
/// is removed from every other line's possibility set.
///
/// Membership is computed on a snapshot of the sets before any removal is
/// applied. A line whose set becomes a subset of S only through removals of
/// this very call is excluded from S as well; this can only empty its set if
/// the state was already contradictory, which the next knowns rebuild
/// reports.
fn exclude_subsets(sets: &mut [USizeSet], positions: &[usize]) {
    let mut groups: HashMap<USizeSet, Vec<usize>> = HashMap::new();

    for &position in positions {
        groups.entry(sets[position].clone()).or_insert_with(Vec::new);
    }

    for (key, members) in groups.iter_mut() {
        for &position in positions {
            if sets[position].is_subset(key).unwrap() {
                members.push(position);
            }
        }
    }

    for (key, members) in groups {
        if key.len() != members.len() {
            continue;
        }

        for &position in positions {
            if !members.contains(&position) {
                sets[position].difference_assign(&key).unwrap();
            }
        }
    }
}

/// A constraint store over one [SudokuGrid] together with the fixpoint driver
/// that keeps the two in sync. A propagator owns its grid exclusively; search
/// branches each construct a fresh propagator over a cloned grid, so no state
/// is ever shared between branches.
///
/// The store tracks, for a grid of block size n and side length n²:
///
/// * per cell, the set of candidate digits still consistent with that cell,
/// * per row, column, and block, the set of digits already placed there,
/// * per row and digit, the set of columns at which the digit could still be
/// placed (and symmetrically per column and digit),
/// * per block and digit, the set of rows and, separately, the set of columns
/// at which the digit could still be placed within that block.
///
/// The sum of the sizes of all candidate sets and all possibility index
/// entries never increases under propagation, which makes it the progress
/// signal: a pass that fails to shrink it proves a fixpoint has been reached.
pub struct Propagator {
    grid: SudokuGrid,
    block_size: usize,
    size: usize,
    row_knowns: Vec<USizeSet>,
    column_knowns: Vec<USizeSet>,
    block_knowns: Vec<USizeSet>,
    candidates: Vec<USizeSet>,
    row_possibilities: Vec<USizeSet>,
    column_possibilities: Vec<USizeSet>,
    block_row_possibilities: Vec<USizeSet>,
    block_column_possibilities: Vec<USizeSet>,
    total_possibilities: usize,
    unknowns: usize
}

impl Propagator {

    /// Creates a new propagator over the given grid. The candidate set of
    /// every filled cell starts as the singleton of its digit and that of
    /// every empty cell as the full digit range; all derived indexes start
    /// empty and are populated by the first pass of
    /// [propagate](Propagator::propagate).
    pub fn new(grid: SudokuGrid) -> Propagator {
        let block_size = grid.block_size();
        let size = grid.size();
        let mut candidates = Vec::with_capacity(size * size);

        for row in 0..size {
            for column in 0..size {
                let candidate_set = match grid.get_cell(column, row).unwrap() {
                    Some(number) =>
                        USizeSet::singleton(1, size, number).unwrap(),
                    None => USizeSet::range(1, size).unwrap()
                };
                candidates.push(candidate_set);
            }
        }

        let empty_knowns = || USizeSet::new(1, size).unwrap();
        let empty_positions = || USizeSet::new(0, size - 1).unwrap();

        Propagator {
            grid,
            block_size,
            size,
            row_knowns: (0..size).map(|_| empty_knowns()).collect(),
            column_knowns: (0..size).map(|_| empty_knowns()).collect(),
            block_knowns: (0..size).map(|_| empty_knowns()).collect(),
            candidates,
            row_possibilities:
                (0..size * size).map(|_| empty_positions()).collect(),
            column_possibilities:
                (0..size * size).map(|_| empty_positions()).collect(),
            block_row_possibilities:
                (0..size * size).map(|_| empty_positions()).collect(),
            block_column_possibilities:
                (0..size * size).map(|_| empty_positions()).collect(),

            // Upper bound on any reachable count, so the first pass always
            // registers as progress.
            total_possibilities:
                3 * size * size * size + 2 * size * size * block_size,
            unknowns: size * size
        }
    }

    fn cell_index(&self, column: usize, row: usize) -> usize {
        crate::index(column, row, self.size)
    }

    fn entry_index(&self, line: usize, digit: usize) -> usize {
        line * self.size + digit - 1
    }

    fn block_of(&self, column: usize, row: usize) -> usize {
        (row / self.block_size) * self.block_size + column / self.block_size
    }

    /// Clears and refills the known-digit sets of all rows, columns, and
    /// blocks from the grid. Returns `false` if some digit appears twice
    /// within one of these groups. This is the sole place where duplicates
    /// are detected; all other steps only remove possibilities.
    fn rebuild_knowns(&mut self) -> bool {
        for knowns in self.row_knowns.iter_mut() {
            knowns.clear();
        }

        for knowns in self.column_knowns.iter_mut() {
            knowns.clear();
        }

        for knowns in self.block_knowns.iter_mut() {
            knowns.clear();
        }

        let mut consistent = true;

        for row in 0..self.size {
            for column in 0..self.size {
                let content = self.grid.get_cell(column, row).unwrap();

                if let Some(number) = content {
                    let block = self.block_of(column, row);
                    consistent &= self.row_knowns[row]
                        .insert(number).unwrap();
                    consistent &= self.column_knowns[column]
                        .insert(number).unwrap();
                    consistent &= self.block_knowns[block]
                        .insert(number).unwrap();
                }
            }
        }

        consistent
    }

    /// Removes from every open cell's candidate set all digits known in its
    /// row, column, or block, and collapses the candidate set of every filled
    /// cell to the singleton of its digit.
    fn tighten_candidates_from_knowns(&mut self) {
        for row in 0..self.size {
            for column in 0..self.size {
                let cell_index = self.cell_index(column, row);
                let content = self.grid.get_cell(column, row).unwrap();

                match content {
                    Some(number) => {
                        let candidates = &mut self.candidates[cell_index];
                        candidates.clear();
                        candidates.insert(number).unwrap();
                    }
                    None => {
                        let block = self.block_of(column, row);
                        self.candidates[cell_index]
                            .difference_assign(&self.row_knowns[row])
                            .unwrap();
                        self.candidates[cell_index]
                            .difference_assign(&self.column_knowns[column])
                            .unwrap();
                        self.candidates[cell_index]
                            .difference_assign(&self.block_knowns[block])
                            .unwrap();
                    }
                }
            }
        }
    }

    /// Rebuilds the row and column possibility indexes from the current
    /// candidate sets: digit k is possible at column j of row i if and only
    /// if k is a candidate of the cell in row i and column j.
    fn derive_line_indexes(&mut self) {
        for entry in self.row_possibilities.iter_mut() {
            entry.clear();
        }

        for entry in self.column_possibilities.iter_mut() {
            entry.clear();
        }

        for row in 0..self.size {
            for column in 0..self.size {
                let cell_index = self.cell_index(column, row);

                for digit in self.candidates[cell_index].iter() {
                    let row_entry = row * self.size + digit - 1;
                    let column_entry = column * self.size + digit - 1;
                    self.row_possibilities[row_entry]
                        .insert(column).unwrap();
                    self.column_possibilities[column_entry]
                        .insert(row).unwrap();
                }
            }
        }
    }

    /// Applies the subset-exclusion rule within the row and the column
    /// possibility index, independently for every digit.
    fn exclude_line_subsets(&mut self) {
        let mut positions = Vec::with_capacity(self.size);

        for digit in 1..=self.size {
            positions.clear();
            positions.extend((0..self.size)
                .map(|line| line * self.size + digit - 1));

            exclude_subsets(&mut self.row_possibilities, &positions);
            exclude_subsets(&mut self.column_possibilities, &positions);
        }
    }

    /// Removes every candidate digit that the row or column possibility
    /// index no longer lists as possible for its cell.
    fn tighten_candidates_from_line_indexes(&mut self) {
        let mut to_remove = Vec::new();

        for row in 0..self.size {
            for column in 0..self.size {
                let cell_index = self.cell_index(column, row);
                to_remove.clear();

                for digit in self.candidates[cell_index].iter() {
                    let row_entry =
                        &self.row_possibilities[self.entry_index(row, digit)];
                    let column_entry = &self.column_possibilities[
                        self.entry_index(column, digit)];

                    if !row_entry.contains(column) ||
                            !column_entry.contains(row) {
                        to_remove.push(digit);
                    }
                }

                for &digit in to_remove.iter() {
                    self.candidates[cell_index].remove(digit).unwrap();
                }
            }
        }
    }

    /// Rebuilds the block possibility indexes from the current candidate
    /// sets: digit k is possible in row i (column j) of a block if and only
    /// if k is a candidate of some cell of that block lying in row i (column
    /// j).
    fn derive_block_indexes(&mut self) {
        for entry in self.block_row_possibilities.iter_mut() {
            entry.clear();
        }

        for entry in self.block_column_possibilities.iter_mut() {
            entry.clear();
        }

        for row in 0..self.size {
            for column in 0..self.size {
                let cell_index = self.cell_index(column, row);
                let block = self.block_of(column, row);

                for digit in self.candidates[cell_index].iter() {
                    let entry = block * self.size + digit - 1;
                    self.block_row_possibilities[entry]
                        .insert(row).unwrap();
                    self.block_column_possibilities[entry]
                        .insert(column).unwrap();
                }
            }
        }
    }

    /// Applies the subset-exclusion rule to the block possibility indexes,
    /// independently for every digit, grouping the row sets of the blocks in
    /// each horizontal band and the column sets of the blocks in each
    /// vertical band. The n blocks of a band compete for the same n rows
    /// (respectively columns), which is what makes the exclusion sound.
    fn exclude_block_subsets(&mut self) {
        let block_size = self.block_size;
        let mut positions = Vec::with_capacity(block_size);

        for digit in 1..=self.size {
            for band in 0..block_size {
                positions.clear();
                positions.extend((0..block_size).map(|other|
                    (band * block_size + other) * self.size + digit - 1));
                exclude_subsets(&mut self.block_row_possibilities, &positions);

                positions.clear();
                positions.extend((0..block_size).map(|other|
                    (other * block_size + band) * self.size + digit - 1));
                exclude_subsets(
                    &mut self.block_column_possibilities, &positions);
            }
        }
    }

    /// Removes every candidate digit that the block possibility index no
    /// longer lists as possible for its cell.
    fn tighten_candidates_from_block_indexes(&mut self) {
        let mut to_remove = Vec::new();

        for row in 0..self.size {
            for column in 0..self.size {
                let cell_index = self.cell_index(column, row);
                let block = self.block_of(column, row);
                to_remove.clear();

                for digit in self.candidates[cell_index].iter() {
                    let entry = self.entry_index(block, digit);

                    if !self.block_row_possibilities[entry].contains(row) ||
                            !self.block_column_possibilities[entry]
                                .contains(column) {
                        to_remove.push(digit);
                    }
                }

                for &digit in to_remove.iter() {
                    self.candidates[cell_index].remove(digit).unwrap();
                }
            }
        }
    }

    /// Writes the digit of every singleton candidate set into the grid.
    fn resolve_from_candidates(&mut self) {
        for row in 0..self.size {
            for column in 0..self.size {
                let candidates = &self.candidates[self.cell_index(column, row)];

                if candidates.len() == 1 {
                    let number = candidates.iter().next().unwrap();
                    self.grid.set_cell(column, row, number).unwrap();
                }
            }
        }
    }

    /// Writes every digit whose row or column possibility set is a singleton
    /// into the grid at the one position it can still occupy.
    fn resolve_from_line_indexes(&mut self) {
        for line in 0..self.size {
            for digit in 1..=self.size {
                let entry = self.entry_index(line, digit);

                if self.row_possibilities[entry].len() == 1 {
                    let column =
                        self.row_possibilities[entry].iter().next().unwrap();
                    self.grid.set_cell(column, line, digit).unwrap();
                }

                if self.column_possibilities[entry].len() == 1 {
                    let row =
                        self.column_possibilities[entry].iter().next().unwrap();
                    self.grid.set_cell(line, row, digit).unwrap();
                }
            }
        }
    }

    /// Writes every digit whose block possibility sets are singletons in
    /// both orientations into the grid at their intersection.
    fn resolve_from_block_indexes(&mut self) {
        for block in 0..self.size {
            for digit in 1..=self.size {
                let entry = self.entry_index(block, digit);
                let rows = &self.block_row_possibilities[entry];
                let columns = &self.block_column_possibilities[entry];

                if rows.len() == 1 && columns.len() == 1 {
                    let row = rows.iter().next().unwrap();
                    let column = columns.iter().next().unwrap();
                    self.grid.set_cell(column, row, digit).unwrap();
                }
            }
        }
    }

    /// Recomputes the total possibility count and the number of unresolved
    /// cells from the current state.
    fn recount(&mut self) {
        let candidate_total: usize = self.candidates.iter()
            .map(USizeSet::len)
            .sum();
        let index_total: usize = self.row_possibilities.iter()
            .chain(self.column_possibilities.iter())
            .chain(self.block_row_possibilities.iter())
            .chain(self.block_column_possibilities.iter())
            .map(USizeSet::len)
            .sum();

        self.total_possibilities = candidate_total + index_total;
        self.unknowns = self.grid.cells().iter()
            .filter(|c| c.is_none())
            .count();
    }

    /// Runs one full tightening pass in fixed order. Returns `false` if the
    /// knowns rebuild detected a contradiction, in which case the rest of
    /// the pass is skipped.
    fn pass(&mut self) -> bool {
        if !self.rebuild_knowns() {
            return false;
        }

        self.tighten_candidates_from_knowns();

        self.derive_line_indexes();
        self.exclude_line_subsets();
        self.tighten_candidates_from_line_indexes();

        self.derive_block_indexes();
        self.exclude_block_subsets();
        self.tighten_candidates_from_block_indexes();

        self.resolve_from_candidates();
        self.resolve_from_line_indexes();
        self.resolve_from_block_indexes();

        self.recount();
        true
    }

    /// Runs tightening passes until the grid is solved, a contradiction is
    /// found, or a pass fails to shrink the total possibility count. The
    /// count is finite and strictly decreases between continuing passes, so
    /// this always terminates without an explicit pass limit.
    pub fn propagate(&mut self) -> Propagation {
        let mut last_total = self.total_possibilities + 1;
        let mut passes = 0usize;

        while last_total > self.total_possibilities && self.unknowns > 0 {
            last_total = self.total_possibilities;

            if !self.pass() {
                debug!("contradiction found in pass {}", passes + 1);
                return Propagation::Contradiction;
            }

            passes += 1;
            trace!("pass {}: {} possibilities, {} unknown cells", passes,
                self.total_possibilities, self.unknowns);
        }

        if self.unknowns > 0 {
            debug!("stalled after {} passes with {} unknown cells", passes,
                self.unknowns);
            Propagation::Stalled
        }
        else if !self.rebuild_knowns() {
            // The final resolutions of the last pass are only checked for
            // duplicates by the pass after them, which never ran.
            debug!("contradiction found in completed grid");
            Propagation::Contradiction
        }
        else {
            debug!("solved by propagation after {} passes", passes);
            Propagation::Solved
        }
    }

    /// Finds the open cell with the smallest candidate set of size greater
    /// than one and returns its coordinates in the form `(column, row)`.
    /// Ties are broken by first occurrence in row-major order. Returns `None`
    /// if no such cell exists, which is the case whenever propagation did
    /// not report [Propagation::Stalled].
    pub fn min_open_cell(&self) -> Option<(usize, usize)> {
        let mut min_cell = None;
        let mut min_len = self.size + 1;

        for row in 0..self.size {
            for column in 0..self.size {
                let len = self.candidates[self.cell_index(column, row)].len();

                if len > 1 && len < min_len {
                    min_len = len;
                    min_cell = Some((column, row));
                }
            }
        }

        min_cell
    }

    /// Gets the candidate set of the cell in the given column and row.
    ///
    /// # Panics
    ///
    /// If `column` or `row` is greater than or equal to the grid size.
    pub fn candidates(&self, column: usize, row: usize) -> &USizeSet {
        &self.candidates[self.cell_index(column, row)]
    }

    /// Gets the grid over which this propagator operates, in its current
    /// state of resolution.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Consumes this propagator and returns its grid.
    pub fn into_grid(self) -> SudokuGrid {
        self.grid
    }

    /// Gets the sum of the sizes of all candidate sets and all possibility
    /// index entries, as of the most recent pass. This value never increases
    /// between consecutive passes.
    pub fn total_possibilities(&self) -> usize {
        self.total_possibilities
    }

    /// Gets the number of cells not yet resolved to a digit, as of the most
    /// recent pass. The grid is solved if and only if this is zero.
    pub fn unknowns(&self) -> usize {
        self.unknowns
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::set;

    fn propagator(code: &str) -> Propagator {
        Propagator::new(SudokuGrid::parse(code).unwrap())
    }

    #[test]
    fn knowns_rebuild_detects_row_duplicate() {
        let mut propagator = propagator("2;1,,1,,,,,,,,,,,,,");
        assert_eq!(Propagation::Contradiction, propagator.propagate());
    }

    #[test]
    fn knowns_rebuild_detects_column_duplicate() {
        let mut propagator = propagator("2;,2,,,,,,,,2,,,,,,");
        assert_eq!(Propagation::Contradiction, propagator.propagate());
    }

    #[test]
    fn knowns_rebuild_detects_block_duplicate() {
        let mut propagator = propagator("2;,,3,,,,,3,,,,,,,,");
        assert_eq!(Propagation::Contradiction, propagator.propagate());
    }

    #[test]
    fn naked_singles_are_resolved() {
        // The cell in column 1, row 1 can be neither 1 (block), 2 (row), nor
        // 3 (column), leaving 4 as its only candidate.
        let mut propagator = propagator("2;\
            1, , , ,\
             , , ,2,\
             , , , ,\
             ,3, , ");

        assert!(propagator.pass());
        assert_eq!(Some(4), propagator.grid().get_cell(1, 1).unwrap());
    }

    #[test]
    fn index_singletons_are_resolved() {
        // Digit 2 fits in row 0 only at column 1, and digit 3 fits in the
        // top-left block only at column 0, row 1. Both deductions require
        // the possibility indexes; plain duplicate elimination leaves more
        // than one candidate in both cells.
        let mut propagator = propagator("2;\
            1, , , ,\
             , , ,2,\
             , , , ,\
             ,3, , ");

        assert!(propagator.pass());
        assert_eq!(Some(2), propagator.grid().get_cell(1, 0).unwrap());
        assert_eq!(Some(3), propagator.grid().get_cell(0, 1).unwrap());
        assert_eq!(Some(1), propagator.grid().get_cell(2, 1).unwrap());
        assert_eq!(Some(1), propagator.grid().get_cell(1, 2).unwrap());
    }

    #[test]
    fn propagation_completes_nearly_full_grid() {
        let mut propagator = propagator("2;\
             ,2, ,4,\
            3,4, ,2,\
            2, ,4,3,\
            4,3,2, ");

        assert_eq!(Propagation::Solved, propagator.propagate());

        let expected = SudokuGrid::parse("2;\
            1,2,3,4,\
            3,4,1,2,\
            2,1,4,3,\
            4,3,2,1").unwrap();
        assert_eq!(&expected, propagator.grid());
    }

    #[test]
    fn full_valid_grid_is_solved_immediately() {
        let mut propagator = propagator("2;\
            1,2,3,4,\
            3,4,1,2,\
            2,1,4,3,\
            4,3,2,1");

        assert_eq!(Propagation::Solved, propagator.propagate());
        assert_eq!(0, propagator.unknowns());
    }

    #[test]
    fn empty_grid_stalls() {
        let mut propagator =
            Propagator::new(SudokuGrid::new(3).unwrap());
        assert_eq!(Propagation::Stalled, propagator.propagate());
        assert_eq!(81, propagator.unknowns());
    }

    #[test]
    fn total_possibilities_shrink_monotonically() {
        // Blanked from a complete valid solution, so it stays solvable and
        // no pass can run into a contradiction.
        let mut propagator = propagator("3;\
             , , , , , , , , ,\
            4, ,6, ,8, ,1, ,3,\
            7,8, ,1,2, ,4,5, ,\
            2, ,4, ,6, ,8, ,1,\
             , , , , , , , , ,\
            8, ,1, ,3, ,5, ,7,\
            3,4, ,6,7, ,9,1, ,\
            6, ,8, ,1, ,3, ,5,\
             , , , , , , , , ");
        let mut last_total = propagator.total_possibilities();

        for _ in 0..10 {
            assert!(propagator.pass());
            assert!(propagator.total_possibilities() <= last_total);
            last_total = propagator.total_possibilities();
        }
    }

    #[test]
    fn min_open_cell_prefers_smallest_candidate_set() {
        let mut propagator = propagator("2;\
            1,2, , ,\
             , , , ,\
             , , , ,\
             , , , ");

        assert_eq!(Propagation::Stalled, propagator.propagate());

        // Cells (2, 0) and (3, 0) have two candidates each; everything else
        // has more. Ties break in row-major order.
        assert_eq!(Some((2, 0)), propagator.min_open_cell());
        assert_eq!(2, propagator.candidates(2, 0).len());
    }

    #[test]
    fn min_open_cell_empty_when_resolved() {
        let mut propagator = propagator("2;\
            1,2,3,4,\
            3,4,1,2,\
            2,1,4,3,\
            4,3,2,1");

        assert_eq!(Propagation::Solved, propagator.propagate());
        assert_eq!(None, propagator.min_open_cell());
    }

    #[test]
    fn exclude_subsets_clears_claimed_positions() {
        // The pair {0, 1} is claimed by lines 0 and 1 and removed from lines
        // 2 and 3. The triple {0, 1, 2} is claimed by lines 0 through 2 and
        // removed from line 3, which pins it to position 3.
        let mut sets = vec![
            set!(0, 3; 0, 1),
            set!(0, 3; 0, 1),
            set!(0, 3; 0, 1, 2),
            set!(0, 3; 0, 1, 2, 3)
        ];

        exclude_subsets(&mut sets, &[0, 1, 2, 3]);

        assert_eq!(set!(0, 3; 0, 1), sets[0]);
        assert_eq!(set!(0, 3; 0, 1), sets[1]);
        assert_eq!(set!(0, 3; 2), sets[2]);
        assert_eq!(set!(0, 3; 3), sets[3]);
    }

    #[test]
    fn exclude_subsets_counts_strict_subsets_as_claimants() {
        // Line 0 is a strict subset of the pair in lines 1 and 2, so the
        // pair {0, 1} is claimed by too many lines to fire, while the
        // singleton {0} is claimed by line 0 alone and is removed from all
        // other lines.
        let mut sets = vec![
            set!(0, 3; 0),
            set!(0, 3; 0, 1),
            set!(0, 3; 0, 1),
            set!(0, 3; 0, 1, 2, 3)
        ];

        exclude_subsets(&mut sets, &[0, 1, 2, 3]);

        assert_eq!(set!(0, 3; 0), sets[0]);
        assert_eq!(set!(0, 3; 1), sets[1]);
        assert_eq!(set!(0, 3; 1), sets[2]);
        assert_eq!(set!(0, 3; 1, 2, 3), sets[3]);
    }

    #[test]
    fn exclude_subsets_ignores_unclaimed_sets() {
        let mut sets = vec![
            set!(0, 3; 0, 1, 2),
            set!(0, 3; 0, 1, 2),
            set!(0, 3; 0, 1, 2, 3),
            set!(0, 3; 0, 1, 2, 3)
        ];
        let before = sets.clone();

        exclude_subsets(&mut sets, &[0, 1, 2, 3]);

        assert_eq!(before, sets);
    }

    #[test]
    fn exclude_subsets_applies_within_selected_positions_only() {
        let mut sets = vec![
            set!(0, 3; 0),
            set!(0, 3; 0, 1),
            set!(0, 3; 0, 2)
        ];

        exclude_subsets(&mut sets, &[0, 1]);

        assert_eq!(set!(0, 3; 0), sets[0]);
        assert_eq!(set!(0, 3; 1), sets[1]);
        assert_eq!(set!(0, 3; 0, 2), sets[2]);
    }
}
