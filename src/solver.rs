//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the
//! [Solver] trait and the [PropagatingSolver] as a complete implementation,
//! which combines the constraint propagation from the [engine] module with a
//! backtracking search over the cases propagation leaves open.

pub mod engine;

use crate::SudokuGrid;
use crate::solver::engine::{Propagation, Propagator};

use log::{debug, trace};

/// An enumeration of the possible outcomes of solving a Sudoku. The search
/// stops at the first solution it finds, so a solved grid carries no claim of
/// uniqueness.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the Sudoku is solveable. A complete, valid grid that
    /// agrees with all given clues is wrapped in this instance.
    Solved(SudokuGrid),

    /// Indicates that the Sudoku has no solution, that is, every way of
    /// completing the given clues violates some constraint.
    Unsolvable
}

/// A trait for structs which have the ability to solve Sudoku.
pub trait Solver {

    /// Solves the given Sudoku grid. The input is not modified; the solution,
    /// if one exists, is returned as a new grid.
    fn solve(&self, grid: &SudokuGrid) -> Solution;
}

/// Recursively searches for a completion of the grid held by the given
/// propagator, which must have stalled. Takes the open cell with the fewest
/// candidates and tries each of them in ascending order on a cloned grid,
/// propagating after every placement. The first completion found is returned.
fn search(propagator: &Propagator) -> Option<SudokuGrid> {
    // min_open_cell is always present here, since the propagator stalled.
    let (column, row) = propagator.min_open_cell()?;
    let candidates = propagator.candidates(column, row);
    trace!("branching on cell ({}, {}) with {} candidates", column, row,
        candidates.len());

    for digit in candidates.iter() {
        let mut grid = propagator.grid().clone();
        grid.set_cell(column, row, digit).unwrap();
        let mut branch = Propagator::new(grid);

        match branch.propagate() {
            Propagation::Solved => return Some(branch.into_grid()),
            Propagation::Stalled => {
                if let Some(solution) = search(&branch) {
                    return Some(solution);
                }
            }
            Propagation::Contradiction => { }
        }
    }

    None
}

/// A [Solver] which first runs constraint propagation on the input grid and,
/// should that stall, falls back to a depth-first backtracking search. Each
/// search branch operates on its own cloned grid with its own [Propagator],
/// so abandoning a branch requires no undo bookkeeping.
///
/// This solver is complete: it returns [Solution::Solved] for every solveable
/// grid and [Solution::Unsolvable] otherwise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PropagatingSolver;

impl Solver for PropagatingSolver {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut propagator = Propagator::new(grid.clone());

        match propagator.propagate() {
            Propagation::Solved => {
                debug!("solved by propagation alone");
                Solution::Solved(propagator.into_grid())
            }
            Propagation::Contradiction => Solution::Unsolvable,
            Propagation::Stalled => {
                debug!("propagation stalled, starting search");

                match search(&propagator) {
                    Some(solution) => Solution::Solved(solution),
                    None => Solution::Unsolvable
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn solve(code: &str) -> Solution {
        let grid = SudokuGrid::parse(code).unwrap();
        PropagatingSolver.solve(&grid)
    }

    fn assert_solved_with(code: &str, expected_code: &str) {
        let expected = SudokuGrid::parse(expected_code).unwrap();
        assert_eq!(Solution::Solved(expected), solve(code));
    }

    fn assert_solves_validly(code: &str) {
        let grid = SudokuGrid::parse(code).unwrap();

        match PropagatingSolver.solve(&grid) {
            Solution::Solved(solution) => {
                assert!(grid.is_valid_solution(&solution).unwrap());
            }
            Solution::Unsolvable => panic!("grid was not solved")
        }
    }

    #[test]
    fn solves_unique_4x4() {
        assert_solved_with(
            "2; , , ,4, ,4,3, , ,3, , , , ,1, ",
            "2;3,1,2,4,2,4,3,1,1,3,4,2,4,2,1,3");
    }

    #[test]
    fn solves_ambiguous_4x4_honoring_clues() {
        // Four clues, multiple completions. Any one valid completion that
        // preserves the clues is acceptable.
        assert_solves_validly("2;1, , , , , ,1, , ,1, , , , , ,1");
    }

    #[test]
    fn solves_classic_9x9() {
        assert_solved_with(
            "3;\
                5,3, , ,7, , , , ,\
                6, , ,1,9,5, , , ,\
                 ,9,8, , , , ,6, ,\
                8, , , ,6, , , ,3,\
                4, , ,8, ,3, , ,1,\
                7, , , ,2, , ,6, ,\
                 ,6, , , , ,2,8, ,\
                 , , ,4,1,9, , ,5,\
                 , , , ,8, , ,7,9",
            "3;\
                5,3,4,6,7,8,9,1,2,\
                6,7,2,1,9,5,3,4,8,\
                1,9,8,3,4,2,5,6,7,\
                8,5,9,7,6,1,4,2,3,\
                4,2,6,8,5,3,7,9,1,\
                7,1,3,9,2,4,8,5,6,\
                9,6,1,5,3,7,2,8,4,\
                2,8,7,4,1,9,6,3,5,\
                3,4,5,2,8,6,1,7,9");
    }

    #[test]
    fn solves_empty_4x4() {
        assert_solves_validly("2; , , , , , , , , , , , , , , , ");
    }

    #[test]
    fn solves_empty_9x9() {
        let grid = SudokuGrid::new(3).unwrap();

        match PropagatingSolver.solve(&grid) {
            Solution::Solved(solution) => {
                assert!(solution.is_valid());
                assert!(solution.is_full());
            }
            Solution::Unsolvable => panic!("empty grid was not solved")
        }
    }

    #[test]
    fn full_valid_grid_solves_to_itself() {
        let code = "2;1,2,3,4,3,4,1,2,2,1,4,3,4,3,2,1";
        assert_solved_with(code, code);
    }

    #[test]
    fn row_duplicate_is_unsolvable() {
        assert_eq!(Solution::Unsolvable,
            solve("2;1, ,1, , , , , , , , , , , , , "));
    }

    #[test]
    fn column_duplicate_is_unsolvable() {
        assert_eq!(Solution::Unsolvable,
            solve("2; ,2, , , , , , , ,2, , , , , , "));
    }

    #[test]
    fn block_duplicate_is_unsolvable() {
        assert_eq!(Solution::Unsolvable,
            solve("2; , ,1, , , , ,1, , , , , , , , "));
    }

    #[test]
    fn contradiction_reachable_only_by_deduction_is_unsolvable() {
        // No group contains a duplicate, but the top-left block has no cell
        // left that could hold a 1.
        assert_eq!(Solution::Unsolvable,
            solve("2; , ,1, , , , ,1,1, , , , , , , "));
    }

    #[test]
    fn input_grid_is_not_modified() {
        let grid = SudokuGrid::parse("2; , , ,4, ,4,3, , ,3, , , , ,1, ")
            .unwrap();
        let copy = grid.clone();
        PropagatingSolver.solve(&grid);
        assert_eq!(copy, grid);
    }
}
