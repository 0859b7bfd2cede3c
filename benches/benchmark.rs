use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    Criterion,
    SamplingMode
};
use criterion::measurement::WallTime;

use sudoku_propagation::SudokuGrid;
use sudoku_propagation::solver::{PropagatingSolver, Solution, Solver};

use std::time::Duration;

// Explanation of benchmark classes:
//
// propagation: Puzzles with enough clues that propagation alone solves them,
//              so no search branch is ever opened.
// search: Puzzles that stall propagation and require backtracking, including
//         an adversarial one with very few clues.
// empty: A completely empty grid, which measures pure search throughput over
//        the largest possible branch space.

const MEASUREMENT_TIME_SECS: u64 = 30;
const SAMPLE_SIZE: usize = 100;

const PROPAGATION_TASKS: &[(&str, &str)] = &[
    ("3;\
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
        3,4,5,2,8,6,1,7,9"),
    ("2; , , ,4, ,4,3, , ,3, , , , ,1, ",
    "2;3,1,2,4,2,4,3,1,1,3,4,2,4,2,1,3")
];

const SEARCH_TASKS: &[&str] = &[
    // 17 clues, near the minimum for a unique classic Sudoku.
    "3;\
         , , , , , , ,1, ,\
        4, , , , , , , , ,\
         ,2, , , , , , , ,\
         , , , ,5, ,4, ,7,\
        8, , , ,3, , , , ,\
         ,1, ,9, , , , , ,\
        3, ,4, , ,2, , , ,\
         ,5, ,1, , , , , ,\
         , , ,8, ,6, , , ",
    "3;\
         , , , , , , , , ,\
         , , , , , ,1,2,3,\
         , , , , , ,4,5,6,\
         , ,1, , , , , , ,\
         , ,4, , , , , , ,\
         , ,7, , , , , , ,\
         , , ,1, , , , , ,\
         , , ,4, , , , , ,\
         , , ,7, , , , , "
];

fn solve_expecting(puzzle: &SudokuGrid, solution: &SudokuGrid) {
    let computed_solution = PropagatingSolver.solve(puzzle);
    assert_eq!(&Solution::Solved(solution.clone()), &computed_solution);
}

fn solve_expecting_valid(puzzle: &SudokuGrid) {
    match PropagatingSolver.solve(puzzle) {
        Solution::Solved(solution) =>
            assert!(puzzle.is_valid_solution(&solution).unwrap()),
        Solution::Unsolvable => panic!("benchmark puzzle was not solved")
    }
}

fn configure(group: &mut BenchmarkGroup<WallTime>) {
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
}

fn benchmark_propagation(c: &mut Criterion) {
    let tasks: Vec<(SudokuGrid, SudokuGrid)> = PROPAGATION_TASKS.iter()
        .map(|&(puzzle, solution)| (
            SudokuGrid::parse(puzzle).unwrap(),
            SudokuGrid::parse(solution).unwrap()))
        .collect();
    let mut group = c.benchmark_group("propagation");
    configure(&mut group);

    group.bench_function("propagation", |b| b.iter(|| {
        for (puzzle, solution) in tasks.iter() {
            solve_expecting(puzzle, solution);
        }
    }));
}

fn benchmark_search(c: &mut Criterion) {
    let tasks: Vec<SudokuGrid> = SEARCH_TASKS.iter()
        .map(|&puzzle| SudokuGrid::parse(puzzle).unwrap())
        .collect();
    let mut group = c.benchmark_group("search");
    configure(&mut group);

    group.bench_function("search", |b| b.iter(|| {
        for puzzle in tasks.iter() {
            solve_expecting_valid(puzzle);
        }
    }));
}

fn benchmark_empty(c: &mut Criterion) {
    let puzzle = SudokuGrid::new(3).unwrap();
    let mut group = c.benchmark_group("empty");
    configure(&mut group);

    group.bench_function("empty", |b| b.iter(||
        solve_expecting_valid(&puzzle)));
}

criterion_group!(all,
    benchmark_propagation,
    benchmark_search,
    benchmark_empty
);

criterion_main!(all);
