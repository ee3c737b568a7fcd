use std::{process::ExitCode, time::Instant};

use knight_paths_core::{
    board::Square,
    path_count::count_paths,
    path_finder::{find_paths, SearchLimits, SearchRequest},
};

#[derive(Debug, Clone)]
struct TestCase {
    board_size: i32,
    start: Square,
    destination: Square,
    expected_results: Vec<(i32, u64)>,
}

fn parse_test_cases() -> Vec<TestCase> {
    include_str!("pathsuite.txt")
        .lines()
        .map(|line| {
            let (setup, results) = line.split_once(" ;").unwrap();

            let mut fields = setup.split(' ');
            let board_size = fields.next().unwrap().parse().unwrap();
            let start = fields.next().unwrap().parse().unwrap();
            let destination = fields.next().unwrap().parse().unwrap();

            let expected_results = results
                .split(" ;")
                .map(|val| {
                    let (max_moves, paths) = val.split_once(' ').unwrap();
                    (max_moves.parse().unwrap(), paths.parse().unwrap())
                })
                .collect();

            TestCase {
                board_size,
                start,
                destination,
                expected_results,
            }
        })
        .collect()
}

fn run_test_case(id: usize, case: &TestCase) -> bool {
    println!(
        "Test case {id}: {0}x{0} board, {1} -> {2}",
        case.board_size, case.start, case.destination
    );

    let mut failed = false;
    for &(max_moves, expected) in &case.expected_results {
        print!("Max moves {max_moves}: Expected {expected}, ");

        let request = SearchRequest::new(case.start, case.destination, max_moves, case.board_size);
        let counted = count_paths(&request, &SearchLimits::unlimited()).unwrap();
        let paths = find_paths(case.start, case.destination, max_moves, case.board_size).unwrap();
        print!("got {counted}");

        let well_formed = paths.iter().all(|path| {
            path.start() == case.start
                && path.end() == case.destination
                && path.moves() <= max_moves as usize
                && path.is_knight_path()
        });

        if counted != expected {
            failed = true;
            println!(" -- ERROR");
        } else if paths.len() as u64 != counted {
            failed = true;
            println!(", but enumerated {} -- ERROR", paths.len());
        } else if !well_formed {
            failed = true;
            println!(", but some paths are malformed -- ERROR");
        } else {
            println!();
        }
    }

    !failed
}

fn main() -> ExitCode {
    let test_cases = parse_test_cases();
    let mut failed_cases = vec![];

    let start = Instant::now();
    for (i, case) in test_cases.iter().enumerate() {
        let id = i + 1;
        if !run_test_case(id, case) {
            failed_cases.push(id.to_string());
        }
    }
    let elapsed = start.elapsed();

    println!("Took {:?}.", elapsed);

    if failed_cases.is_empty() {
        println!("All test cases passed.");
        ExitCode::SUCCESS
    } else {
        println!("Failing cases: {}", failed_cases.join(", "));
        ExitCode::FAILURE
    }
}
