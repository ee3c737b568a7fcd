use std::time::Instant;

use clap::Parser;
use knight_paths_core::{
    board::{BoardSize, HighlightGrid, Square},
    path_count::{count_paths, divide},
    path_finder::{PathFinder, SearchLimits, SearchRequest},
};
use log::debug;

/// Knight path finder.
///
/// Lists every sequence of knight moves from one square of an N×N board to
/// another that uses at most a given number of moves.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Side length of the board.
    #[arg(short, long, default_value_t = BoardSize::STANDARD.get())]
    size: i32,

    /// Starting square, written as `row,col` with 0-indexed coordinates.
    #[arg(short, long, allow_hyphen_values = true)]
    from: Square,

    /// Destination square, written as `row,col` with 0-indexed coordinates.
    #[arg(short, long, allow_hyphen_values = true)]
    to: Square,

    /// Maximum number of knight moves in a path.
    #[arg(short, long, default_value_t = 3, allow_hyphen_values = true)]
    max_moves: i32,

    /// Give up after visiting this many search nodes.
    #[arg(long)]
    node_budget: Option<u64>,

    /// Run in divide mode.
    ///
    /// Instead of listing paths, list each possible first move from the
    /// starting square along with the number of paths that begin with it.
    #[arg(long, conflicts_with = "count")]
    divide: bool,

    /// Only print the number of paths found.
    #[arg(long)]
    count: bool,

    /// Enable debug messages.
    #[arg(short, long)]
    debug: bool,
}

/// Boards wider than this are too large to draw in a terminal.
const MAX_DRAWN_BOARD_SIZE: i32 = 64;

fn summary(path_count: usize) -> String {
    match path_count {
        0 => "No paths found.".to_string(),
        1 => "1 path found.".to_string(),
        n => format!("{n} paths found."),
    }
}

fn list_paths(request: SearchRequest, limits: &SearchLimits) -> Result<(), String> {
    let start_time = Instant::now();
    let paths = PathFinder::new(request)
        .with_limits(limits.clone())
        .run()
        .map_err(|e| e.to_string())?;
    debug!("Search took {:.3}s", start_time.elapsed().as_secs_f64());

    for path in &paths {
        println!("{}\t{path}", path.moves());
    }

    if !paths.is_empty() && request.board_size <= MAX_DRAWN_BOARD_SIZE {
        // The request has already been validated by the search.
        if let Some(board_size) = BoardSize::new(request.board_size) {
            println!();
            println!("{}", HighlightGrid::from_paths(board_size, &paths));
            println!();
        }
    }

    println!("{}", summary(paths.len()));
    Ok(())
}

fn list_divide(request: SearchRequest, limits: &SearchLimits) -> Result<(), String> {
    let counts = divide(&request, limits).map_err(|e| e.to_string())?;

    let mut total = u64::from(request.start == request.destination);
    for (square, count) in counts {
        println!("{square}: {count}");
        total += count;
    }

    println!();
    println!("Paths found: {total}");
    Ok(())
}

fn print_count(request: SearchRequest, limits: &SearchLimits) -> Result<(), String> {
    let count = count_paths(&request, limits).map_err(|e| e.to_string())?;
    println!("{count}");
    Ok(())
}

fn main() -> Result<(), String> {
    let Args {
        size,
        from,
        to,
        max_moves,
        node_budget,
        divide,
        count,
        debug,
    } = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let request = SearchRequest::new(from, to, max_moves, size);
    let limits = node_budget
        .map(SearchLimits::with_node_budget)
        .unwrap_or_default();

    if divide {
        list_divide(request, &limits)
    } else if count {
        print_count(request, &limits)
    } else {
        list_paths(request, &limits)
    }
}
