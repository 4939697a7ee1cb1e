//! Queen Cover problem CLI.
//!
//! Companion tool for inspecting a problem instance without running a
//! search: print the instance summary, enumerate the open cells for a
//! placement, or check whether a hand-built placement already covers
//! the board. Queens are given as `x,y` arguments, e.g. `check 1,1`.

use clap::{Parser, Subcommand};

use queencover::board::{Configuration, Coord};
use queencover::problem::QueenCover;
use queencover::SearchProblem;

/// Inspects queen coverage placements on a rectangular board.
#[derive(Parser)]
#[command(name = "queencover")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = 5)]
    width: i32,

    /// Board height in cells.
    #[arg(long, default_value_t = 5)]
    height: i32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the problem description.
    Info,
    /// List every open cell given the placed queens.
    Actions { queens: Vec<String> },
    /// Render a placement and test whether it covers the board.
    Check { queens: Vec<String> },
}

fn main() {
    let cli = Cli::parse();
    let problem = QueenCover::new(cli.width, cli.height);

    match cli.command {
        Some(Command::Info) | None => println!("{}", problem.problem_summary()),
        Some(Command::Actions { queens }) => match parse_queens(&queens) {
            Ok(state) => {
                for (x, y) in problem.possible_actions(&state) {
                    println!("{},{}", x, y);
                }
            }
            Err(e) => eprintln!("{}", e),
        },
        Some(Command::Check { queens }) => match parse_queens(&queens) {
            Ok(state) => run_check(&problem, &state),
            Err(e) => eprintln!("{}", e),
        },
    }
}

/// Runs the goal test on a placement and reports the uncovered cells.
///
/// The goal test already prints the board when it succeeds, so only the
/// failing path renders here.
fn run_check(problem: &QueenCover, state: &Configuration) {
    if problem.is_goal_state(state) {
        return;
    }
    let board = problem.board();
    print!("{}", board.render(state));
    let uncovered: Vec<Coord> = board
        .cells()
        .filter(|&cell| !board.is_covered(cell, state))
        .collect();
    println!("Not a goal state: {} cells uncovered", uncovered.len());
    for (x, y) in uncovered {
        println!("  {},{}", x, y);
    }
}

/// Parses queen positions from `x,y` command-line arguments.
fn parse_queens(args: &[String]) -> Result<Configuration, String> {
    args.iter().map(|arg| parse_coord(arg)).collect()
}

fn parse_coord(arg: &str) -> Result<Coord, String> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| format!("expected a queen as x,y but got '{}'", arg))?;
    let x = x
        .trim()
        .parse()
        .map_err(|_| format!("bad x coordinate in '{}'", arg))?;
    let y = y
        .trim()
        .parse()
        .map_err(|_| format!("bad y coordinate in '{}'", arg))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord_accepts_spaces() {
        assert_eq!(parse_coord("2,1"), Ok((2, 1)));
        assert_eq!(parse_coord(" 0 , 3 "), Ok((0, 3)));
    }

    #[test]
    fn test_parse_coord_rejects_malformed_input() {
        assert!(parse_coord("2").is_err());
        assert!(parse_coord("a,b").is_err());
        assert!(parse_coord("1,").is_err());
    }

    #[test]
    fn test_parse_queens_collects_all_or_fails() {
        let ok = ["0,0".to_string(), "2,1".to_string()];
        assert_eq!(parse_queens(&ok), Ok(vec![(0, 0), (2, 1)]));

        let bad = ["0,0".to_string(), "oops".to_string()];
        assert!(parse_queens(&bad).is_err());
    }

    #[test]
    fn test_corner_placement_snapshot() {
        let problem = QueenCover::new(3, 3);
        let board = problem.board();
        let state = vec![(0, 0)];
        let uncovered: Vec<Coord> = board
            .cells()
            .filter(|&cell| !board.is_covered(cell, &state))
            .collect();
        let report = format!(
            "{}uncovered: {:?}",
            board.render(&state),
            uncovered
        );
        insta::assert_snapshot!(report, @r"
        ...
        ...
        Q..
        uncovered: [(2, 1), (1, 2)]
        ");
    }
}
