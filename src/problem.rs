//! The queen coverage problem definition.
//!
//! Binds a board to the hooks a search driver needs: summary, initial
//! state, action enumeration, successor function, and goal test. States
//! grow monotonically; a transition only ever appends one queen, and the
//! previous state is never mutated.

use rustc_hash::FxHashSet;

use crate::board::{Board, Configuration, Coord};
use crate::SearchProblem;

/// Problem descriptor capturing the board dimensions for every hook.
///
/// Construct once per instance; the dimensions are immutable thereafter,
/// so no call-ordering constraint exists between the hooks.
#[derive(Clone, Copy, Debug)]
pub struct QueenCover {
    board: Board,
}

impl QueenCover {
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            board: Board::new(width, height),
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }
}

impl SearchProblem for QueenCover {
    type State = Configuration;
    type Action = Coord;

    fn problem_summary(&self) -> String {
        format!(
            "The Queen Cover problem on a {} x {} board",
            self.board.width, self.board.height
        )
    }

    fn initial_state(&self) -> Configuration {
        Vec::new()
    }

    /// Every cell not already occupied, in row-major order.
    fn possible_actions(&self, state: &Configuration) -> Vec<Coord> {
        let occupied: FxHashSet<Coord> = state.iter().copied().collect();
        self.board
            .cells()
            .filter(|cell| !occupied.contains(cell))
            .collect()
    }

    /// Returns a copy of `state` with `action` appended.
    ///
    /// No occupancy or bounds check: the driver is trusted to only pass
    /// actions obtained from `possible_actions`. A violated contract
    /// silently yields a duplicate or out-of-bounds entry, and coverage
    /// tests over that state become unreliable.
    fn successor_state(&self, action: &Coord, state: &Configuration) -> Configuration {
        let mut queens = state.clone();
        queens.push(*action);
        queens
    }

    /// True when every cell on the board is covered.
    ///
    /// Prints the winning board to stdout when the test fires; the text
    /// is diagnostic only, with no machine-parseable format guaranteed.
    fn is_goal_state(&self, state: &Configuration) -> bool {
        if !self.board.all_covered(state) {
            return false;
        }
        println!("\nGOAL STATE:");
        print!("{}", self.board.render(state));
        true
    }
}
