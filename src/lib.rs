//! Queen Cover Problem Library
//!
//! Defines the queen coverage placement problem in the vocabulary of a
//! generic state-space search driver: queens are placed one at a time on a
//! rectangular board until every cell is covered, where a cell is covered
//! if it shares a row, column, or diagonal with some queen.
//!
//! The search driver itself is an external collaborator. It owns the
//! frontier (queue or stack), loop termination, and result reporting; this
//! crate supplies only problem semantics through [`SearchProblem`].

pub mod board;
pub mod problem;

/// Trait bundling the callback hooks a generic search driver expects.
///
/// Implementors describe one problem instance; the driver explores the
/// state space by calling back through these hooks without knowing the
/// placement semantics behind them. All hooks are pure except the goal
/// test, which renders the winning state as a diagnostic side effect.
pub trait SearchProblem {
    type State;
    type Action;

    /// Human-readable description of the problem instance.
    fn problem_summary(&self) -> String;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Every action applicable in `state`.
    fn possible_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` to `state`.
    ///
    /// Must leave `state` untouched; the driver may still expand it.
    fn successor_state(&self, action: &Self::Action, state: &Self::State) -> Self::State;

    /// Whether `state` satisfies the goal condition.
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// Optional cost estimate for informed search strategies.
    ///
    /// Defaults to `None`; uninformed drivers never call it.
    fn heuristic(&self, _state: &Self::State) -> Option<f64> {
        None
    }
}
