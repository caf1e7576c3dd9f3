pub mod grid;

pub use grid::GridSnapshot;

/// A read-only snapshot of the game at one time step, as seen by the agent.
///
/// The game itself (physics, rendering, collision detection) lives outside this crate.
/// An agent only ever observes it through this trait and never mutates it.
///
/// Coordinates grow rightward in `x` and downward in `y`, so `dy = -1` is the row directly
/// "above" the agent, i.e. toward the goal.
pub trait Observation {
    /// The agent's position on the board as `(x, y)`
    fn position(&self) -> (i32, i32);

    /// The symbol occupying the cell at offset `(dx, dy)` from the agent
    ///
    /// **Returns** `None` if the cell is empty or lies off the board
    fn occupant_at(&self, dx: i32, dy: i32) -> Option<char>;

    /// Whether the agent has reached the goal, ending the episode successfully
    fn at_goal(&self) -> bool;

    /// Whether the episode has ended, for any reason
    fn is_done(&self) -> bool;

    /// The score reported by the game
    fn score(&self) -> f64;

    /// How far along the progress axis the agent currently is
    fn progress(&self) -> f64;

    /// The furthest progress achievable on this board
    fn max_progress(&self) -> f64;
}
