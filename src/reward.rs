use crate::env::Observation;

/// Reward for any terminal state that is not the goal
pub const FAILURE_PENALTY: f64 = -36.0;

/// Weight of the progress-shaping term on non-terminal states
pub const PROGRESS_SCALE: f64 = 4.0;

/// Reward for arriving in `state`
///
/// Only ever evaluated on the state an action led to:
/// - at the goal, the game's score
/// - any other terminal state, [`FAILURE_PENALTY`]
/// - otherwise `PROGRESS_SCALE * (progress - max_progress)`, which is never positive and
///   shrinks toward zero as the frog nears the goal row
pub fn reward_for<O: Observation + ?Sized>(state: &O) -> f64 {
    if state.at_goal() {
        state.score()
    } else if state.is_done() {
        FAILURE_PENALTY
    } else {
        PROGRESS_SCALE * (state.progress() - state.max_progress())
    }
}
