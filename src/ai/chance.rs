//! Stochastic branching model for the AI's own drops. A chosen column lands
//! where intended with probability 0.6 and may slip into a playable
//! neighbouring column with the remaining mass. The opponent's moves are
//! always deterministic.

use crate::game::Board;

/// Probability that the drop lands in the chosen column.
pub const DIRECT_PROB: f64 = 0.6;
/// Per-neighbour probability when both neighbours are playable.
pub const SPLIT_NEIGHBOR_PROB: f64 = 0.2;
/// Neighbour probability when only one neighbour is playable.
pub const LONE_NEIGHBOR_PROB: f64 = 0.4;

/// Distribution over the columns a drop into `chosen` may actually reach.
///
/// When neither neighbour is playable the returned mass sums to 0.6, not
/// 1.0: the slip mass is discarded rather than renormalized.
pub fn chance_outcomes(board: &Board, chosen: usize) -> Vec<(usize, f64)> {
    let mut outcomes = vec![(chosen, DIRECT_PROB)];

    let left = chosen
        .checked_sub(1)
        .filter(|&col| board.is_valid_move(col));
    let right = Some(chosen + 1).filter(|&col| board.is_valid_move(col));

    match (left, right) {
        (Some(l), Some(r)) => {
            outcomes.push((l, SPLIT_NEIGHBOR_PROB));
            outcomes.push((r, SPLIT_NEIGHBOR_PROB));
        }
        (Some(l), None) => outcomes.push((l, LONE_NEIGHBOR_PROB)),
        (None, Some(r)) => outcomes.push((r, LONE_NEIGHBOR_PROB)),
        (None, None) => {}
    }

    outcomes
}
