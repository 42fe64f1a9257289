//! One-ply move ordering with forward pruning.
//!
//! Every candidate is applied and scored with the evaluator, sorted best
//! first for the layer, and only the top slice is handed back to the search.
//! This is lossy: the true best move can be cut here. The trade buys depth
//! under the time budget, and `RankingPolicy::full_width` turns it off.

use crate::game_state::divercite_types::PlayerId;
use crate::game_state::game_engine::{GameEngineState, GeneratedAction};
use crate::search::evaluation::StateEvaluator;
use crate::search::search_budget::SearchBudget;

/// Whether the node maximizes or minimizes the root player's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Max,
    Min,
}

impl Layer {
    /// Max when the root player is to move, Min for any other seat.
    #[inline]
    pub fn for_mover(mover: PlayerId, root_player: PlayerId) -> Self {
        if mover == root_player {
            Layer::Max
        } else {
            Layer::Min
        }
    }
}

/// How many ranked candidates survive: `len / keep_divisor`, never fewer
/// than `min_keep` (nor more than there are).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingPolicy {
    pub keep_divisor: usize,
    pub min_keep: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            keep_divisor: 3,
            min_keep: 1,
        }
    }
}

impl RankingPolicy {
    /// Order candidates but keep all of them.
    pub const fn full_width() -> Self {
        Self {
            keep_divisor: 1,
            min_keep: 1,
        }
    }

    pub fn keep_count(&self, candidates: usize) -> usize {
        (candidates / self.keep_divisor.max(1))
            .max(self.min_keep.max(1))
            .min(candidates)
    }
}

/// A candidate with its one-ply heuristic value. Lives for one ranking pass.
#[derive(Debug, Clone)]
pub struct EvaluatedAction<S: GameEngineState> {
    pub heuristic_value: i32,
    pub generated: GeneratedAction<S>,
}

/// Scores, sorts and truncates `actions`.
///
/// Values are taken from `perspective` (the root player), so Max layers sort
/// descending and Min layers ascending. Ties keep generation order. Returns
/// `None` when the budget runs out before a candidate is scored.
pub fn rank_actions<S, E>(
    actions: Vec<GeneratedAction<S>>,
    evaluator: &E,
    perspective: PlayerId,
    layer: Layer,
    policy: RankingPolicy,
    budget: &SearchBudget,
    evaluations: &mut u64,
) -> Option<Vec<GeneratedAction<S>>>
where
    S: GameEngineState,
    E: StateEvaluator<S> + ?Sized,
{
    let mut evaluated = Vec::with_capacity(actions.len());
    for generated in actions {
        if budget.is_exhausted() {
            return None;
        }
        *evaluations += 1;
        evaluated.push(EvaluatedAction {
            heuristic_value: evaluator.evaluate(&generated.state_after, perspective),
            generated,
        });
    }

    match layer {
        Layer::Max => evaluated.sort_by(|a, b| b.heuristic_value.cmp(&a.heuristic_value)),
        Layer::Min => evaluated.sort_by(|a, b| a.heuristic_value.cmp(&b.heuristic_value)),
    }

    let keep = policy.keep_count(evaluated.len());
    Some(
        evaluated
            .into_iter()
            .take(keep)
            .map(|candidate| candidate.generated)
            .collect(),
    )
}
