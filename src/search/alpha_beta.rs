//! Depth-limited alpha-beta minimax with explicit max and min layers.
//!
//! Values are always from the root player's perspective. Every node polls
//! the shared budget on entry, the ranker polls it before each candidate
//! evaluation, and the loop polls it before each recursion. An exhausted
//! budget makes the node return `Ok(None)`, which every enclosing frame
//! passes straight up without computing anything further.

use crate::game_state::divercite_types::PlayerId;
use crate::game_state::game_engine::{GameEngineState, GeneratedAction};
use crate::search::evaluation::{final_score_differential, StateEvaluator};
use crate::search::move_ranker::{rank_actions, Layer, RankingPolicy};
use crate::search::search_budget::SearchBudget;
use crate::search::search_errors::{SearchError, SearchResult};

/// Bound used for the initial window. Symmetric so negation never overflows.
pub const SCORE_INFINITY: i32 = i32::MAX;

/// A completed node: its value and, above the horizon, the action achieving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeValue<A> {
    pub value: i32,
    pub best_action: Option<A>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub evaluations: u64,
}

/// Everything one search call shares across its frames.
pub struct SearchContext<'a, E: ?Sized> {
    pub evaluator: &'a E,
    pub root_player: PlayerId,
    pub ranking: RankingPolicy,
    pub budget: &'a SearchBudget,
    pub stats: SearchStats,
}

impl<'a, E: ?Sized> SearchContext<'a, E> {
    pub fn new(
        evaluator: &'a E,
        root_player: PlayerId,
        ranking: RankingPolicy,
        budget: &'a SearchBudget,
    ) -> Self {
        Self {
            evaluator,
            root_player,
            ranking,
            budget,
            stats: SearchStats::default(),
        }
    }
}

/// Full-window search from the root, which is always a Max layer.
pub fn search_root<S, E>(
    state: &S,
    depth: u8,
    ctx: &mut SearchContext<'_, E>,
) -> SearchResult<Option<NodeValue<S::Action>>>
where
    S: GameEngineState,
    E: StateEvaluator<S> + ?Sized,
{
    alpha_beta(state, -SCORE_INFINITY, SCORE_INFINITY, depth, Layer::Max, ctx)
}

/// Searches `state` to `depth` plies inside the `(alpha, beta)` window.
///
/// Returns `Ok(None)` when the budget ran out anywhere below this node.
pub fn alpha_beta<S, E>(
    state: &S,
    mut alpha: i32,
    mut beta: i32,
    depth: u8,
    layer: Layer,
    ctx: &mut SearchContext<'_, E>,
) -> SearchResult<Option<NodeValue<S::Action>>>
where
    S: GameEngineState,
    E: StateEvaluator<S> + ?Sized,
{
    if ctx.budget.is_exhausted() {
        return Ok(None);
    }
    ctx.stats.nodes += 1;

    if depth == 0 {
        ctx.stats.evaluations += 1;
        return Ok(Some(NodeValue {
            value: ctx.evaluator.evaluate(state, ctx.root_player),
            best_action: None,
        }));
    }

    // Finished games are scored by the engine alone, never the heuristic.
    if state.is_terminal() {
        return Ok(Some(NodeValue {
            value: final_score_differential(state, ctx.root_player),
            best_action: None,
        }));
    }

    let actions = state.legal_actions()?;
    if actions.is_empty() {
        return Err(SearchError::NoLegalActions {
            player: state.side_to_move(),
        });
    }

    let Some(candidates) = rank_actions(
        actions,
        ctx.evaluator,
        ctx.root_player,
        layer,
        ctx.ranking,
        ctx.budget,
        &mut ctx.stats.evaluations,
    ) else {
        return Ok(None);
    };

    let mut best_value = match layer {
        Layer::Max => -SCORE_INFINITY,
        Layer::Min => SCORE_INFINITY,
    };
    let mut best_action = None;

    for GeneratedAction {
        action,
        state_after,
    } in candidates
    {
        if ctx.budget.is_exhausted() {
            return Ok(None);
        }

        let child_layer = Layer::for_mover(state_after.side_to_move(), ctx.root_player);
        let Some(child) = alpha_beta(&state_after, alpha, beta, depth - 1, child_layer, ctx)?
        else {
            return Ok(None);
        };

        match layer {
            Layer::Max => {
                if best_action.is_none() || child.value > best_value {
                    best_value = child.value;
                    best_action = Some(action);
                    alpha = alpha.max(best_value);
                }
                if best_value >= beta {
                    break;
                }
            }
            Layer::Min => {
                if best_action.is_none() || child.value < best_value {
                    best_value = child.value;
                    best_action = Some(action);
                    beta = beta.min(best_value);
                }
                if best_value <= alpha {
                    break;
                }
            }
        }
    }

    Ok(Some(NodeValue {
        value: best_value,
        best_action,
    }))
}
