//! Iterative deepening over the alpha-beta core.
//!
//! Depth 1, 2, 3... are searched in turn against one shared budget. A depth
//! only counts once it finishes; when the budget runs out mid-depth that
//! attempt is thrown away and the last completed depth stands.

use crate::game_state::game_engine::GameEngineState;
use crate::search::alpha_beta::{search_root, SearchContext};
use crate::search::evaluation::StateEvaluator;
use crate::search::move_ranker::RankingPolicy;
use crate::search::search_budget::SearchBudget;
use crate::search::search_errors::SearchResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Extra cap on depth. The game's remaining plies always cap it.
    pub max_depth: Option<u8>,
    pub ranking: RankingPolicy,
}

/// Result of one fully completed depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthRecord<A> {
    pub depth: u8,
    pub value: i32,
    pub best_action: Option<A>,
    pub nodes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<A> {
    /// Move of the deepest completed depth.
    pub best_action: Option<A>,
    pub best_value: i32,
    pub reached_depth: u8,
    /// Depth that was cut short by the budget, if any.
    pub aborted_depth: Option<u8>,
    pub depth_limit: u8,
    pub nodes: u64,
    pub evaluations: u64,
    pub elapsed_ms: u64,
    /// Completed depths in completion order.
    pub depth_history: Vec<DepthRecord<A>>,
}

impl<A> SearchReport<A> {
    pub fn empty(depth_limit: u8) -> Self {
        Self {
            best_action: None,
            best_value: 0,
            reached_depth: 0,
            aborted_depth: None,
            depth_limit,
            nodes: 0,
            evaluations: 0,
            elapsed_ms: 0,
            depth_history: Vec::new(),
        }
    }
}

/// Deepest depth worth searching from `state`.
pub fn depth_limit_for<S: GameEngineState>(state: &S, config: &SearchConfig) -> u8 {
    let ply_bound = state.max_remaining_plies().min(u32::from(u8::MAX)) as u8;
    match config.max_depth {
        Some(cap) => cap.min(ply_bound),
        None => ply_bound,
    }
}

pub fn iterative_deepening_search<S, E>(
    game_state: &S,
    evaluator: &E,
    config: SearchConfig,
    budget: &SearchBudget,
) -> SearchResult<SearchReport<S::Action>>
where
    S: GameEngineState,
    E: StateEvaluator<S> + ?Sized,
{
    let root_player = game_state.side_to_move();
    let depth_limit = depth_limit_for(game_state, &config);
    let mut report = SearchReport::empty(depth_limit);

    for depth in 1..=depth_limit {
        if budget.is_exhausted() {
            break;
        }

        let mut ctx = SearchContext::new(evaluator, root_player, config.ranking, budget);
        let outcome = search_root(game_state, depth, &mut ctx)?;
        report.nodes += ctx.stats.nodes;
        report.evaluations += ctx.stats.evaluations;

        let Some(completed) = outcome else {
            report.aborted_depth = Some(depth);
            break;
        };

        report.best_action = completed.best_action.clone();
        report.best_value = completed.value;
        report.reached_depth = depth;
        report.depth_history.push(DepthRecord {
            depth,
            value: completed.value,
            best_action: completed.best_action,
            nodes: ctx.stats.nodes,
        });
    }

    report.elapsed_ms = budget.elapsed().as_millis() as u64;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::game_state::divercite_board::DiverciteBoard;
    use crate::game_state::divercite_types::PlayerId;
    use crate::game_state::synthetic_tree::SyntheticTree;
    use crate::search::evaluation::{DiversityEvaluator, ScoreDifferenceEvaluator};

    struct SlowEvaluator {
        delay: Duration,
    }

    impl<S: GameEngineState> StateEvaluator<S> for SlowEvaluator {
        fn evaluate(&self, state: &S, perspective: PlayerId) -> i32 {
            thread::sleep(self.delay);
            DiversityEvaluator.evaluate(state, perspective)
        }
    }

    fn opened_board(plies: usize) -> DiverciteBoard {
        let mut board = DiverciteBoard::new_game();
        for _ in 0..plies {
            let actions = board.legal_actions().expect("movegen");
            // Spread the opening out a little so positions are not trivial.
            let pick = actions.len() / 2;
            board = actions[pick].state_after.clone();
        }
        board
    }

    #[test]
    fn depth_is_capped_by_remaining_plies() {
        let mut rng = StdRng::seed_from_u64(21);
        let state = SyntheticTree::random(&mut rng, 2, 3, 20).root();

        let report = iterative_deepening_search(
            &state,
            &ScoreDifferenceEvaluator,
            SearchConfig::default(),
            &SearchBudget::unlimited(),
        )
        .expect("synthetic search cannot fail");

        assert_eq!(report.depth_limit, 2);
        assert_eq!(report.reached_depth, 2);
        assert_eq!(report.aborted_depth, None);
    }

    #[test]
    fn explicit_max_depth_is_honored() {
        let board = opened_board(30);

        let report = iterative_deepening_search(
            &board,
            &DiversityEvaluator,
            SearchConfig {
                max_depth: Some(2),
                ..SearchConfig::default()
            },
            &SearchBudget::unlimited(),
        )
        .expect("board search should run");

        assert_eq!(report.reached_depth, 2);
        assert_eq!(report.depth_history.len(), 2);
        assert!(report.best_action.is_some());
    }

    #[test]
    fn completed_depths_are_recorded_in_order_and_last_one_wins() {
        let board = opened_board(34);

        let report = iterative_deepening_search(
            &board,
            &DiversityEvaluator,
            SearchConfig::default(),
            &SearchBudget::unlimited(),
        )
        .expect("board search should run");

        let depths: Vec<u8> = report.depth_history.iter().map(|r| r.depth).collect();
        let expected: Vec<u8> = (1..=report.reached_depth).collect();
        assert_eq!(depths, expected);
        assert_eq!(report.reached_depth, report.depth_limit);

        let last = report.depth_history.last().expect("at least depth 1 completed");
        assert_eq!(report.best_action, last.best_action);
        assert_eq!(report.best_value, last.value);
    }

    #[test]
    fn aborted_depth_falls_back_to_previous_result() {
        let board = opened_board(10);
        let budget = SearchBudget::starting_now(Duration::from_millis(400));

        let report = iterative_deepening_search(
            &board,
            &SlowEvaluator {
                delay: Duration::from_micros(200),
            },
            SearchConfig::default(),
            &budget,
        )
        .expect("board search should run");

        assert!(report.aborted_depth.is_some(), "slow search should hit the budget");
        assert!(report.reached_depth >= 1, "depth 1 fits comfortably in the budget");
        assert_eq!(report.aborted_depth, Some(report.reached_depth + 1));

        let last = report.depth_history.last().expect("depth 1 completed");
        assert_eq!(report.best_action, last.best_action);
    }

    #[test]
    fn budget_overrun_is_bounded_by_one_evaluation() {
        let board = opened_board(6);
        let delay = Duration::from_millis(2);
        let allotted = Duration::from_millis(40);
        let budget = SearchBudget::starting_now(allotted);

        let report = iterative_deepening_search(
            &board,
            &SlowEvaluator { delay },
            SearchConfig::default(),
            &budget,
        )
        .expect("board search should run");

        let elapsed = budget.elapsed();
        assert!(report.aborted_depth.is_some());
        // One evaluation plus scheduling slack.
        assert!(
            elapsed <= allotted + delay + Duration::from_millis(25),
            "search overran its budget: {elapsed:?}"
        );
    }

    #[test]
    fn terminal_position_searches_nothing() {
        let mut board = DiverciteBoard::new_game();
        while !board.is_terminal() {
            board = board.legal_actions().expect("movegen")[0].state_after.clone();
        }

        let report = iterative_deepening_search(
            &board,
            &DiversityEvaluator,
            SearchConfig::default(),
            &SearchBudget::unlimited(),
        )
        .expect("terminal search should run");

        assert_eq!(report.depth_limit, 0);
        assert_eq!(report.best_action, None);
        assert!(report.depth_history.is_empty());
    }
}
