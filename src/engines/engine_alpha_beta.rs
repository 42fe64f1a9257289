//! Time-managed alpha-beta player.
//!
//! One parameterized engine covers every variant: the evaluator is chosen by
//! `EvaluatorKind`, the ranking fraction and depth cap live in
//! `SearchConfig`, and the first-move shortcut is a flag. The only state kept
//! between turns is the `PlayerSession`.

use std::time::Duration;

use crate::engines::player_session::PlayerSession;
use crate::engines::player_trait::{Player, PlayerOutput};
use crate::engines::time_management::TimeManagementStrategy;
use crate::game_state::game_engine::GameEngineState;
use crate::search::evaluation::{DiversityEvaluator, ScoreDifferenceEvaluator, StateEvaluator};
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig, SearchReport};
use crate::search::search_budget::SearchBudget;
use crate::search::search_errors::{SearchError, SearchResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvaluatorKind {
    /// Engine score plus the city diversity index.
    #[default]
    Diversity,
    /// Engine score only.
    ScoreDifference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBetaConfig {
    pub search: SearchConfig,
    pub time_management: TimeManagementStrategy,
    /// Play the first legal action without searching on the session's first move.
    pub first_move_shortcut: bool,
    pub evaluator: EvaluatorKind,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            time_management: TimeManagementStrategy::default(),
            first_move_shortcut: true,
            evaluator: EvaluatorKind::Diversity,
        }
    }
}

/// What one `compute_action` call decided and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<A> {
    pub action: A,
    pub report: SearchReport<A>,
    pub budget: Duration,
    pub first_move_shortcut: bool,
    /// Not even depth 1 completed; the first legal action was played.
    pub fell_back: bool,
}

/// Picks a move for `game_state` within `remaining_time`.
///
/// All search bookkeeping is local to this call; only `session` persists.
pub fn compute_action<S, E>(
    config: &AlphaBetaConfig,
    session: &mut PlayerSession,
    evaluator: &E,
    game_state: &S,
    remaining_time: Duration,
) -> SearchResult<SearchOutcome<S::Action>>
where
    S: GameEngineState,
    E: StateEvaluator<S> + ?Sized,
{
    let allotted = config
        .time_management
        .per_move_budget(game_state, remaining_time);
    let budget = SearchBudget::starting_now(allotted);

    // Taken before searching so the fallback costs nothing once time is up.
    let first_action = first_legal_action(game_state)?;

    if config.first_move_shortcut && session.is_first_move() {
        session.record_move();
        let mut report = SearchReport::empty(0);
        report.elapsed_ms = budget.elapsed().as_millis() as u64;
        return Ok(SearchOutcome {
            action: first_action,
            report,
            budget: budget.allotted(),
            first_move_shortcut: true,
            fell_back: false,
        });
    }

    let report = iterative_deepening_search(game_state, evaluator, config.search, &budget)?;

    let (action, fell_back) = match report.best_action.clone() {
        Some(action) => (action, false),
        None => (first_action, true),
    };
    session.record_move();

    Ok(SearchOutcome {
        action,
        report,
        budget: budget.allotted(),
        first_move_shortcut: false,
        fell_back,
    })
}

fn first_legal_action<S: GameEngineState>(game_state: &S) -> SearchResult<S::Action> {
    game_state
        .legal_actions()?
        .into_iter()
        .next()
        .map(|generated| generated.action)
        .ok_or(SearchError::NoLegalActions {
            player: game_state.side_to_move(),
        })
}

pub struct AlphaBetaPlayer {
    config: AlphaBetaConfig,
    session: PlayerSession,
    diversity_evaluator: DiversityEvaluator,
    score_difference_evaluator: ScoreDifferenceEvaluator,
}

impl Default for AlphaBetaPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaBetaPlayer {
    pub fn new() -> Self {
        Self::with_config(AlphaBetaConfig::default())
    }

    pub fn with_config(config: AlphaBetaConfig) -> Self {
        Self {
            config,
            session: PlayerSession::new(),
            diversity_evaluator: DiversityEvaluator,
            score_difference_evaluator: ScoreDifferenceEvaluator,
        }
    }

    /// Score-only evaluation to a fixed depth, searching from the very first
    /// move. The clock still bounds the search.
    pub fn fixed_depth(depth: u8) -> Self {
        Self::with_config(AlphaBetaConfig {
            search: SearchConfig {
                max_depth: Some(depth),
                ..SearchConfig::default()
            },
            time_management: TimeManagementStrategy::RemainingClock,
            first_move_shortcut: false,
            evaluator: EvaluatorKind::ScoreDifference,
        })
    }

    #[inline]
    pub fn config(&self) -> &AlphaBetaConfig {
        &self.config
    }

    #[inline]
    pub fn session(&self) -> &PlayerSession {
        &self.session
    }

    pub fn compute_action<S: GameEngineState>(
        &mut self,
        game_state: &S,
        remaining_time: Duration,
    ) -> SearchResult<SearchOutcome<S::Action>> {
        match self.config.evaluator {
            EvaluatorKind::Diversity => compute_action(
                &self.config,
                &mut self.session,
                &self.diversity_evaluator,
                game_state,
                remaining_time,
            ),
            EvaluatorKind::ScoreDifference => compute_action(
                &self.config,
                &mut self.session,
                &self.score_difference_evaluator,
                game_state,
                remaining_time,
            ),
        }
    }
}

fn parse_bool_option(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!("invalid boolean value '{value}'")),
    }
}

fn parse_number_option<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, String> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| format!("invalid {name} value '{value}'"))
}

impl<S: GameEngineState> Player<S> for AlphaBetaPlayer {
    fn name(&self) -> &str {
        "Divercite AlphaBeta"
    }

    fn new_game(&mut self) {
        self.session.reset();
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("RankDivisor") {
            let divisor: usize = parse_number_option(name, value)?;
            self.config.search.ranking.keep_divisor = divisor.max(1);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("RankMinimum") {
            let minimum: usize = parse_number_option(name, value)?;
            self.config.search.ranking.min_keep = minimum.max(1);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("MaxDepth") {
            let depth: u8 = parse_number_option(name, value)?;
            self.config.search.max_depth = (depth > 0).then_some(depth);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("TimeDivisor") {
            let divisor: u32 = parse_number_option(name, value)?;
            self.config.time_management = TimeManagementStrategy::FractionOfRemaining {
                divisor: divisor.max(1),
            };
            return Ok(());
        }
        if name.eq_ignore_ascii_case("FirstMoveShortcut") {
            self.config.first_move_shortcut = parse_bool_option(value)?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Evaluator") {
            self.config.evaluator = match value.trim().to_ascii_lowercase().as_str() {
                "diversity" => EvaluatorKind::Diversity,
                "score" => EvaluatorKind::ScoreDifference,
                _ => return Err(format!("invalid Evaluator value '{value}'")),
            };
            return Ok(());
        }
        Ok(())
    }

    fn choose_action(
        &mut self,
        game_state: &S,
        remaining_time: Duration,
    ) -> Result<PlayerOutput<S::Action>, String> {
        let outcome = self
            .compute_action(game_state, remaining_time)
            .map_err(|e| e.to_string())?;
        let report = &outcome.report;

        let mut out = PlayerOutput::new(outcome.action.clone());
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} evals {} time {}",
            report.reached_depth,
            report.best_value,
            report.nodes,
            report.evaluations,
            report.elapsed_ms
        ));
        out.info_lines.push(format!(
            "info string alpha_beta_player budget_ms {}",
            outcome.budget.as_millis()
        ));
        out.info_lines.push(format!(
            "info string alpha_beta_player evaluator {:?}",
            self.config().evaluator
        ));
        out.info_lines.push(format!(
            "info string alpha_beta_player depth_limit {}",
            report.depth_limit
        ));
        if let Some(depth) = report.aborted_depth {
            out.info_lines.push(format!(
                "info string alpha_beta_player aborted_depth {depth}"
            ));
        }
        if outcome.first_move_shortcut {
            out.info_lines
                .push("info string alpha_beta_player first_move_shortcut".to_owned());
        }
        if outcome.fell_back {
            out.info_lines
                .push("info string alpha_beta_player fallback first_legal_action".to_owned());
        }
        out.info_lines.push(format!(
            "info string alpha_beta_player moves_played {}",
            self.session().moves_played()
        ));

        Ok(out)
    }
}
