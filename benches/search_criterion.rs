use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use divercite_search::game_state::divercite_board::DiverciteBoard;
use divercite_search::game_state::game_engine::GameEngineState;
use divercite_search::search::evaluation::{DiversityEvaluator, StateEvaluator};
use divercite_search::search::iterative_deepening::{iterative_deepening_search, SearchConfig};
use divercite_search::search::search_budget::SearchBudget;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    opening_plies: usize,
    depths: &'static [u8],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "early",
        opening_plies: 4,
        depths: &[1, 2],
    },
    BenchCase {
        name: "middle",
        opening_plies: 20,
        depths: &[1, 2, 3],
    },
    BenchCase {
        name: "late",
        opening_plies: 32,
        depths: &[2, 4, 6],
    },
];

fn board_after(plies: usize) -> DiverciteBoard {
    let mut board = DiverciteBoard::new_game();
    for ply in 0..plies {
        let actions = board
            .legal_actions()
            .expect("benchmark move generation should succeed");
        board = actions[(ply * 13) % actions.len()].state_after.clone();
    }
    board
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");

    for case in CASES {
        let board = board_after(case.opening_plies);
        let perspective = board.side_to_move();
        group.bench_function(BenchmarkId::from_parameter(case.name), |b| {
            b.iter(|| DiversityEvaluator.evaluate(black_box(&board), perspective));
        });
    }

    group.finish();
}

fn bench_fixed_depth_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_depth_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let board = board_after(case.opening_plies);

        for &depth in case.depths {
            let config = SearchConfig {
                max_depth: Some(depth),
                ..SearchConfig::default()
            };

            // Correctness guard before benchmarking.
            let warmup = iterative_deepening_search(
                &board,
                &DiversityEvaluator,
                config,
                &SearchBudget::unlimited(),
            )
            .expect("search should run");
            assert_eq!(warmup.reached_depth, depth, "{} depth {}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                &depth,
                |b, _| {
                    b.iter(|| {
                        let report = iterative_deepening_search(
                            black_box(&board),
                            &DiversityEvaluator,
                            config,
                            &SearchBudget::unlimited(),
                        )
                        .expect("search benchmark run should succeed");
                        black_box(report.best_action)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_evaluation, bench_fixed_depth_search);
criterion_main!(search_benches);
