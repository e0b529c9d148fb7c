use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quantum_chess::game_state::chess_types::{Color, PieceKind, Position};
use quantum_chess::move_generation::legal_move_generator::all_legal_moves;
use quantum_chess::move_generation::perft::perft;
use quantum_chess::quantum::superposition::Superposition;
use quantum_chess::utils::fen_parser::parse_position;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

fn load(case: &BenchCase) -> Position {
    parse_position(case.fen)
        .unwrap_or_else(|e| panic!("invalid FEN in bench case {}: {e}", case.name))
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));

    for case in CASES {
        let position = load(case);
        for (idx, expected) in case.expected_nodes.iter().copied().enumerate() {
            let depth = (idx + 1) as u8;
            let nodes = perft(&position, depth).expect("perft should succeed");
            assert_eq!(nodes, expected, "{} depth {depth}", case.name);

            group.throughput(Throughput::Elements(expected));
            group.bench_with_input(
                BenchmarkId::new(case.name, format!("d{depth}")),
                &depth,
                |b, &d| b.iter(|| perft(black_box(&position), black_box(d)).expect("perft should succeed")),
            );
        }
    }

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_legal_moves");

    let classical = Position::new_game(3);
    group.bench_function("startpos", |b| {
        b.iter(|| all_legal_moves(black_box(&classical), Color::Light).expect("king present"))
    });

    // Both white knights split across the third rank.
    let mut quantum = Position::new_game(3);
    quantum.board.take(1);
    quantum.board.take(6);
    quantum.superpositions.push(
        Superposition::new(1, Color::Light, PieceKind::Knight, [16, 18]).expect("distinct squares"),
    );
    quantum.superpositions.push(
        Superposition::new(2, Color::Light, PieceKind::Knight, [21, 23]).expect("distinct squares"),
    );
    group.bench_function("split_knights", |b| {
        b.iter(|| all_legal_moves(black_box(&quantum), Color::Light).expect("king present"))
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_legal_moves);
criterion_main!(benches);
