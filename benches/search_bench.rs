use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reversi::search::Searcher;
use reversi::{Board, GameConfig, GameState, Player, Pos};

fn midgame_position() -> GameState {
    let mut game = GameState::new(GameConfig::agents(1));
    for _ in 0..16 {
        game = game.play_agent_turn().expect("agent move");
    }
    game
}

fn bench_search_start(c: &mut Criterion) {
    let board = Board::new();
    let mut group = c.benchmark_group("search_start");
    for depth in 1..=5u8 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut searcher = Searcher::default();
                black_box(searcher.search(black_box(&board), Player::Black, depth))
            })
        });
    }
    group.finish();
}

fn bench_search_midgame(c: &mut Criterion) {
    let game = midgame_position();
    let board = *game.board();
    let player = game.to_move();
    c.bench_function("search_midgame_depth4", |b| {
        b.iter(|| {
            let mut searcher = Searcher::default();
            black_box(searcher.search(black_box(&board), player, 4))
        })
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("legal_moves_startpos", |b| {
        b.iter(|| black_box(reversi::rules::legal_moves(black_box(&board), Player::Black)))
    });
    c.bench_function("apply_move_startpos", |b| {
        b.iter(|| black_box(reversi::rules::apply_move(black_box(&board), Pos::new(2, 3), Player::Black)))
    });
}

criterion_group!(benches, bench_search_start, bench_search_midgame, bench_legal_moves);
criterion_main!(benches);
