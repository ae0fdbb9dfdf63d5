use criterion::{Criterion, criterion_group, criterion_main};
use minimax_tictactoe::{Board, Player, best_move};
use std::hint::black_box;

fn board_from(moves: &[usize]) -> Board {
    let mut board = Board::new();
    let mut player = Player::X;
    for &n in moves {
        board.place(n, player).expect("legal move");
        player = player.opponent();
    }
    board
}

fn bench_full_game() {
    let mut board = Board::new();
    let mut player = Player::X;
    while !board.terminal() {
        let pos = match player {
            Player::X => board.empty_positions()[0],
            Player::O => best_move(&board),
        };
        board.place(pos.number(), player).expect("legal move");
        player = player.opponent();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    let corner_opening = board_from(&[1]);
    group.bench_function("reply_to_corner_opening", |b| {
        b.iter(|| best_move(black_box(&corner_opening)))
    });

    let center_opening = board_from(&[5]);
    group.bench_function("reply_to_center_opening", |b| {
        b.iter(|| best_move(black_box(&center_opening)))
    });

    let mid_game = board_from(&[5, 1, 9]);
    group.bench_function("mid_game", |b| b.iter(|| best_move(black_box(&mid_game))));

    group.bench_function("full_game_vs_naive_human", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
