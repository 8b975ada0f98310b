use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cmyk_drop::core::{ActiveGroup, Board, Session, SessionConfig, Tile};
use cmyk_drop::types::{Intent, Mask};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::default().with_seed(12345)).unwrap();

    c.bench_function("session_advance_16ms", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session = Session::new(SessionConfig::default().with_seed(12345)).unwrap();
            }
            session.apply_intent(Intent::Swap);
            session.advance(black_box(0.016));
        })
    });
}

fn bench_gravity_pass(c: &mut Criterion) {
    // every column floats one row above the floor
    let mut loose = Board::new(7, 14);
    for y in 1..14 {
        for x in 0..7 {
            let mask = Mask::PRIMARIES[(x + y) as usize % 3];
            loose.set(x, y, Tile::new(x, y, mask));
        }
    }

    c.bench_function("gravity_pass_full_board", |b| {
        b.iter(|| {
            let mut board = loose.clone();
            black_box(board.apply_gravity_pass());
        })
    });
}

fn bench_clear_saturated(c: &mut Criterion) {
    c.bench_function("clear_saturated_full_board", |b| {
        b.iter(|| {
            let mut board = Board::new(7, 14);
            for y in 0..14 {
                for x in 0..7 {
                    board.set(x, y, Tile::new(x, y, Mask::K));
                }
            }
            black_box(board.clear_saturated());
        })
    });
}

fn bench_group_move(c: &mut Criterion) {
    let mut board = Board::new(7, 14);
    let mut group = ActiveGroup::spawn(&mut board, 3, &[Mask::C, Mask::M]).unwrap();
    let mut dx = 1;

    c.bench_function("group_move_sideways", |b| {
        b.iter(|| {
            if !group.move_by(&mut board, dx, 0) {
                dx = -dx;
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_gravity_pass,
    bench_clear_saturated,
    bench_group_move
);
criterion_main!(benches);
