use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Field, Piece, RoundConfig, Session, SimpleRng};
use blockfall::types::{BlockKind, Intent};

fn bench_update(c: &mut Criterion) {
    let mut session = Session::new(RoundConfig::default(), SimpleRng::new(12345));
    let t0 = Instant::now();
    session.update(t0, None);
    let mut t = 0u64;

    c.bench_function("session_update_16ms", |b| {
        b.iter(|| {
            t += 16;
            let now = t0 + Duration::from_millis(t);
            if !session.round().is_playing() {
                session.update(now, Some(Intent::Confirm));
            }
            session.update(black_box(now), Some(Intent::MoveLeft))
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut field = Field::new();
            for y in 16..20 {
                for x in 0..10 {
                    field.set(x, y, BlockKind::I);
                }
            }
            field.clear_full_lines()
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let field = Field::from_rows(&["IIII..IIII", "OOOOO.OOOO"]);
    let piece = Piece::new(BlockKind::T);

    c.bench_function("can_place", |b| {
        b.iter(|| field.can_place(black_box(&piece), black_box(0), black_box(1)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = Session::new(RoundConfig::default(), SimpleRng::new(12345));
    session.update(Instant::now(), None);
    let mut snap = Default::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_line_clear,
    bench_can_place,
    bench_snapshot
);
criterion_main!(benches);
