//! Benchmarks for the segmentation and draw hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wujiang::{draw_partitioned, segment, BanList, Roster};

fn bench_segment(c: &mut Criterion) {
    let roster = Roster::builtin();
    let texts: Vec<String> = roster
        .packs()
        .iter()
        .flat_map(|p| p.generals.iter().map(|g| g.skills.clone()))
        .collect();

    c.bench_function("segment_builtin_roster", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(segment(text));
            }
        })
    });
}

fn bench_draw(c: &mut Criterion) {
    let roster = Roster::builtin();
    let pool = roster.available(&["std", "wind", "fire", "woods"], &BanList::new());

    c.bench_function("draw_landlord", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| black_box(draw_partitioned(&pool, &[5, 3, 3], &mut rng)))
    });
}

criterion_group!(benches, bench_segment, bench_draw);
criterion_main!(benches);
