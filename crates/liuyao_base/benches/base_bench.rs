use criterion::{Criterion, black_box, criterion_group, criterion_main};
use liuyao_base::{
    DayMarkers, HexagramPattern, KinshipRelation, Stem, StemBranch, Trigram, hexagram_entry,
    hexagram_najia, hidden_spirits, line_codes_from_str, parse_line_codes, six_spirits,
};

fn table_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables");
    group.bench_function("hexagram_entry_all_64", |b| {
        b.iter(|| {
            for bits in 0..64u8 {
                hexagram_entry(black_box(HexagramPattern::from_bits(bits)))
                    .expect("table is complete");
            }
        })
    });
    group.bench_function("hexagram_najia", |b| {
        let pattern = HexagramPattern::from_bits(0b010110);
        b.iter(|| hexagram_najia(black_box(pattern)).expect("table is complete"))
    });
    group.finish();
}

fn resolver_bench(c: &mut Criterion) {
    let lines = line_codes_from_str("122130").expect("valid codes");
    let present = [KinshipRelation::Wealth, KinshipRelation::Parent, KinshipRelation::Official];

    let mut group = c.benchmark_group("resolvers");
    group.bench_function("parse_line_codes", |b| {
        b.iter(|| parse_line_codes(black_box(&lines)).expect("six lines"))
    });
    group.bench_function("hidden_spirits", |b| {
        b.iter(|| hidden_spirits(black_box(Trigram::Zhen), black_box(&present)))
    });
    group.bench_function("six_spirits", |b| b.iter(|| six_spirits(black_box(Stem::Ren))));
    group.bench_function("day_markers_all_60", |b| {
        b.iter(|| {
            for i in 0..60u8 {
                black_box(DayMarkers::for_day(StemBranch::from_cycle_index(i)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, table_bench, resolver_bench);
criterion_main!(benches);
