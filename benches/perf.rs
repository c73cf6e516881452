use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use matchday_terminal::schedule::{group_by_date, parse_schedule};
use matchday_terminal::teams::team_entries;

fn sample_table(rows: usize) -> String {
    let mut out = String::from("date,time,home,away,stadium,category,league,match_no\n");
    for idx in 0..rows {
        out.push_str(&format!(
            "2024-{:02}-{:02},{:02}:00,Team {},Team {},Stadium {},U18,League A,{}\n",
            idx % 12 + 1,
            idx % 28 + 1,
            idx % 12 + 10,
            idx % 16,
            (idx + 7) % 16,
            idx % 5,
            idx + 1,
        ));
    }
    out
}

fn bench_parse_schedule(c: &mut Criterion) {
    let table = sample_table(512);
    c.bench_function("parse_schedule", |b| {
        b.iter(|| {
            let records = parse_schedule(black_box(&table));
            black_box(records.len());
        })
    });
}

fn bench_group_by_date(c: &mut Criterion) {
    let records = parse_schedule(&sample_table(512));
    c.bench_function("group_by_date", |b| {
        b.iter(|| {
            let days = group_by_date(black_box(&records));
            black_box(days.len());
        })
    });
}

fn bench_team_entries(c: &mut Criterion) {
    let records = parse_schedule(&sample_table(512));
    c.bench_function("team_entries", |b| {
        b.iter(|| {
            let teams = team_entries(black_box(&records));
            black_box(teams.len());
        })
    });
}

criterion_group!(
    benches,
    bench_parse_schedule,
    bench_group_by_date,
    bench_team_entries
);
criterion_main!(benches);
