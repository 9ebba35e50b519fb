//! Inner-loop benchmarks: one search trial is a position walk per keyword
//! plus a mark array clear.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keypos::{MarkArray, Positions};

const KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return",
    "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
    "void", "volatile", "while",
];

fn benchmark_trial(c: &mut Criterion) {
    let positions: Positions = "1,2,$".parse().expect("valid positions");
    let mut seen = MarkArray::new(64);

    c.bench_function("trial_32_keywords", |b| {
        b.iter(|| {
            let mut collisions = 0usize;
            for keyword in KEYWORDS {
                let sum: usize = positions.select(keyword.as_bytes()).map(usize::from).sum();
                if seen.set_bit((sum + keyword.len()) % 64) {
                    collisions += 1;
                }
            }
            seen.clear();
            black_box(collisions)
        });
    });
}

fn benchmark_add_remove(c: &mut Criterion) {
    c.bench_function("add_remove_16", |b| {
        b.iter(|| {
            let mut set = Positions::new();
            for pos in (0..16).rev() {
                set.add(black_box(pos * 3));
            }
            for pos in 0..16 {
                set.remove(black_box(pos * 3));
            }
            black_box(set.size())
        });
    });
}

fn benchmark_clear(c: &mut Criterion) {
    let mut seen = MarkArray::new(1 << 16);
    c.bench_function("clear_64k", |b| {
        b.iter(|| {
            seen.set_bit(black_box(1234));
            seen.clear();
        });
    });
}

criterion_group!(benches, benchmark_trial, benchmark_add_remove, benchmark_clear);
criterion_main!(benches);
