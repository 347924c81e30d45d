// Copyright 2026 scoped Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![expect(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use scoped::prelude::*;

#[derive(Debug, Clone, Default)]
struct Config {
    capacity: usize,
    shards: usize,
    name: String,
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    group.bench_function("scoped", |b| {
        b.iter(|| {
            black_box(Config::default().apply(|c| {
                c.capacity = black_box(1024);
                c.shards = black_box(8);
            }))
        })
    });
    group.bench_function("manual", |b| {
        b.iter(|| {
            black_box(Config {
                capacity: black_box(1024),
                shards: black_box(8),
                ..Default::default()
            })
        })
    });
    group.finish();
}

fn bench_let(c: &mut Criterion) {
    let config = Config {
        name: "bench".to_string(),
        ..Default::default()
    };
    let mut group = c.benchmark_group("let");
    group.bench_function("scoped", |b| b.iter(|| black_box(&config).let_(|c| c.name.len() + c.capacity)));
    group.bench_function("manual", |b| {
        b.iter(|| {
            let c = black_box(&config);
            c.name.len() + c.capacity
        })
    });
    group.finish();
}

fn bench_take_if(c: &mut Criterion) {
    let mut group = c.benchmark_group("take_if");
    group.bench_function("scoped", |b| {
        b.iter(|| (0..1024u64).filter_map(|i| black_box(i).take_if(|i| i % 3 == 0)).sum::<u64>())
    });
    group.bench_function("manual", |b| {
        b.iter(|| {
            (0..1024u64)
                .filter_map(|i| {
                    let i = black_box(i);
                    if i % 3 == 0 {
                        Some(i)
                    } else {
                        None
                    }
                })
                .sum::<u64>()
        })
    });
    group.finish();
}

fn bench_with(c: &mut Criterion) {
    let base = Config::default();
    let mut group = c.benchmark_group("with");
    group.bench_function("scoped", |b| {
        b.iter(|| {
            with(black_box(base.shards), |s| {
                *s += 1;
                *s * 2
            })
        })
    });
    group.bench_function("manual", |b| {
        b.iter(|| {
            let mut s = black_box(base.shards);
            s += 1;
            s * 2
        })
    });
    group.finish();
}

criterion_group!(benches, bench_apply, bench_let, bench_take_if, bench_with);
criterion_main!(benches);
