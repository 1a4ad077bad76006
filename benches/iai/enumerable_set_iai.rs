//! IAI-Callgrind benchmark for EnumerableSet mutation.
//!
//! Measures instruction counts for building a set, then removing half of it
//! from the front (every removal moves the last member).
//! Data sizes: 100, 1000, 10000.

use enumerable_set::collections::EnumerableSet;
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

// Setup functions for different data sizes
fn setup_values_100() -> Vec<u64> {
    (0..100).collect()
}

fn setup_values_1000() -> Vec<u64> {
    (0..1000).collect()
}

fn setup_values_10000() -> Vec<u64> {
    (0..10000).collect()
}

fn setup_set_100() -> EnumerableSet<u64> {
    (0..100).collect()
}

fn setup_set_1000() -> EnumerableSet<u64> {
    (0..1000).collect()
}

fn setup_set_10000() -> EnumerableSet<u64> {
    (0..10000).collect()
}

fn remove_front_half(mut set: EnumerableSet<u64>) -> EnumerableSet<u64> {
    let half = set.len() as u64 / 2;
    for value in 0..half {
        set.remove(black_box(&value));
    }
    set
}

// add benchmarks
#[library_benchmark]
#[bench::with_setup(setup_values_100())]
fn add_100(values: Vec<u64>) -> EnumerableSet<u64> {
    let mut set = EnumerableSet::new();
    set.add_all(black_box(values));
    black_box(set)
}

#[library_benchmark]
#[bench::with_setup(setup_values_1000())]
fn add_1000(values: Vec<u64>) -> EnumerableSet<u64> {
    let mut set = EnumerableSet::new();
    set.add_all(black_box(values));
    black_box(set)
}

#[library_benchmark]
#[bench::with_setup(setup_values_10000())]
fn add_10000(values: Vec<u64>) -> EnumerableSet<u64> {
    let mut set = EnumerableSet::new();
    set.add_all(black_box(values));
    black_box(set)
}

// remove benchmarks
#[library_benchmark]
#[bench::with_setup(setup_set_100())]
fn remove_100(set: EnumerableSet<u64>) -> EnumerableSet<u64> {
    black_box(remove_front_half(black_box(set)))
}

#[library_benchmark]
#[bench::with_setup(setup_set_1000())]
fn remove_1000(set: EnumerableSet<u64>) -> EnumerableSet<u64> {
    black_box(remove_front_half(black_box(set)))
}

#[library_benchmark]
#[bench::with_setup(setup_set_10000())]
fn remove_10000(set: EnumerableSet<u64>) -> EnumerableSet<u64> {
    black_box(remove_front_half(black_box(set)))
}

library_benchmark_group!(
    name = enumerable_set_group;
    benchmarks =
        add_100, add_1000, add_10000,
        remove_100, remove_1000, remove_10000
);

main!(library_benchmark_groups = enumerable_set_group);
