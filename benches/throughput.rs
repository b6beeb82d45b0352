//! Single-threaded throughput benchmarks.
//!
//! `put_get_cycle` measures the steady-state single-byte hot path with the
//! buffer near-empty; `fill_drain` measures bulk slice writes and reads at
//! full capacity.

use byte_fifo::ByteFifo;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark alternating single-byte put/pop with varying buffer sizes.
fn put_get_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_get_cycle");

    for capacity in [16, 64, 256] {
        let iterations = 100_000u64;
        group.throughput(Throughput::Bytes(iterations));
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &cap| match cap {
                16 => {
                    let fifo = ByteFifo::<16>::new();
                    b.iter(|| cycle(&fifo, iterations));
                }
                64 => {
                    let fifo = ByteFifo::<64>::new();
                    b.iter(|| cycle(&fifo, iterations));
                }
                256 => {
                    let fifo = ByteFifo::<256>::new();
                    b.iter(|| cycle(&fifo, iterations));
                }
                _ => unreachable!(),
            },
        );
    }
    group.finish();
}

fn cycle<const N: usize>(fifo: &ByteFifo<N>, iterations: u64) -> u64 {
    let mut sum = 0u64;
    for i in 0..iterations {
        fifo.put(&[i as u8]).unwrap();
        sum += u64::from(fifo.pop().unwrap());
    }
    black_box(sum)
}

/// Benchmark a full-capacity bulk write followed by a full drain.
fn fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");

    for capacity in [16, 64, 256] {
        group.throughput(Throughput::Bytes(capacity as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &cap| match cap {
                16 => {
                    let fifo = ByteFifo::<16>::new();
                    b.iter(|| fill_drain_run(&fifo, &[0xA5u8; 16], &mut [0u8; 16]));
                }
                64 => {
                    let fifo = ByteFifo::<64>::new();
                    b.iter(|| fill_drain_run(&fifo, &[0xA5u8; 64], &mut [0u8; 64]));
                }
                256 => {
                    let fifo = ByteFifo::<256>::new();
                    b.iter(|| fill_drain_run(&fifo, &[0xA5u8; 256], &mut [0u8; 256]));
                }
                _ => unreachable!(),
            },
        );
    }
    group.finish();
}

fn fill_drain_run<const N: usize>(fifo: &ByteFifo<N>, data: &[u8; N], out: &mut [u8; N]) -> u8 {
    fifo.put(black_box(data)).unwrap();
    fifo.get(out).unwrap();
    black_box(out[0])
}

criterion_group!(benches, put_get_cycle, fill_drain);
criterion_main!(benches);
