use std::hint::black_box;
use std::thread;

use criterion::{criterion_group, criterion_main, Criterion};
use phase_gate::{NotifyPolicy, PhaseConfig, run_phase};

fn simple_work(iterations: usize) -> u64 {
    let mut sum = 0u64;
    for i in 0..iterations {
        sum = sum.wrapping_add(i as u64 * 17);
    }
    sum
}

// Same phase shape through run_phase and rayon::scope
fn bench_phase_fan_out(c: &mut Criterion, name: &str, workers: usize) {
    let mut group = c.benchmark_group(name);

    group.bench_function("phase_gate", |b| {
        let gate = phase_gate::new();
        let config = PhaseConfig::default().notify(NotifyPolicy::One);
        b.iter(|| {
            let mut results = vec![0u64; workers];
            let tasks: Vec<_> = results
                .iter_mut()
                .map(|slot| move || *slot = simple_work(100))
                .collect();

            run_phase(&gate, tasks, &config).unwrap();
            black_box(results);
        });
    });

    group.bench_function("rayon_scope", |b| {
        b.iter(|| {
            let mut results = vec![0u64; workers];
            rayon::scope(|s| {
                for slot in results.iter_mut() {
                    s.spawn(move |_| *slot = simple_work(100));
                }
            });
            black_box(results);
        });
    });

    group.finish();
}

fn bench_phase_small(c: &mut Criterion) {
    bench_phase_fan_out(c, "phase_8", 8);
}

fn bench_phase_large(c: &mut Criterion) {
    bench_phase_fan_out(c, "phase_64", 64);
}

// Raw decrement/wait cost with workers that already exist
fn bench_gate_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_round_trip");

    group.bench_function("single_thread_drain_16", |b| {
        let gate = phase_gate::new();
        b.iter(|| {
            gate.arm(16);
            gate.execute_and_wait_until_counter_zero(|| {
                for _ in 0..16 {
                    gate.decrement_and_notify_one();
                }
            });
            black_box(gate.count());
        });
    });

    group.bench_function("cross_thread_drain_4", |b| {
        let gate = phase_gate::new();
        b.iter(|| {
            gate.arm(4);
            thread::scope(|s| {
                gate.execute_and_wait_until_counter_zero(|| {
                    for _ in 0..4 {
                        s.spawn(|| gate.decrement_and_notify_one());
                    }
                });
            });
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_phase_small,
    bench_phase_large,
    bench_gate_round_trip
);

criterion_main!(benches);
