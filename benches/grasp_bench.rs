//! Criterion benchmarks for rotation enumeration and GRASP construction.
//!
//! Uses synthetic layered instances (tasks in consecutive time slots,
//! forward transitions within a bounded lookahead) to measure core
//! algorithm cost independent of any instance file.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crew_grasp::grasp::{GraspConfig, GraspRunner};
use crew_grasp::model::{ProblemModel, Task};
use crew_grasp::rotation::enumerate_rotations;

/// A layered instance: `n` tasks in consecutive 10-unit slots, each task
/// linked to the next `lookahead` tasks.
fn layered_instance(n: usize, lookahead: usize, time_limit: i64) -> ProblemModel {
    let tasks: Vec<Task> = (0..n)
        .map(|i| Task::new(i as i64 * 10, i as i64 * 10 + 10))
        .collect();
    let mut transitions = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n.min(i + 1 + lookahead) {
            transitions.push((i, j, ((j - i) * 3) as f64));
        }
    }
    ProblemModel::new(tasks, &transitions, time_limit)
}

fn bench_rotation_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation_enumeration");
    for &n in &[20usize, 50, 100] {
        let problem = layered_instance(n, 3, 60);
        group.bench_with_input(BenchmarkId::from_parameter(n), &problem, |b, problem| {
            b.iter(|| black_box(enumerate_rotations(problem)).len());
        });
    }
    group.finish();
}

fn bench_grasp_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("grasp_run");
    for &n in &[20usize, 50] {
        let problem = layered_instance(n, 3, 60);
        let rotations = enumerate_rotations(&problem);
        let config = GraspConfig::default()
            .with_alpha(0.2)
            .with_per_task_bonus(300.0)
            .with_perturbation_radius(5.0)
            .with_max_iterations(20)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(problem, rotations),
            |b, (problem, rotations)| {
                b.iter(|| black_box(GraspRunner::run(problem, rotations, &config)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_rotation_enumeration, bench_grasp_construction);
criterion_main!(benches);
