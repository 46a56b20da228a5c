use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::NaiveDate;
use studyplan_core::allocator::{allocate, weakest};
use studyplan_core::engine::StudyPlanner;
use studyplan_core::model::{Difficulty, PlanRequest, Subject};
use studyplan_core::progress::ProgressLog;

fn subjects(n: usize) -> (Vec<String>, Vec<u32>) {
    let names = (0..n).map(|i| format!("Subject {i}")).collect();
    let weights = (0..n).map(|i| (i % 3) as u32 + 1).collect();
    (names, weights)
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");

    for n in [1usize, 3, 10] {
        let (names, weights) = subjects(n);
        group.bench_function(format!("subjects={n}"), |b| {
            b.iter(|| allocate(black_box(&names), black_box(&weights), black_box(6.0)))
        });
    }

    let (names, weights) = subjects(10);
    group.bench_function("weakest/subjects=10", |b| {
        b.iter(|| weakest(black_box(&names), black_box(&weights)))
    });

    group.finish();
}

fn bench_full_plan(c: &mut Criterion) {
    let planner = StudyPlanner::default();
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let request = PlanRequest {
        subjects: (0..10)
            .map(|i| Subject::new(format!("Subject {i}"), Difficulty::ALL[i % 3]))
            .collect(),
        daily_hours: 8,
        exam_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
    };

    c.bench_function("plan/subjects=10", |b| {
        b.iter(|| planner.plan(black_box(&request), black_box(today)))
    });
}

fn bench_progress_summary(c: &mut Criterion) {
    let mut log = ProgressLog::new();
    for day in 0..365 {
        log.append(f64::from(day % 9) * 0.5);
    }
    c.bench_function("progress_summary/days=365", |b| {
        b.iter(|| log.summary(black_box(4.0)))
    });
}

criterion_group!(benches, bench_allocate, bench_full_plan, bench_progress_summary);
criterion_main!(benches);
