//! Performance benchmarks for the Attendance Engine.
//!
//! This benchmark suite verifies that the aggregation engine scales as
//! O(employees × days-in-range) on realistic populations:
//! - Single-day snapshot over 100 employees
//! - Single-day snapshot over 1000 employees
//! - 7-day range over 100 employees
//! - 30-day range over 1000 employees
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::aggregation::{PopulationFilter, aggregate};
use attendance_engine::config::PolicyConfig;
use attendance_engine::models::{AttendanceRecord, DateRange, Employee, Gender, LeaveEpisode};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Builds a synthetic population cycling through schedules and shifts.
fn create_population(size: usize) -> Vec<Employee> {
    let schedules = ["A", "B", "C"];
    let shifts = ["Shift 1", "Shift 2", "Shift 3"];
    let sectors = ["Assembly", "Welding", "Packing", "Quality"];

    (0..size)
        .map(|i| Employee {
            id: format!("emp_{:04}", i),
            name: format!("Employee {:04}", i),
            gender: if i % 2 == 0 { Gender::Female } else { Gender::Male },
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 15),
            hire_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            termination_date: None,
            shift_start: NaiveTime::from_hms_opt(5, 25, 0),
            schedule: Some(schedules[i % schedules.len()].to_string()),
            sector: Some(sectors[i % sectors.len()].to_string()),
            company: Some("Acme".to_string()),
            role: Some("Machine Operator".to_string()),
            shift: Some(shifts[i % shifts.len()].to_string()),
            supervisor_id: None,
        })
        .collect()
}

/// Builds one punch per employee per range day (minus every third employee,
/// to exercise the absence paths too).
fn create_batch(population: &[Employee], range: &DateRange) -> Vec<AttendanceRecord> {
    let mut batch = Vec::new();
    let mut sequence = 0u64;

    let mut day = range.start;
    while day <= range.end {
        for (i, employee) in population.iter().enumerate() {
            if i % 3 == 2 {
                continue;
            }
            sequence += 1;
            batch.push(AttendanceRecord {
                employee_id: employee.id.clone(),
                day,
                clock_in: Some(NaiveDateTime::new(
                    day,
                    NaiveTime::from_hms_opt(5, 25, 0).unwrap(),
                )),
                clock_out: Some(NaiveDateTime::new(
                    day,
                    NaiveTime::from_hms_opt(13, 40, 0).unwrap(),
                )),
                absence_type: None,
                manual: false,
                validated: true,
                recorded_by: None,
                sequence,
            });
        }
        day = day.checked_add_days(Days::new(1)).unwrap();
    }

    batch
}

fn bench_single_day_snapshot(c: &mut Criterion) {
    let config = PolicyConfig::default();
    let leaves: Vec<LeaveEpisode> = Vec::new();
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
    )
    .unwrap();

    let mut group = c.benchmark_group("single_day_snapshot");
    for size in [100usize, 1000] {
        let population = create_population(size);
        let batch = create_batch(&population, &range);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                aggregate(
                    black_box(&population),
                    black_box(&batch),
                    black_box(&leaves),
                    range,
                    &PopulationFilter::default(),
                    &config,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_multi_day_range(c: &mut Criterion) {
    let config = PolicyConfig::default();
    let leaves: Vec<LeaveEpisode> = Vec::new();

    let mut group = c.benchmark_group("multi_day_range");
    for (size, days) in [(100usize, 7u64), (1000, 30)] {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 1)
                .unwrap()
                .checked_add_days(Days::new(days - 1))
                .unwrap(),
        )
        .unwrap();
        let population = create_population(size);
        let batch = create_batch(&population, &range);

        group.throughput(Throughput::Elements((size as u64) * days));
        group.bench_with_input(
            BenchmarkId::new("employees_x_days", format!("{}x{}", size, days)),
            &size,
            |b, _| {
                b.iter(|| {
                    aggregate(
                        black_box(&population),
                        black_box(&batch),
                        black_box(&leaves),
                        range,
                        &PopulationFilter::default(),
                        &config,
                    )
                    .unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_day_snapshot, bench_multi_day_range);
criterion_main!(benches);
