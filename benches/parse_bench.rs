//! Parser throughput benchmarks
//!
//! Generates timesheet and typed-CSV documents of increasing size and
//! measures a full parse of each.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::fmt::Write;
use std::sync::Arc;
use typed_import::{Employee, Project, TimesheetParser, TypedCsvParser};

const PROJECTS: &[&str] = &["ADMIN", "CRM", "INFRA", "ACCOUNTING", "SUPPORT"];

fn timesheet_document(days: usize, entries_per_day: usize) -> String {
    let mut text = String::from("EMP-ID: 4711\nEMP-NAME: Rainer Stropek\n");
    let start = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for day in 0..days {
        let date = start + chrono::Days::new(day as u64);
        writeln!(text, "TIMESHEETS: {}", date.format("%Y-%m-%d")).unwrap();
        for entry in 0..entries_per_day {
            let hour = 6 + entry % 12;
            writeln!(
                text,
                "{:02}:00;{:02}:45;\"Task {} on day {}\";{}",
                hour,
                hour,
                entry,
                day,
                PROJECTS[entry % PROJECTS.len()]
            )
            .unwrap();
        }
    }
    text
}

fn typed_csv_document(rows: usize) -> String {
    let mut text = String::from(
        "ProductCode: STRING(10), MANDATORY\n\
         ProductName: STRING(100), MANDATORY\n\
         ProductDescription: STRING(255), OPTIONAL\n\
         Category: STRING(50), OPTIONAL\n\
         PricePerUnit: DECIMAL, MANDATORY\n\
         ---\n",
    );
    for row in 0..rows {
        let description = if row % 3 == 0 {
            String::new()
        } else {
            format!("\"Model {}, frame size {}\"", row, row % 5)
        };
        writeln!(
            text,
            "\"BKE{:05}\",\"Bike {}\",{},\"Category {}\",{}.{:02}",
            row,
            row,
            description,
            row % 7,
            100 + row,
            row % 100
        )
        .unwrap();
    }
    text
}

fn bench_timesheet_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("timesheet_parser");
    let parser = TimesheetParser::new();
    let employees = vec![Arc::new(Employee::new("4711", "Rainer Stropek"))];
    let projects: Vec<Arc<Project>> = PROJECTS.iter().map(|c| Arc::new(Project::new(*c))).collect();

    for days in [5, 30, 365] {
        let text = timesheet_document(days, 8);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("new_entities", days), &text, |b, text| {
            b.iter(|| parser.parse(black_box(text), &[], &[]))
        });

        group.bench_with_input(BenchmarkId::new("existing_entities", days), &text, |b, text| {
            b.iter(|| parser.parse(black_box(text), &employees, &projects))
        });
    }

    group.finish();
}

fn bench_typed_csv_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_csv_parser");
    let parser = TypedCsvParser::new();

    for rows in [10, 1_000, 10_000] {
        let text = typed_csv_document(rows);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse", rows), &text, |b, text| {
            b.iter(|| parser.parse(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_timesheet_parser, bench_typed_csv_parser);
criterion_main!(benches);
