//! Harness hot-path benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use confix_core::{FixtureConvention, scan_fixture_dir};
use confix_harness::diff::render_diff;

fn bench_scan(c: &mut Criterion) {
    let sizes: &[usize] = &[10, 100, 500];
    let mut group = c.benchmark_group("scan");
    let convention = FixtureConvention::gradle();

    for &size in sizes {
        let root = std::env::temp_dir().join(format!(
            "confix_bench_scan_{size}_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();
        for i in 0..size {
            std::fs::write(
                root.join(format!("fixture{i}_before.gradle")),
                "apply plugin: 'com.android.application'\n",
            )
            .unwrap();
            std::fs::write(
                root.join(format!("fixture{i}_after.gradle")),
                "apply plugin: 'com.android.application'\napply plugin: 'kotlin-android'\n",
            )
            .unwrap();
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("scan_fixture_dir", size), &size, |b, _| {
            b.iter(|| {
                let scanned = scan_fixture_dir(&root, &convention).unwrap();
                black_box(scanned.case_count());
            });
        });
        let _ = std::fs::remove_dir_all(&root);
    }
    group.finish();
}

fn bench_test_name(c: &mut Criterion) {
    let convention = FixtureConvention::gradle();
    let stems = [
        "helloWorld",
        "missedRepositoriesInBuildscriptBlock",
        "androidStudioDefaultSnapshotWithLongCamelCaseTail",
    ];
    let mut group = c.benchmark_group("convention");
    for stem in stems {
        group.bench_with_input(BenchmarkId::new("test_name", stem.len()), &stem, |b, s| {
            b.iter(|| black_box(convention.test_name(s)));
        });
    }
    group.finish();
}

fn bench_render_diff(c: &mut Criterion) {
    let line_counts: &[usize] = &[100, 1000];
    let mut group = c.benchmark_group("diff");
    for &lines in line_counts {
        let expected: String = (0..lines)
            .map(|i| format!("line number {i}\n"))
            .collect();
        // Every tenth line differs.
        let actual: String = (0..lines)
            .map(|i| {
                if i % 10 == 0 {
                    format!("changed line {i}\n")
                } else {
                    format!("line number {i}\n")
                }
            })
            .collect();

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(
            BenchmarkId::new("render_diff", lines),
            &lines,
            |b, _| {
                b.iter(|| black_box(render_diff(&expected, &actual)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_scan, bench_test_name, bench_render_diff);
criterion_main!(benches);
