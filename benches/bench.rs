use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_test_tools::patterns;

const BENCH_SIZES: &[usize] = &[16, 64, 256, 1024];

fn pin_to_first_core() {
    // Cuts run-to-run noise from the scheduler migrating the bench thread.
    if let Some(core) = core_affinity::get_core_ids().and_then(|ids| ids.first().copied()) {
        core_affinity::set_for_current(core);
    }
}

fn bench_pattern(c: &mut Criterion, pattern_name: &str, pattern: fn(usize) -> Vec<i32>) {
    for &len in BENCH_SIZES {
        let input = pattern(len);

        c.bench_function(&format!("selection_trace-{pattern_name}-{len}"), |b| {
            b.iter_batched_ref(
                || input.clone(),
                |v| selection_trace::sort(black_box(v)),
                BatchSize::SmallInput,
            )
        });

        // Same input, but collecting the full per-pass trace. The delta to the
        // plain version is the cost of the n + 1 prefix snapshots.
        c.bench_function(
            &format!("selection_trace_traced-{pattern_name}-{len}"),
            |b| {
                b.iter_batched_ref(
                    || input.clone(),
                    |v| black_box(selection_trace::sort_traced(v, len).unwrap()),
                    BatchSize::SmallInput,
                )
            },
        );

        c.bench_function(&format!("rust_std_unstable-{pattern_name}-{len}"), |b| {
            b.iter_batched_ref(
                || input.clone(),
                |v| black_box(v).sort_unstable(),
                BatchSize::SmallInput,
            )
        });
    }
}

fn full_benchmarks(c: &mut Criterion) {
    pin_to_first_core();

    bench_pattern(c, "random", patterns::random);
    bench_pattern(c, "random_zipf", |len| patterns::random_zipf(len, 1.0));
    bench_pattern(c, "ascending", patterns::ascending);
    bench_pattern(c, "descending", patterns::descending);
    bench_pattern(c, "all_equal", patterns::all_equal);
    bench_pattern(c, "saw_mixed", |len| patterns::saw_mixed(len, 5));
}

criterion_group!(benches, full_benchmarks);
criterion_main!(benches);
