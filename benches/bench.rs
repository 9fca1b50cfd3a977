use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_test_tools::patterns;

#[inline(never)]
fn bench_sort<T: Clone + Ord>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut [T]),
) {
    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-{transform_name}-{pattern_name}-{test_len}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_len)),
                |mut test_data| sort_func(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

fn measure_comp_count<T: Clone + Ord>(
    name: &str,
    test_len: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons a specific input combination costs.
    let run_count: usize = if test_len <= 20 {
        100_000
    } else if test_len < 10_000 {
        3000
    } else if test_len < 100_000 {
        1000
    } else {
        100
    };

    let mut comp_count = 0u64;

    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_len));
        bmsort::sort_in_place_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count += 1;
            a < b
        });
    }

    // If there is on average less than a single comparison this will be wrong.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

fn bench_impls<T: Clone + Ord>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    if env::var("MEASURE_COMP").is_ok() {
        let name = format!("bmsort-comp-{transform_name}-{pattern_name}-{test_len}");
        measure_comp_count(&name, test_len, transform, pattern_provider);
        return;
    }

    bench_sort(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "bmsort_unstable",
        |v| bmsort::sort_in_place_by(v, |a, b| a < b),
    );

    bench_sort(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
        "rust_std_unstable",
        |v| v.sort_unstable_by(|a, b| a.cmp(b)),
    );
}

fn bench_patterns<T: Clone + Ord>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    if test_len > 100_000 && transform_name != "i32" {
        // Too expensive.
        return;
    }

    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |len| {
            patterns::random_uniform(len, 0..=(((len as f64).log2().round()) as i32))
        }),
        ("random_binary", |len| patterns::random_uniform(len, 0..=1)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
        ("median_of_three_killer", patterns::median_of_three_killer),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_len < 3 && *pattern_name != "random" {
            continue;
        }

        bench_impls(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_lens = [
        0, 1, 2, 3, 7, 8, 9, 16, 20, 40, 41, 50, 101, 200, 500, 1_000, 2_048, 10_000, 100_000,
        1_000_000,
    ];

    for test_len in test_lens {
        bench_patterns(c, test_len, "i32", |values| values);

        // Sorting indices is very common.
        bench_patterns(c, test_len, "u64", |values| {
            values
                .iter()
                .map(|val| -> u64 {
                    // Extends the value into the 64 bit range, while preserving input order.
                    let x = ((*val as i64) + (i32::MAX as i64) + 1) as u64;
                    x.wrapping_mul(i32::MAX as u64)
                })
                .collect()
        });

        // Not Copy and does heap access on every comparison.
        bench_patterns(c, test_len, "string", |values| {
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
