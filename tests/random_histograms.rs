
//! Property testing with randomly generated histograms.
//! Every strategy must produce a valid prefix code for every valid input,
//! no matter how lopsided the histogram.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use prefix_codes::prelude::*;


fn all_strategies() -> Vec<Strategy> {
    vec![
        Strategy::PackageMerge,
        Strategy::Jpeg,
        Strategy::Miniz,
        Strategy::Bzip2(RescaleOptions::default()),
        Strategy::Bzip2(RescaleOptions::fast()),
        Strategy::Kraft,
        Strategy::KraftHeap,
    ]
}

fn random_histogram(random: &mut StdRng) -> Vec<u32> {
    let symbol_count = random.random_range(1 .. 300_usize);
    let zero_chance = random.random::<f64>();

    (0 .. symbol_count)
        .map(|_| {
            if random.random::<f64>() < zero_chance {
                0
            }
            else {
                // exponentially distributed counts
                // produce both flat and very deep codes
                let magnitude = random.random_range(0 .. 20_u32);
                random.random_range(0 .. 1 << magnitude)
            }
        })
        .collect()
}

fn assert_valid_code(histogram: &[u32], lengths: &[u8], max_bits: u8, limit: u8, context: &str) {
    assert!(max_bits > 0 && max_bits <= limit, "{}: bad maximum {}", context, max_bits);
    assert_eq!(max_bits, lengths.iter().copied().max().unwrap_or(0), "{}: inaccurate maximum", context);

    let mut kraft = 0_u64;
    for (&count, &length) in histogram.iter().zip(lengths) {
        assert_eq!(count == 0, length == 0, "{}: length does not match count", context);

        if length > 0 {
            kraft += 1_u64 << (max_bits - length);
        }
    }

    assert!(kraft <= 1 << max_bits, "{}: kraft inequality violated", context);
}


#[test]
fn random_histograms_always_produce_valid_codes(){
    let mut random = StdRng::seed_from_u64(2_417_851_639);

    for _ in 0 .. 512 {
        let histogram = random_histogram(&mut random);
        let used = histogram.iter().filter(|&&count| count > 0).count();

        // the limit is always feasible because 2^9 exceeds every alphabet here
        let limit = random.random_range(9 ..= 24_u8);

        for strategy in all_strategies() {
            let mut lengths = vec![ 0_u8; histogram.len() ];
            let result = strategy.code_lengths(limit, &histogram, &mut lengths);

            if used == 0 {
                assert_eq!(result, Err(Error::EmptyAlphabet));
                continue;
            }

            let max_bits = result.unwrap_or_else(|error|
                panic!("{} with limit {} failed on {:?}: {}", strategy, limit, histogram, error));

            let context = format!("{} with limit {}", strategy, limit);
            assert_valid_code(&histogram, &lengths, max_bits, limit, &context);
        }
    }
}

#[test]
fn random_histograms_under_the_tightest_feasible_limit(){
    let mut random = StdRng::seed_from_u64(67_108_864);

    for _ in 0 .. 256 {
        let histogram = random_histogram(&mut random);
        let used = histogram.iter().filter(|&&count| count > 0).count();
        if used == 0 {
            continue;
        }

        // the smallest limit which can still hold all used symbols
        let mut limit = 1_u8;
        while (1_usize << limit) < used {
            limit += 1;
        }

        for strategy in all_strategies() {
            let mut lengths = vec![ 0_u8; histogram.len() ];
            let max_bits = strategy.code_lengths(limit, &histogram, &mut lengths)
                .unwrap_or_else(|error|
                    panic!("{} with limit {} failed on {:?}: {}", strategy, limit, histogram, error));

            let context = format!("{} with tight limit {}", strategy, limit);
            assert_valid_code(&histogram, &lengths, max_bits, limit, &context);
        }
    }
}

#[test]
fn unlimited_lengths_match_an_exhausting_limit(){
    let mut random = StdRng::seed_from_u64(8_675_309);

    for _ in 0 .. 256 {
        let histogram = random_histogram(&mut random);
        if histogram.iter().all(|&count| count == 0) {
            continue;
        }

        let mut unlimited = vec![ 0_u8; histogram.len() ];
        let unlimited_max = huffman::code_lengths(&histogram, &mut unlimited).unwrap();

        let mut limited = vec![ 0_u8; histogram.len() ];
        let limited_max = limited::package_merge(63, &histogram, &mut limited).unwrap();

        // optimal codes are not unique, so only the total size must agree
        assert!(unlimited_max <= 63 && limited_max <= 63);

        let total = |lengths: &[u8]| -> u64 {
            histogram.iter().zip(lengths)
                .map(|(&count, &length)| u64::from(count) * u64::from(length))
                .sum()
        };

        assert_eq!(total(&unlimited), total(&limited), "histogram: {:?}", histogram);
    }
}
