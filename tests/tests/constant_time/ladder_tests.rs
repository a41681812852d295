// Constant-time tests for scalar multiplication

use cozec_algorithms::ec::{Scalar, ScalarMultiplier};
use cozec_params::curves::NIST_P256;
use cozec_tests::constant_time::{summarize, TestConfig, TimingTester};
use cozec_tests::oracle::with_p256;
use std::hint::black_box;

fn compare_scalars(name: &str, a: &Scalar, b: &Scalar) {
    let config = TestConfig::for_scalar_multiplication();

    let analysis = with_p256(|curve, g| {
        let multiplier = ScalarMultiplier::new(curve).unwrap();

        for _ in 0..config.num_warmup {
            let _ = black_box(multiplier.multiply(a, &g));
            let _ = black_box(multiplier.multiply(b, &g));
        }

        let tester = TimingTester::new(config.num_samples, config.num_iterations);
        let times_a = tester.measure(|| {
            let _ = black_box(multiplier.multiply(black_box(a), &g));
        });
        let times_b = tester.measure(|| {
            let _ = black_box(multiplier.multiply(black_box(b), &g));
        });

        tester
            .analyze_constant_time(
                &times_a,
                &times_b,
                config.mean_ratio_max,
                config.combined_score_threshold,
            )
            .unwrap_or_else(|e| panic!("analysis error: {}", e))
    });

    println!("{}", summarize(&analysis, name));
    assert!(
        analysis.is_constant_time,
        "{} shows a timing difference: ratio {:.3}, t = {:.2}",
        name, analysis.mean_ratio, analysis.t_statistic
    );
}

#[test]
#[ignore]
fn test_ladder_low_vs_high_hamming_weight() {
    // 1 against n - 1: one set bit versus nearly all bits set
    let mut high = NIST_P256.n;
    high[31] -= 1;
    compare_scalars(
        "ladder, k = 1 vs k = n - 1",
        &Scalar::from_u64(1),
        &Scalar::from_be_bytes(&high),
    );
}

#[test]
#[ignore]
fn test_ladder_even_vs_odd() {
    // Only the final correction depends on parity
    let even = [0xa5u8; 32];
    let mut odd = even;
    odd[31] |= 1;
    compare_scalars(
        "ladder, even vs odd scalar",
        &Scalar::from_be_bytes(&even),
        &Scalar::from_be_bytes(&odd),
    );
}

#[test]
#[ignore]
fn test_ladder_zero_vs_random() {
    let random = [
        0x3c, 0x91, 0x0e, 0x5d, 0x77, 0x2a, 0xf4, 0x18, 0x6b, 0xc0, 0x4e, 0x93, 0x21, 0xd7, 0x8a,
        0x5f, 0x02, 0xbe, 0x69, 0x13, 0xe8, 0x47, 0x9c, 0x35, 0xaa, 0x60, 0x1f, 0xd2, 0x84, 0x3b,
        0x76, 0xc9,
    ];
    compare_scalars(
        "ladder, k = 0 vs random k",
        &Scalar::from_u64(0),
        &Scalar::from_be_bytes(&random),
    );
}
