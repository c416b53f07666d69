// Timing tests for decapsulation and the constant-time helpers
//
// Ignored by default: results depend on the machine. Run with
// `cargo test --release -- --ignored`.

use latkem_api::Kem;
use latkem_kem::Kyber768;
use latkem_tests::suites::constant_time::{generate_test_insights, TestConfig, TimingTester};
use std::hint::black_box;

#[test]
#[ignore]
fn test_decapsulation_valid_vs_tampered() {
    let config = TestConfig::for_kem_decapsulation();
    let (pk, sk) = Kyber768::keypair_derand(&[1u8; 32], &[2u8; 32]).unwrap();
    let (ct, _) = Kyber768::encapsulate_derand(&pk, &[3u8; 32]).unwrap();
    let mut tampered = ct.clone();
    tampered.as_mut()[0] ^= 0x01;

    for _ in 0..config.num_warmup {
        let _ = black_box(Kyber768::decapsulate(&sk, &ct));
        let _ = black_box(Kyber768::decapsulate(&sk, &tampered));
    }

    let tester = TimingTester::from_config(&config);
    let valid = tester.measure(|| {
        let _ = black_box(Kyber768::decapsulate(black_box(&sk), black_box(&ct)));
    });
    let rejected = tester.measure(|| {
        let _ = black_box(Kyber768::decapsulate(black_box(&sk), black_box(&tampered)));
    });

    let analysis = tester
        .analyze_constant_time(&valid, &rejected, config.combined_score_threshold)
        .unwrap();
    println!("{}", generate_test_insights(&analysis, &config, "Kyber-768 decapsulation"));
    assert!(analysis.is_constant_time);
}

#[test]
#[ignore]
fn test_ct_eq_early_vs_late_difference() {
    use latkem_common::SecretBuffer;

    let config = TestConfig::for_comparison();
    let reference = SecretBuffer::new([0x5Au8; 1088]);
    let mut early = [0x5Au8; 1088];
    early[0] ^= 1;
    let mut late = [0x5Au8; 1088];
    late[1087] ^= 1;
    let early = SecretBuffer::new(early);
    let late = SecretBuffer::new(late);

    let tester = TimingTester::from_config(&config);
    let t_early = tester.measure(|| {
        black_box(black_box(&reference) == black_box(&early));
    });
    let t_late = tester.measure(|| {
        black_box(black_box(&reference) == black_box(&late));
    });

    let analysis = tester
        .analyze_constant_time(&t_early, &t_late, config.combined_score_threshold)
        .unwrap();
    println!("{}", generate_test_insights(&analysis, &config, "SecretBuffer equality"));
    assert!(analysis.is_constant_time);
}
