// Known-answer tests against the NIST reference transcript

use latkem_api::{Kem, Serialize, SerializeSecret};
use latkem_kem::kyber::{Kyber768ParamsImpl, KyberCiphertext, KyberSecretKey};
use latkem_kem::Kyber768;
use latkem_tests::suites::kat::{kat_seeds, kat_transcript_sha256, run_kat_record};

#[test]
fn test_kyber768_kat_transcript_hash() {
    assert_eq!(
        kat_transcript_sha256(1).unwrap(),
        "5352539586b6c3df58be6158a6250aeff402bd73060b0a3de68850ac074c17c3"
    );
}

#[test]
fn test_kyber768_kat_first_record() {
    let seed = kat_seeds(1)[0];
    let record = run_kat_record(0, seed).unwrap();

    assert_eq!(
        hex::encode(&record.pk[..16]),
        "a8e651a1e685f22478a8954f007bc771"
    );
    assert_eq!(
        hex::encode(&record.ss),
        "ac865f839fef1bf3d528dd7504bed2f64b5502b0fa81d1c32763658e4aac5037"
    );
    assert_eq!(record.pk.len(), 1184);
    assert_eq!(record.sk.len(), 2400);
    assert_eq!(record.ct.len(), 1088);
    assert!(record.to_response_text().starts_with("count = 0\nseed = "));
}

#[test]
fn test_kyber768_kat_implicit_rejection() {
    let seed = kat_seeds(1)[0];
    let record = run_kat_record(0, seed).unwrap();

    let sk = KyberSecretKey::<Kyber768ParamsImpl>::from_bytes(&record.sk).unwrap();
    let mut ct_bytes = record.ct.clone();
    ct_bytes[0] ^= 0x01;
    let ct = KyberCiphertext::<Kyber768ParamsImpl>::from_bytes(&ct_bytes).unwrap();

    let ss = Kyber768::decapsulate(&sk, &ct).unwrap();
    assert_eq!(
        hex::encode(&*ss.to_bytes_zeroizing()),
        "088b6554ddf5887adfe8d4e82ff6809ca0cd56aee96aea3a0cc0d29bd5f87bb0"
    );
}

#[test]
fn test_kat_seeds_are_distinct() {
    let seeds = kat_seeds(3);
    assert_ne!(seeds[0], seeds[1]);
    assert_ne!(seeds[1], seeds[2]);
    // Prefix stays the same when more seeds are drawn
    assert_eq!(kat_seeds(1)[0], seeds[0]);
}
