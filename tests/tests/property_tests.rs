// Property tests for the ring arithmetic and the KEM

use latkem_algorithms::poly::prelude::*;
use latkem_api::{Kem, Serialize};
use latkem_kem::kyber::{Kyber768ParamsImpl, KyberCiphertext};
use latkem_kem::Kyber768;
use proptest::prelude::*;

type Poly = Polynomial<Kyber256Params>;

fn poly_strategy() -> impl Strategy<Value = Poly> {
    prop::collection::vec(0u32..3329, 256).prop_map(|c| Poly::from_coeffs(&c).unwrap())
}

proptest! {
    #[test]
    fn prop_ntt_roundtrip(poly in poly_strategy()) {
        let mut p = poly.clone();
        p.ntt_inplace().unwrap();
        p.from_ntt_inplace().unwrap();
        prop_assert_eq!(p, poly);
    }

    #[test]
    fn prop_ntt_mul_matches_schoolbook(a in poly_strategy(), b in poly_strategy()) {
        prop_assert_eq!(a.mul(&b).unwrap(), a.schoolbook_mul(&b));
    }

    #[test]
    fn prop_compression_error_is_bounded(poly in poly_strategy(), d in prop::sample::select(vec![1usize, 4, 10, 11])) {
        let back = poly.compress(d).unwrap().decompress(d).unwrap();
        // round(q / 2^(d+1))
        let bound = (3329u32 + (1 << d)) >> (d + 1);
        for (&x, &y) in poly.as_coeffs_slice().iter().zip(back.as_coeffs_slice()) {
            let diff = if x > y { x - y } else { y - x };
            let dist = diff.min(3329 - diff);
            prop_assert!(dist <= bound, "x={} y={} d={}", x, y, d);
        }
    }

    #[test]
    fn prop_message_encoding_roundtrip(msg in prop::array::uniform32(any::<u8>())) {
        let poly = encode_message::<Kyber256Params>(&msg).unwrap();
        prop_assert_eq!(&decode_message::<Kyber256Params>(&poly)[..], &msg[..]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_encapsulation_agrees(d in any::<[u8; 32]>(), z in any::<[u8; 32]>(), m in any::<[u8; 32]>()) {
        let (pk, sk) = Kyber768::keypair_derand(&d, &z).unwrap();
        let (ct, ss) = Kyber768::encapsulate_derand(&pk, &m).unwrap();
        prop_assert_eq!(Kyber768::decapsulate(&sk, &ct).unwrap(), ss);
    }

    #[test]
    fn prop_arbitrary_ciphertext_never_errors(bytes in prop::collection::vec(any::<u8>(), 1088)) {
        let (_, sk) = Kyber768::keypair_derand(&[1u8; 32], &[2u8; 32]).unwrap();
        let ct = KyberCiphertext::<Kyber768ParamsImpl>::from_bytes(&bytes).unwrap();
        prop_assert!(Kyber768::decapsulate(&sk, &ct).is_ok());
    }
}
