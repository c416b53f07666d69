//! NIST known-answer tests for Kyber-768
//!
//! Rebuilds the response text of the reference KAT generator record by
//! record and hashes it with SHA-256. The published digest for ML-KEM-768
//! covers the single record `count = 0`.

pub mod drbg;

use latkem_api::{Kem, Serialize, SerializeSecret};
use latkem_kem::Kyber768;
use sha2::{Digest, Sha256};

use self::drbg::{NistDrbg, SEED_BYTES};

/// One `count = i` record of the response file.
#[derive(Debug, Clone)]
pub struct KatRecord {
    pub count: usize,
    pub seed: [u8; SEED_BYTES],
    pub pk: Vec<u8>,
    pub sk: Vec<u8>,
    pub ct: Vec<u8>,
    pub ss: Vec<u8>,
}

impl KatRecord {
    /// The record as printed by `fprintBstr`: uppercase hex, one field per line.
    pub fn to_response_text(&self) -> String {
        format!(
            "count = {}\nseed = {}\npk = {}\nsk = {}\nct = {}\nss = {}\n",
            self.count,
            hex::encode_upper(self.seed),
            hex::encode_upper(&self.pk),
            hex::encode_upper(&self.sk),
            hex::encode_upper(&self.ct),
            hex::encode_upper(&self.ss),
        )
    }
}

/// Seeds of the first `count` records, drawn from the master DRBG whose
/// entropy input is `0, 1, ..., 47`.
pub fn kat_seeds(count: usize) -> Vec<[u8; SEED_BYTES]> {
    let entropy: [u8; SEED_BYTES] = core::array::from_fn(|i| i as u8);
    let mut master = NistDrbg::new(&entropy, None);
    (0..count)
        .map(|_| {
            let mut seed = [0u8; SEED_BYTES];
            master.fill_bytes(&mut seed);
            seed
        })
        .collect()
}

/// Runs key generation and encapsulation for one record.
///
/// The DRBG is reseeded with `seed`, then yields `d || z` for key
/// generation and the message `m` for encapsulation. Decapsulation must
/// agree with the encapsulated secret.
pub fn run_kat_record(count: usize, seed: [u8; SEED_BYTES]) -> latkem_api::Result<KatRecord> {
    let mut drbg = NistDrbg::new(&seed, None);

    let mut coins = [0u8; 64];
    drbg.fill_bytes(&mut coins);
    let mut d = [0u8; 32];
    let mut z = [0u8; 32];
    d.copy_from_slice(&coins[..32]);
    z.copy_from_slice(&coins[32..]);
    let (pk, sk) = Kyber768::keypair_derand(&d, &z)?;

    let mut m = [0u8; 32];
    drbg.fill_bytes(&mut m);
    let (ct, ss) = Kyber768::encapsulate_derand(&pk, &m)?;

    let ss_dec = Kyber768::decapsulate(&sk, &ct)?;
    assert_eq!(ss, ss_dec, "KAT record {}: decapsulation disagrees", count);

    Ok(KatRecord {
        count,
        seed,
        pk: pk.to_bytes(),
        sk: sk.to_bytes_zeroizing().to_vec(),
        ct: ct.to_bytes(),
        ss: ss.to_bytes_zeroizing().to_vec(),
    })
}

/// Lower-case hex SHA-256 of the response text of records `0..count`.
pub fn kat_transcript_sha256(count: usize) -> latkem_api::Result<String> {
    let mut hasher = Sha256::new();
    for (i, seed) in kat_seeds(count).into_iter().enumerate() {
        let record = run_kat_record(i, seed)?;
        hasher.update(record.to_response_text().as_bytes());
    }
    Ok(hex::encode(hasher.finalize()))
}
