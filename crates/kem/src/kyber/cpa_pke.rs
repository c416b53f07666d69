//! Kyber CPA-secure Public Key Encryption scheme (K-PKE).
//!
//! All functions are deterministic: key generation takes the 32-byte seed
//! `d`, encryption takes the 32-byte coins `r`. Noise vectors and every
//! intermediate derived from them are zeroized before returning.

use latkem_algorithms::error::Result as AlgoResult;
use latkem_algorithms::hash::{HashFunction, Sha3_512};
use latkem_algorithms::poly::compress::{decode_message, encode_message};
use latkem_algorithms::poly::sampling::{cbd_bytes, CbdSampler, DefaultSamplers};
use latkem_algorithms::xof::{ExtendableOutputFunction, ShakeXof256};
use zeroize::{Zeroize, Zeroizing};

use super::params::{KyberParams, KyberPolyModParams, KYBER_N, KYBER_SYMBYTES};
use super::polyvec::{KyberPoly, Matrix, PolyVec};
use super::serialize::pack_ciphertext;

// Type aliases for clarity within CPA PKE context
pub(crate) type CpaPublicKeyInner<P> = (PolyVec<P>, [u8; KYBER_SYMBYTES]); // (t_hat, rho)
pub(crate) type CpaSecretKeyInner<P> = PolyVec<P>; // s_hat (NTT form)
pub(crate) type CpaCiphertextInner<P> = (PolyVec<P>, KyberPoly); // (u, v)

/// `CBD_eta(PRF_eta(seed, nonce))` with `PRF = SHAKE256(seed || nonce)`
pub(crate) fn prf_cbd(seed: &[u8; KYBER_SYMBYTES], nonce: u8, eta: u8) -> AlgoResult<KyberPoly> {
    let mut xof = ShakeXof256::new();
    xof.update(seed)?;
    xof.update(&[nonce])?;

    let mut buf = Zeroizing::new(vec![0u8; cbd_bytes(eta, KYBER_N)]);
    xof.squeeze(&mut buf)?;

    <DefaultSamplers as CbdSampler<KyberPolyModParams>>::sample_cbd(&buf, eta)
}

/// K noise polynomials with consecutive nonces starting at `nonce`
fn sample_noise_vec<P: KyberParams>(
    seed: &[u8; KYBER_SYMBYTES],
    nonce: u8,
    eta: u8,
) -> AlgoResult<Zeroizing<PolyVec<P>>> {
    let mut pv = Zeroizing::new(PolyVec::<P>::zero());
    for (i, poly) in pv.polys.iter_mut().enumerate() {
        *poly = prf_cbd(seed, nonce + i as u8, eta)?;
    }
    Ok(pv)
}

/// Kyber CPA PKE Key Generation from the seed `d`.
pub(crate) fn keypair_cpa<P: KyberParams>(
    d: &[u8; KYBER_SYMBYTES],
) -> AlgoResult<(CpaPublicKeyInner<P>, Zeroizing<CpaSecretKeyInner<P>>)> {
    // (rho, sigma) = G(d || k)
    let mut g_input = Zeroizing::new([0u8; KYBER_SYMBYTES + 1]);
    g_input[..KYBER_SYMBYTES].copy_from_slice(d);
    g_input[KYBER_SYMBYTES] = P::K as u8;
    let mut digest = Sha3_512::digest(&g_input[..]);

    let mut rho = [0u8; KYBER_SYMBYTES];
    let mut sigma = Zeroizing::new([0u8; KYBER_SYMBYTES]);
    rho.copy_from_slice(&digest[..KYBER_SYMBYTES]);
    sigma.copy_from_slice(&digest[KYBER_SYMBYTES..]);
    digest.zeroize();

    let a_hat = Matrix::<P>::expand(&rho, false)?;

    let mut s_hat = sample_noise_vec::<P>(&sigma, 0, P::ETA1)?;
    let mut e_hat = sample_noise_vec::<P>(&sigma, P::K as u8, P::ETA1)?;
    s_hat.ntt_inplace()?;
    e_hat.ntt_inplace()?;

    // t_hat = A_hat o s_hat + e_hat
    let mut t_hat = a_hat.mul_vec(&s_hat)?;
    t_hat.add_assign(&e_hat);

    Ok(((t_hat, rho), s_hat))
}

/// Kyber CPA PKE Encryption of a 32-byte message under the coins `r`.
///
/// Returns the packed ciphertext; the uncompressed `u` and `v` never leave
/// this function.
pub(crate) fn encrypt_cpa<P: KyberParams>(
    pk: &CpaPublicKeyInner<P>,
    msg: &[u8; KYBER_SYMBYTES],
    coins: &[u8; KYBER_SYMBYTES],
) -> AlgoResult<Vec<u8>> {
    let (t_hat, rho) = pk;
    let a_hat_t = Matrix::<P>::expand(rho, true)?;

    let mut r_hat = sample_noise_vec::<P>(coins, 0, P::ETA1)?;
    let e1 = sample_noise_vec::<P>(coins, P::K as u8, P::ETA2)?;
    let e2 = Zeroizing::new(prf_cbd(coins, 2 * P::K as u8, P::ETA2)?);
    r_hat.ntt_inplace()?;

    // u = INTT(A_hat^T o r_hat) + e1
    let mut u = Zeroizing::new(a_hat_t.mul_vec(&r_hat)?);
    u.inv_ntt_inplace()?;
    u.add_assign(&e1);

    // v = INTT(t_hat^T o r_hat) + e2 + Decompress_1(m)
    let mut v = Zeroizing::new(t_hat.pointwise_accum(&r_hat));
    v.from_ntt_inplace()?;
    v.add_assign(&e2);
    let m_poly = Zeroizing::new(encode_message::<KyberPolyModParams>(msg)?);
    v.add_assign(&m_poly);

    pack_ciphertext::<P>(&u, &v)
}

/// Kyber CPA PKE Decryption.
pub(crate) fn decrypt_cpa<P: KyberParams>(
    s_hat: &CpaSecretKeyInner<P>,
    ct: &CpaCiphertextInner<P>,
) -> AlgoResult<Zeroizing<[u8; KYBER_SYMBYTES]>> {
    let (u, v) = ct;

    let mut u_hat = u.clone();
    u_hat.ntt_inplace()?;

    // w = v - INTT(s_hat^T o NTT(u))
    let mut su = Zeroizing::new(s_hat.pointwise_accum(&u_hat));
    su.from_ntt_inplace()?;
    let w = Zeroizing::new(v.sub(&su));

    let decoded = decode_message::<KyberPolyModParams>(&w);
    let mut msg = Zeroizing::new([0u8; KYBER_SYMBYTES]);
    msg.copy_from_slice(&decoded);
    Ok(msg)
}
