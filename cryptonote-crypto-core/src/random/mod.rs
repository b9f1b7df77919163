//! Secure randomness.
//!
//! Every call goes straight to the operating system CSPRNG through
//! `getrandom`; there is no userspace generator state to share or leak
//! between threads. Failure to obtain entropy is fatal for the infallible
//! entry points: they panic rather than continue with weak randomness.

use core::ops::Range;

use curve25519_dalek::Scalar;
use rand::distributions::{uniform::SampleUniform, Distribution, Uniform};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::types::errors::{CryptoError, CryptoResult};

/// Fills `buf` from the OS CSPRNG, reporting failure.
pub fn try_fill_random(buf: &mut [u8]) -> CryptoResult<()> {
    getrandom::getrandom(buf).map_err(|e| CryptoError::EntropyUnavailable(alloc::format!("{e}")))
}

/// Fills `buf` from the OS CSPRNG.
///
/// # Panics
///
/// Panics if the operating system cannot supply entropy.
pub fn fill_random(buf: &mut [u8]) {
    if let Err(e) = try_fill_random(buf) {
        tracing::error!(error = %e, "secure randomness unavailable, refusing to continue");
        panic!("{e}");
    }
}

/// A fixed-width value whose every byte pattern is valid, so it can be
/// filled directly with random bytes.
pub trait RandomFill: Default {
    /// Overwrites `self` with random bytes.
    fn random_fill(&mut self);
}

impl<const N: usize> RandomFill for [u8; N]
where
    [u8; N]: Default,
{
    fn random_fill(&mut self) {
        fill_random(self);
    }
}

impl RandomFill for u64 {
    fn random_fill(&mut self) {
        *self = RandomDevice.next_u64();
    }
}

/// Produces a value filled with random bytes.
#[must_use]
pub fn random_filled<T: RandomFill>() -> T {
    let mut value = T::default();
    value.random_fill();
    value
}

/// Zero-sized handle to the OS CSPRNG usable wherever an `RngCore` is
/// expected (distributions, `*_with_rng` functions).
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomDevice;

impl RngCore for RandomDevice {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        fill_random(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        fill_random(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_random(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        getrandom::getrandom(dest).map_err(|e| rand_core::Error::from(e.code()))
    }
}

impl CryptoRng for RandomDevice {}

/// Uniform value in `range` without modulo bias.
///
/// # Panics
///
/// Panics if the range is empty or entropy is unavailable.
pub fn random_in_range<T: SampleUniform>(range: Range<T>) -> T {
    Uniform::from(range).sample(&mut RandomDevice)
}

/// Uniform non-zero scalar drawn from the OS CSPRNG.
#[must_use]
pub fn random_scalar() -> Scalar {
    random_scalar_with_rng(&mut RandomDevice)
}

/// Uniform non-zero scalar from `rng`.
///
/// 64 bytes are reduced mod L so the bias is negligible; zero is redrawn.
pub fn random_scalar_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    let mut wide = [0u8; 64];
    loop {
        rng.fill_bytes(&mut wide);
        let scalar = Scalar::from_bytes_mod_order_wide(&wide);
        if scalar != Scalar::ZERO {
            wide.zeroize();
            return scalar;
        }
    }
}
