//! Deterministic random bit generation with `HMAC_DRBG` as described in
//! NIST SP 800-90A Rev. 1, §10.1.2:
//! <https://csrc.nist.gov/publications/detail/sp/800-90a/rev-1/final>

use zeroize::Zeroize;

use crate::hmac::{HmacSha256, TAG_SIZE};
use crate::Error;

/// Minimum seed length in bytes accepted by [`HmacDrbg::reseed`].
///
/// `MIN_SEED_LEN * 8` must be at least the expected security level.
pub const MIN_SEED_LEN: usize = 32;

/// Maximum seed length in bytes accepted by [`HmacDrbg::reseed`].
///
/// SP 800-90A permits up to 2³⁵ bits (2³² bytes).
pub const MAX_SEED_LEN: usize = u32::MAX as usize;

/// Maximum personalization string length in bytes accepted by
/// [`HmacDrbg::new`].
pub const MAX_PERSONALIZATION_LEN: usize = u32::MAX as usize;

/// Maximum additional input length in bytes accepted by
/// [`HmacDrbg::reseed`].
pub const MAX_ADDITIONAL_INPUT_LEN: usize = u32::MAX as usize;

/// Number of [`HmacDrbg::generate_into`] calls permitted between reseeds.
///
/// SP 800-90A permits up to 2⁴⁸; the countdown here is kept in a `u32` to
/// suit constrained targets.
pub const MAX_RESEED_INTERVAL: u32 = u32::MAX;

/// Maximum output length in bytes per [`HmacDrbg::generate_into`] call,
/// per SP 800-90A.
pub const MAX_OUTPUT_LEN: usize = 1 << 19;

/// Deterministic random bit generator whose core function is HMAC-SHA256.
///
/// The generator's secret state is the pair of 32-byte values `K` and `V`
/// advanced by the `HMAC_DRBG` update function. A reseed countdown gates
/// output: a freshly instantiated generator starts with the countdown at
/// zero (the personalization string carries no entropy) and every
/// successful [`reseed`] resets it to [`MAX_RESEED_INTERVAL`]. When the
/// countdown reaches zero, [`generate_into`] fails with
/// [`Error::ReseedRequired`] until the generator is reseeded.
///
/// After each successful generate call the secret state is rotated, so a
/// later compromise of `K` and `V` does not reveal previously produced
/// output.
///
/// The state is exclusively owned by the caller, never allocates, and is
/// zeroized on drop.
///
/// [`reseed`]: HmacDrbg::reseed
/// [`generate_into`]: HmacDrbg::generate_into
pub struct HmacDrbg {
    /// Embedded HMAC instance driven by the update protocol.
    hmac: HmacSha256,

    /// HMAC key `K` (SP 800-90A §10.1.2.1).
    key: [u8; TAG_SIZE],

    /// Chaining value `V` (SP 800-90A §10.1.2.1).
    v: [u8; TAG_SIZE],

    /// Remaining generate calls before a reseed becomes mandatory.
    countdown: u32,
}

impl HmacDrbg {
    /// Instantiate the generator, mixing in `personalization` (which may
    /// be empty).
    ///
    /// The fresh generator refuses to produce output: [`reseed`] must be
    /// called with at least [`MIN_SEED_LEN`] bytes of seed material
    /// before [`generate_into`] can succeed.
    ///
    /// Returns [`Error::InvalidInput`] when the personalization string
    /// exceeds [`MAX_PERSONALIZATION_LEN`] bytes.
    ///
    /// [`reseed`]: HmacDrbg::reseed
    /// [`generate_into`]: HmacDrbg::generate_into
    pub fn new(personalization: &[u8]) -> Result<Self, Error> {
        if personalization.len() > MAX_PERSONALIZATION_LEN {
            return Err(Error::InvalidInput);
        }

        let mut drbg = Self {
            hmac: HmacSha256::new(),
            key: [0x00; TAG_SIZE],
            v: [0x01; TAG_SIZE],
            countdown: 0,
        };
        drbg.update(personalization, None);

        Ok(drbg)
    }

    /// Mix fresh seed material and optional additional input into the
    /// generator, then reset the reseed countdown to
    /// [`MAX_RESEED_INTERVAL`].
    ///
    /// `seed` must be between [`MIN_SEED_LEN`] and [`MAX_SEED_LEN`] bytes
    /// long. An additional input, when present, must be non-empty and at
    /// most [`MAX_ADDITIONAL_INPUT_LEN`] bytes: `Some(&[])` is rejected.
    /// Validation failures return [`Error::InvalidInput`] and leave the
    /// state untouched.
    pub fn reseed(&mut self, seed: &[u8], additional_input: Option<&[u8]>) -> Result<(), Error> {
        if seed.len() < MIN_SEED_LEN || seed.len() > MAX_SEED_LEN {
            return Err(Error::InvalidInput);
        }

        if let Some(extra) = additional_input {
            if extra.is_empty() || extra.len() > MAX_ADDITIONAL_INPUT_LEN {
                return Err(Error::InvalidInput);
            }
        }

        self.update(seed, additional_input);
        self.countdown = MAX_RESEED_INTERVAL;

        Ok(())
    }

    /// Fill `out` with pseudorandom bytes, operating HMAC in OFB mode
    /// over `V`.
    ///
    /// Returns [`Error::InvalidInput`] when `out` is empty or longer than
    /// [`MAX_OUTPUT_LEN`] bytes, and [`Error::ReseedRequired`] when the
    /// reseed countdown is exhausted; in both cases `out` and the
    /// generator state are untouched.
    pub fn generate_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
        if out.is_empty() || out.len() > MAX_OUTPUT_LEN {
            return Err(Error::InvalidInput);
        }
        if self.countdown == 0 {
            return Err(Error::ReseedRequired);
        }
        self.countdown -= 1;

        for chunk in out.chunks_mut(TAG_SIZE) {
            self.hmac.rekey(&self.key);
            self.hmac.init();
            self.hmac.update(&self.v);
            self.hmac.finalize_into(&mut self.v);

            chunk.copy_from_slice(&self.v[..chunk.len()]);
        }

        // Rotate K and V so a future state compromise cannot reproduce
        // the bytes just emitted.
        self.update(&[], None);

        Ok(())
    }

    /// The `HMAC_DRBG` update function (SP 800-90A §10.1.2.2).
    ///
    /// Each round computes `K ← HMAC(K, V ‖ sep ‖ data ‖ additional)`
    /// followed by `V ← HMAC(K, V)`, with separator `0x00` for the first
    /// round and `0x01` for the second. The second round runs only when
    /// `data` is non-empty; the single first round is still a full
    /// rotation of `K` and `V`.
    fn update(&mut self, data: &[u8], additional_input: Option<&[u8]>) {
        for separator in [0x00u8, 0x01] {
            self.hmac.rekey(&self.key);
            self.hmac.init();
            self.hmac.update(&self.v);
            self.hmac.update(&[separator]);
            self.hmac.update(data);
            if let Some(extra) = additional_input {
                self.hmac.update(extra);
            }
            self.hmac.finalize_into(&mut self.key);

            self.hmac.rekey(&self.key);
            self.hmac.init();
            self.hmac.update(&self.v);
            self.hmac.finalize_into(&mut self.v);

            if data.is_empty() {
                break;
            }
        }
    }
}

impl Drop for HmacDrbg {
    fn drop(&mut self) {
        self.key.zeroize();
        self.v.zeroize();
        self.countdown.zeroize();
    }
}
