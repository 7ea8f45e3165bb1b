//! HMAC-SHA256 message authentication ([RFC 2104]).
//!
//! The classic two-pass construction `H((K ⊕ opad) ‖ H((K ⊕ ipad) ‖ M))`
//! with both pad-mixed blocks precomputed by [`HmacSha256::set_key`] and a
//! streaming inner hash, so messages of any length can be absorbed in
//! arbitrary pieces.
//!
//! [RFC 2104]: https://tools.ietf.org/html/rfc2104

use digest::{Digest, Output};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::Error;

/// SHA-256 block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// HMAC-SHA256 tag size (the SHA-256 digest size) in bytes.
pub const TAG_SIZE: usize = 32;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Streaming HMAC-SHA256 state.
///
/// A computation proceeds through [`set_key`], [`init`], any number of
/// [`update`] calls, and [`finalize_into`], which emits the tag and wipes
/// the key schedule; the state must be re-keyed before the next
/// computation.
///
/// The state is a plain value with no interior mutability; it never
/// allocates, and its secret contents are zeroized on drop.
///
/// ```
/// use hmac_prng::HmacSha256;
///
/// # fn main() -> Result<(), hmac_prng::Error> {
/// let mut mac = HmacSha256::new();
/// mac.set_key(&[0x0b; 20])?;
/// mac.init();
/// mac.update(b"Hi ");
/// mac.update(b"There");
///
/// let mut tag = [0u8; 32];
/// mac.finalize_into(&mut tag);
/// # Ok(())
/// # }
/// ```
///
/// [`set_key`]: HmacSha256::set_key
/// [`init`]: HmacSha256::init
/// [`update`]: HmacSha256::update
/// [`finalize_into`]: HmacSha256::finalize_into
pub struct HmacSha256 {
    /// Precomputed key schedule: `K ⊕ ipad` in the first block, `K ⊕ opad`
    /// in the second, both halves always derived from the same key.
    schedule: [u8; 2 * BLOCK_SIZE],

    /// In-progress inner hash `SHA256((K ⊕ ipad) ‖ message_so_far)`.
    hash: Sha256,
}

impl HmacSha256 {
    /// Create an unkeyed state with an all-zero key schedule.
    ///
    /// [`set_key`](Self::set_key) must be called before the state can
    /// authenticate anything.
    pub fn new() -> Self {
        Self {
            schedule: [0u8; 2 * BLOCK_SIZE],
            hash: Sha256::new(),
        }
    }

    /// Install `key`, populating the key schedule for subsequent MAC
    /// computations.
    ///
    /// Keys longer than [`BLOCK_SIZE`] are first folded through SHA-256
    /// per RFC 2104 §2. The short-key branch performs a dummy hash of the
    /// same cost as the folding branch: the execution time of `set_key`
    /// must not reveal which side of [`BLOCK_SIZE`] the key length falls
    /// on.
    ///
    /// Returns [`Error::InvalidInput`] for an empty key, leaving the
    /// state untouched.
    pub fn set_key(&mut self, key: &[u8]) -> Result<(), Error> {
        if key.is_empty() {
            return Err(Error::InvalidInput);
        }

        if key.len() <= BLOCK_SIZE {
            // Dummy round, discarded: matches the hashing cost of the
            // folding branch below.
            let mut scratch = Sha256::new();
            Digest::update(&mut scratch, key);
            let mut sink = [0u8; TAG_SIZE];
            scratch.finalize_into(Output::<Sha256>::from_mut_slice(&mut sink));
            sink.zeroize();

            self.rekey(key);
        } else {
            self.hash.reset();
            Digest::update(&mut self.hash, key);
            let mut folded = [0u8; TAG_SIZE];
            self.hash
                .finalize_into_reset(Output::<Sha256>::from_mut_slice(&mut folded));

            self.rekey(&folded);
            folded.zeroize();
        }

        Ok(())
    }

    /// Populate both halves of the schedule from a key of at most
    /// [`BLOCK_SIZE`] bytes; the tail of each half beyond the key is pure
    /// pad.
    pub(crate) fn rekey(&mut self, key: &[u8]) {
        debug_assert!(key.len() <= BLOCK_SIZE);

        let (inner, outer) = self.schedule.split_at_mut(BLOCK_SIZE);
        for (i, (ib, ob)) in inner.iter_mut().zip(outer.iter_mut()).enumerate() {
            let byte = key.get(i).copied().unwrap_or(0);
            *ib = IPAD ^ byte;
            *ob = OPAD ^ byte;
        }
    }

    /// Begin a new MAC computation under the installed key.
    pub fn init(&mut self) {
        self.hash.reset();
        Digest::update(&mut self.hash, &self.schedule[..BLOCK_SIZE]);
    }

    /// Absorb message bytes. Empty input is permitted and absorbs
    /// nothing.
    pub fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hash, data);
    }

    /// Finish the computation, writing the 32-byte tag into `tag`.
    ///
    /// The key schedule is wiped to zero and the hash state reset to its
    /// initial value; [`set_key`](Self::set_key) must be called again
    /// before the state can produce another tag.
    pub fn finalize_into(&mut self, tag: &mut [u8; TAG_SIZE]) {
        // Inner hash into `tag`, then reuse the hash state for the outer
        // pass: SHA256((K ⊕ opad) ‖ inner).
        self.hash
            .finalize_into_reset(Output::<Sha256>::from_mut_slice(tag));

        Digest::update(&mut self.hash, &self.schedule[BLOCK_SIZE..]);
        Digest::update(&mut self.hash, &tag[..]);
        self.hash
            .finalize_into_reset(Output::<Sha256>::from_mut_slice(tag));

        self.schedule.zeroize();
    }
}

impl Default for HmacSha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HmacSha256 {
    fn drop(&mut self) {
        self.schedule.zeroize();
    }
}

/// Compute the HMAC-SHA256 tag of `data` under `key` in one call.
///
/// Returns [`Error::InvalidInput`] for an empty key.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<[u8; TAG_SIZE], Error> {
    let mut mac = HmacSha256::new();
    mac.set_key(key)?;
    mac.init();
    mac.update(data);

    let mut tag = [0u8; TAG_SIZE];
    mac.finalize_into(&mut tag);
    Ok(tag)
}
