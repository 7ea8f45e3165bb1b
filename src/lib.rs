#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! Generating pseudorandom bytes:
//!
//! ```
//! use hmac_prng::HmacDrbg;
//!
//! # fn main() -> Result<(), hmac_prng::Error> {
//! // Instantiate with an (optional) personalization string, then seed
//! // with entropy obtained from the platform. Until the first reseed
//! // the generator refuses to produce output.
//! let mut drbg = HmacDrbg::new(b"device-serial-0042")?;
//! drbg.reseed(&[0x3a; 32], None)?;
//!
//! let mut buf = [0u8; 48];
//! drbg.generate_into(&mut buf)?;
//! # assert_ne!(buf, [0u8; 48]);
//! # Ok(())
//! # }
//! ```
//!
//! Computing a MAC:
//!
//! ```
//! use hmac_prng::HmacSha256;
//!
//! # fn main() -> Result<(), hmac_prng::Error> {
//! let mut mac = HmacSha256::new();
//! mac.set_key(b"Jefe")?;
//! mac.init();
//! mac.update(b"what do ya want for nothing?");
//!
//! let mut tag = [0u8; 32];
//! mac.finalize_into(&mut tag);
//! assert_eq!(tag[..4], [0x5b, 0xdc, 0xc1, 0x46]);
//! # Ok(())
//! # }
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

pub mod drbg;
pub mod hmac;

mod error;

pub use crate::{
    drbg::{HmacDrbg, MAX_OUTPUT_LEN, MAX_RESEED_INTERVAL, MIN_SEED_LEN},
    error::Error,
    hmac::{hmac_sha256, HmacSha256},
};
