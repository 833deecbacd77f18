//! Reed-Solomon protected human-readable codes
//!
//! - [`ezcod`]: latitude/longitude as codes like `R3U 08M PVT.D`
//! - [`rskey`]: fixed-size byte payloads as keys like `000G4-0YYYU-XYQWE`
//!
//! Both run a shortened Reed-Solomon code over GF(2^5), one symbol per
//! base-32 glyph, and report how much parity a decode consumed as a
//! [`Confidence`].

pub mod args;
pub mod confidence;
pub mod error;
pub mod ezcod;
pub mod reed_solomon;
pub mod rskey;
pub mod symbols;

pub use args::build_cli;
pub use confidence::Confidence;
pub use error::{CodecError, Result};
pub use ezcod::{Ezcod, EzcodConfig, EzcodFamily, Location};
pub use rskey::{DecodedKey, RsKey, RsKeyConfig};
