//! packetmaker: deferred binary packet builder
//!
//! Describe a packet as a sequence of fields, then make it in one pass.
//! The builder knows the total length before anything is written, so the
//! output is sized once and every byte is written exactly once.
//!
//! # Layout
//!
//! ```text
//! +--------+-----------------+------------------+------------+
//! | field0 | field1          | field2           | ...        |
//! +--------+-----------------+------------------+------------+
//!  ^ declaration order is layout order, no padding, no prefixes
//! ```
//!
//! # Features
//!
//! - Bytes, strings, raw byte ranges and 16/32/64-bit integers
//! - Big-endian (default) or little-endian per integer field
//! - Fluent declaration, repeatable emit
//! - In-place emit into a reusable pad, a caller slice or an existing `Vec`
//! - `no_std` with `alloc`
//!
//! # Example
//!
//! ```rust
//! use packetmaker::{Endian, Maker};
//!
//! let mut maker = Maker::new();
//! maker
//!     .byte(0x02)
//!     .u16(60000, Endian::Big)
//!     .string("AAPL")
//!     .i32(-1, Endian::Little);
//!
//! assert_eq!(maker.len(), 11);
//! let packet = maker.make();
//! assert_eq!(&packet[..3], &[0x02, 0xea, 0x60]);
//!
//! // Reuse a scratch buffer when it is big enough
//! let (section, reallocated) = maker.manipulate_pad(Some(Vec::with_capacity(64)));
//! assert!(!reallocated);
//! assert_eq!(section, packet);
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod error;
pub mod field;
pub mod maker;

// Re-export main types
pub use error::{Error, Result};
pub use field::{Endian, Field, Width};
pub use maker::Maker;
