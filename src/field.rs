//! Pending field definitions
//!
//! A [`Field`] is a deferred write of a fixed number of bytes. Its length is
//! known at declaration time, which is what lets [`Maker`](crate::Maker)
//! size the output buffer before a single byte is written.

use alloc::borrow::Cow;

use crate::error::{Error, Result};

/// Byte order used for multi-byte integer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endian {
    /// Most significant byte first (network order)
    #[default]
    Big,
    /// Least significant byte first
    Little,
}

impl Endian {
    /// Map a `little_endian` flag onto a byte order
    #[inline]
    pub const fn from_little(little_endian: bool) -> Self {
        if little_endian {
            Endian::Little
        } else {
            Endian::Big
        }
    }
}

/// Width of a fixed-size integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 2 bytes
    W16,
    /// 4 bytes
    W32,
    /// 8 bytes
    W64,
}

impl Width {
    /// Encoded size in bytes
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            Width::W16 => 2,
            Width::W32 => 4,
            Width::W64 => 8,
        }
    }
}

/// A single pending write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<'a> {
    /// One raw byte
    Byte(u8),
    /// Raw bytes, no length prefix
    Bytes(Cow<'a, [u8]>),
    /// UTF-8 bytes of a string, no terminator and no length prefix
    Str(Cow<'a, str>),
    /// Fixed-width integer
    ///
    /// `bits` holds the value zero-extended to 64 bits. Signed values are
    /// stored as their two's-complement pattern at `width`.
    Int {
        /// Encoded width
        width: Width,
        /// Byte order
        endian: Endian,
        /// Raw value bits
        bits: u64,
    },
}

impl Field<'_> {
    /// Number of bytes this field writes
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Field::Byte(_) => 1,
            Field::Bytes(b) => b.len(),
            Field::Str(s) => s.len(),
            Field::Int { width, .. } => width.size(),
        }
    }

    /// Returns true if this field writes nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the field at the start of `out`
    ///
    /// Returns the number of bytes written, always [`Field::len`]. Bytes
    /// past that are left untouched.
    #[inline]
    pub fn write(&self, out: &mut [u8]) -> Result<usize> {
        if out.len() < self.len() {
            return Err(Error::ShortBuffer);
        }
        Ok(self.emit(out))
    }

    /// Write into `out`, which the caller has sized to at least `len()`
    #[inline]
    pub(crate) fn emit(&self, out: &mut [u8]) -> usize {
        match self {
            Field::Byte(b) => {
                out[0] = *b;
                1
            }
            Field::Bytes(b) => {
                out[..b.len()].copy_from_slice(b);
                b.len()
            }
            Field::Str(s) => {
                out[..s.len()].copy_from_slice(s.as_bytes());
                s.len()
            }
            Field::Int {
                width,
                endian,
                bits,
            } => write_int(out, *width, *endian, *bits),
        }
    }
}

#[inline]
fn write_int(out: &mut [u8], width: Width, endian: Endian, bits: u64) -> usize {
    match (width, endian) {
        (Width::W16, Endian::Big) => out[..2].copy_from_slice(&(bits as u16).to_be_bytes()),
        (Width::W16, Endian::Little) => out[..2].copy_from_slice(&(bits as u16).to_le_bytes()),
        (Width::W32, Endian::Big) => out[..4].copy_from_slice(&(bits as u32).to_be_bytes()),
        (Width::W32, Endian::Little) => out[..4].copy_from_slice(&(bits as u32).to_le_bytes()),
        (Width::W64, Endian::Big) => out[..8].copy_from_slice(&bits.to_be_bytes()),
        (Width::W64, Endian::Little) => out[..8].copy_from_slice(&bits.to_le_bytes()),
    }
    width.size()
}
