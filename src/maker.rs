//! Deferred packet builder
//!
//! Fields are declared first and only written when the packet is made. The
//! total length is tracked as fields are declared, so every emit sizes its
//! destination once and fills it in a single pass.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::field::{Endian, Field, Width};

/// Packet builder holding an ordered list of pending fields
///
/// Borrowed sources passed to [`Maker::bytes`] and [`Maker::string`] stay
/// borrowed for `'a`, so they cannot be resized or mutated while the builder
/// is alive:
///
/// ```compile_fail
/// use packetmaker::Maker;
///
/// let mut src = vec![1u8, 2, 3];
/// let mut maker = Maker::new();
/// maker.bytes(&src);
/// src.push(4);
/// let _ = maker.make();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Maker<'a> {
    fields: Vec<Field<'a>>,
    len: usize,
}

impl<'a> Maker<'a> {
    /// Create an empty builder
    #[inline]
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            len: 0,
        }
    }

    /// Create an empty builder with room for `fields` declarations
    #[inline]
    pub fn with_capacity(fields: usize) -> Self {
        Self {
            fields: Vec::with_capacity(fields),
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, field: Field<'a>) -> &mut Self {
        self.len += field.len();
        self.fields.push(field);
        self
    }

    /// Add a single byte
    #[inline]
    pub fn byte(&mut self, b: u8) -> &mut Self {
        self.push(Field::Byte(b))
    }

    /// Add the UTF-8 bytes of `s` without terminator or length prefix
    #[inline]
    pub fn string(&mut self, s: &'a str) -> &mut Self {
        self.push(Field::Str(Cow::Borrowed(s)))
    }

    /// Add an owned string, see [`Maker::string`]
    #[inline]
    pub fn owned_string(&mut self, s: String) -> &mut Self {
        self.push(Field::Str(Cow::Owned(s)))
    }

    /// Add raw bytes without length prefix
    #[inline]
    pub fn bytes(&mut self, b: &'a [u8]) -> &mut Self {
        self.push(Field::Bytes(Cow::Borrowed(b)))
    }

    /// Add owned raw bytes, see [`Maker::bytes`]
    #[inline]
    pub fn owned_bytes(&mut self, b: Vec<u8>) -> &mut Self {
        self.push(Field::Bytes(Cow::Owned(b)))
    }

    #[inline]
    fn int(&mut self, width: Width, endian: Endian, bits: u64) -> &mut Self {
        self.push(Field::Int {
            width,
            endian,
            bits,
        })
    }

    /// Add a 16-bit unsigned integer
    #[inline]
    pub fn u16(&mut self, v: u16, endian: Endian) -> &mut Self {
        self.int(Width::W16, endian, v as u64)
    }

    /// Add a 32-bit unsigned integer
    #[inline]
    pub fn u32(&mut self, v: u32, endian: Endian) -> &mut Self {
        self.int(Width::W32, endian, v as u64)
    }

    /// Add a 64-bit unsigned integer
    #[inline]
    pub fn u64(&mut self, v: u64, endian: Endian) -> &mut Self {
        self.int(Width::W64, endian, v)
    }

    /// Add a 16-bit signed integer (two's complement)
    #[inline]
    pub fn i16(&mut self, v: i16, endian: Endian) -> &mut Self {
        self.u16(v as u16, endian)
    }

    /// Add a 32-bit signed integer (two's complement)
    #[inline]
    pub fn i32(&mut self, v: i32, endian: Endian) -> &mut Self {
        self.u32(v as u32, endian)
    }

    /// Add a 64-bit signed integer (two's complement)
    #[inline]
    pub fn i64(&mut self, v: i64, endian: Endian) -> &mut Self {
        self.u64(v as u64, endian)
    }

    /// Total declared length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the packet has no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of declared fields
    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Pending fields in declaration order
    #[inline]
    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    /// Drop every declared field, keeping the field list allocation
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
        self.len = 0;
    }

    /// Write every field into `out`, which must be exactly `len()` bytes
    fn emit(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.len);
        let mut offset = 0;
        for field in &self.fields {
            offset += field.emit(&mut out[offset..]);
        }
        debug_assert_eq!(offset, self.len);
    }

    /// Make the packet into a freshly allocated buffer
    ///
    /// An empty builder yields an empty vector.
    pub fn make(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.len];
        self.emit(&mut buf);
        buf
    }

    /// Make the packet inside `pad` when its storage is large enough
    ///
    /// A pad whose capacity covers the packet is resized to exactly `len()`
    /// and written in place. Otherwise (or with no pad) a new buffer is made
    /// and the pad is dropped. The second value reports whether a new buffer
    /// was allocated.
    pub fn manipulate_pad(&self, pad: Option<Vec<u8>>) -> (Vec<u8>, bool) {
        match pad {
            // len <= capacity, so the capacity check also covers pads that
            // are already long enough
            Some(mut pad) if pad.capacity() >= self.len => {
                pad.resize(self.len, 0);
                self.emit(&mut pad);
                (pad, false)
            }
            _ => (self.make(), true),
        }
    }

    /// Write the packet at the start of `buf` without allocating
    ///
    /// Bytes past `len()` are left untouched. Returns the number of bytes
    /// written.
    pub fn write_into(&self, buf: &mut [u8]) -> Result<usize> {
        if buf.len() < self.len {
            return Err(Error::ShortBuffer);
        }
        self.emit(&mut buf[..self.len]);
        Ok(self.len)
    }

    /// Append the packet to the end of `out`, returning the bytes added
    pub fn append_to(&self, out: &mut Vec<u8>) -> usize {
        let start = out.len();
        out.resize(start + self.len, 0);
        self.emit(&mut out[start..]);
        self.len
    }
}
