//! Cursor primitives for the call parameter wire format.
//!
//! Every multi-byte value is little-endian unless its [`IntSpec`] says otherwise. The two notable
//! big-endian fields are the 8-byte null sentinel in front of optional values and the `size_t`
//! encoding used for byte counts.

use std::io;

use crate::error::{Result, WireError};
use crate::names::{EnumTable, FlagTable};

/// Width of the sentinel that precedes every nullable field.
pub const SENTINEL_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// How an integer field is laid out on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntSpec {
    /// Width in bytes: 1, 2, 4 or 8.
    pub width: u8,
    pub signed: bool,
    pub endian: Endian,
}

impl IntSpec {
    pub const U8: Self = Self::unsigned(1);
    pub const U16: Self = Self::unsigned(2);
    pub const U32: Self = Self::unsigned(4);
    pub const U64: Self = Self::unsigned(8);
    pub const I32: Self = Self::signed(4);
    pub const I64: Self = Self::signed(8);
    /// `size_t` values travel as 8-byte big-endian integers.
    pub const SIZE: Self = Self {
        width: 8,
        signed: false,
        endian: Endian::Big,
    };

    pub const fn unsigned(width: u8) -> Self {
        Self {
            width,
            signed: false,
            endian: Endian::Little,
        }
    }

    pub const fn signed(width: u8) -> Self {
        Self {
            width,
            signed: true,
            endian: Endian::Little,
        }
    }

    pub const fn big_endian(self) -> Self {
        Self {
            endian: Endian::Big,
            ..self
        }
    }

    pub const fn size_bytes(self) -> usize {
        self.width as usize
    }
}

/// String layouts understood by the codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringEncoding {
    /// Exactly `n` bytes; trailing NULs are stripped on read and padded on write.
    Fixed(usize),
    /// Bytes up to (and consuming) a single NUL terminator.
    NulTerminated,
    /// `u32` big-endian byte length followed by the bytes.
    LengthPrefixed,
}

/// Read cursor over one packet payload.
#[derive(Clone, Debug)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Bytes consumed so far, starting at `from`.
    pub fn consumed_since(&self, from: usize) -> &'a [u8] {
        &self.buf[from.min(self.pos)..self.pos]
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(WireError::UnexpectedEof {
                offset: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Reads an integer and returns its raw bits, zero-extended to 64 bits.
    pub fn read_uint(&mut self, spec: IntSpec) -> Result<u64> {
        let width = spec.size_bytes();
        debug_assert!(matches!(width, 1 | 2 | 4 | 8), "invalid int width {width}");
        let bytes = self.read_bytes(width)?;
        let mut raw = [0u8; 8];
        let value = match spec.endian {
            Endian::Little => {
                raw[..width].copy_from_slice(bytes);
                u64::from_le_bytes(raw)
            }
            Endian::Big => {
                raw[8 - width..].copy_from_slice(bytes);
                u64::from_be_bytes(raw)
            }
        };
        Ok(value)
    }

    /// Reads an integer and sign-extends it according to `spec`.
    pub fn read_sint(&mut self, spec: IntSpec) -> Result<i64> {
        let raw = self.read_uint(spec)?;
        Ok(sign_extend(raw, spec.width))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(self.read_uint(IntSpec::U32)? as u32)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_uint(IntSpec::U64)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads the 8-byte big-endian null sentinel. Returns `true` when a value follows.
    pub fn read_sentinel(&mut self) -> Result<bool> {
        Ok(self.read_uint(IntSpec::U64.big_endian())? != 0)
    }

    pub fn read_optional<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<Option<T>> {
        if !self.read_sentinel()? {
            return Ok(None);
        }
        read(self).map(Some)
    }

    pub fn read_array<T>(
        &mut self,
        count: usize,
        mut read: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        // `count` is untrusted; every element occupies at least one byte.
        let mut out = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            out.push(read(self)?);
        }
        Ok(out)
    }

    /// Reads a `u32` enum value along with its label, if the table knows it.
    pub fn read_enum(&mut self, table: &EnumTable) -> Result<(u32, Option<&'static str>)> {
        let value = self.read_u32()?;
        Ok((value, table.label(value)))
    }

    /// Reads a `u32` flag mask, returning the mask, the known bit names and the unknown remainder.
    pub fn read_flags(&mut self, table: &FlagTable) -> Result<(u32, Vec<&'static str>, u32)> {
        let value = self.read_u32()?;
        let (names, rest) = table.split(value);
        Ok((value, names, rest))
    }

    pub fn read_string(&mut self, encoding: StringEncoding, field: &'static str) -> Result<String> {
        let bytes = match encoding {
            StringEncoding::Fixed(n) => {
                let raw = self.read_bytes(n)?;
                let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
                &raw[..end]
            }
            StringEncoding::NulTerminated => {
                let rest = &self.buf[self.pos..];
                let Some(nul) = rest.iter().position(|&b| b == 0) else {
                    return Err(WireError::UnexpectedEof {
                        offset: self.pos,
                        needed: rest.len() + 1,
                        remaining: rest.len(),
                    });
                };
                let raw = self.read_bytes(nul + 1)?;
                &raw[..nul]
            }
            StringEncoding::LengthPrefixed => {
                let len = self.read_uint(IntSpec::U32.big_endian())? as usize;
                self.read_bytes(len)?
            }
        };
        String::from_utf8(bytes.to_vec()).map_err(|_| WireError::InvalidUtf8 { field })
    }
}

pub(crate) fn sign_extend(raw: u64, width: u8) -> i64 {
    let shift = 64 - u32::from(width) * 8;
    ((raw << shift) as i64) >> shift
}

/// Buffered output for one call's writeback.
///
/// Nothing reaches the guest until [`WireWriter::commit`] is called.
#[derive(Clone, Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes the low `spec.width` bytes of `value`.
    pub fn write_uint(&mut self, spec: IntSpec, value: u64) {
        let width = spec.size_bytes();
        match spec.endian {
            Endian::Little => self.buf.extend_from_slice(&value.to_le_bytes()[..width]),
            Endian::Big => self.buf.extend_from_slice(&value.to_be_bytes()[8 - width..]),
        }
    }

    pub fn write_sint(&mut self, spec: IntSpec, value: i64) {
        self.write_uint(spec, value as u64);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.write_uint(IntSpec::U32, u64::from(value));
    }

    pub fn write_u64(&mut self, value: u64) {
        self.write_uint(IntSpec::U64, value);
    }

    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }

    pub fn write_sentinel(&mut self, present: bool) {
        self.write_uint(IntSpec::U64.big_endian(), u64::from(present));
    }

    pub fn write_optional<T>(&mut self, value: Option<T>, write: impl FnOnce(&mut Self, T)) {
        self.write_sentinel(value.is_some());
        if let Some(value) = value {
            write(self, value);
        }
    }

    pub fn write_string(&mut self, encoding: StringEncoding, value: &str) {
        match encoding {
            StringEncoding::Fixed(n) => {
                let bytes = value.as_bytes();
                let take = bytes.len().min(n);
                self.buf.extend_from_slice(&bytes[..take]);
                self.buf.resize(self.buf.len() + (n - take), 0);
            }
            StringEncoding::NulTerminated => {
                self.buf.extend_from_slice(value.as_bytes());
                self.buf.push(0);
            }
            StringEncoding::LengthPrefixed => {
                self.write_uint(IntSpec::U32.big_endian(), value.len() as u64);
                self.buf.extend_from_slice(value.as_bytes());
            }
        }
    }

    /// Hands the buffered bytes to `sink` and clears the buffer.
    pub fn commit<W: io::Write + ?Sized>(&mut self, sink: &mut W) -> io::Result<usize> {
        let written = self.buf.len();
        sink.write_all(&self.buf)?;
        sink.flush()?;
        self.buf.clear();
        Ok(written)
    }
}
