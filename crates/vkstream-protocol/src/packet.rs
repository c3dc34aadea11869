//! Packet framing: `opcode:u32 LE | length:i32 LE | payload`, back to back.
//!
//! `length` counts the 8-byte header too.

use thiserror::Error;
use tracing::trace;

use crate::descriptor::CallDescriptor;
use crate::opcode::Opcode;

pub const HEADER_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PacketHeader {
    pub opcode: u32,
    pub length: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Not enough bytes for a header or for the packet it announces. More data may complete it.
    #[error("incomplete packet at offset {offset}: need {needed} bytes, have {available}")]
    Incomplete {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The header's length cannot cover the header itself.
    #[error("packet at offset {offset} declares invalid length {length}")]
    BadLength { offset: usize, length: i32 },
}

impl FrameError {
    pub fn is_incomplete(&self) -> bool {
        matches!(self, FrameError::Incomplete { .. })
    }
}

pub fn decode_header(buf: &[u8]) -> Option<PacketHeader> {
    let bytes = buf.get(..HEADER_SIZE)?;
    Some(PacketHeader {
        opcode: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        length: i32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
    })
}

/// One framed call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Packet<'a> {
    pub opcode: u32,
    /// Total size including the header.
    pub length: usize,
    pub payload: &'a [u8],
}

impl<'a> Packet<'a> {
    pub fn known_opcode(&self) -> Option<Opcode> {
        Opcode::from_u32(self.opcode)
    }

    pub fn descriptor(&self) -> Option<&'static CallDescriptor> {
        self.known_opcode().map(Opcode::descriptor)
    }
}

/// Frames the packet at the start of `buf`. `offset` only feeds error reporting.
pub fn frame_at(buf: &[u8], offset: usize) -> Result<Packet<'_>, FrameError> {
    let Some(header) = decode_header(buf) else {
        return Err(FrameError::Incomplete {
            offset,
            needed: HEADER_SIZE,
            available: buf.len(),
        });
    };
    let length = match usize::try_from(header.length) {
        Ok(length) if length >= HEADER_SIZE => length,
        _ => {
            return Err(FrameError::BadLength {
                offset,
                length: header.length,
            })
        }
    };
    if length > buf.len() {
        return Err(FrameError::Incomplete {
            offset,
            needed: length,
            available: buf.len(),
        });
    }
    Ok(Packet {
        opcode: header.opcode,
        length,
        payload: &buf[HEADER_SIZE..length],
    })
}

/// Iterates over the packets of a buffer, stopping after the first framing error.
#[derive(Clone, Debug)]
pub struct PacketIter<'a> {
    buf: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> PacketIter<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            offset: 0,
            done: false,
        }
    }

    /// Bytes covered by the packets yielded so far.
    pub fn consumed(&self) -> usize {
        self.offset
    }
}

impl<'a> Iterator for PacketIter<'a> {
    type Item = Result<Packet<'a>, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.buf.len() {
            return None;
        }
        match frame_at(&self.buf[self.offset..], self.offset) {
            Ok(packet) => {
                trace!(opcode = packet.opcode, length = packet.length, offset = self.offset, "packet");
                self.offset += packet.length;
                Some(Ok(packet))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Frames `payload` as one packet.
pub fn encode_packet(opcode: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&opcode.to_le_bytes());
    out.extend_from_slice(&((HEADER_SIZE + payload.len()) as i32).to_le_bytes());
    out.extend_from_slice(payload);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_back_to_back_packets() {
        let mut buf = encode_packet(Opcode::DeviceWaitIdle.as_u32(), &[1; 8]);
        buf.extend(encode_packet(7, &[]));
        let packets: Vec<_> = PacketIter::new(&buf).collect::<Result<_, _>>().unwrap();
        assert_eq!(packets.len(), 2);
        assert_eq!(packets[0].known_opcode(), Some(Opcode::DeviceWaitIdle));
        assert_eq!(packets[0].payload, &[1; 8]);
        assert_eq!(packets[1].length, HEADER_SIZE);
        assert!(packets[1].descriptor().is_none());
    }

    #[test]
    fn short_header_is_incomplete() {
        let err = frame_at(&[1, 0, 0], 0).unwrap_err();
        assert!(err.is_incomplete());
    }

    #[test]
    fn truncated_packet_reports_progress_before_it() {
        let mut buf = encode_packet(1, &[0; 4]);
        let second = encode_packet(2, &[0; 16]);
        buf.extend_from_slice(&second[..12]);

        let mut iter = PacketIter::new(&buf);
        assert!(iter.next().unwrap().is_ok());
        let err = iter.next().unwrap().unwrap_err();
        assert_eq!(
            err,
            FrameError::Incomplete {
                offset: 12,
                needed: 24,
                available: 12
            }
        );
        assert_eq!(iter.consumed(), 12);
        assert!(iter.next().is_none());
    }

    #[test]
    fn length_below_header_size_is_rejected() {
        for length in [0i32, 7, -1] {
            let mut buf = 5u32.to_le_bytes().to_vec();
            buf.extend_from_slice(&length.to_le_bytes());
            assert_eq!(
                frame_at(&buf, 0).unwrap_err(),
                FrameError::BadLength { offset: 0, length }
            );
        }
    }
}
