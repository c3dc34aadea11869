//! Command-stream captures embedded in crash dumps.
//!
//! A capture is a fixed 56-byte header followed by `data_size` bytes of commands. Dumps are
//! scanned for the header signature at any offset, since the capture buffers land wherever the
//! dumping process had them mapped.

use thiserror::Error;
use tracing::{debug, warn};

pub const SIGNATURE: [u8; 10] = *b"GFXAPILOG\0";
pub const CAPTURE_HEADER_SIZE: usize = 56;
/// Captures never hold more command data than this.
pub const MAX_DATA_SIZE: u32 = 64 * 1024 * 1024;
/// Newest capture layout; version 2 added the per-command `original_size` trailer.
pub const CURRENT_VERSION: u32 = 2;

const COMMAND_HEADER_SIZE: usize = 8;
/// Milliseconds between 1601-01-01 (FILETIME epoch) and 1970-01-01.
const FILETIME_UNIX_OFFSET_MS: i64 = 11_644_473_600_000;
const FILETIME_TICKS_PER_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("capture header at {offset} is truncated: {available} of 56 bytes present")]
    TruncatedHeader { offset: usize, available: usize },

    #[error("unsupported capture version {0}")]
    UnsupportedVersion(u32),

    #[error("capture data size {data_size} exceeds the 64 MiB limit")]
    DataTooLarge { data_size: u32 },

    #[error("capture data size {data_size} runs past the end of the file ({available} bytes left)")]
    DataOutOfBounds { data_size: u32, available: usize },

    #[error("command at data offset {offset} has invalid size {size}")]
    BadCommandSize { offset: usize, size: u32 },

    #[error("command at data offset {offset} needs {size} bytes but only {remaining} remain")]
    CommandOverrun {
        offset: usize,
        size: u32,
        remaining: usize,
    },

    #[error("command at data offset {offset} is missing its original size")]
    MissingTrailer { offset: usize },
}

/// On-disk capture header. Offsets follow natural C alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub version: u32,
    pub thread_id: u32,
    /// Windows FILETIME: 100ns ticks since 1601.
    pub last_written_time: u64,
    pub write_index: u32,
    pub committed_index: u32,
    pub capture_id: u64,
    pub data_size: u32,
}

fn le_u32(buf: &[u8], at: usize) -> u32 {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[at..at + 4]);
    u32::from_le_bytes(b)
}

fn le_u64(buf: &[u8], at: usize) -> u64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(&buf[at..at + 8]);
    u64::from_le_bytes(b)
}

impl Header {
    /// Parses the header at the start of `buf`. The signature is not checked.
    pub fn parse(buf: &[u8], offset: usize) -> Result<Self, CaptureError> {
        if buf.len() < CAPTURE_HEADER_SIZE {
            return Err(CaptureError::TruncatedHeader {
                offset,
                available: buf.len(),
            });
        }
        Ok(Self {
            version: le_u32(buf, 12),
            thread_id: le_u32(buf, 16),
            last_written_time: le_u64(buf, 24),
            write_index: le_u32(buf, 32),
            committed_index: le_u32(buf, 36),
            capture_id: le_u64(buf, 40),
            data_size: le_u32(buf, 48),
        })
    }

    pub fn to_bytes(&self) -> [u8; CAPTURE_HEADER_SIZE] {
        let mut out = [0u8; CAPTURE_HEADER_SIZE];
        out[..SIGNATURE.len()].copy_from_slice(&SIGNATURE);
        out[12..16].copy_from_slice(&self.version.to_le_bytes());
        out[16..20].copy_from_slice(&self.thread_id.to_le_bytes());
        out[24..32].copy_from_slice(&self.last_written_time.to_le_bytes());
        out[32..36].copy_from_slice(&self.write_index.to_le_bytes());
        out[36..40].copy_from_slice(&self.committed_index.to_le_bytes());
        out[40..48].copy_from_slice(&self.capture_id.to_le_bytes());
        out[48..52].copy_from_slice(&self.data_size.to_le_bytes());
        out
    }

    /// Unix timestamp in milliseconds.
    pub fn timestamp_ms(&self) -> i64 {
        (self.last_written_time / FILETIME_TICKS_PER_MS) as i64 - FILETIME_UNIX_OFFSET_MS
    }

    pub fn set_timestamp_ms(&mut self, timestamp_ms: i64) {
        let ms = timestamp_ms.saturating_add(FILETIME_UNIX_OFFSET_MS).max(0) as u64;
        self.last_written_time = ms.saturating_mul(FILETIME_TICKS_PER_MS);
    }
}

/// One captured command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub opcode: u32,
    /// Size of the command when it was issued, header included.
    pub original_size: u32,
    /// Payload as captured; shorter than `original_size - 8` when truncated.
    pub data: Vec<u8>,
}

impl Command {
    pub fn is_truncated(&self) -> bool {
        u64::from(self.original_size) > (self.data.len() + COMMAND_HEADER_SIZE) as u64
    }

    /// Appends the command in the layout of capture `version`.
    pub fn encode_into(&self, version: u32, out: &mut Vec<u8>) {
        let size = (self.data.len() + COMMAND_HEADER_SIZE) as u32;
        out.extend_from_slice(&self.opcode.to_le_bytes());
        out.extend_from_slice(&size.to_le_bytes());
        out.extend_from_slice(&self.data);
        if version >= 2 {
            out.extend_from_slice(&self.original_size.to_le_bytes());
        }
    }
}

/// A capture found in a dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    /// Offset of the signature in the dump.
    pub pos_in_file: usize,
    pub version: u32,
    /// Unix milliseconds.
    pub timestamp: i64,
    pub thread_id: u32,
    pub capture_id: u64,
    /// Commands parsed before the end of the data or the first error.
    pub commands: Vec<Command>,
    pub error_message: Option<String>,
}

/// Serializes a capture. `header.data_size` is computed from `commands`.
pub fn encode_capture(header: &Header, commands: &[Command]) -> Vec<u8> {
    let mut data = Vec::new();
    for command in commands {
        command.encode_into(header.version, &mut data);
    }
    let header = Header {
        data_size: data.len() as u32,
        ..*header
    };
    let mut out = header.to_bytes().to_vec();
    out.extend_from_slice(&data);
    out
}

/// Offsets of every capture signature in `buf`, in file order.
pub fn find_signatures(buf: &[u8]) -> impl Iterator<Item = usize> + '_ {
    buf.windows(SIGNATURE.len())
        .enumerate()
        .filter(|(_, window)| *window == SIGNATURE)
        .map(|(pos, _)| pos)
}

/// Finds and parses every capture in a dump.
///
/// A malformed capture does not stop the scan; its error is kept in
/// [`Stream::error_message`] alongside whatever commands were parsed.
pub fn process_dump(buf: &[u8]) -> Vec<Stream> {
    let streams: Vec<Stream> = find_signatures(buf)
        .map(|pos| parse_stream(buf, pos))
        .collect();
    debug!(streams = streams.len(), bytes = buf.len(), "scanned dump");
    streams
}

/// Parses the capture whose signature starts at `pos`.
pub fn parse_stream(buf: &[u8], pos: usize) -> Stream {
    let mut stream = Stream {
        pos_in_file: pos,
        version: 0,
        timestamp: 0,
        thread_id: 0,
        capture_id: 0,
        commands: Vec::new(),
        error_message: None,
    };
    if let Err(err) = fill_stream(&mut stream, buf.get(pos..).unwrap_or_default()) {
        warn!(pos, error = %err, "malformed capture");
        stream.error_message = Some(err.to_string());
    }
    stream
}

fn fill_stream(stream: &mut Stream, buf: &[u8]) -> Result<(), CaptureError> {
    let header = Header::parse(buf, stream.pos_in_file)?;
    stream.version = header.version;
    stream.timestamp = header.timestamp_ms();
    stream.thread_id = header.thread_id;
    stream.capture_id = header.capture_id;

    if header.version == 0 || header.version > CURRENT_VERSION {
        return Err(CaptureError::UnsupportedVersion(header.version));
    }
    if header.data_size > MAX_DATA_SIZE {
        return Err(CaptureError::DataTooLarge {
            data_size: header.data_size,
        });
    }
    let available = buf.len() - CAPTURE_HEADER_SIZE;
    let data = buf
        .get(CAPTURE_HEADER_SIZE..CAPTURE_HEADER_SIZE + header.data_size as usize)
        .ok_or(CaptureError::DataOutOfBounds {
            data_size: header.data_size,
            available,
        })?;
    parse_commands(data, header.version, &mut stream.commands)
}

fn parse_commands(
    data: &[u8],
    version: u32,
    commands: &mut Vec<Command>,
) -> Result<(), CaptureError> {
    let mut offset = 0;
    while offset < data.len() {
        let rest = &data[offset..];
        if rest.len() < COMMAND_HEADER_SIZE {
            return Err(CaptureError::CommandOverrun {
                offset,
                size: COMMAND_HEADER_SIZE as u32,
                remaining: rest.len(),
            });
        }
        let opcode = le_u32(rest, 0);
        let size = le_u32(rest, 4);
        if (size as usize) < COMMAND_HEADER_SIZE {
            return Err(CaptureError::BadCommandSize { offset, size });
        }
        if size as usize > rest.len() {
            return Err(CaptureError::CommandOverrun {
                offset,
                size,
                remaining: rest.len(),
            });
        }
        let payload = &rest[COMMAND_HEADER_SIZE..size as usize];
        let mut consumed = size as usize;

        let original_size = if version >= 2 {
            let trailer = rest
                .get(consumed..consumed + 4)
                .ok_or(CaptureError::MissingTrailer { offset })?;
            consumed += 4;
            le_u32(trailer, 0)
        } else {
            size
        };

        commands.push(Command {
            opcode,
            original_size,
            data: payload.to_vec(),
        });
        offset += consumed;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const OP_VK_DESTROY_INSTANCE: u32 = 20001;

    fn destroy_instance(instance: u64, allocator: u64) -> Command {
        let mut data = 20u32.to_le_bytes().to_vec();
        data.extend_from_slice(&instance.to_le_bytes());
        data.extend_from_slice(&allocator.to_le_bytes());
        Command {
            opcode: OP_VK_DESTROY_INSTANCE,
            original_size: data.len() as u32 + 8,
            data,
        }
    }

    fn header(timestamp: i64, thread_id: u32, capture_id: u64) -> Header {
        let mut header = Header {
            version: 2,
            thread_id,
            capture_id,
            ..Header::default()
        };
        header.set_timestamp_ms(timestamp);
        header
    }

    #[test]
    fn single_command_at_unaligned_offset() {
        let command = destroy_instance(0x1234, 0x7321);
        let mut dump = vec![0u8; 24];
        dump.extend(encode_capture(&header(123456, 4726, 8261), &[command.clone()]));

        let streams = process_dump(&dump);
        assert_eq!(streams.len(), 1);
        let stream = &streams[0];
        assert_eq!(stream.error_message, None);
        assert_eq!(stream.pos_in_file, 24);
        assert_eq!(stream.timestamp, 123456);
        assert_eq!(stream.thread_id, 4726);
        assert_eq!(stream.capture_id, 8261);
        assert_eq!(stream.commands, vec![command]);
    }

    #[test]
    fn multiple_commands() {
        let commands = vec![
            destroy_instance(0x1234, 0x7321),
            destroy_instance(0x3621, 0x7672),
        ];
        let dump = encode_capture(&header(123456, 4726, 8261), &commands);
        let streams = process_dump(&dump);
        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].error_message, None);
        assert_eq!(streams[0].commands, commands);
    }

    #[test]
    fn multiple_streams_in_file_order() {
        let command = destroy_instance(0x1234, 0x7321);
        let mut dump = Vec::new();
        let mut offsets = Vec::new();
        for i in 0..10u32 {
            dump.extend(std::iter::repeat(0u8).take(i as usize));
            offsets.push(dump.len());
            dump.extend(encode_capture(
                &header(i64::from(i), i, u64::from(i)),
                &[command.clone()],
            ));
        }

        let streams = process_dump(&dump);
        assert_eq!(streams.len(), 10);
        for (i, stream) in streams.iter().enumerate() {
            assert_eq!(stream.error_message, None);
            assert_eq!(stream.pos_in_file, offsets[i]);
            assert_eq!(stream.timestamp, i as i64);
            assert_eq!(stream.thread_id, i as u32);
            assert_eq!(stream.capture_id, i as u64);
            assert_eq!(stream.commands.len(), 1);
        }
    }

    #[test]
    fn version_one_has_no_trailer() {
        let command = destroy_instance(1, 0);
        let mut h = header(0, 1, 1);
        h.version = 1;
        let dump = encode_capture(&h, &[command.clone()]);
        let streams = process_dump(&dump);
        assert_eq!(streams[0].error_message, None);
        assert_eq!(streams[0].commands, vec![command]);
    }

    #[test]
    fn truncated_command_keeps_original_size() {
        let command = Command {
            opcode: OP_VK_DESTROY_INSTANCE,
            original_size: 4096,
            data: vec![1, 2, 3, 4],
        };
        assert!(command.is_truncated());
        let dump = encode_capture(&header(0, 1, 1), &[command.clone()]);
        let streams = process_dump(&dump);
        assert_eq!(streams[0].commands, vec![command]);
    }

    #[test]
    fn errors_keep_earlier_commands() {
        let good = destroy_instance(1, 0);
        let mut data = Vec::new();
        good.encode_into(2, &mut data);
        data.extend_from_slice(&OP_VK_DESTROY_INSTANCE.to_le_bytes());
        data.extend_from_slice(&4u32.to_le_bytes());

        let h = Header {
            data_size: data.len() as u32,
            ..header(0, 1, 1)
        };
        let mut dump = h.to_bytes().to_vec();
        dump.extend_from_slice(&data);

        let streams = process_dump(&dump);
        assert_eq!(streams[0].commands, vec![good]);
        assert_eq!(
            streams[0].error_message.as_deref(),
            Some("command at data offset 32 has invalid size 4")
        );
    }

    #[test]
    fn missing_trailer_is_reported() {
        let mut data = Vec::new();
        destroy_instance(1, 0).encode_into(1, &mut data);
        let h = Header {
            data_size: data.len() as u32,
            ..header(0, 1, 1)
        };
        let mut dump = h.to_bytes().to_vec();
        dump.extend_from_slice(&data);

        let streams = process_dump(&dump);
        assert!(streams[0].commands.is_empty());
        assert_eq!(
            streams[0].error_message.as_deref(),
            Some("command at data offset 0 is missing its original size")
        );
    }

    #[test]
    fn header_errors_do_not_stop_the_scan() {
        let mut dump = encode_capture(&header(0, 1, 1), &[]);
        dump[48..52].copy_from_slice(&1000u32.to_le_bytes());
        let second = dump.len();
        dump.extend(encode_capture(&header(0, 2, 2), &[destroy_instance(1, 0)]));
        dump.extend_from_slice(&SIGNATURE);

        let streams = process_dump(&dump);
        assert_eq!(streams.len(), 3);
        assert!(streams[0]
            .error_message
            .as_deref()
            .is_some_and(|m| m.contains("runs past the end")));
        assert_eq!(streams[1].pos_in_file, second);
        assert_eq!(streams[1].error_message, None);
        assert!(streams[2]
            .error_message
            .as_deref()
            .is_some_and(|m| m.contains("truncated")));
    }

    #[test]
    fn rejects_unknown_versions_and_oversized_data() {
        let mut h = header(0, 1, 1);
        h.version = 3;
        let streams = process_dump(&h.to_bytes());
        assert_eq!(
            streams[0].error_message.as_deref(),
            Some("unsupported capture version 3")
        );

        let h = Header {
            data_size: MAX_DATA_SIZE + 1,
            ..header(0, 1, 1)
        };
        let streams = process_dump(&h.to_bytes());
        assert!(matches!(
            Header::parse(&h.to_bytes(), 0),
            Ok(Header { data_size, .. }) if data_size == MAX_DATA_SIZE + 1
        ));
        assert!(streams[0]
            .error_message
            .as_deref()
            .is_some_and(|m| m.contains("limit")));
    }

    #[test]
    fn filetime_conversion() {
        let h = Header {
            last_written_time: (1_700_000_000_000 + 11_644_473_600_000) * 10_000 + 9_999,
            ..Header::default()
        };
        assert_eq!(h.timestamp_ms(), 1_700_000_000_000);
    }
}
