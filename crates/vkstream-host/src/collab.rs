//! Collaborators the decoder drives: the real driver, the long-lived global state and the
//! snapshot recorder.

use thiserror::Error;
use vkstream_protocol::{CallDescriptor, HandleType, Opcode, ParamSpec, Record, Value};

use crate::boxing::{BoxedHandleTable, BoxedId};
use crate::pool::ScratchPool;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{0} is not implemented by this driver")]
    Unsupported(&'static str),

    #[error("{call}: {message}")]
    Failed { call: &'static str, message: String },

    #[error("malformed snapshot handle block: {0}")]
    SnapshotBlock(String),
}

/// The dispatchable handle a call was issued on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchHandle {
    pub ty: HandleType,
    /// Guest-visible id.
    pub boxed: BoxedId,
    /// Driver object it stands for.
    pub raw: u64,
}

/// One call handed to the driver.
///
/// `args` holds every parameter in declaration order with handles already translated to raw
/// driver values. The driver stores outputs back into `args`.
#[derive(Debug)]
pub struct DriverCall {
    pub opcode: Opcode,
    pub name: &'static str,
    /// Raw value of the dispatch handle.
    pub dispatch: Option<u64>,
    pub args: Record,
}

pub trait Driver {
    /// Runs the call. Returns the call's result code, or `None` for calls returning nothing.
    fn call(&mut self, call: &mut DriverCall) -> Result<Option<Value>, DriverError>;
}

/// One call routed through the global state instead of the driver.
///
/// The dispatch parameter keeps its boxed id; the state boxes whatever the call creates.
pub struct StateCall<'a> {
    pub opcode: Opcode,
    pub name: &'static str,
    pub dispatch: Option<DispatchHandle>,
    pub args: Record,
    pub boxing: &'a mut BoxedHandleTable,
    pub pool: &'a mut ScratchPool,
}

/// What the snapshot recorder sees after a call completed.
#[derive(Debug)]
pub struct SnapshotCall<'a> {
    pub opcode: Opcode,
    pub name: &'static str,
    /// Payload bytes consumed while reading the call, including flushed range contents.
    pub trace: &'a [u8],
    /// Parameters with guest-visible ids for the dispatch handle, created handles and destroyed
    /// handles.
    pub params: &'a Record,
    pub ret: Option<&'a Value>,
}

pub trait SnapshotRecorder {
    fn record(&mut self, call: SnapshotCall<'_>);
}

/// Long-lived state shared by every call of a connection.
///
/// Only [`GlobalState::on_call`] is mandatory; the rest default to doing nothing.
pub trait GlobalState {
    fn on_call(&mut self, call: &mut StateCall<'_>) -> Result<Option<Value>, DriverError>;

    /// Rewrites guest inputs before dispatch.
    fn transform_to_host(&mut self, _desc: &CallDescriptor, _params: &mut Record) {}

    /// Rewrites one output before it is written back.
    fn transform_from_host(&mut self, _desc: &CallDescriptor, _param: &ParamSpec, _value: &mut Value) {
    }

    /// Guest and host share mapped memory directly, so flush and invalidate carry no bytes.
    fn uses_direct_mapping(&self) -> bool {
        false
    }

    /// Host mapping of a device memory object, keyed by its raw handle.
    fn mapped_memory(&mut self, _memory: u64) -> Option<&mut [u8]> {
        None
    }

    fn device_memory_size(&self, _memory: u64) -> u64 {
        0
    }

    fn snapshot(&mut self) -> Option<&mut dyn SnapshotRecorder> {
        None
    }

    /// Consumes the created-handle block that precedes a snapshot replay stream.
    ///
    /// Returns the bytes consumed and the boxed ids the following creates must reuse. The
    /// default block is `count:u32 LE` followed by `count` little-endian `u64` ids.
    fn load_created_handles(&mut self, buf: &[u8]) -> Result<(usize, Vec<BoxedId>), DriverError> {
        parse_created_handles(buf)
    }

    fn clear_created_handles(&mut self) {}
}

pub fn parse_created_handles(buf: &[u8]) -> Result<(usize, Vec<BoxedId>), DriverError> {
    let count = buf
        .get(..4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as usize)
        .ok_or_else(|| DriverError::SnapshotBlock("missing handle count".into()))?;
    let end = count
        .checked_mul(8)
        .and_then(|n| n.checked_add(4))
        .filter(|&end| end <= buf.len())
        .ok_or_else(|| {
            DriverError::SnapshotBlock(format!(
                "{count} handles do not fit in {} bytes",
                buf.len()
            ))
        })?;
    let ids = buf[4..end]
        .chunks_exact(8)
        .map(|c| u64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
        .collect();
    Ok((end, ids))
}

/// Global state for streams that only use generic calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGlobalState;

impl GlobalState for NoGlobalState {
    fn on_call(&mut self, call: &mut StateCall<'_>) -> Result<Option<Value>, DriverError> {
        Err(DriverError::Unsupported(call.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_handle_block_is_count_prefixed() {
        let mut block = 2u32.to_le_bytes().to_vec();
        block.extend_from_slice(&0x1111u64.to_le_bytes());
        block.extend_from_slice(&0x2222u64.to_le_bytes());
        block.extend_from_slice(&[0xaa; 3]);
        let (consumed, ids) = parse_created_handles(&block).unwrap();
        assert_eq!(consumed, 20);
        assert_eq!(ids, vec![0x1111, 0x2222]);
    }

    #[test]
    fn truncated_handle_block_is_rejected() {
        let mut block = 3u32.to_le_bytes().to_vec();
        block.extend_from_slice(&0x1111u64.to_le_bytes());
        assert!(matches!(
            parse_created_handles(&block),
            Err(DriverError::SnapshotBlock(_))
        ));
        assert!(parse_created_handles(&[1, 0]).is_err());
    }
}
