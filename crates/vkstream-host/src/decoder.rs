//! Host-side execution of the guest call stream.
//!
//! [`Decoder::decode`] frames packets, reads each call's parameters through the boxing table,
//! dispatches to the driver (or the global state), writes outputs and the result code back to the
//! guest and finally lets the snapshot recorder see the call.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, TryLockError};

use thiserror::Error;
use tracing::{debug, error, info, trace, trace_span, warn};
use vkstream_protocol::codec::{decode_field, encode_field};
use vkstream_protocol::packet::frame_at;
use vkstream_protocol::{
    CallDescriptor, CallFlags, DecodeRoute, FrameError, HandleMapping, HandleType, Record, Value,
    WireError, WireReader, WireWriter, HEADER_SIZE, VK_SUCCESS, VK_WHOLE_SIZE,
};

use crate::boxing::{BoxedHandleTable, BoxingError, BoxingMapper};
use crate::collab::{
    DispatchHandle, Driver, DriverCall, DriverError, GlobalState, SnapshotCall, StateCall,
};
use crate::config::DecoderConfig;
use crate::pool::ScratchPool;

/// Serializes driver calls that are unsafe to run concurrently on some drivers.
#[derive(Debug, Clone, Default)]
pub struct DriverWorkaroundLock(Arc<Mutex<()>>);

impl DriverWorkaroundLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// `None` while another holder has the lock.
    pub fn try_lock(&self) -> Option<MutexGuard<'_, ()>> {
        match self.0.try_lock() {
            Ok(guard) => Some(guard),
            Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => None,
        }
    }
}

/// State shared by every decoder built from it.
#[derive(Debug, Clone, Default)]
pub struct DecoderShared {
    workaround_lock: DriverWorkaroundLock,
    next_id: Arc<AtomicU64>,
}

impl DecoderShared {
    pub fn new() -> Self {
        Self::default()
    }

    /// The instance shared by every decoder of this process.
    pub fn process() -> Self {
        static SHARED: OnceLock<DecoderShared> = OnceLock::new();
        SHARED.get_or_init(DecoderShared::new).clone()
    }

    pub fn workaround_lock(&self) -> &DriverWorkaroundLock {
        &self.workaround_lock
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

/// Why [`Decoder::decode`] returned.
#[derive(Debug)]
pub enum StopReason {
    /// Every byte of the buffer was consumed.
    Drained,
    /// The next header or packet is incomplete; resend it with more data.
    NeedMoreData,
    UnknownOpcode { opcode: u32 },
    /// A packet header declares a length shorter than the header.
    MalformedPacket(FrameError),
    /// A call's parameters could not be read.
    Protocol {
        call: &'static str,
        error: WireError,
    },
}

#[derive(Debug)]
pub struct DecodeProgress {
    /// Bytes fully processed. Never includes any part of the packet that stopped decoding.
    pub consumed: usize,
    pub stop: StopReason,
}

/// Failures that leave the decoder or the guest stream unusable.
#[derive(Debug, Error)]
pub enum DecoderError {
    #[error(transparent)]
    Boxing(#[from] BoxingError),

    #[error("{call} references device memory {memory:#x}, which has no host mapping")]
    UnmappedMemory { call: &'static str, memory: u64 },

    #[error("{call}: range {offset:#x}+{size:#x} exceeds the {mapped:#x}-byte mapping of memory {memory:#x}")]
    MappedRangeOutOfBounds {
        call: &'static str,
        memory: u64,
        offset: u64,
        size: u64,
        mapped: usize,
    },

    #[error("{call} failed")]
    Driver {
        call: &'static str,
        #[source]
        source: DriverError,
    },

    #[error("{call} returned no result code")]
    MissingReturn { call: &'static str },

    #[error("writing back {call} failed; the guest stream is corrupted")]
    Writeback {
        call: &'static str,
        #[source]
        source: WireError,
    },

    #[error("scratch pool exhausted while decoding {call}")]
    ScratchExhausted { call: &'static str },

    #[error("failed to load snapshot handles")]
    SnapshotLoad(#[source] DriverError),

    #[error("failed to write to the guest")]
    Io(#[from] std::io::Error),
}

enum PacketError {
    Protocol(WireError),
    Fatal(DecoderError),
}

impl PacketError {
    /// Boxing failures surface as mapper errors inside [`WireError`]; they are invariant
    /// violations, not malformed input.
    fn from_read(err: WireError) -> Self {
        match err {
            WireError::HandleMapping {
                field,
                handle,
                source,
            } => match source.downcast::<BoxingError>() {
                Ok(boxing) => PacketError::Fatal(DecoderError::Boxing(*boxing)),
                Err(source) => PacketError::Protocol(WireError::HandleMapping {
                    field,
                    handle,
                    source,
                }),
            },
            other => PacketError::Protocol(other),
        }
    }
}

impl From<DecoderError> for PacketError {
    fn from(err: DecoderError) -> Self {
        PacketError::Fatal(err)
    }
}

impl From<BoxingError> for PacketError {
    fn from(err: BoxingError) -> Self {
        PacketError::Fatal(err.into())
    }
}

fn dispatch_handle(
    boxing: &BoxedHandleTable,
    ty: HandleType,
    field: &'static str,
    value: &Value,
) -> Result<DispatchHandle, PacketError> {
    let Value::Handle(boxed) = *value else {
        return Err(PacketError::Protocol(WireError::ValueMismatch { field }));
    };
    Ok(DispatchHandle {
        ty,
        boxed,
        raw: boxing.unwrap(boxed)?,
    })
}

fn result_code(value: &Value) -> Option<i64> {
    match *value {
        Value::SInt(v) => Some(v),
        Value::UInt(v) => Some(v as i64),
        Value::Enum(v) => Some(i64::from(v as i32)),
        _ => None,
    }
}

struct MappedRange {
    memory: u64,
    offset: u64,
    size: u64,
}

fn mapped_ranges(args: &Record) -> Result<Vec<MappedRange>, PacketError> {
    let mismatch = || {
        PacketError::Protocol(WireError::ValueMismatch {
            field: "pMemoryRanges",
        })
    };
    let ranges = args
        .get("pMemoryRanges")
        .and_then(Value::as_array)
        .ok_or_else(mismatch)?;
    ranges
        .iter()
        .map(|range| {
            let range = range.as_record().ok_or_else(mismatch)?;
            let field = |name| range.get(name).and_then(Value::as_u64).ok_or_else(mismatch);
            Ok(MappedRange {
                memory: field("memory")?,
                offset: field("offset")?,
                size: field("size")?,
            })
        })
        .collect()
}

fn host_range(
    call: &'static str,
    memory: u64,
    offset: u64,
    size: u64,
    mapped: usize,
) -> Result<std::ops::Range<usize>, DecoderError> {
    let out_of_bounds = || DecoderError::MappedRangeOutOfBounds {
        call,
        memory,
        offset,
        size,
        mapped,
    };
    let start = usize::try_from(offset).map_err(|_| out_of_bounds())?;
    let len = usize::try_from(size).map_err(|_| out_of_bounds())?;
    let end = start.checked_add(len).ok_or_else(out_of_bounds)?;
    if end > mapped {
        return Err(out_of_bounds());
    }
    Ok(start..end)
}

/// Decodes and executes one guest connection's call stream.
pub struct Decoder<D, S> {
    id: u64,
    driver: D,
    state: S,
    boxing: BoxedHandleTable,
    pool: ScratchPool,
    writer: WireWriter,
    config: DecoderConfig,
    shared: DecoderShared,
    snapshot_load_pending: bool,
}

impl<D: Driver, S: GlobalState> Decoder<D, S> {
    pub fn new(driver: D, state: S, config: DecoderConfig) -> Self {
        Self::with_shared(driver, state, config, DecoderShared::process())
    }

    pub fn with_shared(driver: D, state: S, config: DecoderConfig, shared: DecoderShared) -> Self {
        Self {
            id: shared.next_id(),
            driver,
            state,
            boxing: BoxedHandleTable::new(),
            pool: ScratchPool::new(),
            writer: WireWriter::new(),
            config,
            shared,
            snapshot_load_pending: config.for_snapshot_load,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// The next [`Decoder::decode`] starts with a created-handle block.
    pub fn set_for_snapshot_load(&mut self, for_snapshot_load: bool) {
        self.snapshot_load_pending = for_snapshot_load;
    }

    pub fn boxing(&self) -> &BoxedHandleTable {
        &self.boxing
    }

    pub fn boxing_mut(&mut self) -> &mut BoxedHandleTable {
        &mut self.boxing
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Executes every complete packet in `buf`, writing each call's results to `out`.
    ///
    /// Decoding stops at the first packet that cannot be executed; `consumed` tells the caller
    /// where to resume.
    pub fn decode<W: Write + ?Sized>(
        &mut self,
        buf: &[u8],
        out: &mut W,
    ) -> Result<DecodeProgress, DecoderError> {
        // Nothing is read from a buffer shorter than one header, not even the handle block.
        if buf.len() < HEADER_SIZE || !self.snapshot_load_pending {
            return self.decode_packets(buf, 0, out);
        }

        let (consumed, ids) = match self.state.load_created_handles(buf) {
            Ok(block) => block,
            Err(err) => {
                // Stays armed for the next buffer.
                self.state.clear_created_handles();
                return Err(DecoderError::SnapshotLoad(err));
            }
        };
        self.snapshot_load_pending = false;
        debug!(decoder = self.id, handles = ids.len(), consumed, "loading snapshot handles");
        self.boxing.reserve_for_snapshot_load(ids);
        let result = self.decode_packets(buf, consumed.min(buf.len()), out);
        self.state.clear_created_handles();
        self.boxing.clear_snapshot_load_reservations();
        result
    }

    fn decode_packets<W: Write + ?Sized>(
        &mut self,
        buf: &[u8],
        start: usize,
        out: &mut W,
    ) -> Result<DecodeProgress, DecoderError> {
        let mut offset = start;
        let stop = loop {
            let rest = &buf[offset..];
            if rest.is_empty() {
                break StopReason::Drained;
            }
            let packet = match frame_at(rest, offset) {
                Ok(packet) => packet,
                Err(err) if err.is_incomplete() => {
                    trace!(decoder = self.id, %err, "waiting for more data");
                    break StopReason::NeedMoreData;
                }
                Err(err) => {
                    warn!(decoder = self.id, %err, "malformed packet header");
                    break StopReason::MalformedPacket(err);
                }
            };
            let Some(desc) = packet.descriptor() else {
                warn!(decoder = self.id, opcode = packet.opcode, offset, "unknown opcode");
                break StopReason::UnknownOpcode {
                    opcode: packet.opcode,
                };
            };

            match self.run_packet(desc, packet.payload, out) {
                Ok(()) => offset += packet.length,
                Err(PacketError::Protocol(error)) => {
                    warn!(decoder = self.id, call = desc.name, %error, "protocol error");
                    break StopReason::Protocol {
                        call: desc.name,
                        error,
                    };
                }
                Err(PacketError::Fatal(err)) => {
                    error!(decoder = self.id, call = desc.name, %err, "decoder failure");
                    return Err(err);
                }
            }
        };
        Ok(DecodeProgress {
            consumed: offset,
            stop,
        })
    }

    fn run_packet<W: Write + ?Sized>(
        &mut self,
        desc: &'static CallDescriptor,
        payload: &[u8],
        out: &mut W,
    ) -> Result<(), PacketError> {
        let span = trace_span!("decode", call = desc.name);
        let _enter = span.enter();

        self.pool.reset();
        let result = self.process_packet(desc, payload, out);
        self.boxing.discard_pending_destroys();
        self.boxing.release_preserved();
        self.pool.reset();
        if result.is_err() {
            self.writer.clear();
        }
        result
    }

    fn process_packet<W: Write + ?Sized>(
        &mut self,
        desc: &'static CallDescriptor,
        payload: &[u8],
        out: &mut W,
    ) -> Result<(), PacketError> {
        let call = desc.name;
        let mut r = WireReader::new(payload);

        // Parameters.
        let dispatch_ty = desc.dispatch_param().map(|(_, ty)| ty);
        let mut dispatch = None;
        let mut args = Record::new();
        for (i, param) in desc.params.iter().enumerate() {
            let is_dispatch = i == 0 && dispatch_ty.is_some();
            let mapping = if is_dispatch || param.output {
                HandleMapping::Disabled
            } else if param.destroys {
                HandleMapping::PreserveForTrace
            } else {
                HandleMapping::Normal
            };
            let value = decode_field(
                &mut r,
                &param.field,
                &args,
                &mut BoxingMapper::new(&mut self.boxing),
                mapping,
            )
            .map_err(PacketError::from_read)?;
            if let (true, Some(ty)) = (is_dispatch, dispatch_ty) {
                dispatch = Some(dispatch_handle(&self.boxing, ty, param.name(), &value)?);
            }
            args.push(param.name(), value);
        }

        let direct_mapping = self.state.uses_direct_mapping();
        if desc.route == DecodeRoute::FlushMappedRanges && !direct_mapping {
            for range in mapped_ranges(&args)? {
                let count = r.read_u64().map_err(PacketError::Protocol)?;
                let Some(host) = self.state.mapped_memory(range.memory) else {
                    if count > 0 {
                        return Err(DecoderError::UnmappedMemory {
                            call,
                            memory: range.memory,
                        }
                        .into());
                    }
                    continue;
                };
                let span = host_range(call, range.memory, range.offset, count, host.len())?;
                let bytes = r.read_bytes(span.len()).map_err(PacketError::Protocol)?;
                host[span].copy_from_slice(bytes);
            }
        }
        let trace = r.consumed_since(0);
        if !r.is_empty() {
            debug!(call, trailing = r.remaining(), "ignoring trailing payload bytes");
        }
        // The call is fully read; only now do destroyed handles leave the table.
        self.boxing.commit_destroys()?;

        self.state.transform_to_host(desc, &mut args);
        if self.config.log_calls {
            info!(decoder = self.id, call, params = %args, "call");
        }

        // Dispatch.
        let ret = {
            let lock = self.shared.workaround_lock.clone();
            let _guard = desc
                .flags
                .contains(CallFlags::DRIVER_WORKAROUND_LOCK)
                .then(|| lock.lock());
            let result = if desc.route == DecodeRoute::GlobalState {
                let mut state_call = StateCall {
                    opcode: desc.opcode,
                    name: call,
                    dispatch,
                    args,
                    boxing: &mut self.boxing,
                    pool: &mut self.pool,
                };
                let ret = self.state.on_call(&mut state_call);
                args = state_call.args;
                ret
            } else {
                if let (Some(handle), Some(first)) = (dispatch, args.fields.first_mut()) {
                    first.value = Value::Handle(handle.raw);
                }
                let mut driver_call = DriverCall {
                    opcode: desc.opcode,
                    name: call,
                    dispatch: dispatch.map(|handle| handle.raw),
                    args,
                };
                let ret = self.driver.call(&mut driver_call);
                args = driver_call.args;
                ret
            };
            result.map_err(|source| DecoderError::Driver { call, source })?
        };

        // Writeback.
        let succeeded = ret
            .as_ref()
            .map_or(true, |v| result_code(v) == Some(i64::from(VK_SUCCESS)));
        let autobox = desc.route != DecodeRoute::GlobalState && succeeded;
        for (i, param) in desc.outputs() {
            let Some(slot) = args.fields.get_mut(i) else {
                continue;
            };
            let mut value = std::mem::replace(&mut slot.value, Value::Absent);
            self.state.transform_from_host(desc, param, &mut value);
            if autobox && param.creates_non_dispatchable() {
                if let Some(ty) = param.field.handle_type() {
                    let boxing = &mut self.boxing;
                    let mut failure = None;
                    value.for_each_handle_mut(&mut |handle| {
                        if *handle == 0 || failure.is_some() {
                            return;
                        }
                        match boxing.box_create(*handle, ty) {
                            Ok(boxed) => *handle = boxed,
                            Err(err) => failure = Some(err),
                        }
                    });
                    if let Some(err) = failure {
                        return Err(err.into());
                    }
                }
            }
            encode_field(&mut self.writer, &param.field, &value, &args)
                .map_err(|source| DecoderError::Writeback { call, source })?;
            args.fields[i].value = value;
        }

        if let Some(spec) = desc.ret {
            let value = ret.as_ref().ok_or(DecoderError::MissingReturn { call })?;
            let code = result_code(value).ok_or(DecoderError::Writeback {
                call,
                source: WireError::ValueMismatch { field: "return" },
            })?;
            if spec.signed {
                self.writer.write_sint(spec, code);
            } else {
                self.writer.write_uint(spec, code as u64);
            }
        }

        if desc.route == DecodeRoute::InvalidateMappedRanges && !direct_mapping {
            for range in mapped_ranges(&args)? {
                let size = if range.size == VK_WHOLE_SIZE {
                    self.state.device_memory_size(range.memory)
                } else {
                    range.size
                };
                let Some(host) = self.state.mapped_memory(range.memory) else {
                    self.writer.write_u64(0);
                    continue;
                };
                let span = host_range(call, range.memory, range.offset, size, host.len())?;
                let staged = self
                    .pool
                    .stage(&host[span])
                    .ok_or(DecoderError::ScratchExhausted { call })?;
                self.writer.write_u64(size);
                self.writer.write_bytes(self.pool.get(staged));
            }
        }

        let written = self.writer.commit(out).map_err(DecoderError::Io)?;
        trace!(call, written, "committed");

        // Snapshot.
        if let Some(recorder) = self.state.snapshot() {
            if let (Some(handle), Some(first)) = (dispatch, args.fields.first_mut()) {
                first.value = Value::Handle(handle.boxed);
            }
            let mut preserved = self.boxing.preserved().iter().copied();
            for (param, field) in desc.params.iter().zip(args.fields.iter_mut()) {
                if !param.destroys {
                    continue;
                }
                field.value.for_each_handle_mut(&mut |handle| {
                    if *handle != 0 {
                        if let Some(boxed) = preserved.next() {
                            *handle = boxed;
                        }
                    }
                });
            }
            recorder.record(SnapshotCall {
                opcode: desc.opcode,
                name: call,
                trace,
                params: &args,
                ret: ret.as_ref(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_handle_resolves_boxed_ids() {
        let mut table = BoxedHandleTable::new();
        let device = table.box_create(0xd0, HandleType::Device).unwrap();
        let handle =
            match dispatch_handle(&table, HandleType::Device, "device", &Value::Handle(device)) {
                Ok(handle) => handle,
                Err(_) => panic!("live device did not resolve"),
            };
        assert_eq!(handle.boxed, device);
        assert_eq!(handle.raw, 0xd0);
        assert_eq!(handle.ty, HandleType::Device);
    }

    #[test]
    fn non_handle_dispatch_values_are_protocol_errors() {
        let table = BoxedHandleTable::new();
        for value in [Value::Absent, Value::UInt(0x10)] {
            assert!(matches!(
                dispatch_handle(&table, HandleType::Device, "device", &value),
                Err(PacketError::Protocol(WireError::ValueMismatch { field: "device" }))
            ));
        }
        assert!(matches!(
            dispatch_handle(&table, HandleType::Device, "device", &Value::Handle(0x77)),
            Err(PacketError::Fatal(DecoderError::Boxing(
                BoxingError::UnknownHandle(0x77)
            )))
        ));
    }
}
