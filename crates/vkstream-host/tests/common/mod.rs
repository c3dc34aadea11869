#![allow(dead_code)]

use std::collections::HashMap;

use vkstream_host::{
    Driver, DriverCall, DriverError, DriverWorkaroundLock, GlobalState, SnapshotCall,
    SnapshotRecorder, StateCall,
};
use vkstream_protocol::{
    encode_packet, Count, FieldSpec, FieldType, Opcode, Record, Value, WireWriter,
};

fn blank_element(spec: &FieldSpec) -> Value {
    match spec.ty {
        FieldType::Int(int) if int.signed => Value::SInt(0),
        FieldType::Int(_) => Value::UInt(0),
        FieldType::Float32 => Value::Float(0.0),
        FieldType::Enum(_) => Value::Enum(0),
        FieldType::Flags(_) => Value::Flags(0),
        FieldType::Handle(_) => Value::Handle(0),
        FieldType::Str(_) => Value::Str(String::new()),
        FieldType::Struct(schema) => Value::Struct(blank(schema.fields)),
    }
}

/// A record with every field zeroed, optional pointers null and counted arrays empty.
pub fn blank(fields: &[FieldSpec]) -> Record {
    let mut record = Record::new();
    for spec in fields {
        let value = if spec.optional {
            Value::Absent
        } else {
            match spec.count {
                Count::One => blank_element(spec),
                Count::Fixed(n) => Value::Array((0..n).map(|_| blank_element(spec)).collect()),
                Count::Field { .. } => Value::Array(Vec::new()),
            }
        };
        record.push(spec.name, value);
    }
    record
}

pub fn blank_params(op: Opcode) -> Record {
    let fields: Vec<FieldSpec> = op.descriptor().params.iter().map(|p| p.field).collect();
    blank(&fields)
}

pub fn set(record: &mut Record, path: &str, value: Value) {
    let mut parts = path.split('.').peekable();
    let mut current = record;
    while let Some(part) = parts.next() {
        let slot = current.get_mut(part).unwrap_or_else(|| panic!("no field {part}"));
        if parts.peek().is_none() {
            *slot = value;
            return;
        }
        current = match slot {
            Value::Struct(inner) => inner,
            other => panic!("{part} is not a struct: {other:?}"),
        };
    }
}

pub fn payload(op: Opcode, params: &Record) -> Vec<u8> {
    let mut w = WireWriter::new();
    op.descriptor().encode_params(&mut w, params).unwrap();
    w.into_inner()
}

pub fn packet(op: Opcode, params: &Record) -> Vec<u8> {
    encode_packet(op.as_u32(), &payload(op, params))
}

#[derive(Debug, Clone)]
pub struct SeenCall {
    pub opcode: Opcode,
    pub dispatch: Option<u64>,
    pub args: Record,
    pub lock_free: bool,
}

/// Hands out raw handles `0x1000, 0x1001, ...` for every created object.
#[derive(Default)]
pub struct FakeDriver {
    pub calls: Vec<SeenCall>,
    pub next_raw: u64,
    pub result: i32,
    pub lock: Option<DriverWorkaroundLock>,
}

impl FakeDriver {
    fn raw(&mut self) -> u64 {
        self.next_raw += 1;
        0x1000 + self.next_raw - 1
    }
}

impl Driver for FakeDriver {
    fn call(&mut self, call: &mut DriverCall) -> Result<Option<Value>, DriverError> {
        let lock_free = self
            .lock
            .as_ref()
            .map_or(true, |lock| lock.try_lock().is_some());
        match call.opcode {
            Opcode::CreateFence => {
                let raw = self.raw();
                set(&mut call.args, "pFence", Value::Handle(raw));
            }
            Opcode::CreatePipelineLayout => {
                let raw = self.raw();
                set(&mut call.args, "pPipelineLayout", Value::Handle(raw));
            }
            Opcode::CreateGraphicsPipelines => {
                let count = call.args.get("createInfoCount").and_then(Value::as_u64).unwrap();
                let pipelines = (0..count).map(|_| Value::Handle(self.raw())).collect();
                set(&mut call.args, "pPipelines", Value::Array(pipelines));
            }
            _ => {}
        }
        self.calls.push(SeenCall {
            opcode: call.opcode,
            dispatch: call.dispatch,
            args: call.args.clone(),
            lock_free,
        });
        Ok(call
            .opcode
            .descriptor()
            .ret
            .map(|_| Value::SInt(i64::from(self.result))))
    }
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub name: &'static str,
    pub trace: Vec<u8>,
    pub params: Record,
    pub ret: Option<Value>,
}

#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Recorded>,
}

impl SnapshotRecorder for Recorder {
    fn record(&mut self, call: SnapshotCall<'_>) {
        self.calls.push(Recorded {
            name: call.name,
            trace: call.trace.to_vec(),
            params: call.params.clone(),
            ret: call.ret.cloned(),
        });
    }
}

#[derive(Default)]
pub struct FakeState {
    pub mapped: HashMap<u64, Vec<u8>>,
    pub sizes: HashMap<u64, u64>,
    pub direct_mapping: bool,
    pub recorder: Option<Recorder>,
    pub state_calls: Vec<(Opcode, Option<u64>, Record)>,
    pub cleared_snapshot_handles: usize,
}

impl GlobalState for FakeState {
    fn on_call(&mut self, call: &mut StateCall<'_>) -> Result<Option<Value>, DriverError> {
        if call.opcode == Opcode::AllocateMemory {
            let boxed = call
                .boxing
                .box_create(0x3000, vkstream_protocol::HandleType::DeviceMemory)
                .map_err(|err| DriverError::Failed {
                    call: call.name,
                    message: err.to_string(),
                })?;
            set(&mut call.args, "pMemory", Value::Handle(boxed));
        }
        self.state_calls.push((
            call.opcode,
            call.dispatch.map(|d| d.boxed),
            call.args.clone(),
        ));
        Ok(call.opcode.descriptor().ret.map(|_| Value::SInt(0)))
    }

    fn uses_direct_mapping(&self) -> bool {
        self.direct_mapping
    }

    fn mapped_memory(&mut self, memory: u64) -> Option<&mut [u8]> {
        self.mapped.get_mut(&memory).map(Vec::as_mut_slice)
    }

    fn device_memory_size(&self, memory: u64) -> u64 {
        self.sizes.get(&memory).copied().unwrap_or(0)
    }

    fn snapshot(&mut self) -> Option<&mut dyn SnapshotRecorder> {
        self.recorder
            .as_mut()
            .map(|recorder| recorder as &mut dyn SnapshotRecorder)
    }

    fn clear_created_handles(&mut self) {
        self.cleared_snapshot_handles += 1;
    }
}
