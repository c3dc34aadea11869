mod common;

use common::{blank, blank_params, packet, payload, set, FakeDriver, FakeState, Recorder};
use pretty_assertions::assert_eq;
use vkstream_host::{
    BoxingError, Decoder, DecoderConfig, DecoderError, DecoderShared, StopReason,
};
use vkstream_protocol::schema::GRAPHICS_PIPELINE_CREATE_INFO;
use vkstream_protocol::{
    encode_packet, HandleKind, HandleType, Opcode, Record, Value, WireError, VK_WHOLE_SIZE,
};

const RAW_DEVICE: u64 = 0xd0;

fn decoder_with(state: FakeState) -> (Decoder<FakeDriver, FakeState>, u64) {
    let shared = DecoderShared::new();
    let driver = FakeDriver {
        lock: Some(shared.workaround_lock().clone()),
        ..FakeDriver::default()
    };
    let mut dec = Decoder::with_shared(driver, state, DecoderConfig::default(), shared);
    let device = dec
        .boxing_mut()
        .box_create(RAW_DEVICE, HandleType::Device)
        .unwrap();
    (dec, device)
}

fn decoder() -> (Decoder<FakeDriver, FakeState>, u64) {
    decoder_with(FakeState::default())
}

fn u64_at(out: &[u8], at: usize) -> u64 {
    u64::from_le_bytes(out[at..at + 8].try_into().unwrap())
}

fn i32_at(out: &[u8], at: usize) -> i32 {
    i32::from_le_bytes(out[at..at + 4].try_into().unwrap())
}

fn create_fence(device: u64) -> Vec<u8> {
    let mut params = blank_params(Opcode::CreateFence);
    set(&mut params, "device", Value::Handle(device));
    packet(Opcode::CreateFence, &params)
}

fn destroy_fence(device: u64, fence: u64) -> Vec<u8> {
    let mut params = blank_params(Opcode::DestroyFence);
    set(&mut params, "device", Value::Handle(device));
    set(&mut params, "fence", Value::Handle(fence));
    packet(Opcode::DestroyFence, &params)
}

fn range(memory: u64, offset: u64, size: u64) -> Value {
    Value::Struct(
        Record::new()
            .with("memory", Value::Handle(memory))
            .with("offset", Value::UInt(offset))
            .with("size", Value::UInt(size)),
    )
}

fn ranges_params(op: Opcode, device: u64, ranges: Vec<Value>) -> Record {
    let mut params = blank_params(op);
    set(&mut params, "device", Value::Handle(device));
    set(&mut params, "memoryRangeCount", Value::UInt(ranges.len() as u64));
    set(&mut params, "pMemoryRanges", Value::Array(ranges));
    params
}

#[test]
fn generic_create_autoboxes_and_destroy_unboxes() {
    let (mut dec, device) = decoder();
    let mut out = Vec::new();

    let buf = create_fence(device);
    let progress = dec.decode(&buf, &mut out).unwrap();
    assert!(matches!(progress.stop, StopReason::Drained));
    assert_eq!(progress.consumed, buf.len());
    assert_eq!(out.len(), 12);
    let fence = u64_at(&out, 0);
    assert_eq!(i32_at(&out, 8), 0);
    assert_ne!(fence, 0x1000);
    assert_eq!(dec.boxing().unwrap(fence), Ok(0x1000));

    let seen = &dec.driver().calls[0];
    assert_eq!(seen.dispatch, Some(RAW_DEVICE));
    assert_eq!(seen.args.get("device"), Some(&Value::Handle(RAW_DEVICE)));

    out.clear();
    dec.decode(&destroy_fence(device, fence), &mut out).unwrap();
    assert!(out.is_empty());
    assert_eq!(
        dec.driver().calls[1].args.get("fence"),
        Some(&Value::Handle(0x1000))
    );
    assert_eq!(dec.boxing().unwrap(fence), Err(BoxingError::UnknownHandle(fence)));
    assert_eq!(dec.boxing().len(), 1);
    assert!(dec.boxing().preserved().is_empty());
}

#[test]
fn failed_create_writes_back_unboxed() {
    let (mut dec, device) = decoder();
    dec.driver_mut().result = -3;
    let mut out = Vec::new();
    dec.decode(&create_fence(device), &mut out).unwrap();
    assert_eq!(u64_at(&out, 0), 0x1000);
    assert_eq!(i32_at(&out, 8), -3);
    assert_eq!(dec.boxing().len(), 1);
}

#[test]
fn every_created_array_element_is_boxed() {
    let (mut dec, device) = decoder();
    let mut params = blank_params(Opcode::CreateGraphicsPipelines);
    set(&mut params, "device", Value::Handle(device));
    set(&mut params, "createInfoCount", Value::UInt(2));
    let info = Value::Struct(blank(GRAPHICS_PIPELINE_CREATE_INFO.fields));
    set(&mut params, "pCreateInfos", Value::Array(vec![info.clone(), info]));
    set(
        &mut params,
        "pPipelines",
        Value::Array(vec![Value::Handle(0), Value::Handle(0)]),
    );

    let mut out = Vec::new();
    dec.decode(&packet(Opcode::CreateGraphicsPipelines, &params), &mut out)
        .unwrap();
    assert_eq!(out.len(), 8 + 8 + 4);
    let (a, b) = (u64_at(&out, 0), u64_at(&out, 8));
    assert_ne!(a, b);
    assert_eq!(dec.boxing().unwrap(a), Ok(0x1000));
    assert_eq!(dec.boxing().unwrap(b), Ok(0x1001));
    assert_eq!(dec.boxing().kind_of(a), Some(HandleKind::NonDispatchable));
}

#[test]
fn global_state_calls_keep_boxed_dispatch_and_skip_autoboxing() {
    let (mut dec, device) = decoder();
    let mut params = blank_params(Opcode::AllocateMemory);
    set(&mut params, "device", Value::Handle(device));
    let mut out = Vec::new();
    dec.decode(&packet(Opcode::AllocateMemory, &params), &mut out)
        .unwrap();

    let memory = u64_at(&out, 0);
    assert_eq!(dec.boxing().unwrap(memory), Ok(0x3000));
    assert_eq!(i32_at(&out, 8), 0);
    assert!(dec.driver().calls.is_empty());

    let (opcode, dispatch, args) = &dec.state().state_calls[0];
    assert_eq!(*opcode, Opcode::AllocateMemory);
    assert_eq!(*dispatch, Some(device));
    assert_eq!(args.get("device"), Some(&Value::Handle(device)));
}

#[test]
fn image_memory_requirements_go_through_global_state() {
    let (mut dec, device) = decoder();
    let image = dec
        .boxing_mut()
        .box_create(0x2000, HandleType::Image)
        .unwrap();
    let mut params = blank_params(Opcode::GetImageMemoryRequirements);
    set(&mut params, "device", Value::Handle(device));
    set(&mut params, "image", Value::Handle(image));
    let mut out = Vec::new();
    dec.decode(&packet(Opcode::GetImageMemoryRequirements, &params), &mut out)
        .unwrap();

    assert!(dec.driver().calls.is_empty());
    let (opcode, dispatch, args) = &dec.state().state_calls[0];
    assert_eq!(*opcode, Opcode::GetImageMemoryRequirements);
    assert_eq!(*dispatch, Some(device));
    assert_eq!(args.get("image"), Some(&Value::Handle(0x2000)));
    assert_eq!(out.len(), 8 + 8 + 4);
}

#[test]
fn flush_copies_guest_bytes_into_the_mapping() {
    let mut state = FakeState::default();
    state.mapped.insert(0x3000, vec![0; 12]);
    let (mut dec, device) = decoder_with(state);
    let memory = dec
        .boxing_mut()
        .box_create(0x3000, HandleType::DeviceMemory)
        .unwrap();

    let op = Opcode::FlushMappedMemoryRanges;
    let mut body = payload(op, &ranges_params(op, device, vec![range(memory, 4, 4)]));
    body.extend_from_slice(&4u64.to_le_bytes());
    body.extend_from_slice(&[1, 2, 3, 4]);

    let mut out = Vec::new();
    let progress = dec.decode(&encode_packet(op.as_u32(), &body), &mut out).unwrap();
    assert!(matches!(progress.stop, StopReason::Drained));
    assert_eq!(out, 0i32.to_le_bytes());
    assert_eq!(
        dec.state().mapped[&0x3000],
        vec![0, 0, 0, 0, 1, 2, 3, 4, 0, 0, 0, 0]
    );
    let seen = &dec.driver().calls[0].args;
    assert_eq!(
        seen.lookup("pMemoryRanges").and_then(Value::as_array).unwrap()[0]
            .as_record()
            .unwrap()
            .get("memory"),
        Some(&Value::Handle(0x3000))
    );
}

#[test]
fn flush_without_mapping_fails_only_when_bytes_follow() {
    let (mut dec, device) = decoder();
    let memory = dec
        .boxing_mut()
        .box_create(0x3000, HandleType::DeviceMemory)
        .unwrap();
    let op = Opcode::FlushMappedMemoryRanges;
    let params = ranges_params(op, device, vec![range(memory, 0, 4)]);

    let mut empty = payload(op, &params);
    empty.extend_from_slice(&0u64.to_le_bytes());
    let mut out = Vec::new();
    dec.decode(&encode_packet(op.as_u32(), &empty), &mut out)
        .unwrap();

    let mut full = payload(op, &params);
    full.extend_from_slice(&4u64.to_le_bytes());
    full.extend_from_slice(&[9; 4]);
    let err = dec
        .decode(&encode_packet(op.as_u32(), &full), &mut out)
        .unwrap_err();
    assert!(matches!(
        err,
        DecoderError::UnmappedMemory {
            memory: 0x3000,
            ..
        }
    ));
}

#[test]
fn direct_mapping_skips_range_payloads() {
    let mut state = FakeState::default();
    state.direct_mapping = true;
    state.mapped.insert(0x3000, vec![0; 4]);
    let (mut dec, device) = decoder_with(state);
    let memory = dec
        .boxing_mut()
        .box_create(0x3000, HandleType::DeviceMemory)
        .unwrap();
    let op = Opcode::InvalidateMappedMemoryRanges;
    let mut out = Vec::new();
    dec.decode(
        &packet(op, &ranges_params(op, device, vec![range(memory, 0, 4)])),
        &mut out,
    )
    .unwrap();
    assert_eq!(out, 0i32.to_le_bytes());
}

#[test]
fn invalidate_appends_host_bytes_after_the_result() {
    let mut state = FakeState::default();
    state.mapped.insert(0x3000, (0u8..16).collect());
    state.sizes.insert(0x3000, 16);
    let (mut dec, device) = decoder_with(state);
    let mapped = dec
        .boxing_mut()
        .box_create(0x3000, HandleType::DeviceMemory)
        .unwrap();
    let unmapped = dec
        .boxing_mut()
        .box_create(0x3001, HandleType::DeviceMemory)
        .unwrap();

    let op = Opcode::InvalidateMappedMemoryRanges;
    let params = ranges_params(
        op,
        device,
        vec![range(mapped, 0, VK_WHOLE_SIZE), range(unmapped, 0, 8)],
    );
    let mut out = Vec::new();
    dec.decode(&packet(op, &params), &mut out).unwrap();

    let mut expected = 0i32.to_le_bytes().to_vec();
    expected.extend_from_slice(&16u64.to_le_bytes());
    expected.extend(0u8..16);
    expected.extend_from_slice(&0u64.to_le_bytes());
    assert_eq!(out, expected);
}

#[test]
fn pipeline_layout_calls_hold_the_workaround_lock() {
    let (mut dec, device) = decoder();
    let mut params = blank_params(Opcode::CreatePipelineLayout);
    set(&mut params, "device", Value::Handle(device));
    let mut out = Vec::new();
    dec.decode(&packet(Opcode::CreatePipelineLayout, &params), &mut out)
        .unwrap();
    dec.decode(&create_fence(device), &mut out).unwrap();

    let calls = &dec.driver().calls;
    assert_eq!(calls[0].opcode, Opcode::CreatePipelineLayout);
    assert!(!calls[0].lock_free);
    assert!(calls[1].lock_free);
}

#[test]
fn truncated_packet_reports_bytes_before_it() {
    let (mut dec, device) = decoder();
    let first = create_fence(device);
    let second = create_fence(device);
    let mut buf = first.clone();
    buf.extend_from_slice(&second[..second.len() - 3]);

    let mut out = Vec::new();
    let progress = dec.decode(&buf, &mut out).unwrap();
    assert!(matches!(progress.stop, StopReason::NeedMoreData));
    assert_eq!(progress.consumed, first.len());
    assert_eq!(out.len(), 12);
    assert_eq!(dec.driver().calls.len(), 1);

    let progress = dec.decode(&second, &mut out).unwrap();
    assert!(matches!(progress.stop, StopReason::Drained));
    assert_eq!(out.len(), 24);
}

#[test]
fn short_header_needs_more_data() {
    let (mut dec, _) = decoder();
    let progress = dec.decode(&[1, 2, 3], &mut Vec::new()).unwrap();
    assert!(matches!(progress.stop, StopReason::NeedMoreData));
    assert_eq!(progress.consumed, 0);
}

#[test]
fn unknown_opcode_stops_before_the_packet() {
    let (mut dec, device) = decoder();
    let first = create_fence(device);
    let mut buf = first.clone();
    buf.extend(encode_packet(1, &[0; 4]));
    buf.extend(create_fence(device));

    let progress = dec.decode(&buf, &mut Vec::new()).unwrap();
    assert!(matches!(progress.stop, StopReason::UnknownOpcode { opcode: 1 }));
    assert_eq!(progress.consumed, first.len());
    assert_eq!(dec.driver().calls.len(), 1);
}

#[test]
fn header_length_below_eight_is_a_protocol_stop() {
    let (mut dec, _) = decoder();
    let mut buf = Opcode::DeviceWaitIdle.as_u32().to_le_bytes().to_vec();
    buf.extend_from_slice(&4i32.to_le_bytes());
    buf.extend_from_slice(&[0; 8]);
    let progress = dec.decode(&buf, &mut Vec::new()).unwrap();
    assert!(matches!(progress.stop, StopReason::MalformedPacket(_)));
    assert_eq!(progress.consumed, 0);
}

#[test]
fn structure_type_mismatch_stops_without_dispatch() {
    let (mut dec, device) = decoder();
    let mut params = blank_params(Opcode::CreateFence);
    set(&mut params, "device", Value::Handle(device));
    let mut body = payload(Opcode::CreateFence, &params);
    body[8..12].copy_from_slice(&99u32.to_le_bytes());

    let mut out = Vec::new();
    let progress = dec
        .decode(&encode_packet(Opcode::CreateFence.as_u32(), &body), &mut out)
        .unwrap();
    match progress.stop {
        StopReason::Protocol { call, error } => {
            assert_eq!(call, "vkCreateFence");
            assert!(matches!(
                error,
                WireError::StructureTypeMismatch {
                    expected: 8,
                    found: 99,
                    ..
                }
            ));
        }
        other => panic!("unexpected stop {other:?}"),
    }
    assert_eq!(progress.consumed, 0);
    assert!(out.is_empty());
    assert!(dec.driver().calls.is_empty());
}

#[test]
fn destroy_cut_short_keeps_the_handle_live() {
    let (mut dec, device) = decoder();
    let mut out = Vec::new();
    dec.decode(&create_fence(device), &mut out).unwrap();
    let fence = u64_at(&out, 0);

    // Framed correctly, but the pAllocator sentinel is missing.
    let mut params = blank_params(Opcode::DestroyFence);
    set(&mut params, "device", Value::Handle(device));
    set(&mut params, "fence", Value::Handle(fence));
    let mut body = payload(Opcode::DestroyFence, &params);
    body.truncate(body.len() - 8);

    out.clear();
    let progress = dec
        .decode(&encode_packet(Opcode::DestroyFence.as_u32(), &body), &mut out)
        .unwrap();
    match progress.stop {
        StopReason::Protocol { call, error } => {
            assert_eq!(call, "vkDestroyFence");
            assert!(matches!(error, WireError::UnexpectedEof { .. }));
        }
        other => panic!("unexpected stop {other:?}"),
    }
    assert_eq!(progress.consumed, 0);
    assert!(out.is_empty());
    assert_eq!(dec.driver().calls.len(), 1);
    assert_eq!(dec.boxing().unwrap(fence), Ok(0x1000));
    assert!(dec.boxing().pending_destroys().is_empty());
    assert!(dec.boxing().preserved().is_empty());

    dec.decode(&destroy_fence(device, fence), &mut out).unwrap();
    assert_eq!(dec.driver().calls[1].opcode, Opcode::DestroyFence);
    assert_eq!(dec.boxing().unwrap(fence), Err(BoxingError::UnknownHandle(fence)));
}

#[test]
fn unknown_handles_are_invariant_violations() {
    let (mut dec, device) = decoder();
    let err = dec
        .decode(&create_fence(0x1234), &mut Vec::new())
        .unwrap_err();
    assert!(matches!(
        err,
        DecoderError::Boxing(BoxingError::UnknownHandle(0x1234))
    ));

    let err = dec
        .decode(&destroy_fence(device, 0x5678), &mut Vec::new())
        .unwrap_err();
    assert!(matches!(
        err,
        DecoderError::Boxing(BoxingError::UnknownHandle(0x5678))
    ));
}

#[test]
fn snapshot_sees_guest_ids_for_created_and_destroyed_handles() {
    let state = FakeState {
        recorder: Some(Recorder::default()),
        ..FakeState::default()
    };
    let (mut dec, device) = decoder_with(state);
    let mut out = Vec::new();

    let create = create_fence(device);
    dec.decode(&create, &mut out).unwrap();
    let fence = u64_at(&out, 0);
    let destroy = destroy_fence(device, fence);
    dec.decode(&destroy, &mut out).unwrap();

    let recorded = &dec.state().recorder.as_ref().unwrap().calls;
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].name, "vkCreateFence");
    assert_eq!(recorded[0].trace, &create[8..]);
    assert_eq!(recorded[0].params.get("device"), Some(&Value::Handle(device)));
    assert_eq!(recorded[0].params.get("pFence"), Some(&Value::Handle(fence)));
    assert_eq!(recorded[0].ret, Some(Value::SInt(0)));

    assert_eq!(recorded[1].trace, &destroy[8..]);
    assert_eq!(recorded[1].params.get("fence"), Some(&Value::Handle(fence)));
    assert_eq!(recorded[1].ret, None);
    assert!(dec.boxing().preserved().is_empty());
}

#[test]
fn snapshot_load_reuses_recorded_ids() {
    let (mut dec, device) = decoder();
    let restored = 5u64 | 7u64 << 32 | u64::from(HandleType::Fence.tag()) << 48;
    let mut buf = 1u32.to_le_bytes().to_vec();
    buf.extend_from_slice(&restored.to_le_bytes());
    buf.extend(create_fence(device));

    dec.set_for_snapshot_load(true);
    let mut out = Vec::new();
    let progress = dec.decode(&buf, &mut out).unwrap();
    assert_eq!(progress.consumed, buf.len());
    assert_eq!(u64_at(&out, 0), restored);
    assert_eq!(dec.state().cleared_snapshot_handles, 1);
    assert_eq!(dec.boxing().pending_reservations(), 0);

    out.clear();
    dec.decode(&create_fence(device), &mut out).unwrap();
    assert_ne!(u64_at(&out, 0), restored);
    assert_eq!(dec.state().cleared_snapshot_handles, 1);
}

#[test]
fn config_flag_arms_snapshot_load() {
    let shared = DecoderShared::new();
    let config = DecoderConfig {
        for_snapshot_load: true,
        ..DecoderConfig::default()
    };
    let mut dec = Decoder::with_shared(FakeDriver::default(), FakeState::default(), config, shared);

    // Shorter than a header: nothing is read, the handle block included.
    let progress = dec.decode(&0u32.to_le_bytes(), &mut Vec::new()).unwrap();
    assert!(matches!(progress.stop, StopReason::NeedMoreData));
    assert_eq!(progress.consumed, 0);
    assert_eq!(dec.state().cleared_snapshot_handles, 0);

    let mut buf = 0u32.to_le_bytes().to_vec();
    buf.extend_from_slice(&[0; 4]);
    let progress = dec.decode(&buf, &mut Vec::new()).unwrap();
    assert!(matches!(progress.stop, StopReason::NeedMoreData));
    assert_eq!(progress.consumed, 4);
    assert_eq!(dec.state().cleared_snapshot_handles, 1);
}

#[test]
fn bad_handle_block_keeps_snapshot_load_armed() {
    let (mut dec, device) = decoder();
    dec.set_for_snapshot_load(true);

    // Declares two handles but carries one.
    let restored = 3u64 | u64::from(HandleType::Fence.tag()) << 48;
    let mut short = 2u32.to_le_bytes().to_vec();
    short.extend_from_slice(&restored.to_le_bytes());
    let err = dec.decode(&short, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, DecoderError::SnapshotLoad(_)));
    assert!(dec.driver().calls.is_empty());

    let mut buf = 1u32.to_le_bytes().to_vec();
    buf.extend_from_slice(&restored.to_le_bytes());
    buf.extend(create_fence(device));
    let mut out = Vec::new();
    let progress = dec.decode(&buf, &mut out).unwrap();
    assert_eq!(progress.consumed, buf.len());
    assert_eq!(u64_at(&out, 0), restored);
}

#[test]
fn call_logging_does_not_change_results() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let shared = DecoderShared::new();
    let config = DecoderConfig {
        log_calls: true,
        ..DecoderConfig::default()
    };
    let mut dec = Decoder::with_shared(FakeDriver::default(), FakeState::default(), config, shared);
    let device = dec
        .boxing_mut()
        .box_create(RAW_DEVICE, HandleType::Device)
        .unwrap();
    let mut out = Vec::new();
    dec.decode(&create_fence(device), &mut out).unwrap();
    assert_eq!(out.len(), 12);
}

#[test]
fn decoders_sharing_state_get_distinct_ids() {
    let shared = DecoderShared::new();
    let a = Decoder::with_shared(
        FakeDriver::default(),
        FakeState::default(),
        DecoderConfig::default(),
        shared.clone(),
    );
    let b = Decoder::with_shared(
        FakeDriver::default(),
        FakeState::default(),
        DecoderConfig::default(),
        shared,
    );
    assert_ne!(a.id(), b.id());
}
