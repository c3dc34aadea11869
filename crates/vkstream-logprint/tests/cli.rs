#![cfg(not(target_arch = "wasm32"))]

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use vkstream_logprint::{encode_capture, Command, Header};

const OP_VK_DESTROY_INSTANCE: u32 = 20001;

fn destroy_instance(seqno: u32, instance: u64) -> Command {
    let mut data = seqno.to_le_bytes().to_vec();
    data.extend_from_slice(&instance.to_le_bytes());
    data.extend_from_slice(&[0u8; 8]);
    Command {
        opcode: OP_VK_DESTROY_INSTANCE,
        original_size: data.len() as u32 + 8,
        data,
    }
}

fn header(thread_id: u32, capture_id: u64) -> Header {
    let mut header = Header {
        version: 2,
        thread_id,
        capture_id,
        ..Header::default()
    };
    header.set_timestamp_ms(1_000);
    header
}

/// Two captures: one clean, one whose first command carries a stray byte.
fn write_dump(path: &Path) {
    let mut broken = destroy_instance(2, 0x20);
    broken.data.push(0xee);
    broken.original_size += 1;

    let mut dump = vec![0xaa; 13];
    dump.extend(encode_capture(&header(7, 70), &[destroy_instance(1, 0x10)]));
    dump.extend(encode_capture(
        &header(8, 80),
        &[broken, destroy_instance(3, 0x30)],
    ));
    fs::write(path, dump).unwrap();
}

fn stdout_of(args: &[&str], success: bool) -> String {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vkstream-logprint");
    cmd.args(args);
    let assert = if success {
        cmd.assert().success()
    } else {
        cmd.assert().failure()
    };
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn summary_lists_streams() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dump.bin");
    write_dump(&path);

    let out = stdout_of(&[path.to_str().unwrap(), "--summary"], true);
    assert_eq!(
        out,
        "Stream #0: pos=13, thread=7, capture=70, timestamp=1000, commands=1\n\
         Stream #1: pos=101, thread=8, capture=80, timestamp=1000, commands=2\n"
    );
}

#[test]
fn prints_selected_stream() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dump.bin");
    write_dump(&path);

    let out = stdout_of(&[path.to_str().unwrap(), "--stream", "0"], true);
    assert_eq!(
        out,
        "Stream #0: pos=13, thread=7, capture=70, timestamp=1000, commands=1\n\
         \n\
         0.0 - OP_vkDestroyInstance: (20 bytes)\n\
         \x20       seqno: 1\n\
         \x20       instance: 0x10 (16)\n\
         \x20       pAllocator: (null)\n"
    );
}

#[test]
fn decode_failure_stops_the_stream_unless_asked_to_keep_going() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dump.bin");
    write_dump(&path);

    let out = stdout_of(&[path.to_str().unwrap(), "--stream", "1"], false);
    assert!(out.contains("Error while processing OP_vkDestroyInstance: Not all data was decoded"));
    assert!(out.contains("Command raw data:"));
    assert!(!out.contains("1.1 - OP_vkDestroyInstance"));

    let out = stdout_of(
        &[path.to_str().unwrap(), "--stream", "1", "--keep-going"],
        true,
    );
    assert!(out.contains("1.1 - OP_vkDestroyInstance: (20 bytes)"));
    assert!(out.contains("        instance: 0x30 (48)\n"));
}

#[test]
fn missing_stream_index_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dump.bin");
    write_dump(&path);

    stdout_of(&[path.to_str().unwrap(), "--stream", "5"], false);
}

#[test]
fn unreadable_dump_is_an_error() {
    let dir = tempdir().unwrap();
    stdout_of(&[dir.path().join("missing.bin").to_str().unwrap()], false);
}
