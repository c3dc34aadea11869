//! Offline inspection of command streams captured in crash dumps.

pub mod capture;
pub mod printer;

pub use capture::{
    encode_capture, find_signatures, parse_stream, process_dump, CaptureError, Command, Header,
    Stream, CAPTURE_HEADER_SIZE, SIGNATURE,
};
pub use printer::{CommandPrinter, PrintError};
