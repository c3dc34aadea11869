//! Wire format of the guest graphics-call stream.
//!
//! Packets are framed by [`packet`], their parameters are described by the static
//! [`descriptor`] table and read or written by the type-driven [`codec`]. Both the host decoder
//! and the offline capture printer build on this crate.

pub mod codec;
pub mod descriptor;
pub mod error;
pub mod names;
pub mod opcode;
pub mod packet;
pub mod schema;
pub mod stream;
pub mod types;

pub use descriptor::{descriptor_for, CallDescriptor, CallFlags, DecodeRoute, ParamSpec};
pub use error::{Result, WireError};
pub use names::{EnumTable, FlagTable};
pub use opcode::Opcode;
pub use packet::{encode_packet, FrameError, Packet, PacketHeader, PacketIter, HEADER_SIZE};
pub use stream::{Endian, IntSpec, StringEncoding, WireReader, WireWriter, SENTINEL_SIZE};
pub use types::{
    Count, Field, FieldSpec, FieldType, HandleKind, HandleMapper, HandleMapping, HandleType,
    NoHandleMapping, Record, StructSchema, Value,
};

/// `VK_SUCCESS`.
pub const VK_SUCCESS: i32 = 0;
/// `VK_WHOLE_SIZE`.
pub const VK_WHOLE_SIZE: u64 = u64::MAX;
