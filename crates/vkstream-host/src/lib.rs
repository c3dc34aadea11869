//! Host side of the guest call stream: handle boxing, call execution and writeback.

pub mod boxing;
pub mod collab;
pub mod config;
pub mod decoder;
pub mod pool;

pub use boxing::{BoxedEntry, BoxedHandleTable, BoxedId, BoxingError, BoxingMapper};
pub use collab::{
    parse_created_handles, DispatchHandle, Driver, DriverCall, DriverError, GlobalState,
    NoGlobalState, SnapshotCall, SnapshotRecorder, StateCall,
};
pub use config::DecoderConfig;
pub use decoder::{
    DecodeProgress, Decoder, DecoderError, DecoderShared, DriverWorkaroundLock, StopReason,
};
pub use pool::{PoolSlice, ScratchPool};
