//! Guest-visible handle indirection.
//!
//! Every driver object handed to the guest is replaced by a boxed id:
//!
//! ```text
//! bits  0..32  slot index
//! bits 32..48  slot generation
//! bits 48..64  handle type tag (never zero)
//! ```
//!
//! A boxed id is therefore never zero, and a slot is only reused under a new generation once its
//! previous entry has been destroyed.

use std::collections::{HashMap, VecDeque};

use thiserror::Error;
use tracing::{debug, warn};
use vkstream_protocol::{HandleKind, HandleMapper, HandleMapping, HandleType};

pub type BoxedId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxingError {
    #[error("unknown boxed handle {0:#x}")]
    UnknownHandle(BoxedId),

    #[error("boxed handle space exhausted while boxing a {}", .0.type_name())]
    Exhausted(HandleType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxedEntry {
    pub boxed: BoxedId,
    pub raw: u64,
    pub ty: HandleType,
}

impl BoxedEntry {
    pub fn kind(&self) -> HandleKind {
        self.ty.kind()
    }
}

const fn compose(index: u32, generation: u16, ty: HandleType) -> BoxedId {
    index as u64 | (generation as u64) << 32 | (ty.tag() as u64) << 48
}

const fn split(boxed: BoxedId) -> (u32, u16) {
    (boxed as u32, (boxed >> 32) as u16)
}

#[derive(Debug, Default)]
pub struct BoxedHandleTable {
    entries: HashMap<BoxedId, BoxedEntry>,
    /// Current generation per slot index.
    generations: Vec<u16>,
    free: Vec<u32>,
    /// Ids recorded in a snapshot, handed out before any fresh id.
    reserved: VecDeque<BoxedId>,
    /// Ids destroyed during the current packet, in destruction order.
    preserved: Vec<BoxedId>,
    /// Ids read as destroyed whose entries stay live until the packet is fully read.
    pending_destroys: Vec<BoxedId>,
}

impl BoxedHandleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, boxed: BoxedId) -> Option<&BoxedEntry> {
        self.entries.get(&boxed)
    }

    pub fn kind_of(&self, boxed: BoxedId) -> Option<HandleKind> {
        self.get(boxed).map(BoxedEntry::kind)
    }

    /// Boxes `raw` under a fresh id.
    pub fn box_create(&mut self, raw: u64, ty: HandleType) -> Result<BoxedId, BoxingError> {
        let boxed = match self.take_reserved(raw) {
            Some(boxed) => boxed,
            None => self.fresh_id(raw, ty)?,
        };
        self.entries.insert(boxed, BoxedEntry { boxed, raw, ty });
        Ok(boxed)
    }

    fn take_reserved(&mut self, raw: u64) -> Option<BoxedId> {
        while let Some(boxed) = self.reserved.pop_front() {
            if boxed == 0 || boxed == raw || self.entries.contains_key(&boxed) {
                warn!(boxed, raw, "skipping unusable snapshot handle reservation");
                continue;
            }
            return Some(boxed);
        }
        None
    }

    fn fresh_id(&mut self, raw: u64, ty: HandleType) -> Result<BoxedId, BoxingError> {
        loop {
            let index = match self.free.pop() {
                Some(index) => index,
                None => {
                    let index =
                        u32::try_from(self.generations.len()).map_err(|_| BoxingError::Exhausted(ty))?;
                    self.generations.push(0);
                    index
                }
            };
            let slot = index as usize;
            loop {
                let candidate = compose(index, self.generations[slot], ty);
                if candidate != raw && !self.entries.contains_key(&candidate) {
                    return Ok(candidate);
                }
                // Collides with the raw value or a snapshot id: move to the next generation, or
                // retire the slot when none is left.
                match self.generations[slot].checked_add(1) {
                    Some(next) => self.generations[slot] = next,
                    None => break,
                }
            }
            debug!(index, "retiring boxed handle slot");
        }
    }

    /// Raw driver value behind `boxed`. The null handle maps to itself.
    pub fn unwrap(&self, boxed: BoxedId) -> Result<u64, BoxingError> {
        if boxed == 0 {
            return Ok(0);
        }
        self.entries
            .get(&boxed)
            .map(|entry| entry.raw)
            .ok_or(BoxingError::UnknownHandle(boxed))
    }

    /// Removes the entry for `boxed` and returns its raw value.
    ///
    /// With `preserve_for_trace` the id stays listed in [`Self::preserved`] until
    /// [`Self::release_preserved`].
    pub fn destroy_and_unbox(
        &mut self,
        boxed: BoxedId,
        preserve_for_trace: bool,
    ) -> Result<u64, BoxingError> {
        if boxed == 0 {
            return Ok(0);
        }
        let entry = self
            .entries
            .remove(&boxed)
            .ok_or(BoxingError::UnknownHandle(boxed))?;
        self.recycle(boxed);
        if preserve_for_trace {
            self.preserved.push(boxed);
        }
        Ok(entry.raw)
    }

    fn recycle(&mut self, boxed: BoxedId) {
        let (index, generation) = split(boxed);
        let Some(current) = self.generations.get_mut(index as usize) else {
            // A snapshot id beyond the slots this table ever handed out.
            return;
        };
        if *current != generation {
            return;
        }
        if let Some(next) = current.checked_add(1) {
            *current = next;
            self.free.push(index);
        }
    }

    /// Resolves `boxed` like [`Self::unwrap`] and queues it for [`Self::commit_destroys`].
    pub fn defer_destroy(&mut self, boxed: BoxedId) -> Result<u64, BoxingError> {
        let raw = self.unwrap(boxed)?;
        if boxed != 0 {
            self.pending_destroys.push(boxed);
        }
        Ok(raw)
    }

    pub fn pending_destroys(&self) -> &[BoxedId] {
        &self.pending_destroys
    }

    /// Destroys every queued id in queue order, preserving each for the trace.
    pub fn commit_destroys(&mut self) -> Result<(), BoxingError> {
        for boxed in std::mem::take(&mut self.pending_destroys) {
            self.destroy_and_unbox(boxed, true)?;
        }
        Ok(())
    }

    /// Drops queued destroys; their entries stay live.
    pub fn discard_pending_destroys(&mut self) {
        self.pending_destroys.clear();
    }

    pub fn preserved(&self) -> &[BoxedId] {
        &self.preserved
    }

    pub fn release_preserved(&mut self) {
        self.preserved.clear();
    }

    /// Queues ids restored from a snapshot; subsequent creates take them in order.
    pub fn reserve_for_snapshot_load(&mut self, ids: impl IntoIterator<Item = BoxedId>) {
        self.reserved.extend(ids);
    }

    pub fn clear_snapshot_load_reservations(&mut self) {
        self.reserved.clear();
    }

    pub fn pending_reservations(&self) -> usize {
        self.reserved.len()
    }
}

/// Maps wire handles through a [`BoxedHandleTable`] while parameters are read.
///
/// Destroyed handles are only queued; the owner applies them with
/// [`BoxedHandleTable::commit_destroys`] once the whole call has been read.
pub struct BoxingMapper<'t> {
    table: &'t mut BoxedHandleTable,
}

impl<'t> BoxingMapper<'t> {
    pub fn new(table: &'t mut BoxedHandleTable) -> Self {
        Self { table }
    }
}

impl HandleMapper for BoxingMapper<'_> {
    fn map_read(
        &mut self,
        _ty: HandleType,
        value: u64,
        mapping: HandleMapping,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let raw = match mapping {
            HandleMapping::Disabled => value,
            HandleMapping::Normal => self.table.unwrap(value)?,
            HandleMapping::PreserveForTrace => self.table.defer_destroy(value)?,
        };
        Ok(raw)
    }
}
