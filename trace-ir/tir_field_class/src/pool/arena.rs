//! Reference-counted slab storage.
//!
//! Each slot holds one value, its reference count and a generation. A slot
//! whose count drops to zero is emptied and goes on the free list; reusing
//! it bumps the generation so old handles no longer match.

use crate::{Error, Result};

struct Slot<T> {
    value: Option<T>,
    refs: u32,
    generation: u32,
}

pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    live: usize,
}

/// Outcome of dropping one reference.
pub(crate) enum Release<T> {
    /// Other references remain.
    Shared,
    /// That was the last reference; the value was taken out of its slot.
    Destroyed(T),
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Store `value` with one reference. Returns `(index, generation)`.
    pub(crate) fn insert(&mut self, value: T) -> Result<(u32, u32)> {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                let index = u32::try_from(self.slots.len())
                    .ok()
                    .filter(|&i| i != u32::MAX)
                    .ok_or(Error::PoolExhausted { count: self.live })?;
                self.slots.push(Slot {
                    value: None,
                    refs: 0,
                    generation: 0,
                });
                index
            }
        };

        let slot = &mut self.slots[index as usize];
        slot.value = Some(value);
        slot.refs = 1;
        self.live += 1;
        Ok((index, slot.generation))
    }

    fn slot(&self, index: u32, generation: u32) -> Option<&Slot<T>> {
        self.slots
            .get(index as usize)
            .filter(|s| s.generation == generation && s.value.is_some())
    }

    fn slot_mut(&mut self, index: u32, generation: u32) -> Option<&mut Slot<T>> {
        self.slots
            .get_mut(index as usize)
            .filter(|s| s.generation == generation && s.value.is_some())
    }

    pub(crate) fn get(&self, index: u32, generation: u32) -> Option<&T> {
        self.slot(index, generation).and_then(|s| s.value.as_ref())
    }

    pub(crate) fn get_mut(&mut self, index: u32, generation: u32) -> Option<&mut T> {
        self.slot_mut(index, generation)
            .and_then(|s| s.value.as_mut())
    }

    pub(crate) fn refs(&self, index: u32, generation: u32) -> Option<u32> {
        self.slot(index, generation).map(|s| s.refs)
    }

    /// Add one reference. Returns `false` for a stale handle.
    pub(crate) fn acquire(&mut self, index: u32, generation: u32) -> bool {
        match self.slot_mut(index, generation) {
            Some(slot) => {
                // A count this high means references are leaking.
                slot.refs = slot
                    .refs
                    .checked_add(1)
                    .unwrap_or_else(|| panic!("reference count overflow on slot {index}"));
                true
            }
            None => false,
        }
    }

    /// Drop one reference. `None` for a stale handle.
    pub(crate) fn release(&mut self, index: u32, generation: u32) -> Option<Release<T>> {
        let slot = self.slot_mut(index, generation)?;
        slot.refs -= 1;
        if slot.refs > 0 {
            return Some(Release::Shared);
        }

        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.live -= 1;
        Some(Release::Destroyed(value))
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live
    }
}
