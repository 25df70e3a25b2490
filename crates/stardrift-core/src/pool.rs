//! Fixed-capacity slot arrays.
//!
//! A slot's index is its identity while it is active. Allocation is a linear
//! scan for the first inactive slot; release just clears the flag and leaves
//! the stale fields in place until the slot is reused. A full pool turns
//! spawns into no-ops.

use std::ops::{Index, IndexMut};

/// An entity that can live in a [`Pool`].
pub trait Slot {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

#[derive(Debug, Clone)]
pub struct Pool<T, const N: usize> {
    slots: [T; N],
}

impl<T: Slot + Default, const N: usize> Default for Pool<T, N> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Slot + Default, const N: usize> Pool<T, N> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Slot, const N: usize> Pool<T, N> {
    /// Index of the first inactive slot, if any.
    #[inline]
    pub fn allocate(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.is_active())
    }

    /// Writes `entity` into the first free slot and marks it active.
    /// Returns `None` and leaves the pool untouched when it is full.
    pub fn spawn(&mut self, mut entity: T) -> Option<usize> {
        let idx = self.allocate()?;
        entity.set_active(true);
        self.slots[idx] = entity;
        Some(idx)
    }

    /// Unconditionally replaces slot `idx`, active or not.
    pub fn overwrite(&mut self, idx: usize, mut entity: T) {
        entity.set_active(true);
        self.slots[idx] = entity;
    }

    /// Marks slot `idx` inactive. Out-of-range indices are ignored.
    pub fn release(&mut self, idx: usize) {
        if let Some(slot) = self.slots.get_mut(idx) {
            slot.set_active(false);
        }
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.set_active(false);
        }
    }

    #[inline]
    pub fn is_active(&self, idx: usize) -> bool {
        self.slots.get(idx).is_some_and(Slot::is_active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn free_count(&self) -> usize {
        N - self.active_count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Slot::is_active)
    }

    /// True when no slot is active.
    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(Slot::is_active)
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, s)| s.is_active())
    }
}

impl<T, const N: usize> Index<usize> for Pool<T, N> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.slots[idx]
    }
}

impl<T, const N: usize> IndexMut<usize> for Pool<T, N> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.slots[idx]
    }
}
