//! Fixed-capacity slot storage.
//!
//! Capacity is set at construction and never changes.  Occupancy is read from
//! the entity itself through [`Slot::is_live`]; there is no free list and no
//! removal, a slot is released by making its entity dead.

/// Anything that can sit in an [`EntityPool`].
pub trait Slot {
    fn is_live(&self) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityPool<T> {
    slots: Box<[T]>,
}

impl<T: Slot + Default + Clone> EntityPool<T> {
    /// A pool of `capacity` slots, all holding `T::default()`.
    pub fn new(capacity: usize) -> Self {
        EntityPool {
            slots: vec![T::default(); capacity].into_boxed_slice(),
        }
    }
}

impl<T: Slot> EntityPool<T> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Lowest index whose entity is dead, or `None` when every slot is live.
    pub fn find_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.is_live())
    }

    /// Live slots in index order.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.is_live())
    }

    /// Call `f` on each live slot in index order.
    pub fn for_each_live<F: FnMut(usize, &T)>(&self, mut f: F) {
        for (i, s) in self.iter_live() {
            f(i, s);
        }
    }

    pub fn live_count(&self) -> usize {
        self.iter_live().count()
    }
}
