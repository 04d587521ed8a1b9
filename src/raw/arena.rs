use alloc::vec::Vec;

use super::handle::Handle;

/// Slab of node slots addressed by [`Handle`].
///
/// Freed slots go on a free list and are reused by later allocations, so a
/// long insert/remove workload does not grow the backing storage. A `Handle`
/// stays valid exactly until the slot it names is freed; all link updates in
/// the tree go through live handles, which is what rules out the
/// release-then-relink hazards of pointer-based deletion.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of live (allocated, not yet freed) elements.
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.to_index()] = Some(element);
            return handle;
        }
        // Strict less-than: after the push the arena holds at most
        // `Handle::MAX` slots, so every slot index is representable.
        assert!(
            self.slots.len() < Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(Some(element));
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Drops the element and recycles its slot.
    pub(crate) fn free(&mut self, handle: Handle) {
        let element = self.slots[handle.to_index()].take();
        assert!(element.is_some(), "`Arena::free()` - `handle` is invalid!");
        self.free.push(handle);
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn with_capacity_reserves() {
        let arena: Arena<u32> = Arena::with_capacity(8);
        assert_eq!(arena.capacity(), 8);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut arena: Arena<u32> = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        arena.free(a);
        assert_eq!(arena.len(), 1);

        // The next allocation must land in the recycled slot.
        let c = arena.alloc(3);
        assert_eq!(c, a);
        assert_eq!(*arena.get(c), 3);
        assert_eq!(*arena.get(b), 2);
    }

    #[test]
    #[should_panic(expected = "`Arena::free()` - `handle` is invalid!")]
    fn double_free_panics() {
        let mut arena: Arena<u32> = Arena::new();
        let h = arena.alloc(7);
        arena.free(h);
        arena.free(h);
    }

    #[test]
    fn clear_resets() {
        let mut arena: Arena<u32> = Arena::new();
        for i in 0..10 {
            arena.alloc(i);
        }
        arena.clear();
        assert_eq!(arena.len(), 0);
    }

    proptest! {
        /// Random alloc/free/overwrite churn against a `Vec` of live
        /// (handle, value) pairs. Every live handle must keep resolving to
        /// its value, and `len` must track the live count.
        #[test]
        fn arena_tracks_live_elements(ops in prop::collection::vec((any::<u32>(), any::<prop::sample::Index>(), 0u8..4), 0..512)) {
            let mut arena: Arena<u32> = Arena::new();
            let mut live: Vec<(Handle, u32)> = Vec::new();

            for (value, which, op) in ops {
                match op {
                    0 | 1 => {
                        let handle = arena.alloc(value);
                        live.push((handle, value));
                    }
                    2 if !live.is_empty() => {
                        let (handle, _) = live.swap_remove(which.index(live.len()));
                        arena.free(handle);
                    }
                    3 if !live.is_empty() => {
                        let idx = which.index(live.len());
                        let entry = &mut live[idx];
                        *arena.get_mut(entry.0) = value;
                        entry.1 = value;
                    }
                    _ => {}
                }

                prop_assert_eq!(arena.len(), live.len());
                for &(handle, expected) in &live {
                    prop_assert_eq!(*arena.get(handle), expected);
                }
            }
        }
    }
}
