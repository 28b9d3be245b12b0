use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Handle into the physics world. The generation guards against a stale
/// handle resolving to a body that was removed and its slot reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct BodyHandle {
    index: usize,
    generation: u32,
}

impl BodyHandle {
    pub fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl Default for BodyHandle {
    fn default() -> Self {
        Self::new(usize::MAX, 0)
    }
}

/// Generational arena backing the world's body storage.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    generations: Vec<u32>,
    free_list: VecDeque<usize>,
    live: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: VecDeque::new(),
            live: 0,
        }
    }

    pub fn insert(&mut self, item: T) -> BodyHandle {
        self.live += 1;
        if let Some(index) = self.free_list.pop_front() {
            self.slots[index] = Some(item);
            return BodyHandle::new(index, self.generations[index]);
        }

        let index = self.slots.len();
        self.slots.push(Some(item));
        self.generations.push(0);
        BodyHandle::new(index, 0)
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        if !self.is_current(handle) {
            return None;
        }
        self.slots.get(handle.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        if !self.is_current(handle) {
            return None;
        }
        self.slots.get_mut(handle.index()).and_then(Option::as_mut)
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Removes the item and retires the handle. Stale handles return `None`.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        if !self.is_current(handle) {
            return None;
        }
        let index = handle.index();
        let taken = self.slots.get_mut(index).and_then(Option::take)?;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free_list.push_back(index);
        self.live -= 1;
        Some(taken)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|item| (BodyHandle::new(index, self.generations[index]), item))
        })
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    #[cfg(feature = "parallel")]
    pub fn par_values_mut(&mut self) -> impl rayon::iter::ParallelIterator<Item = &mut T> + '_
    where
        T: Send,
    {
        use rayon::prelude::*;
        self.slots.par_iter_mut().filter_map(Option::as_mut)
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    fn is_current(&self, handle: BodyHandle) -> bool {
        self.generations
            .get(handle.index())
            .is_some_and(|generation| *generation == handle.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_handle_goes_stale_after_slot_reuse() {
        let mut arena = Arena::new();
        let first = arena.insert("circle");
        assert_eq!(arena.remove(first), Some("circle"));

        let second = arena.insert("square");
        assert_eq!(first.index(), second.index());
        assert_ne!(first.generation(), second.generation());
        assert!(arena.get(first).is_none());
        assert_eq!(arena.get(second), Some(&"square"));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn double_remove_is_harmless() {
        let mut arena = Arena::new();
        let handle = arena.insert(1u8);
        assert!(arena.remove(handle).is_some());
        assert!(arena.remove(handle).is_none());
        assert!(arena.is_empty());
    }
}
