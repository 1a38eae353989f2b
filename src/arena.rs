//! Generational slot storage backing everything a world registers.
//!
//! Handles carry the generation of the slot they were issued for, so a
//! handle to a removed entry never aliases whatever later reuses the slot.
//! Slots are recycled, but [`Arena::iter`] still yields entries in the order
//! they were inserted.

use alloc::vec::Vec as AllocVec;

/// Index plus generation of a slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Key {
    index: u32,
    generation: u32,
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

pub(crate) struct Arena<T> {
    slots: AllocVec<Slot<T>>,
    free: AllocVec<u32>,
    /// Live keys, oldest first.
    order: AllocVec<Key>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena { slots: AllocVec::new(), free: AllocVec::new(), order: AllocVec::new() }
    }

    pub fn insert(&mut self, value: T) -> Key {
        let key = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.value = Some(value);
                Key { index, generation: slot.generation }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot { generation: 0, value: Some(value) });
                Key { index, generation: 0 }
            }
        };
        self.order.push(key);
        key
    }

    pub fn remove(&mut self, key: Key) -> Option<T> {
        let slot = self.slots.get_mut(key.index as usize)?;
        if slot.generation != key.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(key.index);
        if let Some(pos) = self.order.iter().position(|k| *k == key) {
            self.order.remove(pos);
        }
        Some(value)
    }

    pub fn get(&self, key: Key) -> Option<&T> {
        let slot = self.slots.get(key.index as usize)?;
        if slot.generation != key.generation {
            return None;
        }
        slot.value.as_ref()
    }

    pub fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        let slot = self.slots.get_mut(key.index as usize)?;
        if slot.generation != key.generation {
            return None;
        }
        slot.value.as_mut()
    }

    pub fn contains(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Live entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &T)> {
        self.order.iter().filter_map(move |&key| self.get(key).map(|v| (key, v)))
    }

    /// Live entries in slot order. Only for callers that do not depend on
    /// ordering.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Key, &mut T)> {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| {
            let generation = slot.generation;
            slot.value.as_mut().map(|v| (Key { index: i as u32, generation }, v))
        })
    }

    pub fn retain<P: FnMut(&T) -> bool>(&mut self, mut keep: P) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let drop = match slot.value.as_ref() {
                Some(v) => !keep(v),
                None => false,
            };
            if drop {
                slot.value = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(i as u32);
            }
        }
        let slots = &self.slots;
        self.order.retain(|k| slots[k.index as usize].generation == k.generation);
    }
}
