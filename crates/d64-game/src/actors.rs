// actors.rs — live actor registry

/*
Copyright (C) 1993-1997 Id Software, Inc.
Copyright (C) 2007-2012 Samuel Villarreal

This program is free software; you can redistribute it and/or
modify it under the terms of the GNU General Public License
as published by the Free Software Foundation; either version 2
of the License, or (at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.

See the GNU General Public License for more details.
*/

//! Actors live in a slot arena addressed by generation-checked handles.
//! Slots are threaded on an intrusive list in insertion order so the tic
//! loop visits them the way the original mobj list did. `target` and
//! `tracer` links carry a reference count: a removed actor stays allocated
//! until the last link to it clears.

use crate::g_local::Actor;

/// Stable reference to an actor slot. Stale handles resolve to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorHandle {
    index: u32,
    generation: u32,
}

impl ActorHandle {
    pub fn index(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefSlot {
    Target,
    Tracer,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    actor: Option<Actor>,
    prev: Option<u32>,
    next: Option<u32>,
}

#[derive(Debug, Default)]
pub struct ActorTable {
    slots: Vec<Slot>,
    free: Vec<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    /// Next slot the running tic pass will visit.
    cursor: Option<u32>,
    len: usize,
}

impl ActorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocate a slot and append it to the end of the live list.
    pub fn insert(&mut self, actor: Actor) -> ActorHandle {
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index as usize].actor = Some(actor);
                index
            }
            None => {
                self.slots.push(Slot { generation: 0, actor: Some(actor), prev: None, next: None });
                (self.slots.len() - 1) as u32
            }
        };

        let slot = &mut self.slots[index as usize];
        slot.prev = self.tail;
        slot.next = None;
        match self.tail {
            Some(t) => self.slots[t as usize].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;

        ActorHandle { index, generation: self.slots[index as usize].generation }
    }

    fn slot(&self, h: ActorHandle) -> Option<&Slot> {
        self.slots.get(h.index as usize).filter(|s| s.generation == h.generation && s.actor.is_some())
    }

    pub fn contains(&self, h: ActorHandle) -> bool {
        self.slot(h).is_some()
    }

    /// Allocated and not waiting to be reclaimed.
    pub fn is_live(&self, h: ActorHandle) -> bool {
        self.get(h).is_some_and(|a| !a.removed)
    }

    pub fn get(&self, h: ActorHandle) -> Option<&Actor> {
        self.slot(h).and_then(|s| s.actor.as_ref())
    }

    pub fn get_mut(&mut self, h: ActorHandle) -> Option<&mut Actor> {
        let slot = self.slots.get_mut(h.index as usize)?;
        if slot.generation != h.generation {
            return None;
        }
        slot.actor.as_mut()
    }

    /// Handles in list order.
    pub fn handles(&self) -> Vec<ActorHandle> {
        let mut out = Vec::with_capacity(self.len);
        let mut cur = self.head;
        while let Some(i) = cur {
            let slot = &self.slots[i as usize];
            out.push(ActorHandle { index: i, generation: slot.generation });
            cur = slot.next;
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorHandle, &Actor)> + '_ {
        self.handles()
            .into_iter()
            .filter_map(move |h| self.get(h).map(|a| (h, a)))
    }

    // ============================================================
    // Tic pass cursor
    // ============================================================

    pub fn begin_pass(&mut self) {
        self.cursor = self.head;
    }

    /// Next actor of the running pass. Actors appended during the pass
    /// are visited; actors unlinked ahead of the cursor are skipped.
    pub fn next_in_pass(&mut self) -> Option<ActorHandle> {
        let i = self.cursor?;
        let slot = &self.slots[i as usize];
        self.cursor = slot.next;
        Some(ActorHandle { index: i, generation: slot.generation })
    }

    // ============================================================
    // Reclamation
    // ============================================================

    fn unlink(&mut self, index: u32) {
        let (prev, next) = {
            let slot = &self.slots[index as usize];
            (slot.prev, slot.next)
        };
        if self.cursor == Some(index) {
            self.cursor = next;
        }
        match prev {
            Some(p) => self.slots[p as usize].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n as usize].prev = prev,
            None => self.tail = prev,
        }
        let slot = &mut self.slots[index as usize];
        slot.prev = None;
        slot.next = None;
    }

    /// Unlink and free immediately. The slot's generation moves on so old
    /// handles go stale.
    fn reclaim(&mut self, h: ActorHandle) -> Option<Actor> {
        if !self.contains(h) {
            return None;
        }
        self.unlink(h.index);
        let slot = &mut self.slots[h.index as usize];
        let actor = slot.actor.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(h.index);
        self.len -= 1;
        actor
    }

    /// Tag an actor pending-free; reclaim now if nothing references it.
    /// Returns true when the slot was freed. A second call is a no-op.
    pub fn free_actor(&mut self, h: ActorHandle) -> bool {
        let Some(actor) = self.get_mut(h) else {
            return false;
        };
        if actor.removed {
            return false;
        }
        actor.removed = true;
        if actor.refcount <= 0 {
            self.reclaim(h);
            return true;
        }
        false
    }

    /// Retry the deferred free of a pending actor.
    pub fn safe_remove(&mut self, h: ActorHandle) -> bool {
        match self.get(h) {
            Some(a) if a.removed && a.refcount <= 0 => self.reclaim(h).is_some(),
            _ => false,
        }
    }

    // ============================================================
    // Reference counting
    // ============================================================

    pub fn acquire(&mut self, h: ActorHandle) {
        if let Some(a) = self.get_mut(h) {
            a.refcount += 1;
        }
    }

    pub fn release(&mut self, h: ActorHandle) {
        let Some(a) = self.get_mut(h) else {
            return;
        };
        if a.refcount > 0 {
            a.refcount -= 1;
        }
        if a.refcount == 0 && a.removed {
            self.reclaim(h);
        }
    }

    pub fn refcount(&self, h: ActorHandle) -> i32 {
        self.get(h).map_or(0, |a| a.refcount)
    }

    /// Write a relationship slot. The new referent is counted before the
    /// old one is released so re-assigning the same actor never frees it.
    pub fn set_ref(&mut self, owner: ActorHandle, slot: RefSlot, new: Option<ActorHandle>) {
        let new = new.filter(|&n| self.contains(n));
        let Some(actor) = self.get_mut(owner) else {
            return;
        };
        let old = match slot {
            RefSlot::Target => std::mem::replace(&mut actor.target, new),
            RefSlot::Tracer => std::mem::replace(&mut actor.tracer, new),
        };
        if let Some(n) = new {
            self.acquire(n);
        }
        if let Some(o) = old {
            self.release(o);
        }
    }

    pub fn set_target(&mut self, owner: ActorHandle, new: Option<ActorHandle>) {
        self.set_ref(owner, RefSlot::Target, new);
    }

    pub fn set_tracer(&mut self, owner: ActorHandle, new: Option<ActorHandle>) {
        self.set_ref(owner, RefSlot::Tracer, new);
    }

    /// Drop every actor; used at level teardown.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::{mobjinfo, MobjType};
    use proptest::prelude::*;

    fn make_actor() -> Actor {
        Actor::new(MobjType::Possessed1, mobjinfo(MobjType::Possessed1))
    }

    fn make_table(n: usize) -> (ActorTable, Vec<ActorHandle>) {
        let mut table = ActorTable::new();
        let handles = (0..n).map(|_| table.insert(make_actor())).collect();
        (table, handles)
    }

    #[test]
    fn test_insert_keeps_list_order() {
        let (table, h) = make_table(3);
        assert_eq!(table.handles(), h);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_stale_handle_after_reuse() {
        let (mut table, h) = make_table(2);
        assert!(table.free_actor(h[0]));
        let reused = table.insert(make_actor());
        assert_eq!(reused.index(), h[0].index(), "freed slot is reused");
        assert!(table.get(h[0]).is_none(), "old handle must be stale");
        assert!(table.get(reused).is_some());
    }

    #[test]
    fn test_set_target_counts_references() {
        let (mut table, h) = make_table(3);
        table.set_target(h[0], Some(h[2]));
        table.set_tracer(h[1], Some(h[2]));
        assert_eq!(table.refcount(h[2]), 2);

        table.set_target(h[0], Some(h[1]));
        assert_eq!(table.refcount(h[2]), 1);
        assert_eq!(table.refcount(h[1]), 1);

        table.set_target(h[0], Some(h[1]));
        assert_eq!(table.refcount(h[1]), 1, "re-assigning the same referent is neutral");
    }

    #[test]
    fn test_removal_deferred_until_last_reference() {
        let (mut table, h) = make_table(3);
        table.set_target(h[0], Some(h[2]));
        table.set_tracer(h[1], Some(h[2]));

        assert!(!table.free_actor(h[2]), "referenced actor must not be reclaimed");
        assert!(table.contains(h[2]));
        assert!(!table.is_live(h[2]));

        table.set_target(h[0], None);
        assert!(table.contains(h[2]));
        table.set_tracer(h[1], None);
        assert!(!table.contains(h[2]), "last release reclaims");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_double_free_is_noop() {
        let (mut table, h) = make_table(2);
        table.set_target(h[0], Some(h[1]));
        assert!(!table.free_actor(h[1]));
        assert!(!table.free_actor(h[1]));
        assert_eq!(table.refcount(h[1]), 1, "second removal must not touch the count");
        table.set_target(h[0], None);
        assert!(!table.contains(h[1]));
        assert!(!table.free_actor(h[1]));
    }

    #[test]
    fn test_pass_tolerates_removal_of_current_and_next() {
        let (mut table, h) = make_table(4);
        table.begin_pass();
        let mut visited = Vec::new();
        while let Some(cur) = table.next_in_pass() {
            visited.push(cur);
            if cur == h[0] {
                table.free_actor(h[0]);
                table.free_actor(h[1]);
            }
        }
        assert_eq!(visited, vec![h[0], h[2], h[3]]);
    }

    #[test]
    fn test_pass_visits_actors_spawned_during_pass() {
        let (mut table, h) = make_table(2);
        table.begin_pass();
        let mut visited = Vec::new();
        let mut spawned = None;
        while let Some(cur) = table.next_in_pass() {
            visited.push(cur);
            if cur == h[0] {
                spawned = Some(table.insert(make_actor()));
            }
        }
        assert_eq!(visited.len(), 3);
        assert_eq!(visited.last().copied(), spawned);
    }

    proptest! {
        #[test]
        fn prop_refcount_matches_slots(ops in proptest::collection::vec((0usize..6, 0usize..2, 0usize..7), 1..64)) {
            let (mut table, h) = make_table(6);
            for (owner, slot, target) in ops {
                let new = if target == 6 { None } else { Some(h[target]) };
                let slot = if slot == 0 { RefSlot::Target } else { RefSlot::Tracer };
                table.set_ref(h[owner], slot, new);
            }
            for &victim in &h {
                let expected = h
                    .iter()
                    .filter_map(|&o| table.get(o))
                    .map(|a| (a.target == Some(victim)) as i32 + (a.tracer == Some(victim)) as i32)
                    .sum::<i32>();
                prop_assert_eq!(table.refcount(victim), expected);
            }
        }
    }
}
