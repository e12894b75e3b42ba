//! OrderedMap - a hash map with an explicit, mutable traversal order.
//!
//! Uses a `HashMap` for key→slot lookup and an arena-based doubly-linked
//! list for the access order. All operations are O(1) amortized. No unsafe
//! code - links are `Vec` indices instead of raw pointers, and a free list
//! recycles slots vacated by removals.

use std::collections::HashMap;
use std::hash::Hash;

use crate::common::{Error, Result};

/// Sentinel value for null links in the doubly-linked list.
const NIL: usize = usize::MAX;

/// Names one end of the access order.
///
/// The order runs from the oldest-touched key to the newest-touched key.
/// Eviction policies are expressed entirely in terms of which end a key
/// moves to on a touch and which end holds the victim on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    /// The end holding the key touched longest ago.
    Oldest,
    /// The end holding the key touched most recently.
    Newest,
}

/// A node in the arena-based doubly-linked list.
///
/// `value` is an `Option` so removal can take ownership without cloning;
/// a resident node always holds `Some`. Freed slots reuse `next` as the
/// free-list link.
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: Option<V>,
    prev: usize,
    next: usize,
}

/// A key→value mapping with a caller-controlled traversal order.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                       OrderedMap                         │
/// │  ┌──────────────┐   ┌──────────────────────────────────┐ │
/// │  │    index     │   │        arena: Vec<Node>          │ │
/// │  │ K → slot idx │──▶│ [Node0] ⇄ [Node1] ⇄ [Node2] ...  │ │
/// │  └──────────────┘   └──────────────────────────────────┘ │
/// │     head ──▶ oldest end          tail ──▶ newest end     │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// # Ordering contract
/// Lookup never reorders, and insertion never places the key in the
/// order. Placement is a separate explicit step ([`move_to_end`]) so the
/// caller decides where each key lands. A key inserted but not yet placed
/// is "unlinked": resident in the mapping, absent from the traversal.
/// Callers are expected to place every inserted key before relying on
/// the order.
///
/// [`move_to_end`]: OrderedMap::move_to_end
#[derive(Debug)]
pub struct OrderedMap<K, V> {
    /// Key → arena slot mapping.
    index: HashMap<K, usize>,

    /// Arena of order nodes; freed slots are chained through `next`.
    arena: Vec<Node<K, V>>,

    /// Slot at the oldest-touched end, or NIL if the order is empty.
    head: usize,

    /// Slot at the newest-touched end, or NIL if the order is empty.
    tail: usize,

    /// Head of the free list of vacated slots, or NIL.
    free_head: usize,
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            arena: Vec::new(),
            head: NIL,
            tail: NIL,
            free_head: NIL,
        }
    }

    /// Create an empty map with pre-sized storage for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            arena: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            free_head: NIL,
        }
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// O(1) membership check.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// O(1) lookup. Never alters the order - reordering is the caller's
    /// explicit responsibility.
    pub fn get(&self, key: &K) -> Option<&V> {
        let &idx = self.index.get(key)?;
        self.arena[idx].value.as_ref()
    }

    /// Insert a new entry or overwrite an existing one. O(1).
    ///
    /// Returns `true` if the key was newly inserted. A newly inserted key
    /// is NOT placed in the order; the caller must follow up with
    /// [`move_to_end`](OrderedMap::move_to_end) to position it. An
    /// existing key keeps its current position.
    pub fn insert_or_update(&mut self, key: K, value: V) -> bool {
        if let Some(&idx) = self.index.get(&key) {
            self.arena[idx].value = Some(value);
            return false;
        }

        let idx = self.alloc(key.clone(), value);
        self.index.insert(key, idx);
        true
    }

    /// Relocate `key` to the named end of the order. O(1).
    ///
    /// Other keys keep their relative order. Also serves as the placement
    /// step for a freshly inserted, not-yet-linked key.
    ///
    /// # Errors
    /// [`Error::KeyNotResident`] if the key was never inserted. That is a
    /// contract breach on the caller's side, not a normal miss.
    pub fn move_to_end(&mut self, key: &K, end: End) -> Result<()> {
        let &idx = self.index.get(key).ok_or(Error::KeyNotResident)?;
        self.unlink(idx);
        self.link_at(idx, end);
        Ok(())
    }

    /// Remove and return the entry at the named end of the order. O(1).
    ///
    /// Deletes the key from both the mapping and the order.
    ///
    /// # Errors
    /// [`Error::EmptyCache`] if the order holds no entries.
    pub fn remove_end(&mut self, end: End) -> Result<(K, V)> {
        let idx = match end {
            End::Oldest => self.head,
            End::Newest => self.tail,
        };
        if idx == NIL {
            return Err(Error::EmptyCache);
        }

        self.unlink(idx);
        self.index.remove(&self.arena[idx].key);

        let key = self.arena[idx].key.clone();
        // Resident nodes always hold a value; take() vacates the slot.
        let value = self.arena[idx].value.take().ok_or(Error::KeyNotResident)?;
        self.free(idx);

        Ok((key, value))
    }

    /// Iterate over resident keys from the oldest end to the newest end.
    ///
    /// Keys inserted but not yet placed in the order are skipped.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            map: self,
            next: self.head,
        }
    }

    // ========================================================================
    // Arena management
    // ========================================================================

    /// Claim a slot for a new node, recycling a freed one if available.
    /// The node starts unlinked (not part of the order).
    fn alloc(&mut self, key: K, value: V) -> usize {
        let node = Node {
            key,
            value: Some(value),
            prev: NIL,
            next: NIL,
        };

        if self.free_head != NIL {
            let idx = self.free_head;
            self.free_head = self.arena[idx].next;
            self.arena[idx] = node;
            idx
        } else {
            self.arena.push(node);
            self.arena.len() - 1
        }
    }

    /// Return a vacated slot to the free list.
    fn free(&mut self, idx: usize) {
        self.arena[idx].prev = NIL;
        self.arena[idx].next = self.free_head;
        self.free_head = idx;
    }

    // ========================================================================
    // Linked-list surgery
    // ========================================================================

    /// Whether a slot currently participates in the order.
    ///
    /// A linked node is either the head or has a predecessor; an unlinked
    /// node is neither (both links NIL and not the head).
    fn is_linked(&self, idx: usize) -> bool {
        self.head == idx || self.arena[idx].prev != NIL
    }

    /// Detach a node from the order, patching its neighbors. No-op if the
    /// node is not linked.
    fn unlink(&mut self, idx: usize) {
        if !self.is_linked(idx) {
            return;
        }

        let (prev, next) = (self.arena[idx].prev, self.arena[idx].next);

        if prev != NIL {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.arena[idx].prev = NIL;
        self.arena[idx].next = NIL;
    }

    /// Attach a detached node at the named end of the order.
    fn link_at(&mut self, idx: usize, end: End) {
        match end {
            End::Oldest => {
                self.arena[idx].next = self.head;
                if self.head != NIL {
                    self.arena[self.head].prev = idx;
                }
                self.head = idx;
                if self.tail == NIL {
                    self.tail = idx;
                }
            }
            End::Newest => {
                self.arena[idx].prev = self.tail;
                if self.tail != NIL {
                    self.arena[self.tail].next = idx;
                }
                self.tail = idx;
                if self.head == NIL {
                    self.head = idx;
                }
            }
        }
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over resident keys, oldest end first.
pub struct Keys<'a, K, V> {
    map: &'a OrderedMap<K, V>,
    next: usize,
}

impl<'a, K: Eq + Hash + Clone, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == NIL {
            return None;
        }
        let node = &self.map.arena[self.next];
        self.next = node.next;
        Some(&node.key)
    }
}
