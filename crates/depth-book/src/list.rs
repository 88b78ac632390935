//! Arena-backed sorted level list
//!
//! One side of the book is kept as a doubly linked list whose nodes live in a
//! [`Slab`]. Links are slab keys rather than pointers, so:
//!
//! - a [`LevelHandle`] stays valid until its own level is removed
//! - unlinking a known level is O(1)
//! - there is no shared or cyclic ownership between nodes
//!
//! Insertion scans from the best-price end. Feed updates cluster near the
//! top of the book, so the scan is usually short.

use depth_types::{PriceLevel, Side};
use rust_decimal::Decimal;
use slab::Slab;
use std::iter::FusedIterator;

/// Opaque reference to a level inside the list that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelHandle(usize);

#[derive(Debug, Clone)]
struct Node {
    level: PriceLevel,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Price levels of one side, best price first
///
/// Bids (`Side::Buy`) are kept in descending price order, asks
/// (`Side::Sell`) in ascending order.
#[derive(Debug, Clone)]
pub struct SortedLevelList {
    side: Side,
    nodes: Slab<Node>,
    /// Best level
    head: Option<usize>,
    /// Worst level
    tail: Option<usize>,
}

impl SortedLevelList {
    /// Create an empty list for one side
    pub fn new(side: Side) -> Self {
        Self::with_capacity(side, 0)
    }

    /// Create an empty list with room for `capacity` levels before reallocating
    pub fn with_capacity(side: Side, capacity: usize) -> Self {
        Self {
            side,
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Side whose ordering this list follows
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the list holds no levels
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Link a new level at its sorted position and return its handle
    ///
    /// The caller guarantees no level with the same price is present; the
    /// book checks its index before inserting.
    pub fn insert(&mut self, level: PriceLevel) -> LevelHandle {
        debug_assert_eq!(level.side, self.side, "level inserted into the wrong side");

        // First node the new level ranks ahead of; `None` means append at the tail
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            debug_assert_ne!(node.level.price, level.price, "duplicate price {}", level.price);
            if self.ranks_ahead(level.price, node.level.price) {
                break;
            }
            cursor = node.next;
        }

        let prev = match cursor {
            Some(next) => self.nodes[next].prev,
            None => self.tail,
        };
        let idx = self.nodes.insert(Node {
            level,
            prev,
            next: cursor,
        });

        match prev {
            Some(p) => self.nodes[p].next = Some(idx),
            None => self.head = Some(idx),
        }
        match cursor {
            Some(n) => self.nodes[n].prev = Some(idx),
            None => self.tail = Some(idx),
        }

        LevelHandle(idx)
    }

    /// Replace the quantity of a level in place
    ///
    /// The position does not change: a level's price is fixed for its
    /// lifetime. Returns `false` if the handle does not refer to a live level.
    pub fn update(&mut self, handle: LevelHandle, quantity: Decimal) -> bool {
        match self.nodes.get_mut(handle.0) {
            Some(node) => {
                node.level.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Unlink a level and return it
    ///
    /// The handle must not be used again afterwards.
    pub fn remove(&mut self, handle: LevelHandle) -> Option<PriceLevel> {
        let node = self.nodes.try_remove(handle.0)?;

        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }

        Some(node.level)
    }

    /// Look up a level by handle
    pub fn get(&self, handle: LevelHandle) -> Option<&PriceLevel> {
        self.nodes.get(handle.0).map(|node| &node.level)
    }

    /// Best level (highest bid or lowest ask)
    pub fn best(&self) -> Option<&PriceLevel> {
        self.head.map(|idx| &self.nodes[idx].level)
    }

    /// Worst level currently held
    pub fn worst(&self) -> Option<&PriceLevel> {
        self.tail.map(|idx| &self.nodes[idx].level)
    }

    /// Iterate from best to worst price
    pub fn iter(&self) -> Levels<'_> {
        Levels {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Drop every level; all outstanding handles become invalid
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    fn ranks_ahead(&self, price: Decimal, other: Decimal) -> bool {
        match self.side {
            Side::Buy => price > other,
            Side::Sell => price < other,
        }
    }
}

impl<'a> IntoIterator for &'a SortedLevelList {
    type Item = &'a PriceLevel;
    type IntoIter = Levels<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Best-first iterator over a [`SortedLevelList`]
#[derive(Debug, Clone)]
pub struct Levels<'a> {
    nodes: &'a Slab<Node>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Levels<'a> {
    type Item = &'a PriceLevel;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.cursor?];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.level)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Levels<'_> {}

impl FusedIterator for Levels<'_> {}
