#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Worklists of pending arcs for AC-3.
//!
//! The result of AC-3 does not depend on the order arcs are popped, only the
//! amount of work does. Both worklists keep a pending bitmap indexed by
//! [`CrossingId`] so that an arc already waiting is never queued twice.

use crate::crossword::puzzle::{CrossingId, Puzzle};
use bit_vec::BitVec;
use std::collections::VecDeque;
use std::fmt::Debug;

/// A set of pending arcs with a pop discipline.
pub trait ArcQueue: Debug + Clone {
    /// Creates an empty worklist sized for `puzzle`.
    fn new(puzzle: &Puzzle) -> Self;

    /// Adds `arc` unless it is already pending. Returns whether it was added.
    fn push(&mut self, arc: CrossingId) -> bool;

    /// Removes and returns the next arc.
    fn pop(&mut self) -> Option<CrossingId>;

    /// Number of pending arcs.
    fn len(&self) -> usize;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every pending arc.
    fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}

/// First-in first-out worklist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArcFifo {
    queue: VecDeque<CrossingId>,
    pending: BitVec,
}

impl ArcQueue for ArcFifo {
    fn new(puzzle: &Puzzle) -> Self {
        let n = puzzle.crossings().len();
        Self {
            queue: VecDeque::with_capacity(n),
            pending: BitVec::from_elem(n, false),
        }
    }

    fn push(&mut self, arc: CrossingId) -> bool {
        if self.pending[arc] {
            return false;
        }
        self.pending.set(arc, true);
        self.queue.push_back(arc);
        true
    }

    fn pop(&mut self) -> Option<CrossingId> {
        let arc = self.queue.pop_front()?;
        self.pending.set(arc, false);
        Some(arc)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in first-out worklist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArcStack {
    stack: Vec<CrossingId>,
    pending: BitVec,
}

impl ArcStack {
    /// Iterates over the pending arcs from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &CrossingId> {
        self.stack.iter()
    }
}

impl ArcQueue for ArcStack {
    fn new(puzzle: &Puzzle) -> Self {
        let n = puzzle.crossings().len();
        Self {
            stack: Vec::with_capacity(n),
            pending: BitVec::from_elem(n, false),
        }
    }

    fn push(&mut self, arc: CrossingId) -> bool {
        if self.pending[arc] {
            return false;
        }
        self.pending.set(arc, true);
        self.stack.push(arc);
        true
    }

    fn pop(&mut self) -> Option<CrossingId> {
        let arc = self.stack.pop()?;
        self.pending.set(arc, false);
        Some(arc)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
