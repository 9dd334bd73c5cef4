#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Arc consistency (AC-3) over crossword domains.
//!
//! An arc (x, y) is consistent when every word left for `x` has at least one
//! word left for `y` with the same letter in the shared cell. Revising the
//! arc removes the words of `x` that fail this test. When `x` shrinks, each
//! arc (z, x) with z ≠ y is queued again because z may have lost its only
//! support in `x`.
//!
//! The fixed point reached is independent of the order arcs are popped, so
//! the queue discipline is a type parameter of [`Propagator`].

use crate::crossword::arc_queue::{ArcFifo, ArcQueue};
use crate::crossword::domain::Domains;
use crate::crossword::puzzle::{CrossingId, Puzzle};
use crate::crossword::slot::SlotId;
use crate::crossword::words::WordList;
use log::{debug, trace};
use rustc_hash::FxHashSet;

/// Result of running AC-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcConsistency {
    /// Every arc is consistent and no domain is empty.
    Consistent,
    /// The domain of this slot was emptied; the puzzle has no solution from
    /// the current domains.
    Wipeout(SlotId),
}

impl ArcConsistency {
    /// Whether propagation finished without a wipeout.
    #[must_use]
    pub const fn is_consistent(self) -> bool {
        matches!(self, Self::Consistent)
    }
}

/// AC-3 engine owning its worklist and counting the work it does.
#[derive(Debug, Clone)]
pub struct Propagator<Q: ArcQueue = ArcFifo> {
    queue: Q,
    revisions: usize,
    removals: usize,
}

impl<Q: ArcQueue> Propagator<Q> {
    /// Creates a propagator with an empty worklist sized for `puzzle`.
    #[must_use]
    pub fn new(puzzle: &Puzzle) -> Self {
        Self {
            queue: Q::new(puzzle),
            revisions: 0,
            removals: 0,
        }
    }

    /// Number of arc revisions performed so far.
    #[must_use]
    pub const fn revisions(&self) -> usize {
        self.revisions
    }

    /// Number of candidates removed so far.
    #[must_use]
    pub const fn removals(&self) -> usize {
        self.removals
    }

    /// Revises a single arc, returning whether the domain of its first slot
    /// shrank.
    pub fn revise(
        &mut self,
        domains: &mut Domains,
        puzzle: &Puzzle,
        words: &WordList,
        arc: CrossingId,
    ) -> bool {
        self.revisions += 1;
        let removed = revise_crossing(domains, puzzle, words, arc);
        self.removals += removed;
        removed > 0
    }

    /// Runs AC-3 to a fixed point.
    ///
    /// With `arcs` set to `None` the worklist starts with every arc of the
    /// puzzle, in both directions. Otherwise it starts with the given arcs
    /// only.
    pub fn ac3(
        &mut self,
        domains: &mut Domains,
        puzzle: &Puzzle,
        words: &WordList,
        arcs: Option<&[CrossingId]>,
    ) -> ArcConsistency {
        self.queue.clear();
        match arcs {
            None => (0..puzzle.crossings().len()).for_each(|arc| {
                self.queue.push(arc);
            }),
            Some(arcs) => arcs.iter().for_each(|&arc| {
                self.queue.push(arc);
            }),
        }

        let result = self.propagate(domains, puzzle, words);
        debug!(
            "ac3 finished with {result:?} after {} revisions, {} removals",
            self.revisions, self.removals
        );
        result
    }

    /// Runs AC-3 starting from the arcs pointing into `slot`, i.e. every
    /// (z, `slot`) for each neighbour z. Used after `slot`'s domain has been
    /// narrowed from outside.
    pub fn ac3_into(
        &mut self,
        domains: &mut Domains,
        puzzle: &Puzzle,
        words: &WordList,
        slot: SlotId,
    ) -> ArcConsistency {
        self.queue.clear();
        for crossing in puzzle.crossings_from(slot) {
            self.queue.push(crossing.reverse);
        }
        self.propagate(domains, puzzle, words)
    }

    fn propagate(
        &mut self,
        domains: &mut Domains,
        puzzle: &Puzzle,
        words: &WordList,
    ) -> ArcConsistency {
        while let Some(arc) = self.queue.pop() {
            if !self.revise(domains, puzzle, words, arc) {
                continue;
            }

            let crossing = puzzle.crossing(arc);
            let (x, y) = (crossing.slot, crossing.other);

            if domains.is_empty(x) {
                trace!("domain of slot {x} wiped out by slot {y}");
                self.queue.clear();
                return ArcConsistency::Wipeout(x);
            }

            for incoming in puzzle.crossings_from(x) {
                if incoming.other != y {
                    self.queue.push(incoming.reverse);
                }
            }
        }

        ArcConsistency::Consistent
    }
}

/// Removes from the domain of `arc.slot` every word with no support in the
/// domain of `arc.other`. Returns the number of words removed.
///
/// Words too short to reach the shared cell neither give nor get support,
/// so domains that have not been through node consistency are fine.
fn revise_crossing(
    domains: &mut Domains,
    puzzle: &Puzzle,
    words: &WordList,
    arc: CrossingId,
) -> usize {
    let crossing = puzzle.crossing(arc);

    let supported: FxHashSet<char> = domains[crossing.other]
        .iter()
        .filter_map(|w| words[w].get(crossing.other_index))
        .collect();

    domains.get_mut(crossing.slot).retain(|&w| {
        words[w]
            .get(crossing.index)
            .is_some_and(|c| supported.contains(&c))
    })
}

/// Makes `x` arc consistent with `y`.
///
/// Returns whether any word was removed from the domain of `x`. Slots that do
/// not share a cell are unconstrained, so this is a no-op returning `false`
/// for them.
pub fn revise(
    domains: &mut Domains,
    puzzle: &Puzzle,
    words: &WordList,
    x: SlotId,
    y: SlotId,
) -> bool {
    puzzle
        .crossing_between(x, y)
        .is_some_and(|arc| revise_crossing(domains, puzzle, words, arc) > 0)
}

/// Enforces arc consistency with a first-in first-out worklist.
///
/// `arcs` lists the initial `(x, y)` pairs to examine; `None` means every
/// pair of neighbours in both directions. Pairs that do not share a cell are
/// skipped.
pub fn ac3(
    domains: &mut Domains,
    puzzle: &Puzzle,
    words: &WordList,
    arcs: Option<&[(SlotId, SlotId)]>,
) -> ArcConsistency {
    let mut propagator = Propagator::<ArcFifo>::new(puzzle);
    match arcs {
        None => propagator.ac3(domains, puzzle, words, None),
        Some(pairs) => {
            let ids: Vec<CrossingId> = pairs
                .iter()
                .filter_map(|&(x, y)| puzzle.crossing_between(x, y))
                .collect();
            propagator.ac3(domains, puzzle, words, Some(&ids))
        }
    }
}
