#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The static puzzle model: slots derived from a grid and the crossings
//! between them.
//!
//! A crossing is stored once per ordered pair of slots, so every shared cell
//! produces two entries: (A, B) with indices `(i, j)` and (B, A) with indices
//! `(j, i)`. These ordered pairs are the arcs processed by AC-3, and each one
//! records the id of its reverse so the propagator can re-enqueue incoming
//! arcs without a lookup.
//!
//! Slot ids follow a row-major scan of the grid. At each cell an across slot
//! starting there is registered before a down slot starting there. Crossing
//! ids follow the same row-major scan over shared cells.

use crate::crossword::grid::Grid;
use crate::crossword::slot::{Direction, Slot, SlotId};
use crate::crossword::solution::Solution;
use itertools::Itertools;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Dense index of a crossing (an arc) within its [`Puzzle`].
pub type CrossingId = usize;

/// Runs shorter than this are not slots.
pub const MIN_SLOT_LENGTH: usize = 2;

/// An ordered pair of slots sharing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing {
    /// The slot whose domain is revised when this arc is processed.
    pub slot: SlotId,
    /// The slot providing support.
    pub other: SlotId,
    /// Character position of the shared cell within `slot`.
    pub index: usize,
    /// Character position of the shared cell within `other`.
    pub other_index: usize,
    /// Id of the crossing (`other`, `slot`).
    pub reverse: CrossingId,
}

/// Slots, crossings and the grid they came from. Read-only once built.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    slots: Vec<Slot>,
    crossings: Vec<Crossing>,
    crossing_ids: FxHashMap<(SlotId, SlotId), CrossingId>,
    outgoing: Vec<SmallVec<[CrossingId; 8]>>,
}

impl Puzzle {
    /// Derives slots and crossings from `grid`.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let width = grid.width();
        let mut slots = Vec::new();
        // For each cell: the (slot, position) of the across and down slot
        // covering it.
        let mut covering: Vec<[Option<(SlotId, usize)>; 2]> =
            vec![[None; 2]; grid.height() * width];

        for row in 0..grid.height() {
            for col in 0..width {
                if !grid.is_fillable(row, col) {
                    continue;
                }
                for direction in [Direction::Across, Direction::Down] {
                    let Some(slot) = slot_starting_at(&grid, row, col, direction) else {
                        continue;
                    };
                    let id = slots.len();
                    for (k, (r, c)) in slot.cells().enumerate() {
                        covering[r * width + c][direction as usize] = Some((id, k));
                    }
                    slots.push(slot);
                }
            }
        }

        let mut crossings = Vec::new();
        let mut crossing_ids = FxHashMap::default();
        let mut outgoing = vec![SmallVec::new(); slots.len()];

        for &[across, down] in &covering {
            let (Some((a, i)), Some((d, j))) = (across, down) else {
                continue;
            };
            let forward = crossings.len();
            let backward = forward + 1;
            crossings.push(Crossing {
                slot: a,
                other: d,
                index: i,
                other_index: j,
                reverse: backward,
            });
            crossings.push(Crossing {
                slot: d,
                other: a,
                index: j,
                other_index: i,
                reverse: forward,
            });
            let previous = crossing_ids.insert((a, d), forward);
            debug_assert!(previous.is_none(), "slots {a} and {d} cross twice");
            crossing_ids.insert((d, a), backward);
            outgoing[a].push(forward);
            outgoing[d].push(backward);
        }

        debug!(
            "derived {} slots and {} crossings from a {}x{} grid",
            slots.len(),
            crossings.len(),
            grid.height(),
            width
        );

        Self {
            grid,
            slots,
            crossings,
            crossing_ids,
            outgoing,
        }
    }

    /// The grid the puzzle was built from.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// All slots, indexed by [`SlotId`].
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The slot with id `id`.
    #[must_use]
    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id]
    }

    /// Number of slots.
    #[must_use]
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Finds the id of a slot by value.
    #[must_use]
    pub fn slot_id(&self, slot: &Slot) -> Option<SlotId> {
        self.slots.iter().position(|s| s == slot)
    }

    /// All crossings, indexed by [`CrossingId`].
    #[must_use]
    pub fn crossings(&self) -> &[Crossing] {
        &self.crossings
    }

    /// The crossing with id `id`.
    #[must_use]
    pub fn crossing(&self, id: CrossingId) -> &Crossing {
        &self.crossings[id]
    }

    /// Id of the arc from `x` to `y`, if the two slots share a cell.
    #[must_use]
    pub fn crossing_between(&self, x: SlotId, y: SlotId) -> Option<CrossingId> {
        self.crossing_ids.get(&(x, y)).copied()
    }

    /// The character positions `(in x, in y)` that must agree, or `None` if
    /// `x` and `y` are unconstrained.
    #[must_use]
    pub fn overlap(&self, x: SlotId, y: SlotId) -> Option<(usize, usize)> {
        self.crossing_between(x, y).map(|id| {
            let crossing = &self.crossings[id];
            (crossing.index, crossing.other_index)
        })
    }

    /// Arcs leaving `x`, one per neighbour.
    pub fn crossings_from(&self, x: SlotId) -> impl Iterator<Item = &Crossing> {
        self.outgoing[x].iter().map(|&id| &self.crossings[id])
    }

    /// Neighbours of `x` in crossing order.
    pub fn neighbors(&self, x: SlotId) -> impl Iterator<Item = SlotId> {
        self.crossings_from(x).map(|crossing| crossing.other)
    }

    /// Number of neighbours of `x`.
    #[must_use]
    pub fn degree(&self, x: SlotId) -> usize {
        self.outgoing[x].len()
    }

    /// Checks that `solution` fills every slot of this puzzle with a word of
    /// the right length, uses no word twice, and agrees on every crossing.
    #[must_use]
    pub fn verify(&self, solution: &Solution) -> bool {
        if solution.len() != self.slots.len() {
            return false;
        }

        let words = solution
            .iter()
            .zip(&self.slots)
            .map(|((slot, word), expected)| {
                (slot == expected && word.chars().count() == slot.length)
                    .then(|| word.chars().collect_vec())
            })
            .collect::<Option<Vec<_>>>();

        let Some(words) = words else {
            return false;
        };

        let distinct: FxHashSet<&[char]> = words.iter().map(Vec::as_slice).collect();
        if distinct.len() != words.len() {
            return false;
        }

        self.crossings
            .iter()
            .all(|c| words[c.slot][c.index] == words[c.other][c.other_index])
    }
}

fn slot_starting_at(grid: &Grid, row: usize, col: usize, direction: Direction) -> Option<Slot> {
    let length = match direction {
        Direction::Across => {
            if col > 0 && grid.is_fillable(row, col - 1) {
                return None;
            }
            (col..grid.width())
                .take_while(|&c| grid.is_fillable(row, c))
                .count()
        }
        Direction::Down => {
            if row > 0 && grid.is_fillable(row - 1, col) {
                return None;
            }
            (row..grid.height())
                .take_while(|&r| grid.is_fillable(r, col))
                .count()
        }
    };

    (length >= MIN_SLOT_LENGTH).then(|| Slot::new(row, col, length, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(text: &str) -> Puzzle {
        Puzzle::new(text.parse().unwrap())
    }

    #[test]
    fn test_slots_are_maximal_runs() {
        let p = puzzle("___#\n#__#\n___#");
        assert_eq!(
            p.slots(),
            &[
                Slot::new(0, 0, 3, Direction::Across),
                Slot::new(0, 1, 3, Direction::Down),
                Slot::new(0, 2, 3, Direction::Down),
                Slot::new(1, 1, 2, Direction::Across),
                Slot::new(2, 0, 3, Direction::Across),
            ]
        );
    }

    #[test]
    fn test_single_cells_are_not_slots() {
        let p = puzzle("_#_\n###\n_#_");
        assert_eq!(p.num_slots(), 0);
        assert!(p.crossings().is_empty());
    }

    #[test]
    fn test_overlap_indices() {
        // Across "___" on row 1, down "____" in column 2.
        let p = puzzle("##_\n___\n##_\n##_");
        let across = p.slot_id(&Slot::new(1, 0, 3, Direction::Across)).unwrap();
        let down = p.slot_id(&Slot::new(0, 2, 4, Direction::Down)).unwrap();
        assert_eq!(p.overlap(across, down), Some((2, 1)));
        assert_eq!(p.overlap(down, across), Some((1, 2)));
    }

    #[test]
    fn test_overlap_absent_for_disjoint_slots() {
        let p = puzzle("___\n###\n___");
        assert_eq!(p.num_slots(), 2);
        assert_eq!(p.overlap(0, 1), None);
        assert_eq!(p.degree(0), 0);
        assert_eq!(p.neighbors(1).count(), 0);
    }

    #[test]
    fn test_crossings_are_symmetric() {
        let p = puzzle("_____\n_#_#_\n_____\n_#_#_\n_____");
        for (id, c) in p.crossings().iter().enumerate() {
            let r = p.crossing(c.reverse);
            assert_eq!(r.reverse, id);
            assert_eq!((r.slot, r.other), (c.other, c.slot));
            assert_eq!((r.index, r.other_index), (c.other_index, c.index));
            assert!(c.index < p.slot(c.slot).length);
            assert!(c.other_index < p.slot(c.other).length);
            assert_eq!(
                p.slot(c.slot).cell(c.index),
                p.slot(c.other).cell(c.other_index)
            );
        }
        // Three across and three down words, each crossing all three others.
        assert_eq!(p.num_slots(), 6);
        assert_eq!(p.crossings().len(), 18);
        assert!((0..6).all(|s| p.degree(s) == 3));
    }

    #[test]
    fn test_neighbors_match_overlaps() {
        let p = puzzle("_____\n_#_#_\n_____");
        for x in 0..p.num_slots() {
            for y in 0..p.num_slots() {
                let is_neighbor = p.neighbors(x).contains(&y);
                assert_eq!(is_neighbor, p.overlap(x, y).is_some());
            }
        }
    }
}
