#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Inference run by the search after each trial assignment.

use crate::crossword::arc_queue::ArcQueue;
use crate::crossword::consistency::{ArcConsistency, Propagator};
use crate::crossword::domain::Domains;
use crate::crossword::puzzle::Puzzle;
use crate::crossword::slot::SlotId;
use crate::crossword::words::{WordId, WordList};
use std::fmt::Debug;

/// Narrows domains after `word` has been tentatively assigned to `slot`.
pub trait Inference: Debug + Clone + Default {
    /// Whether [`Inference::infer`] may remove candidates. When it can, the
    /// search snapshots the domains before each trial and restores them on
    /// backtrack.
    const PRUNES: bool;

    /// Runs the inference. A wipeout means the trial assignment cannot be
    /// extended.
    fn infer<Q: ArcQueue>(
        &self,
        propagator: &mut Propagator<Q>,
        domains: &mut Domains,
        puzzle: &Puzzle,
        words: &WordList,
        slot: SlotId,
        word: WordId,
    ) -> ArcConsistency;
}

/// Plain backtracking: domains are left as AC-3 left them before the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoInference;

impl Inference for NoInference {
    const PRUNES: bool = false;

    fn infer<Q: ArcQueue>(
        &self,
        _: &mut Propagator<Q>,
        _: &mut Domains,
        _: &Puzzle,
        _: &WordList,
        _: SlotId,
        _: WordId,
    ) -> ArcConsistency {
        ArcConsistency::Consistent
    }
}

/// Maintaining arc consistency: the slot's domain is narrowed to the chosen
/// word and AC-3 runs from every arc pointing into the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaintainArcConsistency;

impl Inference for MaintainArcConsistency {
    const PRUNES: bool = true;

    fn infer<Q: ArcQueue>(
        &self,
        propagator: &mut Propagator<Q>,
        domains: &mut Domains,
        puzzle: &Puzzle,
        words: &WordList,
        slot: SlotId,
        word: WordId,
    ) -> ArcConsistency {
        domains.get_mut(slot).restrict_to(word);
        propagator.ac3_into(domains, puzzle, words, slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossword::arc_queue::ArcFifo;

    #[test]
    fn test_mac_prunes_neighbors() {
        let puzzle = Puzzle::new("#_##\n____\n#_##".parse().unwrap());
        let words = WordList::new(["cat", "dog", "cold", "cart"]).unwrap();
        let mut domains = Domains::initialize(&puzzle, &words);
        domains.enforce_node_consistency(&puzzle, &words);
        let mut propagator = Propagator::<ArcFifo>::new(&puzzle);

        let result = MaintainArcConsistency.infer(
            &mut propagator,
            &mut domains,
            &puzzle,
            &words,
            0,
            words.id("dog").unwrap(),
        );
        assert_eq!(result, ArcConsistency::Consistent);
        assert_eq!(domains.len(0), 1);
        assert!(domains.contains(1, words.id("cold").unwrap()));
        assert!(!domains.contains(1, words.id("cart").unwrap()));
    }

    #[test]
    fn test_mac_reports_wipeout() {
        let puzzle = Puzzle::new("#_##\n____\n#_##".parse().unwrap());
        let words = WordList::new(["cat", "dog", "cart"]).unwrap();
        let mut domains = Domains::initialize(&puzzle, &words);
        domains.enforce_node_consistency(&puzzle, &words);
        let mut propagator = Propagator::<ArcFifo>::new(&puzzle);

        let result = MaintainArcConsistency.infer(
            &mut propagator,
            &mut domains,
            &puzzle,
            &words,
            0,
            words.id("dog").unwrap(),
        );
        assert_eq!(result, ArcConsistency::Wipeout(1));
    }

    #[test]
    fn test_no_inference_leaves_domains() {
        let puzzle = Puzzle::new("#_##\n____\n#_##".parse().unwrap());
        let words = WordList::new(["cat", "dog", "cart"]).unwrap();
        let mut domains = Domains::initialize(&puzzle, &words);
        let before = domains.clone();
        let mut propagator = Propagator::<ArcFifo>::new(&puzzle);

        let result = NoInference.infer(&mut propagator, &mut domains, &puzzle, &words, 0, 1);
        assert!(result.is_consistent());
        assert_eq!(domains, before);
    }
}
