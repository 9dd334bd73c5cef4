#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Backtracking search over crossword assignments.
//!
//! A solve runs in three phases:
//! 1.  **Node consistency:** every domain is cut down to the words of the
//!     right length. An empty domain here means the puzzle is unsatisfiable.
//! 2.  **Arc consistency:** AC-3 runs over every arc. A wipeout means the
//!     puzzle is unsatisfiable and the search never starts.
//! 3.  **Search:** a slot is chosen by the configured selector, its words are
//!     tried in the configured order, and each word that is consistent with
//!     the current assignment is pushed before recursing. When the recursion
//!     fails the word is popped and the next one is tried. Running out of
//!     words sends the failure to the caller frame.
//!
//! Failure inside the search is ordinary control flow. Only exhausting the
//! root slot turns into [`Outcome::Unsatisfiable`].

use crate::crossword::assignment::Assignment;
use crate::crossword::consistency::{ArcConsistency, Propagator};
use crate::crossword::domain::Domains;
use crate::crossword::inference::Inference;
use crate::crossword::puzzle::Puzzle;
use crate::crossword::solution::Solution;
use crate::crossword::solver::{DefaultConfig, Outcome, SolutionStats, Solver, SolverConfig};
use crate::crossword::value_ordering::ValueOrdering;
use crate::crossword::variable_selection::VariableSelection;
use crate::crossword::words::WordList;
use log::{debug, trace};

/// How a search frame ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Search {
    Found,
    Exhausted,
    LimitReached,
}

/// Recursive backtracking solver.
///
/// Owns the puzzle and the word list. Every call to [`Solver::solve`]
/// rebuilds the domains and the assignment, so solving twice gives the same
/// result.
#[derive(Debug, Clone)]
pub struct Backtracking<Config: SolverConfig = DefaultConfig> {
    puzzle: Puzzle,
    words: WordList,
    domains: Domains,
    assignment: Assignment,
    selector: Config::Selector,
    value_order: Config::ValueOrder,
    propagator: Propagator<Config::Queue>,
    inference: Config::Inference,
    node_limit: Option<usize>,
    seed: Option<u64>,
    node_removals: usize,
    stats: SolutionStats,
}

impl<Config: SolverConfig> Solver<Config> for Backtracking<Config> {
    fn new(puzzle: Puzzle, words: WordList) -> Self {
        let domains = Domains::initialize(&puzzle, &words);
        let assignment = Assignment::new(puzzle.num_slots());
        let selector = Config::Selector::new(&puzzle);
        let value_order = Config::ValueOrder::new(&puzzle);
        let propagator = Propagator::new(&puzzle);

        Self {
            puzzle,
            words,
            domains,
            assignment,
            selector,
            value_order,
            propagator,
            inference: Config::Inference::default(),
            node_limit: None,
            seed: None,
            node_removals: 0,
            stats: SolutionStats::default(),
        }
    }

    fn solve(&mut self) -> Outcome {
        self.reset();

        self.node_removals = self
            .domains
            .enforce_node_consistency(&self.puzzle, &self.words);

        if let Some(slot) = self.domains.first_empty() {
            debug!(
                "slot {} has no word of length {}",
                slot,
                self.puzzle.slot(slot).length
            );
            self.stats.wiped_out_before_search = true;
            self.collect_stats();
            return Outcome::Unsatisfiable;
        }

        let result = self
            .propagator
            .ac3(&mut self.domains, &self.puzzle, &self.words, None);

        if let ArcConsistency::Wipeout(slot) = result {
            debug!("arc consistency emptied the domain of slot {slot}");
            self.stats.wiped_out_before_search = true;
            self.collect_stats();
            return Outcome::Unsatisfiable;
        }

        let outcome = match self.backtrack() {
            Search::Found => {
                Outcome::Solved(Solution::new(&self.puzzle, &self.words, &self.assignment))
            }
            Search::Exhausted => Outcome::Unsatisfiable,
            Search::LimitReached => Outcome::LimitReached,
        };

        self.collect_stats();
        debug!(
            "search finished ({}) after {} nodes, {} backtracks",
            match outcome {
                Outcome::Solved(_) => "solved",
                Outcome::Unsatisfiable => "unsatisfiable",
                Outcome::LimitReached => "limit reached",
            },
            self.stats.nodes,
            self.stats.backtracks
        );
        outcome
    }

    fn stats(&self) -> SolutionStats {
        self.stats
    }
}

impl<Config: SolverConfig> Backtracking<Config> {
    /// Caps the number of trial assignments. Reaching the cap ends the solve
    /// with [`Outcome::LimitReached`].
    #[must_use]
    pub const fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Seeds the variable selector at the start of every solve. Only matters
    /// for randomised selectors.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The puzzle being solved.
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The word list being drawn on.
    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    /// The domains as left by the most recent solve.
    #[must_use]
    pub const fn domains(&self) -> &Domains {
        &self.domains
    }

    fn reset(&mut self) {
        self.domains = Domains::initialize(&self.puzzle, &self.words);
        self.assignment = Assignment::new(self.puzzle.num_slots());
        self.selector = Config::Selector::new(&self.puzzle);
        if let Some(seed) = self.seed {
            self.selector.reseed(seed);
        }
        self.value_order = Config::ValueOrder::new(&self.puzzle);
        self.propagator = Propagator::new(&self.puzzle);
        self.node_removals = 0;
        self.stats = SolutionStats::default();
    }

    fn collect_stats(&mut self) {
        self.stats.revisions = self.propagator.revisions();
        self.stats.removals = self.node_removals + self.propagator.removals();
    }

    fn backtrack(&mut self) -> Search {
        if self.assignment.is_complete() {
            return Search::Found;
        }

        let Some(slot) = self
            .selector
            .pick(&self.puzzle, &self.domains, &self.assignment)
        else {
            return Search::Found;
        };

        let values = self.value_order.order(
            &self.puzzle,
            &self.words,
            &self.domains,
            &self.assignment,
            slot,
        );

        for word in values {
            if !self
                .assignment
                .admits(&self.puzzle, &self.words, slot, word)
            {
                continue;
            }

            if self.node_limit.is_some_and(|limit| self.stats.nodes >= limit) {
                return Search::LimitReached;
            }

            self.stats.nodes += 1;
            trace!("slot {slot} <- {}", self.words[word].as_str());
            self.assignment.push(slot, word);
            self.stats.max_depth = self.stats.max_depth.max(self.assignment.len());

            let snapshot = Config::Inference::PRUNES.then(|| self.domains.clone());
            let inferred = self.inference.infer(
                &mut self.propagator,
                &mut self.domains,
                &self.puzzle,
                &self.words,
                slot,
                word,
            );

            if inferred.is_consistent() {
                match self.backtrack() {
                    Search::Exhausted => {}
                    done => return done,
                }
            }

            self.assignment.pop();
            if let Some(domains) = snapshot {
                self.domains = domains;
            }
            self.stats.backtracks += 1;
            trace!("slot {slot} -/- {}", self.words[word].as_str());
        }

        Search::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossword::arc_queue::{ArcFifo, ArcStack};
    use crate::crossword::inference::{MaintainArcConsistency, NoInference};
    use crate::crossword::slot::{Direction, Slot};
    use crate::crossword::solver::solve;
    use crate::crossword::value_ordering::{DomainOrder, LeastConstrainingValue};
    use crate::crossword::variable_selection::{FixedOrder, MinimumRemainingValues, RandomOrder};

    #[derive(Debug, Clone)]
    struct MacConfig;

    impl SolverConfig for MacConfig {
        type Selector = MinimumRemainingValues;
        type ValueOrder = LeastConstrainingValue;
        type Queue = ArcStack;
        type Inference = MaintainArcConsistency;
    }

    #[derive(Debug, Clone)]
    struct NaiveConfig;

    impl SolverConfig for NaiveConfig {
        type Selector = FixedOrder;
        type ValueOrder = DomainOrder;
        type Queue = ArcStack;
        type Inference = NoInference;
    }

    #[derive(Debug, Clone)]
    struct RandomConfig;

    impl SolverConfig for RandomConfig {
        type Selector = RandomOrder;
        type ValueOrder = LeastConstrainingValue;
        type Queue = ArcFifo;
        type Inference = NoInference;
    }

    /// A 3-letter down slot (id 0) crossing a 4-letter across slot (id 1) at
    /// index 1 of both.
    const CROSS: &str = "#_##\n____\n#_##";

    /// Three across and three down 5-letter slots crossing in a lattice.
    const LATTICE: &str = "_____\n_#_#_\n_____\n_#_#_\n_____";

    const FIVES: &[&str] = &[
        "about", "apple", "arena", "eerie", "eager", "agree", "ulcer", "inner", "alone",
        "ready", "enter", "erode", "nerve", "radar", "lemon", "theft", "apart", "phone",
        "event", "piece", "exact", "treat", "aware", "house", "quiet", "zebra", "tiger",
    ];

    fn puzzle(text: &str) -> Puzzle {
        Puzzle::new(text.parse().unwrap())
    }

    fn words(list: &[&str]) -> WordList {
        WordList::new(list).unwrap()
    }

    #[test]
    fn test_crossing_pair_agrees_on_shared_cell() {
        let p = puzzle(CROSS);
        let w = words(&["cat", "dog", "cold", "golf"]);
        let solution = solve(&p, &w).into_solution().unwrap();

        assert_eq!(solution.get(&Slot::new(0, 1, 3, Direction::Down)), Some("dog"));
        assert_eq!(solution.get(&Slot::new(1, 0, 4, Direction::Across)), Some("cold"));
        assert_eq!(solution.letter_at(1, 1), Some('o'));
        assert!(p.verify(&solution));
    }

    #[test]
    fn test_missing_length_is_unsatisfiable() {
        let mut solver: Backtracking = Solver::new(puzzle(CROSS), words(&["cat", "dog"]));
        assert_eq!(solver.solve(), Outcome::Unsatisfiable);
        assert!(solver.stats().wiped_out_before_search);
        assert_eq!(solver.stats().nodes, 0);
    }

    #[test]
    fn test_isolated_slot_takes_only_matching_word() {
        let p = puzzle("#___#");
        let w = words(&["hello", "cat", "to"]);
        let solution = solve(&p, &w).into_solution().unwrap();
        assert_eq!(solution.len(), 1);
        assert_eq!(solution.word(0), Some("cat"));
        assert_eq!(solution.letter_at(0, 2), Some('a'));
    }

    #[test]
    fn test_ac3_wipeout_skips_search() {
        let mut solver: Backtracking =
            Solver::new(puzzle(CROSS), words(&["cat", "cold", "golf"]));
        assert_eq!(solver.solve(), Outcome::Unsatisfiable);

        let stats = solver.stats();
        assert!(stats.wiped_out_before_search);
        assert_eq!(stats.nodes, 0);
        assert!(stats.revisions > 0);
    }

    #[test]
    fn test_exhausted_search_is_unsatisfiable() {
        // Across and down slots share their first letter; the only word fits
        // both but cannot be used twice.
        let mut solver: Backtracking = Solver::new(puzzle("___\n_##\n_##"), words(&["abc"]));
        assert_eq!(solver.solve(), Outcome::Unsatisfiable);

        let stats = solver.stats();
        assert!(!stats.wiped_out_before_search);
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.backtracks, 1);
    }

    #[test]
    fn test_lattice_solution_is_valid() {
        let p = puzzle(LATTICE);
        let w = words(FIVES);
        let outcome = solve(&p, &w);
        let solution = outcome.solution().expect("lattice should be solvable");

        assert!(p.verify(solution));
        assert_eq!(solution.len(), 6);
        for (slot, word) in solution.iter() {
            assert_eq!(word.chars().count(), slot.length);
            for (k, (row, col)) in slot.cells().enumerate() {
                assert_eq!(solution.letter_at(row, col), word.chars().nth(k));
            }
        }
    }

    #[test]
    fn test_solve_is_deterministic() {
        let p = puzzle(LATTICE);
        let w = words(FIVES);
        let mut solver: Backtracking = Solver::new(p.clone(), w.clone());

        let first = solver.solve();
        let first_stats = solver.stats();
        let second = solver.solve();

        assert_eq!(first, second);
        assert_eq!(first_stats, solver.stats());
        assert_eq!(first, solve(&p, &w));
    }

    #[test]
    fn test_domains_are_arc_consistent_after_solve() {
        let mut solver: Backtracking = Solver::new(puzzle(LATTICE), words(FIVES));
        solver.solve();

        let (p, w, d) = (solver.puzzle(), solver.words(), solver.domains());
        for c in p.crossings() {
            for x in d[c.slot].iter() {
                assert!(d[c.other]
                    .iter()
                    .any(|y| w[x].char_at(c.index) == w[y].char_at(c.other_index)));
            }
        }
    }

    #[test]
    fn test_configurations_agree() {
        let p = puzzle(LATTICE);
        let w = words(FIVES);

        let mut mac: Backtracking<MacConfig> = Solver::new(p.clone(), w.clone());
        let mut naive: Backtracking<NaiveConfig> = Solver::new(p.clone(), w.clone());
        let mut random =
            Backtracking::<RandomConfig>::new(p.clone(), w.clone()).with_seed(7);

        for outcome in [mac.solve(), naive.solve(), random.solve()] {
            assert!(p.verify(outcome.solution().unwrap()));
        }

        let unsat = words(&["cat", "cold", "golf"]);
        let mut mac: Backtracking<MacConfig> = Solver::new(puzzle(CROSS), unsat.clone());
        let mut naive: Backtracking<NaiveConfig> = Solver::new(puzzle(CROSS), unsat);
        assert!(mac.solve().is_unsatisfiable());
        assert!(naive.solve().is_unsatisfiable());
    }

    #[test]
    fn test_mac_restores_domains_on_backtrack() {
        let mut solver: Backtracking<MacConfig> =
            Solver::new(puzzle("___\n_##\n_##"), words(&["abc", "axe"]));
        let solution = solver.solve().into_solution().unwrap();
        assert_ne!(solution.word(0), solution.word(1));
        assert_eq!(solution.letter_at(0, 0), Some('a'));
    }

    #[test]
    fn test_random_order_is_reproducible_with_seed() {
        let p = puzzle(LATTICE);
        let w = words(FIVES);
        let mut first =
            Backtracking::<RandomConfig>::new(p.clone(), w.clone()).with_seed(99);
        let mut second = Backtracking::<RandomConfig>::new(p, w).with_seed(99);

        assert_eq!(first.solve(), second.solve());
        assert_eq!(first.stats(), second.stats());
    }

    #[test]
    fn test_node_limit() {
        let mut solver =
            Backtracking::<DefaultConfig>::new(puzzle(CROSS), words(&["cat", "dog", "cold", "golf"]))
                .with_node_limit(0);
        assert_eq!(solver.solve(), Outcome::LimitReached);
        assert_eq!(solver.stats().nodes, 0);

        let mut solver =
            Backtracking::<DefaultConfig>::new(puzzle(CROSS), words(&["cat", "dog", "cold", "golf"]))
                .with_node_limit(2);
        assert!(solver.solve().solution().is_some());
        assert_eq!(solver.stats().nodes, 2);
    }

    #[test]
    fn test_puzzle_without_slots_is_trivially_solved() {
        let p = puzzle("_#_\n#_#");
        let solution = solve(&p, &words(&["a"])).into_solution().unwrap();
        assert!(solution.is_empty());
        assert!(p.verify(&solution));
        assert_eq!(solution.letter_at(0, 0), None);
    }

    #[test]
    fn test_max_depth_tracks_assignment() {
        let mut solver: Backtracking = Solver::new(puzzle(LATTICE), words(FIVES));
        solver.solve();
        assert_eq!(solver.stats().max_depth, 6);
    }
}
