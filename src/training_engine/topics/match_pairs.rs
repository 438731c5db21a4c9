//! Match month names with their positions.
//!
//! A round shows four months on the left and their positions, shuffled, on
//! the right. [`MatchBoard`] tracks the click flow: pick a name, then a
//! position. A correct pair locks in; a wrong pair is flagged until the shell
//! clears it after [`MISMATCH_FLASH_MS`]. Once all four are locked in, the
//! board's pairing is submitted to the session as the round's answer.

use std::collections::BTreeMap;

use rand::Rng;
use crate::training_engine::{
    helpers::question_id,
    models::{GameKind, GameRules, MatchRound},
    months::MONTHS,
    session::Game,
    shuffle::shuffle,
};

/// Pairs per round.
pub const PAIR_COUNT: usize = 4;

/// How long a wrong pair stays highlighted.
pub const MISMATCH_FLASH_MS: u64 = 600;

#[derive(Debug, Clone, Copy, Default)]
pub struct MatchPairs;

impl Game for MatchPairs {
    type Question = MatchRound;
    /// `(month id, position)` pairs.
    type Answer = Vec<(u8, u8)>;

    fn kind(&self) -> GameKind {
        GameKind::MatchPairs
    }

    fn generate<R: Rng>(&self, rng: &mut R, _today_month: u8, _rules: &GameRules) -> MatchRound {
        generate(rng)
    }

    fn is_correct(&self, question: &MatchRound, answer: &Vec<(u8, u8)>) -> bool {
        let mut given = answer.clone();
        given.sort_unstable();
        let mut expected = question.solution();
        expected.sort_unstable();
        given == expected
    }
}

pub fn generate<R: Rng>(rng: &mut R) -> MatchRound {
    let id = question_id(GameKind::MatchPairs, rng);
    let items: Vec<_> = shuffle(rng, &MONTHS).into_iter().take(PAIR_COUNT).collect();
    let positions = shuffle(rng, &items.iter().map(|m| m.id).collect::<Vec<u8>>());
    MatchRound { question_id: id, items, positions }
}

/// Result of picking a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// No name selected, or the position is already taken.
    Ignored,
    Matched,
    /// The last pair of the round locked in.
    Completed,
    Mismatch { month_id: u8, position: u8 },
}

/// Click-by-click state of one match round.
#[derive(Debug, Clone)]
pub struct MatchBoard {
    round: MatchRound,
    selected: Option<u8>,
    matches: BTreeMap<u8, u8>,
    mismatch: Option<(u8, u8)>,
}

impl MatchBoard {
    pub fn new(round: &MatchRound) -> Self {
        Self {
            round: round.clone(),
            selected: None,
            matches: BTreeMap::new(),
            mismatch: None,
        }
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    pub fn mismatch(&self) -> Option<(u8, u8)> {
        self.mismatch
    }

    pub fn is_matched(&self, month_id: u8) -> bool {
        self.matches.contains_key(&month_id)
    }

    pub fn is_complete(&self) -> bool {
        self.matches.len() == self.round.items.len()
    }

    /// Select a name. Returns false for matched or unknown months.
    pub fn select_name(&mut self, month_id: u8) -> bool {
        let known = self.round.items.iter().any(|m| m.id == month_id);
        if !known || self.is_matched(month_id) {
            return false;
        }
        self.selected = Some(month_id);
        self.mismatch = None;
        true
    }

    /// Pair the selected name with `position`.
    pub fn select_position(&mut self, position: u8) -> PairOutcome {
        let Some(month_id) = self.selected else {
            return PairOutcome::Ignored;
        };
        if self.matches.values().any(|&p| p == position) {
            return PairOutcome::Ignored;
        }
        if month_id != position {
            self.mismatch = Some((month_id, position));
            return PairOutcome::Mismatch { month_id, position };
        }
        self.matches.insert(month_id, position);
        self.selected = None;
        if self.is_complete() {
            PairOutcome::Completed
        } else {
            PairOutcome::Matched
        }
    }

    /// Drop the highlighted wrong pair and the selection.
    pub fn clear_mismatch(&mut self) {
        self.mismatch = None;
        self.selected = None;
    }

    /// The pairs locked in so far.
    pub fn pairing(&self) -> Vec<(u8, u8)> {
        self.matches.iter().map(|(&id, &pos)| (id, pos)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn round(seed: u64) -> MatchRound {
        generate(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn round_has_four_distinct_months_and_matching_positions() {
        for seed in 0..50 {
            let r = round(seed);
            let mut ids: Vec<u8> = r.items.iter().map(|m| m.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), PAIR_COUNT);
            let mut positions = r.positions.clone();
            positions.sort_unstable();
            assert_eq!(positions, ids);
        }
    }

    #[test]
    fn board_completes_with_correct_pairs() {
        let r = round(1);
        let mut board = MatchBoard::new(&r);
        let ids: Vec<u8> = r.items.iter().map(|m| m.id).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(board.select_name(*id));
            let outcome = board.select_position(*id);
            if i + 1 == ids.len() {
                assert_eq!(outcome, PairOutcome::Completed);
            } else {
                assert_eq!(outcome, PairOutcome::Matched);
            }
        }
        assert!(MatchPairs.is_correct(&r, &board.pairing()));
    }

    #[test]
    fn wrong_pair_is_flagged_and_not_locked() {
        let r = round(2);
        let mut board = MatchBoard::new(&r);
        let a = r.items[0].id;
        let b = r.items[1].id;
        board.select_name(a);
        assert_eq!(board.select_position(b), PairOutcome::Mismatch { month_id: a, position: b });
        assert!(!board.is_matched(a));
        board.clear_mismatch();
        assert!(board.mismatch().is_none());
        assert!(board.selected().is_none());
    }

    #[test]
    fn position_without_selection_is_ignored() {
        let r = round(3);
        let mut board = MatchBoard::new(&r);
        assert_eq!(board.select_position(r.items[0].id), PairOutcome::Ignored);
    }

    #[test]
    fn matched_names_cannot_be_reselected() {
        let r = round(4);
        let mut board = MatchBoard::new(&r);
        let a = r.items[0].id;
        board.select_name(a);
        board.select_position(a);
        assert!(!board.select_name(a));
        assert!(!board.select_name(13));
    }

    #[test]
    fn incomplete_or_wrong_pairing_is_not_correct() {
        let r = round(5);
        let ids: Vec<u8> = r.items.iter().map(|m| m.id).collect();
        let partial: Vec<(u8, u8)> = ids.iter().take(3).map(|&id| (id, id)).collect();
        assert!(!MatchPairs.is_correct(&r, &partial));
        let mut crossed: Vec<(u8, u8)> = ids.iter().map(|&id| (id, id)).collect();
        crossed[0].1 = ids[1];
        crossed[1].1 = ids[0];
        assert!(!MatchPairs.is_correct(&r, &crossed));
    }
}
