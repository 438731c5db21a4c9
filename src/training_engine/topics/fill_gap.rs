use rand::Rng;
use crate::training_engine::{
    helpers::{choice_options, coin, question_id},
    models::{GameKind, GameRules, GapQuestion},
    months::{MONTHS, MONTH_COUNT},
    session::Game,
};

/// Months shown in a row.
pub const RUN_LEN: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct FillGap;

impl Game for FillGap {
    type Question = GapQuestion;
    type Answer = u8;

    fn kind(&self) -> GameKind {
        GameKind::FillGap
    }

    fn generate<R: Rng>(&self, rng: &mut R, _today_month: u8, _rules: &GameRules) -> GapQuestion {
        generate(rng)
    }

    fn is_correct(&self, question: &GapQuestion, answer: &u8) -> bool {
        question.correct.id == *answer
    }
}

pub fn generate<R: Rng>(rng: &mut R) -> GapQuestion {
    let id = question_id(GameKind::FillGap, rng);
    let start = rng.gen_range(0..=MONTH_COUNT - RUN_LEN);
    let gap_index = if coin(rng, 0.5) { 1 } else { 2 };
    build(rng, id, start, gap_index)
}

/// Hide run position `gap_index` (1 or 2) of the four months from `start`.
///
/// The run never wraps past Dzulhijjah and the gap is never an endpoint, so
/// both neighbours of the missing month are always visible.
pub fn build<R: Rng>(rng: &mut R, question_id: String, start: usize, gap_index: usize) -> GapQuestion {
    debug_assert!(start + RUN_LEN <= MONTH_COUNT, "run from {start} leaves the table");
    debug_assert!((1..RUN_LEN - 1).contains(&gap_index), "gap {gap_index} is an endpoint");
    let start = start.min(MONTH_COUNT - RUN_LEN);
    let gap_index = gap_index.clamp(1, RUN_LEN - 2);

    let run = &MONTHS[start..start + RUN_LEN];
    let correct = run[gap_index];
    let sequence = run
        .iter()
        .enumerate()
        .map(|(i, m)| (i != gap_index).then_some(*m))
        .collect();

    GapQuestion {
        question_id,
        sequence,
        gap_index,
        correct,
        options: choice_options(rng, correct, &[]),
    }
}
