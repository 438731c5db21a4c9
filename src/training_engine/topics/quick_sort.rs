use rand::Rng;
use crate::training_engine::{
    helpers::{order_round, question_id},
    models::{GameKind, GameRules, OrderRound},
    months::{MONTHS, MONTH_COUNT},
    session::Game,
};

/// Months per round.
pub const ITEMS_COUNT: usize = 5;

/// Order five consecutive months, as many rounds as fit in twenty seconds.
/// Arrange with [`OrderBoard`](super::sorting::OrderBoard).
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl Game for QuickSort {
    type Question = OrderRound;
    type Answer = Vec<u8>;

    fn kind(&self) -> GameKind {
        GameKind::QuickSort
    }

    fn generate<R: Rng>(&self, rng: &mut R, _today_month: u8, _rules: &GameRules) -> OrderRound {
        generate(rng)
    }

    fn is_correct(&self, question: &OrderRound, answer: &Vec<u8>) -> bool {
        *answer == question.correct_order
    }
}

pub fn generate<R: Rng>(rng: &mut R) -> OrderRound {
    let id = question_id(GameKind::QuickSort, rng);
    let start = rng.gen_range(0..=MONTH_COUNT - ITEMS_COUNT);
    build(rng, id, start)
}

/// Round over the run of five starting at table index `start`.
pub fn build<R: Rng>(rng: &mut R, question_id: String, start: usize) -> OrderRound {
    debug_assert!(start + ITEMS_COUNT <= MONTH_COUNT, "run from {start} leaves the table");
    let start = start.min(MONTH_COUNT - ITEMS_COUNT);
    order_round(rng, GameKind::QuickSort, question_id, &MONTHS[start..start + ITEMS_COUNT])
}
