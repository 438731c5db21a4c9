//! Put the whole year back in order.
//!
//! [`OrderBoard`] holds the arrangement the player is editing; both the
//! full sort and the quick sort use it. A wrong check re-opens the same
//! arrangement after the game's retry delay.

use rand::Rng;
use crate::training_engine::{
    helpers::{order_round, question_id},
    models::{GameKind, GameRules, Month, OrderRound},
    months::MONTHS,
    session::Game,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Sorting;

impl Game for Sorting {
    type Question = OrderRound;
    /// Month ids in the order the player arranged them.
    type Answer = Vec<u8>;

    fn kind(&self) -> GameKind {
        GameKind::Sorting
    }

    fn generate<R: Rng>(&self, rng: &mut R, _today_month: u8, _rules: &GameRules) -> OrderRound {
        generate(rng)
    }

    fn is_correct(&self, question: &OrderRound, answer: &Vec<u8>) -> bool {
        *answer == question.correct_order
    }
}

pub fn generate<R: Rng>(rng: &mut R) -> OrderRound {
    let id = question_id(GameKind::Sorting, rng);
    order_round(rng, GameKind::Sorting, id, &MONTHS)
}

/// Editable arrangement of an [`OrderRound`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBoard {
    items: Vec<Month>,
}

impl OrderBoard {
    pub fn new(round: &OrderRound) -> Self {
        Self { items: round.items.clone() }
    }

    pub fn items(&self) -> &[Month] {
        &self.items
    }

    /// Swap `index` with the item above it.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.items.len() {
            return false;
        }
        self.items.swap(index - 1, index);
        true
    }

    /// Swap `index` with the item below it.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.items.len() {
            return false;
        }
        self.items.swap(index, index + 1);
        true
    }

    /// Drag `from` to `to`, shifting the items in between.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    /// Current order as month ids, ready to submit.
    pub fn order(&self) -> Vec<u8> {
        self.items.iter().map(|m| m.id).collect()
    }

    pub fn is_sorted(&self) -> bool {
        self.items.windows(2).all(|w| w[0].id < w[1].id)
    }
}
