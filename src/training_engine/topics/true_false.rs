use rand::Rng;
use crate::training_engine::{
    helpers::{coin, neighbour, question_id},
    models::{Claim, GameKind, GameRules, Month, PromptKind, TrueFalseQuestion},
    months::{self, MONTH_COUNT},
    session::Game,
};

const KINDS: [PromptKind; 3] = [PromptKind::Position, PromptKind::Before, PromptKind::After];

#[derive(Debug, Clone, Copy, Default)]
pub struct TrueFalse;

impl Game for TrueFalse {
    type Question = TrueFalseQuestion;
    /// The player's verdict.
    type Answer = bool;

    fn kind(&self) -> GameKind {
        GameKind::TrueFalse
    }

    fn generate<R: Rng>(&self, rng: &mut R, _today_month: u8, _rules: &GameRules) -> TrueFalseQuestion {
        generate(rng)
    }

    fn is_correct(&self, question: &TrueFalseQuestion, answer: &bool) -> bool {
        question.is_true == *answer
    }
}

/// Random statement; true and false are equally likely.
pub fn generate<R: Rng>(rng: &mut R) -> TrueFalseQuestion {
    let id = question_id(GameKind::TrueFalse, rng);
    let kind = KINDS[rng.gen_range(0..KINDS.len())];
    let should_be_true = coin(rng, 0.5);
    let target = *months::at_index(rng.gen_range(0..MONTH_COUNT));
    build(rng, id, kind, target, should_be_true)
}

/// Build a statement about `target`.
///
/// A false position claim names one of the other eleven positions; a false
/// neighbour claim names a month that is neither the target nor its real
/// neighbour.
pub fn build<R: Rng>(
    rng: &mut R, question_id: String, kind: PromptKind, target: Month, should_be_true: bool,
) -> TrueFalseQuestion {
    let claim = match kind {
        PromptKind::Position | PromptKind::Ordinal => {
            if should_be_true {
                Claim::Position(target.id)
            } else {
                // Uniform over 1..=12 minus the real position.
                let pos = rng.gen_range(1..=11u8);
                Claim::Position(if pos >= target.id { pos + 1 } else { pos })
            }
        }
        PromptKind::Before | PromptKind::After => {
            let truth = neighbour(kind, target);
            if should_be_true {
                Claim::Neighbour(truth)
            } else {
                let wrong = months::months_except(&[truth.id, target.id]);
                Claim::Neighbour(wrong[rng.gen_range(0..wrong.len())])
            }
        }
    };

    let statement = match (kind, claim) {
        (PromptKind::Before, Claim::Neighbour(m)) => format!("Sebelum {} adalah {}", target.name, m.name),
        (PromptKind::After, Claim::Neighbour(m)) => format!("Setelah {} adalah {}", target.name, m.name),
        (_, Claim::Position(pos)) => format!("{} adalah bulan ke-{} Hijriyah", target.name, pos),
        (_, Claim::Neighbour(m)) => format!("{} adalah {}", target.name, m.name),
    };
    debug_assert_eq!(claim_holds(kind, target, claim), should_be_true);

    TrueFalseQuestion {
        question_id,
        kind,
        target,
        claim,
        statement,
        is_true: should_be_true,
    }
}

/// Whether `claim` is actually true of `target`.
pub fn claim_holds(kind: PromptKind, target: Month, claim: Claim) -> bool {
    match claim {
        Claim::Position(pos) => pos == target.id,
        Claim::Neighbour(m) => m.id == neighbour(kind, target).id,
    }
}
