use rand::Rng;
use crate::training_engine::{
    helpers::{choice_options, neighbour, pick_target, question_id},
    models::{ChoiceQuestion, GameKind, GameRules, Month, OptionLabel, PromptKind},
    session::Game,
};

const KINDS: [PromptKind; 3] = [PromptKind::Position, PromptKind::Before, PromptKind::After];

/// The position quiz: "which month of the year is X", or its neighbours.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionQuiz;

impl Game for PositionQuiz {
    type Question = ChoiceQuestion;
    /// Month id of the chosen option.
    type Answer = u8;

    fn kind(&self) -> GameKind {
        GameKind::PositionQuiz
    }

    fn generate<R: Rng>(&self, rng: &mut R, today_month: u8, rules: &GameRules) -> ChoiceQuestion {
        generate(rng, today_month, rules.today_bias)
    }

    fn is_correct(&self, question: &ChoiceQuestion, answer: &u8) -> bool {
        question.correct.id == *answer
    }
}

pub fn generate<R: Rng>(rng: &mut R, today_month: u8, bias: f64) -> ChoiceQuestion {
    let id = question_id(GameKind::PositionQuiz, rng);
    let kind = KINDS[rng.gen_range(0..KINDS.len())];
    let target = pick_target(rng, today_month, bias);
    build(rng, id, kind, target)
}

/// Build a quiz question for `target`.
///
/// Muharram has no "before" and Dzulhijjah no "after" within one year, so
/// those two cases ask for the last and first months instead. The answer is
/// the same month the wrapped neighbour would give.
pub fn build<R: Rng>(rng: &mut R, question_id: String, kind: PromptKind, target: Month) -> ChoiceQuestion {
    let correct = neighbour(kind, target);
    let (prompt, label, boundary) = match kind {
        PromptKind::Position => (
            format!("Bulan {} adalah bulan ke-berapa dalam kalender Hijriyah?", target.name),
            OptionLabel::Position,
            false,
        ),
        PromptKind::Ordinal => (
            format!("Bulan ke-{} dalam kalender Hijriyah adalah …", target.id),
            OptionLabel::Name,
            false,
        ),
        PromptKind::Before if target.id == 1 => (
            format!(
                "Bulan {} adalah bulan pertama. Bulan apa yang terakhir dalam kalender Hijriyah?",
                target.name
            ),
            OptionLabel::Name,
            true,
        ),
        PromptKind::Before => (
            format!("Bulan apa yang berada SEBELUM bulan {}?", target.name),
            OptionLabel::Name,
            false,
        ),
        PromptKind::After if target.id == 12 => (
            format!(
                "Bulan {} adalah bulan terakhir. Bulan apa yang pertama dalam kalender Hijriyah?",
                target.name
            ),
            OptionLabel::Name,
            true,
        ),
        PromptKind::After => (
            format!("Bulan apa yang berada SESUDAH bulan {}?", target.name),
            OptionLabel::Name,
            false,
        ),
    };
    let options = choice_options(rng, correct, &[target.id]);

    ChoiceQuestion {
        question_id,
        game: GameKind::PositionQuiz,
        kind,
        target,
        prompt,
        correct,
        options,
        label,
        boundary,
    }
}
