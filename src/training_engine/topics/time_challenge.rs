use rand::Rng;
use crate::training_engine::{
    helpers::{choice_options, neighbour, neighbour_prompt, pick_target, question_id},
    models::{ChoiceQuestion, GameKind, GameRules, Month, OptionLabel, PromptKind},
    session::Game,
};

const KINDS: [PromptKind; 3] = [PromptKind::Ordinal, PromptKind::Before, PromptKind::After];

/// Thirty seconds of rapid-fire questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeChallenge;

impl Game for TimeChallenge {
    type Question = ChoiceQuestion;
    type Answer = u8;

    fn kind(&self) -> GameKind {
        GameKind::TimeChallenge
    }

    fn generate<R: Rng>(&self, rng: &mut R, today_month: u8, rules: &GameRules) -> ChoiceQuestion {
        generate(rng, today_month, rules.today_bias)
    }

    fn is_correct(&self, question: &ChoiceQuestion, answer: &u8) -> bool {
        question.correct.id == *answer
    }
}

/// The today bias only applies to before/after prompts; ordinal prompts
/// always pick uniformly.
pub fn generate<R: Rng>(rng: &mut R, today_month: u8, bias: f64) -> ChoiceQuestion {
    let id = question_id(GameKind::TimeChallenge, rng);
    let kind = KINDS[rng.gen_range(0..KINDS.len())];
    let bias = if kind == PromptKind::Ordinal { 0.0 } else { bias };
    let target = pick_target(rng, today_month, bias);
    build(rng, id, kind, target)
}

pub fn build<R: Rng>(rng: &mut R, question_id: String, kind: PromptKind, target: Month) -> ChoiceQuestion {
    let correct = neighbour(kind, target);
    ChoiceQuestion {
        question_id,
        game: GameKind::TimeChallenge,
        kind,
        target,
        prompt: neighbour_prompt(kind, target),
        correct,
        options: choice_options(rng, correct, &[target.id]),
        label: OptionLabel::Name,
        boundary: false,
    }
}
