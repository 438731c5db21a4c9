use rand::Rng;
use crate::training_engine::{
    helpers::{choice_options, coin, neighbour, neighbour_prompt, pick_target, question_id},
    models::{ChoiceQuestion, GameKind, GameRules, Month, OptionLabel, PromptKind},
    session::Game,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BeforeAfter;

impl Game for BeforeAfter {
    type Question = ChoiceQuestion;
    type Answer = u8;

    fn kind(&self) -> GameKind {
        GameKind::BeforeAfter
    }

    fn generate<R: Rng>(&self, rng: &mut R, today_month: u8, rules: &GameRules) -> ChoiceQuestion {
        generate(rng, today_month, rules.today_bias)
    }

    fn is_correct(&self, question: &ChoiceQuestion, answer: &u8) -> bool {
        question.correct.id == *answer
    }
}

pub fn generate<R: Rng>(rng: &mut R, today_month: u8, bias: f64) -> ChoiceQuestion {
    let id = question_id(GameKind::BeforeAfter, rng);
    let target = pick_target(rng, today_month, bias);
    let kind = if coin(rng, 0.5) { PromptKind::Before } else { PromptKind::After };
    build(rng, id, kind, target)
}

/// Neighbour question; wraps around the year instead of special-casing it.
pub fn build<R: Rng>(rng: &mut R, question_id: String, kind: PromptKind, target: Month) -> ChoiceQuestion {
    let correct = neighbour(kind, target);
    ChoiceQuestion {
        question_id,
        game: GameKind::BeforeAfter,
        kind,
        target,
        prompt: neighbour_prompt(kind, target),
        correct,
        options: choice_options(rng, correct, &[target.id]),
        label: OptionLabel::Name,
        boundary: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::helpers::options_are_valid;
    use crate::training_engine::months::all_months;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn before_muharram_is_dzulhijjah() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = build(&mut rng, "BA-0".into(), PromptKind::Before, all_months()[0]);
        assert_eq!(q.correct.name, "Dzulhijjah");
        assert_eq!(q.prompt, "Sebelum Muharram adalah …");
    }

    #[test]
    fn after_dzulhijjah_is_muharram() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = build(&mut rng, "BA-0".into(), PromptKind::After, all_months()[11]);
        assert_eq!(q.correct.name, "Muharram");
        assert_eq!(q.prompt, "Setelah Dzulhijjah adalah …");
    }

    #[test]
    fn generated_options_are_valid_and_exclude_target() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let q = generate(&mut rng, 9, 0.3);
            assert!(options_are_valid(&q.options, &q.correct));
            assert!(q.options.iter().all(|m| m.id != q.target.id));
            assert!(matches!(q.kind, PromptKind::Before | PromptKind::After));
        }
    }

    #[test]
    fn bias_favours_today() {
        let mut rng = StdRng::seed_from_u64(3);
        let hits = (0..1000).filter(|_| generate(&mut rng, 9, 0.3).target.id == 9).count();
        // 0.3 + 0.7/12 ≈ 0.36
        assert!((280..440).contains(&hits), "today hit {hits} times");
    }
}
