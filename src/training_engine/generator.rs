use rand::{rngs::StdRng, SeedableRng};

use crate::training_engine::{
    calendar,
    models::{GameKind, Question, QuestionRequest},
    months,
    session::Game,
    topics::{
        before_after::BeforeAfter, fill_gap::FillGap, match_pairs::MatchPairs,
        quick_sort::QuickSort, quiz::PositionQuiz, sorting::Sorting,
        time_challenge::TimeChallenge, true_false::TrueFalse,
    },
};

/// One question for `game` with its shipped rules.
fn ask<G: Game>(game: G, rng: &mut StdRng, today_month: u8) -> G::Question {
    let rules = game.kind().default_rules();
    game.generate(rng, today_month, &rules)
}

/// Core dispatch: routes to the correct game.
///
/// Stateless; a fixed `rng_seed` always yields the same question. Without a
/// valid `today_month` the system calendar decides which month is "today".
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let today_month = request
        .today_month
        .filter(|&m| months::month(m).is_some())
        .unwrap_or_else(|| calendar::today_hijri().month);

    let question = match request.game {
        GameKind::PositionQuiz  => Question::Choice(ask(PositionQuiz, &mut rng, today_month)),
        GameKind::BeforeAfter   => Question::Choice(ask(BeforeAfter, &mut rng, today_month)),
        GameKind::TimeChallenge => Question::Choice(ask(TimeChallenge, &mut rng, today_month)),
        GameKind::TrueFalse     => Question::TrueFalse(ask(TrueFalse, &mut rng, today_month)),
        GameKind::FillGap       => Question::Gap(ask(FillGap, &mut rng, today_month)),
        GameKind::MatchPairs    => Question::Match(ask(MatchPairs, &mut rng, today_month)),
        GameKind::QuickSort     => Question::Order(ask(QuickSort, &mut rng, today_month)),
        GameKind::Sorting       => Question::Order(ask(Sorting, &mut rng, today_month)),
    };
    log::debug!("{}: generated {}", request.game, question.question_id());
    question
}
