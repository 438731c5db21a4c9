//! Shared builder functions used by the topic generators.
//!
//! Every generator follows the same pattern: draw a question id, pick a
//! target month, work out the correct answer, and surround it with three
//! distractors. These helpers keep the topic files down to their prompts.
//!
//! ## RNG ordering
//!
//! The question id is always drawn first, then the topic's own choices, then
//! the option shuffles. Changing the order changes every seeded question and
//! breaks the determinism tests.

use rand::{Rng, RngCore};

use crate::training_engine::{
    models::{GameKind, Month, OrderRound, PromptKind},
    months::{self, MONTH_COUNT},
    shuffle::shuffle,
};

/// Options shown for every multiple-choice question.
pub const OPTION_COUNT: usize = 4;

/// Question id from the game prefix and 32 random bits, e.g. `BA-1F00C2D3`.
pub fn question_id(game: GameKind, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", game.prefix(), rng.next_u32())
}

/// True with probability `p` (clamped to 0.0-1.0).
pub fn coin<R: Rng>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p.clamp(0.0, 1.0)
}

/// Pick the question's target month.
///
/// With probability `bias` this is today's month; otherwise it is uniform
/// over the year. Both draws are always made so the RNG stream does not
/// depend on which branch wins.
pub fn pick_target<R: Rng>(rng: &mut R, today_month: u8, bias: f64) -> Month {
    let use_today = coin(rng, bias);
    let random = *months::at_index(rng.gen_range(0..MONTH_COUNT));
    match months::month(today_month) {
        Some(today) if use_today => *today,
        _ => random,
    }
}

/// The neighbour a before/after prompt asks for, wrapping at the year edges.
/// Position-style prompts answer with the target itself.
pub fn neighbour(kind: PromptKind, target: Month) -> Month {
    match kind {
        PromptKind::Before => *months::predecessor(target.id),
        PromptKind::After => *months::successor(target.id),
        PromptKind::Position | PromptKind::Ordinal => target,
    }
}

/// Short before/after prompt, e.g. "Sebelum Rajab adalah …".
pub fn neighbour_prompt(kind: PromptKind, target: Month) -> String {
    match kind {
        PromptKind::Before => format!("Sebelum {} adalah …", target.name),
        PromptKind::After => format!("Setelah {} adalah …", target.name),
        PromptKind::Ordinal => format!("Bulan ke-{} dalam kalender Hijriyah adalah …", target.id),
        PromptKind::Position => format!("{} adalah bulan ke-berapa?", target.name),
    }
}

/// Four shuffled options: `correct` plus three months that are neither
/// `correct` nor any id in `exclude`.
pub fn choice_options<R: Rng>(rng: &mut R, correct: Month, exclude: &[u8]) -> Vec<Month> {
    let mut banned = exclude.to_vec();
    banned.push(correct.id);
    let mut options: Vec<Month> = shuffle(rng, &months::months_except(&banned))
        .into_iter()
        .take(OPTION_COUNT - 1)
        .collect();
    options.push(correct);
    let options = shuffle(rng, &options);
    debug_assert!(options_are_valid(&options, &correct), "bad options {options:?}");
    options
}

/// Exactly four distinct months with `correct` among them once.
pub fn options_are_valid(options: &[Month], correct: &Month) -> bool {
    let mut ids: Vec<u8> = options.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    ids.dedup();
    options.len() == OPTION_COUNT
        && ids.len() == OPTION_COUNT
        && options.iter().filter(|m| m.id == correct.id).count() == 1
}

/// Ordering round over `run`, shown in shuffled order.
pub fn order_round<R: Rng>(
    rng: &mut R, game: GameKind, question_id: String, run: &[Month],
) -> OrderRound {
    let mut correct_order: Vec<u8> = run.iter().map(|m| m.id).collect();
    correct_order.sort_unstable();
    OrderRound {
        question_id,
        game,
        items: shuffle(rng, run),
        correct_order,
    }
}
