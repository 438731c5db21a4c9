//! One generator per mini-game.
//!
//! Each module exposes a unit struct implementing [`Game`], a free
//! `generate` function with the game's random choices, and a `build`
//! function taking those choices as arguments so tests can pin them:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, ...) -> <Question>
//! pub fn build<R: Rng>(rng: &mut R, question_id: String, ...) -> <Question>
//! ```
//!
//! [`Game`]: crate::training_engine::session::Game

/// QZ: position / before / after with first-last boundary phrasing.
pub mod quiz;
/// BA: before or after, auto-advancing.
pub mod before_after;
/// TF: true/false statements.
pub mod true_false;
/// FG: fill the gap in a run of four.
pub mod fill_gap;
/// MP: match names with positions.
pub mod match_pairs;
/// TC: 30-second rapid fire.
pub mod time_challenge;
/// QS: order five consecutive months against the clock.
pub mod quick_sort;
/// SO: order the whole year.
pub mod sorting;
