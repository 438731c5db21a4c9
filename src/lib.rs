//! # hijri_drill_gen
//!
//! An offline, deterministic engine for learning the twelve Hijri months.
//!
//! The library resolves today's Hijri date, generates randomised questions
//! for eight mini-games, and runs each game as a small state machine with
//! virtual timers and a persisted best score for the timed games. It has no
//! UI of its own: a shell renders the serializable snapshots and JSON views.
//!
//! ## How it works
//!
//! 1. Pick a [`GameKind`]. For a one-off question, build a
//!    [`QuestionRequest`] and call [`generate_question`].
//! 2. For a full game, create a [`GameSession`] with a [`Game`]
//!    implementation from [`training_engine::topics`], a [`GameConfig`] and
//!    a [`KeyValueStore`] for high scores.
//! 3. Drive the session with `start`, `submit_answer`, `advance` and either
//!    `tick`/`fire` from real timers or `elapse` with wall time. Each call
//!    returns the [`SessionEvent`]s it produced.
//!
//! ## Key features
//!
//! - **Deterministic**: a seed reproduces the same questions; tests drive a
//!   whole timed game through the virtual clock without waiting.
//! - **Today bias**: some games lean towards the current Hijri month.
//! - **Graceful degradation**: calendar and storage failures fall back to
//!   defaults and are logged through the `log` facade.
//!
//! ## Quick start
//!
//! ```rust
//! use hijri_drill_gen::{generate_question, GameKind, Question, QuestionRequest};
//!
//! let q = generate_question(
//!     QuestionRequest::new(GameKind::BeforeAfter)
//!         .with_seed(42)
//!         .with_today_month(9),
//! );
//! if let Question::Choice(q) = q {
//!     println!("{}", q.prompt);
//!     for m in &q.options {
//!         let mark = if m.id == q.correct.id { "+" } else { " " };
//!         println!("[{mark}] {}", q.option_text(m));
//!     }
//! }
//! ```
//!
//! ```rust
//! use hijri_drill_gen::training_engine::topics::time_challenge::TimeChallenge;
//! use hijri_drill_gen::{GameConfig, GameSession, MemoryStore, SessionState};
//!
//! let config = GameConfig::default().with_seed(7);
//! let mut session = GameSession::new(TimeChallenge, &config, MemoryStore::new());
//! session.start();
//! let answer = session.question().map(|q| q.correct.id).unwrap_or(1);
//! session.submit_answer(answer);
//! session.elapse(30_000);
//! assert_eq!(session.state(), SessionState::Finished);
//! assert_eq!(session.score(), 1);
//! ```

pub mod training_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `hijri_drill_gen::generate_question`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    all_months, generate_question, today_gregorian_display, today_hijri, ChoiceQuestion,
    DrillError, DrillResult, FileStore, Game, GameConfig, GameKind, GameRules, GameSession,
    HijriDate, KeyValueStore, MemoryStore, Month, Question, QuestionRequest, SessionEvent,
    SessionState,
};
