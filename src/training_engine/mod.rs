//! Core engine: month table, calendar, question generation and game sessions.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: months, dates, game rules, question structs |
//! | `months`    | The fixed 12-month table with cyclic neighbours |
//! | `calendar`  | Today's Hijri date and the long Gregorian display |
//! | `shuffle`   | Fisher-Yates shuffle used by every generator |
//! | `helpers`   | Target picking, distractors and prompt builders shared by topics |
//! | `topics`    | One generator per mini-game |
//! | `generator` | Single stateless entry point `generate_question()` |
//! | `session`   | `GameSession` state machine with virtual timers |
//! | `store`     | Key/value backends and the high-score wrapper |
//! | `config`    | Serde-loadable overrides for game rules |
//! | `error`     | `DrillError` for the fallible seams |

pub mod calendar;
pub mod config;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod months;
pub mod session;
pub mod shuffle;
pub mod store;
pub mod topics;

// Re-export the public API surface so callers can use
// `training_engine::generate_question` without reaching into sub-modules.
pub use calendar::{
    gregorian_display, hijri_for, today_gregorian_display, today_hijri, DateResolver,
    HijriConverter, TabularCalendar,
};
pub use config::GameConfig;
pub use error::{DrillError, DrillResult};
pub use generator::generate_question;
pub use models::{
    AdvancePolicy, ChoiceQuestion, Claim, GameKind, GameRules, GapQuestion, HijriDate,
    MatchRound, Month, OptionLabel, OrderRound, PromptKind, Question, QuestionRequest,
    TrueFalseQuestion,
};
pub use months::{all_months, month, predecessor, successor};
pub use session::{Game, GameSession, SessionEvent, SessionSnapshot, SessionState, TimerToken};
pub use store::{FileStore, HighScoreStore, KeyValueStore, MemoryStore};
