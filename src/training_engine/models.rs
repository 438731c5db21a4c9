use std::fmt;
use serde::{Deserialize, Serialize};

use crate::training_engine::store::{QUICK_SORT_HIGHSCORE_KEY, TIME_CHALLENGE_HIGHSCORE_KEY};

// ---------------------------------------------------------------------------
// Calendar primitives
// ---------------------------------------------------------------------------

/// One entry of the fixed month table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Month {
    /// 1-based position in the Hijri year.
    pub id: u8,
    /// Latin transliteration, e.g. "Ramadhan".
    pub name: &'static str,
    /// Arabic script name.
    pub arabic: &'static str,
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A resolved Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HijriDate {
    pub day: u32,
    pub month: u8,
    pub year: i32,
    pub month_name: &'static str,
    pub arabic: &'static str,
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} H", self.day, self.month_name, self.year)
    }
}

// ---------------------------------------------------------------------------
// Game metadata
// ---------------------------------------------------------------------------

/// The eight mini-games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    PositionQuiz,
    BeforeAfter,
    TrueFalse,
    FillGap,
    MatchPairs,
    TimeChallenge,
    QuickSort,
    Sorting,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameKind::PositionQuiz  => "Kuis Bulan Hijriyah",
            GameKind::BeforeAfter   => "Sebelum & Sesudah",
            GameKind::TrueFalse     => "Benar / Salah",
            GameKind::FillGap       => "Lengkapi yang Hilang",
            GameKind::MatchPairs    => "Pilih Pasangan",
            GameKind::TimeChallenge => "Time Challenge",
            GameKind::QuickSort     => "Urutkan Cepat",
            GameKind::Sorting       => "Susun Urutan Bulan Hijriyah",
        };
        write!(f, "{}", s)
    }
}

impl GameKind {
    /// Every game in menu order.
    pub const ALL: [GameKind; 8] = [
        GameKind::PositionQuiz,
        GameKind::BeforeAfter,
        GameKind::TrueFalse,
        GameKind::FillGap,
        GameKind::MatchPairs,
        GameKind::TimeChallenge,
        GameKind::QuickSort,
        GameKind::Sorting,
    ];

    /// Question id prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            GameKind::PositionQuiz  => "QZ",
            GameKind::BeforeAfter   => "BA",
            GameKind::TrueFalse     => "TF",
            GameKind::FillGap       => "FG",
            GameKind::MatchPairs    => "MP",
            GameKind::TimeChallenge => "TC",
            GameKind::QuickSort     => "QS",
            GameKind::Sorting       => "SO",
        }
    }

    /// Timing, scoring and target-bias rules the game ships with.
    pub fn default_rules(self) -> GameRules {
        let manual = GameRules {
            time_limit_secs: None,
            advance: AdvancePolicy::Manual,
            retry_delay_ms: None,
            today_bias: 0.0,
            high_score_key: None,
        };
        match self {
            GameKind::PositionQuiz => GameRules { today_bias: 0.5, ..manual },
            GameKind::BeforeAfter => GameRules {
                advance: AdvancePolicy::Auto { delay_ms: 2000 },
                today_bias: 0.3,
                ..manual
            },
            GameKind::TrueFalse | GameKind::FillGap => manual,
            GameKind::MatchPairs => GameRules {
                advance: AdvancePolicy::Auto { delay_ms: 800 },
                ..manual
            },
            GameKind::TimeChallenge => GameRules {
                time_limit_secs: Some(30),
                advance: AdvancePolicy::Auto { delay_ms: 500 },
                today_bias: 0.25,
                high_score_key: Some(TIME_CHALLENGE_HIGHSCORE_KEY),
                ..manual
            },
            GameKind::QuickSort => GameRules {
                time_limit_secs: Some(20),
                advance: AdvancePolicy::Auto { delay_ms: 800 },
                high_score_key: Some(QUICK_SORT_HIGHSCORE_KEY),
                ..manual
            },
            GameKind::Sorting => GameRules { retry_delay_ms: Some(1500), ..manual },
        }
    }
}

/// How a session moves from feedback to the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvancePolicy {
    /// Next question after a fixed feedback delay.
    Auto { delay_ms: u64 },
    /// The player asks for the next question.
    Manual,
}

/// Per-game session rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameRules {
    /// Countdown length for timed games.
    pub time_limit_secs: Option<u32>,
    pub advance: AdvancePolicy,
    /// When set, a wrong answer re-opens the same question after this delay.
    pub retry_delay_ms: Option<u64>,
    /// Probability of asking about today's Hijri month.
    pub today_bias: f64,
    /// Storage key of the persisted best score.
    pub high_score_key: Option<&'static str>,
}

impl GameRules {
    pub fn is_timed(&self) -> bool {
        self.time_limit_secs.is_some()
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// What a multiple-choice or true/false prompt asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptKind {
    /// "Month X is which month of the year?"
    Position,
    /// "Month number n is …"
    Ordinal,
    /// "Which month comes before X?"
    Before,
    /// "Which month comes after X?"
    After,
}

/// How option buttons are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionLabel {
    Name,
    Position,
}

/// A four-option question whose answer is a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceQuestion {
    pub question_id: String,
    pub game: GameKind,
    pub kind: PromptKind,
    pub target: Month,
    pub prompt: String,
    pub correct: Month,
    pub options: Vec<Month>,
    pub label: OptionLabel,
    /// True when the first/last-month phrasing replaced the neighbour prompt.
    pub boundary: bool,
}

impl ChoiceQuestion {
    /// Button text for one option.
    pub fn option_text(&self, option: &Month) -> String {
        match self.label {
            OptionLabel::Name => option.name.to_string(),
            OptionLabel::Position => option.id.to_string(),
        }
    }

    /// Text of the correct option, for "the answer was …" feedback.
    pub fn correct_text(&self) -> String {
        self.option_text(&self.correct)
    }
}

/// The claim a true/false statement makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Claim {
    Position(u8),
    Neighbour(Month),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrueFalseQuestion {
    pub question_id: String,
    pub kind: PromptKind,
    pub target: Month,
    pub claim: Claim,
    pub statement: String,
    pub is_true: bool,
}

/// Four consecutive months with one interior month hidden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapQuestion {
    pub question_id: String,
    /// `None` marks the gap.
    pub sequence: Vec<Option<Month>>,
    pub gap_index: usize,
    pub correct: Month,
    pub options: Vec<Month>,
}

/// Four months to pair with their positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRound {
    pub question_id: String,
    /// Name column.
    pub items: Vec<Month>,
    /// Position column, shuffled independently of `items`.
    pub positions: Vec<u8>,
}

impl MatchRound {
    /// The pairing that solves the round, keyed by month id.
    pub fn solution(&self) -> Vec<(u8, u8)> {
        self.items.iter().map(|m| (m.id, m.id)).collect()
    }
}

/// Months to put back in calendar order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRound {
    pub question_id: String,
    pub game: GameKind,
    /// Presentation order.
    pub items: Vec<Month>,
    /// Ids in ascending order.
    pub correct_order: Vec<u8>,
}

/// Any generated question, as returned by [`generate_question`].
///
/// [`generate_question`]: crate::training_engine::generator::generate_question
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    Choice(ChoiceQuestion),
    TrueFalse(TrueFalseQuestion),
    Gap(GapQuestion),
    Match(MatchRound),
    Order(OrderRound),
}

impl Question {
    pub fn question_id(&self) -> &str {
        match self {
            Question::Choice(q)    => &q.question_id,
            Question::TrueFalse(q) => &q.question_id,
            Question::Gap(q)       => &q.question_id,
            Question::Match(q)     => &q.question_id,
            Question::Order(q)     => &q.question_id,
        }
    }
}

/// Input to the stateless generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub game: GameKind,
    pub rng_seed: Option<u64>,
    /// Today's Hijri month; resolved from the system date when `None`.
    pub today_month: Option<u8>,
}

impl QuestionRequest {
    /// Request with entropy seeding and today's month from the clock.
    pub fn new(game: GameKind) -> Self {
        Self { game, rng_seed: None, today_month: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_today_month(mut self, month: u8) -> Self {
        self.today_month = Some(month);
        self
    }
}
