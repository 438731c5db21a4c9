//! Per-game session state machine.
//!
//! ```text
//! Idle --start--> Playing --submit--> Answered --advance/retry--> Playing
//!                    |                    |
//!                    +------ time up -----+--> Finished --start--> Playing
//! ```
//!
//! A [`GameSession`] owns one game, its RNG, its score, and at most one
//! pending timer (auto-advance or retry). Timers are identified by a
//! [`TimerToken`]; any transition that leaves the state a timer was
//! scheduled for cancels it, and firing a stale token does nothing.
//!
//! Time is virtual. A UI shell either calls [`tick`](GameSession::tick)
//! once a second and [`fire`](GameSession::fire) when its own timers expire,
//! or simply reports elapsed wall time through
//! [`elapse`](GameSession::elapse), which replays countdown ticks and pending
//! timers in due order. Tests use `elapse` to skip through a whole game
//! without waiting.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::training_engine::{
    calendar,
    config::GameConfig,
    models::{AdvancePolicy, GameKind, GameRules},
    months,
    store::{HighScoreStore, KeyValueStore, MemoryStore},
};

/// Countdown granularity.
pub const TICK_MS: u64 = 1000;

/// One mini-game: how it makes questions and how it judges answers.
pub trait Game {
    type Question: Clone + fmt::Debug + Serialize;
    type Answer: Clone + fmt::Debug + PartialEq + Serialize;

    fn kind(&self) -> GameKind;

    fn generate<R: Rng>(&self, rng: &mut R, today_month: u8, rules: &GameRules) -> Self::Question;

    fn is_correct(&self, question: &Self::Question, answer: &Self::Answer) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Playing,
    Answered,
    Finished,
}

/// The scored answer to the current question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback<A> {
    pub answer: A,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Show the next question.
    Advance,
    /// Re-open the same question after a wrong answer.
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingTimer {
    pub token: TimerToken,
    pub kind: TimerKind,
    /// Virtual time at which the timer fires.
    pub due_ms: u64,
}

/// What a transition did, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Started { time_limit_secs: Option<u32> },
    Answered { correct: bool, score: u32, total_answered: u32 },
    Scheduled { token: TimerToken, kind: TimerKind, delay_ms: u64 },
    Advanced,
    Retrying,
    Tick { time_remaining: u32 },
    Finished { score: u32, new_high_score: bool },
    Reset,
}

/// Read-only view for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot<'a, Q, A> {
    pub game: GameKind,
    pub state: SessionState,
    pub score: u32,
    pub total_answered: u32,
    pub question: Option<&'a Q>,
    pub feedback: Option<&'a Feedback<A>>,
    pub time_remaining: Option<u32>,
    pub high_score: u32,
    pub new_high_score: bool,
}

#[derive(Debug, Default)]
struct Clock {
    now_ms: u64,
    next_tick_ms: Option<u64>,
    pending: Option<PendingTimer>,
    next_token: u64,
}

/// A running mini-game.
pub struct GameSession<G: Game, S: KeyValueStore = MemoryStore> {
    game: G,
    rules: GameRules,
    rng: StdRng,
    today_month: u8,
    scores: HighScoreStore<S>,
    state: SessionState,
    score: u32,
    total_answered: u32,
    question: Option<G::Question>,
    feedback: Option<Feedback<G::Answer>>,
    time_remaining: Option<u32>,
    high_score: u32,
    new_high_score: bool,
    high_score_recorded: bool,
    clock: Clock,
}

impl<G: Game, S: KeyValueStore> GameSession<G, S> {
    /// Create an idle session. Today's month comes from the system calendar;
    /// override it with [`with_today_month`](Self::with_today_month).
    pub fn new(game: G, config: &GameConfig, store: S) -> Self {
        let rules = config.apply(game.kind().default_rules());
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scores = HighScoreStore::new(store);
        let high_score = rules.high_score_key.map(|key| scores.read(key)).unwrap_or(0);

        Self {
            game,
            rules,
            rng,
            today_month: calendar::today_hijri().month,
            scores,
            state: SessionState::Idle,
            score: 0,
            total_answered: 0,
            question: None,
            feedback: None,
            time_remaining: rules.time_limit_secs,
            high_score,
            new_high_score: false,
            high_score_recorded: false,
            clock: Clock::default(),
        }
    }

    /// Use `month` as "today" for target biasing. Invalid ids are ignored.
    pub fn with_today_month(mut self, month: u8) -> Self {
        if months::month(month).is_some() {
            self.today_month = month;
        } else {
            log::warn!("ignoring invalid today month {month}");
        }
        self
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    pub fn question(&self) -> Option<&G::Question> {
        self.question.as_ref()
    }

    pub fn feedback(&self) -> Option<&Feedback<G::Answer>> {
        self.feedback.as_ref()
    }

    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_new_high_score(&self) -> bool {
        self.new_high_score
    }

    pub fn pending_timer(&self) -> Option<PendingTimer> {
        self.clock.pending
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms
    }

    pub fn store(&self) -> &S {
        self.scores.backend()
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_, G::Question, G::Answer> {
        SessionSnapshot {
            game: self.game.kind(),
            state: self.state,
            score: self.score,
            total_answered: self.total_answered,
            question: self.question.as_ref(),
            feedback: self.feedback.as_ref(),
            time_remaining: self.time_remaining,
            high_score: self.high_score,
            new_high_score: self.new_high_score,
        }
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Idle/Finished → Playing with a fresh score, timer and question.
    pub fn start(&mut self) -> Vec<SessionEvent> {
        if !matches!(self.state, SessionState::Idle | SessionState::Finished) {
            log::debug!("{}: start ignored in {:?}", self.game.kind(), self.state);
            return Vec::new();
        }
        self.clock.pending = None;
        self.score = 0;
        self.total_answered = 0;
        self.feedback = None;
        self.time_remaining = self.rules.time_limit_secs;
        self.new_high_score = false;
        self.high_score_recorded = false;
        if let Some(key) = self.rules.high_score_key {
            self.high_score = self.scores.read(key);
        }
        self.clock.next_tick_ms = self
            .rules
            .time_limit_secs
            .map(|_| self.clock.now_ms + TICK_MS);
        self.next_question();
        self.state = SessionState::Playing;
        log::debug!("{}: started", self.game.kind());

        vec![SessionEvent::Started { time_limit_secs: self.rules.time_limit_secs }]
    }

    /// Score `answer` against the current question.
    ///
    /// Only the first answer per question counts; anything submitted outside
    /// `Playing` is ignored and produces no events.
    pub fn submit_answer(&mut self, answer: G::Answer) -> Vec<SessionEvent> {
        if self.state != SessionState::Playing || self.feedback.is_some() {
            log::debug!("{}: answer ignored in {:?}", self.game.kind(), self.state);
            return Vec::new();
        }
        let Some(question) = self.question.as_ref() else {
            return Vec::new();
        };

        let correct = self.game.is_correct(question, &answer);
        if correct {
            self.score += 1;
        }
        self.total_answered += 1;
        self.feedback = Some(Feedback { answer, correct });
        self.state = SessionState::Answered;

        let mut events = vec![SessionEvent::Answered {
            correct,
            score: self.score,
            total_answered: self.total_answered,
        }];
        match (correct, self.rules.retry_delay_ms, self.rules.advance) {
            (false, Some(delay_ms), _) => events.push(self.schedule(TimerKind::Retry, delay_ms)),
            (_, _, AdvancePolicy::Auto { delay_ms }) => {
                events.push(self.schedule(TimerKind::Advance, delay_ms))
            }
            _ => {}
        }
        events
    }

    /// Answered → Playing with a new question.
    pub fn advance(&mut self) -> Vec<SessionEvent> {
        if self.state != SessionState::Answered {
            return Vec::new();
        }
        self.clock.pending = None;
        self.next_question();
        self.state = SessionState::Playing;
        vec![SessionEvent::Advanced]
    }

    /// Answered (wrong) → Playing on the same question.
    pub fn retry(&mut self) -> Vec<SessionEvent> {
        let wrong = self.feedback.as_ref().is_some_and(|f| !f.correct);
        if self.state != SessionState::Answered || !wrong {
            return Vec::new();
        }
        self.clock.pending = None;
        self.feedback = None;
        self.state = SessionState::Playing;
        vec![SessionEvent::Retrying]
    }

    /// One second of countdown. At zero the game finishes even if an answer
    /// is still being shown.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        if !matches!(self.state, SessionState::Playing | SessionState::Answered) {
            return Vec::new();
        }
        let Some(remaining) = self.time_remaining else {
            return Vec::new();
        };

        let remaining = remaining.saturating_sub(1);
        self.time_remaining = Some(remaining);
        let mut events = vec![SessionEvent::Tick { time_remaining: remaining }];
        if remaining == 0 {
            events.extend(self.finish());
        }
        events
    }

    /// Run the pending timer if `token` is still the live one.
    pub fn fire(&mut self, token: TimerToken) -> Vec<SessionEvent> {
        match self.clock.pending {
            Some(timer) if timer.token == token => {
                self.clock.pending = None;
                match timer.kind {
                    TimerKind::Advance => self.advance(),
                    TimerKind::Retry => self.retry(),
                }
            }
            _ => {
                log::debug!("{}: stale timer {:?} ignored", self.game.kind(), token);
                Vec::new()
            }
        }
    }

    /// Move virtual time forward by `ms`, running due ticks and timers.
    pub fn elapse(&mut self, ms: u64) -> Vec<SessionEvent> {
        let target = self.clock.now_ms.saturating_add(ms);
        let mut events = Vec::new();

        loop {
            let tick_due = self.clock.next_tick_ms.filter(|&t| t <= target);
            let timer_due = self.clock.pending.filter(|p| p.due_ms <= target);
            match (tick_due, timer_due) {
                // Ticks win ties so time-up cancels a same-instant advance.
                (Some(t), Some(p)) if t <= p.due_ms => events.extend(self.run_tick_at(t)),
                (Some(t), None) => events.extend(self.run_tick_at(t)),
                (_, Some(p)) => {
                    self.clock.now_ms = p.due_ms;
                    events.extend(self.fire(p.token));
                }
                (None, None) => break,
            }
        }

        self.clock.now_ms = target;
        events
    }

    /// Any state → Idle. Pending timers are cancelled first.
    pub fn reset(&mut self) -> Vec<SessionEvent> {
        self.clock.pending = None;
        self.clock.next_tick_ms = None;
        self.state = SessionState::Idle;
        self.score = 0;
        self.total_answered = 0;
        self.question = None;
        self.feedback = None;
        self.time_remaining = self.rules.time_limit_secs;
        self.new_high_score = false;
        vec![SessionEvent::Reset]
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn run_tick_at(&mut self, at_ms: u64) -> Vec<SessionEvent> {
        self.clock.now_ms = at_ms;
        self.clock.next_tick_ms = Some(at_ms + TICK_MS);
        self.tick()
    }

    fn next_question(&mut self) {
        self.feedback = None;
        let question = self.game.generate(&mut self.rng, self.today_month, &self.rules);
        self.question = Some(question);
    }

    fn schedule(&mut self, kind: TimerKind, delay_ms: u64) -> SessionEvent {
        let token = TimerToken(self.clock.next_token);
        self.clock.next_token += 1;
        self.clock.pending = Some(PendingTimer {
            token,
            kind,
            due_ms: self.clock.now_ms + delay_ms,
        });
        SessionEvent::Scheduled { token, kind, delay_ms }
    }

    fn finish(&mut self) -> Vec<SessionEvent> {
        self.clock.pending = None;
        self.clock.next_tick_ms = None;
        self.feedback = None;
        self.state = SessionState::Finished;

        if !self.high_score_recorded {
            self.high_score_recorded = true;
            if let Some(key) = self.rules.high_score_key {
                if self.scores.record(key, self.score) {
                    self.high_score = self.score;
                    self.new_high_score = true;
                }
            }
        }
        log::info!(
            "{}: finished with {} of {}",
            self.game.kind(),
            self.score,
            self.total_answered
        );

        vec![SessionEvent::Finished {
            score: self.score,
            new_high_score: self.new_high_score,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::store::TIME_CHALLENGE_HIGHSCORE_KEY;
    use crate::training_engine::topics::{
        before_after::BeforeAfter, quiz::PositionQuiz, sorting::Sorting,
        time_challenge::TimeChallenge,
    };

    fn cfg(seed: u64) -> GameConfig {
        GameConfig::default().with_seed(seed)
    }

    fn timed(seed: u64, store: MemoryStore) -> GameSession<TimeChallenge> {
        GameSession::new(TimeChallenge, &cfg(seed), store).with_today_month(7)
    }

    /// Correct month id for the current time challenge question.
    fn right(s: &GameSession<TimeChallenge>) -> u8 {
        s.question().unwrap().correct.id
    }

    fn wrong(s: &GameSession<TimeChallenge>) -> u8 {
        let q = s.question().unwrap();
        q.options.iter().find(|m| m.id != q.correct.id).unwrap().id
    }

    #[test]
    fn new_session_is_idle() {
        let s = timed(1, MemoryStore::new());
        assert_eq!(s.state(), SessionState::Idle);
        assert!(s.question().is_none());
        assert_eq!(s.time_remaining(), Some(30));
    }

    #[test]
    fn start_generates_first_question() {
        let mut s = timed(1, MemoryStore::new());
        let events = s.start();
        assert_eq!(events, vec![SessionEvent::Started { time_limit_secs: Some(30) }]);
        assert_eq!(s.state(), SessionState::Playing);
        assert!(s.question().is_some());
    }

    #[test]
    fn start_is_ignored_while_playing() {
        let mut s = timed(1, MemoryStore::new());
        s.start();
        assert!(s.start().is_empty());
    }

    #[test]
    fn answers_before_start_are_ignored() {
        let mut s = timed(1, MemoryStore::new());
        assert!(s.submit_answer(1).is_empty());
        assert_eq!(s.total_answered(), 0);
    }

    #[test]
    fn correct_answer_scores_and_schedules_advance() {
        let mut s = timed(2, MemoryStore::new());
        s.start();
        let answer = right(&s);
        let events = s.submit_answer(answer);
        assert!(matches!(events[0], SessionEvent::Answered { correct: true, score: 1, total_answered: 1 }));
        assert!(matches!(events[1], SessionEvent::Scheduled { kind: TimerKind::Advance, delay_ms: 500, .. }));
        assert_eq!(s.state(), SessionState::Answered);
    }

    #[test]
    fn wrong_answer_counts_but_does_not_score() {
        let mut s = timed(2, MemoryStore::new());
        s.start();
        let answer = wrong(&s);
        s.submit_answer(answer);
        assert_eq!(s.score(), 0);
        assert_eq!(s.total_answered(), 1);
        assert_eq!(s.feedback().map(|f| f.correct), Some(false));
    }

    #[test]
    fn double_submit_scores_once() {
        let mut s = timed(3, MemoryStore::new());
        s.start();
        let answer = right(&s);
        s.submit_answer(answer);
        assert!(s.submit_answer(answer).is_empty());
        assert_eq!(s.score(), 1);
        assert_eq!(s.total_answered(), 1);
    }

    #[test]
    fn auto_advance_fires_after_delay() {
        let mut s = timed(4, MemoryStore::new());
        s.start();
        let first = s.question().unwrap().question_id.clone();
        let answer = right(&s);
        s.submit_answer(answer);

        assert!(s.elapse(499).is_empty());
        assert_eq!(s.state(), SessionState::Answered);

        let events = s.elapse(1);
        assert_eq!(events, vec![SessionEvent::Advanced]);
        assert_eq!(s.state(), SessionState::Playing);
        assert_ne!(s.question().unwrap().question_id, first);
        assert!(s.feedback().is_none());
    }

    #[test]
    fn thirty_ticks_finish_the_game() {
        let mut s = timed(5, MemoryStore::new());
        s.start();
        for _ in 0..29 {
            s.tick();
        }
        assert_eq!(s.state(), SessionState::Playing);
        let events = s.tick();
        assert_eq!(s.state(), SessionState::Finished);
        assert_eq!(s.time_remaining(), Some(0));
        assert!(matches!(events.last(), Some(SessionEvent::Finished { .. })));
        assert!(s.tick().is_empty());
    }

    #[test]
    fn time_up_overrides_pending_feedback() {
        let mut s = timed(6, MemoryStore::new());
        s.start();
        s.elapse(29_800);
        let answer = right(&s);
        s.submit_answer(answer);
        assert!(s.pending_timer().is_some());

        let events = s.elapse(200);
        assert_eq!(s.state(), SessionState::Finished);
        assert!(s.pending_timer().is_none());
        assert!(!events.contains(&SessionEvent::Advanced));
    }

    #[test]
    fn elapse_counts_down_in_whole_seconds() {
        let mut s = timed(7, MemoryStore::new());
        s.start();
        s.elapse(2_500);
        assert_eq!(s.time_remaining(), Some(28));
        s.elapse(500);
        assert_eq!(s.time_remaining(), Some(27));
    }

    #[test]
    fn elapsing_the_whole_limit_finishes() {
        let mut s = timed(7, MemoryStore::new());
        s.start();
        s.elapse(30_000);
        assert_eq!(s.state(), SessionState::Finished);
    }

    #[test]
    fn finishing_records_high_score_once() {
        let store = MemoryStore::new();
        let mut s = timed(8, store.clone());
        s.start();
        for _ in 0..3 {
            let answer = right(&s);
            s.submit_answer(answer);
            s.elapse(500);
        }
        s.elapse(30_000);
        assert_eq!(s.score(), 3);
        assert!(s.is_new_high_score());
        assert_eq!(s.high_score(), 3);
        assert_eq!(store.raw(TIME_CHALLENGE_HIGHSCORE_KEY).as_deref(), Some("3"));
    }

    #[test]
    fn lower_score_keeps_stored_best() {
        let mut store = MemoryStore::new();
        store.set(TIME_CHALLENGE_HIGHSCORE_KEY, "5").unwrap();
        let mut s = timed(9, store.clone());
        assert_eq!(s.high_score(), 5);
        s.start();
        s.elapse(30_000);
        assert!(!s.is_new_high_score());
        assert_eq!(s.high_score(), 5);
        assert_eq!(store.raw(TIME_CHALLENGE_HIGHSCORE_KEY).as_deref(), Some("5"));
    }

    #[test]
    fn reset_cancels_pending_timer() {
        let mut s = timed(10, MemoryStore::new());
        s.start();
        let answer = right(&s);
        let events = s.submit_answer(answer);
        let token = match events[1] {
            SessionEvent::Scheduled { token, .. } => token,
            ref other => panic!("expected a scheduled timer, got {other:?}"),
        };

        assert_eq!(s.reset(), vec![SessionEvent::Reset]);
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(s.score(), 0);
        assert!(s.question().is_none());

        assert!(s.fire(token).is_empty());
        assert!(s.elapse(5_000).is_empty());
        assert!(s.question().is_none());
    }

    #[test]
    fn stale_token_from_previous_question_is_ignored() {
        let mut s = timed(11, MemoryStore::new());
        s.start();
        let answer = right(&s);
        let events = s.submit_answer(answer);
        let SessionEvent::Scheduled { token, .. } = events[1] else {
            panic!("expected a scheduled timer");
        };
        s.advance();
        let answer = right(&s);
        s.submit_answer(answer);
        assert!(s.fire(token).is_empty());
        assert_eq!(s.state(), SessionState::Answered);
    }

    #[test]
    fn restart_after_finish_resets_score() {
        let mut s = timed(12, MemoryStore::new());
        s.start();
        let answer = right(&s);
        s.submit_answer(answer);
        s.elapse(30_000);
        assert_eq!(s.state(), SessionState::Finished);
        s.start();
        assert_eq!(s.score(), 0);
        assert_eq!(s.time_remaining(), Some(30));
        assert_eq!(s.state(), SessionState::Playing);
    }

    #[test]
    fn manual_games_wait_for_advance() {
        let mut s = GameSession::new(PositionQuiz, &cfg(13), MemoryStore::new());
        s.start();
        let answer = s.question().unwrap().correct.id;
        let events = s.submit_answer(answer);
        assert_eq!(events.len(), 1);
        assert!(s.elapse(60_000).is_empty());
        assert_eq!(s.state(), SessionState::Answered);
        assert_eq!(s.advance(), vec![SessionEvent::Advanced]);
        assert_eq!(s.state(), SessionState::Playing);
    }

    #[test]
    fn untimed_games_ignore_ticks() {
        let mut s = GameSession::new(BeforeAfter, &cfg(14), MemoryStore::new());
        s.start();
        assert!(s.tick().is_empty());
        assert_eq!(s.time_remaining(), None);
    }

    #[test]
    fn before_after_advances_after_two_seconds() {
        let mut s = GameSession::new(BeforeAfter, &cfg(15), MemoryStore::new());
        s.start();
        let answer = s.question().unwrap().correct.id;
        s.submit_answer(answer);
        assert!(s.elapse(1_999).is_empty());
        assert_eq!(s.elapse(1), vec![SessionEvent::Advanced]);
    }

    #[test]
    fn sorting_retries_same_question_after_wrong_order() {
        let mut s = GameSession::new(Sorting, &cfg(16), MemoryStore::new());
        s.start();
        let round = s.question().unwrap().clone();
        let mut backwards = round.correct_order.clone();
        backwards.reverse();

        let events = s.submit_answer(backwards);
        assert!(matches!(events[1], SessionEvent::Scheduled { kind: TimerKind::Retry, delay_ms: 1500, .. }));
        assert_eq!(s.elapse(1_500), vec![SessionEvent::Retrying]);
        assert_eq!(s.state(), SessionState::Playing);
        assert_eq!(s.question().unwrap().question_id, round.question_id);
        assert_eq!(s.total_answered(), 1);

        s.submit_answer(round.correct_order.clone());
        assert_eq!(s.score(), 1);
        assert!(s.pending_timer().is_none());
        assert!(s.retry().is_empty());
    }

    #[test]
    fn snapshot_serializes() {
        let mut s = timed(17, MemoryStore::new());
        s.start();
        let json = serde_json::to_value(s.snapshot()).unwrap();
        assert_eq!(json["state"], "playing");
        assert_eq!(json["time_remaining"], 30);
        assert!(json["question"]["options"].is_array());
    }

    #[test]
    fn config_overrides_reach_the_session() {
        let config = cfg(18).with_time_limit(3).with_advance_delay(50);
        let mut s = GameSession::new(TimeChallenge, &config, MemoryStore::new());
        s.start();
        assert_eq!(s.time_remaining(), Some(3));
        let answer = s.question().unwrap().correct.id;
        let events = s.submit_answer(answer);
        assert!(matches!(events[1], SessionEvent::Scheduled { delay_ms: 50, .. }));
        s.elapse(3_000);
        assert_eq!(s.state(), SessionState::Finished);
    }

    #[test]
    fn same_seed_replays_same_questions() {
        let mut a = timed(19, MemoryStore::new());
        let mut b = timed(19, MemoryStore::new());
        a.start();
        b.start();
        for _ in 0..5 {
            assert_eq!(a.question(), b.question());
            let (x, y) = (right(&a), right(&b));
            a.submit_answer(x);
            b.submit_answer(y);
            a.advance();
            b.advance();
        }
    }
}
