//! End-to-end demo: the calendar page, then a simulated time challenge.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! 1. **Calendar** prints today's Gregorian and Hijri headers and the month
//!    grid with the current month marked.
//! 2. **Time challenge** plays a seeded 30-second game against the virtual
//!    clock, answering correctly most of the time, and stores the best score
//!    in a JSON file under the system temp directory.

use hijri_drill_gen::training_engine::topics::time_challenge::TimeChallenge;
use hijri_drill_gen::{
    all_months, today_gregorian_display, today_hijri, FileStore, GameConfig, GameKind, GameSession,
    SessionEvent, SessionState,
};

fn print_calendar() {
    let hijri = today_hijri();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {}", today_gregorian_display());
    println!("  {}  ({})", hijri, hijri.arabic);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for m in all_months() {
        let marker = if m.id == hijri.month { "▶" } else { " " };
        println!("  {marker} {:>2}. {:<14} {}", m.id, m.name, m.arabic);
    }
    println!();
}

fn play_time_challenge() {
    let path = std::env::temp_dir().join("hijri_drill_gen_scores.json");
    let store = FileStore::new(&path);
    let config = GameConfig::default().with_seed(2026);
    let mut session = GameSession::new(TimeChallenge, &config, store);

    println!("  [{}]  best so far: {}", GameKind::TimeChallenge, session.high_score());
    session.start();

    let mut round = 0u32;
    while session.state() != SessionState::Finished {
        if let Some(q) = session.question().filter(|_| session.state() == SessionState::Playing) {
            round += 1;
            // Miss every fifth question.
            let answer = if round % 5 == 0 {
                q.options.iter().find(|m| m.id != q.correct.id).map_or(q.correct.id, |m| m.id)
            } else {
                q.correct.id
            };
            let mark = if answer == q.correct.id { "✓" } else { "✗" };
            println!("  {mark} {}  → {}", q.prompt, q.correct);
            session.submit_answer(answer);
        }
        // Think for 1.2 s, then let the feedback delay run.
        for event in session.elapse(1_200) {
            if let SessionEvent::Finished { score, new_high_score } = event {
                println!();
                println!("  Time up! Score: {score}{}", if new_high_score { "  (new best)" } else { "" });
            }
        }
    }
    println!("  Scores saved in {}", path.display());
}

fn main() {
    pretty_env_logger::init();
    print_calendar();
    play_time_challenge();
}
