//! One illustrated question for every mini-game.
//!
//! Run with:
//!   cargo run --example games
//!
//! Each block shows what the game teaches, its rules (timer, advance policy)
//! and a fixed-seed question with the correct answer marked.

use hijri_drill_gen::training_engine::AdvancePolicy;
use hijri_drill_gen::{generate_question, GameKind, Question, QuestionRequest};

struct GameMeta {
    game: GameKind,
    seed: u64,
    teaches: &'static str,
}

fn games() -> Vec<GameMeta> {
    vec![
        GameMeta {
            game: GameKind::PositionQuiz,
            seed: 1001,
            teaches: "Where each month sits in the year and which months neighbour it.",
        },
        GameMeta {
            game: GameKind::BeforeAfter,
            seed: 2002,
            teaches: "The month right before or right after a given month, wrapping at the year end.",
        },
        GameMeta {
            game: GameKind::TrueFalse,
            seed: 3003,
            teaches: "Spotting wrong claims about positions and neighbours.",
        },
        GameMeta {
            game: GameKind::FillGap,
            seed: 4004,
            teaches: "Recalling a month from the two around it.",
        },
        GameMeta {
            game: GameKind::MatchPairs,
            seed: 5005,
            teaches: "Pairing month names with their numbers.",
        },
        GameMeta {
            game: GameKind::TimeChallenge,
            seed: 6006,
            teaches: "Fast recall of numbers and neighbours under a 30-second clock.",
        },
        GameMeta {
            game: GameKind::QuickSort,
            seed: 7007,
            teaches: "Ordering a run of five months, as many rounds as fit in 20 seconds.",
        },
        GameMeta {
            game: GameKind::Sorting,
            seed: 8008,
            teaches: "Putting the whole year back in order.",
        },
    ]
}

fn rules_line(game: GameKind) -> String {
    let rules = game.default_rules();
    let timer = rules
        .time_limit_secs
        .map_or_else(|| "untimed".to_string(), |s| format!("{s}s"));
    let advance = match rules.advance {
        AdvancePolicy::Auto { delay_ms } => format!("auto after {delay_ms} ms"),
        AdvancePolicy::Manual => "manual".to_string(),
    };
    format!("{timer}, {advance}")
}

fn print_question(q: &Question) {
    match q {
        Question::Choice(c) => {
            println!("  Q: {}", c.prompt);
            for m in &c.options {
                let mark = if m.id == c.correct.id { "✓" } else { " " };
                println!("    [{mark}] {}", c.option_text(m));
            }
        }
        Question::TrueFalse(tf) => {
            println!("  Q: {}", tf.statement);
            println!("    → {}", if tf.is_true { "Benar" } else { "Salah" });
        }
        Question::Gap(g) => {
            let row: Vec<&str> = g.sequence.iter().map(|m| m.map_or("___", |m| m.name)).collect();
            println!("  Q: {}", row.join("  →  "));
            for m in &g.options {
                let mark = if m.id == g.correct.id { "✓" } else { " " };
                println!("    [{mark}] {}", m.name);
            }
        }
        Question::Match(r) => {
            let names: Vec<&str> = r.items.iter().map(|m| m.name).collect();
            let positions: Vec<String> = r.positions.iter().map(u8::to_string).collect();
            println!("  Names:     {}", names.join(", "));
            println!("  Positions: {}", positions.join(", "));
            let pairs: Vec<String> = r.solution().iter().map(|(id, pos)| format!("{id}↔{pos}")).collect();
            println!("    ✓ {}", pairs.join("  "));
        }
        Question::Order(o) => {
            let shown: Vec<&str> = o.items.iter().map(|m| m.name).collect();
            println!("  Shuffled: {}", shown.join(", "));
            let order: Vec<String> = o.correct_order.iter().map(u8::to_string).collect();
            println!("    ✓ {}", order.join(" "));
        }
    }
}

fn main() {
    for meta in games() {
        let q = generate_question(
            QuestionRequest::new(meta.game)
                .with_seed(meta.seed)
                .with_today_month(9),
        );
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  [{}]  ID: {}  ({})", meta.game, q.question_id(), rules_line(meta.game));
        println!("  Teaches: {}", meta.teaches);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        print_question(&q);
        println!();
    }
}
