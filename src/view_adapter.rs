use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::training_engine::{
    calendar,
    error::DrillResult,
    models::{ChoiceQuestion, HijriDate, Month},
    months,
    session::{Game, GameSession, SessionState},
    store::KeyValueStore,
};

/// One row of the month grid.
fn month_card(m: &Month, current: u8) -> Value {
    json!({
        "id": m.id,
        "name": m.name,
        "arabic": m.arabic,
        "isCurrent": m.id == current
    })
}

fn hijri_block(date: &HijriDate) -> Value {
    json!({
        "day": date.day,
        "month": date.month,
        "year": date.year,
        "monthName": date.month_name,
        "arabic": date.arabic,
        "display": date.to_string()
    })
}

/// Calendar page for `date`: both date headers and the 12-month grid with
/// the current month flagged.
pub fn calendar_view(date: NaiveDate) -> Value {
    let hijri = calendar::hijri_for(date);
    let grid: Vec<Value> = months::all_months()
        .iter()
        .map(|m| month_card(m, hijri.month))
        .collect();

    json!({
        "gregorian": calendar::gregorian_display(date),
        "hijri": hijri_block(&hijri),
        "months": grid
    })
}

/// Calendar page for today.
pub fn today_calendar_view() -> Value {
    calendar_view(chrono::Local::now().date_naive())
}

/// Option buttons with their display text, in presentation order.
pub fn choice_options_view(question: &ChoiceQuestion) -> Value {
    let buttons: Vec<Value> = question
        .options
        .iter()
        .map(|m| json!({ "id": m.id, "text": question.option_text(m) }))
        .collect();
    Value::Array(buttons)
}

/// Map a session to the JSON object the client renders.
///
/// The snapshot fields are kept as-is under `session`; `title`, `timed` and
/// `canAdvance` are derived for the header and the "next" button.
pub fn session_view<G, S>(session: &GameSession<G, S>) -> DrillResult<Value>
where
    G: Game,
    S: KeyValueStore,
{
    let snapshot = serde_json::to_value(session.snapshot())?;
    let can_advance = session.state() == SessionState::Answered && session.pending_timer().is_none();

    Ok(json!({
        "title": session.game().kind().to_string(),
        "timed": session.rules().is_timed(),
        "canAdvance": can_advance,
        "session": snapshot
    }))
}
