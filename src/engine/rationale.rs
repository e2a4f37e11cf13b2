//! Learner-facing rationale strings.
//!
//! Pure data-to-text composition over the already-computed signals: capacity
//! commentary, then sleep/anxiety commentary, then format justification,
//! joined into one sentence. Nothing here feeds back into the numeric stages,
//! and nothing is claimed that the signals don't already say.

use crate::engine::types::{Capacity, CognitiveLoad, EmotionalState};
use crate::model::LessonFormat;

/// Factor scores below this read as "running low" in the commentary.
const LOW_FACTOR_SCORE: f64 = 5.0;

pub fn compose(
    emotional: &EmotionalState,
    load: &CognitiveLoad,
    format: LessonFormat,
) -> String {
    let mut clauses = vec![capacity_clause(emotional.capacity).to_string()];
    clauses.push(factor_clause(load).to_string());
    clauses.push(format_clause(format).to_string());
    format!("{}.", clauses.join(", "))
}

fn capacity_clause(capacity: Capacity) -> &'static str {
    match capacity {
        Capacity::High => "You have good capacity for learning right now",
        Capacity::Medium => "You're in a steady place for learning today",
        Capacity::Low => "Today looks like a day to take it easier",
        Capacity::Crisis => "Right now the priority is going gently",
    }
}

fn factor_clause(load: &CognitiveLoad) -> &'static str {
    let short_sleep = load.factors.sleep < LOW_FACTOR_SCORE;
    let high_anxiety = load.factors.anxiety < LOW_FACTOR_SCORE;
    match (short_sleep, high_anxiety) {
        (true, true) => "sleep has been short and anxiety is running high",
        (true, false) => "sleep has been on the short side",
        (false, true) => "anxiety is running higher than usual",
        (false, false) => "sleep and anxiety both look manageable",
    }
}

fn format_clause(format: LessonFormat) -> &'static str {
    match format {
        LessonFormat::Text => "so a short read keeps things focused",
        LessonFormat::Video => "so a video lets you absorb without heavy effort",
        LessonFormat::Audio => "so an audio version spares you the screen",
        LessonFormat::Interactive => "so a hands-on session will make the most of it",
        LessonFormat::MindMap => "so a light mind-map overview is the gentlest way in",
    }
}
