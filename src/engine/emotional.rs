//! Emotional state classification over the check-in history.

use crate::engine::config::EmotionalConfig;
use crate::engine::types::{Capacity, EmotionalState, Stability, SupportType};
use crate::error::EngineError;
use crate::model::CheckIn;

/// Classifies the learner's affective capacity from the check-in history.
///
/// `current` defaults to the most recent check-in. The rules are ordered and
/// the first match wins; with no check-in at all the classifier returns the
/// safe baseline for a brand-new learner. History entries are assumed to have
/// passed ingestion; the current check-in is re-validated so out-of-range
/// values fail fast here instead of skewing a classification.
pub fn classify(
    check_ins: &[CheckIn],
    current: Option<&CheckIn>,
    config: &EmotionalConfig,
) -> Result<EmotionalState, EngineError> {
    let current = match current.or_else(|| check_ins.last()) {
        Some(check_in) => check_in,
        None => return Ok(EmotionalState::baseline()),
    };
    current.validate()?;

    if current.mood <= config.crisis_mood_max && current.anxiety >= config.crisis_anxiety_min {
        return Ok(EmotionalState {
            stability: Stability::Volatile,
            capacity: Capacity::Crisis,
            needs_support: true,
            support_type: Some(SupportType::Immediate),
        });
    }

    if current.mood <= config.low_mood_max
        || current.anxiety >= config.high_anxiety_min
        || current.sleep_hours < config.short_sleep_hours
    {
        return Ok(EmotionalState {
            stability: Stability::Declining,
            capacity: Capacity::Low,
            needs_support: true,
            support_type: Some(SupportType::Gentle),
        });
    }

    let rolling_mood =
        window_mean(check_ins, config.window_size, |c| c.mood as f64).unwrap_or(current.mood as f64);
    if current.mood as f64 > rolling_mood + config.improving_mood_delta {
        return Ok(EmotionalState {
            stability: Stability::Improving,
            capacity: Capacity::High,
            needs_support: false,
            support_type: None,
        });
    }

    Ok(EmotionalState {
        stability: Stability::Stable,
        capacity: Capacity::Medium,
        needs_support: false,
        support_type: None,
    })
}

fn window_mean(
    check_ins: &[CheckIn],
    window: usize,
    value: impl Fn(&CheckIn) -> f64,
) -> Option<f64> {
    if check_ins.is_empty() {
        return None;
    }
    let start = check_ins.len().saturating_sub(window);
    let recent = &check_ins[start..];
    Some(recent.iter().map(value).sum::<f64>() / recent.len() as f64)
}
