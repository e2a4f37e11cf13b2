//! Lesson selection policy: combines the three derived signals with the
//! catalog to pick the next lesson, format, confidence and rationale.

use chrono::{DateTime, Utc};

use crate::engine::config::{EngineConfig, PolicyConfig};
use crate::engine::types::{
    Capacity, CognitiveLoad, EmotionalFit, EmotionalState, LessonRecommendation, LoadLevel,
    MasteryLevel, PaceRecommendation, Stability,
};
use crate::engine::{cognitive, emotional, mastery, rationale};
use crate::error::EngineError;
use crate::model::{Catalog, CheckIn, LearnerProgress, LessonFormat};

/// Picks the next lesson for one learner at one point in time.
///
/// Returns `Ok(None)` when every lesson in the catalog is completed; the
/// caller presents module-completion UI for that case. `evaluated_at` is the
/// learner-local wall clock and must be supplied by the caller so the result
/// is a pure function of its inputs.
pub fn select_next_lesson(
    catalog: &Catalog,
    progress: &LearnerProgress,
    current: Option<&CheckIn>,
    evaluated_at: DateTime<Utc>,
    config: &EngineConfig,
) -> Result<Option<LessonRecommendation>, EngineError> {
    let candidate = match catalog.next_candidate(&progress.completed_lesson_ids) {
        Some(lesson) => lesson,
        None => return Ok(None),
    };

    let emotional = emotional::classify(&progress.check_ins, current, &config.emotional)?;
    let load = cognitive::estimate(progress, current, evaluated_at, &config.cognitive)?;
    let mastery = mastery::estimate(progress, Some(catalog), &config.mastery)?;

    let preferred = preferred_format(&emotional, &load);
    let recommended_format = if candidate.available_formats.contains(&preferred) {
        preferred
    } else {
        LessonFormat::Text
    };

    let emotional_fit = emotional_fit(&emotional, &load);
    let confidence = confidence_score(&emotional, &mastery, &config.policy);
    let reason = rationale::compose(&emotional, &load, recommended_format);
    let adaptations = adaptations(&emotional, &load, recommended_format);

    tracing::debug!(
        lesson_id = %candidate.id,
        format = recommended_format.as_str(),
        confidence,
        "lesson selected"
    );

    Ok(Some(LessonRecommendation {
        lesson_id: candidate.id.clone(),
        reason,
        confidence,
        emotional_fit,
        recommended_format,
        adaptations,
        estimated_duration_minutes: candidate.estimated_duration_minutes,
    }))
}

/// Fixed format precedence; the caller intersects with the candidate's
/// declared formats and falls back to text.
fn preferred_format(emotional: &EmotionalState, load: &CognitiveLoad) -> LessonFormat {
    if emotional.capacity == Capacity::Crisis {
        LessonFormat::MindMap
    } else if load.level == LoadLevel::Overload {
        LessonFormat::Audio
    } else if load.level == LoadLevel::High {
        LessonFormat::Video
    } else if load.level == LoadLevel::Low && emotional.capacity == Capacity::High {
        LessonFormat::Interactive
    } else {
        LessonFormat::Text
    }
}

/// A crisis never rates above okay; here it rates as the worst fit outright.
fn emotional_fit(emotional: &EmotionalState, load: &CognitiveLoad) -> EmotionalFit {
    if emotional.capacity == Capacity::Crisis {
        return EmotionalFit::Challenging;
    }
    if emotional.capacity == Capacity::High
        && load.recommendation == PaceRecommendation::Challenging
    {
        return EmotionalFit::Perfect;
    }
    if matches!(emotional.capacity, Capacity::High | Capacity::Medium) && !emotional.needs_support {
        return EmotionalFit::Good;
    }
    EmotionalFit::Okay
}

fn confidence_score(
    emotional: &EmotionalState,
    mastery: &MasteryLevel,
    config: &PolicyConfig,
) -> f64 {
    let mut score = config.base_confidence;
    if mastery.readiness_for_new {
        score += config.readiness_bonus;
    }
    if matches!(emotional.stability, Stability::Stable | Stability::Improving) {
        score += config.stability_bonus;
    }
    if emotional.needs_support {
        score -= config.support_penalty;
    }
    score += mastery.confidence * config.mastery_confidence_scale;
    score.clamp(0.0, 100.0)
}

fn adaptations(
    emotional: &EmotionalState,
    load: &CognitiveLoad,
    format: LessonFormat,
) -> Vec<String> {
    let mut hints = Vec::new();
    if matches!(load.level, LoadLevel::High | LoadLevel::Overload) {
        hints.push("shorten to essentials".to_string());
    }
    if format == LessonFormat::Audio {
        hints.push("offer audio alternative".to_string());
    }
    if emotional.needs_support {
        hints.push("flag for human follow-up".to_string());
    }
    hints
}
