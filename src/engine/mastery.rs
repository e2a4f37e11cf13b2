//! Mastery estimation from completion and quiz history.

use std::collections::HashMap;

use crate::engine::config::MasteryConfig;
use crate::engine::types::MasteryLevel;
use crate::error::EngineError;
use crate::model::{Catalog, LearnerProgress};

/// Estimates per-learner proficiency from recorded quiz scores.
///
/// A simplified proxy, not a Bayesian model: `overall` is the mean quiz score,
/// `confidence` saturates with the number of completed lessons. With a catalog
/// available, scores are additionally bucketed per topic tag; without topic
/// metadata `by_topic` stays empty. Completions without any quiz score leave
/// the learner eligible for new material (no evidence is not failure).
pub fn estimate(
    progress: &LearnerProgress,
    catalog: Option<&Catalog>,
    config: &MasteryConfig,
) -> Result<MasteryLevel, EngineError> {
    if progress.completed_lesson_ids.is_empty() {
        return Ok(MasteryLevel::cold_start());
    }

    for (lesson_id, score) in &progress.quiz_scores {
        if !score.is_finite() || !(0.0..=100.0).contains(score) {
            return Err(EngineError::InvalidInput(format!(
                "quiz score for {lesson_id} must be in 0-100, got {score}"
            )));
        }
    }

    let confidence = (progress.completed_lesson_ids.len() as f64
        / config.confidence_saturation_count as f64)
        .min(1.0);

    let (overall, readiness_for_new) = if progress.quiz_scores.is_empty() {
        (0.0, true)
    } else {
        let mean =
            progress.quiz_scores.values().sum::<f64>() / progress.quiz_scores.len() as f64;
        (mean / 100.0, mean >= config.readiness_score_threshold)
    };

    let by_topic = catalog
        .map(|catalog| bucket_by_topic(progress, catalog))
        .unwrap_or_default();

    Ok(MasteryLevel {
        overall,
        by_topic,
        confidence,
        readiness_for_new,
    })
}

fn bucket_by_topic(progress: &LearnerProgress, catalog: &Catalog) -> HashMap<String, f64> {
    let mut sums: HashMap<String, (f64, u32)> = HashMap::new();
    for (lesson_id, score) in &progress.quiz_scores {
        let Some(lesson) = catalog.get(lesson_id) else {
            continue;
        };
        for tag in &lesson.topic_tags {
            let entry = sums.entry(tag.clone()).or_insert((0.0, 0));
            entry.0 += score / 100.0;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(tag, (sum, count))| (tag, sum / count as f64))
        .collect()
}
