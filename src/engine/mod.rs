pub mod cognitive;
pub mod config;
pub mod emotional;
pub mod mastery;
pub mod policy;
pub mod rationale;
pub mod types;

use chrono::{DateTime, Utc};

use crate::error::EngineError;
use crate::model::{Catalog, CheckIn, LearnerProgress};

use config::EngineConfig;
use types::{CognitiveLoad, EmotionalState, LessonRecommendation, MasteryLevel};

/// Facade over the four pure stages, holding the validated configuration.
///
/// Stateless and side-effect-free: every method is a pure function of the
/// snapshot it is handed plus the explicit `evaluated_at` clock, so instances
/// can be shared freely across threads and calls for different learners never
/// interact. The caller is responsible for handing in a consistent progress
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Coarse affective/capacity label from the check-in history; `current`
    /// defaults to the most recent check-in.
    pub fn classify_emotional_state(
        &self,
        check_ins: &[CheckIn],
        current: Option<&CheckIn>,
    ) -> Result<EmotionalState, EngineError> {
        emotional::classify(check_ins, current, &self.config.emotional)
    }

    /// Workload tolerance from the latest check-in and the supplied
    /// learner-local evaluation time.
    pub fn estimate_cognitive_load(
        &self,
        progress: &LearnerProgress,
        current: Option<&CheckIn>,
        evaluated_at: DateTime<Utc>,
    ) -> Result<CognitiveLoad, EngineError> {
        cognitive::estimate(progress, current, evaluated_at, &self.config.cognitive)
    }

    /// Proficiency estimate from quiz/completion history. Per-topic buckets
    /// need lesson metadata, so this standalone form leaves `by_topic` empty;
    /// `select_next_lesson` fills it from the catalog.
    pub fn estimate_mastery(
        &self,
        progress: &LearnerProgress,
    ) -> Result<MasteryLevel, EngineError> {
        mastery::estimate(progress, None, &self.config.mastery)
    }

    /// The orchestrator: one lesson, format, confidence and rationale, or
    /// `Ok(None)` once the module is complete.
    pub fn select_next_lesson(
        &self,
        catalog: &Catalog,
        progress: &LearnerProgress,
        current: Option<&CheckIn>,
        evaluated_at: DateTime<Utc>,
    ) -> Result<Option<LessonRecommendation>, EngineError> {
        policy::select_next_lesson(catalog, progress, current, evaluated_at, &self.config)
    }
}
