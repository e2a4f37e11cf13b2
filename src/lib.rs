//! Adaptive learning recommendation engine.
//!
//! Decides, for a single learner at a single point in time, which lesson to
//! present next, in which format, with what confidence, and why. Four pure
//! stages feed one orchestrator: emotional state classification, cognitive
//! load estimation, mastery estimation, and the selection policy. The crate
//! owns no storage and performs no I/O; callers hand in a snapshot (check-in
//! history, progress record, lesson catalog) plus the evaluation time and get
//! back one [`engine::types::LessonRecommendation`].

pub mod engine;
pub mod error;
pub mod model;

pub use engine::config::EngineConfig;
pub use engine::types::{
    Capacity, CognitiveLoad, EmotionalFit, EmotionalState, LessonRecommendation, LoadFactors,
    LoadLevel, MasteryLevel, PaceRecommendation, Stability, SupportType,
};
pub use engine::RecommendationEngine;
pub use error::EngineError;
pub use model::{Catalog, CheckIn, LearnerProgress, Lesson, LessonFormat};
