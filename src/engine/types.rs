//! Derived value types. All of these are recomputed on every recommendation
//! and never persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::LessonFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Stable,
    Improving,
    Declining,
    Volatile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capacity {
    High,
    Medium,
    Low,
    Crisis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportType {
    Immediate,
    Gentle,
    Monitoring,
}

/// Coarse affective/capacity label derived from the check-in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalState {
    pub stability: Stability,
    pub capacity: Capacity,
    pub needs_support: bool,
    /// Present iff `needs_support`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub support_type: Option<SupportType>,
}

impl EmotionalState {
    /// Safe default for a learner with no check-in at all.
    pub fn baseline() -> Self {
        Self {
            stability: Stability::Stable,
            capacity: Capacity::High,
            needs_support: false,
            support_type: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadLevel {
    Low,
    Medium,
    High,
    Overload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceRecommendation {
    Challenging,
    Moderate,
    Light,
    Rest,
}

/// The four workload inputs, each scored 0-10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadFactors {
    pub sleep: f64,
    pub anxiety: f64,
    pub energy: f64,
    pub time_of_day: f64,
}

impl LoadFactors {
    pub fn mean(&self) -> f64 {
        (self.sleep + self.anxiety + self.energy + self.time_of_day) / 4.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveLoad {
    pub level: LoadLevel,
    pub factors: LoadFactors,
    pub recommendation: PaceRecommendation,
}

impl CognitiveLoad {
    /// Neutral default when no check-in is available.
    pub fn neutral() -> Self {
        Self {
            level: LoadLevel::Medium,
            factors: LoadFactors {
                sleep: 5.0,
                anxiety: 5.0,
                energy: 5.0,
                time_of_day: 5.0,
            },
            recommendation: PaceRecommendation::Moderate,
        }
    }
}

/// Proficiency estimate over the learner's completed work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryLevel {
    /// 0-1.
    pub overall: f64,
    /// Topic tag -> 0-1 average; empty when no topic metadata is available.
    pub by_topic: HashMap<String, f64>,
    /// 0-1, saturates as completions accumulate.
    pub confidence: f64,
    pub readiness_for_new: bool,
}

impl MasteryLevel {
    /// Cold-start default: no evidence, but always eligible to begin.
    pub fn cold_start() -> Self {
        Self {
            overall: 0.0,
            by_topic: HashMap::new(),
            confidence: 0.0,
            readiness_for_new: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalFit {
    Perfect,
    Good,
    Okay,
    Challenging,
}

/// The engine's sole output, rendered by the presentation layer with `reason`
/// shown verbatim to the learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecommendation {
    pub lesson_id: String,
    pub reason: String,
    /// 0-100.
    pub confidence: f64,
    pub emotional_fit: EmotionalFit,
    pub recommended_format: LessonFormat,
    pub adaptations: Vec<String>,
    pub estimated_duration_minutes: u32,
}
