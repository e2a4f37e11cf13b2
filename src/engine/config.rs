use serde::{Deserialize, Serialize};

/// Thresholds for the emotional state rules. All mood/anxiety values are on
/// the 1-10 check-in scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalConfig {
    /// Rolling-average window over the most recent check-ins.
    pub window_size: usize,
    pub crisis_mood_max: u8,
    pub crisis_anxiety_min: u8,
    pub low_mood_max: u8,
    pub high_anxiety_min: u8,
    pub short_sleep_hours: f64,
    /// How far above the rolling mood average counts as improving.
    pub improving_mood_delta: f64,
}

impl Default for EmotionalConfig {
    fn default() -> Self {
        Self {
            window_size: 7,
            crisis_mood_max: 2,
            crisis_anxiety_min: 8,
            low_mood_max: 4,
            high_anxiety_min: 7,
            short_sleep_hours: 5.0,
            improving_mood_delta: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveConfig {
    /// Sleep hours to factor-score multiplier; 8h saturates at the cap.
    pub sleep_scale: f64,
    pub sleep_score_cap: f64,
    /// Factor-average thresholds, highest first.
    pub challenging_threshold: f64,
    pub moderate_threshold: f64,
    pub light_threshold: f64,
}

impl Default for CognitiveConfig {
    fn default() -> Self {
        Self {
            sleep_scale: 1.25,
            sleep_score_cap: 10.0,
            challenging_threshold: 7.5,
            moderate_threshold: 5.5,
            light_threshold: 3.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryConfig {
    /// Mean quiz score (0-100) required to be ready for new material.
    pub readiness_score_threshold: f64,
    /// Completed-lesson count at which estimate confidence saturates.
    pub confidence_saturation_count: u32,
}

impl Default for MasteryConfig {
    fn default() -> Self {
        Self {
            readiness_score_threshold: 70.0,
            confidence_saturation_count: 10,
        }
    }
}

/// Confidence scoring weights. Tunable defaults, not sacred values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    pub base_confidence: f64,
    pub readiness_bonus: f64,
    pub stability_bonus: f64,
    pub support_penalty: f64,
    pub mastery_confidence_scale: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            base_confidence: 50.0,
            readiness_bonus: 20.0,
            stability_bonus: 15.0,
            support_penalty: 25.0,
            mastery_confidence_scale: 15.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default)]
    pub emotional: EmotionalConfig,
    #[serde(default)]
    pub cognitive: CognitiveConfig,
    #[serde(default)]
    pub mastery: MasteryConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.emotional.window_size == 0 {
            return Err("emotional.window_size must be > 0".to_string());
        }
        if !(1..=10).contains(&self.emotional.crisis_mood_max) {
            return Err("emotional.crisis_mood_max must be in [1,10]".to_string());
        }
        if !(1..=10).contains(&self.emotional.crisis_anxiety_min) {
            return Err("emotional.crisis_anxiety_min must be in [1,10]".to_string());
        }
        if !(1..=10).contains(&self.emotional.low_mood_max) {
            return Err("emotional.low_mood_max must be in [1,10]".to_string());
        }
        if !(1..=10).contains(&self.emotional.high_anxiety_min) {
            return Err("emotional.high_anxiety_min must be in [1,10]".to_string());
        }
        if !(0.0..=24.0).contains(&self.emotional.short_sleep_hours) {
            return Err("emotional.short_sleep_hours must be in [0,24]".to_string());
        }
        if self.emotional.improving_mood_delta < 0.0 {
            return Err("emotional.improving_mood_delta must be >= 0".to_string());
        }

        if self.cognitive.sleep_scale <= 0.0 {
            return Err("cognitive.sleep_scale must be > 0".to_string());
        }
        if !(0.0..=10.0).contains(&self.cognitive.sleep_score_cap)
            || self.cognitive.sleep_score_cap == 0.0
        {
            return Err("cognitive.sleep_score_cap must be in (0,10]".to_string());
        }
        let ordered = self.cognitive.challenging_threshold > self.cognitive.moderate_threshold
            && self.cognitive.moderate_threshold > self.cognitive.light_threshold
            && self.cognitive.light_threshold > 0.0;
        if !ordered || self.cognitive.challenging_threshold > 10.0 {
            return Err(
                "cognitive thresholds must satisfy 0 < light < moderate < challenging <= 10"
                    .to_string(),
            );
        }

        if !(0.0..=100.0).contains(&self.mastery.readiness_score_threshold) {
            return Err("mastery.readiness_score_threshold must be in [0,100]".to_string());
        }
        if self.mastery.confidence_saturation_count == 0 {
            return Err("mastery.confidence_saturation_count must be > 0".to_string());
        }

        if !(0.0..=100.0).contains(&self.policy.base_confidence) {
            return Err("policy.base_confidence must be in [0,100]".to_string());
        }
        if self.policy.readiness_bonus < 0.0
            || self.policy.stability_bonus < 0.0
            || self.policy.support_penalty < 0.0
            || self.policy.mastery_confidence_scale < 0.0
        {
            return Err("policy weights must be >= 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.cognitive.moderate_threshold = 9.0;
        assert!(cfg.validate().is_err());

        let mut cfg = EngineConfig::default();
        cfg.emotional.window_size = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = EngineConfig::default();
        cfg.policy.support_penalty = -1.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: EngineConfig =
            serde_json::from_str(r#"{"policy":{"baseConfidence":40.0,"readinessBonus":20.0,"stabilityBonus":15.0,"supportPenalty":25.0,"masteryConfidenceScale":15.0}}"#)
                .unwrap();
        assert_eq!(cfg.policy.base_confidence, 40.0);
        assert_eq!(cfg.emotional.window_size, 7);
    }
}
