//! Cognitive load estimation from the latest check-in and time of day.

use chrono::{DateTime, Timelike, Utc};

use crate::engine::config::CognitiveConfig;
use crate::engine::types::{CognitiveLoad, LoadFactors, LoadLevel, PaceRecommendation};
use crate::error::EngineError;
use crate::model::{CheckIn, LearnerProgress};

/// Estimates how much new mental effort the learner can absorb right now.
///
/// `current` defaults to the latest recorded check-in; with none at all the
/// estimate is the neutral default. `evaluated_at` is the learner-local wall
/// clock, passed in explicitly so repeated invocations are reproducible.
pub fn estimate(
    progress: &LearnerProgress,
    current: Option<&CheckIn>,
    evaluated_at: DateTime<Utc>,
    config: &CognitiveConfig,
) -> Result<CognitiveLoad, EngineError> {
    let current = match current.or_else(|| progress.latest_check_in()) {
        Some(check_in) => check_in,
        None => return Ok(CognitiveLoad::neutral()),
    };
    current.validate()?;

    let factors = LoadFactors {
        sleep: (current.sleep_hours * config.sleep_scale).min(config.sleep_score_cap),
        anxiety: 10.0 - current.anxiety as f64,
        energy: current.energy_or_default() as f64,
        time_of_day: hour_score(evaluated_at.hour()),
    };

    let mean = factors.mean();
    let (level, recommendation) = if mean >= config.challenging_threshold {
        (LoadLevel::Low, PaceRecommendation::Challenging)
    } else if mean >= config.moderate_threshold {
        (LoadLevel::Medium, PaceRecommendation::Moderate)
    } else if mean >= config.light_threshold {
        (LoadLevel::High, PaceRecommendation::Light)
    } else {
        (LoadLevel::Overload, PaceRecommendation::Rest)
    };

    Ok(CognitiveLoad {
        level,
        factors,
        recommendation,
    })
}

/// Wall-clock hour to 0-10 alertness score: peak focus blocks score highest,
/// late night lowest.
fn hour_score(hour: u32) -> f64 {
    match hour {
        10..=12 | 15..=17 => 8.0,
        8..=9 | 13..=14 => 6.0,
        18..=20 => 5.0,
        _ => 3.0,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn at_hour(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, hour, 30, 0).unwrap()
    }

    #[test]
    fn no_check_in_returns_neutral_default() {
        let progress = LearnerProgress::default();
        let load = estimate(&progress, None, at_hour(11), &CognitiveConfig::default()).unwrap();
        assert_eq!(load, CognitiveLoad::neutral());
    }

    #[test]
    fn rested_morning_scores_low_load() {
        let current = CheckIn::new(day(), 8, 1, 9.0).with_energy(9);
        let progress = LearnerProgress::default();
        let load = estimate(
            &progress,
            Some(&current),
            at_hour(11),
            &CognitiveConfig::default(),
        )
        .unwrap();

        assert_eq!(load.factors.sleep, 10.0);
        assert_eq!(load.factors.anxiety, 9.0);
        assert_eq!(load.factors.energy, 9.0);
        assert_eq!(load.factors.time_of_day, 8.0);
        assert_eq!(load.level, LoadLevel::Low);
        assert_eq!(load.recommendation, PaceRecommendation::Challenging);
    }

    #[test]
    fn depleted_night_scores_overload() {
        let current = CheckIn::new(day(), 3, 9, 3.0).with_energy(2);
        let progress = LearnerProgress::default();
        let load = estimate(
            &progress,
            Some(&current),
            at_hour(2),
            &CognitiveConfig::default(),
        )
        .unwrap();

        assert_eq!(load.level, LoadLevel::Overload);
        assert_eq!(load.recommendation, PaceRecommendation::Rest);
    }

    #[test]
    fn eight_hours_of_sleep_saturates_the_score() {
        let current = CheckIn::new(day(), 6, 4, 12.0);
        let progress = LearnerProgress::default();
        let load = estimate(
            &progress,
            Some(&current),
            at_hour(11),
            &CognitiveConfig::default(),
        )
        .unwrap();
        assert_eq!(load.factors.sleep, 10.0);
    }

    #[test]
    fn missing_energy_scores_as_five() {
        let current = CheckIn::new(day(), 6, 4, 7.0);
        let progress = LearnerProgress::default();
        let load = estimate(
            &progress,
            Some(&current),
            at_hour(11),
            &CognitiveConfig::default(),
        )
        .unwrap();
        assert_eq!(load.factors.energy, 5.0);
    }

    #[test]
    fn hour_buckets_match_focus_blocks() {
        assert_eq!(hour_score(11), 8.0);
        assert_eq!(hour_score(16), 8.0);
        assert_eq!(hour_score(8), 6.0);
        assert_eq!(hour_score(13), 6.0);
        assert_eq!(hour_score(19), 5.0);
        assert_eq!(hour_score(23), 3.0);
        assert_eq!(hour_score(3), 3.0);
    }

    #[test]
    fn latest_check_in_is_used_when_current_omitted() {
        let mut progress = LearnerProgress::default();
        progress
            .record_check_in(CheckIn::new(day(), 8, 1, 9.0).with_energy(9))
            .unwrap();
        let load = estimate(&progress, None, at_hour(11), &CognitiveConfig::default()).unwrap();
        assert_eq!(load.level, LoadLevel::Low);
    }

    #[test]
    fn out_of_range_check_in_fails_fast() {
        let mut bad = CheckIn::new(day(), 6, 4, 7.0);
        bad.sleep_hours = 30.0;
        let progress = LearnerProgress::default();
        let result = estimate(
            &progress,
            Some(&bad),
            at_hour(11),
            &CognitiveConfig::default(),
        );
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }
}
