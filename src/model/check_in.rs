use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Energy score assumed when a learner skips the optional energy question.
pub const DEFAULT_ENERGY: u8 = 5;

/// A learner's self-reported daily wellbeing sample. At most one per learner
/// per calendar day; `LearnerProgress::record_check_in` enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub date: NaiveDate,
    /// 1-10, higher = better mood.
    pub mood: u8,
    /// 1-10, higher = more anxious.
    pub anxiety: u8,
    /// 0-24.
    pub sleep_hours: f64,
    /// 1-10, optional; `energy_or_default` substitutes 5 when absent.
    #[serde(default)]
    pub energy: Option<u8>,
    #[serde(default)]
    pub note: Option<String>,
    /// Capture instant; defaults to midnight of `date` until overridden.
    pub timestamp: DateTime<Utc>,
}

impl CheckIn {
    pub fn new(date: NaiveDate, mood: u8, anxiety: u8, sleep_hours: f64) -> Self {
        Self {
            date,
            mood,
            anxiety,
            sleep_hours,
            energy: None,
            note: None,
            timestamp: date.and_time(NaiveTime::MIN).and_utc(),
        }
    }

    pub fn with_energy(mut self, energy: u8) -> Self {
        self.energy = Some(energy);
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn energy_or_default(&self) -> u8 {
        self.energy.unwrap_or(DEFAULT_ENERGY)
    }

    /// Range checks for every self-reported field. Out-of-range values are
    /// rejected here rather than clamped anywhere downstream.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(1..=10).contains(&self.mood) {
            return Err(EngineError::InvalidInput(format!(
                "mood must be in 1-10, got {}",
                self.mood
            )));
        }
        if !(1..=10).contains(&self.anxiety) {
            return Err(EngineError::InvalidInput(format!(
                "anxiety must be in 1-10, got {}",
                self.anxiety
            )));
        }
        if !self.sleep_hours.is_finite() || !(0.0..=24.0).contains(&self.sleep_hours) {
            return Err(EngineError::InvalidInput(format!(
                "sleepHours must be in 0-24, got {}",
                self.sleep_hours
            )));
        }
        if let Some(energy) = self.energy {
            if !(1..=10).contains(&energy) {
                return Err(EngineError::InvalidInput(format!(
                    "energy must be in 1-10, got {energy}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn valid_check_in_accepted() {
        assert!(CheckIn::new(day(), 7, 3, 7.5).validate().is_ok());
    }

    #[test]
    fn mood_out_of_range_rejected() {
        assert!(CheckIn::new(day(), 0, 3, 7.5).validate().is_err());
        assert!(CheckIn::new(day(), 11, 3, 7.5).validate().is_err());
    }

    #[test]
    fn anxiety_out_of_range_rejected() {
        assert!(CheckIn::new(day(), 5, 0, 7.5).validate().is_err());
        assert!(CheckIn::new(day(), 5, 11, 7.5).validate().is_err());
    }

    #[test]
    fn sleep_out_of_range_rejected() {
        assert!(CheckIn::new(day(), 5, 5, -0.5).validate().is_err());
        assert!(CheckIn::new(day(), 5, 5, 24.5).validate().is_err());
        assert!(CheckIn::new(day(), 5, 5, f64::NAN).validate().is_err());
    }

    #[test]
    fn energy_out_of_range_rejected() {
        assert!(CheckIn::new(day(), 5, 5, 8.0)
            .with_energy(0)
            .validate()
            .is_err());
    }

    #[test]
    fn missing_energy_defaults_to_five() {
        assert_eq!(CheckIn::new(day(), 5, 5, 8.0).energy_or_default(), 5);
        assert_eq!(
            CheckIn::new(day(), 5, 5, 8.0)
                .with_energy(9)
                .energy_or_default(),
            9
        );
    }

    #[test]
    fn serde_roundtrip() {
        let check_in = CheckIn::new(day(), 6, 4, 7.0).with_note("slept ok");
        let encoded = serde_json::to_string(&check_in).unwrap();
        assert!(encoded.contains("sleepHours"));
        let decoded: CheckIn = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, check_in);
    }
}
