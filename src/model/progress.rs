use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::check_in::CheckIn;

/// Flat XP awarded for finishing a lesson, before the quiz bonus.
const COMPLETION_XP: u64 = 50;
/// Quiz bonus is the score halved, so a perfect quiz doubles the base award.
const QUIZ_XP_DIVISOR: f64 = 2.0;
/// XP required per level; level is always derived, never stored independently.
const XP_PER_LEVEL: u64 = 100;

/// Per-learner progress record. Owned by the caller; the engine only reads a
/// snapshot. All mutation goes through the `record_*` operations so the
/// one-check-in-per-day and no-duplicate-completion invariants hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProgress {
    /// Insertion order is completion order.
    pub completed_lesson_ids: Vec<String>,
    /// Lesson id -> quiz score, 0-100.
    pub quiz_scores: HashMap<String, f64>,
    pub time_spent_minutes: HashMap<String, u32>,
    pub practice_completed: HashMap<String, bool>,
    /// Chronological, append-only.
    pub check_ins: Vec<CheckIn>,
    pub last_active_date: Option<NaiveDate>,
    pub streak_days: u32,
    pub total_xp: u64,
    pub level: u32,
}

impl Default for LearnerProgress {
    fn default() -> Self {
        Self {
            completed_lesson_ids: Vec::new(),
            quiz_scores: HashMap::new(),
            time_spent_minutes: HashMap::new(),
            practice_completed: HashMap::new(),
            check_ins: Vec::new(),
            last_active_date: None,
            streak_days: 0,
            total_xp: 0,
            level: 1,
        }
    }
}

impl LearnerProgress {
    /// Appends a validated check-in. Rejects a second check-in for the same
    /// calendar day and anything dated before the latest entry.
    pub fn record_check_in(&mut self, check_in: CheckIn) -> Result<(), EngineError> {
        check_in.validate()?;
        if let Some(last) = self.check_ins.last() {
            if last.date == check_in.date {
                return Err(EngineError::DuplicateCheckIn {
                    date: check_in.date,
                });
            }
            if check_in.date < last.date {
                return Err(EngineError::OutOfOrderCheckIn {
                    date: check_in.date,
                    last: last.date,
                });
            }
        }
        self.touch(check_in.date);
        self.check_ins.push(check_in);
        Ok(())
    }

    /// Records a finished lesson: completion order, quiz score, time spent and
    /// practice flag, plus streak/XP/level bookkeeping.
    pub fn record_lesson_completion(
        &mut self,
        lesson_id: &str,
        quiz_score: f64,
        minutes: u32,
        practice_done: bool,
        date: NaiveDate,
    ) -> Result<(), EngineError> {
        if !quiz_score.is_finite() || !(0.0..=100.0).contains(&quiz_score) {
            return Err(EngineError::InvalidInput(format!(
                "quiz score must be in 0-100, got {quiz_score}"
            )));
        }
        if self.completed_lesson_ids.iter().any(|id| id == lesson_id) {
            return Err(EngineError::DuplicateCompletion {
                lesson_id: lesson_id.to_string(),
            });
        }

        self.completed_lesson_ids.push(lesson_id.to_string());
        self.quiz_scores.insert(lesson_id.to_string(), quiz_score);
        *self
            .time_spent_minutes
            .entry(lesson_id.to_string())
            .or_insert(0) += minutes;
        self.practice_completed
            .insert(lesson_id.to_string(), practice_done);

        self.touch(date);
        self.total_xp += COMPLETION_XP + (quiz_score / QUIZ_XP_DIVISOR).round() as u64;
        self.level = (1 + self.total_xp / XP_PER_LEVEL) as u32;
        Ok(())
    }

    pub fn latest_check_in(&self) -> Option<&CheckIn> {
        self.check_ins.last()
    }

    /// The last `window` check-ins, oldest first. Shorter histories return
    /// whatever exists.
    pub fn recent_check_ins(&self, window: usize) -> &[CheckIn] {
        let start = self.check_ins.len().saturating_sub(window);
        &self.check_ins[start..]
    }

    /// Streak rule: +1 on the day after the last activity, reset to 1 after a
    /// gap, unchanged for repeated activity on the same day.
    fn touch(&mut self, date: NaiveDate) {
        match self.last_active_date {
            None => self.streak_days = 1,
            Some(last) if last.succ_opt() == Some(date) => self.streak_days += 1,
            Some(last) if date > last => self.streak_days = 1,
            Some(_) => {}
        }
        if self.last_active_date.map_or(true, |last| date > last) {
            self.last_active_date = Some(date);
        }
    }
}
