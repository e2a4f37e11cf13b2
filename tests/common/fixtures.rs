use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use learning_engine::model::{Catalog, CheckIn, LearnerProgress, Lesson, LessonFormat};

/// Installs a fmt subscriber so `RUST_LOG=debug cargo test` shows the
/// engine's decision events; repeated calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, n).expect("valid fixture date")
}

pub fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, hour, 5, 0)
        .single()
        .expect("valid fixture instant")
}

pub fn check_in(n: u32, mood: u8, anxiety: u8, sleep_hours: f64) -> CheckIn {
    CheckIn::new(day(n), mood, anxiety, sleep_hours)
}

pub fn all_formats() -> Vec<LessonFormat> {
    vec![
        LessonFormat::Text,
        LessonFormat::Video,
        LessonFormat::Audio,
        LessonFormat::Interactive,
        LessonFormat::MindMap,
    ]
}

pub fn lesson(id: &str, sequence_index: u32, formats: Vec<LessonFormat>) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: format!("Lesson {sequence_index}"),
        topic_tags: if sequence_index % 2 == 0 {
            vec!["grounding".to_string()]
        } else {
            vec!["reframing".to_string()]
        },
        available_formats: formats,
        sequence_index,
        estimated_duration_minutes: 10 + sequence_index,
        prerequisites: vec![],
    }
}

/// A linear module of `count` lessons, ids `lesson-0..`, every format offered.
pub fn module_catalog(count: u32) -> Catalog {
    let lessons = (0..count)
        .map(|idx| lesson(&format!("lesson-{idx}"), idx, all_formats()))
        .collect();
    Catalog::linear(lessons).expect("valid fixture catalog")
}

/// Progress with the first `count` catalog lessons completed at `quiz_score`.
pub fn completed_through(catalog: &Catalog, count: usize, quiz_score: f64) -> LearnerProgress {
    let mut progress = LearnerProgress::default();
    for (idx, lesson) in catalog.lessons().iter().take(count).enumerate() {
        progress
            .record_lesson_completion(&lesson.id, quiz_score, 12, false, day(idx as u32 + 1))
            .expect("fixture completion");
    }
    progress
}
