use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonFormat {
    Text,
    Video,
    Audio,
    Interactive,
    MindMap,
}

impl LessonFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Interactive => "interactive",
            Self::MindMap => "mindmap",
        }
    }
}

/// Immutable curriculum content. `prerequisites` holds lesson ids that must be
/// completed first; `Catalog::linear` derives them from `sequence_index` order
/// for plain sequential modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub topic_tags: Vec<String>,
    pub available_formats: Vec<LessonFormat>,
    pub sequence_index: u32,
    pub estimated_duration_minutes: u32,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

/// An ordered, validated lesson catalog. Lessons are kept sorted by
/// `sequence_index`; prerequisite edges form an explicit graph so non-linear
/// curricula are representable without touching the selection policy.
#[derive(Debug, Clone)]
pub struct Catalog {
    lessons: Vec<Lesson>,
}

impl Catalog {
    pub fn new(mut lessons: Vec<Lesson>) -> Result<Self, EngineError> {
        let mut ids = HashSet::new();
        for lesson in &lessons {
            if !ids.insert(lesson.id.clone()) {
                return Err(EngineError::InvalidCatalog(format!(
                    "duplicate lesson id: {}",
                    lesson.id
                )));
            }
            if !lesson.available_formats.contains(&LessonFormat::Text) {
                return Err(EngineError::InvalidCatalog(format!(
                    "lesson {} does not offer the text baseline format",
                    lesson.id
                )));
            }
        }
        for lesson in &lessons {
            for prerequisite in &lesson.prerequisites {
                if *prerequisite == lesson.id {
                    return Err(EngineError::InvalidCatalog(format!(
                        "lesson {} lists itself as a prerequisite",
                        lesson.id
                    )));
                }
                if !ids.contains(prerequisite) {
                    return Err(EngineError::InvalidCatalog(format!(
                        "lesson {} requires unknown lesson {prerequisite}",
                        lesson.id
                    )));
                }
            }
        }
        lessons.sort_by(|a, b| a.sequence_index.cmp(&b.sequence_index));
        Ok(Self { lessons })
    }

    /// Builds a catalog for a linear module: each lesson's prerequisite is the
    /// lesson before it in `sequence_index` order.
    pub fn linear(mut lessons: Vec<Lesson>) -> Result<Self, EngineError> {
        lessons.sort_by(|a, b| a.sequence_index.cmp(&b.sequence_index));
        let ids: Vec<String> = lessons.iter().map(|l| l.id.clone()).collect();
        for (idx, lesson) in lessons.iter_mut().enumerate() {
            lesson.prerequisites = if idx == 0 {
                Vec::new()
            } else {
                vec![ids[idx - 1].clone()]
            };
        }
        Self::new(lessons)
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn get(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// The lowest-`sequence_index` lesson not yet completed whose
    /// prerequisites are all completed. `None` means the module is finished.
    pub fn next_candidate(&self, completed: &[String]) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| {
            !completed.contains(&lesson.id)
                && lesson
                    .prerequisites
                    .iter()
                    .all(|prerequisite| completed.contains(prerequisite))
        })
    }
}
