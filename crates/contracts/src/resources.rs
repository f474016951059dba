use serde::{Deserialize, Serialize};

// ============================================================================
// Resource abstraction
// ============================================================================

/// Common surface over the two uploadable resource kinds.
///
/// Both kinds share the same lifecycle: the backend assigns the id, stores
/// the uploaded file and flips the processing flag to `true` once its
/// asynchronous pipeline finishes. The client never sets the flag itself;
/// it only observes it through a fresh list call.
pub trait ResourceRecord: Clone {
    /// Backend collection path, relative to the API base.
    const API_PATH: &'static str;

    /// Singular label for UI copy and log messages.
    const KIND_LABEL: &'static str;

    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;

    /// ISO-8601 creation timestamp as the backend sends it.
    fn created_at(&self) -> &str;

    /// Whether backend-side processing has completed.
    fn is_ready(&self) -> bool;
}

// ============================================================================
// Study material
// ============================================================================

/// An uploaded study document. `is_indexed` goes `true` once the backend
/// has ingested it into the knowledge graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyMaterial {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_path: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_indexed: bool,
    #[serde(default)]
    pub indexed_at: Option<String>,
}

impl ResourceRecord for StudyMaterial {
    const API_PATH: &'static str = "/resources/study-materials/";
    const KIND_LABEL: &'static str = "study material";

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn is_ready(&self) -> bool {
        self.is_indexed
    }
}

// ============================================================================
// Question bank
// ============================================================================

/// An uploaded question bank. `is_processed` goes `true` once question
/// generation has finished on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_path: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_processed: bool,
}

impl ResourceRecord for QuestionBank {
    const API_PATH: &'static str = "/resources/question-banks/";
    const KIND_LABEL: &'static str = "question bank";

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn is_ready(&self) -> bool {
        self.is_processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_study_material() {
        let json = r#"{
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "title": "Graph Theory Notes",
            "description": "Lecture notes, weeks 1-4",
            "file_path": "uploads/study_materials/graph-theory.pdf",
            "created_at": "2025-03-15T14:02:26.123456",
            "updated_at": "2025-03-15T14:02:26.123456",
            "is_indexed": true,
            "indexed_at": "2025-03-15T14:10:01.000000"
        }"#;

        let m: StudyMaterial = serde_json::from_str(json).unwrap();
        assert_eq!(m.id(), "7c9e6679-7425-40de-944b-e07fc1f90ae7");
        assert_eq!(m.title(), "Graph Theory Notes");
        assert_eq!(m.description(), Some("Lecture notes, weeks 1-4"));
        assert!(m.is_ready());
    }

    #[test]
    fn deserialize_study_material_without_optional_fields() {
        // description and indexed_at are nullable and may be absent entirely
        let json = r#"{
            "id": "m1",
            "title": "Untitled",
            "file_path": "uploads/study_materials/x.pdf",
            "created_at": "2025-03-15T14:02:26",
            "updated_at": "2025-03-15T14:02:26",
            "is_indexed": false
        }"#;

        let m: StudyMaterial = serde_json::from_str(json).unwrap();
        assert_eq!(m.description(), None);
        assert_eq!(m.indexed_at, None);
        assert!(!m.is_ready());
    }

    #[test]
    fn deserialize_question_bank() {
        let json = r#"{
            "id": "qb-1",
            "title": "Midterm Bank",
            "description": null,
            "file_path": "uploads/question_banks/midterm.pdf",
            "created_at": "2025-04-01T09:00:00",
            "updated_at": "2025-04-01T09:00:00",
            "is_processed": false
        }"#;

        let b: QuestionBank = serde_json::from_str(json).unwrap();
        assert_eq!(b.title(), "Midterm Bank");
        assert_eq!(b.description(), None);
        assert!(!b.is_ready());
    }

    #[test]
    fn kind_paths_differ() {
        assert_eq!(StudyMaterial::API_PATH, "/resources/study-materials/");
        assert_eq!(QuestionBank::API_PATH, "/resources/question-banks/");
    }
}
