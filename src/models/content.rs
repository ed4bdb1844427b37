// src/models/content.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::question::{QuizDefinition, RawQuestion};

fn default_theme() -> String {
    "Minimalist".to_string()
}

/// DTO for lecture generation; forwarded as-is to the content service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateLectureRequest {
    #[validate(length(min = 1, max = 500, message = "Prompt is required."))]
    pub prompt: String,

    /// Slide theme: Minimalist, Chalkboard or Corporate.
    #[serde(default = "default_theme")]
    #[validate(length(max = 50))]
    pub theme: String,
}

/// `/generate` response body as the content service sends it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLectureAssets {
    #[serde(default)]
    pub slides_path: Option<String>,
    #[serde(default)]
    pub voice_path: Option<String>,
    #[serde(default)]
    pub video_path: Option<String>,
    #[serde(default)]
    pub video_local_path: Option<String>,
    #[serde(default)]
    pub slide_images: Vec<String>,
    #[serde(default)]
    pub quiz: Vec<RawQuestion>,
}

/// Generated lecture with a validated quiz.
#[derive(Debug, Clone, Serialize)]
pub struct LectureAssets {
    pub slides_path: Option<String>,
    pub voice_path: Option<String>,
    pub video_path: Option<String>,
    pub video_local_path: Option<String>,
    pub slide_images: Vec<String>,
    pub quiz: QuizDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// Summary of an uploaded notes document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesSummary {
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
    #[serde(default, alias = "keyPoints")]
    pub key_points: Vec<String>,
}

/// DTO for the mentor chat.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 2000, message = "Message cannot be empty."))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    /// Local wall-clock time, `HH:MM`.
    pub timestamp: String,
}
