// src/services/content.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, multipart};
use serde_json::Value;

use crate::{
    config::Config,
    error::AppError,
    models::{
        content::{GenerateLectureRequest, LectureAssets, NotesSummary, RawLectureAssets},
        question::{QuizDefinition, RawQuiz},
    },
    utils::fence::strip_code_fence,
};

/// The external AI content service.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Generates lecture assets; the returned quiz is already validated.
    async fn generate(&self, req: &GenerateLectureRequest) -> Result<LectureAssets, AppError>;

    /// Forwards an uploaded document untouched and returns its summary.
    async fn summarize(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<NotesSummary, AppError>;
}

/// `ContentProvider` over HTTP (`POST /generate`, `POST /summarize`).
#[derive(Debug, Clone)]
pub struct HttpContentProvider {
    client: Client,
    base_url: String,
}

impl HttpContentProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            &config.content_service_url,
            Duration::from_secs(config.content_timeout_secs),
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Turns a non-2xx answer into `Upstream`, keeping the service's own
/// `{"error": ...}` message when there is one.
async fn ensure_success(resp: Response) -> Result<Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| format!("Content service returned {}", status));

    Err(AppError::Upstream(message))
}

#[async_trait]
impl ContentProvider for HttpContentProvider {
    async fn generate(&self, req: &GenerateLectureRequest) -> Result<LectureAssets, AppError> {
        tracing::info!("Requesting lecture on '{}' ({})", req.prompt, req.theme);

        let resp = self
            .client
            .post(self.endpoint("generate"))
            .json(req)
            .send()
            .await?;
        let body = ensure_success(resp).await?.text().await?;

        parse_lecture(&req.prompt, &body)
    }

    async fn summarize(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<NotesSummary, AppError> {
        tracing::info!("Forwarding '{}' ({} bytes) for summary", file_name, bytes.len());

        let mut part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        if let Some(mime) = content_type {
            part = part
                .mime_str(mime)
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
        }
        let form = multipart::Form::new().part("file", part);

        let resp = self
            .client
            .post(self.endpoint("summarize"))
            .multipart(form)
            .send()
            .await?;
        let body = ensure_success(resp).await?.text().await?;

        parse_summary(&body)
    }
}

/// Decodes a `/generate` body and validates its quiz under `topic`.
pub fn parse_lecture(topic: &str, body: &str) -> Result<LectureAssets, AppError> {
    let raw: RawLectureAssets = serde_json::from_str(strip_code_fence(body))
        .map_err(|e| AppError::Upstream(format!("Unreadable lecture response: {}", e)))?;

    let quiz = QuizDefinition::try_from(RawQuiz {
        topic: topic.to_string(),
        questions: raw.quiz,
    })?;

    Ok(LectureAssets {
        slides_path: raw.slides_path,
        voice_path: raw.voice_path,
        video_local_path: raw.video_local_path.or_else(|| raw.video_path.clone()),
        video_path: raw.video_path,
        slide_images: raw.slide_images,
        quiz,
    })
}

/// Decodes a `/summarize` body.
///
/// Accepted shapes: the summary object itself, the object inside a markdown
/// fence, an object whose `summary` field is a (possibly fenced) JSON string
/// of the real object, or an object whose `summary` is plain prose, which is
/// split into paragraphs.
pub fn parse_summary(body: &str) -> Result<NotesSummary, AppError> {
    let value: Value = serde_json::from_str(strip_code_fence(body))
        .map_err(|e| AppError::Upstream(format!("Unreadable summary response: {}", e)))?;

    if let Some(Value::String(inner)) = value.get("summary") {
        if let Ok(nested) = serde_json::from_str::<NotesSummary>(strip_code_fence(inner)) {
            return Ok(nested);
        }

        let mut summary: NotesSummary = serde_json::from_value(without_summary(&value))
            .map_err(|e| AppError::Upstream(format!("Unexpected summary shape: {}", e)))?;
        summary.summary = inner
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        return Ok(summary);
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::Upstream(format!("Unexpected summary shape: {}", e)))
}

fn without_summary(value: &Value) -> Value {
    let mut copy = value.clone();
    if let Some(map) = copy.as_object_mut() {
        map.remove("summary");
    }
    copy
}
