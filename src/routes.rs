// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{ALLOWED_ORIGINS, MAX_UPLOAD_BYTES},
    handlers::{auth, chat, health, lecture, notes, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, quiz, lecture, notes, chat).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (ledger, session, content service, chat).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .into_iter()
        .map(HeaderValue::from_static)
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ])
        .allow_credentials(true);

    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me));

    let quiz_routes = Router::new()
        .route("/score", post(quiz::score_quiz))
        .route("/submit", post(quiz::submit_quiz))
        .route("/history", get(quiz::get_history))
        .route("/stats", get(quiz::get_stats));

    let lecture_routes = Router::new().route("/generate", post(lecture::generate_lecture));

    let notes_routes = Router::new()
        .route("/summarize", post(notes::summarize_notes))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/chat", post(chat::send_message))
        .nest("/api/auth", auth_routes)
        .nest("/api/quiz", quiz_routes)
        .nest("/api/lecture", lecture_routes)
        .nest("/api/notes", notes_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
