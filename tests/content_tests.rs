// tests/content_tests.rs

use edubuilder::{
    error::AppError,
    models::content::{Flashcard, NotesSummary},
    services::{
        chat::{CannedResponses, ResponseProvider},
        content::{parse_lecture, parse_summary},
    },
    utils::{fence::strip_code_fence, html::clean_topic},
};

#[test]
fn fences_are_stripped() {
    assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
    assert_eq!(strip_code_fence("  ```\n[1, 2]\n```  "), "[1, 2]");
    assert_eq!(strip_code_fence("  {\"plain\": true}\n"), "{\"plain\": true}");
}

#[test]
fn lecture_quiz_is_validated_and_normalized() {
    let body = r#"{
        "slides_path": "output/slides.pptx",
        "voice_path": "output/voiceover.mp3",
        "video_path": "https://cdn.example.com/video.mp4",
        "slide_images": ["https://cdn.example.com/slide_1.png"],
        "quiz": [
            { "question": "Where does photosynthesis occur?",
              "options": ["Mitochondria", "Chloroplasts", "Nucleus", "Cell membrane"],
              "correct": "1" },
            { "question": "What gas is released?",
              "options": ["Oxygen", "Nitrogen"],
              "correct": 0 }
        ]
    }"#;

    let assets = parse_lecture("Photosynthesis", body).unwrap();
    assert_eq!(assets.quiz.topic, "Photosynthesis");
    let keys: Vec<usize> = assets.quiz.questions.iter().map(|q| q.correct_index).collect();
    assert_eq!(keys, vec![1, 0]);
    assert_eq!(
        assets.video_local_path.as_deref(),
        Some("https://cdn.example.com/video.mp4")
    );
    assert_eq!(assets.slide_images.len(), 1);
}

#[test]
fn lecture_with_bad_question_is_malformed() {
    let body = r#"{ "quiz": [ { "question": "Q", "options": [], "correct": 0 } ] }"#;

    assert!(matches!(
        parse_lecture("Topic", body),
        Err(AppError::MalformedQuiz(_))
    ));
}

#[test]
fn lecture_with_non_integer_correct_is_malformed() {
    for correct in ["1.5", "true", "null"] {
        let body = format!(
            r#"{{ "quiz": [ {{ "question": "Q", "options": ["A", "B"], "correct": {} }} ] }}"#,
            correct
        );

        assert!(
            matches!(
                parse_lecture("Topic", &body),
                Err(AppError::MalformedQuiz(_))
            ),
            "correct = {} should be malformed",
            correct
        );
    }
}

#[test]
fn unreadable_lecture_is_upstream_error() {
    assert!(matches!(
        parse_lecture("Topic", "<html>502</html>"),
        Err(AppError::Upstream(_))
    ));
}

fn expected_summary() -> NotesSummary {
    NotesSummary {
        summary: vec!["Evaporation turns water into vapor.".to_string()],
        flashcards: vec![Flashcard {
            question: "What causes evaporation?".to_string(),
            answer: "Heat from the sun.".to_string(),
        }],
        key_points: vec!["Evaporation is caused by solar heat".to_string()],
    }
}

#[test]
fn summary_object_is_read_directly() {
    let body = r#"{
        "summary": ["Evaporation turns water into vapor."],
        "flashcards": [{ "question": "What causes evaporation?", "answer": "Heat from the sun." }],
        "keyPoints": ["Evaporation is caused by solar heat"]
    }"#;

    assert_eq!(parse_summary(body).unwrap(), expected_summary());
}

#[test]
fn summary_inside_fenced_string_is_unwrapped() {
    let inner = "```json\n{\"summary\": [\"Evaporation turns water into vapor.\"], \"flashcards\": [{\"question\": \"What causes evaporation?\", \"answer\": \"Heat from the sun.\"}], \"key_points\": [\"Evaporation is caused by solar heat\"]}\n```";
    let body = serde_json::json!({ "summary": inner }).to_string();

    assert_eq!(parse_summary(&body).unwrap(), expected_summary());
}

#[test]
fn prose_summary_is_split_into_paragraphs() {
    let body = serde_json::json!({
        "summary": "First point.\n\nSecond point.\n\n",
        "key_points": ["Only one"]
    })
    .to_string();

    let summary = parse_summary(&body).unwrap();
    assert_eq!(summary.summary, vec!["First point.", "Second point."]);
    assert_eq!(summary.key_points, vec!["Only one"]);
    assert!(summary.flashcards.is_empty());
}

#[test]
fn topics_are_reduced_to_plain_text() {
    assert_eq!(clean_topic("Water Cycle"), "Water Cycle");
    assert_eq!(clean_topic("<i>Cells</i>"), "Cells");
    assert_eq!(clean_topic("Cells<script>alert(1)</script>"), "Cells");
    assert_eq!(clean_topic("   "), "Untitled Quiz");
}

#[test]
fn canned_responses_come_from_the_list() {
    let canned = CannedResponses::default();
    for _ in 0..20 {
        let reply = canned.respond("What is osmosis?");
        assert!(canned.responses().contains(&reply));
    }

    let single = CannedResponses::new(vec!["Only answer".to_string()]);
    assert_eq!(single.respond("anything"), "Only answer");

    assert_eq!(CannedResponses::new(Vec::new()).responses().len(), 5);
}
