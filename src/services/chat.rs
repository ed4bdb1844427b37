// src/services/chat.rs

use rand::Rng;

/// Anything that can answer a chat message.
pub trait ResponseProvider: Send + Sync {
    fn respond(&self, message: &str) -> String;
}

/// Picks a random line from a fixed, never-empty list, ignoring the message.
#[derive(Debug, Clone)]
pub struct CannedResponses {
    responses: Vec<String>,
}

impl CannedResponses {
    /// Falls back to the built-in lines if `responses` is empty.
    pub fn new(responses: Vec<String>) -> Self {
        if responses.is_empty() {
            return Self::default();
        }
        Self { responses }
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }
}

impl Default for CannedResponses {
    fn default() -> Self {
        Self {
            responses: [
                "That's a great question! Let me help you understand that better.",
                "I can definitely assist with that. Here's what you need to know...",
                "Interesting topic! Let me break it down for you.",
                "I'm here to help! This concept is easier than it seems.",
                "Great thinking! Let's explore this together.",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl ResponseProvider for CannedResponses {
    fn respond(&self, _message: &str) -> String {
        let pick = rand::thread_rng().gen_range(0..self.responses.len());
        self.responses[pick].clone()
    }
}
