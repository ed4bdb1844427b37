// src/services/mod.rs

pub mod chat;
pub mod content;
pub mod ledger;
pub mod scoring;
pub mod session;
