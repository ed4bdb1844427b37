// src/utils/mod.rs

pub mod fence;
pub mod html;
