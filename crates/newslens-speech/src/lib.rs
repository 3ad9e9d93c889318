//! Text-to-speech synthesis for newslens.
//!
//! Thin HTTP client over a translate-style TTS endpoint. Returns raw MP3
//! bytes; callers own encoding for transport and any retry policy (the
//! client itself never retries).

pub mod client;
pub mod error;

pub use client::SpeechClient;
pub use error::SpeechError;
