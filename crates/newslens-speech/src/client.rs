//! Translate-TTS HTTP client.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::SpeechError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for a translate-style text-to-speech endpoint.
///
/// The endpoint is expected to answer `GET {base}?ie=UTF-8&client=tw-ob&tl={lang}&q={text}`
/// with MP3 bytes.
#[derive(Debug, Clone)]
pub struct SpeechClient {
    http: reqwest::Client,
    base_url: String,
    lang: String,
}

impl SpeechClient {
    /// Build a client targeting `base_url`, synthesizing in `lang`.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::Http`] if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>, lang: impl Into<String>) -> Result<Self, SpeechError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            lang: lang.into(),
        })
    }

    /// Synthesize speech for `text`, returning MP3 bytes.
    ///
    /// No retries: a failed synthesis is reported once and left to the
    /// caller's policy.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError`] on transport failure, a non-success status,
    /// or an empty response body.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let encoded = utf8_percent_encode(text, NON_ALPHANUMERIC).to_string();
        let url = format!(
            "{}?ie=UTF-8&client=tw-ob&tl={}&q={encoded}",
            self.base_url, self.lang
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }

        tracing::debug!(bytes = bytes.len(), lang = %self.lang, "synthesized speech");
        Ok(bytes.to_vec())
    }
}
