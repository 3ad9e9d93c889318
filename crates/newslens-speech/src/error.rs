use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from TTS endpoint")]
    UnexpectedStatus { status: u16 },

    #[error("TTS endpoint returned an empty body")]
    EmptyAudio,
}
