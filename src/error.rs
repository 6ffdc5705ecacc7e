use std::path::PathBuf;
use thiserror::Error;

// Errors surfaced to the host by plugin construction and the intro sequence.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Unknown plugin: {0}")]
    UnknownPlugin(String), // No registry entry carries this name.

    #[error("Unknown asset key: {0}")]
    UnknownAsset(String), // The resolver has no mapping for this key.

    #[error("Failed to read asset {key} at {path:?}: {source}")]
    AssetRead {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] TerminalError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Logger already set")]
    LoggerAlreadySet,

    #[error("No home directory available")]
    NoHomeDir,
}

// Errors raised by a terminal capability.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Terminal IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Input closed")]
    InputClosed, // The line reader hit end of input.

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Failed to open output stream: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("Failed to create sink: {0}")]
    Play(#[from] rodio::PlayError),

    #[error("Failed to decode audio file: {0}")]
    Decoder(#[from] rodio::decoder::DecoderError),

    #[error("std io AudioError: {0}")]
    IO(#[from] std::io::Error),
}
