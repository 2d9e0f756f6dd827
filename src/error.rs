// Error types for the playback core and the command parser
// Every error is a rejected operation - state is never left half-mutated

use thiserror::Error;

/// Errors raised by the priority queues and the playback engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Invalid priority: {0}")]
    InvalidPriority(u8),

    #[error("Queue at priority {0} is empty")]
    EmptyQueue(u8),
}

/// Errors raised while turning an input line into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid {command} command format: {input}")]
    InvalidFormat { command: &'static str, input: String },

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Song length must be positive")]
    ZeroLength,

    #[error("Invalid priority: {0}")]
    InvalidPriority(u32),
}

pub type Result<T> = std::result::Result<T, PlaybackError>;
