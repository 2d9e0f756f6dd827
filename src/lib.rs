// prioplay library - priority playback scheduler
// The playback core knows nothing about the console, config or logging setup

pub mod command;  // input line -> Command
pub mod config;   // settings and preferences
pub mod error;    // PlaybackError / CommandError
pub mod playback; // tracks, priority queues, the engine
pub mod ui;       // console read loop

// Export the stuff other modules actually use
pub use command::{Command, CommandParser};
pub use config::Config;
pub use error::{CommandError, PlaybackError};
pub use playback::{EngineState, PlaybackEngine, PlaybackEvent, PriorityQueueSet, Track};
