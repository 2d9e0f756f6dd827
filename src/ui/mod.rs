// Console front end - reads command lines, prints results
// Everything user-facing goes through the writer handed to App::run, never through logging

mod app; // read loop and command dispatch

pub use app::App;

use crate::playback::PlaybackEvent;

pub const UNKNOWN_COMMAND: &str = "\u{2753} Unknown command.";
pub const GOODBYE: &str = "\u{1F44B} Bye!";

pub fn banner() -> Vec<String> {
    vec![
        "\u{1F3B5} prioplay - Priority Playback Scheduler".to_string(),
        "========================================".to_string(),
        "Commands: add, next, play, skip, remove, peek, list, history, quit".to_string(),
    ]
}

pub fn warning(message: impl std::fmt::Display) -> String {
    format!("\u{26A0}\u{FE0F} {}", message)
}

pub fn removed(count: usize) -> String {
    format!("Removed {} songs.", count)
}

pub fn describe_event(event: &PlaybackEvent) -> String {
    match event {
        PlaybackEvent::TrackStarted { track_id, at } => {
            format!("\u{25B6} {:05} started at {}s", track_id, at)
        }
        PlaybackEvent::TrackCompleted { track_id, at } => {
            format!("\u{2714} {:05} finished at {}s", track_id, at)
        }
    }
}
