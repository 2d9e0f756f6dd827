use tracing::{debug, info};

use super::queue::PriorityQueueSet;
use super::track::Track;
use super::{NEXT_PRIORITY, PRIORITY_LEVELS};
use crate::error::{PlaybackError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Playing,
}

/// What happened on the simulated timeline during `advance_time`.
/// `at` is the engine clock (total seconds played) when it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    TrackStarted { track_id: u32, at: u64 },
    TrackCompleted { track_id: u32, at: u64 },
}

/// Priority scheduler with a simulated clock.
///
/// The current track lives outside the queues; once it has fully played it
/// moves to the history, which only ever grows until `reset`.
#[derive(Debug, Default)]
pub struct PlaybackEngine {
    queues: PriorityQueueSet,
    current: Option<Track>,
    history: Vec<Track>,
    clock: u64,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EngineState {
        if self.current.is_some() {
            EngineState::Playing
        } else {
            EngineState::Idle
        }
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Number of tracks waiting, not counting the current one
    pub fn queued_len(&self) -> usize {
        self.queues.len()
    }

    /// Total seconds played since creation or the last reset
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Queue a track behind everything else at its own priority
    pub fn enqueue(&mut self, track: Track) -> Result<()> {
        let priority = track.priority;
        self.queues.enqueue(priority, track)?;
        debug!("{} tracks waiting at priority {}", self.queues.len_at(priority), priority);
        Ok(())
    }

    /// Queue a track to play right after the current one.
    ///
    /// The track goes to the head of priority 0 and is relabelled priority 0.
    /// It never interrupts the current track.
    pub fn enqueue_next(&mut self, mut track: Track) -> Result<()> {
        if track.priority as usize >= PRIORITY_LEVELS {
            return Err(PlaybackError::InvalidPriority(track.priority));
        }
        track.priority = NEXT_PRIORITY;
        self.queues.insert_front(NEXT_PRIORITY, track)
    }

    /// Play `seconds` of simulated time across as many tracks as it covers.
    ///
    /// Time left over once every queue is empty is dropped.
    pub fn advance_time(&mut self, seconds: u32) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        let mut remaining = seconds;

        while remaining > 0 {
            if self.current.is_none() {
                match self.queues.pop_next() {
                    Some(track) => {
                        debug!("Started track {} ({}s)", track.id, track.remaining_time());
                        events.push(PlaybackEvent::TrackStarted {
                            track_id: track.id,
                            at: self.clock,
                        });
                        self.current = Some(track);
                    }
                    None => {
                        debug!("Nothing queued, dropping {}s", remaining);
                        break;
                    }
                }
            }

            let Some(track) = self.current.as_mut() else {
                break;
            };
            let used = track.consume(remaining);
            remaining -= used;
            self.clock += u64::from(used);

            if track.is_finished() {
                if let Some(done) = self.current.take() {
                    info!("Finished track {}: {} - {}", done.id, done.artist, done.title);
                    events.push(PlaybackEvent::TrackCompleted {
                        track_id: done.id,
                        at: self.clock,
                    });
                    self.history.push(done);
                }
            }
        }

        events
    }

    /// Stop the current track without recording it. Does nothing when idle.
    pub fn skip(&mut self) -> Option<Track> {
        let skipped = self.current.take();
        match &skipped {
            Some(track) => info!(
                "Skipped track {} after {}s, {}s left",
                track.id,
                track.elapsed(),
                track.remaining_time()
            ),
            None => debug!("Skip ignored, nothing playing"),
        }
        skipped
    }

    /// Remove the current track and every queued track with this id.
    /// History is append-only, so finished tracks with this id stay there
    /// and are not counted.
    pub fn remove_by_id(&mut self, id: u32) -> usize {
        let mut removed = 0;
        if self.current.as_ref().is_some_and(|track| track.id == id) {
            self.current = None;
            removed += 1;
        }
        removed += self.queues.remove_matching(|track| track.id == id);

        if removed > 0 {
            info!("Removed {} tracks with id {}", removed, id);
        }
        removed
    }

    /// The track playing now, or the one that would start next
    pub fn peek(&self) -> Option<&Track> {
        self.current
            .as_ref()
            .or_else(|| self.queues.first_non_empty().map(|(_, track)| track))
    }

    /// Current and queued tracks in play order by priority. The current track
    /// leads its own priority level.
    pub fn list(&self) -> Vec<&Track> {
        let mut tracks = Vec::with_capacity(self.queues.len() + 1);
        for prio in 0..PRIORITY_LEVELS as u8 {
            if let Some(current) = self.current.as_ref().filter(|t| t.priority == prio) {
                tracks.push(current);
            }
            tracks.extend(self.queues.iter_at(prio));
        }
        tracks
    }

    /// Fully played tracks in completion order
    pub fn history(&self) -> &[Track] {
        &self.history
    }

    pub fn reset(&mut self) {
        self.queues.clear();
        self.current = None;
        self.history.clear();
        self.clock = 0;
        debug!("Engine reset");
    }
}
