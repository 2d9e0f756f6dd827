use std::collections::VecDeque;

use tracing::debug;

use super::track::Track;
use super::PRIORITY_LEVELS;
use crate::error::{PlaybackError, Result};

/// One FIFO queue per priority level, 0 (played first) through 5 (played last)
#[derive(Debug, Default, Clone)]
pub struct PriorityQueueSet {
    queues: [VecDeque<Track>; PRIORITY_LEVELS],
}

impl PriorityQueueSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn level(priority: u8) -> Result<usize> {
        let idx = priority as usize;
        if idx < PRIORITY_LEVELS {
            Ok(idx)
        } else {
            Err(PlaybackError::InvalidPriority(priority))
        }
    }

    /// Append a track to the tail of its priority's queue
    pub fn enqueue(&mut self, priority: u8, track: Track) -> Result<()> {
        let idx = Self::level(priority)?;
        debug!("Queued track {} at priority {}", track.id, priority);
        self.queues[idx].push_back(track);
        Ok(())
    }

    /// Remove and return the head of a priority's queue
    pub fn dequeue_front(&mut self, priority: u8) -> Result<Track> {
        let idx = Self::level(priority)?;
        self.queues[idx]
            .pop_front()
            .ok_or(PlaybackError::EmptyQueue(priority))
    }

    /// Put a track ahead of everything already waiting at this priority
    pub fn insert_front(&mut self, priority: u8, track: Track) -> Result<()> {
        let idx = Self::level(priority)?;
        debug!("Inserted track {} at head of priority {}", track.id, priority);
        self.queues[idx].push_front(track);
        Ok(())
    }

    /// Drop every queued track the predicate matches, keeping survivors in order.
    pub fn remove_matching<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Track) -> bool,
    {
        let mut removed = 0;
        for queue in self.queues.iter_mut() {
            let before = queue.len();
            queue.retain(|track| !predicate(track));
            removed += before - queue.len();
        }
        removed
    }

    /// Head of the highest-priority non-empty queue, with its priority
    pub fn first_non_empty(&self) -> Option<(u8, &Track)> {
        self.queues
            .iter()
            .enumerate()
            .find_map(|(prio, queue)| queue.front().map(|track| (prio as u8, track)))
    }

    /// Take the head of the highest-priority non-empty queue
    pub fn pop_next(&mut self) -> Option<Track> {
        self.queues.iter_mut().find_map(|queue| queue.pop_front())
    }

    /// Every queued track, priority 0 first, queue order within a level
    pub fn iter(&self) -> impl Iterator<Item = &Track> + '_ {
        self.queues.iter().flat_map(|queue| queue.iter())
    }

    /// Tracks waiting at one priority level; empty for an out-of-range priority
    pub fn iter_at(&self, priority: u8) -> impl Iterator<Item = &Track> + '_ {
        self.queues
            .get(priority as usize)
            .into_iter()
            .flat_map(|queue| queue.iter())
    }

    pub fn len_at(&self, priority: u8) -> usize {
        self.queues
            .get(priority as usize)
            .map_or(0, |queue| queue.len())
    }

    pub fn len(&self) -> usize {
        self.queues.iter().map(|queue| queue.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(|queue| queue.is_empty())
    }

    pub fn clear(&mut self) {
        for queue in self.queues.iter_mut() {
            queue.clear();
        }
    }
}
