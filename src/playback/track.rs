use std::fmt;

/// A queued song: fixed metadata plus how much of it is left to play.
///
/// Equality only looks at the metadata (`id`, `artist`, `title`,
/// `length`, `priority`), so a half-played track still equals its fresh copy.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: u32,
    pub artist: String,
    pub title: String,
    pub length: u32, // seconds
    pub priority: u8,
    remaining_time: u32,
}

impl Track {
    pub fn new(
        id: u32,
        artist: impl Into<String>,
        title: impl Into<String>,
        length: u32,
        priority: u8,
    ) -> Self {
        Self {
            id,
            artist: artist.into(),
            title: title.into(),
            length,
            priority,
            remaining_time: length,
        }
    }

    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    /// Seconds already played
    pub fn elapsed(&self) -> u32 {
        self.length - self.remaining_time
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Play up to `seconds` of this track, returning how many were consumed.
    pub(crate) fn consume(&mut self, seconds: u32) -> u32 {
        let used = seconds.min(self.remaining_time);
        self.remaining_time -= used;
        used
    }

    /// Row shown by `list` and `history`
    pub fn list_view(&self) -> ListView<'_> {
        ListView(self)
    }

    /// Row shown by `peek`, with the remaining time appended
    pub fn peek_view(&self) -> PeekView<'_> {
        PeekView(self)
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.length == other.length
            && self.priority == other.priority
            && self.artist == other.artist
            && self.title == other.title
    }
}

impl Eq for Track {}

pub struct ListView<'a>(&'a Track);

impl fmt::Display for ListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        write!(f, "{:05}:{}:{}:{}", t.id, t.artist, t.title, t.length)
    }
}

pub struct PeekView<'a>(&'a Track);

impl fmt::Display for PeekView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0.list_view(), self.0.remaining_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_track_starts_unplayed() {
        let track = Track::new(7, "Daft Punk", "Around the World", 429, 2);
        assert_eq!(track.remaining_time(), 429);
        assert_eq!(track.elapsed(), 0);
        assert!(!track.is_finished());
    }

    #[test]
    fn test_consume_never_goes_below_zero() {
        let mut track = Track::new(1, "Air", "La Femme d'Argent", 30, 0);
        assert_eq!(track.consume(12), 12);
        assert_eq!(track.remaining_time(), 18);
        assert_eq!(track.consume(50), 18);
        assert!(track.is_finished());
        assert_eq!(track.elapsed(), 30);
    }

    #[test]
    fn test_equality_ignores_remaining_time() {
        let fresh = Track::new(3, "Justice", "Genesis", 234, 1);
        let mut played = fresh.clone();
        played.consume(100);
        assert_eq!(fresh, played);

        let other_priority = Track::new(3, "Justice", "Genesis", 234, 4);
        assert_ne!(fresh, other_priority);
    }

    #[test]
    fn test_views_pad_id() {
        let mut track = Track::new(42, "Moderat", "A New Error", 345, 0);
        assert_eq!(track.list_view().to_string(), "00042:Moderat:A New Error:345");
        track.consume(45);
        assert_eq!(track.peek_view().to_string(), "00042:Moderat:A New Error:345:300");
    }
}
