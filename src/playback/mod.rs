pub mod engine;
pub mod queue;
pub mod track;

pub use engine::{EngineState, PlaybackEngine, PlaybackEvent};
pub use queue::PriorityQueueSet;
pub use track::Track;

/// Priority levels 0 (highest) through 5 (lowest)
pub const PRIORITY_LEVELS: usize = 6;

/// Priority given to tracks scheduled with `next`
pub const NEXT_PRIORITY: u8 = 0;
