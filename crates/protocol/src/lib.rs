pub mod commands;
pub mod events;
pub mod tokens;
pub mod types;

pub use commands::{DomCommand, ScrollBehavior};
pub use events::PageEvent;
pub use tokens::{ClassToken, StyleProperty};
pub use types::{HeroPart, PageOutline, SectionBox, Target, TimerId, VideoSlot};
