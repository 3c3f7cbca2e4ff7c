pub mod nav;
pub mod pool;
pub mod reveal;

pub use nav::{MenuAction, NavState};
pub use pool::ImagePool;
pub use reveal::RevealTracker;
