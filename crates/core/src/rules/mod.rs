//! Pure decision rules. Each takes plain inputs (scroll offset, field
//! values, URLs) and returns what the page should look like.

pub mod entrance;
pub mod form;
pub mod scroll;
pub mod video;
