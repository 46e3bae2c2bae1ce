//! Starlog Git - commit source adapter
//!
//! Reads commit history from a git repository and assembles the raw message
//! strings the parser consumes. The parser itself never touches git; it only
//! sees the concatenated `subject #<url><hash>\n\nbody` strings built here.

mod commits;
mod messages;
mod repository;
mod tags;
pub mod types;

pub use messages::{raw_message, raw_messages};
pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
