//! Platform abstraction layer
//!
//! Storage backends for the score history. The simulation never touches
//! these; only the controller and the shell do.

pub mod store;

pub use store::{FileStore, MemoryStore, ScoreStore};
