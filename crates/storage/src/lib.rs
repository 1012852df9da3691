//! Storage for weekplan.
//!
//! This crate provides the asynchronous key-value primitive task records
//! live in, two backends for it, and the day-keyed task list store built
//! on top.

#![warn(missing_docs)]

pub mod file_store;
pub mod memory_store;
pub mod task_store;
pub mod trait_;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use task_store::TaskStore;
pub use trait_::{KeyValueStore, Result, StorageError};
