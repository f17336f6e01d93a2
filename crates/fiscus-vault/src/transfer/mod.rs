//! Built-in transfer collaborators
//!
//! Provides:
//! - `DirectorySink`: local delivery into a target directory
//! - `SimulatedRemote`: fixed-latency offsite upload stand-in
//! - `FileSource`: content reader over a user-selected file
//! - `memory`: in-memory doubles for tests and examples

pub mod file_source;
pub mod local_dir;
pub mod memory;
pub mod simulated_remote;

pub use file_source::FileSource;
pub use local_dir::DirectorySink;
pub use simulated_remote::SimulatedRemote;
