//! Job store backends

pub mod file;
pub mod memory;

pub use file::{decode_jobs, FileJobStore};
pub use memory::MemoryJobStore;
