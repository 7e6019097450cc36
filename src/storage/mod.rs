//! Local storage for the saved form state

mod file;
mod memory;
mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::{FormStorage, StorageError};

#[cfg(test)]
pub use traits::MockFormStorage;
