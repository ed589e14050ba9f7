pub mod memory;

pub use memory::MemoryPostStore;
