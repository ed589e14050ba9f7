pub mod memory;

pub use memory::MemoryUserStore;
