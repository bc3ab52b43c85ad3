pub mod atomic_writer;
pub mod json_kv_store;
pub mod memory;

pub use atomic_writer::AtomicWriter;
pub use json_kv_store::JsonKvStore;
pub use memory::MemoryStore;
