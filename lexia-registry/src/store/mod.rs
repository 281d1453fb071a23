mod memory;

pub use memory::MemoryConceptStore;
