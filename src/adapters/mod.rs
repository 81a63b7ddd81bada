// Adapters layer: concrete implementations for external systems (file system, child processes).

pub mod process;
pub mod storage;
