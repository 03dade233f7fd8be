//! Concrete implementations of the remote client ports.

pub mod in_memory;
