//! Adapter implementations for flow template ports.

pub mod memory;
