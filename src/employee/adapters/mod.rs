//! Adapter implementations for employee directory ports.

pub mod memory;
