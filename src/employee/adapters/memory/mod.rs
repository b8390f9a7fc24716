//! In-memory adapter implementations.
//!
//! These adapters keep the directory in process memory behind a lock and are
//! suitable for single-session use and tests.

mod directory;

pub use directory::InMemoryEmployeeRepository;
