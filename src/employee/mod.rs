//! Employee onboarding records and progress tracking.
//!
//! This module covers adding new hires to the directory, instantiating their
//! onboarding tasks from the default set or a flow template, toggling task
//! completion with derived progress and status, pausing and resuming
//! onboarding, and the search and summary queries behind list views. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
