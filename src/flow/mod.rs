//! Onboarding flow templates.
//!
//! Administrators author flow templates per onboarding phase; each template
//! is an ordered list of task blueprints that the employee context copies
//! into concrete tasks when a new hire is added. The module follows
//! hexagonal architecture:
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
