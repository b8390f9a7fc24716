//! Onboarding: employee onboarding state model and progress tracking.
//!
//! This crate tracks new hires through discrete onboarding tasks, derives
//! per-employee completion progress and status, and instantiates
//! administrator-defined flow templates into concrete task sets.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`employee`]: Employee records, the progress engine and the directory
//! - [`flow`]: Flow templates and typed task blueprints
//! - [`config`]: Runtime policy configuration
//! - [`seed`]: Sample directory built through the live code path

pub mod config;
pub mod employee;
pub mod flow;
pub mod seed;

mod locks;
