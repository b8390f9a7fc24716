//! Port contracts for flow template management.

pub mod repository;

pub use repository::{
    FlowTemplateRepository, FlowTemplateRepositoryError, FlowTemplateRepositoryResult,
};
