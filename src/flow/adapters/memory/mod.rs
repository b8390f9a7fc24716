//! In-memory adapter implementations.

mod template;

pub use template::InMemoryFlowTemplateRepository;
