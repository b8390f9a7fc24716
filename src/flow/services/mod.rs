//! Application services for flow template authoring.

mod authoring;

pub use authoring::{
    CreateTemplateRequest, FlowTemplateService, FlowTemplateServiceError,
    FlowTemplateServiceResult,
};
