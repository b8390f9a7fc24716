//! Unit tests for the employee module.
//!
//! Tests are organised by domain concept: the progress engine, the employee
//! aggregate, directory filtering and the lifecycle service.
