//! Unit tests for the flow template context.
