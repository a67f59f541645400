//! Unit tests for language server registration and discovery.

mod service_tests;
