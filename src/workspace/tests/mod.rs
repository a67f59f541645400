//! Unit tests for workspace resources.
