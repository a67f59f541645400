//! Unit tests for the caller-facing workspace surface.
