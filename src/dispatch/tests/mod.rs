//! Unit tests for scatter-gather dispatch.
