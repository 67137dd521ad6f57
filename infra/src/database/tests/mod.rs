//! Unit tests for the database layer
