//! Unit tests for the GitHub intake module.

mod pagination;
