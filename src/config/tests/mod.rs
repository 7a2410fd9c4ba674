//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token and extension resolution tests
//! - `validation`: Configuration consistency validation tests

mod field_resolution;
mod helpers;
mod precedence;
