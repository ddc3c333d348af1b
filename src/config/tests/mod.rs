//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `loading`: Environment and CLI loading through `load_from_iter`
//! - `validation`: Endpoint and timeout validation tests

mod helpers;
mod validation;
