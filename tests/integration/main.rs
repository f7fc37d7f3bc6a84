//! Integration tests for darko-value

mod config_test;
mod pipeline_test;
mod properties_test;
