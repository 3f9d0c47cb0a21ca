//! HTTP API integration tests

pub mod answers_test;
pub mod questions_test;
