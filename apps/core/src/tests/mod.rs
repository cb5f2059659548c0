//! Test Module
//!
//! Cross-component test suite for the PromptSmith core.
//!
//! ## Test Categories
//! - `brain_tests`: categorisation, keyword extraction, sentiment, enhancement
//! - `provider_tests`: bundled capabilities, including the HTTP chat client
//! - `integration_tests`: full pipeline scenarios and the prompt library
//! - `chaos_test`: concurrent runs against slow and failing capabilities

pub mod brain_tests;
