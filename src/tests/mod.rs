//! Test modules for the Mauka spell checker.
//!
//! This module contains the cross-component test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Spell checker sessions, including persistence and concurrent use
//! - Shared fixtures and proptest strategies

pub mod checker_tests;

pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
