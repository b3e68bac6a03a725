//! Unit tests for the CLI runtime.

mod run_tests;
