//! Unit tests for `mscript_core` types.

mod defines_tests;
mod geometry_tests;
mod node_tests;
