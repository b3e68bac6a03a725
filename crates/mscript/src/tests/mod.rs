//! Unit and behavioural tests for `mscript`.

mod script_tests;
mod support;
