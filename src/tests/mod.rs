//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance scenarios drive the calculator through the key harness, so
//! every test covers binding lookup as well as engine behavior.
