//! Placement integration tests.
//!
//! These run the engine end to end against both spatial providers.

mod loss_test;
mod placement_test;
mod search_test;
