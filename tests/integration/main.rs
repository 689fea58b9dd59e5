//! Integration test suite for scrubkit.

mod helpers;

mod config_test;
mod session_test;
mod spritemap_test;
