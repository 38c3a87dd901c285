// tests/support/mod.rs
#![allow(dead_code)]

pub mod builders;
pub mod helpers;
pub mod memory;
pub mod mocks;

pub use builders::*;
pub use helpers::*;
pub use mocks::{ADMIN_TOKEN, AUTHOR_TOKEN, EDITOR_TOKEN};
