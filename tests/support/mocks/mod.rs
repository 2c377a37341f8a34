// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod tags;
pub mod users;

pub use tags::{FailingTagService, ScriptedTagService};
pub use users::{ALICE, BOB, admin, author};
