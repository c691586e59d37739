//! Database infrastructure - connection management and migrations.

pub mod core;

pub use core::{bootstrap_db, connect_db, orchestrate_migration};
