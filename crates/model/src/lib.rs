//! Data shapes for the Hangar session core.
//!
//! This crate contains the serde-serializable types shared between the
//! dashboard shell and the persistence core. These types represent persisted
//! artifacts and loader-produced configuration as plain data.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: no I/O, no behavior beyond (de)serialization and parsing
//! * Stable: change only when a persisted artifact or loader contract changes
//!
//! The stores and reconciliation logic are built on top of these types in
//! `hangar-session`.

pub mod config;
pub mod cookie;
pub mod layout;
pub mod section;
pub mod tab;

pub use config::*;
pub use cookie::*;
pub use layout::*;
pub use section::*;
pub use tab::*;
