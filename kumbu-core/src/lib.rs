//! Core types for the kumbu ecosystem.
//!
//! This crate provides what the notification daemon and any future
//! frontends share:
//! - `Event` and `Birthday` wire types for the cloud API
//! - occurrence-date arithmetic for yearly reminders
//! - the API client and the `NotifiedStore` persistence seam

pub mod config;
pub mod error;
pub mod event;
pub mod occurrence;
pub mod remote;

pub use error::{KumbuError, KumbuResult};
pub use event::{Birthday, Event};
