//! # HMS Portals
//!
//! Menu-driven console over the `hms-core` record store.
//!
//! A [`Session`] owns a [`Console`] (any `BufRead` + `Write` pair) and a
//! [`RecordStore`](hms_core::store::RecordStore), and runs the main menu until
//! the user picks Exit or input ends.

#![warn(missing_docs)]

pub mod console;
pub mod error;
pub mod menu;
pub mod portals;
pub mod session;

pub use console::Console;
pub use error::{PortalError, Result};
pub use menu::MenuCommand;
pub use session::{MainCommand, Session};
