//! # HMS Core - Flat-File Hospital Records
//!
//! Core types and storage for the hospital records console.
//!
//! This crate provides:
//! - Record format (`record`) - delimited lines, sanitization, lenient keys
//! - Schemas (`schema`) - field layout of each record file
//! - Models (`models`) - typed patients, appointments, reports, prescriptions, feedback
//! - Store (`store`) - append-only files with lazy filtered scans
//! - Display (`display`) - `label: value` rendering
//! - Configuration (`config`) and logging (`logging`)
//!
//! ```rust,no_run
//! use hms_core::prelude::*;
//!
//! # fn main() -> hms_core::Result<()> {
//! let store = RecordStore::new("data");
//! store.append("patients.txt", &["7", "Alice", "30", "F"])?;
//!
//! for record in store.scan("patients.txt", 0, Some(7))? {
//!     print!("{}", render_kind(RecordKind::Patient, &record));
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod record;
pub mod schema;
pub mod store;

pub use error::{Error, Result};

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::config::{ConsoleConfig, HmsConfig, LogConfig, StoreConfig};
    pub use crate::display::{render_kind, render_record, RecordSheet};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        Appointment, Feedback, HospitalRecord, LabReport, Patient, Prescription,
    };
    pub use crate::record::{Record, DELIMITER};
    pub use crate::schema::{RecordKind, Schema};
    pub use crate::store::{RecordStore, Records};
}
