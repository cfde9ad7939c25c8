//! Visitor feedback, named or anonymous.

use std::io::{BufRead, Write};

use hms_core::models::Feedback;
use tracing::info;

use crate::error::Result;
use crate::session::Session;

/// Collect one line of feedback. A missing or malformed ID files it as
/// anonymous (0).
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.console.clear()?;
    let patient_id = session
        .console
        .prompt_int("Enter your Patient ID (or 0 to remain anonymous): ")?
        .unwrap_or(0);
    let text = session.console.prompt("Enter your feedback (single line):\n")?;

    let feedback = Feedback { patient_id, text };
    match session.store.insert(&feedback) {
        Ok(()) => {
            info!(anonymous = feedback.is_anonymous(), "Feedback received");
            writeln!(session.console, "\nThank you for your feedback!")?;
        }
        Err(e) => session.report("Saving feedback", &e)?,
    }
    session.console.pause()
}
