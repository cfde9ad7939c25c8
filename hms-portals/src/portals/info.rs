//! Informational screens: admin summary and team details.

use std::io::{BufRead, Write};

use hms_core::schema::RecordKind;

use crate::error::Result;
use crate::session::Session;

const TEAM_DETAILS: &str = "\n--- Team Contribution & Feedback ---\n\
Team Name: UPSIDEDOWN\n\n\
1. Project Concept: Hospital Management System\n\
2. Team Roles:\n   \
- Member 1: Coding\n   \
- Member 2: Documentation\n   \
- Member 3: UI Flow / Presentation\n\
\nFeedback: This project is built for educational purposes.\n";

/// Record counts per file. Records are append-only, so there is nothing to
/// edit or remove from here.
pub fn admin<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.console.clear()?;
    writeln!(session.console, "\n---Welcome To Admin Portal ---")?;
    writeln!(session.console, "Data directory: {}", session.store.data_dir().display())?;
    writeln!(session.console, "\nStored records:")?;

    for kind in RecordKind::ALL {
        match session.store.count(kind) {
            Ok(count) => writeln!(
                session.console,
                "  {:<14} {:>6}  ({})",
                kind.to_string(),
                count,
                kind.file_name()
            )?,
            Err(e) => session.report(&format!("Counting {}", kind), &e)?,
        }
    }

    writeln!(session.console, "\nStaff management and record edits are not available.")?;
    session.console.pause()
}

/// Static team details
pub fn team<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.console.clear()?;
    write!(session.console, "{}", TEAM_DETAILS)?;
    session.console.pause()
}
