//! Lab portal: report entry and printing.

use std::io::{BufRead, Write};

use hms_core::models::LabReport;
use hms_core::schema::RecordKind;
use tracing::info;

use crate::error::Result;
use crate::menu::{self, MenuCommand};
use crate::session::Session;

/// Lab menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabCommand {
    /// Record a test report
    EnterReport,
    /// Print every report for one patient
    PrintReports,
    /// Return to the main menu
    Back,
}

impl MenuCommand for LabCommand {
    const TITLE: &'static str = "---Welcome To Lab Portal ---";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (LabCommand::EnterReport, "Test Report Entry"),
        (LabCommand::PrintReports, "Print Report"),
        (LabCommand::Back, "Back to Main Menu"),
    ];
}

/// Run the lab menu until Back
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    loop {
        session.console.clear()?;
        let Some(command) = menu::choose::<LabCommand, _, _>(&mut session.console)? else {
            writeln!(session.console, "\nInvalid choice!")?;
            session.console.pause()?;
            continue;
        };

        match command {
            LabCommand::EnterReport => enter_report(session)?,
            LabCommand::PrintReports => print_reports(session)?,
            LabCommand::Back => return Ok(()),
        }
        session.console.pause()?;
    }
}

fn enter_report<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(patient_id) = session.ask_patient_id("\nEnter Patient ID: ", "Invalid ID.")? else {
        return Ok(());
    };
    let report = session.console.prompt("Enter report (single line):\n")?;

    match session.store.insert(&LabReport { patient_id, report }) {
        Ok(()) => {
            info!(patient_id, "Lab report entered");
            writeln!(session.console, "\nReport Saved!")?;
            Ok(())
        }
        Err(e) => session.report("Saving lab report", &e),
    }
}

fn print_reports<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    if session.report_missing(RecordKind::LabReport)? {
        return Ok(());
    }
    let Some(patient_id) = session.ask_patient_id("\nEnter Patient ID: ", "Invalid input.")? else {
        return Ok(());
    };
    session.list_for_patient(
        RecordKind::LabReport,
        patient_id,
        "====== Lab Reports ======",
        "No lab report available.",
    )
}
