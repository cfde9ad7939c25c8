//! Patient self-service: details, appointments, lab reports, prescriptions.

use std::io::{BufRead, Write};

use hms_core::display::render_kind;
use hms_core::models::{HospitalRecord, Patient};
use hms_core::schema::RecordKind;

use crate::error::Result;
use crate::menu::{self, MenuCommand};
use crate::session::Session;

const ID_PROMPT: &str = "\nEnter your Patient ID: ";

/// Patient menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientCommand {
    /// Registration details
    ViewDetails,
    /// Booked appointments
    ViewAppointments,
    /// Lab reports
    ViewLabReports,
    /// Prescriptions
    ViewPrescriptions,
    /// Return to the main menu
    Back,
}

impl MenuCommand for PatientCommand {
    const TITLE: &'static str = "=============== PATIENT PORTAL ===============";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (PatientCommand::ViewDetails, "View My Details"),
        (PatientCommand::ViewAppointments, "View Appointments"),
        (PatientCommand::ViewLabReports, "View Lab Reports"),
        (PatientCommand::ViewPrescriptions, "View Prescriptions"),
        (PatientCommand::Back, "Back to Main Menu"),
    ];
}

/// Run the patient menu until Back
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    loop {
        session.console.clear()?;
        let Some(command) = menu::choose::<PatientCommand, _, _>(&mut session.console)? else {
            writeln!(session.console, "\nInvalid Input!")?;
            session.console.pause()?;
            continue;
        };

        match command {
            PatientCommand::ViewDetails => view_details(session)?,
            PatientCommand::ViewAppointments => view_records(
                session,
                RecordKind::Appointment,
                "====== Your Appointments ======",
                "No appointment booked.",
            )?,
            PatientCommand::ViewLabReports => view_records(
                session,
                RecordKind::LabReport,
                "====== Your Lab Reports ======",
                "No lab report available.",
            )?,
            PatientCommand::ViewPrescriptions => view_records(
                session,
                RecordKind::Prescription,
                "====== Your Prescriptions ======",
                "No prescription available.",
            )?,
            PatientCommand::Back => return Ok(()),
        }
        session.console.pause()?;
    }
}

fn view_details<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    if session.report_missing(RecordKind::Patient)? {
        return Ok(());
    }
    let Some(id) = session.ask_patient_id(ID_PROMPT, "Invalid input.")? else {
        return Ok(());
    };

    match session.store.find_first::<Patient>(id) {
        Ok(Some(patient)) => {
            let record = patient.to_fields().into_iter().collect();
            write!(
                session.console,
                "\n====== Your Details ======\n{}",
                render_kind(RecordKind::Patient, &record)
            )?;
        }
        Ok(None) => writeln!(session.console, "\nNo record found for this ID.")?,
        Err(e) => session.report("Reading patients", &e)?,
    }
    Ok(())
}

fn view_records<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    kind: RecordKind,
    heading: &str,
    none_message: &str,
) -> Result<()> {
    if session.report_missing(kind)? {
        return Ok(());
    }
    let Some(id) = session.ask_patient_id(ID_PROMPT, "Invalid input.")? else {
        return Ok(());
    };
    session.list_for_patient(kind, id, heading, none_message)
}
