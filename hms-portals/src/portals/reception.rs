//! Reception: patient registration, lookup and appointment booking.

use std::io::{BufRead, Write};

use hms_core::display::{render_kind, RecordSheet};
use hms_core::models::{Appointment, HospitalRecord, Patient};
use hms_core::schema::RecordKind;
use tracing::info;

use crate::error::Result;
use crate::menu::{self, MenuCommand};
use crate::session::Session;

/// Reception menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceptionCommand {
    /// Add a patient
    RegisterPatient,
    /// List every patient
    ShowAllPatients,
    /// Look up one patient by ID
    SearchPatient,
    /// Book an appointment
    BookAppointment,
    /// Return to the main menu
    Back,
}

impl MenuCommand for ReceptionCommand {
    const TITLE: &'static str = "========== RECEPTION PORTAL ==========";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (ReceptionCommand::RegisterPatient, "Register New Patient"),
        (ReceptionCommand::ShowAllPatients, "Show All Registered Patients"),
        (ReceptionCommand::SearchPatient, "Search Patient by ID"),
        (ReceptionCommand::BookAppointment, "Book Appointment"),
        (ReceptionCommand::Back, "Back to Main Menu"),
    ];
}

/// Run the reception menu until Back
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    loop {
        session.console.clear()?;
        let Some(command) = menu::choose::<ReceptionCommand, _, _>(&mut session.console)? else {
            writeln!(session.console, "\nInvalid choice!")?;
            session.console.pause()?;
            continue;
        };

        match command {
            ReceptionCommand::RegisterPatient => register_patient(session)?,
            ReceptionCommand::ShowAllPatients => show_all_patients(session)?,
            ReceptionCommand::SearchPatient => search_patient(session)?,
            ReceptionCommand::BookAppointment => book_appointment(session)?,
            ReceptionCommand::Back => return Ok(()),
        }
        session.console.pause()?;
    }
}

fn register_patient<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(id) = session.ask_patient_id("\nEnter Patient ID: ", "Invalid ID.")? else {
        return Ok(());
    };
    let name = session.console.prompt("Enter Patient Name: ")?;
    let Some(age) = session.console.prompt_int("Enter Age: ")? else {
        writeln!(session.console, "Invalid Age.")?;
        return Ok(());
    };
    let gender = session.console.prompt("Enter Gender: ")?;

    let patient = Patient {
        id,
        name,
        age,
        gender,
    };
    match session.store.insert(&patient) {
        Ok(()) => {
            info!(patient_id = patient.key(), "Patient registered");
            writeln!(session.console, "\nPatient Registered Successfully!")?;
            Ok(())
        }
        Err(e) => session.report("Registering patient", &e),
    }
}

/// Print every registered patient
pub(crate) fn show_all_patients<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let records = match session.store.scan_kind(RecordKind::Patient, None) {
        Ok(records) => records,
        Err(e) => return session.report("Reading patients", &e),
    };

    let mut sheet = RecordSheet::for_kind(RecordKind::Patient).with_separator("--------------");
    sheet.extend(records);

    if sheet.is_empty() {
        writeln!(session.console, "\nNo patient records found.")?;
    } else {
        write!(session.console, "\n==== Patient List ====\n\n{}", sheet.render())?;
    }
    Ok(())
}

fn search_patient<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    if session.report_missing(RecordKind::Patient)? {
        return Ok(());
    }
    let Some(id) = session.ask_patient_id("\nEnter Patient ID to search: ", "Invalid input.")?
    else {
        return Ok(());
    };

    match session.store.find_first::<Patient>(id) {
        Ok(Some(patient)) => {
            let record = patient.to_fields().into_iter().collect();
            write!(
                session.console,
                "\nPatient Found!\n{}",
                render_kind(RecordKind::Patient, &record)
            )?;
        }
        Ok(None) => writeln!(session.console, "\nPatient Not Found!")?,
        Err(e) => session.report("Searching patients", &e)?,
    }
    Ok(())
}

fn book_appointment<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(patient_id) = session.ask_patient_id("\nEnter Patient ID: ", "Invalid ID.")? else {
        return Ok(());
    };
    let date = session.console.prompt("Enter Date: ")?;
    let time = session.console.prompt("Enter Time: ")?;
    let doctor = session.console.prompt("Enter Doctor: ")?;

    let appointment = Appointment {
        patient_id,
        date,
        time,
        doctor,
    };
    match session.store.insert(&appointment) {
        Ok(()) => {
            info!(patient_id, "Appointment booked");
            writeln!(session.console, "\nAppointment Booked Successfully!")?;
            Ok(())
        }
        Err(e) => session.report("Booking appointment", &e),
    }
}
