//! Doctor portal: patient list and prescriptions.

use std::io::{BufRead, Write};

use hms_core::models::Prescription;
use tracing::info;

use crate::error::Result;
use crate::menu::{self, MenuCommand};
use crate::portals::reception;
use crate::session::Session;

/// Doctor menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorCommand {
    /// List every registered patient
    ViewPatients,
    /// Record a prescription for a patient
    WritePrescription,
    /// Return to the main menu
    Back,
}

impl MenuCommand for DoctorCommand {
    const TITLE: &'static str = "---Welcome To Doctor Portal ---";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (DoctorCommand::ViewPatients, "View Patient List"),
        (DoctorCommand::WritePrescription, "Write Prescription"),
        (DoctorCommand::Back, "Back to Main Menu"),
    ];
}

/// Run the doctor menu until Back
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    loop {
        session.console.clear()?;
        let Some(command) = menu::choose::<DoctorCommand, _, _>(&mut session.console)? else {
            writeln!(session.console, "\nInvalid choice!")?;
            session.console.pause()?;
            continue;
        };

        match command {
            DoctorCommand::ViewPatients => reception::show_all_patients(session)?,
            DoctorCommand::WritePrescription => write_prescription(session)?,
            DoctorCommand::Back => return Ok(()),
        }
        session.console.pause()?;
    }
}

fn write_prescription<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(patient_id) = session.ask_patient_id("\nEnter Patient ID: ", "Invalid ID.")? else {
        return Ok(());
    };
    let prescription = session.console.prompt("Enter prescription (single line):\n")?;

    match session.store.insert(&Prescription {
        patient_id,
        prescription,
    }) {
        Ok(()) => {
            info!(patient_id, "Prescription written");
            writeln!(session.console, "\nPrescription Saved!")?;
            Ok(())
        }
        Err(e) => session.report("Saving prescription", &e),
    }
}
