//! Console session: the main menu loop and the state shared by all portals.

use std::io::{BufRead, Write};

use hms_core::display::RecordSheet;
use hms_core::schema::RecordKind;
use hms_core::store::RecordStore;
use tracing::{info, warn};

use crate::console::Console;
use crate::error::{PortalError, Result};
use crate::menu::{self, MenuCommand};
use crate::portals;

const BANNER: &str = "\n=====================================================\n         \
WELCOME TO HOSPITAL MANAGEMENT SYSTEM\n                     \
TEAM: UPSIDEDOWN\n=====================================================\n";

/// Separator printed after each record in a per-patient listing
pub(crate) const RECORD_SEPARATOR: &str = "-----------------------------";

/// Top-level portals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    /// Registration, lookup and booking
    Reception,
    /// Self-service views for one patient
    Patient,
    /// Patient list and prescriptions
    Doctor,
    /// Lab report entry and printing
    Lab,
    /// Record counts
    Admin,
    /// Static team screen
    TeamDetails,
    /// Leave feedback
    Feedback,
    /// End the session
    Exit,
}

impl MenuCommand for MainCommand {
    const TITLE: &'static str = "Choose a Portal:";
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (MainCommand::Reception, "Reception"),
        (MainCommand::Patient, "Patient"),
        (MainCommand::Doctor, "Doctor"),
        (MainCommand::Lab, "Lab"),
        (MainCommand::Admin, "Admin"),
        (MainCommand::TeamDetails, "Team Details"),
        (MainCommand::Feedback, "Feedback"),
        (MainCommand::Exit, "Exit"),
    ];
}

/// One interactive user working against one record store
pub struct Session<R, W> {
    /// Terminal the session reads from and writes to
    pub console: Console<R, W>,
    /// Store every portal reads and appends
    pub store: RecordStore,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over `console` and `store`
    pub fn new(console: Console<R, W>, store: RecordStore) -> Self {
        Self { console, store }
    }

    /// Run the main menu until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        info!(data_dir = ?self.store.data_dir(), "Console session started");
        match self.main_loop() {
            Err(PortalError::InputClosed) => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_loop(&mut self) -> Result<()> {
        loop {
            self.console.clear()?;
            write!(self.console, "{}", BANNER)?;

            let Some(command) = menu::choose::<MainCommand, _, _>(&mut self.console)? else {
                writeln!(self.console, "\nInvalid choice! Try again.")?;
                self.console.pause()?;
                continue;
            };

            match command {
                MainCommand::Reception => portals::reception::run(self)?,
                MainCommand::Patient => portals::patient::run(self)?,
                MainCommand::Doctor => portals::doctor::run(self)?,
                MainCommand::Lab => portals::lab::run(self)?,
                MainCommand::Admin => portals::info::admin(self)?,
                MainCommand::TeamDetails => portals::info::team(self)?,
                MainCommand::Feedback => portals::feedback::run(self)?,
                MainCommand::Exit => {
                    writeln!(self.console, "\nThank you for using the system!")?;
                    self.console.flush()?;
                    info!("Console session ended by user");
                    return Ok(());
                }
            }
        }
    }

    /// Tell the user a store operation failed and log it
    pub(crate) fn report(&mut self, action: &str, err: &hms_core::Error) -> Result<()> {
        warn!(error = %err, "{} failed", action);
        writeln!(self.console, "\n{} failed: {}", action, err)?;
        Ok(())
    }

    /// Ask for a patient ID; prints `invalid` and returns `None` on bad input
    pub(crate) fn ask_patient_id(&mut self, prompt: &str, invalid: &str) -> Result<Option<i64>> {
        let id = self.console.prompt_int(prompt)?;
        if id.is_none() {
            writeln!(self.console, "{}", invalid)?;
        }
        Ok(id)
    }

    /// Print the "nothing stored yet" message for `kind` when its file has
    /// not been created. Returns true when the file is missing.
    pub(crate) fn report_missing(&mut self, kind: RecordKind) -> Result<bool> {
        if self.store.exists(kind) {
            return Ok(false);
        }
        let message = match kind {
            RecordKind::Patient => "No patient records found.",
            RecordKind::Appointment => "No appointments found.",
            RecordKind::LabReport => "No lab reports found.",
            RecordKind::Prescription => "No prescriptions found.",
            RecordKind::Feedback => "No feedback found.",
        };
        writeln!(self.console, "\n{}", message)?;
        Ok(true)
    }

    /// List every record of `kind` for one patient, or `none_message` when
    /// there are none.
    pub(crate) fn list_for_patient(
        &mut self,
        kind: RecordKind,
        patient_id: i64,
        heading: &str,
        none_message: &str,
    ) -> Result<()> {
        let records = match self.store.scan_kind(kind, Some(patient_id)) {
            Ok(records) => records,
            Err(e) => return self.report(&format!("Reading {}", kind), &e),
        };

        let mut sheet = RecordSheet::for_kind(kind).with_separator(RECORD_SEPARATOR);
        sheet.extend(records);

        writeln!(self.console, "\n{}", heading)?;
        if sheet.is_empty() {
            writeln!(self.console, "{}", none_message)?;
        } else {
            write!(self.console, "{}", sheet.render())?;
        }
        Ok(())
    }
}
