//! Scripted console sessions against a temporary data directory.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use hms_core::models::{Appointment, Patient, Prescription};
use hms_core::store::RecordStore;
use hms_portals::{Console, Session};
use tempfile::tempdir;

fn run_session(data_dir: &Path, input: &str) -> String {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut session = Session::new(console, RecordStore::new(data_dir));
    session.run().unwrap();
    String::from_utf8(session.console.into_output()).unwrap()
}

fn seed_patient(data_dir: &Path, id: i64) {
    RecordStore::new(data_dir)
        .insert(&Patient {
            id,
            name: "Seed".to_string(),
            age: 40,
            gender: "M".to_string(),
        })
        .unwrap();
}

fn read(data_dir: &Path, file_name: &str) -> String {
    fs::read_to_string(data_dir.join(file_name)).unwrap()
}

#[test]
fn test_register_then_search() {
    let dir = tempdir().unwrap();
    let script = "1\n\
                  1\n7\nAlice Smith\n30\nF\n\n\
                  3\n7\n\n\
                  5\n8\n";
    let output = run_session(dir.path(), script);

    assert!(output.contains("Patient Registered Successfully!"));
    assert!(output.contains("Patient Found!\nID: 7\nName: Alice Smith\nAge: 30\nGender: F\n"));
    assert!(output.ends_with("\nThank you for using the system!\n"));
    assert_eq!(read(dir.path(), "patients.txt"), "7|Alice Smith|30|F\n");
}

#[test]
fn test_search_unknown_patient() {
    let dir = tempdir().unwrap();
    seed_patient(dir.path(), 1);
    let output = run_session(dir.path(), "1\n3\n42\n\n5\n8\n");
    assert!(output.contains("Patient Not Found!"));
}

#[test]
fn test_invalid_main_choice() {
    let dir = tempdir().unwrap();
    let output = run_session(dir.path(), "abc\n\n9\n\n8\n");
    assert_eq!(output.matches("Invalid choice! Try again.").count(), 2);
    assert!(output.contains("Thank you for using the system!"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = tempdir().unwrap();
    let output = run_session(dir.path(), "");
    assert!(output.contains("WELCOME TO HOSPITAL MANAGEMENT SYSTEM"));
    assert!(!output.contains("Thank you for using the system!"));
}

#[test]
fn test_end_of_input_mid_registration_writes_nothing() {
    let dir = tempdir().unwrap();
    run_session(dir.path(), "1\n1\n5\n");
    assert!(!dir.path().join("patients.txt").exists());
}

#[test]
fn test_invalid_age_aborts_registration() {
    let dir = tempdir().unwrap();
    let output = run_session(dir.path(), "1\n1\n3\nBob\nold\n\n5\n8\n");
    assert!(output.contains("Invalid Age."));
    assert!(!dir.path().join("patients.txt").exists());
}

#[test]
fn test_anonymous_feedback() {
    let dir = tempdir().unwrap();
    let output = run_session(dir.path(), "7\nnone\nGreat staff | quick service\n\n8\n");
    assert!(output.contains("Thank you for your feedback!"));
    assert_eq!(read(dir.path(), "feedback.txt"), "0|Great staff   quick service\n");
}

#[test]
fn test_patient_views_only_own_appointments() {
    let dir = tempdir().unwrap();
    let store = RecordStore::new(dir.path());
    for (patient_id, date) in [(5, "2024-01-01"), (6, "2024-01-02"), (5, "2024-01-03")] {
        store
            .insert(&Appointment {
                patient_id,
                date: date.to_string(),
                time: "10:00".to_string(),
                doctor: "Dr. Rao".to_string(),
            })
            .unwrap();
    }

    let output = run_session(dir.path(), "2\n2\n5\n\n5\n8\n");
    assert!(output.contains(
        "====== Your Appointments ======\n\
         Patient ID: 5\nDate: 2024-01-01\nTime: 10:00\nDoctor: Dr. Rao\n\
         -----------------------------\n\
         Patient ID: 5\nDate: 2024-01-03\nTime: 10:00\nDoctor: Dr. Rao\n\
         -----------------------------\n"
    ));
    assert!(!output.contains("2024-01-02"));
}

#[test]
fn test_patient_without_records() {
    let dir = tempdir().unwrap();
    seed_patient(dir.path(), 1);
    RecordStore::new(dir.path())
        .insert(&Prescription {
            patient_id: 1,
            prescription: "Rest".to_string(),
        })
        .unwrap();

    let output = run_session(dir.path(), "2\n4\n9\n\n1\n9\n\n5\n8\n");
    assert!(output.contains("No prescription available."));
    assert!(output.contains("No record found for this ID."));
}

#[test]
fn test_missing_files_reported_before_asking_for_id() {
    let dir = tempdir().unwrap();
    let script = "2\n1\n\n2\n\n3\n\n4\n\n5\n\
                  4\n2\n\n3\n\
                  1\n3\n\n5\n8\n";
    let output = run_session(dir.path(), script);

    assert!(output.contains("\nNo appointments found.\n"));
    assert!(output.contains("\nNo lab reports found.\n"));
    assert!(output.contains("\nNo prescriptions found.\n"));
    assert_eq!(output.matches("\nNo patient records found.\n").count(), 2);
    assert!(!output.contains("Enter your Patient ID"));
    assert!(!output.contains("Enter Patient ID to search"));
    assert!(output.ends_with("\nThank you for using the system!\n"));
}

#[test]
fn test_prescription_and_lab_report_reach_patient() {
    let dir = tempdir().unwrap();
    let script = "3\n2\n4\nRest and fluids\n\n3\n\
                  4\n1\n4\nCBC normal\n\n2\n4\n\n3\n\
                  2\n4\n4\n\n5\n8\n";
    let output = run_session(dir.path(), script);

    assert!(output.contains("Prescription Saved!"));
    assert!(output.contains("Report Saved!"));
    assert!(output.contains("====== Lab Reports ======\nPatient ID: 4\nReport: CBC normal\n"));
    assert!(output.contains(
        "====== Your Prescriptions ======\nPatient ID: 4\nPrescription: Rest and fluids\n"
    ));
    assert_eq!(read(dir.path(), "prescriptions.txt"), "4|Rest and fluids\n");
    assert_eq!(read(dir.path(), "labreports.txt"), "4|CBC normal\n");
}

#[test]
fn test_admin_counts_records() {
    let dir = tempdir().unwrap();
    let output = run_session(dir.path(), "1\n1\n1\nA\n20\nM\n\n1\n2\nB\n21\nF\n\n5\n5\n\n8\n");
    assert!(output.contains("---Welcome To Admin Portal ---"));
    assert!(output.contains(&format!("  {:<14} {:>6}  (patients.txt)", "patients", 2)));
    assert!(output.contains(&format!("  {:<14} {:>6}  (feedback.txt)", "feedback", 0)));
}
