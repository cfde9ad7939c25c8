//! Typed hospital records
//!
//! Each model maps one-to-one onto a line of its record file. Conversions from
//! [`Record`] never fail: short lines default their missing fields.

use crate::record::Record;
use crate::schema::RecordKind;

/// A typed view over one kind of stored record
pub trait HospitalRecord: Sized {
    /// Which file this record lives in
    const KIND: RecordKind;

    /// Integer key (first field)
    fn key(&self) -> i64;

    /// Fields in stored order
    fn to_fields(&self) -> Vec<String>;

    /// Build from a stored record, defaulting missing fields
    fn from_record(record: &Record) -> Self;
}

/// A registered patient (`patients.txt`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    /// Patient ID
    pub id: i64,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: i64,
    /// Gender as entered
    pub gender: String,
}

/// A booked appointment (`appointments.txt`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    /// Patient the appointment is for
    pub patient_id: i64,
    /// Date as entered
    pub date: String,
    /// Time as entered
    pub time: String,
    /// Doctor's name
    pub doctor: String,
}

/// A lab report (`labreports.txt`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabReport {
    /// Patient the report belongs to
    pub patient_id: i64,
    /// Report body
    pub report: String,
}

/// A prescription (`prescriptions.txt`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescription {
    /// Patient the prescription is for
    pub patient_id: i64,
    /// Prescription body
    pub prescription: String,
}

/// Visitor feedback (`feedback.txt`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Patient ID, 0 when anonymous
    pub patient_id: i64,
    /// Feedback text
    pub text: String,
}

impl Feedback {
    /// True when submitted without a patient ID
    pub fn is_anonymous(&self) -> bool {
        self.patient_id == 0
    }
}

impl HospitalRecord for Patient {
    const KIND: RecordKind = RecordKind::Patient;

    fn key(&self) -> i64 {
        self.id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.age.to_string(),
            self.gender.clone(),
        ]
    }

    fn from_record(record: &Record) -> Self {
        Self {
            id: record.int(0),
            name: record.get(1).to_string(),
            age: record.int(2),
            gender: record.get(3).to_string(),
        }
    }
}

impl HospitalRecord for Appointment {
    const KIND: RecordKind = RecordKind::Appointment;

    fn key(&self) -> i64 {
        self.patient_id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.patient_id.to_string(),
            self.date.clone(),
            self.time.clone(),
            self.doctor.clone(),
        ]
    }

    fn from_record(record: &Record) -> Self {
        Self {
            patient_id: record.int(0),
            date: record.get(1).to_string(),
            time: record.get(2).to_string(),
            doctor: record.get(3).to_string(),
        }
    }
}

impl HospitalRecord for LabReport {
    const KIND: RecordKind = RecordKind::LabReport;

    fn key(&self) -> i64 {
        self.patient_id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![self.patient_id.to_string(), self.report.clone()]
    }

    fn from_record(record: &Record) -> Self {
        Self {
            patient_id: record.int(0),
            report: record.get(1).to_string(),
        }
    }
}

impl HospitalRecord for Prescription {
    const KIND: RecordKind = RecordKind::Prescription;

    fn key(&self) -> i64 {
        self.patient_id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![self.patient_id.to_string(), self.prescription.clone()]
    }

    fn from_record(record: &Record) -> Self {
        Self {
            patient_id: record.int(0),
            prescription: record.get(1).to_string(),
        }
    }
}

impl HospitalRecord for Feedback {
    const KIND: RecordKind = RecordKind::Feedback;

    fn key(&self) -> i64 {
        self.patient_id
    }

    fn to_fields(&self) -> Vec<String> {
        vec![self.patient_id.to_string(), self.text.clone()]
    }

    fn from_record(record: &Record) -> Self {
        Self {
            patient_id: record.int(0),
            text: record.get(1).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_from_short_record() {
        let patient = Patient::from_record(&Record::parse_line("5|OnlyName"));
        assert_eq!(
            patient,
            Patient {
                id: 5,
                name: "OnlyName".to_string(),
                age: 0,
                gender: String::new(),
            }
        );
    }

    #[test]
    fn test_fields_match_schema_width() {
        let appointment = Appointment {
            patient_id: 3,
            date: "2024-05-01".to_string(),
            time: "10:30".to_string(),
            doctor: "Dr. Rao".to_string(),
        };
        assert_eq!(
            appointment.to_fields().len(),
            Appointment::KIND.schema().width()
        );
        assert_eq!(appointment.key(), 3);
    }

    #[test]
    fn test_anonymous_feedback() {
        let feedback = Feedback::from_record(&Record::parse_line("0|Clean wards"));
        assert!(feedback.is_anonymous());
        assert_eq!(feedback.text, "Clean wards");
    }
}
