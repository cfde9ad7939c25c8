//! Per-file schemas
//!
//! Each record file has a fixed field order. Schemas are only used to check the
//! field count on typed appends and to shape records read back from disk; they
//! do not validate content.

use std::fmt;

use crate::record::{parse_key, sanitize_field, truncate_chars, Record};

/// How a field is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer parsed leniently; missing or malformed values read as 0
    Integer,
    /// Free text capped at `max_chars`; missing values read as ""
    Text {
        /// Maximum stored length in characters
        max_chars: usize,
    },
}

/// One column of a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Machine name (e.g. `patient_id`)
    pub name: &'static str,
    /// Human label used when displaying (e.g. `Patient ID`)
    pub label: &'static str,
    /// Interpretation of the field
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn integer(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Integer,
        }
    }

    const fn text(name: &'static str, label: &'static str, max_chars: usize) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text { max_chars },
        }
    }

    /// Normalize a raw value for this field
    fn conform(&self, raw: &str) -> String {
        match self.kind {
            FieldKind::Integer => parse_key(raw).to_string(),
            FieldKind::Text { max_chars } => truncate_chars(raw, max_chars).to_string(),
        }
    }
}

/// The kinds of record the store keeps, one file each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `patients.txt`
    Patient,
    /// `appointments.txt`
    Appointment,
    /// `labreports.txt`
    LabReport,
    /// `prescriptions.txt`
    Prescription,
    /// `feedback.txt`
    Feedback,
}

/// Fixed field layout of one record file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// File name inside the data directory
    pub file_name: &'static str,
    /// Index of the integer key field
    pub key_index: usize,
    /// Fields in stored order
    pub fields: &'static [FieldSpec],
}

const PATIENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::integer("id", "ID"),
    FieldSpec::text("name", "Name", 99),
    FieldSpec::integer("age", "Age"),
    FieldSpec::text("gender", "Gender", 19),
];

const APPOINTMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::integer("patient_id", "Patient ID"),
    FieldSpec::text("date", "Date", 63),
    FieldSpec::text("time", "Time", 63),
    FieldSpec::text("doctor", "Doctor", 127),
];

const LAB_REPORT_FIELDS: &[FieldSpec] = &[
    FieldSpec::integer("patient_id", "Patient ID"),
    FieldSpec::text("report_text", "Report", 899),
];

const PRESCRIPTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::integer("patient_id", "Patient ID"),
    FieldSpec::text("prescription_text", "Prescription", 899),
];

const FEEDBACK_FIELDS: &[FieldSpec] = &[
    FieldSpec::integer("patient_id_or_zero", "Patient ID"),
    FieldSpec::text("feedback_text", "Feedback", 999),
];

impl RecordKind {
    /// Every kind, in menu order
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Patient,
        RecordKind::Appointment,
        RecordKind::LabReport,
        RecordKind::Prescription,
        RecordKind::Feedback,
    ];

    /// Schema of this kind's file
    pub const fn schema(self) -> Schema {
        match self {
            RecordKind::Patient => Schema {
                file_name: "patients.txt",
                key_index: 0,
                fields: PATIENT_FIELDS,
            },
            RecordKind::Appointment => Schema {
                file_name: "appointments.txt",
                key_index: 0,
                fields: APPOINTMENT_FIELDS,
            },
            RecordKind::LabReport => Schema {
                file_name: "labreports.txt",
                key_index: 0,
                fields: LAB_REPORT_FIELDS,
            },
            RecordKind::Prescription => Schema {
                file_name: "prescriptions.txt",
                key_index: 0,
                fields: PRESCRIPTION_FIELDS,
            },
            RecordKind::Feedback => Schema {
                file_name: "feedback.txt",
                key_index: 0,
                fields: FEEDBACK_FIELDS,
            },
        }
    }

    /// File name inside the data directory
    pub const fn file_name(self) -> &'static str {
        self.schema().file_name
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Patient => "patients",
            RecordKind::Appointment => "appointments",
            RecordKind::LabReport => "lab reports",
            RecordKind::Prescription => "prescriptions",
            RecordKind::Feedback => "feedback",
        };
        f.write_str(name)
    }
}

impl Schema {
    /// Number of fields in a well-formed line
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// Display labels in field order
    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.label).collect()
    }

    /// Sanitize caller-supplied values for storage, applying each field's cap
    pub fn prepare<S: AsRef<str>>(&self, values: &[S]) -> Vec<String> {
        self.fields
            .iter()
            .zip(values)
            .map(|(spec, value)| spec.conform(&sanitize_field(value.as_ref())))
            .collect()
    }

    /// Shape a record read from disk to this schema.
    ///
    /// Missing trailing fields become `""` or `"0"`, surplus fields are
    /// dropped, integers are normalized and text is capped.
    pub fn conform(&self, record: &Record) -> Record {
        self.fields
            .iter()
            .enumerate()
            .map(|(i, spec)| spec.conform(record.get(i)))
            .collect()
    }
}
