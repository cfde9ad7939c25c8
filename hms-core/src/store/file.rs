//! Flat-file record store
//!
//! Every record kind lives in its own pipe-delimited text file inside a data
//! directory. Files are append-only: this module never rewrites or truncates
//! a line once it has been written.
//!
//! # Semantics
//! - **Append**: one call writes exactly one line, fields sanitized first.
//! - **Scan**: lazy, forward-only iteration over a file, optionally filtered by
//!   an integer key. Every line is a record, blank ones included. A missing
//!   file scans as empty.
//! - **Handles**: opened inside each call and closed on every exit path; a
//!   [`Records`] iterator owns its handle until exhausted or dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::models::HospitalRecord;
use crate::record::{join_fields, parse_key, sanitize_field, Record};
use crate::schema::{RecordKind, Schema};

/// A directory of flat record files
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
}

impl RecordStore {
    /// Create a store rooted at `data_dir`. Nothing is touched on disk until
    /// the first append.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create a store from configuration
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    /// Directory holding the record files
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of `file_name` inside the data directory
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// Append one record to `file_name`.
    ///
    /// Each field is sanitized (delimiter and line breaks become spaces, length
    /// capped) and the line is written with a single call. If the file cannot
    /// be opened or written, [`Error::RecordWrite`] is returned and earlier
    /// lines are left as they were.
    pub fn append<S: AsRef<str>>(&self, file_name: &str, fields: &[S]) -> Result<()> {
        let sanitized: Vec<String> = fields
            .iter()
            .map(|f| sanitize_field(f.as_ref()))
            .collect();
        let mut line = join_fields(&sanitized);
        line.push('\n');

        self.write_line(file_name, &line)
            .map_err(|e| Error::record_write(file_name, e))?;

        info!(file = file_name, fields = sanitized.len(), "Record appended");
        Ok(())
    }

    fn write_line(&self, file_name: &str, line: &str) -> io::Result<()> {
        if !self.data_dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.data_dir)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path_of(file_name))?;
        file.write_all(line.as_bytes())?;
        file.flush()
    }

    /// Append a record of a known kind after checking the field count and
    /// applying the schema's per-field caps.
    pub fn append_kind<S: AsRef<str>>(&self, kind: RecordKind, fields: &[S]) -> Result<()> {
        let schema = kind.schema();
        if fields.len() != schema.width() {
            return Err(Error::FieldCount {
                file: schema.file_name.to_string(),
                expected: schema.width(),
                actual: fields.len(),
            });
        }
        self.append(schema.file_name, &schema.prepare(fields))
    }

    /// Append a typed record
    pub fn insert<T: HospitalRecord>(&self, record: &T) -> Result<()> {
        self.append_kind(T::KIND, &record.to_fields())
    }

    /// Scan `file_name`, yielding records whose field at `key_index` equals
    /// `key_filter`, or every record when no filter is given.
    ///
    /// A missing file is not an error: the result is simply empty. Keys that
    /// are missing or not numeric read as 0.
    pub fn scan(
        &self,
        file_name: &str,
        key_index: usize,
        key_filter: Option<i64>,
    ) -> Result<Records> {
        let path = self.path_of(file_name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(file = file_name, "No record file yet, scanning as empty");
                return Ok(Records::empty(file_name));
            }
            Err(e) => return Err(Error::record_read(file_name, e)),
        };

        debug!(file = file_name, key_index, ?key_filter, "Scanning records");
        Ok(Records {
            file_name: file_name.to_string(),
            reader: Some(BufReader::new(file)),
            key_index,
            key_filter,
            schema: None,
            buf: Vec::new(),
        })
    }

    /// Scan the file of `kind`, shaping each record to its schema
    pub fn scan_kind(&self, kind: RecordKind, key_filter: Option<i64>) -> Result<Records> {
        let schema = kind.schema();
        let mut records = self.scan(schema.file_name, schema.key_index, key_filter)?;
        records.schema = Some(schema);
        Ok(records)
    }

    /// Typed scan
    pub fn query<T: HospitalRecord>(
        &self,
        key_filter: Option<i64>,
    ) -> Result<impl Iterator<Item = T>> {
        Ok(self
            .scan_kind(T::KIND, key_filter)?
            .map(|record| T::from_record(&record)))
    }

    /// First typed record with the given key; stops reading at the match
    pub fn find_first<T: HospitalRecord>(&self, key: i64) -> Result<Option<T>> {
        Ok(self.query::<T>(Some(key))?.next())
    }

    /// True when the file of `kind` has been created
    pub fn exists(&self, kind: RecordKind) -> bool {
        self.path_of(kind.file_name()).is_file()
    }

    /// Number of stored records of `kind`
    pub fn count(&self, kind: RecordKind) -> Result<usize> {
        Ok(self.scan_kind(kind, None)?.count())
    }
}

/// Lazy iterator over the records of one file.
///
/// Owns the file handle; the handle is released at end of file, on a read
/// error, or when the iterator is dropped.
#[derive(Debug)]
pub struct Records {
    file_name: String,
    reader: Option<BufReader<File>>,
    key_index: usize,
    key_filter: Option<i64>,
    schema: Option<Schema>,
    buf: Vec<u8>,
}

impl Records {
    fn empty(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            reader: None,
            key_index: 0,
            key_filter: None,
            schema: None,
            buf: Vec::new(),
        }
    }

    /// Name of the file being scanned
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    fn next_line(&mut self) -> Option<String> {
        let reader = self.reader.as_mut()?;
        self.buf.clear();
        match reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(_) => Some(String::from_utf8_lossy(&self.buf).into_owned()),
            Err(e) => {
                warn!(file = %self.file_name, error = %e, "Read failed, ending scan");
                self.reader = None;
                None
            }
        }
    }

    fn matches(&self, line: &str) -> bool {
        match self.key_filter {
            None => true,
            Some(wanted) => {
                let key = line.split(crate::record::DELIMITER).nth(self.key_index);
                parse_key(key.unwrap_or("")) == wanted
            }
        }
    }
}

impl Iterator for Records {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        loop {
            let line = self.next_line()?;
            if !self.matches(&line) {
                continue;
            }
            let record = Record::parse_line(&line);
            return Some(match &self.schema {
                Some(schema) => schema.conform(&record),
                None => record,
            });
        }
    }
}
