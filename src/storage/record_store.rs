//! Record Store - one text file per student record.
//!
//! The [`RecordStore`] owns a directory and maps each [`RecordId`] to a file
//! named after the identifier's textual form.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::record::StudentRecord;
use crate::common::config::RECORD_FILE_EXTENSION;
use crate::common::{Error, RecordId, Result};

/// Stores student records as individual files.
///
/// # File Layout
/// Record `101` is stored in `<dir>/101.txt` as three lines:
/// ```text
/// Rahul Sharma
/// 20
/// B.Tech CS
/// ```
/// Fields are read back in the same order they were written: name, age, course.
///
/// # Thread Safety
/// `RecordStore` is **single-threaded**. The console session is its only user.
#[derive(Debug)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the record files.
    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing record `id`.
    pub fn path_for(&self, id: RecordId) -> PathBuf {
        self.dir.join(format!("{}.{}", id, RECORD_FILE_EXTENSION))
    }

    /// Write a record to its file, replacing any previous contents.
    ///
    /// Returns the path written.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be created or written.
    pub fn save(&self, record: &StudentRecord) -> Result<PathBuf> {
        let path = self.path_for(record.id);
        let mut writer = BufWriter::new(fs::File::create(&path)?);

        writeln!(writer, "{}", record.name)?;
        writeln!(writer, "{}", record.age)?;
        writeln!(writer, "{}", record.course)?;
        writer.flush()?;

        debug!(id = %record.id, path = %path.display(), "saved record");
        Ok(path)
    }

    /// Read record `id` back from its file.
    ///
    /// # Errors
    /// - `Error::RecordNotFound` if the file does not exist
    /// - `Error::MalformedRecord` if a field is missing or the age is not a number
    /// - `Error::Io` for any other read failure
    pub fn load(&self, id: RecordId) -> Result<StudentRecord> {
        let path = self.path_for(id);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::RecordNotFound(id));
            }
            Err(e) => return Err(e.into()),
        };

        let mut lines = contents.lines();
        let mut field = |name: &str| {
            lines.next().map(str::to_string).ok_or_else(|| Error::MalformedRecord {
                id,
                reason: format!("missing {} line", name),
            })
        };

        let name = field("name")?;
        let age_line = field("age")?;
        let course = field("course")?;

        let age = age_line.trim().parse().map_err(|_| Error::MalformedRecord {
            id,
            reason: format!("age {:?} is not a number", age_line),
        })?;

        debug!(id = %id, path = %path.display(), "loaded record");
        Ok(StudentRecord {
            id,
            name,
            age,
            course,
        })
    }
}
