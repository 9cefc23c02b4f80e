//! Student record payload.

use std::fmt;

use crate::common::RecordId;

/// The attributes stored for one student.
///
/// The B-tree only indexes [`RecordId`]s. The rest of the record lives in the
/// [`RecordStore`](super::RecordStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    pub course: String,
}

impl StudentRecord {
    pub fn new(id: RecordId, name: impl Into<String>, age: u32, course: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            course: course.into(),
        }
    }
}

/// Renders the record as an ID card.
impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================================")?;
        writeln!(f, "       STUDENT RECORD FOUND      ")?;
        writeln!(f, "================================")?;
        writeln!(f, " ID     : {}", self.id)?;
        writeln!(f, " Name   : {}", self.name)?;
        writeln!(f, " Age    : {}", self.age)?;
        writeln!(f, " Course : {}", self.course)?;
        write!(f, "================================")
    }
}
