//! Interactive console session.
//!
//! A [`Session`] drives the menu loop over any `BufRead` input and `Write`
//! output. The binary wires it to stdin/stdout, and tests feed it scripted
//! input.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use super::menu::{ChoiceError, MenuChoice, MENU};
use crate::common::{Error, RecordId, Result};
use crate::index::BTreeIndex;
use crate::storage::{RecordStore, StudentRecord};

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A console session over an index and a record store.
///
/// The index answers "does this ID exist?". The store holds the record
/// attributes. An ID is always checked against the index before the store is
/// touched.
pub struct Session<R, W> {
    index: BTreeIndex<RecordId>,
    store: RecordStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(index: BTreeIndex<RecordId>, store: RecordStore, input: R, output: W) -> Self {
        Self {
            index,
            store,
            input,
            output,
        }
    }

    /// The index built up during this session.
    pub fn index(&self) -> &BTreeIndex<RecordId> {
        &self.index
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    /// Returns `Error::Io` if reading input or writing output fails. Record
    /// store failures are reported to the user and do not end the session.
    pub fn run(&mut self) -> Result<()> {
        info!(
            min_degree = self.index.min_degree(),
            dir = %self.store.dir().display(),
            "session started"
        );
        writeln!(self.output, "Welcome to the University Database System")?;

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choice: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Ok(MenuChoice::AddStudent) => self.add_student()?,
                Ok(MenuChoice::SearchStudent) => self.search_student()?,
                Ok(MenuChoice::ShowTree) => self.show_tree()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting system...")?;
                    Flow::Exit
                }
                Err(ChoiceError::NotANumber) => {
                    writeln!(self.output, "Invalid input! Please enter a number (1-4).")?;
                    Flow::Continue
                }
                Err(ChoiceError::OutOfRange(_)) => {
                    writeln!(self.output, "Invalid choice, please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush()?;
        info!(records = self.index.len(), "session ended");
        Ok(())
    }

    fn add_student(&mut self) -> Result<Flow> {
        let Some(line) = self.prompt("\nEnter ID (e.g., 101): ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(id) = line.parse::<RecordId>() else {
            writeln!(self.output, "Invalid ID! Must be a number.")?;
            return Ok(Flow::Continue);
        };

        if self.index.search(id) {
            writeln!(self.output, "[Warning] Student ID {} already exists!", id)?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompt("Enter Name (e.g., Rahul Sharma): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(line) = self.prompt("Enter Age: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(age) = line.trim().parse::<u32>() else {
            writeln!(self.output, "Invalid Age! Student not added.")?;
            return Ok(Flow::Continue);
        };
        let Some(course) = self.prompt("Enter Course (e.g., B.Tech CS): ")? else {
            return Ok(Flow::Exit);
        };

        // The search above rules out a duplicate, so this always adds the ID
        let inserted = self.index.insert(id);
        debug_assert!(inserted, "ID {} was indexed twice", id);
        let record = StudentRecord::new(id, name, age, course);
        match self.store.save(&record) {
            Ok(path) => {
                let file_name = path.file_name().unwrap_or(path.as_os_str());
                writeln!(
                    self.output,
                    "[Success] Student data saved to {}",
                    file_name.to_string_lossy()
                )?;
            }
            Err(e) => {
                warn!(id = %id, error = %e, "failed to save record");
                writeln!(self.output, "[Error] Could not create file! Check permissions.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn search_student(&mut self) -> Result<Flow> {
        let Some(line) = self.prompt("Enter ID to Search: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(id) = line.parse::<RecordId>() else {
            writeln!(self.output, "Invalid ID!")?;
            return Ok(Flow::Continue);
        };

        if !self.index.search(id) {
            writeln!(self.output, "[Result] Student ID {} not found.", id)?;
            return Ok(Flow::Continue);
        }

        match self.store.load(id) {
            Ok(record) => writeln!(self.output, "\n{}\n", record)?,
            Err(Error::RecordNotFound(_)) => {
                warn!(id = %id, "indexed record has no data file");
                writeln!(self.output, "[Error] Index found, but data file is missing!")?;
            }
            Err(e) => {
                warn!(id = %id, error = %e, "failed to load record");
                writeln!(self.output, "[Error] Could not read record {}: {}", id, e)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn show_tree(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n--- Current B+ Tree Index Structure ---")?;
        writeln!(self.output, "{}", self.index.display())?;
        writeln!(self.output, "---------------------------------------")?;
        Ok(Flow::Continue)
    }

    /// Print `text` and read one line, without its line ending.
    ///
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script(script: &str) -> (String, BTreeIndex<RecordId>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        let index = BTreeIndex::new(3).unwrap();
        let mut session = Session::new(index, store, Cursor::new(script.to_string()), Vec::new());

        session.run().unwrap();

        let output = String::from_utf8(session.output().clone()).unwrap();
        (output, session.index().clone(), dir)
    }

    #[test]
    fn test_exit_immediately() {
        let (output, index, _dir) = run_script("4\n");
        assert!(output.starts_with("Welcome to the University Database System"));
        assert!(output.contains("Exiting system..."));
        assert!(index.is_empty());
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (output, _, _dir) = run_script("");
        assert!(output.contains("Choice: "));
        assert!(!output.contains("Exiting system..."));
    }

    #[test]
    fn test_invalid_choice_recovers() {
        let (output, _, _dir) = run_script("abc\n9\n4\n");
        assert!(output.contains("Invalid input! Please enter a number (1-4)."));
        assert!(output.contains("Invalid choice, please try again."));
        assert!(output.contains("Exiting system..."));
    }

    #[test]
    fn test_add_then_search() {
        let (output, index, dir) =
            run_script("1\n101\nRahul Sharma\n20\nB.Tech CS\n2\n101\n4\n");

        assert!(output.contains("[Success] Student data saved to 101.txt"));
        assert!(output.contains(" Name   : Rahul Sharma"));
        assert!(output.contains(" Course : B.Tech CS"));
        assert!(index.search(RecordId::new(101)));
        assert!(dir.path().join("101.txt").is_file());
    }

    #[test]
    fn test_duplicate_id_warns() {
        let (output, index, _dir) =
            run_script("1\n5\nA\n1\nX\n1\n5\n4\n");
        assert!(output.contains("[Warning] Student ID 5 already exists!"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_invalid_id_and_age() {
        let (output, index, _dir) = run_script("1\nxyz\n1\n8\nBob\nold\n2\n?\n4\n");
        assert!(output.contains("Invalid ID! Must be a number."));
        assert!(output.contains("Invalid Age! Student not added."));
        assert!(output.contains("Invalid ID!\n"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_search_missing_id() {
        let (output, _, _dir) = run_script("2\n42\n4\n");
        assert!(output.contains("[Result] Student ID 42 not found."));
    }

    #[test]
    fn test_show_empty_tree() {
        let (output, _, _dir) = run_script("3\n4\n");
        assert!(output.contains("--- Current B+ Tree Index Structure ---"));
        assert!(output.contains("0 keys"));
    }
}
