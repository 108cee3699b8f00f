//! Shell - the interactive text menu.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::common::{Error, Result};
use crate::record::Record;
use crate::shell::input::{parse_id, parse_score, parse_threshold, require_text};
use crate::shell::StudentRegistry;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddFirst,
    AddLast,
    Delete,
    ListAll,
    SortByName,
    SortByAverage,
    SearchByScore,
    FilterList,
    ListByAverage,
    FilterIndex,
    Summary,
    Exit,
}

impl MenuChoice {
    /// Every choice in menu order.
    pub const ALL: [MenuChoice; 12] = [
        MenuChoice::AddFirst,
        MenuChoice::AddLast,
        MenuChoice::Delete,
        MenuChoice::ListAll,
        MenuChoice::SortByName,
        MenuChoice::SortByAverage,
        MenuChoice::SearchByScore,
        MenuChoice::FilterList,
        MenuChoice::ListByAverage,
        MenuChoice::FilterIndex,
        MenuChoice::Summary,
        MenuChoice::Exit,
    ];

    /// The number typed to select this choice.
    pub fn key(self) -> u8 {
        match self {
            MenuChoice::AddFirst => 1,
            MenuChoice::AddLast => 2,
            MenuChoice::Delete => 3,
            MenuChoice::ListAll => 4,
            MenuChoice::SortByName => 5,
            MenuChoice::SortByAverage => 6,
            MenuChoice::SearchByScore => 7,
            MenuChoice::FilterList => 8,
            MenuChoice::ListByAverage => 9,
            MenuChoice::FilterIndex => 10,
            MenuChoice::Summary => 11,
            MenuChoice::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddFirst => "Add student at the beginning",
            MenuChoice::AddLast => "Add student at the end",
            MenuChoice::Delete => "Delete student by ID",
            MenuChoice::ListAll => "Show all students",
            MenuChoice::SortByName => "Sort by name",
            MenuChoice::SortByAverage => "Sort by average",
            MenuChoice::SearchByScore => "Search by exact score",
            MenuChoice::FilterList => "Students with average above a value (list)",
            MenuChoice::ListByAverage => "Show students by average (tree)",
            MenuChoice::FilterIndex => "Students with average above a value (tree)",
            MenuChoice::Summary => "Class summary",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a menu selection such as `"7"`.
    pub fn from_input(text: &str) -> Option<Self> {
        let key: u8 = text.trim().parse().ok()?;
        Self::ALL.into_iter().find(|choice| choice.key() == key)
    }
}

/// Line-oriented menu driving a [`StudentRegistry`].
///
/// Generic over its input and output so it runs against stdin/stdout in the
/// binary and against in-memory buffers in tests. Invalid field input is
/// reported and asked for again; the loop ends on `Exit` or end of input.
///
/// # Example
/// ```
/// use std::io::Cursor;
/// use roster::shell::Shell;
///
/// let script = "2\n1\nAda\nNorth\n90\n80\n4\n0\n";
/// let mut out = Vec::new();
/// let mut shell = Shell::new(Cursor::new(script), &mut out);
/// shell.run().unwrap();
///
/// assert_eq!(shell.registry().len(), 1);
/// drop(shell);
/// assert!(String::from_utf8(out).unwrap().contains("Name: Ada"));
/// ```
pub struct Shell<R, W> {
    input: R,
    output: W,
    registry: StudentRegistry,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over an empty registry.
    pub fn new(input: R, output: W) -> Self {
        Self::with_registry(input, output, StudentRegistry::new())
    }

    /// Create a shell over existing data.
    pub fn with_registry(input: R, output: W, registry: StudentRegistry) -> Self {
        Self {
            input,
            output,
            registry,
        }
    }

    pub fn registry(&self) -> &StudentRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> StudentRegistry {
        self.registry
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    /// Only I/O failures on the reader or writer end the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let Some(choice) = MenuChoice::from_input(&line) else {
                writeln!(self.output, "Unknown option '{}'.", line.trim())?;
                continue;
            };
            if choice == MenuChoice::Exit {
                break;
            }

            debug!(?choice, "menu selection");
            match self.dispatch(choice) {
                Ok(()) => {}
                Err(Error::EndOfInput) => break,
                Err(e) => return Err(e),
            }
        }
        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::AddFirst => self.add_student(true),
            MenuChoice::AddLast => self.add_student(false),
            MenuChoice::Delete => self.delete_student(),
            MenuChoice::ListAll => {
                let records: Vec<&Record> = self.registry.iter().collect();
                print_records(&mut self.output, &records)
            }
            MenuChoice::SortByName => {
                self.registry.sort_by_name();
                writeln!(self.output, "Sorted by name.")?;
                Ok(())
            }
            MenuChoice::SortByAverage => {
                self.registry.sort_by_average();
                writeln!(self.output, "Sorted by average.")?;
                Ok(())
            }
            MenuChoice::SearchByScore => {
                let value = self.prompt("Score to search for: ", parse_threshold)?;
                let records = self.registry.search_by_score(value);
                print_records(&mut self.output, &records)
            }
            MenuChoice::FilterList => {
                let threshold = self.prompt("Minimum average (exclusive): ", parse_threshold)?;
                let records = self.registry.filter_list(threshold);
                print_records(&mut self.output, &records)
            }
            MenuChoice::ListByAverage => {
                let records: Vec<&Record> = self.registry.by_average().collect();
                print_records(&mut self.output, &records)
            }
            MenuChoice::FilterIndex => {
                let threshold = self.prompt("Minimum average (exclusive): ", parse_threshold)?;
                let records = self.registry.filter_index(threshold);
                print_records(&mut self.output, &records)
            }
            MenuChoice::Summary => {
                writeln!(self.output, "{}", self.registry.summary())?;
                Ok(())
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add_student(&mut self, at_head: bool) -> Result<()> {
        let id = self.prompt("ID: ", parse_id)?;
        let name = self.prompt("Name: ", |t| require_text("name", t))?;
        let region = self.prompt("Region: ", |t| require_text("region", t))?;
        let score1 = self.prompt("Score 1 (0-100): ", parse_score)?;
        let score2 = self.prompt("Score 2 (0-100): ", parse_score)?;

        let record = Record::new(id.0, name, region, score1, score2);
        let added = if at_head {
            self.registry.add_first(record)
        } else {
            self.registry.add_last(record)
        };

        match added {
            Ok(()) => writeln!(self.output, "Student added.")?,
            Err(e @ Error::DuplicateId(_)) => writeln!(self.output, "Not added: {}.", e)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn delete_student(&mut self) -> Result<()> {
        let id = self.prompt("ID to delete: ", parse_id)?;
        if self.registry.remove(id) {
            writeln!(self.output, "Student {} deleted.", id)?;
        } else {
            writeln!(self.output, "No student with ID {}.", id)?;
        }
        Ok(())
    }

    /// Ask for a value until `parse` accepts the answer.
    fn prompt<T>(&mut self, label: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        loop {
            write!(self.output, "{}", label)?;
            self.output.flush()?;

            let line = self.read_line()?.ok_or(Error::EndOfInput)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "Invalid input: {}. Try again.", e)?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== Student Roster =====")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{:>2}. {}", choice.key(), choice.label())?;
        }
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn print_records<W: Write>(output: &mut W, records: &[&Record]) -> Result<()> {
    if records.is_empty() {
        writeln!(output, "No students found.")?;
        return Ok(());
    }
    for record in records {
        writeln!(output, "{}", record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (StudentRegistry, String) {
        let mut out = Vec::new();
        let mut shell = Shell::new(Cursor::new(script.to_string()), &mut out);
        shell.run().unwrap();
        let registry = shell.into_registry();
        (registry, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_menu_choice_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_input(&choice.key().to_string()), Some(choice));
        }
        assert_eq!(MenuChoice::from_input(" 10\n"), Some(MenuChoice::FilterIndex));
        assert_eq!(MenuChoice::from_input("12"), None);
        assert_eq!(MenuChoice::from_input("x"), None);
    }

    #[test]
    fn test_exit_immediately() {
        let (registry, out) = run_script("0\n");
        assert!(registry.is_empty());
        assert!(out.contains("Student Roster"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (registry, out) = run_script("");
        assert!(registry.is_empty());
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_end_of_input_mid_prompt() {
        let (registry, _) = run_script("1\n5\nAda\n");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let script = "1\nabc\n5\n\nAda\nNorth\n101\n95\n85\n0\n";
        let (registry, out) = run_script(script);

        assert_eq!(registry.len(), 1);
        let record = registry.iter().next().unwrap();
        assert_eq!(record.name(), "Ada");
        assert_eq!(record.score1(), 95.0);
        assert!(out.contains("'abc' is not a valid number"));
        assert!(out.contains("name must not be empty"));
        assert!(out.contains("outside the range"));
    }

    #[test]
    fn test_unknown_option() {
        let (_, out) = run_script("42\n0\n");
        assert!(out.contains("Unknown option '42'."));
    }

    #[test]
    fn test_duplicate_id_reported() {
        let script = "2\n1\nA\nR\n50\n50\n2\n1\nB\nR\n60\n60\n0\n";
        let (registry, out) = run_script(script);
        assert_eq!(registry.len(), 1);
        assert!(out.contains("Not added: a student with id 1 already exists."));
    }

    #[test]
    fn test_delete_and_filter() {
        let script = concat!(
            "2\n1\nAna\nN\n90\n90\n",
            "2\n2\nBen\nS\n60\n60\n",
            "2\n3\nCy\nE\n90\n90\n",
            "3\n2\n",
            "3\n2\n",
            "10\n85\n",
            "0\n"
        );
        let (registry, out) = run_script(script);

        assert_eq!(registry.len(), 2);
        assert!(out.contains("Student 2 deleted."));
        assert!(out.contains("No student with ID 2."));
        assert!(out.contains("Name: Ana"));
        assert!(out.contains("Name: Cy"));
    }

    #[test]
    fn test_search_without_matches() {
        let (_, out) = run_script("7\n42\n0\n");
        assert!(out.contains("No students found."));
    }
}
