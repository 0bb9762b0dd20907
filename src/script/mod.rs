//! Script Module
//!
//! Parser and executor for the operation-script format the driver consumes.
//!
//! ## Script Format
//!
//! ```text
//! insert <id>
//! <title>
//! <date> <duration> <x> <y> <cost>
//! <keyword> [<keyword> ...]
//! <description>
//!
//! delete <id>
//! search <id>
//! print hashtable
//! ```
//!
//! Blank lines between commands and repeated whitespace inside lines are
//! ignored; unrecognized commands are skipped.

use crate::error::{Result, StoreError};
use crate::record::Record;
use crate::store::Store;

/// One parsed script operation
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert a record under its ID
    Insert { id: i32, record: Record },

    /// Delete the record with the given ID
    Delete { id: i32 },

    /// Search for the record with the given ID
    Search { id: i32 },

    /// Dump the key index
    PrintIndex,
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse a whole script into commands.
///
/// Malformed numbers or a truncated insert block are
/// [`StoreError::Script`] errors; unknown command words are skipped.
pub fn parse_script(input: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    let mut lines = input.lines();

    while let Some(raw) = lines.next() {
        let line = normalize(raw);
        if line.is_empty() {
            continue;
        }

        let mut words = line.split(' ');
        match words.next() {
            Some("insert") => {
                let id = parse_int(words.next(), "insert id")?;
                let record = parse_insert_block(&mut lines, id)?;
                commands.push(Command::Insert { id, record });
            }
            Some("delete") => {
                let id = parse_int(words.next(), "delete id")?;
                commands.push(Command::Delete { id });
            }
            Some("search") => {
                let id = parse_int(words.next(), "search id")?;
                commands.push(Command::Search { id });
            }
            Some("print") if words.next() == Some("hashtable") => {
                commands.push(Command::PrintIndex);
            }
            _ => {
                tracing::debug!(line = %line, "skipping unrecognized command");
            }
        }
    }

    Ok(commands)
}

/// Parse the three payload lines that follow `insert <id>`:
/// title, `date duration x y cost`, keywords, description.
fn parse_insert_block<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    id: i32,
) -> Result<Record> {
    let title = next_line(lines, id, "title")?;
    let date_line = next_line(lines, id, "date line")?;

    let mut fields = date_line.split(' ');
    let date = fields
        .next()
        .ok_or_else(|| truncated(id, "date"))?
        .to_string();
    let duration = parse_int(fields.next(), "duration")?;
    let x: i16 = parse_num(fields.next(), "x coordinate")?;
    let y: i16 = parse_num(fields.next(), "y coordinate")?;
    let cost = parse_int(fields.next(), "cost")?;

    let keywords: Vec<String> = next_line(lines, id, "keywords")?
        .split(' ')
        .map(str::to_string)
        .collect();
    let description = next_line(lines, id, "description")?;

    Ok(Record {
        id,
        title,
        date,
        duration,
        x,
        y,
        cost,
        keywords,
        description,
    })
}

/// Trim and collapse internal whitespace runs to single spaces
fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn next_line<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    id: i32,
    what: &str,
) -> Result<String> {
    lines
        .next()
        .map(normalize)
        .ok_or_else(|| truncated(id, what))
}

fn truncated(id: i32, what: &str) -> StoreError {
    StoreError::Script(format!("insert {id}: missing {what}"))
}

fn parse_int(word: Option<&str>, what: &str) -> Result<i32> {
    parse_num(word, what)
}

fn parse_num<T: std::str::FromStr>(word: Option<&str>, what: &str) -> Result<T> {
    let word = word.ok_or_else(|| StoreError::Script(format!("missing {what}")))?;
    word.parse()
        .map_err(|_| StoreError::Script(format!("invalid {what}: {word}")))
}

// =============================================================================
// Execution
// =============================================================================

/// Execute parsed commands against a store, returning one human-readable
/// output block per command.
///
/// Duplicate-key and not-found conditions are reported in the output, not
/// raised; only codec failures propagate as errors.
pub fn execute(store: &mut Store, commands: &[Command]) -> Result<Vec<String>> {
    let mut output = Vec::with_capacity(commands.len());

    for command in commands {
        match command {
            Command::Insert { id, record } => {
                let bytes = record.encode()?;
                match store.insert(*id, &bytes) {
                    Ok(_) => output.push(format!(
                        "Successfully inserted record with ID {id}\n{record}\nSize: {}",
                        bytes.len()
                    )),
                    Err(StoreError::DuplicateKey(_)) => output.push(format!(
                        "Insert FAILED - There is already a record with ID {id}"
                    )),
                    Err(err) => return Err(err),
                }
            }
            Command::Delete { id } => match store.delete(*id) {
                Ok(()) => output.push(format!(
                    "Record with ID {id} successfully deleted from database"
                )),
                Err(StoreError::NotFound(_)) => output.push(format!(
                    "Delete FAILED -- There is no record with ID {id}"
                )),
                Err(err) => return Err(err),
            },
            Command::Search { id } => match store.search(*id) {
                Ok(bytes) => {
                    let record = Record::decode(&bytes)?;
                    output.push(format!("Found record with ID {id}:\n{record}"));
                }
                Err(StoreError::NotFound(_)) => output.push(format!(
                    "Search FAILED -- There is no record with ID {id}"
                )),
                Err(err) => return Err(err),
            },
            Command::PrintIndex => output.push(store.dump_index()),
        }
    }

    Ok(output)
}

/// Parse and execute a script in one call
pub fn run(store: &mut Store, input: &str) -> Result<Vec<String>> {
    let commands = parse_script(input)?;
    execute(store, &commands)
}
