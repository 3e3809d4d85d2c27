//! Delimited-text reader for study set files.
//!
//! # Format
//! ```text
//! gehen, aller, vais, vas, va, allons, allez, vont, je suis allé
//! "sagen", dire, dis, dis, dit, disons, dites, disent, "j'ai dit"
//! ```
//!
//! Fields are comma separated. A field wrapped in double quotes may contain
//! commas and line breaks; `""` inside quotes stands for one quote.

use crate::error::{LoadError, Result};
use crate::types::RawRow;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Parse delimited content into raw rows.
///
/// Fields are returned exactly as written; trimming is the validator's job.
/// Each row remembers the 1-based line it starts on.
pub fn parse_rows(content: &str) -> Result<Vec<RawRow>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = Reader::new();
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if reader.state == State::Quoted || !matches!(c, '\n' | '\r') {
            reader.row_start.get_or_insert(reader.line);
        }

        match reader.state {
            State::Quoted => {
                if c == QUOTE {
                    if chars.peek() == Some(&QUOTE) {
                        chars.next();
                        reader.field.push(QUOTE);
                    } else {
                        reader.state = State::Unquoted;
                    }
                } else {
                    if c == '\n' {
                        reader.line += 1;
                    }
                    reader.field.push(c);
                }
            }
            State::Unquoted | State::FieldStart => match c {
                DELIMITER => reader.end_field(),
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' | '\r' => {
                    reader.end_row();
                    reader.line += 1;
                }
                QUOTE if reader.state == State::FieldStart && reader.field.is_empty() => {
                    reader.state = State::Quoted;
                    reader.quote_line = reader.line;
                }
                _ => {
                    reader.field.push(c);
                    reader.state = State::Unquoted;
                }
            },
        }
    }

    if reader.state == State::Quoted {
        return Err(LoadError::UnterminatedQuote {
            line: reader.quote_line,
        });
    }
    reader.end_row();

    Ok(reader.rows)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
}

struct Reader {
    rows: Vec<RawRow>,
    row: Vec<String>,
    row_start: Option<usize>,
    field: String,
    state: State,
    line: usize,
    quote_line: usize,
    row_has_content: bool,
}

impl Reader {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            row: Vec::new(),
            row_start: None,
            field: String::new(),
            state: State::FieldStart,
            line: 1,
            quote_line: 1,
            row_has_content: false,
        }
    }

    fn end_field(&mut self) {
        self.row.push(std::mem::take(&mut self.field));
        self.state = State::FieldStart;
        self.row_has_content = true;
    }

    fn end_row(&mut self) {
        // A line with nothing on it (not even an empty quoted field) is skipped.
        if !self.row_has_content && self.field.is_empty() && self.state == State::FieldStart {
            return;
        }
        self.end_field();
        let line = self.row_start.take().unwrap_or(self.line);
        self.rows.push(RawRow {
            line,
            fields: std::mem::take(&mut self.row),
        });
        self.row_has_content = false;
    }
}
