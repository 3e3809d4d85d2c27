//! Common test utilities for CLI integration tests.
//!
//! Provides:
//! - A temporary study set directory
//! - A scripted user replaying canned answers
//! - A scripted user that answers from a known word set

#![allow(dead_code)]

pub mod fixtures;

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use drill_core::{Field, Interaction, RawRow};
use tempfile::TempDir;

/// Temporary directory populated with study set files.
pub struct SetsDir {
    dir: TempDir,
}

impl SetsDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a set file and return its path.
    pub fn add(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write set file");
        path
    }
}

/// Simulated user who knows every answer of a word set.
///
/// Picks `selection` at the set menu and re-types whatever answer the
/// session reveals after a failure.
pub struct KnowingUser {
    answers: HashMap<String, Vec<String>>,
    selection: String,
    current: Option<String>,
    last_expected: Option<String>,
    /// Leave this many prompts blank before answering properly.
    pub blanks: usize,
    pub prompts: Vec<String>,
    pub messages: Vec<String>,
}

impl KnowingUser {
    pub fn new(rows: &[RawRow], selection: usize) -> Self {
        let answers = rows
            .iter()
            .map(|row| {
                let row: Vec<String> = row.fields.iter().map(|f| f.trim().to_string()).collect();
                (row[0].clone(), row)
            })
            .collect();
        Self {
            answers,
            selection: selection.to_string(),
            current: None,
            last_expected: None,
            blanks: 0,
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    fn answer(&mut self, label: &str) -> String {
        if label == "Select study set:" {
            return self.selection.clone();
        }
        if label == "Repeat:" {
            return self.last_expected.clone().expect("retype after reveal");
        }
        if let Some(key) = label.strip_suffix(':').filter(|k| self.answers.contains_key(*k)) {
            self.current = Some(key.to_string());
            return self.answers[key][Field::BaseTarget.index()].clone();
        }
        let field = Field::INFLECTED
            .into_iter()
            .find(|f| f.label() == label)
            .expect("known inflection label");
        let key = self.current.as_ref().expect("base form asked first");
        self.answers[key][field.index()].clone()
    }
}

impl Interaction for KnowingUser {
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        self.prompts.push(label.to_string());
        if self.blanks > 0 && label.ends_with(':') && label != "Repeat:" && label != "Select study set:" {
            self.blanks -= 1;
            return Ok(String::new());
        }
        Ok(self.answer(label))
    }

    fn display(&mut self, message: &str) -> io::Result<()> {
        if let Some((_, expected)) = message.split_once("correct answer: ") {
            self.last_expected = Some(expected.to_string());
        }
        self.messages.push(message.to_string());
        Ok(())
    }
}

/// Replays canned answers in order.
#[derive(Default)]
pub struct Scripted {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub messages: Vec<String>,
}

impl Scripted {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Interaction for Scripted {
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        self.prompts.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn display(&mut self, message: &str) -> io::Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}
