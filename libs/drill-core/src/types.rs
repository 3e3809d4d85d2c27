//! Core types for the vocabulary drill.

use crate::matching::NEAR_MISS_MISMATCHES;
use serde::{Deserialize, Serialize};

/// Number of fields every entity record carries.
pub const FIELD_COUNT: usize = 9;

/// One column of an entity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BaseSource,
    BaseTarget,
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
    PastCompound,
}

impl Field {
    /// All fields in record order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Self::BaseSource,
        Self::BaseTarget,
        Self::FirstSingular,
        Self::SecondSingular,
        Self::ThirdSingular,
        Self::FirstPlural,
        Self::SecondPlural,
        Self::ThirdPlural,
        Self::PastCompound,
    ];

    /// Fields quizzed after the base form (six persons plus compound past).
    pub const INFLECTED: [Field; 7] = [
        Self::FirstSingular,
        Self::SecondSingular,
        Self::ThirdSingular,
        Self::FirstPlural,
        Self::SecondPlural,
        Self::ThirdPlural,
        Self::PastCompound,
    ];

    /// Column position in a record.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short column key as used in set files.
    pub fn key(self) -> &'static str {
        match self {
            Self::BaseSource => "DE GF",
            Self::BaseTarget => "FR GF",
            Self::FirstSingular => "1PS",
            Self::SecondSingular => "2PS",
            Self::ThirdSingular => "3PS",
            Self::FirstPlural => "1PP",
            Self::SecondPlural => "2PP",
            Self::ThirdPlural => "3PP",
            Self::PastCompound => "1PS PC",
        }
    }

    /// Prompt label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::BaseSource => "Grundform DE",
            Self::BaseTarget => "Grundform FR",
            Self::FirstSingular => "je",
            Self::SecondSingular => "tu",
            Self::ThirdSingular => "il/elle",
            Self::FirstPlural => "nous",
            Self::SecondPlural => "vous",
            Self::ThirdPlural => "ils/elles",
            Self::PastCompound => "Passé composé:",
        }
    }
}

/// Row read from a set file, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based line the row starts on.
    pub line: usize,
    pub fields: Vec<String>,
}

/// A validated word record with all fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    fields: [String; FIELD_COUNT],
}

impl Entity {
    pub(crate) fn new(fields: [String; FIELD_COUNT]) -> Self {
        Self { fields }
    }

    /// Value of a single field.
    pub fn get(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    /// Unique key of the entity (base form in the source language).
    pub fn key(&self) -> &str {
        self.get(Field::BaseSource)
    }

    pub fn fields(&self) -> &[String; FIELD_COUNT] {
        &self.fields
    }
}

/// Ordered collection of entities, unique by base-form source.
///
/// Built once by the validator; the session works on indices into it and
/// never mutates the set itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSet {
    entities: Vec<Entity>,
}

impl WordSet {
    pub(crate) fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// Look up an entity by its key.
    pub fn find(&self, key: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.key() == key)
    }
}

/// Tunables for a study session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillSettings {
    /// Time budget granted per word in the set.
    pub seconds_per_word: u32,
    /// Highest positional mismatch count still treated as a near miss.
    pub near_miss_mismatches: usize,
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            seconds_per_word: 15,
            near_miss_mismatches: NEAR_MISS_MISMATCHES,
        }
    }
}
