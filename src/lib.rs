#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! Derive statistical sound-correspondence tables between Mandarin (pinyin)
//! and Cantonese (jyutping) from per-character readings.
//!
//! Each reading is decomposed into its phonological parts, then characters
//! are grouped by which part on one side co-occurs with which part on the
//! other, yielding bidirectional initial/rhyme correspondence tables
//! ([`map_syllables`]) and bidirectional tone tables ([`map_tones`]).
extern crate phf;

use std::fmt;

// MAP_SPELLED_RHYMES, PINYIN_RHYMES and JYUTPING_RHYMES static tables
include!(concat!(env!("OUT_DIR"), "/codegen.rs"));

pub mod data;
mod jyutping;
mod mapping;
mod pinyin;

pub use jyutping::{cantonese_tone, decompose_jyutping, JyutpingSyllable};
pub use mapping::{
    map_syllables, map_tones, BidirectionalSyllableMapping, PartMapping, SyllableMapping,
    ToneMapping,
};
pub use pinyin::{decompose_pinyin, mandarin_tone, PinyinSyllable};

/// The two romanization systems readings come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Romanization {
    /// Mandarin pinyin, tones written as combining diacritics.
    Pinyin,
    /// Cantonese jyutping, tones written as a trailing digit.
    Jyutping,
}

impl fmt::Display for Romanization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Romanization::Pinyin => f.write_str("pinyin"),
            Romanization::Jyutping => f.write_str("jyutping"),
        }
    }
}

/// Errors raised while decomposing readings or building correspondences.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The reading matches no recognized initial/rhyme combination.
    #[error("invalid {system} syllable {syllable:?}")]
    InvalidSyllable {
        /// Which decomposer rejected the syllable.
        system: Romanization,
        /// The reading as supplied by the dataset.
        syllable: String,
    },
    /// A reading the dataset model requires is absent or unusable.
    #[error("character {character:?} is missing a usable {system} reading")]
    MissingReading {
        /// The character whose record is incomplete.
        character: String,
        /// The side the reading is missing on.
        system: Romanization,
    },
}

/// One character with all of its Mandarin readings and its single Cantonese
/// reading, as assembled by the [`data`] loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    /// The character itself.
    pub character: String,
    /// Raw pinyin readings, diacritics included; one per Mandarin reading.
    pub pinyin: Vec<String>,
    /// Raw jyutping reading with its trailing tone digit.
    pub jyutping: String,
}
