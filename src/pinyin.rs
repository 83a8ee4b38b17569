//! Pinyin syllable decomposition and Mandarin tone extraction.

use unicode_normalization::UnicodeNormalization;

use crate::{Error, Romanization, MAP_SPELLED_RHYMES, PINYIN_RHYMES};

/// Syllables whose nucleus is the voiced continuation of the initial
/// itself; they carry no independent vowel rhyme.
static SYLLABIC_FRICATIVES: [&str; 7] = ["zi", "ci", "si", "zhi", "chi", "shi", "ri"];

/// Initial candidates in match order. Two-letter initials come first so the
/// longest match wins.
static INITIALS: [&str; 21] = [
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "z", "c", "s", "l", "r", "j", "q", "x",
    "g", "k", "h",
];

/// Combining tone marks in tone order: macron, acute, caron, grave.
static TONE_MARKS: [char; 4] = ['\u{0304}', '\u{0301}', '\u{030C}', '\u{0300}'];

/// A pinyin syllable split into its phonological parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinyinSyllable {
    /// Initial consonant, labialized or glide pseudo-initials included.
    /// Absent for bare-vowel syllables.
    pub initial: Option<String>,
    /// Canonical rhyme spelling, or `"_"` for syllabic fricatives.
    pub rhyme: String,
    /// The whole syllable with tone marks stripped.
    pub full: String,
}

/// Decompose one pinyin syllable into initial and rhyme.
///
/// Tone diacritics are stripped first; the rhyme is reported in its
/// canonical null-initial spelling (`uo` becomes `wo`, `ün` becomes `yun`).
///
/// # Examples
/// ```
/// # use pinyin_jyutping::*;
/// let syllable = decompose_pinyin("shī").unwrap();
/// assert_eq!(syllable.initial.as_deref(), Some("sh"));
/// assert_eq!(syllable.rhyme, "_");
/// assert_eq!(syllable.full, "shi");
///
/// let syllable = decompose_pinyin("guó").unwrap();
/// assert_eq!(syllable.initial.as_deref(), Some("gw"));
/// assert_eq!(syllable.rhyme, "wo");
///
/// assert!(decompose_pinyin("blah").is_err());
/// ```
pub fn decompose_pinyin(syllable: &str) -> Result<PinyinSyllable, Error> {
    let normalized = normalize(syllable);

    if SYLLABIC_FRICATIVES.contains(&normalized.as_str()) {
        return Ok(PinyinSyllable {
            initial: Some(normalized[..normalized.len() - 1].to_owned()),
            rhyme: "_".to_owned(),
            full: normalized,
        });
    }

    let initial = INITIALS
        .iter()
        .find(|i| normalized.starts_with(*i))
        .copied();
    let remaining = &normalized[initial.map_or(0, str::len)..];

    let rhyme = resolve_rhyme(initial, remaining).ok_or_else(|| Error::InvalidSyllable {
        system: Romanization::Pinyin,
        syllable: syllable.to_owned(),
    })?;

    Ok(PinyinSyllable {
        initial: adjust_initial(initial, &rhyme),
        rhyme,
        full: normalized,
    })
}

/// Strip tone marks and anything that is not a letter, keeping the diaeresis
/// so `ü` survives as a base letter distinct from `u`.
fn normalize(syllable: &str) -> String {
    syllable
        .to_lowercase()
        .nfd()
        .filter(|c| c.is_ascii_lowercase() || *c == '\u{0308}')
        .nfc()
        .collect()
}

fn resolve_rhyme(initial: Option<&str>, remaining: &str) -> Option<String> {
    // After j/q/x the letter u spells the rhyme ü
    if remaining.starts_with('u') && matches!(initial, Some("j" | "q" | "x")) {
        let spelled = remaining.replacen('u', "ü", 1);
        return MAP_SPELLED_RHYMES.get(spelled.as_str()).map(|r| (*r).to_owned());
    }

    if let Some(canonical) = MAP_SPELLED_RHYMES.get(remaining) {
        return Some((*canonical).to_owned());
    }
    if PINYIN_RHYMES.contains(remaining) {
        return Some(remaining.to_owned());
    }
    None
}

/// Labialize velars before rounded rhymes, and give null-initial glide
/// syllables a pseudo-initial so they still group by onset.
fn adjust_initial(initial: Option<&str>, rhyme: &str) -> Option<String> {
    match initial {
        Some(velar @ ("k" | "g")) if rhyme.starts_with('w') || rhyme.starts_with('u') => {
            Some(format!("{velar}w"))
        }
        None if rhyme.starts_with('w') || rhyme.starts_with('y') => {
            let len = if rhyme.starts_with("yu") { 2 } else { 1 };
            Some(rhyme[..len].to_owned())
        }
        _ => initial.map(str::to_owned),
    }
}

/// Extract the Mandarin tone class from a raw pinyin reading.
///
/// The four combining tone marks are scanned in tone order and the 1-based
/// index of the first one present is reported; `"0"` means no mark (neutral
/// tone).
///
/// # Examples
/// ```
/// # use pinyin_jyutping::*;
/// assert_eq!(mandarin_tone("hǎo"), "3");
/// assert_eq!(mandarin_tone("ma"), "0");
/// ```
pub fn mandarin_tone(pinyin: &str) -> String {
    let normalized: String = pinyin.nfd().collect();
    let tone = TONE_MARKS
        .iter()
        .position(|mark| normalized.contains(*mark))
        .map_or(0, |i| i + 1);
    tone.to_string()
}
