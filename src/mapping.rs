//! Correspondence aggregation: group decomposed readings into bidirectional
//! initial/rhyme and tone tables.

use indexmap::IndexMap;
use serde::Serialize;

use crate::jyutping::{cantonese_tone, decompose_jyutping, JyutpingSyllable};
use crate::pinyin::{decompose_pinyin, mandarin_tone, PinyinSyllable};
use crate::{CharacterRecord, Error, Romanization};

/// Two-level correspondence table: own-side part, then other-side part, then
/// the characters evidencing that pairing in processing order.
pub type PartMapping = IndexMap<String, IndexMap<String, Vec<String>>>;

/// Initial and rhyme correspondences keyed by one side's parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllableMapping {
    /// Correspondences between initial consonants.
    pub initial_mapping: PartMapping,
    /// Correspondences between rhymes.
    pub final_mapping: PartMapping,
}

/// Syllable correspondences read from both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidirectionalSyllableMapping {
    /// Keyed by the Mandarin-side part first.
    pub mc: SyllableMapping,
    /// Keyed by the Cantonese-side part first.
    pub cm: SyllableMapping,
}

/// Tone correspondences read from both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneMapping {
    /// Mandarin tone class to Cantonese tone digits.
    pub mandarin_to_cantonese: PartMapping,
    /// Cantonese tone digit to Mandarin tone classes.
    pub cantonese_to_mandarin: PartMapping,
}

struct DecomposedCharacter {
    character: String,
    pinyin: PinyinSyllable,
    jyutping: JyutpingSyllable,
}

struct ToneCharacter {
    character: String,
    mandarin: String,
    cantonese: String,
}

/// Build the bidirectional initial/rhyme correspondence tables.
///
/// Only monophones (exactly one Mandarin reading) participate; a character
/// with several Mandarin readings cannot attribute its single Cantonese
/// reading to any one of them. Decomposition failure aborts the run rather
/// than silently skewing the tables.
///
/// # Examples
/// ```
/// # use pinyin_jyutping::*;
/// let characters = vec![CharacterRecord {
///     character: "馬".to_owned(),
///     pinyin: vec!["mǎ".to_owned()],
///     jyutping: "maa5".to_owned(),
/// }];
/// let mapping = map_syllables(&characters)?;
/// assert_eq!(mapping.mc.initial_mapping["m"]["m"], ["馬"]);
/// assert_eq!(mapping.cm.final_mapping["aa"]["a"], ["馬"]);
/// # Ok::<(), pinyin_jyutping::Error>(())
/// ```
pub fn map_syllables(
    characters: &[CharacterRecord],
) -> Result<BidirectionalSyllableMapping, Error> {
    let decomposed = monophones(characters)?
        .map(|c| {
            Ok(DecomposedCharacter {
                character: c.character.clone(),
                pinyin: decompose_pinyin(&c.pinyin[0])?,
                jyutping: decompose_jyutping(&c.jyutping)?,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(BidirectionalSyllableMapping {
        mc: SyllableMapping {
            initial_mapping: group_pairs(
                decomposed
                    .iter()
                    .map(|c| (pinyin_initial(c), jyutping_initial(c), c.character.as_str())),
            ),
            final_mapping: group_pairs(
                decomposed
                    .iter()
                    .map(|c| (c.pinyin.rhyme.as_str(), c.jyutping.rhyme.as_str(), c.character.as_str())),
            ),
        },
        cm: SyllableMapping {
            initial_mapping: group_pairs(
                decomposed
                    .iter()
                    .map(|c| (jyutping_initial(c), pinyin_initial(c), c.character.as_str())),
            ),
            final_mapping: group_pairs(
                decomposed
                    .iter()
                    .map(|c| (c.jyutping.rhyme.as_str(), c.pinyin.rhyme.as_str(), c.character.as_str())),
            ),
        },
    })
}

/// Build the bidirectional tone correspondence tables.
///
/// The same monophone rule as [`map_syllables`] applies. A jyutping reading
/// without a tone digit is a data-integrity error, not a toneless bucket.
///
/// # Examples
/// ```
/// # use pinyin_jyutping::*;
/// let characters = vec![CharacterRecord {
///     character: "馬".to_owned(),
///     pinyin: vec!["mǎ".to_owned()],
///     jyutping: "maa5".to_owned(),
/// }];
/// let tones = map_tones(&characters)?;
/// assert_eq!(tones.mandarin_to_cantonese["3"]["5"], ["馬"]);
/// assert_eq!(tones.cantonese_to_mandarin["5"]["3"], ["馬"]);
/// # Ok::<(), pinyin_jyutping::Error>(())
/// ```
pub fn map_tones(characters: &[CharacterRecord]) -> Result<ToneMapping, Error> {
    let tones = monophones(characters)?
        .map(|c| {
            let cantonese = cantonese_tone(&c.jyutping).ok_or_else(|| Error::MissingReading {
                character: c.character.clone(),
                system: Romanization::Jyutping,
            })?;
            Ok(ToneCharacter {
                character: c.character.clone(),
                mandarin: mandarin_tone(&c.pinyin[0]),
                cantonese,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(ToneMapping {
        mandarin_to_cantonese: group_pairs(
            tones
                .iter()
                .map(|t| (t.mandarin.as_str(), t.cantonese.as_str(), t.character.as_str())),
        ),
        cantonese_to_mandarin: group_pairs(
            tones
                .iter()
                .map(|t| (t.cantonese.as_str(), t.mandarin.as_str(), t.character.as_str())),
        ),
    })
}

/// The empty string stands in for a missing initial in both directions.
fn pinyin_initial(c: &DecomposedCharacter) -> &str {
    c.pinyin.initial.as_deref().unwrap_or("")
}

fn jyutping_initial(c: &DecomposedCharacter) -> &str {
    c.jyutping.initial.as_deref().unwrap_or("")
}

/// Validate readings and keep the monophones.
fn monophones(
    characters: &[CharacterRecord],
) -> Result<impl Iterator<Item = &CharacterRecord>, Error> {
    for c in characters {
        let missing = if c.jyutping.is_empty() {
            Some(Romanization::Jyutping)
        } else if c.pinyin.is_empty() {
            Some(Romanization::Pinyin)
        } else {
            None
        };
        if let Some(system) = missing {
            return Err(Error::MissingReading {
                character: c.character.clone(),
                system,
            });
        }
    }
    Ok(characters.iter().filter(|c| c.pinyin.len() == 1))
}

/// Two-level partition over `(own part, other part, character)` triples:
/// bucket by the own-side part, then within each bucket by the other-side
/// part, preserving input order at both levels.
fn group_pairs<'a, I>(triples: I) -> PartMapping
where
    I: Iterator<Item = (&'a str, &'a str, &'a str)>,
{
    let mut outer: IndexMap<&str, Vec<(&str, &str)>> = IndexMap::new();
    for (own, other, character) in triples {
        outer.entry(own).or_default().push((other, character));
    }

    outer
        .into_iter()
        .map(|(own, members)| {
            let mut inner: IndexMap<String, Vec<String>> = IndexMap::new();
            for (other, character) in members {
                inner
                    .entry(other.to_owned())
                    .or_default()
                    .push(character.to_owned());
            }
            (own.to_owned(), inner)
        })
        .collect()
}
