//! Jyutping syllable decomposition and Cantonese tone extraction.

use crate::{Error, Romanization, JYUTPING_RHYMES};

/// Syllables that are a bare nasal consonant; the nasal serves as both
/// initial and rhyme.
static SYLLABIC_NASALS: [&str; 2] = ["m", "ng"];

/// Initial candidates in match order. Two-letter initials come first so the
/// longest match wins.
static INITIALS: [&str; 19] = [
    "ng", "gw", "kw", "b", "p", "m", "f", "d", "t", "n", "s", "l", "z", "c", "j", "g", "k", "w",
    "h",
];

/// A jyutping syllable split into its phonological parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JyutpingSyllable {
    /// Initial consonant, absent for bare-vowel syllables.
    pub initial: Option<String>,
    /// Rhyme nucleus; `j`/`w` onsets are folded in, stop codas are not.
    pub rhyme: String,
    /// Final stop consonant, one of `p`, `t`, `k` when present.
    pub final_plosive: Option<String>,
    /// The whole syllable with the tone digit stripped.
    pub full: String,
}

/// Decompose one jyutping syllable into initial, rhyme and stop coda.
///
/// # Examples
/// ```
/// # use pinyin_jyutping::*;
/// let syllable = decompose_jyutping("sik6").unwrap();
/// assert_eq!(syllable.initial.as_deref(), Some("s"));
/// assert_eq!(syllable.rhyme, "i");
/// assert_eq!(syllable.final_plosive.as_deref(), Some("k"));
/// assert_eq!(syllable.full, "sik");
///
/// assert!(decompose_jyutping("qou2").is_err());
/// ```
pub fn decompose_jyutping(syllable: &str) -> Result<JyutpingSyllable, Error> {
    let letters: String = syllable.chars().filter(|c| c.is_alphabetic()).collect();

    if SYLLABIC_NASALS.contains(&letters.as_str()) {
        return Ok(JyutpingSyllable {
            initial: Some(letters.clone()),
            rhyme: letters.clone(),
            final_plosive: None,
            full: letters,
        });
    }

    let initial = INITIALS.iter().find(|i| letters.starts_with(*i)).copied();
    let remaining = &letters[initial.map_or(0, str::len)..];

    let (nucleus, final_plosive) = match remaining.strip_suffix(['p', 't', 'k']) {
        Some(stripped) => (stripped, Some(&remaining[stripped.len()..])),
        None => (remaining, None),
    };

    if !JYUTPING_RHYMES.contains(nucleus) {
        return Err(Error::InvalidSyllable {
            system: Romanization::Jyutping,
            syllable: syllable.to_owned(),
        });
    }

    // Glide onsets are folded into the rhyme for grouping
    let rhyme = match initial {
        Some(glide @ ("j" | "w")) => format!("{glide}{nucleus}"),
        _ => nucleus.to_owned(),
    };

    Ok(JyutpingSyllable {
        initial: initial.map(str::to_owned),
        rhyme,
        final_plosive: final_plosive.map(str::to_owned),
        full: letters,
    })
}

/// Extract the Cantonese tone from a raw jyutping reading: the last embedded
/// digit, or `None` when the reading carries no tone digit.
///
/// # Examples
/// ```
/// # use pinyin_jyutping::*;
/// assert_eq!(cantonese_tone("jyut6").as_deref(), Some("6"));
/// assert_eq!(cantonese_tone("m"), None);
/// ```
pub fn cantonese_tone(jyutping: &str) -> Option<String> {
    jyutping
        .chars()
        .rev()
        .find(char::is_ascii_digit)
        .map(|digit| digit.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syl(
        initial: Option<&str>,
        rhyme: &str,
        final_plosive: Option<&str>,
        full: &str,
    ) -> JyutpingSyllable {
        JyutpingSyllable {
            initial: initial.map(str::to_owned),
            rhyme: rhyme.to_owned(),
            final_plosive: final_plosive.map(str::to_owned),
            full: full.to_owned(),
        }
    }

    #[test]
    fn open_syllables() {
        assert_eq!(decompose_jyutping("zi1"), Ok(syl(Some("z"), "i", None, "zi")));
        assert_eq!(decompose_jyutping("maa5"), Ok(syl(Some("m"), "aa", None, "maa")));
        assert_eq!(decompose_jyutping("hou2"), Ok(syl(Some("h"), "ou", None, "hou")));
        assert_eq!(decompose_jyutping("oi3"), Ok(syl(None, "oi", None, "oi")));
    }

    #[test]
    fn stop_codas_are_split_off() {
        assert_eq!(decompose_jyutping("sik6"), Ok(syl(Some("s"), "i", Some("k"), "sik")));
        assert_eq!(decompose_jyutping("baat3"), Ok(syl(Some("b"), "aa", Some("t"), "baat")));
        assert_eq!(decompose_jyutping("sap1"), Ok(syl(Some("s"), "a", Some("p"), "sap")));
        assert_eq!(decompose_jyutping("gwok3"), Ok(syl(Some("gw"), "o", Some("k"), "gwok")));
    }

    #[test]
    fn two_letter_initials_win() {
        assert_eq!(decompose_jyutping("ngo5"), Ok(syl(Some("ng"), "o", None, "ngo")));
        assert_eq!(decompose_jyutping("gwaan1"), Ok(syl(Some("gw"), "aan", None, "gwaan")));
        assert_eq!(decompose_jyutping("kwan4"), Ok(syl(Some("kw"), "an", None, "kwan")));
    }

    #[test]
    fn syllabic_nasals() {
        assert_eq!(decompose_jyutping("m4"), Ok(syl(Some("m"), "m", None, "m")));
        assert_eq!(decompose_jyutping("ng5"), Ok(syl(Some("ng"), "ng", None, "ng")));
    }

    #[test]
    fn glide_onsets_fold_into_the_rhyme() {
        assert_eq!(decompose_jyutping("jyut6"), Ok(syl(Some("j"), "jyu", Some("t"), "jyut")));
        assert_eq!(decompose_jyutping("jan4"), Ok(syl(Some("j"), "jan", None, "jan")));
        assert_eq!(decompose_jyutping("waa1"), Ok(syl(Some("w"), "waa", None, "waa")));
        assert_eq!(decompose_jyutping("wui2"), Ok(syl(Some("w"), "wui", None, "wui")));
    }

    #[test]
    fn invalid_syllables() {
        for bad in ["", "q1", "xaa3", "st6", "zh1"] {
            assert_eq!(
                decompose_jyutping(bad),
                Err(Error::InvalidSyllable {
                    system: Romanization::Jyutping,
                    syllable: bad.to_owned(),
                })
            );
        }
    }

    #[test]
    fn every_rhyme_decomposes_after_every_initial_and_stop() {
        let initials = INITIALS.iter().copied().map(Some).chain([None]);
        for initial in initials {
            for nucleus in JYUTPING_RHYMES.iter() {
                for stop in [None, Some("p"), Some("t"), Some("k")] {
                    let syllable = format!(
                        "{}{nucleus}{}3",
                        initial.unwrap_or(""),
                        stop.unwrap_or("")
                    );
                    let decomposed = decompose_jyutping(&syllable).unwrap();
                    assert_eq!(decomposed.initial.as_deref(), initial);
                    assert_eq!(decomposed.final_plosive.as_deref(), stop);
                    match initial {
                        Some(glide @ ("j" | "w")) => {
                            assert_eq!(decomposed.rhyme, format!("{glide}{nucleus}"))
                        }
                        _ => assert_eq!(decomposed.rhyme.as_str(), *nucleus),
                    }
                }
            }
        }
    }

    #[test]
    fn tone_digits() {
        assert_eq!(cantonese_tone("jyut6").as_deref(), Some("6"));
        assert_eq!(cantonese_tone("zi1").as_deref(), Some("1"));
        assert_eq!(cantonese_tone("m"), None);
        assert_eq!(cantonese_tone(""), None);
    }
}
