//! Dataset assembly: join the simplified-character pinyin list, the
//! simplified-to-traditional table and the jyutping dictionary into
//! [`CharacterRecord`]s.
//!
//! The expected directory layout:
//! - `simplified.txt`: wiki-markup lines carrying a simplified character
//!   and its comma-separated pinyin readings
//! - `STCharacters.txt`: tab-separated simplified to space-separated
//!   traditional variants
//! - `chars_to_jyutping.json`: traditional character to jyutping reading

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use regex::Regex;

use crate::CharacterRecord;

/// Load and join the three dataset files under `dir`.
///
/// Simplified entries fan out to every traditional variant listed for them,
/// falling back to the simplified form itself when unmapped. Characters
/// without a jyutping reading are reported and dropped here so the core
/// never sees an incomplete record.
pub fn load_characters(dir: &Path) -> Result<Vec<CharacterRecord>> {
    let entry_pattern =
        Regex::new(r"^.*\[\[(.*)\]\]</span>\|\|(.*)$").context("compiling entry pattern")?;

    let simplified = fs::read_to_string(dir.join("simplified.txt"))
        .with_context(|| format!("reading {}", dir.join("simplified.txt").display()))?;
    let pinyin_entries: Vec<(String, Vec<String>)> = simplified
        .lines()
        .filter_map(|line| {
            let captures = entry_pattern.captures(line)?;
            let readings = captures[2].split(", ").map(str::to_owned).collect();
            Some((captures[1].to_owned(), readings))
        })
        .collect();

    let st_table = fs::read_to_string(dir.join("STCharacters.txt"))
        .with_context(|| format!("reading {}", dir.join("STCharacters.txt").display()))?;
    let traditional_variants: HashMap<&str, Vec<&str>> = st_table
        .lines()
        .filter_map(|line| {
            let (simplified, traditional) = line.split_once('\t')?;
            Some((simplified, traditional.split(' ').collect()))
        })
        .collect();

    let jyutping_path = dir.join("chars_to_jyutping.json");
    let jyutping_raw = fs::read_to_string(&jyutping_path)
        .with_context(|| format!("reading {}", jyutping_path.display()))?;
    let jyutping: HashMap<String, String> = serde_json::from_str(&jyutping_raw)
        .with_context(|| format!("parsing {}", jyutping_path.display()))?;

    let mut records = Vec::new();
    for (simplified_char, readings) in pinyin_entries {
        let variants = traditional_variants
            .get(simplified_char.as_str())
            .cloned()
            .unwrap_or_else(|| vec![simplified_char.as_str()]);
        for variant in variants {
            match jyutping.get(variant) {
                Some(reading) => records.push(CharacterRecord {
                    character: variant.to_owned(),
                    pinyin: readings.clone(),
                    jyutping: reading.clone(),
                }),
                None => warn!("no jyutping reading for {variant}, dropping it"),
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_the_three_sources() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path();
        fs::write(
            dir.join("simplified.txt"),
            "noise\n<span>[[马]]</span>||mǎ\n<span>[[行]]</span>||xíng, háng\n",
        )
        .unwrap();
        fs::write(dir.join("STCharacters.txt"), "马\t馬\n干\t乾 幹\n").unwrap();
        fs::write(
            dir.join("chars_to_jyutping.json"),
            r#"{"馬": "maa5", "行": "hang4"}"#,
        )
        .unwrap();

        let records = load_characters(dir).unwrap();
        assert_eq!(
            records,
            vec![
                CharacterRecord {
                    character: "馬".to_owned(),
                    pinyin: vec!["mǎ".to_owned()],
                    jyutping: "maa5".to_owned(),
                },
                CharacterRecord {
                    character: "行".to_owned(),
                    pinyin: vec!["xíng".to_owned(), "háng".to_owned()],
                    jyutping: "hang4".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn missing_files_carry_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_characters(dir.path()).unwrap_err();
        assert!(err.to_string().contains("simplified.txt"));
    }
}
