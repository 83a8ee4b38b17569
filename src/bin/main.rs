//! Build the correspondence tables from the dataset and write them out as
//! JSON under `output/`.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use pinyin_jyutping::data::load_characters;
use pinyin_jyutping::{map_syllables, map_tones};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = env::args().nth(1).map_or_else(|| PathBuf::from("data"), PathBuf::from);

    info!("loading dataset from {}", data_dir.display());
    let characters = load_characters(&data_dir)?;
    info!("loaded {} characters", characters.len());

    info!("creating tone mapping");
    let tone_mapping = map_tones(&characters)?;

    info!("creating syllable mappings");
    let syllable_mappings = map_syllables(&characters)?;

    fs::create_dir_all("output").context("creating output directory")?;

    info!("saving tone mapping");
    let tones_json = serde_json::to_string(&tone_mapping).context("serializing tone mapping")?;
    fs::write("output/tones.json", tones_json).context("writing output/tones.json")?;

    info!("saving syllable mappings");
    let syllables_json =
        serde_json::to_string(&syllable_mappings).context("serializing syllable mappings")?;
    fs::write("output/syllables.json", syllables_json).context("writing output/syllables.json")?;

    info!("done");
    Ok(())
}
