//! PHF compile-time rhyme tables
extern crate phf_codegen;

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("codegen.rs");
    let mut out_file = BufWriter::new(File::create(path).unwrap());

    write_spelled_rhyme_map(&mut out_file);
    write_pinyin_rhyme_set(&mut out_file);
    write_jyutping_rhyme_set(&mut out_file);
}

/// Pinyin rhymes as spelled after a consonant, mapped to their canonical
/// null-initial spelling.
#[rustfmt::skip]
fn write_spelled_rhyme_map<W: Write>(file: &mut W) {
    write!(file, "static MAP_SPELLED_RHYMES: phf::Map<&str, &str> = {}",
    phf_codegen::Map::new()
        .entry("i"   , "\"yi\"")  .entry("u"   , "\"wu\"") .entry("ü"  , "\"yu\"")
        .entry("ie"  , "\"ye\"")  .entry("o"   , "\"wo\"") .entry("üe" , "\"yue\"")
        .entry("ia"  , "\"ya\"")  .entry("uo"  , "\"wo\"") .entry("ün" , "\"yun\"")
        .entry("iu"  , "\"you\"") .entry("ua"  , "\"wa\"") .entry("üan", "\"yuan\"")
        .entry("iao" , "\"yao\"") .entry("ui"  , "\"wei\"")
        .entry("in"  , "\"yin\"") .entry("uai" , "\"wai\"")
        .entry("ian" , "\"yan\"") .entry("un"  , "\"wen\"")
        .entry("ing" , "\"ying\"").entry("uan" , "\"wan\"")
        .entry("iong", "\"yong\"").entry("uang", "\"wang\"")
        .entry("iang", "\"yang\"")

        .build()
    )
    .unwrap();
    writeln!(file, ";").unwrap();
}

/// Canonical pinyin rhyme spellings, null-initial forms included.
#[rustfmt::skip]
fn write_pinyin_rhyme_set<W: Write>(file: &mut W) {
    write!(file, "static PINYIN_RHYMES: phf::Set<&str> = {}",
    phf_codegen::Set::new()
        .entry("e")  .entry("ei") .entry("en")  .entry("eng") .entry("er")
        .entry("a")  .entry("ai") .entry("an")  .entry("ang")
        .entry("ou") .entry("ao") .entry("ong")

        .entry("yi") .entry("ye") .entry("ya")  .entry("you") .entry("yao")
        .entry("yin").entry("yan").entry("ying").entry("yong").entry("yang")

        .entry("wu") .entry("wo") .entry("wa")  .entry("wei") .entry("wai")
        .entry("wen").entry("wan").entry("weng").entry("wang")

        .entry("yu") .entry("yue").entry("yun") .entry("yuan")

        .build()
    )
    .unwrap();
    writeln!(file, ";").unwrap();
}

/// Jyutping rhyme nuclei, stop codas already stripped.
#[rustfmt::skip]
fn write_jyutping_rhyme_set<W: Write>(file: &mut W) {
    write!(file, "static JYUTPING_RHYMES: phf::Set<&str> = {}",
    phf_codegen::Set::new()
        .entry("aa").entry("aai").entry("aau").entry("aam").entry("aan").entry("aang")
        .entry("a") .entry("ai") .entry("au") .entry("am") .entry("an") .entry("ang")
        .entry("e") .entry("ei") .entry("eu") .entry("em") .entry("eng")
        .entry("i") .entry("iu") .entry("im") .entry("in") .entry("ing")
        .entry("o") .entry("oi") .entry("ou") .entry("on") .entry("ong")
        .entry("u") .entry("ui") .entry("un") .entry("ung")
        .entry("eo").entry("eoi").entry("eon")
        .entry("oe").entry("oeng")
        .entry("yu").entry("yun")

        .build()
    )
    .unwrap();
    writeln!(file, ";").unwrap();
}
