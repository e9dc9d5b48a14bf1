//! Decompress command implementation.

use super::discard_output;
use crate::utils::{decompressed_path, format_size, is_same_file};
use oxihuff_tree::{DebugLevel, HuffConfig, HuffDecoder};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: Option<&Path>,
    level: DebugLevel,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.map_or_else(|| decompressed_path(input), Path::to_path_buf);
    if is_same_file(input, &output) {
        return Err("output file would overwrite the input".into());
    }

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(&output)?);

    // A failed decode writes nothing, but the file itself already exists.
    let decoder = HuffDecoder::new(HuffConfig::new(level));
    let stats = match decoder.decode(reader, writer) {
        Ok(stats) => stats,
        Err(e) => {
            discard_output(&output);
            return Err(e.into());
        }
    };

    println!("{} -> {}", input.display(), output.display());
    println!(
        "  {} -> {}",
        format_size(stats.input_bytes),
        format_size(stats.output_bytes)
    );
    if level >= DebugLevel::Low {
        println!("  Symbols: {}", stats.distinct_symbols);
        println!("  Header: {} bits", stats.header_bits);
        println!("  Body: {} bits", stats.body_bits);
    }
    Ok(())
}
