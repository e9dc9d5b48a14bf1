//! Compress command implementation.

use super::discard_output;
use crate::utils::{compressed_path, format_size, is_same_file, space_savings};
use oxihuff_tree::{CodecStats, DebugLevel, HuffConfig, HuffEncoder};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub fn cmd_compress(
    input: &Path,
    output: Option<&Path>,
    level: DebugLevel,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.map_or_else(|| compressed_path(input), Path::to_path_buf);
    if is_same_file(input, &output) {
        return Err("output file would overwrite the input".into());
    }

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(&output)?);

    let encoder = HuffEncoder::new(HuffConfig::new(level));
    let stats = match encoder.encode(reader, writer) {
        Ok(stats) => stats,
        Err(e) => {
            discard_output(&output);
            return Err(e.into());
        }
    };

    println!("{} -> {}", input.display(), output.display());
    print_stats(&stats, level);
    Ok(())
}

fn print_stats(stats: &CodecStats, level: DebugLevel) {
    println!(
        "  {} -> {} ({:.1}% saved)",
        format_size(stats.input_bytes),
        format_size(stats.output_bytes),
        space_savings(stats.input_bytes, stats.output_bytes)
    );

    if level >= DebugLevel::Low {
        println!("  Symbols: {}", stats.distinct_symbols);
        println!("  Header: {} bits", stats.header_bits);
        println!("  Body: {} bits", stats.body_bits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_refuses_aliased_output() {
        let input = std::env::temp_dir().join(format!("oxihuff-{}-alias.txt", std::process::id()));
        fs::write(&input, b"keep me").unwrap();

        let aliased = input
            .parent()
            .unwrap()
            .join(".")
            .join(input.file_name().unwrap());
        assert!(cmd_compress(&input, Some(&aliased), DebugLevel::Off).is_err());
        assert_eq!(fs::read(&input).unwrap(), b"keep me");

        fs::remove_file(&input).unwrap();
    }
}
