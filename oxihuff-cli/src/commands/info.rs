//! Info command implementation.

use oxihuff_tree::{HeaderInfo, HuffDecoder, inspect};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// One row of the code table.
#[derive(Debug, Serialize)]
struct CodeEntry {
    symbol: u16,
    label: String,
    length: usize,
    code: String,
}

/// Everything `info` reports about a compressed file.
#[derive(Debug, Serialize)]
struct InfoReport {
    file: String,
    size: u64,
    magic: String,
    leaves: usize,
    height: usize,
    header_bits: u64,
    /// `None` when the body does not decode.
    original_size: Option<u64>,
    codes: Vec<CodeEntry>,
}

impl InfoReport {
    fn new(path: &Path, data: &[u8], info: &HeaderInfo) -> Self {
        let original_size = HuffDecoder::default()
            .decode(data, io::sink())
            .ok()
            .map(|stats| stats.output_bytes);

        let codes = info
            .codes
            .iter()
            .map(|(symbol, code)| CodeEntry {
                symbol: symbol.value(),
                label: symbol.to_string(),
                length: code.len(),
                code: code.to_string(),
            })
            .collect();

        Self {
            file: path.display().to_string(),
            size: data.len() as u64,
            magic: format!("{:#010x}", info.magic),
            leaves: info.tree.leaf_count(),
            height: info.tree.height(),
            header_bits: info.header_bits,
            original_size,
            codes,
        }
    }
}

pub fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let info = inspect(&data)?;
    let report = InfoReport::new(input, &data, &info);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Huffman File Information");
    println!("========================");
    println!("File: {}", report.file);
    println!("Size: {} bytes", report.size);
    println!("Magic: {}", report.magic);
    match report.original_size {
        Some(size) => println!("Original size: {} bytes", size),
        None => println!("Original size: unknown (body does not decode)"),
    }
    println!();
    println!("Tree:");
    println!("  Leaves: {}", report.leaves);
    println!("  Height: {}", report.height);
    println!("  Header: {} bits", report.header_bits);
    println!();
    println!("{:>6} {:>6}  Code", "Symbol", "Length");
    println!("{}", "-".repeat(40));
    for entry in &report.codes {
        println!("{:>6} {:>6}  {}", entry.label, entry.length, entry.code);
    }

    Ok(())
}
