//! Utility functions for the CLI.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension appended to compressed files.
pub const COMPRESSED_EXT: &str = "hf";

/// Extension appended when the decompressed name cannot be derived.
pub const FALLBACK_EXT: &str = "out";

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Default output of `compress`: `<input>.hf`.
pub fn compressed_path(input: &Path) -> PathBuf {
    append_extension(input, COMPRESSED_EXT)
}

/// Default output of `decompress`: strip `.hf`, otherwise append `.out`.
pub fn decompressed_path(input: &Path) -> PathBuf {
    let has_ext = input.extension().is_some_and(|ext| ext == COMPRESSED_EXT);
    let has_stem = input.file_stem().is_some_and(|stem| !stem.is_empty());

    if has_ext && has_stem {
        input.with_extension("")
    } else {
        append_extension(input, FALLBACK_EXT)
    }
}

/// True if both paths name the same existing file, or are spelled the same.
///
/// Paths are compared after `fs::canonicalize`, so `a` and `./a` match.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Format a byte count for humans.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Space saved by compression, as a signed percentage.
pub fn space_savings(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compressed_path() {
        assert_eq!(compressed_path(Path::new("a.txt")), PathBuf::from("a.txt.hf"));
        assert_eq!(compressed_path(Path::new("dir/data")), PathBuf::from("dir/data.hf"));
    }

    #[test]
    fn test_decompressed_path() {
        assert_eq!(decompressed_path(Path::new("a.txt.hf")), PathBuf::from("a.txt"));
        assert_eq!(decompressed_path(Path::new("dir/data.hf")), PathBuf::from("dir/data"));
        assert_eq!(decompressed_path(Path::new("a.huff")), PathBuf::from("a.huff.out"));
        assert_eq!(decompressed_path(Path::new("plain")), PathBuf::from("plain.out"));
        assert_eq!(decompressed_path(Path::new(".hf")), PathBuf::from(".hf.out"));
    }

    #[test]
    fn test_is_same_file() {
        let path = std::env::temp_dir().join(format!("oxihuff-{}-same", std::process::id()));
        fs::write(&path, b"x").unwrap();

        let dotted = path
            .parent()
            .unwrap()
            .join(".")
            .join(path.file_name().unwrap());
        assert!(is_same_file(&path, &dotted));
        assert!(!is_same_file(&path, &compressed_path(&path)));
        assert!(is_same_file(Path::new("missing"), Path::new("missing")));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_space_savings() {
        assert_eq!(space_savings(0, 9), 0.0);
        assert_eq!(space_savings(100, 25), 75.0);
        assert!(space_savings(4, 9) < 0.0);
    }
}
