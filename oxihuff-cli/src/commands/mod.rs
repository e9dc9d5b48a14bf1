//! Command implementations for OxiHuff CLI.

pub mod compress;
pub mod decompress;
pub mod info;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use info::cmd_info;
pub use test::cmd_test;

use std::fs;
use std::path::Path;

/// Delete a half-written output file. Errors are ignored.
pub(crate) fn discard_output(path: &Path) {
    if path.exists() {
        let _ = fs::remove_file(path);
    }
}
