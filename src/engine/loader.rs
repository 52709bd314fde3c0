// Input Loader
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, trace};

use crate::error::{PrimeError, Result};

/// Numbers parsed from an input file, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedInput {
    pub numbers: Vec<i64>,
    /// Non-blank lines that did not parse as an integer.
    pub skipped: usize,
}

/// Reads `path` and parses one base-10 integer per line.
///
/// Blank and malformed lines are skipped. Only failing to open or map the
/// file is an error.
pub fn load_numbers(path: impl AsRef<Path>) -> Result<LoadedInput> {
    let path = path.as_ref();
    let access = |source| PrimeError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(access)?;
    let len = file.metadata().map_err(access)?.len();

    // A zero-length mapping is rejected by the OS.
    let input = if len == 0 {
        LoadedInput::default()
    } else {
        // Safety: we assume no other process truncates or rewrites this file
        // while it is mapped.
        let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(access)?;
        advise_sequential(&mmap);
        parse_lines(&mmap)
    };

    info!(
        path = %path.display(),
        numbers = input.numbers.len(),
        skipped = input.skipped,
        "loaded input"
    );
    Ok(input)
}

/// Parses a raw buffer, one integer per `\n`-separated line.
pub fn parse_lines(bytes: &[u8]) -> LoadedInput {
    let mut input = LoadedInput::default();

    for (line_no, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let Ok(line) = std::str::from_utf8(raw) else {
            debug!(line = line_no + 1, "skipping non-utf8 line");
            input.skipped += 1;
            continue;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<i64>() {
            Ok(n) => input.numbers.push(n),
            Err(err) => {
                trace!(line = line_no + 1, text = line, %err, "skipping malformed line");
                input.skipped += 1;
            }
        }
    }
    input
}

#[cfg(unix)]
fn advise_sequential(mmap: &Mmap) {
    // Advice OS: one front-to-back pass, read ahead aggressively
    let rc = unsafe {
        libc::madvise(
            mmap.as_ptr() as *mut _,
            mmap.len(),
            libc::MADV_SEQUENTIAL,
        )
    };
    if rc != 0 {
        debug!(err = %std::io::Error::last_os_error(), "madvise failed");
    }
}

#[cfg(not(unix))]
fn advise_sequential(_mmap: &Mmap) {}
