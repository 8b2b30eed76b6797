//! Head-of-file preview of the forecast outputs.

use std::{
    fs::File,
    io::{self, BufRead},
    path::Path,
};

use crate::config::{WEEK_FILE, YARIN_FILE};

const PREVIEW_LINES: usize = 5;

pub fn preview(outdir: &Path) {
    preview_file(&outdir.join(YARIN_FILE));
    preview_file(&outdir.join(WEEK_FILE));
}

/// Prints the first lines of `path`. Best effort: a missing or unreadable
/// file is silently skipped.
pub fn preview_file(path: &Path) {
    let Ok(file) = File::open(path) else {
        return;
    };

    println!("==> {} <==", path.display());
    for line in io::BufReader::new(file).lines().take(PREVIEW_LINES) {
        match line {
            Ok(line) => println!("{}", line),
            Err(_) => break,
        }
    }
}

// -- Tests -------------------------------------------------------------------
