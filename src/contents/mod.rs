//! Parsing of Debian `Contents` indices.
//!
//! A contents index is a line-oriented text file mapping each installed file
//! path to the comma-separated list of packages that own it:
//!
//! ```text
//! usr/bin/zipinfo    utils/unzip
//! usr/share/doc/README    misc/pkg-a,misc/pkg-b
//! ```

use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// One parsed line: a file path and the packages that own it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentsEntry {
    /// Installed file path. Not used by the counting stage.
    pub path: String,
    /// Owning package identifiers, in file order. Never empty.
    pub packages: Vec<String>,
}

/// Parses a single contents line.
///
/// The line is split on its last run of ASCII whitespace: everything before
/// it is the file path (which may itself contain spaces), everything after
/// it is the comma-separated packages field. Returns `None` for lines that
/// don't follow the format (no separator, empty path, or no packages).
pub fn parse_line(line: &str) -> Option<ContentsEntry> {
    let line = line.trim();
    let (path, packages_field) = line.rsplit_once(|c: char| c.is_ascii_whitespace())?;
    let path = path.trim_end();
    if path.is_empty() {
        return None;
    }

    let packages: Vec<String> = packages_field
        .split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();
    if packages.is_empty() {
        return None;
    }

    Some(ContentsEntry {
        path: path.to_string(),
        packages,
    })
}

/// Lazy reader over the entries of a contents index.
///
/// Malformed lines are skipped rather than aborting the run; the number of
/// skipped lines is available from [`ContentsReader::skipped_lines`]. I/O
/// errors (including a corrupt gzip stream) are surfaced to the caller.
pub struct ContentsReader<R: BufRead> {
    lines: io::Lines<R>,
    skipped: u64,
}

impl ContentsReader<BufReader<GzDecoder<File>>> {
    /// Reads entries from a gzip-compressed index file.
    pub fn from_gzip(file: File) -> Self {
        Self::new(BufReader::new(GzDecoder::new(file)))
    }
}

impl<R: BufRead> ContentsReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            skipped: 0,
        }
    }

    /// Number of malformed lines skipped so far.
    pub fn skipped_lines(&self) -> u64 {
        self.skipped
    }
}

impl<R: BufRead> Iterator for ContentsReader<R> {
    type Item = io::Result<ContentsEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Err(e) => return Some(Err(e)),
                Ok(line) => match parse_line(&line) {
                    Some(entry) => return Some(Ok(entry)),
                    None => {
                        // Blank lines are tolerated silently; anything else
                        // that fails to parse counts as malformed.
                        if !line.trim().is_empty() {
                            debug!("Skipping malformed contents line: {:?}", line);
                            self.skipped += 1;
                        }
                    }
                },
            }
        }
    }
}
