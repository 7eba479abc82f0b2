//! Reads `movie/actor/actor/...` lines into [`Record`]s.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// How raw dataset lines are split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Field separator between the movie and each actor.
    pub delimiter: u8,
    /// Strip surrounding whitespace from every field.
    pub trim: bool,
}

impl IngestConfig {
    pub fn new(delimiter: u8, trim: bool) -> Self {
        Self { delimiter, trim }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: b'/',
            trim: true,
        }
    }
}

/// One movie and its credited cast, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub movie: String,
    pub actors: Vec<String>,
}

impl Record {
    pub fn new<M, A, I>(movie: M, actors: I) -> Self
    where
        M: Into<String>,
        A: Into<String>,
        I: IntoIterator<Item = A>,
    {
        Self {
            movie: movie.into(),
            actors: actors.into_iter().map(Into::into).collect(),
        }
    }
}

pub fn parse_records<R: Read>(reader: R, config: &IngestConfig) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false) // the movie list has no column titles
        .flexible(true) // cast sizes differ per line
        .quoting(false)
        .trim(if config.trim { Trim::All } else { Trim::None })
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.byte_records() {
        let row = result?; // I/O failures stay fatal
        let line = row.position().map_or(0, |pos| pos.line());
        let decoded: std::result::Result<Vec<&str>, _> =
            row.iter().map(std::str::from_utf8).collect();
        let fields = match decoded {
            Ok(fields) => fields,
            Err(e) => {
                warn!(line, error = %e, "skipping record with invalid UTF-8");
                continue;
            }
        };

        if fields.iter().all(|field| field.is_empty()) {
            continue; // blank line
        }
        let movie = fields[0];
        if movie.is_empty() {
            warn!(line, "skipping record without a movie");
            continue;
        }

        let mut actors = Vec::with_capacity(fields.len() - 1);
        for &actor in &fields[1..] {
            if actor.is_empty() {
                warn!(line, movie, "skipping empty actor field");
            } else {
                actors.push(actor.to_string());
            }
        }
        if actors.is_empty() {
            warn!(line, movie, "skipping record without actors");
            continue;
        }
        records.push(Record {
            movie: movie.to_string(),
            actors,
        });
    }
    Ok(records)
}

pub fn parse_file(file_path: impl AsRef<Path>, config: &IngestConfig) -> Result<Vec<Record>> {
    let file = File::open(file_path.as_ref())?;
    parse_records(BufReader::new(file), config)
}
