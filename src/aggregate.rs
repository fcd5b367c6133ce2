use crate::{matcher::match_line, Result, SummarizeError};
use log::{debug, info};
use std::{
    collections::{hash_map, HashMap},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Running sums per key. Entries are only ever added to, never removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Aggregate(HashMap<String, i64>);

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the sum for `key`, creating the entry if needed.
    /// Returns the new sum, or `None` if it would overflow (the entry is left untouched).
    pub fn add(&mut self, key: &str, value: i64) -> Option<i64> {
        match self.0.get_mut(key) {
            Some(sum) => {
                *sum = sum.checked_add(value)?;
                Some(*sum)
            }
            None => {
                self.0.insert(key.to_owned(), value);
                Some(value)
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.0.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.0.iter().map(|(key, sum)| (key.as_str(), *sum))
    }
}

impl From<HashMap<String, i64>> for Aggregate {
    fn from(map: HashMap<String, i64>) -> Self {
        Self(map)
    }
}

impl IntoIterator for Aggregate {
    type Item = (String, i64);
    type IntoIter = hash_map::IntoIter<String, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Fold every data line of `reader` into `aggregate`.
/// `source` is only used to give errors their context.
pub fn sum_lines<R: BufRead>(reader: R, source: &Path, aggregate: &mut Aggregate) -> Result<()> {
    let mut matched = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source_error| SummarizeError::Read {
            path: source.to_owned(),
            source: source_error,
        })?;
        // `lines` keeps the `\r` of a final CRLF line with no `\n` after it
        let text = line.strip_suffix('\r').unwrap_or(&line);
        let data_line = match match_line(text) {
            Ok(Some(data_line)) => data_line,
            Ok(None) => continue,
            Err(parse_error) => {
                return Err(SummarizeError::Parse {
                    path: source.to_owned(),
                    line_number: index + 1,
                    line: text.to_owned(),
                    source: parse_error,
                })
            }
        };
        if aggregate.add(data_line.key, data_line.value).is_none() {
            return Err(SummarizeError::Overflow {
                path: source.to_owned(),
                line_number: index + 1,
                key: data_line.key.to_owned(),
            });
        }
        matched += 1;
    }
    debug!("{}: {} data lines", source.display(), matched);
    Ok(())
}

/// Read the given files in order and return the summed values per key.
/// Stops at the first file that can't be opened or read, or the first bad number.
pub fn parse_and_sum_files<P: AsRef<Path>>(paths: &[P]) -> Result<Aggregate> {
    let mut aggregate = Aggregate::new();
    for path in paths {
        let path = path.as_ref();
        debug!("Reading {}", path.display());
        let file = File::open(path).map_err(|source| SummarizeError::Open {
            path: path.to_owned(),
            source,
        })?;
        // The file is closed when the reader drops, on the error path too
        sum_lines(BufReader::new(file), path, &mut aggregate)?;
    }
    info!("Summed {} files into {} keys", paths.len(), aggregate.len());
    Ok(aggregate)
}
