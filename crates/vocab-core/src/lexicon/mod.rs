//! Bidirectional word lexicon with JSON persistence.
//!
//! Two normalized tables (forward and reverse) are kept in sync by the
//! insertion path: adding `key → values` in one direction also records
//! `value → key` in the opposite table, so a word registered once is
//! reachable from either side.


use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::unicode::normalize_key;

/// Translation direction. `Forward` is source → target language,
/// `Reverse` the mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read lexicon store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("lexicon store {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write lexicon store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One persisted record. A forward entry fills `source` with its single
/// normalized key and `target` with the full value list; a reverse
/// entry does the opposite. Each key is written once per direction, so
/// a pair registered in both tables appears as two records.
#[derive(Serialize, Deserialize)]
struct StoreRecord {
    #[serde(default)]
    source: Vec<String>,
    #[serde(default)]
    target: Vec<String>,
}

#[derive(Debug)]
pub struct Lexicon {
    forward: HashMap<String, Vec<String>>,
    reverse: HashMap<String, Vec<String>>,
    store_path: PathBuf,
}

/// Merge `values` into the list stored under the normalized form of
/// `key`. Caller order is preserved; a value already present under a
/// case-insensitive comparison is skipped.
fn merge(table: &mut HashMap<String, Vec<String>>, key: &str, values: &[String]) {
    let list = table.entry(normalize_key(key)).or_default();
    for value in values {
        if !list
            .iter()
            .any(|v| v.to_lowercase() == value.to_lowercase())
        {
            list.push(value.clone());
        }
    }
}

impl Lexicon {
    /// Empty lexicon bound to `store_path`. Nothing is written until
    /// [`Lexicon::save`].
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
            store_path: store_path.into(),
        }
    }

    /// Open the lexicon at `path`: load the store if it exists, seed
    /// the built-in base vocabulary (and persist it) if it doesn't.
    ///
    /// A store that exists but cannot be read or parsed is an error;
    /// translation must not start from a partially loaded lexicon.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let mut lexicon = Self::new(path);
        match fs::read_to_string(path) {
            Ok(json) => {
                lexicon.load(&json)?;
                debug!(
                    forward = lexicon.forward.len(),
                    reverse = lexicon.reverse.len(),
                    "lexicon store loaded"
                );
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                lexicon.seed();
                lexicon.save()?;
                info!(path = %path.display(), "seeded new lexicon store");
            }
            Err(e) => {
                return Err(LexiconError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
        Ok(lexicon)
    }

    /// Merge `values` under `key` in the given direction, then mirror
    /// each value back to `key` in the opposite table. Does not
    /// persist; callers follow a successful mutation with
    /// [`Lexicon::save`]. Empty input is the caller's responsibility
    /// to reject.
    pub fn add(&mut self, direction: Direction, key: &str, values: &[String]) {
        merge(self.table_mut(direction), key, values);
        let mirror = [key.to_string()];
        for value in values {
            merge(self.table_mut(direction.opposite()), value, &mirror);
        }
    }

    /// Look up the canonical (first-stored) translation for `word`.
    /// Returns `None` on a miss. Later alternates are retained in the
    /// store but not surfaced here.
    pub fn lookup(&self, word: &str, direction: Direction) -> Option<&str> {
        self.table(direction)
            .get(&normalize_key(word))
            .and_then(|list| list.first())
            .map(String::as_str)
    }

    /// Number of keys registered in the given direction.
    pub fn len(&self, direction: Direction) -> usize {
        self.table(direction).len()
    }

    pub fn is_empty(&self, direction: Direction) -> bool {
        self.table(direction).is_empty()
    }

    /// All entries for one direction as (key, values) pairs, sorted by
    /// key.
    pub fn entries(&self, direction: Direction) -> Vec<(String, Vec<String>)> {
        let mut result: Vec<(String, Vec<String>)> = self
            .table(direction)
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        result.sort_by(|a, b| a.0.cmp(&b.0));
        result
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Rewrite the whole store: one record per forward key, then one
    /// per reverse key, as pretty-printed JSON. Uses write-tmp-then-
    /// rename, so a failed write leaves the previous store intact and
    /// the in-memory tables stay valid either way.
    pub fn save(&self) -> Result<(), LexiconError> {
        let mut records: Vec<StoreRecord> =
            Vec::with_capacity(self.forward.len() + self.reverse.len());
        for (key, values) in &self.forward {
            records.push(StoreRecord {
                source: vec![key.clone()],
                target: values.clone(),
            });
        }
        for (key, values) in &self.reverse {
            records.push(StoreRecord {
                source: values.clone(),
                target: vec![key.clone()],
            });
        }

        serde_json::to_string_pretty(&records)
            .map_err(io::Error::other)
            .and_then(|json| self.write_atomic(&json))
            .map_err(|e| LexiconError::Write {
                path: self.store_path.clone(),
                source: e,
            })?;
        debug!(records = records.len(), "lexicon store written");
        Ok(())
    }

    /// Atomic write: write to .tmp then rename.
    fn write_atomic(&self, json: &str) -> io::Result<()> {
        if let Some(parent) = self.store_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.store_path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.store_path)?;
        Ok(())
    }

    /// Rebuild both tables from a persisted record sequence. Every
    /// record re-runs the merge path in both directions, so the
    /// mirroring between the tables is restored no matter which
    /// direction each record was written from.
    fn load(&mut self, json: &str) -> Result<(), LexiconError> {
        let records: Vec<StoreRecord> =
            serde_json::from_str(json).map_err(|e| LexiconError::Corrupt {
                path: self.store_path.clone(),
                source: e,
            })?;
        for rec in &records {
            for word in &rec.source {
                merge(&mut self.forward, word, &rec.target);
            }
            for word in &rec.target {
                merge(&mut self.reverse, word, &rec.source);
            }
        }
        Ok(())
    }

    /// Base vocabulary written on first run, when no store exists yet.
    fn seed(&mut self) {
        const SEED_PAIRS: &[(&str, &str)] = &[
            ("tiempo", "time"),
            ("persona", "person"),
            ("año", "year"),
            ("camino", "way"),
            ("forma", "way"),
            ("día", "day"),
            ("cosa", "thing"),
            ("hombre", "man"),
            ("mundo", "world"),
            ("vida", "life"),
            ("mano", "hand"),
            ("parte", "part"),
            ("niño", "child"),
            ("niña", "child"),
            ("ojo", "eye"),
            ("mujer", "woman"),
            ("lugar", "place"),
            ("trabajo", "work"),
            ("semana", "week"),
            ("caso", "case"),
            ("punto", "point"),
            ("tema", "point"),
            ("gobierno", "government"),
            ("empresa", "company"),
            ("compañía", "company"),
        ];
        for (source, target) in SEED_PAIRS {
            self.add(Direction::Forward, source, &[(*target).to_string()]);
        }
    }

    fn table(&self, direction: Direction) -> &HashMap<String, Vec<String>> {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        }
    }

    fn table_mut(&mut self, direction: Direction) -> &mut HashMap<String, Vec<String>> {
        match direction {
            Direction::Forward => &mut self.forward,
            Direction::Reverse => &mut self.reverse,
        }
    }
}
