use super::{DataProvider, ProviderError, Table, TableChange};
use crate::model::{StallRecord, TenantRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, SystemTime};

const STALLS_CSV: &str = "stalls.csv";
const TENANTS_CSV: &str = "tenants.csv";

const BOTH_TABLES: &[Table] = &[Table::Stalls, Table::Tenants];
const STALL_TABLE: &[Table] = &[Table::Stalls];
const TENANT_TABLE: &[Table] = &[Table::Tenants];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    /// One JSON document holding both tables.
    Json(PathBuf),
    /// A directory with `stalls.csv` and `tenants.csv`.
    CsvDir(PathBuf),
}

#[derive(Debug, Deserialize)]
struct JsonSnapshot {
    #[serde(default)]
    stalls: Vec<StallRecord>,
    #[serde(default)]
    tenants: Vec<TenantRecord>,
}

/// Reads stall and tenant tables from disk and watches them for edits.
///
/// # Example
///
/// ```no_run
/// use stall_map::provider::{DataProvider, FileProvider};
///
/// let provider = FileProvider::open("mall.json");
/// for stall in provider.list_stalls()? {
///     println!("{} {:?}", stall.stall_code, stall.occupancy_status);
/// }
/// # Ok::<(), stall_map::error::ProviderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileProvider {
    source: Source,
    poll_interval: Duration,
}

impl FileProvider {
    /// A directory is read as CSV tables, anything else as a JSON snapshot.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let source = if path.is_dir() {
            Source::CsvDir(path)
        } else {
            Source::Json(path)
        };
        Self {
            source,
            poll_interval: Duration::from_secs(1),
        }
    }

    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    fn read_json(path: &Path) -> Result<JsonSnapshot, ProviderError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProviderError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ProviderError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ProviderError> {
        let csv_error = |source| ProviderError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(csv_error)?;
        reader
            .deserialize()
            .collect::<Result<Vec<T>, _>>()
            .map_err(csv_error)
    }

    /// Files whose modification time is watched, with the table each one feeds.
    fn watched(&self) -> Vec<(PathBuf, &'static [Table])> {
        match &self.source {
            Source::Json(path) => vec![(path.clone(), BOTH_TABLES)],
            Source::CsvDir(dir) => vec![
                (dir.join(STALLS_CSV), STALL_TABLE),
                (dir.join(TENANTS_CSV), TENANT_TABLE),
            ],
        }
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

impl DataProvider for FileProvider {
    fn list_stalls(&self) -> Result<Vec<StallRecord>, ProviderError> {
        match &self.source {
            Source::Json(path) => Ok(Self::read_json(path)?.stalls),
            Source::CsvDir(dir) => Self::read_csv(&dir.join(STALLS_CSV)),
        }
    }

    fn list_active_tenants(&self) -> Result<Vec<TenantRecord>, ProviderError> {
        let tenants: Vec<TenantRecord> = match &self.source {
            Source::Json(path) => Self::read_json(path)?.tenants,
            Source::CsvDir(dir) => Self::read_csv(&dir.join(TENANTS_CSV))?,
        };
        Ok(tenants.into_iter().filter(TenantRecord::is_active).collect())
    }

    /// Polls modification times on a background thread. The thread exits once the
    /// receiver is dropped.
    fn subscribe(&self) -> Option<Receiver<TableChange>> {
        let (tx, rx) = mpsc::channel();
        let watched = self.watched();
        let interval = self.poll_interval;

        let spawned = thread::Builder::new()
            .name("stall-map-watch".to_string())
            .spawn(move || {
                let mut stamps: Vec<Option<SystemTime>> =
                    watched.iter().map(|(path, _)| modified(path)).collect();
                loop {
                    thread::sleep(interval);
                    for ((path, tables), stamp) in watched.iter().zip(stamps.iter_mut()) {
                        let current = modified(path);
                        if current == *stamp {
                            continue;
                        }
                        *stamp = current;
                        tracing::debug!(path = %path.display(), "snapshot file changed");
                        for &table in *tables {
                            if tx.send(TableChange { table }).is_err() {
                                tracing::debug!("change watcher stopped, receiver dropped");
                                return;
                            }
                        }
                    }
                }
            });

        match spawned {
            Ok(_) => Some(rx),
            Err(err) => {
                tracing::warn!(error = %err, "could not start change watcher");
                None
            }
        }
    }
}
