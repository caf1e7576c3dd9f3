//! File-per-table persistence for Q-tables
//!
//! Every named table lives at `<dir>/<name>.json` as a pretty-printed JSON object mapping
//! state keys to per-action values. The file is the durable copy of the table and is written
//! atomically: a sibling temp file is filled, flushed, then renamed over the old table.
//!
//! Concurrent writers to the same table are not supported.

use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

use log::debug;

use crate::{
    algo::tabular::q_table::QTable,
    error::{Error, Result},
};

const EXTENSION: &str = "json";

/// Location of persisted tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStore {
    dir: PathBuf,
}

impl TableStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding the table called `name`
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{EXTENSION}"))
    }

    /// Read the table called `name`
    ///
    /// **Returns** `Ok(None)` if no such table has been saved
    pub fn read(&self, name: &str) -> Result<Option<QTable>> {
        let path = self.path_for(name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io("open table", &path)(e)),
        };

        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|source| Error::CorruptTable { path, source })
    }

    /// Write `table` under `name`, replacing any previous contents
    pub fn write(&self, name: &str, table: &QTable) -> Result<()> {
        let path = self.path_for(name);
        fs::create_dir_all(&self.dir).map_err(Error::io("create table directory", &self.dir))?;

        let tmp = self.dir.join(format!("{name}.{EXTENSION}.tmp"));
        let file = File::create(&tmp).map_err(Error::io("create table", &tmp))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, table)
            .map_err(io::Error::from)
            .map_err(Error::io("write table", &tmp))?;
        writer.flush().map_err(Error::io("write table", &tmp))?;
        fs::rename(&tmp, &path).map_err(Error::io("replace table", &path))?;

        debug!("saved {} states to {}", table.len(), path.display());
        Ok(())
    }
}
