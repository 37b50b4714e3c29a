use crate::errors::AppResult;
use crate::models::SurveyRecord;
use crate::store::codec;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// File-backed record store.
///
/// The file is the whole dataset: every write replaces it with the full
/// record set, through a temporary file renamed over the original.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// All rows in file order. A missing file is an empty dataset.
    pub fn load(&self) -> AppResult<Vec<SurveyRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        codec::decode(BufReader::new(file))
    }

    /// Append one batch after the existing rows and persist the result.
    ///
    /// Returns the number of rows now in the store.
    pub fn append(&self, batch: &[SurveyRecord]) -> AppResult<usize> {
        let mut records = self.load()?;
        records.extend_from_slice(batch);
        self.persist(&records)?;
        Ok(records.len())
    }

    /// Overwrite the store with `records`.
    ///
    /// Bytes go to `<file>.tmp` first, then a rename swaps it in, so a
    /// failure leaves the previous content untouched.
    pub fn persist(&self, records: &[SurveyRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let bytes = codec::encode(records)?;
        let tmp = self.tmp_path();

        let write_result = File::create(&tmp).and_then(|mut f| {
            f.write_all(&bytes)?;
            f.sync_all()
        });

        if let Err(e) = write_result {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        Ok(())
    }

    /// Create the file with only the header row, unless it already exists.
    ///
    /// Returns `true` when a new file was written.
    pub fn init(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.persist(&[])?;
        Ok(true)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
