use super::DataStore;
use crate::config::DEFAULT_SLOT;
use crate::error::{PackError, Result};
use crate::model::Collection;
use std::fs;
use std::path::PathBuf;
use std::process;

pub struct FileStore {
    root: PathBuf,
    slot: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    pub fn with_slot(mut self, slot: &str) -> Self {
        self.slot = slot.to_string();
        self
    }

    pub fn slot_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.slot))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PackError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Collection> {
        let path = self.slot_path();
        if !path.exists() {
            return Ok(Collection::empty());
        }
        let content = fs::read_to_string(&path).map_err(PackError::Io)?;
        if content.trim().is_empty() {
            return Ok(Collection::empty());
        }
        let collection: Collection =
            serde_json::from_str(&content).map_err(PackError::Serialization)?;
        Ok(collection)
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        self.ensure_dir()?;

        let content =
            serde_json::to_string_pretty(collection).map_err(PackError::Serialization)?;

        // Write next to the target and rename so a crash never leaves half a file
        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", self.slot, process::id()));
        fs::write(&tmp_file, content).map_err(PackError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.slot_path()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PackError::Io(e));
        }

        Ok(())
    }
}
