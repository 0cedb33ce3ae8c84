//! Persistent save data.
//!
//! Each game picks a namespace with [`SaveData::set_name`]; its items live in
//! `<root>/<name>/persistent.json` as one JSON object. Items are kept in
//! memory and only written out by [`SaveData::save`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

pub const SAVE_FILE_NAME: &str = "persistent.json";

#[derive(Debug)]
pub struct SaveData {
    root: PathBuf,
    name: Option<String>,
    items: Map<String, Value>,
}

impl SaveData {
    /// Save data stored under `root`. Nothing touches the disk until a name
    /// is set.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            name: None,
            items: Map::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Select the namespace, creating its directory if needed.
    ///
    /// An existing save file is loaded, replacing the in-memory items; a
    /// missing one is created empty.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        if !is_valid_name(name) {
            return Err(Error::InvalidSaveName(name.to_string()));
        }

        let dir = self.root.join(name);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(SAVE_FILE_NAME);

        self.items = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                std::fs::write(&path, b"{}")?;
                Map::new()
            }
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), items = self.items.len(), "save data opened");

        self.name = Some(name.to_string());
        Ok(())
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Location of the save file, once a name is set.
    pub fn path(&self) -> Option<PathBuf> {
        self.name
            .as_ref()
            .map(|name| self.root.join(name).join(SAVE_FILE_NAME))
    }

    pub fn set_item<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    pub fn get_item(&self, key: &str) -> Result<&Value> {
        self.items
            .get(key)
            .ok_or_else(|| Error::MissingItem(key.to_string()))
    }

    /// Fetch an item and deserialize it into `T`.
    pub fn get_item_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.get_item(key)?.clone();
        Ok(serde_json::from_value(value)?)
    }

    pub fn has_item(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Remove an item, returning its value.
    pub fn del_item(&mut self, key: &str) -> Result<Value> {
        self.items
            .remove(key)
            .ok_or_else(|| Error::MissingItem(key.to_string()))
    }

    /// Write all items to the save file.
    pub fn save(&self) -> Result<()> {
        let path = self.path().ok_or(Error::SaveNameUnset)?;
        let json = serde_json::to_vec(&self.items)?;
        std::fs::write(&path, json)?;
        debug!(path = %path.display(), items = self.items.len(), "save data written");
        Ok(())
    }
}

/// A name must be exactly one normal path component.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}
