use std::path::Path;

use crate::errors::CoreError;
use crate::models::asset::AssetRecord;

use super::registry_file::RegistryFile;

/// Best-effort JSON persistence for the asset registry.
///
/// The core only reads and writes plain records; file-location policy,
/// write scheduling, and concurrent-write serialization belong to the
/// caller. No durability guarantees beyond "the bytes were handed to
/// the filesystem".
pub struct RegistryStore;

impl RegistryStore {
    /// Parse records from a registry JSON string.
    pub fn from_json(json: &str) -> Result<Vec<AssetRecord>, CoreError> {
        let file: RegistryFile = serde_json::from_str(json)
            .map_err(|e| CoreError::Deserialization(format!("Invalid registry file: {e}")))?;
        Ok(file.into_records())
    }

    /// Serialize records to a pretty-printed registry JSON string.
    pub fn to_json(records: &[AssetRecord]) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&RegistryFile::from_records(records))
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize registry: {e}")))
    }

    /// Load records from a registry file on disk.
    /// A missing file is `CoreError::FileIO`; callers typically fall
    /// back to `RegistryFile::seed()` in that case.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<AssetRecord>, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save records to a registry file on disk.
    pub fn save_to_path(path: impl AsRef<Path>, records: &[AssetRecord]) -> Result<(), CoreError> {
        let json = Self::to_json(records)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
