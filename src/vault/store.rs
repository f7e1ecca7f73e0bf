//! Storage collaborators: owner-scoped persistence of encrypted records.
//!
//! Everything behind [`VaultStorage`] handles only opaque
//! [`EncryptedVaultItem`] values — base64 ciphertext, base64 salt,
//! timestamps.  No plaintext, master password, or derived key ever
//! reaches an implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

use super::item::EncryptedVaultItem;

/// Current store file format version.
pub const CURRENT_VERSION: u8 = 1;

/// Boundary contract for whatever holds encrypted vault records.
pub trait VaultStorage {
    /// Insert a record, or replace the existing record with the same id.
    fn put(&mut self, record: EncryptedVaultItem) -> Result<()>;

    /// Fetch a single record by owner and id.
    fn get(&self, owner: &str, id: &str) -> Result<EncryptedVaultItem>;

    /// All records belonging to `owner`, most recently updated first.
    fn list(&self, owner: &str) -> Result<Vec<EncryptedVaultItem>>;

    /// Delete a record by owner and id.
    fn remove(&mut self, owner: &str, id: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Shared record-collection helpers
// ---------------------------------------------------------------------------

fn put_record(records: &mut Vec<EncryptedVaultItem>, record: EncryptedVaultItem) {
    match records.iter_mut().find(|r| r.id == record.id) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

fn get_record(records: &[EncryptedVaultItem], owner: &str, id: &str) -> Result<EncryptedVaultItem> {
    records
        .iter()
        .find(|r| r.owner == owner && r.id == id)
        .cloned()
        .ok_or_else(|| VaultError::ItemNotFound(id.to_string()))
}

fn list_records(records: &[EncryptedVaultItem], owner: &str) -> Vec<EncryptedVaultItem> {
    let mut list: Vec<EncryptedVaultItem> = records
        .iter()
        .filter(|r| r.owner == owner)
        .cloned()
        .collect();

    list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    list
}

fn remove_record(records: &mut Vec<EncryptedVaultItem>, owner: &str, id: &str) -> Result<()> {
    let before = records.len();
    records.retain(|r| !(r.owner == owner && r.id == id));

    if records.len() == before {
        return Err(VaultError::ItemNotFound(id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// On-disk document envelope for [`JsonFileStore`].
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    /// Format version.
    version: u8,

    /// Every stored record, all owners mixed.
    items: Vec<EncryptedVaultItem>,
}

/// A JSON document store on the local filesystem.
///
/// Writes are atomic: the full document is written to a temp file in
/// the same directory and renamed over the target, so readers never
/// see a half-written store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<EncryptedVaultItem>,
}

impl JsonFileStore {
    /// Open the store at `path`, or start an empty one if the file
    /// does not exist yet.
    pub fn open_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path: path.to_path_buf(),
                records: Vec::new(),
            });
        }

        let data = fs::read(path)?;
        let file: StoreFile = serde_json::from_slice(&data)
            .map_err(|e| VaultError::InvalidStoreFormat(format!("store JSON: {e}")))?;

        if file.version != CURRENT_VERSION {
            return Err(VaultError::InvalidStoreFormat(format!(
                "unsupported version {}, expected {CURRENT_VERSION}",
                file.version
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
            records: file.items,
        })
    }

    /// Serialize the store and write it to disk atomically.
    pub fn save(&self) -> Result<()> {
        let file = StoreFile {
            version: CURRENT_VERSION,
            items: self.records.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&file)
            .map_err(|e| VaultError::SerializationError(format!("store: {e}")))?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(parent)?;

        // Atomic write: temp file in the same directory, then rename.
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, &bytes)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Returns the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total number of stored records, across all owners.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl VaultStorage for JsonFileStore {
    fn put(&mut self, record: EncryptedVaultItem) -> Result<()> {
        put_record(&mut self.records, record);
        Ok(())
    }

    fn get(&self, owner: &str, id: &str) -> Result<EncryptedVaultItem> {
        get_record(&self.records, owner, id)
    }

    fn list(&self, owner: &str) -> Result<Vec<EncryptedVaultItem>> {
        Ok(list_records(&self.records, owner))
    }

    fn remove(&mut self, owner: &str, id: &str) -> Result<()> {
        remove_record(&mut self.records, owner, id)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store, mainly for tests and as the reference
/// implementation of the [`VaultStorage`] contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<EncryptedVaultItem>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl VaultStorage for MemoryStore {
    fn put(&mut self, record: EncryptedVaultItem) -> Result<()> {
        put_record(&mut self.records, record);
        Ok(())
    }

    fn get(&self, owner: &str, id: &str) -> Result<EncryptedVaultItem> {
        get_record(&self.records, owner, id)
    }

    fn list(&self, owner: &str) -> Result<Vec<EncryptedVaultItem>> {
        Ok(list_records(&self.records, owner))
    }

    fn remove(&mut self, owner: &str, id: &str) -> Result<()> {
        remove_record(&mut self.records, owner, id)
    }
}
