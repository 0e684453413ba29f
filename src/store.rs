use tracing::debug;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::error::StoreError;
use crate::types::GameDocument;

const MAGIC: &str = "FTH1";
const VERSION: u32 = 1;

/// Persistence for the game document. The engine never calls this directly.
pub trait StateStore {
    /// Returns `None` when nothing has been saved yet.
    fn load(&mut self) -> Result<Option<GameDocument>, StoreError>;
    fn save(&mut self, document: &GameDocument) -> Result<(), StoreError>;
}

/// Keeps the last saved document in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<GameDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Option<&GameDocument> {
        self.slot.as_ref()
    }
}

impl StateStore for MemoryStore {
    fn load(&mut self) -> Result<Option<GameDocument>, StoreError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, document: &GameDocument) -> Result<(), StoreError> {
        self.slot = Some(document.clone());
        Ok(())
    }
}

/// A decoded snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub saved_at_ms: u64,
    pub document: GameDocument,
}

/// Encodes a document as a header line followed by pretty-printed JSON:
///
/// ```text
/// FTH1 <version> <crc32 of body, hex> <saved_at_ms>
/// { ...document... }
/// ```
pub fn encode_snapshot(document: &GameDocument, saved_at_ms: u64) -> Result<String, StoreError> {
    let body = serde_json::to_string_pretty(document)?;
    let crc = crc32fast::hash(body.as_bytes());
    Ok(format!("{MAGIC} {VERSION} {crc:08x} {saved_at_ms}\n{body}"))
}

pub fn decode_snapshot(data: &str) -> Result<Snapshot, StoreError> {
    let (header, body) = data
        .split_once('\n')
        .ok_or_else(|| StoreError::Format("missing header line".to_string()))?;

    let mut fields = header.split_whitespace();
    let magic = fields.next().unwrap_or_default();
    if magic != MAGIC {
        return Err(StoreError::Format(format!(
            "invalid snapshot magic (expected {MAGIC}, got {magic:?})"
        )));
    }

    let version = parse_field(fields.next(), "version", |s| s.parse::<u32>())?;
    if version != VERSION {
        return Err(StoreError::UnsupportedVersion {
            expected: VERSION,
            found: version,
        });
    }

    let expected = parse_field(fields.next(), "checksum", |s| u32::from_str_radix(s, 16))?;
    let saved_at_ms = parse_field(fields.next(), "timestamp", |s| s.parse::<u64>())?;
    if fields.next().is_some() {
        return Err(StoreError::Format("trailing header fields".to_string()));
    }

    let actual = crc32fast::hash(body.as_bytes());
    if actual != expected {
        return Err(StoreError::ChecksumMismatch { expected, actual });
    }

    let document = serde_json::from_str(body)?;
    Ok(Snapshot {
        saved_at_ms,
        document,
    })
}

fn parse_field<T, E>(
    field: Option<&str>,
    name: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<T, StoreError> {
    let raw = field.ok_or_else(|| StoreError::Format(format!("missing {name}")))?;
    parse(raw).map_err(|_| StoreError::Format(format!("invalid {name}: {raw:?}")))
}

/// Milliseconds since the Unix epoch; zero if the clock is before it.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

fn decode_stored(data: Option<String>) -> Result<Option<GameDocument>, StoreError> {
    let Some(data) = data else {
        return Ok(None);
    };
    let snapshot = decode_snapshot(&data)?;
    debug!(saved_at_ms = snapshot.saved_at_ms, "snapshot loaded");
    Ok(Some(snapshot.document))
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{StateStore, decode_stored, encode_snapshot, now_ms};
    use crate::error::StoreError;
    use crate::types::GameDocument;

    /// Snapshot file on disk.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<storage_key>.json` in the working directory.
        pub fn for_key(storage_key: &str) -> Self {
            Self::new(format!("{storage_key}.json"))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl StateStore for FileStore {
        fn load(&mut self) -> Result<Option<GameDocument>, StoreError> {
            let data = match fs::read_to_string(&self.path) {
                Ok(data) => Some(data),
                Err(err) if err.kind() == ErrorKind::NotFound => None,
                Err(err) => return Err(err.into()),
            };
            decode_stored(data)
        }

        fn save(&mut self, document: &GameDocument) -> Result<(), StoreError> {
            let encoded = encode_snapshot(document, now_ms())?;
            // replace in one rename so readers never see a partial snapshot
            let tmp = self.path.with_extension("json.tmp");
            fs::write(&tmp, encoded)?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::prelude::*;

    use super::{StateStore, decode_stored, encode_snapshot, now_ms};
    use crate::error::StoreError;
    use crate::types::GameDocument;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = localStorage, js_name = getItem)]
        fn local_storage_get(key: &str) -> Result<Option<String>, JsValue>;

        #[wasm_bindgen(catch, js_namespace = localStorage, js_name = setItem)]
        fn local_storage_set(key: &str, value: &str) -> Result<(), JsValue>;
    }

    /// Snapshot kept in `window.localStorage`.
    #[derive(Debug, Clone)]
    pub struct LocalStorageStore {
        key: String,
    }

    impl LocalStorageStore {
        pub fn new(key: impl Into<String>) -> Self {
            Self { key: key.into() }
        }
    }

    impl StateStore for LocalStorageStore {
        fn load(&mut self) -> Result<Option<GameDocument>, StoreError> {
            let data = local_storage_get(&self.key).map_err(js_err)?;
            decode_stored(data)
        }

        fn save(&mut self, document: &GameDocument) -> Result<(), StoreError> {
            let encoded = encode_snapshot(document, now_ms())?;
            local_storage_set(&self.key, &encoded).map_err(js_err)
        }
    }

    fn js_err(value: JsValue) -> StoreError {
        StoreError::Backend(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
