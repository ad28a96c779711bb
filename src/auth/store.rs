//! Token persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::SessionTokens;
use crate::Error;

/// Key-value persistence for session tokens.
///
/// A [`Session`](super::Session) reads the store once when it loads and
/// writes through on login, refresh and logout.
///
/// ## Object Safety
///
/// This trait is object-safe and is held as `Arc<dyn TokenStore>`.
///
/// ## Example: custom store
///
/// ```rust
/// use shopadmin::auth::{SessionTokens, TokenStore};
/// use shopadmin::Error;
///
/// struct NeverRemember;
///
/// impl TokenStore for NeverRemember {
///     fn load(&self) -> Result<Option<SessionTokens>, Error> {
///         Ok(None)
///     }
///     fn save(&self, _tokens: &SessionTokens) -> Result<(), Error> {
///         Ok(())
///     }
///     fn clear(&self) -> Result<(), Error> {
///         Ok(())
///     }
/// }
/// ```
pub trait TokenStore: Send + Sync {
    /// Returns the persisted tokens, if any.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing medium cannot be read.
    fn load(&self) -> Result<Option<SessionTokens>, Error>;

    /// Persists `tokens`, replacing anything stored before.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing medium cannot be written.
    fn save(&self, tokens: &SessionTokens) -> Result<(), Error>;

    /// Removes any persisted tokens.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing medium cannot be written.
    fn clear(&self) -> Result<(), Error>;
}

/// Process-local token store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<SessionTokens>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `tokens`.
    pub fn with_tokens(tokens: SessionTokens) -> Self {
        Self {
            tokens: Mutex::new(Some(tokens)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<SessionTokens>, Error> {
        Ok(self.tokens.lock().clone())
    }

    fn save(&self, tokens: &SessionTokens) -> Result<(), Error> {
        *self.tokens.lock() = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        *self.tokens.lock() = None;
        Ok(())
    }
}

/// Token store backed by a JSON file.
///
/// The file is rewritten whole on every save and removed on clear. A missing
/// file loads as "no tokens"; an unreadable or corrupt one is an error.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store at `path`. The file is not touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<SessionTokens>, Error> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            Error::storage(format!(
                "corrupt token file {}: {}",
                self.path.display(),
                e
            ))
            .with_source(e)
        })
    }

    fn save(&self, tokens: &SessionTokens) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(tokens)
            .map_err(|e| Error::storage(format!("cannot encode tokens: {}", e)))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
