use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use minijinja::{Environment, Error, State};
use sha2::{Digest, Sha256};

/// Resolves static asset names to cache-busted `/static/...` URLs keyed by
/// content hash, so a regenerated page picks up replaced assets immediately.
#[derive(Debug)]
pub struct AssetLoader {
    static_dir: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl AssetLoader {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: static_dir.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn asset_path(&self, path: &str) -> String {
        let mut cache = self.cache.write().unwrap();
        if let Some(hashed_path) = cache.get(path) {
            return hashed_path.clone();
        }

        let file_path = self.static_dir.join(path);
        if let Ok(contents) = fs::read(file_path) {
            let mut hasher = Sha256::new();
            hasher.update(contents);
            let hash = hasher.finalize();
            let hashed_path = format!("/static/{}?v={:x}", path, hash);
            cache.insert(path.to_string(), hashed_path.clone());
            hashed_path
        } else {
            // Asset not present on disk; fall back to the plain path.
            format!("/static/{}", path)
        }
    }

    pub fn register<'a>(&self, env: &mut Environment<'a>) {
        let loader = self.clone();
        env.add_function(
            "asset",
            move |_state: &State, path: String| -> Result<String, Error> {
                Ok(loader.asset_path(&path))
            },
        );
    }
}

impl Clone for AssetLoader {
    fn clone(&self) -> Self {
        AssetLoader {
            static_dir: self.static_dir.clone(),
            cache: RwLock::new(self.cache.read().unwrap().clone()),
        }
    }
}
