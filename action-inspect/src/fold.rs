use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Persisted open/closed flags for the parameter foldouts. Read at
/// catalog-build time, written immediately on toggle, last write wins.
pub trait FoldStore {
    fn get(&self, key: &str) -> Option<bool>;
    fn set(&mut self, key: &str, open: bool);
}

/// Key for one operation's foldout. Composing selection identity, declaring
/// type and operation name keeps different inspected objects reusing the
/// same panel from colliding.
pub fn fold_key(ident: &str, type_name: &str, action: &str) -> String {
    format!("{}/{}/{}", ident, type_name, action)
}

#[derive(Default)]
pub struct MemFolds(FxHashMap<String, bool>);

impl FoldStore for MemFolds {
    fn get(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    fn set(&mut self, key: &str, open: bool) {
        self.0.insert(key.to_string(), open);
    }
}

/// Fold flags backed by a json file, written through on every toggle. IO
/// failures are logged and degrade to an empty/unsaved store.
pub struct FoldFile {
    path: PathBuf,
    flags: BTreeMap<String, bool>,
}

impl FoldFile {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let flags = File::open(&path)
            .ok()
            .and_then(|f| {
                serde_json::from_reader(BufReader::new(f))
                    .map_err(|e| log::error!("failed reading fold state: {}", e))
                    .ok()
            })
            .unwrap_or_default();
        FoldFile { path, flags }
    }

    fn save(&self) -> Option<()> {
        let file = File::create(&self.path)
            .map_err(|e| log::error!("failed writing fold state: {}", e))
            .ok()?;
        serde_json::to_writer(BufWriter::new(file), &self.flags)
            .map_err(|e| log::error!("failed writing fold state: {}", e))
            .ok()
    }
}

impl FoldStore for FoldFile {
    fn get(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    fn set(&mut self, key: &str, open: bool) {
        self.flags.insert(key.to_string(), open);
        let _ = self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_key_composition() {
        assert_eq!(fold_key("scene:42", "Turret", "fire"), "scene:42/Turret/fire");
        assert_ne!(
            fold_key("scene:42", "Turret", "fire"),
            fold_key("scene:43", "Turret", "fire")
        );
    }

    #[test]
    fn test_mem_folds_last_write_wins() {
        let mut folds = MemFolds::default();
        assert_eq!(folds.get("k"), None);
        folds.set("k", true);
        folds.set("k", false);
        assert_eq!(folds.get("k"), Some(false));
    }

    #[test]
    fn test_fold_file_round_trip() {
        let path = std::env::temp_dir().join(format!("fold_flags_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut folds = FoldFile::load(&path);
        assert_eq!(folds.get("a/B/c"), None);
        folds.set("a/B/c", true);

        let reloaded = FoldFile::load(&path);
        assert_eq!(reloaded.get("a/B/c"), Some(true));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_fold_file_survives_a_missing_file() {
        let folds = FoldFile::load("/nonexistent/dir/fold_flags.json");
        assert_eq!(folds.get("k"), None);
    }
}
