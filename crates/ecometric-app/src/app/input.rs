//! Input snapshot files (TOML or JSON, chosen by extension)

use std::fs;
use std::path::Path;

use ecometric_types::{Error, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

/// Read and deserialize a snapshot file
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "reading input document");
    if is_toml(path) {
        Ok(toml::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("in.toml");
        let json_path = dir.path().join("in.json");
        fs::write(&toml_path, "land_area = 100.0\n").unwrap();
        fs::write(&json_path, r#"{"land_area": 200.0}"#).unwrap();

        let a: BTreeMap<String, f64> = load_document(&toml_path).unwrap();
        let b: BTreeMap<String, f64> = load_document(&json_path).unwrap();
        assert_eq!(a["land_area"], 100.0);
        assert_eq!(b["land_area"], 200.0);
    }

    #[test]
    fn test_missing_file() {
        let res: Result<BTreeMap<String, f64>> = load_document(Path::new("/no/such/file.json"));
        assert!(matches!(res, Err(Error::FileNotFound(_))));
    }
}
