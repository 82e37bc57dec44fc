use std::path::Path;

use super::errors::SessionServiceError;
use super::model::SessionFile;

/// Load the session collection from `path`.
///
/// A missing file is an empty collection, not an error.
pub(super) fn load_session_file(
    path: &Path,
) -> Result<SessionFile, SessionServiceError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(SessionFile::default());
        },
        Err(err) => return Err(err.into()),
    };
    let data: SessionFile = serde_json::from_str(&content)?;
    Ok(data)
}

/// Save the session collection to `path` atomically.
pub(super) fn save_session_file(
    path: &Path,
    data: &SessionFile,
) -> Result<(), SessionServiceError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let payload = serde_json::to_string_pretty(data)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, payload.as_bytes())?;
    std::fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use crate::store::errors::SessionServiceError;

    #[test]
    fn given_missing_file_when_loaded_then_collection_is_empty() {
        let root = test_temp_dir("missing");

        let data = load_session_file(&root.join("sessions.json"))
            .expect("missing file should load");

        assert!(data.sessions.is_empty());
        fs::remove_dir_all(root).expect("test directory should be removed");
    }

    #[test]
    fn given_valid_json_when_loaded_then_sessions_are_in_file_order() {
        let root = test_temp_dir("valid");
        let path = root.join("sessions.json");
        let json = serde_json::json!({
            "version": 1,
            "sessions": [
                {
                    "id": "b",
                    "title": "Second",
                    "created_at": "2024-05-02T10:00:00Z"
                },
                {
                    "id": "a",
                    "title": "First",
                    "created_at": "2024-05-01T10:00:00Z"
                }
            ]
        });
        fs::write(&path, json.to_string()).expect("file should be written");

        let data = load_session_file(&path).expect("file should load");

        assert_eq!(data.sessions.len(), 2);
        assert_eq!(data.sessions[0].title(), "Second");
        fs::remove_dir_all(root).expect("test directory should be removed");
    }

    #[test]
    fn given_malformed_json_when_loaded_then_json_error_is_returned() {
        let root = test_temp_dir("malformed");
        let path = root.join("sessions.json");
        fs::write(&path, "{ not json").expect("file should be written");

        let err = load_session_file(&path).expect_err("load should fail");

        assert!(matches!(err, SessionServiceError::Json(_)));
        fs::remove_dir_all(root).expect("test directory should be removed");
    }

    #[test]
    fn given_saved_file_when_loaded_again_then_no_temp_file_remains() {
        let root = test_temp_dir("save");
        let path = root.join("nested").join("sessions.json");

        save_session_file(&path, &SessionFile::default())
            .expect("file should save");

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let data = load_session_file(&path).expect("file should load");
        assert_eq!(data.version, 1);
        fs::remove_dir_all(root).expect("test directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "recall-storage-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir).expect("test directory should be created");
        dir
    }
}
