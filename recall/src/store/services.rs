use std::path::{Path, PathBuf};

use super::errors::SessionServiceError;
use super::model::{Session, SessionId};
use super::storage::{load_session_file, save_session_file};

/// Backing service that owns persisted sessions.
///
/// Calls are blocking; callers run them inside a task future.
pub(crate) trait SessionService: Send + Sync {
    /// Return all sessions, in the order they should be listed.
    fn fetch_sessions(&self) -> Result<Vec<Session>, SessionServiceError>;

    /// Permanently delete the session with `id`.
    fn delete_session(
        &self,
        id: &SessionId,
    ) -> Result<(), SessionServiceError>;
}

/// Session service backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub(crate) struct JsonSessionService {
    path: PathBuf,
}

impl JsonSessionService {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionService for JsonSessionService {
    fn fetch_sessions(&self) -> Result<Vec<Session>, SessionServiceError> {
        let data = load_session_file(&self.path)?;
        Ok(data.sessions)
    }

    fn delete_session(
        &self,
        id: &SessionId,
    ) -> Result<(), SessionServiceError> {
        let mut data = load_session_file(&self.path)?;
        let before = data.sessions.len();
        data.sessions.retain(|session| session.id() != id);
        if data.sessions.len() == before {
            return Err(SessionServiceError::NotFound { id: id.clone() });
        }

        save_session_file(&self.path, &data)
    }
}

/// In-memory service used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemorySessionService {
    sessions: std::sync::Mutex<Vec<Session>>,
}

#[cfg(test)]
impl MemorySessionService {
    pub(crate) fn with_sessions(sessions: Vec<Session>) -> Self {
        Self {
            sessions: std::sync::Mutex::new(sessions),
        }
    }
}

#[cfg(test)]
impl SessionService for MemorySessionService {
    fn fetch_sessions(&self) -> Result<Vec<Session>, SessionServiceError> {
        let sessions = self.sessions.lock().expect("lock should not poison");
        Ok(sessions.clone())
    }

    fn delete_session(
        &self,
        id: &SessionId,
    ) -> Result<(), SessionServiceError> {
        let mut sessions =
            self.sessions.lock().expect("lock should not poison");
        let before = sessions.len();
        sessions.retain(|session| session.id() != id);
        if sessions.len() == before {
            return Err(SessionServiceError::NotFound { id: id.clone() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use chrono::DateTime;

    use super::*;
    use crate::store::model::SessionFile;

    fn session(id: &str) -> Session {
        let created_at = DateTime::from_timestamp(1_700_000_000, 0)
            .expect("timestamp should be valid");
        Session::new(SessionId::from(id), format!("Title {id}"), created_at)
    }

    #[test]
    fn given_existing_session_when_deleted_then_file_no_longer_lists_it() {
        let root = test_temp_dir("delete");
        let path = root.join("sessions.json");
        let data = SessionFile {
            sessions: vec![session("a"), session("b")],
            ..SessionFile::default()
        };
        save_session_file(&path, &data).expect("fixture should save");
        let service = JsonSessionService::new(path);

        service
            .delete_session(&SessionId::from("a"))
            .expect("delete should succeed");

        let sessions = service.fetch_sessions().expect("fetch should succeed");
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id().as_str(), "b");
        fs::remove_dir_all(root).expect("test directory should be removed");
    }

    #[test]
    fn given_unknown_session_when_deleted_then_not_found_is_returned() {
        let root = test_temp_dir("unknown");
        let service = JsonSessionService::new(root.join("sessions.json"));

        let err = service
            .delete_session(&SessionId::from("ghost"))
            .expect_err("delete should fail");

        assert!(matches!(err, SessionServiceError::NotFound { .. }));
        assert_eq!(err.to_string(), "Session ghost does not exist.");
        fs::remove_dir_all(root).expect("test directory should be removed");
    }

    #[test]
    fn given_memory_service_when_deleting_twice_then_second_call_fails() {
        let service = MemorySessionService::with_sessions(vec![session("a")]);

        assert!(service.delete_session(&SessionId::from("a")).is_ok());
        assert!(service.delete_session(&SessionId::from("a")).is_err());
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "recall-services-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir).expect("test directory should be created");
        dir
    }
}
