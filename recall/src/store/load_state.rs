/// Kinds of asynchronous store operations tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OperationKind {
    Fetch,
    Delete,
}

/// Status of the latest operation of one kind.
///
/// Busy and failed are mutually exclusive by construction: starting an
/// operation replaces any previous failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum OperationStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// Per-operation busy/error flags of the session store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LoadState {
    fetch: OperationStatus,
    delete: OperationStatus,
}

impl LoadState {
    pub(crate) fn status(&self, kind: OperationKind) -> &OperationStatus {
        match kind {
            OperationKind::Fetch => &self.fetch,
            OperationKind::Delete => &self.delete,
        }
    }

    pub(crate) fn is_loading(&self, kind: OperationKind) -> bool {
        matches!(self.status(kind), OperationStatus::Loading)
    }

    pub(crate) fn error(&self, kind: OperationKind) -> Option<&str> {
        match self.status(kind) {
            OperationStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub(super) fn start(&mut self, kind: OperationKind) {
        *self.status_mut(kind) = OperationStatus::Loading;
    }

    pub(super) fn succeed(&mut self, kind: OperationKind) {
        *self.status_mut(kind) = OperationStatus::Idle;
    }

    pub(super) fn fail(&mut self, kind: OperationKind, message: String) {
        *self.status_mut(kind) = OperationStatus::Failed(message);
    }

    fn status_mut(&mut self, kind: OperationKind) -> &mut OperationStatus {
        match kind {
            OperationKind::Fetch => &mut self.fetch,
            OperationKind::Delete => &mut self.delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadState, OperationKind, OperationStatus};

    #[test]
    fn given_failed_fetch_when_started_again_then_error_is_cleared() {
        let mut load = LoadState::default();
        load.fail(OperationKind::Fetch, String::from("timeout"));
        assert_eq!(load.error(OperationKind::Fetch), Some("timeout"));

        load.start(OperationKind::Fetch);

        assert!(load.is_loading(OperationKind::Fetch));
        assert!(load.error(OperationKind::Fetch).is_none());
    }

    #[test]
    fn given_delete_failure_when_reading_fetch_then_kinds_are_independent() {
        let mut load = LoadState::default();
        load.start(OperationKind::Fetch);
        load.fail(OperationKind::Delete, String::from("denied"));

        assert!(load.is_loading(OperationKind::Fetch));
        assert_eq!(
            load.status(OperationKind::Delete),
            &OperationStatus::Failed(String::from("denied"))
        );
    }
}
