use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::{BridgeError, ErrorKind, StatusCode, VboxError};

/// The builtin table, constructed once per process.
static BUILTIN: Lazy<ClassificationTable> = Lazy::new(|| {
    ClassificationTable::from_entries([
        (StatusCode::OBJECT_NOT_FOUND, ErrorKind::ObjectNotFound),
        (StatusCode::INVALID_VM_STATE, ErrorKind::InvalidVmState),
        (StatusCode::VM_ERROR, ErrorKind::VmError),
        (StatusCode::FILE_ERROR, ErrorKind::FileError),
        (StatusCode::IPRT_ERROR, ErrorKind::RuntimeSubsystem),
        (StatusCode::PDM_ERROR, ErrorKind::PluggableDeviceManager),
        (StatusCode::INVALID_OBJECT_STATE, ErrorKind::InvalidObjectState),
        (StatusCode::HOST_ERROR, ErrorKind::Host),
        (StatusCode::NOT_SUPPORTED, ErrorKind::NotSupported),
        (StatusCode::XML_ERROR, ErrorKind::InvalidXml),
        (StatusCode::INVALID_SESSION_STATE, ErrorKind::InvalidSessionState),
        (StatusCode::OBJECT_IN_USE, ErrorKind::ObjectInUse),
        (StatusCode::OPERATION_ABORTED, ErrorKind::OperationAborted),
        (StatusCode::FILE_NOT_FOUND, ErrorKind::FileNotFound),
        (StatusCode::INVALID_ARGUMENT, ErrorKind::InvalidArgument),
        // A closed session reports a generic failure code; treat it the
        // same as an invalid machine state.
        (StatusCode::SESSION_CLOSED, ErrorKind::InvalidVmState),
    ])
});

/// An immutable mapping from status codes to failure categories.
///
/// The builtin table covers every code of the interface description plus a
/// few observed ones; a custom table can be supplied where a different (or
/// empty) mapping is wanted, typically in tests.
#[derive(Debug, Clone)]
pub struct ClassificationTable {
    entries: IndexMap<StatusCode, ErrorKind>,
}

impl ClassificationTable {
    /// Returns the builtin table.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Creates a table from explicit entries.
    ///
    /// Later entries win when a status code appears twice.
    pub fn from_entries(entries: impl IntoIterator<Item = (StatusCode, ErrorKind)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Looks up the failure category recorded for a status code.
    pub fn lookup(&self, status: StatusCode) -> Option<ErrorKind> {
        self.entries.get(&status).copied()
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translates a raw bridge failure into its classified form.
    ///
    /// The raw signed status, when present, is sign-corrected and looked
    /// up; a hit wraps the failure into the matching [`VboxError`] variant
    /// with its message and cause chain intact. A failure with no status,
    /// or with a status the table does not know, is forwarded unchanged as
    /// [`VboxError::Bridge`].
    pub fn classify(&self, error: BridgeError) -> VboxError {
        match error.status_code().and_then(|status| self.lookup(status)) {
            Some(kind) => VboxError::classified(kind, error),
            None => VboxError::Bridge(error),
        }
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod classifier_tests;
