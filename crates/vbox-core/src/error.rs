use serde::{Deserialize, Serialize};

use crate::StatusCode;

/// A raw failure surfaced by the underlying automation bridge.
///
/// The bridge is expected, but not guaranteed, to attach a signed status
/// code to every failure. A missing status is a normal case and simply
/// means the failure cannot be classified.
///
/// `Display` is the bridge's message, verbatim. The original cause, when
/// one exists, stays reachable through [`std::error::Error::source`].
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct BridgeError {
    status: Option<i32>,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl BridgeError {
    /// Creates a bridge failure carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a bridge failure carrying a signed status code.
    pub fn with_status(status: i32, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying cause of this failure.
    pub fn with_source(self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..self
        }
    }

    /// Returns the signed status code as reported by the bridge.
    pub fn status(&self) -> Option<i32> {
        self.status
    }

    /// Returns the sign-corrected status code.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status.map(StatusCode::from_signed)
    }

    /// Returns the bridge's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The closed set of recognized VirtualBox failure categories.
///
/// Each category has exactly one canonical status code; the classification
/// table may map several codes onto the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Object corresponding to the supplied arguments does not exist.
    ObjectNotFound,

    /// Current virtual machine state prevents the operation.
    InvalidVmState,

    /// Virtual machine error occurred attempting the operation.
    VmError,

    /// File not accessible or erroneous file contents.
    FileError,

    /// Runtime subsystem error.
    RuntimeSubsystem,

    /// Pluggable Device Manager error.
    PluggableDeviceManager,

    /// Current object state prohibits operation.
    InvalidObjectState,

    /// Host operating system related error.
    Host,

    /// Requested operation is not supported.
    NotSupported,

    /// Invalid XML found.
    InvalidXml,

    /// Current session state prohibits operation.
    InvalidSessionState,

    /// Object being in use prohibits operation.
    ObjectInUse,

    /// File not found.
    FileNotFound,

    /// Invalid argument.
    InvalidArgument,

    /// Operation aborted.
    OperationAborted,
}

impl ErrorKind {
    /// Returns the status code the interface description assigns to this
    /// category.
    pub const fn status(self) -> StatusCode {
        match self {
            Self::ObjectNotFound => StatusCode::OBJECT_NOT_FOUND,
            Self::InvalidVmState => StatusCode::INVALID_VM_STATE,
            Self::VmError => StatusCode::VM_ERROR,
            Self::FileError => StatusCode::FILE_ERROR,
            Self::RuntimeSubsystem => StatusCode::IPRT_ERROR,
            Self::PluggableDeviceManager => StatusCode::PDM_ERROR,
            Self::InvalidObjectState => StatusCode::INVALID_OBJECT_STATE,
            Self::Host => StatusCode::HOST_ERROR,
            Self::NotSupported => StatusCode::NOT_SUPPORTED,
            Self::InvalidXml => StatusCode::XML_ERROR,
            Self::InvalidSessionState => StatusCode::INVALID_SESSION_STATE,
            Self::ObjectInUse => StatusCode::OBJECT_IN_USE,
            Self::FileNotFound => StatusCode::FILE_NOT_FOUND,
            Self::InvalidArgument => StatusCode::INVALID_ARGUMENT,
            Self::OperationAborted => StatusCode::OPERATION_ABORTED,
        }
    }
}

/// An error that can occur when working with the VirtualBox API.
///
/// Classified variants are produced by [`ClassificationTable::classify`]
/// and carry the originating [`BridgeError`] whole, so the message and the
/// cause chain survive the translation unchanged.
///
/// [`ClassificationTable::classify`]: crate::ClassificationTable::classify
#[derive(thiserror::Error, Debug)]
pub enum VboxError {
    /// Object corresponding to the supplied arguments does not exist.
    #[error(transparent)]
    ObjectNotFound(BridgeError),

    /// Current virtual machine state prevents the operation.
    #[error(transparent)]
    InvalidVmState(BridgeError),

    /// Virtual machine error occurred attempting the operation.
    #[error(transparent)]
    VmError(BridgeError),

    /// File not accessible or erroneous file contents.
    #[error(transparent)]
    FileError(BridgeError),

    /// Runtime subsystem error.
    #[error(transparent)]
    RuntimeSubsystem(BridgeError),

    /// Pluggable Device Manager error.
    #[error(transparent)]
    PluggableDeviceManager(BridgeError),

    /// Current object state prohibits operation.
    #[error(transparent)]
    InvalidObjectState(BridgeError),

    /// Host operating system related error.
    #[error(transparent)]
    Host(BridgeError),

    /// Requested operation is not supported.
    #[error(transparent)]
    NotSupported(BridgeError),

    /// Invalid XML found.
    #[error(transparent)]
    InvalidXml(BridgeError),

    /// Current session state prohibits operation.
    #[error(transparent)]
    InvalidSessionState(BridgeError),

    /// Object being in use prohibits operation.
    #[error(transparent)]
    ObjectInUse(BridgeError),

    /// File not found.
    #[error(transparent)]
    FileNotFound(BridgeError),

    /// Invalid argument.
    #[error(transparent)]
    InvalidArgument(BridgeError),

    /// Operation aborted.
    #[error(transparent)]
    OperationAborted(BridgeError),

    /// A bridge failure with no recognized status code, forwarded
    /// unchanged.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// The requested constant is not defined by the bridge.
    #[error("unknown constant: {0}")]
    ConstantNotFound(String),
}

impl VboxError {
    /// Wraps a raw bridge failure into the classified variant of the given
    /// category.
    pub fn classified(kind: ErrorKind, error: BridgeError) -> Self {
        match kind {
            ErrorKind::ObjectNotFound => Self::ObjectNotFound(error),
            ErrorKind::InvalidVmState => Self::InvalidVmState(error),
            ErrorKind::VmError => Self::VmError(error),
            ErrorKind::FileError => Self::FileError(error),
            ErrorKind::RuntimeSubsystem => Self::RuntimeSubsystem(error),
            ErrorKind::PluggableDeviceManager => Self::PluggableDeviceManager(error),
            ErrorKind::InvalidObjectState => Self::InvalidObjectState(error),
            ErrorKind::Host => Self::Host(error),
            ErrorKind::NotSupported => Self::NotSupported(error),
            ErrorKind::InvalidXml => Self::InvalidXml(error),
            ErrorKind::InvalidSessionState => Self::InvalidSessionState(error),
            ErrorKind::ObjectInUse => Self::ObjectInUse(error),
            ErrorKind::FileNotFound => Self::FileNotFound(error),
            ErrorKind::InvalidArgument => Self::InvalidArgument(error),
            ErrorKind::OperationAborted => Self::OperationAborted(error),
        }
    }

    /// Returns the failure category, if this error was classified.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::ObjectNotFound(_) => Some(ErrorKind::ObjectNotFound),
            Self::InvalidVmState(_) => Some(ErrorKind::InvalidVmState),
            Self::VmError(_) => Some(ErrorKind::VmError),
            Self::FileError(_) => Some(ErrorKind::FileError),
            Self::RuntimeSubsystem(_) => Some(ErrorKind::RuntimeSubsystem),
            Self::PluggableDeviceManager(_) => Some(ErrorKind::PluggableDeviceManager),
            Self::InvalidObjectState(_) => Some(ErrorKind::InvalidObjectState),
            Self::Host(_) => Some(ErrorKind::Host),
            Self::NotSupported(_) => Some(ErrorKind::NotSupported),
            Self::InvalidXml(_) => Some(ErrorKind::InvalidXml),
            Self::InvalidSessionState(_) => Some(ErrorKind::InvalidSessionState),
            Self::ObjectInUse(_) => Some(ErrorKind::ObjectInUse),
            Self::FileNotFound(_) => Some(ErrorKind::FileNotFound),
            Self::InvalidArgument(_) => Some(ErrorKind::InvalidArgument),
            Self::OperationAborted(_) => Some(ErrorKind::OperationAborted),
            Self::Bridge(_) | Self::ConstantNotFound(_) => None,
        }
    }

    /// Returns the canonical status code of the classified category.
    pub fn status(&self) -> Option<StatusCode> {
        self.kind().map(ErrorKind::status)
    }

    /// Returns the raw bridge failure this error originates from, if any.
    pub fn bridge(&self) -> Option<&BridgeError> {
        match self {
            Self::ObjectNotFound(error)
            | Self::InvalidVmState(error)
            | Self::VmError(error)
            | Self::FileError(error)
            | Self::RuntimeSubsystem(error)
            | Self::PluggableDeviceManager(error)
            | Self::InvalidObjectState(error)
            | Self::Host(error)
            | Self::NotSupported(error)
            | Self::InvalidXml(error)
            | Self::InvalidSessionState(error)
            | Self::ObjectInUse(error)
            | Self::FileNotFound(error)
            | Self::InvalidArgument(error)
            | Self::OperationAborted(error)
            | Self::Bridge(error) => Some(error),
            Self::ConstantNotFound(_) => None,
        }
    }
}
