use serde::{Deserialize, Serialize};

/// The flavor of automation bridge a driver talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackendKind {
    /// The cross-platform XPCOM bridge.
    Xpcom,

    /// The Windows-only MSCOM bridge.
    Mscom,

    /// The SOAP web service bridge.
    WebService,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> ::std::fmt::Result {
        match self {
            Self::Xpcom => write!(f, "XPCOM"),
            Self::Mscom => write!(f, "MSCOM"),
            Self::WebService => write!(f, "WEBSERVICE"),
        }
    }
}
