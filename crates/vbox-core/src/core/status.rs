use serde::{Deserialize, Serialize};

/// A VirtualBox status code.
///
/// The interface description defines status codes as unsigned 32-bit
/// values, while the automation bridge surfaces them as negative signed
/// integers. [`StatusCode::from_signed`] recovers the documented value.
///
/// # Examples
///
/// ```
/// # use vbox_core::StatusCode;
/// assert_eq!(StatusCode::from_signed(-0x7f44_ffff), StatusCode::OBJECT_NOT_FOUND);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatusCode(pub u32);

impl StatusCode {
    /// Object corresponding to the supplied arguments does not exist.
    pub const OBJECT_NOT_FOUND: Self = Self(0x80BB_0001);

    /// Current virtual machine state prevents the operation.
    pub const INVALID_VM_STATE: Self = Self(0x80BB_0002);

    /// Virtual machine error occurred attempting the operation.
    pub const VM_ERROR: Self = Self(0x80BB_0003);

    /// File not accessible or erroneous file contents.
    pub const FILE_ERROR: Self = Self(0x80BB_0004);

    /// Runtime subsystem error.
    pub const IPRT_ERROR: Self = Self(0x80BB_0005);

    /// Pluggable Device Manager error.
    pub const PDM_ERROR: Self = Self(0x80BB_0006);

    /// Current object state prohibits operation.
    pub const INVALID_OBJECT_STATE: Self = Self(0x80BB_0007);

    /// Host operating system related error.
    pub const HOST_ERROR: Self = Self(0x80BB_0008);

    /// Requested operation is not supported.
    pub const NOT_SUPPORTED: Self = Self(0x80BB_0009);

    /// Invalid XML found.
    pub const XML_ERROR: Self = Self(0x80BB_000A);

    /// Current session state prohibits operation.
    pub const INVALID_SESSION_STATE: Self = Self(0x80BB_000B);

    /// Object being in use prohibits operation.
    pub const OBJECT_IN_USE: Self = Self(0x80BB_000C);

    //
    // Codes below are not part of the interface description; they have been
    // observed in the wild.
    //

    /// Returned when waiting on a progress object is aborted.
    pub const OPERATION_ABORTED: Self = Self(0x8000_4004);

    /// Returned when a machine settings file cannot be found on open.
    pub const FILE_NOT_FOUND: Self = Self(0x8000_4005);

    /// Returned when an attribute is set to an out-of-range value.
    pub const INVALID_ARGUMENT: Self = Self(0x8007_0057);

    /// Returned when reading a machine attribute through a closed session.
    pub const SESSION_CLOSED: Self = Self(0x8000_FFFF);

    /// Recovers the unsigned status code from the signed value surfaced by
    /// the bridge.
    ///
    /// The bridge reports `-0x7f44ffff` where the interface description
    /// says `0x80bb0001`; the corrected value is `0x1_0000_0000 + raw`,
    /// which is the signed bit pattern reinterpreted as unsigned.
    pub const fn from_signed(raw: i32) -> Self {
        Self(raw as u32)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> ::std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
