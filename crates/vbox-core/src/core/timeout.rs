/// How long to block while waiting for bridge events.
///
/// The bridge encodes "no timeout" as a zero millisecond count, so the
/// default value and an explicit zero are indistinguishable on the wire.
///
/// # Examples
///
/// ```
/// # use vbox_core::EventTimeout;
/// assert_eq!(EventTimeout::from_millis(0), EventTimeout::Indefinite);
/// assert_eq!(EventTimeout::default().as_millis(), 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTimeout {
    /// Block until an event arrives.
    #[default]
    Indefinite,

    /// Block for at most this many milliseconds.
    Millis(u32),
}

impl EventTimeout {
    /// Creates a timeout from a millisecond count.
    ///
    /// Zero maps to [`EventTimeout::Indefinite`], matching the bridge's
    /// reading of the value.
    pub const fn from_millis(millis: u32) -> Self {
        match millis {
            0 => Self::Indefinite,
            millis => Self::Millis(millis),
        }
    }

    /// Encodes the timeout as the wire value the bridge expects.
    pub const fn as_millis(self) -> u32 {
        match self {
            Self::Indefinite => 0,
            Self::Millis(millis) => millis,
        }
    }
}

impl From<u32> for EventTimeout {
    fn from(millis: u32) -> Self {
        Self::from_millis(millis)
    }
}
