use crate::{BackendKind, BridgeError, ConstantPool, EventTimeout};

/// A trait for implementing a VirtualBox automation bridge.
///
/// Implementations surface failures as [`BridgeError`] values; the
/// [`VboxManager`] facade takes care of classifying them. None of the
/// methods here should attempt a translation of their own.
///
/// [`VboxManager`]: crate::VboxManager
pub trait VboxDriver: Sized {
    /// Connection parameters understood by this bridge.
    type Params;

    /// The root `IVirtualBox` handle exposed by this bridge.
    type Root;

    /// Connects to the automation bridge.
    ///
    /// `None` selects the platform default backend.
    fn connect(
        style: Option<BackendKind>,
        params: Option<Self::Params>,
    ) -> Result<Self, BridgeError>;

    /// Waits for an event from the bridge's event queue.
    ///
    /// Blocks the calling thread for up to `timeout`, indefinitely for
    /// [`EventTimeout::Indefinite`]. The wait cannot be cancelled once
    /// entered.
    fn wait_for_events(&self, timeout: EventTimeout) -> Result<(), BridgeError>;

    /// Returns the root handle of the virtualization service.
    fn root(&self) -> &Self::Root;

    /// Returns which backend flavor this bridge talks to.
    fn kind(&self) -> BackendKind;

    /// Returns the constants exported by the bridge.
    fn constants(&self) -> &ConstantPool;

    /// Tears the bridge connection down.
    ///
    /// Called by the facade exactly once, when it is dropped.
    fn disconnect(&mut self) -> Result<(), BridgeError>;
}
