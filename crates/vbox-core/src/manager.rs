use crate::{BackendKind, ClassificationTable, EventTimeout, VboxDriver, VboxError};

/// A facade over a VirtualBox automation bridge.
///
/// `VboxManager` presents the same operational surface as the underlying
/// bridge, with one guarantee on top: every failure raised during
/// construction or event waiting has passed through the classification
/// table before it reaches the caller. A failure the table recognizes
/// arrives as the matching [`VboxError`] variant; any other failure
/// arrives unchanged as [`VboxError::Bridge`].
///
/// Each manager owns its driver exclusively and tears the connection down
/// when dropped. Instances are independent; no state is shared between
/// them beyond the process-wide builtin table.
pub struct VboxManager<Driver>
where
    Driver: VboxDriver,
{
    driver: Driver,
    table: ClassificationTable,
}

impl<Driver> VboxManager<Driver>
where
    Driver: VboxDriver,
{
    /// Connects to the automation bridge using the builtin classification
    /// table.
    ///
    /// A construction failure is fatal to the facade; there is no partial
    /// state to retry from.
    pub fn connect(
        style: Option<BackendKind>,
        params: Option<Driver::Params>,
    ) -> Result<Self, VboxError> {
        Self::connect_with_table(style, params, ClassificationTable::builtin().clone())
    }

    /// Connects to the automation bridge with an explicitly supplied
    /// classification table.
    pub fn connect_with_table(
        style: Option<BackendKind>,
        params: Option<Driver::Params>,
        table: ClassificationTable,
    ) -> Result<Self, VboxError> {
        tracing::trace!(?style, "connecting to the automation bridge");

        let driver = Driver::connect(style, params).map_err(|error| table.classify(error))?;

        Ok(Self { driver, table })
    }

    /// Waits for an event from the bridge's event queue.
    ///
    /// Blocks the calling thread for up to `timeout`; the default timeout
    /// waits indefinitely, which the bridge encodes as zero milliseconds.
    /// The wait cannot be cancelled from this side once entered.
    pub fn wait_for_events(&self, timeout: EventTimeout) -> Result<(), VboxError> {
        tracing::trace!(timeout_ms = timeout.as_millis(), "waiting for events");

        self.driver
            .wait_for_events(timeout)
            .map_err(|error| self.table.classify(error))
    }

    /// Returns the root handle of the virtualization service.
    pub fn root(&self) -> &Driver::Root {
        self.driver.root()
    }

    /// Returns `true` when the bridge talks to the MSCOM backend.
    pub fn is_mscom(&self) -> bool {
        self.driver.kind() == BackendKind::Mscom
    }

    /// Looks up a named constant exported by the bridge.
    pub fn constant(&self, name: &str) -> Result<i64, VboxError> {
        self.driver
            .constants()
            .get(name)
            .ok_or_else(|| VboxError::ConstantNotFound(name.into()))
    }

    /// Returns the driver used by this facade.
    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    /// Returns the classification table this facade applies.
    pub fn table(&self) -> &ClassificationTable {
        &self.table
    }
}

impl<Driver> core::fmt::Debug for VboxManager<Driver>
where
    Driver: VboxDriver,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VboxManager")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl<Driver> Drop for VboxManager<Driver>
where
    Driver: VboxDriver,
{
    fn drop(&mut self) {
        if let Err(error) = self.driver.disconnect() {
            tracing::error!(%error, "Failed to disconnect from the automation bridge");
        }
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod manager_tests;
