//! A thin, error-translating facade over the VirtualBox automation
//! interface.
//!
//! The automation bridge reports failures as bare COM status codes buried
//! in whatever error object the binding raises. This library recovers the
//! documented unsigned code from the signed value the bridge surfaces,
//! maps it onto a closed set of failure categories, and re-raises the
//! failure as a [`VboxError`] variant that keeps the original message and
//! cause chain intact. Failures the table does not recognize propagate
//! unchanged.
//!
//! [`VboxManager`] is the entry point: a facade generic over a
//! [`VboxDriver`] implementation (the actual COM/XPCOM binding, which this
//! library does not ship) that guarantees every failure crossing the
//! bridge boundary arrives classified.

pub use vbox_core::{
    BackendKind, BridgeError, ClassificationTable, ConstantPool, ErrorKind, EventTimeout,
    StatusCode, VboxDriver, VboxError, VboxManager,
};
