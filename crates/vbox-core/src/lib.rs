//! Core functionality of the VirtualBox facade.
//!
//! The VirtualBox automation interface reports failures as bare COM status
//! codes. This crate recovers the documented unsigned code from the signed
//! value surfaced by the bridge, maps it onto a closed set of error
//! categories, and wraps the whole thing behind [`VboxManager`], a facade
//! that guarantees every failure crossing the bridge boundary arrives
//! classified.
//!
//! The bridge itself is abstracted by the [`VboxDriver`] trait; this crate
//! ships no FFI.

mod classifier;
mod constants;
mod core;
mod driver;
mod error;
mod manager;

pub use self::{
    classifier::ClassificationTable,
    constants::ConstantPool,
    core::{BackendKind, EventTimeout, StatusCode},
    driver::VboxDriver,
    error::{BridgeError, ErrorKind, VboxError},
    manager::VboxManager,
};
