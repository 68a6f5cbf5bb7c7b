use super::ClassificationTable;
use crate::{BridgeError, ErrorKind, StatusCode, VboxError};

const KNOWN: [(StatusCode, ErrorKind); 16] = [
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
    (StatusCode::SESSION_CLOSED, ErrorKind::InvalidVmState),
];

#[test]
fn every_known_status_classifies() {
    let table = ClassificationTable::builtin();

    for (status, kind) in KNOWN {
        // The bridge reports the code as its signed 32-bit reinterpretation.
        let raw = BridgeError::with_status(status.0 as i32, "original message");
        let error = table.classify(raw);

        assert_eq!(error.kind(), Some(kind), "{status}");
        assert_eq!(error.to_string(), "original message", "{status}");
    }
}

#[test]
fn sign_correction_recovers_documented_codes() {
    assert_eq!(
        StatusCode::from_signed(-0x7f44_ffff),
        StatusCode::OBJECT_NOT_FOUND
    );
}

#[test]
fn session_closed_collapses_to_invalid_vm_state() {
    let table = ClassificationTable::builtin();

    assert_eq!(
        table.lookup(StatusCode::INVALID_VM_STATE),
        Some(ErrorKind::InvalidVmState)
    );
    assert_eq!(
        table.lookup(StatusCode::SESSION_CLOSED),
        Some(ErrorKind::InvalidVmState)
    );
}

#[test]
fn unknown_status_passes_through() {
    let table = ClassificationTable::builtin();

    let error = table.classify(BridgeError::with_status(-1, "mystery failure"));

    match error {
        VboxError::Bridge(inner) => {
            assert_eq!(inner.status(), Some(-1));
            assert_eq!(inner.message(), "mystery failure");
        }
        other => panic!("unexpected classification: {other:?}"),
    }
}

#[test]
fn missing_status_passes_through() {
    let table = ClassificationTable::builtin();

    let error = table.classify(BridgeError::new("no status attached"));

    assert_eq!(error.kind(), None);
    assert_eq!(error.to_string(), "no status attached");
}

#[test]
fn classified_errors_report_their_canonical_status() {
    let table = ClassificationTable::builtin();

    let error = table.classify(BridgeError::with_status(
        StatusCode::OBJECT_NOT_FOUND.0 as i32,
        "no such machine",
    ));

    assert_eq!(error.status(), Some(StatusCode::OBJECT_NOT_FOUND));

    // The alias keeps the canonical code of its category.
    let error = table.classify(BridgeError::with_status(
        StatusCode::SESSION_CLOSED.0 as i32,
        "session is closed",
    ));

    assert_eq!(error.status(), Some(StatusCode::INVALID_VM_STATE));
}

#[test]
fn cause_chain_survives_classification() {
    let table = ClassificationTable::builtin();

    let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "settings file missing");
    let raw = BridgeError::with_status(StatusCode::FILE_ERROR.0 as i32, "cannot read machine")
        .with_source(cause);

    let error = table.classify(raw);

    let source = std::error::Error::source(&error).expect("source");
    assert_eq!(source.to_string(), "settings file missing");
}

#[test]
fn custom_tables_replace_the_builtin_mapping() {
    let table = ClassificationTable::from_entries([]);

    assert!(table.is_empty());

    let error = table.classify(BridgeError::with_status(
        StatusCode::VM_ERROR.0 as i32,
        "would normally classify",
    ));

    assert_eq!(error.kind(), None);
}

#[test]
fn builtin_table_is_complete() {
    let table = ClassificationTable::builtin();

    assert_eq!(table.len(), KNOWN.len());
}
