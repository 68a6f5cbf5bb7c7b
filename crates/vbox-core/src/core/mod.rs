mod backend;
mod status;
mod timeout;

pub use self::{backend::BackendKind, status::StatusCode, timeout::EventTimeout};
