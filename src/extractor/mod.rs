pub mod document;
pub mod plain;
pub mod structured;
pub mod tabular;

pub use document::{DocumentFormat, RawText, UploadedDocument};
