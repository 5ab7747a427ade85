//! Dense-matrix workbench: a row-major matrix value type with checked
//! arithmetic, plus the token ingestion and rendering used by the console
//! calculator binary.

//
// Modules
//

pub mod dense;
pub mod dense_serde;
pub mod dims;
pub mod element;
pub mod error;
pub mod reader;
