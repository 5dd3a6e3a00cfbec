//! Export tests
//!
//! Full snapshot-to-artifact runs through the `Exporter`:
//! - XMI document content
//! - Code archive content, packaging and re-reading

pub mod tests_code_archive;
pub mod tests_xmi;
