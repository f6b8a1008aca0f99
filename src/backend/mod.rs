//! Reference data for the two solute families.
//!
//! Rows are static and read-only; everything numeric that has no closed
//! form goes through [`Table::lookup`].

pub mod data;
pub mod table;

pub use table::{Column, Row, Table};
