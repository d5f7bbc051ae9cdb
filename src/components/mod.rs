//! UI components.

pub mod periodic_table;
