//! Communication-table synthesis (component C6).

pub mod tables;

pub use tables::{CommTables, synth_comm_tables};
