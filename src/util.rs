//! Shared utility modules used across Pilum components.

pub mod bits;
pub mod edit_table;
