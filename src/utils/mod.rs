//! Small helpers shared across layers.

pub mod db_error;
