//! Pure logic: no filesystem or process access.

pub mod class_name;
