//! Crate-level behavior tests across splitters and post-processing.
