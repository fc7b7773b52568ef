//! Observability for schlint.
//! `tracing` crate with `EnvFilter`, levels read from `SCHLINT_LOG`.

pub mod spans;
pub mod setup;

pub use setup::init_tracing;
