//! High-level glue: configuration files, logging, and the CLI.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate clap;
#[cfg(test)] #[macro_use] extern crate spgen_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;
#[allow(bad_style)]
pub fn FailOk<T>(x: T) -> Result<T, failure::Error> { Ok(x) }

pub mod config;
pub mod cmd;
mod logging;

pub mod entry_points;

pub use crate::config::{Settings, YamlRead};
pub use crate::logging::GlobalLogger;
