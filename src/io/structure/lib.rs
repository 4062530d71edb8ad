//! Reading and writing the things that `spgen-spacegroup` consumes
//! and produces.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;
#[cfg(test)] #[macro_use] extern crate spgen_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;
#[allow(bad_style)]
pub fn FailOk<T>(x: T) -> Result<T, failure::Error> { Ok(x) }

pub mod interchange;
pub mod spacegroups;
