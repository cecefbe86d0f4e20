extern crate itertools;
extern crate num_traits;
extern crate thiserror;

#[macro_use]
extern crate log;

pub mod error;
pub mod poly;
pub mod radix;


pub use crate::error::{Error, Result};
pub use crate::poly::polynomial::{PolyPrinter, Polynomial, EPSILON};
