//! Shared library behind the single-problem binaries in `solutions/`.
//!
//! - [`permutations`]: lexicographic successor of a sequence.
//! - [`grid`]: character grids and the column-major script decoder.
//! - [`modsum`]: maximum sum of squares modulo `m` over one pick per list.
//! - [`postal`]: postal code validation.
//!
//! [`io`], [`iter`] and [`slice_utils`] are the small helpers those build on.

pub mod error;
pub mod grid;
pub mod io;
pub mod iter;
pub mod logging;
pub mod modsum;
pub mod permutations;
pub mod postal;
pub mod slice_utils;

pub use error::{Error, Result};
