//! Model types for the resources SWAPI exposes.
//!
//! Two collections are covered: [`People`] and [`Film`]. Both are thin,
//! typed views over the raw [`Record`](crate::Record) the server returned,
//! differing only in resource name, accessors, and display formatting.

mod films;
mod people;

pub use films::Film;
pub use people::People;
