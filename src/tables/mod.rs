//! Static lookup tables. Built once as `&'static` data and never re-derived per call.

pub mod dignities;
pub mod rulerships;
pub mod traits;
pub mod variants;

#[cfg(test)]
#[path = "../../tests/src_inline/tables/tests.rs"]
mod tests;
