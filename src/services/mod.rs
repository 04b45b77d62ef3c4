//! Service layer for business logic and orchestration.
//!
//! This module sits between the HTTP handlers and the allocator core. Services
//! normalize request data the core expects to be pre-processed (calendar day
//! ordering) and convert results into export formats.

pub mod export;
pub mod generation;

pub use export::timetable_to_csv;
pub use generation::generate_timetable;
