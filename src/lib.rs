//! # Rust Language Tour
//!
//! A fixed sequence of small, independent sections, each printing labeled
//! output that shows one corner of everyday Rust.
//!
//! ## Sections
//!
//! 1. **types** - scalars, enums, money and durations
//! 2. **collections** - arrays, `Vec`, `BTreeMap`, `BTreeSet`, `VecDeque`
//! 3. **shapes** - trait objects and value types
//! 4. **generics** - a generic repository with predicate lookup
//! 5. **queries** - iterator adapters: filter, map, fold, group, sort
//! 6. **async** - Tokio sleep, spawn and join-all
//! 7. **errors** - typed errors, a drop guard and a scoped buffer
//! 8. **files** - write, read back and delete a scratch file
//! 9. **patterns** - `Any` downcasts and range patterns
//! 10. **records** - field-wise equality and copy-with-override
//! 11. **events** - closures and a publish/subscribe point
//!
//! ## Running
//!
//! ```bash
//! cargo run
//! cargo run -- --section queries --section records
//! RUST_LOG=debug cargo run -- --config tour.toml
//! ```

pub mod basics;
pub mod config;
pub mod console;
pub mod error;
pub mod events;
pub mod failures;
pub mod fetch;
pub mod files;
pub mod patterns;
pub mod person;
pub mod query;
pub mod repository;
pub mod shapes;
pub mod tour;

pub use config::TourConfig;
pub use console::Console;
pub use error::{Result, TourError};
pub use tour::{run, Section, TourReport};
