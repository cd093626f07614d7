//! Palette Store - relational persistence for colors.
//!
//! This crate owns the `color` table and everything that touches SQL:
//!
//! - Schema migrations applied at connection open
//! - The [`Color`] entity mapped 1:1 to table columns
//! - [`ColorStore`], a narrow repository over single-row operations
//! - OS-aware default location for the database file
//!
//! # Usage
//!
//! ```rust,no_run
//! use palette_store::{Color, ColorStore};
//!
//! fn main() -> palette_store::Result<()> {
//!     let store = ColorStore::open_in_memory()?;
//!
//!     let saved = store.save(&Color::new("Red", 255, 0, 0))?;
//!     assert!(saved.id.is_some());
//!
//!     let all = store.find_all()?;
//!     println!("{} colors stored", all.len());
//!
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod error;
pub mod paths;
pub mod schema;
pub mod store;

// Re-export main types at crate root
pub use color::Color;
pub use error::{Result, StoreError};
pub use paths::{default_db_path, palette_data_dir};
pub use store::ColorStore;
