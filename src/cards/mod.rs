//! Card system: card faces, definitions, and catalog.
//!
//! ## Key Types
//!
//! - `Card`: One of the 22 faces of the Flip 7 deck
//! - `CardCategory`: Number, bonus-add, bonus-multiply, or action
//! - `CardDefinition`: Display data (name, deck count, description)
//! - `CardCatalog`: Lookup from catalog id to definition

pub mod definition;
pub mod registry;

pub use definition::{Card, CardCategory, CardDefinition};
pub use registry::CardCatalog;
