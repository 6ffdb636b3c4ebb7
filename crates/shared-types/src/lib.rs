//! # Shared Types Crate
//!
//! Domain entities, value objects, and the shared error taxonomy used by
//! every subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-subsystem types live here and nowhere
//!   else.
//! - **Trust boundary in the types**: requester identity and timestamps on a
//!   `FoodRequest` can only come from verified claims and the engine clock;
//!   the constructors strip conflicting caller-supplied keys.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{Fields, FoodItem, FoodRequest, RequestView, MISSING_FIELD};
pub use errors::CoreError;
pub use value_objects::{FoodId, FoodStatus, IdentityClaims, RequestId};
