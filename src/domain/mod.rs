//! Domain Layer
//!
//! Pure marketplace logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Basket aggregate, line items, category nodes
//! - `value_objects/` - Immutable value types (ids, totals, vendor groups, weights)
//! - `services/` - Read-only category tree navigation
//! - `ports/` - Interface definitions for infrastructure (clock)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Derived state is recomputed** - Basket totals are a pure function of the item list
//! 3. **Total operations** - Unknown ids and empty searches degrade to no-ops, never errors

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
