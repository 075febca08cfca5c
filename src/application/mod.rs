//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CategoryQueryUseCase` - Load a category tree and run a navigator query
//! - `BasketReplay` - Apply recorded basket actions to a basket

pub mod basket_replay;
pub mod category_query;

pub use basket_replay::{
    BasketAction, BasketReplay, ItemRef, QuantityChange, ReplayReport, ScriptItem, StepOutcome,
};
pub use category_query::{run_query, CategoryQuery, CategoryQueryResult, CategoryQueryUseCase};
