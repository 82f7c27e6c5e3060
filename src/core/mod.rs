//! # Core Application Logic
//!
//! This module contains Stockpile's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • InventoryStore       │
//!                    │  • validate()           │
//!                    │  • Navigator (screens)  │
//!                    │  • Intent + dispatch()  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`]: The `Product` record
//! - [`validation`]: Raw form input → `Product` or `ValidationError`
//! - [`inventory`]: The append-only `InventoryStore`
//! - [`state`]: The `Navigator` and its `Screen` enum
//! - [`action`]: The `Intent` enum and `Navigator::dispatch`
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod config;
pub mod inventory;
pub mod product;
pub mod state;
pub mod validation;

pub use action::Intent;
pub use inventory::InventoryStore;
pub use product::Product;
pub use state::{Navigator, RenderData, Screen, ScreenId};
pub use validation::{FormField, ProductForm, ValidationError, validate};
