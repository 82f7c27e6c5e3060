//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: screen name, product count, status line
//! - `ProductDetails`: the selected product
//! - `Statistics`: total inventory value
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TextField`: single-line editable field
//! - `RegistrationForm`: four `TextField`s with focus, emits `Submit`
//! - `ProductList`: selectable rows, emits `Open` / `ShowStatistics` / `NewProduct`
//!
//! Components receive core data as props, never by reaching into the
//! navigator or store themselves.
//!
//! ```text
//! components/
//! ├── mod.rs               (this file)
//! ├── title_bar.rs         (top status bar)
//! ├── text_field.rs        (single-line input)
//! ├── registration_form.rs (registration screen)
//! ├── product_list.rs      (list screen)
//! ├── product_details.rs   (details screen)
//! └── statistics.rs        (statistics screen)
//! ```

pub mod product_details;
pub mod product_list;
pub mod registration_form;
pub mod statistics;
pub mod text_field;
mod title_bar;

pub use product_details::ProductDetails;
pub use product_list::{ListEvent, ProductList, ProductListState};
pub use registration_form::{FormEvent, RegistrationForm};
pub use statistics::Statistics;
pub use title_bar::TitleBar;
