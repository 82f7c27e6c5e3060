//! # Navigation State
//!
//! Which screen is showing and the data it carries.
//!
//! ```text
//! Navigator
//! └── screen: Screen
//!     ├── Registration { form, error }   // raw fields to re-show + last error
//!     ├── List
//!     ├── Details(Product)                // owned snapshot of the selection
//!     └── Statistics
//! ```
//!
//! The selected product only exists inside `Screen::Details`, so there is no
//! way to hold a selection on any other screen. State changes only happen
//! through `Navigator::dispatch` in action.rs.

use std::fmt;

use crate::core::inventory::InventoryStore;
use crate::core::product::Product;
use crate::core::validation::{ProductForm, ValidationError};

/// Discriminant-only view of [`Screen`], for titles and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Registration,
    List,
    Details,
    Statistics,
}

impl ScreenId {
    pub fn label(self) -> &'static str {
        match self {
            ScreenId::Registration => "Register Product",
            ScreenId::List => "Products",
            ScreenId::Details => "Product Details",
            ScreenId::Statistics => "Statistics",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Registration {
        form: ProductForm,
        error: Option<ValidationError>,
    },
    List,
    Details(Product),
    Statistics,
}

impl Screen {
    /// A fresh, empty registration form.
    pub fn registration() -> Self {
        Screen::Registration {
            form: ProductForm::default(),
            error: None,
        }
    }

    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Registration { .. } => ScreenId::Registration,
            Screen::List => ScreenId::List,
            Screen::Details(_) => ScreenId::Details,
            Screen::Statistics => ScreenId::Statistics,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::registration()
    }
}

/// What the current screen needs in order to render.
#[derive(Debug, PartialEq)]
pub enum RenderData<'a> {
    Registration {
        form: &'a ProductForm,
        error: Option<ValidationError>,
    },
    List(&'a [Product]),
    Details(&'a Product),
    Statistics {
        total_value: f64,
        product_count: usize,
    },
}

/// The navigation state machine. Starts on the registration screen.
#[derive(Debug, Default)]
pub struct Navigator {
    pub(crate) screen: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_id(&self) -> ScreenId {
        self.screen.id()
    }

    /// The product being inspected. `Some` only on the details screen.
    pub fn selected_product(&self) -> Option<&Product> {
        match &self.screen {
            Screen::Details(product) => Some(product),
            _ => None,
        }
    }

    /// Build render data for the current screen. Details never reads the
    /// store; it renders the snapshot taken at selection time.
    pub fn render_data<'a>(&'a self, store: &'a InventoryStore) -> RenderData<'a> {
        match &self.screen {
            Screen::Registration { form, error } => RenderData::Registration {
                form,
                error: *error,
            },
            Screen::List => RenderData::List(store.list()),
            Screen::Details(product) => RenderData::Details(product),
            Screen::Statistics => RenderData::Statistics {
                total_value: store.total_value(),
                product_count: store.len(),
            },
        }
    }
}
