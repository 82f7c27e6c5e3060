//! # Intents
//!
//! Everything a user can do becomes an `Intent`.
//! Filling in the form and pressing Enter? That's `Intent::Submit(form)`.
//! Picking the third row of the list? That's `Intent::SelectProduct(2)`.
//!
//! `Navigator::dispatch()` takes an intent, applies it to the navigation
//! state and the inventory store, and returns the new screen plus the data
//! it needs to render. No rendering or terminal I/O happens here.
//!
//! ```text
//! Navigator + Store + Intent  →  dispatch()  →  (ScreenId, RenderData)
//! ```
//!
//! Transitions:
//!
//! ```text
//!                  Submit (valid) / store.add
//!   Registration ───────────────────────────────► List ◄──────┐
//!     ▲   │ Submit (invalid): stays, error shown  │  │        │ Back
//!     │   └───────────┘                           │  │        │
//!     └──────────────── Back ─────────────────────┘  │   Details / Statistics
//!                                   SelectProduct(i) │        ▲
//!                                   ViewStatistics   └────────┘
//! ```
//!
//! Any intent that has no transition from the current screen is ignored.

use log::{debug, info, warn};

use crate::core::inventory::InventoryStore;
use crate::core::state::{Navigator, RenderData, Screen, ScreenId};
use crate::core::validation::{ProductForm, validate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Registration form submitted with these raw fields.
    Submit(ProductForm),
    /// A row of the product list was chosen, by position in `store.list()`.
    SelectProduct(usize),
    ViewStatistics,
    Back,
}

impl Navigator {
    /// Apply `intent` and return the resulting screen with its render data.
    pub fn dispatch<'a>(
        &'a mut self,
        store: &'a mut InventoryStore,
        intent: Intent,
    ) -> (ScreenId, RenderData<'a>) {
        let from = self.screen_id();
        debug!("Dispatch {:?} on {:?}", intent, from);
        self.apply(store, intent);
        debug!("Screen {:?} -> {:?}", from, self.screen_id());

        let this: &'a Navigator = self;
        let store: &'a InventoryStore = store;
        (this.screen_id(), this.render_data(store))
    }

    fn apply(&mut self, store: &mut InventoryStore, intent: Intent) {
        let next = match (&self.screen, intent) {
            (Screen::Registration { .. }, Intent::Submit(form)) => match validate(&form) {
                Ok(product) => {
                    info!(
                        "Registered product {:?} ({} in store)",
                        product.name,
                        store.len() + 1
                    );
                    store.add(product);
                    Screen::List
                }
                Err(error) => {
                    debug!("Registration rejected: {}", error);
                    Screen::Registration {
                        form,
                        error: Some(error),
                    }
                }
            },
            (Screen::List, Intent::SelectProduct(index)) => match store.get(index) {
                Some(product) => Screen::Details(product.clone()),
                None => {
                    warn!(
                        "Ignoring selection of row {} ({} products listed)",
                        index,
                        store.len()
                    );
                    return;
                }
            },
            (Screen::List, Intent::ViewStatistics) => Screen::Statistics,
            (Screen::List, Intent::Back) => Screen::registration(),
            (Screen::Details(_), Intent::Back) => Screen::List,
            (Screen::Statistics, Intent::Back) => Screen::List,
            (screen, intent) => {
                debug!("No transition for {:?} on {:?}", intent, screen.id());
                return;
            }
        };
        self.screen = next;
    }
}
