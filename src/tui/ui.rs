use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::inventory::InventoryStore;
use crate::core::state::{Navigator, RenderData};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ProductDetails, ProductList, Statistics, TitleBar};

/// The render half of the render/intent boundary: draws whatever the
/// navigator says the current screen needs.
pub fn draw_ui(
    frame: &mut Frame,
    nav: &Navigator,
    store: &InventoryStore,
    tui: &mut TuiState,
    price_decimals: usize,
) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    TitleBar::new(nav.screen_id(), store.len(), tui.status.as_ref()).render(frame, title_area);

    match nav.render_data(store) {
        // Form text lives in the component; it was loaded when the screen was entered
        RenderData::Registration { .. } => tui.form.render(frame, main_area),
        RenderData::List(products) => {
            ProductList::new(&mut tui.list, products).render(frame, main_area)
        }
        RenderData::Details(product) => {
            ProductDetails::new(product, price_decimals).render(frame, main_area)
        }
        RenderData::Statistics {
            total_value,
            product_count,
        } => Statistics {
            total_value,
            product_count,
            price_decimals,
        }
        .render(frame, main_area),
    }
}
