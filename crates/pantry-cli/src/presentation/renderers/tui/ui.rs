use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders},
};

use super::app::{BrowseApp, Focus};
use crate::presentation::views::tui::{
    CartPanelView, CategoryTabsView, FilterPanelView, RecipeGridView, StatusBarView,
};

struct Panes {
    tabs: Rect,
    filters: Rect,
    recipes: Rect,
    cart: Rect,
    status: Rect,
}

// [Tabs] / [Filters | Recipes | Cart] / [Status]
fn panes(area: Rect) -> Panes {
    let [tabs, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .areas(area);
    let [filters, recipes, cart] = Layout::horizontal([
        Constraint::Length(28),
        Constraint::Min(24),
        Constraint::Length(34),
    ])
    .areas(body);

    Panes {
        tabs,
        filters,
        recipes,
        cart,
        status,
    }
}

/// Inner size of the recipe pane for a terminal of `area`
pub fn recipes_viewport(area: Rect) -> (u16, u16) {
    let inner = Block::default().borders(Borders::ALL).inner(panes(area).recipes);
    (inner.width, inner.height)
}

pub fn draw(f: &mut Frame, app: &mut BrowseApp) {
    let panes = panes(f.area());
    let (width, height) = recipes_viewport(f.area());
    app.set_viewport(width, height);

    let app = &*app;
    let focus = app.focus();

    f.render_widget(
        CategoryTabsView::new(app.tabs(), app.tab_cursor(), focus == Focus::Tabs),
        panes.tabs,
    );
    f.render_widget(
        FilterPanelView::new(
            app.groups(),
            app.checked(),
            app.filter_cursor(),
            focus == Focus::Filters,
        ),
        panes.filters,
    );
    f.render_widget(
        RecipeGridView {
            placed: app.placed(),
            cards: app.cards(),
            index: app.card_index(),
            expanded: app.expanded(),
            in_cart: app.in_cart(),
            colors: app.colors(),
            selected: app.selected_card_id(),
            scroll: app.scroll(),
            focused: focus == Focus::Recipes,
        },
        panes.recipes,
    );
    f.render_widget(
        CartPanelView::new(app.cart(), app.cart_cursor(), focus == Focus::Cart),
        panes.cart,
    );

    let status = app.status_bar();
    f.render_widget(StatusBarView::new(&status), panes.status);
}
