//! Interactive browser state.
//!
//! The app owns the [`Browser`] and mirrors what it publishes: every
//! mutation goes through the browser, and the resulting [`BrowserEvent`]s
//! update the cached view models. Card layout is recomputed at most once
//! per tick through the [`RelayoutGate`].

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pantry_engine::{Column, LayoutEngine, LayoutTuning, RelayoutGate};
use pantry_runtime::{
    Browser, BrowserEvent, CatalogSource, ChannelSubscriber, ClipboardSink, CopyOutcome,
    LocaleLoaded, LocaleOutcome, MemoryPrefs, PrefStore, copy_with_fallback, spawn_locale_load,
};
use pantry_types::{Facets, Locale, RecipeId, ViewMode};

use super::measure::{CardItem, TextMeasure};
use crate::presentation::formatters::recipe_count_label;
use crate::presentation::presenters::{
    category_tabs, ingredient_groups, present_cart_entries, present_recipe,
};
use crate::presentation::view_models::{
    CartEntryViewModel, CategoryTabViewModel, IngredientGroupViewModel, RecipeViewModel,
    StatusBarViewModel, StatusLevel,
};
use crate::presentation::views::console::EMPTY_CART_TEXT;
use crate::presentation::views::tui::{CategoryColors, PlacedCard, card_height};

const TOAST_TTL: Duration = Duration::from_secs(2);
const COLUMN_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tabs,
    Filters,
    Recipes,
    Cart,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Tabs => Focus::Filters,
            Focus::Filters => Focus::Recipes,
            Focus::Recipes => Focus::Cart,
            Focus::Cart => Focus::Tabs,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Tabs => Focus::Cart,
            Focus::Filters => Focus::Tabs,
            Focus::Recipes => Focus::Filters,
            Focus::Cart => Focus::Recipes,
        }
    }
}

struct Toast {
    message: String,
    level: StatusLevel,
    shown_at: Instant,
}

/// Collaborators the app talks to besides the browser
pub struct BrowseDeps {
    pub source: Arc<dyn CatalogSource>,
    pub clipboard: Box<dyn ClipboardSink>,
    pub fallback: Box<dyn ClipboardSink>,
}

pub struct BrowseApp {
    browser: Browser,
    events: Receiver<BrowserEvent>,

    source: Arc<dyn CatalogSource>,
    locales: Vec<Locale>,
    locale_tx: Sender<LocaleLoaded>,
    locale_rx: Receiver<LocaleLoaded>,
    loading_locale: Option<Locale>,

    /// View mode and chosen locale; both last only for this session
    prefs: MemoryPrefs,
    clipboard: Box<dyn ClipboardSink>,
    fallback: Box<dyn ClipboardSink>,

    tabs: Vec<CategoryTabViewModel>,
    groups: Vec<IngredientGroupViewModel>,
    colors: CategoryColors,
    cards: Vec<RecipeViewModel>,
    card_index: HashMap<u32, usize>,
    cart: Vec<CartEntryViewModel>,
    in_cart: BTreeSet<u32>,
    checked: BTreeSet<String>,

    layout: LayoutEngine<u32>,
    gate: RelayoutGate,
    placed: Vec<PlacedCard>,
    viewport: (u16, u16),
    scroll: u16,
    /// Card whose screen row must survive the next relayout
    anchor: Option<(u32, i32)>,
    follow_cursor: bool,
    expanded: BTreeSet<u32>,

    focus: Focus,
    tab_cursor: usize,
    filter_cursor: usize,
    card_cursor: usize,
    cart_cursor: usize,
    toast: Option<Toast>,
    should_quit: bool,
}

impl BrowseApp {
    pub fn new(
        mut browser: Browser,
        deps: BrowseDeps,
        view_mode: ViewMode,
        tuning: LayoutTuning,
    ) -> Self {
        let (tx, events) = mpsc::channel();
        browser.subscribe(Box::new(ChannelSubscriber::new("browse-tui", tx)));
        let (locale_tx, locale_rx) = mpsc::channel();

        let prefs = MemoryPrefs::new();
        if let Err(e) = prefs.set_view_mode(view_mode) {
            tracing::warn!("failed to record view mode: {}", e);
        }
        if let Some(locale) = browser.locale()
            && let Err(e) = prefs.set_locale(locale)
        {
            tracing::warn!("failed to record locale: {}", e);
        }

        let locales = deps.source.locales();
        let cards: Vec<RecipeViewModel> = browser
            .filtered()
            .iter()
            .map(|f| present_recipe(&f.recipe, f.matching_count))
            .collect();
        let cart = present_cart_entries(&browser.cart_view());
        let facets = browser.facets().clone();

        let mut app = Self {
            browser,
            events,
            source: deps.source,
            locales,
            locale_tx,
            locale_rx,
            loading_locale: None,
            prefs,
            clipboard: deps.clipboard,
            fallback: deps.fallback,
            tabs: Vec::new(),
            groups: Vec::new(),
            colors: CategoryColors::new(),
            cards: Vec::new(),
            card_index: HashMap::new(),
            cart,
            in_cart: BTreeSet::new(),
            checked: BTreeSet::new(),
            layout: LayoutEngine::new(tuning),
            gate: RelayoutGate::new(),
            placed: Vec::new(),
            viewport: (0, 0),
            scroll: 0,
            anchor: None,
            follow_cursor: false,
            expanded: BTreeSet::new(),
            focus: Focus::Recipes,
            tab_cursor: 0,
            filter_cursor: 0,
            card_cursor: 0,
            cart_cursor: 0,
            toast: None,
            should_quit: false,
        };
        app.in_cart = app.browser.cart().ids().iter().map(|id| id.get()).collect();
        app.apply_facets(&facets);
        app.set_cards(cards);
        app
    }

    // --------------------------------------------------------
    // Accessors used by the draw code
    // --------------------------------------------------------

    pub fn tabs(&self) -> &[CategoryTabViewModel] {
        &self.tabs
    }

    pub fn groups(&self) -> &[IngredientGroupViewModel] {
        &self.groups
    }

    pub fn colors(&self) -> &CategoryColors {
        &self.colors
    }

    pub fn cards(&self) -> &[RecipeViewModel] {
        &self.cards
    }

    pub fn card_index(&self) -> &HashMap<u32, usize> {
        &self.card_index
    }

    pub fn cart(&self) -> &[CartEntryViewModel] {
        &self.cart
    }

    pub fn in_cart(&self) -> &BTreeSet<u32> {
        &self.in_cart
    }

    pub fn checked(&self) -> &BTreeSet<String> {
        &self.checked
    }

    pub fn expanded(&self) -> &BTreeSet<u32> {
        &self.expanded
    }

    pub fn placed(&self) -> &[PlacedCard] {
        &self.placed
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn tab_cursor(&self) -> usize {
        self.tab_cursor
    }

    pub fn filter_cursor(&self) -> usize {
        self.filter_cursor
    }

    pub fn cart_cursor(&self) -> usize {
        self.cart_cursor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn prefs(&self) -> &dyn PrefStore {
        &self.prefs
    }

    pub fn relayout_runs(&self) -> u64 {
        self.gate.runs()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.prefs.view_mode().unwrap_or_default()
    }

    pub fn selected_card_id(&self) -> Option<u32> {
        self.cards.get(self.card_cursor).map(|card| card.id)
    }

    pub fn status_bar(&self) -> StatusBarViewModel {
        StatusBarViewModel {
            recipe_count: recipe_count_label(self.cards.len()),
            locale: self
                .browser
                .locale()
                .map(|locale| locale.display_name().to_string()),
            view_mode: self.view_mode().as_str().to_string(),
            loading: self
                .loading_locale
                .as_ref()
                .map(|locale| format!("Loading {}…", locale.display_name())),
            toast: self
                .toast
                .as_ref()
                .map(|toast| (toast.message.clone(), toast.level)),
        }
    }

    // --------------------------------------------------------
    // Tick
    // --------------------------------------------------------

    /// Inner size of the recipe pane; a width change needs a relayout
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        if width != self.viewport.0 {
            self.gate.request();
        }
        self.viewport = (width, height);
    }

    pub fn tick(&mut self) {
        self.pump_locale();
        self.pump_events();

        if self.gate.take() {
            self.relayout();
        }

        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.shown_at.elapsed() >= TOAST_TTL)
        {
            self.toast = None;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Char('c') => self.copy_cart(),
            KeyCode::Char('d') => self.browser.deselect_all(),
            KeyCode::Char('v') => self.toggle_view_mode(),
            KeyCode::Char('l') => self.cycle_locale(),
            code => match self.focus {
                Focus::Tabs => self.handle_tabs_key(code),
                Focus::Filters => self.handle_filters_key(code),
                Focus::Recipes => self.handle_recipes_key(code),
                Focus::Cart => self.handle_cart_key(code),
            },
        }

        self.pump_events();
    }

    fn handle_tabs_key(&mut self, code: KeyCode) {
        let target = match code {
            KeyCode::Left | KeyCode::Char('h') => self.tab_cursor.saturating_sub(1),
            KeyCode::Right => (self.tab_cursor + 1).min(self.tabs.len().saturating_sub(1)),
            _ => return,
        };
        if target == self.tab_cursor {
            return;
        }
        self.tab_cursor = target;
        if let Some(tab) = self.tabs.get(target) {
            let label = tab.label.clone();
            self.browser.set_category(&label);
        }
    }

    fn handle_filters_key(&mut self, code: KeyCode) {
        let count: usize = self.groups.iter().map(|g| g.ingredients.len()).sum();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.filter_cursor = self.filter_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.filter_cursor = (self.filter_cursor + 1).min(count.saturating_sub(1));
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let name = self
                    .groups
                    .iter()
                    .flat_map(|g| g.ingredients.iter())
                    .nth(self.filter_cursor)
                    .cloned();
                if let Some(name) = name {
                    if self.browser.toggle_ingredient(&name) {
                        self.checked.insert(name);
                    } else {
                        self.checked.remove(&name);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_recipes_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.move_card_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_card_cursor(1),
            KeyCode::Left | KeyCode::Char('h') => self.jump_column(Column::Left),
            KeyCode::Right => self.jump_column(Column::Right),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_expanded(),
            KeyCode::Char('a') => self.add_selected_to_cart(),
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(id) = self.selected_card_id() {
                    self.browser.remove_from_cart(RecipeId::new(id));
                }
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(self.viewport.1);
                self.clamp_scroll();
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(self.viewport.1),
            KeyCode::Home => {
                self.card_cursor = 0;
                self.scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_cart_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cart_cursor = self.cart_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cart_cursor = (self.cart_cursor + 1).min(self.cart.len().saturating_sub(1));
            }
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                if let Some(entry) = self.cart.get(self.cart_cursor) {
                    let id = RecipeId::new(entry.id);
                    self.browser.remove_from_cart(id);
                }
            }
            _ => {}
        }
    }

    // --------------------------------------------------------
    // Actions
    // --------------------------------------------------------

    fn add_selected_to_cart(&mut self) {
        let Some(id) = self.selected_card_id() else {
            return;
        };
        if !self.browser.add_to_cart(RecipeId::new(id)) && self.in_cart.contains(&id) {
            self.show_toast("Already on the shopping list", StatusLevel::Info);
        }
    }

    fn toggle_expanded(&mut self) {
        let Some(id) = self.selected_card_id() else {
            return;
        };
        let offset = self
            .placed_card(id)
            .map(|card| i32::from(card.top) - i32::from(self.scroll))
            .unwrap_or(0);

        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self.anchor = Some((id, offset));
        self.gate.request();
    }

    fn toggle_view_mode(&mut self) {
        let mode = self.view_mode().toggled();
        if let Err(e) = self.prefs.set_view_mode(mode) {
            tracing::warn!("failed to record view mode: {}", e);
        }
        self.follow_cursor = true;
        self.gate.request();
    }

    fn copy_cart(&mut self) {
        if self.browser.cart().is_empty() {
            self.show_toast(EMPTY_CART_TEXT, StatusLevel::Info);
            return;
        }

        let text = self.browser.export_cart();
        let outcome = copy_with_fallback(self.clipboard.as_mut(), self.fallback.as_mut(), &text);
        let level = match &outcome {
            CopyOutcome::Copied => StatusLevel::Success,
            CopyOutcome::Saved(_) => StatusLevel::Warning,
            CopyOutcome::Failed(_) => StatusLevel::Error,
        };
        self.show_toast(outcome.message(), level);
    }

    /// Request the next locale in discovery order. A newer request makes
    /// any load still in flight stale.
    fn cycle_locale(&mut self) {
        if self.locales.is_empty() {
            self.show_toast("No localized catalogs found", StatusLevel::Info);
            return;
        }

        let current = self.loading_locale.as_ref().or(self.browser.locale());
        let next = match current.and_then(|c| self.locales.iter().position(|l| l == c)) {
            Some(i) => (i + 1) % self.locales.len(),
            None => 0,
        };
        let locale = self.locales[next].clone();

        let ticket = self.browser.begin_locale_switch(locale.clone());
        tracing::info!(%locale, "switching locale");
        self.loading_locale = Some(locale);
        let _worker = spawn_locale_load(Arc::clone(&self.source), ticket, self.locale_tx.clone());
    }

    fn show_toast(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.toast = Some(Toast {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        });
    }

    // --------------------------------------------------------
    // Event mirroring
    // --------------------------------------------------------

    fn pump_locale(&mut self) {
        while let Ok(loaded) = self.locale_rx.try_recv() {
            let requested = loaded.ticket.locale().clone();
            match self.browser.finish_locale_switch(loaded) {
                Ok(LocaleOutcome::Applied(locale)) => {
                    self.loading_locale = None;
                    if let Err(e) = self.prefs.set_locale(&locale) {
                        tracing::warn!("failed to record locale: {}", e);
                    }
                    self.show_toast(
                        format!("Switched to {}", locale.display_name()),
                        StatusLevel::Success,
                    );
                }
                Ok(LocaleOutcome::Stale) => {}
                Err(e) => {
                    self.loading_locale = None;
                    tracing::warn!(locale = %requested, "locale switch failed: {}", e);
                    self.show_toast(
                        format!("Could not load {}", requested.display_name()),
                        StatusLevel::Error,
                    );
                }
            }
        }
    }

    fn pump_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                BrowserEvent::CatalogReplaced { recipe_count, facets } => {
                    tracing::debug!(recipe_count, "catalog replaced");
                    self.expanded.clear();
                    self.layout.reset();
                    self.apply_facets(&facets);
                }
                BrowserEvent::FilteredChanged(filtered) => {
                    let cards = filtered
                        .iter()
                        .map(|f| present_recipe(&f.recipe, f.matching_count))
                        .collect();
                    self.set_cards(cards);
                }
                BrowserEvent::CartChanged { ids, items } => {
                    self.in_cart = ids.iter().map(|id| id.get()).collect();
                    self.cart = present_cart_entries(&items);
                    self.cart_cursor = self.cart_cursor.min(self.cart.len().saturating_sub(1));
                }
                BrowserEvent::SelectionCleared => self.checked.clear(),
            }
        }
    }

    fn apply_facets(&mut self, facets: &Facets) {
        self.tabs = category_tabs(facets);
        self.groups = ingredient_groups(facets);
        self.colors = self
            .tabs
            .iter()
            .filter_map(|tab| tab.color.map(|slot| (tab.label.clone(), slot)))
            .collect();

        let category = &self.browser.selection().category;
        self.tab_cursor = self
            .tabs
            .iter()
            .position(|tab| &tab.label == category)
            .unwrap_or(0);
        self.filter_cursor = 0;
    }

    fn set_cards(&mut self, cards: Vec<RecipeViewModel>) {
        self.card_index = cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.id, i))
            .collect();
        let present = &self.card_index;
        self.expanded.retain(|id| present.contains_key(id));
        self.cards = cards;
        self.card_cursor = 0;
        self.scroll = 0;
        self.gate.request();
    }

    // --------------------------------------------------------
    // Layout and scrolling
    // --------------------------------------------------------

    fn column_width(&self) -> u16 {
        match self.view_mode() {
            ViewMode::Grid => self.viewport.0.saturating_sub(COLUMN_GAP) / 2,
            ViewMode::List => self.viewport.0,
        }
    }

    fn relayout(&mut self) {
        let view_mode = self.view_mode();
        let column_width = self.column_width();
        let text_width = usize::from(column_width.saturating_sub(2));

        let items: Vec<CardItem> = self
            .cards
            .iter()
            .map(|model| CardItem {
                model,
                expanded: self.expanded.contains(&model.id),
            })
            .collect();
        let assignment = match view_mode {
            ViewMode::Grid => self.layout.layout(&items, &TextMeasure::new(text_width)),
            ViewMode::List => self.layout.stack(&items),
        };

        let gap = self.layout.tuning().gap.max(0.0).round() as u16;
        let mut placed = Vec::with_capacity(items.len());
        for column in [Column::Left, Column::Right] {
            let x = match column {
                Column::Left => 0,
                Column::Right => column_width + COLUMN_GAP,
            };
            let mut top: u16 = 0;
            for id in assignment.column(column) {
                let Some(model) = self.card_index.get(id).and_then(|&i| self.cards.get(i)) else {
                    continue;
                };
                let height = card_height(model, text_width, self.expanded.contains(id));
                placed.push(PlacedCard {
                    id: *id,
                    x,
                    width: column_width,
                    top,
                    height,
                });
                top = top.saturating_add(height).saturating_add(gap);
            }
        }
        self.placed = placed;
        tracing::trace!(cards = self.placed.len(), ?view_mode, "relayout");

        if let Some((id, offset)) = self.anchor.take() {
            if let Some(card) = self.placed_card(id) {
                let scroll = (i32::from(card.top) - offset).max(0);
                self.scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
            }
        }
        if std::mem::take(&mut self.follow_cursor) {
            self.ensure_cursor_visible();
        }
        self.clamp_scroll();
    }

    fn placed_card(&self, id: u32) -> Option<PlacedCard> {
        self.placed.iter().find(|card| card.id == id).copied()
    }

    fn content_height(&self) -> u16 {
        self.placed
            .iter()
            .map(PlacedCard::bottom)
            .max()
            .unwrap_or(0)
    }

    fn clamp_scroll(&mut self) {
        let max = self.content_height().saturating_sub(self.viewport.1);
        self.scroll = self.scroll.min(max);
    }

    fn ensure_cursor_visible(&mut self) {
        let Some(card) = self.selected_card_id().and_then(|id| self.placed_card(id)) else {
            return;
        };
        let height = self.viewport.1;
        if card.top < self.scroll {
            self.scroll = card.top;
        } else if card.bottom() > self.scroll.saturating_add(height) {
            self.scroll = card.bottom().saturating_sub(height).min(card.top);
        }
    }

    fn move_card_cursor(&mut self, delta: isize) {
        if self.cards.is_empty() {
            return;
        }
        let last = self.cards.len() - 1;
        self.card_cursor = self.card_cursor.saturating_add_signed(delta).min(last);
        self.ensure_cursor_visible();
    }

    /// Move to the card in `column` whose top is closest to the current one
    fn jump_column(&mut self, column: Column) {
        let Some(current) = self.selected_card_id().and_then(|id| self.placed_card(id)) else {
            return;
        };
        let on_left = current.x == 0;
        if on_left == (column == Column::Left) {
            return;
        }

        let target = self
            .placed
            .iter()
            .filter(|card| (card.x == 0) == (column == Column::Left))
            .min_by_key(|card| card.top.abs_diff(current.top))
            .map(|card| card.id);

        if let Some(index) = target.and_then(|id| self.card_index.get(&id).copied()) {
            self.card_cursor = index;
            self.ensure_cursor_visible();
        }
    }
}
