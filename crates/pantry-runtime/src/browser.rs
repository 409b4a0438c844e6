use crate::locale_switch::{LocaleLoaded, LocaleOutcome, LocaleSwitcher, LocaleTicket};
use crate::{Error, Result};
use pantry_engine::{Cart, CartItemView, FilteredRecipe, filter_recipes};
use pantry_types::{
    Catalog, Facets, IngredientSelection, Locale, Recipe, RecipeId, SelectionState,
    normalize_label,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::mpsc::Sender;

/// Change notifications published after each mutation
#[derive(Debug, Clone)]
pub enum BrowserEvent {
    /// A new catalog is active; facets drive tabs and the ingredient panel
    CatalogReplaced { recipe_count: usize, facets: Facets },
    FilteredChanged(Vec<FilteredRecipe>),
    /// Authoritative cart id set plus the re-rendered shopping list
    CartChanged {
        ids: BTreeSet<RecipeId>,
        items: Vec<CartItemView>,
    },
    /// Ingredient controls must clear in the same operation
    SelectionCleared,
}

pub trait Subscriber: Send {
    fn name(&self) -> &str;
    fn notify(&mut self, event: &BrowserEvent);
}

/// Forwards every event into an mpsc channel
pub struct ChannelSubscriber {
    name: String,
    tx: Sender<BrowserEvent>,
}

impl ChannelSubscriber {
    pub fn new(name: impl Into<String>, tx: Sender<BrowserEvent>) -> Self {
        Self {
            name: name.into(),
            tx,
        }
    }
}

impl Subscriber for ChannelSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn notify(&mut self, event: &BrowserEvent) {
        if self.tx.send(event.clone()).is_err() {
            tracing::debug!(subscriber = %self.name, "receiver dropped, event discarded");
        }
    }
}

/// Single owner of catalog, selection and cart.
///
/// Every mutation goes through a method here; each one recomputes what it
/// invalidates and notifies subscribers before returning.
pub struct Browser {
    catalog: Catalog,
    locale: Option<Locale>,
    selection: SelectionState,
    cart: Cart,
    filtered: Vec<FilteredRecipe>,
    subscribers: Vec<Box<dyn Subscriber>>,
    switcher: LocaleSwitcher,
}

impl Browser {
    pub fn new(catalog: Catalog) -> Self {
        let selection = SelectionState::default();
        let filtered = filter_recipes(&catalog, &selection.ingredients, &selection.category);
        Self {
            catalog,
            locale: None,
            selection,
            cart: Cart::new(),
            filtered,
            subscribers: Vec::new(),
            switcher: LocaleSwitcher::new(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn Subscriber>) {
        tracing::debug!(subscriber = subscriber.name(), "subscriber registered");
        self.subscribers.push(subscriber);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn facets(&self) -> &Facets {
        self.catalog.facets()
    }

    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn filtered(&self) -> &[FilteredRecipe] {
        &self.filtered
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn set_category(&mut self, label: &str) {
        self.selection.category = normalize_label(label);
        self.refilter();
    }

    pub fn set_ingredients<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selection.ingredients = IngredientSelection::from_names(names);
        self.refilter();
        self.publish_cart();
    }

    /// Returns true when `name` is selected afterwards
    pub fn toggle_ingredient(&mut self, name: &str) -> bool {
        let selected = self.selection.ingredients.toggle(name);
        self.refilter();
        self.publish_cart();
        selected
    }

    pub fn deselect_all(&mut self) {
        self.selection.ingredients.clear();
        self.emit(BrowserEvent::SelectionCleared);
        self.refilter();
        self.publish_cart();
    }

    /// Swap in a new catalog. The only path that resets the selection.
    pub fn reload_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.selection = SelectionState::default();
        self.cart.rebase(&self.catalog);
        tracing::info!(recipes = self.catalog.len(), "catalog replaced");

        self.emit(BrowserEvent::CatalogReplaced {
            recipe_count: self.catalog.len(),
            facets: self.catalog.facets().clone(),
        });
        self.emit(BrowserEvent::SelectionCleared);
        self.refilter();
        self.publish_cart();
    }

    /// Add the catalog recipe with `id`; false when unknown or already present
    pub fn add_to_cart(&mut self, id: RecipeId) -> bool {
        match self.catalog.get(id).cloned() {
            Some(recipe) => self.add_recipe_to_cart(recipe),
            None => {
                tracing::warn!(%id, "add to cart: no such recipe");
                false
            }
        }
    }

    pub fn add_recipe_to_cart(&mut self, recipe: Arc<Recipe>) -> bool {
        let added = self.cart.add(recipe, &self.catalog);
        if added {
            self.publish_cart();
        }
        added
    }

    pub fn remove_from_cart(&mut self, id: RecipeId) -> bool {
        let removed = self.cart.remove(id);
        if removed {
            self.publish_cart();
        }
        removed
    }

    pub fn cart_view(&self) -> Vec<CartItemView> {
        self.cart.render(&self.selection.ingredients)
    }

    pub fn export_cart(&self) -> String {
        self.cart.export_text(&self.selection.ingredients)
    }

    /// Start a locale switch; older tickets become stale
    pub fn begin_locale_switch(&mut self, locale: Locale) -> LocaleTicket {
        self.switcher.begin(locale)
    }

    /// Apply a finished locale load.
    ///
    /// A failed load leaves catalog, locale and selection untouched.
    pub fn finish_locale_switch(&mut self, loaded: LocaleLoaded) -> Result<LocaleOutcome> {
        if !self.switcher.is_current(&loaded.ticket) {
            tracing::debug!(
                locale = %loaded.ticket.locale(),
                generation = loaded.ticket.generation(),
                "dropping stale locale load"
            );
            return Ok(LocaleOutcome::Stale);
        }

        let locale = loaded.ticket.locale().clone();
        match loaded.result {
            Ok(catalog) => {
                self.locale = Some(locale.clone());
                self.reload_catalog(catalog);
                Ok(LocaleOutcome::Applied(locale))
            }
            Err(source) => {
                tracing::warn!(%locale, "locale switch failed: {}", source);
                Err(Error::LocaleLoad {
                    locale,
                    source: Box::new(source),
                })
            }
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter_recipes(
            &self.catalog,
            &self.selection.ingredients,
            &self.selection.category,
        );
        self.emit(BrowserEvent::FilteredChanged(self.filtered.clone()));
    }

    fn publish_cart(&mut self) {
        let event = BrowserEvent::CartChanged {
            ids: self.cart.ids(),
            items: self.cart_view(),
        };
        self.emit(event);
    }

    fn emit(&mut self, event: BrowserEvent) {
        for subscriber in &mut self.subscribers {
            subscriber.notify(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_types::Ingredient;
    use std::sync::mpsc::{self, Receiver};

    fn breakfast_dinner() -> Catalog {
        Catalog::new(vec![
            Recipe::new(1, "A")
                .with_categories(["breakfast"])
                .with_ingredient(Ingredient::new("egg", "2", "dairy"))
                .with_ingredient(Ingredient::new("milk", "1 cup", "dairy")),
            Recipe::new(2, "B")
                .with_categories(["dinner"])
                .with_ingredient(Ingredient::new("egg", "1", "dairy"))
                .with_ingredient(Ingredient::new("rice", "200g", "grain")),
        ])
    }

    fn subscribed(catalog: Catalog) -> (Browser, Receiver<BrowserEvent>) {
        let mut browser = Browser::new(catalog);
        let (tx, rx) = mpsc::channel();
        browser.subscribe(Box::new(ChannelSubscriber::new("test", tx)));
        (browser, rx)
    }

    fn names(filtered: &[FilteredRecipe]) -> Vec<&str> {
        filtered.iter().map(|f| f.recipe.name.as_str()).collect()
    }

    #[test]
    fn test_category_then_ingredient_end_to_end() {
        let mut browser = Browser::new(breakfast_dinner());

        browser.set_category("breakfast");
        browser.set_ingredients(["egg"]);
        assert_eq!(names(browser.filtered()), vec!["A"]);
        assert_eq!(browser.filtered()[0].matching_count, Some(1));

        browser.set_category("all");
        assert_eq!(names(browser.filtered()), vec!["A", "B"]);
        assert!(browser.filtered().iter().all(|f| f.matching_count == Some(1)));
    }

    #[test]
    fn test_reload_resets_selection() {
        let mut browser = Browser::new(breakfast_dinner());
        browser.set_ingredients(["egg"]);
        browser.set_category("breakfast");

        browser.reload_catalog(breakfast_dinner());

        assert_eq!(browser.selection().category, "all");
        assert!(browser.selection().ingredients.is_empty());
        assert_eq!(browser.filtered().len(), 2);
    }

    #[test]
    fn test_cart_events_carry_id_set() {
        let (mut browser, rx) = subscribed(breakfast_dinner());

        assert!(browser.add_to_cart(RecipeId::new(2)));
        assert!(!browser.add_to_cart(RecipeId::new(2)));
        assert!(!browser.add_to_cart(RecipeId::new(99)));

        let events: Vec<BrowserEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 1);
        match &events[0] {
            BrowserEvent::CartChanged { ids, items } => {
                assert_eq!(*ids, BTreeSet::from([RecipeId::new(2)]));
                assert_eq!(items[0].title, "B");
            }
            other => panic!("unexpected event: {:?}", other),
        }

        assert!(browser.remove_from_cart(RecipeId::new(2)));
        assert!(matches!(
            rx.try_recv(),
            Ok(BrowserEvent::CartChanged { ids, .. }) if ids.is_empty()
        ));
    }

    #[test]
    fn test_deselect_all_clears_controls_then_refilters() {
        let (mut browser, rx) = subscribed(breakfast_dinner());
        browser.toggle_ingredient("rice");
        rx.try_iter().for_each(drop);

        browser.deselect_all();

        let events: Vec<BrowserEvent> = rx.try_iter().collect();
        assert!(matches!(events[0], BrowserEvent::SelectionCleared));
        assert!(matches!(&events[1], BrowserEvent::FilteredChanged(list) if list.len() == 2));
        assert!(matches!(events[2], BrowserEvent::CartChanged { .. }));
    }

    #[test]
    fn test_category_change_does_not_touch_cart() {
        let (mut browser, rx) = subscribed(breakfast_dinner());

        browser.set_category("dinner");

        let events: Vec<BrowserEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], BrowserEvent::FilteredChanged(list) if list.len() == 1));
    }

    #[test]
    fn test_cart_view_follows_selection() {
        let mut browser = Browser::new(breakfast_dinner());
        browser.add_to_cart(RecipeId::new(1));
        browser.set_ingredients(["egg"]);

        assert_eq!(browser.export_cart(), "A\n- 1 cup milk");
    }

    #[test]
    fn test_stale_locale_result_is_dropped() {
        let mut browser = Browser::new(breakfast_dinner());
        let old = browser.begin_locale_switch(Locale::new("fr"));
        let _new = browser.begin_locale_switch(Locale::new("nl"));

        let outcome = browser
            .finish_locale_switch(LocaleLoaded {
                ticket: old,
                result: Ok(Catalog::new(Vec::new())),
            })
            .unwrap();

        assert_eq!(outcome, LocaleOutcome::Stale);
        assert_eq!(browser.catalog().len(), 2);
    }

    #[test]
    fn test_failed_locale_switch_keeps_state() {
        let mut browser = Browser::new(breakfast_dinner()).with_locale(Locale::new("en"));
        browser.set_ingredients(["egg"]);
        let ticket = browser.begin_locale_switch(Locale::new("fr"));

        let result = browser.finish_locale_switch(LocaleLoaded {
            ticket,
            result: Err(Error::Config("boom".to_string())),
        });

        assert!(matches!(result, Err(Error::LocaleLoad { .. })));
        assert_eq!(browser.locale(), Some(&Locale::new("en")));
        assert!(browser.selection().ingredients.contains("egg"));
    }

    #[test]
    fn test_applied_locale_switch_reloads() {
        let mut browser = Browser::new(breakfast_dinner());
        browser.set_category("dinner");
        let ticket = browser.begin_locale_switch(Locale::new("fr"));

        let outcome = browser
            .finish_locale_switch(LocaleLoaded {
                ticket,
                result: Ok(Catalog::new(vec![Recipe::new(1, "Omelette")])),
            })
            .unwrap();

        assert_eq!(outcome, LocaleOutcome::Applied(Locale::new("fr")));
        assert_eq!(browser.selection().category, "all");
        assert_eq!(browser.catalog().len(), 1);
    }
}
