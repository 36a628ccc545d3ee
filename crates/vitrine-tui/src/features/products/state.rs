//! Product list state.
//!
//! The list moves through `Loading -> Idle` once per mount, and
//! `Idle <-> Mutating` around delete actions. Every mutation is followed
//! by a wholesale refetch; the list is never patched incrementally.

use vitrine_core::api::Product;

/// Observable phases of the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// Initial fetch in flight.
    Loading,
    /// List displayed, nothing in flight.
    Idle,
    /// A delete (and its follow-up refetch) in flight.
    Mutating,
}

/// Product list view state.
#[derive(Debug)]
pub struct ProductsState {
    pub phase: ListPhase,
    pub products: Vec<Product>,
    /// Index into `products`; clamped whenever the list changes.
    pub selected: usize,
}

impl Default for ProductsState {
    fn default() -> Self {
        Self {
            phase: ListPhase::Loading,
            products: Vec::new(),
            selected: 0,
        }
    }
}

impl ProductsState {
    /// Replaces the list wholesale and clamps the selection.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.phase = ListPhase::Idle;
        self.clamp_selection();
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.products.is_empty() {
            self.selected = (self.selected + 1).min(self.products.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.products.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.products.len() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("p-{id}"),
            price: 1.0,
            description: String::new(),
        }
    }

    #[test]
    fn test_selection_clamped_after_shrink() {
        let mut state = ProductsState::default();
        state.set_products(vec![product("1"), product("2"), product("3")]);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);

        state.set_products(vec![product("1")]);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_product().unwrap().id, "1");
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = ProductsState::default();
        state.select_prev();
        state.select_next();
        assert_eq!(state.selected, 0);
        assert!(state.selected_product().is_none());
    }
}
