use std::collections::BTreeSet;

use crate::domain::{
    ComparisonSet, Facets, FilterInputs, FilterState, Listing, QuoteRecord, SortCriterion, User,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Everything the UI shows, owned by [`App`](crate::client::App). Read it
/// through the accessors; only the controller mutates it.
#[derive(Debug, Default)]
pub struct AppState {
    pub(super) listings: Vec<Listing>,
    pub(super) filtered: Vec<Listing>,
    pub(super) facets: Facets,
    pub(super) filter_inputs: FilterInputs,
    pub(super) filter: FilterState,
    pub(super) sort: Option<SortCriterion>,
    pub(super) page: usize,
    pub(super) comparison: ComparisonSet,
    pub(super) session: Option<Session>,
    pub(super) favorites: BTreeSet<String>,
    pub(super) quotes: Vec<QuoteRecord>,
    pub(super) selected: Option<Listing>,
}

impl AppState {
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// The filtered (and sorted) view, all pages.
    pub fn filtered(&self) -> &[Listing] {
        &self.filtered
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn filter_inputs(&self) -> &FilterInputs {
        &self.filter_inputs
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> Option<SortCriterion> {
        self.sort
    }

    /// 1-based.
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    pub fn comparison(&self) -> &ComparisonSet {
        &self.comparison
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    pub fn selected(&self) -> Option<&Listing> {
        self.selected.as_ref()
    }

    pub(super) fn find(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }
}
