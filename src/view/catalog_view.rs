//! CatalogView - a listing page's query state, recomputed on every change.

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use super::ResultSummary;
use crate::config::ViewConfig;
use crate::error::SourceError;
use crate::listing::CatalogSnapshot;
use crate::query::{query, PriceRange, QueryParameters, ResultPage, SortKey};
use crate::source::ListingSource;

/// Event emitted with a JSON [`ResultSummary`] after every recompute.
pub const RESULTS_CHANGED: &str = "ResultsChanged";

/// Owns one catalog snapshot and the parameters a user has picked for it.
///
/// Every mutator re-runs the query and returns the fresh page. Filter changes
/// send the user back to page 1, and after each run the page number is
/// clamped into `1..=total_pages` so a narrowed result never strands the user
/// on an empty page. Unlike [`query`], a view never fails on bad paging: a
/// zero page size or number is clamped to 1.
///
/// ## Example
///
/// ```ignore
/// use gem_catalog::{CatalogView, ViewConfig};
///
/// let mut view = CatalogView::new(catalog, &ViewConfig::default());
/// view.set_search_text("sapphire");
/// view.toggle_type("Sapphire");
/// let page = view.set_sort(SortKey::PriceDesc);
/// ```
pub struct CatalogView {
    catalog: CatalogSnapshot,
    params: QueryParameters,
    /// Mount-time parameters; `clear_filters` returns to these.
    defaults: QueryParameters,
    page: ResultPage,
    #[cfg(feature = "emitter")]
    emitter: EventEmitter,
}

impl CatalogView {
    /// Mount a view with the configured defaults.
    pub fn new(catalog: CatalogSnapshot, config: &ViewConfig) -> Self {
        let defaults = QueryParameters::from_config(config);
        Self::mount(catalog, defaults.clone(), defaults)
    }

    /// Mount a view with explicit parameters, e.g. restored from a URL.
    ///
    /// Clearing filters returns to the built-in defaults.
    pub fn with_params(catalog: CatalogSnapshot, params: QueryParameters) -> Self {
        Self::mount(catalog, params, QueryParameters::default())
    }

    /// Mount with explicit parameters, clearing back to `config`'s defaults.
    pub fn with_params_and_config(
        catalog: CatalogSnapshot,
        params: QueryParameters,
        config: &ViewConfig,
    ) -> Self {
        Self::mount(catalog, params, QueryParameters::from_config(config))
    }

    fn mount(catalog: CatalogSnapshot, params: QueryParameters, defaults: QueryParameters) -> Self {
        let page = ResultPage::empty(params.page_number, params.page_size);
        let mut view = Self {
            catalog,
            params,
            defaults,
            page,
            #[cfg(feature = "emitter")]
            emitter: EventEmitter::new(),
        };
        view.recompute();
        view
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    /// The current result page.
    pub fn page(&self) -> &ResultPage {
        &self.page
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::from(&self.page)
    }

    /// Whether the user has narrowed the catalog past the view's mount-time filters.
    pub fn has_filters(&self) -> bool {
        self.params.narrows(&self.defaults)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> &ResultPage {
        self.params.search_text = text.into();
        self.filters_changed()
    }

    /// Set the price filter. Bounds given in either order are accepted.
    pub fn set_price_range(&mut self, min: f64, max: f64) -> &ResultPage {
        self.params.price_range = PriceRange::new(min, max).normalized();
        self.filters_changed()
    }

    /// Add the variety to the type filter, or remove it if already present.
    pub fn toggle_type(&mut self, variety: &str) -> &ResultPage {
        if !self.params.type_filter.remove(variety) {
            self.params.type_filter.insert(variety.to_string());
        }
        self.filters_changed()
    }

    /// Add the color to the color filter, or remove it if already present.
    pub fn toggle_color(&mut self, color: &str) -> &ResultPage {
        if !self.params.color_filter.remove(color) {
            self.params.color_filter.insert(color.to_string());
        }
        self.filters_changed()
    }

    pub fn set_certified_only(&mut self, certified_only: bool) -> &ResultPage {
        self.params.certified_only = certified_only;
        self.filters_changed()
    }

    /// Restore the mount-time filters and return to page 1, keeping the sort and page size.
    pub fn clear_filters(&mut self) -> &ResultPage {
        self.params.reset_filters(&self.defaults);
        self.filters_changed()
    }

    /// Change the sort order. The page number is kept.
    pub fn set_sort(&mut self, sort_key: SortKey) -> &ResultPage {
        self.params.sort_key = sort_key;
        self.recompute()
    }

    /// Jump to a page; out-of-range numbers are clamped.
    pub fn set_page(&mut self, page_number: u32) -> &ResultPage {
        self.params.page_number = page_number;
        self.recompute()
    }

    pub fn next_page(&mut self) -> &ResultPage {
        let next = self.params.page_number.saturating_add(1);
        self.set_page(next)
    }

    pub fn prev_page(&mut self) -> &ResultPage {
        let prev = self.params.page_number.saturating_sub(1);
        self.set_page(prev)
    }

    /// Swap in a new catalog snapshot, keeping the user's parameters.
    pub fn replace_catalog(&mut self, catalog: CatalogSnapshot) -> &ResultPage {
        self.catalog = catalog;
        self.recompute()
    }

    /// Pull a fresh snapshot from `source` and recompute.
    pub fn refresh_from<S: ListingSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<&ResultPage, SourceError> {
        let catalog = source.snapshot()?;
        Ok(self.replace_catalog(catalog))
    }

    /// Register a listener that receives a JSON [`ResultSummary`] after every recompute.
    ///
    /// Listeners run on the emitter's own threads.
    #[cfg(feature = "emitter")]
    pub fn on_results<F>(&mut self, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(RESULTS_CHANGED, listener);
    }

    fn filters_changed(&mut self) -> &ResultPage {
        self.params.page_number = 1;
        self.recompute()
    }

    fn recompute(&mut self) -> &ResultPage {
        self.sanitize_paging();

        let mut page = self.run();
        let last_page = page.total_pages().max(1);
        if self.params.page_number > last_page {
            tracing::warn!(
                requested = self.params.page_number,
                last_page,
                "page out of range, clamping"
            );
            self.params.page_number = last_page;
            page = self.run();
        }

        self.page = page;
        self.notify();
        &self.page
    }

    fn sanitize_paging(&mut self) {
        if self.params.page_size == 0 {
            tracing::warn!("page size of zero, clamping to 1");
            self.params.page_size = 1;
        }
        if self.params.page_number == 0 {
            self.params.page_number = 1;
        }
    }

    fn run(&self) -> ResultPage {
        match query(&self.catalog, &self.params) {
            Ok(page) => page,
            Err(e) => {
                // sanitize_paging rules this out.
                tracing::warn!(error = %e, "catalog query rejected parameters");
                ResultPage::empty(self.params.page_number, self.params.page_size)
            }
        }
    }

    #[cfg(feature = "emitter")]
    fn notify(&mut self) {
        match serde_json::to_string(&ResultSummary::from(&self.page)) {
            Ok(payload) => {
                self.emitter.emit(RESULTS_CHANGED, payload);
            }
            Err(e) => tracing::warn!(error = %e, "failed to encode result summary"),
        }
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&mut self) {}
}
