use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::client::api::DealershipApi;
use crate::client::debounce::{Debouncer, PRICE_DELAY, SEARCH_DELAY};
use crate::client::error::ClientError;
use crate::client::notify::{Notifier, Toast, ToastKind};
use crate::client::state::{AppState, Session};
use crate::client::storage::{
    load_json, save_json, KeyValueStore, KEY_COMPARISON, KEY_TOKEN, KEY_USER,
};
use crate::client::tasks::{ActionKey, TaskTracker};
use crate::client::views::{CardView, CatalogView, QuoteHistoryRow, Suggestion};
use crate::domain::comparison::{
    comparison_table, ComparisonError, ToggleOutcome, MAX_COMPARISON, MIN_TO_COMPARE,
};
use crate::domain::financing::{
    estimate_financing, percent_from_input, term_from_input, DEFAULT_ANNUAL_RATE,
    DEFAULT_DOWN_PAYMENT_PERCENT, DEFAULT_TERM_MONTHS,
};
use crate::domain::pagination::clamp_page;
use crate::domain::validation::{Field, FieldKind, Form};
use crate::domain::{
    apply_filters, page_count, page_slice, page_window, sort_listings, ComparisonSet,
    ComparisonTable, ContactRequest, Facets, FilterInputs, FilterState, FinancingEstimate,
    Listing, LoginRequest, QuoteRequest, RegisterRequest, SortCriterion, TestDriveRequest, User,
    PAGE_SIZE,
};

pub const MIN_SUGGESTION_CHARS: usize = 2;
pub const MAX_SUGGESTIONS: usize = 5;

const MSG_FIX_FIELDS: &str = "Por favor corrige los campos marcados";

fn optional(v: &str) -> Option<String> {
    let t = v.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// The catalog client: owns the UI state and mediates every user action.
pub struct App<A: DealershipApi, S: KeyValueStore> {
    api: A,
    store: S,
    state: AppState,
    tasks: TaskTracker,
    notifier: Notifier,
    /// Filter form contents as typed, applied when a debouncer fires.
    draft: FilterInputs,
    search_debounce: Debouncer,
    price_debounce: Debouncer,
}

impl<A: DealershipApi, S: KeyValueStore> App<A, S> {
    /// Starts with whatever session is cached in `store`.
    pub fn new(api: A, store: S) -> Self {
        let mut app = Self {
            api,
            store,
            state: AppState::default(),
            tasks: TaskTracker::default(),
            notifier: Notifier::default(),
            draft: FilterInputs::default(),
            search_debounce: Debouncer::new(SEARCH_DELAY),
            price_debounce: Debouncer::new(PRICE_DELAY),
        };
        app.restore_session();
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_loading(&self) -> bool {
        self.tasks.is_loading()
    }

    pub fn tasks(&self) -> &TaskTracker {
        &self.tasks
    }

    pub fn toasts(&mut self, now: Instant) -> &[Toast] {
        self.notifier.visible(now)
    }

    pub fn last_toast(&self) -> Option<&Toast> {
        self.notifier.last()
    }

    pub fn draft(&self) -> &FilterInputs {
        &self.draft
    }

    fn token(&self) -> Option<String> {
        self.store.get(KEY_TOKEN).filter(|t| !t.is_empty())
    }

    fn toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.notifier.push(kind, message);
    }

    // ---------------------------------------------------------------------
    // Catalog
    // ---------------------------------------------------------------------

    /// Replaces the catalog. On failure the previous listings stay put.
    pub fn load_catalog(&mut self) -> Result<(), ClientError> {
        let guard = self.tasks.start(ActionKey::LoadCatalog)?;
        let result = self.api.list_listings();
        if guard.is_cancelled() {
            return Ok(());
        }

        match result {
            Ok(listings) => {
                info!(count = listings.len(), "catalog loaded");
                self.state.listings = listings;
                self.refilter();
                self.restore_comparison();
                self.load_facets();
                Ok(())
            }
            Err(e) => {
                warn!("catalog load failed: {e}");
                self.toast(ToastKind::Error, "Error al cargar el catálogo");
                Err(e)
            }
        }
    }

    fn fetch_facets(&self) -> Result<Facets, ClientError> {
        let _guard = self.tasks.start(ActionKey::LoadFacets)?;
        Ok(Facets {
            brands: self.api.brands()?,
            body_types: self.api.body_types()?,
            years: self.api.years()?,
        })
    }

    /// Server facets, or facets computed from the loaded catalog.
    pub fn load_facets(&mut self) {
        self.state.facets = match self.fetch_facets() {
            Ok(f) => f,
            Err(e) => {
                warn!("facet fetch failed, deriving from catalog: {e}");
                Facets::from_listings(&self.state.listings)
            }
        };
    }

    fn refilter(&mut self) {
        self.state.filtered = apply_filters(&self.state.listings, &self.state.filter);
        if let Some(sort) = self.state.sort {
            sort_listings(&mut self.state.filtered, sort);
        }
        self.state.page = 1;
    }

    /// Rebuilds the filter from scratch and goes back to page 1.
    pub fn apply_filters(&mut self, inputs: FilterInputs) {
        self.search_debounce.cancel();
        self.price_debounce.cancel();

        self.state.filter = FilterState::from_inputs(&inputs);
        self.draft = inputs.clone();
        self.state.filter_inputs = inputs;
        self.refilter();
        debug!(shown = self.state.filtered.len(), "filters applied");
    }

    pub fn clear_filters(&mut self) {
        self.apply_filters(FilterInputs::default());
    }

    /// Reorders the filtered view. The current page is kept.
    pub fn sort_by(&mut self, criterion: SortCriterion) {
        self.state.sort = Some(criterion);
        sort_listings(&mut self.state.filtered, criterion);
    }

    /// Ignores pages outside the current range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let pages = page_count(self.state.filtered.len(), PAGE_SIZE);
        if (1..=pages).contains(&page) {
            self.state.page = page;
            true
        } else {
            false
        }
    }

    pub fn current_page_view(&self) -> CatalogView {
        let total = self.state.filtered.len();
        let page = clamp_page(self.state.page(), total, PAGE_SIZE);

        let cards = page_slice(&self.state.filtered, page, PAGE_SIZE)
            .iter()
            .map(|l| {
                CardView::new(
                    l,
                    self.state.comparison.contains(&l.id),
                    self.state.favorites.contains(&l.id),
                )
            })
            .collect();

        CatalogView {
            cards,
            window: page_window(page, page_count(total, PAGE_SIZE)),
            page,
            total,
        }
    }

    /// Fresh copy from the server, or the cached one if the fetch fails.
    pub fn view_detail(&mut self, id: &str) -> Result<Listing, ClientError> {
        let fetched = {
            let _guard = self.tasks.start(ActionKey::ViewDetail)?;
            self.api.get_listing(id)
        };

        let listing = match fetched {
            Ok(l) => l,
            Err(e) => match self.state.find(id) {
                Some(cached) => {
                    debug!(id, "detail fetch failed, using cached listing: {e}");
                    cached.clone()
                }
                None => {
                    warn!(id, "listing unavailable: {e}");
                    self.toast(ToastKind::Error, "Vehículo no encontrado");
                    return Err(ClientError::NotFound(id.to_string()));
                }
            },
        };

        self.state.selected = Some(listing.clone());
        Ok(listing)
    }

    /// Search-as-you-type over "brand model year trim".
    pub fn suggestions(&self, text: &str) -> Vec<Suggestion> {
        let needle = text.trim().to_lowercase();
        if needle.chars().count() < MIN_SUGGESTION_CHARS {
            return Vec::new();
        }

        self.state
            .listings
            .iter()
            .filter(|l| {
                format!(
                    "{} {} {} {}",
                    l.brand,
                    l.model,
                    l.year,
                    l.trim.as_deref().unwrap_or("")
                )
                .to_lowercase()
                .contains(&needle)
            })
            .take(MAX_SUGGESTIONS)
            .map(|l| Suggestion {
                id: l.id.clone(),
                label: format!("{} {} {}", l.brand, l.model, l.year),
            })
            .collect()
    }

    pub fn on_search_input(&mut self, text: &str, now: Instant) {
        self.draft.search = text.to_string();
        self.search_debounce.trigger(now);
    }

    pub fn on_price_input(&mut self, min: &str, max: &str, now: Instant) {
        self.draft.min_price = min.to_string();
        self.draft.max_price = max.to_string();
        self.price_debounce.trigger(now);
    }

    /// Applies the draft filter once a debounce delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let search = self.search_debounce.fire_if_due(now);
        let price = self.price_debounce.fire_if_due(now);
        if search || price {
            let draft = self.draft.clone();
            self.apply_filters(draft);
            true
        } else {
            false
        }
    }

    // ---------------------------------------------------------------------
    // Comparison
    // ---------------------------------------------------------------------

    fn persist_comparison(&mut self) {
        let ids = self.state.comparison.persisted_ids();
        if let Err(e) = save_json(&mut self.store, KEY_COMPARISON, &ids) {
            warn!("could not save comparison: {e}");
        }
    }

    pub fn toggle_comparison(&mut self, id: &str) -> Result<ToggleOutcome, ClientError> {
        let listing = self
            .state
            .find(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;

        let outcome = self.state.comparison.toggle(&listing);
        self.persist_comparison();

        match outcome {
            Ok(ToggleOutcome::Added) => {
                self.toast(
                    ToastKind::Info,
                    format!("{} agregado a la comparación", listing.display_name()),
                );
                Ok(ToggleOutcome::Added)
            }
            Ok(ToggleOutcome::Removed) => {
                self.toast(
                    ToastKind::Info,
                    format!("{} eliminado de la comparación", listing.display_name()),
                );
                Ok(ToggleOutcome::Removed)
            }
            Err(e) => {
                self.toast(
                    ToastKind::Warning,
                    format!("Solo puedes comparar hasta {MAX_COMPARISON} vehículos"),
                );
                Err(e.into())
            }
        }
    }

    pub fn clear_comparison(&mut self) {
        self.state.comparison.clear();
        self.persist_comparison();
        self.toast(ToastKind::Info, "Comparación limpiada");
    }

    /// Rebuilds the selection from the saved id list against the loaded
    /// catalog. Ids that no longer exist are dropped without complaint.
    pub fn restore_comparison(&mut self) {
        let ids: Vec<String> = load_json(&self.store, KEY_COMPARISON).unwrap_or_default();
        self.state.comparison = ComparisonSet::rehydrate(&ids, &self.state.listings);

        let kept = self.state.comparison.len();
        if kept != ids.len() && !self.state.listings.is_empty() {
            debug!(saved = ids.len(), kept, "stale comparison ids dropped");
            self.persist_comparison();
        }
    }

    pub fn comparison_table(&mut self) -> Result<ComparisonTable, ClientError> {
        comparison_table(self.state.comparison.listings()).map_err(|e| {
            self.notifier.push(
                ToastKind::Warning,
                format!("Agrega al menos {MIN_TO_COMPARE} vehículos para comparar"),
            );
            e.into()
        })
    }

    /// Downloads the comparison export and writes it to `dest`.
    pub fn export_comparison(&mut self, dest: &Path) -> Result<PathBuf, ClientError> {
        if self.state.comparison.len() < MIN_TO_COMPARE {
            self.toast(
                ToastKind::Warning,
                format!("Agrega al menos {MIN_TO_COMPARE} vehículos para comparar"),
            );
            return Err(ComparisonError::TooFew.into());
        }

        let ids = self.state.comparison.persisted_ids();
        let result = {
            let _guard = self.tasks.start(ActionKey::ExportComparison)?;
            self.api
                .export_comparison(self.token().as_deref(), &ids)
                .and_then(|bytes| Ok(fs::write(dest, bytes)?))
        };

        match result {
            Ok(()) => {
                info!(path = %dest.display(), "comparison exported");
                self.toast(ToastKind::Success, "Comparación exportada correctamente");
                Ok(dest.to_path_buf())
            }
            Err(e) => {
                warn!("comparison export failed: {e}");
                self.toast(ToastKind::Error, "Error al exportar la comparación");
                Err(e)
            }
        }
    }

    // ---------------------------------------------------------------------
    // Quotes and leads
    // ---------------------------------------------------------------------

    /// Recomputed locally on every input change; never goes to the server.
    pub fn financing_preview(
        &self,
        listing_id: &str,
        down_payment: &str,
        term: &str,
    ) -> Result<FinancingEstimate, ClientError> {
        let price = self
            .state
            .find(listing_id)
            .or_else(|| self.state.selected.as_ref().filter(|l| l.id == listing_id))
            .map(|l| l.price)
            .ok_or_else(|| ClientError::NotFound(listing_id.to_string()))?;

        estimate_financing(
            price,
            percent_from_input(down_payment),
            term_from_input(term),
            DEFAULT_ANNUAL_RATE,
        )
        .map_err(|e| ClientError::Validation(e.to_string()))
    }

    /// Name, email and phone of the signed-in user, for prefilling forms.
    fn contact_defaults(&self) -> (String, String, String) {
        match self.state.user() {
            Some(u) => (
                u.name.clone().unwrap_or_default(),
                u.email.clone(),
                u.phone.clone().unwrap_or_default(),
            ),
            None => Default::default(),
        }
    }

    pub fn quote_form(&self) -> Form {
        let (name, email, phone) = self.contact_defaults();
        let down = ((DEFAULT_DOWN_PAYMENT_PERCENT * 100.0).round() as u32).to_string();
        Form::new(vec![
            Field::new("nombre", FieldKind::Text, &name).required().max_length(100),
            Field::new("email", FieldKind::Email, &email).required(),
            Field::new("telefono", FieldKind::Tel, &phone).required(),
            Field::new("ciudad", FieldKind::Text, ""),
            Field::new("enganche", FieldKind::Number, &down),
            Field::new("plazo", FieldKind::Select, &DEFAULT_TERM_MONTHS.to_string()),
            Field::new("comentarios", FieldKind::TextArea, "").max_length(500),
        ])
    }

    pub fn submit_quote(&mut self, listing_id: &str, form: &mut Form) -> Result<(), ClientError> {
        if !form.validate() {
            self.toast(ToastKind::Error, MSG_FIX_FIELDS);
            return Err(ClientError::Validation(MSG_FIX_FIELDS.into()));
        }

        let req = QuoteRequest {
            car_id: listing_id.to_string(),
            name: form.value("nombre").trim().to_string(),
            email: form.value("email").trim().to_string(),
            phone: form.value("telefono").trim().to_string(),
            city: optional(form.value("ciudad")),
            down_payment: optional(form.value("enganche")),
            term: optional(form.value("plazo")),
            comments: optional(form.value("comentarios")),
        };

        let result = {
            let _guard = self.tasks.start(ActionKey::SubmitQuote)?;
            self.api.submit_quote(self.token().as_deref(), &req)
        };

        match result {
            Ok(()) => {
                form.clear();
                self.toast(
                    ToastKind::Success,
                    "¡Cotización enviada! Un asesor te contactará pronto.",
                );
                Ok(())
            }
            Err(e) => {
                warn!("quote submission failed: {e}");
                self.toast(
                    ToastKind::Error,
                    "Error al enviar la cotización. Intenta de nuevo.",
                );
                Err(e)
            }
        }
    }

    pub fn contact_form(&self) -> Form {
        let (name, email, phone) = self.contact_defaults();
        Form::new(vec![
            Field::new("nombre", FieldKind::Text, &name).required().max_length(100),
            Field::new("email", FieldKind::Email, &email).required(),
            Field::new("telefono", FieldKind::Tel, &phone).required(),
            Field::new("asunto", FieldKind::Select, "").required(),
            Field::new("mensaje", FieldKind::TextArea, "").required().max_length(1000),
        ])
    }

    pub fn submit_contact(&mut self, form: &mut Form) -> Result<(), ClientError> {
        if !form.validate() {
            self.toast(ToastKind::Error, MSG_FIX_FIELDS);
            return Err(ClientError::Validation(MSG_FIX_FIELDS.into()));
        }

        let req = ContactRequest {
            name: form.value("nombre").trim().to_string(),
            email: form.value("email").trim().to_string(),
            phone: form.value("telefono").trim().to_string(),
            subject: form.value("asunto").trim().to_string(),
            message: form.value("mensaje").trim().to_string(),
        };

        let result = {
            let _guard = self.tasks.start(ActionKey::SubmitContact)?;
            self.api.submit_contact(self.token().as_deref(), &req)
        };

        match result {
            Ok(()) => {
                form.clear();
                self.toast(
                    ToastKind::Success,
                    "¡Mensaje enviado! Te responderemos a la brevedad.",
                );
                Ok(())
            }
            Err(e) => {
                warn!("contact submission failed: {e}");
                self.toast(ToastKind::Error, "Error al enviar el mensaje. Intenta de nuevo.");
                Err(e)
            }
        }
    }

    pub fn test_drive_form(&self) -> Form {
        let (name, email, phone) = self.contact_defaults();
        Form::new(vec![
            Field::new("nombre", FieldKind::Text, &name).required().max_length(100),
            Field::new("email", FieldKind::Email, &email).required(),
            Field::new("telefono", FieldKind::Tel, &phone).required(),
            Field::new("licencia", FieldKind::Text, ""),
            Field::new("fecha", FieldKind::Date, "").required(),
            Field::new("hora", FieldKind::Select, ""),
            Field::new("sucursal", FieldKind::Select, ""),
            Field::new("comentarios", FieldKind::TextArea, "").max_length(500),
        ])
    }

    pub fn submit_test_drive(
        &mut self,
        listing_id: &str,
        form: &mut Form,
    ) -> Result<(), ClientError> {
        if !form.validate() {
            self.toast(ToastKind::Error, MSG_FIX_FIELDS);
            return Err(ClientError::Validation(MSG_FIX_FIELDS.into()));
        }

        let req = TestDriveRequest {
            car_id: listing_id.to_string(),
            name: form.value("nombre").trim().to_string(),
            email: form.value("email").trim().to_string(),
            phone: form.value("telefono").trim().to_string(),
            license: optional(form.value("licencia")),
            date: form.value("fecha").trim().to_string(),
            time: optional(form.value("hora")),
            branch: optional(form.value("sucursal")),
            comments: optional(form.value("comentarios")),
        };

        let result = {
            let _guard = self.tasks.start(ActionKey::SubmitTestDrive)?;
            self.api.submit_test_drive(self.token().as_deref(), &req)
        };

        match result {
            Ok(()) => {
                form.clear();
                self.toast(
                    ToastKind::Success,
                    "¡Solicitud enviada! Te confirmaremos por correo.",
                );
                Ok(())
            }
            Err(e) => {
                warn!("test drive request failed: {e}");
                self.toast(ToastKind::Error, "Error al enviar la solicitud. Intenta de nuevo.");
                Err(e)
            }
        }
    }

    pub fn load_my_quotes(&mut self) -> Result<(), ClientError> {
        let Some(token) = self.token() else {
            self.toast(ToastKind::Info, "Inicia sesión para ver tus cotizaciones");
            return Err(ClientError::SignInRequired);
        };

        let guard = self.tasks.start(ActionKey::LoadQuotes)?;
        let result = self.api.my_quotes(&token);
        if guard.is_cancelled() {
            return Ok(());
        }
        drop(guard);

        match result {
            Ok(quotes) => {
                self.state.quotes = quotes;
                Ok(())
            }
            Err(e) => {
                warn!("quote history failed: {e}");
                self.toast(ToastKind::Error, "Error al cargar las cotizaciones");
                Err(e)
            }
        }
    }

    pub fn quote_history(&self) -> Vec<QuoteHistoryRow> {
        self.state.quotes.iter().map(QuoteHistoryRow::new).collect()
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, ClientError> {
        let Some(token) = self.token() else {
            self.toast(ToastKind::Info, "Inicia sesión para guardar favoritos");
            return Err(ClientError::SignInRequired);
        };

        let result = {
            let _guard = self.tasks.start(ActionKey::ToggleFavorite)?;
            self.api.toggle_favorite(&token, id)
        };

        match result {
            Ok(true) => {
                self.state.favorites.insert(id.to_string());
                self.toast(ToastKind::Success, "Agregado a favoritos");
                Ok(true)
            }
            Ok(false) => {
                self.state.favorites.remove(id);
                self.toast(ToastKind::Info, "Eliminado de favoritos");
                Ok(false)
            }
            Err(e) => {
                warn!("favorite toggle failed: {e}");
                self.toast(ToastKind::Error, "Error al actualizar favoritos");
                Err(e)
            }
        }
    }

    // ---------------------------------------------------------------------
    // Session
    // ---------------------------------------------------------------------

    pub fn login(&mut self, email: &str, password: &str) -> Result<(), ClientError> {
        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let result = {
            let _guard = self.tasks.start(ActionKey::Login)?;
            self.api.login(&req)
        };

        let auth = match result {
            Ok(auth) => auth,
            Err(e) => {
                debug!("login failed: {e}");
                self.toast(ToastKind::Error, "Credenciales incorrectas");
                return Err(e);
            }
        };

        self.store.set(KEY_TOKEN, &auth.token)?;
        if let Err(e) = save_json(&mut self.store, KEY_USER, &auth.user) {
            warn!("could not save profile, dropping token: {e}");
            if let Err(e) = self.store.remove(KEY_TOKEN) {
                warn!("could not drop token: {e}");
            }
            return Err(e);
        }
        info!(user_id = auth.user.id, "signed in");

        self.state.session = Some(Session {
            token: auth.token,
            user: auth.user,
        });
        self.toast(ToastKind::Success, "¡Bienvenido de vuelta!");
        Ok(())
    }

    pub fn register_form(&self) -> Form {
        Form::new(vec![
            Field::new("nombre", FieldKind::Text, "").required().max_length(100),
            Field::new("email", FieldKind::Email, "").required(),
            Field::new("telefono", FieldKind::Tel, ""),
            Field::new("password", FieldKind::Password, "").required().min_length(6),
            Field::new("confirmar", FieldKind::Password, "").required(),
        ])
    }

    /// Creates the account. The user signs in separately afterwards.
    pub fn register(&mut self, form: &mut Form) -> Result<(), ClientError> {
        let mut ok = form.validate();
        let confirm_ok = form.field("confirmar").is_some_and(|f| f.error.is_none());
        if confirm_ok && form.value("password") != form.value("confirmar") {
            form.set_error("confirmar", "Las contraseñas no coinciden");
            ok = false;
        }
        if !ok {
            self.toast(ToastKind::Error, MSG_FIX_FIELDS);
            return Err(ClientError::Validation(MSG_FIX_FIELDS.into()));
        }

        let req = RegisterRequest {
            email: form.value("email").trim().to_string(),
            password: form.value("password").to_string(),
            name: optional(form.value("nombre")),
            phone: optional(form.value("telefono")),
        };

        let result = {
            let _guard = self.tasks.start(ActionKey::Register)?;
            self.api.register(&req)
        };

        match result {
            Ok(()) => {
                form.clear();
                self.toast(
                    ToastKind::Success,
                    "Registro exitoso. Por favor inicia sesión.",
                );
                Ok(())
            }
            Err(e) => {
                let message = match &e {
                    ClientError::Http { message, .. } => message.clone(),
                    _ => "Error en el registro".to_string(),
                };
                self.toast(ToastKind::Error, message);
                Err(e)
            }
        }
    }

    pub fn logout(&mut self) {
        for key in ActionKey::ALL.into_iter().filter(|k| k.is_session_bound()) {
            self.tasks.cancel(key);
        }
        for key in [KEY_TOKEN, KEY_USER] {
            if let Err(e) = self.store.remove(key) {
                warn!("could not clear {key}: {e}");
            }
        }

        self.state.session = None;
        self.state.favorites.clear();
        self.state.quotes.clear();
        info!("signed out");
        self.toast(ToastKind::Info, "Sesión cerrada correctamente");
    }

    /// Picks up a cached session. Returns whether one was found.
    pub fn restore_session(&mut self) -> bool {
        let token = self.token();
        let user: Option<User> = load_json(&self.store, KEY_USER);

        self.state.session = match (token, user) {
            (Some(token), Some(user)) => Some(Session { token, user }),
            _ => None,
        };
        self.state.session.is_some()
    }
}
