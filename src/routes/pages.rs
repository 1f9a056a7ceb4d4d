use astra::Request;

use crate::db::cars::{get_car, list_cars};
use crate::domain::comparison::comparison_table;
use crate::domain::financing::{
    estimate_financing, percent_from_input, term_from_input, DEFAULT_ANNUAL_RATE,
};
use crate::domain::pagination::clamp_page;
use crate::domain::{
    apply_filters, page_count, page_slice, page_window, sort_listings, ComparisonSet, Facets,
    FilterInputs, FilterState, SortCriterion, PAGE_SIZE,
};
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::router::{parse_id, parse_query, AppContext};
use crate::templates::pages::{catalog_page, compare_page, detail_page, CatalogVm};

pub fn catalog(req: &Request, ctx: &AppContext) -> ResultResp {
    let q = parse_query(req);
    let param = |k: &str| q.get(k).cloned().unwrap_or_default();

    let inputs = FilterInputs {
        brand: param("marca"),
        body_type: param("tipo"),
        year: param("año"),
        min_price: param("min"),
        max_price: param("max"),
        search: param("q"),
    };
    let sort = q.get("orden").and_then(|s| s.parse::<SortCriterion>().ok());

    let all = ctx.db.with_conn(|conn| list_cars(conn))?;
    let facets = Facets::from_listings(&all);

    let mut shown = apply_filters(&all, &FilterState::from_inputs(&inputs));
    if let Some(sort) = sort {
        sort_listings(&mut shown, sort);
    }

    let requested = q.get("pagina").and_then(|p| p.parse().ok()).unwrap_or(1);
    let page = clamp_page(requested, shown.len(), PAGE_SIZE);
    let window = page_window(page, page_count(shown.len(), PAGE_SIZE));

    html_response(catalog_page(&CatalogVm {
        facets: &facets,
        inputs: &inputs,
        sort,
        page_items: page_slice(&shown, page, PAGE_SIZE),
        total: shown.len(),
        window: &window,
    }))
}

pub fn detail(req: &Request, ctx: &AppContext, id: &str) -> ResultResp {
    let id = parse_id(id)?;
    let listing = ctx
        .db
        .with_conn(|conn| get_car(conn, id))?
        .ok_or(ServerError::NotFound)?;

    let q = parse_query(req);
    let pct = percent_from_input(q.get("enganche").map(String::as_str).unwrap_or(""));
    let term = term_from_input(q.get("plazo").map(String::as_str).unwrap_or(""));
    let estimate = estimate_financing(listing.price, pct, term, DEFAULT_ANNUAL_RATE)
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;

    html_response(detail_page(&listing, &estimate))
}

/// `/comparar?ids=3,7,9`. Unknown ids are skipped, like a stale saved selection.
pub fn compare(req: &Request, ctx: &AppContext) -> ResultResp {
    let q = parse_query(req);
    let ids: Vec<String> = q
        .get("ids")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let all = ctx.db.with_conn(|conn| list_cars(conn))?;
    let selection = ComparisonSet::rehydrate(&ids, &all);
    let table = comparison_table(selection.listings()).ok();

    html_response(compare_page(table.as_ref()))
}
