// templates/pages/catalog.rs

use crate::domain::{Facets, FilterInputs, Listing, PageWindow, SortCriterion};
use crate::templates::{
    components::{pagination_nav, vehicle_card},
    desktop_layout,
};
use maud::{html, Markup};

pub struct CatalogVm<'a> {
    pub facets: &'a Facets,
    pub inputs: &'a FilterInputs,
    /// `None` keeps catalog (insertion) order.
    pub sort: Option<SortCriterion>,
    /// Listings on the current page only.
    pub page_items: &'a [Listing],
    pub total: usize,
    pub window: &'a PageWindow,
}

/// `/?marca=..&orden=..&pagina=N`, dropping empty parameters.
pub fn catalog_href(inputs: &FilterInputs, sort: Option<SortCriterion>, page: usize) -> String {
    let mut q = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in [
        ("marca", &inputs.brand),
        ("tipo", &inputs.body_type),
        ("año", &inputs.year),
        ("min", &inputs.min_price),
        ("max", &inputs.max_price),
        ("q", &inputs.search),
    ] {
        if !v.trim().is_empty() {
            q.append_pair(k, v);
        }
    }
    if let Some(sort) = sort {
        q.append_pair("orden", sort.key());
    }
    if page > 1 {
        q.append_pair("pagina", &page.to_string());
    }

    let query = q.finish();
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

fn select_filter(id: &str, label: &str, options: &[String], selected: &str) -> Markup {
    html! {
        label for=(id) { (label) }
        select id=(id) name=(id) {
            option value="" { "Todos" }
            @for opt in options {
                option value=(opt) selected[opt == selected] { (opt) }
            }
        }
    }
}

pub fn catalog_page(vm: &CatalogVm) -> Markup {
    let years: Vec<String> = vm.facets.years.iter().map(|y| y.to_string()).collect();
    let href = |page: usize| catalog_href(vm.inputs, vm.sort, page);

    desktop_layout(
        "Catálogo",
        html! {
            h1 { "Catálogo de vehículos" }

            form id="filtros" method="get" action="/" class="filtros" {
                (select_filter("marca", "Marca", &vm.facets.brands, &vm.inputs.brand))
                (select_filter("tipo", "Tipo", &vm.facets.body_types, &vm.inputs.body_type))
                (select_filter("año", "Año", &years, &vm.inputs.year))

                label for="min" { "Precio mínimo" }
                input type="number" id="min" name="min" min="0" value=(vm.inputs.min_price);
                label for="max" { "Precio máximo" }
                input type="number" id="max" name="max" min="0" value=(vm.inputs.max_price);

                label for="q" { "Buscar" }
                input type="search" id="q" name="q" placeholder="Marca, modelo o versión" value=(vm.inputs.search);

                label for="orden" { "Ordenar por" }
                select id="orden" name="orden" {
                    option value="" { "Relevancia" }
                    @for c in SortCriterion::ALL {
                        option value=(c.key()) selected[Some(c) == vm.sort] { (c.label()) }
                    }
                }

                button type="submit" class="btn btn-primario" { "Aplicar filtros" }
                a href="/" class="btn btn-outline" { "Limpiar" }
            }

            p id="contador-resultados" { (vm.total) " vehículos encontrados" }

            @if vm.page_items.is_empty() {
                div class="catalogo-vacio" {
                    h3 { "No se encontraron vehículos" }
                    p { "Intenta ajustar los filtros de búsqueda" }
                }
            } @else {
                section id="catalogo" class="grid-vehiculos" {
                    @for listing in vm.page_items {
                        (vehicle_card(listing))
                    }
                }
                (pagination_nav(vm.window, &href))
            }
        },
    )
}
