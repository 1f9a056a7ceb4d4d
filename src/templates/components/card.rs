use crate::domain::format::{format_currency, format_mileage};
use crate::domain::Listing;
use maud::{html, Markup};

/// Catalog tile for one listing.
pub fn vehicle_card(listing: &Listing) -> Markup {
    html! {
        article class="tarjeta-vehiculo" data-id=(listing.id) {
            div class="tarjeta-imagen" {
                img src=(listing.primary_image()) alt=(listing.display_name()) loading="lazy";
                @if listing.featured {
                    span class="etiqueta-destacado" { "Destacado" }
                }
                @if listing.is_new {
                    span class="etiqueta-nuevo" { "Nuevo" }
                }
            }
            div class="tarjeta-contenido" {
                div class="tarjeta-header" {
                    h3 class="vehiculo-titulo" { (listing.display_name()) }
                    span class="vehiculo-año" { (listing.year) }
                }
                p class="vehiculo-version" { (listing.trim.as_deref().unwrap_or("")) }
                div class="vehiculo-especificaciones" {
                    span { (listing.engine.as_deref().unwrap_or("N/A")) }
                    span { (listing.transmission.as_deref().unwrap_or("N/A")) }
                    span { (format_mileage(listing.mileage)) }
                }
                (price_block(listing))
                div class="tarjeta-acciones" {
                    a class="btn btn-secundario" href={ "/autos/" (listing.id) } { "Ver Detalles" }
                }
            }
        }
    }
}

/// Current price, with the struck previous price and discount when there is one.
pub fn price_block(listing: &Listing) -> Markup {
    html! {
        div class="vehiculo-precio" {
            @if let Some(prev) = listing.previous_price {
                span class="precio-anterior" { (format_currency(prev)) }
            }
            span class="precio-actual" { (format_currency(listing.price)) }
            @if let Some(pct) = listing.discount_percent() {
                span class="descuento" { "-" (pct) "%" }
            }
        }
    }
}
