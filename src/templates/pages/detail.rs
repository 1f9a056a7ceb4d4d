use crate::domain::format::format_mileage;
use crate::domain::{FinancingEstimate, Listing};
use crate::templates::{
    components::{financing_summary, price_block},
    desktop_layout,
};
use maud::{html, Markup};

fn attribute_row(label: &str, value: Option<&str>) -> Markup {
    html! {
        div class="especificacion" {
            span class="etiqueta" { (label) }
            span class="valor" { (value.filter(|v| !v.is_empty()).unwrap_or("N/A")) }
        }
    }
}

pub fn detail_page(listing: &Listing, estimate: &FinancingEstimate) -> Markup {
    let title = format!("{} {}", listing.display_name(), listing.year);
    let doors = listing.doors.map(|d| d.to_string());
    let mileage = format_mileage(listing.mileage);

    desktop_layout(
        &title,
        html! {
            article class="detalle-vehiculo" data-id=(listing.id) {
                div class="detalle-galeria" {
                    @if listing.images.is_empty() {
                        img src=(listing.primary_image()) alt=(title);
                    } @else {
                        @for (i, src) in listing.images.iter().enumerate() {
                            img src=(src) alt={ (title) " " (i + 1) } loading="lazy";
                        }
                    }
                }

                div class="detalle-info" {
                    div class="detalle-header" {
                        h1 { (title) }
                        span class="detalle-version" { (listing.trim.as_deref().unwrap_or("")) }
                    }
                    (price_block(listing))

                    section class="detalle-especificaciones" {
                        h3 { "Especificaciones" }
                        div class="especificaciones-grid" {
                            (attribute_row("Motor", listing.engine.as_deref()))
                            (attribute_row("Transmisión", listing.transmission.as_deref()))
                            (attribute_row("Kilometraje", Some(&mileage)))
                            (attribute_row("Combustible", listing.fuel.as_deref()))
                            (attribute_row("Potencia", listing.power.as_deref()))
                            (attribute_row("Color", listing.color.as_deref()))
                            (attribute_row("Puertas", doors.as_deref()))
                        }
                    }

                    @if !listing.features.is_empty() {
                        section class="detalle-caracteristicas" {
                            h3 { "Características" }
                            ul class="lista-caracteristicas" {
                                @for f in &listing.features {
                                    li { (f) }
                                }
                            }
                        }
                    }

                    @if !listing.description.is_empty() {
                        section class="detalle-descripcion" {
                            h3 { "Descripción" }
                            p { (listing.description) }
                        }
                    }

                    (financing_summary(&format!("/autos/{}", listing.id), estimate))

                    div class="detalle-acciones" {
                        a class="btn btn-outline" href={ "/comparar?ids=" (listing.id) } { "Comparar" }
                        a class="btn btn-secundario" href="/" { "Volver al catálogo" }
                    }
                }
            }
        },
    )
}
