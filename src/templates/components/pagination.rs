use crate::domain::pagination::{PageControl, PageWindow};
use maud::{html, Markup};

/// Page links. `href` builds the URL for a page number so the caller keeps
/// its own filter and sort parameters.
pub fn pagination_nav(window: &PageWindow, href: &dyn Fn(usize) -> String) -> Markup {
    html! {
        @if !window.is_empty() {
            nav class="paginacion" aria-label="Paginación" {
                @match window.prev {
                    Some(p) => a class="btn-pagina" href=(href(p)) { "« Anterior" },
                    None => span class="btn-pagina deshabilitado" { "« Anterior" },
                }
                @for control in &window.controls {
                    @match control {
                        PageControl::Page { number, current: true } => {
                            span class="btn-pagina activo" aria-current="page" { (number) }
                        }
                        PageControl::Page { number, current: false } => {
                            a class="btn-pagina" href=(href(*number)) { (number) }
                        }
                        PageControl::Ellipsis => span class="puntos" { "..." },
                    }
                }
                @match window.next {
                    Some(p) => a class="btn-pagina" href=(href(p)) { "Siguiente »" },
                    None => span class="btn-pagina deshabilitado" { "Siguiente »" },
                }
            }
        }
    }
}
