use crate::domain::comparison::MIN_TO_COMPARE;
use crate::domain::ComparisonTable;
use crate::templates::{components::comparison_table_view, desktop_layout};
use maud::{html, Markup};

/// `table` is `None` while fewer than two vehicles are selected.
pub fn compare_page(table: Option<&ComparisonTable>) -> Markup {
    desktop_layout(
        "Comparar vehículos",
        html! {
            h1 { "Comparar vehículos" }
            @match table {
                Some(t) => {
                    (comparison_table_view(t))
                }
                None => {
                    div class="comparacion-vacia" {
                        p { "Selecciona al menos " (MIN_TO_COMPARE) " vehículos para comparar." }
                        a class="btn btn-primario" href="/" { "Ir al catálogo" }
                    }
                }
            }
        },
    )
}
