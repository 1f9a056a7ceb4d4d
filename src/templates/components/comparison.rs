use crate::domain::ComparisonTable;
use maud::{html, Markup};

pub fn comparison_table_view(table: &ComparisonTable) -> Markup {
    html! {
        table class="tabla-comparacion" {
            thead {
                tr {
                    th { "Característica" }
                    @for col in &table.columns {
                        th {
                            img src=(col.image) alt=(col.title);
                            div { (col.title) }
                            small { (col.year) }
                        }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        td class="etiqueta" { (row.label) }
                        @for value in &row.values {
                            td { (value) }
                        }
                    }
                }
            }
        }
    }
}
