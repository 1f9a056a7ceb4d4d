use crate::domain::financing::{FinancingEstimate, TERM_OPTIONS};
use crate::domain::format::format_currency;
use maud::{html, Markup};

/// Estimate summary plus the form that recomputes it (GET on the same page).
pub fn financing_summary(action: &str, estimate: &FinancingEstimate) -> Markup {
    let pct = (estimate.down_payment_percent * 100.0).round() as i64;

    html! {
        section class="financiamiento" {
            h3 { "Calcula tu financiamiento" }
            form method="get" action=(action) class="form-financiamiento" {
                label for="enganche" { "Enganche (%)" }
                input type="number" id="enganche" name="enganche" min="0" max="100" value=(pct);

                label for="plazo" { "Plazo" }
                select id="plazo" name="plazo" {
                    @for term in TERM_OPTIONS {
                        option value=(term) selected[term == estimate.term_months] { (term) " meses" }
                    }
                }
                button type="submit" class="btn btn-secundario" { "Calcular" }
            }
            dl class="resumen-financiamiento" {
                dt { "Enganche" }
                dd id="monto-enganche" { (format_currency(estimate.down_amount)) }
                dt { "Monto a financiar" }
                dd id="monto-financiar" { (format_currency(estimate.financed_amount)) }
                dt { "Pago mensual" }
                dd id="pago-mensual" { (format_currency(estimate.monthly_payment)) }
                dt { "Total a pagar" }
                dd id="total-pagar" { (format_currency(estimate.total_paid)) }
            }
        }
    }
}
