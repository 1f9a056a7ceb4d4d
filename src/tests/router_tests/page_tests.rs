use crate::db::cars::insert_car;
use crate::router::AppContext;
use crate::tests::utils::{body_string, car_doc, content_type, send, test_server};
use http::Method;
use scraper::{Html, Selector};

fn seed_many(ctx: &AppContext, n: usize) {
    ctx.db
        .with_conn(|conn| {
            for i in 0..n {
                let brand = if i % 5 == 0 { "Audi" } else { "Nissan" };
                let doc = car_doc(brand, &format!("Modelo {i}"), 2015 + (i % 8) as i32, 200_000.0 + i as f64 * 10_000.0);
                insert_car(conn, &doc, 1_700_000_000 + i as i64)?;
            }
            Ok(())
        })
        .unwrap();
}

fn page(ctx: &AppContext, uri: &str) -> Html {
    let resp = send(ctx, Method::GET, uri, None, None);
    assert_eq!(resp.status(), 200, "GET {uri}");
    assert!(content_type(&resp).starts_with("text/html"));
    Html::parse_document(&body_string(resp))
}

fn count(doc: &Html, css: &str) -> usize {
    doc.select(&Selector::parse(css).unwrap()).count()
}

fn text_of(doc: &Html, css: &str) -> String {
    doc.select(&Selector::parse(css).unwrap())
        .next()
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default()
}

#[test]
fn catalog_paginates_twelve_per_page() {
    let server = test_server();
    seed_many(&server.ctx, 25);

    let first = page(&server.ctx, "/");
    assert_eq!(count(&first, "article.tarjeta-vehiculo"), 12);
    assert_eq!(text_of(&first, "#contador-resultados"), "25 vehículos encontrados");
    assert_eq!(text_of(&first, "[aria-current=page]"), "1");

    let last = page(&server.ctx, "/?pagina=3");
    assert_eq!(count(&last, "article.tarjeta-vehiculo"), 1);
    assert_eq!(text_of(&last, "[aria-current=page]"), "3");
}

#[test]
fn out_of_range_page_falls_back_to_first() {
    let server = test_server();
    seed_many(&server.ctx, 13);

    let doc = page(&server.ctx, "/?pagina=40");
    assert_eq!(count(&doc, "article.tarjeta-vehiculo"), 12);
    assert_eq!(text_of(&doc, "[aria-current=page]"), "1");

    let doc = page(&server.ctx, "/?pagina=2");
    assert_eq!(count(&doc, "article.tarjeta-vehiculo"), 1);
    assert_eq!(text_of(&doc, "[aria-current=page]"), "2");
}

#[test]
fn catalog_filters_and_sorts_from_query() {
    let server = test_server();
    seed_many(&server.ctx, 25);

    let doc = page(&server.ctx, "/?marca=Audi&orden=price-desc");
    assert_eq!(text_of(&doc, "#contador-resultados"), "5 vehículos encontrados");
    assert_eq!(text_of(&doc, "article.tarjeta-vehiculo h3"), "Audi Modelo 20");

    let none = page(&server.ctx, "/?q=zzz");
    assert_eq!(count(&none, "article.tarjeta-vehiculo"), 0);
    assert!(text_of(&none, ".catalogo-vacio").contains("No se encontraron vehículos"));
}

#[test]
fn detail_page_shows_financing() {
    let server = test_server();
    let listing = server
        .ctx
        .db
        .with_conn(|conn| insert_car(conn, &car_doc("Mazda", "CX-5", 2022, 500_000.0), 0))
        .unwrap();

    let doc = page(&server.ctx, &format!("/autos/{}?enganche=20&plazo=36", listing.id));
    assert_eq!(text_of(&doc, "#monto-enganche"), "$100,000.00");
    assert_eq!(text_of(&doc, "#monto-financiar"), "$400,000.00");
    assert!(text_of(&doc, "#pago-mensual").starts_with('$'));
}

#[test]
fn detail_page_rejects_terms_outside_the_offered_range() {
    let server = test_server();
    let listing = server
        .ctx
        .db
        .with_conn(|conn| insert_car(conn, &car_doc("Mazda", "CX-5", 2022, 500_000.0), 0))
        .unwrap();

    for plazo in ["80000", "3000000000", "61"] {
        let uri = format!("/autos/{}?plazo={plazo}", listing.id);
        let resp = send(&server.ctx, Method::GET, &uri, None, None);
        assert_eq!(resp.status(), 400, "GET {uri}");
        assert!(content_type(&resp).starts_with("text/html"));
    }

    page(&server.ctx, &format!("/autos/{}?plazo=60", listing.id));
}

#[test]
fn missing_listing_renders_html_404() {
    let server = test_server();
    let resp = send(&server.ctx, Method::GET, "/autos/999", None, None);
    assert_eq!(resp.status(), 404);
    assert!(content_type(&resp).starts_with("text/html"));
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn compare_page_needs_two_listings() {
    let server = test_server();
    seed_many(&server.ctx, 3);

    let doc = page(&server.ctx, "/comparar?ids=1,3,99");
    assert_eq!(count(&doc, "table.tabla-comparacion"), 1);
    assert_eq!(count(&doc, "table.tabla-comparacion thead th"), 3);

    let doc = page(&server.ctx, "/comparar?ids=2");
    assert_eq!(count(&doc, "table.tabla-comparacion"), 0);
    assert_eq!(count(&doc, ".comparacion-vacia"), 1);
}
