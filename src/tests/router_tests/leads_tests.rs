use crate::responses::attachment::XLSX_CONTENT_TYPE;
use crate::tests::utils::{
    body_bytes, body_json, car_doc, content_type, seed_car, send, signed_in, test_server,
};
use http::Method;
use serde_json::{json, Value};

fn quote_body(car_id: &str) -> Value {
    json!({
        "vehiculoId": car_id,
        "nombre": "Ana López",
        "email": "ana@correo.mx",
        "telefono": "55 1234 5678",
        "ciudad": "CDMX",
        "enganche": "30",
        "plazo": "48"
    })
}

#[test]
fn quote_is_stored_with_estimate() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "ana@correo.mx");
    let id = seed_car(ctx, &token, car_doc("Mazda", "CX-5", 2022, 500_000.0));

    let resp = send(ctx, Method::POST, "/api/cotizaciones", Some(&token), Some(quote_body(&id)));
    assert_eq!(resp.status(), 201);
    let body = body_json(resp);
    assert_eq!(body["message"], "Quote sent");
    assert_eq!(body["financiamiento"]["term_months"], 48);
    assert_eq!(body["financiamiento"]["down_amount"], 150_000.0);

    let resp = send(ctx, Method::GET, "/api/usuarios/cotizaciones", Some(&token), None);
    assert_eq!(resp.status(), 200);
    let quotes = body_json(resp)["cotizaciones"].clone();
    assert_eq!(quotes.as_array().unwrap().len(), 1);
    assert_eq!(quotes[0]["estado"], "pendiente");
    assert_eq!(quotes[0]["vehiculo"]["modelo"], "CX-5");
}

#[test]
fn anonymous_quotes_are_accepted_but_not_listed() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "ana@correo.mx");
    let id = seed_car(ctx, &token, car_doc("Kia", "Rio", 2021, 250_000.0));

    let resp = send(ctx, Method::POST, "/api/cotizaciones", None, Some(quote_body(&id)));
    assert_eq!(resp.status(), 201);

    let quotes = body_json(send(ctx, Method::GET, "/api/usuarios/cotizaciones", Some(&token), None));
    assert!(quotes["cotizaciones"].as_array().unwrap().is_empty());
}

#[test]
fn quote_validation_and_missing_listing() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "ana@correo.mx");
    let id = seed_car(ctx, &token, car_doc("Kia", "Rio", 2021, 250_000.0));

    let mut bad = quote_body(&id);
    bad["telefono"] = json!("12345");
    let resp = send(ctx, Method::POST, "/api/cotizaciones", None, Some(bad));
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["message"], "Enter a valid 10-digit phone number");

    let mut bad = quote_body(&id);
    bad["email"] = json!("ana@");
    assert_eq!(
        send(ctx, Method::POST, "/api/cotizaciones", None, Some(bad)).status(),
        400
    );

    let resp = send(ctx, Method::POST, "/api/cotizaciones", None, Some(quote_body("404")));
    assert_eq!(resp.status(), 404);
}

#[test]
fn quote_with_unoffered_term_is_rejected_and_not_stored() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "ana@correo.mx");
    let id = seed_car(ctx, &token, car_doc("Kia", "Rio", 2021, 250_000.0));

    let mut bad = quote_body(&id);
    bad["plazo"] = json!("80000");
    let resp = send(ctx, Method::POST, "/api/cotizaciones", Some(&token), Some(bad));
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["message"], "term must be between 1 and 60 months, got 80000");

    let quotes = body_json(send(ctx, Method::GET, "/api/usuarios/cotizaciones", Some(&token), None));
    assert!(quotes["cotizaciones"].as_array().unwrap().is_empty());
}

#[test]
fn my_quotes_requires_token() {
    let server = test_server();
    let resp = send(&server.ctx, Method::GET, "/api/usuarios/cotizaciones", None, None);
    assert_eq!(resp.status(), 403);
}

#[test]
fn contact_and_test_drive_leads() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "ana@correo.mx");
    let id = seed_car(ctx, &token, car_doc("Honda", "HR-V", 2023, 480_000.0));

    let resp = send(
        ctx,
        Method::POST,
        "/api/contacto",
        None,
        Some(json!({"nombre": "Luis", "email": "luis@correo.mx", "telefono": "5598765432", "asunto": "ventas", "mensaje": "Quiero información"})),
    );
    assert_eq!(resp.status(), 201);
    assert_eq!(body_json(resp)["message"], "Message sent");

    let resp = send(
        ctx,
        Method::POST,
        "/api/pruebas-manejo",
        Some(&token),
        Some(json!({"vehiculoId": id, "nombre": "Ana", "email": "ana@correo.mx", "telefono": "5512345678", "fecha": "2026-11-02", "hora": "10:00", "sucursal": "Centro"})),
    );
    assert_eq!(resp.status(), 201);
    assert_eq!(body_json(resp)["message"], "Request sent");

    let resp = send(
        ctx,
        Method::POST,
        "/api/contacto",
        None,
        Some(json!({"nombre": "Luis", "email": "sin-arroba", "mensaje": "Hola"})),
    );
    assert_eq!(resp.status(), 400);
}

#[test]
fn favorites_toggle_per_user() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "ana@correo.mx");
    let id = seed_car(ctx, &token, car_doc("Audi", "A3", 2023, 650_000.0));
    let path = format!("/api/usuarios/favoritos/{id}");

    let on = body_json(send(ctx, Method::POST, &path, Some(&token), None));
    assert_eq!(on["favorito"], true);
    assert_eq!(on["favoritos"], json!([id.parse::<i64>().unwrap()]));

    let off = body_json(send(ctx, Method::POST, &path, Some(&token), None));
    assert_eq!(off["favorito"], false);
    assert_eq!(off["favoritos"], json!([]));

    assert_eq!(send(ctx, Method::POST, &path, None, None).status(), 403);
    assert_eq!(
        send(ctx, Method::POST, "/api/usuarios/favoritos/999", Some(&token), None).status(),
        404
    );
}

#[test]
fn comparison_export_is_a_workbook() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "ana@correo.mx");
    let a = seed_car(ctx, &token, car_doc("Mazda", "3", 2022, 389_900.0));
    let b = seed_car(ctx, &token, car_doc("Honda", "Civic", 2021, 420_000.0));

    let resp = send(
        ctx,
        Method::POST,
        "/api/comparacion/pdf",
        None,
        Some(json!({"vehiculoIds": [a, b.parse::<i64>().unwrap()]})),
    );
    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), XLSX_CONTENT_TYPE);
    let disposition = resp.headers()["Content-Disposition"].to_str().unwrap().to_string();
    assert!(disposition.contains("comparacion-vehiculos.xlsx"));
    assert!(body_bytes(resp).starts_with(b"PK"));
}

#[test]
fn comparison_export_needs_two_distinct_listings() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "ana@correo.mx");
    let a = seed_car(ctx, &token, car_doc("Mazda", "3", 2022, 389_900.0));

    let resp = send(
        ctx,
        Method::POST,
        "/api/comparacion/pdf",
        None,
        Some(json!({"ids": [a.clone(), a]})),
    );
    assert_eq!(resp.status(), 400);

    let resp = send(
        ctx,
        Method::POST,
        "/api/comparacion/pdf",
        None,
        Some(json!({"ids": ["1", "77"]})),
    );
    assert_eq!(resp.status(), 404);
}
