use crate::auth::TokenSigner;
use crate::router::now_unix;
use crate::tests::utils::{body_json, car_doc, seed_car, send, signed_in, test_server};
use http::Method;
use serde_json::json;

#[test]
fn writes_require_a_token() {
    let server = test_server();
    let ctx = &server.ctx;

    let resp = send(ctx, Method::POST, "/api/cars", None, Some(car_doc("Kia", "Rio", 2021, 1.0)));
    assert_eq!(resp.status(), 403);
    assert_eq!(body_json(resp)["message"], "Access denied");

    let resp = send(
        ctx,
        Method::POST,
        "/api/cars",
        Some("not.a.token"),
        Some(car_doc("Kia", "Rio", 2021, 1.0)),
    );
    assert_eq!(resp.status(), 401);
    assert_eq!(body_json(resp)["message"], "Invalid token");
}

#[test]
fn expired_or_foreign_tokens_are_rejected() {
    let server = test_server();
    let ctx = &server.ctx;

    let stale = TokenSigner::new(b"test-secret", 1)
        .issue(1, now_unix() - 60)
        .unwrap();
    let resp = send(ctx, Method::DELETE, "/api/cars/1", Some(&stale), None);
    assert_eq!(resp.status(), 401);

    let foreign = TokenSigner::new(b"otra-llave", 3600)
        .issue(1, now_unix())
        .unwrap();
    let resp = send(ctx, Method::DELETE, "/api/cars/1", Some(&foreign), None);
    assert_eq!(resp.status(), 401);
}

#[test]
fn create_list_get_update_delete() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "admin@agencia.mx");

    let id = seed_car(ctx, &token, car_doc("Mazda", "3", 2022, 389_900.0));
    seed_car(ctx, &token, car_doc("Honda", "Civic", 2021, 420_000.0));

    let list = body_json(send(ctx, Method::GET, "/api/cars", None, None));
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0]["marca"], "Mazda");

    let one = body_json(send(ctx, Method::GET, &format!("/api/vehiculos/{id}"), None, None));
    assert_eq!(one["modelo"], "3");
    assert!(one["fechaCreacion"].is_string());

    let resp = send(
        ctx,
        Method::PUT,
        &format!("/api/cars/{id}"),
        Some(&token),
        Some(json!({"precio": 375000, "color": "Rojo"})),
    );
    assert_eq!(resp.status(), 200);
    let updated = body_json(resp);
    assert_eq!(updated["precio"], 375000.0);
    assert_eq!(updated["color"], "Rojo");
    assert_eq!(updated["marca"], "Mazda");

    let resp = send(ctx, Method::DELETE, &format!("/api/cars/{id}"), Some(&token), None);
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp)["message"], "Car deleted");

    let resp = send(ctx, Method::GET, &format!("/api/cars/{id}"), None, None);
    assert_eq!(resp.status(), 404);
}

#[test]
fn missing_ids_are_not_found() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "admin@agencia.mx");

    assert_eq!(send(ctx, Method::GET, "/api/cars/999", None, None).status(), 404);
    assert_eq!(send(ctx, Method::GET, "/api/cars/abc", None, None).status(), 404);
    assert_eq!(
        send(ctx, Method::PUT, "/api/cars/999", Some(&token), Some(json!({"precio": 1}))).status(),
        404
    );
    assert_eq!(
        send(ctx, Method::DELETE, "/api/cars/999", Some(&token), None).status(),
        404
    );
}

#[test]
fn invalid_documents_are_rejected() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "admin@agencia.mx");

    let resp = send(ctx, Method::POST, "/api/cars", Some(&token), Some(json!({"marca": "Kia"})));
    assert_eq!(resp.status(), 400);
}

#[test]
fn facet_endpoints_are_distinct() {
    let server = test_server();
    let ctx = &server.ctx;
    let token = signed_in(ctx, "admin@agencia.mx");

    seed_car(ctx, &token, car_doc("Toyota", "Corolla", 2020, 300_000.0));
    seed_car(ctx, &token, car_doc("Audi", "A3", 2023, 650_000.0));
    seed_car(ctx, &token, car_doc("Toyota", "Yaris", 2023, 280_000.0));

    let brands = body_json(send(ctx, Method::GET, "/api/vehiculos/marcas", None, None));
    assert_eq!(brands, json!(["Toyota", "Audi"]));

    let years = body_json(send(ctx, Method::GET, "/api/vehiculos/a%C3%B1os", None, None));
    assert_eq!(years, json!([2023, 2020]));

    let types = body_json(send(ctx, Method::GET, "/api/vehiculos/tipos", None, None));
    assert_eq!(types, json!(["Sedán"]));
}

#[test]
fn reads_can_be_locked_down() {
    let mut server = test_server();
    server.ctx.require_auth_for_reads = true;
    let ctx = &server.ctx;

    assert_eq!(send(ctx, Method::GET, "/api/vehiculos", None, None).status(), 403);

    let token = signed_in(ctx, "lector@agencia.mx");
    assert_eq!(
        send(ctx, Method::GET, "/api/vehiculos", Some(&token), None).status(),
        200
    );
}

#[test]
fn unknown_api_route_is_json_404() {
    let server = test_server();
    let resp = send(&server.ctx, Method::GET, "/api/nada", None, None);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["message"], "Not found");
}
