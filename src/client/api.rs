// src/client/api.rs
//
// HTTP only: no state, no UI. The caller passes the bearer token when the
// endpoint should see one.
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use crate::client::error::ClientError;
use crate::config::ClientConfig;
use crate::domain::{
    AuthResponse, ContactRequest, Listing, LoginRequest, QuoteRecord, QuoteRequest,
    RegisterRequest, TestDriveRequest,
};

/// The dealership backend as the catalog client sees it.
pub trait DealershipApi {
    fn list_listings(&self) -> Result<Vec<Listing>, ClientError>;
    fn get_listing(&self, id: &str) -> Result<Listing, ClientError>;
    fn brands(&self) -> Result<Vec<String>, ClientError>;
    fn body_types(&self) -> Result<Vec<String>, ClientError>;
    fn years(&self) -> Result<Vec<i32>, ClientError>;

    fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ClientError>;
    fn register(&self, req: &RegisterRequest) -> Result<(), ClientError>;

    fn submit_quote(&self, token: Option<&str>, req: &QuoteRequest) -> Result<(), ClientError>;
    fn submit_contact(&self, token: Option<&str>, req: &ContactRequest)
        -> Result<(), ClientError>;
    fn submit_test_drive(
        &self,
        token: Option<&str>,
        req: &TestDriveRequest,
    ) -> Result<(), ClientError>;

    fn my_quotes(&self, token: &str) -> Result<Vec<QuoteRecord>, ClientError>;
    /// Returns whether the listing is a favorite afterwards.
    fn toggle_favorite(&self, token: &str, id: &str) -> Result<bool, ClientError>;
    /// The comparison export file, as bytes.
    fn export_comparison(&self, token: Option<&str>, ids: &[String])
        -> Result<Vec<u8>, ClientError>;
}

pub struct HttpApi {
    base_url: String,
    client: Client,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, rb: RequestBuilder, token: Option<&str>) -> Result<Response, ClientError> {
        let rb = match token {
            Some(t) => rb.bearer_auth(t),
            None => rb,
        };
        let resp = rb.send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp.text().unwrap_or_default();
        debug!(status = status.as_u16(), body = %text, "api error");
        Err(ClientError::Http {
            status: status.as_u16(),
            message: error_message(&text)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string()),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T, ClientError> {
        let resp = self.send(self.client.get(self.url(path)), token)?;
        Ok(resp.json()?)
    }

    fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<Response, ClientError> {
        self.send(self.client.post(self.url(path)).json(body), token)
    }
}

/// `message` (or the older `mensaje`) from a JSON error body.
fn error_message(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    v.get("message")
        .or_else(|| v.get("mensaje"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuotesBody {
    Wrapped { cotizaciones: Vec<QuoteRecord> },
    Bare(Vec<QuoteRecord>),
}

#[derive(Deserialize)]
struct FavoriteBody {
    favorito: bool,
}

impl DealershipApi for HttpApi {
    fn list_listings(&self) -> Result<Vec<Listing>, ClientError> {
        self.get_json("/vehiculos", None)
    }

    fn get_listing(&self, id: &str) -> Result<Listing, ClientError> {
        self.get_json(&format!("/vehiculos/{id}"), None)
    }

    fn brands(&self) -> Result<Vec<String>, ClientError> {
        self.get_json("/vehiculos/marcas", None)
    }

    fn body_types(&self) -> Result<Vec<String>, ClientError> {
        self.get_json("/vehiculos/tipos", None)
    }

    fn years(&self) -> Result<Vec<i32>, ClientError> {
        self.get_json("/vehiculos/años", None)
    }

    fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ClientError> {
        Ok(self.post("/auth/login", None, req)?.json()?)
    }

    fn register(&self, req: &RegisterRequest) -> Result<(), ClientError> {
        self.post("/auth/registro", None, req)?;
        Ok(())
    }

    fn submit_quote(&self, token: Option<&str>, req: &QuoteRequest) -> Result<(), ClientError> {
        self.post("/cotizaciones", token, req)?;
        Ok(())
    }

    fn submit_contact(
        &self,
        token: Option<&str>,
        req: &ContactRequest,
    ) -> Result<(), ClientError> {
        self.post("/contacto", token, req)?;
        Ok(())
    }

    fn submit_test_drive(
        &self,
        token: Option<&str>,
        req: &TestDriveRequest,
    ) -> Result<(), ClientError> {
        self.post("/pruebas-manejo", token, req)?;
        Ok(())
    }

    fn my_quotes(&self, token: &str) -> Result<Vec<QuoteRecord>, ClientError> {
        Ok(match self.get_json::<QuotesBody>("/usuarios/cotizaciones", Some(token))? {
            QuotesBody::Wrapped { cotizaciones } => cotizaciones,
            QuotesBody::Bare(list) => list,
        })
    }

    fn toggle_favorite(&self, token: &str, id: &str) -> Result<bool, ClientError> {
        let body: FavoriteBody = self
            .post(&format!("/usuarios/favoritos/{id}"), Some(token), &json!({}))?
            .json()?;
        Ok(body.favorito)
    }

    fn export_comparison(
        &self,
        token: Option<&str>,
        ids: &[String],
    ) -> Result<Vec<u8>, ClientError> {
        let resp = self.post("/comparacion/pdf", token, &json!({ "ids": ids }))?;
        Ok(resp.bytes()?.to_vec())
    }
}
