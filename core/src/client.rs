//! Stateless HTTP request builder and response parser for the hero API.
//!
//! # Design
//! `HeroClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The transport executes the actual HTTP round-trip in between, keeping
//! this layer deterministic and free of I/O dependencies.

use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Hero, HeroRef, NewHero};

/// Stateless request builder and response parser for the hero API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. [`crate::service::HeroService`] pairs it with an
/// `HttpTransport` to execute the round-trip.
#[derive(Debug, Clone)]
pub struct HeroClient {
    base_url: String,
}

impl HeroClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/heroes", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_hero(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/heroes/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Tolerant lookup: queries the collection with an id filter instead of
    /// addressing the resource directly, so a missing hero comes back as an
    /// empty list rather than a 404.
    pub fn build_find_hero(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/heroes/?id={id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_search_heroes(&self, term: &str) -> HttpRequest {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("name", term)
            .finish();
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/heroes/?{query}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add_hero(&self, input: &NewHero) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/heroes", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_hero(&self, target: impl Into<HeroRef>) -> HttpRequest {
        let id = target.into().id();
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/heroes/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Update targets the collection URL; the hero's id travels in the body.
    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(hero).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/heroes", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// The filter endpoint returns a list; the first element, if any, is the
    /// match.
    pub fn parse_find_hero(&self, response: HttpResponse) -> Result<Option<Hero>, ApiError> {
        check_status(&response, 200)?;
        let heroes: Vec<Hero> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(heroes.into_iter().next())
    }

    pub fn parse_search_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_add_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_delete_hero(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }

    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
