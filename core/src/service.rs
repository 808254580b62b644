//! Request/fallback wrapper around the hero API.
//!
//! # Design
//! `HeroService` is the recovery boundary: each public method issues exactly
//! one network call through the transport, appends one outcome line to the
//! shared [`MessageLog`], and on any failure returns the operation's
//! fallback value instead of an error. Callers never see an `ApiError`.
//! Calls are independent; the only shared state is the log, so any number
//! of calls may be in flight concurrently.

use crate::client::HeroClient;
use crate::error::ApiError;
use crate::messages::MessageLog;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{Hero, HeroRef, NewHero};

/// Data-access service for heroes.
///
/// Generic over the transport so tests can substitute a canned
/// implementation; production code uses [`ReqwestTransport`] via
/// [`HeroService::new`].
pub struct HeroService<T> {
    client: HeroClient,
    transport: T,
    messages: MessageLog,
}

impl HeroService<ReqwestTransport> {
    pub fn new(base_url: &str, messages: MessageLog) -> Self {
        Self::with_transport(base_url, ReqwestTransport::new(), messages)
    }
}

impl<T: HttpTransport> HeroService<T> {
    pub fn with_transport(base_url: &str, transport: T, messages: MessageLog) -> Self {
        Self {
            client: HeroClient::new(base_url),
            transport,
            messages,
        }
    }

    /// The log this service appends outcome lines to.
    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// All heroes. Falls back to an empty list.
    pub async fn list_heroes(&self) -> Vec<Hero> {
        match self.try_list_heroes().await {
            Ok(heroes) => {
                self.log("fetched heroes");
                heroes
            }
            Err(err) => self.recover("list_heroes", Vec::new(), err),
        }
    }

    /// One hero by id; a missing id is a failure (404). Falls back to `None`.
    pub async fn get_hero(&self, id: u64) -> Option<Hero> {
        match self.try_get_hero(id).await {
            Ok(hero) => {
                self.log(format!("fetched hero id={id}"));
                Some(hero)
            }
            Err(err) => self.recover(&format!("get_hero id={id}"), None, err),
        }
    }

    /// One hero by id via the collection filter; a missing id is an empty
    /// result, not a failure. Falls back to `None` only on transport or
    /// server errors.
    pub async fn find_hero(&self, id: u64) -> Option<Hero> {
        match self.try_find_hero(id).await {
            Ok(Some(hero)) => {
                self.log(format!("fetched hero id={id}"));
                Some(hero)
            }
            Ok(None) => {
                self.log(format!("did not find hero id={id}"));
                None
            }
            Err(err) => self.recover(&format!("find_hero id={id}"), None, err),
        }
    }

    /// Heroes whose name matches `term`. A blank term short-circuits to an
    /// empty list without touching the network or the log. Falls back to an
    /// empty list.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        match self.try_search_heroes(term).await {
            Ok(heroes) => {
                self.log(format!("found heroes matching \"{term}\""));
                heroes
            }
            Err(err) => self.recover("search_heroes", Vec::new(), err),
        }
    }

    /// Add a hero; the returned record carries the backend-assigned id.
    /// Falls back to `None`.
    pub async fn add_hero(&self, input: NewHero) -> Option<Hero> {
        match self.try_add_hero(&input).await {
            Ok(hero) => {
                self.log(format!("added hero id={}", hero.id));
                Some(hero)
            }
            Err(err) => self.recover("add_hero", None, err),
        }
    }

    /// Delete a hero given either its id or the full record. Returns whether
    /// the deletion succeeded; falls back to `false`.
    pub async fn delete_hero(&self, target: impl Into<HeroRef>) -> bool {
        let id = target.into().id();
        match self.try_delete_hero(id).await {
            Ok(()) => {
                self.log(format!("deleted hero id={id}"));
                true
            }
            Err(err) => self.recover(&format!("delete_hero id={id}"), false, err),
        }
    }

    /// Update a hero in place; the id travels in the body. Falls back to
    /// `None`.
    pub async fn update_hero(&self, hero: &Hero) -> Option<Hero> {
        match self.try_update_hero(hero).await {
            Ok(updated) => {
                self.log(format!("updated hero id={}", hero.id));
                Some(updated)
            }
            Err(err) => self.recover(&format!("update_hero id={}", hero.id), None, err),
        }
    }

    async fn try_list_heroes(&self) -> Result<Vec<Hero>, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_list_heroes())
            .await?;
        self.client.parse_list_heroes(response)
    }

    async fn try_get_hero(&self, id: u64) -> Result<Hero, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_get_hero(id))
            .await?;
        self.client.parse_get_hero(response)
    }

    async fn try_find_hero(&self, id: u64) -> Result<Option<Hero>, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_find_hero(id))
            .await?;
        self.client.parse_find_hero(response)
    }

    async fn try_search_heroes(&self, term: &str) -> Result<Vec<Hero>, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_search_heroes(term))
            .await?;
        self.client.parse_search_heroes(response)
    }

    async fn try_add_hero(&self, input: &NewHero) -> Result<Hero, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_add_hero(input)?)
            .await?;
        self.client.parse_add_hero(response)
    }

    async fn try_delete_hero(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .transport
            .execute(self.client.build_delete_hero(id))
            .await?;
        self.client.parse_delete_hero(response)
    }

    async fn try_update_hero(&self, hero: &Hero) -> Result<Hero, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_update_hero(hero)?)
            .await?;
        self.client.parse_update_hero(response)
    }

    /// Shared failure handler: one log entry naming the operation, one
    /// `tracing` event for the developer trace, then the fallback value.
    fn recover<V>(&self, operation: &str, fallback: V, err: ApiError) -> V {
        tracing::warn!(operation, error = %err, "hero request failed");
        self.log(format!("{operation} failed: {err}"));
        fallback
    }

    fn log(&self, message: impl Into<String>) {
        self.messages.add(message);
    }
}
