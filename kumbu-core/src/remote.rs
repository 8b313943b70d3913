//! Client for the cloud events API.
//!
//! Mirrors the REST surface the web dashboard consumes: listing a user's
//! events, listing birthdays, and marking an event's 3-day reminder as
//! delivered. All calls carry bearer auth when a token is configured.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::config::KumbuConfig;
use crate::error::{KumbuError, KumbuResult};
use crate::event::{Birthday, Event};

/// Persistence sink for delivered-reminder flags.
///
/// The API only exposes an endpoint for the 3-day flag; the day-of flag is
/// session-local state with nothing to persist it to.
#[async_trait]
pub trait NotifiedStore: Send + Sync {
    async fn mark_notified_before(&self, event_id: i64) -> KumbuResult<()>;
}

pub struct ApiClient {
    http: reqwest::Client,
    api_base: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(api_base: Url, token: Option<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            api_base,
            token,
        }
    }

    pub fn from_config(config: &KumbuConfig) -> Self {
        Self::new(config.api_base.clone(), config.token.clone())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.as_str().trim_end_matches('/'), path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(response: reqwest::Response) -> KumbuResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(KumbuError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Fetch the user's calendar events.
    pub async fn list_events(&self, user_id: i64) -> KumbuResult<Vec<Event>> {
        let url = format!("{}?user_id={}", self.endpoint("events"), user_id);
        let response = self.authorize(self.http.get(&url)).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Fetch upcoming birthdays. The endpoint has served both a bare array
    /// and an object wrapping one; accept either shape.
    pub async fn list_birthdays(&self) -> KumbuResult<Vec<Birthday>> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BirthdayResponse {
            List(Vec<Birthday>),
            Wrapped { birthdays: Vec<Birthday> },
        }

        let url = self.endpoint("birthdays");
        let response = self.authorize(self.http.get(&url)).send().await?;
        let parsed: BirthdayResponse = Self::check(response).await?.json().await?;

        Ok(match parsed {
            BirthdayResponse::List(birthdays) => birthdays,
            BirthdayResponse::Wrapped { birthdays } => birthdays,
        })
    }
}

#[async_trait]
impl NotifiedStore for ApiClient {
    /// `PATCH /events/{id}/notify-before`
    async fn mark_notified_before(&self, event_id: i64) -> KumbuResult<()> {
        let url = self.endpoint(&format!("events/{event_id}/notify-before"));
        let response = self.authorize(self.http.patch(&url)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
