//! GraphQL HTTP transport client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use crate::config::{Config, GraphqlConfig};
use crate::error::AppError;
use crate::graphql::builder::{
    build_list_operation, build_merge_operation, build_relationship_operation,
};
use crate::graphql::response::{GraphqlResponse, RelationshipView};
use crate::graphql::traits::GraphqlExecutor;
use crate::models::GraphEntity;
use crate::schema::Registry;

/// Client for one GraphQL endpoint.
///
/// Owns no state beyond connection configuration: endpoint URL, the
/// optional bearer token for write operations, and a pooled HTTP client.
/// Every call is a single independent round trip: no retries, and no
/// ordering between concurrent calls.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    endpoint: String,
    http: reqwest::Client,
    auth_token: Option<String>,
    registry: &'static Registry,
}

impl GraphqlClient {
    /// Create a client for an endpoint with default settings.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, AppError> {
        Self::with_config(&GraphqlConfig {
            endpoint: endpoint.into(),
            ..GraphqlConfig::default()
        })
    }

    /// Create a client from the loaded application config.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::with_config(&config.graphql)
    }

    /// Create a client from an explicit GraphQL config section.
    pub fn with_config(config: &GraphqlConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            http,
            auth_token: config.token.clone(),
            registry: Registry::global(),
        })
    }

    /// Attach a bearer token for write operations.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Whether a write credential is configured.
    ///
    /// Merge operations against a protected endpoint will be rejected
    /// without one; callers in read-only environments use this to skip
    /// write paths instead of failing them.
    pub fn can_write(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Build and execute the merge mutation for an entity.
    ///
    /// Returns the parsed response body; the merged id is available at
    /// `data.Merge<EntityType>.id`.
    pub async fn merge<E: GraphEntity + ?Sized>(&self, entity: &E) -> Result<JsonValue, AppError> {
        let operation = build_merge_operation(self.registry, entity)?;
        self.exec(&operation).await
    }

    /// Build and execute a list query over an entity collection.
    pub async fn fetch_all(
        &self,
        entity_type: &str,
        fields: &[&str],
    ) -> Result<JsonValue, AppError> {
        let operation = build_list_operation(self.registry, entity_type, fields)?;
        self.exec(&operation).await
    }

    /// Merge the named edge between two entity ids and return the
    /// normalized endpoint view.
    pub async fn exec_merge_relationship(
        &self,
        from_type: &str,
        name: &str,
        from_id: &str,
        to_id: &str,
    ) -> Result<RelationshipView, AppError> {
        let def = self.registry.relationship(from_type, name)?;
        let mutation_name = def.mutation_name();
        let operation = build_relationship_operation(def, from_id, to_id);
        let body = self.exec(&operation).await?;

        let view = body
            .get("data")
            .and_then(|data| data.get(&mutation_name))
            .cloned()
            .ok_or_else(|| AppError::Protocol(format!("response missing data.{mutation_name}")))?;
        serde_json::from_value(view).map_err(AppError::from)
    }

    /// Merge a Url → Bill reference edge.
    pub async fn exec_merge_url_referred_bills(
        &self,
        url_id: &str,
        bill_id: &str,
    ) -> Result<RelationshipView, AppError> {
        self.exec_merge_relationship("Url", "referredBills", url_id, bill_id)
            .await
    }

    /// Merge a News → Bill reference edge.
    pub async fn exec_merge_news_referred_bills(
        &self,
        news_id: &str,
        bill_id: &str,
    ) -> Result<RelationshipView, AppError> {
        self.exec_merge_relationship("News", "referredBills", news_id, bill_id)
            .await
    }

    /// Merge a Speech → Minutes membership edge.
    pub async fn exec_merge_speech_belonged_to_minutes(
        &self,
        speech_id: &str,
        minutes_id: &str,
    ) -> Result<RelationshipView, AppError> {
        self.exec_merge_relationship("Speech", "belongedToMinutes", speech_id, minutes_id)
            .await
    }

    /// Merge a Minutes → Bill discussion edge.
    pub async fn exec_merge_minutes_discussed_bills(
        &self,
        minutes_id: &str,
        bill_id: &str,
    ) -> Result<RelationshipView, AppError> {
        self.exec_merge_relationship("Minutes", "discussedBills", minutes_id, bill_id)
            .await
    }

    /// Merge a Minutes → Committee membership edge.
    pub async fn exec_merge_minutes_belonged_to_committee(
        &self,
        minutes_id: &str,
        committee_id: &str,
    ) -> Result<RelationshipView, AppError> {
        self.exec_merge_relationship("Minutes", "belongedToCommittee", minutes_id, committee_id)
            .await
    }
}

#[async_trait]
impl GraphqlExecutor for GraphqlClient {
    async fn exec(&self, operation: &str) -> Result<JsonValue, AppError> {
        debug!(endpoint = %self.endpoint, "executing GraphQL operation");

        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": operation }));
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::HttpStatus { status, body });
        }

        let body: JsonValue = response.json().await?;
        let envelope: GraphqlResponse = serde_json::from_value(body.clone())?;
        if !envelope.errors.is_empty() {
            return Err(AppError::Graphql(envelope.errors));
        }
        Ok(body)
    }
}
