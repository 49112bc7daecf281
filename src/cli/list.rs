//! List command handler.

use color_eyre::Result;

use crate::config::Config;
use crate::graphql::GraphqlClient;

use super::App;

impl App {
    /// Run a list query against the configured endpoint.
    pub async fn run_list(&self, entity: &str, fields: &str) -> Result<()> {
        let config = Config::load()?;
        tracing::info!("Querying {} at {}", entity, config.graphql.endpoint);

        let client = GraphqlClient::from_config(&config)?;
        let fields: Vec<&str> = fields
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();

        let body = client.fetch_all(entity, &fields).await?;
        println!("{}", serde_json::to_string_pretty(&body)?);
        Ok(())
    }
}
