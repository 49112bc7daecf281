//! Exec command handler.

use color_eyre::Result;

use crate::config::Config;
use crate::graphql::{GraphqlClient, GraphqlExecutor};

use super::App;

impl App {
    /// Execute a raw operation document, from the argument or stdin.
    pub async fn run_exec(&self, operation: Option<&str>) -> Result<()> {
        let operation = match operation {
            Some(op) => op.to_string(),
            None => std::io::read_to_string(std::io::stdin())?,
        };

        let config = Config::load()?;
        let client = GraphqlClient::from_config(&config)?;

        let body = client.exec(&operation).await?;
        println!("{}", serde_json::to_string_pretty(&body)?);
        Ok(())
    }
}
