//! Notion page-creation CLI
//!
//! Creates a page under a database and prints the new page id to stdout:
//!
//!   notion-pages <database_id> <page_title>
//!
//! Requires `NOTION_TOKEN` in the environment. On any failure - missing
//! token, HTTP error, or a response the page id cannot be extracted from -
//! the raw response goes to stderr and the process exits 1. There is no
//! partial success: without a page id the caller has nothing to work with.

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::{json, Value};

const NOTION_API_URL: &str = "https://api.notion.com/v1/pages";
/// Versioned API header required by Notion
const NOTION_VERSION: &str = "2022-06-28";

#[derive(Parser)]
#[command(name = "notion-pages")]
#[command(about = "Create a page in a Notion database and print its id")]
struct Cli {
    /// Database to create the page under
    database_id: String,

    /// Title of the new page
    page_title: String,
}

/// Request body for `POST /v1/pages`
fn page_payload(database_id: &str, title: &str) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": {
            "Name": {
                "title": [
                    { "text": { "content": title } }
                ]
            }
        }
    })
}

/// Pull the created page's id out of the response body, if it is there
fn extract_page_id(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("id")?.as_str().map(str::to_string)
}

async fn run(cli: Cli) -> Result<String> {
    let token = std::env::var("NOTION_TOKEN")
        .context("NOTION_TOKEN environment variable is required")?;

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let response = client
        .post(NOTION_API_URL)
        .bearer_auth(&token)
        .header("Notion-Version", NOTION_VERSION)
        .json(&page_payload(&cli.database_id, &cli.page_title))
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    match extract_page_id(&body) {
        Some(id) if status.is_success() => Ok(id),
        _ => {
            eprintln!("{}", body);
            bail!("failed to create page (HTTP {})", status);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(page_id) => println!("{}", page_id),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_parent_and_title() {
        let payload = page_payload("db-123", "Weekly notes");
        assert_eq!(payload["parent"]["database_id"], "db-123");
        assert_eq!(
            payload["properties"]["Name"]["title"][0]["text"]["content"],
            "Weekly notes"
        );
    }

    #[test]
    fn page_id_is_extracted_from_a_create_response() {
        let body = r#"{"object": "page", "id": "abc-123", "url": "https://notion.so/abc"}"#;
        assert_eq!(extract_page_id(body).as_deref(), Some("abc-123"));
    }

    #[test]
    fn malformed_responses_yield_no_page_id() {
        assert_eq!(extract_page_id("not json"), None);
        assert_eq!(extract_page_id("{}"), None);
        assert_eq!(extract_page_id(r#"{"id": 42}"#), None);
        assert_eq!(
            extract_page_id(r#"{"object": "error", "status": 400, "message": "bad request"}"#),
            None
        );
    }
}
