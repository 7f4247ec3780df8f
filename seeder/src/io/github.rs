//! GitHub REST implementation of [`IssueTracker`].

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::core::repository::Repository;
use crate::io::config::SeederConfig;
use crate::io::tracker::{CreateIssueRequest, CreateOutcome, IssueTracker};

/// Versioned media type for the issues endpoint.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    number: u64,
}

/// Tracker that POSTs to `<base>/repos/<owner>/<name>/issues`.
pub struct GitHubTracker {
    client: Client,
    base_url: String,
    /// A token that cannot be sent faults every call instead of the run.
    authorization: Result<HeaderValue, String>,
}

impl GitHubTracker {
    /// Build a client for one run. Fails only if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &SeederConfig, token: &str) -> Result<Self> {
        let authorization = bearer(token);
        if let Err(description) = &authorization {
            warn!(error = %description, "token cannot be sent; every request will fail");
        }
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout())
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            authorization,
        })
    }

    pub fn issues_url(&self, repository: &Repository) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.base_url, repository.owner, repository.name
        )
    }
}

fn bearer(token: &str) -> Result<HeaderValue, String> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|err| format!("token is not a valid header value: {}", describe(&err)))?;
    value.set_sensitive(true);
    Ok(value)
}

impl IssueTracker for GitHubTracker {
    #[instrument(skip_all, fields(repository = %repository, title = %request.title))]
    fn create_issue(&self, repository: &Repository, request: &CreateIssueRequest) -> CreateOutcome {
        let authorization = match &self.authorization {
            Ok(value) => value.clone(),
            Err(description) => {
                return CreateOutcome::Fault {
                    description: description.clone(),
                };
            }
        };
        let url = self.issues_url(repository);
        debug!(url = %url, "posting issue");
        let response = match self
            .client
            .post(&url)
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .json(request)
            .send()
        {
            Ok(response) => response,
            Err(err) => {
                return CreateOutcome::Fault {
                    description: describe(&err),
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return CreateOutcome::Rejected {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            };
        }

        match response.json::<CreatedIssue>() {
            Ok(created) => CreateOutcome::Created {
                number: created.number,
            },
            Err(err) => CreateOutcome::Fault {
                description: format!("unreadable create-issue response: {}", describe(&err)),
            },
        }
    }
}

/// Flatten an error and its sources into one line.
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
