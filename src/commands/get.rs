use std::io::{self, Write};

use anyhow::Context;

use crate::cli::GetArgs;
use crate::format::render_transcript;
use crate::infra::github::{GitHubClient, Transport};
use crate::issue::fetch_issue;
use crate::shared::config::{Config, load_config};
use crate::shared::env_var::EnvVars;

pub async fn run(args: &GetArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let env = EnvVars::load();
    let token = env.require_token()?;
    let endpoint = env
        .graphql_endpoint
        .as_deref()
        .unwrap_or(&config.github.endpoint);

    let client = GitHubClient::new(endpoint, token, config.fetch.page_timeout())?;
    let output = run_with_client(args, &client, &config).await?;

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{output}")
        && e.kind() != io::ErrorKind::BrokenPipe
    {
        return Err(e.into());
    }
    Ok(())
}

/// Fetch and format the issue through `transport`; returns the text to print.
pub(crate) async fn run_with_client<T: Transport>(
    args: &GetArgs,
    transport: &T,
    config: &Config,
) -> anyhow::Result<String> {
    let issue = fetch_issue(transport, &args.reference, &config.fetch.to_options())
        .await
        .with_context(|| format!("failed to fetch {}", args.reference))?;

    if args.json {
        Ok(serde_json::to_string_pretty(&issue)?)
    } else {
        Ok(render_transcript(&issue, config.render.wrap_width))
    }
}
