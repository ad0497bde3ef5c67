use serde_json::Value;
use tracing::info;
use admin_reports::config::{parse_config, BASE_URL_ENV};
use admin_reports::models::ProcessRequest;
use admin_reports::{ClientConfig, ReportsClient, ReportsError};
use crate::cli::commands::ProcessArgs;
use crate::cli::{Cli, Commands};

pub async fn handle(cli: &Cli) -> Result<(), ReportsError> {
    let config = load_client_config(cli).await?;
    info!(base_url = %config.base_url(), "Using reports API");
    let client = ReportsClient::new(&config);

    let result = match &cli.command {
        Commands::Summary => client.get_summary().await?,
        Commands::List => client.get_list().await?,
        Commands::Show(args) => {
            info!(report_id = %args.report_id, "Fetching report");
            client.get_detail(&args.report_id).await?
        }
        Commands::Process(args) => {
            let payload = build_payload(args).await?;
            client.process(&payload).await?
        }
    };

    println!("{}", render(&result, cli.compact)?);
    Ok(())
}

async fn load_client_config(cli: &Cli) -> Result<ClientConfig, ReportsError> {
    let file = match &cli.config {
        Some(path) => Some(parse_config(path).await?),
        None => None,
    };
    let env = std::env::var(BASE_URL_ENV).ok();
    ClientConfig::resolve(cli.base_url.as_deref(), env.as_deref(), file.as_ref())
}

async fn build_payload(args: &ProcessArgs) -> Result<Value, ReportsError> {
    if let Some(raw) = &args.payload {
        return Ok(serde_json::from_str(raw)?);
    }
    if let Some(path) = &args.payload_file {
        let content = tokio::fs::read_to_string(path).await?;
        return Ok(serde_json::from_str(&content)?);
    }
    match (args.report_id, args.decision) {
        (Some(report_id), Some(decision)) => {
            info!(report_id, ?decision, "Submitting decision");
            let request = ProcessRequest::new(report_id, decision.into())?;
            Ok(serde_json::to_value(request)?)
        }
        _ => Err(ReportsError::Config(
            "process needs --payload, --payload-file, or --report-id with --decision".into(),
        )),
    }
}

fn render(value: &Value, compact: bool) -> Result<String, ReportsError> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(text)
}
