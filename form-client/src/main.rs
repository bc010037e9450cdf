//! Terminal front-end for the screening form

use clap::Parser;
use screening_form::{FormController, PredictClient, PredictConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "screening-form", version, about = "Submit a screening questionnaire for prediction")]
struct Cli {
    /// Field assignment, repeatable (e.g. --set gender=m --set A3=1)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    fields: Vec<(String, String)>,

    /// Prediction server base URL (overrides PREDICT_SERVER_URL)
    #[arg(long)]
    server_url: Option<String>,

    /// Print the prediction as JSON
    #[arg(long)]
    json: bool,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {:?}", raw))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "screening_form=info".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = PredictConfig::default();
    if let Some(url) = cli.server_url {
        config.server_url = url;
    }

    let form = FormController::new(PredictClient::new(config)?);
    for (name, value) in &cli.fields {
        form.update_field(name, value)?;
    }

    let prediction = form.submit().await?;

    if cli.json {
        println!("{}", serde_json::to_string(&prediction)?);
    } else {
        println!("{}", prediction.summary());
        println!("{}", prediction.confidence_label());
    }

    Ok(())
}
