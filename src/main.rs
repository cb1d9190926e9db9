use anyhow::{Context, Result};
use multilingual_pipeline::config::Config;
use multilingual_pipeline::i18n::Language;
use multilingual_pipeline::Pipeline;
use tracing::info;

const USAGE: &str = "Usage: multilingual-pipeline <text> [--lang <code>] [--translate <code,code,...>]";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("multilingual_pipeline=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let pipeline = Pipeline::new(config);

    let mut args = std::env::args().skip(1);
    let mut text: Option<String> = None;
    let mut explicit_language = None;
    let mut targets: Vec<Language> = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => {
                let code = args.next().context(USAGE)?;
                explicit_language = Some(Language::from_code(&code)?);
            }
            "--translate" => {
                let codes = args.next().context(USAGE)?;
                targets = codes
                    .split(',')
                    .map(Language::from_code)
                    .collect::<Result<_>>()?;
            }
            _ => text = Some(arg),
        }
    }

    let text = text.context(USAGE)?;

    if targets.is_empty() {
        let response = pipeline
            .process_in_native_language(&text, explicit_language)
            .await?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let responses = pipeline
            .generate_multilingual_response(&text, &targets)
            .await?;
        println!("{}", serde_json::to_string_pretty(&responses)?);
    }

    info!("Cache stats: {:?}", pipeline.cache_stats());
    Ok(())
}
