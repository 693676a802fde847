use clap::Parser;
use url_digest::{
    hf::HfEndpointClient,
    loader::{web::WebPageLoader, youtube::YoutubeLoader},
    tracing::init_tracing_subscriber,
    Error, SummaryProcessorBuilder,
};

#[derive(Parser)]
#[command(name = "url-digest", about = "Summarize a YouTube video or website URL")]
struct Cli {
    /// Hugging Face API token
    #[arg(long, env = "HF_API_TOKEN", default_value = "", hide_env_values = true)]
    api_token: String,

    /// URL to summarize (YouTube video or website)
    #[arg(default_value = "")]
    url: String,

    /// Maximum number of generated tokens
    #[arg(long, default_value = "150")]
    max_new_tokens: u32,

    /// Sampling temperature
    #[arg(long, default_value = "0.7")]
    temperature: f32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let summarizer = HfEndpointClient::new(&cli.api_token)
        .with_max_new_tokens(cli.max_new_tokens)
        .with_temperature(cli.temperature);

    let processor = SummaryProcessorBuilder::new()
        .video_loader(YoutubeLoader::new().with_video_info())
        .web_loader(WebPageLoader::new()?)
        .summarizer(summarizer)
        .build();

    tracing::info!("Waiting for summary...");
    match processor.run(&cli.api_token, &cli.url).await {
        Ok(summary) => println!("{summary}"),
        Err(e @ Error::Validation(_)) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Exception: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
