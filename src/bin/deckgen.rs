use clap::Parser;
use deckgen::OpenAiClient;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Topic to generate slides for.
    topic: String,

    /// Number of slides.
    #[arg(long, default_value_t = 5)]
    slides: i32,

    /// Output HTML file.
    #[arg(long, default_value = "presentation.html")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let client = OpenAiClient::from_env()?;
    let html = deckgen::generate_presentation(&client, &args.topic, args.slides).await?;
    std::fs::write(&args.output, html)?;

    println!("Presentation saved to {}", args.output.display());

    Ok(())
}
