use anyhow::Result;
use herald::cli::App;

#[tokio::main]
async fn main() -> Result<()> {
    let mut app = App::from_args().await?;
    let args = herald::cli::Args::parse_args();

    app.run(args).await?;

    Ok(())
}
