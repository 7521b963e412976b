use clap::Parser;
use color_eyre::Result;
use contact_form::{app::App, cli::Cli, errors, logging};

#[tokio::main]
async fn main() -> Result<()> {
    errors::init()?;
    logging::init()?;

    let args = Cli::parse();
    let mut app = App::new(&args)?;
    app.run().await?;
    Ok(())
}
