use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "contact-form", version, about = "Contact form TUI")]
pub struct Cli {
    /// Tick rate, i.e. ticks per second
    #[arg(short, long, value_name = "FLOAT")]
    pub tick_rate: Option<f64>,

    /// Frame rate, i.e. frames per second
    #[arg(short, long, value_name = "FLOAT")]
    pub frame_rate: Option<f64>,
}
