use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hostfetch", version, about, long_about = None)]
pub struct Cli {
    #[arg(
        short = 's',
        long,
        default_value_t = false,
        help = "Serve the report as an HTML page instead of printing it"
    )]
    pub serve: bool,

    #[arg(
        short = 'p',
        long,
        default_value_t = 8000,
        help = "Port to listen on when serving"
    )]
    pub port: u16,

    #[arg(long, default_value_t = false, help = "Enable verbose output")]
    pub verbose: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
