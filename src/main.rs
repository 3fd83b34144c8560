use clap::Parser;
use log::{error, info, warn};
use react_essentials::core::action::{Action, update};
use react_essentials::core::config::{self, CliOverrides, DEFAULT_LOG_FILE};
use react_essentials::core::content::{self, ExampleKey};
use react_essentials::core::state::App;
use react_essentials::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "react-essentials",
    about = "Browse core React concepts and examples in the terminal"
)]
struct Args {
    /// Config file (default: ~/.react-essentials/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Don't capture the mouse
    #[arg(long)]
    no_mouse: bool,

    /// Accent colour: a colour name or #rrggbb
    #[arg(long)]
    accent: Option<String>,

    /// Where to write the log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    /// Print the page as plain text and exit
    #[arg(long)]
    dump: bool,

    /// Topic to select before dumping
    #[arg(long, value_enum, requires = "dump")]
    select: Option<ExampleKey>,

    /// Page width for --dump (at least 20)
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(20..))]
    width: u16,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger; stdout belongs to the TUI
    let log_level = config::resolve_log_level(args.log_level.as_deref());
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(log_level, log_config, log_file);
    }

    info!("React Essentials starting up");

    if let Err(e) = content::validate() {
        error!("Content tables are inconsistent: {}", e);
        return Err(std::io::Error::other(e));
    }

    let file_config = match args.config.clone().or_else(config::config_path) {
        Some(path) => config::load_config(&path).map_err(|e| {
            error!("Failed to load config: {}", e);
            std::io::Error::other(e)
        })?,
        None => {
            warn!("Could not determine home directory, using default config");
            config::EssentialsConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            accent: args.accent.clone(),
            no_mouse: args.no_mouse,
        },
    );
    info!("Resolved config: {:?}", resolved);

    if args.dump {
        let mut app = App::new();
        if let Some(key) = args.select {
            update(&mut app, Action::SelectTopic(key));
        }
        for line in tui::render_page_lines(&app, args.width, resolved.accent) {
            println!("{line}");
        }
        return Ok(());
    }

    tui::run(resolved)
}
