use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};
use unit_value::config::EditorConfig;
use unit_value::editor;
use unit_value::session;

#[derive(Parser)]
#[command(name = "unit-value")]
#[command(about = "Unit-aware numeric value editor (% and px)", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sanitized form of raw input
    Sanitize {
        /// Raw text as typed (e.g. "12,5" or "-5")
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Print the usable value for raw input, falling back to the last good value
    Resolve {
        /// Raw text as typed
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Value used when the input has no usable number
        #[arg(short, long, default_value = "1.0")]
        last_good: String,
    },

    /// Replay input events against an editor and print each resulting state
    Run {
        /// Event script file (one event per line: edit <text>, blur, unit <%|px>, inc, dec)
        script: Option<String>,

        /// TOML file with the initial unit and value
        #[arg(short, long)]
        config: Option<String>,

        /// Extra events, applied after the script
        #[arg(short, long = "event")]
        events: Vec<String>,

        /// Print steps as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Sanitize { input } => {
            println!("{}", editor::sanitize(&input));
            Ok(())
        }
        Commands::Resolve { input, last_good } => {
            println!("{}", editor::resolve(&input, &last_good));
            Ok(())
        }
        Commands::Run {
            script,
            config,
            events,
            json,
        } => run_session(script.as_deref(), config.as_deref(), &events, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn run_session(
    script_path: Option<&str>,
    config_path: Option<&str>,
    extra_events: &[String],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => EditorConfig::load_from_file(path)?,
        None => EditorConfig::empty(),
    };
    let mut editor = config.build_editor()?;

    let mut events = match script_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read script {}: {}", path, e))?;
            session::parse_script(&content)?
        }
        None => Vec::new(),
    };
    for event in extra_events {
        events.push(session::parse_event(event)?);
    }

    if events.is_empty() {
        return Err("No events given (pass a script file or --event)".into());
    }

    let steps = session::SessionExecutor::new(&mut editor).run(&events);

    if json {
        println!("{}", session::format_steps_json(&steps)?);
    } else {
        println!("{}", session::format_initial(&config.value, config.unit));
        println!("{}", session::format_steps_text(&steps));
    }

    Ok(())
}
