use clap::Parser;

use enumgen::generator::generator::Generator;
use enumgen::utils::config::Config;
use enumgen::{Language, Representation};
use tracing::{error, info, warn};

use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Turn debugging information on
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// (json) Configuration with name mappings and output options
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generated source location
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Language of the generated source
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Type name on the first line, one enum value per following line
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// 0 for int enum, 1 for string enum
    #[arg(value_enum)]
    pub representation: Option<Representation>,
}

fn main() {
    let cli = Cli::parse();

    // we setup logging
    let tracing_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .compact()
        .with_max_level(tracing_level)
        .init();

    let mut config = match cli.config {
        Some(config_file) => match Config::from(config_file.as_path()) {
            Ok(config) => config,
            Err(err) => {
                error!("{}", err);
                std::process::exit(1);
            }
        },
        None => Config::new(),
    };

    if let Some(language) = cli.language {
        config.set_language(language);
    }
    if let Some(representation) = cli.representation {
        config.set_representation(representation);
    }

    let generator = Generator::new(config, cli.output_dir, cli.input);

    match generator.generate() {
        Ok(Some(target_file)) => info!("Generated {}", target_file.display()),
        Ok(None) => warn!("Nothing generated"),
        Err(err) => {
            error!("Generation failed: {}", err);
            std::process::exit(1);
        }
    }
}
