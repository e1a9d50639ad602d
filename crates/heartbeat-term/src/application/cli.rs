use std::io;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::StoreName;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn print_completions<G: Generator>(gen: G, app: &mut Command) {
    generate(gen, app, app.get_name().to_string(), &mut io::stdout());
}

fn config_arg(key: ConfigKey, env: &str, help: &str) -> Arg {
    let default = Config::default(key);
    let mut help = help.to_string();
    if !default.is_empty() {
        help = format!("{help} [default: {default}]");
    }

    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env.to_string())
        .num_args(1)
        .help(help);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for")
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options")
        .subcommand_required(true)
        .subcommand(Command::new("default").about("Prints the default configuration file"))
        .subcommand(Command::new("path").about("Prints the resolved configuration file path"));
}

pub fn build() -> Command {
    return Command::new("apiheartbeat")
        .about("Register HTTP(S) endpoints for uptime pings from a terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(
            config_arg(
                ConfigKey::ConfigFile,
                "APIHEARTBEAT_CONFIG_FILE",
                "Path to configuration file",
            )
            .short('c'),
        )
        .arg(
            config_arg(
                ConfigKey::LogLevel,
                "APIHEARTBEAT_LOG_LEVEL",
                "Log level written to apiheartbeat.log",
            )
            .value_parser(PossibleValuesParser::new(LOG_LEVELS)),
        )
        .arg(config_arg(
            ConfigKey::Prompt,
            "APIHEARTBEAT_PROMPT",
            "Prompt shown before typed commands",
        ))
        .arg(
            config_arg(
                ConfigKey::Store,
                "APIHEARTBEAT_STORE",
                "Where user records are kept",
            )
            .value_parser(PossibleValuesParser::new(StoreName::VARIANTS)),
        )
        .arg(config_arg(
            ConfigKey::StoreFile,
            "APIHEARTBEAT_STORE_FILE",
            "JSON file used by the file store",
        ))
        .arg(
            config_arg(
                ConfigKey::UserEmail,
                "APIHEARTBEAT_USER_EMAIL",
                "Account used when signing in with the \"google\" command",
            )
            .short('u'),
        );
}

/// Handles subcommands and loads config. Returns true when the terminal UI
/// should start.
pub async fn dispatch(matches: ArgMatches) -> Result<bool> {
    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("default", _)) => {
                    println!("{}", Config::serialize_default(build()));
                }
                Some(("path", _)) => {
                    Config::load(build(), vec![&matches]).await?;
                    println!("{}", Config::get(ConfigKey::ConfigFile));
                }
                _ => {}
            }
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
            return Ok(true);
        }
    }
}

pub async fn parse() -> Result<bool> {
    return dispatch(build().get_matches()).await;
}
