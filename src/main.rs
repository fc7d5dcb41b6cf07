use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use tilecrop::utils::logger::Logger;
use tilecrop::commands::{CommandFactory, TilecropCommandFactory};

fn main() {
    let matches = ClapCommand::new("tilecrop")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Composite geo-referenced tiles and cut them out along a GeoJSON boundary")
        .arg(
            Arg::new("catalog")
                .help("TOML tile catalog")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("boundary")
                .help("GeoJSON boundary file")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory for composite, cropped and masked images")
                .value_name("DIR")
                .default_value("output"),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .help("Print bounding boxes and dimensions without writing images")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fill-rule")
                .long("fill-rule")
                .help("Polygon fill rule (even-odd or nonzero)")
                .value_name("RULE")
                .default_value("even-odd"),
        )
        .arg(
            Arg::new("outline")
                .long("outline")
                .help("Whether outline pixels count as inside (foreground) or outside (background)")
                .value_name("MODE")
                .default_value("background"),
        )
        .arg(
            Arg::new("alpha-only")
                .long("alpha-only")
                .help("Only replace alpha; keep colour outside the boundary")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject tile sets whose tiles differ in pixel or geographic size")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log records to this file")
                .value_name("FILE"),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };

    if let Some(log_file) = matches.get_one::<String>("log-file") {
        if let Err(e) = Logger::init_global_logger(log_file, level) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    } else {
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }

    let factory = TilecropCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
