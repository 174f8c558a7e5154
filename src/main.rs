use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use roikit::utils::logger::Logger;
use roikit::commands::{CommandFactory, RoikitCommandFactory};

fn main() {
    let matches = ClapCommand::new("RoiKit")
        .version("1.0")
        .author("Maurice Schilpp")
        .about("Encode ImageJ ROI/overlay metadata for TIFF embedding")
        .arg(
            Arg::new("input")
                .help("Input annotation description file (TOML)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("encode")
                .short('e')
                .long("encode")
                .help("Write the byte-count and metadata buffers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file prefix (default: input path without extension)")
                .value_name("PREFIX")
                .required(false),
        )
        .get_matches();

    let log_file = "roikit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("roikit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = RoikitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
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
