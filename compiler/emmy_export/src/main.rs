//! Emmy Export CLI
//!
//! Writes EmmyLua definition files for a JSON type model.

use std::path::PathBuf;

use emmy_export::{export_model_file, init_tracing, load_config, ExportConfig};

const USAGE: &str = "Usage: emmy-export <model.json> -o <dir> [options]";

fn print_usage() {
    eprintln!("{USAGE}");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o <dir>               Output directory");
    eprintln!("  --config <file>        Read settings from a JSON file (flags override it)");
    eprintln!("  --threshold=<bytes>    Chunk size limit (default: 512000)");
    eprintln!("  --no-merge-generics    Export closed generic instantiations as-is");
}

/// Settings collected from the command line.
#[derive(Default)]
struct CliOptions {
    model: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    threshold: Option<usize>,
    no_merge_generics: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-o" | "--config" => {
                let Some(value) = args.get(i + 1) else {
                    return Err(format!("missing value for `{arg}`"));
                };
                let value = PathBuf::from(value);
                if arg == "-o" {
                    options.output = Some(value);
                } else {
                    options.config = Some(value);
                }
                i += 2;
                continue;
            }
            "--no-merge-generics" => options.no_merge_generics = true,
            "-h" | "--help" => options.help = true,
            _ => {
                if let Some(value) = arg.strip_prefix("--threshold=") {
                    let bytes = value
                        .parse()
                        .map_err(|_| format!("invalid threshold `{value}`"))?;
                    options.threshold = Some(bytes);
                } else if arg.starts_with('-') {
                    return Err(format!("unknown option `{arg}`"));
                } else if options.model.is_none() {
                    options.model = Some(PathBuf::from(arg));
                } else {
                    return Err(format!("unexpected argument `{arg}`"));
                }
            }
        }
        i += 1;
    }
    Ok(options)
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            print_usage();
            std::process::exit(1);
        }
    };
    if options.help {
        print_usage();
        return;
    }

    let Some(model) = options.model else {
        eprintln!("error: missing model file");
        print_usage();
        std::process::exit(1);
    };

    let mut config = match &options.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        },
        None => match &options.output {
            Some(_) => ExportConfig::default(),
            None => {
                eprintln!("error: missing output directory (-o <dir>)");
                print_usage();
                std::process::exit(1);
            }
        },
    };
    if let Some(output) = options.output {
        config.output_dir = output;
    }
    if let Some(threshold) = options.threshold {
        config.chunk_threshold = threshold;
    }
    if options.no_merge_generics {
        config.merge_generics = false;
    }

    match export_model_file(&model, &config) {
        Ok(summary) => {
            for failure in &summary.failures {
                eprintln!("{failure}");
            }
            println!(
                "Successfully generated {} Lua definition files.",
                summary.files.len()
            );
            println!(
                "Found {} unexported types referenced in exported types.",
                summary.unexported
            );
        }
        Err(e) => {
            eprintln!("Fatal error during dump: {e}");
            std::process::exit(1);
        }
    }
}
