//! Inkbox - measure the inked bounding box of a string
//!
//! Usage: inkbox [OPTIONS] <TEXT> <FONT>

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use inkbox_core::{
    InkAugmented, MeasurementOptions, Metrics, Paint, RasterSurface, ScanFidelity, TextMeasurer,
};
use inkbox_render::{install_shared_canvas, measure_text, FontRegistry, RasterCanvas};
use log::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Version,
    Measure(MeasureConfig),
}

/// Settings for a single measurement
#[derive(Debug, PartialEq)]
struct MeasureConfig {
    text: String,
    font: String,
    font_files: Vec<PathBuf>,
    options: MeasurementOptions,
    debug_dir: Option<PathBuf>,
    json: bool,
    native: bool,
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("inkbox");

    let command = match parse_args(&args[1.min(args.len())..]) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run '{} --help' for usage", program);
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Help => {
            print_usage(program);
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("Inkbox {}", VERSION);
            ExitCode::SUCCESS
        }
        Command::Measure(config) => {
            if let Err(e) = run_measure(&config) {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Inkbox {} - measure the inked bounding box of a string

USAGE:
    {} [OPTIONS] <TEXT> <FONT>

OPTIONS:
    -h, --help            Print this help message
    -V, --version         Print version information
    --font-file <PATH>    Register a font file under its file stem (repeatable)
    --ratio <N>           Bounding box ratio, at least 1 (default 3)
    --rows                Only scan for top and bottom edges
    --debug               Log intermediate values and paint the overlay
    --debug-dir <DIR>     Write debug snapshots as PNG files into DIR
    --embox-style <COLOR> Paint of the debug overlay (CSS color)
    --json                Print metrics as JSON
    --native              Merge native advance metrics into the output

EXAMPLES:
    {} "Hello" "16px sans-serif"
    {} --json --ratio 4 "Ag" "bold 24px DejaVu Sans"
    {} --font-file fonts/Inter.ttf --native "Quick" "20px Inter"
"#,
        VERSION, program, program, program, program
    );
}

/// Parse command line arguments (without the program name)
fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut positional = Vec::new();
    let mut font_files = Vec::new();
    let mut options = MeasurementOptions::default();
    let mut debug_dir = None;
    let mut json = false;
    let mut native = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--font-file" => {
                let path = iter.next().ok_or("--font-file requires a path")?;
                font_files.push(PathBuf::from(path));
            }
            "--ratio" => {
                let value = iter.next().ok_or("--ratio requires a number")?;
                let ratio: f32 = value
                    .parse()
                    .map_err(|_| format!("Invalid ratio '{}'", value))?;
                if !ratio.is_finite() || ratio < 1.0 {
                    return Err(format!("Ratio must be at least 1, got {}", value));
                }
                options = options.with_bounding_box_ratio(ratio);
            }
            "--embox-style" => {
                let value = iter.next().ok_or("--embox-style requires a color")?;
                let paint = Paint::parse(value).map_err(|e| e.to_string())?;
                options = options.with_embox_style(paint);
            }
            "--rows" => options = options.with_fidelity(ScanFidelity::Rows),
            "--debug" => options.debug = true,
            "--debug-dir" => {
                let dir = iter.next().ok_or("--debug-dir requires a directory")?;
                debug_dir = Some(PathBuf::from(dir));
            }
            "--json" => json = true,
            "--native" => native = true,
            flag if flag.starts_with("--") => return Err(format!("Unknown option '{}'", flag)),
            value => positional.push(value.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    let (Some(text), Some(font), None) = (positional.next(), positional.next(), positional.next())
    else {
        return Err("Expected exactly two arguments: <TEXT> <FONT>".to_string());
    };

    Ok(Command::Measure(MeasureConfig {
        text,
        font,
        font_files,
        options,
        debug_dir,
        json,
        native,
    }))
}

/// Build a canvas with system fonts plus any requested font files
fn build_canvas(config: &MeasureConfig) -> Result<RasterCanvas, String> {
    let mut registry = FontRegistry::system();
    for path in &config.font_files {
        let family = family_from_path(path)?;
        registry
            .load_file(&family, path)
            .map_err(|e| e.to_string())?;
    }

    if registry.is_empty() {
        return Err("No fonts available; pass one with --font-file".to_string());
    }

    let canvas = RasterCanvas::new(registry);
    Ok(match &config.debug_dir {
        Some(dir) => canvas.with_debug_dir(dir),
        None => canvas,
    })
}

fn family_from_path(path: &Path) -> Result<String, String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| format!("Cannot derive a family name from {}", path.display()))
}

/// Measure and print the result
fn run_measure(config: &MeasureConfig) -> Result<(), String> {
    if config.native {
        let mut native = build_canvas(config)?;
        native.set_font(&config.font);
        let measurer = TextMeasurer::new(build_canvas(config)?);
        let mut augmented = InkAugmented::new(native, measurer).with_options(config.options);

        let metrics = augmented.measure_text(&config.text);
        let value = metrics.to_json();
        let out = if config.json {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        println!("{}", out.map_err(|e| e.to_string())?);
        return Ok(());
    }

    install_shared_canvas(build_canvas(config)?);
    let metrics = measure_text(&config.text, &config.font, Some(&config.options));
    info!("Measured {:?} in '{}'", config.text, config.font);

    if config.json {
        let out = serde_json::to_string_pretty(&metrics).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        print_metrics(&metrics);
    }

    Ok(())
}

fn print_metrics(metrics: &Metrics) {
    if metrics.is_empty() {
        println!("No ink");
        return;
    }
    println!("width:       {}", metrics.width);
    println!("height:      {}", metrics.height);
    println!("left offset: {}", metrics.left_offset);
    println!("top offset:  {}", metrics.top_offset);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let Command::Measure(config) = parse_args(&args(&["Hello", "16px serif"])).unwrap() else {
            panic!("expected a measurement");
        };
        assert_eq!(config.text, "Hello");
        assert_eq!(config.font, "16px serif");
        assert_eq!(config.options, MeasurementOptions::default());
        assert!(!config.json);
        assert!(!config.native);
    }

    #[test]
    fn test_parse_flags() {
        let parsed = parse_args(&args(&[
            "--ratio", "4", "--rows", "--debug", "--json", "--font-file", "a/Inter.ttf", "Ag",
            "20px Inter",
        ]))
        .unwrap();
        let Command::Measure(config) = parsed else {
            panic!("expected a measurement");
        };
        assert_eq!(config.options.bounding_box_ratio, 4.0);
        assert_eq!(config.options.fidelity, ScanFidelity::Rows);
        assert!(config.options.debug);
        assert!(config.json);
        assert_eq!(config.font_files, vec![PathBuf::from("a/Inter.ttf")]);
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["--version"])).unwrap(), Command::Version);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["only-text"])).is_err());
        assert!(parse_args(&args(&["a", "b", "c"])).is_err());
        assert!(parse_args(&args(&["--ratio", "0.5", "a", "b"])).is_err());
        assert!(parse_args(&args(&["--ratio"])).is_err());
        assert!(parse_args(&args(&["--bogus", "a", "b"])).is_err());
        assert!(parse_args(&args(&["--embox-style", "nope", "a", "b"])).is_err());
    }

    #[test]
    fn test_family_from_path() {
        assert_eq!(
            family_from_path(Path::new("/fonts/Inter.ttf")).unwrap(),
            "Inter"
        );
    }
}
