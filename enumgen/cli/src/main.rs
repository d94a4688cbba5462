use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use enumgen_lib::{EnumGenError, GenerationReport, TypeReport, generate, render_file};
use owo_colors::{OwoColorize, Style};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "enumgen",
    version,
    about = "Generate Values and String methods for @enumGenerated Go types"
)]
struct Cli {
    /// Go source file to rewrite in place
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Exit with status 1 if the file is out of date, without writing it
    #[arg(long, conflicts_with = "stdout")]
    check: bool,

    /// Print the generated source instead of rewriting the file
    #[arg(long)]
    stdout: bool,

    /// Disable colors (plain text output)
    #[arg(long)]
    plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Styles for the summary printed after generation.
struct Palette {
    plain: bool,
}

impl Palette {
    fn paint(&self, text: &str, style: Style) -> String {
        if self.plain {
            text.to_string()
        } else {
            text.style(style).to_string()
        }
    }
}

/// Initialize tracing based on verbosity; `RUST_LOG` takes precedence.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "enumgen_lib=info".to_string(),
            2 => "enumgen_lib=debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let palette = Palette { plain: cli.plain };

    match run(&cli, &palette) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{} {error}", palette.paint("error:", Style::new().red().bold()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, palette: &Palette) -> Result<ExitCode, EnumGenError> {
    debug!(file = %cli.file.display(), check = cli.check, stdout = cli.stdout, "enumgen");

    if cli.check {
        let generated = render_file(&cli.file)?;
        if generated.report.changed {
            eprintln!(
                "{} {} is out of date",
                palette.paint("stale:", Style::new().yellow().bold()),
                cli.file.display()
            );
            return Ok(ExitCode::from(1));
        }
        println!("{} is up to date", cli.file.display());
        return Ok(ExitCode::SUCCESS);
    }

    if cli.stdout {
        let generated = render_file(&cli.file)?;
        print!("{}", generated.source);
        return Ok(ExitCode::SUCCESS);
    }

    let report = generate(&cli.file)?;
    print_report(&report, cli, palette);
    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &GenerationReport, cli: &Cli, palette: &Palette) {
    if report.types.is_empty() {
        println!("No @enumGenerated types found in {}", cli.file.display());
        return;
    }

    for ty in &report.types {
        println!("{}", summary_line(ty, palette));
    }
    println!(
        "{} {} enum type(s) in {}",
        palette.paint("Generated", Style::new().green().bold()),
        report.types.len(),
        cli.file.display()
    );
}

fn summary_line(ty: &TypeReport, palette: &Palette) -> String {
    format!(
        "{}: Values {}, String {} ({} values)",
        palette.paint(&ty.type_name, Style::new().cyan()),
        ty.values_method,
        ty.string_method,
        ty.values.len()
    )
}
