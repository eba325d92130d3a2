use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use filmwiki_core::{
    Catalog, Dialect, GeneratorConfig, GeneratorConfigBuilder, Language, WikiGenerator, read_file, read_stdin,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render a movie and series catalog into DokuWiki, Markdown or Obsidian pages
#[derive(Parser, Debug)]
#[command(name = "filmwiki")]
#[command(author = "Filmwiki Contributors")]
#[command(version)]
#[command(about = "Render movie catalogs into wiki pages", long_about = None)]
struct Args {
    /// Catalog JSON file, or "-" for stdin
    #[arg(value_name = "CATALOG")]
    catalog: String,

    /// Output directory (default: from config, else current directory)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Wiki dialect (dokuwiki, markdown, obsidian)
    #[arg(short, long, value_name = "DIALECT")]
    dialect: Option<Dialect>,

    /// Wiki language code; "en" selects English, anything else German
    #[arg(short, long, value_name = "CODE")]
    language: Option<String>,

    /// Configuration file (default: <config dir>/filmwiki/config.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not transclude the navigation page into articles
    #[arg(long)]
    no_navigation: bool,

    /// Print the pages that would be written without writing them
    #[arg(long)]
    dry_run: bool,

    /// Print page contents to stdout instead of writing files
    #[arg(long, conflicts_with = "dry_run")]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_config(args: &Args) -> anyhow::Result<GeneratorConfig> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?,
        None => GeneratorConfig::discover().context("Failed to load configuration")?,
    };

    let mut builder = GeneratorConfigBuilder::from_config(config);
    if let Some(dialect) = args.dialect {
        builder = builder.dialect(dialect);
    }
    if let Some(code) = &args.language {
        builder = builder.language(Language::from_code(code));
    }
    if let Some(dir) = &args.output {
        builder = builder.output_dir(dir);
    }
    if args.no_navigation {
        builder = builder.include_navigation(false);
    }

    Ok(builder.build())
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let config = load_config(args)?;

    if args.verbose {
        echo::print_step(1, 3, "Reading catalog");
    }

    let json = if args.catalog == "-" {
        read_stdin().context("Failed to read from stdin")?
    } else {
        read_file(&args.catalog).with_context(|| format!("Failed to read catalog: {}", args.catalog))?
    };
    let catalog = Catalog::from_json(&json).context("Failed to parse catalog")?;

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(json.len()).bright_white());
        eprintln!("  {} {}", "Movies:".dimmed(), catalog.movies.len().to_string().bright_white());
        eprintln!("  {} {}\n", "Series:".dimmed(), catalog.series.len().to_string().bright_white());
    }

    if catalog.is_empty() {
        echo::print_warning("Catalog contains no movies or series");
        return Ok(());
    }

    if args.verbose {
        echo::print_step(2, 3, &format!("Rendering {} pages in {}", config.dialect, config.language));
    }

    let generator = WikiGenerator::new(config);
    let pages = generator.render(&catalog).context("Failed to render catalog")?;

    if args.verbose {
        echo::print_page_summary(&pages);
        echo::print_step(3, 3, "Writing pages");
    }

    if args.stdout {
        for page in &pages {
            print!("{}", page.content());
        }
    } else if args.dry_run {
        let out_dir = &generator.config().output_dir;
        for page in &pages {
            println!("{}", out_dir.join(page.relative_path()).display());
        }
    } else {
        let out_dir = match generator.config().output_dir.as_os_str() {
            dir if dir.is_empty() => ".".to_string(),
            dir => dir.to_string_lossy().into_owned(),
        };
        let written = generator.write(&pages).with_context(|| format!("Failed to write pages to {}", out_dir))?;
        echo::print_success(&format!("{} pages written to {}", written.len(), out_dir.bright_white()));
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            echo::print_error(&format!("{:#}", error));
            ExitCode::FAILURE
        }
    }
}
