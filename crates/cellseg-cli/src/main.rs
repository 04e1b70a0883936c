use anyhow::{Context, Result, bail};
use cellseg_config::Config;
use cellseg_engine::{
    LeafBuilder, RopeDocument,
    cells::split_cells,
    snapshot::{Report, normalize_cells, normalize_leaves, render},
};
use cellseg_syntax::lex;
use clap::Parser;
use std::path::{Path, PathBuf};

/// CLI arguments.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "cellseg", version, about = "Report cell intervals and leaf indents of a source file")]
struct Args {
    /// Source file to split into cells.
    file: PathBuf,
    /// Configuration file (overrides `~/.config/cellseg/config.toml`).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Also list every leaf with its computed indent.
    #[arg(long)]
    indent: bool,
    /// Print the report as TOML.
    #[arg(long)]
    toml: bool,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => {
                log::info!("using config {}", path.display());
                Ok(config)
            }
            None => bail!("config file not found: {}", path.display()),
        },
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!("no config at {}, using defaults", Config::config_path().display());
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn build_report(text: &str, config: &Config, with_leaves: bool) -> Result<Report> {
    let doc = RopeDocument::from(text);
    let cells = split_cells(&doc, &config.cell_options())?;

    let leaves = if with_leaves {
        let chain = LeafBuilder::new(&doc, config.indent_options()).build(&lex(text));
        normalize_leaves(&doc, &chain)
    } else {
        vec![]
    };

    Ok(Report {
        cells: normalize_cells(&cells),
        leaves,
    })
}

fn run(args: &Args) -> Result<String> {
    let config = load_config(args.config.as_deref())?;
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let report = build_report(&text, &config, args.indent)?;

    if args.toml {
        return Ok(toml::to_string_pretty(&report)?);
    }

    let mut out = render(&report.cells);
    if args.indent {
        out.push('\n');
        out.push_str(&render(&report.leaves));
    }
    Ok(out)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    print!("{}", run(&args)?);
    Ok(())
}
