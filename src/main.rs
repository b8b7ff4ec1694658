use std::path::PathBuf;

use anyhow::{bail, Context as _};
use clap::{Args, Parser, Subcommand};

use pathplanner::designer::serialization::{load_project, project_info};
use pathplanner::{designer_from_config, init_logging, CommandRegistry, Config, SeasonLoader};

#[derive(Parser, Debug)]
#[command(name = "pathplanner", version, about = "Autonomous routine path planner")]
struct Cli {
    /// Configuration file (TOML or JSON). Defaults to the platform config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a project file holding one empty path.
    New(NewArgs),
    /// Print a summary of a project file.
    Info(InfoArgs),
    /// Generate robot code for a path of a project file.
    Export(ExportArgs),
    /// List seasons found under the base directory.
    Seasons(BaseArgs),
    /// List the commands available for a season.
    Commands(CommandsArgs),
}

#[derive(Args, Debug)]
struct NewArgs {
    file: PathBuf,

    /// Season for the project. Defaults to the configured season.
    #[arg(long)]
    season: Option<String>,
}

#[derive(Args, Debug)]
struct InfoArgs {
    file: PathBuf,
}

#[derive(Args, Debug)]
struct BaseArgs {
    /// Directory holding `seasons/` and `command_library/`.
    #[arg(long)]
    base: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    file: PathBuf,

    /// Path to export, by name. Defaults to the first path.
    #[arg(long)]
    path: Option<String>,

    /// Emit the waypoint blocks only, without header or function wrapper.
    #[arg(long)]
    body_only: bool,

    /// Write the code here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    base: BaseArgs,
}

#[derive(Args, Debug)]
struct CommandsArgs {
    /// Season to load. Defaults to the configured season.
    #[arg(long)]
    season: Option<String>,

    #[command(flatten)]
    base: BaseArgs,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref());

    match cli.cmd {
        Command::New(args) => cmd_new(&config, args),
        Command::Info(args) => cmd_info(args),
        Command::Export(args) => cmd_export(&config, args),
        Command::Seasons(args) => cmd_seasons(&config, args),
        Command::Commands(args) => cmd_commands(&config, args),
    }?;

    Ok(())
}

fn base_path(config: &Config, args: &BaseArgs) -> Option<PathBuf> {
    args.base
        .clone()
        .or_else(|| config.planner.base_path.clone())
}

fn cmd_new(config: &Config, args: NewArgs) -> anyhow::Result<()> {
    if args.file.exists() {
        bail!("{} already exists", args.file.display());
    }
    let season = args
        .season
        .unwrap_or_else(|| config.planner.default_season.clone());

    let mut state = designer_from_config(config);
    state.new_project(&season);
    state.save_to_file(&args.file)?;

    eprintln!("created {} (season {})", args.file.display(), season);
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let info = project_info(&args.file)
        .with_context(|| format!("read project info from {}", args.file.display()))?;

    println!("file:     {}", args.file.display());
    println!("season:   {}", info.season);
    println!("version:  {}", info.version.as_deref().unwrap_or("-"));
    println!("modified: {}", info.modified.as_deref().unwrap_or("-"));
    println!("paths:    {}", info.path_count);

    match load_project(&args.file) {
        Ok(project) => {
            for path in &project.paths {
                println!(
                    "  {} ({} alliance, {} side): {} waypoints",
                    path.name,
                    path.alliance,
                    path.side,
                    path.len()
                );
            }
        }
        Err(e) => tracing::warn!("Could not read paths: {:#}", anyhow::Error::from(e)),
    }
    Ok(())
}

fn cmd_export(config: &Config, args: ExportArgs) -> anyhow::Result<()> {
    let mut state = designer_from_config(config);
    if let Some(base) = base_path(config, &args.base) {
        state.set_season_loader(SeasonLoader::new(base));
    }
    state.load_from_file(&args.file)?;

    if let Some(name) = &args.path {
        let index = state
            .project()
            .paths
            .iter()
            .position(|p| &p.name == name)
            .with_context(|| format!("no path named '{}' in {}", name, args.file.display()))?;
        state.select_path(index);
    }

    let code = if args.body_only {
        state.generate_body()
    } else {
        state.generate_code()
    };

    match &args.output {
        Some(out) => {
            std::fs::write(out, &code).with_context(|| format!("write {}", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{}", code),
    }
    Ok(())
}

fn season_loader(config: &Config, args: &BaseArgs) -> anyhow::Result<SeasonLoader> {
    let base = match base_path(config, args) {
        Some(base) => base,
        None => std::env::current_dir().context("resolve current directory")?,
    };
    Ok(SeasonLoader::new(base))
}

fn cmd_seasons(config: &Config, args: BaseArgs) -> anyhow::Result<()> {
    let loader = season_loader(config, &args)?;
    let seasons = loader.list_seasons();
    if seasons.is_empty() {
        eprintln!("no seasons under {}", loader.seasons_path().display());
    }
    for season in seasons {
        println!("{}", season);
    }
    Ok(())
}

fn cmd_commands(config: &Config, args: CommandsArgs) -> anyhow::Result<()> {
    let season = args
        .season
        .unwrap_or_else(|| config.planner.default_season.clone());
    let registry = match base_path(config, &args.base) {
        Some(base) => SeasonLoader::new(base).load_season_or_default(&season),
        None => CommandRegistry::with_defaults(),
    };

    for (category, commands) in registry.by_category() {
        println!("{}:", category);
        for command in commands {
            println!("  {:<20} {:<24} {}", command.id, command.name, command.code_template);
        }
    }
    for sequence in registry.sequences() {
        println!(
            "sequence {}: {}",
            sequence.id,
            sequence.command_ids.join(", ")
        );
    }
    Ok(())
}
