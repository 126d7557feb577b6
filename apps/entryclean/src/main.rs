use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use entryclean_clean_entry::{Config, EntryCleaner};
use entryclean_core::{Compilation, Compiler, EntryConfig, StatsFile};
use env_logger::Env;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

mod report;

#[derive(Parser)]
#[command(name = "entryclean")]
#[command(about = "Post-build cleanup for bundler output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Remove the emitted files of intermediate entry points
    CleanEntry(CleanEntryArgs),
}

#[derive(Debug, Args)]
struct CleanEntryArgs {
    /// Build output directory
    #[arg(long)]
    output_path: PathBuf,

    /// Compiler entry name (repeat for several entries)
    #[arg(long = "entry", required = true)]
    entry: Vec<String>,

    /// Bundler stats file whose chunk file lists are pruned
    #[arg(long)]
    stats: Option<PathBuf>,

    #[command(flatten)]
    plugin: Config,
}

fn main() -> Result<()> {
    // Verbose notices are logged at warn level
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::CleanEntry(args) => {
            let dry_run = args.plugin.dry_run;
            info!("Running entry cleanup in {}", args.output_path.display());

            let mut stats = args.stats.clone().map(StatsFile::load).transpose()?;
            let chunks = match &stats {
                Some(stats) => stats.chunks()?,
                None => Vec::new(),
            };

            let entry = EntryConfig::from_names(args.entry);
            let mut compilation =
                Compilation::from_output_dir(&args.output_path, entry)?.with_chunks(chunks);
            let emitted: Vec<(String, u64)> = compilation
                .assets()
                .iter()
                .map(|(name, asset)| (name.clone(), asset.size))
                .collect();

            let mut compiler = Compiler::new();
            compiler.register(EntryCleaner::from_config(args.plugin)?);
            compiler.emit_finished(&mut compilation)?;

            if let Some(stats) = stats.as_mut()
                && !dry_run
            {
                stats.set_chunks(compilation.chunks());
                stats.save()?;
            }

            let removed: Vec<(String, u64)> = emitted
                .into_iter()
                .filter(|(name, _)| !compilation.output_path().join(name).exists())
                .collect();
            debug!("Removed {} files", removed.len());

            report::print_summary(&mut stdout, &compilation.entry().names(), &removed, dry_run)?;
            writeln!(
                stdout,
                "\n{} Finished in {}ms.",
                "●".bright_blue(),
                start.elapsed().as_millis().to_string().cyan()
            )?;
            stdout.flush()?;

            Ok(())
        }
    }
}
