use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vgir", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate all built-in scenes plus the aggregate manifest.
    Generate(GenerateArgs),
    /// List the built-in scene catalog.
    List,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output directory for .irbin files and manifest.json.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Library tracing goes to stderr; stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::List => cmd_list(),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let manifest = vgir::generate::generate_into(&args.out)?;
    for entry in &manifest.scenes {
        let size = fs::metadata(args.out.join(&entry.ir_path))?.len();
        println!(
            "Generated: {} ({} bytes, hash: {})",
            entry.ir_path, size, entry.scene_hash
        );
    }
    println!(
        "Manifest written to: {} ({} scenes)",
        args.out.join("manifest.json").display(),
        manifest.scenes.len()
    );
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    for def in vgir::scenes::builtin_scenes() {
        println!("{:<28} {}", def.scene_id, def.description);
    }
    Ok(())
}
