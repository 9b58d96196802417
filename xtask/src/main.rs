use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dungeon_level::{Cell, load_map_ascii};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for the dungeon starter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: fmt, clippy, tests, doc, maps
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
    /// Parse every map under assets/maps and check it is playable
    Maps,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            run_fmt()?;
            run_clippy()?;
            run_tests()?;
            run_doc()?;
            run_maps()?;
        }
        Commands::Fmt => run_fmt()?,
        Commands::Clippy => run_clippy()?,
        Commands::Test => run_tests()?,
        Commands::Doc => run_doc()?,
        Commands::Build => run_build()?,
        Commands::Maps => run_maps()?,
    }

    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    println!("==> Running cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {} failed", args[0]);
    }
    Ok(())
}

fn run_fmt() -> Result<()> {
    cargo(&["fmt", "--all", "--", "--check"])
}

fn run_clippy() -> Result<()> {
    cargo(&[
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ])
}

fn run_tests() -> Result<()> {
    cargo(&["test", "--workspace"])
}

fn run_doc() -> Result<()> {
    cargo(&["doc", "--workspace", "--no-deps"])
}

fn run_build() -> Result<()> {
    cargo(&["build", "--workspace"])
}

fn maps_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets/maps")
}

fn run_maps() -> Result<()> {
    let dir = maps_dir();
    println!("==> Validating maps in {}", dir.display());

    let mut failures = 0;
    let entries = std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().is_none_or(|ext| ext != "map") {
            continue;
        }
        let level = load_map_ascii(&path)?;
        let player = level.player();
        if level.is_empty() {
            println!("  FAIL {}: empty map", path.display());
            failures += 1;
        } else if level.cell(player.x, player.y) != Some(Cell::Floor) {
            println!(
                "  FAIL {}: player start ({}, {}) is not floor",
                path.display(),
                player.x,
                player.y
            );
            failures += 1;
        } else {
            println!(
                "  ok   {} ({}x{})",
                path.display(),
                level.width(),
                level.height()
            );
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} map(s) failed validation");
    }
    Ok(())
}
