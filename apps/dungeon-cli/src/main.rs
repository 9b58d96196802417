use anyhow::Context;
use clap::{Parser, Subcommand};
use dungeon_level::{Cell, load_map_ascii};
use dungeon_mesh::{MeshOptions, build_world_mesh};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dungeon-cli", about = "CLI tool for dungeon maps")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print tool version and crate info
    Info,
    /// Parse a map and print its layout
    Inspect {
        /// Path to an ASCII map
        map: PathBuf,
        /// Print the parsed level as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the world mesh for a map and print vertex counts
    Mesh {
        /// Path to an ASCII map
        map: PathBuf,
        /// Drop wall faces hidden between adjacent wall cells
        #[arg(long)]
        cull: bool,
        /// Wall height in world units
        #[arg(long, default_value_t = 1.5)]
        wall_height: f32,
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    match cli.command {
        Commands::Info => {
            println!("dungeon-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("level: {}", dungeon_level::crate_info());
            println!("mesh: {}", dungeon_mesh::crate_info());
        }
        Commands::Inspect { map, json } => {
            let level = load_map_ascii(&map)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&level).context("serializing level")?
                );
                return Ok(());
            }
            let player = level.player();
            println!("Map: {}", map.display());
            println!("Size: {}x{}", level.width(), level.height());
            println!("Player start: ({}, {})", player.x, player.y);
            println!(
                "Cells: {} wall, {} floor",
                level.count(Cell::Wall),
                level.count(Cell::Floor)
            );
            if level.cell(player.x, player.y) != Some(Cell::Floor) {
                tracing::warn!("player start is not on a floor cell");
            }
            print!("{level}");
        }
        Commands::Mesh {
            map,
            cull,
            wall_height,
            json,
        } => {
            let level = load_map_ascii(&map)?;
            let options = MeshOptions {
                wall_height,
                cull_shared_faces: cull,
                ..MeshOptions::default()
            };
            let stats = build_world_mesh(&level, &options).stats();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&stats).context("serializing mesh stats")?
                );
                return Ok(());
            }
            println!(
                "Floor: {} vertices, {} triangles",
                stats.floor_vertices, stats.floor_triangles
            );
            println!(
                "Walls: {} vertices, {} triangles",
                stats.wall_vertices, stats.wall_triangles
            );
        }
    }

    Ok(())
}
