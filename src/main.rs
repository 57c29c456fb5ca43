use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use elevation_solver::bands::derive_bands;
use elevation_solver::biomes::BiomeCatalog;
use elevation_solver::boundary::EdgePolicy;
use elevation_solver::export::export_preview;
use elevation_solver::graph::WorldGraph;
use elevation_solver::loader;
use elevation_solver::patch::{build_patch, write_patch};
use elevation_solver::relax::{relax, RelaxParams};

#[derive(Parser, Debug)]
#[command(name = "elevation_solver")]
#[command(about = "Relax hex-map elevations toward biome and neighbor constraints")]
struct Args {
    /// Directory of hex records, grouped in region subdirectories
    #[arg(long)]
    hex_dir: PathBuf,

    /// Directory of river path records
    #[arg(long)]
    rivers_dir: Option<PathBuf>,

    /// Output patch file
    #[arg(short, long, default_value = "elevation-patch.json")]
    output: PathBuf,

    /// Maximum number of relaxation passes
    #[arg(long, default_value = "25")]
    iterations: usize,

    /// Maximum elevation change per node per pass
    #[arg(long, default_value = "200")]
    step_size: f64,

    /// Stop early once the total per-pass change drops below this value
    #[arg(long)]
    threshold: Option<f64>,

    /// Reset all non-anchored elevations to 0 before the first pass
    #[arg(long)]
    zero_init: bool,

    /// Expected elevation drop along river flow edges
    #[arg(long, default_value = "300")]
    flow_drop: f64,

    /// Omit the min/max elevation bands from the patch
    #[arg(long)]
    reduced: bool,

    /// Export a PNG preview of the solved elevation field
    #[arg(long)]
    preview: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let catalog = BiomeCatalog::standard();
    let policy = EdgePolicy::standard();

    println!("Loading hex records from {}...", args.hex_dir.display());
    let records = loader::load_hex_records(&args.hex_dir)?;
    println!("Loaded {} hex records", records.len());

    let mut graph = WorldGraph::from_records(records, &catalog);
    graph.link_neighbors(&policy);
    println!(
        "Graph: {} nodes ({} anchored to {})",
        graph.len(),
        graph.anchor_count(),
        catalog.ocean_biome()
    );

    if let Some(rivers_dir) = &args.rivers_dir {
        let rivers = loader::load_river_records(rivers_dir)?;
        let mut edges = 0;
        for river in &rivers {
            edges += graph.add_river_path(&river.points);
        }
        println!("Loaded {} river paths ({} flow edges)", rivers.len(), edges);
    }

    let params = RelaxParams {
        iterations: args.iterations,
        step_size: args.step_size,
        threshold: args.threshold,
        zero_init: args.zero_init,
        flow_drop: args.flow_drop,
    };
    println!(
        "Relaxing elevations ({} passes max, step {})...",
        params.iterations, params.step_size
    );
    let stats = relax(&mut graph, &catalog, &params);
    if stats.converged {
        println!(
            "Converged after {} passes (total change {:.0})",
            stats.passes, stats.final_change
        );
    } else {
        println!(
            "Completed {} passes (final change {:.0})",
            stats.passes, stats.final_change
        );
    }

    println!("Deriving elevation bands...");
    derive_bands(&mut graph, &catalog);

    let patch = build_patch(&graph, args.reduced);
    write_patch(&patch, &args.output)
        .with_context(|| format!("writing patch to {}", args.output.display()))?;
    println!(
        "Patch written to {} ({} entries)",
        args.output.display(),
        patch.len()
    );

    if let Some(preview) = &args.preview {
        export_preview(&graph, preview)
            .with_context(|| format!("writing preview to {}", preview.display()))?;
        println!("Preview written to {}", preview.display());
    }

    Ok(())
}
