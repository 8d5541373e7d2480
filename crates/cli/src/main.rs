use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::figure::rand::{draw_figure, ReplayToken, SampleCfg};
use planar::figure::{Figure, FigureKind, Hexagon, Pentagon, Point, Rhombus};
use planar::FigureStore;
use serde_json::{json, Value};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planar figure demos")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the fixed demo figures and print count and total area
    Demo {
        /// Emit a JSON summary instead of the one-line report
        #[arg(long)]
        json: bool,
        /// Write the JSON summary to this path instead of stdout (implies --json)
        #[arg(long)]
        out: Option<String>,
    },
    /// Draw random figures and print count and total area
    Sample {
        #[arg(long, default_value_t = 8)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo { json, out } => demo(json, out),
        Action::Sample {
            count,
            seed,
            json,
            out,
        } => sample(count, seed, json, out),
    }
}

fn demo(json: bool, out: Option<String>) -> Result<()> {
    tracing::info!(json, out = ?out, "demo");
    let store = demo_store();
    report(&store, json, out)
}

fn sample(count: usize, seed: u64, json: bool, out: Option<String>) -> Result<()> {
    tracing::info!(count, seed, json, "sample");
    let cfg = SampleCfg::default();
    let kinds = [FigureKind::Rhombus, FigureKind::Pentagon, FigureKind::Hexagon];
    let store: FigureStore = (0..count)
        .map(|i| {
            draw_figure(
                kinds[i % kinds.len()],
                cfg,
                ReplayToken {
                    seed,
                    index: i as u64,
                },
            )
        })
        .collect();
    report(&store, json, out)
}

/// One rhombus, one pentagon, one hexagon with fixed coordinates.
fn demo_store() -> FigureStore {
    let mut store = FigureStore::new();
    store.add(Figure::Rhombus(Rhombus::new(
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        Point::new(6.0, 0.0),
        Point::new(3.0, -4.0),
    )));
    store.add(Figure::Pentagon(Pentagon::new([
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(0.0, 2.0),
    ])));
    store.add(Figure::Hexagon(Hexagon::new([
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(0.0, 2.0),
        Point::new(-1.0, 1.0),
    ])));
    store
}

fn report(store: &FigureStore, json: bool, out: Option<String>) -> Result<()> {
    if !json && out.is_none() {
        println!("Figures: {} Total area: {}", store.len(), store.total_area());
        return Ok(());
    }
    let doc = summary(store);
    match out {
        Some(path) => write_summary(Path::new(&path), &doc),
        None => {
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
    }
}

fn summary(store: &FigureStore) -> Value {
    let figures: Vec<Value> = store
        .iter()
        .map(|f| {
            let c = f.centroid();
            json!({
                "kind": kind_name(f.kind()),
                "area": f.area(),
                "centroid": { "x": c.x, "y": c.y },
            })
        })
        .collect();
    json!({
        "count": store.len(),
        "total_area": store.total_area(),
        "figures": figures,
    })
}

fn kind_name(kind: FigureKind) -> &'static str {
    match kind {
        FigureKind::Rhombus => "rhombus",
        FigureKind::Pentagon => "pentagon",
        FigureKind::Hexagon => "hexagon",
    }
}

fn write_summary(path: &Path, doc: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
