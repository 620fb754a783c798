//! Inflate CLI
//!
//! Loads a measured scene from JSON, applies one resize pass to a selected
//! target, and prints the tree before and after with the changed heights
//! highlighted.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;

use inflate_common::warning::clear_warnings;
use inflate_dom::NodeId;
use inflate_engine::{FitOptions, Geometry, InflateOptions, MeasuredDocument, SceneNode};

/// Resize an element and its ancestors in a measured scene
#[derive(Parser, Debug)]
#[command(name = "inflate")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Expand #content to 300px of content height, growing ancestors as required
    inflate scene.json --target '#content' --height 300

    # Fit #content (and everything between) into #container
    inflate scene.json --target '#content' --fit-to '#container'

    # Show every measurement and mutation decision
    inflate scene.json --target '#content' --fit-to '#container' --debug
"#)]
struct Args {
    /// Scene description file (JSON)
    scene: PathBuf,

    /// Selector for the element(s) to resize
    #[arg(long)]
    target: String,

    /// Absolute content-height target in px (unconstrained expansion)
    #[arg(long, conflicts_with = "fit_to")]
    height: Option<f64>,

    /// Container selector (constrained fitting)
    #[arg(long)]
    fit_to: Option<String>,

    /// Print a trace of every measurement and mutation decision
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.scene)
        .with_context(|| format!("failed to read scene file {}", args.scene.display()))?;
    let scene: SceneNode = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse scene file {}", args.scene.display()))?;

    clear_warnings();
    let mut doc = MeasuredDocument::from_scene(&scene);

    let selection = doc.select(&args.target)?;
    if selection.is_empty() {
        bail!("no elements match target selector '{}'", args.target);
    }

    println!("=== Before ===");
    print_tree(&doc)?;
    let before = height_snapshot(&doc);

    if let Some(container) = &args.fit_to {
        let options = FitOptions {
            debug: args.debug,
            ..FitOptions::default()
        };
        let _ = doc.inflate_to(selection, container, &options)?;
    } else if let Some(height) = args.height {
        let options = InflateOptions {
            height: Some(height),
            debug: args.debug,
            ..InflateOptions::default()
        };
        let _ = doc.inflate(selection, &options);
    } else {
        bail!("pass --height <px> or --fit-to <selector>");
    }

    println!("\n=== After ===");
    print_tree(&doc)?;

    print_changes(&doc, &before);
    Ok(())
}

/// Render the measured tree to stdout.
fn print_tree(doc: &MeasuredDocument) -> Result<()> {
    let mut rendered = String::new();
    doc.write_tree(&mut rendered)?;
    print!("{rendered}");
    Ok(())
}

/// Content heights of every element, in tree order.
fn height_snapshot(doc: &MeasuredDocument) -> Vec<(NodeId, f64)> {
    doc.tree()
        .elements()
        .map(|el| (el, doc.content_height(el)))
        .collect()
}

/// Print one colored line per element whose content height changed.
fn print_changes(doc: &MeasuredDocument, before: &[(NodeId, f64)]) {
    let mut any = false;
    for &(el, old) in before {
        let new = doc.content_height(el);
        if (new - old).abs() > f64::EPSILON {
            if !any {
                println!("\n=== Changed ===");
                any = true;
            }
            println!(
                "  {}: {} -> {}",
                doc.describe(el),
                old.yellow(),
                new.green()
            );
        }
    }
    if !any {
        println!("\n(no heights changed)");
    }
}
