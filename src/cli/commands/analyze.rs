//! Analyze command - tree statistics and the engine's choice for a position

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use serde_json::to_string_pretty;

use crate::{
    cli::output::{create_spinner, print_kv, print_section},
    engine::{select_move, tree::build_tree, TreeNode},
    game::{Board, Player},
};

use super::play::Side;

/// Report format for the analysis
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Board as 49 cell characters in row-major order (X, O and '.';
    /// whitespace is ignored)
    #[arg(long)]
    pub board: String,

    /// Side the engine chooses a move for
    #[arg(long, value_enum)]
    pub perspective: Side,

    /// Remaining turn budget; the ply bound is twice this
    #[arg(long, default_value_t = 2)]
    pub turns: u32,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write one CSV row per root child to this path
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// One row per immediate child of the root
#[derive(Debug, Serialize)]
struct RootChildRow {
    #[serde(rename = "move")]
    mv: String,
    score: i32,
    nodes: usize,
    height: usize,
}

#[derive(Debug, Serialize)]
struct AnalysisReport {
    perspective: String,
    ply_bound: u32,
    nodes: usize,
    height: usize,
    chosen_move: Option<String>,
    children: Vec<RootChildRow>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board).context("parsing --board")?;
    let perspective = Player::from(args.perspective);
    let ply_bound = args.turns.saturating_mul(2);

    // Exhaustive expansion is exponential in the ply bound; show a spinner
    // rather than going silent on deep analyses.
    let spinner = create_spinner(&format!("Building tree to {ply_bound} plies..."));
    let root = build_tree(board, perspective, ply_bound);
    spinner.finish_and_clear();

    let report = build_report(&root, perspective, ply_bound);

    match args.format {
        ReportFormat::Text => print_report(&board, &report),
        ReportFormat::Json => println!("{}", to_string_pretty(&report)?),
    }

    if let Some(path) = args.export {
        export_children(&report.children, &path)
            .with_context(|| format!("exporting CSV to {}", path.display()))?;
        println!("Report exported to: {}", path.display());
    }

    Ok(())
}

fn build_report(root: &TreeNode, perspective: Player, ply_bound: u32) -> AnalysisReport {
    let children = root
        .children
        .iter()
        .map(|child| RootChildRow {
            mv: child.mv.map(|m| m.to_string()).unwrap_or_default(),
            score: child.score,
            nodes: child.node_count(),
            height: child.height(),
        })
        .collect();

    AnalysisReport {
        perspective: perspective.to_string(),
        ply_bound,
        nodes: root.node_count(),
        height: root.height(),
        chosen_move: select_move(root).map(|m| m.to_string()),
        children,
    }
}

fn print_report(board: &Board, report: &AnalysisReport) {
    print_section("Position");
    println!("{board}");

    print_section("Analysis");
    print_kv("Perspective", &report.perspective);
    print_kv("Ply bound", &report.ply_bound.to_string());
    print_kv("Nodes", &report.nodes.to_string());
    print_kv("Tree height", &report.height.to_string());
    print_kv(
        "Chosen move",
        report.chosen_move.as_deref().unwrap_or("(no legal move)"),
    );

    if !report.children.is_empty() {
        println!("\nRoot children:");
        for row in &report.children {
            println!(
                "  {:12} score={:<5} nodes={:<8} height={}",
                row.mv, row.score, row.nodes, row.height
            );
        }
    }
}

fn export_children(rows: &[RootChildRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
