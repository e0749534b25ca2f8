//! Statboard demo binary.
//!
//! Builds a board from a TOML fixture (or a built-in sample), prints the
//! rows, then toggles the suggestion section and prints the incremental
//! update stream a display layer would apply instead of redrawing.

mod fixture;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use statboard_core::{build_items, BoardDiffCallback, BoardItem, CardRefresh};
use statboard_diff::{diff, UpdateOp};

use fixture::BoardFixture;

/// Build a status board and show its incremental updates
#[derive(Parser, Debug)]
#[command(name = "statboard")]
#[command(about = "Build a status board and show its incremental updates", long_about = None)]
struct Args {
    /// Path to a TOML board fixture (built-in sample when omitted)
    #[arg(long, value_name = "PATH")]
    fixture: Option<PathBuf>,

    /// Start with the suggestion section collapsed
    #[arg(long)]
    collapsed: bool,

    /// Emit the update stream as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so stdout stays clean for board/update output.
    // Level is controlled by the STATBOARD_LOG environment variable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("STATBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let fixture = match &args.fixture {
        Some(path) => BoardFixture::load(path)?,
        None => BoardFixture::sample(),
    };
    let (conditions, categories, suggestions) = fixture.into_sources();

    let old = build_items(
        Some(&conditions),
        Some(&categories),
        Some(&suggestions),
        !args.collapsed,
    );
    println!("board ({} rows):", old.len());
    for (position, item) in old.iter().enumerate() {
        println!("  {position:>3}  {}", render_row(item));
    }

    // Toggle the suggestion section and show the incremental path.
    let new = build_items(
        Some(&conditions),
        Some(&categories),
        Some(&suggestions),
        args.collapsed,
    );
    let ops = diff(&BoardDiffCallback::new(&old, &new));
    info!(ops = ops.len(), "computed update stream for suggestion toggle");

    println!();
    println!("suggestion toggle -> {} update(s):", ops.len());
    for op in &ops {
        if args.json {
            println!("{}", serde_json::to_string(op)?);
        } else {
            println!("  {}", render_op(op));
        }
    }

    Ok(())
}

fn render_row(item: &BoardItem) -> String {
    match item {
        BoardItem::Spacer => "~".to_string(),
        BoardItem::ConditionCard(c) => format!("[condition] {}", c.title()),
        BoardItem::SuggestionHeader(h) => format!(
            "[suggestions] showing {} ({} hidden)",
            h.shown_count, h.hidden_count
        ),
        BoardItem::SuggestionCard(s) => format!("  [suggestion] {}", s.title),
        BoardItem::CategoryHeader(c) => format!("[category] {}", c.title),
        BoardItem::TileCard(t) => format!("  [tile] {}", t.title),
    }
}

fn render_op(op: &UpdateOp<CardRefresh>) -> String {
    match op {
        UpdateOp::Insert { position, count } => {
            format!("insert {count} row(s) at {position}")
        }
        UpdateOp::Remove { position, count } => {
            format!("remove {count} row(s) at {position}")
        }
        UpdateOp::Move { from, to } => format!("move row {from} -> {to}"),
        UpdateOp::Change {
            position,
            count,
            payload,
        } => {
            let how = match payload {
                Some(CardRefresh) => "refresh in place",
                None => "full rebind",
            };
            format!("change {count} row(s) at {position} ({how})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_op_text() {
        let op: UpdateOp<CardRefresh> = UpdateOp::Change {
            position: 1,
            count: 1,
            payload: Some(CardRefresh),
        };
        assert_eq!(render_op(&op), "change 1 row(s) at 1 (refresh in place)");
    }

    #[test]
    fn test_ops_serialize_as_tagged_json() {
        let op: UpdateOp<CardRefresh> = UpdateOp::Insert {
            position: 2,
            count: 1,
        };
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"op":"insert","position":2,"count":1}"#);
    }
}
