//! bpd-dump: render every behavior-provider definition in a JSON snapshot
//! as a Graphviz file.
//!
//! ```text
//! bpd-dump snapshot.json out/                  # one <path>.gv per definition
//! bpd-dump snapshot.json out/ --csv --json     # plus nodes.csv, edges.csv, graphs.jsonl
//! bpd-dump snapshot.json out/ --config dump.json
//! ```
//!
//! The config file holds two optional sections:
//!
//! ```json
//! { "graph": { "on_error": "skip_sequence" }, "dot": { "rankdir": "LR" } }
//! ```

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use bpd_core::load_snapshot_path;
use bpd_graph::{build_graphs, ErrorPolicy, GraphConfig, GraphModel};
use bpd_output::{CsvWriter, DotConfig, DotWriter, GraphWriter, JsonWriter};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "bpd-dump")]
#[command(about = "Render behavior-provider definitions as Graphviz graphs", long_about = None)]
struct Cli {
    /// Snapshot file: one definition object or an array of them.
    input: PathBuf,

    /// Directory receiving the output files (created if missing).
    output: PathBuf,

    /// JSON file with optional `graph` and `dot` sections.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write nodes.csv and edges.csv.
    #[arg(long)]
    csv: bool,

    /// Also write every graph as one line of graphs.jsonl.
    #[arg(long)]
    json: bool,

    /// Drop a failing sequence instead of the whole definition.
    #[arg(long)]
    skip_sequence: bool,
}

// ── Config file ───────────────────────────────────────────────────────────────

#[derive(Default, Deserialize)]
#[serde(default)]
struct AppConfig {
    graph: GraphConfig,
    dot:   DotConfig,
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("parsing config {}", path.display()))
}

/// File-system-safe name for a definition path such as `GD_Foo.BPD_0`.
fn file_stem(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect();
    if stem.is_empty() { "unnamed".to_owned() } else { stem }
}

/// [`file_stem`] made unique within one run: a taken stem gets the first
/// free `_<n>` suffix, counting from 1.
fn unique_stem(title: &str, used: &mut HashSet<String>) -> String {
    let stem = file_stem(title);
    if used.insert(stem.clone()) {
        return stem;
    }
    let renamed = (1..)
        .map(|n| format!("{stem}_{n}"))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| stem.clone());
    used.insert(renamed.clone());
    tracing::warn!(definition = title, file = %renamed, "file name already used, renaming");
    renamed
}

fn write_dot(dir: &Path, stem: &str, graph: &GraphModel, config: &DotConfig) -> Result<()> {
    let path = dir.join(format!("{stem}.gv"));
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = DotWriter::new(BufWriter::new(file), config.clone());
    writer.write_graph(graph)?;
    writer.finish()?;
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    if cli.skip_sequence {
        config.graph.on_error = ErrorPolicy::SkipSequence;
    }

    let t0 = Instant::now();
    let defs = load_snapshot_path(&cli.input)
        .with_context(|| format!("loading snapshot {}", cli.input.display()))?;
    tracing::info!(definitions = defs.len(), "loaded snapshot");

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("creating output directory {}", cli.output.display()))?;

    let mut csv = if cli.csv { Some(CsvWriter::new(&cli.output)?) } else { None };
    let mut json = if cli.json {
        let file = File::create(cli.output.join("graphs.jsonl"))?;
        Some(JsonWriter::new(BufWriter::new(file)))
    } else {
        None
    };

    let mut stems = HashSet::new();
    let (mut written, mut failed) = (0usize, 0usize);
    for result in build_graphs(&defs, &config.graph) {
        let graph = match result {
            Ok(graph) => graph,
            Err(e) => {
                tracing::error!(error = %e, "definition not rendered");
                failed += 1;
                continue;
            }
        };
        let stem = unique_stem(&graph.title, &mut stems);
        write_dot(&cli.output, &stem, &graph, &config.dot)?;
        if let Some(w) = csv.as_mut() {
            w.write_graph(&graph)?;
        }
        if let Some(w) = json.as_mut() {
            w.write_graph(&graph)?;
        }
        written += 1;
    }

    if let Some(w) = csv.as_mut() {
        w.finish()?;
    }
    if let Some(w) = json.as_mut() {
        w.finish()?;
    }

    println!(
        "{written} graph(s) written to {}, {failed} failed ({:.2?})",
        cli.output.display(),
        t0.elapsed(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{file_stem, unique_stem};

    #[test]
    fn stem_replaces_unsafe_characters() {
        assert_eq!(file_stem("GD_Foo.Bar:BPD_0"), "GD_Foo.Bar_BPD_0");
        assert_eq!(file_stem(""), "unnamed");
    }

    #[test]
    fn colliding_stems_get_suffixes() {
        let mut seen = HashSet::new();
        assert_eq!(unique_stem("GD_A:BPD", &mut seen), "GD_A_BPD");
        assert_eq!(unique_stem("GD_A/BPD", &mut seen), "GD_A_BPD_1");
        assert_eq!(unique_stem("GD_A BPD", &mut seen), "GD_A_BPD_2");
        assert_eq!(unique_stem("GD_B", &mut seen), "GD_B");
        assert_eq!(unique_stem("GD_A_BPD_1", &mut seen), "GD_A_BPD_1_1");
    }
}
