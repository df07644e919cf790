//! CLI command implementations.

use crate::config::{LadderConfig, DEFAULT_CONFIG_FILE};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use ladder_core::{load_dictionary, parse_dictionary, Alphabet, LoadReport};
use ladder_graph::{differing_position, GraphBuilder, PathError, WordGraph};
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// A built graph plus where it came from.
struct LoadedGraph {
    graph: WordGraph,
    origin: String,
    word_length: usize,
    build_ms: u128,
}

/// Writes the resolved configuration to `ladder.json`.
pub fn init(config: &LadderConfig) -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::write(path, serde_json::to_string_pretty(config)?)?;

    println!("{} Wrote {}", "✓".green(), path.display());
    println!("  Run {} to build the graph", "ladder stats".cyan());

    Ok(())
}

fn read_words(config: &LadderConfig, alphabet: &Alphabet) -> Result<(LoadReport, String)> {
    let dict = config.dictionary()?;

    if dict == Path::new("-") {
        let report = parse_dictionary(io::stdin().lock(), &config.words, alphabet)?;
        Ok((report, "<stdin>".to_string()))
    } else {
        let report = load_dictionary(dict, &config.words, alphabet)?;
        Ok((report, dict.display().to_string()))
    }
}

/// Loads the dictionary and builds the graph behind a spinner.
fn load_graph(config: &LadderConfig) -> Result<LoadedGraph> {
    let alphabet = Alphabet::new(&config.alphabet)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Reading dictionary...");

    let (report, origin) = match read_words(config, &alphabet) {
        Ok(loaded) => loaded,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    spinner.set_message(format!("Linking {} words...", report.words.len()));
    let start = Instant::now();
    let graph = GraphBuilder::with_options(config.build).build(&report.words);
    let build_ms = start.elapsed().as_millis();

    spinner.finish_and_clear();

    if report.short_lines > 0 {
        println!(
            "{} skipped {} lines shorter than {} characters",
            "⚠".yellow(),
            report.short_lines,
            config.words.word_length
        );
    }

    Ok(LoadedGraph {
        graph,
        origin,
        word_length: config.words.word_length,
        build_ms,
    })
}

/// Prints the node, edge and component summary, plus the farthest word
/// from `from` when given.
pub fn stats(config: &LadderConfig, from: Option<&str>, json_output: bool) -> Result<()> {
    let loaded = load_graph(config)?;
    let stats = loaded.graph.stats();
    let farthest = farthest(&loaded.graph, from)?;

    if json_output {
        let output = serde_json::json!({
            "dictionary": loaded.origin,
            "word_length": loaded.word_length,
            "stats": stats,
            "build_ms": loaded.build_ms,
            "parallel": config.build.parallel,
            "farthest": farthest.map(|(word, steps)| serde_json::json!({
                "from": from,
                "word": word,
                "steps": steps
            }))
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "Loaded {} containing {} {}-letter words.",
        loaded.origin.cyan(),
        stats.node_count.to_string().cyan(),
        loaded.word_length
    );
    println!("Two words are connected if they differ in one letter.");
    println!(
        "Graph has {} nodes with {} edges",
        stats.node_count.to_string().bold(),
        stats.edge_count.to_string().bold()
    );
    println!("{} connected components", stats.components.to_string().bold());
    println!(
        "{}",
        format!(
            "{} isolated words, max degree {}, built in {}ms",
            stats.isolated, stats.max_degree, loaded.build_ms
        )
        .dimmed()
    );
    if let (Some(from), Some((word, steps))) = (from, farthest) {
        println!(
            "Farthest from {} is {} at {} steps",
            from.cyan(),
            word.cyan(),
            steps.to_string().bold()
        );
    }

    Ok(())
}

fn farthest<'g>(graph: &'g WordGraph, from: Option<&str>) -> Result<Option<(&'g str, usize)>> {
    match from {
        Some(word) => Ok(Some(graph.farthest_from(word)?)),
        None => Ok(None),
    }
}

/// Finds the shortest ladder between two words.
pub fn path(config: &LadderConfig, source: &str, target: &str, json_output: bool) -> Result<()> {
    let loaded = load_graph(config)?;
    let result = loaded.graph.shortest_path(source, target);

    if json_output {
        let path = match &result {
            Ok(path) => Some(path.clone()),
            Err(PathError::NoPath { .. }) => None,
            Err(e) => return Err(e.clone().into()),
        };
        let output = serde_json::json!({
            "source": source,
            "target": target,
            "found": path.is_some(),
            "steps": path.as_ref().map(|p| p.len() - 1),
            "path": path
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match result {
        Ok(path) => {
            println!(
                "{} {} → {} in {} steps",
                "✓".green(),
                source.cyan(),
                target.cyan(),
                path.len() - 1
            );
            print_ladder(&path);
            Ok(())
        }
        Err(PathError::NoPath { .. }) => {
            println!("No ladder between {} and {}", source.cyan(), target.cyan());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Runs every configured source/target pair.
pub fn ladders(config: &LadderConfig) -> Result<()> {
    let pairs = config.ladder_pairs();
    if pairs.is_empty() {
        println!(
            "No ladder pairs for {}-letter words; add \"pairs\" to {}",
            config.words.word_length, DEFAULT_CONFIG_FILE
        );
        return Ok(());
    }

    let loaded = load_graph(config)?;

    for ((source, target), outcome) in pairs.iter().zip(run_pairs(&loaded.graph, &pairs)) {
        println!("Shortest path between {} and {} is", source.cyan(), target.cyan());
        match outcome {
            Ok(path) => print_ladder(&path),
            Err(PathError::NoPath { .. }) => println!("  {}", "None".dimmed()),
            Err(PathError::WordNotFound(word)) => {
                println!("  {} {} is not in the dictionary", "⚠".yellow(), word)
            }
        }
    }

    Ok(())
}

type PairOutcome<'g> = std::result::Result<Vec<&'g str>, PathError>;

fn run_pairs<'g>(graph: &'g WordGraph, pairs: &[(String, String)]) -> Vec<PairOutcome<'g>> {
    pairs
        .iter()
        .map(|(source, target)| graph.shortest_path(source, target))
        .collect()
}

/// Lists one-letter neighbors of a word.
pub fn neighbors(config: &LadderConfig, word: &str) -> Result<()> {
    let loaded = load_graph(config)?;

    let neighbors = match loaded.graph.neighbors(word) {
        Some(neighbors) => neighbors,
        None => return Err(PathError::WordNotFound(word.to_string()).into()),
    };

    if neighbors.is_empty() {
        println!("{} has no one-letter neighbors", word.cyan());
        return Ok(());
    }

    println!("{} has {} neighbors:\n", word.cyan(), neighbors.len());
    for neighbor in neighbors {
        println!("  {}", highlight(neighbor, differing_position(word, neighbor)));
    }

    Ok(())
}

/// Lists the largest connected components.
pub fn components(config: &LadderConfig, limit: usize) -> Result<()> {
    const PREVIEW: usize = 8;

    let loaded = load_graph(config)?;
    let components = loaded.graph.components();

    println!("Found {} components:\n", components.len());

    for component in components.iter().take(limit) {
        let preview = component
            .iter()
            .take(PREVIEW)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        let more = if component.len() > PREVIEW { " ..." } else { "" };
        println!(
            "  {} {}{}",
            format!("{:>6}", component.len()).yellow(),
            preview,
            more.dimmed()
        );
    }
    if components.len() > limit {
        println!("  ... and {} more", components.len() - limit);
    }

    Ok(())
}

/// Writes nodes, edges and stats as JSON.
pub fn export(config: &LadderConfig, output: &Path) -> Result<()> {
    let loaded = load_graph(config)?;
    export_graph(&loaded.graph, output)
}

fn export_graph(graph: &WordGraph, path: &Path) -> Result<()> {
    let nodes: Vec<_> = graph.nodes().collect();

    let export = serde_json::json!({
        "version": "1.0",
        "stats": graph.stats(),
        "nodes": nodes,
        "edges": graph.export_edges()
    });

    fs::write(path, serde_json::to_string_pretty(&export)?)?;
    println!("{} Exported to {}", "✓".green(), path.display());

    Ok(())
}

fn print_ladder(path: &[&str]) {
    let mut previous: Option<&str> = None;
    for &word in path {
        let position = previous.and_then(|prev| differing_position(prev, word));
        println!("  {}", highlight(word, position));
        previous = Some(word);
    }
}

/// Renders `word` with the letter at `position` emphasised.
fn highlight(word: &str, position: Option<usize>) -> String {
    word.chars()
        .enumerate()
        .map(|(i, ch)| {
            if Some(i) == position {
                ch.to_string().green().bold().to_string()
            } else {
                ch.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_highlight_keeps_letters() {
        colored::control::set_override(false);
        assert_eq!(highlight("cord", Some(2)), "cord");
        assert_eq!(highlight("cord", None), "cord");
    }

    #[test]
    fn test_export_writes_edges() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("graph.json");
        let graph = WordGraph::from_words(["cat", "cot", "dog"]).unwrap();

        export_graph(&graph, &out).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["stats"]["node_count"], 3);
        assert_eq!(json["stats"]["edge_count"], 1);
        assert_eq!(json["edges"][0]["source"], "cat");
        assert_eq!(json["edges"][0]["target"], "cot");
        assert_eq!(json["edges"][0]["position"], 1);
        assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_load_graph_from_config() {
        let dir = tempdir().unwrap();
        let dict = dir.path().join("words4.dat");
        fs::write(&dict, "* sample\ncold\ncord\ncard\n").unwrap();

        let mut config = LadderConfig::default();
        config.dictionary = Some(dict);
        config.words.word_length = 4;

        let loaded = load_graph(&config).unwrap();
        assert_eq!(loaded.graph.node_count(), 3);
        assert_eq!(loaded.graph.edge_count(), 2);
        assert_eq!(loaded.word_length, 4);
    }

    fn four_letter_config(dir: &Path) -> LadderConfig {
        let dict = dir.join("words4.dat");
        fs::write(&dict, "* sample\ncold\ncord\ncard\nward\nwarm\nlove\nhate\n").unwrap();

        let mut config = LadderConfig::default();
        config.dictionary = Some(dict);
        config.words.word_length = 4;
        config
    }

    #[test]
    fn test_ladder_pairs_tell_missing_words_from_dead_ends() {
        let dir = tempdir().unwrap();
        let mut config = four_letter_config(dir.path());
        config.pairs = vec![
            ("cold".to_string(), "warm".to_string()),
            ("love".to_string(), "hate".to_string()),
            ("cold".to_string(), "gold".to_string()),
        ];

        let loaded = load_graph(&config).unwrap();
        let outcomes = run_pairs(&loaded.graph, &config.ladder_pairs());

        assert_eq!(outcomes.len(), 3);
        assert_eq!(
            outcomes[0].as_ref().unwrap(),
            &vec!["cold", "cord", "card", "ward", "warm"]
        );
        assert!(matches!(
            &outcomes[1],
            Err(PathError::NoPath { from, to }) if from == "love" && to == "hate"
        ));
        assert!(matches!(
            &outcomes[2],
            Err(PathError::WordNotFound(word)) if word == "gold"
        ));

        assert!(ladders(&config).is_ok());
    }

    #[test]
    fn test_path_and_neighbors_reject_unknown_words() {
        let dir = tempdir().unwrap();
        let config = four_letter_config(dir.path());

        assert!(path(&config, "cold", "warm", false).is_ok());
        assert!(path(&config, "love", "hate", true).is_ok());
        assert!(path(&config, "cold", "gold", false).is_err());
        assert!(path(&config, "gold", "cold", true).is_err());

        assert!(neighbors(&config, "card").is_ok());
        assert!(neighbors(&config, "love").is_ok());
        assert!(neighbors(&config, "gold").is_err());
    }

    #[test]
    fn test_stats_reports_farthest_word() {
        let dir = tempdir().unwrap();
        let config = four_letter_config(dir.path());
        let loaded = load_graph(&config).unwrap();

        assert_eq!(farthest(&loaded.graph, None).unwrap(), None);
        assert_eq!(
            farthest(&loaded.graph, Some("cold")).unwrap(),
            Some(("warm", 4))
        );
        assert_eq!(
            farthest(&loaded.graph, Some("love")).unwrap(),
            Some(("love", 0))
        );
        assert!(farthest(&loaded.graph, Some("gold")).is_err());

        assert!(stats(&config, Some("cold"), true).is_ok());
        assert!(stats(&config, Some("gold"), false).is_err());
    }

    #[test]
    fn test_load_graph_rejects_bad_alphabet() {
        let config = LadderConfig {
            alphabet: "aa".to_string(),
            ..LadderConfig::default()
        };
        assert!(load_graph(&config).is_err());
    }
}
