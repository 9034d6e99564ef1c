//! Command-line front end for the worked scenarios.

use std::{fs::File, io::Write};

use serde_json::json;

use crate::{
    dot::{DotOptions, write_dot},
    errors::GraphError,
    scenarios,
};

const DEFAULT_VERTEX: i64 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub command: String,
    pub vertex: Option<i64>,
    pub output: Option<String>,
    pub json: bool,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut command = None;
        let mut vertex = None;
        let mut output = None;
        let mut json = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--json" => json = true,
                "--vertex" => {
                    let raw = iter
                        .next()
                        .ok_or_else(|| "--vertex requires a value".to_string())?;
                    let parsed = raw
                        .parse::<i64>()
                        .map_err(|_| format!("--vertex expects an integer, got {raw}"))?;
                    vertex = Some(parsed);
                }
                "--output" | "-o" => {
                    output = Some(
                        iter.next()
                            .ok_or_else(|| "--output requires a value".to_string())?
                            .to_string(),
                    );
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                other => {
                    if let Some(existing) = &command {
                        return Err(format!("unexpected argument {other} after {existing}"));
                    }
                    command = Some(other.to_string());
                }
            }
        }
        let command = command.ok_or_else(|| "missing command".to_string())?;
        if !COMMANDS.contains(&command.as_str()) {
            return Err(format!("unknown command {command}"));
        }
        Ok(Self {
            command,
            vertex,
            output,
            json,
        })
    }

    pub fn help() -> &'static str {
        "Usage: graphkit [--json] [--vertex N] [--output PATH] <in-degree|connectivity|reachability|mst|dot>\n"
    }
}

const COMMANDS: [&str; 5] = ["in-degree", "connectivity", "reachability", "mst", "dot"];

/// Runs the configured scenario and prints its report to `out`.
pub fn run_command<W: Write>(config: &CommandLineConfig, out: &mut W) -> Result<(), GraphError> {
    let vertex = config.vertex.unwrap_or(DEFAULT_VERTEX);
    match config.command.as_str() {
        "in-degree" => {
            let graph = scenarios::sample_directed()?;
            let below = scenarios::in_degree_below(&graph, &vertex)?;
            if config.json {
                let report = json!({ "vertex": vertex, "in_degree_below": below });
                writeln!(out, "{report}")?;
            } else {
                for key in below {
                    writeln!(out, "vertex {key} has a lower in-degree than {vertex}")?;
                }
            }
        }
        "connectivity" => {
            let graph = scenarios::sample_undirected()?;
            let connected = scenarios::is_connected(&graph)?;
            if config.json {
                writeln!(out, "{}", json!({ "connected": connected }))?;
            } else if connected {
                writeln!(out, "graph is connected")?;
            } else {
                writeln!(out, "graph is not connected")?;
            }
        }
        "reachability" => {
            let graph = scenarios::sample_reachability()?;
            let reaching = scenarios::vertices_reaching(&graph, &vertex)?;
            if config.json {
                let report = json!({ "target": vertex, "reachable_from": reaching });
                writeln!(out, "{report}")?;
            } else {
                for key in reaching {
                    writeln!(out, "vertex {vertex} is reachable from {key}")?;
                }
            }
        }
        "mst" => {
            let graph = scenarios::sample_weighted()?;
            let forest = scenarios::minimum_spanning_forest(&graph)?;
            if config.json {
                let report = serde_json::to_string(&forest)
                    .map_err(|e| GraphError::Io(std::io::Error::other(e)))?;
                writeln!(out, "{report}")?;
            } else {
                for (source, target, weight) in &forest.edges {
                    writeln!(out, "{source} -- {target} (weight {weight})")?;
                }
                writeln!(out, "total weight {}", forest.total_weight)?;
            }
        }
        "dot" => {
            let graph = scenarios::sample_tree()?;
            let options = DotOptions::new();
            match &config.output {
                Some(path) => write_dot(&graph, File::create(path)?, &options)?,
                None => write_dot(&graph, &mut *out, &options)?,
            }
        }
        other => {
            return Err(GraphError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("unknown command {other}"),
            )));
        }
    }
    Ok(())
}
