//! DOT (Graphviz) text export.
//!
//! Reads only [`Graph::traits`], [`Graph::adjacency_map`] and
//! [`Graph::vertex_with_properties`]; every vertex gets a statement, followed by
//! one statement per outgoing adjacency entry.

use std::{
    collections::BTreeMap,
    fmt::Display,
    io::{self, Write},
};

use crate::{
    errors::GraphError,
    graph::{Graph, Key, Value},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DotOptions {
    /// Graph-level attributes such as `rankdir`.
    pub attributes: BTreeMap<String, String>,
}

impl DotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph_attribute<A: Into<String>, B: Into<String>>(mut self, key: A, value: B) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

pub fn write_dot<K, T, D, G, W>(graph: &G, mut writer: W, options: &DotOptions) -> Result<(), GraphError>
where
    K: Key + Display,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
    W: Write,
{
    let (kind, operator) = if graph.traits().is_directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };
    writeln!(writer, "strict {kind} {{")?;
    for (key, value) in &options.attributes {
        writeln!(writer, "\t{key}=\"{}\";", escape(value))?;
    }
    for (vertex, neighbors) in graph.adjacency_map()? {
        let (_, properties) = graph.vertex_with_properties(&vertex)?;
        let source = escape(&vertex.to_string());
        write!(writer, "\t\"{source}\" [ ")?;
        write_attributes(&mut writer, &properties.attributes)?;
        writeln!(writer, "weight={} ];", properties.weight)?;
        for (neighbor, edge) in neighbors {
            let target = escape(&neighbor.to_string());
            write!(writer, "\t\"{source}\" {operator} \"{target}\" [ ")?;
            write_attributes(&mut writer, &edge.properties.attributes)?;
            writeln!(writer, "weight={} ];", edge.properties.weight)?;
        }
    }
    writeln!(writer, "}}")?;
    writer.flush()?;
    Ok(())
}

pub fn to_dot_string<K, T, D, G>(graph: &G, options: &DotOptions) -> Result<String, GraphError>
where
    K: Key + Display,
    T: Value,
    D: Value,
    G: Graph<K, T, D> + ?Sized,
{
    let mut buffer = Vec::new();
    write_dot(graph, &mut buffer, options)?;
    String::from_utf8(buffer)
        .map_err(|err| GraphError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}

fn write_attributes<W: Write>(
    writer: &mut W,
    attributes: &BTreeMap<String, String>,
) -> io::Result<()> {
    for (key, value) in attributes {
        write!(writer, "{key}=\"{}\", ", escape(value))?;
    }
    Ok(())
}

fn escape(raw: &str) -> String {
    raw.replace('"', "\\\"")
}
