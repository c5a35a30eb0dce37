//! With Graph::parse(), creates a new graph given a string in the dot language.
//!
//! For details on dot, see: <https://graphviz.org/doc/info/lang.html>
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use super::{Attributes, Graph, GraphKind};
use crate::error::{Error, Result};

#[derive(Parser)]
#[grammar = "dot.pest"]
pub struct DotParser;

impl Graph {
    /// Given a string in the dot language holding exactly one graph, build the graph.
    ///
    /// Uses the Pest crate to do all the parsing.
    pub fn parse(dot_str: &str) -> Result<Self> {
        let mut graphs = Self::parse_all(dot_str)?;

        if graphs.len() == 1 {
            Ok(graphs.remove(0))
        } else {
            Err(Error::Parse(format!(
                "expected exactly one graph, found {}",
                graphs.len()
            )))
        }
    }

    /// Build every graph found in the dot string, in order.
    ///
    /// Supported: strict, graph/digraph, graph/node/edge attribute statements,
    /// key=value graph attributes, node statements and edge chains (a -- b -- c).
    /// Subgraphs and ports are not.
    pub fn parse_all(dot_str: &str) -> Result<Vec<Self>> {
        let dotfile = DotParser::parse(Rule::dotfile, dot_str)
            .map_err(|e| Error::Parse(e.to_string()))?
            .next()
            .ok_or_else(|| Error::Parse("empty input".to_string()))?;

        dotfile
            .into_inner()
            .filter(|record| record.as_rule() == Rule::dotgraph)
            .map(graph_from_pair)
            .collect()
    }
}

/// Builds one graph, tracking the node and edge defaults set by attribute statements.
#[derive(Default)]
struct GraphBuilder {
    graph: Graph,
    node_defaults: Attributes,
    edge_defaults: Attributes,
}

impl GraphBuilder {
    /// Return the index of the named node, creating it with the current defaults if new.
    fn node(&mut self, name: &str) -> usize {
        if let Some(idx) = self.graph.node_idx(name) {
            idx
        } else {
            let idx = self.graph.add_node(name);
            self.graph.nodes[idx].attributes.merge(&self.node_defaults);

            idx
        }
    }

    fn statement(&mut self, stmt: Pair<'_, Rule>) -> Result<()> {
        for record in stmt.into_inner() {
            match record.as_rule() {
                Rule::attr_stmt => self.attr_stmt(record),
                Rule::assignment => {
                    let mut inner = record.into_inner();
                    let key = ident_text(inner.next());
                    let value = ident_text(inner.next());
                    self.graph.attributes.set(&key, value);
                }
                Rule::node_stmt => {
                    let mut inner = record.into_inner();
                    let idx = self.node(&ident_text(inner.next()));
                    if let Some(attr_list) = inner.next() {
                        let attrs = attributes_from_list(attr_list);
                        self.graph.nodes[idx].attributes.merge(&attrs);
                    }
                }
                Rule::edge_stmt => self.edge_stmt(record)?,
                _ => unreachable!(),
            }
        }
        Ok(())
    }

    fn attr_stmt(&mut self, record: Pair<'_, Rule>) {
        let mut inner = record.into_inner();
        let target = inner
            .next()
            .map(|target| target.as_str().to_ascii_lowercase())
            .unwrap_or_default();
        let attrs = inner.next().map(attributes_from_list).unwrap_or_default();

        match target.as_str() {
            "graph" => self.graph.attributes.merge(&attrs),
            "node" => self.node_defaults.merge(&attrs),
            "edge" => self.edge_defaults.merge(&attrs),
            _ => unreachable!(),
        }
    }

    /// An edge chain a -- b -- c [attrs] adds a -- b and b -- c, both with attrs.
    fn edge_stmt(&mut self, record: Pair<'_, Rule>) -> Result<()> {
        let expected_op = self.graph.kind.edge_op();
        let mut names = vec![];
        let mut attrs = Attributes::new();

        for part in record.into_inner() {
            match part.as_rule() {
                Rule::ident => names.push(ident_text(Some(part))),
                Rule::edge_op => {
                    if part.as_str() != expected_op {
                        return Err(Error::Parse(format!(
                            "edge operator {} used in a {}",
                            part.as_str(),
                            self.graph.kind.keyword()
                        )));
                    }
                }
                Rule::attr_list => attrs = attributes_from_list(part),
                _ => unreachable!(),
            }
        }

        for pair in names.windows(2) {
            let src_node = self.node(&pair[0]);
            let dst_node = self.node(&pair[1]);
            let edge_idx = self.graph.add_edge(src_node, dst_node);
            let edge = &mut self.graph.edges[edge_idx];

            edge.attributes.merge(&self.edge_defaults);
            edge.attributes.merge(&attrs);
        }
        Ok(())
    }
}

fn graph_from_pair(dot_graph: Pair<'_, Rule>) -> Result<Graph> {
    let mut builder = GraphBuilder::default();

    for record in dot_graph.into_inner() {
        match record.as_rule() {
            Rule::strict => builder.graph.strict = true,
            Rule::graph_kind => {
                builder.graph.kind = if record.as_str().eq_ignore_ascii_case("digraph") {
                    GraphKind::Directed
                } else {
                    GraphKind::Undirected
                };
            }
            Rule::ident => builder.graph.name = Some(ident_text(Some(record))),
            Rule::stmt_list => {
                for stmt in record.into_inner() {
                    builder.statement(stmt)?;
                }
            }
            _ => unreachable!(),
        }
    }
    Ok(builder.graph)
}

/// Collect every a_pair of an attr_list, later pairs overriding earlier ones.
fn attributes_from_list(attr_list: Pair<'_, Rule>) -> Attributes {
    let mut attrs = Attributes::new();

    for a_list in attr_list.into_inner() {
        for a_pair in a_list.into_inner() {
            let mut inner = a_pair.into_inner();
            let key = ident_text(inner.next());
            let value = ident_text(inner.next());
            attrs.set(&key, value);
        }
    }
    attrs
}

/// Text of an ident, with quotes removed and escapes undone.
///
/// The grammar guarantees the pair is present, so a missing one reads as empty.
fn ident_text(ident: Option<Pair<'_, Rule>>) -> String {
    let Some(inner) = ident.and_then(|ident| ident.into_inner().next()) else {
        return String::new();
    };

    match inner.as_rule() {
        Rule::quoted => inner
            .into_inner()
            .next()
            .map(|text| unescape_quoted(text.as_str()))
            .unwrap_or_default(),
        _ => inner.as_str().to_string(),
    }
}

/// Reverse of the writer's escaping: `\"` is a quote, and a run of 2n backslashes
/// before a quote or at the end of the text stands for n backslashes.
fn unescape_quoted(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut backslashes = 0;

    for ch in text.chars() {
        match ch {
            '\\' => backslashes += 1,
            '"' => {
                unescaped.push_str(&"\\".repeat(backslashes / 2));
                unescaped.push('"');
                backslashes = 0;
            }
            _ => {
                unescaped.push_str(&"\\".repeat(backslashes));
                unescaped.push(ch);
                backslashes = 0;
            }
        }
    }
    unescaped.push_str(&"\\".repeat(backslashes / 2));

    unescaped
}
