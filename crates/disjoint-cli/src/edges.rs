//! Edge-list parsing and loading into a [`DisjointSet`].
//!
//! One record per line, fields separated by commas and trimmed:
//!
//! ```text
//! # comment
//! A            registers A
//! A,B          registers A and B, then unions them
//! A,B,250      same, with an edge weight for `mst`
//! ```
use disjoint_core::{CompressionKind, DisjointSet, DisjointSetError, WeightedEdge};

use crate::error::CliError;

/// Largest number of comma-separated fields in a record.
const MAX_FIELDS: usize = 3;

/// A single non-blank, non-comment line of an edge list.
///
/// Empty fields are kept as `None` so that loading can reject them with the
/// offending line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `a`: register one element.
    Element {
        /// 1-based line number.
        line: usize,
        /// The element, or `None` if the field was empty.
        element: Option<String>,
    },
    /// `a,b` or `a,b,w`: an edge between two elements.
    Edge {
        /// 1-based line number.
        line: usize,
        /// First endpoint.
        from: Option<String>,
        /// Second endpoint.
        to: Option<String>,
        /// Weight, when a non-empty third field is present.
        weight: Option<i64>,
    },
}

/// Splits `content` into records.
///
/// # Errors
///
/// Returns [`CliError::MalformedRecord`] for a line with more than three
/// fields or a weight that is not a 64-bit integer.
pub fn parse(content: &str) -> Result<Vec<Record>, CliError> {
    let mut records = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        let record = match fields.as_slice() {
            [element] => Record::Element {
                line,
                element: field(element),
            },
            [from, to] => Record::Edge {
                line,
                from: field(from),
                to: field(to),
                weight: None,
            },
            [from, to, weight] => Record::Edge {
                line,
                from: field(from),
                to: field(to),
                weight: parse_weight(line, weight)?,
            },
            more => {
                return Err(CliError::MalformedRecord {
                    line,
                    detail: format!(
                        "expected at most {MAX_FIELDS} fields, found {}",
                        more.len()
                    ),
                });
            }
        };
        records.push(record);
    }
    log::debug!("parsed {} records", records.len());
    Ok(records)
}

fn field(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_owned())
}

fn parse_weight(line: usize, text: &str) -> Result<Option<i64>, CliError> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<i64>()
        .map(Some)
        .map_err(|e| CliError::MalformedRecord {
            line,
            detail: format!("invalid weight {text:?}: {e}"),
        })
}

/// Turns an optional endpoint into an element, reporting an empty field.
fn endpoint(line: usize, element: Option<&String>) -> Result<String, CliError> {
    element.cloned().ok_or_else(|| {
        CliError::at_line(
            line,
            DisjointSetError::NullElement {
                argument: "endpoint",
            },
        )
    })
}

/// Builds a disjoint set from `records`, registering elements in input order
/// and applying every edge as a union.
///
/// # Errors
///
/// Returns [`CliError::MissingElement`] for an empty element field.
pub fn load(
    records: &[Record],
    strategy: CompressionKind,
) -> Result<DisjointSet<String, CompressionKind>, CliError> {
    let mut set = DisjointSet::with_strategy(strategy);
    let mut merges = 0usize;
    for record in records {
        match record {
            Record::Element { line, element } => {
                set.try_make_set(element.clone())
                    .map_err(|e| CliError::at_line(*line, e))?;
            }
            Record::Edge { line, from, to, .. } => {
                let from = endpoint(*line, from.as_ref())?;
                let to = endpoint(*line, to.as_ref())?;
                set.make_sets([from.clone(), to.clone()]);
                if set.union(&from, &to).map_err(|e| CliError::at_line(*line, e))? {
                    merges += 1;
                }
            }
        }
    }
    log::debug!(
        "loaded {} elements with {strategy} compression, {merges} merges, {} sets",
        set.len(),
        set.set_count()
    );
    Ok(set)
}

/// Nodes and weighted edges extracted from `records` for a spanning forest.
#[derive(Debug, Default)]
pub struct Network {
    /// Every element, in first-seen order, without duplicates.
    pub nodes: Vec<String>,
    /// Every edge, in input order.
    pub edges: Vec<WeightedEdge<String, i64>>,
}

/// Collects the weighted graph described by `records`.
///
/// # Errors
///
/// Returns [`CliError::MissingElement`] for an empty element field and
/// [`CliError::MissingWeight`] for an edge without a weight.
pub fn network(records: &[Record]) -> Result<Network, CliError> {
    let mut net = Network::default();
    let mut seen = std::collections::HashSet::new();
    let mut add_node = |net: &mut Network, node: &String| {
        if seen.insert(node.clone()) {
            net.nodes.push(node.clone());
        }
    };

    for record in records {
        match record {
            Record::Element { line, element } => {
                let element = endpoint(*line, element.as_ref())?;
                add_node(&mut net, &element);
            }
            Record::Edge {
                line,
                from,
                to,
                weight,
            } => {
                let from = endpoint(*line, from.as_ref())?;
                let to = endpoint(*line, to.as_ref())?;
                let weight = weight.ok_or(CliError::MissingWeight { line: *line })?;
                add_node(&mut net, &from);
                add_node(&mut net, &to);
                net.edges.push(WeightedEdge::new(from, to, weight));
            }
        }
    }
    Ok(net)
}
