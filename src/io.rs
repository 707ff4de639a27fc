use crate::hypergraph::{Hypergraph, HypergraphError};
use std::io::{BufRead, Write};
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid integer {token:?}")]
    InvalidInteger { line: usize, token: String, source: ParseIntError },
    #[error("line {line}: malformed p-line")]
    MalformedHeader { line: usize },
    #[error("line {line}: duplicate p-line")]
    DuplicateHeader { line: usize },
    #[error("line {line}: p-line must precede all edges")]
    LateHeader { line: usize },
    #[error("p-line announced {expected} edges, found {found}")]
    EdgeCount { expected: usize, found: usize },
    #[error(transparent)]
    Hypergraph(#[from] HypergraphError),
}

/// Reads a hypergraph in sparse edge-list format.
///
/// Every line is one edge given as whitespace separated 0-based vertex indices; a blank
/// line is the empty edge. Lines starting with `c` are comments. An optional leading
/// `p <num_verts> <num_edges>` line fixes the universe and the edge count, otherwise
/// the universe is one past the largest vertex seen.
pub fn read_hypergraph(reader: impl BufRead) -> Result<Hypergraph, ParseError> {
    let mut header: Option<(usize, usize)> = None;
    let mut edges: Vec<Vec<usize>> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            Some(&"c") => {} // skip comments
            Some(&"p") => {
                if header.is_some() {
                    return Err(ParseError::DuplicateHeader { line: lineno });
                }
                if !edges.is_empty() {
                    return Err(ParseError::LateHeader { line: lineno });
                }
                if tokens.len() != 3 {
                    return Err(ParseError::MalformedHeader { line: lineno });
                }
                header = Some((parse_index(tokens[1], lineno)?, parse_index(tokens[2], lineno)?));
            }
            _ => {
                let edge = tokens
                    .iter()
                    .map(|token| parse_index(token, lineno))
                    .collect::<Result<Vec<usize>, _>>()?;
                edges.push(edge);
            }
        }
    }
    let num_verts = match header {
        Some((num_verts, num_edges)) => {
            if num_edges != edges.len() {
                return Err(ParseError::EdgeCount { expected: num_edges, found: edges.len() });
            }
            num_verts
        }
        None => edges.iter().flatten().max().map_or(0, |v| v + 1),
    };
    Ok(Hypergraph::from_edges(num_verts, &edges)?)
}

fn parse_index(token: &str, line: usize) -> Result<usize, ParseError> {
    token.parse::<usize>().map_err(|source| ParseError::InvalidInteger {
        line,
        token: token.to_string(),
        source,
    })
}

/// Writes `h` in the format accepted by [`read_hypergraph`], p-line included.
pub fn write_hypergraph(h: &Hypergraph, mut writer: impl Write) -> std::io::Result<()> {
    writeln!(writer, "p {} {}", h.num_verts(), h.num_edges())?;
    for edge in h.edges() {
        let line: Vec<String> = edge.iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    writer.flush()
}
