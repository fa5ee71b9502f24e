//! # Reading DIMACS max-flow files
//!
//! A problem is a sequence of statements, one per line:
//!
//! ```text
//! c an optional comment
//! p max <nodes> <arcs>
//! n <source> s
//! n <sink> t
//! a <src> <dst> <capacity>
//! ```
//!
//! Lines which are empty or start with `c` are comments. The two node statements may come in
//! either order and there must be exactly `<arcs>` arc statements. Vertices are numbered from
//! zero.
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use displaydoc::Display;

use crate::error::Error;
use crate::network::FlowNetwork;

const COMMENT_INDICATOR: &str = "c";

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum ParseError {
    /// Line {line}: {reason}
    Syntax { line: usize, reason: String },
    /// Line {line}: {error}
    Network { line: usize, error: Error },
    /// Expected {expected} arcs, but got {found}
    ArcCount { expected: usize, found: usize },
    /// Unexpected end of input, expected {0}
    UnexpectedEnd(&'static str),
}

impl core::error::Error for ParseError {}

impl ParseError {
    fn syntax(line: usize, reason: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            reason: reason.into(),
        }
    }
}

/// A statement: its line number and whitespace separated tokens.
type Statement<'a> = (usize, Vec<&'a str>);

/// Parse a DIMACS max-flow problem into a network.
///
/// # Errors
///
/// `Syntax` for malformed statements, `Network` when a statement describes an invalid network
/// (e.g. a duplicate arc), `ArcCount` when the problem line announces a different number of
/// arcs and `UnexpectedEnd` when the problem or node statements are missing.
pub fn parse(program: &str) -> Result<FlowNetwork<i64>, ParseError> {
    let mut statements = into_statements(program);

    let (nodes, arcs) = parse_problem(statements.next())?;
    let (source, sink, line) = parse_terminals(&mut statements)?;
    let mut network = FlowNetwork::new(nodes, source, sink)
        .map_err(|error| ParseError::Network { line, error })?;

    let mut found = 0;
    for (line, tokens) in statements {
        let [src, dst, capacity] = fields::<3>(line, &tokens, "a", "Arc")?;
        network
            .add_edge(
                number(line, src, "source vertex")?,
                number(line, dst, "target vertex")?,
                number(line, capacity, "capacity")?,
            )
            .map_err(|error| ParseError::Network { line, error })?;
        found += 1;
    }

    if found != arcs {
        return Err(ParseError::ArcCount {
            expected: arcs,
            found,
        });
    }
    Ok(network)
}

fn into_statements(program: &str) -> impl Iterator<Item = Statement<'_>> {
    program
        .lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_INDICATOR))
        .map(|(number, line)| (number, line.split_whitespace().collect()))
}

fn parse_problem(statement: Option<Statement<'_>>) -> Result<(usize, usize), ParseError> {
    let (line, tokens) = statement.ok_or(ParseError::UnexpectedEnd("a problem statement"))?;
    let [kind, nodes, arcs] = fields::<3>(line, &tokens, "p", "Problem")?;
    if kind != "max" {
        return Err(ParseError::syntax(
            line,
            format!("Only max flow problems are allowed, found \"{kind}\""),
        ));
    }
    Ok((number(line, nodes, "node count")?, number(line, arcs, "arc count")?))
}

// Returns the source, the sink and the line of the later of both statements.
fn parse_terminals<'a>(
    statements: &mut impl Iterator<Item = Statement<'a>>,
) -> Result<(usize, usize, usize), ParseError> {
    let mut source = None;
    let mut sink = None;
    let mut last_line = 0;

    while source.is_none() || sink.is_none() {
        let (line, tokens) = statements
            .next()
            .ok_or(ParseError::UnexpectedEnd("source and sink statements"))?;
        let [id, role] = fields::<2>(line, &tokens, "n", "Node")?;
        let slot = match role {
            "s" => &mut source,
            "t" => &mut sink,
            other => {
                return Err(ParseError::syntax(
                    line,
                    format!("Node statements end with \"s\" or \"t\", found \"{other}\""),
                ))
            }
        };
        if slot.is_some() {
            return Err(ParseError::syntax(
                line,
                format!("Node \"{role}\" is given more than once"),
            ));
        }
        *slot = Some(number(line, id, "node id")?);
        last_line = line;
    }

    match (source, sink) {
        (Some(source), Some(sink)) => Ok((source, sink, last_line)),
        _ => Err(ParseError::UnexpectedEnd("source and sink statements")),
    }
}

/// Check the statement indicator and arity, returning the values after the indicator.
fn fields<'a, const N: usize>(
    line: usize,
    tokens: &[&'a str],
    indicator: &str,
    name: &str,
) -> Result<[&'a str; N], ParseError> {
    match tokens.split_first() {
        Some((&first, rest)) if first == indicator => rest.try_into().map_err(|_| {
            ParseError::syntax(
                line,
                format!("{name} statements require {N} values, found {}", rest.len()),
            )
        }),
        _ => Err(ParseError::syntax(
            line,
            format!("{name} statements begin with \"{indicator}\""),
        )),
    }
}

fn number<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| {
        ParseError::syntax(line, format!("Could not read {what} from \"{token}\""))
    })
}
