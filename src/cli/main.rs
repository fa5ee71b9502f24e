#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use csv::Writer;
use flownet::{dimacs, FlowNetwork, Solution};
use log::LevelFilter;
use petgraph::dot::Dot;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Compute maximum flow on a flow network.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to flow network specification (DIMACS max-flow format).
    #[arg(short, long)]
    filename: PathBuf,

    /// How to print the resulting flow.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verify the flow invariants before printing.
    #[arg(long)]
    check: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `src -> dst : flow / capacity` lines after the maximum flow value
    Text,
    /// `src,dst,flow,capacity` records
    Csv,
    /// Graphviz digraph labelled with `flow/capacity`
    Dot,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn write_text(
    out: &mut dyn Write,
    network: &FlowNetwork,
    solution: &Solution<i64>,
) -> io::Result<()> {
    writeln!(out, "Maximum flow = {}", solution.value())?;
    for edge in solution.edge_flows(network) {
        writeln!(out, "{edge}")?;
    }
    Ok(())
}

fn write_csv(
    out: &mut dyn Write,
    network: &FlowNetwork,
    solution: &Solution<i64>,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_writer(out);
    for edge in solution.edge_flows(network) {
        wtr.serialize(edge)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_dot(
    out: &mut dyn Write,
    network: &FlowNetwork,
    solution: &Solution<i64>,
) -> io::Result<()> {
    let graph = solution.to_graph(network);
    writeln!(out, "{}", Dot::new(&graph))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    TermLogger::init(
        log_level(cli.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let program = fs::read_to_string(&cli.filename)?;
    let network = dimacs::parse(&program)?;
    log::info!(
        "Received network with {} nodes and {} arcs",
        network.vertices(),
        network.edge_count()
    );

    let solution = network.maximum_flow();
    if cli.check {
        solution.check(&network)?;
    }

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(fs::File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    match cli.format {
        Format::Text => write_text(&mut out, &network, &solution)?,
        Format::Csv => write_csv(&mut out, &network, &solution)?,
        Format::Dot => write_dot(&mut out, &network, &solution)?,
    }
    out.flush()?;
    Ok(())
}
