//! Maximum flow on directed capacitated networks.
//!
//! A [`FlowNetwork`] is built once, edge by edge, and validated while it is built. Solving it
//! with Edmonds-Karp yields a [`Solution`]: the maximum flow value and a skew-symmetric flow
//! matrix achieving it.
//!
//! ```
//! use flownet::FlowNetwork;
//!
//! let network = FlowNetwork::with_edges(3, 0, 2, [(0, 1, 5), (1, 2, 3)]).unwrap();
//! let solution = network.maximum_flow();
//!
//! assert_eq!(solution.value(), 3);
//! assert_eq!(solution.flow_on(1, 2), 3);
//! assert_eq!(solution.flow_on(2, 1), -3);
//! ```
#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

mod algo;
mod capacity;
pub mod dimacs;
mod error;
mod matrix;
mod network;
mod report;
mod solution;

pub use algo::edmonds_karp::EdmondsKarp;
pub use algo::MaxFlow;
pub use capacity::Capacity;
pub use error::{Duplicate, Error, Topology, Violation};
pub use matrix::Matrix;
pub use network::FlowNetwork;
pub use report::{EdgeFlow, Usage};
pub use solution::Solution;
