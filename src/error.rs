use displaydoc::Display;

/// Errors raised while building a [`FlowNetwork`](crate::FlowNetwork).
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Invalid network topology: {0}
    InvalidTopology(Topology),
    /// Capacity {capacity} assigned to {src} -> {dst} is non-positive
    InvalidCapacity {
        src: usize,
        dst: usize,
        capacity: i128,
    },
    /// Duplicate edge: {0}
    DuplicateEdge(Duplicate),
}

impl core::error::Error for Error {}

impl From<Topology> for Error {
    fn from(topology: Topology) -> Self {
        Self::InvalidTopology(topology)
    }
}

impl From<Duplicate> for Error {
    fn from(duplicate: Duplicate) -> Self {
        Self::DuplicateEdge(duplicate)
    }
}

/// Why a vertex count, terminal or edge endpoint does not fit the network.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Topology {
    /// source {0} is out of bounds
    SourceOutOfBounds(usize),
    /// sink {0} is out of bounds
    SinkOutOfBounds(usize),
    /// vertex {0} is out of bounds
    VertexOutOfBounds(usize),
    /// {0} vertices do not fit in a capacity matrix
    TooManyVertices(usize),
    /// source and sink cannot be the same vertex
    SourceIsSink,
    /// sink cannot have outgoing capacity
    SinkOutgoing,
    /// source cannot have incoming capacity
    SourceIncoming,
}

/// Which already assigned capacity an edge collides with.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Duplicate {
    /// capacity of {src} -> {dst} has already been assigned
    Forward { src: usize, dst: usize },
    /// reverse capacity of {dst} -> {src} is non-zero
    Reverse { src: usize, dst: usize },
}

/// A broken flow invariant reported by [`Solution::check`](crate::Solution::check).
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Violation {
    /// Flow matrix has order {found}, expected {expected}
    Dimension { expected: usize, found: usize },
    /// Flow is not skew symmetric at {src} -> {dst}
    SkewSymmetry { src: usize, dst: usize },
    /// Flow exceeds capacity at {src} -> {dst}
    CapacityExceeded { src: usize, dst: usize },
    /// Flow conservation is violated at vertex {0}
    Conservation(usize),
    /// Output from source does not match the flow value
    SourceOutflow,
    /// Input to sink does not match the flow value
    SinkInflow,
}

impl core::error::Error for Violation {}
