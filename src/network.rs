use core::alloc::Layout;

use crate::algo::edmonds_karp::EdmondsKarp;
use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::error::{Duplicate, Error, Topology};
use crate::matrix::Matrix;
use crate::solution::Solution;

/// A directed capacitated network with a designated source and sink.
///
/// Every ordered vertex pair holds at most one capacity, which is written once and never
/// changed. The reverse slot of an edge is kept free for residual bookkeeping, so antiparallel
/// edges are rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowNetwork<C = i64> {
    vertices: usize,
    source: usize,
    sink: usize,
    capacity: Matrix<C>,
}

impl<C: Capacity> FlowNetwork<C> {
    /// Create a network of `vertices` vertices without any edges.
    ///
    /// # Errors
    ///
    /// `InvalidTopology` if `source` or `sink` is not a vertex, if they are the same vertex, or
    /// if a `vertices × vertices` matrix of `C` cannot be addressed.
    pub fn new(vertices: usize, source: usize, sink: usize) -> Result<Self, Error> {
        if source >= vertices {
            return Err(Topology::SourceOutOfBounds(source).into());
        }
        if sink >= vertices {
            return Err(Topology::SinkOutOfBounds(sink).into());
        }
        if source == sink {
            return Err(Topology::SourceIsSink.into());
        }
        let layout = vertices
            .checked_mul(vertices)
            .and_then(|cells| Layout::array::<C>(cells).ok());
        if layout.is_none() {
            return Err(Topology::TooManyVertices(vertices).into());
        }

        log::info!("Initialized network with {vertices} nodes flowing from {source} to {sink}");
        Ok(Self {
            vertices,
            source,
            sink,
            capacity: Matrix::zeros(vertices),
        })
    }

    /// Build a network and insert all `edges`, stopping at the first rejected one.
    pub fn with_edges<I>(vertices: usize, source: usize, sink: usize, edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (usize, usize, C)>,
    {
        edges
            .into_iter()
            .try_fold(Self::new(vertices, source, sink)?, |mut network, (src, dst, cap)| {
                network.add_edge(src, dst, cap)?;
                Ok::<_, Error>(network)
            })
    }

    /// Add a directed edge `src -> dst` with the given capacity.
    ///
    /// The network is left untouched when the edge is rejected.
    ///
    /// # Errors
    ///
    /// * `InvalidCapacity` if `capacity` is not strictly positive.
    /// * `InvalidTopology` if an endpoint is not a vertex, `src` is the sink or `dst` is the
    ///   source.
    /// * `DuplicateEdge` if `src -> dst` or `dst -> src` already has a capacity.
    pub fn add_edge(&mut self, src: usize, dst: usize, capacity: C) -> Result<(), Error> {
        if capacity <= C::zero() {
            return Err(Error::InvalidCapacity {
                src,
                dst,
                capacity: capacity.into(),
            });
        }
        if let Some(&vertex) = [src, dst].iter().find(|&&v| v >= self.vertices) {
            return Err(Topology::VertexOutOfBounds(vertex).into());
        }
        if src == self.sink {
            return Err(Topology::SinkOutgoing.into());
        }
        if dst == self.source {
            return Err(Topology::SourceIncoming.into());
        }
        if !self.capacity[(src, dst)].is_zero() {
            return Err(Duplicate::Forward { src, dst }.into());
        }
        if !self.capacity[(dst, src)].is_zero() {
            return Err(Duplicate::Reverse { src, dst }.into());
        }

        log::info!("Adding arc {src} -> {dst} with capacity {capacity}");
        self.capacity[(src, dst)] = capacity;
        Ok(())
    }

    /// Compute a maximum flow from source to sink with Edmonds-Karp.
    pub fn maximum_flow(&self) -> Solution<C> {
        EdmondsKarp::default().max_flow(self)
    }
}

impl<C: Capacity> FlowNetwork<C> {
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    /// Capacity of `src -> dst`, zero when there is no such edge.
    pub fn capacity(&self, src: usize, dst: usize) -> C {
        self.capacity[(src, dst)]
    }

    pub fn capacities(&self) -> &Matrix<C> {
        &self.capacity
    }

    /// All edges as `(src, dst, capacity)`, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        self.capacity.rows().enumerate().flat_map(|(src, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cap)| !cap.is_zero())
                .map(move |(dst, &cap)| (src, dst, cap))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::FlowNetwork;
    use crate::error::{Duplicate, Error, Topology};

    fn network() -> FlowNetwork<i64> {
        FlowNetwork::new(4, 0, 3).unwrap()
    }

    #[test]
    fn rejects_bad_terminals() {
        assert_eq!(
            FlowNetwork::<i64>::new(3, 3, 1),
            Err(Error::InvalidTopology(Topology::SourceOutOfBounds(3)))
        );
        assert_eq!(
            FlowNetwork::<i64>::new(3, 0, 5),
            Err(Error::InvalidTopology(Topology::SinkOutOfBounds(5)))
        );
        assert_eq!(
            FlowNetwork::<i64>::new(3, 1, 1),
            Err(Error::InvalidTopology(Topology::SourceIsSink))
        );
        assert!(FlowNetwork::<i64>::new(0, 0, 0).is_err());
    }

    #[test]
    fn rejects_unaddressable_vertex_counts() {
        assert_eq!(
            FlowNetwork::<i64>::new(usize::MAX, 0, 1),
            Err(Error::InvalidTopology(Topology::TooManyVertices(usize::MAX)))
        );
        // The cell count fits in usize but the bytes do not.
        let side = 1 << (usize::BITS / 2 - 1);
        assert_eq!(
            FlowNetwork::<i128>::new(side, 0, 1),
            Err(Error::InvalidTopology(Topology::TooManyVertices(side)))
        );
    }

    #[test]
    fn rejects_non_positive_capacity() {
        let mut n = network();
        for cap in [0, -4] {
            assert_eq!(
                n.add_edge(0, 1, cap),
                Err(Error::InvalidCapacity {
                    src: 0,
                    dst: 1,
                    capacity: i128::from(cap)
                })
            );
        }
        assert_eq!(n.edge_count(), 0);
    }

    #[test]
    fn rejects_edges_against_terminals() {
        let mut n = network();
        assert_eq!(n.add_edge(3, 1, 2), Err(Topology::SinkOutgoing.into()));
        assert_eq!(n.add_edge(1, 0, 2), Err(Topology::SourceIncoming.into()));
        assert_eq!(n.add_edge(1, 4, 2), Err(Topology::VertexOutOfBounds(4).into()));
    }

    #[test]
    fn rejects_duplicate_and_antiparallel_edges() {
        let mut n = network();
        n.add_edge(1, 2, 5).unwrap();
        assert_eq!(
            n.add_edge(1, 2, 5),
            Err(Duplicate::Forward { src: 1, dst: 2 }.into())
        );
        assert_eq!(
            n.add_edge(2, 1, 1),
            Err(Duplicate::Reverse { src: 2, dst: 1 }.into())
        );
        assert_eq!(n.capacity(1, 2), 5);
        assert_eq!(n.capacity(2, 1), 0);
    }

    #[test]
    fn edges_are_listed_row_major() {
        let n = FlowNetwork::with_edges(4, 0, 3, [(2, 3, 3), (0, 2, 2), (0, 1, 3), (1, 3, 2)])
            .unwrap();
        assert_eq!(
            n.edges().collect::<Vec<_>>(),
            [(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)]
        );
    }

    #[test]
    fn with_edges_stops_at_first_rejection() {
        let res = FlowNetwork::with_edges(3, 0, 2, [(0, 1, 1), (1, 2, 0), (0, 2, 4)]);
        assert!(matches!(res, Err(Error::InvalidCapacity { src: 1, dst: 2, .. })));
    }
}
