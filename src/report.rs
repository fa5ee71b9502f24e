use core::fmt::{self, Display, Formatter};

use petgraph::graphmap::DiGraphMap;
use serde::Serialize;

use crate::capacity::Capacity;
use crate::network::FlowNetwork;
use crate::solution::Solution;

/// The flow routed over one edge of the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeFlow<C> {
    pub src: usize,
    pub dst: usize,
    pub flow: C,
    pub capacity: C,
}

impl<C: Display> Display for EdgeFlow<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} : {} / {}",
            self.src, self.dst, self.flow, self.capacity
        )
    }
}

/// Edge weight of the graph returned by [`Solution::to_graph`], shown as `flow/capacity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Usage<C> {
    pub flow: C,
    pub capacity: C,
}

impl<C: Display> Display for Usage<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.flow, self.capacity)
    }
}

impl<C: Capacity> Solution<C> {
    /// Flow on every edge of `network`, in the row-major order of [`FlowNetwork::edges`].
    pub fn edge_flows<'a>(
        &'a self,
        network: &'a FlowNetwork<C>,
    ) -> impl Iterator<Item = EdgeFlow<C>> + 'a {
        network.edges().map(move |(src, dst, capacity)| EdgeFlow {
            src,
            dst,
            flow: self.flow_on(src, dst),
            capacity,
        })
    }

    /// The network's edges as a petgraph graph weighted by their usage, e.g. for
    /// `petgraph::dot::Dot`.
    pub fn to_graph(&self, network: &FlowNetwork<C>) -> DiGraphMap<usize, Usage<C>> {
        let mut graph = DiGraphMap::with_capacity(network.vertices(), network.edge_count());
        for vertex in 0..network.vertices() {
            graph.add_node(vertex);
        }
        for EdgeFlow {
            src,
            dst,
            flow,
            capacity,
        } in self.edge_flows(network)
        {
            graph.add_edge(src, dst, Usage { flow, capacity });
        }
        graph
    }
}
