pub mod edmonds_karp;

use crate::network::FlowNetwork;
use crate::solution::Solution;

/// A maximum flow algorithm.
pub trait MaxFlow {
    type Capacity;

    /// Run the algorithm over the specified network and return the flow value along with the
    /// flow matrix achieving it.
    fn max_flow(&mut self, network: &FlowNetwork<Self::Capacity>) -> Solution<Self::Capacity>;
}
