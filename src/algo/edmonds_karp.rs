use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::marker::PhantomData;

use itertools::Itertools;

use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::matrix::Matrix;
use crate::network::FlowNetwork;
use crate::solution::Solution;

/// Max-flow by repeated augmentation along shortest (fewest-edge) residual paths.
///
/// Neighbours are scanned in increasing vertex index, so among equally short paths the one
/// found first in that order is used and the resulting flow matrix is deterministic.
#[derive(Debug, Default)]
pub struct EdmondsKarp<C>(PhantomData<C>);

impl<C: Capacity> MaxFlow for EdmondsKarp<C> {
    type Capacity = C;

    fn max_flow(&mut self, network: &FlowNetwork<C>) -> Solution<C> {
        State::new(network).run()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct AugmentingPath<C> {
    vertices: Vec<usize>,
    bottleneck: C,
}

struct State<'a, C> {
    network: &'a FlowNetwork<C>,
    flow: Matrix<C>,
    predecessor: Vec<Option<usize>>,
    queue: VecDeque<usize>,
}

impl<'a, C: Capacity> State<'a, C> {
    fn new(network: &'a FlowNetwork<C>) -> Self {
        let vertices = network.vertices();
        State {
            network,
            flow: Matrix::zeros(vertices),
            predecessor: vec![None; vertices],
            queue: VecDeque::with_capacity(vertices),
        }
    }

    fn residual(&self, u: usize, v: usize) -> C {
        self.network.capacity(u, v) - self.flow[(u, v)]
    }

    // Breadth-first search over the residual graph, stopping as soon as the sink is discovered.
    fn find_augmenting_path(&mut self) -> Option<AugmentingPath<C>> {
        let source = self.network.source();
        let sink = self.network.sink();

        self.predecessor.fill(None);
        self.queue.clear();
        self.queue.push_back(source);

        while let Some(current) = self.queue.pop_front() {
            for vertex in 0..self.network.vertices() {
                // The source is discovered from the start and never gets a predecessor.
                if vertex == source
                    || self.predecessor[vertex].is_some()
                    || self.residual(current, vertex) <= C::zero()
                {
                    continue;
                }

                log::trace!("discovered {vertex} from {current}");
                self.predecessor[vertex] = Some(current);
                if vertex == sink {
                    return Some(self.trace_path());
                }
                self.queue.push_back(vertex);
            }
        }

        None
    }

    fn trace_path(&self) -> AugmentingPath<C> {
        let mut vertices = vec![self.network.sink()];
        let mut next = self.network.sink();
        while let Some(prev) = self.predecessor[next] {
            vertices.push(prev);
            next = prev;
        }
        vertices.reverse();
        debug_assert_eq!(vertices.first(), Some(&self.network.source()));

        let bottleneck = vertices
            .iter()
            .copied()
            .tuple_windows()
            .map(|(u, v)| self.residual(u, v))
            .min()
            .unwrap_or_else(C::zero);

        AugmentingPath {
            vertices,
            bottleneck,
        }
    }

    fn augment(&mut self, path: &AugmentingPath<C>) {
        let delta = path.bottleneck;
        for (u, v) in path.vertices.iter().copied().tuple_windows() {
            self.flow[(u, v)] += delta;
            self.flow[(v, u)] -= delta;
            debug_assert!(self.flow[(u, v)] <= self.network.capacity(u, v));
        }
    }

    fn run(mut self) -> Solution<C> {
        let mut value = C::zero();
        while let Some(path) = self.find_augmenting_path() {
            log::debug!(
                "Found path {:?} that augments flow by {}",
                path.vertices,
                path.bottleneck
            );
            value += path.bottleneck;
            self.augment(&path);
        }
        Solution::new(value, self.flow)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{AugmentingPath, EdmondsKarp, State};
    use crate::algo::MaxFlow;
    use crate::network::FlowNetwork;

    #[test]
    fn first_path_prefers_lower_indices() {
        // Two disjoint two-hop paths; vertex 1 is scanned before vertex 2.
        let n = FlowNetwork::with_edges(4, 0, 3, [(0, 2, 4), (2, 3, 4), (0, 1, 3), (1, 3, 3)])
            .unwrap();
        let mut state = State::new(&n);
        assert_eq!(
            state.find_augmenting_path(),
            Some(AugmentingPath {
                vertices: vec![0, 1, 3],
                bottleneck: 3
            })
        );
    }

    #[test]
    fn shortest_path_wins_over_lower_index() {
        let n = FlowNetwork::with_edges(
            5,
            0,
            4,
            [(0, 1, 9), (1, 2, 9), (2, 4, 9), (0, 3, 1), (3, 4, 1)],
        )
        .unwrap();
        let mut state = State::new(&n);
        let path = state.find_augmenting_path().unwrap();
        assert_eq!(path.vertices, [0, 3, 4]);
        assert_eq!(path.bottleneck, 1);
    }

    #[test]
    fn augmentation_keeps_flow_skew_symmetric() {
        let n = FlowNetwork::with_edges(3, 0, 2, [(0, 1, 7), (1, 2, 4)]).unwrap();
        let mut state = State::new(&n);
        let path = state.find_augmenting_path().unwrap();
        state.augment(&path);
        assert_eq!(state.flow[(0, 1)], 4);
        assert_eq!(state.flow[(1, 0)], -4);
        assert_eq!(state.flow[(1, 2)], 4);
        assert_eq!(state.flow[(2, 1)], -4);
        assert_eq!(state.residual(1, 0), 4);
        assert_eq!(state.find_augmenting_path(), None);
    }

    #[test]
    fn flow_is_pushed_back_through_reverse_residuals() {
        // The first path 0-1-3-5 saturates 3 -> 5, so the second one is 0-2-3-1-4-5 and
        // cancels the flow on 1 -> 3.
        let n = FlowNetwork::with_edges(
            6,
            0,
            5,
            [
                (0, 1, 1),
                (0, 2, 1),
                (1, 3, 1),
                (2, 3, 1),
                (3, 5, 1),
                (1, 4, 1),
                (4, 5, 1),
            ],
        )
        .unwrap();
        let solution = EdmondsKarp::default().max_flow(&n);
        assert_eq!(solution.value(), 2);
        assert_eq!(solution.flow_on(1, 3), 0);
        assert_eq!(solution.flow_on(2, 3), 1);
        assert_eq!(solution.flow_on(1, 4), 1);
        assert_eq!(solution.check(&n), Ok(()));
    }
}
