use crate::capacity::Capacity;
use crate::error::Violation;
use crate::matrix::Matrix;
use crate::network::FlowNetwork;

/// The result of a max-flow computation: the flow value and a flow matrix achieving it.
///
/// The flow matrix is skew-symmetric, so `flow[(v, u)] == -flow[(u, v)]` for every pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<C> {
    value: C,
    flow: Matrix<C>,
}

impl<C: Capacity> Solution<C> {
    pub(crate) fn new(value: C, flow: Matrix<C>) -> Self {
        Self { value, flow }
    }

    pub fn value(&self) -> C {
        self.value
    }

    pub fn flow(&self) -> &Matrix<C> {
        &self.flow
    }

    pub fn flow_on(&self, src: usize, dst: usize) -> C {
        self.flow[(src, dst)]
    }

    pub fn into_parts(self) -> (C, Matrix<C>) {
        (self.value, self.flow)
    }

    /// Verify that this is a feasible flow on `network` with the recorded value.
    ///
    /// # Errors
    ///
    /// The first broken invariant, checked in this order: matrix dimension, skew symmetry,
    /// capacity bound, conservation at inner vertices, source outflow, sink inflow.
    pub fn check(&self, network: &FlowNetwork<C>) -> Result<(), Violation> {
        let n = network.vertices();
        if self.flow.order() != n {
            return Err(Violation::Dimension {
                expected: n,
                found: self.flow.order(),
            });
        }

        let pairs = || (0..n).flat_map(move |src| (0..n).map(move |dst| (src, dst)));

        if let Some((src, dst)) = pairs().find(|&(u, v)| self.flow[(u, v)] != -self.flow[(v, u)]) {
            return Err(Violation::SkewSymmetry { src, dst });
        }
        if let Some((src, dst)) =
            pairs().find(|&(u, v)| self.flow[(u, v)] > network.capacity(u, v))
        {
            return Err(Violation::CapacityExceeded { src, dst });
        }
        if let Some(vertex) = (0..n)
            .filter(|&v| v != network.source() && v != network.sink())
            .find(|&v| !self.flow.row(v).iter().copied().sum::<C>().is_zero())
        {
            return Err(Violation::Conservation(vertex));
        }
        if self.flow.row(network.source()).iter().copied().sum::<C>() != self.value {
            return Err(Violation::SourceOutflow);
        }
        if self.flow.column(network.sink()).copied().sum::<C>() != self.value {
            return Err(Violation::SinkInflow);
        }

        log::debug!("flow of value {} satisfies all invariants", self.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Solution;
    use crate::error::Violation;
    use crate::matrix::Matrix;
    use crate::network::FlowNetwork;

    fn path_network() -> FlowNetwork<i64> {
        FlowNetwork::with_edges(3, 0, 2, [(0, 1, 5), (1, 2, 3)]).unwrap()
    }

    fn flow(entries: &[(usize, usize, i64)]) -> Matrix<i64> {
        let mut m = Matrix::zeros(3);
        for &(u, v, f) in entries {
            m[(u, v)] = f;
            m[(v, u)] = -f;
        }
        m
    }

    #[test]
    fn accepts_feasible_flow() {
        let s = Solution::new(2, flow(&[(0, 1, 2), (1, 2, 2)]));
        assert_eq!(s.check(&path_network()), Ok(()));
    }

    #[test]
    fn reports_each_broken_invariant() {
        let n = path_network();

        let mut skewed = flow(&[(0, 1, 2), (1, 2, 2)]);
        skewed[(2, 1)] = 0;
        assert_eq!(
            Solution::new(2, skewed).check(&n),
            Err(Violation::SkewSymmetry { src: 1, dst: 2 })
        );

        assert_eq!(
            Solution::new(4, flow(&[(0, 1, 4), (1, 2, 4)])).check(&n),
            Err(Violation::CapacityExceeded { src: 1, dst: 2 })
        );
        assert_eq!(
            Solution::new(3, flow(&[(0, 1, 3), (1, 2, 2)])).check(&n),
            Err(Violation::Conservation(1))
        );
        assert_eq!(
            Solution::new(1, flow(&[(0, 1, 2), (1, 2, 2)])).check(&n),
            Err(Violation::SourceOutflow)
        );
        assert_eq!(
            Solution::new(0, Matrix::zeros(2)).check(&n),
            Err(Violation::Dimension {
                expected: 3,
                found: 2
            })
        );
    }
}
