//! Output of [`solve_ivp`](super::solve_ivp).

use crate::Float;

use super::cont::ContinuousOutput;

/// Samples of a completed run plus integrator work counters.
///
/// `y[i]` is the state at `t[i]`. With `t_eval`, `t` is a copy of the
/// requested times, repeats included; otherwise it lists `x0` followed by
/// every accepted step endpoint, ending at `xend`.
///
/// `sol*` evaluate the continuous extension and only answer when the run was
/// made with `dense_output`.
#[derive(Debug, Clone)]
pub struct IVPSolution {
    pub t: Vec<Float>,
    pub y: Vec<Vec<Float>>,
    /// Right-hand side evaluations.
    pub nfev: usize,
    /// Attempted steps, `naccpt + nrejct`.
    pub nstep: usize,
    pub naccpt: usize,
    pub nrejct: usize,
    pub(crate) dense_output: Option<ContinuousOutput>,
}

impl IVPSolution {
    /// State at `t`, or `None` outside `[x0, xend]` or without dense output.
    /// At a step endpoint this is the accepted state.
    pub fn sol(&self, t: Float) -> Option<Vec<Float>> {
        self.dense_output.as_ref()?.evaluate(t)
    }

    /// [`sol`](Self::sol) at each of `ts`.
    pub fn sol_many(&self, ts: &[Float]) -> Vec<Option<Vec<Float>>> {
        ts.iter().map(|&t| self.sol(t)).collect()
    }

    /// `(x0, xend)` when dense output was kept.
    pub fn sol_span(&self) -> Option<(Float, Float)> {
        self.dense_output.as_ref()?.t_span()
    }

    /// `(t, y)` samples in integration order.
    pub fn iter(&self) -> impl Iterator<Item = (Float, &[Float])> + '_ {
        self.t.iter().copied().zip(self.y.iter().map(Vec::as_slice))
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve::cont::Segment;

    fn sampled(dense: bool) -> IVPSolution {
        // y(t) = t on [0, 2] from two linear steps.
        let segs = vec![
            Segment::new(vec![0.0, 1.0, 0.0, 0.0, 0.0], 0.0, 1.0, 1.0),
            Segment::new(vec![1.0, 1.0, 0.0, 0.0, 0.0], 1.0, 2.0, 1.0),
        ];
        IVPSolution {
            t: vec![0.0, 1.0, 2.0],
            y: vec![vec![0.0], vec![1.0], vec![2.0]],
            nfev: 14,
            nstep: 2,
            naccpt: 2,
            nrejct: 0,
            dense_output: dense.then(|| ContinuousOutput::new(segs, vec![2.0])),
        }
    }

    #[test]
    fn iterates_samples_in_order() {
        let sol = sampled(false);
        let pairs: Vec<(Float, Vec<Float>)> = sol.iter().map(|(t, y)| (t, y.to_vec())).collect();
        assert_eq!(
            pairs,
            vec![(0.0, vec![0.0]), (1.0, vec![1.0]), (2.0, vec![2.0])]
        );
        assert_eq!(sol.len(), 3);
        assert!(!sol.is_empty());
    }

    #[test]
    fn continuous_queries_need_dense_output() {
        let sol = sampled(false);
        assert_eq!(sol.sol(0.5), None);
        assert_eq!(sol.sol_span(), None);
        assert_eq!(sol.sol_many(&[0.5, 1.5]), vec![None, None]);

        let sol = sampled(true);
        assert_eq!(sol.sol_span(), Some((0.0, 2.0)));
        assert_eq!(sol.sol(1.0), Some(vec![1.0]));
        assert_eq!(sol.sol_many(&[1.5, 3.0]), vec![Some(vec![1.5]), None]);
    }
}
