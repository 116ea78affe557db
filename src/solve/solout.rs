//! Default SolOut that implements t_eval sampling and endpoint recording.

use crate::{
    Float,
    core::{
        interpolate::Interpolate,
        solout::{ControlFlag, SolOut},
    },
};

use super::cont::Segment;

/// Collects the solution for [`solve_ivp`](super::solve_ivp).
///
/// With `t_eval`, every requested time inside the accepted step `(xold, x]`
/// is filled from the step's interpolant, except that a requested time equal
/// to `x` takes the accepted state itself. Once the last requested time is
/// filled the run is interrupted, unless per-step dense output is being kept.
/// Without `t_eval`, every accepted endpoint is recorded.
pub(crate) struct DefaultSolOut<'a> {
    t_eval: Option<&'a [Float]>,
    posneg: Float,
    next_idx: usize,
    t: Vec<Float>,
    y: Vec<Vec<Float>>,
    segments: Option<Vec<Segment>>,
}

impl<'a> DefaultSolOut<'a> {
    pub(crate) fn new(t_eval: Option<&'a [Float]>, posneg: Float, keep_segments: bool) -> Self {
        let capacity = t_eval.map_or(0, <[Float]>::len);
        Self {
            t_eval,
            posneg,
            next_idx: 0,
            t: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            segments: keep_segments.then(Vec::new),
        }
    }

    pub(crate) fn into_data(self) -> (Vec<Float>, Vec<Vec<Float>>, Option<Vec<Segment>>) {
        (self.t, self.y, self.segments)
    }
}

impl SolOut for DefaultSolOut<'_> {
    fn solout<I: Interpolate>(
        &mut self,
        _xold: Float,
        x: Float,
        y: &[Float],
        interpolator: Option<&I>,
    ) -> ControlFlag {
        let Some(te) = self.t_eval else {
            self.t.push(x);
            self.y.push(y.to_vec());
            if let (Some(segments), Some(interpolator)) = (self.segments.as_mut(), interpolator) {
                let (cont, xold, h) = interpolator.get_cont();
                segments.push(Segment::new(cont, xold, x, h));
            }
            return ControlFlag::Continue;
        };

        let mut i = self.next_idx;
        while i < te.len() && (te[i] - x) * self.posneg <= 0.0 {
            let yi = if te[i] == x {
                y.to_vec()
            } else if let Some(interpolator) = interpolator {
                let mut yi = vec![0.0; y.len()];
                interpolator.interpolate(te[i], &mut yi);
                yi
            } else {
                break;
            };
            self.t.push(te[i]);
            self.y.push(yi);
            i += 1;
        }
        self.next_idx = i;

        match (self.segments.as_mut(), interpolator) {
            (Some(segments), Some(interpolator)) => {
                let (cont, xold, h) = interpolator.get_cont();
                segments.push(Segment::new(cont, xold, x, h));
                ControlFlag::Continue
            }
            (None, _) if i == te.len() => ControlFlag::Interrupt,
            _ => ControlFlag::Continue,
        }
    }
}
