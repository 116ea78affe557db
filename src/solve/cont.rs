//! Continuous output provided by dense output coefficients (cont) from each step.

use crate::{Float, methods::dp::contdp5};

/// Dense coefficients of one accepted step covering `[xold, x]`.
#[derive(Debug, Clone)]
pub(crate) struct Segment {
    cont: Vec<Float>,
    xold: Float,
    x: Float,
    h: Float,
}

impl Segment {
    pub(crate) fn new(cont: Vec<Float>, xold: Float, x: Float, h: Float) -> Self {
        Self { cont, xold, x, h }
    }
}

/// Piecewise dense output over all accepted steps.
///
/// Evaluating at a step boundary returns the accepted state there: the left
/// end of the following step interpolates with `theta = 0`, which reproduces
/// the stored state exactly, and the end of the span returns the final state.
#[derive(Debug, Clone)]
pub struct ContinuousOutput {
    segs: Vec<Segment>,
    y_end: Vec<Float>,
}

impl ContinuousOutput {
    pub(crate) fn new(segs: Vec<Segment>, y_end: Vec<Float>) -> Self {
        let segs = segs.into_iter().filter(|s| s.h != 0.0).collect();
        Self { segs, y_end }
    }

    /// Domain covered by the dense output, in integration order.
    pub fn t_span(&self) -> Option<(Float, Float)> {
        let first = self.segs.first()?;
        let last = self.segs.last()?;
        Some((first.xold, last.x))
    }

    /// Interpolate y(t) if t lies within the covered span; returns None if outside.
    pub fn evaluate(&self, t: Float) -> Option<Vec<Float>> {
        let (start, end) = self.t_span()?;
        if t == end {
            return Some(self.y_end.clone());
        }
        let seg = self.find_segment(t, start)?;
        let mut yi = vec![0.0; seg.cont.len() / 5];
        contdp5(t, &mut yi, &seg.cont, seg.xold, seg.h);
        Some(yi)
    }

    /// Batch-evaluate at many times; returns None for points outside coverage.
    pub fn evaluate_many(&self, ts: &[Float]) -> Vec<Option<Vec<Float>>> {
        ts.iter().map(|&t| self.evaluate(t)).collect()
    }

    /// First segment whose right end lies strictly past `t`.
    fn find_segment(&self, t: Float, start: Float) -> Option<&Segment> {
        let dir = self.segs.first()?.h.signum();
        if (t - start) * dir < 0.0 {
            return None;
        }
        let idx = self.segs.partition_point(|s| (s.x - t) * dir <= 0.0);
        self.segs.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Linear segments for y(t) = t: cont = [y0, ydiff, 0, 0, 0].
    fn linear(xs: &[Float]) -> ContinuousOutput {
        let segs = xs
            .windows(2)
            .map(|w| Segment::new(vec![w[0], w[1] - w[0], 0.0, 0.0, 0.0], w[0], w[1], w[1] - w[0]))
            .collect();
        ContinuousOutput::new(segs, vec![*xs.last().unwrap()])
    }

    #[test]
    fn evaluates_inside_and_at_boundaries() {
        let out = linear(&[0.0, 0.5, 1.5, 3.0]);
        assert_eq!(out.t_span(), Some((0.0, 3.0)));
        assert_eq!(out.evaluate(0.0), Some(vec![0.0]));
        assert_eq!(out.evaluate(0.5), Some(vec![0.5]));
        assert_eq!(out.evaluate(3.0), Some(vec![3.0]));
        let y = out.evaluate(2.25).unwrap();
        assert!((y[0] - 2.25).abs() < 1e-15);
    }

    #[test]
    fn outside_span_is_none() {
        let out = linear(&[0.0, 1.0, 2.0]);
        assert_eq!(out.evaluate(-0.1), None);
        assert_eq!(out.evaluate(2.1), None);
        assert_eq!(out.evaluate_many(&[-1.0, 1.0]), vec![None, Some(vec![1.0])]);
    }

    #[test]
    fn backward_segments() {
        let out = linear(&[2.0, 1.0, 0.0]);
        assert_eq!(out.t_span(), Some((2.0, 0.0)));
        assert_eq!(out.evaluate(1.0), Some(vec![1.0]));
        let y = out.evaluate(0.25).unwrap();
        assert!((y[0] - 0.25).abs() < 1e-15);
        assert_eq!(out.evaluate(2.5), None);
        assert_eq!(out.evaluate(-0.5), None);
    }

    #[test]
    fn empty_output_has_no_span() {
        let out = ContinuousOutput::new(Vec::new(), vec![1.0]);
        assert_eq!(out.t_span(), None);
        assert_eq!(out.evaluate(0.0), None);
    }
}
