/// Trait implemented by 1D filters applied separably to image planes.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to
    /// sum to one; symmetry around the centre is expected but not relied on.
    fn taps(&self) -> &[f32];

    /// Half-width of the kernel.
    fn radius(&self) -> usize {
        self.taps().len() / 2
    }
}

/// Gaussian taps sampled at integer offsets, truncated at four standard
/// deviations and normalized to unit sum.
#[derive(Clone, Debug)]
pub struct GaussianKernel {
    taps: Vec<f32>,
}

impl GaussianKernel {
    /// Build the kernel for `sigma`. A non-positive sigma yields the
    /// single-tap identity kernel.
    pub fn new(sigma: f32) -> Self {
        if sigma <= 0.0 {
            return Self { taps: vec![1.0] };
        }
        let radius = (4.0 * sigma + 0.5) as usize;
        let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);
        let mut taps = Vec::with_capacity(2 * radius + 1);
        for i in -(radius as isize)..=(radius as isize) {
            let x = i as f32;
            taps.push((-x * x * inv_two_sigma_sq).exp());
        }
        let sum: f32 = taps.iter().sum();
        for tap in &mut taps {
            *tap /= sum;
        }
        Self { taps }
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}
