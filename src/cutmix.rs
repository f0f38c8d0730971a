use std::num::NonZeroUsize;

use rand::Rng;

/// A rectangular region clipped to an image's bounds, produced by
/// [`rand_bbox`]. Coordinates follow the usual raster convention: `x` runs
/// along the width axis, `y` along the height axis, and the box spans
/// `[x1, x2) x [y1, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl BBox {
    /// Returns the number of pixels the box covers.
    pub fn area(&self) -> usize {
        (self.x2 - self.x1) * (self.y2 - self.y1)
    }
}

/// Samples the rectangular patch CutMix swaps between two images.
///
/// The patch covers roughly a `1 - lam` fraction of the image: its side
/// lengths are the image's scaled by `sqrt(1 - lam)` (truncated), centered on
/// a uniformly random pixel and clipped to the image.
///
/// # Arguments
/// * `width` - Image extent along the x axis.
/// * `height` - Image extent along the y axis.
/// * `lam` - Mixing fraction in `[0, 1]`; 1 keeps the whole image (zero-area
///   patch), 0 cuts dimensions equal to the full extents.
/// * `rng` - The random number generator to sample the center from, so the
///   caller controls reproducibility.
pub fn rand_bbox<R: Rng>(width: NonZeroUsize, height: NonZeroUsize, lam: f32, rng: &mut R) -> BBox {
    let (w, h) = (width.get(), height.get());

    let cut_rat = (1.0 - lam).sqrt();
    let cut_w = (w as f32 * cut_rat) as usize;
    let cut_h = (h as f32 * cut_rat) as usize;

    let cx = rng.random_range(0..w);
    let cy = rng.random_range(0..h);

    BBox {
        x1: cx.saturating_sub(cut_w / 2),
        y1: cy.saturating_sub(cut_h / 2),
        x2: (cx + cut_w / 2).min(w),
        y2: (cy + cut_h / 2).min(h),
    }
}

/// Reads the spatial extent of a batch x channel x height x width shape.
///
/// Index 2 is the height axis and index 3 the width axis; the pair is
/// returned in `(width, height)` order, ready for [`rand_bbox`]. Returns
/// `None` when either spatial axis is zero.
pub fn nchw_extent(shape: [usize; 4]) -> Option<(NonZeroUsize, NonZeroUsize)> {
    let height = NonZeroUsize::new(shape[2])?;
    let width = NonZeroUsize::new(shape[3])?;
    Some((width, height))
}
