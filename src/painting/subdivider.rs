//! Recursive subdivision of the canvas into leaf regions
//!
//! A region keeps splitting while it is longer than a quarter of the canvas
//! along some axis. Wide-and-tall regions split into four quadrants, regions
//! that are only wide or only tall split in two, and everything else becomes
//! a leaf handed to the fill policy.
//!
//! All split points are drawn while the [`Layout`] is built, before any color
//! is chosen, so one seed produces one subdivision tree regardless of the
//! fill policy installed afterwards.

use crate::canvas::{Canvas, Region};
use crate::io::configuration::{SMALLEST_SUBSECTION, SUBDIVISION_DIVISOR};
use crate::painting::random::RandomSource;

/// Axis a split cuts across
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Cut at an x coordinate, producing left and right halves
    Vertical,
    /// Cut at a y coordinate, producing top and bottom halves
    Horizontal,
}

/// One recorded cut of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Split {
    /// Region that was cut
    pub region: Region,
    /// Direction of the cut
    pub axis: Axis,
    /// Coordinate of the cut along the axis
    pub at: usize,
    /// Recursion depth of the region (the full canvas is depth 0)
    pub depth: usize,
}

impl Split {
    /// Lengths of the two pieces on either side of the cut
    pub const fn piece_lengths(&self) -> (usize, usize) {
        match self.axis {
            Axis::Vertical => (self.at - self.region.x1, self.region.x2 - self.at),
            Axis::Horizontal => (self.at - self.region.y1, self.region.y2 - self.at),
        }
    }
}

/// Subdivision tree flattened into visit order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Leaf regions in the order the recursion reached them
    pub leaves: Vec<Region>,
    /// Every cut made, in the order it was made
    pub splits: Vec<Split>,
    /// Deepest recursion level reached
    pub max_depth: usize,
}

/// Pick a split coordinate in `min..=max` leaving both sides at least `smallest` long
///
/// Samples uniformly from the valid sub-range `[min + smallest, max - smallest]`.
/// When that range is empty the midpoint is used instead, so the call always
/// returns.
pub fn split_point<R: RandomSource + ?Sized>(
    min: usize,
    max: usize,
    smallest: usize,
    rng: &mut R,
) -> usize {
    let low = min + smallest;
    let high = max.saturating_sub(smallest);
    if low > high {
        return min + (max - min) / 2;
    }
    rng.next_in_range(low, high)
}

/// Recursive partitioner bound to one canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdivider {
    canvas_width: usize,
    canvas_height: usize,
    smallest_subsection: usize,
}

impl Subdivider {
    /// Create a subdivider for a canvas of the given size
    pub const fn new(canvas_width: usize, canvas_height: usize) -> Self {
        Self {
            canvas_width,
            canvas_height,
            smallest_subsection: SMALLEST_SUBSECTION,
        }
    }

    /// Create a subdivider sized to `canvas`
    pub fn for_canvas(canvas: &Canvas) -> Self {
        Self::new(canvas.width(), canvas.height())
    }

    /// Override the minimum piece length
    pub const fn with_smallest_subsection(mut self, smallest_subsection: usize) -> Self {
        self.smallest_subsection = smallest_subsection;
        self
    }

    /// Minimum piece length either side of a cut
    pub const fn smallest_subsection(&self) -> usize {
        self.smallest_subsection
    }

    /// Subdivide the whole canvas
    pub fn layout<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Layout {
        let mut layout = Layout::default();
        let full = Region::new(0, self.canvas_width, 0, self.canvas_height);
        self.subdivide(full, 0, rng, &mut layout);

        log::debug!(
            "subdivided {}x{} canvas into {} leaves ({} splits, depth {})",
            self.canvas_width,
            self.canvas_height,
            layout.leaves.len(),
            layout.splits.len(),
            layout.max_depth
        );

        layout
    }

    /// Subdivide `region`, appending its cuts and leaves to `layout`
    pub fn subdivide<R: RandomSource + ?Sized>(
        &self,
        region: Region,
        depth: usize,
        rng: &mut R,
        layout: &mut Layout,
    ) {
        layout.max_depth = layout.max_depth.max(depth);
        let Region { x1, x2, y1, y2 } = region;

        match (self.splits_x(&region), self.splits_y(&region)) {
            (true, true) => {
                let ry = split_point(y1, y2, self.smallest_subsection, rng);
                let rx = split_point(x1, x2, self.smallest_subsection, rng);
                Self::record(layout, region, Axis::Horizontal, ry, depth);
                Self::record(layout, region, Axis::Vertical, rx, depth);

                self.subdivide(Region::new(x1, rx, y1, ry), depth + 1, rng, layout);
                self.subdivide(Region::new(x1, rx, ry, y2), depth + 1, rng, layout);
                self.subdivide(Region::new(rx, x2, ry, y2), depth + 1, rng, layout);
                self.subdivide(Region::new(rx, x2, y1, ry), depth + 1, rng, layout);
            }
            (true, false) => {
                let rx = split_point(x1, x2, self.smallest_subsection, rng);
                Self::record(layout, region, Axis::Vertical, rx, depth);

                self.subdivide(Region::new(x1, rx, y1, y2), depth + 1, rng, layout);
                self.subdivide(Region::new(rx, x2, y1, y2), depth + 1, rng, layout);
            }
            (false, true) => {
                let ry = split_point(y1, y2, self.smallest_subsection, rng);
                Self::record(layout, region, Axis::Horizontal, ry, depth);

                self.subdivide(Region::new(x1, x2, y1, ry), depth + 1, rng, layout);
                self.subdivide(Region::new(x1, x2, ry, y2), depth + 1, rng, layout);
            }
            (false, false) => layout.leaves.push(region),
        }
    }

    // A region needs at least two pixels along an axis to be cut into two non-empty pieces
    const fn splits_x(&self, region: &Region) -> bool {
        region.width() > self.canvas_width / SUBDIVISION_DIVISOR && region.width() >= 2
    }

    const fn splits_y(&self, region: &Region) -> bool {
        region.height() > self.canvas_height / SUBDIVISION_DIVISOR && region.height() >= 2
    }

    fn record(layout: &mut Layout, region: Region, axis: Axis, at: usize, depth: usize) {
        log::trace!("depth {depth}: {axis:?} cut of {region:?} at {at}");
        layout.splits.push(Split {
            region,
            axis,
            at,
            depth,
        });
    }
}
