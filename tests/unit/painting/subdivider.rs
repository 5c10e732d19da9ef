//! Tests for split sampling and recursive subdivision

#[cfg(test)]
mod tests {
    use super::super::ScriptedRandom;
    use mondrian::canvas::Region;
    use mondrian::io::configuration::SMALLEST_SUBSECTION;
    use mondrian::painting::SeededRandom;
    use mondrian::painting::subdivider::{Axis, Layout, Subdivider, split_point};

    fn layout_for(width: usize, height: usize, seed: u64) -> Layout {
        Subdivider::new(width, height).layout(&mut SeededRandom::new(seed))
    }

    // Tests split draws are confined to the valid sub-range
    // Verified by sampling from the full min..=max range
    #[test]
    fn test_split_point_respects_minimum_pieces() {
        let mut rng = SeededRandom::new(99);

        for _ in 0..1000 {
            let at = split_point(100, 140, 10, &mut rng);
            assert!((110..=130).contains(&at), "split at {at}");
        }
    }

    // Tests intervals too short for two minimum pieces fall back to the midpoint
    // Verified by removing the empty range check
    #[test]
    fn test_split_point_midpoint_fallback() {
        let mut rng = ScriptedRandom::with_integers(&[1, 2, 3]);

        assert_eq!(split_point(0, 15, 10, &mut rng), 7);
        assert_eq!(split_point(40, 60, 10, &mut rng), 50);
        assert_eq!(split_point(5, 6, 10, &mut rng), 5);
    }

    // Tests quadrant order and the horizontal-then-vertical draw order
    // Verified by reordering the quadrant recursion
    #[test]
    fn test_quadrant_visit_order() {
        let mut rng = ScriptedRandom::with_integers(&[150, 250]);

        let layout = Subdivider::new(400, 400).layout(&mut rng);

        let first = layout.splits.first().unwrap();
        assert_eq!((first.axis, first.at, first.depth), (Axis::Horizontal, 150, 0));
        let second = layout.splits.get(1).unwrap();
        assert_eq!((second.axis, second.at), (Axis::Vertical, 250));
        let third = layout.splits.get(2).unwrap();
        assert_eq!(third.region, Region::new(0, 250, 0, 150));
        assert_eq!(third.depth, 1);

        let last_top_level_child = layout.leaves.last().unwrap();
        assert!(last_top_level_child.x1 >= 250);
        assert!(last_top_level_child.y2 <= 150);
    }

    // Tests every split leaves at least the minimum piece on both sides
    // Verified by dropping the minimum from the sub-range bounds
    #[test]
    fn test_split_pieces_never_below_minimum() {
        for seed in 0..200 {
            let layout = layout_for(300, 450, seed);
            for split in &layout.splits {
                let (before, after) = split.piece_lengths();
                assert!(
                    before >= SMALLEST_SUBSECTION && after >= SMALLEST_SUBSECTION,
                    "seed {seed}: {split:?}"
                );
            }
        }
    }

    // Tests leaves tile the canvas exactly and are small on both axes
    // Verified by skipping the fourth quadrant
    #[test]
    fn test_leaves_partition_canvas() {
        let (width, height) = (640, 480);
        let layout = layout_for(width, height, 7);

        let area: usize = layout.leaves.iter().map(|r| r.width() * r.height()).sum();
        assert_eq!(area, width * height);

        for leaf in &layout.leaves {
            assert!(leaf.width() <= width / 4, "{leaf:?}");
            assert!(leaf.height() <= height / 4, "{leaf:?}");
            assert!(leaf.x2 <= width && leaf.y2 <= height);
        }
    }

    // Tests identical seeds give identical trees
    // Verified by drawing splits from a fresh entropy source
    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(layout_for(500, 300, 21), layout_for(500, 300, 21));
        assert_ne!(layout_for(500, 300, 21), layout_for(500, 300, 22));
    }

    // Tests recursion depth stays bounded across many seeds
    // Verified by allowing zero-length pieces
    #[test]
    fn test_depth_bounded_for_many_seeds() {
        let shrink_budget = 2 * ((300 - 300 / 4) / SMALLEST_SUBSECTION + 1);

        for seed in 0..1000 {
            let layout = layout_for(300, 300, seed);
            assert!(!layout.leaves.is_empty());
            assert!(
                layout.max_depth <= shrink_budget,
                "seed {seed} reached depth {}",
                layout.max_depth
            );
        }
    }

    // Tests oversized minimum pieces degrade into midpoint splits
    // Verified by sampling regardless of the empty range
    #[test]
    fn test_large_minimum_uses_midpoints() {
        let subdivider = Subdivider::new(300, 300).with_smallest_subsection(200);
        assert_eq!(subdivider.smallest_subsection(), 200);

        let layout = subdivider.layout(&mut SeededRandom::new(0));

        assert_eq!(layout.leaves.len(), 16);
        assert!(layout.leaves.iter().all(|r| r.width() == 75 && r.height() == 75));
        assert_eq!(layout.max_depth, 2);
    }

    #[test]
    fn test_small_canvas_region_is_single_split_axis() {
        let mut rng = ScriptedRandom::with_integers(&[60]);
        let subdivider = Subdivider::new(300, 300);

        let mut layout = Layout::default();
        subdivider.subdivide(Region::new(0, 120, 0, 40), 3, &mut rng, &mut layout);

        assert_eq!(layout.splits.len(), 1);
        assert_eq!(layout.splits.first().map(|s| s.axis), Some(Axis::Vertical));
        assert_eq!(
            layout.leaves,
            vec![Region::new(0, 60, 0, 40), Region::new(60, 120, 0, 40)]
        );
        assert_eq!(layout.max_depth, 4);
    }
}
