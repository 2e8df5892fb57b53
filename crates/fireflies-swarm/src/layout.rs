//! Placement of digit slots on screen and splitting the swarm between them.

use std::ops::Range;

use fireflies_core::Face;
use fireflies_fonts::{COLON_COLUMNS, DIGIT_COLUMNS, GLYPH_ROWS};
use glam::Vec2;

/// Art cells between neighbouring glyphs.
const GAP_COLUMNS: usize = 1;

/// Share of the screen width the face may cover.
const MAX_WIDTH_FRACTION: f32 = 0.9;

/// Share of the screen height the face may cover.
const MAX_HEIGHT_FRACTION: f32 = 0.6;

/// Where each digit slot and the separator sit for one screen size.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLayout {
    face: Face,
    scale: usize,
    slots: Vec<Vec2>,
    separator: Option<Vec2>,
}

impl FaceLayout {
    /// Lay out `face` centered on a `screen`-sized canvas at the largest
    /// integer scale that fits.
    pub fn new(face: Face, screen: Vec2) -> Self {
        let scale = Self::fit_scale(face, screen);
        let cell = |columns: usize| (columns * scale) as f32;
        let total = cell(Self::face_columns(face));
        let left = ((screen.x - total) / 2.0).floor();
        let top = ((screen.y - cell(GLYPH_ROWS)) / 2.0).floor();

        let step = cell(DIGIT_COLUMNS + GAP_COLUMNS);
        let (slots, separator) = match face {
            Face::Minutes => (vec![left, left + step], None),
            Face::HoursMinutes => {
                let colon = left + 2.0 * step;
                let minutes = colon + cell(COLON_COLUMNS + GAP_COLUMNS);
                (
                    vec![left, left + step, minutes, minutes + step],
                    Some(Vec2::new(colon, top)),
                )
            }
        };

        Self {
            face,
            scale,
            slots: slots.into_iter().map(|x| Vec2::new(x, top)).collect(),
            separator,
        }
    }

    /// Largest glyph scale whose face fits inside the allowed screen share.
    pub fn fit_scale(face: Face, screen: Vec2) -> usize {
        let by_width = screen.x * MAX_WIDTH_FRACTION / Self::face_columns(face) as f32;
        let by_height = screen.y * MAX_HEIGHT_FRACTION / GLYPH_ROWS as f32;
        (by_width.min(by_height).floor() as usize).max(1)
    }

    fn face_columns(face: Face) -> usize {
        match face {
            Face::Minutes => 2 * DIGIT_COLUMNS + GAP_COLUMNS,
            Face::HoursMinutes => 4 * DIGIT_COLUMNS + COLON_COLUMNS + 4 * GAP_COLUMNS,
        }
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Top-left corner of digit slot `slot`.
    pub fn slot_origin(&self, slot: usize) -> Option<Vec2> {
        self.slots.get(slot).copied()
    }

    /// Top-left corner of the colon cell, if the face has one.
    pub fn separator_origin(&self) -> Option<Vec2> {
        self.separator
    }
}

/// Split `total` particles into `groups` equal contiguous ranges after the
/// first `reserve` indices.
///
/// Each group gets `(total - reserve) / groups` particles; whatever the
/// division leaves over at the end belongs to no group.
pub fn partition(total: usize, reserve: usize, groups: usize) -> Vec<Range<usize>> {
    if groups == 0 {
        return Vec::new();
    }
    let size = total.saturating_sub(reserve) / groups;
    (0..groups)
        .map(|g| reserve + g * size..reserve + (g + 1) * size)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_three_digits() {
        let groups = partition(140, 5, 3);
        assert_eq!(groups, vec![5..50, 50..95, 95..140]);
        for g in &groups {
            assert_eq!(g.len(), 45);
        }
        for pair in groups.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_partition_leaves_remainder_unassigned() {
        let groups = partition(200, 5, 4);
        assert_eq!(groups, vec![5..53, 53..101, 101..149, 149..197]);
    }

    #[test]
    fn test_partition_underflow_yields_empty_groups() {
        let groups = partition(6, 5, 3);
        assert!(groups.iter().all(|g| g.is_empty()));
        assert!(partition(3, 5, 2).iter().all(|g| g.is_empty()));
        assert!(partition(10, 0, 0).is_empty());
    }

    #[test]
    fn test_layout_watch_screen() {
        let layout = FaceLayout::new(Face::HoursMinutes, Vec2::new(144.0, 168.0));
        assert_eq!(layout.scale(), 5);
        // 25 cells of 5 px = 125 px, centered in 144.
        assert_eq!(layout.slot_origin(0), Some(Vec2::new(9.0, 66.0)));
        assert_eq!(layout.slot_origin(1), Some(Vec2::new(39.0, 66.0)));
        assert_eq!(layout.separator_origin(), Some(Vec2::new(69.0, 66.0)));
        assert_eq!(layout.slot_origin(2), Some(Vec2::new(79.0, 66.0)));
        assert_eq!(layout.slot_origin(3), Some(Vec2::new(109.0, 66.0)));
        assert_eq!(layout.slot_origin(4), None);
    }

    #[test]
    fn test_layout_fits_inside_screen() {
        for (w, h) in [(160.0, 96.0), (60.0, 40.0), (400.0, 100.0), (10.0, 10.0)] {
            let screen = Vec2::new(w, h);
            for face in [Face::HoursMinutes, Face::Minutes] {
                let layout = FaceLayout::new(face, screen);
                if layout.scale() > 1 {
                    let last = layout.slot_origin(face.slots() - 1).unwrap();
                    let right = last.x + (DIGIT_COLUMNS * layout.scale()) as f32;
                    assert!(layout.slot_origin(0).unwrap().x >= 0.0);
                    assert!(right <= w, "{face:?} overflows {w}x{h}");
                }
            }
        }
    }

    #[test]
    fn test_minutes_layout_has_no_separator() {
        let layout = FaceLayout::new(Face::Minutes, Vec2::new(144.0, 168.0));
        assert_eq!(layout.separator_origin(), None);
        assert!(layout.slot_origin(1).is_some());
        assert!(layout.slot_origin(2).is_none());
    }
}
