// View-local sticker transform. Never stored in the session; export reads a
// snapshot of it.

use media_library::StickerPlacement;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerTransform {
    /// Top-left corner in frame coordinates
    pub x: f64,
    pub y: f64,
    /// Current edge length
    pub size: f64,
    /// Edge length before any double-tap
    pub base_size: f64,
}

impl StickerTransform {
    /// Starting position: horizontally centred, upper part of the frame
    pub fn initial(frame_width: u32, frame_height: u32, sticker_size: u32) -> Self {
        let size = sticker_size as f64;
        Self {
            x: (frame_width as f64 - size) / 2.0,
            y: frame_height as f64 / 5.0,
            size,
            base_size: size,
        }
    }

    /// Moves by a pointer delta, keeping at least half the sticker in the frame
    pub fn dragged(self, dx: f64, dy: f64, frame_width: u32, frame_height: u32) -> Self {
        let half = self.size / 2.0;
        let x = (self.x + dx).clamp(-half, frame_width as f64 - half);
        let y = (self.y + dy).clamp(-half, frame_height as f64 - half);
        Self { x, y, ..self }
    }

    /// Double-tap: grow to twice the base size, or shrink back.
    /// Scales around the centre so the sticker stays under the finger.
    pub fn toggled_scale(self) -> Self {
        let size = if self.is_enlarged() {
            self.base_size
        } else {
            self.base_size * 2.0
        };
        let delta = (size - self.size) / 2.0;
        Self {
            x: self.x - delta,
            y: self.y - delta,
            size,
            ..self
        }
    }

    pub fn is_enlarged(&self) -> bool {
        self.size > self.base_size
    }

    pub fn placement(&self) -> StickerPlacement {
        StickerPlacement {
            x: self.x as f32,
            y: self.y as f32,
            size: self.size as f32,
        }
    }
}

/// Pointer drag in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub origin: StickerTransform,
}

impl DragState {
    pub fn begin(pointer_x: f64, pointer_y: f64, origin: StickerTransform) -> Self {
        Self {
            pointer_x,
            pointer_y,
            origin,
        }
    }

    /// Transform for the current pointer position, relative to where the drag began
    pub fn update(&self, pointer_x: f64, pointer_y: f64, frame_width: u32, frame_height: u32) -> StickerTransform {
        self.origin.dragged(
            pointer_x - self.pointer_x,
            pointer_y - self.pointer_y,
            frame_width,
            frame_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let t = StickerTransform::initial(320, 440, 40);
        assert_eq!(t.x, 140.0);
        assert_eq!(t.y, 88.0);
        assert_eq!(t.size, 40.0);
        assert!(!t.is_enlarged());
    }

    #[test]
    fn test_drag_moves_and_clamps() {
        let t = StickerTransform::initial(320, 440, 40);
        let moved = t.dragged(10.0, -8.0, 320, 440);
        assert_eq!((moved.x, moved.y), (150.0, 80.0));

        let far = t.dragged(10_000.0, -10_000.0, 320, 440);
        assert_eq!((far.x, far.y), (300.0, -20.0));
    }

    #[test]
    fn test_double_tap_toggles_around_centre() {
        let t = StickerTransform::initial(320, 440, 40);
        let big = t.toggled_scale();
        assert_eq!(big.size, 80.0);
        assert_eq!((big.x, big.y), (120.0, 68.0));
        assert!(big.is_enlarged());

        let back = big.toggled_scale();
        assert_eq!(back, t);
    }

    #[test]
    fn test_drag_state_is_relative_to_start() {
        let t = StickerTransform::initial(320, 440, 40);
        let drag = DragState::begin(100.0, 100.0, t);
        let a = drag.update(105.0, 103.0, 320, 440);
        let b = drag.update(110.0, 106.0, 320, 440);
        assert_eq!((a.x, a.y), (145.0, 91.0));
        assert_eq!((b.x, b.y), (150.0, 94.0));
    }

    #[test]
    fn test_placement_conversion() {
        let p = StickerTransform::initial(320, 440, 40).placement();
        assert_eq!((p.x, p.y, p.size), (140.0, 88.0, 40.0));
    }
}
