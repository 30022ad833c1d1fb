//! Outline paths produced by shape renderers.

use crate::geometry::{CornerRadii, Point, Rect};

/// A 2D path made of move/line/curve commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

/// Commands that make up a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Point),
    /// Draw a line to a point.
    LineTo(Point),
    /// Draw a quadratic bezier curve.
    QuadTo { control: Point, end: Point },
    /// Close the current subpath.
    Close,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Draw a quadratic bezier curve.
    pub fn quad_to(&mut self, control: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of curved corners in the path.
    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadTo { .. }))
            .count()
    }

    /// Create a rounded rectangle path.
    ///
    /// Corners with a zero radius are emitted as sharp corners.
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        let mut path = Self::new();

        let tl = radii.top_left;
        let tr = radii.top_right;
        let br = radii.bottom_right;
        let bl = radii.bottom_left;

        path.move_to(Point::new(rect.left() + tl, rect.top()));
        path.line_to(Point::new(rect.right() - tr, rect.top()));
        if tr > 0.0 {
            path.quad_to(
                Point::new(rect.right(), rect.top()),
                Point::new(rect.right(), rect.top() + tr),
            );
        }

        path.line_to(Point::new(rect.right(), rect.bottom() - br));
        if br > 0.0 {
            path.quad_to(
                Point::new(rect.right(), rect.bottom()),
                Point::new(rect.right() - br, rect.bottom()),
            );
        }

        path.line_to(Point::new(rect.left() + bl, rect.bottom()));
        if bl > 0.0 {
            path.quad_to(
                Point::new(rect.left(), rect.bottom()),
                Point::new(rect.left(), rect.bottom() - bl),
            );
        }

        path.line_to(Point::new(rect.left(), rect.top() + tl));
        if tl > 0.0 {
            path.quad_to(
                Point::new(rect.left(), rect.top()),
                Point::new(rect.left() + tl, rect.top()),
            );
        }

        path.close();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharp_rect() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::ZERO);
        // move + 4 edges + close
        assert_eq!(path.commands().len(), 6);
        assert_eq!(path.curve_count(), 0);
        assert!(matches!(path.commands()[5], PathCommand::Close));
    }

    #[test]
    fn test_rounded_rect() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 40.0), CornerRadii::uniform(8.0));
        assert_eq!(path.commands().len(), 10);
        assert_eq!(path.curve_count(), 4);
        assert_eq!(
            path.commands()[0],
            PathCommand::MoveTo(Point::new(8.0, 0.0))
        );
    }
}
