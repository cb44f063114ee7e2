use crate::*;

/// Drawing capability provided by the embedding frontend.
///
/// Implementations translate these calls onto whatever 2D canvas the
/// application renders with.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    /// Draws `text` anchored at its center point.
    fn draw_text(&mut self, center: Point, text: &str, color: Color);
}

#[cfg(test)]
#[derive(Debug, PartialEq)]
pub(crate) enum DrawCall {
    Rect(Rect, Color),
    Circle(Point, f32, Color),
    Text(Point, String, Color),
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl Surface for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Rect(rect, color));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle(center, radius, color));
    }

    fn draw_text(&mut self, center: Point, text: &str, color: Color) {
        self.calls.push(DrawCall::Text(center, text.to_owned(), color));
    }
}
