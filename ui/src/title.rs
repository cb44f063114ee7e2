use crate::*;

/// Static heading, horizontally centered one eighth of the window down.
#[derive(Clone, Debug)]
pub struct Title {
    text: String,
    anchor: Point,
    color: Color,
}

impl Title {
    pub fn new(text: impl Into<String>, window_size: (f32, f32)) -> Self {
        let (width, height) = window_size;
        Self {
            text: text.into(),
            anchor: Point::new(width / 2.0, height / 8.0),
            color: ACCENT,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_text(self.anchor, &self.text, self.color);
    }
}
