use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SliderOutcome {
    NoChange,
    ValueChanged,
}

impl SliderOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::ValueChanged)
    }
}

/// Horizontal slider mapping a pixel position on its track to a value.
#[derive(Clone, Debug)]
pub struct Slider {
    track: Rect,
    min_value: f32,
    max_value: f32,
    value: f32,
    dragging: bool,
    style: SliderStyle,
}

impl Slider {
    pub fn new(
        position: Point,
        width: f32,
        bounds: (f32, f32),
        initial: f32,
        style: SliderStyle,
    ) -> Self {
        let width = width.max(1.0);
        let min_value = bounds.0.min(bounds.1);
        let max_value = bounds.0.max(bounds.1);
        Self {
            track: Rect::new(position.x, position.y, width, style.track_height),
            min_value,
            max_value,
            value: initial.clamp(min_value, max_value),
            dragging: false,
            style,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.min_value, self.max_value)
    }

    pub fn track(&self) -> Rect {
        self.track
    }

    /// Hit region for starting a drag: the track widened to the handle.
    fn grab_band(&self) -> Rect {
        let pad = (self.style.handle_width - self.track.height) / 2.0;
        Rect {
            y: self.track.y - pad,
            height: self.track.height + 2.0 * pad,
            ..self.track
        }
    }

    fn handle_center(&self) -> Point {
        let span = self.max_value - self.min_value;
        let fraction = if span > 0.0 {
            (self.value - self.min_value) / span
        } else {
            0.0
        };
        Point::new(
            self.track.x + fraction * (self.track.width - self.style.handle_width),
            self.track.y + self.track.height / 2.0,
        )
    }

    pub fn handle_event(&mut self, event: PointerEvent) -> SliderOutcome {
        use PointerEvent::*;
        use SliderOutcome::*;

        match event {
            Pressed { x, y, .. } => {
                if self.grab_band().contains(x, y) {
                    self.dragging = true;
                    log::trace!("slider drag started at x={x}");
                }
                NoChange
            }
            Released { .. } => {
                self.dragging = false;
                NoChange
            }
            Moved { x, .. } if self.dragging => {
                let value = ((x - self.track.x) / self.track.width)
                    .clamp(self.min_value, self.max_value);
                if value == self.value {
                    NoChange
                } else {
                    self.value = value;
                    ValueChanged
                }
            }
            Moved { .. } => NoChange,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.track, self.style.track_color);
        surface.fill_circle(
            self.handle_center(),
            self.style.handle_width / 2.0,
            self.style.handle_color,
        );
    }
}
