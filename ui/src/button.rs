use core::ops::BitOr;

use crate::*;

pub const HOVER_SCALE: f32 = 1.05;
pub const PRESS_SCALE: f32 = 0.95;
/// Per-channel fill shift while hovered (added) or pressed (subtracted).
pub const FILL_SHIFT: u8 = 30;

/// Visual state derived from the pointer flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Hovered,
    Pressed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ButtonOutcome {
    NoChange,
    Redraw,
    Clicked,
}

impl ButtonOutcome {
    pub const fn has_update(self) -> bool {
        use ButtonOutcome::*;
        match self {
            NoChange => false,
            Redraw => true,
            Clicked => true,
        }
    }
}

impl BitOr for ButtonOutcome {
    type Output = ButtonOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use ButtonOutcome::*;
        match (self, rhs) {
            (Clicked, _) => Clicked,
            (_, Clicked) => Clicked,
            (Redraw, _) => Redraw,
            (_, Redraw) => Redraw,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// Push button with hover and press feedback.
#[derive(Clone, Debug)]
pub struct Button {
    label: String,
    frame: Rect,
    style: ButtonStyle,
    hovered: bool,
    pressed: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, position: Point, style: ButtonStyle) -> Self {
        let (width, height) = style.size;
        Self {
            label: label.into(),
            frame: Rect::new(position.x, position.y, width, height),
            style,
            hovered: false,
            pressed: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> ButtonState {
        if self.pressed {
            ButtonState::Pressed
        } else if self.hovered {
            ButtonState::Hovered
        } else {
            ButtonState::Idle
        }
    }

    /// Base geometry; hover tests always run against this, not the scaled frame.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Geometry as drawn for the current state.
    pub fn visual_frame(&self) -> Rect {
        match self.state() {
            ButtonState::Idle => self.frame,
            ButtonState::Hovered => self.frame.scaled(HOVER_SCALE),
            ButtonState::Pressed => self.frame.scaled(PRESS_SCALE),
        }
    }

    /// Fill color as drawn for the current state.
    pub fn fill_color(&self) -> Color {
        match self.state() {
            ButtonState::Idle => self.style.fill,
            ButtonState::Hovered => self.style.fill.lighter(FILL_SHIFT),
            ButtonState::Pressed => self.style.fill.darker(FILL_SHIFT),
        }
    }

    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        audio: &mut dyn AudioSink,
    ) -> ButtonOutcome {
        use ButtonOutcome::*;
        use PointerEvent::*;

        match event {
            Moved { x, y } => {
                let hovered = self.frame.contains(x, y);
                if hovered == self.hovered {
                    NoChange
                } else {
                    self.hovered = hovered;
                    Redraw
                }
            }
            Pressed {
                button: PointerButton::Primary,
                ..
            } if self.hovered => {
                self.pressed = true;
                match &self.style.sound {
                    Some(cue) => audio.play(cue),
                    None => audio.play(&SoundCue::default()),
                }
                log::debug!("button {:?} clicked", self.label);
                Clicked
            }
            Pressed { .. } => NoChange,
            Released { .. } => {
                if self.pressed {
                    self.pressed = false;
                    Redraw
                } else {
                    NoChange
                }
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let frame = self.visual_frame();
        let (dx, dy) = self.style.shadow_offset;
        surface.fill_rect(frame.offset(dx, dy), self.style.shadow_color);
        surface.fill_rect(frame.inflated(self.style.border_width), self.style.border_color);
        surface.fill_rect(frame, self.fill_color());
        surface.draw_text(frame.center(), &self.label, self.style.text_color);
    }
}
