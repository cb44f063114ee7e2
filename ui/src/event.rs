/// Pointer button identity as delivered by the embedding frontend.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Frontend-agnostic pointer event fed to the widgets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Moved { x: f32, y: f32 },
    Pressed { button: PointerButton, x: f32, y: f32 },
    Released { button: PointerButton, x: f32, y: f32 },
}
