use ratatui::Frame;
use ratatui::layout::Rect;

/// A drawable piece of the UI.
///
/// Components take their data as struct fields ("props") and paint into a
/// `Frame` within the area they are given. `render` takes `&mut self` so
/// stateful components (transcript, input box) can update layout caches and
/// clamp scroll offsets during the render pass, matching ratatui's
/// `StatefulWidget` shape.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// High-level event the component reports back to the event loop.
    type Event;

    /// Translate a low-level [`TuiEvent`](super::event::TuiEvent) into this
    /// component's event, or swallow it.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
