use crate::Event;
use eframe::egui::{InputState, Key};

/// Translates this frame's input into simulation events.
pub fn poll_events(input: &InputState) -> Vec<Event> {
    let mut events = Vec::new();
    if input.key_pressed(Key::Escape) || input.viewport().close_requested() {
        events.push(Event::Quit);
    }
    if input.key_pressed(Key::P) {
        events.push(Event::TogglePause);
    }
    if input.key_pressed(Key::Space) {
        events.push(Event::Step);
    }
    if input.key_pressed(Key::R) {
        events.push(Event::Reseed);
    }
    events
}
