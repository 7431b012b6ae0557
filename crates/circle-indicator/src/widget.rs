//! Redraw signaling shared by anything a host repaints on demand.

/// A host renders a widget while it is dirty, then marks it clean.
pub trait Widget {
    fn is_dirty(&self) -> bool;
    fn mark_clean(&mut self);
    fn mark_dirty(&mut self);
}
