//! Tool bar strip for the object-edit modes
//!
//! A horizontal row of buttons, one per tool. The core tracks hover and
//! click hit testing; drawing belongs to the presentation layer. The
//! owning mode cascades `load_content`/`unload_content` through its own
//! activation lifecycle.

use glam::Vec2;

/// Button size in pixels
const ENTRY_SIZE: f32 = 48.0;

/// One button on the bar
#[derive(Debug, Clone, Copy)]
pub struct ToolBarEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// Horizontal strip of tool buttons along the top edge
#[derive(Debug)]
pub struct ToolBar {
    entries: Vec<ToolBarEntry>,
    hovered: Option<usize>,
    content_loaded: bool,
}

impl ToolBar {
    pub fn new(entries: Vec<ToolBarEntry>) -> Self {
        Self {
            entries,
            hovered: None,
            content_loaded: false,
        }
    }

    pub fn entries(&self) -> &[ToolBarEntry] {
        &self.entries
    }

    /// Whether the pointer is over the bar; clicks here must not reach
    /// the world underneath
    pub fn hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn content_loaded(&self) -> bool {
        self.content_loaded
    }

    pub fn load_content(&mut self) {
        self.content_loaded = true;
    }

    pub fn unload_content(&mut self) {
        self.hovered = None;
        self.content_loaded = false;
    }

    /// Update hover state and report a clicked entry id, if any
    pub fn update(&mut self, pointer: Option<Vec2>, primary_pressed: bool) -> Option<&'static str> {
        self.hovered = pointer.and_then(|p| self.entry_at(p));
        if primary_pressed {
            self.hovered.map(|i| self.entries[i].id)
        } else {
            None
        }
    }

    fn entry_at(&self, pointer: Vec2) -> Option<usize> {
        if pointer.y < 0.0 || pointer.y >= ENTRY_SIZE || pointer.x < 0.0 {
            return None;
        }
        let index = (pointer.x / ENTRY_SIZE) as usize;
        (index < self.entries.len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> ToolBar {
        ToolBar::new(vec![
            ToolBarEntry { id: "select", label: "Select" },
            ToolBarEntry { id: "move", label: "Move" },
            ToolBarEntry { id: "delete", label: "Delete" },
        ])
    }

    #[test]
    fn test_click_hits_entry() {
        let mut bar = bar();
        let clicked = bar.update(Some(Vec2::new(60.0, 10.0)), true);
        assert_eq!(clicked, Some("move"));
        assert!(bar.hovering());
    }

    #[test]
    fn test_pointer_below_bar_misses() {
        let mut bar = bar();
        let clicked = bar.update(Some(Vec2::new(60.0, 100.0)), true);
        assert_eq!(clicked, None);
        assert!(!bar.hovering());
    }

    #[test]
    fn test_content_lifecycle() {
        let mut bar = bar();
        assert!(!bar.content_loaded());
        bar.load_content();
        assert!(bar.content_loaded());
        bar.update(Some(Vec2::new(10.0, 10.0)), false);
        bar.unload_content();
        assert!(!bar.content_loaded());
        assert!(!bar.hovering());
    }
}
