//! ToolBox - object-tool lifecycle manager
//!
//! Tracks which tools are active (LIFO order) and enforces exclusive
//! groups: activating one member of a group deactivates the others, so
//! the object-edit modes always have at most one manipulation tool live.

use super::tool::ToolRegistry;

/// Manages tool activation and exclusive groups
#[derive(Debug, Clone, Default)]
pub struct ToolBox {
    /// Active tools, most recently activated last
    modal_tool_stack: Vec<&'static str>,
    /// Groups where only one tool can be active at a time
    exclusive_groups: Vec<Vec<&'static str>>,
    /// Disabled while a drag is in flight so mid-drag tool switches
    /// cannot orphan the drag state
    enabled: bool,
}

impl ToolBox {
    pub fn new() -> Self {
        Self {
            modal_tool_stack: Vec::new(),
            exclusive_groups: Vec::new(),
            enabled: true,
        }
    }

    /// Add a group of mutually exclusive tool ids
    pub fn add_exclusive_group(&mut self, tool_ids: &[&'static str]) {
        if tool_ids.len() > 1 {
            self.exclusive_groups.push(tool_ids.to_vec());
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Most recently activated tool
    pub fn active_tool(&self) -> Option<&'static str> {
        self.modal_tool_stack.last().copied()
    }

    pub fn is_tool_active(&self, tool_id: &str) -> bool {
        self.modal_tool_stack.iter().any(|id| *id == tool_id)
    }

    /// Activate a tool, deactivating everything it is exclusive with
    pub fn activate_tool(&mut self, tool_id: &'static str, registry: &mut dyn ToolRegistry) {
        if !self.enabled {
            return;
        }
        match registry.get_tool(tool_id) {
            Some(t) if !t.active() => {}
            _ => return,
        }

        for excluded_id in self.excluded_tools(tool_id) {
            if registry.get_tool(excluded_id).is_some_and(|t| t.active()) {
                self.deactivate_tool(excluded_id, registry);
            }
        }

        if let Some(tool) = registry.get_tool_mut(tool_id) {
            if tool.activate() {
                log::debug!("tool activated: {tool_id}");
                self.modal_tool_stack.push(tool_id);
            }
        }
    }

    /// Deactivate a tool and drop it from the modal stack
    pub fn deactivate_tool(&mut self, tool_id: &str, registry: &mut dyn ToolRegistry) {
        if let Some(tool) = registry.get_tool_mut(tool_id) {
            if tool.active() {
                tool.deactivate();
                log::debug!("tool deactivated: {tool_id}");
            }
        }
        self.modal_tool_stack.retain(|id| *id != tool_id);
    }

    /// Deactivate everything, e.g. when the owning mode exits
    pub fn deactivate_all(&mut self, registry: &mut dyn ToolRegistry) {
        let tool_ids: Vec<_> = self.modal_tool_stack.clone();
        for tool_id in tool_ids {
            self.deactivate_tool(tool_id, registry);
        }
    }

    /// Tools that must go inactive when `tool_id` activates
    fn excluded_tools(&self, tool_id: &str) -> Vec<&'static str> {
        let mut result = Vec::new();
        for group in &self.exclusive_groups {
            if group.iter().any(|id| *id == tool_id) {
                result.extend(group.iter().copied().filter(|id| *id != tool_id));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::tool::Tool;

    struct TestTool {
        id: &'static str,
        active: bool,
    }

    impl TestTool {
        fn new(id: &'static str) -> Self {
            Self { id, active: false }
        }
    }

    impl Tool for TestTool {
        fn id(&self) -> &'static str {
            self.id
        }
        fn label(&self) -> &'static str {
            self.id
        }
        fn active(&self) -> bool {
            self.active
        }
        fn do_activate(&mut self) -> bool {
            self.active = true;
            true
        }
        fn do_deactivate(&mut self) -> bool {
            self.active = false;
            true
        }
    }

    struct TestRegistry {
        select: TestTool,
        move_tool: TestTool,
        delete: TestTool,
    }

    impl TestRegistry {
        fn new() -> Self {
            Self {
                select: TestTool::new("select"),
                move_tool: TestTool::new("move"),
                delete: TestTool::new("delete"),
            }
        }
    }

    impl ToolRegistry for TestRegistry {
        fn get_tool_mut(&mut self, id: &str) -> Option<&mut dyn Tool> {
            match id {
                "select" => Some(&mut self.select),
                "move" => Some(&mut self.move_tool),
                "delete" => Some(&mut self.delete),
                _ => None,
            }
        }

        fn get_tool(&self, id: &str) -> Option<&dyn Tool> {
            match id {
                "select" => Some(&self.select),
                "move" => Some(&self.move_tool),
                "delete" => Some(&self.delete),
                _ => None,
            }
        }

        fn tool_ids(&self) -> Vec<&'static str> {
            vec!["select", "move", "delete"]
        }
    }

    #[test]
    fn test_exclusive_group() {
        let mut tool_box = ToolBox::new();
        let mut registry = TestRegistry::new();
        tool_box.add_exclusive_group(&["select", "move", "delete"]);

        tool_box.activate_tool("select", &mut registry);
        assert!(registry.select.active());

        tool_box.activate_tool("move", &mut registry);
        assert!(!registry.select.active());
        assert!(registry.move_tool.active());
        assert_eq!(tool_box.active_tool(), Some("move"));
    }

    #[test]
    fn test_disabled_blocks_activation() {
        let mut tool_box = ToolBox::new();
        let mut registry = TestRegistry::new();
        tool_box.disable();
        tool_box.activate_tool("select", &mut registry);
        assert!(!registry.select.active());

        tool_box.enable();
        tool_box.activate_tool("select", &mut registry);
        assert!(registry.select.active());
    }

    #[test]
    fn test_deactivate_all() {
        let mut tool_box = ToolBox::new();
        let mut registry = TestRegistry::new();
        tool_box.activate_tool("select", &mut registry);
        tool_box.activate_tool("delete", &mut registry);

        tool_box.deactivate_all(&mut registry);
        assert!(!registry.select.active());
        assert!(!registry.delete.active());
        assert_eq!(tool_box.active_tool(), None);
    }
}
