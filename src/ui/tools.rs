//! Direct-manipulation object tools
//!
//! Three tools cover object editing: select (pick an actor), move
//! (drag an actor across the terrain surface), delete. The owning mode
//! routes pointer phases to whichever is active through the [`ToolBox`].
//!
//! [`ToolBox`]: super::ToolBox

use crate::world::ActorId;

use super::tool::{Tool, ToolContext, ToolRegistry};

/// Picks the actor under the pointer
#[derive(Debug, Default)]
pub struct SelectTool {
    active: bool,
    selected: Option<ActorId>,
}

impl SelectTool {
    pub fn selected(&self) -> Option<ActorId> {
        self.selected
    }
}

impl Tool for SelectTool {
    fn id(&self) -> &'static str {
        "select"
    }
    fn label(&self) -> &'static str {
        "Select"
    }
    fn active(&self) -> bool {
        self.active
    }
    fn do_activate(&mut self) -> bool {
        self.active = true;
        true
    }
    fn do_deactivate(&mut self) -> bool {
        self.selected = None;
        self.active = false;
        true
    }

    fn pointer_pressed(&mut self, ctx: &mut ToolContext) {
        self.selected = ctx.hit.actor_hit;
    }
}

/// Drags an actor along the terrain surface
#[derive(Debug, Default)]
pub struct MoveTool {
    active: bool,
    dragging: Option<ActorId>,
}

impl MoveTool {
    pub fn dragging(&self) -> Option<ActorId> {
        self.dragging
    }
}

impl Tool for MoveTool {
    fn id(&self) -> &'static str {
        "move"
    }
    fn label(&self) -> &'static str {
        "Move"
    }
    fn active(&self) -> bool {
        self.active
    }
    fn do_activate(&mut self) -> bool {
        self.active = true;
        true
    }
    fn do_deactivate(&mut self) -> bool {
        self.dragging = None;
        self.active = false;
        true
    }

    fn pointer_pressed(&mut self, ctx: &mut ToolContext) {
        self.dragging = ctx.hit.actor_hit;
    }

    fn pointer_dragged(&mut self, ctx: &mut ToolContext) {
        let Some(id) = self.dragging else { return };
        let Some(ground) = ctx.hit.ground_position() else { return };
        if let Some(actor) = ctx.world.actor_mut(id) {
            let height = ctx.terrain.height_at(ground.x, ground.z);
            let rest = glam::Vec3::new(ground.x, height + actor.radius, ground.z);
            if actor.position != rest {
                actor.position = rest;
                ctx.dirty.mark_level();
            }
        }
    }

    fn pointer_released(&mut self, _ctx: &mut ToolContext) {
        self.dragging = None;
    }

    fn cancel(&mut self) -> bool {
        self.dragging.take().is_some()
    }
}

/// Removes the actor under the pointer
#[derive(Debug, Default)]
pub struct DeleteTool {
    active: bool,
}

impl Tool for DeleteTool {
    fn id(&self) -> &'static str {
        "delete"
    }
    fn label(&self) -> &'static str {
        "Delete"
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

    fn pointer_pressed(&mut self, ctx: &mut ToolContext) {
        if let Some(id) = ctx.hit.actor_hit {
            if ctx.world.remove(id).is_some() {
                ctx.dirty.mark_level();
            }
        }
    }
}

/// The fixed tool set each object-edit mode owns
#[derive(Debug, Default)]
pub struct ObjectToolSet {
    pub select: SelectTool,
    pub move_tool: MoveTool,
    pub delete: DeleteTool,
}

impl ObjectToolSet {
    pub const IDS: [&'static str; 3] = ["select", "move", "delete"];
}

impl ToolRegistry for ObjectToolSet {
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
        Self::IDS.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::HitInfo;
    use crate::terrain::TerrainField;
    use crate::world::{DirtyFlags, WorldSim};
    use glam::Vec3;

    fn setup() -> (WorldSim, TerrainField, HitInfo, DirtyFlags) {
        let mut world = WorldSim::new();
        world.spawn("rock", Vec3::new(4.0, 1.0, 4.0), 1.0);
        (
            world,
            TerrainField::new(16, 16, 1.0),
            HitInfo::new(),
            DirtyFlags::default(),
        )
    }

    #[test]
    fn test_delete_under_pointer_marks_dirty() {
        let (mut world, terrain, mut hit, mut dirty) = setup();
        let id = world.actors()[0].id;
        hit.actor_hit = Some(id);

        let mut tool = DeleteTool::default();
        tool.activate();
        let mut ctx = ToolContext {
            hit: &hit,
            world: &mut world,
            terrain: &terrain,
            dirty: &mut dirty,
        };
        tool.pointer_pressed(&mut ctx);
        assert!(world.actors().is_empty());
        assert!(dirty.level);
    }

    #[test]
    fn test_move_drags_actor_to_ground() {
        let (mut world, terrain, mut hit, mut dirty) = setup();
        let id = world.actors()[0].id;
        hit.actor_hit = Some(id);
        hit.terrain_hit = Some(Vec3::new(8.0, 0.0, 9.0));

        let mut tool = MoveTool::default();
        tool.activate();
        {
            let mut ctx = ToolContext {
                hit: &hit,
                world: &mut world,
                terrain: &terrain,
                dirty: &mut dirty,
            };
            tool.pointer_pressed(&mut ctx);
        }
        assert_eq!(tool.dragging(), Some(id));

        {
            let mut ctx = ToolContext {
                hit: &hit,
                world: &mut world,
                terrain: &terrain,
                dirty: &mut dirty,
            };
            tool.pointer_dragged(&mut ctx);
            tool.pointer_released(&mut ctx);
        }
        let actor = world.actor(id).unwrap();
        assert_eq!(actor.position.x, 8.0);
        assert_eq!(actor.position.z, 9.0);
        assert!(dirty.level);
        assert!(tool.dragging().is_none());
    }

    #[test]
    fn test_deactivate_clears_pending_drag() {
        let (mut world, terrain, mut hit, mut dirty) = setup();
        hit.actor_hit = Some(world.actors()[0].id);

        let mut tool = MoveTool::default();
        tool.activate();
        let mut ctx = ToolContext {
            hit: &hit,
            world: &mut world,
            terrain: &terrain,
            dirty: &mut dirty,
        };
        tool.pointer_pressed(&mut ctx);
        assert!(tool.dragging().is_some());

        tool.deactivate();
        assert!(tool.dragging().is_none());
    }
}
