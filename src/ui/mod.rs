//! Sub-editors and object tools
//!
//! Everything here follows the same contract the modes rely on: an
//! `active` flag, idempotent `activate`/`deactivate`, and an `update`
//! that does nothing while inactive. A sub-editor flipping its own
//! `active` to false is how a mode learns it should exit.

mod level_browser;
mod menu;
mod palette;
mod params_panel;
mod picker;
mod tool;
mod tool_bar;
mod tool_box;
mod tools;

pub use level_browser::NextLevelBrowser;
pub use menu::{MenuEntry, ToolMenuUi};
pub use palette::{SculptTool, ToolPalette};
pub use params_panel::{ExitFlags, WorldParamsPanel};
pub use picker::TexturePickerUi;
pub use tool::{Tool, ToolContext, ToolRegistry};
pub use tool_bar::{ToolBar, ToolBarEntry};
pub use tool_box::ToolBox;
pub use tools::{DeleteTool, MoveTool, ObjectToolSet, SelectTool};
