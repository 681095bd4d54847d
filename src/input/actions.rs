//! Editor action definitions
//!
//! Device-independent actions the host input layer reports each tick.
//! The suggested pad layout mirrors the classic edit controls:
//! - Y = raise terrain, A = lower, X = smooth
//! - B = cancel/dismiss, A = select in menus
//! - LB/RB = brush smaller/larger
//! - LT/RT = zoom out/in (the tool rack reuses them to cycle tools,
//!   which is why it locks the zoom while it is up)
//! - Back = mini-hub, Start = tool menu

/// All editor actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Terrain sculpting triggers
    RaiseTerrain,
    LowerTerrain,
    SmoothTerrain,

    // Material painting
    Paint,
    NextMaterial,
    OpenPicker,

    // Menus and pickers
    Select,
    Cancel,
    MenuUp,
    MenuDown,

    // Brush sizing
    BrushLarger,
    BrushSmaller,

    // Camera
    ZoomIn,
    ZoomOut,

    // Tool rack cycling
    NextTool,
    PrevTool,

    // Global mode switches
    ToolMenu,
    MiniHub,
}
