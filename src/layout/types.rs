use std::collections::BTreeMap;

/// Multi-line text box measured for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct NodeLayout {
    pub name: String,
    pub stage: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Contour color token from the palette.
    pub color: String,
    pub attribute: Option<String>,
}

impl NodeLayout {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Label payload attached to a routed edge.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeLabel {
    /// Criteria text drawn in a box at the trunk junction.
    Inline(TextBlock),
    /// Count of alternative paths converging on the target; the full text
    /// is disclosed on demand by the renderer.
    Badge(usize),
}

#[derive(Debug, Clone)]
pub struct RouteLayout {
    /// Index of the source edge in `Graph::edges`.
    pub edge: usize,
    pub from: String,
    pub to: String,
    pub points: Vec<(f32, f32)>,
    pub label: Option<EdgeLabel>,
    pub label_anchor: Option<(f32, f32)>,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub nodes: BTreeMap<String, NodeLayout>,
    pub routes: Vec<RouteLayout>,
    pub width: f32,
    pub height: f32,
}
