use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::layout::{EdgeLabel, Layout};

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<NodeDump>,
    pub routes: Vec<RouteDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub name: String,
    pub stage: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    pub attribute: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RouteDump {
    pub edge: usize,
    pub from: String,
    pub to: String,
    pub points: Vec<[f32; 2]>,
    pub label: Option<LabelDump>,
    pub label_anchor: Option<[f32; 2]>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabelDump {
    Inline {
        lines: Vec<String>,
        width: f32,
        height: f32,
    },
    Badge {
        count: usize,
    },
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let nodes = layout
            .nodes
            .values()
            .map(|node| NodeDump {
                name: node.name.clone(),
                stage: node.stage,
                x: node.x,
                y: node.y,
                width: node.width,
                height: node.height,
                color: node.color.clone(),
                attribute: node.attribute.clone(),
            })
            .collect();

        let routes = layout
            .routes
            .iter()
            .map(|route| RouteDump {
                edge: route.edge,
                from: route.from.clone(),
                to: route.to.clone(),
                points: route.points.iter().map(|&(x, y)| [x, y]).collect(),
                label: route.label.as_ref().map(|label| match label {
                    EdgeLabel::Inline(block) => LabelDump::Inline {
                        lines: block.lines.clone(),
                        width: block.width,
                        height: block.height,
                    },
                    EdgeLabel::Badge(count) => LabelDump::Badge { count: *count },
                }),
                label_anchor: route.label_anchor.map(|(x, y)| [x, y]),
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            nodes,
            routes,
        }
    }
}

/// Pretty JSON snapshot of a layout, used for golden comparisons and by the
/// static doc-site generator.
pub fn dump_to_string(layout: &Layout) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&LayoutDump::from_layout(
        layout,
    ))?)
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &LayoutDump::from_layout(layout))?;
    Ok(())
}
