use std::collections::BTreeMap;

use crate::config::LayoutConfig;
use crate::ir::Graph;
use crate::palette::Palette;

use super::ranking::RankGroups;
use super::NodeLayout;

/// Final node coordinates: x from the rank's cumulative offset, y from the
/// within-rank index, each rank vertically centered against the tallest one.
pub(super) fn place_nodes(
    graph: &Graph,
    groups: &RankGroups,
    offsets: &[f32],
    palette: &Palette,
    config: &LayoutConfig,
) -> BTreeMap<String, NodeLayout> {
    let mut nodes = BTreeMap::new();
    for (bucket, (_, names)) in groups.ranks.iter().enumerate() {
        let centering =
            (groups.max_rank_size - names.len()) as f32 * config.row_pitch / 2.0;
        for (slot, name) in names.iter().enumerate() {
            let Some(pet) = graph.nodes.get(name) else {
                continue;
            };
            nodes.insert(
                name.clone(),
                NodeLayout {
                    name: name.clone(),
                    stage: pet.stage,
                    x: offsets[bucket],
                    y: config.margin_y + centering + slot as f32 * config.row_pitch,
                    width: config.node_width,
                    height: config.node_height,
                    color: palette.line_color_for(name).to_string(),
                    attribute: pet.attribute.clone(),
                },
            );
        }
    }
    nodes
}

/// Canvas bounds: bounding box of all placed nodes plus the margin.
pub(super) fn canvas_size(
    nodes: &BTreeMap<String, NodeLayout>,
    config: &LayoutConfig,
) -> (f32, f32) {
    if nodes.is_empty() {
        return (config.margin_x * 2.0, config.margin_y * 2.0);
    }
    let mut max_x = 0.0f32;
    let mut max_y = 0.0f32;
    for node in nodes.values() {
        max_x = max_x.max(node.x + node.width);
        max_y = max_y.max(node.y + node.height);
    }
    (max_x + config.margin_x, max_y + config.margin_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::PetNode;
    use crate::layout::ranking::group_ranks;
    use crate::layout::spacing::{rank_offsets, transition_widths};

    fn layout_for(pets: &[(&str, u32)]) -> BTreeMap<String, NodeLayout> {
        let mut graph = Graph::new();
        for (name, stage) in pets {
            graph.insert_node(PetNode {
                name: name.to_string(),
                stage: *stage,
                attribute: None,
            });
        }
        let config = LayoutConfig::default();
        let groups = group_ranks(&graph);
        let widths = transition_widths(&groups, &graph.edges, &config);
        let offsets = rank_offsets(&widths, &config);
        place_nodes(&graph, &groups, &offsets, &Palette::classic(), &config)
    }

    #[test]
    fn ranks_share_a_vertical_midpoint() {
        let nodes = layout_for(&[
            ("A", 0),
            ("B", 1),
            ("C", 1),
            ("D", 1),
            ("E", 2),
        ]);
        let config = LayoutConfig::default();
        let mid = |stage: u32| {
            let ys: Vec<f32> = nodes
                .values()
                .filter(|node| node.stage == stage)
                .map(|node| node.y)
                .collect();
            let min = ys.iter().copied().fold(f32::MAX, f32::min);
            let max = ys.iter().copied().fold(f32::MIN, f32::max);
            min + max + config.node_height
        };
        assert_eq!(mid(0), mid(1));
        assert_eq!(mid(1), mid(2));
    }

    #[test]
    fn rows_step_by_pitch() {
        let nodes = layout_for(&[("A", 0), ("B", 0), ("C", 0)]);
        let config = LayoutConfig::default();
        assert_eq!(nodes["A"].y, config.margin_y);
        assert_eq!(nodes["B"].y, config.margin_y + config.row_pitch);
        assert_eq!(nodes["C"].y, config.margin_y + 2.0 * config.row_pitch);
    }

    #[test]
    fn single_node_canvas_is_node_plus_margins() {
        let nodes = layout_for(&[("A", 0)]);
        let config = LayoutConfig::default();
        let (width, height) = canvas_size(&nodes, &config);
        assert_eq!(width, config.margin_x * 2.0 + config.node_width);
        assert_eq!(height, config.margin_y * 2.0 + config.node_height);
    }

    #[test]
    fn empty_graph_yields_margin_only_canvas() {
        let nodes = BTreeMap::new();
        let config = LayoutConfig::default();
        let (width, height) = canvas_size(&nodes, &config);
        assert_eq!(width, config.margin_x * 2.0);
        assert_eq!(height, config.margin_y * 2.0);
    }
}
