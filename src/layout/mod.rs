mod label_placement;
mod position;
mod ranking;
mod routing;
mod spacing;
mod text;
pub(crate) mod types;

pub use types::*;

use tracing::{debug, trace};

use crate::config::LayoutConfig;
use crate::ir::Graph;
use crate::palette::Palette;

/// Computes the evolution-tree layout for one roster graph: rank grouping,
/// barycenter ordering, transition spacing, node placement, edge routing and
/// label placement. Pure function of its inputs; two passes over identical
/// input produce identical output.
pub fn compute_layout(graph: &Graph, palette: &Palette, config: &LayoutConfig) -> Layout {
    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "computing evolution layout"
    );

    let mut groups = ranking::group_ranks(graph);
    trace!(
        ranks = groups.ranks.len(),
        max_rank_size = groups.max_rank_size,
        "ranks grouped"
    );
    ranking::order_rank_nodes(&mut groups, &graph.edges, config.order_passes);

    let widths = spacing::transition_widths(&groups, &graph.edges, config);
    let offsets = spacing::rank_offsets(&widths, config);

    let nodes = position::place_nodes(graph, &groups, &offsets, palette, config);
    let (width, height) = position::canvas_size(&nodes, config);

    let plans = routing::route_edges(graph, &groups, &nodes, config);
    trace!(routes = plans.len(), "edges routed");
    let routes = label_placement::attach_labels(graph, plans, &nodes, config);

    Layout {
        nodes,
        routes,
        width,
        height,
    }
}
