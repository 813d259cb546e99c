use std::collections::{BTreeMap, HashMap};

use crate::config::LayoutConfig;
use crate::ir::Graph;

use super::ranking::RankGroups;
use super::NodeLayout;

/// Routed edge before label attachment.
#[derive(Debug, Clone)]
pub(super) struct RoutePlan {
    pub(super) edge: usize,
    pub(super) from: String,
    pub(super) to: String,
    pub(super) points: Vec<(f32, f32)>,
    /// Trunk / target-stub junction, the inline label anchor.
    pub(super) junction: (f32, f32),
}

/// Routes every resolvable edge as source stub → vertical trunk → target
/// stub. Sources within a rank take distinct trunk offsets; edges converging
/// on one target land on symmetric slots around its center. The trunk is
/// skipped for a single-target bundle whose vertical delta is within epsilon.
pub(super) fn route_edges(
    graph: &Graph,
    groups: &RankGroups,
    nodes: &BTreeMap<String, NodeLayout>,
    config: &LayoutConfig,
) -> Vec<RoutePlan> {
    // Landing slots per target, first-discovered order over the edge list.
    let mut incoming: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, edge) in graph.edges.iter().enumerate() {
        incoming.entry(edge.to.as_str()).or_default().push(idx);
    }

    // Distinct targets per source; a bundle with several targets always
    // keeps its trunk segment.
    let mut bundles: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in &graph.edges {
        let bundle = bundles.entry(edge.from.as_str()).or_default();
        if !bundle.contains(&edge.to.as_str()) {
            bundle.push(edge.to.as_str());
        }
    }

    // Trunk x per edge-bearing source, assigned in bucket order and reset
    // at every rank so parallel trunks never coincide.
    let mut trunk_x: HashMap<&str, f32> = HashMap::new();
    for (_, names) in &groups.ranks {
        let mut slot = 0usize;
        for name in names {
            if !bundles.contains_key(name.as_str()) {
                continue;
            }
            let Some(node) = nodes.get(name) else {
                continue;
            };
            trunk_x.insert(
                name.as_str(),
                node.right() + config.trunk_stub + slot as f32 * config.trunk_step,
            );
            slot += 1;
        }
    }

    let mut plans = Vec::with_capacity(graph.edges.len());
    for (idx, edge) in graph.edges.iter().enumerate() {
        let (Some(source), Some(target)) = (nodes.get(&edge.from), nodes.get(&edge.to)) else {
            continue;
        };
        let Some(&trunk) = trunk_x.get(edge.from.as_str()) else {
            continue;
        };

        let start_y = source.center_y();
        let slots = &incoming[edge.to.as_str()];
        let slot = slots.iter().position(|&e| e == idx).unwrap_or(0);
        let landing = target.center_y()
            + (slot as f32 - (slots.len() as f32 - 1.0) / 2.0) * config.fan_spacing;

        let fan_out = bundles
            .get(edge.from.as_str())
            .map(|bundle| bundle.len())
            .unwrap_or(0);

        let mut points = vec![(source.right(), start_y), (trunk, start_y)];
        let junction;
        if fan_out > 1 || (landing - start_y).abs() > config.trunk_epsilon {
            points.push((trunk, landing));
            points.push((target.x, landing));
            junction = (trunk, landing);
        } else {
            points.push((target.x, start_y));
            junction = (trunk, start_y);
        }

        plans.push(RoutePlan {
            edge: idx,
            from: edge.from.clone(),
            to: edge.to.clone(),
            points,
            junction,
        });
    }
    plans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Criteria, EvolutionEdge, PetNode};
    use crate::layout::position::place_nodes;
    use crate::layout::ranking::group_ranks;
    use crate::layout::spacing::{rank_offsets, transition_widths};
    use crate::palette::Palette;

    fn routed(
        pets: &[(&str, u32)],
        edges: &[(&str, &str)],
    ) -> (Graph, BTreeMap<String, NodeLayout>, Vec<RoutePlan>) {
        let mut graph = Graph::new();
        for (name, stage) in pets {
            graph.insert_node(PetNode {
                name: name.to_string(),
                stage: *stage,
                attribute: None,
            });
        }
        for (from, to) in edges {
            assert!(graph.push_edge(from, to, Criteria::default()));
        }
        let config = LayoutConfig::default();
        let groups = group_ranks(&graph);
        let widths = transition_widths(&groups, &graph.edges, &config);
        let offsets = rank_offsets(&widths, &config);
        let nodes = place_nodes(&graph, &groups, &offsets, &Palette::classic(), &config);
        let plans = route_edges(&graph, &groups, &nodes, &config);
        (graph, nodes, plans)
    }

    #[test]
    fn straight_single_edge_skips_the_trunk() {
        let (_, nodes, plans) = routed(&[("A", 0), ("B", 1)], &[("A", "B")]);
        assert_eq!(plans.len(), 1);
        let points = &plans[0].points;
        assert_eq!(points.len(), 3);
        let y = nodes["A"].center_y();
        assert!(points.iter().all(|&(_, py)| py == y));
        assert_eq!(points[2].0, nodes["B"].x);
    }

    #[test]
    fn fan_out_keeps_the_trunk_segment() {
        let (_, nodes, plans) = routed(
            &[("A", 0), ("B", 1), ("C", 1)],
            &[("A", "B"), ("A", "C")],
        );
        for plan in &plans {
            assert_eq!(plan.points.len(), 4);
            // Vertical trunk: the two middle points share an x.
            assert_eq!(plan.points[1].0, plan.points[2].0);
        }
        let landing_b = plans[0].points[3].1;
        let landing_c = plans[1].points[3].1;
        assert_eq!(landing_b, nodes["B"].center_y());
        assert_eq!(landing_c, nodes["C"].center_y());
    }

    #[test]
    fn converging_edges_land_symmetrically() {
        let config = LayoutConfig::default();
        let (_, nodes, plans) = routed(
            &[("A", 1), ("B", 1), ("C", 2)],
            &[("A", "C"), ("B", "C")],
        );
        let center = nodes["C"].center_y();
        let first = plans[0].points.last().unwrap().1;
        let second = plans[1].points.last().unwrap().1;
        assert_eq!(first, center - config.fan_spacing / 2.0);
        assert_eq!(second, center + config.fan_spacing / 2.0);
    }

    #[test]
    fn sources_in_one_rank_take_distinct_trunks() {
        let config = LayoutConfig::default();
        let (_, _, plans) = routed(
            &[("A", 1), ("B", 1), ("C", 2), ("D", 2)],
            &[("A", "C"), ("B", "D")],
        );
        let trunk_a = plans[0].points[1].0;
        let trunk_b = plans[1].points[1].0;
        assert_eq!((trunk_b - trunk_a).abs(), config.trunk_step);
    }

    #[test]
    fn same_rank_edge_is_routed_with_a_trunk() {
        let (_, nodes, plans) = routed(&[("A", 1), ("B", 1)], &[("A", "B")]);
        assert_eq!(plans.len(), 1);
        let points = &plans[0].points;
        assert_eq!(points.len(), 4);
        assert_eq!(points.last().unwrap().1, nodes["B"].center_y());
    }

    #[test]
    fn unresolvable_edge_produces_no_plan() {
        let (mut graph, nodes, _) = routed(&[("A", 0), ("B", 1)], &[("A", "B")]);
        graph.edges.push(EvolutionEdge {
            from: "A".to_string(),
            to: "Nosuchmon".to_string(),
            criteria: Criteria::default(),
        });
        let config = LayoutConfig::default();
        let groups = group_ranks(&graph);
        let plans = route_edges(&graph, &groups, &nodes, &config);
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].to, "B");
    }
}
