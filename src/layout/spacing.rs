use crate::config::LayoutConfig;
use crate::ir::EvolutionEdge;

use super::ranking::RankGroups;

/// Width of every transition between consecutive present ranks. A transition
/// is compact when no edge crossing it carries criteria; an edge spanning
/// buckets lo..hi widens every transition in between.
pub(super) fn transition_widths(
    groups: &RankGroups,
    edges: &[EvolutionEdge],
    config: &LayoutConfig,
) -> Vec<f32> {
    let transitions = groups.ranks.len().saturating_sub(1);
    let bucket = groups.bucket_index();
    let mut carries_criteria = vec![false; transitions];

    for edge in edges {
        if edge.criteria.is_empty() {
            continue;
        }
        let (Some(&from), Some(&to)) = (
            bucket.get(edge.from.as_str()),
            bucket.get(edge.to.as_str()),
        ) else {
            continue;
        };
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        for slot in carries_criteria.iter_mut().take(hi).skip(lo) {
            *slot = true;
        }
    }

    carries_criteria
        .iter()
        .map(|labeled| {
            if *labeled {
                config.rank_spacing
            } else {
                config.rank_spacing_compact
            }
        })
        .collect()
}

/// Cumulative x offset per rank; rank 0 starts at the left margin.
pub(super) fn rank_offsets(widths: &[f32], config: &LayoutConfig) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(widths.len() + 1);
    let mut x = config.margin_x;
    offsets.push(x);
    for width in widths {
        x += width;
        offsets.push(x);
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Criteria, Graph, PetNode, ValueRange};
    use crate::layout::ranking::group_ranks;

    fn graph_with(criteria: Criteria) -> Graph {
        let mut graph = Graph::new();
        for (name, stage) in [("A", 0), ("B", 1), ("C", 2)] {
            graph.insert_node(PetNode {
                name: name.to_string(),
                stage,
                attribute: None,
            });
        }
        graph.push_edge("A", "B", criteria);
        graph.push_edge("B", "C", Criteria::default());
        graph
    }

    #[test]
    fn criteria_free_transitions_are_compact() {
        let config = LayoutConfig::default();
        let graph = graph_with(Criteria::default());
        let groups = group_ranks(&graph);
        let widths = transition_widths(&groups, &graph.edges, &config);
        assert_eq!(
            widths,
            vec![config.rank_spacing_compact, config.rank_spacing_compact]
        );
    }

    #[test]
    fn one_criteria_edge_widens_its_transition_only() {
        let config = LayoutConfig::default();
        let graph = graph_with(Criteria {
            training: Some(ValueRange::between(10, 20)),
            ..Criteria::default()
        });
        let groups = group_ranks(&graph);
        let widths = transition_widths(&groups, &graph.edges, &config);
        assert_eq!(
            widths,
            vec![config.rank_spacing, config.rank_spacing_compact]
        );
    }

    #[test]
    fn rank_skipping_edge_widens_every_spanned_transition() {
        let config = LayoutConfig::default();
        let mut graph = graph_with(Criteria::default());
        graph.push_edge(
            "A",
            "C",
            Criteria {
                item: Some("Moon Mirror".to_string()),
                ..Criteria::default()
            },
        );
        let groups = group_ranks(&graph);
        let widths = transition_widths(&groups, &graph.edges, &config);
        assert_eq!(widths, vec![config.rank_spacing, config.rank_spacing]);
    }

    #[test]
    fn offsets_accumulate_from_margin() {
        let config = LayoutConfig::default();
        let offsets = rank_offsets(&[132.0, 196.0], &config);
        assert_eq!(
            offsets,
            vec![
                config.margin_x,
                config.margin_x + 132.0,
                config.margin_x + 132.0 + 196.0
            ]
        );
    }
}
