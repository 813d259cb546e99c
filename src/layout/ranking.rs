use std::collections::{BTreeMap, HashMap};

use crate::ir::{EvolutionEdge, Graph};

/// Stage buckets in ascending rank order. Bucket vectors start in pet
/// declaration order and are reordered in place by the barycenter sweep.
#[derive(Debug, Clone)]
pub(super) struct RankGroups {
    pub(super) ranks: Vec<(u32, Vec<String>)>,
    pub(super) max_rank_size: usize,
}

impl RankGroups {
    /// Bucket position for every node name.
    pub(super) fn bucket_index(&self) -> HashMap<&str, usize> {
        let mut index = HashMap::new();
        for (bucket, (_, names)) in self.ranks.iter().enumerate() {
            for name in names {
                index.insert(name.as_str(), bucket);
            }
        }
        index
    }
}

/// Partitions nodes into stage buckets. Stages with no pets are simply
/// absent; sparse stage numbers collapse to adjacent buckets.
pub(super) fn group_ranks(graph: &Graph) -> RankGroups {
    let mut ordered: Vec<_> = graph.nodes.values().collect();
    ordered.sort_by_key(|node| {
        graph
            .node_order
            .get(&node.name)
            .copied()
            .unwrap_or(usize::MAX)
    });

    let mut buckets: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for node in ordered {
        buckets.entry(node.stage).or_default().push(node.name.clone());
    }

    let ranks: Vec<(u32, Vec<String>)> = buckets.into_iter().collect();
    let max_rank_size = ranks.iter().map(|(_, names)| names.len()).max().unwrap_or(0);
    RankGroups {
        ranks,
        max_rank_size,
    }
}

/// Forward barycenter sweep. Each rank after the first is stable-sorted by
/// the mean index of its predecessors in the previous rank; a node with no
/// predecessor there keeps its current index. The sorted rank becomes the
/// reference order for the next transition, so changes propagate forward
/// only. One pass is the production behavior; more passes repeat the same
/// sweep for callers that opt in.
pub(super) fn order_rank_nodes(groups: &mut RankGroups, edges: &[EvolutionEdge], passes: usize) {
    if groups.ranks.len() <= 1 {
        return;
    }
    for _ in 0..passes.max(1) {
        for rank in 1..groups.ranks.len() {
            let (done, rest) = groups.ranks.split_at_mut(rank);
            let prev: HashMap<&str, usize> = done[rank - 1]
                .1
                .iter()
                .enumerate()
                .map(|(idx, name)| (name.as_str(), idx))
                .collect();

            let bucket = &mut rest[0].1;
            let mut optimal: HashMap<String, f32> = HashMap::with_capacity(bucket.len());
            for (idx, name) in bucket.iter().enumerate() {
                optimal.insert(name.clone(), optimal_position(name, idx, &prev, edges));
            }
            bucket.sort_by(|a, b| {
                let a_score = optimal.get(a).copied().unwrap_or(0.0);
                let b_score = optimal.get(b).copied().unwrap_or(0.0);
                a_score
                    .partial_cmp(&b_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }
}

/// Mean within-rank index of the node's predecessors in the previous rank.
/// Edges whose source sits outside that rank are ignored.
fn optimal_position(
    name: &str,
    current: usize,
    prev: &HashMap<&str, usize>,
    edges: &[EvolutionEdge],
) -> f32 {
    let mut sum = 0.0f32;
    let mut count = 0usize;
    for edge in edges {
        if edge.to == name
            && let Some(&idx) = prev.get(edge.from.as_str())
        {
            sum += idx as f32;
            count += 1;
        }
    }
    if count == 0 {
        current as f32
    } else {
        sum / count as f32
    }
}
