// Label policy for routed evolution edges: one inline criteria box per lone
// labeled edge, one count badge per crowded target. Works with pure
// geometry; disclosure of badged criteria text is the renderer's concern.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::{LabelConfig, LayoutConfig};
use crate::ir::{Criteria, Graph};

use super::routing::RoutePlan;
use super::text;
use super::{EdgeLabel, NodeLayout, RouteLayout, TextBlock};

/// Attaches label geometry to routed edges. A target with more than one
/// criteria-bearing edge gets a single badge on its first-discovered labeled
/// edge; a lone criteria-bearing edge gets an inline box at its trunk
/// junction; empty criteria get nothing.
pub(super) fn attach_labels(
    graph: &Graph,
    plans: Vec<RoutePlan>,
    nodes: &BTreeMap<String, NodeLayout>,
    config: &LayoutConfig,
) -> Vec<RouteLayout> {
    let mut labeled_fan_in: HashMap<&str, usize> = HashMap::new();
    for plan in &plans {
        let edge = &graph.edges[plan.edge];
        if !edge.criteria.is_empty() {
            *labeled_fan_in.entry(edge.to.as_str()).or_insert(0) += 1;
        }
    }

    let mut badged: HashSet<String> = HashSet::new();
    let mut routes = Vec::with_capacity(plans.len());
    for plan in plans {
        let criteria = &graph.edges[plan.edge].criteria;
        let (label, label_anchor) = if criteria.is_empty() {
            (None, None)
        } else {
            let fan_in = labeled_fan_in
                .get(plan.to.as_str())
                .copied()
                .unwrap_or(0);
            if fan_in > 1 {
                if badged.insert(plan.to.clone()) {
                    let anchor = nodes.get(&plan.to).map(|target| {
                        (
                            target.x - config.label.badge_gap - config.label.badge_radius,
                            target.center_y(),
                        )
                    });
                    (Some(EdgeLabel::Badge(fan_in)), anchor)
                } else {
                    (None, None)
                }
            } else {
                (
                    Some(EdgeLabel::Inline(inline_block(criteria, &config.label))),
                    Some(plan.junction),
                )
            }
        };
        routes.push(RouteLayout {
            edge: plan.edge,
            from: plan.from,
            to: plan.to,
            points: plan.points,
            label,
            label_anchor,
        });
    }
    routes
}

/// Folds criteria entries into display lines: up to `conditions_per_line`
/// per line, at most `max_lines` lines, overflow marked with an ellipsis.
fn inline_block(criteria: &Criteria, label: &LabelConfig) -> TextBlock {
    let entries = criteria.entries();
    let per_line = label.conditions_per_line.max(1);
    let max_lines = label.max_lines.max(1);
    let mut lines: Vec<String> = entries
        .chunks(per_line)
        .map(|chunk| {
            chunk
                .iter()
                .map(|(key, value)| format!("{key}: {value}"))
                .collect::<Vec<_>>()
                .join(&label.separator)
        })
        .collect();
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    text::measure_box(lines, label)
}
