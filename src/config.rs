use std::path::Path;

use serde::{Deserialize, Serialize};

/// Spacing, sizing and label constants for one layout pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub node_width: f32,
    pub node_height: f32,
    /// Vertical distance between row slots within a rank.
    pub row_pitch: f32,
    /// Column step for a transition carrying at least one criteria edge.
    pub rank_spacing: f32,
    /// Column step for a transition whose crossing edges are all criteria-free.
    pub rank_spacing_compact: f32,
    pub margin_x: f32,
    pub margin_y: f32,
    /// Base length of the horizontal stub leaving a source node.
    pub trunk_stub: f32,
    /// Extra trunk offset per edge-bearing source within a rank.
    pub trunk_step: f32,
    /// Vertical delta below which a single-target route skips its trunk.
    pub trunk_epsilon: f32,
    /// Landing spread between edges converging on one target.
    pub fan_spacing: f32,
    /// Forward barycenter sweeps. 1 reproduces the single-pass ordering.
    pub order_passes: usize,
    pub label: LabelConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 88.0,
            node_height: 88.0,
            row_pitch: 112.0,
            rank_spacing: 196.0,
            rank_spacing_compact: 132.0,
            margin_x: 24.0,
            margin_y: 24.0,
            trunk_stub: 14.0,
            trunk_step: 9.0,
            trunk_epsilon: 0.5,
            fan_spacing: 14.0,
            order_passes: 1,
            label: LabelConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    pub font_size: f32,
    pub line_height: f32,
    pub max_lines: usize,
    pub conditions_per_line: usize,
    pub separator: String,
    pub min_width: f32,
    pub max_width: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub badge_radius: f32,
    pub badge_gap: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_size: 11.0,
            line_height: 1.35,
            max_lines: 3,
            conditions_per_line: 2,
            separator: " / ".to_string(),
            min_width: 56.0,
            max_width: 168.0,
            padding_x: 6.0,
            padding_y: 4.0,
            badge_radius: 9.0,
            badge_gap: 6.0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigFile {
    node_width: Option<f32>,
    node_height: Option<f32>,
    row_pitch: Option<f32>,
    rank_spacing: Option<f32>,
    rank_spacing_compact: Option<f32>,
    margin_x: Option<f32>,
    margin_y: Option<f32>,
    trunk_stub: Option<f32>,
    trunk_step: Option<f32>,
    trunk_epsilon: Option<f32>,
    fan_spacing: Option<f32>,
    order_passes: Option<usize>,
    label: Option<LabelFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LabelFile {
    font_size: Option<f32>,
    line_height: Option<f32>,
    max_lines: Option<usize>,
    conditions_per_line: Option<usize>,
    separator: Option<String>,
    min_width: Option<f32>,
    max_width: Option<f32>,
    padding_x: Option<f32>,
    padding_y: Option<f32>,
    badge_radius: Option<f32>,
    badge_gap: Option<f32>,
}

/// Loads the layout config, applying partial overrides from a JSON file over
/// the defaults. `None` returns the defaults unchanged.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let mut config = LayoutConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(v) = parsed.node_width {
        config.node_width = v;
    }
    if let Some(v) = parsed.node_height {
        config.node_height = v;
    }
    if let Some(v) = parsed.row_pitch {
        config.row_pitch = v;
    }
    if let Some(v) = parsed.rank_spacing {
        config.rank_spacing = v;
    }
    if let Some(v) = parsed.rank_spacing_compact {
        config.rank_spacing_compact = v;
    }
    if let Some(v) = parsed.margin_x {
        config.margin_x = v;
    }
    if let Some(v) = parsed.margin_y {
        config.margin_y = v;
    }
    if let Some(v) = parsed.trunk_stub {
        config.trunk_stub = v;
    }
    if let Some(v) = parsed.trunk_step {
        config.trunk_step = v;
    }
    if let Some(v) = parsed.trunk_epsilon {
        config.trunk_epsilon = v;
    }
    if let Some(v) = parsed.fan_spacing {
        config.fan_spacing = v;
    }
    if let Some(v) = parsed.order_passes {
        config.order_passes = v;
    }
    if let Some(label) = parsed.label {
        if let Some(v) = label.font_size {
            config.label.font_size = v;
        }
        if let Some(v) = label.line_height {
            config.label.line_height = v;
        }
        if let Some(v) = label.max_lines {
            config.label.max_lines = v;
        }
        if let Some(v) = label.conditions_per_line {
            config.label.conditions_per_line = v;
        }
        if let Some(v) = label.separator {
            config.label.separator = v;
        }
        if let Some(v) = label.min_width {
            config.label.min_width = v;
        }
        if let Some(v) = label.max_width {
            config.label.max_width = v;
        }
        if let Some(v) = label.padding_x {
            config.label.padding_x = v;
        }
        if let Some(v) = label.padding_y {
            config.label.padding_y = v;
        }
        if let Some(v) = label.badge_radius {
            config.label.badge_radius = v;
        }
        if let Some(v) = label.badge_gap {
            config.label.badge_gap = v;
        }
    }

    Ok(config)
}
