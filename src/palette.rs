use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub font_family: String,
    pub font_size: f32,
    pub node_fill: String,
    pub node_border: String,
    pub node_text_color: String,
    pub label_background: String,
    pub label_border: String,
    pub badge_fill: String,
    pub badge_text_color: String,
    pub line_colors: Vec<String>,
}

impl Palette {
    pub fn classic() -> Self {
        Self {
            font_family: "\"trebuchet ms\", verdana, arial, sans-serif".to_string(),
            font_size: 12.0,
            node_fill: "#FFF7E6".to_string(),
            node_border: "#8A6D3B".to_string(),
            node_text_color: "#333333".to_string(),
            label_background: "#FFFFF2".to_string(),
            label_border: "#B9A66B".to_string(),
            badge_fill: "#8A6D3B".to_string(),
            badge_text_color: "#FFFFFF".to_string(),
            line_colors: [
                "#4E79A7", "#E15759", "#59A14F", "#F28E2C", "#76B7B2", "#B07AA1", "#FF9DA7",
                "#9C755F", "#EDC949", "#BAB0AB",
            ]
            .iter()
            .map(|value| value.to_string())
            .collect(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 12.0,
            node_fill: "#F8FAFF".to_string(),
            node_border: "#C7D2E5".to_string(),
            node_text_color: "#1C2430".to_string(),
            label_background: "#FFFFFF".to_string(),
            label_border: "#D7E0F0".to_string(),
            badge_fill: "#5B7BA8".to_string(),
            badge_text_color: "#FFFFFF".to_string(),
            line_colors: [
                "#5B7BA8", "#C96C6C", "#6CA06C", "#D99A57", "#7FA8A3", "#9A7FA8", "#C98CA0",
                "#8C7A6B", "#C2AD5E", "#9AA0A6",
            ]
            .iter()
            .map(|value| value.to_string())
            .collect(),
        }
    }

    /// Contour color for a node, keyed by identity so repeated passes and
    /// golden dumps always agree.
    pub fn line_color_for(&self, name: &str) -> &str {
        if self.line_colors.is_empty() {
            return &self.node_border;
        }
        let mut hasher = FxHasher::default();
        name.hash(&mut hasher);
        let index = (hasher.finish() % self.line_colors.len() as u64) as usize;
        &self.line_colors[index]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
