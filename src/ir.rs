use std::collections::{BTreeMap, HashMap};

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Reserved upper bound in a two-element range meaning "this value or more".
pub const OPEN_END: i32 = -1;

/// Numeric condition bound. Serialized as a bare number when exact and as a
/// two-element array otherwise, matching the roster record files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    pub fn exact(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn between(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: i32) -> Self {
        Self { min, max: OPEN_END }
    }

    pub fn display(&self) -> String {
        if self.max == OPEN_END {
            format!("{}+", self.min)
        } else if self.min == self.max {
            self.min.to_string()
        } else {
            format!("{},{}", self.min, self.max)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RangeRepr {
    Single(i32),
    Pair([i32; 2]),
}

impl<'de> Deserialize<'de> for ValueRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RangeRepr::deserialize(deserializer)? {
            RangeRepr::Single(value) => Ok(ValueRange::exact(value)),
            RangeRepr::Pair([min, max]) => Ok(ValueRange { min, max }),
        }
    }
}

impl Serialize for ValueRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.min == self.max {
            serializer.serialize_i32(self.min)
        } else {
            [self.min, self.max].serialize(serializer)
        }
    }
}

/// Hour-of-day window during which an evolution can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub from_hour: u8,
    pub to_hour: u8,
}

impl TimeWindow {
    pub fn display(&self) -> String {
        format!("{}-{}h", self.from_hour, self.to_hour)
    }
}

/// Ordered set of optional evolution conditions. Field order is the display
/// order. Criteria attached to different edges are never merged, even when
/// their contents happen to match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    pub training: Option<ValueRange>,
    pub battles: Option<ValueRange>,
    pub wins: Option<ValueRange>,
    pub care_mistakes: Option<ValueRange>,
    pub weight: Option<ValueRange>,
    pub overfeeds: Option<ValueRange>,
    pub item: Option<String>,
    pub time: Option<TimeWindow>,
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        self.condition_count() == 0
    }

    pub fn condition_count(&self) -> usize {
        usize::from(self.training.is_some())
            + usize::from(self.battles.is_some())
            + usize::from(self.wins.is_some())
            + usize::from(self.care_mistakes.is_some())
            + usize::from(self.weight.is_some())
            + usize::from(self.overfeeds.is_some())
            + usize::from(self.item.is_some())
            + usize::from(self.time.is_some())
    }

    /// Display label and formatted value for every present condition, in
    /// declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(range) = &self.training {
            out.push(("Training", range.display()));
        }
        if let Some(range) = &self.battles {
            out.push(("Battles", range.display()));
        }
        if let Some(range) = &self.wins {
            out.push(("Wins", range.display()));
        }
        if let Some(range) = &self.care_mistakes {
            out.push(("Mistakes", range.display()));
        }
        if let Some(range) = &self.weight {
            out.push(("Weight", range.display()));
        }
        if let Some(range) = &self.overfeeds {
            out.push(("Overfeeds", range.display()));
        }
        if let Some(item) = &self.item {
            out.push(("Item", item.clone()));
        }
        if let Some(window) = &self.time {
            out.push(("Time", window.display()));
        }
        out
    }
}

/// Pet record as stored in the roster files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetRecord {
    pub name: String,
    pub stage: u32,
    pub version: String,
    #[serde(default)]
    pub attribute: Option<String>,
}

/// Evolution record as stored in the roster files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionRecord {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub criteria: Criteria,
}

#[derive(Debug, Clone)]
pub struct PetNode {
    pub name: String,
    pub stage: u32,
    pub attribute: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EvolutionEdge {
    pub from: String,
    pub to: String,
    pub criteria: Criteria,
}

/// Roster graph for a single version. Node identity is the pet name; edges
/// whose endpoints do not both resolve within the roster are dropped at
/// build time — dangling references are expected input noise, not an error.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: BTreeMap<String, PetNode>,
    pub node_order: HashMap<String, usize>,
    pub edges: Vec<EvolutionEdge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph for one version: pets filtered by version, then
    /// every evolution edge that resolves on both ends.
    pub fn for_version(
        pets: &[PetRecord],
        evolutions: &[EvolutionRecord],
        version: &str,
    ) -> Self {
        let mut graph = Self::new();
        for pet in pets.iter().filter(|pet| pet.version == version) {
            graph.insert_node(PetNode {
                name: pet.name.clone(),
                stage: pet.stage,
                attribute: pet.attribute.clone(),
            });
        }
        for evolution in evolutions {
            graph.push_edge(&evolution.from, &evolution.to, evolution.criteria.clone());
        }
        graph
    }

    pub fn insert_node(&mut self, node: PetNode) {
        if !self.node_order.contains_key(&node.name) {
            self.node_order
                .insert(node.name.clone(), self.node_order.len());
        }
        self.nodes.insert(node.name.clone(), node);
    }

    /// Returns false (and adds nothing) when either endpoint is unknown.
    pub fn push_edge(&mut self, from: &str, to: &str, criteria: Criteria) -> bool {
        if !self.nodes.contains_key(from) || !self.nodes.contains_key(to) {
            return false;
        }
        self.edges.push(EvolutionEdge {
            from: from.to_string(),
            to: to.to_string(),
            criteria,
        });
        true
    }
}
