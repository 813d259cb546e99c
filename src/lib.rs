pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod palette;

pub use config::{LayoutConfig, load_config};
pub use ir::{Criteria, EvolutionRecord, Graph, PetRecord, TimeWindow, ValueRange};
pub use layout::{Layout, compute_layout};
pub use palette::Palette;
