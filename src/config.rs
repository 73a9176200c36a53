use crate::theme::Theme;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Force-layout and geometry parameters, defaults per the original viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Target distance of the link spring force.
    pub link_distance: f64,
    /// Many-body charge strength; negative repels.
    pub charge_strength: f64,
    /// Radius of the node circles.
    pub node_radius: f64,
    /// Bow of the quadratic link curve, as a fraction of the center distance.
    pub link_curvature: f64,
    /// Perpendicular shift of the curve endpoints off the node boundary,
    /// separating opposite arcs between the same pair.
    pub intersection_offset: f64,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            link_distance: 300.0,
            charge_strength: -400.0,
            node_radius: 30.0,
            link_curvature: 0.15,
            intersection_offset: -5.0,
        }
    }
}

/// Simulation cooling parameters (d3-force defaults).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationTuning {
    pub alpha_min: f64,
    pub alpha_decay: f64,
    /// Target energy raised while a drag is active.
    pub drag_alpha_target: f64,
    pub velocity_decay: f64,
}

impl Default for SimulationTuning {
    fn default() -> Self {
        Self {
            alpha_min: 0.001,
            alpha_decay: 0.0228,
            drag_alpha_target: 0.3,
            velocity_decay: 0.4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: GraphSettings,
    pub simulation: SimulationTuning,
    pub render: RenderConfig,
    pub theme: Theme,
}

/// Loads a JSON config file; fields not present keep their defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let content = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    Ok(config)
}
