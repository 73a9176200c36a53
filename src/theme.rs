use serde::{Deserialize, Serialize};

/// The ordinal palette used for thesaurus coloring (d3's category10).
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Ordinal color scale: each distinct key gets the next palette color, in
/// first-seen order, wrapping after ten. Owned by a session, never shared.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    domain: Vec<String>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&mut self, key: &str) -> &'static str {
        let idx = match self.domain.iter().position(|known| known == key) {
            Some(idx) => idx,
            None => {
                self.domain.push(key.to_string());
                self.domain.len() - 1
            }
        };
        CATEGORY10[idx % CATEGORY10.len()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub font_family: String,
    pub node_stroke: String,
    pub node_stroke_width: f64,
    pub link_stroke_width: f64,
    /// Vertical offset of the relation label above its path.
    pub link_label_dy: f64,
    pub arrowhead_fill: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            node_stroke: "#fff".to_string(),
            node_stroke_width: 1.5,
            link_stroke_width: 3.0,
            link_label_dy: -10.0,
            arrowhead_fill: "#000000".to_string(),
        }
    }
}

/// Darkens a `#rrggbb` color by scaling each channel by 0.7^k.
pub fn darker(hex: &str, k: f64) -> String {
    scale_channels(hex, 0.7f64.powf(k))
}

/// Brightens a `#rrggbb` color by scaling each channel by 0.7^-k.
pub fn brighter(hex: &str, k: f64) -> String {
    scale_channels(hex, 0.7f64.powf(-k))
}

fn scale_channels(hex: &str, factor: f64) -> String {
    let Some((r, g, b)) = parse_hex(hex) else {
        return hex.to_string();
    };
    let scale = |channel: u8| -> u8 { (f64::from(channel) * factor).round().min(255.0) as u8 };
    format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b))
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
