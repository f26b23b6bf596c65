//! Rendering weights for graph connections.
//!
//! Both mappers clamp the score into `[0, 1]` first, so any real input
//! (including out-of-range and NaN) produces a usable value.

use serde::{Deserialize, Serialize};

/// Hue used by [`connection_color_default`].
pub const DEFAULT_CONNECTION_HUE: u16 = 220;

/// Per-edge rendering parameters derived from a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionVisualProps {
    /// Line opacity, `0..=1`.
    pub opacity: f64,
    /// Line thickness in pixels, `1..=4`.
    pub thickness: f64,
    /// Glow intensity, `0..=0.6`.
    pub glow: f64,
    /// Pulse animation period. Stronger links pulse faster.
    #[serde(rename = "pulseDuration")]
    pub pulse_duration_ms: u32,
}

fn normalize_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Map a similarity score to line weighting for the renderer.
pub fn connection_visual_props(score: f64) -> ConnectionVisualProps {
    let normalized = normalize_score(score);

    ConnectionVisualProps {
        opacity: normalized.max(0.0),
        thickness: (normalized * 4.0).max(1.0),
        glow: normalized * 0.6,
        pulse_duration_ms: (2000.0 + (1.0 - normalized) * 3000.0).round() as u32,
    }
}

/// HSL color literal for a connection: saturation spans 60-100%, lightness
/// 40-70%.
pub fn connection_color(score: f64, hue: u16) -> String {
    let normalized = normalize_score(score);
    let saturation = 60.0 + normalized * 40.0;
    let lightness = 40.0 + normalized * 30.0;

    format!("hsl({hue}, {saturation}%, {lightness}%)")
}

/// [`connection_color`] with [`DEFAULT_CONNECTION_HUE`].
pub fn connection_color_default(score: f64) -> String {
    connection_color(score, DEFAULT_CONNECTION_HUE)
}
