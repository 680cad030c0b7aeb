//! JSON configuration for the `region_demo` binary.
use crate::finder::FinderParams;
use crate::image::RgbFrame;
use crate::types::Rgb;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    pub target: TargetConfig,
    #[serde(default)]
    pub finder: FinderConfig,
    pub output: DemoOutputConfig,
}

/// Target color: either explicit RGB or sampled from an input pixel, the
/// click-to-pick flow of the interactive app.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct TargetConfig {
    pub color: Option<[u8; 3]>,
    pub sample: Option<[usize; 2]>,
}

impl TargetConfig {
    pub fn resolve(&self, frame: &RgbFrame) -> Result<Rgb, String> {
        if let Some([r, g, b]) = self.color {
            return Ok(Rgb::new(r, g, b));
        }
        if let Some([x, y]) = self.sample {
            if !frame.contains(x, y) {
                return Err(format!(
                    "Sample point ({x}, {y}) outside {}x{} input",
                    frame.width(),
                    frame.height()
                ));
            }
            return Ok(frame.get(x, y));
        }
        Err("Config must set target.color or target.sample".to_string())
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FinderConfig {
    pub max_color_diff: Option<u8>,
    pub min_region: Option<usize>,
}

impl FinderConfig {
    pub fn resolve(&self) -> FinderParams {
        let mut params = FinderParams::default();
        if let Some(v) = self.max_color_diff {
            params.max_color_diff = v;
        }
        if let Some(v) = self.min_region {
            params.min_region = v;
        }
        params
    }
}

#[derive(Debug, Deserialize)]
pub struct DemoOutputConfig {
    #[serde(rename = "dir")]
    pub dir: PathBuf,
    pub recolored_image: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

impl DemoOutputConfig {
    pub fn recolored_path(&self) -> Option<PathBuf> {
        self.recolored_image.as_ref().map(|p| resolve_path(&self.dir, p))
    }

    pub fn report_path(&self) -> Option<PathBuf> {
        self.report_json.as_ref().map(|p| resolve_path(&self.dir, p))
    }
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_resolution_prefers_explicit_color() {
        let frame = RgbFrame::new(2, 2);
        let cfg = TargetConfig {
            color: Some([1, 2, 3]),
            sample: Some([0, 0]),
        };
        assert_eq!(cfg.resolve(&frame), Ok(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn target_sampling_checks_bounds() {
        let frame = RgbFrame::new(2, 2);
        let cfg = TargetConfig {
            color: None,
            sample: Some([5, 0]),
        };
        assert!(cfg.resolve(&frame).is_err());
        assert!(TargetConfig::default().resolve(&frame).is_err());
    }

    #[test]
    fn finder_config_defaults_and_overrides() {
        let cfg: FinderConfig = serde_json::from_str(r#"{ "min_region": 10 }"#).unwrap();
        let params = cfg.resolve();
        assert_eq!(params.min_region, 10);
        assert_eq!(params.max_color_diff, 20);
    }
}
