//! Noise command implementation
//!
//! Renders a fractal Perlin noise map to a deterministic grayscale PNG.

use anyhow::{Context, Result};
use serde::Serialize;
use shuu_random::texture::{encode_noise_map_with_hash, PngConfig};
use shuu_random::NoiseSettings;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::reporting::{print_field, print_header, print_json, print_success};

/// Command-line values that override the settings file.
#[derive(Debug, Clone, Default)]
pub struct NoiseOverrides {
    pub seed: Option<i32>,
    pub scale: Option<f32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub octaves: Option<u32>,
}

impl NoiseOverrides {
    fn apply(&self, settings: &mut NoiseSettings) {
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(scale) = self.scale {
            settings.scale = scale;
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(octaves) = self.octaves {
            settings.octaves = octaves;
        }
    }
}

/// Output of the noise command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoiseOutput {
    pub path: String,
    pub settings: NoiseSettings,
    pub min: f32,
    pub max: f32,
    pub hash: String,
}

/// Load settings from an optional JSON file, then apply overrides.
pub fn load_settings(config: Option<&str>, overrides: &NoiseOverrides) -> Result<NoiseSettings> {
    let mut settings: NoiseSettings = match config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read noise config: {}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse noise config: {}", path))?
        }
        None => NoiseSettings::default(),
    };
    overrides.apply(&mut settings);
    Ok(settings)
}

/// Render and write the PNG without printing anything.
pub fn render(settings: &NoiseSettings, out: &Path) -> Result<NoiseOutput> {
    let map = settings.render();
    let (data, hash) = encode_noise_map_with_hash(&map, &PngConfig::default())
        .context("Failed to encode noise map")?;
    fs::write(out, &data).with_context(|| format!("Failed to write: {}", out.display()))?;

    let (min, max) = map.min_max().unwrap_or((0.0, 0.0));
    Ok(NoiseOutput {
        path: out.display().to_string(),
        settings: settings.clone(),
        min,
        max,
        hash,
    })
}

/// Run the noise command
///
/// # Arguments
/// * `config` - Optional path to a JSON `NoiseSettings` file
/// * `overrides` - Flag values taking precedence over the file
/// * `out` - Output PNG path
/// * `json` - Emit JSON instead of colored text
pub fn run(
    config: Option<&str>,
    overrides: &NoiseOverrides,
    out: &str,
    json: bool,
) -> Result<ExitCode> {
    let settings = load_settings(config, overrides)?;
    let output = render(&settings, Path::new(out))?;

    if json {
        print_json(&output)?;
        return Ok(ExitCode::SUCCESS);
    }

    print_header(
        "Noise",
        format!("{}x{} seed {}", settings.width, settings.height, settings.seed),
    );
    print_field("scale", settings.scale);
    print_field("octaves", settings.octaves);
    print_field("range", format!("[{:.4}, {:.4}]", output.min, output.max));
    print_field("blake3", &output.hash);
    print_success(format!("Wrote {}", output.path));

    Ok(ExitCode::SUCCESS)
}
