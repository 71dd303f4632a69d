//! Pipeline orchestration: validate, decode, fetch, compose, export.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;

use crate::asset::{AssetFetcher, DEFAULT_FETCH_TIMEOUT, DEFAULT_URI_TEMPLATE};
use crate::catalog::IconCatalog;
use crate::codepoint;
use crate::color::Rgb;
use crate::compose;
use crate::error::{Error, Result};
use crate::export;
use crate::recipe::IconRecipe;

/// The emoji occupies `1 / GOLDEN_RATIO` of the master icon's edge.
pub const GOLDEN_RATIO: f64 = 1.6180;

/// Injected pipeline configuration.
///
/// Everything the pipeline would otherwise read from global state lives
/// here, so tests can substitute endpoints and catalogs freely.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Glyph source URI template with an `{emoji}` placeholder.
    pub asset_uri_template: String,

    /// Icon-edge to emoji-edge ratio.
    pub emoji_ratio: f64,

    /// Timeout for the single glyph fetch.
    pub fetch_timeout: Duration,

    /// The ordered output size table.
    pub catalog: IconCatalog,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            asset_uri_template: DEFAULT_URI_TEMPLATE.to_string(),
            emoji_ratio: GOLDEN_RATIO,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            catalog: IconCatalog::universal(),
        }
    }
}

/// Generates a full icon set from one emoji and a gradient pair.
///
/// # Example
///
/// ```no_run
/// use emojicon::IconGenerator;
///
/// let mut generator = IconGenerator::with_defaults();
/// generator.set_emoji("😀");
/// generator.set_gradient("#ff0000", "#0000ff")?;
/// generator.set_output_dir("./icons");
/// let written = generator.generate()?;
/// assert_eq!(written.len(), 18);
/// # Ok::<(), emojicon::Error>(())
/// ```
pub struct IconGenerator {
    config: GeneratorConfig,
    emoji: Option<String>,
    start: Rgb,
    finish: Rgb,
    output_dir: PathBuf,
}

impl IconGenerator {
    /// Creates a generator with the given configuration and a
    /// black-to-black gradient.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            emoji: None,
            start: Rgb::default(),
            finish: Rgb::default(),
            output_dir: PathBuf::from("."),
        }
    }

    /// Creates a generator with the default remote catalog configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Creates a generator from a serialized recipe.
    pub fn from_recipe(config: GeneratorConfig, recipe: &IconRecipe) -> Result<Self> {
        let mut generator = Self::new(config);
        generator.apply_recipe(recipe)?;
        Ok(generator)
    }

    /// Sets the emoji character to render.
    pub fn set_emoji(&mut self, emoji: impl Into<String>) {
        self.emoji = Some(emoji.into());
    }

    /// Sets the gradient from two hex color strings.
    pub fn set_gradient(&mut self, start: &str, finish: &str) -> Result<()> {
        self.start = Rgb::from_hex(start)?;
        self.finish = Rgb::from_hex(finish)?;
        Ok(())
    }

    /// Sets the output directory. It must exist and be writable by the
    /// time [`generate`](Self::generate) runs.
    pub fn set_output_dir(&mut self, dir: impl Into<PathBuf>) {
        self.output_dir = dir.into();
    }

    /// Applies a recipe's emoji and gradient to this generator.
    pub fn apply_recipe(&mut self, recipe: &IconRecipe) -> Result<()> {
        if let Some(ref emoji) = recipe.emoji {
            self.emoji = Some(emoji.clone());
        }
        self.start = Rgb::from_hex(&recipe.start_color)?;
        self.finish = Rgb::from_hex(&recipe.finish_color)?;
        Ok(())
    }

    /// Exports the current settings as a recipe.
    pub fn export_recipe(&self) -> IconRecipe {
        let recipe = IconRecipe::new().with_gradient(
            self.start.to_string(),
            self.finish.to_string(),
        );
        match &self.emoji {
            Some(emoji) => recipe.with_emoji(emoji.clone()),
            None => recipe,
        }
    }

    /// Runs the whole pipeline and returns the written paths in catalog
    /// order.
    ///
    /// Stages run strictly in sequence: validation (before any network
    /// activity), codepoint decode, glyph fetch, composition, export. The
    /// first failing stage aborts the run; no output files exist unless
    /// the export stage was reached.
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        let emoji = self
            .emoji
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| Error::Validation("no emoji set".into()))?;
        ensure_writable_dir(&self.output_dir)?;

        let icon_px = self
            .config
            .catalog
            .max_px()
            .ok_or_else(|| Error::Validation("icon catalog is empty".into()))?;

        info!("generating icons from {emoji}");

        let scalar = codepoint::decode_char(emoji)?;
        let key = codepoint::hex_key(scalar);

        let fetcher = AssetFetcher::new(&self.config.asset_uri_template, self.config.fetch_timeout)?;
        let glyph_bytes = fetcher.fetch(&key)?;

        let master = compose::compose(
            &glyph_bytes,
            self.start,
            self.finish,
            icon_px,
            self.config.emoji_ratio,
        )?;

        let written = export::export_all(&master, &self.config.catalog, &self.output_dir)?;
        info!("complete, output directory: {}", self.output_dir.display());
        Ok(written)
    }
}

/// Verifies the output directory exists and accepts writes, via a probe
/// file. Runs before any network activity.
fn ensure_writable_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(Error::Validation(format!(
            "output directory \"{}\" does not exist",
            dir.display()
        )));
    }

    let probe = dir.join(".emojicon-write-probe");
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&probe)
        .map_err(|e| {
            Error::Validation(format!(
                "output directory \"{}\" is not writable: {e}",
                dir.display()
            ))
        })?;
    let _ = std::fs::remove_file(&probe);
    Ok(())
}
