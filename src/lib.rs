//! emojicon: application icon sets from a single emoji
//!
//! This crate turns one emoji character into a full set of application
//! icon PNGs. It decodes the emoji's Unicode scalar value, fetches the
//! matching glyph image from a remote catalog, composites it centered on
//! a vertical two-color gradient, and exports the composite at every size
//! in an ordered icon catalog.
//!
//! # Example
//!
//! ```no_run
//! use emojicon::IconGenerator;
//!
//! let mut generator = IconGenerator::with_defaults();
//! generator.set_emoji("😀");
//! generator.set_gradient("#ff0000", "#0000ff")?;
//! generator.set_output_dir("./AppIcon.appiconset");
//!
//! let written = generator.generate()?;
//! println!("wrote {} icons", written.len());
//! # Ok::<(), emojicon::Error>(())
//! ```
//!
//! # Serializable Recipes
//!
//! For driving the generator from a file or another process, use
//! [`IconRecipe`]:
//!
//! ```
//! use emojicon::IconRecipe;
//!
//! let recipe = IconRecipe::new()
//!     .with_emoji("🦆")
//!     .with_gradient("#fff", "#00f");
//! let json = recipe.to_json().unwrap();
//! let restored = IconRecipe::from_json(&json).unwrap();
//! assert_eq!(restored, recipe);
//! ```

pub mod asset;
pub mod catalog;
pub mod codepoint;
pub mod color;
pub mod compose;
pub mod error;
pub mod export;
pub mod generator;
pub mod gradient;
pub mod recipe;

pub use asset::{AssetFetcher, DEFAULT_FETCH_TIMEOUT, DEFAULT_URI_TEMPLATE, URI_PLACEHOLDER};
pub use catalog::{IconCatalog, IconSpec};
pub use color::Rgb;
pub use error::{Error, Result};
pub use generator::{GeneratorConfig, IconGenerator, GOLDEN_RATIO};
pub use recipe::IconRecipe;
