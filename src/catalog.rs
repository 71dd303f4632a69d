//! The icon-size catalog: an ordered table of named output sizes.
//!
//! The catalog drives the export loop as data, so the set of produced files
//! can be inspected, tested, or replaced without touching the pipeline. The
//! reference catalog covers the universal application icon sizes (phone and
//! tablet at 1x/2x/3x) plus one large 256px square.

use serde::{Deserialize, Serialize};

/// One catalog entry: a unique name paired with an edge length in pixels.
///
/// Edge lengths may be fractional in configuration (tablet `83.5pt` at 2x,
/// for instance) and are resolved to whole pixels at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconSpec {
    /// Catalog entry name; also the output file stem.
    pub name: String,

    /// Edge length in pixels. Must resolve to a positive integer.
    pub size: f32,
}

impl IconSpec {
    /// Creates a new spec.
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// The integer pixel edge length used at render time.
    ///
    /// Fractional configuration values are truncated.
    pub fn resolved_px(&self) -> u32 {
        self.size as u32
    }

    /// The output file name for this entry.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// An insertion-ordered, read-only-after-construction list of [`IconSpec`]s
/// with unique names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconCatalog {
    specs: Vec<IconSpec>,
}

impl IconCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of specs, keeping the first occurrence
    /// of each name.
    pub fn from_specs(specs: impl IntoIterator<Item = IconSpec>) -> Self {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.push(spec);
        }
        catalog
    }

    /// The fixed reference catalog: universal application icon sizes
    /// (18 entries).
    pub fn universal() -> Self {
        Self::from_specs([
            IconSpec::new("AppIcon-20@2x", 20.0 * 2.0),
            IconSpec::new("AppIcon-20@3x", 20.0 * 3.0),
            IconSpec::new("AppIcon-29@2x", 29.0 * 2.0),
            IconSpec::new("AppIcon-29@3x", 29.0 * 3.0),
            IconSpec::new("AppIcon-40@2x", 40.0 * 2.0),
            IconSpec::new("AppIcon-40@3x", 40.0 * 3.0),
            IconSpec::new("AppIcon-60@2x", 60.0 * 2.0),
            IconSpec::new("AppIcon-60@3x", 60.0 * 3.0),
            IconSpec::new("AppIcon-20~ipad", 20.0),
            IconSpec::new("AppIcon-20@2x~ipad", 20.0 * 2.0),
            IconSpec::new("AppIcon-29~ipad", 29.0),
            IconSpec::new("AppIcon-29@2x~ipad", 29.0 * 2.0),
            IconSpec::new("AppIcon-40~ipad", 40.0),
            IconSpec::new("AppIcon-40@2x~ipad", 40.0 * 2.0),
            IconSpec::new("AppIcon-76~ipad", 76.0),
            IconSpec::new("AppIcon-76@2x~ipad", 76.0 * 2.0),
            IconSpec::new("AppIcon-83.5@2x~ipad", 83.5 * 2.0),
            IconSpec::new("AppIcon-256", 256.0),
        ])
    }

    /// Appends a spec. Returns false (and keeps the existing entry) if the
    /// name is already present.
    pub fn push(&mut self, spec: IconSpec) -> bool {
        if self.specs.iter().any(|s| s.name == spec.name) {
            return false;
        }
        self.specs.push(spec);
        true
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The largest resolved edge length, or `None` for an empty catalog.
    ///
    /// This is the edge length of the master composite every exported icon
    /// is resampled from.
    pub fn max_px(&self) -> Option<u32> {
        self.specs.iter().map(IconSpec::resolved_px).max()
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &IconSpec> {
        self.specs.iter()
    }
}

impl<'a> IntoIterator for &'a IconCatalog {
    type Item = &'a IconSpec;
    type IntoIter = std::slice::Iter<'a, IconSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
