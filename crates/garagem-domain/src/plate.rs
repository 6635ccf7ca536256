//! Brazilian license plate shapes

use regex::Regex;
use std::sync::LazyLock;

/// Legacy plate: 3 letters + 4 digits (e.g. "ABC1234")
static LEGACY_PLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").unwrap());

/// Mercosul plate: 3 letters, 1 digit, 1 letter, 2 digits (e.g. "ABC1D23")
static MERCOSUL_PLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").unwrap());

/// Recognized shape of a normalized plate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateKind {
    Legacy,
    Mercosul,
}

impl PlateKind {
    /// Detect the shape of an already normalized plate
    pub fn detect(normalized: &str) -> Option<Self> {
        if LEGACY_PLATE.is_match(normalized) {
            Some(PlateKind::Legacy)
        } else if MERCOSUL_PLATE.is_match(normalized) {
            Some(PlateKind::Mercosul)
        } else {
            None
        }
    }
}
