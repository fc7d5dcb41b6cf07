//! Masking options

/// Rule deciding which pixels a closed polygon covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// A pixel is inside when a ray from it crosses the outline an odd number of times
    #[default]
    EvenOdd,
    /// A pixel is inside when the outline winds around it a nonzero number of times
    NonZero,
}

impl FillRule {
    /// Parse a fill rule name ("even-odd" or "nonzero")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "even-odd" | "evenodd" => Some(FillRule::EvenOdd),
            "nonzero" | "non-zero" => Some(FillRule::NonZero),
            _ => None,
        }
    }

    pub(crate) fn is_inside(&self, crossings: usize, winding: i32) -> bool {
        match self {
            FillRule::EvenOdd => crossings % 2 == 1,
            FillRule::NonZero => winding != 0,
        }
    }
}

/// Mask value used for the pixels on the polygon outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineMode {
    /// Outline pixels are cleared after filling
    #[default]
    Background,
    /// Outline pixels are set after filling
    Foreground,
}

/// Channels affected by the mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskChannels {
    /// Colour channels are zeroed outside the polygon as well as alpha
    #[default]
    All,
    /// Colour channels are kept; only alpha is replaced
    AlphaOnly,
}

/// Options controlling how a boundary is rasterized and applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaskOptions {
    pub fill_rule: FillRule,
    pub outline: OutlineMode,
    pub channels: MaskChannels,
}
