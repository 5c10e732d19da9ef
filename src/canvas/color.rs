//! Canvas colors and the fixed fill palette

/// Color of a single canvas cell
///
/// Fill policies only ever choose from [`PALETTE`]. `Black` is the background
/// ink: cells a painting never touches keep it and read as grid lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Background and line ink
    #[default]
    Black,
    /// Palette red
    Red,
    /// Palette yellow
    Yellow,
    /// Palette cyan (the "blue" of the weighted policy)
    Cyan,
    /// Palette white
    White,
}

/// The four fill hues in palette order
pub const PALETTE: [Color; 4] = [Color::Red, Color::Yellow, Color::Cyan, Color::White];

impl Color {
    /// Whether this color can be chosen by a fill policy
    pub const fn is_palette(self) -> bool {
        !matches!(self, Self::Black)
    }

    /// Opaque RGBA value for this color
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Black => [0, 0, 0, 255],
            Self::Red => [255, 0, 0, 255],
            Self::Yellow => [255, 255, 0, 255],
            Self::Cyan => [0, 255, 255, 255],
            Self::White => [255, 255, 255, 255],
        }
    }

    /// Lowercase display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }
}
