//! CLI styling utilities
//!
//! Provides semantic styling via the [`Stylize`] trait with automatic
//! terminal color support detection (delegated to `owo-colors`).
//!
//! # Color Palette
//!
//! | Method       | Color  | Stream | Semantic Use                       |
//! |--------------|--------|--------|------------------------------------|
//! | `.accent()`  | Cyan   | stdout | Primary info: builds, commits      |
//! | `.muted()`   | Dim    | stdout | Secondary: authors, dates, hints   |
//! | `.emphasis()`| Bold   | stdout | Headers, the requested build       |

use std::fmt::{self, Display};

use owo_colors::{OwoColorize, Stream, Style};

// ============================================================================
// Style definitions
// ============================================================================

const ACCENT: Style = Style::new().cyan();
const MUTED: Style = Style::new().dimmed();
const EMPHASIS: Style = Style::new().bold();

// ============================================================================
// Styled wrapper
// ============================================================================

/// A value with semantic styling applied.
///
/// Color support detection is handled by `owo-colors` (respects `NO_COLOR`,
/// `CLICOLOR`, `CLICOLOR_FORCE`, and TTY detection).
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, style: Style, stream: Stream) -> Self {
        Self {
            value,
            style,
            stream,
        }
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

// ============================================================================
// Stylize trait
// ============================================================================

/// Extension trait for semantic terminal styling.
pub trait Stylize: Display {
    /// Accent color (cyan) for primary information.
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, ACCENT, Stream::Stdout)
    }

    /// Muted style (dim) for secondary information.
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, MUTED, Stream::Stdout)
    }

    /// Emphasis style (bold) for important text.
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, EMPHASIS, Stream::Stdout)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

// ============================================================================
// Symbols
// ============================================================================

/// Arrow for contributing builds
pub const ARROW: &str = "→";

/// Bullet point for list items
pub const BULLET: &str = "○";

/// Marker for the requested build
pub const CURRENT: &str = "@";

/// Vertical pipe for tree structure
pub const PIPE: &str = "│";

/// Cyan arrow.
#[inline]
pub const fn arrow() -> Styled<&'static str> {
    Styled::new(ARROW, ACCENT, Stream::Stdout)
}

/// Dimmed bullet for list items.
#[inline]
pub const fn bullet() -> Styled<&'static str> {
    Styled::new(BULLET, MUTED, Stream::Stdout)
}

/// Dimmed pipe for tree structure.
#[inline]
pub const fn pipe() -> Styled<&'static str> {
    Styled::new(PIPE, MUTED, Stream::Stdout)
}
