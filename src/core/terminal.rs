//! Terminal width discovery.
//!
//! The grid layout only needs one number: how many columns the output may use.
//! [TerminalWidth] abstracts where that number comes from so listings can be rendered
//! against a fixed width in tests.

/// Width used when no provider can report one.
pub const FALLBACK_WIDTH: usize = 80;

/// Something that knows how wide the output is.
pub trait TerminalWidth {
    /// Current width in character columns, or `None` if it cannot be determined.
    fn width(&self) -> Option<usize>;
}

/// Always reports the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl TerminalWidth for FixedWidth {
    fn width(&self) -> Option<usize> {
        (self.0 > 0).then_some(self.0)
    }
}

/// Reads `COLUMNS` first, then asks the terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWidth;

impl TerminalWidth for SystemWidth {
    fn width(&self) -> Option<usize> {
        if let Some(cols) = std::env::var("COLUMNS").ok().as_deref().and_then(parse_columns) {
            return Some(cols);
        }
        match crossterm::terminal::size() {
            Ok((cols, _)) if cols > 0 => Some(cols as usize),
            Ok(_) => None,
            Err(e) => {
                log::debug!("terminal size query failed: {}", e);
                None
            }
        }
    }
}

/// Parses a `COLUMNS`-style value; zero and garbage are rejected.
pub fn parse_columns(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|&c| c > 0)
}

/// Asks the provider once, falling back to `fallback` if it has no answer.
pub fn resolve_width(provider: &dyn TerminalWidth, fallback: usize) -> usize {
    match provider.width() {
        Some(w) => w,
        None => {
            log::warn!("could not determine terminal width, using {}", fallback);
            fallback
        }
    }
}
