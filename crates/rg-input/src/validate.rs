//! Line-shape checks shared by the text and CSV loaders.

use rg_grid::GridBounds;

/// Compass letters accepted as a starting heading.
pub(crate) const HEADINGS: [&str; 4] = ["N", "E", "S", "W"];

/// `^[0-9]+$` parsed as `u32`.  Rejects signs, blanks and overflow.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// `^[0-9]+ [0-9]+$`, exactly one space between the two numbers.
pub(crate) fn parse_bounds(line: &str) -> Option<GridBounds> {
    let mut parts = line.split(' ');
    let x = parse_digits(parts.next()?)?;
    let y = parse_digits(parts.next()?)?;
    parts.next().is_none().then(|| GridBounds::new(x, y))
}

/// `^[0-9]+ [0-9]+ [NESW]$`.
pub(crate) fn parse_start(line: &str) -> Option<(u32, u32, &str)> {
    let mut parts = line.split(' ');
    let x = parse_digits(parts.next()?)?;
    let y = parse_digits(parts.next()?)?;
    let heading = parts.next().filter(|h| is_heading(h))?;
    parts.next().is_none().then_some((x, y, heading))
}

pub(crate) fn is_heading(s: &str) -> bool {
    HEADINGS.contains(&s)
}

/// `^[LRM]+$`.
pub(crate) fn is_command_line(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| matches!(b, b'L' | b'R' | b'M'))
}

pub(crate) fn in_bounds(bounds: GridBounds, x: u32, y: u32) -> bool {
    x <= bounds.max_x && y <= bounds.max_y
}
