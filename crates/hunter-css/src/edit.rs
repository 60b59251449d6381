//! Editing operations on a [`Gradient`].
//!
//! Every operation returns a new model and leaves the receiver untouched.

use crate::ast::{ColorStop, Gradient, StopPosition};
use crate::color::{Notation, parse_color};
use crate::error::ErrorKind;
use crate::value::{Length, LengthUnit};

/// Fewest stops an edited gradient keeps.
pub const MIN_EDITABLE_STOPS: usize = 2;

/// Color given to stops created by [`Gradient::with_appended_stop`].
const APPENDED_COLOR: &str = "#000000";

impl Gradient {
    /// Appends a black stop 10 percentage points after the last stop,
    /// capped at `100%`.
    ///
    /// If the last stop has no percentage position the new stop is placed at
    /// `100%`.
    pub fn with_appended_stop(&self) -> Gradient {
        let last = self.stops.last().and_then(|s| match s.position {
            Some(StopPosition::Length(Length { value, unit: LengthUnit::Percent })) => Some(value),
            _ => None,
        });
        let position = last.map_or(100.0, |v| (v + 10.0).min(100.0));

        let mut next = self.clone();
        next.stops
            .push(ColorStop::new(APPENDED_COLOR, Some(Length::percent(position).into())));
        next
    }

    /// Removes the stop at `index`. Returns `None` when the index is out of
    /// range or the gradient would drop below [`MIN_EDITABLE_STOPS`].
    pub fn without_stop(&self, index: usize) -> Option<Gradient> {
        if index >= self.stops.len() || self.stops.len() <= MIN_EDITABLE_STOPS {
            return None;
        }
        let mut next = self.clone();
        next.stops.remove(index);
        Some(next)
    }

    /// Replaces the color of the stop at `index`.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::UnsupportedColorNotation`] if `color` does not parse, and
    /// [`ErrorKind::MalformedGradientSyntax`] for an out-of-range index.
    pub fn with_stop_color(&self, index: usize, color: &str) -> Result<Gradient, ErrorKind> {
        parse_color(color)?;
        let mut next = self.clone();
        let stop = next
            .stops
            .get_mut(index)
            .ok_or_else(|| ErrorKind::malformed(format!("no color stop at index {index}")))?;
        stop.color = color.trim().to_owned();
        Ok(next)
    }

    /// Replaces (or clears) the position of the stop at `index`.
    pub fn with_stop_position(&self, index: usize, position: Option<StopPosition>) -> Option<Gradient> {
        let mut next = self.clone();
        next.stops.get_mut(index)?.position = position;
        Some(next)
    }

    /// Rewrites every stop color in `notation`.
    ///
    /// # Errors
    ///
    /// Fails on the first stop whose color cannot be resolved.
    pub fn with_notation(&self, notation: Notation) -> Result<Gradient, ErrorKind> {
        let mut next = self.clone();
        for stop in &mut next.stops {
            stop.color = stop.rgba()?.to_notation(notation);
        }
        Ok(next)
    }
}
