//! The in-memory color model.
//!
//! A [`ColorTable`] is either a list of discrete colors or a set of
//! per-channel piecewise-linear segments. Tables are immutable: every
//! transform in this module returns a new table.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::error::{CmapError, Result};

/// Number of samples used when a segmented table has to be discretized.
pub const DEFAULT_RESOLUTION: usize = 256;

/// An RGBA color with every channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Build a color from a 3 or 4 component slice.
    pub fn from_components(components: &[f64]) -> Result<Self> {
        let color = match *components {
            [r, g, b] => Rgba::rgb(r, g, b),
            [r, g, b, a] => Rgba::new(r, g, b, a),
            _ => {
                return Err(CmapError::invalid_argument(
                    "color",
                    format!(
                        "expected 3 or 4 components, got {}",
                        components.len()
                    ),
                ))
            }
        };
        if !color.to_array().iter().all(|c| in_unit_range(*c)) {
            return Err(CmapError::invalid_argument(
                "color",
                format!("components must lie in [0, 1], got {components:?}"),
            ));
        }
        Ok(color)
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to 8-bit channels, rounding to the nearest integer.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            unit_to_u8(self.r),
            unit_to_u8(self.g),
            unit_to_u8(self.b),
            unit_to_u8(self.a),
        ]
    }

    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Rgba::new(
            f64::from(rgba[0]) / 255.0,
            f64::from(rgba[1]) / 255.0,
            f64::from(rgba[2]) / 255.0,
            f64::from(rgba[3]) / 255.0,
        )
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

/// Map a channel in [0, 1] to 0..=255.
pub fn unit_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn in_unit_range(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

/// One interpolation node `(x, y_in, y_out)` of a channel.
///
/// `y_in` is the value approached from below `x`, `y_out` the value
/// leaving `x` upwards, which allows discontinuities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub x: f64,
    pub y_in: f64,
    pub y_out: f64,
}

impl Breakpoint {
    pub const fn new(x: f64, y_in: f64, y_out: f64) -> Self {
        Self { x, y_in, y_out }
    }

    /// Breakpoint without a discontinuity
    pub const fn continuous(x: f64, y: f64) -> Self {
        Self::new(x, y, y)
    }
}

/// Color channel names of a segmented table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-channel breakpoints of a segmented table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentData {
    pub red: Vec<Breakpoint>,
    pub green: Vec<Breakpoint>,
    pub blue: Vec<Breakpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<Vec<Breakpoint>>,
}

impl SegmentData {
    pub fn new(red: Vec<Breakpoint>, green: Vec<Breakpoint>, blue: Vec<Breakpoint>) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: Vec<Breakpoint>) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Evenly spaced continuous segments through `colors`.
    ///
    /// A single color is stretched over the whole [0, 1] range.
    pub fn from_colors(colors: &[Rgba], with_alpha: bool) -> Self {
        let positions: Vec<f64> = match colors.len() {
            0 => Vec::new(),
            1 => vec![0.0, 1.0],
            n => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
        };
        let pick = |i: usize| colors[i.min(colors.len() - 1)];
        let channel = |f: fn(&Rgba) -> f64| -> Vec<Breakpoint> {
            positions
                .iter()
                .enumerate()
                .map(|(i, x)| Breakpoint::continuous(*x, f(&pick(i))))
                .collect()
        };

        let data = SegmentData::new(channel(|c| c.r), channel(|c| c.g), channel(|c| c.b));
        if with_alpha {
            data.with_alpha(channel(|c| c.a))
        } else {
            data
        }
    }

    /// Iterate over the present channels in red, green, blue, alpha order.
    pub fn channels(&self) -> impl Iterator<Item = (Channel, &[Breakpoint])> {
        [
            Some((Channel::Red, self.red.as_slice())),
            Some((Channel::Green, self.green.as_slice())),
            Some((Channel::Blue, self.blue.as_slice())),
            self.alpha.as_deref().map(|a| (Channel::Alpha, a)),
        ]
        .into_iter()
        .flatten()
    }

    pub fn channel(&self, channel: Channel) -> Option<&[Breakpoint]> {
        match channel {
            Channel::Red => Some(&self.red),
            Channel::Green => Some(&self.green),
            Channel::Blue => Some(&self.blue),
            Channel::Alpha => self.alpha.as_deref(),
        }
    }

    fn map_channels(&self, f: impl Fn(&[Breakpoint]) -> Vec<Breakpoint>) -> Self {
        Self {
            red: f(&self.red),
            green: f(&self.green),
            blue: f(&self.blue),
            alpha: self.alpha.as_deref().map(f),
        }
    }

    /// Check the ordering and range invariants of every channel.
    pub fn validate(&self) -> Result<()> {
        for (channel, points) in self.channels() {
            validate_channel(channel, points)?;
        }
        Ok(())
    }

    /// Evaluate all channels at `t`.
    pub fn evaluate(&self, t: f64) -> Rgba {
        Rgba::new(
            interpolate_channel(&self.red, t),
            interpolate_channel(&self.green, t),
            interpolate_channel(&self.blue, t),
            self.alpha
                .as_deref()
                .map_or(1.0, |a| interpolate_channel(a, t)),
        )
    }

    /// Colors on both sides of `x`: the value approached from below and
    /// the value leaving upwards. They differ only at a discontinuity.
    pub fn limits_at(&self, x: f64) -> (Rgba, Rgba) {
        let (r_in, r_out) = channel_limits(&self.red, x);
        let (g_in, g_out) = channel_limits(&self.green, x);
        let (b_in, b_out) = channel_limits(&self.blue, x);
        let (a_in, a_out) = self
            .alpha
            .as_deref()
            .map_or((1.0, 1.0), |a| channel_limits(a, x));
        (
            Rgba::new(r_in, g_in, b_in, a_in),
            Rgba::new(r_out, g_out, b_out, a_out),
        )
    }

    /// Sorted, de-duplicated breakpoint positions across all channels.
    pub fn positions(&self) -> Vec<f64> {
        let mut xs: Vec<f64> = self
            .channels()
            .flat_map(|(_, points)| points.iter().map(|p| p.x))
            .collect();
        xs.sort_by(f64::total_cmp);
        xs.dedup();
        xs
    }
}

fn validate_channel(channel: Channel, points: &[Breakpoint]) -> Result<()> {
    let param = channel.as_str();
    if points.len() < 2 {
        return Err(CmapError::invalid_argument(
            param,
            format!("needs at least 2 breakpoints, got {}", points.len()),
        ));
    }
    if let Some(bad) = points
        .iter()
        .find(|p| !p.x.is_finite() || !in_unit_range(p.y_in) || !in_unit_range(p.y_out))
    {
        return Err(CmapError::invalid_argument(
            param,
            format!("breakpoint {bad:?} is outside [0, 1]"),
        ));
    }
    if points.first().map(|p| p.x) != Some(0.0) || points.last().map(|p| p.x) != Some(1.0) {
        return Err(CmapError::invalid_argument(
            param,
            "breakpoints must start at x = 0 and end at x = 1",
        ));
    }
    if points.windows(2).any(|w| w[1].x < w[0].x) {
        return Err(CmapError::invalid_argument(
            param,
            "breakpoints must be sorted by x",
        ));
    }
    Ok(())
}

/// Incoming and outgoing value of one channel at `x`.
fn channel_limits(points: &[Breakpoint], x: f64) -> (f64, f64) {
    let mut at_x = points.iter().filter(|p| p.x == x);
    match at_x.next() {
        Some(first) => {
            let last = at_x.last().unwrap_or(first);
            (first.y_in, last.y_out)
        }
        None => {
            let y = interpolate_channel(points, x);
            (y, y)
        }
    }
}

/// Piecewise-linear evaluation of a single channel.
fn interpolate_channel(points: &[Breakpoint], t: f64) -> f64 {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };
    if t <= first.x {
        return first.y_out;
    }
    if t >= last.x {
        return last.y_in;
    }

    // first index whose x is at or beyond t; always >= 1 here
    let hi_index = points.partition_point(|p| p.x < t);
    let lo = &points[hi_index - 1];
    let hi = &points[hi_index];
    let width = hi.x - lo.x;
    if width <= 0.0 {
        return hi.y_in;
    }
    let fraction = (t - lo.x) / width;
    lo.y_out + fraction * (hi.y_in - lo.y_out)
}

/// Listed or segmented color data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum TableData {
    Listed(Vec<Rgba>),
    Segmented(SegmentData),
}

/// Luminance weighting used for greyscale conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GreyscaleWeights {
    /// ITU-R BT.709
    #[default]
    Rec709,
    /// ITU-R BT.601 / NTSC
    Rec601,
    /// Root of the squared BT.601 weighting
    Perceptual,
}

impl GreyscaleWeights {
    pub fn luminance(&self, color: &Rgba) -> f64 {
        match self {
            GreyscaleWeights::Rec709 => 0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b,
            GreyscaleWeights::Rec601 => 0.299 * color.r + 0.587 * color.g + 0.114 * color.b,
            GreyscaleWeights::Perceptual => (0.299 * color.r * color.r
                + 0.587 * color.g * color.g
                + 0.114 * color.b * color.b)
                .sqrt(),
        }
    }
}

impl TryFrom<u8> for GreyscaleWeights {
    type Error = CmapError;

    fn try_from(selector: u8) -> Result<Self> {
        match selector {
            1 => Ok(GreyscaleWeights::Rec709),
            2 => Ok(GreyscaleWeights::Rec601),
            3 => Ok(GreyscaleWeights::Perceptual),
            other => Err(CmapError::invalid_argument(
                "weights",
                format!("unsupported greyscale weighting {other}, expected 1, 2 or 3"),
            )),
        }
    }
}

/// A named colormap: the crate's canonical color representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTable {
    name: String,
    data: TableData,
}

impl ColorTable {
    /// Listed table from already validated colors.
    pub fn listed(name: impl Into<String>, colors: Vec<Rgba>) -> Result<Self> {
        if colors.is_empty() {
            return Err(CmapError::invalid_argument(
                "colors",
                "a listed colormap needs at least one color",
            ));
        }
        if let Some(bad) = colors
            .iter()
            .find(|c| !c.to_array().iter().all(|v| in_unit_range(*v)))
        {
            return Err(CmapError::invalid_argument(
                "colors",
                format!("color {bad:?} is outside [0, 1]"),
            ));
        }
        Ok(Self {
            name: name.into(),
            data: TableData::Listed(colors),
        })
    }

    /// Listed table from raw 3 or 4 component tuples.
    pub fn from_components<C: AsRef<[f64]>>(name: impl Into<String>, tuples: &[C]) -> Result<Self> {
        let colors = tuples
            .iter()
            .map(|t| Rgba::from_components(t.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::listed(name, colors)
    }

    pub fn segmented(name: impl Into<String>, data: SegmentData) -> Result<Self> {
        data.validate()?;
        Ok(Self {
            name: name.into(),
            data: TableData::Segmented(data),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &TableData {
        &self.data
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_listed(&self) -> bool {
        matches!(self.data, TableData::Listed(_))
    }

    pub fn is_segmented(&self) -> bool {
        matches!(self.data, TableData::Segmented(_))
    }

    /// Number of colors (listed) or red-channel breakpoints (segmented).
    pub fn len(&self) -> usize {
        match &self.data {
            TableData::Listed(colors) => colors.len(),
            TableData::Segmented(segments) => segments.red.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of discrete colors the table resolves to.
    pub fn resolution(&self) -> usize {
        match &self.data {
            TableData::Listed(colors) => colors.len(),
            TableData::Segmented(_) => DEFAULT_RESOLUTION,
        }
    }

    pub fn has_alpha(&self) -> bool {
        match &self.data {
            TableData::Listed(colors) => colors.iter().any(|c| !c.is_opaque()),
            TableData::Segmented(segments) => segments.alpha.is_some(),
        }
    }

    /// Evaluate the table at `t` in [0, 1].
    ///
    /// Values outside the range are clamped; NaN maps to transparent black.
    pub fn sample(&self, t: f64) -> Rgba {
        if t.is_nan() {
            return Rgba::TRANSPARENT;
        }
        let t = t.clamp(0.0, 1.0);
        match &self.data {
            TableData::Listed(colors) => {
                let n = colors.len();
                let index = ((t * n as f64).floor() as usize).min(n - 1);
                colors[index]
            }
            TableData::Segmented(segments) => segments.evaluate(t),
        }
    }

    /// `n` evenly spaced samples, both ends included.
    pub fn sample_n(&self, n: usize) -> Vec<Rgba> {
        sample_positions(n).map(|t| self.sample(t)).collect()
    }

    /// Reverse the direction of the colormap.
    ///
    /// The name gains a `_r` suffix, or loses it when already reversed.
    pub fn reverse(&self) -> Result<ColorTable> {
        let data = match &self.data {
            TableData::Listed(colors) => TableData::Listed(colors.iter().rev().copied().collect()),
            TableData::Segmented(segments) => TableData::Segmented(segments.map_channels(|points| {
                let mut reversed: Vec<Breakpoint> = points
                    .iter()
                    .rev()
                    .map(|p| Breakpoint::new(1.0 - p.x, p.y_out, p.y_in))
                    .collect();
                reversed.sort_by(|a, b| a.x.total_cmp(&b.x));
                reversed
            })),
        };
        let name = match self.name.strip_suffix("_r") {
            Some(base) => base.to_string(),
            None => format!("{}_r", self.name),
        };
        debug!(colormap = %self.name, reversed = %name, "Reversed colormap");
        Ok(ColorTable { name, data })
    }

    /// Convert a listed table into evenly spaced continuous segments.
    pub fn to_gradient(&self) -> Result<ColorTable> {
        match &self.data {
            TableData::Listed(colors) => {
                let segments = SegmentData::from_colors(colors, self.has_alpha());
                ColorTable::segmented(self.name.clone(), segments)
            }
            TableData::Segmented(_) => {
                warn!(
                    colormap = %self.name,
                    "Colormap is already segmented, gradient conversion is a no-op"
                );
                Ok(self.clone())
            }
        }
    }

    /// Greyscale version of the table, sampled at its resolution.
    pub fn convert_to_greyscale(&self, weights: GreyscaleWeights) -> Result<ColorTable> {
        let keep_alpha = self.has_alpha();
        let grey: Vec<Rgba> = self
            .sample_n(self.resolution())
            .into_iter()
            .map(|c| {
                let l = weights.luminance(&c).clamp(0.0, 1.0);
                Rgba::new(l, l, l, c.a)
            })
            .collect();
        let segments = SegmentData::from_colors(&grey, keep_alpha);
        ColorTable::segmented(format!("{}_grey", self.name), segments)
    }
}

/// `n` evenly spaced positions over [0, 1]; a single sample sits at 0.
pub fn sample_positions(n: usize) -> impl Iterator<Item = f64> {
    (0..n).map(move |i| if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn three_colors() -> ColorTable {
        ColorTable::listed(
            "rgb",
            vec![
                Rgba::rgb(1.0, 0.0, 0.0),
                Rgba::rgb(0.0, 1.0, 0.0),
                Rgba::rgb(0.0, 0.0, 1.0),
            ],
        )
        .unwrap()
    }

    fn ramp_with_jump() -> ColorTable {
        let red = vec![
            Breakpoint::continuous(0.0, 0.0),
            Breakpoint::new(0.5, 1.0, 0.2),
            Breakpoint::continuous(1.0, 0.6),
        ];
        let flat = vec![
            Breakpoint::continuous(0.0, 0.5),
            Breakpoint::continuous(1.0, 0.5),
        ];
        ColorTable::segmented("jump", SegmentData::new(red, flat.clone(), flat)).unwrap()
    }

    #[test]
    fn test_component_validation() {
        assert!(Rgba::from_components(&[0.1, 0.2, 0.3]).is_ok());
        assert_eq!(
            Rgba::from_components(&[0.1, 0.2, 0.3, 0.5]).unwrap().a,
            0.5
        );
        assert!(Rgba::from_components(&[0.1, 0.2]).is_err());
        assert!(Rgba::from_components(&[0.1, 0.2, 0.3, 0.4, 0.5]).is_err());
        assert!(Rgba::from_components(&[1.5, 0.2, 0.3]).is_err());
    }

    #[test]
    fn test_segment_validation() {
        let ok = vec![
            Breakpoint::continuous(0.0, 0.0),
            Breakpoint::continuous(1.0, 1.0),
        ];
        let not_ending_at_one = vec![
            Breakpoint::continuous(0.0, 0.0),
            Breakpoint::continuous(0.8, 1.0),
        ];
        let unsorted = vec![
            Breakpoint::continuous(0.0, 0.0),
            Breakpoint::continuous(0.7, 0.0),
            Breakpoint::continuous(0.3, 0.0),
            Breakpoint::continuous(1.0, 1.0),
        ];
        let data = SegmentData::new(ok.clone(), ok.clone(), ok.clone());
        assert!(data.validate().is_ok());
        let data = SegmentData::new(ok.clone(), not_ending_at_one, ok.clone());
        assert!(data.validate().is_err());
        let data = SegmentData::new(ok.clone(), ok.clone(), unsorted);
        assert!(data.validate().is_err());
        let data = SegmentData::new(ok.clone(), ok.clone(), ok)
            .with_alpha(vec![Breakpoint::continuous(0.0, 2.0)]);
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_empty_listed_rejected() {
        assert!(ColorTable::listed("empty", Vec::new()).is_err());
    }

    #[test]
    fn test_listed_sampling_uses_index_lookup() {
        let table = three_colors();
        assert_eq!(table.sample(0.0), Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(table.sample(0.32), Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(table.sample(0.5), Rgba::rgb(0.0, 1.0, 0.0));
        assert_eq!(table.sample(1.0), Rgba::rgb(0.0, 0.0, 1.0));
        assert_eq!(table.sample(7.0), Rgba::rgb(0.0, 0.0, 1.0));
        assert_eq!(table.sample(f64::NAN), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_segmented_sampling_honours_discontinuity() {
        let table = ramp_with_jump();
        assert!(approx(table.sample(0.0).r, 0.0));
        assert!(approx(table.sample(0.25).r, 0.5));
        // exactly at the jump the incoming value wins
        assert!(approx(table.sample(0.5).r, 1.0));
        assert!(approx(table.sample(0.75).r, 0.4));
        assert!(approx(table.sample(1.0).r, 0.6));
        assert!(approx(table.sample(0.3).g, 0.5));
        assert!(approx(table.sample(0.3).a, 1.0));
    }

    #[test]
    fn test_limits_at_discontinuity() {
        let TableData::Segmented(segments) = ramp_with_jump().data().clone() else {
            panic!("expected a segmented table");
        };
        let (below, above) = segments.limits_at(0.5);
        assert!(approx(below.r, 1.0));
        assert!(approx(above.r, 0.2));
        assert!(approx(below.g, 0.5) && approx(above.g, 0.5));

        let (below, above) = segments.limits_at(0.25);
        assert_eq!(below, above);
        assert!(approx(below.r, 0.5));
    }

    #[test]
    fn test_reverse_listed_twice_is_identity() {
        let table = three_colors();
        let reversed = table.reverse().unwrap();
        assert_eq!(reversed.name(), "rgb_r");
        assert_eq!(reversed.sample(0.0), Rgba::rgb(0.0, 0.0, 1.0));
        let back = reversed.reverse().unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_reverse_segmented_swaps_sides() {
        let table = ramp_with_jump();
        let reversed = table.reverse().unwrap();
        let TableData::Segmented(segments) = reversed.data() else {
            panic!("reverse changed the table kind");
        };
        assert_eq!(segments.red[1], Breakpoint::new(0.5, 0.2, 1.0));
        assert!(approx(segments.red[0].x, 0.0));
        assert!(approx(segments.red[0].y_out, 0.6));

        let back = reversed.reverse().unwrap();
        let (TableData::Segmented(a), TableData::Segmented(b)) = (back.data(), table.data()) else {
            panic!("reverse changed the table kind");
        };
        for (p, q) in a.red.iter().zip(&b.red) {
            assert!(approx(p.x, q.x) && approx(p.y_in, q.y_in) && approx(p.y_out, q.y_out));
        }
    }

    #[test]
    fn test_to_gradient_endpoints() {
        let table = three_colors();
        let gradient = table.to_gradient().unwrap();
        assert!(gradient.is_segmented());
        assert_eq!(gradient.len(), 3);
        assert_eq!(gradient.sample(0.0), Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(gradient.sample(1.0), Rgba::rgb(0.0, 0.0, 1.0));
        assert!(approx(gradient.sample(0.25).r, 0.5));
        assert!(approx(gradient.sample(0.25).g, 0.5));

        // segmented input comes back unchanged
        assert_eq!(gradient.to_gradient().unwrap(), gradient);
    }

    #[test]
    fn test_to_gradient_single_color() {
        let table = ColorTable::listed("one", vec![Rgba::rgb(0.2, 0.4, 0.6)]).unwrap();
        let gradient = table.to_gradient().unwrap();
        assert_eq!(gradient.len(), 2);
        assert_eq!(gradient.sample(0.5), Rgba::rgb(0.2, 0.4, 0.6));
    }

    #[test]
    fn test_greyscale_weights() {
        let color = Rgba::rgb(1.0, 0.0, 0.0);
        assert!(approx(GreyscaleWeights::Rec709.luminance(&color), 0.2126));
        assert!(approx(GreyscaleWeights::Rec601.luminance(&color), 0.299));
        assert!(approx(
            GreyscaleWeights::Perceptual.luminance(&color),
            0.299_f64.sqrt()
        ));
        assert_eq!(GreyscaleWeights::default(), GreyscaleWeights::Rec709);
        assert!(GreyscaleWeights::try_from(0).is_err());
        assert!(GreyscaleWeights::try_from(4).is_err());
    }

    #[test]
    fn test_greyscale_has_equal_channels() {
        for selector in 1..=3 {
            let weights = GreyscaleWeights::try_from(selector).unwrap();
            for table in [three_colors(), ramp_with_jump()] {
                let grey = table.convert_to_greyscale(weights).unwrap();
                assert!(grey.name().ends_with("_grey"));
                assert_eq!(grey.len(), table.resolution());
                for c in grey.sample_n(57) {
                    assert!(approx(c.r, c.g) && approx(c.g, c.b), "{c:?}");
                }
            }
        }
    }

    #[test]
    fn test_greyscale_keeps_alpha() {
        let table = ColorTable::listed(
            "fade",
            vec![Rgba::new(1.0, 1.0, 1.0, 0.0), Rgba::new(1.0, 1.0, 1.0, 1.0)],
        )
        .unwrap();
        let grey = table.convert_to_greyscale(GreyscaleWeights::Rec601).unwrap();
        assert!(grey.has_alpha());
        assert!(approx(grey.sample(0.0).a, 0.0));
        assert!(approx(grey.sample(1.0).a, 1.0));
    }

    #[test]
    fn test_sample_positions() {
        let xs: Vec<f64> = sample_positions(5).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(sample_positions(1).collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(sample_positions(0).count(), 0);
    }
}
