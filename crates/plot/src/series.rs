use crate::Error;

/// How a series' line is stroked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl From<LineStyle> for egui_plot::LineStyle {
    fn from(style: LineStyle) -> Self {
        match style {
            LineStyle::Solid => Self::Solid,
            LineStyle::Dashed => Self::Dashed { length: 10.0 },
            LineStyle::Dotted => Self::Dotted { spacing: 5.0 },
        }
    }
}

/// A named sequence of `[x, y]` points drawn as a single line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    points: Vec<[f64; 2]>,
    style: LineStyle,
}

impl Series {
    /// Creates a solid series from `[x, y]` points.
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            points,
            style: LineStyle::Solid,
        }
    }

    /// Creates a solid series by pairing `x[i]` with `y[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the slices differ in length.
    pub fn from_xy(name: impl Into<String>, x: &[f64], y: &[f64]) -> Result<Self, Error> {
        let name = name.into();
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                name,
                x: x.len(),
                y: y.len(),
            });
        }

        let points = x.iter().zip(y).map(|(&x, &y)| [x, y]).collect();
        Ok(Self::new(name, points))
    }

    /// Sets the line style.
    #[must_use]
    pub fn style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    #[must_use]
    pub fn line_style(&self) -> LineStyle {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_xy_pairs_points_in_order() {
        let series = Series::from_xy("v", &[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0]).unwrap();
        assert_eq!(series.name(), "v");
        assert_eq!(series.points(), [[0.0, 5.0], [1.0, 6.0], [2.0, 7.0]]);
        assert_eq!(series.line_style(), LineStyle::Solid);
    }

    #[test]
    fn from_xy_rejects_length_mismatch() {
        let err = Series::from_xy("v", &[0.0, 1.0], &[5.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch { ref name, x: 2, y: 1 } if name == "v"
        ));
    }

    #[test]
    fn style_overrides_default() {
        let series = Series::new("i", vec![[0.0, 1.0]]).style(LineStyle::Dotted);
        assert_eq!(series.line_style(), LineStyle::Dotted);
    }

    #[test]
    fn styles_map_to_egui() {
        assert!(matches!(
            egui_plot::LineStyle::from(LineStyle::Solid),
            egui_plot::LineStyle::Solid
        ));
        assert!(matches!(
            egui_plot::LineStyle::from(LineStyle::Dashed),
            egui_plot::LineStyle::Dashed { .. }
        ));
        assert!(matches!(
            egui_plot::LineStyle::from(LineStyle::Dotted),
            egui_plot::LineStyle::Dotted { .. }
        ));
    }
}
