use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, TREND_Y_HEADROOM, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{EmphasisStyle, TooltipOffset};
use crate::render::Color;

/// Axis line, tick and title styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub line_color: Color,
    pub label_color: Color,
    pub title_color: Color,
    pub line_width_px: f64,
    pub tick_length_px: f64,
    pub label_font_size_px: f64,
    pub title_font_size_px: f64,
    /// Distance from the X axis line to the top of its title.
    pub x_title_offset_px: f64,
    /// Distance from the Y axis line to the rotated Y title.
    pub y_title_offset_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            line_color: Color::from_rgb8(0xd1, 0xd5, 0xdb),
            label_color: Color::from_rgb8(0xd1, 0xd5, 0xdb),
            title_color: Color::rgb(1.0, 1.0, 1.0),
            line_width_px: 1.0,
            tick_length_px: 6.0,
            label_font_size_px: 10.0,
            title_font_size_px: 12.0,
            x_title_offset_px: 28.0,
            y_title_offset_px: 40.0,
        }
    }
}

/// Tooltip box styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    pub background: Color,
    pub text_color: Color,
    pub font_size_px: f64,
    pub line_height_px: f64,
    pub padding_px: f64,
    pub corner_radius_px: f64,
    /// Rough glyph width used to size the box without a text shaper.
    pub char_width_px: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x33, 0x33, 0x33),
            text_color: Color::rgb(1.0, 1.0, 1.0),
            font_size_px: 12.0,
            line_height_px: 16.0,
            padding_px: 8.0,
            corner_radius_px: 5.0,
            char_width_px: 6.5,
        }
    }
}

/// Series colors and shapes for both chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesStyle {
    pub trend_line_color: Color,
    pub trend_line_width_px: f64,
    pub trend_marker_color: Color,
    pub centroid_color: Color,
    /// Approximate centroid glyph area in px².
    pub centroid_size_px2: f64,
    /// Space above the highest prediction on the trend Y axis.
    pub trend_y_headroom: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            trend_line_color: Color::from_rgb8(0x69, 0xb3, 0xa2),
            trend_line_width_px: 2.0,
            trend_marker_color: Color::from_rgb8(0xff, 0xab, 0x00),
            centroid_color: Color::rgb(1.0, 0.0, 0.0),
            centroid_size_px2: 200.0,
            trend_y_headroom: TREND_Y_HEADROOM,
        }
    }
}

/// Chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their own settings;
/// every field is optional in JSON and falls back to the scatter preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// Approximate tick count per axis.
    pub tick_count: usize,
    pub axis_style: AxisStyle,
    pub tooltip_style: TooltipStyle,
    pub tooltip_offset: TooltipOffset,
    pub emphasis: EmphasisStyle,
    pub series_style: SeriesStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::cluster_scatter()
    }
}

impl ChartConfig {
    /// 800x600 cluster chart over the two PCA components.
    #[must_use]
    pub fn cluster_scatter() -> Self {
        Self {
            viewport: Viewport::new(800, 600),
            margins: Margins::new(20.0, 30.0, 50.0, 50.0),
            x_axis_title: "PCA Component 1".to_owned(),
            y_axis_title: "PCA Component 2".to_owned(),
            tick_count: 10,
            axis_style: AxisStyle::default(),
            tooltip_style: TooltipStyle::default(),
            tooltip_offset: TooltipOffset::default(),
            emphasis: EmphasisStyle::default(),
            series_style: SeriesStyle::default(),
        }
    }

    /// 600x400 chart of predictions in arrival order.
    #[must_use]
    pub fn prediction_trend() -> Self {
        Self {
            viewport: Viewport::new(600, 400),
            margins: Margins::new(20.0, 30.0, 60.0, 70.0),
            x_axis_title: "Prediction Number".to_owned(),
            y_axis_title: "Predicted Fuel Efficiency (MPG)".to_owned(),
            axis_style: AxisStyle {
                y_title_offset_px: 50.0,
                ..AxisStyle::default()
            },
            ..Self::cluster_scatter()
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        x_axis_title: impl Into<String>,
        y_axis_title: impl Into<String>,
    ) -> Self {
        self.x_axis_title = x_axis_title.into();
        self.y_axis_title = y_axis_title.into();
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_emphasis(mut self, emphasis: EmphasisStyle) -> Self {
        self.emphasis = emphasis;
        self
    }

    #[must_use]
    pub fn with_tooltip_offset(mut self, tooltip_offset: TooltipOffset) -> Self {
        self.tooltip_offset = tooltip_offset;
        self
    }

    #[must_use]
    pub fn with_series_style(mut self, series_style: SeriesStyle) -> Self {
        self.series_style = series_style;
        self
    }

    /// Plot rectangle implied by viewport and margins.
    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::new(self.viewport, self.margins)
    }

    pub fn validate(&self) -> ChartResult<PlotArea> {
        let area = self.plot_area()?;
        if self.tick_count == 0 {
            return Err(ChartError::InvalidConfig(
                "tick_count must be >= 1".to_owned(),
            ));
        }
        self.emphasis.validate()?;

        for (name, value) in [
            ("axis line_width_px", self.axis_style.line_width_px),
            ("axis label_font_size_px", self.axis_style.label_font_size_px),
            ("axis title_font_size_px", self.axis_style.title_font_size_px),
            ("tooltip font_size_px", self.tooltip_style.font_size_px),
            ("tooltip line_height_px", self.tooltip_style.line_height_px),
            ("tooltip char_width_px", self.tooltip_style.char_width_px),
            ("series trend_line_width_px", self.series_style.trend_line_width_px),
            ("series centroid_size_px2", self.series_style.centroid_size_px2),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("axis tick_length_px", self.axis_style.tick_length_px),
            ("axis x_title_offset_px", self.axis_style.x_title_offset_px),
            ("axis y_title_offset_px", self.axis_style.y_title_offset_px),
            ("tooltip padding_px", self.tooltip_style.padding_px),
            ("tooltip corner_radius_px", self.tooltip_style.corner_radius_px),
            ("series trend_y_headroom", self.series_style.trend_y_headroom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.tooltip_offset.dx.is_finite() || !self.tooltip_offset.dy.is_finite() {
            return Err(ChartError::InvalidConfig(
                "tooltip offset must be finite".to_owned(),
            ));
        }

        for color in [
            self.axis_style.line_color,
            self.axis_style.label_color,
            self.axis_style.title_color,
            self.tooltip_style.background,
            self.tooltip_style.text_color,
            self.series_style.trend_line_color,
            self.series_style.trend_marker_color,
            self.series_style.centroid_color,
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(err.to_string()))?;
        }

        Ok(area)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize chart config: {e}")))
    }
}
