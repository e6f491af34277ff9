//! Tùy chọn hiển thị và cấu hình đã phân giải.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChronologyError, ChronologyResult};
use crate::model::{DateRange, Event};

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 400.0;
pub const DEFAULT_FONT_SIZE: &str = "18px";
pub const DEFAULT_AXIS_COLOUR: &str = "#262626";
pub const DEFAULT_MIN_BAR_HEIGHT: f64 = 2.0;
pub const DEFAULT_MAX_BAR_HEIGHT: f64 = 48.0;
pub const DEFAULT_BAR_OFFSET: f64 = 10.0;
pub const DEFAULT_DETAILS_PANEL_WIDTH: f64 = 400.0;

/// Lề quanh vùng vẽ (pixel). Cạnh nào thiếu lấy giá trị mặc định.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 30.0,
        }
    }
}

/// Tùy chọn do người gọi truyền vào; khóa nào thiếu sẽ lấy giá trị mặc định.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChronologyOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Option<Margin>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub font_size: Option<String>,
    pub axis_colour: Option<String>,
    pub responsive: Option<bool>,
    pub min_bar_height: Option<f64>,
    pub max_bar_height: Option<f64>,
    pub bar_offset: Option<f64>,
    pub details_panel_width: Option<f64>,
}

/// Cận dưới/trên cho chiều cao thanh.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BarBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for BarBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_BAR_HEIGHT,
            max: DEFAULT_MAX_BAR_HEIGHT,
        }
    }
}

/// Cấu hình đầy đủ sau khi áp giá trị mặc định và kiểm tra hợp lệ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChronologyConfig {
    pub full_width: f64,
    pub full_height: f64,
    pub margin: Margin,
    pub range: DateRange,
    pub font_size: String,
    pub axis_colour: String,
    pub responsive: bool,
    pub bar: BarBounds,
    pub bar_offset: f64,
    pub details_panel_width: f64,
}

impl ChronologyConfig {
    /// Phân giải tùy chọn dựa trên tập sự kiện (dùng cho `start`/`end` mặc định).
    pub fn resolve(options: &ChronologyOptions, events: &[Event]) -> ChronologyResult<Self> {
        let extent = DateRange::extent(events)?;

        let full_width = options.width.unwrap_or(DEFAULT_WIDTH);
        let full_height = options.height.unwrap_or(DEFAULT_HEIGHT);
        let margin = options.margin.unwrap_or_default();

        let bar = BarBounds {
            min: options.min_bar_height.unwrap_or(DEFAULT_MIN_BAR_HEIGHT),
            max: options.max_bar_height.unwrap_or(DEFAULT_MAX_BAR_HEIGHT),
        };

        let range = match (options.start, options.end) {
            (None, None) => extent,
            (start, end) => DateRange::from_dates(
                start.unwrap_or(extent.start().date()),
                end.unwrap_or(extent.end().date()),
            )?,
        };

        let config = Self {
            full_width,
            full_height,
            margin,
            range,
            font_size: options
                .font_size
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_SIZE.to_string()),
            axis_colour: options
                .axis_colour
                .clone()
                .unwrap_or_else(|| DEFAULT_AXIS_COLOUR.to_string()),
            responsive: options.responsive.unwrap_or(true),
            bar,
            bar_offset: options.bar_offset.unwrap_or(DEFAULT_BAR_OFFSET),
            details_panel_width: options
                .details_panel_width
                .unwrap_or(DEFAULT_DETAILS_PANEL_WIDTH),
        };
        config.validate()?;
        Ok(config)
    }

    /// Kiểm tra vùng vẽ dương, `0 <= bar.min <= bar.max` và `range.start <= range.end`.
    pub fn validate(&self) -> ChronologyResult<()> {
        let (width, height) = (self.width(), self.height());
        if !(width > 0.0 && height > 0.0) {
            return Err(ChronologyError::InvalidDimensions { width, height });
        }
        if !(self.bar.min >= 0.0 && self.bar.min <= self.bar.max) {
            return Err(ChronologyError::InvalidDimensions { width, height });
        }
        DateRange::new(self.range.start(), self.range.end())?;
        Ok(())
    }

    /// Chiều rộng vùng vẽ (đã trừ lề).
    pub fn width(&self) -> f64 {
        self.full_width - self.margin.left - self.margin.right
    }

    /// Chiều cao vùng vẽ (đã trừ lề).
    pub fn height(&self) -> f64 {
        self.full_height - self.margin.top - self.margin.bottom
    }
}
