//! Ranh giới với lớp hiển thị: trait `RenderSurface` và mô hình giữ lại `Scene`.

use serde::{Deserialize, Serialize};

use crate::config::{ChronologyConfig, Margin};
use crate::layout::BarLayout;
use crate::scale::AxisTick;

/// Kích thước và kiểu dáng của bề mặt vẽ cho một khung hình.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Canvas {
    pub full_width: f64,
    pub full_height: f64,
    pub margin: Margin,
    pub width: f64,
    pub height: f64,
    pub font_size: String,
    pub axis_colour: String,
    pub responsive: bool,
}

impl Canvas {
    pub fn from_config(config: &ChronologyConfig) -> Self {
        Self {
            full_width: config.full_width,
            full_height: config.full_height,
            margin: config.margin,
            width: config.width(),
            height: config.height(),
            font_size: config.font_size.clone(),
            axis_colour: config.axis_colour.clone(),
            responsive: config.responsive,
        }
    }
}

/// Bảng chi tiết của sự kiện đang chọn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailsPanel {
    pub index: usize,
    pub date_label: String,
    pub body: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

/// Bề mặt nhận lệnh vẽ từ `ChronologyView`.
pub trait RenderSurface {
    /// Bắt đầu khung hình mới: xóa trục và thanh cũ.
    fn begin_frame(&mut self, canvas: &Canvas);
    fn draw_axis(&mut self, ticks: &[AxisTick]);
    fn draw_bars(&mut self, bars: &[BarLayout]);
    /// Đánh dấu đúng một thanh (hoặc không thanh nào) là đang chọn.
    fn mark_selected(&mut self, index: Option<usize>);
    fn show_details(&mut self, panel: &DetailsPanel);
    fn clear_details(&mut self);
}

/// Bản ghi những gì đang hiển thị; lớp SVG và lớp UI đọc lại từ đây.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub canvas: Option<Canvas>,
    pub ticks: Vec<AxisTick>,
    pub bars: Vec<BarLayout>,
    pub selected: Option<usize>,
    pub details: Option<DetailsPanel>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bar(&self, index: usize) -> Option<&BarLayout> {
        self.bars.iter().find(|bar| bar.index == index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}

impl RenderSurface for Scene {
    fn begin_frame(&mut self, canvas: &Canvas) {
        self.canvas = Some(canvas.clone());
        self.ticks.clear();
        self.bars.clear();
    }

    fn draw_axis(&mut self, ticks: &[AxisTick]) {
        self.ticks = ticks.to_vec();
    }

    fn draw_bars(&mut self, bars: &[BarLayout]) {
        self.bars = bars.to_vec();
    }

    fn mark_selected(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    fn show_details(&mut self, panel: &DetailsPanel) {
        self.details = Some(panel.clone());
    }

    fn clear_details(&mut self) {
        self.details = None;
    }
}
