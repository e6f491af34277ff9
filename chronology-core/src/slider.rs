//! Mô hình thanh trượt hai đầu lọc cửa sổ thời gian.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ChronologyError, ChronologyResult};
use crate::model::{DateRange, Event};

/// Đầu kéo của thanh trượt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    Start,
    End,
}

/// Thanh trượt gắn với `[min(date), max(date)]` của tập dữ liệu, tính bằng mili giây epoch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RangeSlider {
    min_ms: i64,
    max_ms: i64,
    start_ms: i64,
    end_ms: i64,
}

impl RangeSlider {
    /// Thanh trượt phủ toàn bộ tập dữ liệu, hai đầu ở biên.
    pub fn for_events(events: &[Event]) -> ChronologyResult<Self> {
        let extent = DateRange::extent(events)?;
        let min_ms = to_millis(extent.start());
        let max_ms = to_millis(extent.end());
        Ok(Self {
            min_ms,
            max_ms,
            start_ms: min_ms,
            end_ms: max_ms,
        })
    }

    /// Đặt hai đầu theo một khoảng có sẵn (ví dụ khoảng trong cấu hình).
    pub fn with_range(mut self, range: &DateRange) -> Self {
        self.start_ms = to_millis(range.start()).clamp(self.min_ms, self.max_ms);
        self.end_ms = to_millis(range.end()).clamp(self.start_ms, self.max_ms);
        self
    }

    pub fn bounds_ms(&self) -> (i64, i64) {
        (self.min_ms, self.max_ms)
    }

    pub fn values_ms(&self) -> (i64, i64) {
        (self.start_ms, self.end_ms)
    }

    /// Di chuyển một đầu kéo. Giá trị được kẹp vào biên và không vượt qua đầu còn lại.
    pub fn update(&mut self, handle: Handle, value_ms: f64) -> ChronologyResult<DateRange> {
        if !value_ms.is_finite() {
            tracing::warn!(?handle, value_ms, "bỏ qua giá trị thanh trượt không hữu hạn");
            return self.range();
        }
        let value = value_ms.round() as i64;
        match handle {
            Handle::Start => self.start_ms = value.clamp(self.min_ms, self.end_ms),
            Handle::End => self.end_ms = value.clamp(self.start_ms, self.max_ms),
        }
        self.range()
    }

    /// Khoảng ngày tương ứng với vị trí hai đầu kéo hiện tại.
    pub fn range(&self) -> ChronologyResult<DateRange> {
        DateRange::new(from_millis(self.start_ms)?, from_millis(self.end_ms)?)
    }
}

fn to_millis(instant: NaiveDateTime) -> i64 {
    instant.and_utc().timestamp_millis()
}

fn from_millis(value: i64) -> ChronologyResult<NaiveDateTime> {
    DateTime::from_timestamp_millis(value)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| ChronologyError::Parse(format!("Mốc thời gian ngoài phạm vi: {value}")))
}
