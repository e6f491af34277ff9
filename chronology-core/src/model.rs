//! Kiểu dữ liệu cơ bản: sự kiện, khoảng thời gian, hình học thanh.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ChronologyError, ChronologyResult};

/// Số mili giây trong một ngày.
pub const ONE_DAY_MS: f64 = 86_400_000.0;

/// Định dạng ngày của dữ liệu đầu vào.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Một sự kiện trên chronology.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub body: String,
}

impl Event {
    pub fn new(date: NaiveDate, body: impl Into<String>) -> Self {
        Self {
            date,
            body: body.into(),
        }
    }

    /// Thời điểm nửa đêm của ngày sự kiện, dùng để tra thang thời gian.
    pub fn instant(&self) -> NaiveDateTime {
        midnight(self.date)
    }
}

/// Đọc ngày dạng `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub(crate) fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Cửa sổ thời gian đang hiển thị, luôn có `start <= end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ChronologyError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> ChronologyResult<Self> {
        if start > end {
            return Err(ChronologyError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> ChronologyResult<Self> {
        Self::new(midnight(start), midnight(end))
    }

    /// Khoảng bao trùm mọi sự kiện (ngày nhỏ nhất tới ngày lớn nhất).
    pub fn extent(events: &[Event]) -> ChronologyResult<Self> {
        let first = events.first().ok_or(ChronologyError::EmptyDataset)?;
        let (min, max) = events
            .iter()
            .fold((first.date, first.date), |(min, max), event| {
                (min.min(event.date), max.max(event.date))
            });
        Self::from_dates(min, max)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Số ngày (có phần lẻ) giữa hai đầu mút.
    pub fn day_span(&self) -> f64 {
        self.span_ms() / ONE_DAY_MS
    }

    pub(crate) fn span_ms(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Chiều cao một thanh "một ngày" và hệ số nén trục dọc.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarGeometry {
    pub height: f64,
    pub vertical_scale_factor: f64,
}

/// Trạng thái chọn: tối đa một sự kiện.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_index: Option<usize>,
}
