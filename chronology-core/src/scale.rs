//! Thang thời gian tuyến tính cho trục dọc và các vạch chia.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::model::{midnight, DateRange, ONE_DAY_MS};

/// Số vạch chia mặc định trên trục ngày.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Ánh xạ `[range.start, range.end]` lên `[pixel_height, 0]`: ngày muộn nhất ở trên cùng.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    range: DateRange,
    pixel_height: f64,
}

/// Một vạch chia trên trục ngày.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisTick {
    pub date: NaiveDate,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickStep {
    Days(u32),
    Weeks(u32),
    Months(u32),
    Years(i32),
}

const TICK_LADDER: [TickStep; 15] = [
    TickStep::Days(1),
    TickStep::Days(2),
    TickStep::Weeks(1),
    TickStep::Weeks(2),
    TickStep::Months(1),
    TickStep::Months(3),
    TickStep::Months(6),
    TickStep::Years(1),
    TickStep::Years(2),
    TickStep::Years(5),
    TickStep::Years(10),
    TickStep::Years(20),
    TickStep::Years(50),
    TickStep::Years(100),
    TickStep::Years(500),
];

impl TickStep {
    fn approx_days(self) -> f64 {
        match self {
            TickStep::Days(n) => f64::from(n),
            TickStep::Weeks(n) => 7.0 * f64::from(n),
            TickStep::Months(n) => 30.4 * f64::from(n),
            TickStep::Years(n) => 365.25 * f64::from(n),
        }
    }

    fn label_format(self) -> &'static str {
        match self {
            TickStep::Days(_) | TickStep::Weeks(_) => "%b %d",
            TickStep::Months(_) => "%b %Y",
            TickStep::Years(_) => "%Y",
        }
    }

    fn accepts(self, date: NaiveDate) -> bool {
        match self {
            TickStep::Days(n) => (date.day() - 1) % n == 0,
            TickStep::Weeks(n) => {
                date.weekday().num_days_from_monday() == 0
                    && (date.iso_week().week() - 1) % n == 0
            }
            TickStep::Months(n) => date.day() == 1 && date.month0() % n == 0,
            TickStep::Years(n) => date.ordinal() == 1 && date.year().rem_euclid(n) == 0,
        }
    }

    /// Ngày ứng viên tiếp theo theo đơn vị cơ sở (ngày, đầu tháng, đầu năm).
    fn advance(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            TickStep::Days(_) | TickStep::Weeks(_) => date.succ_opt(),
            TickStep::Months(_) => {
                let (year, month) = if date.month() == 12 {
                    (date.year() + 1, 1)
                } else {
                    (date.year(), date.month() + 1)
                };
                NaiveDate::from_ymd_opt(year, month, 1)
            }
            TickStep::Years(_) => NaiveDate::from_ymd_opt(date.year() + 1, 1, 1),
        }
    }

    fn first_candidate(self, from: NaiveDate) -> Option<NaiveDate> {
        match self {
            TickStep::Days(_) | TickStep::Weeks(_) => Some(from),
            TickStep::Months(_) if from.day() == 1 => Some(from),
            TickStep::Months(_) => self.advance(from),
            TickStep::Years(_) if from.ordinal() == 1 => Some(from),
            TickStep::Years(_) => self.advance(from),
        }
    }
}

impl TimeScale {
    pub fn new(range: DateRange, pixel_height: f64) -> Self {
        Self {
            range,
            pixel_height,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn pixel_height(&self) -> f64 {
        self.pixel_height
    }

    /// Vị trí dọc (pixel) của một thời điểm. Miền suy biến trả về giữa vùng vẽ.
    pub fn map(&self, instant: NaiveDateTime) -> f64 {
        let span = self.range.span_ms();
        if span == 0.0 {
            return self.pixel_height / 2.0;
        }
        let offset = (instant - self.range.start()).num_milliseconds() as f64;
        self.pixel_height * (1.0 - offset / span)
    }

    pub fn map_date(&self, date: NaiveDate) -> f64 {
        self.map(midnight(date))
    }

    /// Vạch chia căn theo lịch, tối đa `count` vạch.
    pub fn ticks(&self, count: usize) -> Vec<AxisTick> {
        if count == 0 {
            return Vec::new();
        }
        let span_days = self.range.span_ms() / ONE_DAY_MS;
        let first_day = ceil_to_day(self.range.start());
        let last_day = self.range.end().date();

        for step in TICK_LADDER {
            if span_days / step.approx_days() > (count * 2) as f64 {
                continue;
            }
            if let Some(dates) = self.collect_ticks(step, first_day, last_day, count) {
                return dates
                    .into_iter()
                    .map(|date| AxisTick {
                        date,
                        y: self.map_date(date),
                        label: date.format(step.label_format()).to_string(),
                    })
                    .collect();
            }
        }
        Vec::new()
    }

    fn collect_ticks(
        &self,
        step: TickStep,
        first: NaiveDate,
        last: NaiveDate,
        count: usize,
    ) -> Option<Vec<NaiveDate>> {
        let mut dates = Vec::new();
        let mut cursor = step.first_candidate(first);
        while let Some(date) = cursor {
            if date > last {
                break;
            }
            if step.accepts(date) {
                dates.push(date);
                if dates.len() > count {
                    return None;
                }
            }
            cursor = step.advance(date);
        }
        Some(dates)
    }
}

fn ceil_to_day(instant: NaiveDateTime) -> NaiveDate {
    if instant.time() == NaiveTime::MIN {
        instant.date()
    } else {
        instant.date() + Duration::days(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_date;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::from_dates(parse_date(start).unwrap(), parse_date(end).unwrap()).unwrap()
    }

    #[test]
    fn latest_date_maps_to_the_top() {
        let scale = TimeScale::new(range("2020-01-01", "2020-01-11"), 1000.0);
        assert_eq!(scale.map_date(parse_date("2020-01-01").unwrap()), 1000.0);
        assert_eq!(scale.map_date(parse_date("2020-01-11").unwrap()), 0.0);
        assert_eq!(scale.map_date(parse_date("2020-01-06").unwrap()), 500.0);
    }

    #[test]
    fn degenerate_domain_maps_to_middle() {
        let scale = TimeScale::new(range("2020-01-01", "2020-01-01"), 800.0);
        assert_eq!(scale.map_date(parse_date("2020-01-01").unwrap()), 400.0);
        assert_eq!(scale.map_date(parse_date("2021-01-01").unwrap()), 400.0);
    }

    #[test]
    fn short_ranges_tick_daily() {
        let scale = TimeScale::new(range("2020-01-01", "2020-01-05"), 500.0);
        let ticks = scale.ticks(DEFAULT_TICK_COUNT);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0].label, "Jan 01");
        assert_eq!(ticks[0].y, 500.0);
        assert_eq!(ticks[4].y, 0.0);
    }

    #[test]
    fn half_year_ticks_by_month() {
        let scale = TimeScale::new(range("2020-01-01", "2020-06-01"), 1000.0);
        let ticks = scale.ticks(DEFAULT_TICK_COUNT);
        let labels: Vec<_> = ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Jan 2020", "Feb 2020", "Mar 2020", "Apr 2020", "May 2020", "Jun 2020"]
        );
    }

    #[test]
    fn decades_tick_by_year_multiples() {
        let scale = TimeScale::new(range("1990-03-01", "2020-06-01"), 1000.0);
        let ticks = scale.ticks(DEFAULT_TICK_COUNT);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= DEFAULT_TICK_COUNT);
        assert!(ticks.iter().all(|tick| tick.date.ordinal() == 1));
        assert_eq!(ticks[0].label, "1995");
    }

    #[test]
    fn tick_count_is_respected() {
        let scale = TimeScale::new(range("2020-01-01", "2020-01-31"), 1000.0);
        for count in [1, 3, 5, 10] {
            assert!(scale.ticks(count).len() <= count);
        }
        assert!(scale.ticks(0).is_empty());
    }
}
