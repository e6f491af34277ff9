//! Tính toán bố cục thanh thuần túy, không phụ thuộc lớp hiển thị.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{BarGeometry, DateRange, Event};
use crate::scale::TimeScale;

/// Chiều cao thanh "một ngày" và hệ số nén trục dọc cho khoảng đang xem.
///
/// Chiều cao tự nhiên là `pixel_height / (day_span + 1)`, kẹp vào
/// `[min_bar_height, max_bar_height]`. Hệ số nén `pixel_height / (pixel_height + height)`
/// giữ thanh cao nhất không tràn khỏi đáy vùng vẽ và được áp đều cho mọi thanh.
pub fn compute_bar_geometry(
    range: &DateRange,
    pixel_height: f64,
    min_bar_height: f64,
    max_bar_height: f64,
) -> BarGeometry {
    let natural_height = pixel_height / (range.day_span() + 1.0);
    let height = natural_height.max(min_bar_height).min(max_bar_height);

    BarGeometry {
        height,
        vertical_scale_factor: pixel_height / (pixel_height + height),
    }
}

/// Hình chữ nhật của một sự kiện trên vùng vẽ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarLayout {
    /// Vị trí sự kiện trong tập dữ liệu gốc.
    pub index: usize,
    pub date: NaiveDate,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Tra thang thời gian rồi nén theo hệ số; thứ tự hai bước này là cố định.
pub fn bar_y(scale: &TimeScale, geometry: &BarGeometry, date: NaiveDate) -> f64 {
    scale.map_date(date) * geometry.vertical_scale_factor
}

/// Dựng thanh cho mọi sự kiện nằm trong khoảng của `scale` (gồm cả hai đầu mút).
pub fn layout_bars(
    events: &[Event],
    scale: &TimeScale,
    geometry: &BarGeometry,
    drawable_width: f64,
    bar_offset: f64,
) -> Vec<BarLayout> {
    let range = scale.range();
    events
        .iter()
        .enumerate()
        .filter(|(_, event)| range.contains(event.instant()))
        .map(|(index, event)| BarLayout {
            index,
            date: event.date,
            x: bar_offset,
            y: bar_y(scale, geometry, event.date),
            width: drawable_width - bar_offset,
            height: geometry.height,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_date;
    use proptest::prelude::*;

    fn date(value: &str) -> NaiveDate {
        parse_date(value).unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::from_dates(date(start), date(end)).unwrap()
    }

    fn sample_events() -> Vec<Event> {
        vec![
            Event::new(date("2020-01-01"), "Năm mới"),
            Event::new(date("2020-01-02"), "Ngày thứ hai"),
            Event::new(date("2020-06-01"), "Mùa hè"),
        ]
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn full_range_is_not_clamped() {
        let geometry = compute_bar_geometry(&range("2020-01-01", "2020-06-01"), 1000.0, 2.0, 48.0);
        assert!(approx(geometry.height, 1000.0 / 153.0));
        assert!(approx(
            geometry.vertical_scale_factor,
            1000.0 / (1000.0 + 1000.0 / 153.0)
        ));
        assert!((geometry.vertical_scale_factor - 0.9935).abs() < 1e-4);
    }

    #[test]
    fn narrow_range_clamps_to_max() {
        let geometry = compute_bar_geometry(&range("2020-01-01", "2020-01-02"), 1000.0, 2.0, 48.0);
        assert_eq!(geometry.height, 48.0);
        assert!(approx(geometry.vertical_scale_factor, 1000.0 / 1048.0));
    }

    #[test]
    fn single_day_range_is_finite() {
        let geometry = compute_bar_geometry(&range("2020-01-01", "2020-01-01"), 400.0, 2.0, 48.0);
        assert_eq!(geometry.height, 48.0);
        assert!(geometry.vertical_scale_factor.is_finite());
    }

    #[test]
    fn very_wide_range_clamps_to_min() {
        let geometry = compute_bar_geometry(&range("1900-01-01", "2020-01-01"), 1000.0, 2.0, 48.0);
        assert_eq!(geometry.height, 2.0);
    }

    #[test]
    fn non_positive_height_does_not_panic() {
        let geometry = compute_bar_geometry(&range("2020-01-01", "2020-06-01"), 0.0, 0.0, 48.0);
        assert_eq!(geometry.height, 0.0);
        assert!(geometry.vertical_scale_factor.is_nan());
    }

    #[test]
    fn bars_follow_scale_then_compression() {
        let events = sample_events();
        let full = range("2020-01-01", "2020-06-01");
        let scale = TimeScale::new(full, 1000.0);
        let geometry = compute_bar_geometry(&full, 1000.0, 2.0, 48.0);
        let bars = layout_bars(&events, &scale, &geometry, 710.0, 10.0);

        assert_eq!(bars.len(), 3);
        assert!(approx(bars[0].y, 1000.0 * geometry.vertical_scale_factor));
        assert_eq!(bars[2].y, 0.0);
        assert!(bars.iter().all(|bar| bar.x == 10.0 && bar.width == 700.0));
        assert!(bars.iter().all(|bar| bar.height == geometry.height));
    }

    #[test]
    fn bars_outside_the_window_are_skipped() {
        let events = sample_events();
        let narrow = range("2020-01-01", "2020-01-02");
        let scale = TimeScale::new(narrow, 1000.0);
        let geometry = compute_bar_geometry(&narrow, 1000.0, 2.0, 48.0);
        let bars = layout_bars(&events, &scale, &geometry, 500.0, 10.0);

        let indices: Vec<_> = bars.iter().map(|bar| bar.index).collect();
        assert_eq!(indices, [0, 1]);
    }

    fn arb_range() -> impl Strategy<Value = DateRange> {
        (0i64..20_000, 0i64..(400 * 86_400_000)).prop_map(|(start_day, span_ms)| {
            let start = date("1970-01-01").and_hms_opt(0, 0, 0).unwrap()
                + chrono::Duration::days(start_day);
            DateRange::new(start, start + chrono::Duration::milliseconds(span_ms)).unwrap()
        })
    }

    proptest! {
        #[test]
        fn height_stays_within_bounds(
            range in arb_range(),
            pixel_height in 1.0f64..5000.0,
            min in 0.0f64..20.0,
            extra in 0.0f64..100.0,
        ) {
            let max = min + extra;
            let geometry = compute_bar_geometry(&range, pixel_height, min, max);
            prop_assert!(geometry.height >= min && geometry.height <= max);
            prop_assert!(geometry.vertical_scale_factor.is_finite());
            if geometry.height > 0.0 {
                prop_assert!(geometry.vertical_scale_factor < 1.0);
            }
        }

        #[test]
        fn widening_never_grows_bars(
            range in arb_range(),
            widen_days in 0i64..1000,
            pixel_height in 1.0f64..5000.0,
        ) {
            let wider = DateRange::new(
                range.start(),
                range.end() + chrono::Duration::days(widen_days),
            ).unwrap();
            let narrow = compute_bar_geometry(&range, pixel_height, 2.0, 48.0);
            let wide = compute_bar_geometry(&wider, pixel_height, 2.0, 48.0);
            prop_assert!(wide.height <= narrow.height);
        }

        #[test]
        fn recomputing_is_idempotent(range in arb_range(), pixel_height in 1.0f64..5000.0) {
            prop_assert_eq!(
                compute_bar_geometry(&range, pixel_height, 2.0, 48.0),
                compute_bar_geometry(&range, pixel_height, 2.0, 48.0)
            );
        }
    }

    #[test]
    fn scale_factor_approaches_one_for_thin_bars() {
        let full = range("2020-01-01", "2020-06-01");
        let thin = compute_bar_geometry(&full, 1000.0, 0.0, 0.001);
        assert!(thin.vertical_scale_factor < 1.0);
        assert!(1.0 - thin.vertical_scale_factor < 1e-5);
    }
}
