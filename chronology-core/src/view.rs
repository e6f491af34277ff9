//! Trạng thái giao diện: khoảng đang xem, sự kiện đang chọn và lệnh vẽ lại.

use tracing::debug;

use crate::config::{ChronologyConfig, ChronologyOptions};
use crate::error::{ChronologyError, ChronologyResult};
use crate::layout::{bar_y, compute_bar_geometry, layout_bars};
use crate::model::{BarGeometry, DateRange, Event, SelectionState};
use crate::scale::{TimeScale, DEFAULT_TICK_COUNT};
use crate::scene::{Canvas, DetailsPanel, RenderSurface};
use crate::slider::{Handle, RangeSlider};

/// Định dạng ngày trong bảng chi tiết.
const DETAILS_DATE_FORMAT: &str = "%B %-d, %Y";

/// Điều phối bố cục và bề mặt vẽ. Bề mặt được giữ trong view thay vì tra theo id toàn cục.
#[derive(Debug, Clone)]
pub struct ChronologyView<S> {
    events: Vec<Event>,
    config: ChronologyConfig,
    range: DateRange,
    selection: SelectionState,
    geometry: BarGeometry,
    surface: S,
}

impl<S: RenderSurface> ChronologyView<S> {
    /// Khởi tạo và vẽ khung hình đầu tiên.
    pub fn new(events: Vec<Event>, config: ChronologyConfig, surface: S) -> ChronologyResult<Self> {
        if events.is_empty() {
            return Err(ChronologyError::EmptyDataset);
        }
        config.validate()?;

        let range = config.range;
        let geometry = compute_bar_geometry(&range, config.height(), config.bar.min, config.bar.max);
        let mut view = Self {
            events,
            config,
            range,
            selection: SelectionState::default(),
            geometry,
            surface,
        };
        view.render();
        Ok(view)
    }

    /// Phân giải tùy chọn rồi khởi tạo.
    pub fn from_options(
        events: Vec<Event>,
        options: &ChronologyOptions,
        surface: S,
    ) -> ChronologyResult<Self> {
        let config = ChronologyConfig::resolve(options, &events)?;
        Self::new(events, config, surface)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn config(&self) -> &ChronologyConfig {
        &self.config
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn geometry(&self) -> BarGeometry {
        self.geometry
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn time_scale(&self) -> TimeScale {
        TimeScale::new(self.range, self.config.height())
    }

    /// Vẽ lại toàn bộ với trạng thái hiện tại.
    pub fn render(&mut self) {
        let scale = self.time_scale();
        let bars = layout_bars(
            &self.events,
            &scale,
            &self.geometry,
            self.config.width(),
            self.config.bar_offset,
        );

        self.surface.begin_frame(&Canvas::from_config(&self.config));
        self.surface.draw_axis(&scale.ticks(DEFAULT_TICK_COUNT));
        self.surface.draw_bars(&bars);
        self.surface.mark_selected(self.selection.selected_index);
        match self.selection.selected_index {
            Some(index) => {
                let panel = self.details_panel(index);
                self.surface.show_details(&panel);
            }
            None => self.surface.clear_details(),
        }
    }

    /// Chọn một sự kiện. Chọn lại sự kiện đang chọn chỉ vẽ lại cùng bảng chi tiết.
    pub fn select(&mut self, index: usize) -> ChronologyResult<()> {
        if index >= self.events.len() {
            tracing::warn!(index, total = self.events.len(), "chọn sự kiện không tồn tại");
            return Err(ChronologyError::UnknownEvent(index));
        }

        if self.selection.selected_index != Some(index) {
            self.surface.clear_details();
            self.selection.selected_index = Some(index);
            self.surface.mark_selected(Some(index));
        }

        let panel = self.details_panel(index);
        debug!(index, y = panel.y, "hiển thị bảng chi tiết");
        self.surface.show_details(&panel);
        Ok(())
    }

    /// Đóng bảng chi tiết (nhấn vào bảng) và quay về trạng thái không chọn.
    pub fn dismiss(&mut self) {
        if self.selection.selected_index.take().is_some() {
            debug!("đóng bảng chi tiết");
        }
        self.surface.clear_details();
        self.surface.mark_selected(None);
    }

    /// Đổi cửa sổ thời gian: bỏ chọn, tính lại hình học và vẽ lại tất cả.
    pub fn change_range(&mut self, range: DateRange) {
        self.selection = SelectionState::default();
        self.range = range;
        self.geometry = compute_bar_geometry(
            &range,
            self.config.height(),
            self.config.bar.min,
            self.config.bar.max,
        );
        debug!(
            day_span = range.day_span(),
            height = self.geometry.height,
            scale = self.geometry.vertical_scale_factor,
            "tính lại hình học thanh"
        );
        self.render();
    }

    /// Kéo một đầu thanh trượt rồi áp khoảng mới.
    pub fn slide(
        &mut self,
        slider: &mut RangeSlider,
        handle: Handle,
        value_ms: f64,
    ) -> ChronologyResult<()> {
        let range = slider.update(handle, value_ms)?;
        self.change_range(range);
        Ok(())
    }

    /// Đưa cửa sổ đang xem về đúng vị trí hai đầu kéo (thanh trượt kẹp vào biên dữ liệu).
    pub fn sync_with_slider(&mut self, slider: &RangeSlider) -> ChronologyResult<()> {
        let range = slider.range()?;
        if range != self.range {
            debug!(?range, "khớp khoảng hiển thị với thanh trượt");
            self.change_range(range);
        }
        Ok(())
    }

    fn details_panel(&self, index: usize) -> DetailsPanel {
        let event = &self.events[index];
        let width = self.config.details_panel_width;
        DetailsPanel {
            index,
            date_label: event.date.format(DETAILS_DATE_FORMAT).to_string(),
            body: event.body.clone(),
            x: (self.config.width() - width).max(self.config.bar_offset),
            y: bar_y(&self.time_scale(), &self.geometry, event.date),
            width,
        }
    }
}
