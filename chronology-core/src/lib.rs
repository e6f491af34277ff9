//! Logic lõi của chronology: bố cục thanh theo thang thời gian và trạng thái chọn sự kiện.

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod scale;
pub mod scene;
pub mod slider;
pub mod view;

pub use config::{BarBounds, ChronologyConfig, ChronologyOptions, Margin};
pub use error::{ChronologyError, ChronologyResult};
pub use layout::{bar_y, compute_bar_geometry, layout_bars, BarLayout};
pub use model::{parse_date, BarGeometry, DateRange, Event, SelectionState, ONE_DAY_MS};
pub use scale::{AxisTick, TimeScale, DEFAULT_TICK_COUNT};
pub use scene::{Canvas, DetailsPanel, RenderSurface, Scene};
pub use slider::{Handle, RangeSlider};
pub use view::ChronologyView;
