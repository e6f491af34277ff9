use chrono::NaiveDateTime;

/// Lỗi chung khi dựng chronology.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChronologyError {
    #[error("Khoảng thời gian không hợp lệ: bắt đầu {start} sau kết thúc {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("Tập dữ liệu không có sự kiện nào")]
    EmptyDataset,
    #[error("Ngày không đúng định dạng YYYY-MM-DD ở bản ghi {index}: {value:?}")]
    MalformedDate { index: usize, value: String },
    #[error("Không có sự kiện ở vị trí {0}")]
    UnknownEvent(usize),
    #[error("Kích thước vùng vẽ không hợp lệ: {width} x {height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
}

pub type ChronologyResult<T> = Result<T, ChronologyError>;
