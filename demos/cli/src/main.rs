use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use chronology_core::{compute_bar_geometry, parse_date, ChronologyConfig, ChronologyOptions};
use chronology_json::{load_events_str, load_options_str};
use chronology_svg::render_chronology;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "chronology-cli",
    about = "Vẽ chronology SVG từ file JSON các sự kiện có ngày."
)]
struct Args {
    /// Đường dẫn tới file JSON dữ liệu (mảng `{date, body}`).
    #[arg(short, long)]
    input: PathBuf,

    /// File JSON tùy chọn hiển thị (width, height, margin, ...).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Ngày bắt đầu cửa sổ hiển thị (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date_arg)]
    start: Option<NaiveDate>,

    /// Ngày kết thúc cửa sổ hiển thị (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date_arg)]
    end: Option<NaiveDate>,

    /// Chọn sự kiện theo vị trí và mở bảng chi tiết.
    #[arg(long)]
    select: Option<usize>,

    /// Ghi SVG ra file thay vì stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Chỉ in hình học thanh (JSON) thay vì SVG.
    #[arg(long)]
    geometry: bool,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("ngày không đúng định dạng YYYY-MM-DD: {value}"))
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Không đọc được file {:?}", args.input))?;
    let events = load_events_str(&data)
        .with_context(|| format!("Dữ liệu không hợp lệ trong {:?}", args.input))?;

    let mut options = match &args.options {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Không đọc được file {path:?}"))?;
            load_options_str(&raw).with_context(|| format!("Tùy chọn không hợp lệ trong {path:?}"))?
        }
        None => ChronologyOptions::default(),
    };
    if args.start.is_some() {
        options.start = args.start;
    }
    if args.end.is_some() {
        options.end = args.end;
    }

    if args.geometry {
        let config = ChronologyConfig::resolve(&options, &events)?;
        let geometry =
            compute_bar_geometry(&config.range, config.height(), config.bar.min, config.bar.max);
        println!("{}", serde_json::to_string_pretty(&geometry)?);
        return Ok(());
    }

    let total = events.len();
    let svg = render_chronology(events, &options, args.select)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &svg).with_context(|| format!("Không ghi được file {path:?}"))?;
            tracing::info!(events = total, path = %path.display(), "đã ghi chronology");
        }
        None => println!("{svg}"),
    }

    Ok(())
}
