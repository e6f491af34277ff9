//! Serialize a chronology `Scene` into a standalone SVG document.

mod styles;

use chronology_core::{
    AxisTick, BarLayout, Canvas, ChronologyOptions, ChronologyResult, ChronologyView,
    DetailsPanel, Event, Scene,
};

pub use styles::DEFAULT_STYLES;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const DETAILS_MIN_HEIGHT: f64 = 120.0;

/// Lay out `events` with `options`, optionally select one event, and render the result.
pub fn render_chronology(
    events: Vec<Event>,
    options: &ChronologyOptions,
    selected: Option<usize>,
) -> ChronologyResult<String> {
    let mut view = ChronologyView::from_options(events, options, Scene::new())?;
    if let Some(index) = selected {
        view.select(index)?;
    }
    Ok(render_svg(view.surface()))
}

/// Render a scene. A scene that was never drawn yields an empty document.
pub fn render_svg(scene: &Scene) -> String {
    let Some(canvas) = scene.canvas.as_ref() else {
        return format!(r#"<svg xmlns="{SVG_NS}" width="0" height="0"></svg>"#);
    };

    let mut out = String::new();
    out.push_str(&open_svg(canvas));
    out.push_str(&format!("<style>{DEFAULT_STYLES}</style>"));
    out.push_str(&format!(
        r#"<g transform="translate({}, {})">"#,
        num(canvas.margin.left),
        num(canvas.margin.top)
    ));
    out.push_str(&format!(
        r#"<rect class="chrono-area" width="{}" height="{}"/>"#,
        num(canvas.width),
        num(canvas.height)
    ));
    out.push_str(&render_axis(canvas, &scene.ticks));
    for bar in &scene.bars {
        out.push_str(&render_bar(bar, scene.is_selected(bar.index)));
    }
    if let Some(panel) = &scene.details {
        out.push_str(&render_details(canvas, panel));
    }
    out.push_str("</g></svg>");

    tracing::debug!(
        bars = scene.bars.len(),
        ticks = scene.ticks.len(),
        bytes = out.len(),
        "rendered chronology svg"
    );
    out
}

fn open_svg(canvas: &Canvas) -> String {
    let (width, height) = (num(canvas.full_width), num(canvas.full_height));
    if canvas.responsive {
        format!(
            r#"<svg id="chart" xmlns="{SVG_NS}" width="{width}" height="{height}" viewBox="0 0 {width} {height}" preserveAspectRatio="xMinYMid">"#
        )
    } else {
        format!(r#"<svg id="chart" xmlns="{SVG_NS}" width="{width}" height="{height}">"#)
    }
}

fn render_axis(canvas: &Canvas, ticks: &[AxisTick]) -> String {
    let colour = escape(&canvas.axis_colour);
    let mut out = format!(
        r#"<g class="yaxis" style="font-size: {}" text-anchor="end">"#,
        escape(&canvas.font_size)
    );
    out.push_str(&format!(
        r#"<path class="domain" stroke="{colour}" fill="none" d="M-{tick},{bottom}H0V0H-{tick}"/>"#,
        tick = num(TICK_SIZE),
        bottom = num(canvas.height),
    ));
    for tick in ticks {
        out.push_str(&format!(
            r#"<g class="tick" transform="translate(0, {y})"><line stroke="{colour}" x2="-{size}"/><text fill="{colour}" x="-{offset}" dy="0.32em">{label}</text></g>"#,
            y = num(tick.y),
            size = num(TICK_SIZE),
            offset = num(TICK_SIZE + TICK_PADDING),
            label = escape(&tick.label),
        ));
    }
    out.push_str("</g>");
    out
}

fn render_bar(bar: &BarLayout, selected: bool) -> String {
    let class = if selected {
        "chrono-bar selected"
    } else {
        "chrono-bar"
    };
    format!(
        r#"<rect class="{class}" data-index="{}" data-date="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
        bar.index,
        bar.date,
        num(bar.x),
        num(bar.y),
        num(bar.width),
        num(bar.height)
    )
}

fn render_details(canvas: &Canvas, panel: &DetailsPanel) -> String {
    let height = (canvas.height - panel.y).max(DETAILS_MIN_HEIGHT);
    format!(
        r#"<foreignObject class="chrono-details" data-index="{index}" x="{x}" y="{y}" width="{width}" height="{height}"><div xmlns="{XHTML_NS}" class="chrono-details-card"><h3>{date}</h3><p>{body}</p></div></foreignObject>"#,
        index = panel.index,
        x = num(panel.x),
        y = num(panel.y),
        width = num(panel.width),
        height = num(height),
        date = escape(&panel.date_label),
        body = escape(&panel.body),
    )
}

/// Format a coordinate with at most three decimals and no trailing zeros.
fn num(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
