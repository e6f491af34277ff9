/// Default stylesheet embedded in every rendered document. Colours that come from
/// options (`axisColour`) are written as attributes instead, so they win over these rules.
pub const DEFAULT_STYLES: &str = r#"
.chrono-area {
  fill: none;
}

.chrono-bar {
  fill: rgba(37, 99, 235, 0.55);
  cursor: pointer;
  transition: fill 120ms ease-in-out;
}

.chrono-bar:hover {
  fill: rgba(37, 99, 235, 0.8);
}

.chrono-bar.selected {
  fill: #b42318;
}

.yaxis .domain,
.yaxis .tick line {
  shape-rendering: crispEdges;
}

.chrono-details {
  overflow: visible;
}

.chrono-details-card {
  font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  background: #ffffff;
  border: 1px solid rgba(148, 163, 184, 0.38);
  border-radius: 12px;
  box-shadow: 0 12px 24px rgba(15, 23, 42, 0.12);
  padding: 12px 16px;
  cursor: pointer;
}

.chrono-details-card h3 {
  margin: 0 0 6px;
  font-size: 14px;
  color: #52606d;
}

.chrono-details-card p {
  margin: 0;
  color: #1f2933;
  line-height: 1.45;
}
"#;
