use chronology_core::{ChronologyError, ChronologyOptions, ChronologyView, Margin, Scene};
use chronology_json::{load_events_str, load_options_str};
use chronology_svg::{render_chronology, render_svg};

const DATA: &str = r#"[
    { "date": "2020-01-01", "body": "New year" },
    { "date": "2020-01-02", "body": "Second <day> & more" },
    { "date": "2020-06-01", "body": "Summer" }
]"#;

fn options() -> ChronologyOptions {
    ChronologyOptions {
        width: Some(800.0),
        height: Some(1000.0),
        margin: Some(Margin {
            top: 10.0,
            right: 10.0,
            bottom: 0.0,
            left: 80.0,
        }),
        responsive: Some(false),
        axis_colour: Some("#464646".to_string()),
        ..ChronologyOptions::default()
    }
}

#[test]
fn full_range_draws_every_bar() {
    let events = load_events_str(DATA).unwrap();
    let svg = render_chronology(events, &options(), None).unwrap();

    assert!(svg.starts_with(r#"<svg id="chart""#));
    assert!(svg.contains(r#"width="800" height="1000">"#));
    assert!(!svg.contains("viewBox"));
    assert!(svg.contains(r#"<g transform="translate(80, 10)">"#));
    assert_eq!(svg.matches(r#"<rect class="chrono-bar""#).count(), 3);
    assert!(!svg.contains("chrono-bar selected"));
    assert!(!svg.contains("<foreignObject"));
    assert!(svg.contains(r##"stroke="#464646""##));
    assert!(svg.ends_with("</g></svg>"));
}

#[test]
fn selection_highlights_one_bar_and_opens_the_panel() {
    let events = load_events_str(DATA).unwrap();
    let svg = render_chronology(events, &options(), Some(1)).unwrap();

    assert_eq!(svg.matches("chrono-bar selected").count(), 1);
    assert!(svg.contains(r#"class="chrono-bar selected" data-index="1""#));
    assert!(svg.contains(r#"<foreignObject class="chrono-details" data-index="1""#));
    assert!(svg.contains("<h3>January 2, 2020</h3>"));
    assert!(svg.contains("<p>Second &lt;day&gt; &amp; more</p>"));
}

#[test]
fn narrowed_range_hides_later_events() {
    let events = load_events_str(DATA).unwrap();
    let options = load_options_str(r#"{ "height": 1000, "start": "2020-01-01", "end": "2020-01-02" }"#)
        .unwrap();
    let svg = render_chronology(events, &options, None).unwrap();

    assert_eq!(svg.matches(r#"<rect class="chrono-bar""#).count(), 2);
    assert!(svg.contains(r#"height="48"/>"#));
    assert!(svg.contains(r#"preserveAspectRatio="xMinYMid""#));
}

#[test]
fn dismissing_removes_panel_from_markup() {
    let events = load_events_str(DATA).unwrap();
    let mut view = ChronologyView::from_options(events, &options(), Scene::new()).unwrap();
    view.select(0).unwrap();
    assert!(render_svg(view.surface()).contains("<foreignObject"));

    view.dismiss();
    let svg = render_svg(view.surface());
    assert!(!svg.contains("<foreignObject"));
    assert!(!svg.contains("chrono-bar selected"));
}

#[test]
fn rendering_twice_is_identical() {
    let events = load_events_str(DATA).unwrap();
    let mut view = ChronologyView::from_options(events, &options(), Scene::new()).unwrap();
    let first = render_svg(view.surface());
    view.change_range(view.range());
    assert_eq!(render_svg(view.surface()), first);
}

#[test]
fn unknown_selection_is_an_error() {
    let events = load_events_str(DATA).unwrap();
    let err = render_chronology(events, &options(), Some(7)).unwrap_err();
    assert_eq!(err, ChronologyError::UnknownEvent(7));
}
