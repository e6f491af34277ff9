//! Thành phần giao diện chronology cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;

    use crate::styles;
    use chrono::DateTime;
    use chronology_core::{
        AxisTick, BarLayout, Canvas, ChronologyConfig, ChronologyView, DetailsPanel, Event,
        Handle, RangeSlider, Scene,
    };
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, HtmlInputElement, Window};
    use yew::events::InputEvent;
    use yew::prelude::*;
    use yew::TargetCast;

    const DAY_MS: f64 = chronology_core::ONE_DAY_MS;

    #[derive(Properties, PartialEq)]
    pub struct ChronologyAppProps {
        pub events: Vec<Event>,
        pub config: ChronologyConfig,
    }

    enum ViewAction {
        Select(usize),
        Dismiss,
        Slide(Handle, f64),
    }

    #[derive(Clone)]
    enum ViewState {
        Ready {
            view: ChronologyView<Scene>,
            slider: RangeSlider,
        },
        Failed(String),
    }

    impl ViewState {
        fn build(props: &ChronologyAppProps) -> Self {
            let slider = match RangeSlider::for_events(&props.events) {
                Ok(slider) => slider.with_range(&props.config.range),
                Err(err) => return ViewState::Failed(err.to_string()),
            };
            let built = ChronologyView::new(props.events.clone(), props.config.clone(), Scene::new())
                .and_then(|mut view| view.sync_with_slider(&slider).map(|()| view));
            match built {
                Ok(view) => ViewState::Ready { view, slider },
                Err(err) => ViewState::Failed(err.to_string()),
            }
        }
    }

    impl Reducible for ViewState {
        type Action = ViewAction;

        fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
            let mut next = (*self).clone();
            if let ViewState::Ready { view, slider } = &mut next {
                let outcome = match action {
                    ViewAction::Select(index) => view.select(index),
                    ViewAction::Dismiss => {
                        view.dismiss();
                        Ok(())
                    }
                    ViewAction::Slide(handle, value) => view.slide(slider, handle, value),
                };
                if let Err(err) = outcome {
                    console::error_1(&JsValue::from_str(&err.to_string()));
                    return self;
                }
            }
            Rc::new(next)
        }
    }

    #[function_component(ChronologyApp)]
    fn chronology_app(props: &ChronologyAppProps) -> Html {
        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        let state = use_reducer(|| ViewState::build(props));

        let (view, slider) = match &*state {
            ViewState::Ready { view, slider } => (view, slider),
            ViewState::Failed(message) => {
                return html! { <p class="chronology-error">{ message.clone() }</p> };
            }
        };

        let scene = view.surface();
        let Some(canvas) = scene.canvas.as_ref() else {
            return Html::default();
        };

        let on_dismiss = {
            let state = state.clone();
            Callback::from(move |_| state.dispatch(ViewAction::Dismiss))
        };

        html! {
            <div class="chronology-root">
                { render_slider(slider, state.dispatcher()) }
                <div class="chart" style="position: relative;">
                    <svg
                        id="chart"
                        width={canvas.full_width.to_string()}
                        height={canvas.full_height.to_string()}
                        viewBox={canvas.responsive.then(|| format!("0 0 {} {}", canvas.full_width, canvas.full_height))}
                        preserveAspectRatio={canvas.responsive.then_some("xMinYMid")}
                    >
                        <g transform={format!("translate({}, {})", canvas.margin.left, canvas.margin.top)}>
                            <rect class="chrono-area" width={canvas.width.to_string()} height={canvas.height.to_string()} />
                            { render_axis(canvas, &scene.ticks) }
                            {
                                for scene.bars.iter().map(|bar| {
                                    render_bar(bar, scene.is_selected(bar.index), state.dispatcher())
                                })
                            }
                        </g>
                    </svg>
                    { scene.details.as_ref().map(|panel| render_details(canvas, panel, on_dismiss)).unwrap_or_default() }
                </div>
            </div>
        }
    }

    fn render_slider(slider: &RangeSlider, dispatcher: UseReducerDispatcher<ViewState>) -> Html {
        let (min, max) = slider.bounds_ms();
        let (start, end) = slider.values_ms();

        let on_input = |handle: Handle| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                match input.value().parse::<f64>() {
                    Ok(value) => dispatcher.dispatch(ViewAction::Slide(handle, value)),
                    Err(err) => console::error_1(&JsValue::from_str(&format!(
                        "Giá trị thanh trượt không hợp lệ: {err}"
                    ))),
                }
            })
        };

        html! {
            <div class="chronology-slider" role="group" aria-label="Lọc khoảng thời gian">
                <label>
                    <span id="event-start">{ format_millis(start) }</span>
                    <input
                        type="range"
                        min={min.to_string()}
                        max={max.to_string()}
                        step={DAY_MS.to_string()}
                        value={start.to_string()}
                        oninput={on_input(Handle::Start)}
                        aria-label="Ngày bắt đầu"
                    />
                </label>
                <label>
                    <span id="event-end">{ format_millis(end) }</span>
                    <input
                        type="range"
                        min={min.to_string()}
                        max={max.to_string()}
                        step={DAY_MS.to_string()}
                        value={end.to_string()}
                        oninput={on_input(Handle::End)}
                        aria-label="Ngày kết thúc"
                    />
                </label>
            </div>
        }
    }

    fn render_axis(canvas: &Canvas, ticks: &[AxisTick]) -> Html {
        let colour = canvas.axis_colour.clone();
        html! {
            <g class="yaxis" style={format!("font-size: {}", canvas.font_size)} text-anchor="end">
                <path
                    class="domain"
                    stroke={colour.clone()}
                    fill="none"
                    d={format!("M-6,{}H0V0H-6", canvas.height)}
                />
                {
                    for ticks.iter().map(|tick| html! {
                        <g class="tick" transform={format!("translate(0, {})", tick.y)}>
                            <line stroke={colour.clone()} x2="-6" />
                            <text fill={colour.clone()} x="-9" dy="0.32em">{ tick.label.clone() }</text>
                        </g>
                    })
                }
            </g>
        }
    }

    fn render_bar(
        bar: &BarLayout,
        selected: bool,
        dispatcher: UseReducerDispatcher<ViewState>,
    ) -> Html {
        let index = bar.index;
        let onclick = Callback::from(move |_| dispatcher.dispatch(ViewAction::Select(index)));
        html! {
            <rect
                class={classes!("chrono-bar", selected.then_some("selected"))}
                data-index={bar.index.to_string()}
                x={bar.x.to_string()}
                y={bar.y.to_string()}
                width={bar.width.to_string()}
                height={bar.height.to_string()}
                onclick={onclick}
            />
        }
    }

    fn render_details(canvas: &Canvas, panel: &DetailsPanel, on_dismiss: Callback<MouseEvent>) -> Html {
        let style = format!(
            "position: absolute; left: {}px; top: {}px; width: {}px;",
            canvas.margin.left + panel.x,
            canvas.margin.top + panel.y,
            panel.width
        );
        html! {
            <div class="chrono-details-card" data-index={panel.index.to_string()} style={style} onclick={on_dismiss}>
                <h3>{ panel.date_label.clone() }</h3>
                <p>{ panel.body.clone() }</p>
            </div>
        }
    }

    fn format_millis(value: i64) -> String {
        DateTime::from_timestamp_millis(value)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "--".to_string())
    }

    #[wasm_bindgen]
    pub fn mount_chronology_view(
        selector: &str,
        data: JsValue,
        options: Option<JsValue>,
    ) -> Result<(), JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let data: serde_json::Value = from_value(data)?;
        let events = chronology_json::load_events_value(&data)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let options = match options {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                let value: serde_json::Value = from_value(value)?;
                chronology_json::load_options_value(&value)
                    .map_err(|err| JsValue::from_str(&err.to_string()))?
            }
            _ => Default::default(),
        };
        let config = ChronologyConfig::resolve(&options, &events)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        yew::Renderer::<ChronologyApp>::with_root_and_props(
            target,
            ChronologyAppProps { events, config },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_chronology_view;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_chronology_view(
    _: &str,
    _: wasm_bindgen::JsValue,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "chronology-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
