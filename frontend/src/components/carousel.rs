use log::{debug, error, warn};
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config;

/// One image shown by the carousel. `src` is handed to the browser as-is.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

/// Which slide is showing and whether the zoom overlay is up.
///
/// Every transition returns a new value so the component can hand it straight
/// to its state handle. `current_index` always stays below `len` when the
/// carousel has slides, and `zoomed` can only be set while it has any.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CarouselState {
    len: usize,
    current_index: usize,
    zoomed: bool,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current_index: 0,
            zoomed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Arrows and indicators only make sense with something to switch to.
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }

    /// Keeps the state when the slide count is unchanged, starts over otherwise.
    pub fn fit_to(self, len: usize) -> Self {
        if self.len == len {
            self
        } else {
            Self::new(len)
        }
    }

    pub fn go_to_previous(self) -> Self {
        if self.is_empty() {
            return self;
        }
        let current_index = if self.current_index == 0 {
            self.len - 1
        } else {
            self.current_index - 1
        };
        Self { current_index, ..self }
    }

    pub fn go_to_next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        let current_index = if self.current_index == self.len - 1 {
            0
        } else {
            self.current_index + 1
        };
        Self { current_index, ..self }
    }

    /// Out-of-range indices leave the state untouched.
    pub fn go_to_slide(self, index: usize) -> Self {
        if index >= self.len {
            warn!("Ignoring jump to slide {} of {}", index, self.len);
            return self;
        }
        Self {
            current_index: index,
            ..self
        }
    }

    pub fn open_zoom(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self { zoomed: true, ..self }
    }

    pub fn close_zoom(self) -> Self {
        Self {
            zoomed: false,
            ..self
        }
    }
}

/// `padding-top` that gives the frame its height for a width/height ratio.
pub fn frame_padding_top(aspect_ratio: f64) -> String {
    debug_assert!(
        aspect_ratio.is_finite() && aspect_ratio > 0.0,
        "carousel aspect ratio must be positive, got {}",
        aspect_ratio
    );
    if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
        error!("Invalid carousel aspect ratio {}, using a square frame", aspect_ratio);
        return "100%".to_string();
    }
    format!("{}%", 100.0 / aspect_ratio)
}

fn transition(state: &UseStateHandle<CarouselState>, next: CarouselState) {
    if **state != next {
        debug!(
            "Carousel slide {} -> {}, zoomed {} -> {}",
            state.current_index(),
            next.current_index(),
            state.is_zoomed(),
            next.is_zoomed()
        );
    }
    state.set(next);
}

#[derive(Clone, Copy, PartialEq)]
pub enum IndicatorStyle {
    Frame,
    Zoom,
}

#[derive(Properties, PartialEq)]
pub struct IndicatorsProps {
    pub count: usize,
    pub active: usize,
    pub on_select: Callback<usize>,
    pub variant: IndicatorStyle,
}

#[function_component(Indicators)]
pub fn indicators(props: &IndicatorsProps) -> Html {
    let (row_class, label) = match props.variant {
        IndicatorStyle::Frame => ("carousel-dots", "Go to slide"),
        IndicatorStyle::Zoom => ("carousel-dots zoom-dots", "Go to image"),
    };

    html! {
        <div class={row_class}>
            { for (0..props.count).map(|index| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    on_select.emit(index);
                });
                html! {
                    <button
                        key={index}
                        class={classes!("carousel-dot", (index == props.active).then(|| "active"))}
                        onclick={onclick}
                        aria-label={format!("{} {}", label, index + 1)}
                    />
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ZoomOverlayProps {
    pub slides: Vec<Slide>,
    pub current_index: usize,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
    pub on_select: Callback<usize>,
    pub on_close: Callback<MouseEvent>,
}

/// Enlarged view of the current slide. Clicking the dimmed backdrop closes
/// it, clicks inside the content never reach the backdrop.
#[function_component(ZoomOverlay)]
pub fn zoom_overlay(props: &ZoomOverlayProps) -> Html {
    let Some(slide) = props.slides.get(props.current_index) else {
        return html! {};
    };
    let has_navigation = props.slides.len() > 1;

    html! {
        <div class="carousel-zoom-backdrop" onclick={props.on_close.clone()}>
            <div class="carousel-zoom-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="carousel-zoom-frame">
                    <img
                        class="carousel-zoom-image"
                        src={slide.src.clone()}
                        alt={slide.alt.clone()}
                    />
                    if has_navigation {
                        <button
                            class="carousel-zoom-arrow left"
                            onclick={props.on_previous.clone()}
                            aria-label="Previous image"
                        >
                            {"‹"}
                        </button>
                        <button
                            class="carousel-zoom-arrow right"
                            onclick={props.on_next.clone()}
                            aria-label="Next image"
                        >
                            {"›"}
                        </button>
                    }
                    <button
                        class="carousel-zoom-close"
                        onclick={props.on_close.clone()}
                        aria-label="Close zoomed image"
                    >
                        {"✕"}
                    </button>
                </div>
                if has_navigation {
                    <Indicators
                        count={props.slides.len()}
                        active={props.current_index}
                        on_select={props.on_select.clone()}
                        variant={IndicatorStyle::Zoom}
                    />
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
    /// Width divided by height of the frame.
    pub aspect_ratio: f64,
    #[prop_or(AttrValue::from(config::DEFAULT_CAROUSEL_MAX_WIDTH))]
    pub max_width: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let state = use_state(|| CarouselState::new(props.slides.len()));
    let view = (*state).fit_to(props.slides.len());

    // Keyboard control only while the overlay is up
    {
        let state = state.clone();
        use_effect_with_deps(
            move |view: &CarouselState| {
                let view = *view;
                let window = web_sys::window();
                let listener = view.is_zoomed().then(|| {
                    Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        let next = match e.key().as_str() {
                            "Escape" => view.close_zoom(),
                            "ArrowLeft" => view.go_to_previous(),
                            "ArrowRight" => view.go_to_next(),
                            _ => return,
                        };
                        transition(&state, next);
                    }) as Box<dyn FnMut(KeyboardEvent)>)
                });

                if let (Some(window), Some(listener)) = (&window, &listener) {
                    let _ = window.add_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let (Some(window), Some(listener)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            view,
        );
    }

    if props.slides.is_empty() {
        return html! {
            <div class="carousel-empty" style={format!("max-width: {};", props.max_width)}>
                <p>{"No images provided for carousel."}</p>
            </div>
        };
    }

    let on_previous = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            transition(&state, view.go_to_previous());
        })
    };

    let on_next = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            transition(&state, view.go_to_next());
        })
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |index: usize| {
            transition(&state, view.go_to_slide(index));
        })
    };

    let on_open = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            transition(&state, view.open_zoom());
        })
    };

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            transition(&state, view.close_zoom());
        })
    };

    html! {
        <div class="carousel" style={format!("max-width: {};", props.max_width)}>
            if let Some(title) = &props.title {
                <p class="carousel-title">{title.to_string()}</p>
            }

            <div
                class="carousel-frame"
                style={format!("padding-top: {};", frame_padding_top(props.aspect_ratio))}
                onclick={on_open}
            >
                { for props.slides.iter().enumerate().map(|(index, slide)| html! {
                    <div
                        key={index}
                        class={classes!("carousel-slide", (index == view.current_index()).then(|| "active"))}
                    >
                        <img
                            src={slide.src.clone()}
                            alt={slide.alt.clone()}
                            loading={if index == 0 { "eager" } else { "lazy" }}
                            sizes="(max-width: 768px) 100vw, 300px"
                        />
                    </div>
                }) }
            </div>

            if view.has_navigation() {
                <button
                    class="carousel-arrow left"
                    onclick={on_previous.clone()}
                    aria-label="Previous slide"
                >
                    {"‹"}
                </button>
                <button
                    class="carousel-arrow right"
                    onclick={on_next.clone()}
                    aria-label="Next slide"
                >
                    {"›"}
                </button>
                <Indicators
                    count={view.len()}
                    active={view.current_index()}
                    on_select={on_select.clone()}
                    variant={IndicatorStyle::Frame}
                />
            }

            if view.is_zoomed() {
                <ZoomOverlay
                    slides={props.slides.clone()}
                    current_index={view.current_index()}
                    on_previous={on_previous}
                    on_next={on_next}
                    on_select={on_select}
                    on_close={on_close}
                />
            }
        </div>
    }
}

/// Rendered once by the page that hosts carousels.
pub const CAROUSEL_CSS: &str = r#"
.carousel {
    position: relative;
    width: 100%;
    margin: 0 auto;
}

.carousel-empty {
    width: 100%;
    height: 16rem;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 1.5rem;
    background: rgba(163, 118, 159, 0.5);
    color: #0B4F6C;
    font-size: 0.875rem;
    text-align: center;
    box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.06);
}

.carousel-title {
    margin-bottom: 0.75rem;
    font-size: 0.75rem;
    font-weight: 600;
    letter-spacing: 0.3em;
    color: #783B5A;
    text-align: center;
}

.carousel-frame {
    position: relative;
    width: 100%;
    overflow: hidden;
    border-radius: 32px;
    padding: 1px;
    background: linear-gradient(to bottom right, #783B5A, #A3769F, #F7C9C9);
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    cursor: zoom-in;
}

.carousel-slide {
    position: absolute;
    inset: 1px;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.5s ease-in-out;
}

.carousel-slide.active {
    opacity: 1;
    pointer-events: auto;
}

.carousel-slide img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    border-radius: 24px;
}

.carousel-arrow {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    border: none;
    border-radius: 9999px;
    padding: 0.5rem 0.75rem;
    background: rgba(255, 255, 255, 0.7);
    color: #0B4F6C;
    font-size: 1.25rem;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    cursor: pointer;
    transition: background 0.2s ease;
}

.carousel-arrow:hover {
    background: #fff;
}

.carousel-arrow.left {
    left: -2.5rem;
}

.carousel-arrow.right {
    right: -2.5rem;
}

.carousel-dots {
    margin-top: 1rem;
    display: flex;
    justify-content: center;
    gap: 0.5rem;
}

.carousel-dot {
    height: 0.5rem;
    width: 0.5rem;
    border: none;
    border-radius: 9999px;
    background: #F7C9C9;
    cursor: pointer;
    transition: all 0.3s ease;
}

.carousel-dot:hover {
    background: #A3769F;
}

.carousel-dot.active {
    width: 1.5rem;
    background: #783B5A;
}

.zoom-dots .carousel-dot {
    background: rgba(255, 255, 255, 0.6);
}

.zoom-dots .carousel-dot:hover {
    background: #fff;
}

.zoom-dots .carousel-dot.active {
    background: #F7C9C9;
}

.carousel-zoom-backdrop {
    position: fixed;
    inset: 0;
    z-index: 999;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.7);
    backdrop-filter: blur(4px);
}

.carousel-zoom-content {
    position: relative;
    width: 70%;
    max-width: 48rem;
}

.carousel-zoom-frame {
    position: relative;
    width: 100%;
    max-height: 70vh;
    padding: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    border-radius: 20px;
    background: #111;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.carousel-zoom-image {
    width: 100%;
    height: auto;
    max-height: 62vh;
    object-fit: contain;
}

.carousel-zoom-arrow,
.carousel-zoom-close {
    position: absolute;
    border: none;
    border-radius: 9999px;
    padding: 0.5rem 0.75rem;
    background: rgba(255, 255, 255, 0.8);
    color: #0B4F6C;
    cursor: pointer;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

.carousel-zoom-arrow {
    top: 50%;
    transform: translateY(-50%);
    font-size: 1.25rem;
}

.carousel-zoom-arrow.left {
    left: 0.75rem;
}

.carousel-zoom-arrow.right {
    right: 0.75rem;
}

.carousel-zoom-close {
    top: 0.75rem;
    right: 0.75rem;
    background: #fff;
}

.carousel-zoom-close:hover,
.carousel-zoom-arrow:hover {
    background: #F3E7E7;
}

@media (max-width: 640px) {
    .carousel-arrow {
        display: none;
    }
}

@media (max-width: 768px) {
    .carousel-zoom-content {
        width: 90%;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide {
                src: format!("/assets/page-{}.png", i),
                alt: format!("Page {}", i),
            })
            .collect()
    }

    fn props(count: usize) -> CarouselProps {
        CarouselProps {
            slides: slides(count),
            aspect_ratio: 0.5,
            max_width: AttrValue::from(config::DEFAULT_CAROUSEL_MAX_WIDTH),
            title: None,
        }
    }

    async fn render(props: CarouselProps) -> String {
        yew::LocalServerRenderer::<Carousel>::with_props(props)
            .hydratable(false)
            .render()
            .await
    }

    #[test]
    fn starts_on_first_slide() {
        for count in 1..=5 {
            let state = CarouselState::new(count);
            assert_eq!(state.current_index(), 0);
            assert!(!state.is_zoomed());
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for count in 1..=6 {
            for start in 0..count {
                let original = CarouselState::new(count).go_to_slide(start);
                let mut state = original;
                for _ in 0..count {
                    state = state.go_to_next();
                }
                assert_eq!(state, original);
            }
        }
    }

    #[test]
    fn previous_wraps_to_last() {
        let state = CarouselState::new(4).go_to_previous();
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn next_wraps_to_first() {
        let state = CarouselState::new(4).go_to_slide(3).go_to_next();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn single_slide_stays_put() {
        let state = CarouselState::new(1);
        assert_eq!(state.go_to_next().current_index(), 0);
        assert_eq!(state.go_to_previous().current_index(), 0);
        assert!(!state.has_navigation());
    }

    #[test]
    fn go_to_slide_sets_exact_index() {
        let count = 5;
        for prior in 0..count {
            for target in 0..count {
                let state = CarouselState::new(count)
                    .go_to_slide(prior)
                    .go_to_slide(target);
                assert_eq!(state.current_index(), target);
            }
        }
    }

    #[test]
    fn go_to_slide_out_of_range_is_ignored() {
        let state = CarouselState::new(3).go_to_slide(1);
        assert_eq!(state.go_to_slide(3), state);
        assert_eq!(state.go_to_slide(usize::MAX), state);
    }

    #[test]
    fn three_slide_scenario() {
        let state = CarouselState::new(3).go_to_previous();
        assert_eq!(state.current_index(), 2);
        let state = state.go_to_next().go_to_next();
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn empty_carousel_never_zooms() {
        let state = CarouselState::new(0);
        assert!(state.is_empty());
        assert!(!state.open_zoom().is_zoomed());
        assert_eq!(state.go_to_next(), state);
        assert_eq!(state.go_to_previous(), state);
    }

    #[test]
    fn zoom_round_trip_keeps_position() {
        let before = CarouselState::new(5).go_to_slide(2);
        let after = before.open_zoom().close_zoom();
        assert_eq!(after.current_index(), 2);
        assert!(!after.is_zoomed());
    }

    #[test]
    fn navigation_while_zoomed_is_shared_with_frame() {
        let state = CarouselState::new(4)
            .open_zoom()
            .go_to_next()
            .go_to_next()
            .go_to_previous()
            .go_to_slide(3)
            .go_to_next()
            .close_zoom();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.open_zoom().current_index(), 0);
    }

    #[test]
    fn fit_to_resets_only_on_length_change() {
        let state = CarouselState::new(3).go_to_slide(2).open_zoom();
        assert_eq!(state.fit_to(3), state);
        assert_eq!(state.fit_to(2), CarouselState::new(2));
    }

    #[test]
    fn padding_follows_aspect_ratio() {
        assert_eq!(frame_padding_top(1.0), "100%");
        assert_eq!(frame_padding_top(0.5), "200%");
        assert_eq!(frame_padding_top(1.25), "80%");
        assert_eq!(frame_padding_top(2.0), "50%");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "aspect ratio must be positive")]
    fn non_positive_aspect_ratio_fails_fast() {
        frame_padding_top(0.0);
    }

    #[tokio::test]
    async fn empty_slides_render_placeholder() {
        let rendered = render(props(0)).await;
        assert!(rendered.contains("No images provided for carousel."));
        assert!(!rendered.contains("aria-label=\"Previous slide\""));
        assert!(!rendered.contains("aria-label=\"Go to slide"));
    }

    #[tokio::test]
    async fn single_slide_has_no_controls() {
        let rendered = render(props(1)).await;
        assert!(rendered.contains("/assets/page-0.png"));
        assert!(!rendered.contains("aria-label=\"Previous slide\""));
        assert!(!rendered.contains("aria-label=\"Next slide\""));
        assert!(!rendered.contains("aria-label=\"Go to slide"));
    }

    #[tokio::test]
    async fn every_slide_stays_mounted_with_one_active() {
        let rendered = render(props(3)).await;
        for i in 0..3 {
            assert!(rendered.contains(&format!("/assets/page-{}.png", i)));
            assert!(rendered.contains(&format!("aria-label=\"Go to slide {}\"", i + 1)));
        }
        assert_eq!(rendered.matches("carousel-slide active").count(), 1);
        assert_eq!(rendered.matches("carousel-dot active").count(), 1);
        assert!(rendered.contains("aria-label=\"Previous slide\""));
        assert!(rendered.contains("aria-label=\"Next slide\""));
        assert!(!rendered.contains("class=\"carousel-zoom-backdrop\""));
    }

    #[tokio::test]
    async fn carousel_leaves_stylesheet_to_page() {
        for count in [0, 3] {
            let rendered = render(props(count)).await;
            assert!(!rendered.contains(".carousel-frame {"));
            assert!(!rendered.contains("<style"));
        }
    }

    #[tokio::test]
    async fn title_and_frame_size_are_rendered() {
        let mut props = props(2);
        props.title = Some(AttrValue::from("REAL GROWTH"));
        props.max_width = AttrValue::from("28rem");
        let rendered = render(props).await;
        assert!(rendered.contains("REAL GROWTH"));
        assert!(rendered.contains("max-width: 28rem;"));
        assert!(rendered.contains("padding-top: 200%;"));
    }

    #[tokio::test]
    async fn zoom_overlay_shows_current_slide_and_controls() {
        let rendered = yew::LocalServerRenderer::<ZoomOverlay>::with_props(ZoomOverlayProps {
            slides: slides(3),
            current_index: 1,
            on_previous: Callback::noop(),
            on_next: Callback::noop(),
            on_select: Callback::noop(),
            on_close: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(rendered.contains("class=\"carousel-zoom-backdrop\""));
        assert!(rendered.contains("/assets/page-1.png"));
        assert!(!rendered.contains("/assets/page-0.png"));
        assert!(rendered.contains("aria-label=\"Close zoomed image\""));
        assert!(rendered.contains("aria-label=\"Previous image\""));
        assert!(rendered.contains("aria-label=\"Go to image 3\""));
    }

    #[tokio::test]
    async fn zoom_overlay_single_slide_only_closes() {
        let rendered = yew::LocalServerRenderer::<ZoomOverlay>::with_props(ZoomOverlayProps {
            slides: slides(1),
            current_index: 0,
            on_previous: Callback::noop(),
            on_next: Callback::noop(),
            on_select: Callback::noop(),
            on_close: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(rendered.contains("aria-label=\"Close zoomed image\""));
        assert!(!rendered.contains("aria-label=\"Next image\""));
        assert!(!rendered.contains("aria-label=\"Go to image"));
    }
}
