//! Technova entry point
//!
//! Handles platform-specific initialization and runs the page loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlElement, MouseEvent};

    use technova::Settings;
    use technova::audio::{AudioManager, SoundEffect};
    use technova::consts::*;
    use technova::countdown::{CountdownState, format_field};
    use technova::cursor::{Cursor, CursorStyle};
    use technova::platform::{FrameLoop, Interval, now_ms};
    use technova::renderer::SceneRenderState;
    use technova::renderer::pipeline::FrameCamera;
    use technova::scene::{ParticleField, PointerOffset, banner_float, camera_position, group_tilt};

    /// Elements matching this selector get the pointer cursor and hover/click
    /// sounds.
    const INTERACTIVE_SELECTOR: &str = "a, button, [data-cursor='pointer']";

    /// Page instance holding all state
    struct App {
        field: ParticleField,
        render_state: Option<SceneRenderState>,
        settings: Settings,
        audio: AudioManager,
        cursor: Cursor,
        pointer: PointerOffset,
        scroll_progress: f32,
        start_ms: f64,
        last_frame_ms: f64,
        hidden: bool,
        // Scheduled callbacks; dropping these cancels them, so nothing can
        // fire after the app is torn down
        _countdown_timer: Option<Interval>,
        _frame_loop: Option<FrameLoop>,
    }

    impl App {
        fn new(seed: u64, viewport_w: f32) -> Self {
            let settings = Settings::load();
            let audio = AudioManager::new(settings.muted, settings.master_volume);
            let field = ParticleField::with_defaults(settings.quality.particle_count(), seed);
            Self {
                field,
                render_state: None,
                settings,
                audio,
                cursor: Cursor::new(viewport_w),
                pointer: PointerOffset::default(),
                scroll_progress: 0.0,
                start_ms: now_ms(),
                last_frame_ms: 0.0,
                hidden: false,
                _countdown_timer: None,
                _frame_loop: None,
            }
        }

        /// Seconds since the scene was activated
        fn elapsed_secs(&self) -> f32 {
            ((now_ms() - self.start_ms) / 1000.0) as f32
        }

        /// Advance animation state and draw one frame
        fn frame(&mut self, time: f64) {
            let dt = if self.last_frame_ms > 0.0 {
                (((time - self.last_frame_ms) / 1000.0) as f32).min(0.1)
            } else {
                1.0 / 60.0
            };
            self.last_frame_ms = time;

            if self.hidden {
                return;
            }

            // Reduced motion freezes the noise/pulse cycle and the tilt but
            // keeps the field visible
            let (elapsed, tilt) = if self.settings.reduced_motion {
                (0.0, (0.0, 0.0))
            } else {
                (self.elapsed_secs(), group_tilt(self.pointer))
            };

            self.field.tick(elapsed, self.pointer);
            self.cursor.step(dt);

            let camera = FrameCamera {
                position: camera_position(self.scroll_progress),
                tilt,
            };

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.field.sprites(), &camera, elapsed) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            self.update_cursor_dom();
            self.update_banner_dom(elapsed);
        }

        /// Float the hero title block on its slow bob cycle
        fn update_banner_dom(&self, elapsed: f32) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(el) = document.get_element_by_id("hero-banner") else {
                return;
            };
            let Some(el) = el.dyn_ref::<HtmlElement>() else {
                return;
            };

            let (dy, yaw) = banner_float(elapsed);
            // Scene units scaled to pixels/degrees for the DOM block
            let _ = el.style().set_property(
                "transform",
                &format!(
                    "translateY({:.2}px) rotateY({:.2}deg)",
                    dy * 40.0,
                    yaw.to_degrees()
                ),
            );
        }

        /// Position and restyle the custom cursor element
        fn update_cursor_dom(&self) {
            if !self.cursor.enabled() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(el) = document.get_element_by_id("cursor") else {
                return;
            };
            let Some(el) = el.dyn_ref::<HtmlElement>() else {
                return;
            };

            let pos = self.cursor.position();
            let d = self.cursor.style().diameter_px();
            let style = el.style();
            let _ = style.set_property(
                "transform",
                &format!("translate({}px, {}px)", pos.x - d / 2.0, pos.y - d / 2.0),
            );
            let _ = style.set_property("width", &format!("{d}px"));
            let _ = style.set_property("height", &format!("{d}px"));
            let _ = style.set_property("opacity", if self.cursor.visible() { "1" } else { "0" });
            let _ = el.set_attribute("data-cursor-style", self.cursor.style().as_str());
        }
    }

    /// Write the four countdown fields into the hero markup
    fn update_countdown_dom(state: CountdownState) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let fields = [
            ("#countdown-days .count-value", state.days),
            ("#countdown-hours .count-value", state.hours),
            ("#countdown-minutes .count-value", state.minutes),
            ("#countdown-seconds .count-value", state.seconds),
        ];
        for (selector, value) in fields {
            if let Some(el) = document.query_selector(selector).ok().flatten() {
                el.set_text_content(Some(&format_field(value)));
            }
        }
    }

    /// Current page scroll as a 0..1 progress value
    fn scroll_progress(window: &web_sys::Window) -> f32 {
        let scrolled = window.page_y_offset().unwrap_or(0.0) as f32;
        let viewport_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let full_h = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f32)
            .unwrap_or(0.0);

        let track = full_h - viewport_h;
        if track <= 0.0 {
            0.0
        } else {
            (scrolled / track).clamp(0.0, 1.0)
        }
    }

    /// The interactive ancestor of an event target, if any
    fn interactive_target(event: &MouseEvent) -> Option<Element> {
        let target = event.target()?;
        let element = target.dyn_ref::<Element>()?;
        element.closest(INTERACTIVE_SELECTOR).ok().flatten()
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Technova starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("hero-canvas")
            .expect("no hero canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize the page
        let seed = now_ms() as u64;
        let viewport_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let app = Rc::new(RefCell::new(App::new(seed, viewport_w)));

        log::info!(
            "Field initialized: {} particles, seed {}",
            app.borrow().field.len(),
            seed
        );

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let capacity = app.borrow().field.len();
        let render_state = SceneRenderState::new(surface, &adapter, width, height, capacity).await;
        app.borrow_mut().render_state = Some(render_state);

        // Wire up the page
        setup_pointer_handlers(app.clone());
        setup_scroll_and_resize(&canvas, app.clone());
        setup_sound_toggle(app.clone());
        setup_visibility_pause(app.clone());
        start_countdown(app.clone());

        // Start the frame loop
        {
            let loop_app = app.clone();
            let frame_loop = FrameLoop::start(move |time| {
                loop_app.borrow_mut().frame(time);
            });
            app.borrow_mut()._frame_loop = Some(frame_loop);
        }

        log::info!("Technova running!");
    }

    fn setup_pointer_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Mouse move - normalized parallax offset + cursor trail target
        {
            let app = app.clone();
            let window_clone = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let vw = window_clone
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0) as f32;
                let vh = window_clone
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0) as f32;

                let mut a = app.borrow_mut();
                a.pointer =
                    PointerOffset::from_client(event.client_x() as f32, event.client_y() as f32, vw, vh);
                a.cursor.set_target(event.client_x() as f32, event.client_y() as f32);
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Hover in/out - cursor token + hover blip
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if interactive_target(&event).is_some() {
                    let mut a = app.borrow_mut();
                    a.cursor.set_style(CursorStyle::Pointer);
                    a.audio.play(SoundEffect::Hover);
                }
            });
            let _ = document
                .add_event_listener_with_callback("mouseover", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if interactive_target(&event).is_some() {
                    app.borrow_mut().cursor.set_style(CursorStyle::Default);
                }
            });
            let _ = document
                .add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click feedback
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if interactive_target(&event).is_some() {
                    let a = app.borrow();
                    a.audio.resume();
                    a.audio.play(SoundEffect::Click);
                }
            });
            let _ = document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer leaving/entering the document toggles cursor visibility
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().cursor.set_visible(false);
            });
            let _ = document
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().cursor.set_visible(true);
            });
            let _ = document
                .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_scroll_and_resize(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Scroll drives the camera rig
        {
            let app = app.clone();
            let window_clone = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().scroll_progress = scroll_progress(&window_clone);
            });
            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Resize reconfigures the surface and the cursor breakpoint
        {
            let canvas = canvas.clone();
            let window_clone = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let dpr = window_clone.device_pixel_ratio();
                let width = (canvas.client_width() as f64 * dpr) as u32;
                let height = (canvas.client_height() as f64 * dpr) as u32;

                let vw = window_clone
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0) as f32;

                let mut a = app.borrow_mut();
                a.cursor.set_viewport(vw);
                if let Some(ref mut render_state) = a.render_state {
                    canvas.set_width(width);
                    canvas.set_height(height);
                    render_state.resize(width, height);
                }
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_sound_toggle(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let Some(btn) = document.get_element_by_id("sound-toggle") else {
            log::warn!("No sound toggle in the page markup");
            return;
        };

        // Reflect the persisted state on load
        let _ = btn.set_attribute(
            "data-muted",
            if app.borrow().settings.muted { "true" } else { "false" },
        );

        let btn_clone = btn.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut a = app.borrow_mut();
            let muted = a.settings.toggle_muted();
            a.audio.set_muted(muted);
            a.settings.save();

            if !muted {
                // Unmuting needs the gesture-bound resume, and the click
                // doubles as audible confirmation
                a.audio.resume();
                a.audio.play(SoundEffect::Click);
            }

            let _ = btn_clone.set_attribute("data-muted", if muted { "true" } else { "false" });
            log::info!("Sound {}", if muted { "muted" } else { "enabled" });
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_visibility_pause(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let hidden = document_clone.visibility_state() == web_sys::VisibilityState::Hidden;
            app.borrow_mut().hidden = hidden;
            if hidden {
                log::info!("Paused (tab hidden)");
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_countdown(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Immediate paint, then once per second
        update_countdown_dom(CountdownState::remaining(EVENT_DATE_MS, now_ms() as u64));

        let timer = Interval::new(&window, COUNTDOWN_PERIOD_MS, move || {
            update_countdown_dom(CountdownState::remaining(EVENT_DATE_MS, now_ms() as u64));
        });
        if timer.is_none() {
            log::warn!("Countdown timer could not be scheduled");
        }
        app.borrow_mut()._countdown_timer = timer;
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_page::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Technova (native) starting...");
    log::info!("Native mode has no page host - run with `trunk serve` for the web version");

    // Exercise the core headless
    demo_countdown();
    demo_field();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_countdown() {
    use technova::consts::EVENT_DATE_MS;
    use technova::countdown::{CountdownState, format_field};

    let now_ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let state = CountdownState::remaining(EVENT_DATE_MS, now_ms);
    println!(
        "Countdown: {}d {}:{}:{}",
        state.days,
        format_field(state.hours),
        format_field(state.minutes),
        format_field(state.seconds)
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_field() {
    use technova::scene::{ParticleField, PointerOffset};

    let mut field = ParticleField::with_defaults(1000, 7);
    for frame in 0..3 {
        let elapsed = frame as f32 / 60.0;
        field.tick(elapsed, PointerOffset { x: 0.3, y: -0.2 });
    }
    let sprite = field.sprites()[0];
    println!(
        "Field: {} sprites, first at ({:.3}, {:.3}, {:.3})",
        field.len(),
        sprite.position.x,
        sprite.position.y,
        sprite.position.z
    );
}
