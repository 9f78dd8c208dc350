//! Hero background: drifting particles on a full-viewport canvas.
//!
//! ARCHITECTURE
//! ============
//! [`ParticleField`] owns the simulation in logical pixels. This host owns
//! the canvas, keeps its backing store at `viewport * dpr` with the context
//! scaled by `dpr`, and drives one `step` + draw per animation frame. The
//! colour is read from a CSS custom property on `<body>` every frame so a
//! theme switch shows up immediately.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

use crate::config::ParticleSettings;
use crate::state::particles::{ParticleField, Viewport};
use crate::util::dom::{self, DomError, EventListener, report};

pub const CANVAS_ID: &str = "hero-canvas";

struct Scene {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    body: HtmlElement,
    field: ParticleField,
    rng: SmallRng,
    dpr: f64,
}

fn viewport(window: &Window) -> Result<Viewport, DomError> {
    let width = window.inner_width().map_err(|err| DomError::js("read innerWidth", err))?;
    let height = window.inner_height().map_err(|err| DomError::js("read innerHeight", err))?;
    Ok(Viewport::new(width.as_f64().unwrap_or(0.0), height.as_f64().unwrap_or(0.0)))
}

impl Scene {
    /// Size the canvas for the current window and rebuild the particle set.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self) -> Result<(), DomError> {
        let window = dom::window()?;
        let viewport = viewport(&window)?;
        let dpr = window.device_pixel_ratio().max(1.0);

        self.canvas.set_width((viewport.width * dpr).round() as u32);
        self.canvas.set_height((viewport.height * dpr).round() as u32);
        let style = self.canvas.style();
        style
            .set_property("width", &format!("{}px", viewport.width))
            .map_err(|err| DomError::js("set canvas width", err))?;
        style
            .set_property("height", &format!("{}px", viewport.height))
            .map_err(|err| DomError::js("set canvas height", err))?;

        self.dpr = dpr;
        self.field.reseed(viewport, &mut self.rng);
        Ok(())
    }

    fn particle_color(&self, window: &Window) -> String {
        let settings = self.field.settings();
        let computed = match window.get_computed_style(&self.body) {
            Ok(Some(style)) => style.get_property_value(&settings.color_property).unwrap_or_default(),
            _ => String::new(),
        };
        let color = computed.trim();
        if color.is_empty() { settings.fallback_color.clone() } else { color.to_owned() }
    }

    fn frame(&mut self) -> Result<(), DomError> {
        let window = dom::window()?;
        let color = self.particle_color(&window);
        self.field.step();
        draw(&self.ctx, &self.field, self.dpr, &color).map_err(|err| DomError::js("draw particles", err))
    }
}

/// Clear and paint every particle. Coordinates are logical; the transform
/// carries the pixel-density scale.
fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, dpr: f64, color: &str) -> Result<(), JsValue> {
    let Some(viewport) = field.viewport() else {
        return Ok(());
    };
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    ctx.set_fill_style_str(color);
    ctx.set_global_alpha(field.settings().opacity);
    for particle in field.particles() {
        ctx.begin_path();
        ctx.arc(particle.x, particle.y, particle.radius, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A running `requestAnimationFrame` loop. Cancelling (or dropping) stops
/// future frames.
pub struct FrameLoop {
    cancelled: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    /// Call `tick` once per display refresh until cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] if the first frame cannot be requested.
    pub fn start<F>(mut tick: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let cancelled = Rc::new(Cell::new(false));
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let cancelled_cb = Rc::clone(&cancelled);
        let pending_cb = Rc::clone(&pending);
        let callback_cb = Rc::clone(&callback);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            pending_cb.set(None);
            if cancelled_cb.get() {
                return;
            }
            tick();
            report("particles", request_frame(&callback_cb, &pending_cb));
        }) as Box<dyn FnMut(f64)>));

        request_frame(&callback, &pending)?;
        Ok(Self { cancelled, pending, callback })
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
            if let Err(err) = window.cancel_animation_frame(id) {
                log::debug!("cancel animation frame: {err:?}");
            }
        }
        // Breaks the closure's reference to itself.
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(callback: &FrameCallback, pending: &Cell<Option<i32>>) -> Result<(), DomError> {
    let window = dom::window()?;
    let slot = callback.borrow();
    let Some(cb) = slot.as_ref() else {
        return Ok(());
    };
    let id = window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|err| DomError::js("request animation frame", err))?;
    pending.set(Some(id));
    Ok(())
}

/// Dropping this stops the animation and detaches the resize listener.
pub struct ParticleCanvas {
    _frames: FrameLoop,
    _resize: EventListener,
}

/// Seed the field for the current window and start animating.
///
/// # Errors
///
/// Returns [`DomError`] when the 2D context is unavailable or the frame loop
/// / resize listener cannot be set up.
pub fn mount(canvas: HtmlCanvasElement, body: HtmlElement, settings: ParticleSettings) -> Result<ParticleCanvas, DomError> {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DomError::WrongElement("2d context".to_owned()))?,
        Ok(None) => return Err(DomError::WrongElement("2d context".to_owned())),
        Err(err) => return Err(DomError::js("get 2d context", err)),
    };

    let seed = js_sys::Date::now().to_bits();
    let mut scene = Scene {
        canvas,
        ctx,
        body,
        field: ParticleField::new(settings),
        rng: SmallRng::seed_from_u64(seed),
        dpr: 1.0,
    };
    scene.resize()?;
    let scene = Rc::new(RefCell::new(scene));

    let window = dom::window()?;
    let scene_for_resize = Rc::clone(&scene);
    let resize = EventListener::new(&window, "resize", move |_| {
        report("particles", scene_for_resize.borrow_mut().resize());
    })?;

    let frames = FrameLoop::start(move || {
        report("particles", scene.borrow_mut().frame());
    })?;

    Ok(ParticleCanvas { _frames: frames, _resize: resize })
}
