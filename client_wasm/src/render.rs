//! Canvas2D drawing: everything lands on a fixed-size offscreen surface which
//! is then letterboxed onto the visible canvas.

use crate::assets::Assets;
use crate::hud;
use crate::viewport::Letterbox;
use game_core::{Params, Rect, RenderSnapshot};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

const LOGICAL_W: f64 = Params::ARENA_WIDTH as f64;
const LOGICAL_H: f64 = Params::ARENA_HEIGHT as f64;

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    surface: HtmlCanvasElement,
    g: CanvasRenderingContext2d,
    letterbox: Letterbox,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has unexpected type"))
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let surface: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        surface.set_width(LOGICAL_W as u32);
        surface.set_height(LOGICAL_H as u32);

        let ctx = context_2d(&canvas)?;
        let g = context_2d(&surface)?;
        let letterbox = Letterbox::fit(
            canvas.width() as f64,
            canvas.height() as f64,
            LOGICAL_W,
            LOGICAL_H,
        );

        Ok(Self {
            canvas,
            ctx,
            surface,
            g,
            letterbox,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.letterbox = Letterbox::fit(width as f64, height as f64, LOGICAL_W, LOGICAL_H);
    }

    pub fn letterbox(&self) -> &Letterbox {
        &self.letterbox
    }

    pub fn draw(&self, snap: &RenderSnapshot, assets: &Assets) -> Result<(), JsValue> {
        let g = &self.g;
        g.clear_rect(0.0, 0.0, LOGICAL_W, LOGICAL_H);

        match &assets.background {
            Some(img) => g.draw_image_with_html_image_element_and_dw_and_dh(
                img, 0.0, 0.0, LOGICAL_W, LOGICAL_H,
            )?,
            None => {
                g.set_fill_style_str(hud::BACKGROUND);
                g.fill_rect(0.0, 0.0, LOGICAL_W, LOGICAL_H);
            }
        }

        g.set_fill_style_str(hud::TRAIL_COLOR);
        for point in &snap.trail {
            let size = snap.player.size.x as f64;
            g.begin_path();
            g.arc(
                point.x as f64 + size / 2.0,
                point.y as f64 + size / 2.0,
                size / 4.0,
                0.0,
                TAU,
            )?;
            g.fill();
        }

        self.draw_box(&snap.player, assets.player.as_ref(), hud::PLAYER_COLOR)?;
        for clone in &snap.clones {
            self.draw_box(clone, assets.shadow.as_ref(), hud::CLONE_COLOR)?;
        }

        for p in &snap.particles {
            g.set_fill_style_str(&hud::css_color(p.color));
            g.begin_path();
            g.arc(p.pos.x as f64, p.pos.y as f64, p.size as f64, 0.0, TAU)?;
            g.fill();
        }

        g.set_fill_style_str(hud::TEXT_COLOR);
        g.set_font(hud::FONT);
        for (i, line) in hud::canvas_lines(snap).iter().enumerate() {
            g.fill_text(line, 10.0, 24.0 + 24.0 * i as f64)?;
        }

        if let Some((text, color)) = hud::banner(snap) {
            g.set_fill_style_str(color);
            g.set_text_align("center");
            g.fill_text(text, LOGICAL_W / 2.0, LOGICAL_H / 2.0)?;
            g.set_text_align("start");
        }

        self.present()
    }

    fn draw_box(
        &self,
        rect: &Rect,
        image: Option<&HtmlImageElement>,
        fallback: &str,
    ) -> Result<(), JsValue> {
        let (x, y) = (rect.pos.x as f64, rect.pos.y as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);
        match image {
            Some(img) => self
                .g
                .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h)?,
            None => {
                self.g.set_fill_style_str(fallback);
                self.g.fill_rect(x, y, w, h);
            }
        }
        Ok(())
    }

    /// Blit the logical surface onto the visible canvas
    fn present(&self) -> Result<(), JsValue> {
        let lb = &self.letterbox;
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.set_image_smoothing_enabled(false);
        self.ctx
            .draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &self.surface,
                0.0,
                0.0,
                LOGICAL_W,
                LOGICAL_H,
                lb.x,
                lb.y,
                lb.width,
                lb.height,
            )
    }
}
