use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use crate::data::Rgb;
use crate::geometry::{Outline, PathPair, Segment};

/// Fills the tree's outlines on a 2D canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
    pub leaf_color: Rgb,
    pub trunk_color: Rgb,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
            .ok_or("Canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context has an unexpected type".to_string())?;

        Ok(Self {
            ctx,
            width: canvas.width(),
            height: canvas.height(),
            leaf_color: Rgb::LEAF,
            trunk_color: Rgb::TRUNK,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Clear the canvas and fill leaf then trunk
    pub fn draw(&self, paths: &PathPair) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);

        self.fill_outline(&paths.leaf, &self.leaf_color);
        self.fill_outline(&paths.trunk, &self.trunk_color);
    }

    fn fill_outline(&self, outline: &Outline, color: &Rgb) {
        let ctx = &self.ctx;

        ctx.begin_path();
        ctx.move_to(outline.start.x as f64, outline.start.y as f64);
        for segment in &outline.segments {
            match *segment {
                Segment::Cubic { ctrl1, ctrl2, to } => ctx.bezier_curve_to(
                    ctrl1.x as f64,
                    ctrl1.y as f64,
                    ctrl2.x as f64,
                    ctrl2.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                Segment::Quad { ctrl, to } => {
                    ctx.quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64)
                }
            }
        }
        ctx.close_path();

        ctx.set_fill_style_str(&color.to_css());
        ctx.fill();
    }
}
