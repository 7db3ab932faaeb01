use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub mod animation;
pub mod data;
pub mod geometry;
pub mod log;
pub mod math;
pub mod render;
pub mod shape;

pub use data::{Rgb, TreeConfig};
pub use geometry::{left_aligned_pair, Outline, PathPair};
pub use shape::{TreeShape, WiggleState};

use animation::Completion;
use render::CanvasRenderer;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A swaying tree drawn on a canvas, exposed to JavaScript
#[wasm_bindgen]
pub struct TreeView {
    renderer: CanvasRenderer,
    tree: TreeShape,
}

#[wasm_bindgen]
impl TreeView {
    /// Create an upright tree filling the canvas height
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<TreeView, JsValue> {
        let config = TreeConfig {
            height: canvas.height() as f32,
            ..TreeConfig::default()
        };
        Self::with_config(&canvas, &config)
    }

    /// Create a tree from a YAML configuration
    #[wasm_bindgen]
    pub fn from_yaml(canvas: HtmlCanvasElement, yaml: &str) -> Result<TreeView, JsValue> {
        let config = TreeConfig::from_yaml(yaml)
            .map_err(|e| JsValue::from_str(&e))?;
        Self::with_config(&canvas, &config)
    }

    fn with_config(canvas: &HtmlCanvasElement, config: &TreeConfig) -> Result<TreeView, JsValue> {
        let mut renderer = CanvasRenderer::new(canvas)
            .map_err(|e| JsValue::from_str(&e))?;
        renderer.leaf_color = config.leaf_color;
        renderer.trunk_color = config.trunk_color;

        Ok(Self {
            renderer,
            tree: TreeShape::from_config(config),
        })
    }

    /// Reset to new bounds, bending and optional `#rrggbb` colors.
    /// Any running animation is dropped.
    #[wasm_bindgen]
    pub fn setup(
        &mut self,
        width: u32,
        height: u32,
        bending: f32,
        leaf_color: Option<String>,
        trunk_color: Option<String>,
    ) -> Result<(), JsValue> {
        if let Some(hex) = leaf_color {
            self.renderer.leaf_color = Rgb::from_hex(&hex).map_err(|e| JsValue::from_str(&e))?;
        }
        if let Some(hex) = trunk_color {
            self.renderer.trunk_color = Rgb::from_hex(&hex).map_err(|e| JsValue::from_str(&e))?;
        }

        self.renderer.resize(width, height);
        self.tree = TreeShape::new(height as f32, bending);
        Ok(())
    }

    /// Bend the tree; `duration` is capped at 0.25s when animated
    #[wasm_bindgen]
    pub fn set_bending(&mut self, value: f32, animated: bool, duration: f32) {
        self.tree.set_bending(value, animated, duration);
    }

    #[wasm_bindgen]
    pub fn bending(&self) -> f32 {
        self.tree.bending()
    }

    /// Follow a canvas resize. Returns false while an animation defers it.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.renderer.resize(width, height);
        self.tree.resize(height as f32)
    }

    #[wasm_bindgen]
    pub fn recompute_paths(&mut self) -> bool {
        self.tree.recompute_paths()
    }

    /// Start the wiggle. `completion` is called asynchronously once it
    /// finishes on its own.
    #[wasm_bindgen]
    pub fn start_wiggle(&mut self, completion: Option<js_sys::Function>) -> bool {
        let completion = completion.map(|callback| -> Completion {
            Box::new(move || defer_callback(callback))
        });
        self.tree.start_wiggle(completion)
    }

    #[wasm_bindgen]
    pub fn stop_wiggle(&mut self) -> bool {
        self.tree.stop_wiggle()
    }

    #[wasm_bindgen]
    pub fn is_wiggling(&self) -> bool {
        self.tree.is_wiggling()
    }

    #[wasm_bindgen]
    pub fn set_leaf_color(&mut self, r: f32, g: f32, b: f32) {
        self.renderer.leaf_color = Rgb::new(r, g, b).clamped();
    }

    #[wasm_bindgen]
    pub fn set_trunk_color(&mut self, r: f32, g: f32, b: f32) {
        self.renderer.trunk_color = Rgb::new(r, g, b).clamped();
    }

    /// Advance animations and draw a frame
    #[wasm_bindgen]
    pub fn render(&mut self, dt: f32) {
        self.tree.tick(dt);
        self.renderer.draw(&self.tree.presentation());
    }

    /// SVG path data of the leaf as currently shown
    #[wasm_bindgen]
    pub fn leaf_path_data(&self) -> String {
        self.tree.presentation().leaf.to_svg_path_data()
    }

    /// SVG path data of the trunk as currently shown
    #[wasm_bindgen]
    pub fn trunk_path_data(&self) -> String {
        self.tree.presentation().trunk.to_svg_path_data()
    }
}

/// Run a JS callback on a later task, so it may call back into the view
fn defer_callback(callback: js_sys::Function) {
    let result = match web_sys::window() {
        Some(window) => window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&callback, 0)
            .map(|_| ()),
        None => callback.call0(&JsValue::NULL).map(|_| ()),
    };

    if let Err(e) = result {
        log::warn(&format!("wiggle completion failed: {:?}", e));
    }
}
