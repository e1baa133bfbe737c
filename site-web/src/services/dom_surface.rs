//! DOM side of the animation engine.
//!
//! [`DomSurface`] maps engine target ids to live elements. Bounds come from
//! the layout box (`offsetTop`/`offsetLeft` summed up the offset-parent
//! chain), so the transforms the engine writes never feed back into the
//! trigger points.

use lib_motion::{AnimatedProps, Bounds, OwnerId, Surface, TargetId, Viewport};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Default)]
pub struct DomSurface {
    elements: HashMap<TargetId, (OwnerId, HtmlElement)>,
}

impl DomSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, owner: OwnerId, target: TargetId, element: HtmlElement) {
        self.elements.insert(target, (owner, element));
    }

    pub fn remove_owner(&mut self, owner: OwnerId) {
        self.elements.retain(|_, (element_owner, _)| *element_owner != owner);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    fn live(&self, target: TargetId) -> Option<&HtmlElement> {
        self.elements
            .get(&target)
            .map(|(_, element)| element)
            .filter(|element| element.is_connected())
    }
}

/// Document-relative layout box of `element`.
fn layout_bounds(element: &HtmlElement) -> Bounds {
    let mut top = 0.0;
    let mut left = 0.0;
    let mut current = Some(element.clone());
    while let Some(node) = current {
        top += f64::from(node.offset_top());
        left += f64::from(node.offset_left());
        current = node
            .offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    Bounds::new(
        top,
        left,
        f64::from(element.offset_width()),
        f64::from(element.offset_height()),
    )
}

impl Surface for DomSurface {
    fn measure(&self, target: TargetId) -> Option<Bounds> {
        self.live(target).map(layout_bounds)
    }

    fn apply(&mut self, target: TargetId, props: &AnimatedProps) -> bool {
        let Some(element) = self.live(target) else {
            return false;
        };
        let style = element.style();
        props
            .style_declarations()
            .iter()
            .all(|(name, value)| style.set_property(name, value).is_ok())
    }
}

/// Current window size and scroll position.
pub fn read_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    let scroll_y = window.scroll_y().ok()?;
    Some(Viewport::new(width, height, scroll_y))
}
