//! Drag controller driving the core computations over a scene.

use crate::scenario::{Scenario, Step};
use crate::AppError;
use dragbound_core::{
    get_bounding, get_position, inline_offset, valid_element, Envelope, NodeId, OffsetSide, Scene,
};
use kurbo::{Point, Vec2};
use serde::Serialize;

/// Offset of the draggable element after a replayed step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    pub step: usize,
    pub action: &'static str,
    /// Whether a drag is in progress after this step.
    pub dragging: bool,
    pub top: f64,
    pub left: f64,
    /// Envelope captured when the current drag started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope: Option<Envelope>,
}

/// State of the drag in progress.
#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    press_pointer: Point,
    start_offset: Vec2,
    envelope: Option<Envelope>,
}

/// Owns the scene and the mutable drag state.
#[derive(Debug)]
pub struct DragController {
    scene: Scene,
    draggable: NodeId,
    bounding: Option<NodeId>,
    handle: Option<String>,
    active: Option<ActiveDrag>,
}

impl DragController {
    /// Set up a controller for the scenario's scene and elements.
    pub fn new(scenario: &Scenario) -> Result<Self, AppError> {
        let scene = Scene::new(scenario.scene.clone());
        let draggable = scene.require_id(&scenario.draggable)?;
        let bounding = scenario
            .bounding
            .as_deref()
            .map(|id| scene.require_id(id))
            .transpose()?;
        Ok(Self {
            scene,
            draggable,
            bounding,
            handle: scenario.handle.clone(),
            active: None,
        })
    }

    /// The scene in its current state.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current inline offset of the draggable element.
    pub fn offset(&self) -> Vec2 {
        inline_offset(&self.scene.element(self.draggable))
    }

    /// Apply one step and report the resulting offset.
    pub fn apply(&mut self, index: usize, step: &Step) -> Result<StepOutcome, AppError> {
        match step {
            Step::Press { target, event } => {
                let target = self.scene.require_id(target)?;
                self.press(target, get_position(event));
            }
            Step::Move { event } => self.drag_to(get_position(event)),
            Step::Release => self.active = None,
        }

        let offset = self.offset();
        Ok(StepOutcome {
            step: index,
            action: step.action(),
            dragging: self.active.is_some(),
            top: offset.y,
            left: offset.x,
            envelope: self.active.and_then(|drag| drag.envelope),
        })
    }

    fn press(&mut self, target: NodeId, pointer: Point) {
        let root = self.scene.element(self.draggable);
        if !valid_element(&self.scene.element(target), &root, self.handle.as_deref()) {
            log::debug!("Press on {:?} is not a drag handle", target);
            return;
        }

        let bounding = self.bounding.map(|id| self.scene.element(id));
        let envelope = get_bounding(&root, bounding.as_ref());
        self.active = Some(ActiveDrag {
            press_pointer: pointer,
            start_offset: inline_offset(&root),
            envelope,
        });
    }

    fn drag_to(&mut self, pointer: Point) {
        let Some(drag) = self.active else {
            return;
        };
        if !(pointer.x.is_finite() && pointer.y.is_finite()) {
            log::warn!("Ignoring move without a usable pointer position");
            return;
        }

        let proposed = drag.start_offset + (pointer - drag.press_pointer);
        let next = match drag.envelope {
            Some(envelope) => envelope.clamp_offset(proposed),
            None => proposed,
        };
        self.move_to(next);
    }

    /// Write the new inline offset and shift the rendered geometry with it.
    fn move_to(&mut self, next: Vec2) {
        let delta = next - self.offset();
        self.scene.translate(self.draggable, delta.x, delta.y);
        if let Some(node) = self.scene.node_mut(self.draggable) {
            node.style.insert(OffsetSide::Top, format!("{}px", next.y));
            node.style.insert(OffsetSide::Left, format!("{}px", next.x));
        }
    }
}
