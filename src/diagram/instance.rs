use crate::{
    animation::state::VisualState,
    config::HostConfig,
    diagram::{
        modal::DemoModal,
        spec::{DiagramSpec, NodeLink, TriggerKind},
    },
    foundation::core::Seconds,
    foundation::error::{ChoreoError, ChoreoResult},
    geometry::canvas::{AnchorPosition, project},
    loops::driver::{LoopDriver, LoopHandle, LoopSpec},
    navigation::destination::{Destination, Navigator},
    reveal::{
        choreographer::{Choreographer, RevealPhase},
        schedule::ElementState,
        trigger::{MountTimer, RevealTrigger, VisibilityTrigger},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DiagramState {
    /// Loops running, reveal not started (or reverted).
    Mounted,
    Revealing,
    RevealComplete,
    /// Terminal: loops cancelled, trigger released.
    Unmounted,
}

/// Placement and state of one node in a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeFrame {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub destination: Destination,
    pub anchor: AnchorPosition,
    pub state: VisualState,
    pub hovered: bool,
    pub focused: bool,
}

/// Snapshot of a diagram at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiagramFrame {
    pub diagram: String,
    pub time: Seconds,
    pub state: DiagramState,
    pub elements: Vec<ElementState>,
    pub nodes: Vec<NodeFrame>,
    pub center_label: Option<AnchorPosition>,
}

impl DiagramFrame {
    pub fn element(&self, id: &str) -> Option<&VisualState> {
        self.elements.iter().find(|e| e.target == id).map(|e| &e.state)
    }

    pub fn node(&self, id: &str) -> Option<&NodeFrame> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// A mounted diagram: one reveal lifecycle plus independent perpetual loops.
///
/// Rendered element state is the reveal state with every running loop on
/// that element layered on top via [`VisualState::modulate`].
#[derive(Debug)]
pub struct Diagram {
    spec: DiagramSpec,
    trigger: Box<dyn RevealTrigger>,
    choreographer: Choreographer,
    loops: LoopDriver,
    handles: Vec<LoopHandle>,
    // Loops that could not start render at their rest value.
    resting: Vec<LoopSpec>,
    state: DiagramState,
    mounted_at: Seconds,
    hovered: Option<String>,
    focused: Option<String>,
    modal: DemoModal,
}

impl Diagram {
    /// Mount `spec` at `now`: start every loop, then arm the reveal trigger.
    #[tracing::instrument(skip(spec, config), fields(diagram = %spec.name))]
    pub fn mount(spec: DiagramSpec, config: &HostConfig, now: Seconds) -> ChoreoResult<Self> {
        spec.validate()?;
        config.validate()?;

        let trigger = build_trigger(spec.trigger, config)?;
        let choreographer = Choreographer::new(spec.schedule.clone(), spec.policy);

        let mut diagram = Self {
            spec,
            trigger,
            choreographer,
            loops: LoopDriver::new(),
            handles: Vec::new(),
            resting: Vec::new(),
            state: DiagramState::Mounted,
            mounted_at: now,
            hovered: None,
            focused: None,
            modal: DemoModal::default(),
        };

        if config.animations {
            for spec in diagram.spec.loops.clone() {
                match diagram.loops.start(spec.clone(), now) {
                    Ok(handle) => diagram.handles.push(handle),
                    Err(err) => {
                        tracing::warn!(element = %spec.target, %err, "loop failed to start; rendering static");
                        diagram.resting.push(spec);
                    }
                }
            }
        } else {
            diagram.resting = diagram.spec.loops.clone();
            diagram.choreographer.degrade_to_static();
        }

        diagram.trigger.arm(now);
        if !diagram.trigger.is_supported() {
            tracing::warn!("reveal trigger unsupported by host");
            diagram.choreographer.degrade_to_static();
        }

        diagram.tick(now);
        tracing::debug!(loops = diagram.handles.len(), state = ?diagram.state, "mounted");
        Ok(diagram)
    }

    pub fn spec(&self) -> &DiagramSpec {
        &self.spec
    }

    pub fn state(&self) -> DiagramState {
        self.state
    }

    pub fn mounted_at(&self) -> Seconds {
        self.mounted_at
    }

    pub fn choreographer(&self) -> &Choreographer {
        &self.choreographer
    }

    pub fn loops(&self) -> &LoopDriver {
        &self.loops
    }

    pub fn loop_handles(&self) -> &[LoopHandle] {
        &self.handles
    }

    pub fn trigger(&self) -> &dyn RevealTrigger {
        self.trigger.as_ref()
    }

    pub fn modal(&self) -> &DemoModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut DemoModal {
        &mut self.modal
    }

    /// Feed an intersection ratio sample taken at `now`.
    pub fn observe_visibility(&mut self, ratio: f64, now: Seconds) {
        if self.state == DiagramState::Unmounted {
            return;
        }
        self.trigger.observe(ratio);
        self.tick(now);
    }

    /// Deliver pending trigger events and advance the lifecycle to `now`.
    pub fn tick(&mut self, now: Seconds) -> DiagramState {
        if self.state == DiagramState::Unmounted {
            return self.state;
        }
        while let Some(event) = self.trigger.emit(now) {
            self.choreographer.handle(event, now);
        }
        let next = self.state_at(now);
        if next != self.state {
            tracing::debug!(diagram = %self.spec.name, from = ?self.state, to = ?next, "state change");
            self.state = next;
        }
        self.state
    }

    fn state_at(&self, now: Seconds) -> DiagramState {
        if self.state == DiagramState::Unmounted {
            return DiagramState::Unmounted;
        }
        if self.choreographer.is_static() {
            return DiagramState::RevealComplete;
        }
        match self.choreographer.phase(now) {
            RevealPhase::Idle => DiagramState::Mounted,
            RevealPhase::Playing { .. } => DiagramState::Revealing,
            RevealPhase::Complete { .. } => DiagramState::RevealComplete,
        }
    }

    /// Element state at `now` with loop modulation applied.
    pub fn element_state(&self, id: &str, now: Seconds) -> Option<VisualState> {
        let known = self.spec.elements().contains(&id);
        if !known {
            return None;
        }
        let base = self
            .choreographer
            .state_of(id, now)
            .unwrap_or_default();
        Some(self.modulated(id, base, now).clamped())
    }

    fn modulated(&self, id: &str, base: VisualState, now: Seconds) -> VisualState {
        let running = self
            .loops
            .modulations(id, now)
            .into_iter()
            .fold(base, |s, (property, v)| s.modulate(property, v));
        self.resting
            .iter()
            .filter(|l| l.target == id)
            .fold(running, |s, l| s.modulate(l.property, l.rest_value()))
    }

    /// Sample the whole diagram at `now`.
    pub fn frame(&self, now: Seconds) -> DiagramFrame {
        let reveal = self.choreographer.sample(now);
        let elements: Vec<ElementState> = self
            .spec
            .elements()
            .into_iter()
            .map(|id| {
                let base = reveal
                    .iter()
                    .find(|e| e.target == id)
                    .map(|e| e.state)
                    .unwrap_or_default();
                ElementState {
                    target: id.to_string(),
                    state: self.modulated(id, base, now).clamped(),
                }
            })
            .collect();

        let nodes = self
            .spec
            .nodes
            .iter()
            .filter_map(|node| self.node_frame(node, &elements))
            .collect();

        let center_label = self
            .spec
            .center_label
            .as_ref()
            .and_then(|_| self.spec.shape.centroid())
            .map(|c| project(c, self.spec.shape.canvas));

        DiagramFrame {
            diagram: self.spec.name.clone(),
            time: now,
            state: self.state_at(now),
            elements,
            nodes,
            center_label,
        }
    }

    fn node_frame(&self, node: &NodeLink, elements: &[ElementState]) -> Option<NodeFrame> {
        let anchor = self.spec.shape.project_anchor(&node.id)?;
        let state = elements
            .iter()
            .find(|e| e.target == node.id)
            .map(|e| e.state)
            .unwrap_or_default();
        Some(NodeFrame {
            id: node.id.clone(),
            label: node.label.clone(),
            icon: node.icon.clone(),
            destination: node.destination.clone(),
            anchor,
            state,
            hovered: self.hovered.as_deref() == Some(node.id.as_str()),
            focused: self.focused.as_deref() == Some(node.id.as_str()),
        })
    }

    /// Hand the node's destination to `navigator`. Animation state is untouched.
    #[tracing::instrument(skip(self, navigator), fields(diagram = %self.spec.name))]
    pub fn activate(
        &self,
        node_id: &str,
        navigator: &mut dyn Navigator,
    ) -> ChoreoResult<Destination> {
        if self.state == DiagramState::Unmounted {
            return Err(ChoreoError::evaluation(format!(
                "diagram '{}' is unmounted",
                self.spec.name
            )));
        }
        let node = self.spec.node(node_id).ok_or_else(|| {
            ChoreoError::evaluation(format!(
                "diagram '{}' has no node '{node_id}'",
                self.spec.name
            ))
        })?;
        navigator.navigate(&node.destination);
        Ok(node.destination.clone())
    }

    /// Set or clear the hovered node; returns false for unknown ids.
    pub fn set_hover(&mut self, node_id: Option<&str>) -> bool {
        set_node_flag(&self.spec, &mut self.hovered, node_id)
    }

    pub fn set_focus(&mut self, node_id: Option<&str>) -> bool {
        set_node_flag(&self.spec, &mut self.focused, node_id)
    }

    /// Cancel every loop and release the trigger. Idempotent; the diagram
    /// never leaves `Unmounted`.
    #[tracing::instrument(skip(self), fields(diagram = %self.spec.name))]
    pub fn unmount(&mut self) {
        if self.state == DiagramState::Unmounted {
            return;
        }
        let cancelled = self.loops.cancel_all();
        self.handles.clear();
        self.trigger.release();
        self.hovered = None;
        self.focused = None;
        self.state = DiagramState::Unmounted;
        tracing::debug!(cancelled, "unmounted");
    }
}

impl Drop for Diagram {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn set_node_flag(spec: &DiagramSpec, slot: &mut Option<String>, node_id: Option<&str>) -> bool {
    match node_id {
        None => {
            *slot = None;
            true
        }
        Some(id) if spec.node(id).is_some() => {
            *slot = Some(id.to_string());
            true
        }
        Some(_) => false,
    }
}

fn build_trigger(kind: TriggerKind, config: &HostConfig) -> ChoreoResult<Box<dyn RevealTrigger>> {
    Ok(match kind {
        TriggerKind::MountTimer => Box::new(MountTimer::new()),
        TriggerKind::Visibility { .. } if !config.intersection_observer => {
            Box::new(VisibilityTrigger::unsupported())
        }
        TriggerKind::Visibility { threshold } => {
            let threshold = config.visibility_threshold.unwrap_or(threshold);
            Box::new(VisibilityTrigger::with_hysteresis(
                threshold,
                config.hysteresis.min(threshold),
            )?)
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/instance.rs"]
mod tests;
