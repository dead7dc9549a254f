//! Mount/unmount transitions.

use serde::Serialize;

use super::curve::AnimationCurve;
use super::decorator::{AnimationInstruction, Edge, VisualState};

/// One half of a transition: how a view looks while off screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionEffect {
    pub edge: Option<Edge>,
    pub scale: Option<f64>,
    pub opacity: bool,
}

impl TransitionEffect {
    pub const fn moving(edge: Edge) -> Self {
        Self {
            edge: Some(edge),
            scale: None,
            opacity: true,
        }
    }

    pub const fn scaling(scale: f64) -> Self {
        Self {
            edge: None,
            scale: Some(scale),
            opacity: true,
        }
    }

    pub fn hidden_state(&self, distance: f64) -> VisualState {
        let (offset_x, offset_y) = self.edge.map_or((0.0, 0.0), |e| e.offset(distance));
        VisualState {
            opacity: if self.opacity { 0.0 } else { 1.0 },
            offset_x,
            offset_y,
            scale: self.scale.unwrap_or(1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Insertion,
    Removal,
}

/// Effects applied when a view is inserted and removed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub insertion: TransitionEffect,
    pub removal: TransitionEffect,
}

impl Transition {
    /// Rise from the bottom edge.
    pub const SLIDE_UP: Self = Self::symmetric(TransitionEffect::moving(Edge::Bottom));
    /// Drop from the top edge.
    pub const SLIDE_DOWN: Self = Self::symmetric(TransitionEffect::moving(Edge::Top));
    /// Enter from trailing, leave toward leading.
    pub const SLIDE_IN: Self = Self {
        insertion: TransitionEffect::moving(Edge::Trailing),
        removal: TransitionEffect::moving(Edge::Leading),
    };
    pub const POP_IN: Self = Self::symmetric(TransitionEffect::scaling(0.8));

    pub const fn symmetric(effect: TransitionEffect) -> Self {
        Self {
            insertion: effect,
            removal: effect,
        }
    }

    pub fn is_asymmetric(&self) -> bool {
        self.insertion != self.removal
    }

    /// Instruction for mounting or unmounting a view.
    pub fn instruction(&self, phase: Phase, curve: AnimationCurve, distance: f64) -> AnimationInstruction {
        let (from, to) = match phase {
            Phase::Insertion => (self.insertion.hidden_state(distance), VisualState::VISIBLE),
            Phase::Removal => (VisualState::VISIBLE, self.removal.hidden_state(distance)),
        };
        AnimationInstruction {
            from,
            to,
            curve,
            delay: std::time::Duration::ZERO,
        }
    }
}
