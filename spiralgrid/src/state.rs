use crate::Vec2;

/// A lightweight, serializable snapshot of the current motion state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
/// It is a read-only view for hosts and debugging; there is deliberately no
/// restore path, since pan position is not persisted across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionState {
    pub offset: Vec2,
    pub velocity: Vec2,
    pub is_dragging: bool,
    pub is_moving: bool,
    pub rest_position: Vec2,
}
