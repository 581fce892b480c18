//! Grid, random and stack placement.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Position};

/// Arrangement applied to the whole deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutMode {
    #[default]
    Grid,
    Random,
    /// Cascading pile in the middle of the container. Not draggable.
    Stack,
}

impl LayoutMode {
    /// Whether items may be dragged while this layout is active.
    #[must_use]
    pub fn allows_drag(self) -> bool {
        !matches!(self, LayoutMode::Stack)
    }
}

/// Container and item geometry, in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub container_width: f32,
    pub container_height: f32,
    pub item_width: f32,
    pub item_height: f32,
    pub gap_x: f32,
    pub gap_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_width: 1200.0,
            container_height: 800.0,
            item_width: 200.0,
            item_height: 280.0,
            gap_x: 20.0,
            gap_y: 20.0,
        }
    }
}

impl LayoutConfig {
    /// Items per grid row, never less than one.
    #[must_use]
    pub fn columns(&self) -> usize {
        let pitch = self.item_width + self.gap_x;
        if pitch <= 0.0 {
            return 1;
        }
        ((self.container_width / pitch).floor() as usize).max(1)
    }
}

/// Row-major grid positions for `count` items.
#[must_use]
pub fn grid_layout(count: usize, config: &LayoutConfig) -> Vec<Position> {
    let columns = config.columns();
    (0..count)
        .map(|index| {
            let row = index / columns;
            let col = index % columns;
            Position::new(
                col as f32 * (config.item_width + config.gap_x),
                row as f32 * (config.item_height + config.gap_y),
            )
        })
        .collect()
}

/// One uniformly random top-left that keeps the item inside the container.
///
/// Coordinates are whole pixels; an item larger than the container is
/// pinned to 0 on that axis.
pub fn random_position(config: &LayoutConfig, rng: &mut GameRng) -> Position {
    let max_x = config.container_width - config.item_width;
    let max_y = config.container_height - config.item_height;
    let x = (rng.gen_unit() * max_x).floor().max(0.0);
    let y = (rng.gen_unit() * max_y).floor().max(0.0);
    Position::new(x, y)
}

#[must_use]
pub fn random_layout(count: usize, config: &LayoutConfig, rng: &mut GameRng) -> Vec<Position> {
    (0..count).map(|_| random_position(config, rng)).collect()
}

/// Centered pile, each item shifted 2px right and down from the previous.
#[must_use]
pub fn stack_layout(count: usize, config: &LayoutConfig) -> Vec<Position> {
    let origin = Position::new(
        config.container_width / 2.0 - config.item_width / 2.0,
        config.container_height / 2.0 - config.item_height / 2.0,
    );
    (0..count)
        .map(|index| {
            let step = index as f32 * 2.0;
            origin + Position::new(step, step)
        })
        .collect()
}

/// Positions for `count` items under `mode`.
pub fn arrange(
    mode: LayoutMode,
    count: usize,
    config: &LayoutConfig,
    rng: &mut GameRng,
) -> Vec<Position> {
    match mode {
        LayoutMode::Grid => grid_layout(count, config),
        LayoutMode::Random => random_layout(count, config, rng),
        LayoutMode::Stack => stack_layout(count, config),
    }
}
