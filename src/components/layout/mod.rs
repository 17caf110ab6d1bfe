//! Layout Components
//!
//! Structural containers: container, row, column and the row-of-columns grid.

mod column;
mod container;
mod grid;
mod row;

pub use column::{Column, ColumnSize};
pub use container::{Container, ContainerSize};
pub use grid::{Grid, GridColumn};
pub use row::Row;

use crate::skin::Skin;

/// Layout provider for one skin
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    skin: Skin,
}

impl Layout {
    pub(crate) fn new(skin: Skin) -> Self {
        Self { skin }
    }

    /// Render a top-level container
    pub fn container(&self, container: &Container) -> String {
        container.render(self.skin)
    }

    /// Render a row
    pub fn row(&self, row: &Row) -> String {
        row.render(self.skin)
    }

    /// Render a column
    pub fn column(&self, column: &Column) -> String {
        column.render(self.skin)
    }

    /// Render a grid: each column rendered in order, wrapped in one row
    pub fn grid(&self, grid: &Grid) -> String {
        grid.render(self.skin)
    }
}
