//! Grid Component
//!
//! A one-row grid: each `(size, content)` column is rendered through
//! [`Column`], the results are concatenated in order and wrapped in one
//! [`Row`].

use serde::{Deserialize, Serialize};

use super::column::{Column, ColumnSize};
use super::row::Row;
use crate::skin::Skin;

/// One grid cell: a column share and its fragment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridColumn {
    #[serde(default)]
    pub size: ColumnSize,
    #[serde(default)]
    pub content: String,
}

impl GridColumn {
    pub fn new(size: ColumnSize, content: impl Into<String>) -> Self {
        Self {
            size,
            content: content.into(),
        }
    }
}

/// An ordered sequence of columns wrapped in a single row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Grid {
    pub columns: Vec<GridColumn>,
    /// Extra class names for the wrapping row
    #[serde(default)]
    pub class: String,
}

impl Grid {
    /// Create a grid from its columns
    pub fn new(columns: Vec<GridColumn>) -> Self {
        Self {
            columns,
            class: String::new(),
        }
    }

    /// Set extra class names on the wrapping row
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub(crate) fn render(&self, skin: Skin) -> String {
        let cells: String = self
            .columns
            .iter()
            .map(|col| {
                Column::new(col.content.as_str())
                    .size(col.size)
                    .render(skin)
            })
            .collect();
        Row::new(cells).class(self.class.as_str()).render(skin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_columns() -> Vec<GridColumn> {
        vec![
            GridColumn::new(ColumnSize::Share(8), "left"),
            GridColumn::new(ColumnSize::Share(12), "middle"),
            GridColumn::new(ColumnSize::Auto, "right"),
        ]
    }

    #[test]
    fn test_grid_equals_row_of_columns() {
        for skin in [Skin::Bootstrap5, Skin::Purecss] {
            let grid = Grid::new(sample_columns()).class("g").render(skin);
            let cells: String = sample_columns()
                .iter()
                .map(|c| Column::new(c.content.as_str()).size(c.size).render(skin))
                .collect();
            let row = Row::new(cells).class("g").render(skin);
            assert_eq!(grid, row);
        }
    }

    #[test]
    fn test_column_order_preserved() {
        let html = Grid::new(sample_columns()).render(Skin::Bootstrap5);
        let left = html.find("left").expect("left cell");
        let middle = html.find("middle").expect("middle cell");
        let right = html.find("right").expect("right cell");
        assert!(left < middle && middle < right);
    }
}
