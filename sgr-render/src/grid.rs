//! Column-major placement of days onto the grid.

use sgr_github::day_record::ColoredDay;

use crate::config::GridConfig;

/// Column and row of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
}

impl Cell {
    /// Cell of the `index`-th day, filling each column top to bottom.
    pub fn for_index(index: usize, config: &GridConfig) -> Cell {
        let rows = config.rows.max(1) as usize;
        Cell {
            column: (index / rows) as u32,
            row: (index % rows) as u32,
        }
    }

    /// Top-left corner of the cell in px.
    pub fn origin(&self, config: &GridConfig) -> (u32, u32) {
        (self.column * config.pitch(), self.row * config.pitch())
    }
}

/// One filled square of the static grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square<'a> {
    pub cell: Cell,
    pub x: u32,
    pub y: u32,
    pub fill: &'a str,
}

pub fn squares<'a>(days: &'a [ColoredDay], config: &GridConfig) -> Vec<Square<'a>> {
    days.iter()
        .enumerate()
        .map(|(i, day)| {
            let cell = Cell::for_index(i, config);
            let (x, y) = cell.origin(config);
            Square {
                cell,
                x,
                y,
                fill: day.color.as_str(),
            }
        })
        .collect()
}
