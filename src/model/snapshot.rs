use super::{GridEntity, GridModel, Location};

/// Everything the map view needs to draw one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSnapshot {
    pub symbol: char,
    pub long_description: String,
    /// Occupant symbols in the order the entity manager returned them
    pub entities: Vec<String>,
}

/// A frozen copy of the grid taken on the simulation thread.
/// This is the only form in which the world crosses over to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major, `width * height` cells
    pub cells: Vec<CellSnapshot>,
}

impl MapSnapshot {
    /// Capture the whole grid, row by row
    pub fn capture<G: GridModel>(grid: &G) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut cells = Vec::with_capacity(width * height);

        for row in 0..height {
            for col in 0..width {
                let location = grid.location_at(col, row);
                cells.push(CellSnapshot {
                    symbol: location.symbol(),
                    long_description: location.long_description(),
                    entities: grid
                        .contents_of(location)
                        .into_iter()
                        .map(|entity| entity.symbol().to_string())
                        .collect(),
                });
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Cell at the given column and row
    #[cfg(test)]
    pub fn cell(&self, col: usize, row: usize) -> Option<&CellSnapshot> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(row * self.width + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::SampleWorld;

    #[test]
    fn test_capture_is_row_major() {
        let world = SampleWorld::from_rows(&["Sb", ".R"]);
        let snapshot = MapSnapshot::capture(&world);

        assert_eq!((snapshot.width, snapshot.height), (2, 2));
        assert_eq!(snapshot.cells.len(), 4);
        assert_eq!(snapshot.cell(0, 0).map(|c| c.symbol), Some('S'));
        assert_eq!(snapshot.cell(1, 0).map(|c| c.symbol), Some('b'));
        assert_eq!(snapshot.cell(0, 1).map(|c| c.symbol), Some('.'));
        assert_eq!(snapshot.cell(1, 1).map(|c| c.symbol), Some('R'));
        assert_eq!(snapshot.cell(2, 0), None);
    }

    #[test]
    fn test_capture_keeps_entity_order() {
        let mut world = SampleWorld::from_rows(&["."]);
        for symbol in ["o", "s", "w"] {
            world.place(symbol, symbol, (0, 0));
        }
        let snapshot = MapSnapshot::capture(&world);

        let cell = snapshot.cell(0, 0).expect("cell");
        assert_eq!(cell.entities, vec!["o", "s", "w"]);
        assert_eq!(cell.long_description, "Middle Earth (0, 0)");
    }
}
