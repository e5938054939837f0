use crate::model::{CompassBearing, GridEntity, GridModel, Location};

/// Terrain name used for a location's long description
fn terrain_name(symbol: char) -> &'static str {
    match symbol {
        'S' => "The Shire",
        'b' => "Bag End",
        '.' => "Middle Earth",
        'F' => "Mirkwood Forest",
        'R' => "The River Sherbourne",
        _ => "Wilderland",
    }
}

const SAMPLE_MAP: [&str; 6] = [
    "SSSbb..FFF",
    "SSbbb..FFF",
    "S......RFF",
    "...RRRRR.F",
    "RRRR.....F",
    "......FFFF",
];

/// Symbols of things the hero can pick up
const PORTABLE: [&str; 6] = ["†", "s", "w", "c", "o", "$"];

/// One cell of the sample world
#[derive(Debug, Clone)]
pub struct Place {
    symbol: char,
    col: usize,
    row: usize,
}

impl Location for Place {
    fn symbol(&self) -> char {
        self.symbol
    }

    fn long_description(&self) -> String {
        format!("{} ({}, {})", terrain_name(self.symbol), self.col, self.row)
    }
}

/// Something standing on a place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thing {
    pub symbol: String,
    pub description: String,
    pub position: (usize, usize),
}

impl Thing {
    pub fn is_portable(&self) -> bool {
        PORTABLE.contains(&self.symbol.as_str())
    }
}

impl GridEntity for Thing {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// A small fixed world with one hero.
///
/// Things are kept in placement order, which is also the order
/// `contents_of` reports them in.
#[derive(Debug, Clone)]
pub struct SampleWorld {
    width: usize,
    height: usize,
    places: Vec<Place>,
    things: Vec<Thing>,
    /// Index of the hero in `things`, once placed
    hero: Option<usize>,
    pub inventory: Vec<Thing>,
}

impl SampleWorld {
    /// The built-in demo world: the Shire, Bag End, Mirkwood and the river
    pub fn new() -> Self {
        let mut world = Self::from_rows(&SAMPLE_MAP);
        world.place_hero("Biblo", (4, 0));
        world.place("o", "a golden ring", (4, 0));
        world.place("c", "a mithril suit", (2, 1));
        world.place("s", "a short sword", (5, 2));
        world.place("†", "a woodsman's axe", (1, 3));
        world.place("w", "a pile of wood", (1, 3));
        world.place("T", "an old oak", (7, 0));
        world.place("T", "a beech tree", (8, 1));
        world.place("T", "a twisted pine", (9, 3));
        world.place("d", "Dorko the dwarf", (2, 5));
        world.place("g", "a goblin", (8, 5));
        world.place("$", "a dragon's hoard", (9, 5));
        world
    }

    /// A world with the given terrain rows and nothing on it.
    /// Rows shorter than the first are padded with `.`.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.first().map_or(0, |row| row.chars().count());
        let height = rows.len();
        let mut places = Vec::with_capacity(width * height);

        for (row, line) in rows.iter().enumerate() {
            let mut symbols = line.chars();
            for col in 0..width {
                places.push(Place {
                    symbol: symbols.next().unwrap_or('.'),
                    col,
                    row,
                });
            }
        }

        Self {
            width,
            height,
            places,
            things: Vec::new(),
            hero: None,
            inventory: Vec::new(),
        }
    }

    /// Put a thing on the map
    pub fn place(&mut self, symbol: &str, description: &str, position: (usize, usize)) {
        self.things.push(Thing {
            symbol: symbol.to_string(),
            description: description.to_string(),
            position,
        });
    }

    pub fn place_hero(&mut self, name: &str, position: (usize, usize)) {
        self.place("@", name, position);
        self.hero = Some(self.things.len() - 1);
    }

    pub fn hero(&self) -> Option<&Thing> {
        self.hero.map(|index| &self.things[index])
    }

    /// Where the hero stands, as a location
    pub fn hero_place(&self) -> Option<&Place> {
        let (col, row) = self.hero()?.position;
        Some(self.location_at(col, row))
    }

    /// Bearings the hero can step towards: inside the map and not into the river
    pub fn open_bearings(&self) -> Vec<CompassBearing> {
        let Some(hero) = self.hero() else {
            return Vec::new();
        };

        CompassBearing::ALL
            .into_iter()
            .filter(|&bearing| {
                self.neighbour(hero.position, bearing)
                    .is_some_and(|(col, row)| self.location_at(col, row).symbol != 'R')
            })
            .collect()
    }

    /// Portable things sharing the hero's cell, as indices into the thing list
    pub fn items_at_hero(&self) -> Vec<usize> {
        let Some(hero) = self.hero() else {
            return Vec::new();
        };

        self.things
            .iter()
            .enumerate()
            .filter(|(_, thing)| thing.position == hero.position && thing.is_portable())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn thing(&self, index: usize) -> Option<&Thing> {
        self.things.get(index)
    }

    /// Step the hero one cell. Returns false if the step is not open.
    pub fn move_hero(&mut self, bearing: CompassBearing) -> bool {
        if !self.open_bearings().contains(&bearing) {
            return false;
        }
        let Some(index) = self.hero else {
            return false;
        };

        if let Some(position) = self.neighbour(self.things[index].position, bearing) {
            self.things[index].position = position;
            return true;
        }
        false
    }

    /// Move a portable thing from the hero's cell into the inventory
    pub fn take(&mut self, index: usize) -> Option<&Thing> {
        if !self.items_at_hero().contains(&index) {
            return None;
        }

        let thing = self.things.remove(index);
        if let Some(hero) = self.hero.as_mut() {
            if *hero > index {
                *hero -= 1;
            }
        }
        self.inventory.push(thing);
        self.inventory.last()
    }

    fn neighbour(&self, (col, row): (usize, usize), bearing: CompassBearing) -> Option<(usize, usize)> {
        let (dc, dr) = bearing.offset();
        let col = col.checked_add_signed(dc as isize)?;
        let row = row.checked_add_signed(dr as isize)?;
        (col < self.width && row < self.height).then_some((col, row))
    }
}

impl Default for SampleWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl GridModel for SampleWorld {
    type Location = Place;
    type Entity = Thing;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn location_at(&self, col: usize, row: usize) -> &Place {
        &self.places[row * self.width + col]
    }

    fn contents_of(&self, location: &Place) -> Vec<&Thing> {
        self.things
            .iter()
            .filter(|thing| thing.position == (location.col, location.row))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_world_is_rectangular() {
        let world = SampleWorld::new();
        assert_eq!(world.width(), 10);
        assert_eq!(world.height(), 6);
        assert_eq!(world.location_at(9, 5).long_description(), "Mirkwood Forest (9, 5)");
    }

    #[test]
    fn test_contents_in_placement_order() {
        let world = SampleWorld::new();
        let start = world.hero_place().expect("hero");
        let symbols: Vec<_> = world.contents_of(start).iter().map(|t| t.symbol()).collect();
        assert_eq!(symbols, vec!["@", "o"]);
    }

    #[test]
    fn test_hero_cannot_leave_map_or_swim() {
        let mut world = SampleWorld::from_rows(&["SR", ".."]);
        world.place_hero("Biblo", (0, 0));

        let open = world.open_bearings();
        assert_eq!(open, vec![CompassBearing::SouthEast, CompassBearing::South]);
        assert!(!world.move_hero(CompassBearing::East));
        assert!(world.move_hero(CompassBearing::South));
        assert_eq!(world.hero().map(|h| h.position), Some((0, 1)));
    }

    #[test]
    fn test_take_moves_item_to_inventory() {
        let mut world = SampleWorld::from_rows(&["S"]);
        world.place("o", "a ring", (0, 0));
        world.place_hero("Biblo", (0, 0));
        world.place("T", "a tree", (0, 0));

        assert_eq!(world.items_at_hero(), vec![0]);
        let taken = world.take(0).map(|t| t.description.clone());
        assert_eq!(taken.as_deref(), Some("a ring"));

        // The hero index follows the removal
        assert_eq!(world.hero().map(|h| h.symbol.as_str()), Some("@"));
        assert!(world.items_at_hero().is_empty());
        assert!(world.take(1).is_none());
    }
}
