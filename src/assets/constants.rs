/// Sub-directory of the asset root holding terrain textures
pub const TEXTURES_DIR: &str = "textures";

/// Sub-directory of the asset root holding entity sprites
pub const ENTITIES_DIR: &str = "entities";

/// Background texture of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Dirt,
    Grass,
    DarkGrass,
    Water,
}

impl Terrain {
    pub const ALL: [Terrain; 4] = [
        Terrain::Dirt,
        Terrain::Grass,
        Terrain::DarkGrass,
        Terrain::Water,
    ];

    /// Texture for a location symbol. Unknown symbols fall back to dirt.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'S' => Terrain::Dirt,            // The Shire
            'b' | '.' => Terrain::Grass,     // Bag End, Middle Earth
            'F' => Terrain::DarkGrass,       // Mirkwood Forest
            'R' => Terrain::Water,           // The River Sherbourne
            _ => Terrain::Dirt,
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Terrain::Dirt => "dirt.png",
            Terrain::Grass => "grass.png",
            Terrain::DarkGrass => "darkgrass.png",
            Terrain::Water => "water.png",
        }
    }
}

/// Sprite drawn for an entity on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Axe,
    Sword,
    Tree,
    Wood,
    Suit,
    Ring,
    Treasure,
    Goblin,
    Dorko,
    Biblo,
    /// Question-mark placeholder for anything without its own sprite
    Unknown,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 11] = [
        SpriteKind::Axe,
        SpriteKind::Sword,
        SpriteKind::Tree,
        SpriteKind::Wood,
        SpriteKind::Suit,
        SpriteKind::Ring,
        SpriteKind::Treasure,
        SpriteKind::Goblin,
        SpriteKind::Dorko,
        SpriteKind::Biblo,
        SpriteKind::Unknown,
    ];

    /// Sprite for an entity symbol. Unknown symbols get the placeholder.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "†" => SpriteKind::Axe,
            "s" => SpriteKind::Sword,
            "T" => SpriteKind::Tree,
            "w" => SpriteKind::Wood,
            "c" => SpriteKind::Suit,
            "o" => SpriteKind::Ring,
            "$" => SpriteKind::Treasure,
            "g" => SpriteKind::Goblin,
            "d" => SpriteKind::Dorko,
            "@" => SpriteKind::Biblo,
            _ => SpriteKind::Unknown,
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            SpriteKind::Axe => "axe.png",
            SpriteKind::Sword => "sword.png",
            SpriteKind::Tree => "tree.png",
            SpriteKind::Wood => "logs.png",
            SpriteKind::Suit => "suit.png",
            SpriteKind::Ring => "ring.png",
            SpriteKind::Treasure => "treasure.png",
            SpriteKind::Goblin => "goblin.png",
            SpriteKind::Dorko => "dorko.png",
            SpriteKind::Biblo => "biblo.png",
            SpriteKind::Unknown => "unknown.png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_symbols() {
        assert_eq!(Terrain::from_symbol('S'), Terrain::Dirt);
        assert_eq!(Terrain::from_symbol('b'), Terrain::Grass);
        assert_eq!(Terrain::from_symbol('.'), Terrain::Grass);
        assert_eq!(Terrain::from_symbol('F'), Terrain::DarkGrass);
        assert_eq!(Terrain::from_symbol('R'), Terrain::Water);
    }

    #[test]
    fn test_unknown_terrain_is_dirt() {
        assert_eq!(Terrain::from_symbol('?'), Terrain::Dirt);
        assert_eq!(Terrain::from_symbol('s'), Terrain::Dirt);
    }

    #[test]
    fn test_unknown_entity_is_placeholder() {
        assert_eq!(SpriteKind::from_symbol("o"), SpriteKind::Ring);
        assert_eq!(SpriteKind::from_symbol("w"), SpriteKind::Wood);
        assert_eq!(SpriteKind::from_symbol("z"), SpriteKind::Unknown);
        assert_eq!(SpriteKind::from_symbol(""), SpriteKind::Unknown);
        // Symbols are matched whole, not by prefix
        assert_eq!(SpriteKind::from_symbol("oo"), SpriteKind::Unknown);
    }

    #[test]
    fn test_wood_uses_logs_bitmap() {
        assert_eq!(SpriteKind::Wood.file_name(), "logs.png");
    }
}
