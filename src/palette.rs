use fxhash::FxHashSet;

/// A pixel color as red, green, blue and alpha channels.
pub type Rgba = [u8; 4];

/// A set of colors. Membership decides whether a pixel is passable or marks a point of interest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorSet {
    colors: FxHashSet<Rgba>,
}

impl ColorSet {
    pub fn new() -> ColorSet {
        ColorSet::default()
    }

    pub fn contains(&self, color: &Rgba) -> bool {
        self.colors.contains(color)
    }

    pub fn insert(&mut self, color: Rgba) -> bool {
        self.colors.insert(color)
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgba> {
        self.colors.iter()
    }
}

impl FromIterator<Rgba> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Rgba>>(iter: I) -> ColorSet {
        ColorSet {
            colors: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[Rgba; N]> for ColorSet {
    fn from(colors: [Rgba; N]) -> ColorSet {
        colors.into_iter().collect()
    }
}

/// The role each recognised color plays in a map image. Points of interest are drawn in the
/// location color and connected by road and open air; walls block movement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub location: Rgba,
    pub wall: Rgba,
    pub road: Rgba,
    pub air: Rgba,
}

pub const LOCATION_COLOR: Rgba = [255, 0, 0, 255];
pub const WALL_COLOR: Rgba = [0, 0, 0, 255];
pub const ROAD_COLOR: Rgba = [251, 242, 54, 255];
pub const AIR_COLOR: Rgba = [255, 255, 255, 255];

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            location: LOCATION_COLOR,
            wall: WALL_COLOR,
            road: ROAD_COLOR,
            air: AIR_COLOR,
        }
    }
}

impl Palette {
    /// Colors that mark points of interest.
    pub fn location_colors(&self) -> ColorSet {
        ColorSet::from([self.location])
    }

    /// Colors a path between points of interest may travel over.
    pub fn passable_colors(&self) -> ColorSet {
        ColorSet::from([self.location, self.road, self.air])
    }

    /// Character used when rendering a pixel of the given color.
    pub fn glyph(&self, color: &Rgba) -> char {
        if *color == self.location {
            'L'
        } else if *color == self.wall {
            '#'
        } else if *color == self.road {
            '='
        } else if *color == self.air {
            '.'
        } else {
            '?'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roles() {
        let palette = Palette::default();
        let passable = palette.passable_colors();
        assert!(passable.contains(&LOCATION_COLOR));
        assert!(passable.contains(&ROAD_COLOR));
        assert!(passable.contains(&AIR_COLOR));
        assert!(!passable.contains(&WALL_COLOR));
        assert_eq!(palette.location_colors().len(), 1);
    }

    #[test]
    fn alpha_is_significant() {
        let colors = ColorSet::from([AIR_COLOR]);
        assert!(!colors.contains(&[255, 255, 255, 0]));
    }
}
