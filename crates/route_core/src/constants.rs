/// Edge weight type
pub type Weight = f64;
/// Planar coordinate of a city as it appears in the city file
pub type Coord = i32;
