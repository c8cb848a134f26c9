/// Single coordinate axis used for board positions and edge length.
pub type Coord = u8;

/// Count type used for mine counts and cell-state tallies.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Number of cells on a square board of the given edge length.
pub const fn area(size: Coord) -> CellCount {
    (size as CellCount) * (size as CellCount)
}

/// `ndarray` index for a coordinate pair.
pub(crate) const fn nd((x, y): Coord2) -> [usize; 2] {
    [x as usize, y as usize]
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn offset_within(center: Coord2, delta: (i8, i8), size: Coord) -> Option<Coord2> {
    let next_x = center.0.checked_add_signed(delta.0)?;
    let next_y = center.1.checked_add_signed(delta.1)?;
    (next_x < size && next_y < size).then_some((next_x, next_y))
}

/// Iterates the in-bounds 8-neighbourhood of `center` on a square board.
/// Edge and corner cells yield fewer positions; there is no wraparound.
pub fn neighbors(center: Coord2, size: Coord) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS
        .into_iter()
        .filter_map(move |delta| offset_within(center, delta, size))
}
