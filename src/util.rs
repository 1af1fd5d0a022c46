/// Grid coordinate as `(row, col)`, 0-indexed.
pub type Pos = (u16, u16);

pub const DIRS_8: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn pos_index((row, col): Pos, rows: u16, cols: u16) -> Option<usize> {
    if rows <= row || cols <= col {
        None
    } else {
        Some(row as usize * cols as usize + col as usize)
    }
}

pub fn index_pos(index: usize, rows: u16, cols: u16) -> Option<Pos> {
    let rs = rows as usize;
    let cs = cols as usize;
    if index >= rs * cs {
        None
    } else {
        Some(((index / cs) as u16, (index % cs) as u16))
    }
}

/// The up-to-8 in-bounds neighbors of `(row, col)`; fewer at edges and corners.
pub fn neighbors((row, col): Pos, rows: u16, cols: u16) -> impl Iterator<Item = Pos> {
    DIRS_8
        .iter()
        .map(|(dr, dc)| (*dr as i16, *dc as i16))
        .filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < rows && c < cols).then_some((r, c))
        })
}
