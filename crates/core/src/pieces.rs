//! Pieces module - tetromino shape catalog and kick-based rotation
//!
//! Each kind has a fixed, ordered list of rotation states. A state is four
//! `(row, col)` offsets relative to the piece anchor; rows grow downward.
//! Rotation is a plain offset-table step (not SRS): the next state is tried at
//! the current column, then shifted by the column kicks in [`KICK_OFFSETS`].

use crate::types::{Color, PieceKind};

/// Offset of a single mino relative to piece anchor, as `(row, col)`
pub type MinoOffset = (i32, i32);

/// Shape of a piece - 4 mino offsets from piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Column kicks tried in order when rotating
pub const KICK_OFFSETS: [i32; 5] = [0, -1, 1, -2, 2];

/// Static catalog entry for one piece kind
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeDef {
    pub rotations: &'static [PieceShape],
    pub color: Color,
}

const I_ROTATIONS: [PieceShape; 2] = [
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
];

const O_ROTATIONS: [PieceShape; 1] = [[(0, 0), (0, 1), (1, 0), (1, 1)]];

const T_ROTATIONS: [PieceShape; 4] = [
    [(0, -1), (0, 0), (0, 1), (-1, 0)],
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    [(0, -1), (0, 0), (0, 1), (1, 0)],
    [(-1, 0), (0, 0), (1, 0), (0, -1)],
];

const S_ROTATIONS: [PieceShape; 2] = [
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
];

const Z_ROTATIONS: [PieceShape; 2] = [
    [(0, 1), (0, 0), (1, 0), (1, -1)],
    [(-1, 1), (0, 1), (0, 0), (1, 0)],
];

const J_ROTATIONS: [PieceShape; 4] = [
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
    [(-1, 1), (-1, 0), (0, 0), (1, 0)],
    [(1, 1), (0, 1), (0, 0), (0, -1)],
    [(1, -1), (1, 0), (0, 0), (-1, 0)],
];

const L_ROTATIONS: [PieceShape; 4] = [
    [(-1, 1), (0, 1), (0, 0), (0, -1)],
    [(-1, -1), (-1, 0), (0, 0), (1, 0)],
    [(1, -1), (0, -1), (0, 0), (0, 1)],
    [(1, 1), (1, 0), (0, 0), (-1, 0)],
];

static I_DEF: ShapeDef = ShapeDef {
    rotations: &I_ROTATIONS,
    color: Color::Cyan,
};
static O_DEF: ShapeDef = ShapeDef {
    rotations: &O_ROTATIONS,
    color: Color::Yellow,
};
static T_DEF: ShapeDef = ShapeDef {
    rotations: &T_ROTATIONS,
    color: Color::Magenta,
};
static S_DEF: ShapeDef = ShapeDef {
    rotations: &S_ROTATIONS,
    color: Color::Green,
};
static Z_DEF: ShapeDef = ShapeDef {
    rotations: &Z_ROTATIONS,
    color: Color::Red,
};
static J_DEF: ShapeDef = ShapeDef {
    rotations: &J_ROTATIONS,
    color: Color::Blue,
};
static L_DEF: ShapeDef = ShapeDef {
    rotations: &L_ROTATIONS,
    color: Color::DarkYellow,
};

/// Look up the catalog entry for a piece kind
pub fn shape_def(kind: PieceKind) -> &'static ShapeDef {
    match kind {
        PieceKind::I => &I_DEF,
        PieceKind::O => &O_DEF,
        PieceKind::T => &T_DEF,
        PieceKind::S => &S_DEF,
        PieceKind::Z => &Z_DEF,
        PieceKind::J => &J_DEF,
        PieceKind::L => &L_DEF,
    }
}

/// Number of rotation states for a kind (1, 2 or 4)
pub fn rotation_count(kind: PieceKind) -> usize {
    shape_def(kind).rotations.len()
}

/// Get the shape for a kind and rotation index (taken modulo the state count)
pub fn get_shape(kind: PieceKind, rotation: usize) -> PieceShape {
    let rotations = shape_def(kind).rotations;
    rotations[rotation % rotations.len()]
}

/// Display color of a kind
pub fn color_of(kind: PieceKind) -> Color {
    shape_def(kind).color
}

/// Anchor row that puts the topmost mino of `shape` on row 0
pub fn top_aligned_row(shape: &PieceShape) -> i32 {
    -shape.iter().map(|&(row, _)| row).min().unwrap_or(0)
}

/// Whether every kind's first state fits horizontally when spawned at `width / 2`
pub fn spawn_fits_width(width: usize) -> bool {
    let anchor = (width / 2) as i32;
    PieceKind::ALL.iter().all(|&kind| {
        get_shape(kind, 0)
            .iter()
            .all(|&(_, col)| (0..width as i32).contains(&(anchor + col)))
    })
}

/// Try to advance a piece to its next rotation state
///
/// `is_valid(shape, col_offset)` reports whether the rotated shape fits after
/// shifting the anchor by `col_offset` columns. Kicks are tried in
/// [`KICK_OFFSETS`] order.
/// Returns `Some((new_rotation, col_offset))` for the first fit, `None` if all fail.
pub fn try_rotate(
    kind: PieceKind,
    rotation: usize,
    is_valid: impl Fn(&PieceShape, i32) -> bool,
) -> Option<(usize, i32)> {
    let new_rotation = (rotation + 1) % rotation_count(kind);
    let new_shape = get_shape(kind, new_rotation);

    KICK_OFFSETS
        .iter()
        .copied()
        .find(|&kick| is_valid(&new_shape, kick))
        .map(|kick| (new_rotation, kick))
}
