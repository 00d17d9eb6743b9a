//! Direction map construction.
//!
//! Vertices sit at cell corners, so a `w x h` grid has `(w + 1) x (h + 1)` of them.
//! Each vertex looks at its four surrounding cells, packed into a 4-bit pattern
//! ([`NW`], [`NE`], [`SW`], [`SE`]), and [`TRANSITIONS`] maps the heading a walk
//! arrives with to the heading it leaves with. Boundaries keep filled cells on the
//! right of travel, so outer boundaries run clockwise on a y-down canvas.
//!
//! Saddle vertices (two diagonal cells filled) hold two independent transitions and
//! always turn towards the filled cell being followed, which keeps diagonal
//! neighbors in separate loops.
use crate::bitmask::CellGrid;
use crate::path::Segment;

/// Compass heading of a boundary step. `South` is +y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Vertex offset of one step in this direction.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Unit hop for one step in this direction.
    pub fn hop(self) -> Segment {
        match self {
            Direction::North => Segment::v(-1),
            Direction::East => Segment::h(1),
            Direction::South => Segment::v(1),
            Direction::West => Segment::h(-1),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }
}

pub const NW: u8 = 0b0001;
pub const NE: u8 = 0b0010;
pub const SW: u8 = 0b0100;
pub const SE: u8 = 0b1000;

const __: Option<Direction> = None;
const TN: Option<Direction> = Some(Direction::North);
const TE: Option<Direction> = Some(Direction::East);
const TS: Option<Direction> = Some(Direction::South);
const TW: Option<Direction> = Some(Direction::West);

/// `TRANSITIONS[pattern][incoming.index()]` is the outgoing heading, if the
/// boundary passes through a vertex with that neighborhood arriving that way.
#[rustfmt::skip]
pub const TRANSITIONS: [[Option<Direction>; 4]; 16] = [
    //  in: N   E   S   W
    [__, __, __, __], // ....
    [__, __, TW, __], // NW
    [__, __, __, TN], // NE
    [__, __, __, TW], // NW NE
    [__, TS, __, __], // SW
    [__, __, TS, __], // NW SW
    [__, TS, __, TN], // NE SW (saddle)
    [__, __, __, TS], // NW NE SW
    [TE, __, __, __], // SE
    [TE, __, TW, __], // NW SE (saddle)
    [TN, __, __, __], // NE SE
    [TW, __, __, __], // NW NE SE
    [__, TE, __, __], // SW SE
    [__, __, TE, __], // NW SW SE
    [__, TN, __, __], // NE SW SE
    [__, __, __, __], // all filled
];

/// Pack the four cells around vertex `(x, y)` into a pattern.
pub fn neighborhood<G: CellGrid + ?Sized>(grid: &G, x: i64, y: i64) -> u8 {
    let mut pattern = 0;
    if grid.get(x - 1, y - 1) {
        pattern |= NW;
    }
    if grid.get(x, y - 1) {
        pattern |= NE;
    }
    if grid.get(x - 1, y) {
        pattern |= SW;
    }
    if grid.get(x, y) {
        pattern |= SE;
    }
    pattern
}

/// Boundary transitions at one vertex, keyed by incoming heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VertexEntries {
    next: [Option<Direction>; 4],
    consumed: [bool; 4],
}

impl VertexEntries {
    fn from_pattern(pattern: u8) -> Self {
        Self {
            next: TRANSITIONS[(pattern & 0x0f) as usize],
            consumed: [false; 4],
        }
    }

    /// Outgoing heading for a walk arriving with `incoming`.
    pub fn outgoing(&self, incoming: Direction) -> Option<Direction> {
        self.next[incoming.index()]
    }

    /// Number of transitions recorded here (0, 1 or 2).
    pub fn len(&self) -> usize {
        self.next.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First incoming heading whose transition has not been walked yet.
    pub fn first_open(&self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| self.next[d.index()].is_some() && !self.consumed[d.index()])
    }

    fn take(&mut self, incoming: Direction) -> Option<Direction> {
        let i = incoming.index();
        if self.consumed[i] {
            return None;
        }
        let out = self.next[i]?;
        self.consumed[i] = true;
        Some(out)
    }
}

/// Transitions for every vertex of a grid.
#[derive(Clone, Debug)]
pub struct DirectionMap {
    cols: usize,
    rows: usize,
    vertices: Vec<VertexEntries>,
}

impl DirectionMap {
    pub fn build<G: CellGrid + ?Sized>(grid: &G) -> Self {
        let cols = grid.width() + 1;
        let rows = grid.height() + 1;
        let mut vertices = Vec::with_capacity(cols * rows);
        for y in 0..rows {
            for x in 0..cols {
                let pattern = neighborhood(grid, x as i64, y as i64);
                vertices.push(VertexEntries::from_pattern(pattern));
            }
        }
        Self {
            cols,
            rows,
            vertices,
        }
    }

    /// Vertex dimensions `(width + 1, height + 1)`.
    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn entries(&self, x: usize, y: usize) -> Option<&VertexEntries> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.vertices.get(y * self.cols + x)
    }

    /// Consume the transition at `(x, y)` for `incoming`, returning its outgoing heading.
    /// Returns `None` when the transition is absent or already walked.
    pub fn take(&mut self, x: i64, y: i64, incoming: Direction) -> Option<Direction> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return None;
        }
        let i = y as usize * self.cols + x as usize;
        self.vertices[i].take(incoming)
    }

    /// Vertices carrying at least one transition.
    pub fn active_vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| !v.is_empty()).count()
    }

    /// Total transitions, equal to the number of unit boundary edges.
    pub fn entry_count(&self) -> usize {
        self.vertices.iter().map(VertexEntries::len).sum()
    }
}
