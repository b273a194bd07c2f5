//! Drawing charsets: role glyph tables and junction substitution.
//!
//! A charset assigns concrete glyphs to the 14 line-drawing *roles*
//! (horizontal stroke, vertical stroke, junctions, corners) and carries
//! default plot and fill glyphs. Translation tables describe, per call
//! site, how a new stroke merges with the glyph already occupying a cell;
//! the resolution itself happens in [`RoleTable::substitute`] and is how
//! independently drawn lines grow the correct junctions where they meet.

/// Number of glyph slots in a role table.
pub const ROLE_COUNT: usize = 14;

/// Line-drawing role of a glyph within a charset.
///
/// Discriminants are positions in the role table. Slots 8 and 9 are
/// reserved and never produced by drawing, but stay addressable so custom
/// charsets keep the traditional 14-slot layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Role {
    Horizontal = 0,
    Vertical = 1,
    Diagonal = 2,
    JunctionLeft = 3,
    JunctionTop = 4,
    JunctionBottom = 5,
    JunctionCross = 6,
    JunctionRight = 7,
    Reserved8 = 8,
    Reserved9 = 9,
    CornerTopLeft = 10,
    CornerTopRight = 11,
    CornerBottomLeft = 12,
    CornerBottomRight = 13,
}

impl Role {
    const ALL: [Self; ROLE_COUNT] = [
        Self::Horizontal,
        Self::Vertical,
        Self::Diagonal,
        Self::JunctionLeft,
        Self::JunctionTop,
        Self::JunctionBottom,
        Self::JunctionCross,
        Self::JunctionRight,
        Self::Reserved8,
        Self::Reserved9,
        Self::CornerTopLeft,
        Self::CornerTopRight,
        Self::CornerBottomLeft,
        Self::CornerBottomRight,
    ];

    /// Role at the given table position, if within the 14-slot layout.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this role in a role table.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Glyphs for the 14 line-drawing roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTable([char; ROLE_COUNT]);

impl RoleTable {
    /// Create a role table from exactly 14 glyphs.
    pub const fn new(glyphs: [char; ROLE_COUNT]) -> Self {
        Self(glyphs)
    }

    /// Build a role table from a glyph string.
    ///
    /// Short input is right-padded by repeating its last glyph; input
    /// beyond 14 glyphs is ignored. Returns `None` for an empty string,
    /// which has no last glyph to repeat.
    pub fn from_glyphs(glyphs: &str) -> Option<Self> {
        let mut chars = glyphs.chars();
        let mut last = chars.next()?;
        let mut table = [last; ROLE_COUNT];
        for slot in table.iter_mut().skip(1) {
            if let Some(ch) = chars.next() {
                last = ch;
            }
            *slot = last;
        }
        Some(Self(table))
    }

    /// Glyph drawn for the given role.
    pub fn glyph(&self, role: Role) -> char {
        self.0[role.index()]
    }

    /// Role of an existing glyph, scanning slots in order.
    ///
    /// The first matching slot wins. Duplicate glyphs are common (the
    /// ASCII table reuses `-` and `|` for junctions and corners), so the
    /// scan order is observable and must stay front to back.
    pub fn role_of(&self, glyph: char) -> Option<Role> {
        self.0.iter().position(|&g| g == glyph).and_then(Role::from_index)
    }

    /// Resolve the glyph actually written when `requested` lands on a
    /// cell holding `existing`.
    ///
    /// An absent or blank cell takes the requested glyph unchanged. A cell
    /// holding one of this table's glyphs is looked up in `map`: no entry
    /// means the two strokes do not merge and the requested glyph
    /// overwrites plainly, otherwise the mapped role's glyph (the junction
    /// or corner where the strokes meet) is written. Foreign glyphs are
    /// overwritten plainly. Total: every input combination yields a glyph.
    pub fn substitute(&self, requested: char, existing: Option<char>, map: &Translation) -> char {
        let Some(existing) = existing else {
            return requested;
        };
        if existing <= ' ' {
            return requested;
        }
        match self.role_of(existing) {
            Some(role) => match map.resolve(role) {
                Some(merged) => self.glyph(merged),
                None => requested,
            },
            None => requested,
        }
    }
}

/// A per-call-site substitution map for one stroke position.
///
/// One entry per role slot: `-1` leaves the requested glyph untouched,
/// a non-negative entry redirects to that role-table position. Entries
/// outside the table resolve to nothing, keeping resolution total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation([i8; ROLE_COUNT]);

impl Translation {
    /// Create a translation map from raw table entries.
    pub const fn new(map: [i8; ROLE_COUNT]) -> Self {
        Self(map)
    }

    /// Replacement role for a cell currently holding `role`, if any.
    pub fn resolve(&self, role: Role) -> Option<Role> {
        let entry = self.0[role.index()];
        if entry < 0 {
            return None;
        }
        Role::from_index(entry as usize)
    }
}

/// An immutable drawing character set.
///
/// Holds the role glyph table plus the default plot glyph (single points,
/// arcs) and fill glyph (filled rectangles).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    roles: RoleTable,
    plot: char,
    fill: char,
}

impl Charset {
    /// Plain ASCII drawing set.
    pub const ASCII: Self = Self {
        roles: RoleTable::new([
            '-', '|', '.', '|', '-', '-', '+', '|', 'x', 'x', '-', '-', '-', '-',
        ]),
        plot: '.',
        fill: '#',
    };

    /// Light Unicode box-drawing set.
    pub const LIGHT: Self = Self {
        roles: RoleTable::new([
            '─', '│', '·', '├', '┬', '┴', '┼', '┤', 'x', 'x', '┌', '┐', '└', '┘',
        ]),
        plot: '·',
        fill: '█',
    };

    /// Double Unicode box-drawing set.
    pub const DOUBLE: Self = Self {
        roles: RoleTable::new([
            '═', '║', '·', '╠', '╦', '╩', '╬', '╣', 'x', 'x', '╔', '╗', '╚', '╝',
        ]),
        plot: '·',
        fill: '█',
    };

    /// Built-in charsets, index-addressable: 0 ASCII, 1 light, 2 double.
    pub const BUILTINS: [Self; 3] = [Self::ASCII, Self::LIGHT, Self::DOUBLE];

    /// Built-in charset by index.
    ///
    /// Out-of-range indices clamp to the last built-in.
    pub fn builtin(index: usize) -> Self {
        let last = Self::BUILTINS.len() - 1;
        if index > last {
            log::debug!("charset index {index} out of range, clamping to {last}");
            return Self::BUILTINS[last];
        }
        Self::BUILTINS[index]
    }

    /// Custom charset from a glyph string (padded to 14 slots), plot
    /// glyph, and fill glyph. `None` when the glyph string is empty.
    pub fn custom(roles: &str, plot: char, fill: char) -> Option<Self> {
        Some(Self {
            roles: RoleTable::from_glyphs(roles)?,
            plot,
            fill,
        })
    }

    /// The role glyph table.
    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    /// Default glyph for single plotted points.
    pub fn plot(&self) -> char {
        self.plot
    }

    /// Default glyph for filled regions.
    pub fn fill(&self) -> char {
        self.fill
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::ASCII
    }
}
