use serde::{Deserialize, Serialize};

/// What sits under a cell once it is uncovered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    Count(u8),
}

/// Player-visible state of a single cell. Only ever moves from `Hidden` to `Revealed`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Revealed(CellValue),
}

impl Visibility {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}
