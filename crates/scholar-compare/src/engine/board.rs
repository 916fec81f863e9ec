//! Review-board partitioning for saved snapshots.
//!
//! The board assigns each saved snapshot id to one of four fixed columns.
//! Reconciliation re-partitions an existing assignment against the current
//! history: ids removed from history disappear, new ids surface at the top of
//! the undecided column, and no id ever appears twice.

use serde::{Deserialize, Serialize};

/// The four fixed board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardColumn {
    /// Not yet triaged.
    Undecided,
    /// Needs a closer look.
    Analysis,
    /// Likely to be dropped.
    Discard,
    /// Shortlisted.
    Confirmed,
}

impl BoardColumn {
    /// All columns in display order.
    pub const ALL: [Self; 4] = [Self::Undecided, Self::Analysis, Self::Discard, Self::Confirmed];
}

/// Snapshot-id assignment across the four columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Not yet triaged, newest first.
    #[serde(default)]
    pub undecided: Vec<String>,

    /// Needs a closer look.
    #[serde(default)]
    pub analysis: Vec<String>,

    /// Likely to be dropped.
    #[serde(default)]
    pub discard: Vec<String>,

    /// Shortlisted.
    #[serde(default)]
    pub confirmed: Vec<String>,
}

impl Board {
    /// Ids in one column.
    #[must_use]
    pub fn column(&self, column: BoardColumn) -> &[String] {
        match column {
            BoardColumn::Undecided => &self.undecided,
            BoardColumn::Analysis => &self.analysis,
            BoardColumn::Discard => &self.discard,
            BoardColumn::Confirmed => &self.confirmed,
        }
    }

    fn column_mut(&mut self, column: BoardColumn) -> &mut Vec<String> {
        match column {
            BoardColumn::Undecided => &mut self.undecided,
            BoardColumn::Analysis => &mut self.analysis,
            BoardColumn::Discard => &mut self.discard,
            BoardColumn::Confirmed => &mut self.confirmed,
        }
    }

    /// Every id on the board, column by column.
    fn all_ids(&self) -> impl Iterator<Item = &String> {
        BoardColumn::ALL.into_iter().flat_map(|c| self.column(c).iter())
    }

    /// Whether any column holds the id.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.all_ids().any(|existing| existing == id)
    }
}

/// Re-partition a board against the live set of saved snapshot ids.
///
/// Each column keeps only ids still present in `live_ids` (order preserved);
/// live ids not yet on the board are prepended to `undecided`, most recent
/// first. Afterwards every live id appears in exactly one column and nothing
/// else appears anywhere.
#[must_use]
pub fn reconcile(current: &Board, live_ids: &[String]) -> Board {
    let mut next = Board::default();

    for column in BoardColumn::ALL {
        let kept: Vec<String> = current
            .column(column)
            .iter()
            .filter(|id| live_ids.contains(*id))
            .cloned()
            .collect();
        *next.column_mut(column) = kept;
    }

    let missing: Vec<String> =
        live_ids.iter().filter(|id| !next.contains(id.as_str())).cloned().collect();
    let mut undecided = missing;
    undecided.append(&mut next.undecided);
    next.undecided = undecided;

    next
}

/// Move one id to a target column, removing it from wherever it was.
///
/// Removing from every column first makes the move safe even if the id was
/// duplicated by an earlier bug or a stale store.
#[must_use]
pub fn move_card(board: &Board, id: &str, to: BoardColumn) -> Board {
    let mut next = board.clone();
    for column in BoardColumn::ALL {
        next.column_mut(column).retain(|existing| existing != id);
    }
    next.column_mut(to).push(id.to_string());
    next
}
