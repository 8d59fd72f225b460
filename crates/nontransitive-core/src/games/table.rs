//! Pairwise outcome table shown as help.

use super::moves::MoveSet;
use super::rules::{Outcome, RuleEngine};
use serde::Serialize;
use std::fmt;

/// One row of the table: `outcomes[j]` is this move played against move `j`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelationRow {
    #[serde(rename = "move")]
    pub move_name: String,
    pub outcomes: Vec<Outcome>,
}

/// Square outcome matrix over a move set, from each row's perspective.
///
/// `Display` renders the tab-separated grid with a `Move` header row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelationTable {
    pub moves: Vec<String>,
    pub rows: Vec<RelationRow>,
}

impl RelationTable {
    /// Build the table for the engine's move set
    pub fn build(rules: &RuleEngine) -> Self {
        let moves = rules.moves();
        let n = moves.len();

        let rows = moves
            .iter()
            .enumerate()
            .map(|(i, name)| RelationRow {
                move_name: name.to_string(),
                outcomes: (0..n).map(|j| rules.resolve_index(i, j)).collect(),
            })
            .collect();

        Self {
            moves: moves.iter().map(str::to_string).collect(),
            rows,
        }
    }

    /// Outcome of `row` against `column`
    pub fn cell(&self, row: usize, column: usize) -> Option<Outcome> {
        self.rows.get(row)?.outcomes.get(column).copied()
    }
}

/// Build the table straight from a move set
pub fn build_table(moves: &MoveSet) -> RelationTable {
    RelationTable::build(&RuleEngine::new(moves.clone()))
}

impl fmt::Display for RelationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move")?;
        for name in &self.moves {
            write!(f, "\t{name}")?;
        }
        for row in &self.rows {
            write!(f, "\n{}", row.move_name)?;
            for outcome in &row.outcomes {
                write!(f, "\t{outcome}")?;
            }
        }
        Ok(())
    }
}
