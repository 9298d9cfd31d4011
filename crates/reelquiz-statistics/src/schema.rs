//! Statistics database schema.

/// SQL to create the game results table.
pub const CREATE_GAME_RESULTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS game_results (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    correct     INTEGER NOT NULL,
    total       INTEGER NOT NULL,
    finished_at TEXT    NOT NULL
);
";
