use chrono::{DateTime, Utc};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::*;

/// Directory boards are saved under when none is configured.
pub const DEFAULT_SAVE_DIR: &str = "saved_files";

/// On-disk snapshot of a [`Board`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedBoard {
    pub grid_size: Coord,
    pub cell_size: u32,
    pub figure: String,
    pub cells: Vec<Vec<bool>>,
    pub saved_at: DateTime<Utc>,
}

impl SavedBoard {
    pub fn snapshot(board: &Board) -> Self {
        let size = board.grid_size();
        let cells = (0..size)
            .map(|row| (0..size).map(|col| board[(row, col)]).collect())
            .collect();
        Self {
            grid_size: size,
            cell_size: board.cell_size(),
            figure: board.figure().to_owned(),
            cells,
            saved_at: Utc::now(),
        }
    }
}

/// Storage directory for saved boards.
///
/// File names follow `<base>_<g>x<g>_<n>.json` where `n` is the smallest
/// positive integer still free in the directory.
#[derive(Clone, Debug)]
pub struct SaveDir {
    root: PathBuf,
}

impl SaveDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a snapshot of `board`, returning the file name it landed under.
    pub fn save(&self, board: &Board, base: &str) -> SaveResult<String> {
        fs::create_dir_all(&self.root)?;

        let name = self.next_file_name(base, board.grid_size())?;
        let path = self.root.join(&name);
        let staging = path.with_extension("json.tmp");

        let payload = serde_json::to_vec(&SavedBoard::snapshot(board)).map_err(io::Error::from)?;
        fs::write(&staging, payload)?;
        fs::rename(&staging, &path)?;

        log::debug!("saved board to {}", path.display());
        Ok(name)
    }

    /// Replaces `board` with the snapshot stored under `name`.
    ///
    /// The snapshot is validated against the board before anything is
    /// touched; a failed load leaves the board as it was.
    pub fn load(&self, name: &str, board: &mut Board) -> SaveResult<()> {
        let path = self.root.join(name);
        let bytes = fs::read(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SaveError::NotFound(name.to_owned()),
            _ => SaveError::Io(err),
        })?;

        let saved: SavedBoard =
            serde_json::from_slice(&bytes).map_err(|err| SaveError::CorruptData(err.to_string()))?;

        if saved.grid_size != board.grid_size() {
            return Err(SaveError::CorruptData(format!(
                "snapshot is {0}x{0} but the current board is {1}x{1}",
                saved.grid_size,
                board.grid_size(),
            )));
        }

        let SavedBoard {
            grid_size,
            cell_size,
            figure,
            cells,
            saved_at,
        } = saved;
        let cells = cell_matrix(grid_size, cells)?;
        board.restore(cells, cell_size, figure);
        log::debug!("loaded board from {} (saved at {})", path.display(), saved_at);
        Ok(())
    }

    fn next_file_name(&self, base: &str, grid_size: Coord) -> SaveResult<String> {
        let mut suffix: u32 = 1;
        loop {
            let name = format!("{base}_{g}x{g}_{suffix}.json", g = grid_size);
            if !self.root.join(&name).try_exists()? {
                return Ok(name);
            }
            suffix += 1;
        }
    }
}

impl Default for SaveDir {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_DIR)
    }
}

fn cell_matrix(grid_size: Coord, rows: Vec<Vec<bool>>) -> SaveResult<Array2<bool>> {
    let side = usize::from(grid_size);
    if rows.len() != side || rows.iter().any(|row| row.len() != side) {
        return Err(SaveError::CorruptData(format!(
            "cell matrix does not have {side}x{side} shape"
        )));
    }

    let flat: Vec<bool> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec([side, side], flat)
        .map_err(|err| SaveError::CorruptData(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn board(grid_size: Coord) -> Board {
        Board::new(BoardConfig::new(grid_size, 50, "circle"))
    }

    fn save_dir() -> (TempDir, SaveDir) {
        let dir = TempDir::new().unwrap();
        let saves = SaveDir::new(dir.path());
        (dir, saves)
    }

    #[test]
    fn save_and_load_round_trips_the_full_grid() {
        for grid_size in [5, 10, 15] {
            let (_dir, saves) = save_dir();
            let mut original = board(grid_size);
            original.toggle((0, 0)).unwrap();
            original.toggle((grid_size - 1, grid_size / 2)).unwrap();

            let name = saves.save(&original, "saved_board").unwrap();
            assert_eq!(name, format!("saved_board_{g}x{g}_1.json", g = grid_size));

            let mut restored = board(grid_size);
            saves.load(&name, &mut restored).unwrap();

            assert_eq!(restored, original);
            assert!(restored.is_clicked((0, 0)));
            assert_eq!(restored.clicked_count(), 2);
        }
    }

    #[test]
    fn repeated_saves_pick_distinct_suffixes() {
        let (_dir, saves) = save_dir();
        let game = board(5);

        let first = saves.save(&game, "saved_board").unwrap();
        let second = saves.save(&game, "saved_board").unwrap();

        assert_eq!(first, "saved_board_5x5_1.json");
        assert_eq!(second, "saved_board_5x5_2.json");
        assert!(saves.root().join(&first).exists());
        assert!(saves.root().join(&second).exists());
    }

    #[test]
    fn deleted_suffix_hole_is_refilled() {
        let (_dir, saves) = save_dir();
        let game = board(5);

        saves.save(&game, "s").unwrap();
        let second = saves.save(&game, "s").unwrap();
        saves.save(&game, "s").unwrap();

        std::fs::remove_file(saves.root().join(&second)).unwrap();

        assert_eq!(saves.save(&game, "s").unwrap(), second);
    }

    #[test]
    fn load_missing_file_leaves_board_unchanged() {
        let (_dir, saves) = save_dir();
        let mut game = board(5);
        game.toggle((2, 2)).unwrap();
        let before = game.clone();

        let err = saves.load("saved_board_5x5_1.json", &mut game).unwrap_err();

        assert!(matches!(err, SaveError::NotFound(_)));
        assert_eq!(game, before);
    }

    #[test]
    fn load_rejects_grid_size_mismatch() {
        let (_dir, saves) = save_dir();
        let name = saves.save(&board(5), "saved_board").unwrap();

        let mut target = board(10);
        let before = target.clone();
        let err = saves.load(&name, &mut target).unwrap_err();

        assert!(matches!(err, SaveError::CorruptData(_)));
        assert_eq!(target, before);
    }

    #[test]
    fn load_rejects_undecodable_payload() {
        let (_dir, saves) = save_dir();
        std::fs::create_dir_all(saves.root()).unwrap();
        std::fs::write(saves.root().join("bad_5x5_1.json"), b"not a snapshot").unwrap();

        let mut game = board(5);
        let before = game.clone();
        let err = saves.load("bad_5x5_1.json", &mut game).unwrap_err();

        assert!(matches!(err, SaveError::CorruptData(_)));
        assert_eq!(game, before);
    }

    #[test]
    fn load_rejects_malformed_cell_matrix() {
        let (_dir, saves) = save_dir();
        std::fs::create_dir_all(saves.root()).unwrap();

        let mut snapshot = SavedBoard::snapshot(&board(5));
        snapshot.cells.pop();
        let payload = serde_json::to_vec(&snapshot).unwrap();
        std::fs::write(saves.root().join("crafted_5x5_1.json"), payload).unwrap();

        let mut game = board(5);
        let before = game.clone();
        let err = saves.load("crafted_5x5_1.json", &mut game).unwrap_err();

        assert!(matches!(err, SaveError::CorruptData(_)));
        assert_eq!(game, before);
    }

    #[test]
    fn load_restores_piece_metadata() {
        let (_dir, saves) = save_dir();
        let original = Board::new(BoardConfig::new(5, 64, "square"));
        let name = saves.save(&original, "saved_board").unwrap();

        let mut target = board(5);
        saves.load(&name, &mut target).unwrap();

        assert_eq!(target.cell_size(), 64);
        assert_eq!(target.figure(), "square");
    }

    #[test]
    fn save_leaves_only_the_final_artifact() {
        let (_dir, saves) = save_dir();
        saves.save(&board(5), "saved_board").unwrap();

        let entries: Vec<String> = std::fs::read_dir(saves.root())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();

        assert_eq!(entries, ["saved_board_5x5_1.json"]);
    }

    #[test]
    fn default_save_dir_is_relative_saved_files() {
        assert_eq!(SaveDir::default().root(), Path::new(DEFAULT_SAVE_DIR));
    }
}
