//! Maze generation for pathgrid: binary-tree and recursive-division wall
//! layouts that always keep the start and end connected.

pub mod kind;
pub mod mazegen;

pub use kind::MazeKind;
pub use mazegen::{MazeGen, generate_maze};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_kind_uses_upper_case_names() {
        let json = serde_json::to_string(&MazeKind::RecursiveDivision).unwrap();
        assert_eq!(json, "\"RECURSIVE_DIVISION\"");
        let back: MazeKind = serde_json::from_str("\"BINARY_TREE\"").unwrap();
        assert_eq!(back, MazeKind::BinaryTree);
    }
}
