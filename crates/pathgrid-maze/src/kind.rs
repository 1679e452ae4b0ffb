use std::fmt;

/// Wall layouts the maze generator can produce.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MazeKind {
    /// No maze: every wall removed.
    #[default]
    None,
    /// Binary-tree carving, biased towards the top-left corner.
    BinaryTree,
    /// Recursive division of the open area.
    RecursiveDivision,
}

impl MazeKind {
    /// Every kind, in menu order.
    pub const ALL: [MazeKind; 3] = [Self::None, Self::BinaryTree, Self::RecursiveDivision];

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::BinaryTree => "BINARY_TREE",
            Self::RecursiveDivision => "RECURSIVE_DIVISION",
        }
    }

    /// Look a kind up by name, ignoring case and treating `-` and spaces
    /// like `_`.
    pub fn parse(name: &str) -> Option<Self> {
        let norm: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        Self::ALL.into_iter().find(|k| k.name() == norm)
    }

    /// Like [`parse`](Self::parse), but an unknown name means
    /// [`MazeKind::None`].
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            log::warn!("unknown maze kind {name:?}, leaving the grid open");
            Self::None
        })
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for k in MazeKind::ALL {
            assert_eq!(MazeKind::parse(k.name()), Some(k));
        }
        assert_eq!(MazeKind::parse("binary-tree"), Some(MazeKind::BinaryTree));
        assert_eq!(MazeKind::parse("Recursive Division"), Some(MazeKind::RecursiveDivision));
    }

    #[test]
    fn unknown_falls_back_to_none() {
        assert_eq!(MazeKind::from_name("prim"), MazeKind::None);
    }
}
