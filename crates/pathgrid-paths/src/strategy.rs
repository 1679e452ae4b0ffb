use std::fmt;

/// The search strategies the engine can run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Strategy {
    /// Breadth-first search: FIFO frontier, shortest in edge count.
    #[default]
    Bfs,
    /// Depth-first search: LIFO frontier, not optimal.
    Dfs,
    /// Dijkstra: min-priority frontier keyed by distance.
    Dijkstra,
    /// A*: frontier keyed by distance plus Manhattan estimate.
    AStar,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Strategy; 4] = [Self::Dijkstra, Self::AStar, Self::Bfs, Self::Dfs];

    /// Canonical upper-case name (`"BFS"`, `"DFS"`, `"DIJKSTRA"`, `"A_STAR"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "DIJKSTRA",
            Self::AStar => "A_STAR",
        }
    }

    /// Whether the strategy always finds a shortest path when one exists.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Look a strategy up by name.
    ///
    /// Matching ignores case and treats `-` and spaces like `_`; `A*` and
    /// `ASTAR` are accepted for A*.
    pub fn parse(name: &str) -> Option<Self> {
        let norm: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        match norm.as_str() {
            "BFS" => Some(Self::Bfs),
            "DFS" => Some(Self::Dfs),
            "DIJKSTRA" => Some(Self::Dijkstra),
            "A_STAR" | "ASTAR" | "A*" => Some(Self::AStar),
            _ => None,
        }
    }

    /// Like [`parse`](Self::parse), but an unrecognized name selects
    /// [`Strategy::Bfs`] instead of failing.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            log::warn!("unknown search strategy {name:?}, falling back to BFS");
            Self::Bfs
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
