use pathgrid_core::Coordinates;

/// Cached neighbor computation helper.
///
/// Enumerates the 4-directional neighbors of a cell (up, down, left,
/// right), filtered by a predicate, into a reused buffer.
pub struct Neighbors {
    buf: Vec<Coordinates>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Coordinates, keep: impl Fn(Coordinates) -> bool) -> &[Coordinates] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
