use cozy_chess::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub key: u64,
    pub depth: u32,
    pub score: i32,
    pub best: Option<Move>,
    pub bound: Bound,
}

/// Fixed-capacity transposition table keyed by the board's zobrist hash.
/// Single-probe, depth-preferred replacement for the same key. The search is
/// single-threaded, so no locking is needed.
pub struct Tt {
    entries: Vec<Option<Entry>>,
    lookups: u64,
}

impl Tt {
    pub fn with_capacity_entries(cap: usize) -> Self {
        Self { entries: vec![None; cap.max(1)], lookups: 0 }
    }

    pub fn with_capacity_mb(mb: usize) -> Self {
        let bytes = mb.saturating_mul(1024 * 1024);
        Self::with_capacity_entries((bytes / std::mem::size_of::<Option<Entry>>()).max(1))
    }

    fn index(&self, key: u64) -> usize {
        let mixed = key ^ (key >> 32);
        (mixed as usize) % self.entries.len()
    }

    pub fn get(&mut self, key: u64) -> Option<Entry> {
        self.lookups += 1;
        match self.entries[self.index(key)] {
            Some(e) if e.key == key => Some(e),
            _ => None,
        }
    }

    pub fn put(&mut self, e: Entry) {
        let idx = self.index(e.key);
        match self.entries[idx] {
            // Keep a deeper entry for the same position.
            Some(cur) if cur.key == e.key && cur.depth > e.depth => {}
            _ => self.entries[idx] = Some(e),
        }
    }

    pub fn lookups(&self) -> u64 {
        self.lookups
    }

    pub fn reset_lookups(&mut self) {
        self.lookups = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    pub fn size_mb(&self) -> f64 {
        (self.entries.len() * std::mem::size_of::<Option<Entry>>()) as f64 / (1024.0 * 1024.0)
    }

    pub fn clear(&mut self) {
        for e in &mut self.entries {
            *e = None;
        }
        self.lookups = 0;
    }
}

impl Default for Tt {
    fn default() -> Self {
        Self::with_capacity_mb(16)
    }
}
