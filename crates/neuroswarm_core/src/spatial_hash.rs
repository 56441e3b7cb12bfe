const EMPTY: u32 = u32::MAX;

/// Largest number of cells a grid may allocate (16 MiB of `head` per grid).
pub const MAX_CELLS: usize = 1 << 22;

#[derive(Clone, Debug, Default)]
/// Uniform grid broad-phase index over the horizontal (x, y) projection.
///
/// Each cell holds a singly linked list threaded through two arrays: `head`
/// stores the first entity index of every cell and `next` stores, per entity,
/// the following entity in the same cell. Insertion prepends, so a bucket is
/// walked in reverse insertion order.
///
/// The grid is rebuilt from scratch every tick (`clear` + `insert`); there is
/// no incremental update or removal. The vertical axis is never bucketed,
/// callers resolve z with an exact distance check.
///
/// # Performance Characteristics
/// - `clear`: O(cells)
/// - `insert`: O(1)
/// - window query: O(window cells + bucket entries)
///
/// # Examples
/// ```
/// use neuroswarm_core::spatial_hash::SpatialHash;
///
/// let mut grid = SpatialHash::new(100.0, 100.0, 10.0, 3);
/// grid.insert(0, 15.0, 15.0);
/// grid.insert(1, 18.0, 12.0);
/// grid.insert(2, 85.0, 85.0);
///
/// let mut nearby = Vec::new();
/// grid.query_into(15.0, 15.0, 1, &mut nearby);
/// assert_eq!(nearby.len(), 2);
/// ```
pub struct SpatialHash {
    pub cell_size: f32,
    pub width: f32,
    pub height: f32,
    pub cols: usize,
    pub rows: usize,
    head: Vec<u32>,
    next: Vec<u32>,
}

impl SpatialHash {
    /// Creates an empty grid covering `width` x `height` for up to `capacity`
    /// entity indices.
    pub fn new(width: f32, height: f32, cell_size: f32, capacity: usize) -> Self {
        let mut grid = Self {
            cell_size,
            width,
            height,
            cols: 0,
            rows: 0,
            head: Vec::new(),
            next: vec![EMPTY; capacity],
        };
        grid.resize(width, height);
        grid
    }

    /// Column and row counts for an extent, or `None` when the grid would
    /// exceed [`MAX_CELLS`].
    #[must_use]
    pub fn dimensions(width: f32, height: f32, cell_size: f32) -> Option<(usize, usize)> {
        let cols = ((width / cell_size).ceil() as usize).max(1);
        let rows = ((height / cell_size).ceil() as usize).max(1);
        match cols.checked_mul(rows) {
            Some(cells) if cells <= MAX_CELLS => Some((cols, rows)),
            _ => None,
        }
    }

    /// Re-dimensions the grid for a new world extent and empties it.
    ///
    /// Extents past [`MAX_CELLS`] are truncated to a grid of at most that many
    /// cells; out-of-grid positions then clamp to the edge as usual. Callers
    /// reject such extents up front with [`dimensions`](Self::dimensions).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        let (cols, rows) = Self::dimensions(width, height, self.cell_size).unwrap_or_else(|| {
            let cols = ((width / self.cell_size).ceil() as usize).clamp(1, MAX_CELLS);
            let rows = ((height / self.cell_size).ceil() as usize).clamp(1, MAX_CELLS / cols);
            (cols, rows)
        });
        self.cols = cols;
        self.rows = rows;
        self.head = vec![EMPTY; cols * rows];
    }

    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.head.len()
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.next.len()
    }

    pub fn clear(&mut self) {
        self.head.fill(EMPTY);
    }

    /// Unclamped cell coordinates of a world position.
    #[inline]
    #[must_use]
    pub fn cell_coords(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.cell_size).floor() as i32,
            (y / self.cell_size).floor() as i32,
        )
    }

    /// Flat cell index of a world position, or `None` when the position is
    /// non-finite or outside the grid.
    ///
    /// Inspection helper for tools and tests; `insert` and the window queries
    /// clamp instead.
    #[inline]
    #[must_use]
    pub fn get_cell_idx(&self, x: f32, y: f32) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let (cx, cy) = self.cell_coords(x, y);
        if cx < 0 || cx >= self.cols as i32 || cy < 0 || cy >= self.rows as i32 {
            None
        } else {
            Some(cy as usize * self.cols + cx as usize)
        }
    }

    /// Adds entity `index` to the cell containing (x, y).
    ///
    /// Out-of-grid positions are clamped to the nearest edge cell. Indices at or
    /// beyond the capacity given at construction are ignored.
    #[inline]
    pub fn insert(&mut self, index: usize, x: f32, y: f32) {
        if index >= self.next.len() {
            return;
        }
        let (cx, cy) = self.cell_coords(x, y);
        let col = cx.clamp(0, self.cols as i32 - 1) as usize;
        let row = cy.clamp(0, self.rows as i32 - 1) as usize;
        let cell = row * self.cols + col;

        self.next[index] = self.head[cell];
        self.head[cell] = index as u32;
    }

    /// Iterates the entity indices stored in cell (`col`, `row`). Cells
    /// outside the grid yield nothing.
    #[must_use]
    pub fn bucket(&self, col: i32, row: i32) -> Bucket<'_> {
        let cursor = if col < 0 || col >= self.cols as i32 || row < 0 || row >= self.rows as i32 {
            EMPTY
        } else {
            self.head[row as usize * self.cols + col as usize]
        };
        Bucket { grid: self, cursor }
    }

    /// Visits every index in the square window of `radius` cells around the
    /// cell containing (x, y), clamped into the grid the same way as
    /// [`insert`](Self::insert). Window cells outside the grid are skipped.
    pub fn query_callback<F>(&self, x: f32, y: f32, radius: i32, mut callback: F)
    where
        F: FnMut(usize),
    {
        let (cx, cy) = self.cell_coords(x, y);
        let cx = cx.clamp(0, self.cols as i32 - 1);
        let cy = cy.clamp(0, self.rows as i32 - 1);
        let row_lo = cy.saturating_sub(radius).max(0);
        let row_hi = cy.saturating_add(radius).min(self.rows as i32 - 1);
        let col_lo = cx.saturating_sub(radius).max(0);
        let col_hi = cx.saturating_add(radius).min(self.cols as i32 - 1);
        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                for idx in self.bucket(col, row) {
                    callback(idx);
                }
            }
        }
    }

    #[inline]
    pub fn query_into(&self, x: f32, y: f32, radius: i32, result: &mut Vec<usize>) {
        result.clear();
        self.query_callback(x, y, radius, |idx| result.push(idx));
    }
}

/// Iterator over one cell's linked list.
pub struct Bucket<'a> {
    grid: &'a SpatialHash,
    cursor: u32,
}

impl Iterator for Bucket<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cursor == EMPTY {
            return None;
        }
        let idx = self.cursor as usize;
        self.cursor = self.grid.next[idx];
        Some(idx)
    }
}
