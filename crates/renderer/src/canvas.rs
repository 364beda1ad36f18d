/// First code point of the Unicode braille block.
const BRAILLE_BASE: u32 = 0x2800;

/// Dot bit for each (row, column) position inside a 2×4 braille cell.
const DOT_BITS: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// A pixel grid where every terminal cell holds 2×4 settable dots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleCanvas {
    width:  usize,
    height: usize,
    cols:   usize,
    cells:  Vec<u8>,
}

impl BrailleCanvas {
    /// Create a blank canvas of `width × height` pixels.  Negative sizes give
    /// an empty canvas.
    pub fn new(width: i64, height: i64) -> Self {
        let width = width.max(0) as usize;
        let height = height.max(0) as usize;
        let cols = width.div_ceil(2);
        let rows = height.div_ceil(4);
        Self {
            width,
            height,
            cols,
            cells: vec![0; cols * rows],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Set pixel `(x, y)`.  Returns `false` (and does nothing) when the pixel
    /// lies outside the canvas.
    pub fn set(&mut self, x: i64, y: i64) -> bool {
        match self.locate(x, y) {
            Some((cell, bit)) => {
                self.cells[cell] |= bit;
                true
            }
            None => false,
        }
    }

    pub fn is_set(&self, x: i64, y: i64) -> bool {
        self.locate(x, y)
            .is_some_and(|(cell, bit)| self.cells[cell] & bit != 0)
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Serialize to one string per 4 pixel rows.  Cells without any dot are
    /// spaces, so every line is exactly `ceil(width / 2)` characters.
    pub fn rows(&self) -> Vec<String> {
        if self.cols == 0 {
            return vec![String::new(); self.height.div_ceil(4)];
        }
        self.cells
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|&bits| match bits {
                        0 => ' ',
                        _ => char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or(' '),
                    })
                    .collect()
            })
            .collect()
    }

    fn locate(&self, x: i64, y: i64) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some(((y / 4) * self.cols + x / 2, DOT_BITS[y % 4][x % 2]))
    }
}
