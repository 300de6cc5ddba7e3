use alloc::{string::String, vec::Vec};

use num_traits::Float;

use crate::layout::{Bounds, Point};
use crate::render::Renderer;

/// Draws a tree onto lines of text, one character per cell of a grid laid over the layout's
/// coordinates. The topmost and leftmost nodes land on the first row and column.
///
/// When drawn through [draw_all](Renderer::draw_all), columns are narrowed as far as needed for
/// every label on a row to keep at least one space from its neighbours.
#[derive(Clone, Debug)]
pub struct AsciiRenderer {
    /// How much horizontal distance one character represents, at most.
    pub cell_width: f64,

    /// How much vertical distance one line represents.
    pub cell_height: f64,

    pub lines: Vec<String>,
    origin: Point,

    /// Horizontal distance per character for the current drawing.
    scale: f64,

    /// How far the leftmost label reaches past the leftmost node.
    overhang: f64,
}

impl Default for AsciiRenderer {
    /// A grid suited to [LayoutSettings::default](crate::LayoutSettings): four columns between
    /// neighbouring nodes and one line between levels.
    fn default() -> Self {
        AsciiRenderer {
            cell_width: 12.5,
            cell_height: 25.0,
            lines: Vec::new(),
            origin: Point::default(),
            scale: 12.5,
            overhang: 0.0,
        }
    }
}

/// How many characters of a label sit left of its node's column.
fn left_of_centre(width: usize) -> usize {
    (width.max(1) - 1) / 2
}

impl AsciiRenderer {
    fn column(&self, x: f64) -> usize {
        Float::round((x - self.origin.x) / self.scale).max(0.0) as usize
    }

    fn row(&self, y: f64) -> usize {
        Float::round((y - self.origin.y) / self.cell_height).max(0.0) as usize
    }

    fn put_char(&mut self, c: char, column: usize, row: usize) {
        if let Some(line) = self.lines.get_mut(row) {
            while line.len() <= column {
                line.push(' ');
            }
            line.replace_range(column..column + 1, c.encode_utf8(&mut [0; 4]));
        }
    }
}

impl Renderer for AsciiRenderer {
    fn measure(&mut self, labels: &[(String, Point)]) {
        self.scale = self.cell_width;
        self.overhang = 0.0;

        let mut placed = labels.iter()
            .map(|(label, point)| (*point, label.chars().count().max(1)))
            .collect::<Vec<_>>();
        placed.sort_by(|(a, _), (b, _)| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

        // Neighbours on a row need enough columns between them for both labels and a space, plus
        // one more to absorb rounding
        for pair in placed.windows(2) {
            let ((left, left_width), (right, right_width)) = (pair[0], pair[1]);
            if left.y != right.y || right.x <= left.x {
                continue;
            }

            let needed = left_width + 1 - left_of_centre(left_width) + left_of_centre(right_width);
            self.scale = self.scale.min((right.x - left.x) / (needed + 1) as f64);
        }

        let leftmost = placed.iter().map(|(point, _)| point.x).fold(f64::INFINITY, f64::min);
        for (point, width) in placed.iter() {
            let reach = left_of_centre(*width) as f64 * self.scale - (point.x - leftmost);
            self.overhang = self.overhang.max(reach);
        }

        log::trace!("ascii grid uses {} units per column", self.scale);
    }

    fn init(&mut self, bounds: Bounds) {
        self.origin = Point::new(bounds.min.x - self.overhang, bounds.min.y);
        let width = self.column(bounds.max.x) + 1;
        let height = self.row(bounds.max.y) + 1;

        self.lines = Vec::new();
        for _ in 0..height {
            self.lines.push(" ".repeat(width));
        }
    }

    fn draw_branch(&mut self, from: Point, to: Point) {
        let (from_column, from_row) = (self.column(from.x) as f64, self.row(from.y) as f64);
        let (to_column, to_row) = (self.column(to.x) as f64, self.row(to.y) as f64);

        let (d_column, d_row) = (to_column - from_column, to_row - from_row);
        let c = if d_column == 0.0 {
            '|'
        } else if (d_column < 0.0) == (d_row < 0.0) {
            '\\'
        } else {
            '/'
        };

        // Mark every line strictly between the two nodes
        let (top, bottom) = (from_row.min(to_row) as usize, from_row.max(to_row) as usize);
        for row in (top + 1)..bottom {
            let progress = (row as f64 - from_row) / d_row;
            let column = Float::round(from_column + d_column * progress) as usize;
            self.put_char(c, column, row);
        }
    }

    fn draw_node(&mut self, label: &str, point: Point) {
        let column = self.column(point.x);
        let row = self.row(point.y);

        let start = column.saturating_sub(left_of_centre(label.chars().count()));
        for (i, c) in label.chars().enumerate() {
            self.put_char(c, start + i, row);
        }
    }
}
