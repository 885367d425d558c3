//! ASCII-art diagram rasterization.
//!
//! A diagram block is read as a grid of characters. Line-art characters become strokes (`-` and
//! `=` horizontal, `|` and `:` vertical, `+` a junction joined towards neighbouring strokes, `/`
//! and `\` diagonals); every other visible character is painted as a glyph mark in its cell. The
//! grid is rendered at `scale` times the base cell size and embedded as a PNG placed at
//! `image_scale_percent` of its pixel size, so the upscaled bitmap stays sharp once placed.
//!
//! Rendering is fallible. It is registered behind [`super::WithFallback`], which highlights the
//! source instead whenever rendering fails.

use super::FallibleTransform;
use crate::element::{Element, Image};
use crate::error::TransformError;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

const CELL_WIDTH: f32 = 10.0;
const CELL_HEIGHT: f32 = 14.0;
const TAB_WIDTH: usize = 4;
const MAX_PIXELS: u64 = 4096 * 4096;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const STROKE: Rgb<u8> = Rgb([0, 0, 0]);
const GLYPH: Rgb<u8> = Rgb([64, 64, 64]);

/// Rendering knobs for diagram blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramSettings {
    /// Language tags rendered as diagrams, compared case-insensitively.
    pub languages: Vec<String>,
    /// Upscale factor applied when rasterizing.
    pub scale: f32,
    /// Placement scale of the produced image, in percent.
    pub image_scale_percent: f32,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        DiagramSettings {
            languages: vec!["ditaa".to_string()],
            scale: 2.0,
            image_scale_percent: 50.0,
        }
    }
}

/// Characters of a diagram, one row per source line, tabs expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct TextGrid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl TextGrid {
    /// Reads `text` into a grid. Control characters other than tabs and line endings are
    /// rejected, as is a grid without any visible character.
    pub fn parse(text: &str) -> Result<TextGrid, TransformError> {
        let mut rows = Vec::new();
        for (line_index, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for (column, ch) in line.chars().enumerate() {
                match ch {
                    '\t' => {
                        let pad = TAB_WIDTH - row.len() % TAB_WIDTH;
                        row.extend(std::iter::repeat(' ').take(pad));
                    }
                    c if c.is_control() => {
                        return Err(TransformError::InvalidCharacter {
                            line: line_index + 1,
                            column: column + 1,
                            ch: c,
                        });
                    }
                    c => row.push(c),
                }
            }
            rows.push(row);
        }

        while rows.last().is_some_and(|row| row.iter().all(|c| *c == ' ')) {
            rows.pop();
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 || rows.iter().flatten().all(|c| *c == ' ') {
            return Err(TransformError::EmptyDiagram);
        }

        Ok(TextGrid { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Character at (`row`, `column`); blank outside the grid.
    pub fn get(&self, row: isize, column: isize) -> char {
        if row < 0 || column < 0 {
            return ' ';
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(column as usize))
            .copied()
            .unwrap_or(' ')
    }
}

fn is_horizontal(c: char) -> bool {
    matches!(c, '-' | '=' | '+')
}

fn is_vertical(c: char) -> bool {
    matches!(c, '|' | ':' | '+')
}

/// Rasterizes diagram blocks into embedded images.
#[derive(Debug, Clone, Default)]
pub struct DiagramTransform {
    settings: DiagramSettings,
}

impl DiagramTransform {
    pub fn new(settings: DiagramSettings) -> Self {
        DiagramTransform { settings }
    }

    pub fn settings(&self) -> &DiagramSettings {
        &self.settings
    }

    /// Renders `grid` to a bitmap at the configured scale.
    pub fn rasterize(&self, grid: &TextGrid) -> Result<RgbImage, TransformError> {
        let scale = self.settings.scale.max(0.1);
        let cell_w = (CELL_WIDTH * scale).round().max(1.0) as u32;
        let cell_h = (CELL_HEIGHT * scale).round().max(1.0) as u32;
        let width = cell_w.saturating_mul(grid.width() as u32);
        let height = cell_h.saturating_mul(grid.height() as u32);
        if u64::from(width) * u64::from(height) > MAX_PIXELS {
            return Err(TransformError::DiagramTooLarge { width, height });
        }

        let mut canvas = Canvas {
            image: RgbImage::from_pixel(width, height, BACKGROUND),
            cell_w,
            cell_h,
            stroke: scale.round().max(1.0) as u32,
        };

        for row in 0..grid.height() as isize {
            for column in 0..grid.width() as isize {
                let ch = grid.get(row, column);
                let (x, y) = (column as u32 * cell_w, row as u32 * cell_h);
                match ch {
                    ' ' => {}
                    '-' | '=' => canvas.horizontal(x, y, 0, cell_w),
                    '|' | ':' => canvas.vertical(x, y, 0, cell_h),
                    '+' => {
                        let (half_w, half_h) = (cell_w / 2, cell_h / 2);
                        if is_horizontal(grid.get(row, column - 1)) {
                            canvas.horizontal(x, y, 0, half_w + canvas.stroke);
                        }
                        if is_horizontal(grid.get(row, column + 1)) {
                            canvas.horizontal(x, y, half_w, cell_w);
                        }
                        if is_vertical(grid.get(row - 1, column)) {
                            canvas.vertical(x, y, 0, half_h + canvas.stroke);
                        }
                        if is_vertical(grid.get(row + 1, column)) {
                            canvas.vertical(x, y, half_h, cell_h);
                        }
                    }
                    '/' => canvas.diagonal(x, y, true),
                    '\\' => canvas.diagonal(x, y, false),
                    _ => canvas.glyph(x, y),
                }
            }
        }

        Ok(canvas.image)
    }
}

struct Canvas {
    image: RgbImage,
    cell_w: u32,
    cell_h: u32,
    stroke: u32,
}

impl Canvas {
    fn fill(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
        let x1 = x1.min(self.image.width());
        let y1 = y1.min(self.image.height());
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    /// Horizontal stroke through the middle of the cell at (`x`, `y`), from `from` to `to`.
    fn horizontal(&mut self, x: u32, y: u32, from: u32, to: u32) {
        let mid = y + self.cell_h / 2;
        let half = self.stroke / 2;
        self.fill(
            x + from,
            mid.saturating_sub(half),
            x + to,
            mid.saturating_sub(half) + self.stroke,
            STROKE,
        );
    }

    fn vertical(&mut self, x: u32, y: u32, from: u32, to: u32) {
        let mid = x + self.cell_w / 2;
        let half = self.stroke / 2;
        self.fill(
            mid.saturating_sub(half),
            y + from,
            mid.saturating_sub(half) + self.stroke,
            y + to,
            STROKE,
        );
    }

    fn diagonal(&mut self, x: u32, y: u32, rising: bool) {
        let steps = self.cell_h.max(1);
        for step in 0..steps {
            let dx = step * self.cell_w / steps;
            let py = if rising { y + steps - 1 - step } else { y + step };
            self.fill(x + dx, py, x + dx + self.stroke, py + 1, STROKE);
        }
    }

    fn glyph(&mut self, x: u32, y: u32) {
        let (w, h) = (self.cell_w, self.cell_h);
        self.fill(x + w / 5, y + h / 4, x + w - w / 5, y + h - h / 4, GLYPH);
    }
}

fn encode_png(image: RgbImage) -> Result<Vec<u8>, TransformError> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

impl FallibleTransform for DiagramTransform {
    fn name(&self) -> &str {
        "diagram"
    }

    fn accepts(&self, language: &str) -> bool {
        self.settings
            .languages
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(language))
    }

    fn try_process(&self, _language: &str, code: &str) -> Result<Vec<Element>, TransformError> {
        let grid = TextGrid::parse(code)?;
        let bitmap = self.rasterize(&grid)?;
        let (width, height) = bitmap.dimensions();
        let data = encode_png(bitmap)?;

        Ok(vec![Element::Image(Image {
            data,
            width,
            height,
            scale_percent: self.settings.image_scale_percent,
        })])
    }
}
