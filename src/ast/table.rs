//! Table block with validated geometry.

use super::block::Block;
use super::inline::Inline;
use super::tags::Alignment;
use crate::error::{Error, Result};

/// A table cell: a sequence of blocks.
pub type TableCell = Vec<Block>;

/// A table row: one cell per column.
pub type TableRow = Vec<TableCell>;

/// A column width, keeping the spelling it had on the wire.
///
/// Pandoc spells default-width columns as the integer `0` and explicit
/// widths as decimal fractions. The spelling survives decoding so that
/// re-encoding reproduces the wire bytes: `Int(0)` and `Float(0.0)` carry
/// the same width but compare unequal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColWidth {
    Int(u64),
    Float(f64),
}

impl ColWidth {
    /// The numeric value, whatever the spelling.
    pub fn get(self) -> f64 {
        match self {
            ColWidth::Int(n) => n as f64,
            ColWidth::Float(x) => x,
        }
    }
}

impl Default for ColWidth {
    fn default() -> Self {
        ColWidth::Int(0)
    }
}

impl From<u64> for ColWidth {
    fn from(n: u64) -> Self {
        ColWidth::Int(n)
    }
}

impl From<f64> for ColWidth {
    fn from(x: f64) -> Self {
        ColWidth::Float(x)
    }
}

/// Table, with caption, per-column alignments and relative widths (0 =
/// default), a header row, and body rows.
///
/// Fields are private so the geometry established at construction cannot be
/// broken afterwards: the header and every body row have exactly one cell
/// per column, and the alignment and width sequences are one entry per
/// column. The column count comes from the first body row, or from the
/// header when there are no body rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    caption: Vec<Inline>,
    alignment: Vec<Alignment>,
    widths: Vec<ColWidth>,
    header: TableRow,
    rows: Vec<TableRow>,
}

impl Table {
    /// Build a table, checking its geometry.
    ///
    /// Fails with [`Error::ShapeMismatch`] when any row disagrees with the
    /// column count, when the alignment or width sequence has the wrong
    /// length, or when a width is negative or not finite.
    pub fn new<W: Into<ColWidth>>(
        caption: Vec<Inline>,
        alignment: Vec<Alignment>,
        widths: Vec<W>,
        header: TableRow,
        rows: Vec<TableRow>,
    ) -> Result<Self> {
        let widths: Vec<ColWidth> = widths.into_iter().map(Into::into).collect();
        let cols = match rows.first() {
            Some(row) => row.len(),
            None => header.len(),
        };
        if header.len() != cols {
            return Err(Error::ShapeMismatch(format!(
                "table header has {} cells but rows have {} columns",
                header.len(),
                cols
            )));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::ShapeMismatch(format!(
                    "table row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }
        if alignment.len() != cols {
            return Err(Error::ShapeMismatch(format!(
                "table alignment lists {} columns, expected {}",
                alignment.len(),
                cols
            )));
        }
        if widths.len() != cols {
            return Err(Error::ShapeMismatch(format!(
                "table widths list {} columns, expected {}",
                widths.len(),
                cols
            )));
        }
        for width in &widths {
            let value = width.get();
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::ShapeMismatch(format!(
                    "table column width must be a non-negative finite number, got {value}"
                )));
            }
        }
        Ok(Self {
            caption,
            alignment,
            widths,
            header,
            rows,
        })
    }

    /// Build a table with default alignments and widths and no caption.
    pub fn from_rows(header: TableRow, rows: Vec<TableRow>) -> Result<Self> {
        let cols = match rows.first() {
            Some(row) => row.len(),
            None => header.len(),
        };
        Self::new(
            Vec::new(),
            vec![Alignment::AlignDefault; cols],
            vec![ColWidth::default(); cols],
            header,
            rows,
        )
    }

    pub fn with_caption(mut self, caption: Vec<Inline>) -> Self {
        self.caption = caption;
        self
    }

    pub fn caption(&self) -> &[Inline] {
        &self.caption
    }

    pub fn caption_mut(&mut self) -> &mut Vec<Inline> {
        &mut self.caption
    }

    pub fn alignment(&self) -> &[Alignment] {
        &self.alignment
    }

    pub fn widths(&self) -> &[ColWidth] {
        &self.widths
    }

    pub fn header(&self) -> &TableRow {
        &self.header
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Mutable access to every cell, header cells first.
    ///
    /// Cell contents may change freely; the row and column structure and the
    /// number of cells cannot, so the geometry stays valid.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut TableCell> {
        self.header.iter_mut().chain(self.rows.iter_mut().flatten())
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.alignment.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(text: &str) -> TableCell {
        vec![Block::Plain(vec![Inline::Str(text.into())])]
    }

    #[test]
    fn test_valid_geometry() {
        let table = Table::from_rows(
            vec![cell("a"), cell("b")],
            vec![
                vec![cell("1"), cell("2")],
                vec![cell("3"), cell("4")],
            ],
        )
        .unwrap();
        assert_eq!(table.cols(), 2);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.alignment(), &[Alignment::AlignDefault; 2]);
        assert_eq!(table.widths(), &[ColWidth::Int(0); 2]);
    }

    #[test]
    fn test_mixed_width_spellings() {
        let table = Table::new(
            Vec::new(),
            vec![Alignment::AlignDefault; 2],
            vec![ColWidth::Float(0.5), ColWidth::Int(0)],
            vec![cell("a"), cell("b")],
            vec![vec![cell("1"), cell("2")]],
        )
        .unwrap();
        assert_eq!(table.widths(), &[ColWidth::Float(0.5), ColWidth::Int(0)]);
        // Same value, different wire spelling.
        assert_ne!(ColWidth::Int(0), ColWidth::Float(0.0));
        assert_eq!(ColWidth::Int(0).get(), ColWidth::Float(0.0).get());
    }

    #[test]
    fn test_header_row_mismatch() {
        let err = Table::from_rows(
            vec![cell("a"), cell("b")],
            vec![vec![cell("1"), cell("2"), cell("3")]],
        )
        .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn test_ragged_body_row() {
        let err = Table::from_rows(
            vec![cell("a"), cell("b")],
            vec![
                vec![cell("1"), cell("2")],
                vec![cell("3")],
            ],
        )
        .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn test_alignment_length_mismatch() {
        let err = Table::new(
            Vec::new(),
            vec![Alignment::AlignLeft],
            vec![0.0, 0.0],
            vec![cell("a"), cell("b")],
            vec![vec![cell("1"), cell("2")]],
        )
        .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn test_negative_width_rejected() {
        let err = Table::new(
            Vec::new(),
            vec![Alignment::AlignDefault],
            vec![-0.5],
            vec![cell("a")],
            vec![vec![cell("1")]],
        )
        .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn test_header_only_table() {
        let table = Table::from_rows(vec![cell("a"), cell("b")], Vec::new()).unwrap();
        assert_eq!(table.cols(), 2);
        assert!(table.rows().is_empty());
    }

    #[test]
    fn test_caption_builder() {
        let table = Table::from_rows(vec![cell("a")], vec![vec![cell("1")]])
            .unwrap()
            .with_caption(vec![Inline::Str("Results".into())]);
        assert_eq!(table.caption().len(), 1);
    }
}
