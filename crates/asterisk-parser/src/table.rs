//! Fixed-layout table reader
//!
//! Some console replies are column-aligned tables whose cells can only be
//! found by their position under a header. The reader records where each
//! named header anchor starts and slices data rows from there, failing with a
//! typed error when the header or a row does not line up.

use crate::error::ParseError;

/// Byte offsets of named columns in a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: Vec<(&'static str, usize)>,
}

impl ColumnLayout {
    /// Locate every anchor in `header`
    ///
    /// Fails on the first anchor that does not appear.
    pub fn locate(header: &str, anchors: &[&'static str]) -> Result<Self, ParseError> {
        let mut columns = Vec::with_capacity(anchors.len());
        for &anchor in anchors {
            let offset = header
                .find(anchor)
                .ok_or(ParseError::MissingColumn(anchor))?;
            columns.push((anchor, offset));
        }
        Ok(Self { columns })
    }

    /// Offset of a located column
    pub fn offset(&self, column: &'static str) -> Result<usize, ParseError> {
        self.columns
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, offset)| *offset)
            .ok_or(ParseError::MissingColumn(column))
    }

    /// The part of `line` starting at `column`
    pub fn slice_from<'l>(&self, line: &'l str, column: &'static str) -> Result<&'l str, ParseError> {
        let offset = self.offset(column)?;
        line.get(offset..).ok_or_else(|| ParseError::RowTooShort {
            column,
            offset,
            line: line.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Type             Description      Devicestate  Indications";

    #[test]
    fn test_locate_and_slice() {
        let layout = ColumnLayout::locate(HEADER, &["Description", "Devicestate"]).unwrap();
        assert_eq!(layout.offset("Description").unwrap(), 17);

        let row = "Recorder         Bridge Media     no           yes";
        assert_eq!(layout.slice_from(row, "Devicestate").unwrap(), "no           yes");
    }

    #[test]
    fn test_missing_anchor_is_reported() {
        let err = ColumnLayout::locate(HEADER, &["Transfer"]).unwrap_err();
        assert_eq!(err, ParseError::MissingColumn("Transfer"));
    }

    #[test]
    fn test_short_row_is_reported() {
        let layout = ColumnLayout::locate(HEADER, &["Devicestate"]).unwrap();
        let err = layout.slice_from("Recorder", "Devicestate").unwrap_err();
        assert!(matches!(err, ParseError::RowTooShort { column: "Devicestate", .. }));
    }

    #[test]
    fn test_unlocated_column() {
        let layout = ColumnLayout::locate(HEADER, &["Type"]).unwrap();
        assert!(layout.offset("Indications").is_err());
    }
}
