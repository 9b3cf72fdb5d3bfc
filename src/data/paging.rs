use std::ops::Range;

/// Cursor para mostrar filas crudas de a `page_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPager {
    cursor: usize,
    page_size: usize,
}

impl RowPager {
    /// `page_size` tiene que ser > 0, el prompt ya lo valida.
    pub fn new(page_size: usize) -> Self {
        Self {
            cursor: 0,
            page_size: page_size.max(1),
        }
    }

    /// Siguiente rango [cursor, cursor + page_size) recortado a `len`.
    /// `None` cuando ya no quedan filas.
    pub fn next_page(&mut self, len: usize) -> Option<Range<usize>> {
        if self.cursor >= len {
            return None;
        }
        let start = self.cursor;
        let end = (start + self.page_size).min(len);
        self.cursor += self.page_size;
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_through_twelve_rows_by_five() {
        let mut pager = RowPager::new(5);
        assert_eq!(pager.next_page(12), Some(0..5));
        assert_eq!(pager.next_page(12), Some(5..10));
        assert_eq!(pager.next_page(12), Some(10..12));
        assert_eq!(pager.next_page(12), None);
        assert_eq!(pager.cursor, 15);
    }

    #[test]
    fn empty_table_has_no_pages() {
        let mut pager = RowPager::new(3);
        assert_eq!(pager.next_page(0), None);
        assert_eq!(pager.cursor, 0);
    }
}
