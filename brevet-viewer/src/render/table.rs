//! CSV payload parsing for table display.

/// A parsed tabular payload: one header row plus body rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    /// Fields of the first non-empty record.
    pub headers: Vec<String>,
    /// Fields of every later non-empty record.
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// Whether the payload held no records at all.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Parse newline-delimited CSV text into a table.
///
/// The first record becomes the header row, every later record a body
/// row. Quoting follows the usual CSV rules: fields may be quoted to
/// contain embedded commas or newlines, and a literal quote is written
/// as two quotes. Blank lines are skipped, records of differing widths
/// are kept as-is, and ill-formed input degrades to however the reader
/// splits it rather than failing.
pub fn parse_table(body: &str) -> TableView {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut headers = Vec::new();
    let mut rows = Vec::new();

    for record in reader.records() {
        let Ok(record) = record else { continue };

        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        // A lone empty field is what an empty line degenerates to.
        if fields.len() == 1 && fields[0].is_empty() {
            continue;
        }

        if headers.is_empty() {
            headers = fields;
        } else {
            rows.push(fields);
        }
    }

    TableView { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_grid() {
        let table = parse_table("a,b\n1,2\n3,4");

        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn quoted_comma_stays_in_one_cell() {
        let table = parse_table("a,b\n\"x,y\",2");

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["x,y", "2"]);
    }

    #[test]
    fn doubled_quotes_become_literal_quote() {
        let table = parse_table("a\n\"say \"\"hi\"\"\"");

        assert_eq!(table.rows[0], vec!["say \"hi\""]);
    }

    #[test]
    fn quoted_newline_stays_in_one_cell() {
        let table = parse_table("a,b\n\"line1\nline2\",2");

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["line1\nline2", "2"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = parse_table("km,location\n\n200,Newberg\n\n400,Brothers\n");

        assert_eq!(table.headers, vec!["km", "location"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn header_only_payload() {
        let table = parse_table("km,miles,location,open_time\n");

        assert_eq!(table.headers.len(), 4);
        assert!(table.rows.is_empty());
        assert!(!table.is_empty());
    }

    #[test]
    fn empty_payload() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("\n\n").is_empty());
    }

    #[test]
    fn ragged_rows_are_kept() {
        let table = parse_table("a,b,c\n1,2\n1,2,3,4");

        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn brevet_shaped_payload() {
        let body = "km,miles,location,open_time,close_time\n\
                    0,0.0,\"Portland, OR\",2024-01-01T08:00,2024-01-01T09:00\n\
                    200,124.3,Newberg,2024-01-01T13:53,2024-01-02T21:20\n";
        let table = parse_table(body);

        assert_eq!(table.headers.len(), 5);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][2], "Portland, OR");
    }
}
