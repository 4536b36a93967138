//! GWT reading operations.

use std::io::BufRead;

use crate::{
    error::{Result, WeightsError},
    io::gwt::GwtHeader,
    weights::RawAdjacency,
};

/// Parse the four-token header line (`flag n shp id_var`).
pub(crate) fn parse_header(line: &str) -> Result<GwtHeader> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [flag, n, shp, id_var] = tokens.as_slice() else {
        return Err(WeightsError::format(1, format!(
            "expected 4 header tokens (flag n shp id_var), found {}", tokens.len()
        )));
    };

    Ok(GwtHeader {
        flag: flag.to_string(),
        n: n.to_string(),
        shp: shp.to_string(),
        id_var: id_var.to_string(),
    })
}

/// Parse one `origin target weight` data line. `line_no` is 1-based.
pub(crate) fn parse_edge(line_no: usize, line: &str) -> Result<(&str, &str, f64)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [origin, target, weight] = tokens.as_slice() else {
        return Err(WeightsError::format(line_no, format!(
            "expected 3 tokens (origin target weight), found {} in {line:?}", tokens.len()
        )));
    };

    let weight = weight.parse::<f64>()
        .map_err(|_| WeightsError::format(line_no, format!("weight {weight:?} is not a number")))?;

    Ok((*origin, *target, weight))
}

/// Read a whole GWT stream: the header line, then every remaining line as an
/// edge appended to its origin's list.
pub(crate) fn read_gwt<R: BufRead>(reader: R) -> Result<(GwtHeader, RawAdjacency)> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => parse_header(&line?)?,
        None => return Err(WeightsError::format(1, "missing header line")),
    };
    tracing::debug!(flag = %header.flag, n = %header.n, shp = %header.shp, id_var = %header.id_var, "[io::gwt] read header");

    let mut raw = RawAdjacency::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        let (origin, target, weight) = parse_edge(i + 2, &line)?;
        raw.push(origin, target, weight);
    }
    tracing::debug!(origins = raw.len(), edges = raw.edge_count(), "[io::gwt] read edges");

    Ok((header, raw))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn header_tokens_are_kept_verbatim() {
        let header = parse_header("0 0003 shapefile.shp POLY_ID").unwrap();
        assert_eq!(header.flag, "0");
        assert_eq!(header.n, "0003");
        assert_eq!(header.shp, "shapefile.shp");
        assert_eq!(header.id_var, "POLY_ID");
    }

    #[test]
    fn header_with_wrong_token_count_fails() {
        for line in ["", "0 3 shp", "0 3 shp ID extra"] {
            let err = parse_header(line).unwrap_err();
            assert!(matches!(err, WeightsError::Format { line: 1, .. }), "{line:?}");
        }
    }

    #[test]
    fn edge_line_parses() {
        assert_eq!(parse_edge(2, "  a\tb   0.25 ").unwrap(), ("a", "b", 0.25));
        assert_eq!(parse_edge(2, "1 2 1e-3").unwrap(), ("1", "2", 1e-3));
    }

    #[test]
    fn edge_line_with_wrong_token_count_fails() {
        assert!(matches!(parse_edge(7, "a b"), Err(WeightsError::Format { line: 7, .. })));
        assert!(matches!(parse_edge(7, "a b 1.0 x"), Err(WeightsError::Format { line: 7, .. })));
        assert!(matches!(parse_edge(7, ""), Err(WeightsError::Format { line: 7, .. })));
    }

    #[test]
    fn non_numeric_weight_fails() {
        let err = parse_edge(3, "a b heavy").unwrap_err();
        match err {
            WeightsError::Format { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("heavy"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn read_accumulates_in_file_order() {
        let text = "0 3 shapefile.shp W\na b 1.0\nb a 1.0\nb c 0.5\nc b 0.5\n";
        let (header, raw) = read_gwt(Cursor::new(text)).unwrap();

        assert_eq!(header.n, "3");
        assert_eq!(raw.len(), 3);
        let nbrs: Vec<&str> = raw.neighbors("b").unwrap().iter().map(|s| s.as_ref()).collect();
        assert_eq!(nbrs, vec!["a", "c"]);
        assert_eq!(raw.weights("b").unwrap(), &[1.0, 0.5]);
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let text = "0 2 s.shp ID\r\n1 2 1.0\r\n2 1 1.0\r\n";
        let (_, raw) = read_gwt(Cursor::new(text)).unwrap();
        assert_eq!(raw.len(), 2);
    }

    #[test]
    fn error_reports_line_number() {
        let text = "0 2 s.shp ID\n1 2 1.0\n2 1\n";
        assert!(matches!(read_gwt(Cursor::new(text)), Err(WeightsError::Format { line: 3, .. })));
    }

    #[test]
    fn empty_stream_has_no_header() {
        assert!(matches!(read_gwt(Cursor::new("")), Err(WeightsError::Format { line: 1, .. })));
    }

    #[test]
    fn header_only_yields_empty_adjacency() {
        let (_, raw) = read_gwt(Cursor::new("0 0 s.shp ID\n")).unwrap();
        assert!(raw.is_empty());
    }
}
