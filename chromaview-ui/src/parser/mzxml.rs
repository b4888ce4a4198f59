//! mzXML adapter for the parser boundary
//!
//! Reads only what the TIC view needs: the `retentionTime` and
//! `totIonCurrent` attributes of each `<scan>` element, in document order.
//! Everything else in the file (peak data, precursor info) is skipped
//! without being decoded.

use super::{ParseError, RecordParser, StructuredRecord, TimeSeries};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

/// Parser for mzXML documents
#[derive(Debug, Clone, Default)]
pub struct MzxmlParser;

impl MzxmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl RecordParser for MzxmlParser {
    fn parse(&self, bytes: &[u8]) -> Result<StructuredRecord, ParseError> {
        let mut reader = Reader::from_reader(bytes);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut saw_root = false;
        let mut points: Vec<(f64, f64)> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    if !saw_root {
                        if e.local_name().as_ref() != b"mzXML" {
                            return Err(ParseError(format!(
                                "not an mzXML document (root element <{}>)",
                                String::from_utf8_lossy(e.local_name().as_ref())
                            )));
                        }
                        saw_root = true;
                    } else if e.local_name().as_ref() == b"scan" {
                        if let Some(point) = scan_point(e)? {
                            points.push(point);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(ParseError(format!("malformed mzXML: {}", e))),
            }
            buf.clear();
        }

        if !saw_root {
            return Err(ParseError("no mzXML root element found".to_string()));
        }

        debug!(scan_points = points.len(), "Parsed mzXML document");

        if points.is_empty() {
            // Structurally valid but carries no usable trace
            Ok(StructuredRecord::new(Vec::new()))
        } else {
            Ok(StructuredRecord::new(vec![TimeSeries::new(points)]))
        }
    }
}

/// Pull (retention time, total ion current) from one scan element.
///
/// Scans missing either attribute are skipped rather than rejected; mzXML
/// writers vary in which optional attributes they emit.
fn scan_point(e: &BytesStart<'_>) -> Result<Option<(f64, f64)>, ParseError> {
    let mut retention_time: Option<f64> = None;
    let mut total_ion_current: Option<f64> = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|err| ParseError(format!("malformed scan attribute: {}", err)))?;
        let key = attr.key.as_ref();

        if key == b"retentionTime" || key == b"totIonCurrent" {
            let value = attr
                .unescape_value()
                .map_err(|err| ParseError(format!("malformed scan attribute value: {}", err)))?;

            if key == b"retentionTime" {
                retention_time = Some(parse_retention_time(&value)?);
            } else {
                total_ion_current = Some(value.parse::<f64>().map_err(|_| {
                    ParseError(format!("invalid totIonCurrent value: {value}"))
                })?);
            }
        }
    }

    Ok(match (retention_time, total_ion_current) {
        (Some(rt), Some(tic)) => Some((rt, tic)),
        _ => None,
    })
}

/// Parse an mzXML retention time.
///
/// The format is an ISO 8601 duration in seconds (`PT1796.76S`); some
/// writers emit a bare number of seconds instead, which is accepted too.
fn parse_retention_time(value: &str) -> Result<f64, ParseError> {
    let seconds = value
        .strip_prefix("PT")
        .and_then(|rest| rest.strip_suffix('S'))
        .unwrap_or(value);

    seconds
        .parse::<f64>()
        .map_err(|_| ParseError(format!("invalid retentionTime value: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<mzXML xmlns="http://sashimi.sourceforge.net/schema_revision/mzXML_3.2">
  <msRun scanCount="3">
    <scan num="1" msLevel="1" retentionTime="PT0.5S" totIonCurrent="100.0" peaksCount="0"/>
    <scan num="2" msLevel="1" retentionTime="PT1.5S" totIonCurrent="250.5" peaksCount="0"/>
    <scan num="3" msLevel="1" retentionTime="PT2.5S" totIonCurrent="75.25" peaksCount="0"/>
  </msRun>
</mzXML>"#;

    #[test]
    fn parses_scans_in_document_order() {
        let record = MzxmlParser::new().parse(SAMPLE.as_bytes()).unwrap();

        assert_eq!(record.time_series().len(), 1);
        assert_eq!(
            record.time_series()[0].points(),
            &[(0.5, 100.0), (1.5, 250.5), (2.5, 75.25)]
        );
    }

    #[test]
    fn scanless_document_yields_zero_series() {
        let doc = r#"<mzXML><msRun scanCount="0"></msRun></mzXML>"#;
        let record = MzxmlParser::new().parse(doc.as_bytes()).unwrap();

        assert!(record.time_series().is_empty());
    }

    #[test]
    fn rejects_non_xml_bytes() {
        let result = MzxmlParser::new().parse(b"this is not xml at all");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_wrong_root_element() {
        let result = MzxmlParser::new().parse(b"<mzML><run/></mzML>");
        assert!(result.is_err());
    }

    #[test]
    fn skips_scans_without_tic_attribute() {
        let doc = r#"<mzXML><msRun>
            <scan num="1" retentionTime="PT0.5S"/>
            <scan num="2" retentionTime="PT1.0S" totIonCurrent="42.0"/>
        </msRun></mzXML>"#;
        let record = MzxmlParser::new().parse(doc.as_bytes()).unwrap();

        assert_eq!(record.time_series()[0].points(), &[(1.0, 42.0)]);
    }

    #[test]
    fn retention_time_accepts_iso_duration_and_bare_seconds() {
        assert_eq!(parse_retention_time("PT1796.76S").unwrap(), 1796.76);
        assert_eq!(parse_retention_time("12.5").unwrap(), 12.5);
        assert!(parse_retention_time("PTxyzS").is_err());
    }
}
