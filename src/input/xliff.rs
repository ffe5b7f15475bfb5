//! XLIFF 1.2 stream parser.
//!
//! Only `<trans-unit>` and its `<target>` matter; every other element is
//! traversed for well-formedness and otherwise ignored.

use quick_xml::Reader;
use quick_xml::events::{
    BytesStart,
    Event,
};

use super::ParseError;
use crate::analyzer::rules::{
    RuleOptions,
    check_unit,
};
use crate::types::{
    TranslationError,
    TranslationUnit,
};

/// Element holding one translatable entry.
const UNIT_ELEMENT: &[u8] = b"trans-unit";
/// Element holding the translated value of an entry.
const TARGET_ELEMENT: &[u8] = b"target";

/// Per-unit accumulators.
#[derive(Debug, Default, PartialEq, Eq)]
struct PendingUnit {
    /// `id` attribute of the unit, the key of the translation.
    key: Option<String>,
    /// Untrimmed concatenation of every text chunk seen inside `<target>`.
    text: String,
    /// `state` attribute of `<target>`.
    state: Option<String>,
}

impl PendingUnit {
    /// Finish the unit. Units without a key yield nothing.
    fn finish(self, language: &str) -> Option<TranslationUnit> {
        let key = self.key?;
        Some(TranslationUnit {
            language: language.to_string(),
            key,
            text: self.text.trim().to_string(),
            state: self.state.map(|state| state.trim().to_string()),
        })
    }
}

/// Where the scanner is relative to the translation entries.
#[derive(Debug, Default, PartialEq, Eq)]
enum ParserState {
    /// Outside any `<trans-unit>`.
    #[default]
    Idle,
    /// Inside a `<trans-unit>`, outside its `<target>`.
    InUnit(PendingUnit),
    /// Inside the `<target>` of a `<trans-unit>`.
    InTarget(PendingUnit),
}

/// The document events the state machine reacts to.
#[derive(Debug, PartialEq, Eq)]
enum XliffEvent {
    /// `<trans-unit>` opened.
    UnitStart {
        /// Its `id` attribute.
        id: Option<String>,
    },
    /// `<target>` opened.
    TargetStart {
        /// Its `state` attribute.
        state: Option<String>,
    },
    /// Decoded character data, including CDATA sections.
    Text(String),
    /// `</target>`
    TargetEnd,
    /// `</trans-unit>`
    UnitEnd,
}

impl ParserState {
    /// Apply one event, returning the next state and the unit completed by it, if any.
    fn next(self, event: XliffEvent, language: &str) -> (Self, Option<TranslationUnit>) {
        match (self, event) {
            (_, XliffEvent::UnitStart { id }) => {
                (Self::InUnit(PendingUnit { key: id, ..PendingUnit::default() }), None)
            }
            (Self::InUnit(pending), XliffEvent::TargetStart { state }) => {
                (Self::InTarget(PendingUnit { state, ..pending }), None)
            }
            (Self::InTarget(mut pending), XliffEvent::Text(text)) => {
                pending.text.push_str(&text);
                (Self::InTarget(pending), None)
            }
            (Self::InTarget(pending), XliffEvent::TargetEnd) => (Self::InUnit(pending), None),
            (Self::InUnit(pending) | Self::InTarget(pending), XliffEvent::UnitEnd) => {
                (Self::Idle, pending.finish(language))
            }
            (state, _) => (state, None),
        }
    }
}

/// Read an attribute of `element` as unescaped text.
fn attribute(
    element: &BytesStart<'_>,
    name: &str,
    language: &str,
) -> Result<Option<String>, ParseError> {
    let Some(attr) =
        element.try_get_attribute(name).map_err(|e| ParseError::malformed_xliff(language, e))?
    else {
        return Ok(None);
    };

    let value = attr.unescape_value().map_err(|e| ParseError::malformed_xliff(language, e))?;
    Ok(Some(value.into_owned()))
}

/// Extract every translation unit of one XLIFF document, in document order.
///
/// Target text split over several text nodes (entities, CDATA sections,
/// inline elements) is concatenated first and trimmed once per unit.
///
/// # Errors
/// Returns [`ParseError::MalformedXliff`] when the document is not well-formed,
/// including documents that end before every element is closed and inputs
/// with no root element at all (empty files, plain text, JSON).
pub fn parse_xliff_units(bytes: &[u8], language: &str) -> Result<Vec<TranslationUnit>, ParseError> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().expand_empty_elements = true;

    let mut buf = Vec::new();
    let mut units = Vec::new();
    let mut state = ParserState::default();
    let mut depth = 0_usize;
    let mut seen_root = false;

    loop {
        let event = match reader.read_event_into(&mut buf) {
            Ok(Event::Start(element)) => {
                depth += 1;
                seen_root = true;
                match element.local_name().as_ref() {
                    UNIT_ELEMENT => Some(XliffEvent::UnitStart {
                        id: attribute(&element, "id", language)?,
                    }),
                    TARGET_ELEMENT => Some(XliffEvent::TargetStart {
                        state: attribute(&element, "state", language)?,
                    }),
                    _ => None,
                }
            }
            Ok(Event::End(element)) => {
                depth = depth.saturating_sub(1);
                match element.local_name().as_ref() {
                    UNIT_ELEMENT => Some(XliffEvent::UnitEnd),
                    TARGET_ELEMENT => Some(XliffEvent::TargetEnd),
                    _ => None,
                }
            }
            Ok(Event::Text(text)) => {
                // ルート要素の外に置けるのは空白だけ
                if depth == 0 {
                    if text.iter().all(u8::is_ascii_whitespace) {
                        None
                    } else {
                        return Err(ParseError::malformed_xliff(
                            language,
                            format!("text outside the root element (at byte {})", reader.buffer_position()),
                        ));
                    }
                } else {
                    Some(XliffEvent::Text(
                        text.unescape()
                            .map_err(|e| ParseError::malformed_xliff(language, e))?
                            .into_owned(),
                    ))
                }
            }
            Ok(Event::CData(data)) => Some(XliffEvent::Text(
                reader
                    .decoder()
                    .decode(&data)
                    .map_err(|e| ParseError::malformed_xliff(language, e))?
                    .into_owned(),
            )),
            Ok(Event::Eof) => break,
            Ok(_) => None,
            Err(e) => {
                return Err(ParseError::malformed_xliff(
                    language,
                    format!("{e} (at byte {})", reader.buffer_position()),
                ));
            }
        };

        if let Some(event) = event {
            let (next, finished) = state.next(event, language);
            state = next;
            units.extend(finished);
        }
        buf.clear();
    }

    if !seen_root {
        return Err(ParseError::malformed_xliff(language, "document has no root element"));
    }

    if depth > 0 {
        return Err(ParseError::malformed_xliff(
            language,
            format!("unexpected end of document with {depth} unclosed element(s)"),
        ));
    }

    tracing::debug!(language, units = units.len(), "Parsed XLIFF document");
    Ok(units)
}

/// Parse one XLIFF document and classify every unit.
///
/// # Errors
/// See [`parse_xliff_units`].
pub fn parse_xliff_with_options(
    bytes: &[u8],
    language: &str,
    options: RuleOptions,
) -> Result<Vec<TranslationError>, ParseError> {
    let units = parse_xliff_units(bytes, language)?;
    Ok(units.iter().filter_map(|unit| check_unit(unit, options)).collect())
}

/// Parse one XLIFF document and classify every unit with all rules enabled.
///
/// # Errors
/// See [`parse_xliff_units`].
pub fn parse_xliff(bytes: &[u8], language: &str) -> Result<Vec<TranslationError>, ParseError> {
    parse_xliff_with_options(bytes, language, RuleOptions::default())
}
