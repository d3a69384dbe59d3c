//! quick-xml adapter for [`ScalarCodec`] values.
//!
//! A scalar travels as the text content of a single element:
//! `<claveAcceso>2002202001…7</claveAcceso>`. Writing calls
//! [`ScalarCodec::encode`]; reading collects the element's direct text and
//! hands it to [`ScalarCodec::decode`].

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::{Cursor, Write};

use super::codec::ScalarCodec;
use super::error::SriError;

fn xml_io(e: std::io::Error) -> SriError {
    SriError::Xml(format!("write error: {e}"))
}

/// Write `<name>encoded</name>` into an existing writer.
pub fn write_element<W: Write, T: ScalarCodec>(
    writer: &mut Writer<W>,
    name: &str,
    value: &T,
) -> Result<(), SriError> {
    let text = value.encode()?;
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_io)?;
    writer
        .write_event(Event::Text(BytesText::new(&text)))
        .map_err(xml_io)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_io)?;
    Ok(())
}

/// Render a value as a standalone element, without XML declaration.
pub fn to_xml_element<T: ScalarCodec>(name: &str, value: &T) -> Result<String, SriError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_element(&mut writer, name, value)?;
    let buf = writer.into_inner().into_inner();
    String::from_utf8(buf).map_err(|e| SriError::Xml(format!("UTF-8 error: {e}")))
}

/// Decode the text of the first element in `xml` into a pre-allocated value.
///
/// On error `value` is left unchanged.
pub fn decode_xml_element<T: ScalarCodec>(xml: &str, value: &mut T) -> Result<(), SriError> {
    let text = element_text(xml)?;
    let result = value.decode(&text);

    #[cfg(feature = "tracing")]
    if let Err(ref e) = result {
        tracing::debug!(text = %text, error = %e, "XML scalar rejected");
    }

    result
}

/// Decode the text of the first element in `xml` into a fresh value.
pub fn from_xml_element<T: ScalarCodec + Default>(xml: &str) -> Result<T, SriError> {
    let mut value = T::default();
    decode_xml_element(xml, &mut value)?;
    Ok(value)
}

/// Direct text content of the first element, untrimmed. Text inside child
/// elements is skipped.
fn element_text(xml: &str) -> Result<String, SriError> {
    let mut reader = Reader::from_str(xml);

    let mut depth = 0usize;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::Empty(_)) if depth == 0 => return Ok(text),
            Ok(Event::Text(ref e)) if depth == 1 => {
                let chunk = e
                    .unescape()
                    .map_err(|e| SriError::Xml(format!("parse error: {e}")))?;
                text.push_str(&chunk);
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(text);
                }
            }
            Ok(Event::Eof) => {
                return Err(SriError::Xml("no element found".into()));
            }
            Err(e) => return Err(SriError::Xml(format!("parse error: {e}"))),
            _ => {}
        }
    }
}
