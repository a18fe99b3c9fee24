//! The `<photo>` wire document.

use chrono::{DateTime, Utc};
use fresco_core::{AlbumId, FederationHandle, Variant};
use fresco_error::{FederationError, FederationErrorKind};
use fresco_photos::PhotoRecord;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Cursor;

/// A parsed inbound photo document.
///
/// Every field came off the wire and is untrusted. The remote id and sender
/// handle together form the dedup key; the remote id is never reused as a
/// local record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePhoto {
    /// Record id on the origin pod, opaque here
    pub remote_id: String,
    /// Claimed sender handle, to be resolved by the receiving pod
    pub sender_handle: FederationHandle,
    /// Album the photo belongs to
    pub album_id: AlbumId,
    /// Caption text, empty element meaning none
    pub caption: Option<String>,
    /// Creation time on the origin pod
    pub created_at: DateTime<Utc>,
    /// Resolvable URL of the full-size rendition on the origin pod
    pub url: String,
    /// Pixel width when the origin knew it
    pub width: Option<u32>,
    /// Pixel height when the origin knew it
    pub height: Option<u32>,
    /// Origin URLs of rendered variants
    pub thumbnails: BTreeMap<Variant, String>,
}

impl RemotePhoto {
    /// Dedup key for idempotent ingestion: one local record per
    /// (sender, remote-id) pair.
    pub fn dedup_key(&self) -> (FederationHandle, String) {
        (self.sender_handle.clone(), self.remote_id.clone())
    }

    /// Variant → origin URL map for a PendingRemote record, full size
    /// included.
    pub fn remote_urls(&self) -> BTreeMap<Variant, String> {
        let mut urls = self.thumbnails.clone();
        urls.insert(Variant::Full, self.url.clone());
        urls
    }
}

fn wire_err<E: std::fmt::Display>(e: E) -> FederationError {
    FederationError::new(FederationErrorKind::MalformedMessage(e.to_string()))
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), FederationError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(wire_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(wire_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(wire_err)?;
    Ok(())
}

/// Serialize a record to its `<photo>` document.
///
/// Deterministic for a given record state: elements appear in a fixed
/// order, derivatives sorted by variant name. The record's storage key is
/// deliberately absent; remote pods only ever see URLs.
///
/// # Errors
///
/// Fails when the record has no full-size URL to publish.
pub fn to_xml(record: &PhotoRecord) -> Result<String, FederationError> {
    let url = record.url(Variant::Full).ok_or_else(|| {
        FederationError::new(FederationErrorKind::MissingField("url".to_string()))
    })?;

    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Start(BytesStart::new("photo")))
        .map_err(wire_err)?;

    write_text_element(&mut writer, "id", &record.id().to_string())?;
    write_text_element(&mut writer, "sender_handle", record.owner().handle.as_str())?;
    write_text_element(&mut writer, "album_id", &record.album().to_string())?;
    write_text_element(&mut writer, "caption", record.caption().as_deref().unwrap_or(""))?;
    write_text_element(&mut writer, "created_at", &record.created_at().to_rfc3339())?;
    write_text_element(&mut writer, "url", url)?;
    if let Some(width) = record.width() {
        write_text_element(&mut writer, "width", &width.to_string())?;
    }
    if let Some(height) = record.height() {
        write_text_element(&mut writer, "height", &height.to_string())?;
    }
    // Ship rendered-variant URLs so the receiving pod can link thumbnails
    // before it fetches the bytes
    for (variant, url) in record.derivatives() {
        if variant.is_rendered() {
            write_text_element(&mut writer, variant.as_str(), url)?;
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new("photo")))
        .map_err(wire_err)?;

    String::from_utf8(writer.into_inner().into_inner()).map_err(wire_err)
}

fn require<'a>(
    values: &'a BTreeMap<String, String>,
    field: &str,
) -> Result<&'a str, FederationError> {
    values
        .get(field)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| FederationError::new(FederationErrorKind::MissingField(field.to_string())))
}

/// Parse an inbound `<photo>` document, failing closed.
///
/// Every required field must be present and well-formed or the whole
/// message is rejected; there is no partial construction. Unknown elements
/// are ignored for forward compatibility.
pub fn from_xml(document: &str) -> Result<RemotePhoto, FederationError> {
    let mut reader = Reader::from_str(document);
    reader.trim_text(true);

    let mut root_seen = false;
    let mut stack: Vec<String> = Vec::new();
    let mut present: BTreeSet<String> = BTreeSet::new();
    let mut values: BTreeMap<String, String> = BTreeMap::new();

    loop {
        match reader.read_event().map_err(wire_err)? {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
                if stack.is_empty() {
                    if name != "photo" {
                        return Err(FederationError::new(FederationErrorKind::MalformedMessage(
                            format!("unexpected root element: {}", name),
                        )));
                    }
                    root_seen = true;
                } else if stack.len() == 1 {
                    present.insert(name.clone());
                }
                stack.push(name);
            }
            // Self-closing form of an empty element, e.g. <caption/>
            Event::Empty(start) => {
                if stack.len() == 1 {
                    present.insert(String::from_utf8_lossy(start.name().as_ref()).to_string());
                }
            }
            Event::Text(text) => {
                if stack.len() == 2 {
                    let value = text.unescape().map_err(wire_err)?;
                    values.insert(stack[1].clone(), value.into_owned());
                }
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        return Err(FederationError::new(FederationErrorKind::MalformedMessage(
            "no <photo> element".to_string(),
        )));
    }

    // Caption must appear but may be empty; the rest must carry a value
    if !present.contains("caption") {
        return Err(FederationError::new(FederationErrorKind::MissingField(
            "caption".to_string(),
        )));
    }
    let caption = values.get("caption").filter(|c| !c.is_empty()).cloned();

    let remote_id = require(&values, "id")?.to_string();
    let sender_handle = FederationHandle::new(require(&values, "sender_handle")?);
    let album_id: AlbumId = require(&values, "album_id")?.parse().map_err(|_| {
        FederationError::new(FederationErrorKind::MalformedMessage(
            "album_id is not a valid id".to_string(),
        ))
    })?;

    let created_at_raw = require(&values, "created_at")?;
    let created_at = DateTime::parse_from_rfc3339(created_at_raw)
        .map_err(|_| {
            FederationError::new(FederationErrorKind::InvalidTimestamp(
                created_at_raw.to_string(),
            ))
        })?
        .with_timezone(&Utc);

    let url = require(&values, "url")?.to_string();

    let parse_dimension = |field: &str| -> Result<Option<u32>, FederationError> {
        values
            .get(field)
            .map(|raw| {
                raw.parse::<u32>().map_err(|_| {
                    FederationError::new(FederationErrorKind::MalformedMessage(format!(
                        "{} is not a valid dimension: {}",
                        field, raw
                    )))
                })
            })
            .transpose()
    };
    let width = parse_dimension("width")?;
    let height = parse_dimension("height")?;

    let mut thumbnails = BTreeMap::new();
    for (name, value) in &values {
        if let Ok(variant) = name.parse::<Variant>() {
            if variant.is_rendered() {
                thumbnails.insert(variant, value.clone());
            }
        }
    }

    Ok(RemotePhoto {
        remote_id,
        sender_handle,
        album_id,
        caption,
        created_at,
        url,
        width,
        height,
        thumbnails,
    })
}
