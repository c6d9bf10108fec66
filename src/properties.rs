use crate::statics;
use chrono::NaiveDateTime;
use indexmap::IndexMap;

/// Ordered `key=value` pairs as they appear in a properties file.
/// Position is the first occurrence of a key; the value is its last occurrence.
pub type PropertyMap = IndexMap<String, String>;

/// Parse `server.properties` text. Never fails: comment, blank and malformed
/// lines are skipped.
pub fn parse(content: &str) -> PropertyMap {
    let mut props = PropertyMap::new();

    // Blank lines are skipped anyway, so `\r\n` splitting into an extra empty
    // piece is harmless.
    for line in content.split(['\r', '\n']) {
        let line = line.trim();
        if line.is_empty() || line.starts_with(statics::PROPS_COMMENT_PREFIX) {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        // IndexMap::insert keeps the original slot for an existing key.
        props.insert(key.to_string(), value.trim().to_string());
    }

    props
}

/// Serialize with the current local time in the header.
pub fn serialize(props: &PropertyMap) -> String {
    serialize_at(props, chrono::Local::now().naive_local())
}

/// Serialize with an explicit header timestamp.
pub fn serialize_at(props: &PropertyMap, timestamp: NaiveDateTime) -> String {
    let mut out = String::new();
    out.push_str(statics::PROPS_COMMENT_PREFIX);
    out.push_str(statics::PROPS_HEADER_TITLE);
    out.push_str(statics::NL_LF);
    out.push_str(statics::PROPS_COMMENT_PREFIX);
    out.push_str(&timestamp.format(statics::PROPS_HEADER_TIME_FORMAT).to_string());
    out.push_str(statics::NL_LF);

    for (key, value) in props {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push_str(statics::NL_LF);
    }

    out
}

/// `server.properties` -> `server.properties.bak.20240131_235959`
pub fn backup_file_name(filename: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "{filename}{}{}",
        statics::BACKUP_INFIX,
        timestamp.format(statics::BACKUP_TIME_FORMAT)
    )
}
