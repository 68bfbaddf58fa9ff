//! Raw manifest sanitation
use serde_json::Value;

/// Remove every `"thumbnail"` key from a raw manifest document, at any
/// nesting depth. The signer embeds binary thumbnail blobs in manifests and
/// ingredients alike; they carry no attribution data and bloat the tree.
pub fn strip_thumbnails(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove("thumbnail");
            for child in map.values_mut() {
                strip_thumbnails(child);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                strip_thumbnails(item);
            }
        }
        _ => {}
    }
}
