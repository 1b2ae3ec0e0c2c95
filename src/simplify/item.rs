// src/simplify/item.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dates::{parse_date, reconcile, DATE_KEYS};

/// One record as exported upstream. The schema is not under our control, so
/// it stays an open map.
pub type RawItem = Map<String, Value>;

/// The reduced record we keep. Absent fields are left out of the JSON
/// entirely, which is what the coverage numbers rely on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimplifiedItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_creation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_modification: Option<String>,
}

impl SimplifiedItem {
    /// Names of the fields this item carries, in serialization order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let slots = [
            ("Subject", self.subject.is_some()),
            ("Body", self.body.is_some()),
            ("IsComplete", self.is_complete.is_some()),
            ("FolderName", self.folder_name.is_some()),
            ("Creator", self.creator.is_some()),
            ("DateOfCreation", self.date_of_creation.is_some()),
            ("DateOfModification", self.date_of_modification.is_some()),
        ];
        slots
            .into_iter()
            .filter(|(_, present)| *present)
            .map(|(name, _)| name)
            .collect()
    }

    /// Same item as a JSON object, for display.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Returns the value of the first key present in `item`.
fn first_present(item: &RawItem, keys: &[&str]) -> Option<Value> {
    keys.iter().find_map(|k| item.get(*k).cloned())
}

fn collect_timestamps(item: &RawItem) -> Vec<NaiveDateTime> {
    DATE_KEYS
        .iter()
        .filter_map(|key| item.get(*key))
        .filter_map(Value::as_str)
        .filter_map(parse_date)
        .map(|parsed| parsed.timestamp)
        .collect()
}

/// Builds the reduced record for one raw item. Pure; bad dates just drop out.
pub fn simplify_item(item: &RawItem) -> SimplifiedItem {
    let mut simplified = SimplifiedItem {
        subject: item.get("Subject").cloned(),
        body: item.get("Body").cloned(),
        is_complete: item.get("IsComplete").cloned(),
        folder_name: first_present(item, &["FolderName", "Folder", "undocumented 0x0e05"]),
        creator: first_present(
            item,
            &["Creator", "CreatorName", "CreatorSimpleDisplayName"],
        ),
        ..Default::default()
    };

    // Only the listed source keys count; derived names are never read back.
    if let Some(span) = reconcile(&collect_timestamps(item)) {
        simplified.date_of_creation = Some(span.oldest);
        simplified.date_of_modification = Some(span.newest);
    }

    simplified
}
