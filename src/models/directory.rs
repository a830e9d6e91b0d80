use serde::{Serialize, Serializer};

use super::Activity;

/// Point-in-time copy of every activity, in insertion order.
///
/// Serialises as a JSON object keyed by activity name; key order follows the
/// seed order rather than being sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDirectory {
    entries: Vec<(String, Activity)>,
}

impl ActivityDirectory {
    pub fn new(entries: Vec<(String, Activity)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ActivityDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, a)| (n, a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_as_object_in_insertion_order() {
        let dir = ActivityDirectory::new(vec![
            ("Yoga".to_string(), Activity::new("Stretch", "Mon", 5)),
            ("Band".to_string(), Activity::new("Play", "Tue", 3).with_participants(["a@b.c"])),
        ]);

        let json = serde_json::to_string(&dir).unwrap();
        assert!(json.find("\"Yoga\"").unwrap() < json.find("\"Band\"").unwrap());

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Band"]["participants"], serde_json::json!(["a@b.c"]));
        assert_eq!(dir.get("Band").map(Activity::spots_left), Some(2));
        assert!(dir.get("Choir").is_none());
        assert!(!dir.is_empty());
        assert!(ActivityDirectory::default().is_empty());
    }
}
