use std::collections::HashMap;

use shared::{BulkGroup, Task};

/// Fold a flat record list into groups keyed by bulk id, in order of first
/// key occurrence. Records without a bulk id form singleton groups keyed by
/// their own id, so grouped and ungrouped records render uniformly.
///
/// `begin`/`end` track the minimum and maximum member date; the remaining
/// display fields come from the first record seen for the key and are never
/// overwritten by later members.
pub fn group_by_bulk(records: &[Task]) -> Vec<BulkGroup> {
    let mut groups: Vec<BulkGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = record
            .bulk_id
            .clone()
            .unwrap_or_else(|| record.id.to_string());

        match index.get(&key) {
            Some(&at) => {
                let group = &mut groups[at];
                if record.date < group.begin {
                    group.begin = record.date;
                }
                if record.date > group.end {
                    group.end = record.date;
                }
                group.count += 1;
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(BulkGroup {
                    key,
                    bulk_id: record.bulk_id.clone(),
                    id: record.id,
                    text: record.text.clone(),
                    completed: record.completed,
                    begin: record.date,
                    end: record.date,
                    count: 1,
                });
            }
        }
    }

    groups
}
