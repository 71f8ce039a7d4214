//! Static group lookup table.
//!
//! Groups are fixed when the process starts; the directory is never mutated
//! afterwards, so handlers share it through `Arc<AppState>` without locking.

use tracing::warn;

use crate::error::ValidationError;
use crate::types::Group;

/// The subgroups deployed out of the box.
pub fn default_groups() -> Vec<Group> {
    vec![
        Group::new(
            "aiengineering",
            "AI Engineering 소모임",
            "C07JVMT255E",
            Some("nalbam"),
        ),
        Group::new("container", "Container 소모임", "GE94HAW4V", Some("mosesyoon")),
        Group::new("kiro", "Kiro 소모임", "C0A4R4LLEBH", Some("yanso")),
        Group::new("sandbox", "Sandbox 소모임", "C07HZRYBNRG", Some("nalbam")),
    ]
}

/// Parse the compact `id,name,channelId[,contactId];...` form used by the
/// `REFUND_SUBGROUPS` environment variable.
///
/// Entries with the wrong number of parts or a blank part are skipped with a
/// warning; the rest are kept in order.
pub fn parse_compact(spec: &str) -> Vec<Group> {
    let mut groups = Vec::new();

    for entry in spec.split(';') {
        if entry.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = entry.split(',').map(str::trim).collect();
        if !(3..=4).contains(&parts.len()) {
            warn!(entry = %entry, "invalid subgroup entry, expected id,name,channelId[,contactId]");
            continue;
        }
        if parts.iter().any(|p| p.is_empty()) {
            warn!(entry = %entry, "invalid subgroup entry, all fields must be non-empty");
            continue;
        }
        groups.push(Group::new(parts[0], parts[1], parts[2], parts.get(3).copied()));
    }

    groups
}

/// Immutable id → group lookup.
#[derive(Debug, Clone, Default)]
pub struct GroupDirectory {
    groups: Vec<Group>,
}

impl GroupDirectory {
    /// Build a directory. When two entries share an id the first one wins.
    pub fn new(groups: Vec<Group>) -> Self {
        let mut unique: Vec<Group> = Vec::with_capacity(groups.len());
        for g in groups {
            if unique.iter().any(|u| u.id == g.id) {
                warn!(id = %g.id, "duplicate subgroup id ignored");
                continue;
            }
            unique.push(g);
        }
        Self { groups: unique }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn as_slice(&self) -> &[Group] {
        &self.groups
    }

    pub fn get(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Like [`get`](Self::get) but turns a miss into the user-facing error.
    pub fn resolve(&self, id: &str) -> Result<&Group, ValidationError> {
        self.get(id).ok_or_else(|| ValidationError::UnknownSubgroup {
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_id_resolves_to_its_record() {
        let dir = GroupDirectory::new(default_groups());
        for g in default_groups() {
            assert_eq!(dir.resolve(&g.id).unwrap(), &g);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let dir = GroupDirectory::new(default_groups());
        for id in ["", "Sandbox", "sandbox ", "devops"] {
            assert_eq!(
                dir.resolve(id).unwrap_err(),
                ValidationError::UnknownSubgroup { id: id.to_string() }
            );
        }
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let dir = GroupDirectory::new(vec![
            Group::new("a", "First", "C1", None),
            Group::new("a", "Second", "C2", None),
        ]);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("a").unwrap().name, "First");
    }

    #[test]
    fn parse_compact_reads_entries() {
        let groups = parse_compact("kiro, Kiro 소모임 ,C0A4R4LLEBH;infra,Infra,C999,alice");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], Group::new("kiro", "Kiro 소모임", "C0A4R4LLEBH", None));
        assert_eq!(groups[1].contact_id.as_deref(), Some("alice"));
    }

    #[test]
    fn parse_compact_skips_malformed_entries() {
        let groups = parse_compact("a,A;b,B,C2;c, ,C3;d,D,C4,x,y;;e,E,C5;");
        let ids: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "e"]);
    }

    #[test]
    fn parse_compact_empty_is_empty() {
        assert!(parse_compact("").is_empty());
        assert!(parse_compact("   ").is_empty());
    }
}
