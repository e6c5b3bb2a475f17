//! Member roster: the caller-supplied, ordered list of people a sender name
//! may resolve to.
//!
//! Roster order matters. When several members plausibly match a sender name,
//! the earlier entry wins (see [`MemberResolver`](crate::resolver::MemberResolver)).
//!
//! # Example
//!
//! ```
//! use linkpulse::{Roster, RosterMember};
//!
//! let roster = Roster::new(vec![
//!     RosterMember::new(7, "John Doe"),
//!     RosterMember::new(9, "Jane Smith"),
//! ]);
//!
//! assert_eq!(roster.len(), 2);
//! assert_eq!(roster.get(9).map(|m| m.name.as_str()), Some("Jane Smith"));
//! assert!(roster.validate().is_ok());
//! ```

use std::collections::HashSet;
#[cfg(all(feature = "json-output", feature = "csv-output"))]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LinkpulseError, Result};

/// A single roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMember {
    /// Stable identifier assigned by the caller's storage.
    pub id: u64,
    /// Display name as people are expected to appear in the chat.
    pub name: String,
}

impl RosterMember {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Ordered, read-only member list used for sender resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vec<RosterMember>,
}

impl Roster {
    pub fn new(members: Vec<RosterMember>) -> Self {
        Self { members }
    }

    /// Returns the members in roster order.
    pub fn members(&self) -> &[RosterMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RosterMember> {
        self.members.iter()
    }

    /// Looks up a member by id.
    pub fn get(&self, id: u64) -> Option<&RosterMember> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Checks the roster contract.
    ///
    /// Every entry needs a non-blank name (a blank name would match every
    /// sender by containment) and ids must be unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.members.len());

        for (position, member) in self.members.iter().enumerate() {
            if member.name.trim().is_empty() {
                return Err(LinkpulseError::invalid_input(format!(
                    "roster entry {} (id {}) has a blank name",
                    position, member.id
                )));
            }
            if !seen.insert(member.id) {
                return Err(LinkpulseError::invalid_input(format!(
                    "roster id {} appears more than once",
                    member.id
                )));
            }
        }

        Ok(())
    }

    /// Parses a roster from a JSON array of `{"id": .., "name": ..}` records.
    ///
    /// Extra fields (email, status, ...) are ignored.
    ///
    /// ```
    /// use linkpulse::Roster;
    ///
    /// let roster = Roster::from_json_str(r#"[{"id": 1, "name": "Alice", "status": "active"}]"#)?;
    /// assert_eq!(roster.len(), 1);
    /// # Ok::<(), linkpulse::LinkpulseError>(())
    /// ```
    #[cfg(feature = "json-output")]
    pub fn from_json_str(content: &str) -> Result<Self> {
        let members: Vec<RosterMember> = serde_json::from_str(content).map_err(|e| {
            LinkpulseError::invalid_input(format!(
                "roster is not a list of {{id, name}} records: {e}"
            ))
        })?;
        Ok(Self::new(members))
    }

    /// Parses a roster from CSV with an `id,name` header.
    #[cfg(feature = "csv-output")]
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut members = Vec::new();
        for record in csv_reader.deserialize::<RosterMember>() {
            let member = record.map_err(|e| {
                LinkpulseError::invalid_input(format!(
                    "roster CSV row is not an {{id, name}} record: {e}"
                ))
            })?;
            members.push(member);
        }

        Ok(Self::new(members))
    }

    /// Loads a roster file, choosing the decoder from its extension
    /// (`.json` or `.csv`).
    #[cfg(all(feature = "json-output", feature = "csv-output"))]
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match ext.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?),
            _ => Err(LinkpulseError::invalid_format(
                "roster",
                format!(
                    "Unknown roster extension '.{}' for {}. Expected .json or .csv",
                    ext,
                    path.display()
                ),
            )),
        }
    }
}

impl From<Vec<RosterMember>> for Roster {
    fn from(members: Vec<RosterMember>) -> Self {
        Self::new(members)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a RosterMember;
    type IntoIter = std::slice::Iter<'a, RosterMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
