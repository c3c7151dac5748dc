use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Guest identifier, assigned as (max existing id + 1)
///
/// 64-bit so any integer id a browser may have stored still decodes.
pub type GuestId = u64;

/// Table identifier, fixed by the seeded table set
pub type TableId = u32;

/// Label shown for a guest whose table reference points nowhere
pub const UNKNOWN_TABLE_LABEL: &str = "Table inconnue";

/// Label shown for a guest without a table reference
pub const UNASSIGNED_LABEL: &str = "Non assigné";

/// A person invited to the wedding
///
/// Field names on the wire follow the browser storage format
/// (`nom`, `prenom`, `statut`, `tableId`, `regimeAlimentaire`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    /// Family name
    #[serde(rename = "nom")]
    pub last_name: String,
    /// Given name
    #[serde(rename = "prenom")]
    pub first_name: String,
    /// Contact email (free text, never validated)
    pub email: String,
    /// RSVP status
    #[serde(rename = "statut")]
    pub status: GuestStatus,
    /// Seating table, `None` when unassigned. Not checked against the table list.
    #[serde(rename = "tableId", default)]
    pub table_id: Option<TableId>,
    /// Free-text dietary requirements, empty when none
    #[serde(rename = "regimeAlimentaire", default)]
    pub dietary_notes: String,
}

/// RSVP status of a guest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GuestStatus {
    /// Invitation sent, no answer yet
    #[default]
    Invited,
    /// Attending; only confirmed guests are considered for seating
    Confirmed,
    /// Not attending
    Declined,
}

/// A seating table in the planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    #[serde(rename = "nom")]
    pub name: String,
    /// Soft limit; exceeding it only raises a warning
    #[serde(rename = "capacite")]
    pub capacity: u32,
    /// Placement of the table card in the planner view
    pub position: Position,
}

/// Planar coordinate of a table card, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Contents of the add-guest form before submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDraft {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub dietary_notes: String,
}

/// Editable fields of the add-guest form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    LastName,
    FirstName,
    Email,
    DietaryNotes,
}

/// Guest counts shown on the dashboard and in the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub confirmed: usize,
    /// Guests still in `INVITED`
    pub pending: usize,
    pub declined: usize,
    /// Confirmed guests carrying a table reference
    pub assigned: usize,
}

/// Occupancy of a single table, counting confirmed guests only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOccupancy {
    pub table_id: TableId,
    pub name: String,
    pub seated: usize,
    pub capacity: u32,
}

/// The three views of the app
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActiveTab {
    #[default]
    Dashboard,
    Guests,
    Tables,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestStatusParseError(String);

impl Guest {
    /// "Prénom Nom" as displayed everywhere in the UI
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == GuestStatus::Confirmed
    }

    pub fn has_dietary_notes(&self) -> bool {
        !self.dietary_notes.is_empty()
    }

    /// Compute the id for a new guest: one past the largest id, or 1 for an empty list
    ///
    /// `None` when the largest id is already `GuestId::MAX`.
    pub fn next_id(guests: &[Guest]) -> Option<GuestId> {
        match guests.iter().map(|g| g.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }
}

impl GuestStatus {
    pub const ALL: [GuestStatus; 3] = [
        GuestStatus::Invited,
        GuestStatus::Confirmed,
        GuestStatus::Declined,
    ];

    /// Wire value, also used as the `<select>` option value
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestStatus::Invited => "INVITED",
            GuestStatus::Confirmed => "CONFIRMED",
            GuestStatus::Declined => "DECLINED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GuestStatus::Invited => "Invité",
            GuestStatus::Confirmed => "Confirmé",
            GuestStatus::Declined => "Refusé",
        }
    }
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuestStatus {
    type Err = GuestStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GuestStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| GuestStatusParseError(s.to_string()))
    }
}

impl fmt::Display for GuestStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown guest status: '{}'", self.0)
    }
}

impl std::error::Error for GuestStatusParseError {}

impl GuestDraft {
    /// Last name, first name and email must all be non-empty
    pub fn is_complete(&self) -> bool {
        [&self.last_name, &self.first_name, &self.email]
            .iter()
            .all(|value| !value.is_empty())
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::LastName => &self.last_name,
            DraftField::FirstName => &self.first_name,
            DraftField::Email => &self.email,
            DraftField::DietaryNotes => &self.dietary_notes,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::LastName => self.last_name = value,
            DraftField::FirstName => self.first_name = value,
            DraftField::Email => self.email = value,
            DraftField::DietaryNotes => self.dietary_notes = value,
        }
    }

    /// Build the guest this draft describes: invited and unassigned
    pub fn into_guest(self, id: GuestId) -> Guest {
        Guest {
            id,
            last_name: self.last_name,
            first_name: self.first_name,
            email: self.email,
            status: GuestStatus::Invited,
            table_id: None,
            dietary_notes: self.dietary_notes,
        }
    }
}

impl StatusCounts {
    /// Header line, e.g. "4 confirmés sur 6 invités"
    pub fn summary(&self) -> String {
        format!("{} confirmés sur {} invités", self.confirmed, self.total)
    }
}

impl TableOccupancy {
    /// Seated / capacity, deliberately unclamped
    pub fn ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.seated as f64 / f64::from(self.capacity)
    }

    /// Ratio as a percentage, for progress bar widths
    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    pub fn is_full(&self) -> bool {
        self.seated >= self.capacity as usize
    }
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Dashboard, ActiveTab::Guests, ActiveTab::Tables];

    pub fn id(&self) -> &'static str {
        match self {
            ActiveTab::Dashboard => "dashboard",
            ActiveTab::Guests => "guests",
            ActiveTab::Tables => "tables",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Dashboard => "Tableau de bord",
            ActiveTab::Guests => "Invités",
            ActiveTab::Tables => "Plan de table",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActiveTab::Dashboard => "📊",
            ActiveTab::Guests => "👥",
            ActiveTab::Tables => "🪑",
        }
    }
}

/// Guest list used when storage holds nothing usable
pub fn default_guests() -> Vec<Guest> {
    let guest = |id, last: &str, first: &str, email: &str, status, table_id, dietary: &str| Guest {
        id,
        last_name: last.to_string(),
        first_name: first.to_string(),
        email: email.to_string(),
        status,
        table_id,
        dietary_notes: dietary.to_string(),
    };

    vec![
        guest(1, "Dupont", "Marie", "marie.dupont@email.com", GuestStatus::Confirmed, Some(1), "Végétarien"),
        guest(2, "Martin", "Pierre", "pierre.martin@email.com", GuestStatus::Confirmed, Some(1), ""),
        guest(3, "Bernard", "Sophie", "sophie.bernard@email.com", GuestStatus::Invited, None, "Sans gluten"),
        guest(4, "Rousseau", "Jean", "jean.rousseau@email.com", GuestStatus::Confirmed, Some(2), ""),
        guest(5, "Leroy", "Claire", "claire.leroy@email.com", GuestStatus::Declined, None, ""),
        guest(6, "Moreau", "Antoine", "antoine.moreau@email.com", GuestStatus::Confirmed, None, "Végétalien"),
    ]
}

/// The fixed table set
pub fn default_tables() -> Vec<Table> {
    let table = |id, name: &str, capacity, x, y| Table {
        id,
        name: name.to_string(),
        capacity,
        position: Position { x, y },
    };

    vec![
        table(1, "Table Famille", 8, 100, 150),
        table(2, "Table Amis", 10, 300, 150),
        table(3, "Table Collègues", 8, 500, 150),
        table(4, "Table Enfants", 6, 200, 300),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id() {
        assert_eq!(Guest::next_id(&[]), Some(1));
        assert_eq!(Guest::next_id(&default_guests()), Some(7));

        // Gaps are not reused, only the maximum matters
        let mut guests = default_guests();
        guests.retain(|g| g.id != 2 && g.id != 6);
        assert_eq!(Guest::next_id(&guests), Some(6));
    }

    #[test]
    fn test_next_id_exhausted() {
        let mut guests = default_guests();
        guests[0].id = GuestId::MAX;
        assert_eq!(Guest::next_id(&guests), None);

        guests[0].id = u64::from(u32::MAX);
        assert_eq!(Guest::next_id(&guests), Some(u64::from(u32::MAX) + 1));
    }

    #[test]
    fn test_large_ids_decode() {
        // Browser numbers are exact up to 2^53
        let json = r#"[{"id":9007199254740991,"nom":"Petit","prenom":"Lucie","email":"l@e.fr","statut":"INVITED"}]"#;
        let guests: Vec<Guest> = serde_json::from_str(json).unwrap();
        assert_eq!(guests[0].id, 9_007_199_254_740_991);
    }

    #[test]
    fn test_guest_status_parse() {
        for status in GuestStatus::ALL {
            assert_eq!(status.as_str().parse::<GuestStatus>().unwrap(), status);
        }

        assert!("confirmed".parse::<GuestStatus>().is_err());
        assert!("".parse::<GuestStatus>().is_err());
        assert_eq!(
            "MAYBE".parse::<GuestStatus>().unwrap_err().to_string(),
            "Unknown guest status: 'MAYBE'"
        );
    }

    #[test]
    fn test_guest_status_labels() {
        assert_eq!(GuestStatus::Invited.label(), "Invité");
        assert_eq!(GuestStatus::Confirmed.label(), "Confirmé");
        assert_eq!(GuestStatus::Declined.label(), "Refusé");
        assert_eq!(GuestStatus::default(), GuestStatus::Invited);
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = GuestDraft {
            last_name: "Petit".to_string(),
            first_name: "Lucie".to_string(),
            email: "lucie.petit@email.com".to_string(),
            dietary_notes: String::new(),
        };
        assert!(draft.is_complete());

        // Whitespace is still a value
        draft.set_field(DraftField::Email, "   ".to_string());
        assert!(draft.is_complete());

        draft.set_field(DraftField::Email, "x".to_string());
        draft.set_field(DraftField::FirstName, String::new());
        assert!(!draft.is_complete());
        assert_eq!(draft.field(DraftField::LastName), "Petit");
    }

    #[test]
    fn test_draft_into_guest() {
        let draft = GuestDraft {
            last_name: "Petit".to_string(),
            first_name: "Lucie".to_string(),
            email: "lucie.petit@email.com".to_string(),
            dietary_notes: "Halal".to_string(),
        };

        let guest = draft.into_guest(9);
        assert_eq!(guest.id, 9);
        assert_eq!(guest.status, GuestStatus::Invited);
        assert_eq!(guest.table_id, None);
        assert_eq!(guest.full_name(), "Lucie Petit");
        assert!(guest.has_dietary_notes());
    }

    #[test]
    fn test_occupancy_ratio_is_unclamped() {
        let mut occupancy = TableOccupancy {
            table_id: 4,
            name: "Table Enfants".to_string(),
            seated: 3,
            capacity: 6,
        };
        assert_eq!(occupancy.ratio(), 0.5);
        assert_eq!(occupancy.percent(), 50.0);
        assert!(!occupancy.is_full());

        occupancy.seated = 6;
        assert!(occupancy.is_full());

        occupancy.seated = 9;
        assert_eq!(occupancy.ratio(), 1.5);
        assert!(occupancy.is_full());
    }

    #[test]
    fn test_guest_wire_format() {
        let guest = default_guests().remove(0);
        let value = serde_json::to_value(&guest).unwrap();

        assert_eq!(value["nom"], "Dupont");
        assert_eq!(value["prenom"], "Marie");
        assert_eq!(value["statut"], "CONFIRMED");
        assert_eq!(value["tableId"], 1);
        assert_eq!(value["regimeAlimentaire"], "Végétarien");

        let table = serde_json::to_value(&default_tables()[3]).unwrap();
        assert_eq!(table["nom"], "Table Enfants");
        assert_eq!(table["capacite"], 6);
        assert_eq!(table["position"]["x"], 200);
    }

    #[test]
    fn test_guest_optional_fields_default() {
        let json = r#"{"id":3,"nom":"Bernard","prenom":"Sophie","email":"s@b.fr","statut":"INVITED"}"#;
        let guest: Guest = serde_json::from_str(json).unwrap();

        assert_eq!(guest.table_id, None);
        assert_eq!(guest.dietary_notes, "");
    }

    #[test]
    fn test_guest_collection_round_trip() {
        let mut guests = default_guests();
        guests[2].status = GuestStatus::Declined;
        guests[2].table_id = Some(3);

        let json = serde_json::to_string(&guests).unwrap();
        let restored: Vec<Guest> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, guests);
    }

    #[test]
    fn test_summary_and_tabs() {
        let counts = StatusCounts {
            total: 6,
            confirmed: 4,
            pending: 1,
            declined: 1,
            assigned: 3,
        };
        assert_eq!(counts.summary(), "4 confirmés sur 6 invités");

        let ids: Vec<_> = ActiveTab::ALL.iter().map(|tab| tab.id()).collect();
        assert_eq!(ids, vec!["dashboard", "guests", "tables"]);
        assert_eq!(ActiveTab::default(), ActiveTab::Dashboard);
    }
}
