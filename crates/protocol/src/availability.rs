use serde::{Deserialize, Serialize};

/// Answer to "can something be booked at this time?" for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Availability {
    /// The time falls inside an existing work order (edges included).
    Occupied { block_id: u64 },
    /// The time sits between two work orders; `minutes` is the whole
    /// number of minutes between the end of one and the start of the next.
    Gap {
        before_block_id: u64,
        after_block_id: u64,
        minutes: u32,
    },
    /// Free, but open on at least one side so no gap length is known.
    Open {
        before_block_id: Option<u64>,
        after_block_id: Option<u64>,
    },
}

impl Availability {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }

    /// Popup title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Occupied { .. } => "Error",
            Self::Gap { .. } | Self::Open { .. } => "Schedule",
        }
    }

    /// Popup body text.
    pub fn message(&self) -> String {
        match self {
            Self::Occupied { .. } => "Selected time already has a work order!".to_string(),
            Self::Gap { minutes, .. } => format!("Work orders are {minutes} minutes apart."),
            Self::Open { .. } => "This time slot is available.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let occupied = Availability::Occupied { block_id: 3 };
        assert_eq!(occupied.title(), "Error");
        assert_eq!(occupied.message(), "Selected time already has a work order!");

        let gap = Availability::Gap {
            before_block_id: 1,
            after_block_id: 2,
            minutes: 60,
        };
        assert_eq!(gap.title(), "Schedule");
        assert_eq!(gap.message(), "Work orders are 60 minutes apart.");

        let open = Availability::Open {
            before_block_id: None,
            after_block_id: Some(2),
        };
        assert_eq!(open.message(), "This time slot is available.");
    }

    #[test]
    fn tagged_json() {
        let gap = Availability::Gap {
            before_block_id: 1,
            after_block_id: 2,
            minutes: 45,
        };
        let json = serde_json::to_string(&gap).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"gap","before_block_id":1,"after_block_id":2,"minutes":45}"#
        );
    }
}
