use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkplaceType {
    Office, // O
    Wfh,    // W
}

impl WorkplaceType {
    pub fn code(&self) -> &'static str {
        match self {
            WorkplaceType::Office => "O",
            WorkplaceType::Wfh => "W",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkplaceType::Office => "Office",
            WorkplaceType::Wfh => "WFH",
        }
    }

    /// Classify the portal's free-text workplace cell. Anything that does
    /// not read as remote work (building names, leave rows, blanks) counts
    /// as office.
    pub fn from_portal_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("wfh") || lower.contains("remote") {
            WorkplaceType::Wfh
        } else {
            WorkplaceType::Office
        }
    }
}
