use serde::Serialize;

/// Presentation settings handed to the rendering layer as an explicit value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub palette: Palette,
    pub spacing: Spacing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub divider: String,
}

/// Spacing scale in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub unit: u16,
    pub card_padding: u16,
    pub section_gap: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette {
                primary: "#1e3a8a".to_string(),
                secondary: "#0ea5e9".to_string(),
                background: "#f8fafc".to_string(),
                surface: "#ffffff".to_string(),
                text: "#0f172a".to_string(),
                divider: "#e2e8f0".to_string(),
            },
            spacing: Spacing {
                unit: 8,
                card_padding: 24,
                section_gap: 32,
            },
        }
    }
}
