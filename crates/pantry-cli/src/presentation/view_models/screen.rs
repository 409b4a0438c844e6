use super::common::StatusLevel;

/// Bottom bar of the interactive browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarViewModel {
    /// "N recipes"
    pub recipe_count: String,
    pub locale: Option<String>,
    pub view_mode: String,
    pub loading: Option<String>,
    pub toast: Option<(String, StatusLevel)>,
}
