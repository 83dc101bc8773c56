use crate::domain::PlayerId;

const DEFAULT_BASE_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
const DEFAULT_COHORT: &str = "2410-ftb-et-web-am";

/// Where the roster API lives
///
/// Defaults can be overridden at build time with `PUPPY_BOWL_API_URL` and
/// `PUPPY_BOWL_COHORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root without a trailing slash
    pub base_url: String,
    /// Cohort path segment the roster is scoped to
    pub cohort: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::normalized(
            option_env!("PUPPY_BOWL_API_URL").unwrap_or(DEFAULT_BASE_URL),
            option_env!("PUPPY_BOWL_COHORT").unwrap_or(DEFAULT_COHORT),
        )
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, cohort: impl Into<String>) -> Self {
        Self::normalized(&base_url.into(), &cohort.into())
    }

    fn normalized(base_url: &str, cohort: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            cohort: cohort.trim_matches('/').to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_cohort(mut self, cohort: impl Into<String>) -> Self {
        self.cohort = cohort.into().trim_matches('/').to_string();
        self
    }

    fn cohort_url(&self) -> String {
        format!("{}/{}", self.base_url, self.cohort)
    }

    pub fn players_url(&self) -> String {
        format!("{}/players", self.cohort_url())
    }

    pub fn player_url(&self, id: PlayerId) -> String {
        format!("{}/players/{}", self.cohort_url(), id)
    }

    pub fn teams_url(&self) -> String {
        format!("{}/teams", self.cohort_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let config = ApiConfig::new("https://api.example.com/api/", "2410-TEST");

        assert_eq!(
            config.players_url(),
            "https://api.example.com/api/2410-TEST/players"
        );
        assert_eq!(
            config.player_url(42),
            "https://api.example.com/api/2410-TEST/players/42"
        );
        assert_eq!(
            config.teams_url(),
            "https://api.example.com/api/2410-TEST/teams"
        );
    }

    #[test]
    fn test_default_points_at_a_cohort() {
        let config = ApiConfig::default();
        assert!(!config.base_url.is_empty());
        assert!(!config.cohort.is_empty());
        assert!(config.players_url().ends_with("/players"));
    }

    #[test]
    fn test_with_cohort_strips_slashes() {
        let config = ApiConfig::default().with_cohort("/my-cohort/");
        assert_eq!(config.cohort, "my-cohort");
    }

    #[test]
    fn test_build_time_values_are_normalized() {
        let config = ApiConfig::normalized("https://api.example.com/api/", "/2410-TEST/");
        assert_eq!(
            config.players_url(),
            "https://api.example.com/api/2410-TEST/players"
        );

        let default = ApiConfig::default();
        assert!(!default.base_url.ends_with('/'));
        let url = default.players_url();
        let (_, path) = url.split_once("://").unwrap();
        assert!(!path.contains("//"), "{url}");
    }
}
