//! The fixed set of named routes.

use std::fmt;

/// A top-level destination in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    ContentGenerator,
    SeoSuite,
    BrandConsistency,
    AudienceTargeting,
}

impl Route {
    /// All routes in navigation order
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::ContentGenerator,
        Route::SeoSuite,
        Route::BrandConsistency,
        Route::AudienceTargeting,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::ContentGenerator => "Content Generator",
            Route::SeoSuite => "SEO Suite",
            Route::BrandConsistency => "Brand Consistency",
            Route::AudienceTargeting => "Audience Targeting",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::ContentGenerator => "/generator",
            Route::SeoSuite => "/seo",
            Route::BrandConsistency => "/brand",
            Route::AudienceTargeting => "/audience",
        }
    }

    /// Look a route up by its path. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Feature routes shown as cards on the dashboard
    pub fn features() -> impl Iterator<Item = Route> {
        Route::ALL
            .into_iter()
            .filter(|route| *route != Route::Dashboard)
    }

    /// One-line description for dashboard cards
    pub fn summary(&self) -> String {
        format!("Access powerful tools for {}.", self.name().to_lowercase())
    }

    /// Short call-to-action label
    pub fn call_to_action(&self) -> String {
        let first = self.name().split(' ').next().unwrap_or_default();
        format!("Go to {}", first)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/seo/"), Some(Route::SeoSuite));
        assert_eq!(Route::from_path(""), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/calendar"), None);
    }

    #[test]
    fn test_features_exclude_dashboard() {
        let features: Vec<_> = Route::features().collect();
        assert_eq!(features.len(), 4);
        assert!(!features.contains(&Route::Dashboard));
    }

    #[test]
    fn test_card_text() {
        assert_eq!(
            Route::SeoSuite.summary(),
            "Access powerful tools for seo suite."
        );
        assert_eq!(Route::BrandConsistency.call_to_action(), "Go to Brand");
    }
}
