use crate::domain::model::{Location, UserProfile};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_phone, validate_url, Validate,
};

impl UserProfile {
    pub fn member_since_label(&self) -> String {
        crate::core::format::month_year(&self.member_since)
    }
}

impl Location {
    /// `Baner, Pune, India`; the city is skipped when absent or equal to the town.
    pub fn display_name(&self) -> String {
        match self.city.as_deref() {
            Some(city) if city != self.town => format!("{}, {}, {}", self.town, city, self.country),
            _ => format!("{}, {}", self.town, self.country),
        }
    }
}

impl Validate for UserProfile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("profile.name", &self.name)?;
        validate_email("profile.email", &self.email)?;
        validate_phone("profile.phone", &self.phone)?;
        if let Some(url) = &self.profile_image_url {
            validate_url("profile.profile_image_url", url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::UserStats;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn profile() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: Location {
                town: "Pune".to_string(),
                city: Some("Pune".to_string()),
                country: "India".to_string(),
                coordinate: None,
            },
            member_since: Utc.with_ymd_and_hms(2025, 10, 19, 0, 0, 0).unwrap(),
            profile_image_url: None,
            sports: vec!["Football".to_string()],
            stats: UserStats {
                games_played: 42,
                hours_played: 128,
                favorite_sport: "Football".to_string(),
                achievements: Vec::new(),
            },
        }
    }

    #[test]
    fn test_member_since_label() {
        assert_eq!(profile().member_since_label(), "Oct 2025");
    }

    #[test]
    fn test_location_display_name() {
        let mut p = profile();
        assert_eq!(p.location.display_name(), "Pune, India");
        p.location.town = "Baner".to_string();
        assert_eq!(p.location.display_name(), "Baner, Pune, India");
    }

    #[test]
    fn test_validate_profile() {
        let mut p = profile();
        assert!(p.validate().is_ok());

        p.profile_image_url = Some("not a url".to_string());
        assert!(p.validate().is_err());

        p.profile_image_url = None;
        p.email = "alex".to_string();
        assert!(p.validate().is_err());
    }
}
