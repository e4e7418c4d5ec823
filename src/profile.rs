use crate::errors::FriendMapErr;

/// Who the user says they are and how far away to look for friends.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub display_name: String,
    pub search_radius_km: f64,
}

impl UserProfile {
    /// Create a profile, checking the name is not blank and the radius is a positive number.
    pub fn new(display_name: &str, search_radius_km: f64) -> Result<Self, FriendMapErr> {
        let display_name = display_name.trim();

        if display_name.is_empty() {
            return Err(FriendMapErr::InvalidProfile(
                "username must not be empty".to_owned(),
            ));
        }

        if !search_radius_km.is_finite() || search_radius_km <= 0.0 {
            return Err(FriendMapErr::InvalidProfile(format!(
                "distance must be a positive number of kilometers, got {}",
                search_radius_km
            )));
        }

        Ok(UserProfile {
            display_name: display_name.to_owned(),
            search_radius_km,
        })
    }

    /// Build a profile from the raw text of the login form.
    pub fn from_input(username: &str, distance: &str) -> Result<Self, FriendMapErr> {
        let radius: f64 = distance.trim().parse().map_err(|_| {
            FriendMapErr::InvalidProfile(format!("distance is not a number: {:?}", distance))
        })?;

        Self::new(username, radius)
    }

    /// The radius as it appears in the registration URL path, e.g. `5` or `2.5`.
    pub fn radius_path_segment(&self) -> String {
        format!("{}", self.search_radius_km)
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn test_from_input() {
        let profile = UserProfile::from_input("  alice ", " 5").unwrap();

        assert_eq!(profile.display_name, "alice");
        assert_eq!(profile.search_radius_km, 5.0);
        assert_eq!(profile.radius_path_segment(), "5");

        let profile = UserProfile::from_input("bob", "2.5").unwrap();
        assert_eq!(profile.radius_path_segment(), "2.5");
    }

    #[test]
    fn test_invalid_input() {
        for (name, distance) in &[
            ("", "5"),
            ("   ", "5"),
            ("alice", ""),
            ("alice", "five"),
            ("alice", "0"),
            ("alice", "-3"),
            ("alice", "inf"),
            ("alice", "NaN"),
        ] {
            match UserProfile::from_input(name, distance) {
                Err(FriendMapErr::InvalidProfile(_)) => {}
                other => panic!("{:?} {:?} gave {:?}", name, distance, other),
            }
        }
    }
}
