//! Profile edits.

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::book::Book;
use crate::domain::profile::UserProfile;

pub struct ProfileService;

impl ProfileService {
    /// Overwrites the profile wholesale after validating the budget ceiling.
    /// The display name is free text and never rejected.
    pub fn update(book: &mut Book, profile: UserProfile) -> ServiceResult<()> {
        if !profile.monthly_budget.is_finite() || profile.monthly_budget < 0.0 {
            return Err(ServiceError::Invalid(
                "Monthly budget must be a non-negative number".into(),
            ));
        }
        book.profile = profile;
        book.touch();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_overwrites_wholesale() {
        let mut book = Book::new("Profile");
        let profile = UserProfile {
            name: "Anika".into(),
            monthly_budget: 22_000.0,
        };
        ProfileService::update(&mut book, profile.clone()).unwrap();
        assert_eq!(book.profile, profile);
    }

    #[test]
    fn update_accepts_a_blank_name() {
        let mut book = Book::new("Profile");
        let profile = UserProfile {
            name: "".into(),
            monthly_budget: 10_000.0,
        };
        ProfileService::update(&mut book, profile.clone()).unwrap();
        assert_eq!(book.profile, profile);
    }

    #[test]
    fn update_rejects_negative_budget() {
        let mut book = Book::new("Profile");
        let before = book.profile.clone();
        let err = ProfileService::update(
            &mut book,
            UserProfile {
                name: "Anika".into(),
                monthly_budget: -1.0,
            },
        )
        .expect_err("negative budget must be rejected");
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert_eq!(book.profile, before);
    }
}
