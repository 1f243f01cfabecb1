//! Access Policy
//!
//! Which pages each role may open. Admin and project manager see everything;
//! the other roles get a fixed subset.

use crate::domain::value_objects::{Page, Role};

const ALL_PAGES: &[Page] = &[
    Page::Dashboard,
    Page::Plants,
    Page::QrCodes,
    Page::Submissions,
    Page::FormTemplates,
    Page::Compliance,
    Page::Defects,
    Page::Notifications,
    Page::Settings,
    Page::PinManagement,
    Page::Form,
];

const SITE_MANAGER_PAGES: &[Page] = &[
    Page::Dashboard,
    Page::Plants,
    Page::QrCodes,
    Page::Submissions,
    Page::FormTemplates,
    Page::Compliance,
    Page::Defects,
    Page::Notifications,
];

const SAFETY_OFFICER_PAGES: &[Page] = &[
    Page::Dashboard,
    Page::Submissions,
    Page::Compliance,
    Page::Notifications,
];

const OPERATOR_PAGES: &[Page] = &[Page::Form];

/// Pages a role may open
pub fn pages_for(role: Role) -> &'static [Page] {
    match role {
        Role::Admin | Role::ProjectManager => ALL_PAGES,
        Role::SiteManager => SITE_MANAGER_PAGES,
        Role::SafetyOfficer => SAFETY_OFFICER_PAGES,
        Role::Operator => OPERATOR_PAGES,
    }
}

pub fn can(role: Role, page: Page) -> bool {
    pages_for(role).contains(&page)
}

/// Roles allowed to set another role's PIN without knowing the old one
pub fn can_manage_pins(role: Role) -> bool {
    matches!(role, Role::Admin | Role::ProjectManager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senior_roles_see_everything() {
        for page in ALL_PAGES {
            assert!(can(Role::Admin, *page));
            assert!(can(Role::ProjectManager, *page));
        }
    }

    #[test]
    fn safety_officer_has_no_defect_page() {
        assert!(can(Role::SafetyOfficer, Page::Compliance));
        assert!(!can(Role::SafetyOfficer, Page::Defects));
        assert!(!can(Role::SafetyOfficer, Page::Plants));
    }

    #[test]
    fn site_manager_cannot_manage_pins() {
        assert!(can(Role::SiteManager, Page::Defects));
        assert!(!can(Role::SiteManager, Page::PinManagement));
        assert!(!can(Role::SiteManager, Page::Settings));
        assert!(!can_manage_pins(Role::SiteManager));
    }

    #[test]
    fn operator_only_fills_forms() {
        assert_eq!(pages_for(Role::Operator), &[Page::Form]);
    }
}
