//! Authorization policy
//!
//! One explicit capability table instead of per-handler conditionals.
//! Handlers resolve the caller's [`Role`] relative to the target resource
//! (ownership and workplace volunteering are relational, not global), then
//! ask the table. Where the API hides object existence from outsiders, the
//! handler answers 404 rather than 403; the table only says yes or no.

/// Caller role relative to the resource being acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// No valid temporary token presented
    Anonymous,
    /// Authenticated, no special relation to the target
    Authenticated,
    /// Authenticated and owns the target object
    Owner,
    /// Authenticated volunteer of the target's workplace
    Volunteer,
    /// Staff account
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
    Delete,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Catalogs,
    Workplaces,
    Periods,
    TimeSlots,
    Reservations,
    PaymentProfiles,
}

/// Role of a caller with no relation to the target object.
pub fn base_role(user: &crate::domain::user::User) -> Role {
    if user.is_staff {
        Role::Admin
    } else {
        Role::Authenticated
    }
}

/// The capability table.
pub fn allows(role: Role, action: Action, resource: Resource) -> bool {
    use Action::*;
    use Resource::*;
    use Role::*;

    if role == Admin {
        return true;
    }

    match (resource, action) {
        // Anyone may sign up; everything else on users is owner-scoped.
        (Users, Create) => true,
        (Users, Retrieve | Update | Delete) => role == Owner,
        (Users, List | Export) => false,

        // Reference data is world-readable, admin-writable.
        (Catalogs | Workplaces | Periods | TimeSlots, List | Retrieve) => true,
        (Catalogs | Workplaces | Periods | TimeSlots, _) => false,

        // Members book for themselves and manage their own reservations.
        // Volunteers check people in at their workplace.
        (Reservations, Create) => matches!(role, Authenticated | Owner | Volunteer),
        (Reservations, List) => matches!(role, Authenticated | Owner | Volunteer),
        (Reservations, Retrieve | Delete) => role == Owner,
        (Reservations, Update) => matches!(role, Owner | Volunteer),
        (Reservations, Export) => false,

        // Payment profiles are strictly owner-scoped.
        (PaymentProfiles, Create) => matches!(role, Authenticated | Owner),
        (PaymentProfiles, List | Retrieve | Update | Delete) => role == Owner,
        (PaymentProfiles, Export) => false,
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_is_unrestricted() {
        for action in [
            Action::List,
            Action::Retrieve,
            Action::Create,
            Action::Update,
            Action::Delete,
            Action::Export,
        ] {
            assert!(allows(Role::Admin, action, Resource::Users));
            assert!(allows(Role::Admin, action, Resource::Reservations));
        }
    }

    #[test]
    fn anonymous_can_sign_up_and_read_reference_data() {
        assert!(allows(Role::Anonymous, Action::Create, Resource::Users));
        assert!(allows(Role::Anonymous, Action::List, Resource::Periods));
        assert!(allows(Role::Anonymous, Action::Retrieve, Resource::Workplaces));
        assert!(!allows(Role::Anonymous, Action::Create, Resource::Reservations));
        assert!(!allows(Role::Anonymous, Action::List, Resource::Users));
    }

    #[test]
    fn reference_data_is_admin_writable_only() {
        assert!(!allows(Role::Authenticated, Action::Create, Resource::Periods));
        assert!(!allows(Role::Owner, Action::Update, Resource::Catalogs));
        assert!(!allows(Role::Volunteer, Action::Delete, Resource::Workplaces));
    }

    #[test]
    fn volunteers_may_update_but_not_cancel_reservations() {
        assert!(allows(Role::Volunteer, Action::Update, Resource::Reservations));
        assert!(!allows(Role::Volunteer, Action::Delete, Resource::Reservations));
        assert!(!allows(Role::Volunteer, Action::Retrieve, Resource::Reservations));
    }

    #[test]
    fn owners_manage_their_own_objects() {
        assert!(allows(Role::Owner, Action::Retrieve, Resource::Users));
        assert!(allows(Role::Owner, Action::Delete, Resource::Reservations));
        assert!(allows(Role::Owner, Action::Retrieve, Resource::PaymentProfiles));
        assert!(!allows(Role::Authenticated, Action::Retrieve, Resource::PaymentProfiles));
    }

    #[test]
    fn user_export_is_admin_only() {
        assert!(allows(Role::Admin, Action::Export, Resource::Users));
        assert!(!allows(Role::Owner, Action::Export, Resource::Users));
    }
}
