//! Queries over user accounts and staff performance.

use common::RecordId;
use domain::{RequestStatus, RoleCount, StaffPerformance, StateSnapshot, User, UserRole, UserStats};

use crate::query::Bound;
use crate::scan::{count_matching, filter_records, find_by_id, top_n_by};
use crate::services::DEFAULT_TOP_LIMIT;

const LISTED_ROLES: [UserRole; 3] = [UserRole::Admin, UserRole::Cleaner, UserRole::Customer];

pub fn users(snapshot: &StateSnapshot) -> Vec<User> {
    snapshot.users.users.clone()
}

pub fn current_user(snapshot: &StateSnapshot) -> Option<User> {
    snapshot.users.current_user.clone()
}

pub fn user_stats(snapshot: &StateSnapshot) -> Option<UserStats> {
    snapshot.users.user_stats.clone()
}

pub fn status(snapshot: &StateSnapshot) -> RequestStatus {
    snapshot.users.status
}

pub fn message(snapshot: &StateSnapshot) -> Option<String> {
    snapshot.users.message.clone()
}

pub fn users_by_role(role: UserRole) -> Bound<UserRole, Vec<User>> {
    Bound::new(role, |role, s| filter_records(&s.users.users, |u| u.role == *role))
}

pub fn active_users(snapshot: &StateSnapshot) -> Vec<User> {
    filter_records(&snapshot.users.users, |u| u.is_active)
}

pub fn user_by_id(id: impl Into<RecordId>) -> Bound<RecordId, Option<User>> {
    Bound::new(id.into(), |id, s| find_by_id(&s.users.users, id))
}

pub fn count_by_role(role: UserRole) -> Bound<UserRole, usize> {
    Bound::new(role, |role, s| count_matching(&s.users.users, |u| u.role == *role))
}

pub fn total_users(snapshot: &StateSnapshot) -> usize {
    snapshot.users.users.len()
}

pub fn cleaners(snapshot: &StateSnapshot) -> Vec<User> {
    filter_records(&snapshot.users.users, |u| u.role == UserRole::Cleaner)
}

/// Accounts per role.
///
/// Reads the stats slot when present. Otherwise counts the records: one
/// entry per listed role, plus `unknown` when some accounts have no
/// recognised role.
pub fn role_breakdown(snapshot: &StateSnapshot) -> Vec<RoleCount> {
    if let Some(stats) = &snapshot.users.user_stats {
        return stats.by_role.clone();
    }

    let records = &snapshot.users.users;
    let mut breakdown: Vec<RoleCount> = LISTED_ROLES
        .into_iter()
        .map(|role| RoleCount {
            role,
            count: count_matching(records, |u| u.role == role) as u64,
        })
        .collect();

    let unknown = count_matching(records, |u| u.role == UserRole::Unknown);
    if unknown > 0 {
        breakdown.push(RoleCount {
            role: UserRole::Unknown,
            count: unknown as u64,
        });
    }
    breakdown
}

/// Cleaners with the most completed bookings, from the performance slot.
pub fn top_cleaners(limit: Option<usize>) -> Bound<usize, Vec<StaffPerformance>> {
    Bound::new(limit.unwrap_or(DEFAULT_TOP_LIMIT), |limit, s| {
        s.users
            .cleaner_performance
            .as_deref()
            .map(|entries| top_n_by(entries, *limit, |p| p.completed_bookings))
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Query;

    fn directory() -> StateSnapshot {
        let mut snapshot = StateSnapshot::new();
        snapshot.users.users = vec![
            User::new("u1", "Dana", UserRole::Admin),
            User::new("u2", "Lee", UserRole::Cleaner),
            User::new("u3", "Kim", UserRole::Cleaner).active(false),
            User::new("u4", "Sam", UserRole::Customer),
            User::new("u5", "Alex", UserRole::Customer),
            User::new("u6", "Robin", UserRole::Customer),
        ];
        snapshot
    }

    #[test]
    fn role_filter_and_count_agree() {
        let snapshot = directory();
        for role in [UserRole::Admin, UserRole::Cleaner, UserRole::Customer, UserRole::Unknown] {
            assert_eq!(
                users_by_role(role).apply(&snapshot).len(),
                count_by_role(role).apply(&snapshot)
            );
        }
        assert_eq!(count_by_role(UserRole::Customer).apply(&snapshot), 3);
        assert_eq!(cleaners(&snapshot).len(), 2);
    }

    #[test]
    fn active_users_skip_disabled_accounts() {
        let active = active_users(&directory());
        assert_eq!(active.len(), 5);
        assert!(active.iter().all(|u| u.id.as_str() != "u3"));
    }

    #[test]
    fn lookup_by_id() {
        let snapshot = directory();
        assert_eq!(user_by_id("u4").apply(&snapshot).unwrap().name, "Sam");
        assert!(user_by_id("u0").apply(&snapshot).is_none());
        assert_eq!(total_users(&snapshot), 6);
    }

    #[test]
    fn breakdown_is_counted_live_without_stats() {
        let breakdown = role_breakdown(&directory());
        assert_eq!(
            breakdown,
            [
                RoleCount { role: UserRole::Admin, count: 1 },
                RoleCount { role: UserRole::Cleaner, count: 2 },
                RoleCount { role: UserRole::Customer, count: 3 },
            ]
        );
    }

    #[test]
    fn breakdown_prefers_stats_slot() {
        let mut snapshot = directory();
        snapshot.users.user_stats = Some(UserStats {
            total: 40,
            active: 38,
            by_role: vec![RoleCount { role: UserRole::Customer, count: 35 }],
        });
        assert_eq!(role_breakdown(&snapshot).len(), 1);
        assert_eq!(user_stats(&snapshot).unwrap().total, 40);
    }

    #[test]
    fn top_cleaners_ranking() {
        let mut snapshot = directory();
        assert!(top_cleaners(None).apply(&snapshot).is_empty());

        snapshot.users.cleaner_performance = Some(vec![
            StaffPerformance::new("u2", "Lee", 12),
            StaffPerformance::new("u3", "Kim", 12),
            StaffPerformance::new("u7", "Jo", 20),
        ]);
        let top = top_cleaners(Some(2)).apply(&snapshot);
        let names: Vec<_> = top.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Jo", "Lee"]);
    }
}
