//! Client-side cache of user list queries.
//!
//! Each distinct `(page, filters)` pair is an independent entry. Mutations
//! never edit cached values in place; they call [`UsersQueryCache::invalidate`]
//! with the `"users"` scope so every cached page goes stale and the next list
//! command refetches.

use super::{PaginatedResponse, User, UserFilters};
use insider_states::{SnapshotClone, State, state_assign_impl};
use std::any::Any;
use std::collections::HashMap;

/// Scope prefix shared by every user list query.
pub const USERS_CACHE_SCOPE: &str = "users";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsersQueryKey {
    pub page: u32,
    pub filters: UserFilters,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: PaginatedResponse<User>,
    stale: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UsersQueryCache {
    entries: HashMap<UsersQueryKey, CacheEntry>,
}

impl UsersQueryCache {
    /// A cached page that has not been invalidated since it was stored.
    pub fn fresh(&self, key: &UsersQueryKey) -> Option<&PaginatedResponse<User>> {
        self.entries
            .get(key)
            .filter(|entry| !entry.stale)
            .map(|entry| &entry.value)
    }

    pub fn is_stale(&self, key: &UsersQueryKey) -> bool {
        self.entries.get(key).is_none_or(|entry| entry.stale)
    }

    /// Stores a page and clears any stale mark on it.
    pub fn insert(&mut self, key: UsersQueryKey, value: PaginatedResponse<User>) {
        self.entries.insert(key, CacheEntry { value, stale: false });
    }

    /// Marks every entry under `prefix` stale. All list entries share the
    /// `"users"` scope, so `invalidate("users")` hits all of them.
    pub fn invalidate(&mut self, prefix: &str) {
        if USERS_CACHE_SCOPE.starts_with(prefix) {
            for entry in self.entries.values_mut() {
                entry.stale = true;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotClone for UsersQueryCache {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for UsersQueryCache {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::UserStatus;

    fn page(n: u32) -> PaginatedResponse<User> {
        PaginatedResponse {
            data: vec![],
            page: n,
            per_page: 10,
            total: 0,
            total_pages: 1,
        }
    }

    fn key(page: u32, role: Option<&str>) -> UsersQueryKey {
        UsersQueryKey {
            page,
            filters: UserFilters {
                role: role.map(str::to_owned),
                status: None,
                search: None,
            },
        }
    }

    #[test]
    fn distinct_keys_are_independent_entries() {
        let mut cache = UsersQueryCache::default();
        cache.insert(key(1, None), page(1));
        cache.insert(key(2, None), page(2));
        cache.insert(key(1, Some("agent")), page(1));
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.fresh(&key(1, None)).map(|p| p.page), Some(1));
        assert!(cache.fresh(&key(3, None)).is_none());
    }

    #[test]
    fn invalidate_marks_every_entry_stale() {
        let mut cache = UsersQueryCache::default();
        cache.insert(key(1, None), page(1));
        cache.insert(key(2, Some("counselor")), page(2));

        cache.invalidate(USERS_CACHE_SCOPE);
        assert!(cache.fresh(&key(1, None)).is_none());
        assert!(cache.is_stale(&key(2, Some("counselor"))));
        // Entries survive for potential stale reads; only freshness is lost.
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn insert_after_invalidate_restores_freshness() {
        let mut cache = UsersQueryCache::default();
        cache.insert(key(1, None), page(1));
        cache.invalidate("users");
        cache.insert(key(1, None), page(1));
        assert!(cache.fresh(&key(1, None)).is_some());
    }

    #[test]
    fn unrelated_prefix_leaves_entries_fresh() {
        let mut cache = UsersQueryCache::default();
        cache.insert(
            UsersQueryKey {
                page: 1,
                filters: UserFilters {
                    role: None,
                    status: Some(UserStatus::Active),
                    search: None,
                },
            },
            page(1),
        );
        cache.invalidate("applications");
        assert_eq!(cache.len(), 1);
        assert!(!cache.is_stale(&UsersQueryKey {
            page: 1,
            filters: UserFilters {
                role: None,
                status: Some(UserStatus::Active),
                search: None,
            },
        }));
    }
}
