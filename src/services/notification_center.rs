//! Notification reconciliation service.
//!
//! Fetches the user's notifications from the Manna API, derives the unread
//! count, performs read-state mutations, and keeps the OS badge counter
//! numerically consistent with local unread state.
//!
//! Badge updates after a mutation are optimistic: the new value is computed
//! from the unread count captured when the mutation was issued, so the UI
//! never waits on a refetch. The count written this way may be transiently
//! stale; the refresh that follows every mutation re-syncs the badge from
//! the authoritative list.

use crate::error::AppError;
use crate::models::Notification;
use tokio::sync::RwLock;

/// Remote notification operations exposed by the Manna API.
#[allow(async_fn_in_trait)]
pub trait NotificationApi {
    async fn get_notifications(&self) -> Result<Vec<Notification>, AppError>;

    /// Idempotent on the server side.
    async fn mark_notification_as_read(&self, id: &str) -> Result<(), AppError>;

    async fn mark_all_notifications_as_read(&self) -> Result<(), AppError>;

    /// Removes one record and returns it, including its prior read state.
    async fn delete_notification(&self, id: &str) -> Result<Notification, AppError>;
}

/// OS-level app badge counter.
pub trait BadgeSink {
    /// Set the badge to `count`; 0 clears the badge.
    fn set_count(&self, count: usize) -> Result<(), AppError>;
}

/// Caches the latest notification list and mediates between the remote
/// collaborator and the badge counter.
///
/// The cache is replaced wholesale on every fetch and is never persisted.
pub struct NotificationCenter<B> {
    cache: RwLock<Vec<Notification>>,
    badge: B,
}

impl<B: BadgeSink> NotificationCenter<B> {
    pub fn new(badge: B) -> Self {
        Self {
            cache: RwLock::new(Vec::new()),
            badge,
        }
    }

    /// The latest fetched notification list.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.cache.read().await.clone()
    }

    /// Count of cached notifications that are unread.
    ///
    /// Derived from the cache on every call, never stored.
    pub async fn unread_count(&self) -> usize {
        self.cache
            .read()
            .await
            .iter()
            .filter(|n| n.is_unread())
            .count()
    }

    /// Fetch the full notification list and replace the cache.
    ///
    /// When the fresh list has unread entries, the badge is forced to the
    /// derived count. This is the eventual-consistency backstop for the
    /// optimistic updates made by the mutation methods.
    pub async fn refresh(&self, api: &impl NotificationApi) -> Result<Vec<Notification>, AppError> {
        let fresh = api.get_notifications().await?;
        let unread = fresh.iter().filter(|n| n.is_unread()).count();

        *self.cache.write().await = fresh.clone();

        if unread > 0 {
            self.set_badge(unread);
        }

        Ok(fresh)
    }

    /// Mark one notification read, then reconcile.
    ///
    /// The badge is set to `unread - 1` using the count captured before
    /// the remote call, clamped at 0.
    pub async fn mark_as_read(&self, api: &impl NotificationApi, id: &str) -> Result<(), AppError> {
        let unread_before = self.unread_count().await;

        api.mark_notification_as_read(id).await?;
        self.set_badge(unread_before.saturating_sub(1));

        self.refresh(api).await?;
        Ok(())
    }

    /// Mark every notification read, then reconcile. Badge goes to 0.
    pub async fn mark_all_as_read(&self, api: &impl NotificationApi) -> Result<(), AppError> {
        api.mark_all_notifications_as_read().await?;
        self.set_badge(0);

        self.refresh(api).await?;
        Ok(())
    }

    /// Delete one notification, then reconcile.
    ///
    /// Deleting an unread notification implicitly removes it from the
    /// unread set, so the badge gets the same optimistic decrement as
    /// `mark_as_read`; deleting a read one leaves the badge untouched.
    pub async fn delete(
        &self,
        api: &impl NotificationApi,
        id: &str,
    ) -> Result<Notification, AppError> {
        let unread_before = self.unread_count().await;

        let removed = api.delete_notification(id).await?;
        if removed.is_unread() {
            self.set_badge(unread_before.saturating_sub(1));
        }

        self.refresh(api).await?;
        Ok(removed)
    }

    /// Badge writes are not transactional with the remote mutation: a
    /// failure here leaves the badge stale until the next refresh, so it
    /// is logged rather than propagated.
    fn set_badge(&self, count: usize) {
        if let Err(e) = self.badge.set_count(count) {
            log::warn!("[notifications] Failed to set badge count: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationMetadata;
    use chrono::Utc;
    use std::sync::Mutex;

    fn notification(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: format!("Notification {}", id),
            body: "body".to_string(),
            metadata: NotificationMetadata::default(),
            is_read,
            timestamp: Utc::now(),
            screen: None,
        }
    }

    /// In-memory stand-in for the remote collaborator.
    struct MockApi {
        notifications: Mutex<Vec<Notification>>,
    }

    impl MockApi {
        fn with(notifications: Vec<Notification>) -> Self {
            Self {
                notifications: Mutex::new(notifications),
            }
        }
    }

    impl NotificationApi for MockApi {
        async fn get_notifications(&self) -> Result<Vec<Notification>, AppError> {
            Ok(self.notifications.lock().unwrap().clone())
        }

        async fn mark_notification_as_read(&self, id: &str) -> Result<(), AppError> {
            let mut list = self.notifications.lock().unwrap();
            for n in list.iter_mut() {
                if n.id == id {
                    n.is_read = true;
                }
            }
            Ok(())
        }

        async fn mark_all_notifications_as_read(&self) -> Result<(), AppError> {
            let mut list = self.notifications.lock().unwrap();
            for n in list.iter_mut() {
                n.is_read = true;
            }
            Ok(())
        }

        async fn delete_notification(&self, id: &str) -> Result<Notification, AppError> {
            let mut list = self.notifications.lock().unwrap();
            let position = list
                .iter()
                .position(|n| n.id == id)
                .ok_or_else(|| AppError::not_found_with_id("Notification", id))?;
            Ok(list.remove(position))
        }
    }

    /// Remote collaborator whose every operation fails.
    struct DownApi;

    impl NotificationApi for DownApi {
        async fn get_notifications(&self) -> Result<Vec<Notification>, AppError> {
            Err(AppError::network("connection refused"))
        }

        async fn mark_notification_as_read(&self, _id: &str) -> Result<(), AppError> {
            Err(AppError::network("connection refused"))
        }

        async fn mark_all_notifications_as_read(&self) -> Result<(), AppError> {
            Err(AppError::network("connection refused"))
        }

        async fn delete_notification(&self, _id: &str) -> Result<Notification, AppError> {
            Err(AppError::network("connection refused"))
        }
    }

    #[derive(Default)]
    struct RecordingBadge {
        counts: Mutex<Vec<usize>>,
    }

    impl RecordingBadge {
        fn recorded(&self) -> Vec<usize> {
            self.counts.lock().unwrap().clone()
        }
    }

    impl BadgeSink for &RecordingBadge {
        fn set_count(&self, count: usize) -> Result<(), AppError> {
            self.counts.lock().unwrap().push(count);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_unread_count_is_derived_from_cache() {
        let api = MockApi::with(vec![
            notification("1", false),
            notification("2", false),
            notification("3", false),
            notification("4", false),
            notification("5", false),
            notification("6", true),
            notification("7", true),
        ]);
        let badge = RecordingBadge::default();
        let center = NotificationCenter::new(&badge);

        center.refresh(&api).await.unwrap();
        assert_eq!(center.unread_count().await, 5);
    }

    #[tokio::test]
    async fn test_refresh_resyncs_badge_when_unread() {
        let api = MockApi::with(vec![notification("1", false), notification("2", false)]);
        let badge = RecordingBadge::default();
        let center = NotificationCenter::new(&badge);

        center.refresh(&api).await.unwrap();
        assert_eq!(badge.recorded(), vec![2]);
    }

    #[tokio::test]
    async fn test_refresh_with_no_unread_leaves_badge_alone() {
        let api = MockApi::with(vec![notification("1", true)]);
        let badge = RecordingBadge::default();
        let center = NotificationCenter::new(&badge);

        center.refresh(&api).await.unwrap();
        assert!(badge.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_replaces_cache_wholesale() {
        let api = MockApi::with(vec![notification("1", true), notification("2", true)]);
        let badge = RecordingBadge::default();
        let center = NotificationCenter::new(&badge);

        center.refresh(&api).await.unwrap();
        assert_eq!(center.notifications().await.len(), 2);

        *api.notifications.lock().unwrap() = vec![notification("9", true)];
        center.refresh(&api).await.unwrap();

        let cached = center.notifications().await;
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].id, "9");
    }

    #[tokio::test]
    async fn test_mark_as_read_sets_badge_from_snapshot() {
        let api = MockApi::with(vec![
            notification("1", false),
            notification("2", false),
            notification("3", false),
        ]);
        let badge = RecordingBadge::default();
        let center = NotificationCenter::new(&badge);
        center.refresh(&api).await.unwrap();

        center.mark_as_read(&api, "1").await.unwrap();

        // First write after refresh is the optimistic 3 - 1, issued before
        // the refetched list is observed; the trailing 2 is the resync.
        assert_eq!(badge.recorded(), vec![3, 2, 2]);
        assert_eq!(center.unread_count().await, 2);
    }

    #[tokio::test]
    async fn test_badge_never_goes_negative() {
        let api = MockApi::with(vec![notification("1", true)]);
        let badge = RecordingBadge::default();
        let center = NotificationCenter::new(&badge);
        center.refresh(&api).await.unwrap();

        // 0 unread at call time; the optimistic decrement clamps at 0.
        center.mark_as_read(&api, "1").await.unwrap();
        assert_eq!(badge.recorded(), vec![0]);
    }

    #[tokio::test]
    async fn test_mark_all_as_read_zeroes_badge_and_count() {
        let api = MockApi::with(vec![
            notification("1", false),
            notification("2", false),
            notification("3", true),
        ]);
        let badge = RecordingBadge::default();
        let center = NotificationCenter::new(&badge);
        center.refresh(&api).await.unwrap();

        center.mark_all_as_read(&api).await.unwrap();

        assert_eq!(badge.recorded().last(), Some(&0));
        assert_eq!(center.unread_count().await, 0);

        let refetched = center.refresh(&api).await.unwrap();
        assert!(refetched.iter().all(|n| n.is_read));
    }

    #[tokio::test]
    async fn test_delete_unread_decrements_badge() {
        let api = MockApi::with(vec![notification("1", false), notification("2", false)]);
        let badge = RecordingBadge::default();
        let center = NotificationCenter::new(&badge);
        center.refresh(&api).await.unwrap();

        let removed = center.delete(&api, "1").await.unwrap();
        assert!(removed.is_unread());

        // Optimistic 2 - 1, then resync from the remaining unread entry.
        assert_eq!(badge.recorded(), vec![2, 1, 1]);
    }

    #[tokio::test]
    async fn test_delete_read_leaves_badge_untouched() {
        let api = MockApi::with(vec![notification("1", true), notification("2", true)]);
        let badge = RecordingBadge::default();
        let center = NotificationCenter::new(&badge);
        center.refresh(&api).await.unwrap();

        let removed = center.delete(&api, "1").await.unwrap();
        assert!(!removed.is_unread());
        assert!(badge.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure_propagates_without_badge_write() {
        let badge = RecordingBadge::default();
        let center = NotificationCenter::new(&badge);

        assert!(center.mark_as_read(&DownApi, "1").await.is_err());
        assert!(center.mark_all_as_read(&DownApi).await.is_err());
        assert!(center.delete(&DownApi, "1").await.is_err());
        assert!(center.refresh(&DownApi).await.is_err());

        assert!(badge.recorded().is_empty());
        assert!(center.notifications().await.is_empty());
    }
}
