//! SQL rendering of `SubscriptionFilter`.

use uuid::Uuid;

use crate::domain::subscription::SubscriptionFilter;

/// WHERE clause over `subscriptions`; binds `$1` (user id) and `$2` (LIKE pattern).
pub(super) const FILTER_CLAUSE: &str = r#"
    ($1::uuid IS NULL OR user_id = $1)
    AND ($2::text IS NULL OR service_name ILIKE $2 ESCAPE '\')
"#;

/// Bind values for [`FILTER_CLAUSE`].
pub(super) struct FilterBinds {
    pub user_id: Option<Uuid>,
    pub service_pattern: Option<String>,
}

impl From<&SubscriptionFilter> for FilterBinds {
    fn from(filter: &SubscriptionFilter) -> Self {
        Self {
            user_id: filter.user_id().map(|id| *id.as_uuid()),
            service_pattern: filter.service_name().map(contains_pattern),
        }
    }
}

/// Builds a LIKE pattern matching `fragment` literally anywhere in the value.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn pattern_wraps_fragment() {
        assert_eq!(contains_pattern("yandex"), "%yandex%");
    }

    #[test]
    fn pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("100%_off\\"), "%100\\%\\_off\\\\%");
    }

    #[test]
    fn empty_filter_binds_nulls() {
        let binds = FilterBinds::from(&SubscriptionFilter::any());
        assert!(binds.user_id.is_none());
        assert!(binds.service_pattern.is_none());
    }

    #[test]
    fn filter_binds_user_and_pattern() {
        let user = UserId::parse("60601fee-2bf1-4721-ae6f-7636e79a0cba").unwrap();
        let filter = SubscriptionFilter::any()
            .with_user(user)
            .with_service_name("plus");
        let binds = FilterBinds::from(&filter);
        assert_eq!(binds.user_id, Some(*user.as_uuid()));
        assert_eq!(binds.service_pattern.as_deref(), Some("%plus%"));
    }
}
