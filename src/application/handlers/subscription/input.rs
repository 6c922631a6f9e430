//! Boundary validation shared by create and update.

use crate::domain::foundation::{BillingMonth, UserId};
use crate::domain::subscription::{
    EndMonth, Price, ServiceName, SubscriptionError, SubscriptionInterval,
};

/// How a blank `end_date` string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BlankEndDate {
    /// Treated like an absent end date.
    Unbounded,
    /// Rejected; only an absent end date means open-ended.
    Rejected,
}

/// Raw subscription fields as received from a caller.
pub(super) struct RawFields<'a> {
    pub service_name: &'a str,
    pub price: i64,
    pub user_id: &'a str,
    pub start_date: &'a str,
    pub end_date: Option<&'a str>,
}

/// Fields that passed validation.
#[derive(Debug)]
pub(super) struct ValidFields {
    pub service_name: ServiceName,
    pub user_id: UserId,
    pub interval: SubscriptionInterval,
}

/// Validates raw fields in order: service name, price, user id, start, end,
/// then date ordering.
pub(super) fn validate(
    raw: RawFields<'_>,
    blank_end: BlankEndDate,
) -> Result<ValidFields, SubscriptionError> {
    let service_name = ServiceName::new(raw.service_name)?;
    let price = Price::new(raw.price)?;
    let user_id = UserId::parse(raw.user_id)?;
    let start = BillingMonth::parse_field("start_date", raw.start_date)?;

    let end = match raw.end_date.map(str::trim) {
        None => EndMonth::Unbounded,
        Some("") => match blank_end {
            BlankEndDate::Unbounded => EndMonth::Unbounded,
            BlankEndDate::Rejected => {
                return Err(SubscriptionError::validation(
                    "end_date",
                    "end_date must be null or MM-YYYY",
                ))
            }
        },
        Some(text) => EndMonth::Bounded(BillingMonth::parse_field("end_date", text)?),
    };

    let interval = SubscriptionInterval::with_price(price, start, end)?;

    Ok(ValidFields {
        service_name,
        user_id,
        interval,
    })
}
