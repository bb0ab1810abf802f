//! Per-page filter state.
//!
//! Each struct is a flat record of independent fields; every combination of
//! values is valid. `Default` is the unconstrained state (empty query, every
//! categorical filter at `all`).

use serde::Serialize;

use crate::calendar::CalendarDay;
use crate::filter::{Criteria, Filter, SearchQuery};
use crate::model::*;

#[cfg(test)]
#[path = "criteria_test.rs"]
mod criteria_test;

/// Restaurants page: search name/address, filter by status.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RestaurantCriteria {
    pub query: SearchQuery,
    pub status: Filter<RestaurantStatus>,
}

impl Criteria<Restaurant> for RestaurantCriteria {
    const EMPTY_MESSAGE: &'static str = "No restaurants found matching your criteria";

    fn matches(&self, r: &Restaurant) -> bool {
        self.query.matches_any([r.name.as_str(), r.address.as_str()]) && self.status.admits(&r.status)
    }
}

/// Conversations page: search customer name, filter by status, channel, tenant.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConversationCriteria {
    pub query: SearchQuery,
    pub status: Filter<ConversationStatus>,
    pub channel: Filter<Channel>,
    pub restaurant: Filter<String>,
}

impl Criteria<Conversation> for ConversationCriteria {
    const EMPTY_MESSAGE: &'static str = "No conversations found";

    fn matches(&self, c: &Conversation) -> bool {
        self.query.matches(&c.customer_name)
            && self.status.admits(&c.status)
            && self.channel.admits(&c.channel)
            && self.restaurant.admits_str(&c.restaurant_id)
    }
}

/// Menu page. Unavailable items are hidden unless `show_unavailable` is set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MenuCriteria {
    pub query: SearchQuery,
    pub category: Filter<String>,
    pub restaurant: Filter<String>,
    pub show_unavailable: bool,
}

impl Criteria<MenuItem> for MenuCriteria {
    const EMPTY_MESSAGE: &'static str = "No menu items found matching your criteria";

    fn matches(&self, m: &MenuItem) -> bool {
        self.query.matches_any([m.name.as_str(), m.description.as_str()])
            && self.category.admits_str(&m.category)
            && self.restaurant.admits_str(&m.restaurant_id)
            && (self.show_unavailable || m.available)
    }
}

/// Reservations page: one calendar day, ordered by time of day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReservationCriteria {
    pub date: CalendarDay,
    pub query: SearchQuery,
    pub status: Filter<ReservationStatus>,
    pub restaurant: Filter<String>,
}

impl ReservationCriteria {
    #[must_use]
    pub fn on(date: CalendarDay) -> Self {
        Self { date, query: SearchQuery::default(), status: Filter::All, restaurant: Filter::All }
    }
}

impl Criteria<Reservation> for ReservationCriteria {
    const EMPTY_MESSAGE: &'static str = "No reservations found for this date";

    fn matches(&self, r: &Reservation) -> bool {
        // Phone numbers are matched as typed; name and email ignore case.
        let matches_search = self.query.matches(&r.customer_name)
            || self.query.matches_exact(&r.customer_phone)
            || self.query.matches(&r.customer_email);

        r.date == self.date.to_string()
            && matches_search
            && self.status.admits(&r.status)
            && self.restaurant.admits_str(&r.restaurant_id)
    }

    fn order(&self, rows: &mut Vec<&Reservation>) {
        rows.sort_by(|a, b| a.time.cmp(&b.time));
    }
}

/// Notification campaigns: search title/message, filter by status and tenant.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CampaignCriteria {
    pub query: SearchQuery,
    pub status: Filter<CampaignStatus>,
    pub restaurant: Filter<String>,
}

impl Criteria<Campaign> for CampaignCriteria {
    const EMPTY_MESSAGE: &'static str = "No campaigns found matching your criteria";

    fn matches(&self, c: &Campaign) -> bool {
        self.restaurant.admits_str(&c.restaurant_id)
            && self.status.admits(&c.status)
            && self.query.matches_any([c.title.as_str(), c.message.as_str()])
    }
}

/// Deep links: search url or link type, filter by tenant.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DeepLinkCriteria {
    pub query: SearchQuery,
    pub restaurant: Filter<String>,
}

impl Criteria<DeepLink> for DeepLinkCriteria {
    const EMPTY_MESSAGE: &'static str = "No deep links found matching your criteria";

    fn matches(&self, d: &DeepLink) -> bool {
        self.restaurant.admits_str(&d.restaurant_id) && self.query.matches_any([d.url.as_str(), d.kind.as_str()])
    }
}

/// Staff users: search name/email, filter by role and status.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserCriteria {
    pub query: SearchQuery,
    pub role: Filter<UserRole>,
    pub status: Filter<UserStatus>,
}

impl Criteria<StaffUser> for UserCriteria {
    const EMPTY_MESSAGE: &'static str = "No users found matching your criteria";

    fn matches(&self, u: &StaffUser) -> bool {
        self.query.matches_any([u.name.as_str(), u.email.as_str()])
            && self.role.admits(&u.role)
            && self.status.admits(&u.status)
    }
}

/// Automation flows: categorical filters only.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FlowCriteria {
    pub status: Filter<FlowStatus>,
    pub restaurant: Filter<String>,
}

impl Criteria<AutomationFlow> for FlowCriteria {
    const EMPTY_MESSAGE: &'static str = "No flows found matching your criteria";

    fn matches(&self, f: &AutomationFlow) -> bool {
        self.restaurant.admits_str(&f.restaurant_id) && self.status.admits(&f.status)
    }
}
