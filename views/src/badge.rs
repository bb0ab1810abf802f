//! Display badges and labels for every closed vocabulary.

use serde::Serialize;

use crate::model::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub variant: BadgeVariant,
}

const fn badge(label: &'static str, variant: BadgeVariant) -> Badge {
    Badge { label, variant }
}

/// Values rendered as a status pill.
pub trait Badged {
    fn badge(&self) -> Badge;
}

impl Badged for RestaurantStatus {
    fn badge(&self) -> Badge {
        match self {
            Self::Active => badge("Active", BadgeVariant::Success),
            Self::Inactive => badge("Inactive", BadgeVariant::Error),
            Self::Pending => badge("Pending", BadgeVariant::Warning),
        }
    }
}

impl Badged for ConversationStatus {
    fn badge(&self) -> Badge {
        match self {
            Self::Active => badge("Active", BadgeVariant::Primary),
            Self::Resolved => badge("Resolved", BadgeVariant::Success),
            Self::Transferred => badge("Transferred", BadgeVariant::Warning),
        }
    }
}

impl Badged for ReservationStatus {
    fn badge(&self) -> Badge {
        match self {
            Self::Confirmed => badge("Confirmed", BadgeVariant::Success),
            Self::Pending => badge("Pending", BadgeVariant::Warning),
            Self::Cancelled => badge("Cancelled", BadgeVariant::Error),
        }
    }
}

impl Badged for ReservationSource {
    fn badge(&self) -> Badge {
        match self {
            Self::AiAgent => badge("AI Agent", BadgeVariant::Primary),
            Self::Website => badge("Website", BadgeVariant::Secondary),
            Self::Manual => badge("Manual", BadgeVariant::Default),
        }
    }
}

impl Badged for CampaignStatus {
    fn badge(&self) -> Badge {
        match self {
            Self::Sent => badge("Sent", BadgeVariant::Success),
            Self::Scheduled => badge("Scheduled", BadgeVariant::Primary),
            Self::Draft => badge("Draft", BadgeVariant::Default),
        }
    }
}

impl Badged for UserRole {
    fn badge(&self) -> Badge {
        match self {
            Self::SuperAdmin => badge("Super Admin", BadgeVariant::Accent),
            Self::RestaurantAdmin => badge("Admin", BadgeVariant::Primary),
            Self::Staff => badge("Staff", BadgeVariant::Secondary),
        }
    }
}

impl Badged for UserStatus {
    fn badge(&self) -> Badge {
        match self {
            Self::Active => badge("Active", BadgeVariant::Success),
            Self::Inactive => badge("Inactive", BadgeVariant::Error),
            Self::Pending => badge("Pending", BadgeVariant::Warning),
        }
    }
}

impl Badged for FlowStatus {
    fn badge(&self) -> Badge {
        match self {
            Self::Active => badge("Active", BadgeVariant::Success),
            Self::Inactive => badge("Inactive", BadgeVariant::Default),
            Self::Error => badge("Error", BadgeVariant::Error),
        }
    }
}

impl Badged for SyncStatus {
    fn badge(&self) -> Badge {
        match self {
            Self::Success => badge("Synced", BadgeVariant::Success),
            Self::Warning => badge("Partial Sync", BadgeVariant::Warning),
            Self::Error => badge("Error", BadgeVariant::Error),
            Self::NotConnected => badge("Not Connected", BadgeVariant::Default),
        }
    }
}

impl Channel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Whatsapp => "WhatsApp",
            Self::Facebook => "Facebook",
            Self::Web => "Web",
            Self::Instagram => "Instagram",
        }
    }
}

impl FlowChannel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Whatsapp => "WhatsApp",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Email => "Email",
            Self::Api => "API",
        }
    }
}

impl Audience {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AllCustomers => "All Customers",
            Self::PreviousCustomers => "Previous Customers",
            Self::VipCustomers => "VIP Customers",
        }
    }
}

impl DeepLinkKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Promotion => "Promotion",
            Self::Menu => "Menu",
            Self::Event => "Event",
        }
    }
}
