//! Console entities and their closed status vocabularies.
//!
//! DESIGN
//! ======
//! Every status, channel, role and source that the dashboard displays is a
//! closed enum. The wire spelling (`snake_case`) is declared once per variant
//! so serde, query-string parsing and `as_str` can never disagree.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// Declare a closed string-backed enum with `as_str`, `ALL`, `Display` and `FromStr`.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire spelling of the variant.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(ParseError::UnknownValue { kind: $kind, value: other.to_owned() }),
                }
            }
        }
    };
}

// =============================================================================
// VOCABULARIES
// =============================================================================

closed_enum! {
    /// Onboarding state of a restaurant workspace.
    pub enum RestaurantStatus: "restaurant status" {
        Active => "active",
        Inactive => "inactive",
        Pending => "pending",
    }
}

closed_enum! {
    /// Customer messaging channel handled by the agent.
    pub enum Channel: "channel" {
        Whatsapp => "whatsapp",
        Facebook => "facebook",
        Web => "web",
        Instagram => "instagram",
    }
}

closed_enum! {
    pub enum ConversationStatus: "conversation status" {
        Active => "active",
        Resolved => "resolved",
        /// Escalated to a human.
        Transferred => "transferred",
    }
}

closed_enum! {
    pub enum ReservationStatus: "reservation status" {
        Confirmed => "confirmed",
        Pending => "pending",
        Cancelled => "cancelled",
    }
}

closed_enum! {
    /// Where a reservation was captured.
    pub enum ReservationSource: "reservation source" {
        AiAgent => "ai_agent",
        Manual => "manual",
        Website => "website",
    }
}

closed_enum! {
    pub enum CampaignStatus: "campaign status" {
        Sent => "sent",
        Scheduled => "scheduled",
        Draft => "draft",
    }
}

closed_enum! {
    pub enum Audience: "audience" {
        AllCustomers => "all_customers",
        PreviousCustomers => "previous_customers",
        VipCustomers => "vip_customers",
    }
}

closed_enum! {
    pub enum DeepLinkKind: "deep link type" {
        Promotion => "promotion",
        Menu => "menu",
        Event => "event",
    }
}

closed_enum! {
    pub enum UserRole: "user role" {
        SuperAdmin => "super_admin",
        RestaurantAdmin => "restaurant_admin",
        Staff => "staff",
    }
}

closed_enum! {
    pub enum UserStatus: "user status" {
        Active => "active",
        Inactive => "inactive",
        Pending => "pending",
    }
}

closed_enum! {
    /// Health of a workflow-automation flow.
    pub enum FlowStatus: "flow status" {
        Active => "active",
        Inactive => "inactive",
        Error => "error",
    }
}

closed_enum! {
    pub enum FlowChannel: "flow channel" {
        Whatsapp => "whatsapp",
        Facebook => "facebook",
        Instagram => "instagram",
        Email => "email",
        Api => "api",
    }
}

closed_enum! {
    /// Outcome of the last reservation-system sync.
    pub enum SyncStatus: "sync status" {
        Success => "success",
        Warning => "warning",
        Error => "error",
        NotConnected => "not_connected",
    }
}

closed_enum! {
    /// Author of a message in a conversation thread.
    pub enum MessageSender: "message sender" {
        Customer => "customer",
        Agent => "agent",
        /// A human who took over from the agent.
        Staff => "staff",
    }
}

closed_enum! {
    /// Tone a restaurant's agent speaks in.
    pub enum CommunicationStyle: "communication style" {
        Formal => "formal",
        Friendly => "friendly",
        Casual => "casual",
        Enthusiastic => "enthusiastic",
        Professional => "professional",
    }
}

closed_enum! {
    /// Reporting window on the metrics page.
    pub enum MetricsRange: "metrics range" {
        Day => "day",
        Week => "week",
        Month => "month",
        Quarter => "quarter",
        Year => "year",
    }
}

impl MetricsRange {
    /// Calendar days covered, the anchor day included.
    #[must_use]
    pub fn days(self) -> u16 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// Messaging channels enabled for a restaurant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelFlags {
    pub whatsapp: bool,
    pub facebook: bool,
    pub web: bool,
    pub instagram: bool,
}

impl ChannelFlags {
    #[must_use]
    pub fn is_enabled(self, channel: Channel) -> bool {
        match channel {
            Channel::Whatsapp => self.whatsapp,
            Channel::Facebook => self.facebook,
            Channel::Web => self.web,
            Channel::Instagram => self.instagram,
        }
    }

    /// Enabled channels in display order.
    #[must_use]
    pub fn enabled(self) -> Vec<Channel> {
        Channel::ALL.iter().copied().filter(|c| self.is_enabled(*c)).collect()
    }
}

/// A tenant of the console.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    pub timezone: String,
    pub status: RestaurantStatus,
    pub channels: ChannelFlags,
    pub created_at: String,
    pub total_interactions: u32,
    /// Precomputed fraction in `0.0..=1.0`.
    pub resolution_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub restaurant_id: String,
    pub channel: Channel,
    pub customer_name: String,
    pub status: ConversationStatus,
    pub start_time: String,
    pub last_message_time: String,
    pub messages: u32,
    pub topic: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub restaurant_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, 24-hour. Lexicographic order equals chronological order.
    pub time: String,
    pub party_size: u8,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub source: ReservationSource,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    pub price_cents: u32,
    pub category: String,
    pub tags: Vec<String>,
    pub available: bool,
    pub is_special: bool,
}

/// A push-notification campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub restaurant_id: String,
    pub title: String,
    pub message: String,
    pub status: CampaignStatus,
    pub scheduled_for: Option<String>,
    pub sent_at: Option<String>,
    pub audience: Audience,
    pub deep_link: String,
    /// Present only once the campaign has been sent.
    pub open_rate: Option<f64>,
    pub click_rate: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLink {
    pub id: String,
    pub restaurant_id: String,
    pub url: String,
    pub kind: DeepLinkKind,
    pub params: BTreeMap<String, String>,
    pub created_at: String,
    pub usage_count: u32,
}

/// Console operator account (distinct from the demo login identities).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_login: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationFlow {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    pub status: FlowStatus,
    pub last_updated: String,
    pub webhook: String,
    pub channels: Vec<FlowChannel>,
}

/// Which data sets the reservation-system integration syncs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncFeatures {
    pub reservations: bool,
    pub menu: bool,
    pub customers: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub restaurant_id: String,
    pub connected: bool,
    pub last_sync: Option<String>,
    pub sync_status: SyncStatus,
    pub features: SyncFeatures,
    pub sync_frequency_minutes: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: u32,
}

/// One day of agent performance for a restaurant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyMetric {
    pub id: String,
    pub restaurant_id: String,
    pub date: String,
    pub conversations: u32,
    pub resolution_rate: f64,
    pub reservations: u32,
    pub satisfaction: f64,
    pub average_response_secs: u32,
    pub top_topics: Vec<TopicCount>,
}

impl DailyMetric {
    /// Placeholder shown when a restaurant has no recorded metrics.
    #[must_use]
    pub fn zero(restaurant_id: &str) -> Self {
        Self {
            id: String::new(),
            restaurant_id: restaurant_id.to_owned(),
            date: String::new(),
            conversations: 0,
            resolution_rate: 0.0,
            reservations: 0,
            satisfaction: 0.0,
            average_response_secs: 0,
            top_topics: Vec::new(),
        }
    }
}

/// One line of a conversation thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender: MessageSender,
    pub content: String,
    pub timestamp: String,
}

// =============================================================================
// AGENT
// =============================================================================

/// A language model the agents can run on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentModel {
    pub id: String,
    pub name: String,
    pub provider: String,
    /// Context window as displayed, e.g. `128K`.
    pub context_window: String,
    /// Relative price, `$` to `$$$`.
    pub cost_tier: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionParameter {
    pub name: String,
    pub description: String,
}

/// A backend call the agent may make.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentFunction {
    pub name: String,
    pub description: String,
    pub parameters: Vec<FunctionParameter>,
}

/// Sampling and handoff knobs shared by every agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// `0.0..=2.0`.
    pub temperature: f64,
    pub max_response_tokens: u32,
    /// Confidence below which the agent offers a human, `0.0..=1.0`.
    pub handoff_threshold: f64,
}

/// Global agent configuration managed by the super admin.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Id of the entry in `models` every agent uses unless overridden.
    pub default_model: String,
    pub models: Vec<AgentModel>,
    pub instructions: String,
    pub functions: Vec<AgentFunction>,
    pub parameters: GenerationParameters,
}

impl AgentConfig {
    #[must_use]
    pub fn model(&self, id: &str) -> Option<&AgentModel> {
        self.models.iter().find(|m| m.id == id)
    }
}

/// How one restaurant's agent presents itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSettings {
    pub restaurant_id: String,
    pub agent_name: String,
    pub personality: String,
    pub greeting: String,
    pub farewell: String,
    /// `#RRGGBB`.
    pub bubble_color: String,
    pub style: CommunicationStyle,
    /// `1` (concise) to `5` (detailed).
    pub response_length: u8,
    /// ISO 639-1 code.
    pub language: String,
}

// =============================================================================
// CATALOG
// =============================================================================

/// Every collection the console renders. Loaded once, never mutated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
    pub conversations: Vec<Conversation>,
    pub reservations: Vec<Reservation>,
    pub menu_items: Vec<MenuItem>,
    pub campaigns: Vec<Campaign>,
    pub deep_links: Vec<DeepLink>,
    pub users: Vec<StaffUser>,
    pub flows: Vec<AutomationFlow>,
    pub integrations: Vec<Integration>,
    pub metrics: Vec<DailyMetric>,
    pub messages: Vec<Message>,
    pub agent_config: AgentConfig,
    pub agent_settings: Vec<AgentSettings>,
}

impl Catalog {
    #[must_use]
    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Thread of one conversation, oldest message first.
    #[must_use]
    pub fn messages_for(&self, conversation_id: &str) -> Vec<&Message> {
        let mut rows: Vec<&Message> = self.messages.iter().filter(|m| m.conversation_id == conversation_id).collect();
        rows.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        rows
    }

    #[must_use]
    pub fn agent_settings(&self, restaurant_id: &str) -> Option<&AgentSettings> {
        self.agent_settings.iter().find(|s| s.restaurant_id == restaurant_id)
    }

    /// Metrics for one restaurant, newest date first.
    #[must_use]
    pub fn metrics_for(&self, restaurant_id: &str) -> Vec<&DailyMetric> {
        let mut rows: Vec<&DailyMetric> = self
            .metrics
            .iter()
            .filter(|m| m.restaurant_id == restaurant_id)
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }
}
