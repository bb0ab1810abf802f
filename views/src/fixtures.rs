//! Sample data set served by the console.
//!
//! Referential integrity (unique ids, valid `restaurant_id`s) is a property of
//! this data, checked in tests rather than enforced at runtime.

use std::collections::BTreeMap;

use crate::model::*;

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

/// Build the full sample catalog.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog {
        restaurants: restaurants(),
        conversations: conversations(),
        reservations: reservations(),
        menu_items: menu_items(),
        campaigns: campaigns(),
        deep_links: deep_links(),
        users: users(),
        flows: flows(),
        integrations: integrations(),
        metrics: metrics(),
        messages: messages(),
        agent_config: agent_config(),
        agent_settings: agent_settings(),
    }
}

fn s(v: &str) -> String {
    v.to_owned()
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: &str,
    name: &str,
    address: &str,
    status: RestaurantStatus,
    channels: [bool; 4],
    created_at: &str,
    total_interactions: u32,
    resolution_rate: f64,
) -> Restaurant {
    let [whatsapp, facebook, web, instagram] = channels;
    Restaurant {
        id: s(id),
        name: s(name),
        address: s(address),
        timezone: s("Europe/Madrid"),
        status,
        channels: ChannelFlags { whatsapp, facebook, web, instagram },
        created_at: s(created_at),
        total_interactions,
        resolution_rate,
    }
}

fn restaurants() -> Vec<Restaurant> {
    use RestaurantStatus::*;
    vec![
        restaurant("1", "La Trattoria", "Calle Principal 123, Madrid", Active, [true, true, true, false], "2023-01-15T10:30:00Z", 1245, 0.87),
        restaurant("2", "Sushi Sakura", "Avenida Libertad 45, Barcelona", Active, [true, false, true, true], "2023-03-22T14:15:00Z", 876, 0.92),
        restaurant("3", "Burger House", "Plaza Mayor 8, Valencia", Inactive, [true, true, false, false], "2023-05-10T09:45:00Z", 432, 0.75),
        restaurant("4", "El Asador", "Calle Goya 78, Madrid", Active, [true, true, true, true], "2023-02-05T11:20:00Z", 1567, 0.89),
        restaurant("5", "Taco Loco", "Avenida Diagonal 123, Barcelona", Pending, [false, true, true, false], "2023-06-18T16:30:00Z", 289, 0.81),
    ]
}

#[allow(clippy::too_many_arguments)]
fn conversation(
    id: &str,
    restaurant_id: &str,
    channel: Channel,
    customer_name: &str,
    status: ConversationStatus,
    times: (&str, &str),
    messages: u32,
    topic: &str,
) -> Conversation {
    Conversation {
        id: s(id),
        restaurant_id: s(restaurant_id),
        channel,
        customer_name: s(customer_name),
        status,
        start_time: s(times.0),
        last_message_time: s(times.1),
        messages,
        topic: Some(s(topic)),
    }
}

fn conversations() -> Vec<Conversation> {
    use Channel::*;
    use ConversationStatus::*;
    vec![
        conversation("1", "1", Whatsapp, "María García", Active, ("2023-07-15T18:30:00Z", "2023-07-15T18:45:00Z"), 8, "Reservations"),
        conversation("2", "1", Facebook, "Juan Pérez", Resolved, ("2023-07-15T17:15:00Z", "2023-07-15T17:30:00Z"), 6, "Menu Information"),
        conversation("3", "2", Web, "Ana Martínez", Transferred, ("2023-07-15T19:00:00Z", "2023-07-15T19:20:00Z"), 12, "Complaint"),
        conversation("4", "4", Instagram, "Carlos Rodríguez", Active, ("2023-07-15T20:10:00Z", "2023-07-15T20:25:00Z"), 9, "Opening Hours"),
        conversation("5", "1", Whatsapp, "Laura Sánchez", Resolved, ("2023-07-15T16:45:00Z", "2023-07-15T17:00:00Z"), 7, "Reservations"),
    ]
}

fn reservations() -> Vec<Reservation> {
    vec![
        Reservation {
            id: s("1"),
            restaurant_id: s("1"),
            customer_name: s("María García"),
            customer_email: s("maria@example.com"),
            customer_phone: s("+34612345678"),
            date: s("2023-07-20"),
            time: s("20:30"),
            party_size: 4,
            status: ReservationStatus::Confirmed,
            notes: Some(s("Window table if possible")),
            source: ReservationSource::AiAgent,
        },
        Reservation {
            id: s("2"),
            restaurant_id: s("1"),
            customer_name: s("Juan Pérez"),
            customer_email: s("juan@example.com"),
            customer_phone: s("+34698765432"),
            date: s("2023-07-21"),
            time: s("21:00"),
            party_size: 2,
            status: ReservationStatus::Confirmed,
            notes: None,
            source: ReservationSource::Website,
        },
        Reservation {
            id: s("3"),
            restaurant_id: s("1"),
            customer_name: s("Ana Martínez"),
            customer_email: s("ana@example.com"),
            customer_phone: s("+34645678901"),
            date: s("2023-07-22"),
            time: s("19:30"),
            party_size: 6,
            status: ReservationStatus::Pending,
            notes: Some(s("Birthday celebration")),
            source: ReservationSource::Manual,
        },
        Reservation {
            id: s("4"),
            restaurant_id: s("1"),
            customer_name: s("Pablo Ortega"),
            customer_email: s("pablo@example.com"),
            customer_phone: s("+34611122233"),
            date: s("2023-07-20"),
            time: s("13:45"),
            party_size: 3,
            status: ReservationStatus::Cancelled,
            notes: None,
            source: ReservationSource::AiAgent,
        },
        Reservation {
            id: s("5"),
            restaurant_id: s("2"),
            customer_name: s("Lucía Romero"),
            customer_email: s("lucia@example.com"),
            customer_phone: s("+34677788899"),
            date: s("2023-07-20"),
            time: s("21:15"),
            party_size: 2,
            status: ReservationStatus::Pending,
            notes: None,
            source: ReservationSource::Website,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn menu_item(
    id: &str,
    name: &str,
    description: &str,
    price_cents: u32,
    category: &str,
    tags: &[&str],
    available: bool,
    is_special: bool,
) -> MenuItem {
    MenuItem {
        id: s(id),
        restaurant_id: s("1"),
        name: s(name),
        description: s(description),
        price_cents,
        category: s(category),
        tags: tags.iter().map(|t| s(t)).collect(),
        available,
        is_special,
    }
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        menu_item("1", "Margherita Pizza", "Classic pizza with tomato sauce, mozzarella, and basil", 1250, "Pizzas", &["vegetarian"], true, false),
        menu_item("2", "Spaghetti Carbonara", "Spaghetti with egg, pecorino cheese, pancetta, and black pepper", 1475, "Pasta", &[], true, true),
        menu_item("3", "Tiramisu", "Classic Italian dessert with coffee-soaked ladyfingers and mascarpone cream", 850, "Desserts", &["vegetarian"], true, false),
        menu_item("4", "Quattro Formaggi", "Pizza with mozzarella, gorgonzola, fontina, and parmesan", 1395, "Pizzas", &["vegetarian"], false, false),
    ]
}

fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: s("1"),
            restaurant_id: s("1"),
            title: s("Weekend Special Offer"),
            message: s("Join us this weekend for a special 20% discount on all main courses!"),
            status: CampaignStatus::Sent,
            scheduled_for: Some(s("2023-07-10T18:00:00Z")),
            sent_at: Some(s("2023-07-10T18:00:00Z")),
            audience: Audience::AllCustomers,
            deep_link: s("nebula://restaurant/1/promo/weekend-special"),
            open_rate: Some(0.42),
            click_rate: Some(0.18),
        },
        Campaign {
            id: s("2"),
            restaurant_id: s("1"),
            title: s("New Menu Items"),
            message: s("We've added 5 exciting new dishes to our menu. Come try them out!"),
            status: CampaignStatus::Scheduled,
            scheduled_for: Some(s("2023-07-20T17:00:00Z")),
            sent_at: None,
            audience: Audience::PreviousCustomers,
            deep_link: s("nebula://restaurant/1/menu/new-items"),
            open_rate: None,
            click_rate: None,
        },
        Campaign {
            id: s("3"),
            restaurant_id: s("1"),
            title: s("Happy Hour Extended"),
            message: s("Our popular happy hour is now extended until 8pm every weekday!"),
            status: CampaignStatus::Draft,
            scheduled_for: None,
            sent_at: None,
            audience: Audience::AllCustomers,
            deep_link: s("nebula://restaurant/1/promo/happy-hour"),
            open_rate: None,
            click_rate: None,
        },
        Campaign {
            id: s("4"),
            restaurant_id: s("2"),
            title: s("Sushi Tuesday"),
            message: s("All sushi rolls at 30% off every Tuesday. Reserve your table now!"),
            status: CampaignStatus::Sent,
            scheduled_for: Some(s("2023-07-05T10:00:00Z")),
            sent_at: Some(s("2023-07-05T10:00:00Z")),
            audience: Audience::AllCustomers,
            deep_link: s("nebula://restaurant/2/promo/sushi-tuesday"),
            open_rate: Some(0.38),
            click_rate: Some(0.22),
        },
        Campaign {
            id: s("5"),
            restaurant_id: s("2"),
            title: s("Chef's Special Weekend"),
            message: s("This weekend our chef has prepared a special tasting menu. Limited seats available!"),
            status: CampaignStatus::Scheduled,
            scheduled_for: Some(s("2023-07-22T09:00:00Z")),
            sent_at: None,
            audience: Audience::VipCustomers,
            deep_link: s("nebula://restaurant/2/event/chef-special"),
            open_rate: None,
            click_rate: None,
        },
    ]
}

fn deep_link(
    id: &str,
    restaurant_id: &str,
    url: &str,
    kind: DeepLinkKind,
    params: &[(&str, &str)],
    created_at: &str,
    usage_count: u32,
) -> DeepLink {
    DeepLink {
        id: s(id),
        restaurant_id: s(restaurant_id),
        url: s(url),
        kind,
        params: params.iter().map(|(k, v)| (s(k), s(v))).collect::<BTreeMap<_, _>>(),
        created_at: s(created_at),
        usage_count,
    }
}

fn deep_links() -> Vec<DeepLink> {
    use DeepLinkKind::*;
    vec![
        deep_link("1", "1", "nebula://restaurant/1/promo/weekend-special", Promotion, &[("promoId", "weekend-special"), ("discount", "20%")], "2023-07-08T14:30:00Z", 145),
        deep_link("2", "1", "nebula://restaurant/1/menu/new-items", Menu, &[("section", "new-items")], "2023-07-15T11:20:00Z", 78),
        deep_link("3", "1", "nebula://restaurant/1/promo/happy-hour", Promotion, &[("promoId", "happy-hour"), ("time", "4pm-8pm")], "2023-07-12T09:45:00Z", 0),
        deep_link("4", "2", "nebula://restaurant/2/promo/sushi-tuesday", Promotion, &[("promoId", "sushi-tuesday"), ("discount", "30%")], "2023-07-03T16:15:00Z", 203),
        deep_link("5", "2", "nebula://restaurant/2/event/chef-special", Event, &[("eventId", "chef-special"), ("date", "2023-07-22")], "2023-07-18T10:30:00Z", 0),
    ]
}

fn user(id: &str, name: &str, email: &str, role: UserRole, status: UserStatus, last_login: Option<&str>) -> StaffUser {
    StaffUser { id: s(id), name: s(name), email: s(email), role, status, last_login: last_login.map(s) }
}

fn users() -> Vec<StaffUser> {
    use UserRole::*;
    vec![
        user("1", "Restaurant Admin", "admin@restaurant.com", RestaurantAdmin, UserStatus::Active, Some("2023-07-15T10:30:00Z")),
        user("2", "John Smith", "john@restaurant.com", Staff, UserStatus::Active, Some("2023-07-14T15:45:00Z")),
        user("3", "Maria Rodriguez", "maria@restaurant.com", Staff, UserStatus::Active, Some("2023-07-15T09:15:00Z")),
        user("4", "David Chen", "david@restaurant.com", Staff, UserStatus::Inactive, Some("2023-07-10T11:20:00Z")),
        user("5", "Sarah Johnson", "sarah@restaurant.com", Staff, UserStatus::Pending, None),
    ]
}

#[allow(clippy::too_many_arguments)]
fn flow(
    id: &str,
    restaurant_id: &str,
    name: &str,
    description: &str,
    status: FlowStatus,
    last_updated: &str,
    slug: &str,
    channel: FlowChannel,
) -> AutomationFlow {
    AutomationFlow {
        id: s(id),
        restaurant_id: s(restaurant_id),
        name: s(name),
        description: s(description),
        status,
        last_updated: s(last_updated),
        webhook: format!("https://n8n.nebula.ai/webhook/{slug}"),
        channels: vec![channel],
    }
}

fn flows() -> Vec<AutomationFlow> {
    use FlowChannel::*;
    use FlowStatus::*;
    vec![
        flow("1", "1", "WhatsApp Integration", "Connects WhatsApp Business API with the AI agent", Active, "2023-07-10T14:30:00Z", "whatsapp-la-trattoria", Whatsapp),
        flow("2", "1", "Facebook Messenger", "Handles Facebook Messenger conversations", Active, "2023-07-12T09:15:00Z", "facebook-la-trattoria", Facebook),
        flow("3", "1", "Reservation Notifications", "Sends email notifications for new reservations", Active, "2023-07-08T16:45:00Z", "reservations-la-trattoria", Email),
        flow("4", "2", "WhatsApp Integration", "Connects WhatsApp Business API with the AI agent", Active, "2023-07-11T10:20:00Z", "whatsapp-sushi-sakura", Whatsapp),
        flow("5", "2", "Instagram DM Handler", "Processes Instagram direct messages", Inactive, "2023-07-05T11:30:00Z", "instagram-sushi-sakura", Instagram),
        flow("6", "1", "Apparta Integration", "Connects with Apparta TuMesa for reservations", Error, "2023-07-13T08:45:00Z", "apparta-la-trattoria", Api),
    ]
}

fn integration(restaurant_id: &str, last_sync: Option<&str>, sync_status: SyncStatus, features: [bool; 3], sync_frequency_minutes: u32) -> Integration {
    let [reservations, menu, customers] = features;
    Integration {
        restaurant_id: s(restaurant_id),
        connected: sync_status != SyncStatus::NotConnected,
        last_sync: last_sync.map(s),
        sync_status,
        features: SyncFeatures { reservations, menu, customers },
        sync_frequency_minutes,
    }
}

fn integrations() -> Vec<Integration> {
    use SyncStatus::*;
    vec![
        integration("1", Some("2023-07-15T10:30:00Z"), Success, [true, true, true], 15),
        integration("2", Some("2023-07-15T09:45:00Z"), Warning, [true, true, false], 30),
        integration("3", None, NotConnected, [false, false, false], 60),
        integration("4", Some("2023-07-15T08:15:00Z"), Error, [true, true, true], 15),
        integration("5", None, NotConnected, [false, false, false], 60),
    ]
}

fn topics(pairs: &[(&str, u32)]) -> Vec<TopicCount> {
    pairs.iter().map(|(topic, count)| TopicCount { topic: s(topic), count: *count }).collect()
}

fn metrics() -> Vec<DailyMetric> {
    vec![
        DailyMetric {
            id: s("1"),
            restaurant_id: s("1"),
            date: s("2023-07-15"),
            conversations: 45,
            resolution_rate: 0.88,
            reservations: 12,
            satisfaction: 4.7,
            average_response_secs: 35,
            top_topics: topics(&[("Reservations", 18), ("Menu Information", 15), ("Opening Hours", 8), ("Special Requests", 4)]),
        },
        DailyMetric {
            id: s("2"),
            restaurant_id: s("1"),
            date: s("2023-07-14"),
            conversations: 38,
            resolution_rate: 0.85,
            reservations: 10,
            satisfaction: 4.5,
            average_response_secs: 40,
            top_topics: topics(&[("Reservations", 16), ("Menu Information", 12), ("Opening Hours", 6), ("Special Requests", 4)]),
        },
    ]
}

fn message(id: &str, sender: MessageSender, content: &str, timestamp: &str) -> Message {
    Message { id: s(id), conversation_id: s("1"), sender, content: s(content), timestamp: s(timestamp) }
}

/// Thread behind conversation `1`; other conversations have no recorded lines.
fn messages() -> Vec<Message> {
    use MessageSender::*;
    vec![
        message("1", Customer, "Hello, I would like to make a reservation for tomorrow night.", "2023-07-15T18:30:00Z"),
        message("2", Agent, "Hi there! I'd be happy to help you with a reservation. How many people will be in your party, and what time would you prefer?", "2023-07-15T18:31:00Z"),
        message("3", Customer, "We are 4 people and would like to come at 8:00 PM if possible.", "2023-07-15T18:32:00Z"),
        message("4", Agent, "Let me check our availability for tomorrow at 8:00 PM for 4 people...", "2023-07-15T18:33:00Z"),
        message("5", Agent, "Great news! We have a table available for 4 people tomorrow at 8:00 PM. Would you like me to make this reservation for you?", "2023-07-15T18:33:30Z"),
        message("6", Customer, "Yes, please. My name is María García.", "2023-07-15T18:34:00Z"),
        message("7", Agent, "Perfect! I've made a reservation for 4 people tomorrow at 8:00 PM under the name María García. Could I also get a contact number in case the restaurant needs to reach you?", "2023-07-15T18:35:00Z"),
    ]
}

fn model(id: &str, name: &str, provider: &str, context_window: &str, cost_tier: &str) -> AgentModel {
    AgentModel { id: s(id), name: s(name), provider: s(provider), context_window: s(context_window), cost_tier: s(cost_tier) }
}

fn function(name: &str, description: &str, parameters: &[(&str, &str)]) -> AgentFunction {
    AgentFunction {
        name: s(name),
        description: s(description),
        parameters: parameters
            .iter()
            .map(|(key, text)| FunctionParameter { name: s(key), description: s(text) })
            .collect(),
    }
}

const BASE_INSTRUCTIONS: &str = "You are a helpful AI assistant for La Trattoria restaurant. Your primary goal is to assist customers with:
1. Providing information about the menu, ingredients, and specials
2. Helping with reservations (checking availability, making new reservations)
3. Answering questions about location, hours, and policies
4. Being friendly and representing the restaurant's warm, family-oriented brand

Always be polite, concise, and helpful. If you don't know something, admit it and offer to connect the customer with a human staff member.";

fn agent_config() -> AgentConfig {
    AgentConfig {
        default_model: s("gpt-4"),
        models: vec![
            model("gpt-4", "GPT-4 Turbo", "OpenAI", "128K", "$$"),
            model("gpt-3.5", "GPT-3.5 Turbo", "OpenAI", "16K", "$"),
            model("claude-3-opus", "Claude 3 Opus", "Anthropic", "200K", "$$$"),
            model("claude-3-sonnet", "Claude 3 Sonnet", "Anthropic", "180K", "$$"),
            model("deepseek-coder", "DeepSeek Coder", "DeepSeek", "32K", "$"),
        ],
        instructions: s(BASE_INSTRUCTIONS),
        functions: vec![
            function(
                "check_reservation_availability",
                "Check if tables are available for reservation at a specific date and time",
                &[("date", "YYYY-MM-DD format date"), ("time", "HH:MM format time"), ("party_size", "Number of guests")],
            ),
            function(
                "create_reservation",
                "Create a new reservation",
                &[
                    ("customer_name", "Full name of the customer"),
                    ("customer_phone", "Phone number"),
                    ("date", "YYYY-MM-DD format date"),
                    ("time", "HH:MM format time"),
                    ("party_size", "Number of guests"),
                    ("special_requests", "Any special requests (optional)"),
                ],
            ),
            function(
                "get_menu_items",
                "Get menu items by category or dietary restrictions",
                &[
                    ("category", "Category of food (e.g., appetizers, main, dessert)"),
                    ("dietary_restrictions", "Dietary restrictions (e.g., vegetarian, gluten-free)"),
                ],
            ),
        ],
        parameters: GenerationParameters { temperature: 0.7, max_response_tokens: 1000, handoff_threshold: 0.35 },
    }
}

const TRATTORIA_PERSONALITY: &str = "Our restaurant has a warm, family-friendly atmosphere. We pride ourselves on authentic Italian cuisine made with fresh, local ingredients. Our staff is attentive and knowledgeable about our menu.

When interacting with customers, be friendly, enthusiastic, and helpful. Use a conversational tone that's professional but not overly formal. Feel free to make recommendations based on customer preferences.";

/// Only La Trattoria has customized its agent.
fn agent_settings() -> Vec<AgentSettings> {
    vec![AgentSettings {
        restaurant_id: s("1"),
        agent_name: s("Trattoria Assistant"),
        personality: s(TRATTORIA_PERSONALITY),
        greeting: s("Welcome to La Trattoria! I'm your virtual assistant, here to help with reservations, menu information, or any questions you might have about our restaurant. How can I assist you today?"),
        farewell: s("Thank you for chatting with La Trattoria! We look forward to serving you soon. Buon appetito!"),
        bubble_color: s("#1E3A8A"),
        style: CommunicationStyle::Friendly,
        response_length: 3,
        language: s("en"),
    }]
}
