use super::*;

#[test]
fn closed_enums_round_trip_their_wire_spelling() {
    for status in RestaurantStatus::ALL {
        assert_eq!(status.as_str().parse::<RestaurantStatus>(), Ok(*status));
    }
    for source in ReservationSource::ALL {
        assert_eq!(source.as_str().parse::<ReservationSource>(), Ok(*source));
    }
    for status in SyncStatus::ALL {
        assert_eq!(status.as_str().parse::<SyncStatus>(), Ok(*status));
    }
    for style in CommunicationStyle::ALL {
        assert_eq!(style.as_str().parse::<CommunicationStyle>(), Ok(*style));
    }
    for range in MetricsRange::ALL {
        assert_eq!(range.as_str().parse::<MetricsRange>(), Ok(*range));
    }
}

#[test]
fn unknown_value_names_the_vocabulary() {
    let err = "archived".parse::<ConversationStatus>().unwrap_err();
    assert_eq!(err, ParseError::UnknownValue { kind: "conversation status", value: "archived".to_owned() });
    assert_eq!(err.to_string(), "unknown conversation status: \"archived\"");
}

#[test]
fn parsing_is_case_sensitive() {
    assert!("Active".parse::<RestaurantStatus>().is_err());
    assert!("WHATSAPP".parse::<Channel>().is_err());
}

#[test]
fn serde_spelling_matches_as_str() {
    let json = serde_json::to_value(ReservationSource::AiAgent).expect("serialize");
    assert_eq!(json, serde_json::json!("ai_agent"));
    let back: Audience = serde_json::from_value(serde_json::json!("vip_customers")).expect("deserialize");
    assert_eq!(back, Audience::VipCustomers);
    assert_eq!(Audience::VipCustomers.to_string(), "vip_customers");
}

#[test]
fn channel_flags_list_enabled_channels_in_order() {
    let flags = ChannelFlags { whatsapp: true, facebook: false, web: true, instagram: true };
    assert_eq!(flags.enabled(), vec![Channel::Whatsapp, Channel::Web, Channel::Instagram]);
    assert!(!flags.is_enabled(Channel::Facebook));
}

#[test]
fn metrics_for_returns_newest_first() {
    let catalog = crate::fixtures::sample_catalog();
    let dates: Vec<&str> = catalog.metrics_for("1").iter().map(|m| m.date.as_str()).collect();
    assert_eq!(dates, ["2023-07-15", "2023-07-14"]);
    assert!(catalog.metrics_for("3").is_empty());
}

#[test]
fn zero_metric_keeps_restaurant_id() {
    let zero = DailyMetric::zero("9");
    assert_eq!(zero.restaurant_id, "9");
    assert_eq!(zero.conversations, 0);
    assert!(zero.top_topics.is_empty());
}

#[test]
fn agent_settings_lookup_by_restaurant() {
    let catalog = crate::fixtures::sample_catalog();
    assert_eq!(catalog.agent_settings("1").map(|s| s.agent_name.as_str()), Some("Trattoria Assistant"));
    assert!(catalog.agent_settings("4").is_none());
}
