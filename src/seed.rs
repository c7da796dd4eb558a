//! Fixed sample data loaded once at store construction. There is no external
//! source — no file, no network fetch.

use crate::model::{
    Conversation, DeliveryStatus, Direction, MediaKind, MediaRef, Message,
};
use chrono::{DateTime, Duration, Utc};

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation::direct("1", "Alice Wonderland")
            .with_avatar("https://i.pravatar.cc/150?u=alice")
            .with_status("Online"),
        Conversation::direct("2", "Bob The Builder")
            .with_avatar("https://i.pravatar.cc/150?u=bob")
            .with_status("Last seen 2 hours ago"),
        Conversation::direct("3", "Charlie Brown")
            .with_avatar("https://i.pravatar.cc/150?u=charlie")
            .with_status("Typing..."),
        Conversation::group("4", "Project Group Alpha").with_status("5 members"),
    ]
}

fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(minutes)
}

/// Seed messages are built as literals: the ids are fixed and every entry
/// satisfies the text-or-media invariant by construction.
fn seeded(
    id: &str,
    conversation_id: &str,
    content: &str,
    minutes: i64,
    direction: Direction,
    status: Option<DeliveryStatus>,
) -> Message {
    Message {
        id: id.to_string(),
        conversation_id: conversation_id.to_string(),
        content: Some(content.to_string()),
        sent_at: minutes_ago(minutes),
        direction,
        status,
        sender_name: None,
        media: None,
    }
}

fn media(url: &str, kind: MediaKind, file_name: &str) -> MediaRef {
    MediaRef {
        url: url.to_string(),
        kind,
        file_name: Some(file_name.to_string()),
    }
}

pub fn messages() -> Vec<Message> {
    use DeliveryStatus::{Delivered, Read, Sent};
    use Direction::{Inbound, Outbound};

    let mut msgs = vec![
        // Alice
        seeded("m1", "1", "Hey, how are you?", 63, Inbound, None),
        seeded("m2", "1", "I am good, thanks! You?", 62, Outbound, Some(Read)),
        seeded(
            "m3",
            "1",
            "Doing well. Check out this picture!",
            61,
            Inbound,
            None,
        ),
        seeded("m4", "1", "Wow, nice!", 60, Outbound, Some(Delivered)),
        // Bob — yesterday
        seeded("m5", "2", "Can we fix it?", 26 * 60, Inbound, None),
        seeded("m6", "2", "Yes, we can!", 26 * 60 - 1, Outbound, Some(Read)),
        seeded(
            "m7",
            "2",
            "Here is the project plan document.",
            26 * 60 - 2,
            Outbound,
            Some(Read),
        ),
        // Charlie — a few days back
        seeded(
            "m8",
            "3",
            "Good grief! Lost my kite again.",
            4 * 24 * 60,
            Inbound,
            None,
        ),
        // Project Group Alpha
        seeded("m9", "4", "Meeting at 3 PM.", 120, Inbound, None),
        seeded("m10", "4", "Roger that!", 119, Inbound, None),
        seeded("m11", "4", "Okay, I will be there.", 118, Outbound, Some(Sent)),
        seeded(
            "m12",
            "4",
            "Also, I found this cool video about our project topic.",
            115,
            Inbound,
            None,
        ),
    ];

    msgs[2].media = Some(media(
        "https://picsum.photos/seed/catpic/400/300",
        MediaKind::Image,
        "landscape.jpg",
    ));
    msgs[6].media = Some(media(
        "local://project_plan.pdf",
        MediaKind::Document,
        "project_plan.pdf",
    ));
    msgs[8].sender_name = Some("Alice W.".to_string());
    msgs[9].sender_name = Some("Bob B.".to_string());
    msgs[11].sender_name = Some("Charlie B.".to_string());
    msgs[11].media = Some(media(
        "local://project_vid.mp4",
        MediaKind::Video,
        "project_vid.mp4",
    ));

    msgs
}
