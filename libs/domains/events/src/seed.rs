//! Fixed dataset served by the mock in place of a real store.

use crate::models::{
    EventDetail, EventId, EventSummary, OtherShow, Performer, ShowDay, ShowTime, SocialLinks,
    Venue,
};
use crate::repository::EventRepository;
use async_trait::async_trait;
use std::sync::Arc;

const SUMMARY_DESCRIPTION: &str = "Lorem ipsum dolor sit amet.  Lorem ipsum dolor sit amet.   \
Lorem ipsum dolor sit amet.  Lorem ipsum dolor sit amet.   Lorem ipsum dolor sit amet.  \
Lorem ipsum dolor sit amet.  ";

const CTA_TEXT: &str = "TICKETS $12.50+";

const DETAILS: [&str; 4] = [
    "Ages 21+",
    "General Admission",
    "Doors open 30 min prior to show",
    "2 item minimum",
];

const DESCRIPTION_TEXT: [&str; 2] = [
    "After becoming an accomplished stand up comedian, Chappelle  debuted his own weekly \
sketch comedy show on Comedy Central called Chappelle's Show.",
    "In April 2007, Chappelle set a stand up endurance record at the Laugh Factory comedy \
club, beating comedian Dane Cook's record of three hours and 50 minutes.",
];

/// In-memory repository over the seed dataset.
///
/// Built once at startup; clones share the same allocation.
#[derive(Debug, Clone)]
pub struct SeedEventRepository {
    summaries: Arc<[EventSummary]>,
    details: Arc<[EventDetail]>,
}

impl SeedEventRepository {
    pub fn new() -> Self {
        Self::with_data(seed_summaries(), seed_details())
    }

    /// Repository over caller-supplied records, in the given order.
    pub fn with_data(summaries: Vec<EventSummary>, details: Vec<EventDetail>) -> Self {
        Self {
            summaries: summaries.into(),
            details: details.into(),
        }
    }
}

impl Default for SeedEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for SeedEventRepository {
    async fn summaries(&self) -> Arc<[EventSummary]> {
        Arc::clone(&self.summaries)
    }

    async fn find_detail(&self, id: &str) -> Option<EventDetail> {
        self.details.iter().find(|d| d.id.matches(id)).cloned()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn summary(id: &str, name: &str, avatar: &str, venue: &str, days: &[&str]) -> EventSummary {
    EventSummary {
        id: id.to_string(),
        name: name.to_string(),
        avatar_url: avatar.to_string(),
        description: SUMMARY_DESCRIPTION.to_string(),
        venue_name: venue.to_string(),
        venue_location: "Tuscon".to_string(),
        show_dates: days
            .iter()
            .map(|day| ShowDay {
                day: day.to_string(),
                times: "8:00 PM, 9:30 PM".to_string(),
            })
            .collect(),
        cta_text: CTA_TEXT.to_string(),
    }
}

fn seed_summaries() -> Vec<EventSummary> {
    const BOTH_DAYS: [&str; 2] = ["Wednesday, August 17th", "Thursday, August 18th"];

    vec![
        summary(
            "11111",
            "Trenton Davis",
            "https://www.fillmurray.com/173/151",
            "Laffs Comedy Cafe",
            &BOTH_DAYS,
        ),
        summary(
            "2222",
            "Peter Andrews",
            "https://www.fillmurray.com/173/154",
            "Laffs Comedy Cafe",
            &BOTH_DAYS,
        ),
        summary(
            "213213",
            "Jim Davis",
            "https://www.fillmurray.com/173/152",
            "Club Congress",
            &BOTH_DAYS,
        ),
        summary(
            "4444",
            "jerry Davis",
            "https://www.fillmurray.com/173/153",
            "Fox Theatre",
            &BOTH_DAYS[..1],
        ),
    ]
}

fn laffs_venue() -> Venue {
    Venue {
        name: "Laffs Comedy Caffé".to_string(),
        position: [32.2, -110.6],
        location: "Tucson, AZ".to_string(),
        address: "2900 E Broadway Blvd, Tucson, AZ 85716".to_string(),
        logo_url: "https://i.picsum.photos/id/512/120/120.jpg".to_string(),
        web_url: "http://laffstuscon".to_string(),
        phone_number: "(520) 323-8869".to_string(),
    }
}

fn show_times(dates: &[&str]) -> Vec<ShowTime> {
    dates
        .iter()
        .map(|date| ShowTime {
            date: date.to_string(),
            ticket_url: "/".to_string(),
        })
        .collect()
}

fn performers(count: usize) -> Vec<Performer> {
    ["100/100", "100/102", "100/101"]
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, size)| Performer {
            avatar_url: format!("https://www.fillmurray.com/{size}"),
            name: format!("Performer {}", i + 1),
        })
        .collect()
}

/// Other shows pair a fixed run of images with the given names.
fn other_shows(names: [&str; 5]) -> Vec<OtherShow> {
    ["100/100", "100/102", "100/104", "100/103", "100/101"]
        .iter()
        .zip(names)
        .map(|(size, name)| OtherShow {
            image: format!("https://www.fillmurray.com/{size}"),
            name: name.to_string(),
            link: "#".to_string(),
        })
        .collect()
}

fn social_links() -> SocialLinks {
    SocialLinks {
        facebook: Some("http://facebook.com/asdfasdfasdfsd".to_string()),
        twitter: Some("http://twitter.com/asdfasdfasdfasdfsadf".to_string()),
        email: Some("foo@bar.com".to_string()),
    }
}

fn detail(
    id: u64,
    date_start: &str,
    date_end: &str,
    dates: &[&str],
    performer_count: usize,
    shows: [&str; 5],
) -> EventDetail {
    EventDetail {
        name: "Frankie Quinones".to_string(),
        id: EventId::Numeric(id),
        image_url: "https://www.fillmurray.com/250/200".to_string(),
        date_start: date_start.to_string(),
        date_end: date_end.to_string(),
        venue: laffs_venue(),
        show_dates: show_times(dates),
        details: strings(&DETAILS),
        description_text: strings(&DESCRIPTION_TEXT),
        video_link: "https://www.youtube.com/embed/D80NLUcixPg".to_string(),
        performers: performers(performer_count),
        other_shows: other_shows(shows),
        social_links: social_links(),
    }
}

fn seed_details() -> Vec<EventDetail> {
    vec![
        detail(
            123,
            "Saturday, August 17",
            "Sunday August 18",
            &[
                "2020-08-17T15:00:27.87+00:20",
                "2020-08-18T15:00:27.87+00:20",
                "2020-08-19T15:00:27.87+00:20",
                "2020-08-20T15:00:27.87+00:20",
            ],
            3,
            [
                "James Brown",
                "Phil Murray",
                "Chris Brown",
                "Darius Rucker",
                "Gabriel Iglesias",
            ],
        ),
        detail(
            124,
            "Saturday, August 24",
            "Sunday August 25",
            &[
                "2020-08-24T15:00:27.87+00:20",
                "2020-08-15T15:00:27.87+00:20",
            ],
            2,
            [
                "Chris Rock",
                "Phil Plat",
                "Chris Brown",
                "Darius Rucker",
                "Gabriel Iglesias",
            ],
        ),
    ]
}
