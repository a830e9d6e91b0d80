use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: usize,
    participants: [&'static str; 2],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: ["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: ["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: ["john@mergington.edu", "olivia@mergington.edu"],
    },
    // Sports
    SeedActivity {
        name: "Basketball Team",
        description: "Competitive basketball practice and inter-school matches",
        schedule: "Tuesdays and Thursdays, 5:00 PM - 7:00 PM",
        max_participants: 15,
        participants: ["alex@mergington.edu", "rachel@mergington.edu"],
    },
    SeedActivity {
        name: "Swimming Club",
        description: "Lap swimming, technique drills and swim meets",
        schedule: "Mondays and Wednesdays, 6:00 AM - 7:30 AM",
        max_participants: 18,
        participants: ["nina@mergington.edu", "luke@mergington.edu"],
    },
    // Arts
    SeedActivity {
        name: "Art Workshop",
        description: "Painting, drawing and mixed-media projects",
        schedule: "Wednesdays, 4:00 PM - 6:00 PM",
        max_participants: 16,
        participants: ["maria@mergington.edu", "sam@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Acting exercises, rehearsals and school productions",
        schedule: "Fridays, 4:00 PM - 6:00 PM",
        max_participants: 20,
        participants: ["isabella@mergington.edu", "thomas@mergington.edu"],
    },
    // Intellectual
    SeedActivity {
        name: "Science Club",
        description: "Hands-on experiments, guest talks and science fairs",
        schedule: "Thursdays, 4:30 PM - 6:00 PM",
        max_participants: 20,
        participants: ["oliver@mergington.edu", "zoe@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Society",
        description: "Formal debates, public speaking and reasoning skills",
        schedule: "Mondays, 4:00 PM - 5:30 PM",
        max_participants: 24,
        participants: ["harry@mergington.edu", "emma.k@mergington.edu"],
    },
];

/// The activities every fresh process starts with, in display order.
pub fn seed_activities() -> Vec<(String, Activity)> {
    SEED_ACTIVITIES
        .iter()
        .map(|s| {
            let activity = Activity::new(s.description, s.schedule, s.max_participants)
                .with_participants(s.participants);
            (s.name.to_string(), activity)
        })
        .collect()
}
