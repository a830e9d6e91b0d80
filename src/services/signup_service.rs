use axum::http::StatusCode;
use thiserror::Error;

use crate::database::ActivityStore;
use crate::models::{Activity, ActivityDirectory};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Participant not found")]
    ParticipantNotFound,
    #[error("Missing email query parameter")]
    MissingEmail,
    #[error("Activity already exists")]
    DuplicateActivity,
}

impl SignupError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ActivityNotFound | Self::ParticipantNotFound => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp | Self::ActivityFull | Self::MissingEmail => {
                StatusCode::BAD_REQUEST
            }
            Self::DuplicateActivity => StatusCode::CONFLICT,
        }
    }
}

pub fn list_activities(store: &ActivityStore) -> ActivityDirectory {
    store.snapshot()
}

pub fn get_activity(store: &ActivityStore, activity_name: &str) -> Result<Activity, SignupError> {
    store
        .get(activity_name)
        .ok_or(SignupError::ActivityNotFound)
}

/// Registers an activity outside the HTTP surface (seeding, fixtures).
pub fn add_activity(
    store: &ActivityStore,
    activity_name: &str,
    activity: Activity,
) -> Result<(), SignupError> {
    if store.insert(activity_name, activity) {
        Ok(())
    } else {
        Err(SignupError::DuplicateActivity)
    }
}

/// Appends `email` to the activity's participants and returns the
/// confirmation message. The duplicate check runs before the capacity check.
pub fn signup(store: &ActivityStore, activity_name: &str, email: &str) -> Result<String, SignupError> {
    let spots_left = store
        .update(activity_name, |activity| {
            if activity.has_participant(email) {
                return Err(SignupError::AlreadySignedUp);
            }
            if activity.is_full() {
                return Err(SignupError::ActivityFull);
            }
            activity.participants.push(email.to_string());
            Ok(activity.spots_left())
        })
        .ok_or(SignupError::ActivityNotFound)??;

    tracing::info!(activity = %activity_name, email = %email, spots_left, "signup_ok");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Removes `email` from the activity, keeping the order of the remaining
/// participants.
pub fn withdraw(store: &ActivityStore, activity_name: &str, email: &str) -> Result<String, SignupError> {
    store
        .update(activity_name, |activity| {
            let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                return Err(SignupError::ParticipantNotFound);
            };
            activity.participants.remove(pos);
            Ok(())
        })
        .ok_or(SignupError::ActivityNotFound)??;

    tracing::info!(activity = %activity_name, email = %email, "withdraw_ok");
    Ok(format!("Removed {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ART: &str = "Art Workshop";

    fn store_with_single_seat() -> ActivityStore {
        let store = ActivityStore::new();
        add_activity(&store, "Solo Recital", Activity::new("temp", "now", 1)).unwrap();
        store
    }

    #[test]
    fn signup_then_duplicate_then_withdraw_twice() {
        let store = ActivityStore::seeded();
        let email = "x@y.com";

        let msg = signup(&store, ART, email).unwrap();
        assert_eq!(msg, "Signed up x@y.com for Art Workshop");
        let art = get_activity(&store, ART).unwrap();
        assert_eq!(art.participants.len(), 3);
        assert!(art.has_participant(email));

        assert_eq!(signup(&store, ART, email), Err(SignupError::AlreadySignedUp));

        let msg = withdraw(&store, ART, email).unwrap();
        assert_eq!(msg, "Removed x@y.com from Art Workshop");
        assert_eq!(get_activity(&store, ART).unwrap().participants.len(), 2);

        assert_eq!(withdraw(&store, ART, email), Err(SignupError::ParticipantNotFound));
    }

    #[test]
    fn signup_and_withdraw_restore_exact_order() {
        let store = ActivityStore::seeded();
        signup(&store, ART, "a@mergington.edu").unwrap();
        let before = get_activity(&store, ART).unwrap().participants;

        signup(&store, ART, "b@mergington.edu").unwrap();
        withdraw(&store, ART, "b@mergington.edu").unwrap();
        assert_eq!(get_activity(&store, ART).unwrap().participants, before);

        // removing from the middle keeps the others in signup order
        withdraw(&store, ART, "sam@mergington.edu").unwrap();
        assert_eq!(
            get_activity(&store, ART).unwrap().participants,
            ["maria@mergington.edu", "a@mergington.edu"]
        );
    }

    #[test]
    fn full_activity_rejects_new_emails() {
        let store = store_with_single_seat();
        signup(&store, "Solo Recital", "first@me.com").unwrap();

        assert_eq!(
            signup(&store, "Solo Recital", "second@me.com"),
            Err(SignupError::ActivityFull)
        );
        // duplicate is reported before capacity
        assert_eq!(
            signup(&store, "Solo Recital", "first@me.com"),
            Err(SignupError::AlreadySignedUp)
        );
    }

    #[test]
    fn unknown_activity_is_not_found() {
        let store = ActivityStore::seeded();
        assert_eq!(signup(&store, "Knitting", "a@b.c"), Err(SignupError::ActivityNotFound));
        assert_eq!(withdraw(&store, "Knitting", "a@b.c"), Err(SignupError::ActivityNotFound));
        assert_eq!(get_activity(&store, "Knitting"), Err(SignupError::ActivityNotFound));
    }

    #[test]
    fn capacity_holds_under_mixed_sequence() {
        let store = ActivityStore::new();
        add_activity(&store, "Tiny", Activity::new("", "", 3)).unwrap();

        for i in 0..10 {
            let _ = signup(&store, "Tiny", &format!("s{i}@mergington.edu"));
            if i % 4 == 0 {
                let _ = withdraw(&store, "Tiny", &format!("s{}@mergington.edu", i / 2));
            }
            let tiny = get_activity(&store, "Tiny").unwrap();
            assert!(tiny.participants.len() <= tiny.max_participants);
        }
    }

    #[test]
    fn parallel_signups_fill_exactly_to_capacity() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Barrier;

        let store = ActivityStore::new();
        add_activity(&store, "Crowded", Activity::new("", "", 5)).unwrap();
        let barrier = Barrier::new(64);
        let accepted = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for i in 0..64 {
                let (store, barrier, accepted) = (&store, &barrier, &accepted);
                scope.spawn(move || {
                    barrier.wait();
                    if signup(store, "Crowded", &format!("e{}", i % 8)).is_ok() {
                        accepted.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        let crowded = get_activity(&store, "Crowded").unwrap();
        assert_eq!(crowded.participants.len(), 5);
        assert_eq!(accepted.load(Ordering::SeqCst), 5);

        let mut unique = crowded.participants.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn add_activity_rejects_existing_name() {
        let store = ActivityStore::seeded();
        let err = add_activity(&store, ART, Activity::new("", "", 1)).unwrap_err();
        assert_eq!(err, SignupError::DuplicateActivity);
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(list_activities(&store).len(), 9);
    }

    #[test]
    fn error_statuses() {
        assert_eq!(SignupError::ActivityNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(SignupError::ParticipantNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(SignupError::AlreadySignedUp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(SignupError::ActivityFull.status(), StatusCode::BAD_REQUEST);
        assert_eq!(SignupError::MissingEmail.status(), StatusCode::BAD_REQUEST);
    }
}
