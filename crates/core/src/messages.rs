//! Text of the notifications posted to the moderation channel.

use crate::submission::ContactSubmission;
use crate::types::DbId;

/// Build the link a moderator follows to make an event public.
///
/// `public_api_url` is the externally reachable API base, e.g.
/// `https://events.example.org/api/v1`.
pub fn auth_link(public_api_url: &str, event_id: DbId, auth_code: &str) -> String {
    format!(
        "{}/event/update/{event_id}?auth_code={auth_code}",
        public_api_url.trim_end_matches('/')
    )
}

/// Message announcing a newly submitted event.
pub fn new_event_message(title: &str, organizer: &str, auth_link: &str) -> String {
    format!(
        "A new event has been submitted.\n\
         Title: {title}\n\
         Organizer: {organizer}\n\
         Authentication link: {auth_link}"
    )
}

/// Message relaying a contact form submission.
pub fn contact_message(contact: &ContactSubmission) -> String {
    format!(
        "New contact inquiry\n\
         Name: {}\n\
         Email: {}\n\
         Message: {}",
        contact.name, contact.email, contact.message
    )
}
