pub use super::event::Entity as Event;
pub use super::event_attendee::Entity as EventAttendee;
pub use super::event_comment::Entity as EventComment;
pub use super::help_request::Entity as HelpRequest;
pub use super::help_request_comment::Entity as HelpRequestComment;
pub use super::help_request_helper::Entity as HelpRequestHelper;
pub use super::notification::Entity as Notification;
pub use super::peer_verification::Entity as PeerVerification;
pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
pub use super::user::Entity as User;
pub use super::volunteer_log::Entity as VolunteerLog;
