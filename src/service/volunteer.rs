//! Volunteer-hour logging and peer verification.
//!
//! A claim starts unverified with no verdicts. Any peer may submit exactly one
//! approved/rejected verdict per claim; once two distinct peers have approved,
//! the claim is permanently verified. The leaderboard and certificates are
//! derived from verified claims only.

use sea_orm::DatabaseConnection;

use crate::{
    data::{event::EventRepository, user::UserRepository, volunteer_log::VolunteerLogRepository},
    dto::{
        event::EventSummaryDto,
        volunteer::{
            CertificatesDto, LeaderboardEntryDto, LogHoursDto, PeerVerificationDto,
            VolunteerLogDto,
        },
    },
    error::AppError,
    model::volunteer_log::{VerificationStatus, VERIFICATION_THRESHOLD},
    util::parse::parse_id,
};

/// Verified-hour thresholds mapped to certificate names.
const CERTIFICATE_THRESHOLDS: [(f64, &str); 3] = [
    (20.0, "Volunteer Bronze Badge"),
    (50.0, "Volunteer Silver Badge"),
    (100.0, "Volunteer Gold Badge"),
];

pub struct VolunteerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VolunteerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an hours claim against an event.
    ///
    /// The event reference must resolve; the hours value is stored as
    /// submitted, and nothing prevents a user from logging the same event
    /// more than once.
    ///
    /// # Returns
    /// - `Ok(VolunteerLogDto)`: The created claim, unverified
    /// - `Err(AppError::BadRequest)`: Malformed event id
    /// - `Err(AppError::NotFound)`: Event does not exist
    pub async fn log_hours(&self, user_id: i32, dto: LogHoursDto) -> Result<VolunteerLogDto, AppError> {
        let event_id = parse_id(&dto.event, "event")?;

        if EventRepository::new(self.db).get_by_id(event_id).await?.is_none() {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        let log = VolunteerLogRepository::new(self.db)
            .create(user_id, event_id, dto.hours)
            .await?;

        self.to_dto(log).await
    }

    /// Gets all logs with user and event summaries embedded.
    pub async fn all_logs(&self) -> Result<Vec<VolunteerLogDto>, AppError> {
        let logs = VolunteerLogRepository::new(self.db).get_all().await?;

        let mut dtos = Vec::new();
        for log in logs {
            dtos.push(self.to_dto(log).await?);
        }

        Ok(dtos)
    }

    /// Gets the acting user's logs.
    pub async fn user_logs(&self, user_id: i32) -> Result<Vec<VolunteerLogDto>, AppError> {
        let logs = VolunteerLogRepository::new(self.db).get_by_user(user_id).await?;

        let mut dtos = Vec::new();
        for log in logs {
            dtos.push(self.to_dto(log).await?);
        }

        Ok(dtos)
    }

    /// Gets one log with its verdicts.
    pub async fn get_log(&self, log_id: i32) -> Result<VolunteerLogDto, AppError> {
        let Some(log) = VolunteerLogRepository::new(self.db).get_by_id(log_id).await? else {
            return Err(AppError::NotFound("Volunteer log not found".to_string()));
        };

        self.to_dto(log).await
    }

    /// Records a peer verdict on a claim.
    ///
    /// Each identity gets one verdict per claim; the first wins. When the
    /// approval count reaches the threshold the claim flips to verified, a
    /// transition that is never re-evaluated downward.
    ///
    /// # Returns
    /// - `Ok(VolunteerLogDto)`: The claim after the verdict landed
    /// - `Err(AppError::BadRequest)`: Unknown verdict value, or this identity
    ///   already submitted one
    /// - `Err(AppError::NotFound)`: Claim does not exist
    pub async fn verify(
        &self,
        log_id: i32,
        user_id: i32,
        status: &str,
    ) -> Result<VolunteerLogDto, AppError> {
        let Some(status) = VerificationStatus::parse(status) else {
            return Err(AppError::BadRequest(
                "Invalid verification status".to_string(),
            ));
        };

        let repo = VolunteerLogRepository::new(self.db);
        let Some(log) = repo.get_by_id(log_id).await? else {
            return Err(AppError::NotFound("Volunteer log not found".to_string()));
        };

        if repo.has_verification_from(log_id, user_id).await? {
            return Err(AppError::BadRequest(
                "You have already verified this log".to_string(),
            ));
        }

        repo.add_verification(log_id, user_id, status).await?;

        if !log.verified && repo.count_approvals(log_id).await? >= VERIFICATION_THRESHOLD {
            repo.set_verified(log_id).await?;
        }

        let Some(log) = repo.get_by_id(log_id).await? else {
            return Err(AppError::NotFound("Volunteer log not found".to_string()));
        };

        self.to_dto(log).await
    }

    /// Top verified-hour totals per user, descending, capped at ten entries.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntryDto>, AppError> {
        let entries = VolunteerLogRepository::new(self.db).leaderboard(10).await?;

        Ok(entries
            .into_iter()
            .map(|entry| LeaderboardEntryDto {
                user: entry.user_id,
                total_hours: entry.total_hours,
            })
            .collect())
    }

    /// Maps the user's verified hours through the certificate thresholds.
    pub async fn certificates(&self, user_id: i32) -> Result<CertificatesDto, AppError> {
        let hours = VolunteerLogRepository::new(self.db)
            .total_verified_hours(user_id)
            .await?;

        let certificates = CERTIFICATE_THRESHOLDS
            .iter()
            .filter(|(threshold, _)| hours >= *threshold)
            .map(|(_, name)| name.to_string())
            .collect();

        Ok(CertificatesDto { hours, certificates })
    }

    async fn to_dto(&self, log: entity::volunteer_log::Model) -> Result<VolunteerLogDto, AppError> {
        let user = UserRepository::new(self.db).find_by_id(log.user_id).await?;
        let event = EventRepository::new(self.db).get_by_id(log.event_id).await?;

        let peer_verifications = VolunteerLogRepository::new(self.db)
            .verifications_for(log.id)
            .await?
            .into_iter()
            .map(|verification| PeerVerificationDto {
                user: verification.user_id,
                status: verification.status,
            })
            .collect();

        Ok(VolunteerLogDto {
            id: log.id,
            user: user.map(|user| user.summary()),
            event: event.map(|event| EventSummaryDto {
                id: event.id,
                title: event.title,
                date: event.date,
                location: event.location,
            }),
            hours: log.hours,
            verified: log.verified,
            peer_verifications,
            created_at: log.created_at,
        })
    }
}
