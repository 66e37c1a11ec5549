use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{event::EventRepository, team::TeamRepository, user::UserRepository},
    dto::event::{
        AttendanceDto, CreateEventDto, EventDto, EventListDto, EventListItemDto, EventListQuery,
        SearchEventsQuery, SearchEventsResponseDto, SearchPaginationDto, UpdateEventDto,
    },
    error::{auth::AuthError, AppError},
    model::event::{
        CreateEventParams, EventListFilter, EventSearchFilter, EventStatus, UpdateEventParams,
        Visibility,
    },
    util::parse::parse_id,
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event
    ///
    /// Required fields must be non-blank after trimming; the date must parse
    /// as RFC 3339 and not lie in the past (a date equal to now is accepted);
    /// the registration deadline, when given, must fall between now and the
    /// event date. The status is derived from the date at write time.
    ///
    /// # Returns
    /// - `Ok(EventDto)`: The created event with creator embedded
    /// - `Err(AppError)`: Validation or database error
    pub async fn create(&self, user_id: i32, dto: CreateEventDto) -> Result<EventDto, AppError> {
        let title = dto.title.trim().to_string();
        let description = dto.description.trim().to_string();
        let category = dto.category.trim().to_lowercase();
        let location = dto.location.trim().to_string();

        if title.is_empty()
            || description.is_empty()
            || category.is_empty()
            || location.is_empty()
            || dto.date.trim().is_empty()
        {
            return Err(AppError::BadRequest(
                "Missing required fields: Title, Description, Category, Location, and Date are required."
                    .to_string(),
            ));
        }

        let now = Utc::now();
        let date = parse_event_date(&dto.date)?;
        let registration_deadline = dto
            .registration_deadline
            .as_deref()
            .map(parse_deadline)
            .transpose()?;

        validate_event_dates(date, registration_deadline, now)?;

        if let Some(max_attendees) = dto.max_attendees {
            if max_attendees < 1 {
                return Err(AppError::BadRequest(
                    "Max attendees must be a positive number.".to_string(),
                ));
            }
        }

        if let Some(team_id) = dto.team_organizer {
            if TeamRepository::new(self.db).get_by_id(team_id).await?.is_none() {
                return Err(AppError::NotFound("Team not found".to_string()));
            }
        }

        let visibility = dto
            .visibility
            .as_deref()
            .and_then(Visibility::parse)
            .unwrap_or(Visibility::Public);

        let event = EventRepository::new(self.db)
            .create(CreateEventParams {
                title,
                description,
                category,
                location,
                date,
                registration_deadline,
                created_by: user_id,
                team_organizer: dto.team_organizer,
                max_attendees: dto.max_attendees,
                status: EventStatus::for_date(date, now),
                visibility,
            })
            .await?;

        self.to_dto(event).await
    }

    /// Gets a cursor-paginated page of events
    pub async fn list(&self, query: EventListQuery) -> Result<EventListDto, AppError> {
        let cursor = query
            .cursor
            .as_deref()
            .map(|cursor| parse_id(cursor, "cursor"))
            .transpose()?;

        let events = EventRepository::new(self.db)
            .list(EventListFilter {
                category: query.category.map(|category| category.to_lowercase()),
                location: query.location.map(|location| location.trim().to_string()),
                // Unknown status values are ignored rather than rejected.
                status: query
                    .status
                    .filter(|status| EventStatus::parse(status).is_some()),
                cursor,
                limit: query.limit,
                descending: query.order == "desc",
            })
            .await?;

        let next_cursor = events.last().map(|event| event.id);

        let mut items = Vec::new();
        for event in events {
            if let Some(item) = self.to_list_item(event).await? {
                items.push(item);
            }
        }

        Ok(EventListDto {
            events: items,
            next_cursor,
        })
    }

    /// Searches events with offset pagination
    ///
    /// Returns the search endpoint's own response contract rather than the
    /// shared envelope.
    pub async fn search(
        &self,
        query: SearchEventsQuery,
    ) -> Result<SearchEventsResponseDto, AppError> {
        let page = query.page.max(1);
        let limit = query.limit.max(1);

        let date_from = query
            .date
            .as_deref()
            .map(|date| {
                DateTime::parse_from_rfc3339(date.trim())
                    .map(|date| date.with_timezone(&Utc))
                    .map_err(|_| AppError::BadRequest("Invalid date format".to_string()))
            })
            .transpose()?;

        let (events, total) = EventRepository::new(self.db)
            .search(EventSearchFilter {
                query: query.query,
                category: query.category,
                location: query.location,
                status: query.status,
                date_from,
                page,
                limit,
            })
            .await?;

        let mut data = Vec::new();
        for event in events {
            if let Some(item) = self.to_list_item(event).await? {
                data.push(item);
            }
        }

        Ok(SearchEventsResponseDto {
            success: true,
            data,
            pagination: SearchPaginationDto {
                total,
                page,
                limit,
                total_pages: total.div_ceil(limit),
                has_next_page: page * limit < total,
                has_prev_page: page > 1,
            },
        })
    }

    pub async fn get(&self, event_id: i32) -> Result<EventDto, AppError> {
        let Some(event) = EventRepository::new(self.db).get_by_id(event_id).await? else {
            return Err(AppError::NotFound("Event does not exist".to_string()));
        };

        self.to_dto(event).await
    }

    /// Updates an event owned by the acting user
    ///
    /// Only provided fields are written; the status is recomputed from the
    /// effective date so it stays consistent with the rest of the record.
    pub async fn update(
        &self,
        event_id: i32,
        user_id: i32,
        dto: UpdateEventDto,
    ) -> Result<EventDto, AppError> {
        let repo = EventRepository::new(self.db);
        let Some(event) = repo.get_by_id(event_id).await? else {
            return Err(AppError::NotFound("Event does not exist".to_string()));
        };

        ensure_owner(event.created_by, user_id)?;

        let now = Utc::now();
        let mut params = UpdateEventParams::default();

        if let Some(title) = dto.title {
            params.title = Some(title.trim().to_string());
        }
        if let Some(description) = dto.description {
            params.description = Some(description.trim().to_string());
        }
        if let Some(category) = dto.category {
            params.category = Some(category.trim().to_lowercase());
        }
        if let Some(location) = dto.location {
            params.location = Some(location.trim().to_string());
        }
        if let Some(date) = dto.date {
            let date = parse_event_date(&date)?;
            if date < now {
                return Err(AppError::BadRequest(
                    "Event date cannot be in the past".to_string(),
                ));
            }
            params.date = Some(date);
        }
        if let Some(max_attendees) = dto.max_attendees {
            if max_attendees < 1 {
                return Err(AppError::BadRequest(
                    "Max attendees must be a positive number.".to_string(),
                ));
            }
            params.max_attendees = Some(max_attendees);
        }
        if let Some(visibility) = dto.visibility {
            let Some(visibility) = Visibility::parse(&visibility) else {
                return Err(AppError::BadRequest(
                    "Invalid visibility value".to_string(),
                ));
            };
            params.visibility = Some(visibility);
        }

        params.status = Some(EventStatus::for_date(
            params.date.unwrap_or(event.date),
            now,
        ));

        let updated = repo.update(event_id, params).await?;

        self.to_dto(updated).await
    }

    /// Deletes an event owned by the acting user
    pub async fn delete(&self, event_id: i32, user_id: i32) -> Result<i32, AppError> {
        let repo = EventRepository::new(self.db);
        let Some(event) = repo.get_by_id(event_id).await? else {
            return Err(AppError::NotFound("Event does not exist".to_string()));
        };

        ensure_owner(event.created_by, user_id)?;

        repo.delete(event_id).await?;

        Ok(event_id)
    }

    /// Adds the acting user to the attendee set
    ///
    /// # Returns
    /// - `Ok(AttendanceDto)`: Updated attendee set
    /// - `Err(AppError::BadRequest)`: Already attending, or the event is full
    /// - `Err(AppError::NotFound)`: Event does not exist
    pub async fn attend(&self, event_id: i32, user_id: i32) -> Result<AttendanceDto, AppError> {
        let repo = EventRepository::new(self.db);
        let Some(event) = repo.get_by_id(event_id).await? else {
            return Err(AppError::NotFound("Event does not exist".to_string()));
        };

        if repo.is_attending(event_id, user_id).await? {
            return Err(AppError::BadRequest(
                "Already attending this event".to_string(),
            ));
        }

        if let Some(max_attendees) = event.max_attendees {
            if max_attendees > 0 && repo.count_attendees(event_id).await? >= max_attendees as u64 {
                return Err(AppError::BadRequest("Event is full".to_string()));
            }
        }

        repo.add_attendee(event_id, user_id).await?;

        Ok(AttendanceDto {
            id: event_id,
            attendees: repo.attendee_ids(event_id).await?,
        })
    }

    /// Removes the acting user from the attendee set
    pub async fn leave(&self, event_id: i32, user_id: i32) -> Result<AttendanceDto, AppError> {
        let repo = EventRepository::new(self.db);
        if repo.get_by_id(event_id).await?.is_none() {
            return Err(AppError::NotFound("Event does not exist".to_string()));
        }

        if !repo.is_attending(event_id, user_id).await? {
            return Err(AppError::BadRequest(
                "Not attending this event".to_string(),
            ));
        }

        repo.remove_attendee(event_id, user_id).await?;

        Ok(AttendanceDto {
            id: event_id,
            attendees: repo.attendee_ids(event_id).await?,
        })
    }

    async fn to_dto(&self, event: entity::event::Model) -> Result<EventDto, AppError> {
        let Some(creator) = UserRepository::new(self.db).find_by_id(event.created_by).await? else {
            return Err(AppError::NotFound("Event creator not found".to_string()));
        };

        let attendees = EventRepository::new(self.db).attendee_ids(event.id).await?;

        Ok(EventDto {
            id: event.id,
            title: event.title,
            description: event.description,
            category: event.category,
            location: event.location,
            date: event.date,
            registration_deadline: event.registration_deadline,
            created_by: creator.summary(),
            team_organizer: event.team_organizer,
            max_attendees: event.max_attendees,
            status: event.status,
            visibility: event.visibility,
            attendees,
            created_at: event.created_at,
            updated_at: event.updated_at,
        })
    }

    async fn to_list_item(
        &self,
        event: entity::event::Model,
    ) -> Result<Option<EventListItemDto>, AppError> {
        let creator = UserRepository::new(self.db).find_by_id(event.created_by).await?;

        Ok(creator.map(|creator| EventListItemDto {
            id: event.id,
            title: event.title,
            category: event.category,
            location: event.location,
            date: event.date,
            status: event.status,
            created_by: creator.summary(),
        }))
    }
}

fn ensure_owner(created_by: i32, user_id: i32) -> Result<(), AppError> {
    if created_by != user_id {
        return Err(AuthError::Forbidden("Not authorized to perform this action".to_string()).into());
    }
    Ok(())
}

fn parse_event_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| AppError::BadRequest("Invalid event date format.".to_string()))
}

fn parse_deadline(value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| AppError::BadRequest("Invalid registration deadline format.".to_string()))
}

/// Validates the date ordering rules for event creation.
///
/// The event date must not lie before `now` (equality is allowed); the
/// deadline, when present, must not lie before `now` nor after the event date.
pub(crate) fn validate_event_dates(
    date: DateTime<Utc>,
    registration_deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    if date < now {
        return Err(AppError::BadRequest(
            "Event date cannot be in the past.".to_string(),
        ));
    }

    if let Some(deadline) = registration_deadline {
        if deadline < now {
            return Err(AppError::BadRequest(
                "Registration deadline cannot be in the past.".to_string(),
            ));
        }
        if deadline > date {
            return Err(AppError::BadRequest(
                "Registration deadline cannot be after the event date.".to_string(),
            ));
        }
    }

    Ok(())
}
