use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::event::{
    CreateEventParams, EventListFilter, EventSearchFilter, UpdateEventParams,
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event
    ///
    /// # Arguments
    /// - `param`: Validated creation parameters (status already derived)
    ///
    /// # Returns
    /// - `Ok(Model)`: The created event
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateEventParams) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();

        entity::event::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            category: ActiveValue::Set(param.category),
            location: ActiveValue::Set(param.location),
            date: ActiveValue::Set(param.date),
            registration_deadline: ActiveValue::Set(param.registration_deadline),
            created_by: ActiveValue::Set(param.created_by),
            team_organizer: ActiveValue::Set(param.team_organizer),
            max_attendees: ActiveValue::Set(param.max_attendees),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            visibility: ActiveValue::Set(param.visibility.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an event by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The event
    /// - `Ok(None)`: Event not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Gets a page of events using id-cursor pagination
    ///
    /// Events are ordered by id in the cursor direction; the cursor excludes
    /// the row it points at, so passing the last id of a page yields the next.
    ///
    /// # Arguments
    /// - `filter`: Optional category/location/status filters plus cursor state
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: At most `limit` events
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self, filter: EventListFilter) -> Result<Vec<entity::event::Model>, DbErr> {
        let mut query = entity::prelude::Event::find();

        if let Some(category) = filter.category {
            query = query.filter(entity::event::Column::Category.eq(category));
        }
        if let Some(location) = filter.location {
            query = query.filter(entity::event::Column::Location.eq(location));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::event::Column::Status.eq(status));
        }

        if let Some(cursor) = filter.cursor {
            query = if filter.descending {
                query.filter(entity::event::Column::Id.lt(cursor))
            } else {
                query.filter(entity::event::Column::Id.gt(cursor))
            };
        }

        query = if filter.descending {
            query.order_by_desc(entity::event::Column::Id)
        } else {
            query.order_by_asc(entity::event::Column::Id)
        };

        query.limit(filter.limit).all(self.db).await
    }

    /// Searches events with offset pagination
    ///
    /// The text query matches title or description substrings; remaining
    /// filters are exact, except `date_from` which lower-bounds the event
    /// date. Results are ordered by date ascending.
    ///
    /// # Arguments
    /// - `filter`: Search filters; `page` is one-indexed
    ///
    /// # Returns
    /// - `Ok((events, total))`: Page of events and the total match count
    /// - `Err(DbErr)`: Database error
    pub async fn search(
        &self,
        filter: EventSearchFilter,
    ) -> Result<(Vec<entity::event::Model>, u64), DbErr> {
        let mut condition = Condition::all();

        if let Some(query) = filter.query {
            condition = condition.add(
                Condition::any()
                    .add(entity::event::Column::Title.contains(&query))
                    .add(entity::event::Column::Description.contains(&query)),
            );
        }
        if let Some(category) = filter.category {
            condition = condition.add(entity::event::Column::Category.eq(category));
        }
        if let Some(location) = filter.location {
            condition = condition.add(entity::event::Column::Location.eq(location));
        }
        if let Some(status) = filter.status {
            condition = condition.add(entity::event::Column::Status.eq(status));
        }
        if let Some(date_from) = filter.date_from {
            condition = condition.add(entity::event::Column::Date.gte(date_from));
        }

        let paginator = entity::prelude::Event::find()
            .filter(condition)
            .order_by_asc(entity::event::Column::Date)
            .paginate(self.db, filter.limit);

        let total = paginator.num_items().await?;
        let page = filter.page.max(1) - 1;
        let events = paginator.fetch_page(page).await?;

        Ok((events, total))
    }

    /// Updates an event
    ///
    /// Only provided fields are written; `updated_at` is always refreshed.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated event
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn update(
        &self,
        id: i32,
        param: UpdateEventParams,
    ) -> Result<entity::event::Model, DbErr> {
        let event = entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Event {} not found", id)))?;

        let mut active_model: entity::event::ActiveModel = event.into();

        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(category) = param.category {
            active_model.category = ActiveValue::Set(category);
        }
        if let Some(location) = param.location {
            active_model.location = ActiveValue::Set(location);
        }
        if let Some(date) = param.date {
            active_model.date = ActiveValue::Set(date);
        }
        if let Some(max_attendees) = param.max_attendees {
            active_model.max_attendees = ActiveValue::Set(Some(max_attendees));
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(visibility) = param.visibility {
            active_model.visibility = ActiveValue::Set(visibility.as_str().to_string());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Deletes an event by ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets the user ids attending an event
    pub async fn attendee_ids(&self, event_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::EventAttendee::find()
            .filter(entity::event_attendee::Column::EventId.eq(event_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }

    /// Counts attendees of an event
    pub async fn count_attendees(&self, event_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EventAttendee::find()
            .filter(entity::event_attendee::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }

    /// Checks whether a user is attending an event
    pub async fn is_attending(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::EventAttendee::find()
            .filter(entity::event_attendee::Column::EventId.eq(event_id))
            .filter(entity::event_attendee::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a user to the attendee set
    ///
    /// The composite primary key makes a duplicate insert fail at the store
    /// level, so a racing double-join cannot produce two memberships.
    pub async fn add_attendee(&self, event_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::event_attendee::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    /// Removes a user from the attendee set
    pub async fn remove_attendee(&self, event_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::EventAttendee::delete_many()
            .filter(entity::event_attendee::Column::EventId.eq(event_id))
            .filter(entity::event_attendee::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
