//! Row models for the relational store.
//!
//! These mirror the listing tables one-to-one and are distinct from the
//! document-store entities in `folio-core`: the public feed and the static
//! homepage listings live in relational tables with BIGSERIAL keys.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::DbId;

use crate::record::Record;

// ---------------------------------------------------------------------------
// Feed projects
// ---------------------------------------------------------------------------

/// A row from the `projects` table: the paginated public feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FeedProject {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub image: String,
    pub url: Option<String>,
    pub author: String,
    pub date: String,
}

/// Insert payload for a feed project row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedProjectDraft {
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub image: String,
    pub url: Option<String>,
    pub author: String,
    pub date: String,
}

impl Record for FeedProject {
    type Id = DbId;
    type Draft = FeedProjectDraft;

    const ENTITY: &'static str = "feed project";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_draft(id: DbId, draft: FeedProjectDraft) -> Self {
        FeedProject {
            id,
            title: draft.title,
            description: draft.description,
            content: draft.content,
            image: draft.image,
            url: draft.url,
            author: draft.author,
            date: draft.date,
        }
    }
}

// ---------------------------------------------------------------------------
// Static listing rows
// ---------------------------------------------------------------------------

/// A row from the `achievements` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Achievement {
    pub id: DbId,
    pub icon: String,
    pub title: String,
    pub link: String,
    pub year: i32,
}

/// Insert payload for an achievement row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAchievement {
    pub icon: String,
    pub title: String,
    pub link: String,
    pub year: i32,
}

impl Record for Achievement {
    type Id = DbId;
    type Draft = CreateAchievement;

    const ENTITY: &'static str = "achievement";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_draft(id: DbId, draft: CreateAchievement) -> Self {
        Achievement {
            id,
            icon: draft.icon,
            title: draft.title,
            link: draft.link,
            year: draft.year,
        }
    }
}

/// A row from the `magazines` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Magazine {
    pub id: DbId,
    pub title: String,
    pub image_url: String,
    pub website_url: String,
}

/// Insert payload for a magazine row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMagazine {
    pub title: String,
    pub image_url: String,
    pub website_url: String,
}

impl Record for Magazine {
    type Id = DbId;
    type Draft = CreateMagazine;

    const ENTITY: &'static str = "magazine";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_draft(id: DbId, draft: CreateMagazine) -> Self {
        Magazine {
            id,
            title: draft.title,
            image_url: draft.image_url,
            website_url: draft.website_url,
        }
    }
}

/// A row from the `recognitions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Recognition {
    pub id: DbId,
    pub title: String,
    pub link: String,
    pub year: i32,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

/// Insert payload for a recognition row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecognition {
    pub title: String,
    pub link: String,
    pub year: i32,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

impl Record for Recognition {
    type Id = DbId;
    type Draft = CreateRecognition;

    const ENTITY: &'static str = "recognition";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_draft(id: DbId, draft: CreateRecognition) -> Self {
        Recognition {
            id,
            title: draft.title,
            link: draft.link,
            year: draft.year,
            month: draft.month,
            day: draft.day,
        }
    }
}

/// A row from the `sponsors` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Sponsor {
    pub id: DbId,
    pub name: String,
    pub image_url: String,
    pub website_url: String,
}

/// Insert payload for a sponsor row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSponsor {
    pub name: String,
    pub image_url: String,
    pub website_url: String,
}

impl Record for Sponsor {
    type Id = DbId;
    type Draft = CreateSponsor;

    const ENTITY: &'static str = "sponsor";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_draft(id: DbId, draft: CreateSponsor) -> Self {
        Sponsor {
            id,
            name: draft.name,
            image_url: draft.image_url,
            website_url: draft.website_url,
        }
    }
}
