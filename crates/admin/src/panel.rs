//! Homepage content admin panel.
//!
//! CRUD orchestration for the heterogeneous content items (achievements,
//! recognitions, magazine features, sponsors) on top of
//! [`OptimisticCollection`], plus the add/edit form session the admin
//! screen keeps. Every outcome is reported as a [`Notice`].

use chrono::Utc;

use folio_core::content::{self, ContentDraft, ContentItem, KIND_ACHIEVEMENT};
use folio_core::types::{DocId, Timestamp};
use folio_feed::OptimisticCollection;
use folio_store::{Query, RemoteStore};

use crate::notice::Notice;

/// What the form session is currently doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMode {
    Idle,
    /// Adding a new item.
    Adding,
    /// Editing the item with this id; the original creation time is kept
    /// so an edit does not reposition the item in creation order.
    Editing { id: DocId, created_at: Timestamp },
}

/// Editable form fields for one content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentForm {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

impl Default for ContentForm {
    fn default() -> Self {
        Self {
            kind: KIND_ACHIEVEMENT.to_string(),
            title: String::new(),
            description: String::new(),
            image: String::new(),
            link: String::new(),
        }
    }
}

/// Admin panel state: the cached item list plus the form session.
pub struct ContentAdminPanel<S> {
    collection: OptimisticCollection<ContentItem, S>,
    mode: PanelMode,
    /// The form being edited. Bound directly by the UI layer.
    pub form: ContentForm,
}

impl<S> ContentAdminPanel<S>
where
    S: RemoteStore<ContentItem>,
{
    pub fn new(store: S) -> Self {
        Self {
            collection: OptimisticCollection::new(store),
            mode: PanelMode::Idle,
            form: ContentForm::default(),
        }
    }

    /// Fetch the content list, newest first. Returns an error notice on
    /// failure; the previously loaded list is kept.
    pub async fn load(&self) -> Option<Notice> {
        match self.collection.refresh(&Query::newest_first()).await {
            Ok(_) => None,
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch homepage content");
                Some(Notice::error(
                    "Error",
                    "Failed to fetch homepage content.",
                ))
            }
        }
    }

    /// Start adding a new item with default form values.
    pub fn begin_add(&mut self) {
        self.form = ContentForm::default();
        self.mode = PanelMode::Adding;
    }

    /// Start editing an existing item, copying its fields into the form.
    pub fn begin_edit(&mut self, id: &DocId) -> Result<(), Notice> {
        let item = self.collection.get(id).ok_or_else(|| {
            Notice::error("Error", "That content item is no longer loaded.")
        })?;
        self.form = ContentForm {
            kind: item.kind,
            title: item.title,
            description: item.description,
            image: item.image,
            link: item.link,
        };
        self.mode = PanelMode::Editing {
            id: item.id,
            created_at: item.created_at,
        };
        Ok(())
    }

    /// Abandon the form session.
    pub fn cancel(&mut self) {
        self.mode = PanelMode::Idle;
        self.form = ContentForm::default();
    }

    /// Save the form session: create in add mode, overwrite in edit mode.
    ///
    /// Validation (title and kind required) runs synchronously and never
    /// reaches the store. On success the session is closed.
    pub async fn save(&mut self) -> Notice {
        let draft = ContentDraft {
            kind: self.form.kind.clone(),
            title: self.form.title.clone(),
            description: self.form.description.clone(),
            image: self.form.image.clone(),
            link: self.form.link.clone(),
            created_at: Utc::now(),
        };
        if let Err(err) = content::validate_draft(&draft) {
            return Notice::error("Missing Fields", err.to_string());
        }

        match self.mode.clone() {
            PanelMode::Adding => match self.collection.create(draft).await {
                Ok(_) => {
                    self.cancel();
                    Notice::success("Content added.")
                }
                Err(err) => {
                    tracing::error!(error = %err, "Failed to save content");
                    Notice::error("Error", "Failed to save content.")
                }
            },
            PanelMode::Editing { id, created_at } => {
                let updated = ContentItem {
                    id,
                    kind: draft.kind,
                    title: draft.title,
                    description: draft.description,
                    image: draft.image,
                    link: draft.link,
                    created_at,
                };
                match self.collection.update(updated).await {
                    Ok(()) => {
                        self.cancel();
                        Notice::success("Content updated.")
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to save content");
                        Notice::error("Error", "Failed to save content.")
                    }
                }
            }
            PanelMode::Idle => Notice::error("Error", "Nothing to save."),
        }
    }

    /// Delete an item. Confirmation belongs to the UI layer.
    pub async fn delete(&self, id: &DocId) -> Notice {
        match self.collection.remove(id).await {
            Ok(()) => Notice::success("Content deleted."),
            Err(err) => {
                tracing::error!(error = %err, "Failed to delete content");
                Notice::error("Error", "Failed to delete content.")
            }
        }
    }

    pub fn mode(&self) -> &PanelMode {
        &self.mode
    }

    pub fn items(&self) -> Vec<ContentItem> {
        self.collection.items()
    }

    pub fn is_loading(&self) -> bool {
        self.collection.is_loading()
    }

    /// The underlying collection, for consumers that want snapshots.
    pub fn collection(&self) -> &OptimisticCollection<ContentItem, S> {
        &self.collection
    }
}
