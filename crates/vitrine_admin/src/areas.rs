//! Business areas editor.

use crate::feedback;
use vitrine_client::ApiClient;
use vitrine_core::{Area, AreaDraft};
use vitrine_picker::Notifications;

/// Confirmation text shown before an area is deleted.
pub const CONFIRM_DELETE_AREA: &str = "Tem certeza que deseja excluir esta área?";

/// An open create or edit form.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct AreaForm {
    /// `None` for a new area
    id: Option<String>,
    draft: AreaDraft,
}

impl AreaForm {
    /// Editable fields.
    pub fn draft_mut(&mut self) -> &mut AreaDraft {
        &mut self.draft
    }

    /// The form creates a new area on save.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

/// List and form state for the areas admin page.
#[derive(Debug)]
pub struct AreasEditor {
    client: ApiClient,
    areas: Vec<Area>,
    form: Option<AreaForm>,
    pending_delete: Option<String>,
    busy: bool,
    notifications: Notifications,
}

impl AreasEditor {
    /// Empty editor; call [`load`](Self::load) to fill it.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            areas: Vec::new(),
            form: None,
            pending_delete: None,
            busy: false,
            notifications: Notifications::default(),
        }
    }

    /// Areas sorted by display order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Open form, if any.
    pub fn form(&self) -> Option<&AreaForm> {
        self.form.as_ref()
    }

    /// Open form, for editing.
    pub fn form_mut(&mut self) -> Option<&mut AreaForm> {
        self.form.as_mut()
    }

    /// A request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Pending notifications.
    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Reload the list.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.busy = true;
        let result = self.client.list_areas().await;
        self.busy = false;
        match result {
            Ok(mut areas) => {
                areas.sort_by_key(|a| a.draft.order);
                self.areas = areas;
            }
            Err(e) => feedback::report(&mut self.notifications, "Erro ao carregar áreas", &e),
        }
    }

    /// Open an empty form placed after the existing areas.
    pub fn open_new(&mut self) {
        let draft = AreaDraft {
            order: self.areas.len() as i32,
            ..AreaDraft::default()
        };
        self.form = Some(AreaForm { id: None, draft });
    }

    /// Open the form on an existing area.
    pub fn open_existing(&mut self, id: &str) {
        if let Some(area) = self.areas.iter().find(|a| a.id == id) {
            self.form = Some(AreaForm {
                id: Some(area.id.clone()),
                draft: area.draft.clone(),
            });
        }
    }

    /// Close the form without saving.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Toggle the specialty flag on the open form.
    pub fn set_specialty(&mut self, is_specialty: bool) {
        if let Some(form) = self.form.as_mut() {
            form.draft.set_specialty(is_specialty);
        }
    }

    /// Validate and store the open form, then reload.
    #[tracing::instrument(skip(self))]
    pub async fn save(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        form.draft.normalize_specialty();
        if let Err(e) = form.draft.validate() {
            feedback::report(&mut self.notifications, "Erro ao salvar área", &e.into());
            return;
        }
        let form = form.clone();

        self.busy = true;
        let result = match &form.id {
            Some(id) => self.client.update_area(id, &form.draft).await,
            None => self.client.create_area(&form.draft).await,
        };
        self.busy = false;

        match result {
            Ok(_) => {
                let message = if form.is_new() {
                    "Área criada!"
                } else {
                    "Área atualizada!"
                };
                feedback::success(&mut self.notifications, message);
                self.form = None;
                self.load().await;
            }
            Err(e) => feedback::report(&mut self.notifications, "Erro ao salvar área", &e),
        }
    }

    /// Ask for confirmation before deleting.
    pub fn request_delete(&mut self, id: &str) {
        if self.areas.iter().any(|a| a.id == id) {
            self.pending_delete = Some(id.to_string());
        }
    }

    /// Area awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&Area> {
        let id = self.pending_delete.as_deref()?;
        self.areas.iter().find(|a| a.id == id)
    }

    /// Dismiss the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the area awaiting confirmation.
    #[tracing::instrument(skip(self))]
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.busy = true;
        let result = self.client.delete_area(&id).await;
        self.busy = false;
        match result {
            Ok(()) => {
                feedback::success(&mut self.notifications, "Área excluída!");
                self.load().await;
            }
            Err(e) => feedback::report(&mut self.notifications, "Erro ao excluir área", &e),
        }
    }

    /// Flip an area's visibility on the public site.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_active(&mut self, id: &str) {
        let Some(area) = self.areas.iter().find(|a| a.id == id) else {
            return;
        };
        let mut draft = area.draft.clone();
        draft.is_active = !draft.is_active;

        self.busy = true;
        let result = self.client.update_area(id, &draft).await;
        self.busy = false;
        match result {
            Ok(_) => {
                let message = if draft.is_active {
                    "Área ativada"
                } else {
                    "Área desativada"
                };
                feedback::success(&mut self.notifications, message);
                self.load().await;
            }
            Err(e) => feedback::report(&mut self.notifications, "Erro ao atualizar área", &e),
        }
    }
}
